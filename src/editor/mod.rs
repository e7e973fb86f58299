mod schedule_editor;

pub use schedule_editor::ScheduleEditor;
