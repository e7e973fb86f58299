use std::path::{Path, PathBuf};

use crate::dirty::DirtyTracker;
use crate::error::{AppError, AppResult};
use crate::guard::DirtySource;
use crate::schedule::{Schedule, ScheduleItem};

/// Edit session for one schedule: the live document, its last-saved copy,
/// and the dirty baseline derived from it.
#[derive(Debug, Clone, Default)]
pub struct ScheduleEditor {
    document: Schedule,
    last_saved: Option<Schedule>,
    tracker: DirtyTracker,
    selected: usize,
    path: Option<PathBuf>,
}

impl ScheduleEditor {
    /// A never-saved document, optionally bound to the file it will be saved to.
    pub fn new_document(path: Option<PathBuf>) -> Self {
        Self {
            path,
            ..Self::default()
        }
    }

    /// An existing schedule; it becomes the saved baseline.
    pub fn open(schedule: Schedule, path: Option<PathBuf>) -> Self {
        let mut tracker = DirtyTracker::new();
        tracker.set_saved_state(&schedule);
        Self {
            last_saved: Some(schedule.clone()),
            document: schedule,
            tracker,
            selected: 0,
            path,
        }
    }

    /// Opens `path` if it exists, otherwise starts a new document bound to it.
    pub fn open_or_create(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new_document(Some(path.to_path_buf())));
        }
        let schedule = Schedule::load_from_path(path)?;
        Ok(Self::open(schedule, Some(path.to_path_buf())))
    }

    pub fn document(&self) -> &Schedule {
        &self.document
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn has_saved_baseline(&self) -> bool {
        self.tracker.saved().is_some()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.document.title = title.into();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.document.description = description;
    }

    pub fn push_item(&mut self, item: ScheduleItem) {
        self.document.items.push(item);
    }

    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.document.items.len().saturating_sub(1));
    }

    pub fn select_next(&mut self) -> bool {
        if self.selected + 1 >= self.document.items.len() {
            return false;
        }
        self.selected += 1;
        true
    }

    pub fn select_prev(&mut self) -> bool {
        if self.selected == 0 {
            return false;
        }
        self.selected -= 1;
        true
    }

    /// Swaps the selected item with its predecessor; the selection follows.
    pub fn move_selected_up(&mut self) -> bool {
        if self.selected == 0 || self.selected >= self.document.items.len() {
            return false;
        }
        self.document.items.swap(self.selected, self.selected - 1);
        self.selected -= 1;
        true
    }

    pub fn move_selected_down(&mut self) -> bool {
        if self.selected + 1 >= self.document.items.len() {
            return false;
        }
        self.document.items.swap(self.selected, self.selected + 1);
        self.selected += 1;
        true
    }

    pub fn remove_selected(&mut self) -> Option<ScheduleItem> {
        if self.selected >= self.document.items.len() {
            return None;
        }
        let removed = self.document.items.remove(self.selected);
        self.select(self.selected);
        Some(removed)
    }

    /// Writes the document to its file and makes it the new baseline.
    pub fn save(&mut self) -> AppResult<()> {
        let Some(path) = self.path.as_deref() else {
            return Err(AppError::invalid_argument("schedule has no file path"));
        };
        self.document.save_to_path(path)?;
        tracing::info!(
            path = %path.display(),
            items = self.document.items.len(),
            "schedule saved"
        );
        self.mark_saved();
        Ok(())
    }

    /// Records the current document as saved without touching the filesystem.
    pub fn mark_saved(&mut self) {
        self.tracker.set_saved_state(&self.document);
        self.last_saved = Some(self.document.clone());
    }

    /// Restores the last-saved document, or an empty one when nothing was
    /// ever saved.
    pub fn discard_changes(&mut self) {
        match &self.last_saved {
            Some(saved) => self.document = saved.clone(),
            None => {
                self.document = Schedule::default();
                self.tracker.reset();
            }
        }
        self.select(self.selected);
    }
}

impl DirtySource for ScheduleEditor {
    fn is_dirty(&self) -> bool {
        self.tracker.is_dirty(&self.document)
    }
}
