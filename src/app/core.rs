use crate::config::Config;
use crate::dispatch::DispatchRegistry;
use crate::editor::ScheduleEditor;
use crate::error::AppResult;

use super::contexts::install_contexts;
use super::state::AppState;

pub struct App {
    pub state: AppState,
    pub registry: DispatchRegistry<AppState>,
    pub config: Config,
}

impl App {
    pub fn new(editor: ScheduleEditor) -> AppResult<Self> {
        let config = Config::load()?;
        Ok(Self::new_with_config(editor, config))
    }

    pub fn new_with_config(editor: ScheduleEditor, config: Config) -> Self {
        let state = AppState::new(editor, &config);
        let mut registry = DispatchRegistry::new();
        install_contexts(&mut registry, &config.dispatch);

        let mut app = Self {
            state,
            registry,
            config,
        };
        app.sync_contexts();
        app
    }
}
