pub const UNSAVED_CHANGES_MESSAGE: &str = "You have unsaved changes. Leave anyway?";

/// Notification that the host environment is about to tear the session down.
///
/// A listener that calls [`UnloadEvent::prevent_default`] asks the host to
/// show its own confirmation instead of closing immediately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnloadEvent {
    default_prevented: bool,
    return_value: Option<String>,
}

impl UnloadEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn set_return_value(&mut self, message: impl Into<String>) {
        self.return_value = Some(message.into());
    }

    pub fn return_value(&self) -> Option<&str> {
        self.return_value.as_deref()
    }
}
