use crossterm::event::Event;

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    /// The search debounce timer expired.
    DebounceDue,
}
