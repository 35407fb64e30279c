/// Side effects requested by the event handler and carried out by the
/// main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue the calendar request.
    StartLoad,
    Quit,
}
