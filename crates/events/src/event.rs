/// A domain-agnostic event.
///
/// Events are:
/// - **immutable** (one event describes one intended state change)
/// - **versioned** (schema evolution)
/// - **transient** (applied once, never retained or replayed)
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "banking.account.open_account").
    ///
    /// This is the dispatch authority when the concrete type is not statically
    /// known (see [`crate::RawEnvelope`]), so it must never change for an
    /// existing event type.
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;
}
