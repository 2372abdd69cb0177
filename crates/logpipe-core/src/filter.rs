//! Filter Trait: the contract every filter stage implements
use crate::event::LogEvent;

/// A pipeline filter stage.
///
/// Instances are built once from configuration and then only read, so one
/// instance may be shared across worker threads as long as each call gets
/// its own event.
pub trait Filter: Send + Sync {
    /// Type identifier the stage is registered under (ex: "remove_field")
    fn type_name(&self) -> &'static str;

    /// Mutates the event in place. Filters have no per-event error channel.
    fn process(&self, event: &mut LogEvent);
}
