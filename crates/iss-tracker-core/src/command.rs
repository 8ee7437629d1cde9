//! Command abstraction for state-changing requests.

use uuid::Uuid;

/// A request that changes the record store.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Dotted type name used in logs.
    fn command_type(&self) -> &'static str;

    /// Correlation ID carried through logs and responses.
    fn correlation_id(&self) -> Uuid;
}
