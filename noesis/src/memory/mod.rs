//! Bounded memory for processed thoughts.
//!
//! Structure:
//! - types.rs: serializable record types stored in the logs
//! - bounded_log.rs: the fixed-capacity FIFO log backing every history kind

pub mod bounded_log;
pub mod types;

pub use bounded_log::BoundedLog;
pub use types::ThoughtRecord;
