//! General errors that can occur.

mod open;
pub use open::{OpenError,RejectReason};

mod write;
pub use write::WriteError;
