//! Async runtime adapter: executes remote effects and sends messages back to the host.

mod message;
mod runtime;

pub use message::{AppMessage, FsOp};
pub use runtime::AsyncRuntime;
