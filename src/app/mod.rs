//! Host layer: the `EditorSession` facade that wires the store to the runtime.

mod session;

pub use session::{message_to_action, EditorSession, SessionListener, SessionOptions};
