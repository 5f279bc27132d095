//! Core vocabulary shared by the kernel and the host:
//! - Command: semantic commands, independent of the key that triggered them
//! - Event: key chords as reported by the host

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{Key, KeyCode, KeyModifiers};
