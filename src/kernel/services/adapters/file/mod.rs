//! Remote file API served from a local directory.

pub mod local;

pub use local::{should_ignore, LocalRemoteFileApi};
