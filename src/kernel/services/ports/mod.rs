//! Service ports: traits + data contracts.

pub mod remote;
pub mod settings;

pub use remote::{RemoteError, RemoteFileApi, RemoteResult};
pub use settings::{KeybindingRule, Preferences, RemoteSettings, Settings};
