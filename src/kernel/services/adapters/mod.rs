//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod file;
#[cfg(feature = "http")]
pub mod http;
pub mod keybinding;
pub mod runtime;
pub mod settings;

pub use file::LocalRemoteFileApi;
#[cfg(feature = "http")]
pub use http::HttpRemoteFileApi;
pub use keybinding::{KeybindingContext, KeybindingService};
pub use runtime::{AppMessage, AsyncRuntime, FsOp};
pub use settings::{
    ensure_log_dir, ensure_settings_file, get_log_dir, get_settings_path, load_settings,
    parse_keybinding,
};
