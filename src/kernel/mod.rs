//! Headless session core (state/action/effect).

pub mod action;
pub mod effect;
pub mod error;
pub mod language;
pub mod quick_open;
pub mod services;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::{Effect, SessionEvent};
pub use error::SessionError;
pub use language::LanguageId;
pub use quick_open::{MatchTier, QuickOpenMatch};
pub use state::{OpenDocument, QuickOpenState, SessionState, MAX_RECENT_PATHS};
pub use store::{DispatchResult, Store};
