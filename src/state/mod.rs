pub mod app_state;
pub mod notification;

pub use app_state::{Action, AppState, AuthMode, AuthPhase};
pub use notification::{Notice, Severity};
