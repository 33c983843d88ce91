// ============================================================================
// APP STATE - single source of truth, mutated only through Action dispatch
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::PaymentRecord;
use crate::state::notification::{Notice, Severity};

/// Session state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthPhase {
    Unauthenticated,
    /// A login/register request is in flight; further submits are ignored.
    Authenticating,
    Authenticated { token: String },
}

/// Which form the auth screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A persisted token was found at startup.
    SessionRestored { token: String },
    AuthStarted,
    LoggedIn { token: String },
    /// Registration succeeded; the server issues no token for it.
    RegistrationComplete,
    AuthFailed { message: String },
    LoggedOut,
    SwitchAuthMode(AuthMode),

    /// Fresh result of a list fetch; replaces the cached collection.
    PaymentsLoaded(Vec<PaymentRecord>),
    MutationStarted,
    /// Mutation and the follow-up refresh both succeeded.
    MutationSucceeded {
        message: String,
        refreshed: Vec<PaymentRecord>,
    },
    MutationFailed { message: String },

    OpenEditor(PaymentRecord),
    CloseEditor,
    RequestDelete(String),
    CancelDelete,

    Notify { text: String, severity: Severity },
    /// Fired by the 5-second timer; only clears the notice it was armed for.
    NoticeExpired(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub phase: AuthPhase,
    pub auth_mode: AuthMode,
    /// Cache of the last successful list fetch, never mutated locally.
    pub payments: Vec<PaymentRecord>,
    /// A payment mutation is in flight; submits are debounced against this.
    pub busy: bool,
    /// Record staged in the edit modal, if any.
    pub editing: Option<PaymentRecord>,
    /// Record id awaiting delete confirmation, if any.
    pub pending_delete: Option<String>,
    pub notice: Option<Notice>,
    notice_seq: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            phase: AuthPhase::Unauthenticated,
            auth_mode: AuthMode::Login,
            payments: Vec::new(),
            busy: false,
            editing: None,
            pending_delete: None,
            notice: None,
            notice_seq: 0,
        }
    }
}

impl AppState {
    pub fn token(&self) -> Option<&str> {
        match &self.phase {
            AuthPhase::Authenticated { token } => Some(token),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, AuthPhase::Authenticated { .. })
    }

    fn notify(&mut self, text: impl Into<String>, severity: Severity) {
        self.notice_seq += 1;
        self.notice = Some(Notice {
            id: self.notice_seq,
            text: text.into(),
            severity,
        });
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SessionRestored { token } => {
                self.phase = AuthPhase::Authenticated { token };
            }
            Action::AuthStarted => {
                if self.phase == AuthPhase::Unauthenticated {
                    self.phase = AuthPhase::Authenticating;
                }
            }
            Action::LoggedIn { token } => {
                self.phase = AuthPhase::Authenticated { token };
                self.notify("Login successful!", Severity::Success);
            }
            Action::RegistrationComplete => {
                self.phase = AuthPhase::Unauthenticated;
                self.auth_mode = AuthMode::Login;
                self.notify("Registration successful! Please log in.", Severity::Success);
            }
            Action::AuthFailed { message } => {
                self.phase = AuthPhase::Unauthenticated;
                self.notify(message, Severity::Error);
            }
            Action::LoggedOut => {
                self.phase = AuthPhase::Unauthenticated;
                self.payments.clear();
                self.editing = None;
                self.pending_delete = None;
                self.busy = false;
                self.notify("You have been logged out.", Severity::Success);
            }
            Action::SwitchAuthMode(mode) => {
                self.auth_mode = mode;
            }
            Action::PaymentsLoaded(records) => {
                self.payments = records;
            }
            Action::MutationStarted => {
                self.busy = true;
                // Confirming the delete dialog starts the mutation.
                self.pending_delete = None;
            }
            Action::MutationSucceeded { message, refreshed } => {
                self.busy = false;
                self.payments = refreshed;
                self.editing = None;
                self.notify(message, Severity::Success);
            }
            Action::MutationFailed { message } => {
                self.busy = false;
                self.notify(message, Severity::Error);
            }
            Action::OpenEditor(record) => {
                self.editing = Some(record);
            }
            Action::CloseEditor => {
                self.editing = None;
            }
            Action::RequestDelete(id) => {
                self.pending_delete = Some(id);
            }
            Action::CancelDelete => {
                self.pending_delete = None;
            }
            Action::Notify { text, severity } => {
                self.notify(text, severity);
            }
            Action::NoticeExpired(id) => {
                if self.notice.as_ref().map(|n| n.id) == Some(id) {
                    self.notice = None;
                }
            }
        }
    }
}

impl Reducible for AppState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> PaymentRecord {
        PaymentRecord {
            id: id.to_string(),
            card_number: "4111111111111111".into(),
            card_holder_name: "A Smith".into(),
            expiry_date: "09/27".into(),
            cvv: "123".into(),
        }
    }

    fn authenticated() -> AppState {
        let mut state = AppState::default();
        state.apply(Action::SessionRestored {
            token: "jwt".into(),
        });
        state
    }

    #[test]
    fn login_success_authenticates_and_notifies() {
        let mut state = AppState::default();
        state.apply(Action::AuthStarted);
        assert_eq!(state.phase, AuthPhase::Authenticating);

        state.apply(Action::LoggedIn {
            token: "jwt".into(),
        });
        assert!(state.is_authenticated());
        assert_eq!(state.token(), Some("jwt"));

        let notice = state.notice.expect("success notice");
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.text, "Login successful!");
    }

    #[test]
    fn registration_without_token_stays_unauthenticated() {
        let mut state = AppState::default();
        state.apply(Action::SwitchAuthMode(AuthMode::Register));
        state.apply(Action::AuthStarted);
        state.apply(Action::RegistrationComplete);

        assert_eq!(state.phase, AuthPhase::Unauthenticated);
        assert_eq!(state.auth_mode, AuthMode::Login);
        assert_eq!(
            state.notice.unwrap().text,
            "Registration successful! Please log in."
        );
    }

    #[test]
    fn auth_failure_reports_the_server_message_and_keeps_state() {
        let mut state = AppState::default();
        state.apply(Action::AuthStarted);
        state.apply(Action::AuthFailed {
            message: "Invalid credentials".into(),
        });

        assert_eq!(state.phase, AuthPhase::Unauthenticated);
        assert!(state.payments.is_empty());

        let notice = state.notice.expect("error notice");
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.text, "Invalid credentials");
    }

    #[test]
    fn auth_started_is_ignored_while_a_submit_is_in_flight() {
        let mut state = AppState::default();
        state.apply(Action::AuthStarted);
        state.apply(Action::AuthStarted);
        assert_eq!(state.phase, AuthPhase::Authenticating);

        // And ignored entirely once authenticated.
        let mut state = authenticated();
        state.apply(Action::AuthStarted);
        assert!(state.is_authenticated());
    }

    #[test]
    fn mutation_success_replaces_the_list_and_closes_the_editor() {
        let mut state = authenticated();
        state.apply(Action::PaymentsLoaded(vec![record("a")]));
        state.apply(Action::OpenEditor(record("a")));
        state.apply(Action::MutationStarted);
        assert!(state.busy);

        state.apply(Action::MutationSucceeded {
            message: "Payment updated successfully!".into(),
            refreshed: vec![record("a"), record("b")],
        });

        assert!(!state.busy);
        assert_eq!(state.payments.len(), 2);
        assert!(state.editing.is_none());
        assert_eq!(state.notice.unwrap().severity, Severity::Success);
    }

    #[test]
    fn mutation_failure_keeps_the_previous_list_and_the_editor_open() {
        let mut state = authenticated();
        state.apply(Action::PaymentsLoaded(vec![record("a")]));
        state.apply(Action::OpenEditor(record("a")));
        state.apply(Action::MutationStarted);

        state.apply(Action::MutationFailed {
            message: "Payment not found".into(),
        });

        assert!(!state.busy);
        assert_eq!(state.payments, vec![record("a")]);
        assert!(state.editing.is_some());

        let notice = state.notice.expect("error notice");
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.text, "Payment not found");
    }

    #[test]
    fn confirming_a_delete_closes_the_dialog_when_the_mutation_starts() {
        let mut state = authenticated();
        state.apply(Action::RequestDelete("abc123".into()));
        assert_eq!(state.pending_delete.as_deref(), Some("abc123"));

        state.apply(Action::MutationStarted);
        assert!(state.pending_delete.is_none());

        state.apply(Action::RequestDelete("abc123".into()));
        state.apply(Action::CancelDelete);
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn logout_clears_session_list_and_modals() {
        let mut state = authenticated();
        state.apply(Action::PaymentsLoaded(vec![record("a")]));
        state.apply(Action::OpenEditor(record("a")));
        state.apply(Action::RequestDelete("a".into()));

        state.apply(Action::LoggedOut);

        assert_eq!(state.phase, AuthPhase::Unauthenticated);
        assert!(state.payments.is_empty());
        assert!(state.editing.is_none());
        assert!(state.pending_delete.is_none());
        assert_eq!(state.notice.unwrap().text, "You have been logged out.");
    }

    #[test]
    fn newest_notice_replaces_the_previous_one() {
        let mut state = AppState::default();
        state.apply(Action::Notify {
            text: "first".into(),
            severity: Severity::Success,
        });
        let first_id = state.notice.as_ref().unwrap().id;

        state.apply(Action::Notify {
            text: "second".into(),
            severity: Severity::Error,
        });
        let second = state.notice.clone().unwrap();
        assert_eq!(second.text, "second");
        assert!(second.id > first_id);
    }

    #[test]
    fn a_stale_expiry_timer_cannot_clear_a_newer_notice() {
        let mut state = AppState::default();
        state.apply(Action::Notify {
            text: "first".into(),
            severity: Severity::Success,
        });
        let stale_id = state.notice.as_ref().unwrap().id;

        state.apply(Action::Notify {
            text: "second".into(),
            severity: Severity::Success,
        });

        state.apply(Action::NoticeExpired(stale_id));
        assert_eq!(state.notice.as_ref().unwrap().text, "second");

        let current_id = state.notice.as_ref().unwrap().id;
        state.apply(Action::NoticeExpired(current_id));
        assert!(state.notice.is_none());
    }

    #[test]
    fn session_restored_goes_straight_to_the_dashboard_phase() {
        let mut state = AppState::default();
        state.apply(Action::SessionRestored {
            token: "persisted".into(),
        });
        assert_eq!(state.token(), Some("persisted"));
        // Restoring is silent, no notice.
        assert!(state.notice.is_none());
    }
}
