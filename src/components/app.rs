// ============================================================================
// APP - top-level composition: view routing + action wiring
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{AuthView, Dashboard, DeleteModal, Toast, UpdateModal};
use crate::models::{LoginRequest, PaymentDraft, RegisterRequest};
use crate::services::{ApiClient, LocalStorageTokenStore, TokenStore};
use crate::state::notification::NOTICE_TIMEOUT_MS;
use crate::state::{Action, AppState, AuthMode, AuthPhase, Severity};

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::default);
    let api = ApiClient::new();
    let tokens: Rc<dyn TokenStore> = use_memo((), |_| LocalStorageTokenStore::new());

    // Restore a persisted session on mount and fetch its records.
    {
        let state = state.clone();
        let api = api.clone();
        let tokens = tokens.clone();
        use_effect_with((), move |_| {
            if let Some(token) = tokens.load() {
                log::info!("🔑 Persisted session found, restoring");
                state.dispatch(Action::SessionRestored {
                    token: token.clone(),
                });
                spawn_local(async move {
                    refresh_payments(&api, &token, &state).await;
                });
            }
            || ()
        });
    }

    // Arm the auto-clear timer for the current notice. The notice id travels
    // with the timer, so a timer armed for an older notice expires harmlessly.
    {
        let notice_id = state.notice.as_ref().map(|n| n.id);
        let state = state.clone();
        use_effect_with(notice_id, move |id| {
            if let Some(id) = *id {
                Timeout::new(NOTICE_TIMEOUT_MS, move || {
                    state.dispatch(Action::NoticeExpired(id));
                })
                .forget();
            }
            || ()
        });
    }

    let on_login = {
        let state = state.clone();
        let api = api.clone();
        let tokens = tokens.clone();
        Callback::from(move |credentials: LoginRequest| {
            if state.phase != AuthPhase::Unauthenticated {
                return;
            }
            state.dispatch(Action::AuthStarted);
            let state = state.clone();
            let api = api.clone();
            let tokens = tokens.clone();
            spawn_local(async move {
                run_auth(api, tokens, state, AuthSubmission::Login(credentials)).await;
            });
        })
    };

    let on_register = {
        let state = state.clone();
        let api = api.clone();
        let tokens = tokens.clone();
        Callback::from(move |profile: RegisterRequest| {
            if state.phase != AuthPhase::Unauthenticated {
                return;
            }
            state.dispatch(Action::AuthStarted);
            let state = state.clone();
            let api = api.clone();
            let tokens = tokens.clone();
            spawn_local(async move {
                run_auth(api, tokens, state, AuthSubmission::Register(profile)).await;
            });
        })
    };

    let on_switch_mode = {
        let state = state.clone();
        Callback::from(move |mode: AuthMode| state.dispatch(Action::SwitchAuthMode(mode)))
    };

    let on_logout = {
        let state = state.clone();
        let tokens = tokens.clone();
        Callback::from(move |_: ()| {
            tokens.clear();
            log::info!("👋 Logged out");
            state.dispatch(Action::LoggedOut);
        })
    };

    let on_add = {
        let state = state.clone();
        let api = api.clone();
        Callback::from(move |draft: PaymentDraft| {
            if state.busy {
                return;
            }
            let Some(token) = state.token().map(str::to_string) else {
                return;
            };
            state.dispatch(Action::MutationStarted);
            spawn_local(run_add(api.clone(), token, state.clone(), draft));
        })
    };

    let on_edit = {
        let state = state.clone();
        Callback::from(move |record| state.dispatch(Action::OpenEditor(record)))
    };

    let on_close_editor = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Action::CloseEditor))
    };

    let on_save = {
        let state = state.clone();
        let api = api.clone();
        Callback::from(move |(id, draft): (String, PaymentDraft)| {
            if state.busy {
                return;
            }
            let Some(token) = state.token().map(str::to_string) else {
                return;
            };
            state.dispatch(Action::MutationStarted);
            spawn_local(run_update(api.clone(), token, state.clone(), id, draft));
        })
    };

    let on_request_delete = {
        let state = state.clone();
        Callback::from(move |id: String| state.dispatch(Action::RequestDelete(id)))
    };

    let on_cancel_delete = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(Action::CancelDelete))
    };

    let on_confirm_delete = {
        let state = state.clone();
        let api = api.clone();
        Callback::from(move |_: ()| {
            if state.busy {
                return;
            }
            let (Some(token), Some(id)) = (
                state.token().map(str::to_string),
                state.pending_delete.clone(),
            ) else {
                return;
            };
            state.dispatch(Action::MutationStarted);
            spawn_local(run_delete(api.clone(), token, state.clone(), id));
        })
    };

    html! {
        <div class="app">
            <Toast notice={state.notice.clone()} />
            {
                if state.is_authenticated() {
                    html! {
                        <Dashboard
                            payments={state.payments.clone()}
                            busy={state.busy}
                            on_add={on_add}
                            on_edit={on_edit}
                            on_request_delete={on_request_delete}
                            on_logout={on_logout}
                        />
                    }
                } else {
                    html! {
                        <AuthView
                            mode={state.auth_mode}
                            loading={state.phase == AuthPhase::Authenticating}
                            on_login={on_login}
                            on_register={on_register}
                            on_switch_mode={on_switch_mode}
                        />
                    }
                }
            }
            {
                if let Some(record) = state.editing.clone() {
                    html! {
                        <UpdateModal
                            record={record}
                            busy={state.busy}
                            on_save={on_save}
                            on_cancel={on_close_editor}
                        />
                    }
                } else {
                    html! {}
                }
            }
            {
                if state.pending_delete.is_some() {
                    html! {
                        <DeleteModal
                            on_confirm={on_confirm_delete}
                            on_cancel={on_cancel_delete}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

// ---------------------------------------------------------------------------
// Async flows. Each flow sequences its calls: the mutation settles before
// the follow-up list refresh is issued.
// ---------------------------------------------------------------------------

enum AuthSubmission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

async fn run_auth(
    api: ApiClient,
    tokens: Rc<dyn TokenStore>,
    state: UseReducerHandle<AppState>,
    submission: AuthSubmission,
) {
    let result = match &submission {
        AuthSubmission::Login(credentials) => api.login(credentials).await,
        AuthSubmission::Register(profile) => api.register(profile).await,
    };

    match result {
        // A response carrying a token authenticates, whichever endpoint
        // produced it; one without a token is a completed registration.
        Ok(response) => match response.token {
            Some(token) => {
                tokens.save(&token);
                log::info!("✅ Authenticated");
                state.dispatch(Action::LoggedIn {
                    token: token.clone(),
                });
                refresh_payments(&api, &token, &state).await;
            }
            None => {
                log::info!("✅ Registration complete");
                state.dispatch(Action::RegistrationComplete);
            }
        },
        Err(err) => {
            log::error!("❌ Authentication failed: {}", err);
            state.dispatch(Action::AuthFailed {
                message: err.message,
            });
        }
    }
}

async fn refresh_payments(api: &ApiClient, token: &str, state: &UseReducerHandle<AppState>) {
    match api.list_payments(token).await {
        Ok(records) => {
            log::info!("📋 Loaded {} payment records", records.len());
            state.dispatch(Action::PaymentsLoaded(records));
        }
        Err(err) => {
            log::error!("❌ Failed to fetch payments: {}", err);
            state.dispatch(Action::Notify {
                text: format!("Failed to fetch payments: {}", err),
                severity: Severity::Error,
            });
        }
    }
}

/// Resynchronize after a successful mutation; the refreshed list and the
/// success notice land in one state update.
async fn finish_mutation(
    api: &ApiClient,
    token: &str,
    state: &UseReducerHandle<AppState>,
    success_message: &str,
) {
    match api.list_payments(token).await {
        Ok(refreshed) => state.dispatch(Action::MutationSucceeded {
            message: success_message.to_string(),
            refreshed,
        }),
        Err(err) => state.dispatch(Action::MutationFailed {
            message: format!("Failed to fetch payments: {}", err),
        }),
    }
}

async fn run_add(
    api: ApiClient,
    token: String,
    state: UseReducerHandle<AppState>,
    draft: PaymentDraft,
) {
    match api.create_payment(&token, &draft).await {
        Ok(record) => {
            log::info!("✅ Payment added: {}", record.id);
            finish_mutation(&api, &token, &state, "Payment added successfully!").await;
        }
        Err(err) => {
            log::error!("❌ Add payment failed: {}", err);
            state.dispatch(Action::MutationFailed {
                message: err.message,
            });
        }
    }
}

async fn run_update(
    api: ApiClient,
    token: String,
    state: UseReducerHandle<AppState>,
    id: String,
    draft: PaymentDraft,
) {
    match api.update_payment(&token, &id, &draft).await {
        Ok(_) => {
            log::info!("✅ Payment updated: {}", id);
            finish_mutation(&api, &token, &state, "Payment updated successfully!").await;
        }
        Err(err) => {
            log::error!("❌ Update payment failed: {}", err);
            state.dispatch(Action::MutationFailed {
                message: err.message,
            });
        }
    }
}

async fn run_delete(api: ApiClient, token: String, state: UseReducerHandle<AppState>, id: String) {
    match api.delete_payment(&token, &id).await {
        Ok(_) => {
            log::info!("✅ Payment deleted: {}", id);
            finish_mutation(&api, &token, &state, "Payment deleted successfully!").await;
        }
        Err(err) => {
            log::error!("❌ Delete payment failed: {}", err);
            state.dispatch(Action::MutationFailed {
                message: err.message,
            });
        }
    }
}
