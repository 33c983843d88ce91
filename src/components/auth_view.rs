use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::{LoginRequest, RegisterRequest};
use crate::state::AuthMode;

#[derive(Properties, PartialEq)]
pub struct AuthViewProps {
    pub mode: AuthMode,
    /// A login/register request is in flight; the submit button is disabled
    /// and further submits are ignored.
    pub loading: bool,
    pub on_login: Callback<LoginRequest>,
    pub on_register: Callback<RegisterRequest>,
    pub on_switch_mode: Callback<AuthMode>,
}

fn value_of(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(AuthView)]
pub fn auth_view(props: &AuthViewProps) -> Html {
    let first_name_ref = use_node_ref();
    let last_name_ref = use_node_ref();
    let date_of_birth_ref = use_node_ref();
    let phone_number_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let is_login = props.mode == AuthMode::Login;

    let on_submit = {
        let first_name_ref = first_name_ref.clone();
        let last_name_ref = last_name_ref.clone();
        let date_of_birth_ref = date_of_birth_ref.clone();
        let phone_number_ref = phone_number_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let on_login = props.on_login.clone();
        let on_register = props.on_register.clone();
        let mode = props.mode;
        let loading = props.loading;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if loading {
                return;
            }

            let email = value_of(&email_ref);
            let password = value_of(&password_ref);

            match mode {
                AuthMode::Login => on_login.emit(LoginRequest { email, password }),
                AuthMode::Register => on_register.emit(RegisterRequest {
                    first_name: value_of(&first_name_ref),
                    last_name: value_of(&last_name_ref),
                    date_of_birth: value_of(&date_of_birth_ref),
                    phone_number: value_of(&phone_number_ref),
                    email,
                    password,
                }),
            }
        })
    };

    let on_toggle = {
        let on_switch_mode = props.on_switch_mode.clone();
        let mode = props.mode;
        Callback::from(move |_: MouseEvent| {
            let next = match mode {
                AuthMode::Login => AuthMode::Register,
                AuthMode::Register => AuthMode::Login,
            };
            on_switch_mode.emit(next);
        })
    };

    html! {
        <div class="auth-container">
            <h1 class="title">{ if is_login { "Login" } else { "Register" } }</h1>
            <form onsubmit={on_submit}>
                if !is_login {
                    <>
                    <div class="form-group grid-cols-2">
                        <div>
                            <label for="firstName" class="form-label">{ "First Name" }</label>
                            <input
                                type="text"
                                id="firstName"
                                class="form-input"
                                ref={first_name_ref}
                                required=true
                            />
                        </div>
                        <div>
                            <label for="lastName" class="form-label">{ "Last Name" }</label>
                            <input
                                type="text"
                                id="lastName"
                                class="form-input"
                                ref={last_name_ref}
                                required=true
                            />
                        </div>
                    </div>
                    <div class="form-group">
                        <label for="dateOfBirth" class="form-label">{ "Date of Birth" }</label>
                        <input
                            type="date"
                            id="dateOfBirth"
                            class="form-input"
                            ref={date_of_birth_ref}
                            required=true
                        />
                    </div>
                    <div class="form-group">
                        <label for="phoneNumber" class="form-label">{ "Phone Number" }</label>
                        <input
                            type="tel"
                            id="phoneNumber"
                            class="form-input"
                            ref={phone_number_ref}
                            required=true
                        />
                    </div>
                    </>
                }
                <div class="form-group">
                    <label for="email" class="form-label">{ "Email" }</label>
                    <input
                        type="email"
                        id="email"
                        class="form-input"
                        ref={email_ref}
                        required=true
                    />
                </div>
                <div class="form-group">
                    <label for="password" class="form-label">{ "Password" }</label>
                    <input
                        type="password"
                        id="password"
                        class="form-input"
                        ref={password_ref}
                        required=true
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled={props.loading}>
                    {
                        if props.loading {
                            "⏳ Please wait..."
                        } else if is_login {
                            "Login"
                        } else {
                            "Register"
                        }
                    }
                </button>
            </form>
            <p class="auth-footer">
                { if is_login { "Don't have an account? " } else { "Already have an account? " } }
                <button type="button" class="btn-link" onclick={on_toggle}>
                    { if is_login { "Register here." } else { "Login here." } }
                </button>
            </p>
        </div>
    }
}
