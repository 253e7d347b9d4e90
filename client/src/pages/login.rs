//! Login page: email + password, phone OTP, or ABHA number, plus portal choice.
//!
//! SYSTEM CONTEXT
//! ==============
//! Credentials are not checked against a backend. A submit that passes local
//! validation mints a mock token and calls `login`; the route table then
//! answers "already signed in" for this page and the redirect effect forwards
//! the user to the location a guard sent them from, or to the dashboard.
//!
//! TRADE-OFFS
//! ==========
//! The last used method and portal are remembered in local storage for
//! convenience. They are loaded from an effect so the server render and the
//! hydrated render agree on initial markup.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use access::{Navigation, Role};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use serde::{Deserialize, Serialize};

use crate::state::auth::use_auth;
use crate::state::routes::use_routes;
use crate::util::auth::current_location;
use crate::util::storage::{LocalStorage, load_json, save_json};

const PREFERENCES_KEY: &str = "loginPreferences";
const ABHA_DIGITS: usize = 14;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoginMethod {
    #[default]
    Email,
    Otp,
    Abha,
}

impl LoginMethod {
    pub const ALL: [LoginMethod; 3] = [LoginMethod::Email, LoginMethod::Otp, LoginMethod::Abha];

    pub fn as_str(self) -> &'static str {
        match self {
            LoginMethod::Email => "email",
            LoginMethod::Otp => "otp",
            LoginMethod::Abha => "abha",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoginMethod::Email => "Email",
            LoginMethod::Otp => "Mobile OTP",
            LoginMethod::Abha => "ABHA ID",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct LoginPreferences {
    pub method: LoginMethod,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Raw form input, captured at submit time.
#[derive(Clone, Debug, Default)]
pub(crate) struct LoginFields {
    pub email: String,
    pub password: String,
    pub phone: String,
    pub otp: String,
    pub abha: String,
}

pub(crate) fn validate_email_login(email: &str, password: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn digits_only(raw: &str, separators: &[char]) -> Option<String> {
    let kept: String = raw.chars().filter(|c| !c.is_whitespace() && !separators.contains(c)).collect();
    kept.chars().all(|c| c.is_ascii_digit()).then_some(kept)
}

pub(crate) fn validate_otp_login(phone: &str, code: &str) -> Result<(), &'static str> {
    match digits_only(phone, &['-']) {
        Some(d) if d.len() == 10 => {}
        _ => return Err("Enter a 10-digit mobile number."),
    }
    match digits_only(code, &[]) {
        Some(d) if d.len() == 6 => Ok(()),
        _ => Err("Enter the 6-digit OTP."),
    }
}

/// Validate an ABHA number and return it in `XX-XXXX-XXXX-XXXX` form.
pub(crate) fn normalize_abha(raw: &str) -> Result<String, &'static str> {
    let digits = match digits_only(raw, &['-']) {
        Some(d) if d.len() == ABHA_DIGITS => d,
        _ => return Err("Enter your 14-digit ABHA number."),
    };
    Ok(format!("{}-{}-{}-{}", &digits[..2], &digits[2..6], &digits[6..10], &digits[10..]))
}

/// Validate the fields for `method` and return the identity label to store.
/// `None` means the method yields no label; the previous one is kept.
pub(crate) fn identity_for(method: LoginMethod, fields: &LoginFields) -> Result<Option<String>, &'static str> {
    match method {
        LoginMethod::Email => validate_email_login(&fields.email, &fields.password).map(Some),
        LoginMethod::Otp => validate_otp_login(&fields.phone, &fields.otp).map(|()| None),
        LoginMethod::Abha => normalize_abha(&fields.abha).map(Some),
    }
}

pub(crate) fn mock_token(method: LoginMethod) -> String {
    format!("mock-{}-{}", method.as_str(), uuid::Uuid::new_v4().simple())
}

/// Portal select value; the blank option means "no choice" (clinic by default).
pub(crate) fn parse_role_choice(raw: &str) -> Option<Role> {
    Role::from_stored(raw)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let routes = use_routes();
    let location = current_location();
    let navigate = use_navigate();

    let method = RwSignal::new(LoginMethod::default());
    let role = RwSignal::new(None::<Role>);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let abha = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    Effect::new(move || {
        if let Some(saved) = load_json::<LoginPreferences>(&LocalStorage, PREFERENCES_KEY) {
            method.set(saved.method);
            role.set(saved.role);
        }
    });

    Effect::new(move || {
        let snapshot = auth.snapshot();
        if let Navigation::Redirect(redirect) = routes.navigate(&location(), &snapshot) {
            navigate(&redirect.href(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let chosen = method.get_untracked();
        let fields = LoginFields {
            email: email.get_untracked(),
            password: password.get_untracked(),
            phone: phone.get_untracked(),
            otp: otp.get_untracked(),
            abha: abha.get_untracked(),
        };
        match identity_for(chosen, &fields) {
            Ok(identity) => {
                info.set(String::new());
                let portal = role.get_untracked();
                save_json(&LocalStorage, PREFERENCES_KEY, &LoginPreferences { method: chosen, role: portal });
                log::info!("signing in with {} for {:?}", chosen.as_str(), portal);
                auth.login(mock_token(chosen), portal, identity.as_deref());
            }
            Err(msg) => info.set(msg.to_owned()),
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"MedPortal"</h1>
                <p class="login-card__subtitle">"Sign in to your portal"</p>
                <div class="login-tabs" role="tablist">
                    {LoginMethod::ALL
                        .into_iter()
                        .map(|m| {
                            view! {
                                <button
                                    type="button"
                                    class="login-tab"
                                    class:login-tab--active=move || method.get() == m
                                    on:click=move |_| {
                                        method.set(m);
                                        info.set(String::new());
                                    }
                                >
                                    {m.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Portal"
                        <select
                            class="login-input"
                            prop:value=move || role.get().map_or("", Role::as_str)
                            on:change=move |ev| role.set(parse_role_choice(&event_target_value(&ev)))
                        >
                            <option value="">"Select a portal"</option>
                            {Role::ALL
                                .into_iter()
                                .map(|r| view! { <option value=r.as_str()>{r.portal_title()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <Show when=move || method.get() == LoginMethod::Email>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@clinic.example"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </Show>
                    <Show when=move || method.get() == LoginMethod::Otp>
                        <input
                            class="login-input"
                            type="tel"
                            placeholder="10-digit mobile number"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input login-input--code"
                            type="text"
                            inputmode="numeric"
                            maxlength="6"
                            placeholder="OTP"
                            prop:value=move || otp.get()
                            on:input=move |ev| otp.set(event_target_value(&ev))
                        />
                    </Show>
                    <Show when=move || method.get() == LoginMethod::Abha>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="XX-XXXX-XXXX-XXXX"
                            prop:value=move || abha.get()
                            on:input=move |ev| abha.set(event_target_value(&ev))
                        />
                    </Show>
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
