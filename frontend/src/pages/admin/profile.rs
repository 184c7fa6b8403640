//! Account page: profile update, password change, logout.
//!
//! Changing the username or email asks for confirmation first (a
//! name-only edit saves directly); a successful password change logs the
//! session out after a short delay, since the backend invalidates it.

use common::model::user::{SessionUser, UserRole};
use common::requests::UpdateMeRequest;
use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::auth;
use crate::api::client::ApiError;
use crate::components::confirm_modal::ConfirmModal;
use crate::components::protected_route::ProtectedRoute;
use crate::components::status::LoadingState;
use crate::components::toast::{show_toast, ToastLevel};
use crate::locale::Locale;
use crate::routes::Route;
use crate::store;

const MIN_PASSWORD_LEN: usize = 8;
const LOGIN_REDIRECT_DELAY_MS: u32 = 1500;

#[derive(Properties, PartialEq)]
pub struct ProfileProps {
    pub locale: Locale,
}

/// Confirmation is required exactly when a sensitive identity field
/// (username or email) would change; editing only the display name is
/// not considered sensitive.
pub fn requires_confirmation(current: &SessionUser, username: &str, email: &str) -> bool {
    current.username != username.trim() || current.email != email.trim()
}

pub enum Msg {
    Loaded(Result<SessionUser, ApiError>),
    SetFullName(String),
    SetUsername(String),
    SetEmail(String),
    Save,
    ConfirmSave,
    CancelConfirm,
    Saved(Result<SessionUser, ApiError>),
    OpenPassword,
    ClosePassword,
    SetNewPassword(String),
    SetConfirmPassword(String),
    SubmitPassword,
    PasswordChanged(Result<(), ApiError>),
    DeferredLogin,
    AskLogout,
    CancelLogout,
    ConfirmLogout,
    LoggedOut,
}

pub struct ProfilePage {
    user: Option<SessionUser>,
    loading: bool,

    full_name: String,
    username: String,
    email: String,
    saving: bool,
    confirming_save: bool,

    password_modal: bool,
    new_password: String,
    confirm_password: String,
    password_error: Option<String>,
    changing_password: bool,

    logout_modal: bool,
    logging_out: bool,
}

impl ProfilePage {
    fn apply_user(&mut self, user: SessionUser) {
        self.full_name = user.full_name.clone();
        self.username = user.username.clone();
        self.email = user.email.clone();
        self.user = Some(user);
    }

    fn save(&mut self, ctx: &Context<Self>) {
        self.saving = true;
        let request = UpdateMeRequest {
            full_name: Some(self.full_name.trim().to_string()),
            username: Some(self.username.trim().to_string()),
            email: Some(self.email.trim().to_string()),
        };
        ctx.link()
            .send_future(async move { Msg::Saved(auth::update_me(&request).await) });
    }

    fn go_to_login(&self, ctx: &Context<Self>, replace: bool) {
        if let Some(navigator) = ctx.link().navigator() {
            let route = Route::Login {
                locale: ctx.props().locale,
            };
            if replace {
                navigator.replace(&route);
            } else {
                navigator.push(&route);
            }
        }
    }
}

impl Component for ProfilePage {
    type Message = Msg;
    type Properties = ProfileProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link()
            .send_future(async { Msg::Loaded(auth::me().await) });

        let mut page = Self {
            user: None,
            loading: true,
            full_name: String::new(),
            username: String::new(),
            email: String::new(),
            saving: false,
            confirming_save: false,
            password_modal: false,
            new_password: String::new(),
            confirm_password: String::new(),
            password_error: None,
            changing_password: false,
            logout_modal: false,
            logging_out: false,
        };
        // optimistic render from the cache while /auth/me is in flight
        if let Some(user) = store::store().current_user() {
            page.apply_user(user);
        }
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(user)) => {
                self.loading = false;
                self.apply_user(user);
                true
            }
            Msg::Loaded(Err(err)) => {
                // a 401 here already triggered the forced logout
                self.loading = false;
                gloo_console::warn!("profile fetch failed:", err.to_string());
                true
            }
            Msg::SetFullName(value) => {
                self.full_name = value;
                false
            }
            Msg::SetUsername(value) => {
                self.username = value;
                false
            }
            Msg::SetEmail(value) => {
                self.email = value;
                false
            }
            Msg::Save => {
                if self.full_name.trim().is_empty()
                    || self.username.trim().is_empty()
                    || self.email.trim().is_empty()
                {
                    show_toast(ToastLevel::Error, "Name, username and email are required");
                    return false;
                }
                let Some(user) = &self.user else {
                    return false;
                };
                if requires_confirmation(user, &self.username, &self.email) {
                    self.confirming_save = true;
                    return true;
                }
                self.save(ctx);
                true
            }
            Msg::ConfirmSave => {
                self.confirming_save = false;
                self.save(ctx);
                true
            }
            Msg::CancelConfirm => {
                self.confirming_save = false;
                true
            }
            Msg::Saved(Ok(user)) => {
                self.saving = false;
                let store = store::store();
                store.set_current_user(&user);
                store.notify_user_updated();
                self.apply_user(user);
                show_toast(ToastLevel::Success, "Account updated");
                true
            }
            Msg::Saved(Err(err)) => {
                self.saving = false;
                show_toast(ToastLevel::Error, &err.to_string());
                true
            }
            Msg::OpenPassword => {
                self.password_modal = true;
                self.new_password = String::new();
                self.confirm_password = String::new();
                self.password_error = None;
                true
            }
            Msg::ClosePassword => {
                self.password_modal = false;
                true
            }
            Msg::SetNewPassword(value) => {
                self.new_password = value;
                false
            }
            Msg::SetConfirmPassword(value) => {
                self.confirm_password = value;
                false
            }
            Msg::SubmitPassword => {
                if self.new_password.len() < MIN_PASSWORD_LEN {
                    self.password_error = Some(format!(
                        "Password must be at least {MIN_PASSWORD_LEN} characters"
                    ));
                    return true;
                }
                if self.new_password != self.confirm_password {
                    self.password_error = Some("Passwords do not match".to_string());
                    return true;
                }
                self.changing_password = true;
                self.password_error = None;
                let password = self.new_password.clone();
                ctx.link().send_future(async move {
                    Msg::PasswordChanged(auth::change_password(&password).await)
                });
                true
            }
            Msg::PasswordChanged(Ok(())) => {
                self.changing_password = false;
                self.password_modal = false;
                show_toast(ToastLevel::Success, "Password changed, please sign in again");
                ctx.link().send_future(async {
                    TimeoutFuture::new(LOGIN_REDIRECT_DELAY_MS).await;
                    Msg::DeferredLogin
                });
                true
            }
            Msg::PasswordChanged(Err(err)) => {
                self.changing_password = false;
                self.password_error = Some(err.to_string());
                true
            }
            Msg::DeferredLogin => {
                store::store().clear_auth();
                self.go_to_login(ctx, true);
                false
            }
            Msg::AskLogout => {
                self.logout_modal = true;
                true
            }
            Msg::CancelLogout => {
                self.logout_modal = false;
                true
            }
            Msg::ConfirmLogout => {
                self.logging_out = true;
                ctx.link().send_future(async {
                    if let Err(err) = auth::logout().await {
                        gloo_console::warn!("logout request failed:", err.to_string());
                    }
                    // the local session goes away regardless
                    Msg::LoggedOut
                });
                true
            }
            Msg::LoggedOut => {
                self.logging_out = false;
                self.logout_modal = false;
                store::store().clear_auth();
                self.go_to_login(ctx, false);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let locale = ctx.props().locale;

        let body = if self.loading && self.user.is_none() {
            html! { <LoadingState /> }
        } else if let Some(user) = &self.user {
            html! {
                <>
                    { self.info_card(user) }
                    { self.account_form(ctx) }
                    { self.password_section(ctx) }
                    { self.logout_section(ctx) }
                </>
            }
        } else {
            html! {}
        };

        html! {
            <ProtectedRoute {locale} roles={Vec::<UserRole>::new()}>
                <div class="admin-page profile-page">
                    <h1>{ "Profile" }</h1>
                    { body }
                    {
                        self.confirming_save.then(|| html! {
                            <ConfirmModal
                                title="Update account"
                                message="You are changing your username or email. Continue?"
                                confirm_label="Update"
                                pending={self.saving}
                                on_confirm={link.callback(|_| Msg::ConfirmSave)}
                                on_cancel={link.callback(|_| Msg::CancelConfirm)}
                            />
                        })
                    }
                    {
                        self.logout_modal.then(|| html! {
                            <ConfirmModal
                                title="Log out"
                                message="End your session on this device?"
                                confirm_label="Log out"
                                danger={true}
                                pending={self.logging_out}
                                on_confirm={link.callback(|_| Msg::ConfirmLogout)}
                                on_cancel={link.callback(|_| Msg::CancelLogout)}
                            />
                        })
                    }
                    { self.password_modal_view(ctx) }
                </div>
            </ProtectedRoute>
        }
    }
}

impl ProfilePage {
    fn info_card(&self, user: &SessionUser) -> Html {
        let role = match user.role {
            UserRole::Owner => "Owner",
            UserRole::Admin => "Admin",
            UserRole::Guest => "Guest",
        };
        html! {
            <section class="profile-card">
                <h2>{ user.full_name.clone() }</h2>
                <p>{ format!("@{} \u{00b7} {role}", user.username) }</p>
                <p>{ user.email.clone() }</p>
            </section>
        }
    }

    fn account_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <section class="settings-section">
                <h2>{ "Update account" }</h2>
                <label>
                    { "Username" }
                    <input
                        value={self.username.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            Msg::SetUsername(input.value())
                        })}
                    />
                </label>
                <label>
                    { "Email" }
                    <input
                        type="email"
                        value={self.email.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            Msg::SetEmail(input.value())
                        })}
                    />
                </label>
                <label>
                    { "Name" }
                    <input
                        value={self.full_name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            Msg::SetFullName(input.value())
                        })}
                    />
                </label>
                <button
                    class="btn btn-primary"
                    disabled={self.saving}
                    onclick={link.callback(|_| Msg::Save)}
                >
                    { if self.saving { "Saving..." } else { "Save" } }
                </button>
            </section>
        }
    }

    fn password_section(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="settings-section">
                <h2>{ "Password" }</h2>
                <button
                    class="btn btn-outline"
                    onclick={ctx.link().callback(|_| Msg::OpenPassword)}
                >
                    { "Change password" }
                </button>
            </section>
        }
    }

    fn logout_section(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="settings-section">
                <h2>{ "Session" }</h2>
                <button
                    class="btn btn-danger"
                    onclick={ctx.link().callback(|_| Msg::AskLogout)}
                >
                    { "Log out" }
                </button>
            </section>
        }
    }

    fn password_modal_view(&self, ctx: &Context<Self>) -> Html {
        if !self.password_modal {
            return html! {};
        }
        let link = ctx.link();
        html! {
            <div class="modal-overlay">
                <div class="modal" role="dialog" aria-modal="true">
                    <h3 class="modal-title">{ "Change password" }</h3>
                    {
                        self.password_error.as_ref().map(|message| html! {
                            <p class="modal-error">{ message.clone() }</p>
                        })
                    }
                    <label>
                        { "New password" }
                        <input
                            type="password"
                            value={self.new_password.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                Msg::SetNewPassword(input.value())
                            })}
                        />
                    </label>
                    <label>
                        { "Repeat new password" }
                        <input
                            type="password"
                            value={self.confirm_password.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                Msg::SetConfirmPassword(input.value())
                            })}
                        />
                    </label>
                    <div class="modal-actions">
                        <button
                            class="btn btn-outline"
                            disabled={self.changing_password}
                            onclick={link.callback(|_| Msg::ClosePassword)}
                        >
                            { "Cancel" }
                        </button>
                        <button
                            class="btn btn-primary"
                            disabled={self.changing_password}
                            onclick={link.callback(|_| Msg::SubmitPassword)}
                        >
                            { if self.changing_password { "Changing..." } else { "Change password" } }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> SessionUser {
        SessionUser {
            id: 1,
            username: "jdoe".into(),
            full_name: "Jane Doe".into(),
            email: "jdoe@example.com".into(),
            role: UserRole::Admin,
            active: true,
            created_at: "2025-01-01T00:00:00Z".into(),
            updated_at: "2025-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn name_only_changes_save_without_confirmation() {
        assert!(!requires_confirmation(&user(), "jdoe", "jdoe@example.com"));
        // whitespace around an unchanged value is not a change
        assert!(!requires_confirmation(&user(), " jdoe ", "jdoe@example.com"));
    }

    #[test]
    fn username_or_email_changes_require_confirmation() {
        assert!(requires_confirmation(&user(), "jdoe2", "jdoe@example.com"));
        assert!(requires_confirmation(&user(), "jdoe", "new@example.com"));
    }
}
