//! Login page. On success the session user is cached, same-tab listeners
//! are notified, and the browser navigates to the role-specific admin
//! landing page: owners to user management, admins to the opportunities
//! list.

use common::model::user::SessionUser;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::auth;
use crate::api::client::ApiError;
use crate::components::alert::{Alert, AlertKind};
use crate::locale::Locale;
use crate::routes::admin_landing;
use crate::store;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub locale: Locale,
}

pub enum Msg {
    SetIdentifier(String),
    SetPassword(String),
    Submit,
    Done(Result<SessionUser, ApiError>),
    DismissAlert,
}

pub struct LoginPage {
    identifier: String,
    password: String,
    pending: bool,
    error: Option<String>,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(ctx: &Context<Self>) -> Self {
        // An already-cached active session skips the form entirely.
        if let Some(user) = store::store().current_user() {
            if user.active {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.replace(&admin_landing(user.role, ctx.props().locale));
                }
            }
        }

        Self {
            identifier: String::new(),
            password: String::new(),
            pending: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetIdentifier(value) => {
                self.identifier = value;
                false
            }
            Msg::SetPassword(value) => {
                self.password = value;
                false
            }
            Msg::Submit => {
                if self.identifier.trim().is_empty() || self.password.is_empty() {
                    self.error = Some("Username or email and password are required".to_string());
                    return true;
                }
                self.pending = true;
                self.error = None;
                let identifier = self.identifier.clone();
                let password = self.password.clone();
                ctx.link().send_future(async move {
                    Msg::Done(auth::login(&identifier, &password).await)
                });
                true
            }
            Msg::Done(Ok(user)) => {
                self.pending = false;
                let store = store::store();
                store.set_current_user(&user);
                store.notify_user_updated();
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&admin_landing(user.role, ctx.props().locale));
                }
                false
            }
            Msg::Done(Err(err)) => {
                self.pending = false;
                self.error = Some(match err {
                    ApiError::Unauthorized { .. } => "Invalid credentials".to_string(),
                    other => other.to_string(),
                });
                true
            }
            Msg::DismissAlert => {
                self.error = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="login-page">
                <form
                    class="login-form"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    <h1>{ "Sign in" }</h1>
                    {
                        self.error.as_ref().map(|message| html! {
                            <Alert
                                kind={AlertKind::Error}
                                message={message.clone()}
                                on_dismiss={link.callback(|_| Msg::DismissAlert)}
                            />
                        })
                    }
                    <label>
                        { "Username or email" }
                        <input
                            value={self.identifier.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                Msg::SetIdentifier(input.value())
                            })}
                        />
                    </label>
                    <label>
                        { "Password" }
                        <input
                            type="password"
                            value={self.password.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                Msg::SetPassword(input.value())
                            })}
                        />
                    </label>
                    <button class="btn btn-primary" type="submit" disabled={self.pending}>
                        { if self.pending { "Signing in..." } else { "Sign in" } }
                    </button>
                </form>
            </div>
        }
    }
}
