//! Site header: tenant branding plus session-aware navigation.
//!
//! Branding renders from the local mirror immediately (no flash while the
//! network is slow), then refreshes from the public app-info endpoint.
//! The header stays current without re-fetching by listening on both
//! notification channels: same-tab custom events and the native cross-tab
//! `storage` event.

use common::model::configuration::AppInfo;
use gloo_events::EventListener;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::client::ApiError;
use crate::api::configuration;
use crate::locale::Locale;
use crate::routes::{admin_landing, Route};
use crate::store::events::{
    self, AUTH_USER_REMOVED, AUTH_USER_UPDATED, COMPANY_NAME_UPDATED, LOGO_UPDATED,
};
use crate::store::session::WATCHED_KEYS;
use crate::store::{self, AppStore};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub locale: Locale,
}

pub enum Msg {
    BrandingLoaded(Result<AppInfo, ApiError>),
    CacheChanged,
    GoHome,
    GoLogin,
    GoProfile,
}

pub struct Header {
    user: Option<common::model::user::SessionUser>,
    company_name: Option<String>,
    logo: Option<String>,
    listeners: Vec<EventListener>,
}

impl Header {
    fn read_cache(&mut self, store: &AppStore) {
        self.user = store.current_user();
        self.company_name = store.company_name();
        self.logo = store.logo();
    }

    fn current_path(ctx: &Context<Self>) -> String {
        ctx.link()
            .location()
            .map(|location| location.path().to_string())
            .unwrap_or_default()
    }
}

impl Component for Header {
    type Message = Msg;
    type Properties = HeaderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let store = store::store();
        store.set_locale(ctx.props().locale);

        let mut header = Self {
            user: None,
            company_name: None,
            logo: None,
            listeners: Vec::new(),
        };
        header.read_cache(&store);

        ctx.link().send_future(async {
            Msg::BrandingLoaded(configuration::app_info().await)
        });

        header
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::BrandingLoaded(Ok(info)) => {
                store::store().mirror_branding(&info);
                self.company_name = info.company_name;
                self.logo = info.company_logo;
                true
            }
            Msg::BrandingLoaded(Err(err)) => {
                // keep whatever the mirror had; branding is cosmetic
                gloo_console::warn!("app info fetch failed:", err.to_string());
                true
            }
            Msg::CacheChanged => {
                self.read_cache(&store::store());
                true
            }
            Msg::GoHome => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Home {
                        locale: ctx.props().locale,
                    });
                }
                false
            }
            Msg::GoLogin => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Login {
                        locale: ctx.props().locale,
                    });
                }
                false
            }
            Msg::GoProfile => {
                if let (Some(navigator), Some(user)) = (ctx.link().navigator(), &self.user) {
                    navigator.push(&admin_landing(user.role, ctx.props().locale));
                }
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        for event in [
            AUTH_USER_UPDATED,
            AUTH_USER_REMOVED,
            LOGO_UPDATED,
            COMPANY_NAME_UPDATED,
        ] {
            let link = ctx.link().clone();
            self.listeners.push(events::subscribe(
                event,
                Callback::from(move |_| link.send_message(Msg::CacheChanged)),
            ));
        }
        let link = ctx.link().clone();
        self.listeners.push(events::subscribe_storage(
            WATCHED_KEYS,
            Callback::from(move |_key| link.send_message(Msg::CacheChanged)),
        ));
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let path = Self::current_path(ctx);
        let is_login_page = path.contains("/login");
        let is_admin_page = path.contains("/admin");

        html! {
            <header class="site-header">
                <div class="header-brand" onclick={link.callback(|_| Msg::GoHome)}>
                    {
                        match &self.logo {
                            Some(logo) => html! {
                                <img class="header-logo" src={logo.clone()} alt="Logo" />
                            },
                            None => html! {
                                <div class="header-logo-placeholder">{ "J" }</div>
                            },
                        }
                    }
                    <div class="header-titles">
                        <span class="header-title">{ "Job Board" }</span>
                        {
                            self.company_name.as_ref().map(|name| html! {
                                <span class="header-company">{ name.clone() }</span>
                            })
                        }
                    </div>
                </div>
                <nav class="header-nav">
                    {
                        if is_admin_page {
                            html! {
                                <button class="btn btn-outline" onclick={link.callback(|_| Msg::GoHome)}>
                                    { "Go to site" }
                                </button>
                            }
                        } else if let Some(user) = &self.user {
                            html! {
                                <button class="btn btn-ghost" onclick={link.callback(|_| Msg::GoProfile)}>
                                    { user.full_name.clone() }
                                </button>
                            }
                        } else if !is_login_page {
                            html! {
                                <button class="btn btn-primary" onclick={link.callback(|_| Msg::GoLogin)}>
                                    { "Login" }
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </nav>
            </header>
        }
    }
}
