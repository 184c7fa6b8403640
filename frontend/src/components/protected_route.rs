//! Route-level session gate.
//!
//! Reads the cached session user synchronously at mount and either renders
//! its children or redirects to the locale-prefixed login route. The check
//! is advisory only, a defense against accidental UI exposure: the backend
//! independently rejects unauthorized requests, and a 401 from any of them
//! forces a logout regardless of what the cache said.

use common::model::user::UserRole;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::locale::Locale;
use crate::routes::Route;
use crate::store;

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub locale: Locale,
    /// Empty means any active session is enough.
    #[prop_or_default]
    pub roles: Vec<UserRole>,
    #[prop_or_default]
    pub children: Html,
}

pub struct ProtectedRoute {
    authorized: bool,
}

impl Component for ProtectedRoute {
    type Message = ();
    type Properties = ProtectedRouteProps;

    fn create(ctx: &Context<Self>) -> Self {
        let authorized = store::store()
            .current_user()
            .map(|user| user.is_authorized(&ctx.props().roles))
            .unwrap_or(false);
        Self { authorized }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.authorized {
            ctx.props().children.clone()
        } else {
            html! {}
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.authorized {
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::Login {
                    locale: ctx.props().locale,
                });
            }
        }
    }
}
