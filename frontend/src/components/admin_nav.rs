//! Admin console navigation bar. Links are role-gated the same way the
//! routes behind them are: the cached role only decides what to show, the
//! backend decides what actually works.

use common::model::user::{SessionUser, UserRole};
use gloo_events::EventListener;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::locale::Locale;
use crate::routes::Route;
use crate::store;
use crate::store::events::{self, AUTH_USER_REMOVED, AUTH_USER_UPDATED};

#[derive(Properties, PartialEq)]
pub struct AdminNavProps {
    pub locale: Locale,
}

pub enum Msg {
    CacheChanged,
}

pub struct AdminNav {
    user: Option<SessionUser>,
    listeners: Vec<EventListener>,
}

impl Component for AdminNav {
    type Message = Msg;
    type Properties = AdminNavProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            user: store::store().current_user(),
            listeners: Vec::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CacheChanged => {
                self.user = store::store().current_user();
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        for event in [AUTH_USER_UPDATED, AUTH_USER_REMOVED] {
            let link = ctx.link().clone();
            self.listeners.push(events::subscribe(
                event,
                Callback::from(move |_| link.send_message(Msg::CacheChanged)),
            ));
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let locale = ctx.props().locale;
        let is_owner = self
            .user
            .as_ref()
            .map(|user| user.role == UserRole::Owner)
            .unwrap_or(false);

        html! {
            <nav class="admin-nav">
                <Link<Route> to={Route::AdminOpportunities { locale }}>{ "Opportunities" }</Link<Route>>
                {
                    is_owner.then(|| html! {
                        <>
                            <Link<Route> to={Route::AdminUsers { locale }}>{ "Users" }</Link<Route>>
                            <Link<Route> to={Route::AdminSettings { locale }}>{ "Settings" }</Link<Route>>
                        </>
                    })
                }
                <Link<Route> to={Route::AdminProfile { locale }}>{ "Profile" }</Link<Route>>
            </nav>
        }
    }
}
