use common::model::user::UserRole;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::admin_nav::AdminNav;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::locale::Locale;
use crate::pages::admin::opportunities::OpportunitiesPage;
use crate::pages::admin::opportunity_form::OpportunityFormPage;
use crate::pages::admin::profile::ProfilePage;
use crate::pages::admin::settings::SettingsPage;
use crate::pages::admin::users::UsersPage;
use crate::pages::apply::ApplyPage;
use crate::pages::home::HomePage;
use crate::pages::legal::{LegalKind, LegalPage};
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::store;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/:locale")]
    Home { locale: Locale },
    #[at("/:locale/login")]
    Login { locale: Locale },
    #[at("/:locale/apply/:id")]
    Apply { locale: Locale, id: i64 },
    #[at("/:locale/legal/terms-and-conditions")]
    Terms { locale: Locale },
    #[at("/:locale/legal/privacy-policy")]
    Privacy { locale: Locale },
    #[at("/:locale/admin")]
    Admin { locale: Locale },
    #[at("/:locale/admin/opportunities")]
    AdminOpportunities { locale: Locale },
    #[at("/:locale/admin/opportunities/new")]
    AdminOpportunityNew { locale: Locale },
    #[at("/:locale/admin/opportunities/:id")]
    AdminOpportunityEdit { locale: Locale, id: i64 },
    #[at("/:locale/admin/users")]
    AdminUsers { locale: Locale },
    #[at("/:locale/admin/settings")]
    AdminSettings { locale: Locale },
    #[at("/:locale/admin/profile")]
    AdminProfile { locale: Locale },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Landing route after login, by role: owners manage accounts first,
/// everyone else starts on the opportunities list.
pub fn admin_landing(role: UserRole, locale: Locale) -> Route {
    match role {
        UserRole::Owner => Route::AdminUsers { locale },
        UserRole::Admin | UserRole::Guest => Route::AdminOpportunities { locale },
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Root => {
            let locale = store::store().locale().unwrap_or_default();
            html! { <Redirect<Route> to={Route::Home { locale }} /> }
        }
        Route::Home { locale } => public_frame(
            locale,
            html! { <HomePage {locale} /> },
        ),
        Route::Login { locale } => public_frame(
            locale,
            html! { <LoginPage {locale} /> },
        ),
        Route::Apply { locale, id } => public_frame(
            locale,
            html! { <ApplyPage {locale} {id} /> },
        ),
        Route::Terms { locale } => public_frame(
            locale,
            html! { <LegalPage {locale} kind={LegalKind::Terms} /> },
        ),
        Route::Privacy { locale } => public_frame(
            locale,
            html! { <LegalPage {locale} kind={LegalKind::Privacy} /> },
        ),
        Route::Admin { locale } => {
            html! { <Redirect<Route> to={Route::AdminOpportunities { locale }} /> }
        }
        Route::AdminOpportunities { locale } => admin_frame(
            locale,
            html! { <OpportunitiesPage {locale} /> },
        ),
        Route::AdminOpportunityNew { locale } => admin_frame(
            locale,
            html! { <OpportunityFormPage {locale} id={None::<i64>} /> },
        ),
        Route::AdminOpportunityEdit { locale, id } => admin_frame(
            locale,
            html! { <OpportunityFormPage {locale} id={Some(id)} /> },
        ),
        Route::AdminUsers { locale } => admin_frame(
            locale,
            html! { <UsersPage {locale} /> },
        ),
        Route::AdminSettings { locale } => admin_frame(
            locale,
            html! { <SettingsPage {locale} /> },
        ),
        Route::AdminProfile { locale } => admin_frame(
            locale,
            html! { <ProfilePage {locale} /> },
        ),
        Route::NotFound => {
            let locale = store::store().locale().unwrap_or_default();
            public_frame(locale, html! { <NotFoundPage /> })
        }
    }
}

fn public_frame(locale: Locale, content: Html) -> Html {
    html! {
        <>
            <Header {locale} />
            <main class="page-main">{ content }</main>
            <Footer {locale} />
        </>
    }
}

fn admin_frame(locale: Locale, content: Html) -> Html {
    html! {
        <>
            <Header {locale} />
            <AdminNav {locale} />
            <main class="page-main admin-main">{ content }</main>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_lands_on_user_management() {
        assert_eq!(
            admin_landing(UserRole::Owner, Locale::En),
            Route::AdminUsers { locale: Locale::En }
        );
    }

    #[test]
    fn admin_lands_on_opportunities() {
        assert_eq!(
            admin_landing(UserRole::Admin, Locale::Es),
            Route::AdminOpportunities { locale: Locale::Es }
        );
        assert_eq!(
            admin_landing(UserRole::Guest, Locale::En),
            Route::AdminOpportunities { locale: Locale::En }
        );
    }

    #[test]
    fn routes_carry_the_locale_prefix() {
        assert_eq!(
            (Route::Login { locale: Locale::Pt }).to_path(),
            "/pt/login"
        );
        assert_eq!(
            (Route::Apply { locale: Locale::Es, id: 7 }).to_path(),
            "/es/apply/7"
        );
    }
}
