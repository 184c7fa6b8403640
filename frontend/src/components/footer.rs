use yew::prelude::*;
use yew_router::prelude::*;

use crate::locale::Locale;
use crate::routes::Route;
use crate::store;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub locale: Locale,
}

pub struct Footer {
    company_name: Option<String>,
}

impl Component for Footer {
    type Message = ();
    type Properties = FooterProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            company_name: store::store().company_name(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let locale = ctx.props().locale;
        let company = self
            .company_name
            .clone()
            .unwrap_or_else(|| "Job Board".to_string());

        html! {
            <footer class="site-footer">
                <span>{ format!("\u{00a9} {company}") }</span>
                <nav class="footer-links">
                    <Link<Route> to={Route::Terms { locale }}>{ "Terms and Conditions" }</Link<Route>>
                    <Link<Route> to={Route::Privacy { locale }}>{ "Privacy Policy" }</Link<Route>>
                </nav>
            </footer>
        }
    }
}
