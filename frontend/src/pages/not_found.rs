use yew::prelude::*;
use yew_router::prelude::*;

use crate::locale::Locale;
use crate::routes::Route;

pub struct NotFoundPage;

impl Component for NotFoundPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="not-found-page">
                <h1>{ "404" }</h1>
                <p>{ "The page you are looking for does not exist." }</p>
                <Link<Route> to={Route::Home { locale: Locale::En }}>{ "Back to the job board" }</Link<Route>>
            </div>
        }
    }
}
