//! Debounced search input.
//!
//! Keystrokes restart a 500 ms timer; only the timer firing (or Enter,
//! which short-circuits it) emits `on_search`. Dropping the pending
//! timeout cancels it, so a newer keystroke silently supersedes an older
//! one.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DEBOUNCE_MS: u32 = 500;

#[derive(Properties, PartialEq)]
pub struct SearchBoxProps {
    #[prop_or(AttrValue::Static("Search..."))]
    pub placeholder: AttrValue,
    pub on_search: Callback<String>,
}

pub enum Msg {
    Input(String),
    Commit(String),
    Submit,
}

pub struct SearchBox {
    value: String,
    pending: Option<Timeout>,
}

impl Component for SearchBox {
    type Message = Msg;
    type Properties = SearchBoxProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            value: String::new(),
            pending: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(value) => {
                self.value = value.clone();
                let link = ctx.link().clone();
                // replacing the handle cancels the previous timer
                self.pending = Some(Timeout::new(DEBOUNCE_MS, move || {
                    link.send_message(Msg::Commit(value));
                }));
                false
            }
            Msg::Commit(value) => {
                self.pending = None;
                if value == self.value {
                    ctx.props().on_search.emit(value);
                }
                false
            }
            Msg::Submit => {
                self.pending = None;
                ctx.props().on_search.emit(self.value.clone());
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <input
                class="search-box"
                type="search"
                placeholder={ctx.props().placeholder.clone()}
                value={self.value.clone()}
                oninput={link.callback(|e: InputEvent| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    Msg::Input(input.value())
                })}
                onkeydown={link.batch_callback(|e: KeyboardEvent| {
                    (e.key() == "Enter").then_some(Msg::Submit)
                })}
            />
        }
    }
}
