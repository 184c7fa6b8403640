use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum AlertKind {
    Success,
    Error,
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub kind: AlertKind,
    pub message: AttrValue,
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

/// Inline dismissible banner for form-level feedback.
pub struct Alert;

impl Component for Alert {
    type Message = ();
    type Properties = AlertProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let class = match props.kind {
            AlertKind::Success => "alert alert-success",
            AlertKind::Error => "alert alert-error",
        };
        html! {
            <div {class} role="alert">
                <span>{ props.message.clone() }</span>
                {
                    props.on_dismiss.clone().map(|on_dismiss| html! {
                        <button
                            class="alert-dismiss"
                            onclick={Callback::from(move |_| on_dismiss.emit(()))}
                        >
                            { "\u{00d7}" }
                        </button>
                    })
                }
            </div>
        }
    }
}
