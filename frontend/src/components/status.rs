use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingStateProps {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub label: AttrValue,
}

pub struct LoadingState;

impl Component for LoadingState {
    type Message = ();
    type Properties = LoadingStateProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="loading-state">
                <span class="spinner" />
                <span>{ ctx.props().label.clone() }</span>
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorStateProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

pub struct ErrorState;

impl Component for ErrorState {
    type Message = ();
    type Properties = ErrorStateProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div class="error-state">
                <p>{ props.message.clone() }</p>
                {
                    props.on_retry.clone().map(|on_retry| html! {
                        <button
                            class="btn btn-outline"
                            onclick={Callback::from(move |_| on_retry.emit(()))}
                        >
                            { "Retry" }
                        </button>
                    })
                }
            </div>
        }
    }
}
