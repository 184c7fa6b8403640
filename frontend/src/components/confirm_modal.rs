use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or(AttrValue::Static("Confirm"))]
    pub confirm_label: AttrValue,
    #[prop_or(AttrValue::Static("Cancel"))]
    pub cancel_label: AttrValue,
    /// Styles the confirm button for a destructive action.
    #[prop_or_default]
    pub danger: bool,
    /// Disables the confirm button while the action is in flight.
    #[prop_or_default]
    pub pending: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Blocking confirmation dialog. Only destructive or sensitive actions go
/// through here; routine errors use toasts instead.
pub struct ConfirmModal;

impl Component for ConfirmModal {
    type Message = ();
    type Properties = ConfirmModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_confirm = props.on_confirm.clone();
        let on_cancel = props.on_cancel.clone();
        let confirm_class = if props.danger {
            "btn btn-danger"
        } else {
            "btn btn-primary"
        };

        html! {
            <div class="modal-overlay">
                <div class="modal" role="dialog" aria-modal="true">
                    <h3 class="modal-title">{ props.title.clone() }</h3>
                    <p class="modal-message">{ props.message.clone() }</p>
                    <div class="modal-actions">
                        <button
                            class="btn btn-outline"
                            disabled={props.pending}
                            onclick={Callback::from(move |_| on_cancel.emit(()))}
                        >
                            { props.cancel_label.clone() }
                        </button>
                        <button
                            class={confirm_class}
                            disabled={props.pending}
                            onclick={Callback::from(move |_| on_confirm.emit(()))}
                        >
                            { props.confirm_label.clone() }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
