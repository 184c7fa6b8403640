use common::model::legal::LegalDocument;
use yew::prelude::*;

use crate::api::client::ApiError;
use crate::api::legal;
use crate::components::status::{ErrorState, LoadingState};
use crate::locale::Locale;

#[derive(Clone, Copy, PartialEq)]
pub enum LegalKind {
    Terms,
    Privacy,
}

#[derive(Properties, PartialEq)]
pub struct LegalProps {
    pub locale: Locale,
    pub kind: LegalKind,
}

pub enum Msg {
    Loaded(Result<LegalDocument, ApiError>),
    Retry,
}

pub struct LegalPage {
    document: Option<LegalDocument>,
    loading: bool,
    error: Option<String>,
}

impl LegalPage {
    fn fetch(ctx: &Context<Self>) {
        let locale = ctx.props().locale;
        let kind = ctx.props().kind;
        ctx.link().send_future(async move {
            let result = match kind {
                LegalKind::Terms => legal::terms_and_conditions(locale).await,
                LegalKind::Privacy => legal::privacy_policy(locale).await,
            };
            Msg::Loaded(result)
        });
    }
}

impl Component for LegalPage {
    type Message = Msg;
    type Properties = LegalProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::fetch(ctx);
        Self {
            document: None,
            loading: true,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(document)) => {
                self.document = Some(document);
                self.loading = false;
                true
            }
            Msg::Loaded(Err(err)) => {
                self.loading = false;
                self.error = Some(err.to_string());
                true
            }
            Msg::Retry => {
                self.loading = true;
                self.error = None;
                Self::fetch(ctx);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // locale or document switch: refetch
        self.loading = true;
        self.error = None;
        self.document = None;
        Self::fetch(ctx);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <LoadingState /> };
        }
        if let Some(error) = &self.error {
            return html! {
                <ErrorState
                    message={error.clone()}
                    on_retry={ctx.link().callback(|_| Msg::Retry)}
                />
            };
        }
        let Some(document) = &self.document else {
            return html! {};
        };

        html! {
            <article class="legal-page">
                <h1>{ document.title.clone() }</h1>
                {
                    document.introduction.as_ref().map(|intro| html! {
                        <p class="legal-introduction">{ intro.clone() }</p>
                    })
                }
                {
                    for document.sections.iter().map(|section| html! {
                        <section>
                            <h2>{ section.title.clone() }</h2>
                            <p>{ section.content.clone() }</p>
                        </section>
                    })
                }
                {
                    document.last_updated.as_ref().map(|date| html! {
                        <p class="legal-updated">{ format!("Last updated: {date}") }</p>
                    })
                }
            </article>
        }
    }
}
