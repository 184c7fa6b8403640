//! Public application page: the job details plus the application form.
//!
//! Validation failures (missing fields, wrong CV type, oversized CV) are
//! reported inline before any network call; only a valid form reaches the
//! multipart endpoint.

use common::model::job::JobOpportunity;
use uuid::Uuid;
use yew::prelude::*;

use crate::api::client::ApiError;
use crate::api::jobs::{self, ApplicationDraft, CvMeta};
use crate::components::alert::{Alert, AlertKind};
use crate::components::status::{ErrorState, LoadingState};
use crate::components::toast::{show_toast, ToastLevel};
use crate::locale::Locale;

#[derive(Properties, PartialEq)]
pub struct ApplyProps {
    pub locale: Locale,
    pub id: i64,
}

pub enum Msg {
    JobLoaded(Result<JobOpportunity, ApiError>),
    SetName(String),
    SetEmail(String),
    SetPhone(String),
    CvSelected(Option<web_sys::File>),
    Submit,
    Submitted(Result<(), ApiError>),
    DismissAlert,
}

pub struct ApplyPage {
    job: Option<JobOpportunity>,
    loading: bool,
    load_error: Option<String>,

    name: String,
    email: String,
    phone: String,
    cv: Option<web_sys::File>,
    submitting: bool,
    submitted: bool,
    alert: Option<(AlertKind, String)>,
    cv_input_id: String,
}

impl ApplyPage {
    fn draft(&self) -> ApplicationDraft {
        ApplicationDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            cv: self.cv.as_ref().map(|file| CvMeta {
                file_name: file.name(),
                size: file.size() as u64,
            }),
        }
    }
}

impl Component for ApplyPage {
    type Message = Msg;
    type Properties = ApplyProps;

    fn create(ctx: &Context<Self>) -> Self {
        let id = ctx.props().id;
        ctx.link()
            .send_future(async move { Msg::JobLoaded(jobs::get(id).await) });

        Self {
            job: None,
            loading: true,
            load_error: None,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            cv: None,
            submitting: false,
            submitted: false,
            alert: None,
            cv_input_id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::JobLoaded(Ok(job)) => {
                self.job = Some(job);
                self.loading = false;
                true
            }
            Msg::JobLoaded(Err(err)) => {
                self.loading = false;
                self.load_error = Some(err.to_string());
                true
            }
            Msg::SetName(value) => {
                self.name = value;
                false
            }
            Msg::SetEmail(value) => {
                self.email = value;
                false
            }
            Msg::SetPhone(value) => {
                self.phone = value;
                false
            }
            Msg::CvSelected(file) => {
                self.cv = file;
                true
            }
            Msg::Submit => {
                let draft = self.draft();
                if let Err(err) = jobs::validate_application(&draft) {
                    self.alert = Some((AlertKind::Error, err.to_string()));
                    return true;
                }
                let Some(cv_file) = self.cv.clone() else {
                    return false;
                };
                self.submitting = true;
                self.alert = None;
                let id = ctx.props().id;
                ctx.link().send_future(async move {
                    Msg::Submitted(jobs::apply(id, &draft, &cv_file).await)
                });
                true
            }
            Msg::Submitted(Ok(())) => {
                self.submitting = false;
                self.submitted = true;
                show_toast(ToastLevel::Success, "Application sent. Good luck!");
                true
            }
            Msg::Submitted(Err(err)) => {
                self.submitting = false;
                let message = match err {
                    ApiError::PayloadTooLarge(message) => message,
                    other => other.to_string(),
                };
                self.alert = Some((AlertKind::Error, message));
                true
            }
            Msg::DismissAlert => {
                self.alert = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <LoadingState /> };
        }
        if let Some(error) = &self.load_error {
            return html! { <ErrorState message={error.clone()} /> };
        }
        let Some(job) = &self.job else {
            return html! {};
        };

        html! {
            <div class="apply-page">
                { job_summary(job) }
                { self.application_form(ctx) }
            </div>
        }
    }
}

fn job_summary(job: &JobOpportunity) -> Html {
    let detail = |label: &str, value: &str| -> Html {
        if value.is_empty() {
            return html! {};
        }
        html! {
            <div class="job-detail">
                <span class="job-detail-label">{ label.to_string() }</span>
                <span>{ value.to_string() }</span>
            </div>
        }
    };

    html! {
        <section class="job-summary">
            <h1>{ job.title.clone() }</h1>
            { detail("Company", job.company_name()) }
            { detail("Location", job.location()) }
            { detail("Type", job.job_type()) }
            { detail("Experience", job.experience()) }
            { detail("Industry", job.industry()) }
            { detail("Salary", job.salary_range()) }
            { detail("Reference", job.reference()) }
            <p class="job-information">{ job.information().to_string() }</p>
        </section>
    }
}

impl ApplyPage {
    fn application_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        if self.submitted {
            return html! {
                <section class="application-form">
                    <h2>{ "Application received" }</h2>
                    <p>{ "Thank you for applying. We will be in touch." }</p>
                </section>
            };
        }

        let on_cv_change = link.callback(|e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            Msg::CvSelected(input.files().and_then(|files| files.get(0)))
        });

        html! {
            <section class="application-form">
                <h2>{ "Apply for this position" }</h2>
                {
                    self.alert.as_ref().map(|(kind, message)| html! {
                        <Alert
                            kind={*kind}
                            message={message.clone()}
                            on_dismiss={link.callback(|_| Msg::DismissAlert)}
                        />
                    })
                }
                <form onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <label>
                        { "Name" }
                        <input
                            value={self.name.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                Msg::SetName(input.value())
                            })}
                        />
                    </label>
                    <label>
                        { "Email" }
                        <input
                            type="email"
                            value={self.email.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                Msg::SetEmail(input.value())
                            })}
                        />
                    </label>
                    <label>
                        { "Phone" }
                        <input
                            type="tel"
                            value={self.phone.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                Msg::SetPhone(input.value())
                            })}
                        />
                    </label>
                    <label for={self.cv_input_id.clone()}>
                        { "CV (.pdf, .doc or .docx, up to 10MB)" }
                    </label>
                    <input
                        id={self.cv_input_id.clone()}
                        type="file"
                        accept=".pdf,.doc,.docx"
                        onchange={on_cv_change}
                    />
                    {
                        self.cv.as_ref().map(|file| html! {
                            <span class="cv-file-name">{ file.name() }</span>
                        })
                    }
                    <button class="btn btn-primary" type="submit" disabled={self.submitting}>
                        { if self.submitting { "Sending..." } else { "Submit application" } }
                    </button>
                </form>
            </section>
        }
    }
}
