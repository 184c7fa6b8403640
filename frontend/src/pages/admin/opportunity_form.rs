//! Create/edit form for a job opportunity. The same component serves both
//! modes: with an id it loads the record first, without one it starts
//! blank (the post date prefilled with today).

use common::model::job::JobOpportunity;
use common::model::user::UserRole;
use common::requests::UpsertJobRequest;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::client::ApiError;
use crate::api::jobs;
use crate::components::alert::{Alert, AlertKind};
use crate::components::protected_route::ProtectedRoute;
use crate::components::status::{ErrorState, LoadingState};
use crate::components::toast::{show_toast, ToastLevel};
use crate::locale::Locale;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct OpportunityFormProps {
    pub locale: Locale,
    /// `None` creates, `Some(id)` edits.
    #[prop_or_default]
    pub id: Option<i64>,
}

#[derive(Clone, Copy, PartialEq)]
pub enum Field {
    Title,
    Reference,
    JobType,
    Experience,
    Location,
    Industry,
    Information,
    CompanyName,
    CompanyInfo,
    SalaryRange,
    Currency,
    PostDate,
}

pub enum Msg {
    Loaded(Result<JobOpportunity, ApiError>),
    Edit(Field, String),
    Submit,
    Saved(Result<JobOpportunity, ApiError>),
    Cancel,
    DismissAlert,
}

#[derive(Default, Clone)]
struct JobDraft {
    title: String,
    reference: String,
    job_type: String,
    experience: String,
    location: String,
    industry: String,
    information: String,
    company_name: String,
    company_info: String,
    salary_range: String,
    currency: String,
    post_date: String,
}

impl JobDraft {
    fn from_job(job: &JobOpportunity) -> Self {
        Self {
            title: job.title.clone(),
            reference: job.reference().to_string(),
            job_type: job.job_type().to_string(),
            experience: job.experience().to_string(),
            location: job.location().to_string(),
            industry: job.industry().to_string(),
            information: job.information().to_string(),
            company_name: job.company_name().to_string(),
            company_info: job.company_info().to_string(),
            salary_range: job.salary_range().to_string(),
            currency: job.currency().to_string(),
            post_date: job.post_date().to_string(),
        }
    }

    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Reference => &mut self.reference,
            Field::JobType => &mut self.job_type,
            Field::Experience => &mut self.experience,
            Field::Location => &mut self.location,
            Field::Industry => &mut self.industry,
            Field::Information => &mut self.information,
            Field::CompanyName => &mut self.company_name,
            Field::CompanyInfo => &mut self.company_info,
            Field::SalaryRange => &mut self.salary_range,
            Field::Currency => &mut self.currency,
            Field::PostDate => &mut self.post_date,
        };
        *slot = value;
    }

    /// Empty optional fields travel as `null` rather than empty strings.
    fn to_request(&self) -> UpsertJobRequest {
        let opt = |value: &str| {
            let trimmed = value.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        UpsertJobRequest {
            title: self.title.trim().to_string(),
            reference: opt(&self.reference),
            job_type: opt(&self.job_type),
            experience: opt(&self.experience),
            location: opt(&self.location),
            industry: opt(&self.industry),
            information: opt(&self.information),
            company_name: opt(&self.company_name),
            company_info: opt(&self.company_info),
            salary_range: opt(&self.salary_range),
            currency: opt(&self.currency),
            post_date: opt(&self.post_date),
        }
    }
}

pub struct OpportunityFormPage {
    draft: JobDraft,
    loading: bool,
    load_error: Option<String>,
    saving: bool,
    alert: Option<String>,
}

fn today() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    iso.split('T').next().unwrap_or_default().to_string()
}

impl Component for OpportunityFormPage {
    type Message = Msg;
    type Properties = OpportunityFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let editing = ctx.props().id;
        if let Some(id) = editing {
            ctx.link()
                .send_future(async move { Msg::Loaded(jobs::get(id).await) });
        }

        Self {
            draft: JobDraft {
                post_date: today(),
                ..JobDraft::default()
            },
            loading: editing.is_some(),
            load_error: None,
            saving: false,
            alert: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(job)) => {
                self.draft = JobDraft::from_job(&job);
                self.loading = false;
                true
            }
            Msg::Loaded(Err(err)) => {
                self.loading = false;
                self.load_error = Some(err.to_string());
                true
            }
            Msg::Edit(field, value) => {
                self.draft.set(field, value);
                false
            }
            Msg::Submit => {
                if self.draft.title.trim().is_empty() {
                    self.alert = Some("Title is required".to_string());
                    return true;
                }
                self.saving = true;
                self.alert = None;
                let request = self.draft.to_request();
                let id = ctx.props().id;
                ctx.link().send_future(async move {
                    let result = match id {
                        Some(id) => jobs::update(id, &request).await,
                        None => jobs::create(&request).await,
                    };
                    Msg::Saved(result)
                });
                true
            }
            Msg::Saved(Ok(_)) => {
                self.saving = false;
                show_toast(ToastLevel::Success, "Opportunity saved");
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::AdminOpportunities {
                        locale: ctx.props().locale,
                    });
                }
                false
            }
            Msg::Saved(Err(err)) => {
                self.saving = false;
                self.alert = Some(err.to_string());
                true
            }
            Msg::Cancel => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::AdminOpportunities {
                        locale: ctx.props().locale,
                    });
                }
                false
            }
            Msg::DismissAlert => {
                self.alert = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let locale = ctx.props().locale;
        let editing = ctx.props().id.is_some();

        let body = if self.loading {
            html! { <LoadingState /> }
        } else if let Some(error) = &self.load_error {
            html! { <ErrorState message={error.clone()} /> }
        } else {
            let text_input = |label: &'static str, field: Field, value: &str| {
                let oninput = link.callback(move |e: InputEvent| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    Msg::Edit(field, input.value())
                });
                html! {
                    <label>
                        { label }
                        <input value={value.to_string()} {oninput} />
                    </label>
                }
            };
            let text_area = |label: &'static str, field: Field, value: &str| {
                let oninput = link.callback(move |e: InputEvent| {
                    let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::Edit(field, input.value())
                });
                html! {
                    <label>
                        { label }
                        <textarea value={value.to_string()} rows="6" {oninput} />
                    </label>
                }
            };

            html! {
                <form
                    class="opportunity-form"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    {
                        self.alert.as_ref().map(|message| html! {
                            <Alert
                                kind={AlertKind::Error}
                                message={message.clone()}
                                on_dismiss={link.callback(|_| Msg::DismissAlert)}
                            />
                        })
                    }
                    { text_input("Title", Field::Title, &self.draft.title) }
                    { text_input("Reference", Field::Reference, &self.draft.reference) }
                    { text_input("Type", Field::JobType, &self.draft.job_type) }
                    { text_input("Experience", Field::Experience, &self.draft.experience) }
                    { text_input("Location", Field::Location, &self.draft.location) }
                    { text_input("Industry", Field::Industry, &self.draft.industry) }
                    { text_area("Description", Field::Information, &self.draft.information) }
                    { text_input("Company name", Field::CompanyName, &self.draft.company_name) }
                    { text_area("About the company", Field::CompanyInfo, &self.draft.company_info) }
                    { text_input("Salary range", Field::SalaryRange, &self.draft.salary_range) }
                    { text_input("Currency", Field::Currency, &self.draft.currency) }
                    { text_input("Post date", Field::PostDate, &self.draft.post_date) }
                    <div class="form-actions">
                        <button
                            class="btn btn-outline"
                            type="button"
                            onclick={link.callback(|_| Msg::Cancel)}
                        >
                            { "Cancel" }
                        </button>
                        <button class="btn btn-primary" type="submit" disabled={self.saving}>
                            { if self.saving { "Saving..." } else { "Save" } }
                        </button>
                    </div>
                </form>
            }
        };

        html! {
            <ProtectedRoute {locale} roles={vec![UserRole::Owner, UserRole::Admin]}>
                <div class="admin-page">
                    <h1>{ if editing { "Edit opportunity" } else { "New opportunity" } }</h1>
                    { body }
                </div>
            </ProtectedRoute>
        }
    }
}
