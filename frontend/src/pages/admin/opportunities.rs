//! Admin list of job opportunities: server-driven paging and sorting,
//! debounced search, and destructive delete behind a confirmation modal.
//! Every write triggers a fresh fetch of the list; the client never
//! merges results locally.

use common::model::job::JobOpportunity;
use common::model::page::Paginated;
use common::model::user::UserRole;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::client::ApiError;
use crate::api::{jobs, ListQuery};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::data_table::{Column, DataTable, SortDirection, SortSpec};
use crate::components::protected_route::ProtectedRoute;
use crate::components::search_box::SearchBox;
use crate::components::status::{ErrorState, LoadingState};
use crate::components::toast::{show_toast, ToastLevel};
use crate::locale::Locale;
use crate::routes::Route;

const PAGE_SIZE: u32 = 10;

#[derive(Properties, PartialEq)]
pub struct OpportunitiesProps {
    pub locale: Locale,
}

pub enum Msg {
    Loaded(Result<Paginated<JobOpportunity>, ApiError>),
    Search(String),
    PageChanged(usize),
    SortChanged((String, Option<SortDirection>)),
    New,
    Edit(JobOpportunity),
    AskDelete(JobOpportunity),
    CancelDelete,
    ConfirmDelete,
    Deleted(Result<(), ApiError>),
    Retry,
}

pub struct OpportunitiesPage {
    jobs: Paginated<JobOpportunity>,
    search: String,
    page: u32,
    sort: Option<SortSpec>,
    loading: bool,
    error: Option<String>,
    pending_delete: Option<JobOpportunity>,
    deleting: bool,
}

impl OpportunitiesPage {
    fn fetch(&self, ctx: &Context<Self>) {
        let query = ListQuery {
            page: Some(self.page),
            limit: Some(PAGE_SIZE),
            search: (!self.search.is_empty()).then(|| self.search.clone()),
            sort_by: self.sort.as_ref().map(|spec| spec.key.clone()),
            sort_order: self.sort.as_ref().map(|spec| spec.direction),
        };
        ctx.link()
            .send_future(async move { Msg::Loaded(jobs::list(&query).await) });
    }
}

impl Component for OpportunitiesPage {
    type Message = Msg;
    type Properties = OpportunitiesProps;

    fn create(ctx: &Context<Self>) -> Self {
        let page = Self {
            jobs: Paginated::empty(),
            search: String::new(),
            page: 1,
            sort: None,
            loading: true,
            error: None,
            pending_delete: None,
            deleting: false,
        };
        page.fetch(ctx);
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(jobs)) => {
                self.jobs = jobs;
                self.loading = false;
                self.error = None;
                true
            }
            Msg::Loaded(Err(err)) => {
                self.loading = false;
                self.error = Some(err.to_string());
                true
            }
            Msg::Search(term) => {
                self.search = term;
                self.page = 1;
                self.loading = true;
                self.fetch(ctx);
                true
            }
            Msg::PageChanged(page) => {
                self.page = page as u32;
                self.loading = true;
                self.fetch(ctx);
                true
            }
            Msg::SortChanged((key, direction)) => {
                self.sort = direction.map(|direction| SortSpec { key, direction });
                self.page = 1;
                self.loading = true;
                self.fetch(ctx);
                true
            }
            Msg::New => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::AdminOpportunityNew {
                        locale: ctx.props().locale,
                    });
                }
                false
            }
            Msg::Edit(job) => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::AdminOpportunityEdit {
                        locale: ctx.props().locale,
                        id: job.id,
                    });
                }
                false
            }
            Msg::AskDelete(job) => {
                self.pending_delete = Some(job);
                true
            }
            Msg::CancelDelete => {
                self.pending_delete = None;
                true
            }
            Msg::ConfirmDelete => {
                let Some(job) = &self.pending_delete else {
                    return false;
                };
                self.deleting = true;
                let id = job.id;
                ctx.link()
                    .send_future(async move { Msg::Deleted(jobs::remove(id).await) });
                true
            }
            Msg::Deleted(Ok(())) => {
                self.deleting = false;
                self.pending_delete = None;
                self.loading = true;
                show_toast(ToastLevel::Success, "Opportunity deleted");
                self.fetch(ctx);
                true
            }
            Msg::Deleted(Err(err)) => {
                self.deleting = false;
                self.pending_delete = None;
                show_toast(ToastLevel::Error, &err.to_string());
                true
            }
            Msg::Retry => {
                self.loading = true;
                self.error = None;
                self.fetch(ctx);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let locale = ctx.props().locale;

        let columns = vec![
            Column::<JobOpportunity>::new("title", "Title").sortable(),
            Column::new("reference", "Reference"),
            Column::new("location", "Location").sortable(),
            Column::new("job_type", "Type"),
            Column::new("post_date", "Posted").sortable(),
            Column::new("updated_at", "Updated").sortable(),
        ];

        let actions = {
            let link = link.clone();
            Callback::from(move |job: JobOpportunity| {
                let edit_job = job.clone();
                let on_edit = link.callback(move |_| Msg::Edit(edit_job.clone()));
                let on_delete = link.callback(move |_| Msg::AskDelete(job.clone()));
                html! {
                    <>
                        <button class="btn btn-sm btn-outline" onclick={on_edit}>{ "Edit" }</button>
                        <button class="btn btn-sm btn-danger" onclick={on_delete}>{ "Delete" }</button>
                    </>
                }
            })
        };

        let body = if self.loading {
            html! { <LoadingState /> }
        } else if let Some(error) = &self.error {
            html! {
                <ErrorState message={error.clone()} on_retry={link.callback(|_| Msg::Retry)} />
            }
        } else {
            html! {
                <DataTable<JobOpportunity>
                    rows={self.jobs.data.clone()}
                    {columns}
                    page_size={PAGE_SIZE as usize}
                    server_side={true}
                    current_page={Some(self.jobs.page as usize)}
                    total_count={Some(self.jobs.total as usize)}
                    sort={self.sort.clone()}
                    on_page_change={link.callback(Msg::PageChanged)}
                    on_sort_change={link.callback(Msg::SortChanged)}
                    {actions}
                />
            }
        };

        html! {
            <ProtectedRoute {locale} roles={vec![UserRole::Owner, UserRole::Admin]}>
                <div class="admin-page">
                    <div class="admin-page-header">
                        <h1>{ "Opportunities" }</h1>
                        <button class="btn btn-primary" onclick={link.callback(|_| Msg::New)}>
                            { "New opportunity" }
                        </button>
                    </div>
                    <SearchBox
                        placeholder="Search opportunities..."
                        on_search={link.callback(Msg::Search)}
                    />
                    { body }
                    {
                        self.pending_delete.as_ref().map(|job| html! {
                            <ConfirmModal
                                title="Delete opportunity"
                                message={format!("Delete \"{}\"? This cannot be undone.", job.title)}
                                confirm_label="Delete"
                                danger={true}
                                pending={self.deleting}
                                on_confirm={link.callback(|_| Msg::ConfirmDelete)}
                                on_cancel={link.callback(|_| Msg::CancelDelete)}
                            />
                        })
                    }
                </div>
            </ProtectedRoute>
        }
    }
}
