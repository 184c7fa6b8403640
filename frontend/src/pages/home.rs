//! Public landing page: searchable, server-paginated list of open
//! positions. Anonymous visitors browse and jump to the application page.

use common::model::job::JobOpportunity;
use common::model::page::Paginated;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::client::ApiError;
use crate::api::{jobs, ListQuery};
use crate::components::data_table::{Column, DataTable};
use crate::components::search_box::SearchBox;
use crate::components::status::{ErrorState, LoadingState};
use crate::locale::Locale;
use crate::routes::Route;

const PAGE_SIZE: u32 = 10;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub locale: Locale,
}

pub enum Msg {
    Loaded(Result<Paginated<JobOpportunity>, ApiError>),
    Search(String),
    PageChanged(usize),
    Open(JobOpportunity),
    Retry,
}

pub struct HomePage {
    jobs: Paginated<JobOpportunity>,
    search: String,
    page: u32,
    loading: bool,
    error: Option<String>,
}

impl HomePage {
    fn fetch(&self, ctx: &Context<Self>) {
        let query = ListQuery {
            page: Some(self.page),
            limit: Some(PAGE_SIZE),
            search: (!self.search.is_empty()).then(|| self.search.clone()),
            ..ListQuery::default()
        };
        ctx.link()
            .send_future(async move { Msg::Loaded(jobs::list(&query).await) });
    }
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = HomeProps;

    fn create(ctx: &Context<Self>) -> Self {
        let page = Self {
            jobs: Paginated::empty(),
            search: String::new(),
            page: 1,
            loading: true,
            error: None,
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
            Msg::Open(job) => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Apply {
                        locale: ctx.props().locale,
                        id: job.id,
                    });
                }
                false
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

        let columns = vec![
            Column::<JobOpportunity>::new("title", "Title"),
            Column::new("location", "Location"),
            Column::new("job_type", "Type"),
            Column::new("experience", "Experience"),
            Column::new("post_date", "Posted"),
        ];

        let apply_action = {
            let link = link.clone();
            Callback::from(move |job: JobOpportunity| {
                let onclick = link.callback(move |_| Msg::Open(job.clone()));
                html! {
                    <button class="btn btn-primary btn-sm" {onclick}>{ "Apply" }</button>
                }
            })
        };

        html! {
            <div class="home-page">
                <section class="hero">
                    <h1>{ "Open positions" }</h1>
                    <p>{ "Find your next role and apply in minutes." }</p>
                    <SearchBox
                        placeholder="Search by title, location or industry..."
                        on_search={link.callback(Msg::Search)}
                    />
                </section>
                {
                    if self.loading {
                        html! { <LoadingState /> }
                    } else if let Some(error) = &self.error {
                        html! {
                            <ErrorState
                                message={error.clone()}
                                on_retry={link.callback(|_| Msg::Retry)}
                            />
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
                                on_page_change={link.callback(Msg::PageChanged)}
                                on_row_click={link.callback(Msg::Open)}
                                actions={apply_action}
                                empty_label="No open positions right now"
                            />
                        }
                    }
                }
            </div>
        }
    }
}
