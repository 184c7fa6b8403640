//! User management, owner-only: list, create, edit, password reset,
//! activate/deactivate, delete. The table runs in client-side mode over
//! the fetched set (sorting and paging happen locally); search is still
//! resolved by the backend, and a new result set snaps the table back to
//! page 1.

use common::model::page::Paginated;
use common::model::user::{SessionUser, UserRole};
use common::requests::{CreateUserRequest, UpdateUserRequest};
use yew::prelude::*;

use crate::api::client::ApiError;
use crate::api::{users, ListQuery};
use crate::components::confirm_modal::ConfirmModal;
use crate::components::data_table::{Column, DataTable};
use crate::components::protected_route::ProtectedRoute;
use crate::components::search_box::SearchBox;
use crate::components::status::{ErrorState, LoadingState};
use crate::components::toast::{show_toast, ToastLevel};
use crate::locale::Locale;

/// Upper bound on the fetched set; the table pages locally below it.
const FETCH_LIMIT: u32 = 100;
const PAGE_SIZE: usize = 10;

#[derive(Properties, PartialEq)]
pub struct UsersProps {
    pub locale: Locale,
}

#[derive(Clone, Copy, PartialEq)]
pub enum DraftField {
    FullName,
    Username,
    Email,
    Password,
}

#[derive(Clone)]
struct UserDraft {
    id: Option<i64>,
    full_name: String,
    username: String,
    email: String,
    password: String,
    role: UserRole,
    active: bool,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            id: None,
            full_name: String::new(),
            username: String::new(),
            email: String::new(),
            password: String::new(),
            role: UserRole::Admin,
            active: true,
        }
    }
}

pub enum Msg {
    Loaded(Result<Paginated<SessionUser>, ApiError>),
    Search(String),
    OpenCreate,
    OpenEdit(SessionUser),
    CloseModal,
    Draft(DraftField, String),
    DraftRole(String),
    Save,
    Saved(Result<SessionUser, ApiError>),
    AskDelete(SessionUser),
    CancelDelete,
    ConfirmDelete,
    Deleted(Result<(), ApiError>),
    AskToggle(SessionUser),
    CancelToggle,
    ConfirmToggle,
    Toggled(Result<(), ApiError>),
    OpenReset(SessionUser),
    SetResetPassword(String),
    CancelReset,
    ConfirmReset,
    ResetDone(Result<(), ApiError>),
    Retry,
}

pub struct UsersPage {
    users: Vec<SessionUser>,
    search: String,
    loading: bool,
    error: Option<String>,

    draft: Option<UserDraft>,
    draft_error: Option<String>,
    saving: bool,

    pending_delete: Option<SessionUser>,
    deleting: bool,
    pending_toggle: Option<SessionUser>,
    toggling: bool,

    reset_target: Option<SessionUser>,
    reset_password: String,
    resetting: bool,
}

impl UsersPage {
    fn fetch(&self, ctx: &Context<Self>) {
        let query = ListQuery {
            limit: Some(FETCH_LIMIT),
            search: (!self.search.is_empty()).then(|| self.search.clone()),
            ..ListQuery::default()
        };
        ctx.link()
            .send_future(async move { Msg::Loaded(users::list(&query).await) });
    }

    fn refetch(&mut self, ctx: &Context<Self>) {
        self.loading = true;
        self.fetch(ctx);
    }
}

impl Component for UsersPage {
    type Message = Msg;
    type Properties = UsersProps;

    fn create(ctx: &Context<Self>) -> Self {
        let page = Self {
            users: Vec::new(),
            search: String::new(),
            loading: true,
            error: None,
            draft: None,
            draft_error: None,
            saving: false,
            pending_delete: None,
            deleting: false,
            pending_toggle: None,
            toggling: false,
            reset_target: None,
            reset_password: String::new(),
            resetting: false,
        };
        page.fetch(ctx);
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(page)) => {
                self.users = page.data;
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
                self.refetch(ctx);
                true
            }
            Msg::OpenCreate => {
                self.draft = Some(UserDraft::default());
                self.draft_error = None;
                true
            }
            Msg::OpenEdit(user) => {
                self.draft = Some(UserDraft {
                    id: Some(user.id),
                    full_name: user.full_name.clone(),
                    username: user.username.clone(),
                    email: user.email.clone(),
                    password: String::new(),
                    role: user.role,
                    active: user.active,
                });
                self.draft_error = None;
                true
            }
            Msg::CloseModal => {
                self.draft = None;
                true
            }
            Msg::Draft(field, value) => {
                if let Some(draft) = &mut self.draft {
                    match field {
                        DraftField::FullName => draft.full_name = value,
                        DraftField::Username => draft.username = value,
                        DraftField::Email => draft.email = value,
                        DraftField::Password => draft.password = value,
                    }
                }
                false
            }
            Msg::DraftRole(value) => {
                if let Some(draft) = &mut self.draft {
                    draft.role = match value.as_str() {
                        "owner" => UserRole::Owner,
                        _ => UserRole::Admin,
                    };
                }
                false
            }
            Msg::Save => {
                let Some(draft) = self.draft.clone() else {
                    return false;
                };
                if draft.full_name.trim().is_empty()
                    || draft.username.trim().is_empty()
                    || draft.email.trim().is_empty()
                {
                    self.draft_error =
                        Some("Name, username and email are required".to_string());
                    return true;
                }
                if draft.id.is_none() && draft.password.is_empty() {
                    self.draft_error = Some("Password is required".to_string());
                    return true;
                }
                self.saving = true;
                self.draft_error = None;
                ctx.link().send_future(async move {
                    let result = match draft.id {
                        None => {
                            let request = CreateUserRequest {
                                full_name: draft.full_name.trim().to_string(),
                                username: draft.username.trim().to_string(),
                                email: draft.email.trim().to_string(),
                                password: draft.password.clone(),
                                role: draft.role,
                            };
                            users::create(&request).await
                        }
                        Some(id) => {
                            let request = UpdateUserRequest {
                                username: Some(draft.username.trim().to_string()),
                                email: Some(draft.email.trim().to_string()),
                                password: (!draft.password.is_empty())
                                    .then(|| draft.password.clone()),
                                role: Some(draft.role),
                                active: Some(draft.active),
                            };
                            users::update(id, &request).await
                        }
                    };
                    Msg::Saved(result)
                });
                true
            }
            Msg::Saved(Ok(_)) => {
                self.saving = false;
                self.draft = None;
                show_toast(ToastLevel::Success, "User saved");
                self.refetch(ctx);
                true
            }
            Msg::Saved(Err(err)) => {
                self.saving = false;
                self.draft_error = Some(err.to_string());
                true
            }
            Msg::AskDelete(user) => {
                self.pending_delete = Some(user);
                true
            }
            Msg::CancelDelete => {
                self.pending_delete = None;
                true
            }
            Msg::ConfirmDelete => {
                let Some(user) = &self.pending_delete else {
                    return false;
                };
                self.deleting = true;
                let id = user.id;
                ctx.link()
                    .send_future(async move { Msg::Deleted(users::remove(id).await) });
                true
            }
            Msg::Deleted(result) => {
                self.deleting = false;
                self.pending_delete = None;
                match result {
                    Ok(()) => show_toast(ToastLevel::Success, "User deleted"),
                    Err(err) => show_toast(ToastLevel::Error, &err.to_string()),
                }
                self.refetch(ctx);
                true
            }
            Msg::AskToggle(user) => {
                self.pending_toggle = Some(user);
                true
            }
            Msg::CancelToggle => {
                self.pending_toggle = None;
                true
            }
            Msg::ConfirmToggle => {
                let Some(user) = &self.pending_toggle else {
                    return false;
                };
                self.toggling = true;
                let id = user.id;
                let deactivating = user.active;
                ctx.link().send_future(async move {
                    let result = if deactivating {
                        users::deactivate(id).await
                    } else {
                        users::activate(id).await
                    };
                    Msg::Toggled(result)
                });
                true
            }
            Msg::Toggled(result) => {
                self.toggling = false;
                self.pending_toggle = None;
                match result {
                    Ok(()) => show_toast(ToastLevel::Success, "User updated"),
                    Err(err) => show_toast(ToastLevel::Error, &err.to_string()),
                }
                self.refetch(ctx);
                true
            }
            Msg::OpenReset(user) => {
                self.reset_target = Some(user);
                self.reset_password = String::new();
                true
            }
            Msg::SetResetPassword(value) => {
                self.reset_password = value;
                false
            }
            Msg::CancelReset => {
                self.reset_target = None;
                true
            }
            Msg::ConfirmReset => {
                let Some(user) = &self.reset_target else {
                    return false;
                };
                if self.reset_password.is_empty() {
                    show_toast(ToastLevel::Error, "New password is required");
                    return false;
                }
                self.resetting = true;
                let id = user.id;
                let password = self.reset_password.clone();
                ctx.link().send_future(async move {
                    Msg::ResetDone(users::reset_password(id, &password).await)
                });
                true
            }
            Msg::ResetDone(result) => {
                self.resetting = false;
                self.reset_target = None;
                self.reset_password = String::new();
                match result {
                    Ok(()) => show_toast(ToastLevel::Success, "Password reset"),
                    Err(err) => show_toast(ToastLevel::Error, &err.to_string()),
                }
                true
            }
            Msg::Retry => {
                self.error = None;
                self.refetch(ctx);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let locale = ctx.props().locale;

        let columns = vec![
            Column::<SessionUser>::new("full_name", "Name").sortable(),
            Column::new("username", "Username").sortable(),
            Column::new("email", "Email").sortable(),
            Column::new("role", "Role").sortable(),
            Column::new("active", "Status").sortable(),
        ];

        let actions = {
            let link = link.clone();
            Callback::from(move |user: SessionUser| {
                let edit_user = user.clone();
                let reset_user = user.clone();
                let toggle_user = user.clone();
                let toggle_label = if user.active { "Deactivate" } else { "Activate" };
                let on_edit = link.callback(move |_| Msg::OpenEdit(edit_user.clone()));
                let on_reset = link.callback(move |_| Msg::OpenReset(reset_user.clone()));
                let on_toggle = link.callback(move |_| Msg::AskToggle(toggle_user.clone()));
                let on_delete = link.callback(move |_| Msg::AskDelete(user.clone()));
                html! {
                    <>
                        <button class="btn btn-sm btn-outline" onclick={on_edit}>{ "Edit" }</button>
                        <button class="btn btn-sm btn-outline" onclick={on_reset}>{ "Reset password" }</button>
                        <button class="btn btn-sm btn-outline" onclick={on_toggle}>{ toggle_label }</button>
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
                <DataTable<SessionUser>
                    rows={self.users.clone()}
                    {columns}
                    page_size={PAGE_SIZE}
                    {actions}
                />
            }
        };

        html! {
            <ProtectedRoute {locale} roles={vec![UserRole::Owner]}>
                <div class="admin-page">
                    <div class="admin-page-header">
                        <h1>{ "Users" }</h1>
                        <button class="btn btn-primary" onclick={link.callback(|_| Msg::OpenCreate)}>
                            { "New user" }
                        </button>
                    </div>
                    <SearchBox
                        placeholder="Search users..."
                        on_search={link.callback(Msg::Search)}
                    />
                    { body }
                    { self.user_modal(ctx) }
                    { self.reset_modal(ctx) }
                    {
                        self.pending_delete.as_ref().map(|user| html! {
                            <ConfirmModal
                                title="Delete user"
                                message={format!("Delete {}? This cannot be undone.", user.username)}
                                confirm_label="Delete"
                                danger={true}
                                pending={self.deleting}
                                on_confirm={link.callback(|_| Msg::ConfirmDelete)}
                                on_cancel={link.callback(|_| Msg::CancelDelete)}
                            />
                        })
                    }
                    {
                        self.pending_toggle.as_ref().map(|user| {
                            let (title, message) = if user.active {
                                (
                                    "Deactivate user",
                                    format!("Deactivate {}? They will no longer be able to sign in.", user.username),
                                )
                            } else {
                                ("Activate user", format!("Reactivate {}?", user.username))
                            };
                            html! {
                                <ConfirmModal
                                    {title}
                                    {message}
                                    danger={user.active}
                                    pending={self.toggling}
                                    on_confirm={link.callback(|_| Msg::ConfirmToggle)}
                                    on_cancel={link.callback(|_| Msg::CancelToggle)}
                                />
                            }
                        })
                    }
                </div>
            </ProtectedRoute>
        }
    }
}

impl UsersPage {
    fn user_modal(&self, ctx: &Context<Self>) -> Html {
        let Some(draft) = &self.draft else {
            return html! {};
        };
        let link = ctx.link();
        let creating = draft.id.is_none();

        let field_input = |label: &'static str,
                           field: DraftField,
                           value: &str,
                           input_type: &'static str| {
            let oninput = link.callback(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                Msg::Draft(field, input.value())
            });
            html! {
                <label>
                    { label }
                    <input type={input_type} value={value.to_string()} {oninput} />
                </label>
            }
        };

        html! {
            <div class="modal-overlay">
                <div class="modal" role="dialog" aria-modal="true">
                    <h3 class="modal-title">
                        { if creating { "New user" } else { "Edit user" } }
                    </h3>
                    {
                        self.draft_error.as_ref().map(|message| html! {
                            <p class="modal-error">{ message.clone() }</p>
                        })
                    }
                    { field_input("Full name", DraftField::FullName, &draft.full_name, "text") }
                    { field_input("Username", DraftField::Username, &draft.username, "text") }
                    { field_input("Email", DraftField::Email, &draft.email, "email") }
                    {
                        field_input(
                            if creating { "Password" } else { "Password (leave empty to keep)" },
                            DraftField::Password,
                            &draft.password,
                            "password",
                        )
                    }
                    <label>
                        { "Role" }
                        <select onchange={link.callback(|e: Event| {
                            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
                            Msg::DraftRole(select.value())
                        })}>
                            <option value="admin" selected={draft.role == UserRole::Admin}>{ "Admin" }</option>
                            <option value="owner" selected={draft.role == UserRole::Owner}>{ "Owner" }</option>
                        </select>
                    </label>
                    <div class="modal-actions">
                        <button
                            class="btn btn-outline"
                            disabled={self.saving}
                            onclick={link.callback(|_| Msg::CloseModal)}
                        >
                            { "Cancel" }
                        </button>
                        <button
                            class="btn btn-primary"
                            disabled={self.saving}
                            onclick={link.callback(|_| Msg::Save)}
                        >
                            { if self.saving { "Saving..." } else { "Save" } }
                        </button>
                    </div>
                </div>
            </div>
        }
    }

    fn reset_modal(&self, ctx: &Context<Self>) -> Html {
        let Some(user) = &self.reset_target else {
            return html! {};
        };
        let link = ctx.link();

        html! {
            <div class="modal-overlay">
                <div class="modal" role="dialog" aria-modal="true">
                    <h3 class="modal-title">{ format!("Reset password for {}", user.username) }</h3>
                    <label>
                        { "New password" }
                        <input
                            type="password"
                            value={self.reset_password.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                                Msg::SetResetPassword(input.value())
                            })}
                        />
                    </label>
                    <div class="modal-actions">
                        <button
                            class="btn btn-outline"
                            disabled={self.resetting}
                            onclick={link.callback(|_| Msg::CancelReset)}
                        >
                            { "Cancel" }
                        </button>
                        <button
                            class="btn btn-primary"
                            disabled={self.resetting}
                            onclick={link.callback(|_| Msg::ConfirmReset)}
                        >
                            { if self.resetting { "Resetting..." } else { "Reset" } }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
