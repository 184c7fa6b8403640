//! Tenant settings, owner-only: company branding, notification email
//! routing, and an SMTP connectivity probe.
//!
//! Successful saves write the local mirror immediately so the header (and
//! any other tab) picks the change up without waiting for a refetch; the
//! mirror is also the fallback when the configuration fetch fails.

use base64::engine::general_purpose;
use base64::Engine as _;
use common::model::configuration::Configuration;
use common::model::user::UserRole;
use common::requests::{SmtpConnectionStatus, SmtpTestResponse, UpdateCompanyRequest, UpdateEmailRequest};
use gloo_file::{futures::read_as_bytes, Blob};
use regex::Regex;
use uuid::Uuid;
use yew::prelude::*;

use crate::api::client::ApiError;
use crate::api::{configuration, mail};
use crate::components::protected_route::ProtectedRoute;
use crate::components::status::LoadingState;
use crate::components::toast::{show_toast, ToastLevel};
use crate::locale::Locale;
use crate::store;

#[derive(Properties, PartialEq)]
pub struct SettingsProps {
    pub locale: Locale,
}

pub enum Msg {
    Loaded(Result<Configuration, ApiError>),
    SetCompanyName(String),
    LogoPicked(web_sys::File),
    LogoLoaded(String),
    ClearLogo,
    SaveCompany,
    CompanySaved(Result<Configuration, ApiError>),
    SetRecipients(String),
    SetCopies(String),
    SetBlindCopies(String),
    SaveEmail,
    EmailSaved(Result<Configuration, ApiError>),
    RunSmtpTest,
    SmtpTested(Result<SmtpTestResponse, ApiError>),
}

pub struct SettingsPage {
    loading: bool,

    company_name: String,
    logo: Option<String>,
    saving_company: bool,

    recipient_emails: String,
    copy_emails: String,
    blind_copy_emails: String,
    saving_email: bool,

    testing: bool,
    test_result: Option<(bool, Option<String>)>,

    logo_input_id: String,
}

/// Accepts a comma-separated list of addresses; an empty list is fine.
pub fn valid_email_list(list: &str) -> bool {
    let pattern = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .all(|entry| pattern.is_match(entry))
}

fn opt_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl SettingsPage {
    fn apply_configuration(&mut self, config: &Configuration) {
        self.company_name = config.company_name.clone().unwrap_or_default();
        self.logo = config.company_logo.clone();
        self.recipient_emails = config.recipient_emails.clone().unwrap_or_default();
        self.copy_emails = config.copy_emails.clone().unwrap_or_default();
        self.blind_copy_emails = config.blind_copy_emails.clone().unwrap_or_default();
    }

    fn apply_mirror_fallback(&mut self) {
        let store = store::store();
        self.company_name = store.company_name().unwrap_or_default();
        self.logo = store.logo();
        if let Some(email) = store.email_config() {
            self.recipient_emails = email.recipient_emails.unwrap_or_default();
            self.copy_emails = email.copy_emails.unwrap_or_default();
            self.blind_copy_emails = email.blind_copy_emails.unwrap_or_default();
        }
    }

    fn email_request(&self) -> UpdateEmailRequest {
        UpdateEmailRequest {
            recipient_emails: opt_field(&self.recipient_emails),
            copy_emails: opt_field(&self.copy_emails),
            blind_copy_emails: opt_field(&self.blind_copy_emails),
        }
    }
}

impl Component for SettingsPage {
    type Message = Msg;
    type Properties = SettingsProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link()
            .send_future(async { Msg::Loaded(configuration::get().await) });

        Self {
            loading: true,
            company_name: String::new(),
            logo: None,
            saving_company: false,
            recipient_emails: String::new(),
            copy_emails: String::new(),
            blind_copy_emails: String::new(),
            saving_email: false,
            testing: false,
            test_result: None,
            logo_input_id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(config)) => {
                self.apply_configuration(&config);
                self.loading = false;
                true
            }
            Msg::Loaded(Err(err)) => {
                gloo_console::warn!("configuration fetch failed:", err.to_string());
                self.apply_mirror_fallback();
                self.loading = false;
                true
            }
            Msg::SetCompanyName(value) => {
                self.company_name = value;
                false
            }
            Msg::LogoPicked(file) => {
                let mime = file.type_();
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let blob = Blob::from(file);
                    if let Ok(bytes) = read_as_bytes(&blob).await {
                        let encoded = general_purpose::STANDARD.encode(&bytes);
                        let mime = if mime.is_empty() {
                            "image/png".to_string()
                        } else {
                            mime
                        };
                        link.send_message(Msg::LogoLoaded(format!(
                            "data:{mime};base64,{encoded}"
                        )));
                    }
                });
                false
            }
            Msg::LogoLoaded(data_uri) => {
                self.logo = Some(data_uri);
                true
            }
            Msg::ClearLogo => {
                self.logo = None;
                true
            }
            Msg::SaveCompany => {
                if self.company_name.trim().is_empty() {
                    show_toast(ToastLevel::Error, "Company name is required");
                    return false;
                }
                self.saving_company = true;
                let request = UpdateCompanyRequest {
                    company_name: opt_field(&self.company_name),
                    company_logo: self.logo.clone(),
                };
                ctx.link().send_future(async move {
                    Msg::CompanySaved(configuration::update_company(&request).await)
                });
                true
            }
            Msg::CompanySaved(Ok(config)) => {
                self.saving_company = false;
                let store = store::store();
                store.set_company_name(config.company_name.as_deref().unwrap_or(""));
                store.set_logo(config.company_logo.as_deref());
                self.apply_configuration(&config);
                show_toast(ToastLevel::Success, "Company settings saved");
                true
            }
            Msg::CompanySaved(Err(err)) => {
                self.saving_company = false;
                show_toast(ToastLevel::Error, &err.to_string());
                true
            }
            Msg::SetRecipients(value) => {
                self.recipient_emails = value;
                false
            }
            Msg::SetCopies(value) => {
                self.copy_emails = value;
                false
            }
            Msg::SetBlindCopies(value) => {
                self.blind_copy_emails = value;
                false
            }
            Msg::SaveEmail => {
                for list in [
                    &self.recipient_emails,
                    &self.copy_emails,
                    &self.blind_copy_emails,
                ] {
                    if !valid_email_list(list) {
                        show_toast(
                            ToastLevel::Error,
                            "Email lists must contain valid, comma-separated addresses",
                        );
                        return false;
                    }
                }
                self.saving_email = true;
                let request = self.email_request();
                ctx.link().send_future(async move {
                    Msg::EmailSaved(configuration::update_email(&request).await)
                });
                true
            }
            Msg::EmailSaved(Ok(config)) => {
                self.saving_email = false;
                store::store().set_email_config(&UpdateEmailRequest {
                    recipient_emails: config.recipient_emails.clone(),
                    copy_emails: config.copy_emails.clone(),
                    blind_copy_emails: config.blind_copy_emails.clone(),
                });
                self.apply_configuration(&config);
                show_toast(ToastLevel::Success, "Email settings saved");
                true
            }
            Msg::EmailSaved(Err(err)) => {
                self.saving_email = false;
                show_toast(ToastLevel::Error, &err.to_string());
                true
            }
            Msg::RunSmtpTest => {
                self.testing = true;
                self.test_result = None;
                ctx.link()
                    .send_future(async { Msg::SmtpTested(mail::test_smtp().await) });
                true
            }
            Msg::SmtpTested(Ok(response)) => {
                self.testing = false;
                let ok = response.connection_status == SmtpConnectionStatus::Ok;
                self.test_result = Some((ok, response.message));
                true
            }
            Msg::SmtpTested(Err(err)) => {
                self.testing = false;
                self.test_result = Some((false, Some(err.to_string())));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let locale = ctx.props().locale;

        let body = if self.loading {
            html! { <LoadingState /> }
        } else {
            html! {
                <>
                    { self.company_section(ctx) }
                    { self.email_section(ctx) }
                    { self.smtp_section(ctx) }
                </>
            }
        };

        html! {
            <ProtectedRoute {locale} roles={vec![UserRole::Owner]}>
                <div class="admin-page settings-page">
                    <h1>{ "Settings" }</h1>
                    { body }
                </div>
            </ProtectedRoute>
        }
    }
}

impl SettingsPage {
    fn company_section(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_logo_change = link.batch_callback(|e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            input
                .files()
                .and_then(|files| files.get(0))
                .map(Msg::LogoPicked)
        });

        html! {
            <section class="settings-section">
                <h2>{ "Company" }</h2>
                <label>
                    { "Company name" }
                    <input
                        value={self.company_name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            Msg::SetCompanyName(input.value())
                        })}
                    />
                </label>
                <label for={self.logo_input_id.clone()}>{ "Logo" }</label>
                <input
                    id={self.logo_input_id.clone()}
                    type="file"
                    accept="image/*"
                    onchange={on_logo_change}
                />
                {
                    self.logo.as_ref().map(|logo| html! {
                        <div class="logo-preview">
                            <img src={logo.clone()} alt="Company logo" />
                            <button
                                class="btn btn-sm btn-outline"
                                onclick={link.callback(|_| Msg::ClearLogo)}
                            >
                                { "Remove logo" }
                            </button>
                        </div>
                    })
                }
                <button
                    class="btn btn-primary"
                    disabled={self.saving_company}
                    onclick={link.callback(|_| Msg::SaveCompany)}
                >
                    { if self.saving_company { "Saving..." } else { "Save company settings" } }
                </button>
            </section>
        }
    }

    fn email_section(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let list_input = |label: &'static str,
                          placeholder: &'static str,
                          value: &str,
                          message: fn(String) -> Msg| {
            let oninput = link.callback(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                message(input.value())
            });
            html! {
                <label>
                    { label }
                    <input value={value.to_string()} {placeholder} {oninput} />
                </label>
            }
        };

        html! {
            <section class="settings-section">
                <h2>{ "Application emails" }</h2>
                {
                    list_input(
                        "Recipients",
                        "recipient1@example.com, recipient2@example.com",
                        &self.recipient_emails,
                        Msg::SetRecipients,
                    )
                }
                {
                    list_input(
                        "Copy",
                        "cc1@example.com, cc2@example.com",
                        &self.copy_emails,
                        Msg::SetCopies,
                    )
                }
                {
                    list_input(
                        "Blind copy",
                        "bcc1@example.com, bcc2@example.com",
                        &self.blind_copy_emails,
                        Msg::SetBlindCopies,
                    )
                }
                <button
                    class="btn btn-primary"
                    disabled={self.saving_email}
                    onclick={link.callback(|_| Msg::SaveEmail)}
                >
                    { if self.saving_email { "Saving..." } else { "Save email settings" } }
                </button>
            </section>
        }
    }

    fn smtp_section(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <section class="settings-section">
                <h2>{ "Mail delivery" }</h2>
                <button
                    class="btn btn-outline"
                    disabled={self.testing}
                    onclick={link.callback(|_| Msg::RunSmtpTest)}
                >
                    { if self.testing { "Testing..." } else { "Test SMTP connection" } }
                </button>
                {
                    self.test_result.as_ref().map(|(ok, message)| {
                        let class = if *ok { "smtp-result ok" } else { "smtp-result failed" };
                        let text = match (ok, message) {
                            (true, _) => "SMTP connection OK".to_string(),
                            (false, Some(message)) => format!("SMTP connection failed: {message}"),
                            (false, None) => "SMTP connection failed".to_string(),
                        };
                        html! { <p {class}>{ text }</p> }
                    })
                }
            </section>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_valid() {
        assert!(valid_email_list(""));
        assert!(valid_email_list("  "));
    }

    #[test]
    fn accepts_comma_separated_addresses() {
        assert!(valid_email_list("hr@example.com"));
        assert!(valid_email_list("hr@example.com, boss@example.com"));
        assert!(valid_email_list(" hr@example.com ,boss@example.com "));
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!(!valid_email_list("not-an-email"));
        assert!(!valid_email_list("hr@example.com, broken@"));
        assert!(!valid_email_list("hr@example.com; boss@example.com"));
    }
}
