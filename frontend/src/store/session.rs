//! The session/branding cache itself.
//!
//! The cache is a non-authoritative mirror of server state: it lets the
//! header, navbar, and route gate render before any network round trip
//! completes, but a 401 classified by the API client always overrides it.
//! Writes are last-writer-wins; there is no locking across tabs.

use common::model::configuration::AppInfo;
use common::model::user::SessionUser;
use common::requests::UpdateEmailRequest;

use crate::locale::{Locale, LOCALE_STORAGE_KEY};
use crate::store::events::{
    BrowserEventBus, EventBus, AUTH_USER_REMOVED, COMPANY_NAME_UPDATED, LOGO_UPDATED,
    AUTH_USER_UPDATED,
};
use crate::store::kv::{BrowserStorage, KeyValueStore};

pub const AUTH_USER_KEY: &str = "auth_user";
pub const COMPANY_NAME_KEY: &str = "app_company_name";
pub const LOGO_KEY: &str = "app_logo";
pub const EMAIL_CONFIG_KEY: &str = "email_config";

/// Keys that survive `clear_auth`: locale preferences outlive the session.
const PRESERVED_KEYS: &[&str] = &[LOCALE_STORAGE_KEY];

/// Storage keys the header watches for cross-tab changes.
pub const WATCHED_KEYS: &[&str] = &[AUTH_USER_KEY, COMPANY_NAME_KEY, LOGO_KEY];

pub struct SessionStore<S, E> {
    kv: S,
    bus: E,
}

pub type AppStore = SessionStore<BrowserStorage, BrowserEventBus>;

/// The store as used by components: browser storage plus window events.
pub fn store() -> AppStore {
    SessionStore::new(BrowserStorage, BrowserEventBus)
}

impl<S: KeyValueStore, E: EventBus> SessionStore<S, E> {
    pub fn new(kv: S, bus: E) -> Self {
        Self { kv, bus }
    }

    /// The cached session user, or `None` when absent or unreadable.
    /// A corrupt entry reads as "logged out" rather than erroring.
    pub fn current_user(&self) -> Option<SessionUser> {
        let raw = self.kv.get(AUTH_USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Persists the session user. Does not notify listeners; callers that
    /// want other mounted views to react follow up with
    /// [`Self::notify_user_updated`].
    pub fn set_current_user(&self, user: &SessionUser) {
        if let Ok(json) = serde_json::to_string(user) {
            self.kv.set(AUTH_USER_KEY, &json);
        }
    }

    pub fn notify_user_updated(&self) {
        self.bus.emit(AUTH_USER_UPDATED);
    }

    /// Drops every cached entry except the locale preference keys, which
    /// are saved before the clear and restored after, then announces the
    /// removal to same-tab listeners.
    pub fn clear_auth(&self) {
        let preserved: Vec<(&str, String)> = PRESERVED_KEYS
            .iter()
            .filter_map(|key| self.kv.get(key).map(|value| (*key, value)))
            .collect();

        self.kv.clear();

        for (key, value) in preserved {
            self.kv.set(key, &value);
        }

        self.bus.emit(AUTH_USER_REMOVED);
    }

    pub fn locale(&self) -> Option<Locale> {
        self.kv.get(LOCALE_STORAGE_KEY)?.parse().ok()
    }

    pub fn set_locale(&self, locale: Locale) {
        self.kv.set(LOCALE_STORAGE_KEY, locale.as_str());
    }

    pub fn company_name(&self) -> Option<String> {
        self.kv.get(COMPANY_NAME_KEY)
    }

    pub fn logo(&self) -> Option<String> {
        self.kv.get(LOGO_KEY)
    }

    /// Refreshes the branding mirror from a fetched `AppInfo` without
    /// notifying: the component doing the fetch already has the data, and
    /// other tabs pick the write up through the native storage event.
    pub fn mirror_branding(&self, info: &AppInfo) {
        match &info.company_name {
            Some(name) => self.kv.set(COMPANY_NAME_KEY, name),
            None => self.kv.remove(COMPANY_NAME_KEY),
        }
        match &info.company_logo {
            Some(logo) => self.kv.set(LOGO_KEY, logo),
            None => self.kv.remove(LOGO_KEY),
        }
    }

    /// Mirror write after a successful company-settings save; notifies
    /// same-tab listeners so the header re-renders immediately.
    pub fn set_company_name(&self, name: &str) {
        self.kv.set(COMPANY_NAME_KEY, name);
        self.bus.emit(COMPANY_NAME_UPDATED);
    }

    pub fn set_logo(&self, logo: Option<&str>) {
        match logo {
            Some(logo) => self.kv.set(LOGO_KEY, logo),
            None => self.kv.remove(LOGO_KEY),
        }
        self.bus.emit(LOGO_UPDATED);
    }

    pub fn email_config(&self) -> Option<UpdateEmailRequest> {
        let raw = self.kv.get(EMAIL_CONFIG_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn set_email_config(&self, config: &UpdateEmailRequest) {
        if let Ok(json) = serde_json::to_string(config) {
            self.kv.set(EMAIL_CONFIG_KEY, &json);
        }
    }
}

#[cfg(test)]
mod tests {
    use common::model::user::UserRole;

    use super::*;
    use crate::store::events::fake::RecordingBus;
    use crate::store::kv::fake::MemoryStore;

    fn test_store() -> (SessionStore<MemoryStore, RecordingBus>, MemoryStore, RecordingBus) {
        let kv = MemoryStore::default();
        let bus = RecordingBus::default();
        (SessionStore::new(kv.clone(), bus.clone()), kv, bus)
    }

    fn user() -> SessionUser {
        SessionUser {
            id: 3,
            username: "owner".into(),
            full_name: "The Owner".into(),
            email: "owner@example.com".into(),
            role: UserRole::Owner,
            active: true,
            created_at: "2025-01-01T00:00:00Z".into(),
            updated_at: "2025-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn round_trips_the_session_user() {
        let (store, _, _) = test_store();
        assert!(store.current_user().is_none());
        store.set_current_user(&user());
        assert_eq!(store.current_user(), Some(user()));
    }

    #[test]
    fn corrupt_user_entry_reads_as_logged_out() {
        let (store, kv, _) = test_store();
        kv.set(AUTH_USER_KEY, "{not json");
        assert!(store.current_user().is_none());
    }

    #[test]
    fn clear_auth_preserves_locale_and_drops_everything_else() {
        let (store, kv, bus) = test_store();
        store.set_locale(Locale::Pt);
        store.set_current_user(&user());
        store.set_company_name("Acme");
        store.set_logo(Some("data:image/png;base64,xyz"));

        store.clear_auth();

        assert_eq!(store.locale(), Some(Locale::Pt));
        assert_eq!(kv.keys(), vec![LOCALE_STORAGE_KEY.to_string()]);
        assert!(store.current_user().is_none());
        assert!(store.company_name().is_none());
        assert_eq!(
            bus.emitted.borrow().last().map(String::as_str),
            Some(AUTH_USER_REMOVED)
        );
    }

    #[test]
    fn clear_auth_without_locale_leaves_store_empty() {
        let (store, kv, _) = test_store();
        store.set_current_user(&user());
        store.clear_auth();
        assert_eq!(kv.len(), 0);
    }

    #[test]
    fn set_current_user_does_not_notify() {
        let (store, _, bus) = test_store();
        store.set_current_user(&user());
        assert!(bus.emitted.borrow().is_empty());
        store.notify_user_updated();
        assert_eq!(
            bus.emitted.borrow().as_slice(),
            [AUTH_USER_UPDATED.to_string()]
        );
    }

    #[test]
    fn branding_mirror_round_trips() {
        let (store, _, bus) = test_store();
        store.mirror_branding(&AppInfo {
            company_name: Some("Acme".into()),
            company_logo: Some("data:image/png;base64,abc".into()),
        });
        assert_eq!(store.company_name().as_deref(), Some("Acme"));
        assert_eq!(store.logo().as_deref(), Some("data:image/png;base64,abc"));
        // mirroring a fetch is silent
        assert!(bus.emitted.borrow().is_empty());

        store.set_company_name("Acme Inc");
        store.set_logo(None);
        assert!(store.logo().is_none());
        assert_eq!(
            bus.emitted.borrow().as_slice(),
            [COMPANY_NAME_UPDATED.to_string(), LOGO_UPDATED.to_string()]
        );
    }

    #[test]
    fn email_config_mirror_round_trips() {
        let (store, _, _) = test_store();
        let config = UpdateEmailRequest {
            recipient_emails: Some("hr@example.com".into()),
            copy_emails: None,
            blind_copy_emails: Some("audit@example.com".into()),
        };
        store.set_email_config(&config);
        let back = store.email_config().unwrap();
        assert_eq!(back.recipient_emails.as_deref(), Some("hr@example.com"));
        assert!(back.copy_emails.is_none());
        assert_eq!(back.blind_copy_emails.as_deref(), Some("audit@example.com"));
    }
}
