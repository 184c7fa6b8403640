//! Client-side persistent cache for the session user and tenant branding.
//!
//! Storage is per-tab-synchronous browser local storage behind an
//! injectable [`kv::KeyValueStore`], with a notification layer on top:
//! custom window events for same-tab listeners (the native `storage` event
//! never fires in the tab that performed the write) and the native
//! `storage` event for other tabs of the same origin.

pub mod events;
pub mod kv;
pub mod session;

pub use session::{store, AppStore};
