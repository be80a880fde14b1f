//! Browser-backed token storage and navigation

use crate::effects::Page;
use crate::runtime::Navigator;
use tracing::warn;
use web_sys::Storage;
use worksheet_core::{ClientConfig, TokenStore};

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Raw token in `window.localStorage`
///
/// The value is stored as-is, not JSON encoded, so other scripts reading
/// the same key see the bare token.
#[derive(Debug, Clone, Copy)]
pub struct LocalStorageTokenStore {
    key: &'static str,
}

impl LocalStorageTokenStore {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl Default for LocalStorageTokenStore {
    fn default() -> Self {
        Self::new(ClientConfig::TOKEN_STORAGE_KEY)
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(self.key).ok().flatten())
    }

    fn save(&self, token: &str) {
        match local_storage() {
            Some(storage) => {
                if let Err(err) = storage.set_item(self.key, token) {
                    warn!(?err, "failed to persist token");
                }
            }
            None => warn!("localStorage unavailable, token not persisted"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.remove_item(self.key) {
                warn!(?err, "failed to remove token");
            }
        }
    }
}

/// Navigates by assigning `window.location`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, page: Page) {
        if let Err(err) = gloo::utils::window().location().set_href(page.path()) {
            warn!(?err, path = page.path(), "navigation failed");
        }
    }
}

/// Page named by the `data-page` attribute on `<body>`
pub fn current_page() -> Option<Page> {
    gloo::utils::body()
        .get_attribute("data-page")
        .and_then(|marker| Page::from_marker(&marker))
}
