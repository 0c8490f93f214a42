//! Browser Storage and Navigation
//!
//! localStorage-backed token store and a full-page navigator, the browser
//! halves of the core `TokenStore` and `Navigator` traits.

use kanbanflow_core::api::{Navigator, TokenStore};
use kanbanflow_core::guard::Route;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Session token kept in localStorage under a fixed key
#[derive(Debug, Clone, Copy)]
pub struct LocalTokenStore {
    key: &'static str,
}

impl LocalTokenStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<String> {
        local_storage()?
            .get_item(self.key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(self.key, token).is_err() {
                    log::error!("[SESSION] Could not persist token");
                }
            }
            None => log::error!("[SESSION] localStorage unavailable"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(self.key);
        }
    }
}

/// Navigates by replacing the page location
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        let Some(location) = web_sys::window().map(|win| win.location()) else { return };

        // Already there: a reload would only wipe what the user typed
        if let Ok(current) = location.pathname() {
            if Route::resolve(&current) == Route::resolve(path) {
                return;
            }
        }
        if let Err(e) = location.set_href(path) {
            log::error!("[API] Redirect to {} failed: {:?}", path, e);
        }
    }
}
