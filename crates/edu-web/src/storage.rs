//! Browser token storage

use edu_core::auth_store::normalize_token;
use edu_core::{AuthStore, ClientError, Result, TOKEN_KEY};

/// `AuthStore` over `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageAuthStore;

fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| ClientError::Storage("no browser window".into()))?
        .local_storage()
        .ok()
        .flatten()
        .ok_or_else(|| ClientError::Storage("localStorage unavailable".into()))
}

fn js_error(action: &str) -> ClientError {
    ClientError::Storage(format!("localStorage {action} failed"))
}

impl AuthStore for LocalStorageAuthStore {
    fn get(&self) -> Result<Option<String>> {
        let token = local_storage()?
            .get_item(TOKEN_KEY)
            .map_err(|_| js_error("read"))?;
        Ok(normalize_token(token))
    }

    fn set(&self, token: &str) -> Result<()> {
        local_storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|_| js_error("write"))
    }

    fn clear(&self) -> Result<()> {
        local_storage()?
            .remove_item(TOKEN_KEY)
            .map_err(|_| js_error("remove"))
    }
}
