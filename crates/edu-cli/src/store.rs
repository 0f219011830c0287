//! Token file storage

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use edu_core::auth_store::normalize_token;
use edu_core::{AuthStore, ClientError, Result};

/// Where the token lives when `--token-file` is not given
pub fn default_token_path() -> PathBuf {
    std::env::var_os("HOME")
        .map_or_else(|| PathBuf::from("."), PathBuf::from)
        .join(".edu-agent")
        .join("token")
}

/// `AuthStore` persisting the token in a single file
#[derive(Clone, Debug)]
pub struct FileAuthStore {
    path: PathBuf,
}

impl FileAuthStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, action: &str, err: &std::io::Error) -> ClientError {
        ClientError::Storage(format!("{action} {}: {err}", self.path.display()))
    }
}

impl AuthStore for FileAuthStore {
    fn get(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(normalize_token(Some(contents))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.storage_error("reading", &e)),
        }
    }

    fn set(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.storage_error("creating directory for", &e))?;
        }
        fs::write(&self.path, token).map_err(|e| self.storage_error("writing", &e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(|e| self.storage_error("restricting", &e))?;
        }

        tracing::debug!(path = %self.path.display(), "Token saved");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.storage_error("removing", &e)),
        }
    }
}
