//! Local identity - the display name a wall visitor posts under.
//!
//! The name never touches the server as an account; it only rides along on
//! create requests. Storage is an injected key/value capability so hosts
//! can decide where it lives (a file next to the config, memory in tests).

mod fs;
mod memory;

pub use fs::FsProfileStore;
pub use memory::InMemoryProfileStore;

use std::sync::Arc;

use thiserror::Error;

/// Storage slot key for the chosen display name.
pub const USERNAME_KEY: &str = "username";

/// Client-local persistent key/value slots.
pub trait ProfileStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ProfileError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ProfileError>;
    fn clear(&self, key: &str) -> Result<(), ProfileError>;
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile storage failed: {0}")]
    Storage(String),
}

/// Why a display name was rejected.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum UsernameError {
    #[error("display name must be at least 3 characters")]
    TooShort,

    #[error("display name must be at most 20 characters")]
    TooLong,

    #[error("display name may only contain letters, digits and underscores")]
    InvalidCharacter,
}

/// Input-surface rule for display names: 3 to 20 characters, letters,
/// digits and underscores only.
pub fn validate_username(name: &str) -> Result<(), UsernameError> {
    let length = name.chars().count();
    if length < 3 {
        return Err(UsernameError::TooShort);
    }
    if length > 20 {
        return Err(UsernameError::TooLong);
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(UsernameError::InvalidCharacter);
    }
    Ok(())
}

/// Display-name manager over a [`ProfileStore`].
pub struct Identity {
    store: Arc<dyn ProfileStore>,
}

impl Identity {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// The currently chosen display name, if any.
    pub fn username(&self) -> Result<Option<String>, ProfileError> {
        self.store.get(USERNAME_KEY)
    }

    /// Persist the display name. An empty name clears the slot, reverting
    /// the visitor to anonymous. Format rules live in
    /// [`validate_username`] and are the input surface's job, not ours.
    pub fn set_username(&self, name: &str) -> Result<(), ProfileError> {
        if name.is_empty() {
            self.store.clear(USERNAME_KEY)
        } else {
            self.store.set(USERNAME_KEY, name)
        }
    }
}
