//! Authentication collaborator
//!
//! The app never signs anyone in; it reads the current user and can ask the
//! provider to sign out. [`MockAuth`] stands in for a real identity backend.

use std::sync::{Mutex, PoisonError};

use surftrak_core::User;
use thiserror::Error;

/// The signed-in account as the auth backend reports it
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthUser {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

impl From<&User> for AuthUser {
    fn from(user: &User) -> Self {
        Self {
            display_name: Some(user.display_name.clone()),
            email: Some(user.email.clone()),
            photo_url: user.photo_url.clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no user is signed in")]
    NotSignedIn,

    #[error("sign-out failed: {0}")]
    SignOut(String),
}

pub trait AuthProvider: Send + Sync {
    fn user(&self) -> Option<AuthUser>;

    fn sign_out(&self) -> Result<(), AuthError>;
}

/// In-memory auth state
#[derive(Debug, Default)]
pub struct MockAuth {
    user: Mutex<Option<AuthUser>>,
    fail_sign_out: bool,
}

impl MockAuth {
    pub fn new(user: Option<AuthUser>) -> Self {
        Self {
            user: Mutex::new(user),
            fail_sign_out: false,
        }
    }

    /// A provider whose sign-out always errors
    pub fn failing(user: Option<AuthUser>) -> Self {
        Self {
            user: Mutex::new(user),
            fail_sign_out: true,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl AuthProvider for MockAuth {
    fn user(&self) -> Option<AuthUser> {
        self.user
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        if self.fail_sign_out {
            return Err(AuthError::SignOut("identity service unavailable".into()));
        }
        let mut user = self.user.lock().unwrap_or_else(PoisonError::into_inner);
        match user.take() {
            Some(_) => {
                tracing::debug!("mock auth signed out");
                Ok(())
            }
            None => Err(AuthError::NotSignedIn),
        }
    }
}
