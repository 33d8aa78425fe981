//! # Session guard
//!
//! Holds the single authenticated session of the client and answers, for every
//! navigation, whether the requested view may render.
//!
//! The session is a two-state machine:
//!
//! ```text
//! Anonymous --login ok--> Authenticated(user)
//! Authenticated(user) --login ok / refresh--> Authenticated(user')
//! Authenticated(user) --logout--> Anonymous
//! ```
//!
//! A failed login never touches the current state. The user record is only ever
//! replaced as a whole, never patched.
//!
//! [`SessionGuard`] is a plain owned value: the UI keeps one inside a signal and
//! tests create as many isolated instances as they need. Credential checks and
//! profile reloads go through the [`CredentialVerifier`] and [`ProfileSource`]
//! traits, implemented over HTTP by the `api` crate.

use std::future::Future;

use tracing::{info, warn};

use crate::error::{AuthError, ValidationError};
use crate::models::UserInfo;
use crate::routes::{AccessDecision, View};

/// Checks an identifier/password pair against the users service.
pub trait CredentialVerifier {
    fn verify_credentials(
        &self,
        identifier: &str,
        password: &str,
    ) -> impl Future<Output = Result<UserInfo, AuthError>>;
}

/// Loads a user record by id.
pub trait ProfileSource {
    fn fetch_user(&self, id: &str) -> impl Future<Output = Result<UserInfo, AuthError>>;
}

/// Whether anyone is logged in.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(UserInfo),
}

/// Owner of the session state and the route authorization check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionGuard {
    session: Session,
}

impl SessionGuard {
    /// A guard with nobody logged in.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_user(&self) -> Option<&UserInfo> {
        match &self.session {
            Session::Anonymous => None,
            Session::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.current_user().is_some()
    }

    /// Verify the credentials and, on success, replace the session with the
    /// returned user. On failure the previous session is kept.
    pub async fn login<V: CredentialVerifier>(
        &mut self,
        verifier: &V,
        identifier: &str,
        password: &str,
    ) -> Result<UserInfo, AuthError> {
        let user = Self::verify(verifier, identifier, password).await?;
        self.establish(user.clone());
        Ok(user)
    }

    /// The network half of [`login`](Self::login): validate the fields and ask
    /// the verifier, without touching any session. A UI holding the guard in
    /// shared state awaits this first and then commits with
    /// [`establish`](Self::establish), so no borrow spans the await.
    pub async fn verify<V: CredentialVerifier>(
        verifier: &V,
        identifier: &str,
        password: &str,
    ) -> Result<UserInfo, AuthError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(ValidationError::Required("username or email").into());
        }
        if password.is_empty() {
            return Err(ValidationError::Required("password").into());
        }

        verifier
            .verify_credentials(identifier, password)
            .await
            .inspect_err(|e| warn!(identifier, error = %e, "login failed"))
    }

    /// Start a session for a user whose credentials were just verified.
    pub fn establish(&mut self, user: UserInfo) {
        info!(user_id = %user.id, "login succeeded");
        self.session = Session::Authenticated(user);
    }

    /// Clear the session. Does nothing when already anonymous.
    pub fn logout(&mut self) {
        if let Session::Authenticated(user) = &self.session {
            info!(user_id = %user.id, "logged out");
        }
        self.session = Session::Anonymous;
    }

    /// Swap in a fresh copy of the logged-in user, e.g. after a profile edit.
    /// Returns `false` and changes nothing unless `user` is the one logged in,
    /// so a reply that lands after a logout or a switch of account is dropped.
    pub fn replace_user(&mut self, user: UserInfo) -> bool {
        if self.current_user().map(|u| u.id.as_str()) != Some(user.id.as_str()) {
            return false;
        }
        self.session = Session::Authenticated(user);
        true
    }

    /// Reload the logged-in user from `source` and replace the session with it.
    /// Returns `Ok(None)` when anonymous.
    pub async fn refresh<P: ProfileSource>(
        &mut self,
        source: &P,
    ) -> Result<Option<UserInfo>, AuthError> {
        let Some(id) = self.current_user().map(|u| u.id.clone()) else {
            return Ok(None);
        };
        let user = source.fetch_user(&id).await?;
        self.replace_user(user.clone());
        Ok(Some(user))
    }

    /// Decide whether `requested` may render. `None` stands for a path that
    /// matched no view.
    pub fn authorize(&self, requested: Option<View>) -> AccessDecision {
        match requested {
            Some(view) if !view.is_protected() => AccessDecision::Render(view),
            Some(view) if self.is_authorized() => AccessDecision::Render(view),
            Some(_) => AccessDecision::Redirect(View::LOGIN),
            None if self.is_authorized() => AccessDecision::Redirect(View::LANDING),
            None => AccessDecision::Redirect(View::LOGIN),
        }
    }

    /// [`authorize`](Self::authorize) for a raw URL path.
    pub fn resolve(&self, path: &str) -> AccessDecision {
        self.authorize(View::parse(path))
    }
}
