//! Auth collaborator — opaque login/registration/logout over the `users`
//! collection.
//!
//! The pipeline never touches this; it only gates the admin surfaces.
//! Login accepts either an email or a username (anything without `@` is
//! treated as a username and resolved through the users collection first).
//! Outcomes are values, never panics: success carries the profile, failure
//! carries a display message.

use serde_json::{json, Value};
use sha2::{Digest, Sha256};

use crate::docstore::DocumentStore;
use crate::session::{Session, SessionStore};
use crate::SourceError;

/// The signed-in user's profile, as read from the users collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub username: String,
    pub fullname: String,
    pub role: String,
}

/// Result of a login or registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success(UserProfile),
    Failure(String),
}

/// Registration input. `role` defaults to `"user"` when empty.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub fullname: String,
    pub password: String,
    pub role: String,
}

/// Auth provider backed by the document store, caching the signed-in
/// identity in the session store.
pub struct StoreAuth<'a, D: DocumentStore> {
    store: &'a D,
    sessions: &'a SessionStore,
}

impl<'a, D: DocumentStore> StoreAuth<'a, D> {
    pub fn new(store: &'a D, sessions: &'a SessionStore) -> Self {
        Self { store, sessions }
    }

    /// Sign in with an email or username plus password.
    pub async fn login(&self, identifier: &str, password: &str) -> LoginOutcome {
        let users = match self.store.read_all("users").await {
            Ok(users) => users,
            Err(err) => return LoginOutcome::Failure(err.to_string()),
        };

        let by_username = !identifier.contains('@');
        let found = users.iter().find(|doc| {
            let field = if by_username { "username" } else { "email" };
            doc.data.pointer(&format!("/{field}")).and_then(Value::as_str) == Some(identifier)
        });
        let Some(doc) = found else {
            return LoginOutcome::Failure(if by_username {
                "Username not found".to_string()
            } else {
                "Email not found".to_string()
            });
        };

        let stored_digest = doc
            .data
            .pointer("/password_sha256")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if stored_digest != password_digest(password) {
            return LoginOutcome::Failure("Wrong password".to_string());
        }

        let profile = profile_from_doc(&doc.id, &doc.data);
        if let Err(err) = self.sessions.save(&session_for(&profile)) {
            return LoginOutcome::Failure(format!("saving session: {err}"));
        }
        tracing::info!(username = %profile.username, role = %profile.role, "signed in");
        LoginOutcome::Success(profile)
    }

    /// Create a user document and sign the new user in.
    pub async fn register(&self, new_user: NewUser) -> LoginOutcome {
        let role = if new_user.role.is_empty() {
            "user".to_string()
        } else {
            new_user.role
        };
        let data = json!({
            "email": new_user.email,
            "username": new_user.username,
            "fullname": new_user.fullname,
            "avatar": "",
            "password_sha256": password_digest(&new_user.password),
            "status": { "role": role, "active": true },
        });

        let id = match self.store.create("users", data.clone()).await {
            Ok(id) => id,
            Err(err) => return LoginOutcome::Failure(err.to_string()),
        };

        let profile = profile_from_doc(&id, &data);
        if let Err(err) = self.sessions.save(&session_for(&profile)) {
            return LoginOutcome::Failure(format!("saving session: {err}"));
        }
        LoginOutcome::Success(profile)
    }

    /// Clear the cached session.
    pub fn logout(&self) -> Result<(), SourceError> {
        self.sessions.clear().map_err(SourceError::Io)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn password_digest(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

fn profile_from_doc(id: &str, data: &Value) -> UserProfile {
    let field = |path: &str| {
        data.pointer(path)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let role = data
        .pointer("/status/role")
        .and_then(Value::as_str)
        .unwrap_or("user")
        .to_string();
    UserProfile {
        id: id.to_string(),
        email: field("/email"),
        username: field("/username"),
        fullname: field("/fullname"),
        role,
    }
}

fn session_for(profile: &UserProfile) -> Session {
    Session {
        user_id: profile.id.clone(),
        email: profile.email.clone(),
        username: profile.username.clone(),
        fullname: profile.fullname.clone(),
        role: profile.role.clone(),
    }
}
