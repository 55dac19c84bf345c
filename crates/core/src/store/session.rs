use serde::{Deserialize, Serialize};

use crate::errors::{AuthError, Result};

/// Identity of the authenticated owner, passed explicitly through every
/// data-access call.
///
/// The dashboard is single tenant: one consultant, one user id. The
/// context is built once from the backend session and handed down instead
/// of re-querying auth state per call. Constructing one without
/// credentials fails with `AuthError::NoActiveSession`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub user_id: String,
    pub access_token: String,
}

impl SessionContext {
    pub fn new(user_id: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let user_id = user_id.into();
        let access_token = access_token.into();
        if user_id.trim().is_empty() || access_token.trim().is_empty() {
            return Err(AuthError::NoActiveSession.into());
        }
        Ok(SessionContext {
            user_id,
            access_token,
        })
    }
}
