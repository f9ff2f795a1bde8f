//! Per-request identity context.

use crate::domain::UserEmail;

/// The identity resolved for one request.
///
/// Created exactly once per request by the identity-resolution middleware,
/// read-only thereafter, and dropped at the end of the request. This replaces
/// thread-local/global security context state: the identity travels with the
/// request it belongs to and is never shared across requests.
#[derive(Debug, Clone)]
pub struct RequestIdentity {
    email: Option<UserEmail>,
}

impl RequestIdentity {
    /// No credential was presented, or the presented one failed validation.
    pub fn anonymous() -> Self {
        Self { email: None }
    }

    /// A credential was presented and validated to this identity.
    pub fn authenticated(email: UserEmail) -> Self {
        Self { email: Some(email) }
    }

    /// The resolved identity, if any.
    pub fn email(&self) -> Option<&UserEmail> {
        self.email.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.email.is_some()
    }
}
