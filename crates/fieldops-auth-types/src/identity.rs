//! Gateway-injected identity header extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;

use fieldops_domain::id::UserId;

/// Header carrying the authenticated user's numeric id.
pub const USER_ID_HEADER: &str = "x-fieldops-user-id";

/// Authenticated caller as forwarded by the gateway via `x-fieldops-user-id`.
///
/// Returns 401 if the header is absent or not a number. No role travels with
/// it: services recompute the role from group membership on every request.
#[derive(Debug, Clone, Copy)]
pub struct IdentityHeaders {
    pub user_id: UserId,
}

impl<S> FromRequestParts<S> for IdentityHeaders
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 declares `fn -> impl Future + Send`; read the header
    // synchronously and hand back a 'static future.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<UserId>().ok());

        async move {
            let user_id = user_id.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self { user_id })
        }
    }
}
