//! Mock auth helpers for HTTP tests.
//!
//! Services behind the gateway receive an `x-fieldops-user-id` header injected
//! by the gateway. In tests, `MockAuth` builds that header directly so no real
//! gateway or credential exchange is needed.

use axum::http::{HeaderName, HeaderValue};

use fieldops_auth_types::identity::USER_ID_HEADER;
use fieldops_domain::id::UserId;

/// Identity injected into test requests.
#[derive(Debug, Clone, Copy)]
pub struct MockAuth {
    pub user_id: UserId,
}

impl MockAuth {
    pub fn new(user_id: i32) -> Self {
        Self {
            user_id: UserId(user_id),
        }
    }

    /// Header name/value pair as the gateway would inject it.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static(USER_ID_HEADER),
            HeaderValue::from(self.user_id.0),
        )
    }
}
