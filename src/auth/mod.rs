use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use sqlx::SqlitePool;

use crate::error::ApiError;

/// The user behind a valid session token. Extracting this in a handler
/// signature makes the endpoint require authentication: requests without a
/// known `Authorization: Bearer <token>` are rejected with 401 before the
/// handler body runs.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    let header = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_owned())
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let pool = req.app_data::<web::Data<SqlitePool>>().cloned();
        let token = bearer_token(req);

        Box::pin(async move {
            let pool = pool.ok_or(ApiError::Unexpected)?;
            let token = token.ok_or(ApiError::Unauthorized)?;

            let user_id: Option<i64> =
                sqlx::query_scalar("SELECT user_id FROM sessions WHERE token = ?")
                    .bind(&token)
                    .fetch_optional(pool.get_ref())
                    .await?;

            user_id
                .map(|user_id| AuthenticatedUser { user_id })
                .ok_or(ApiError::Unauthorized)
        })
    }
}
