use std::future::{ready, Ready};

use actix_web::dev::{Payload, ServiceRequest};
use actix_web::error::ErrorUnauthorized;
use actix_web::{FromRequest, HttpRequest};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::config::config;
use crate::types::error::AppError;

/// Header the fronting gateway sets after authenticating the caller.
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// Authenticated caller identity. Authentication itself happens upstream;
/// this only carries the resolved email into handlers.
#[derive(Debug, Clone)]
pub struct Identity {
    pub email: String,
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.headers()
                .get(USER_EMAIL_HEADER)
                .and_then(|value| value.to_str().ok())
                .filter(|email| !email.is_empty())
                .map(|email| Identity {
                    email: email.to_owned(),
                })
                .ok_or(AppError::Unauthorized),
        )
    }
}

pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    if credentials.token() == config().auth_key {
        Ok(req)
    } else {
        Err((ErrorUnauthorized("Invalid token"), req))
    }
}
