//! Admin login (JWT) and the bearer-token gate for write endpoints.

use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::services::Services;
use crate::validation::{required, ValidationError};

//////////////////////////////////////////////////
// Data structs
//////////////////////////////////////////////////

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        required("username", &self.username)?;
        required("password", &self.password)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

//////////////////////////////////////////////////
// ────────────  AdminAuth extractor  ────────────
//////////////////////////////////////////////////

pub mod extractor {
    use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
    use futures_util::future::{ready, Ready};

    use crate::error::ApiError;
    use crate::services::Services;

    const BEARER: &str = "bearer ";

    /// Proof that the request carried a valid admin token.
    #[derive(Debug, Clone, Copy)]
    pub struct AdminAuth;

    /// Token part of `Authorization: Bearer <token>`; scheme is case-insensitive.
    pub fn bearer_token(header: &str) -> Option<&str> {
        let prefix = header.get(..BEARER.len())?;
        if !prefix.eq_ignore_ascii_case(BEARER) {
            return None;
        }
        let token = &header[BEARER.len()..];
        (!token.is_empty()).then_some(token)
    }

    impl FromRequest for AdminAuth {
        type Error = ApiError;
        type Future = Ready<Result<Self, Self::Error>>;

        fn from_request(req: &HttpRequest, _pl: &mut Payload) -> Self::Future {
            let res = (|| -> Result<Self, ApiError> {
                let hdr = req
                    .headers()
                    .get("Authorization")
                    .and_then(|v| v.to_str().ok())
                    .ok_or_else(|| ApiError::Unauthorized("no token provided".into()))?;

                let token = bearer_token(hdr)
                    .ok_or_else(|| ApiError::Unauthorized("malformed Authorization header".into()))?;

                let services = req.app_data::<web::Data<Services>>().ok_or_else(|| {
                    ApiError::Internal(anyhow::anyhow!("services not registered on the app"))
                })?;

                services.auth.validate_token(token).map_err(|e| {
                    log::warn!("rejected admin token: {e}");
                    ApiError::from(e)
                })?;

                Ok(AdminAuth)
            })();

            ready(res)
        }
    }
}
pub use extractor::AdminAuth;

//////////////////////////////////////////////////
// POST /api/v1/login
//////////////////////////////////////////////////
#[post("/login")]
pub async fn login(
    body: web::Json<LoginRequest>,
    services: web::Data<Services>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let token = services
        .auth
        .login(&body.username, &body.password)
        .map_err(|e| {
            log::warn!("admin login rejected for {:?}: {e}", body.username);
            ApiError::from(e)
        })?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

//////////////////////////////////////////////////
// Mount
//////////////////////////////////////////////////
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(login);
}
