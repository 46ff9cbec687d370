use actix_web::{
    HttpResponse, ResponseError,
    http::header::{self, HeaderValue},
};

use crate::domain::error::{AppError, AppResult, message};

pub type ApiResult = AppResult<HttpResponse>;

/// Fallback for a known path hit with a verb it does not serve. `allow` lists the
/// verbs the path does serve.
pub async fn method_not_allowed(allow: &'static str) -> HttpResponse {
    let mut res = AppError::MethodNotAllowed().error_response();

    res.headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static(allow));

    res
}

pub async fn not_found() -> ApiResult {
    Err(AppError::NotFound(message::NOT_FOUND))
}
