use core::fmt::Debug;
use std::ops::Deref;

use crate::domain::error::{AppError, AppResult};
use actix_web::dev::{JsonBody, Payload};
use actix_web::web::{self, BytesMut};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures::StreamExt;
use futures::future::{self, FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;
use validator::Validate;

const PAYLOAD_LIMIT: usize = 32768;

/// JSON extractor that insists on `Content-Type: application/json` (415 otherwise)
/// and runs `validator` checks on the decoded body (400 on failure).
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for Json<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for Json<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        // JsonBody also accepts any `*/json` or `+json` type, so narrow it first.
        if !is_application_json(req) {
            return future::ready(Err(AppError::UnsupportedMediaType())).boxed_local();
        }

        JsonBody::new(
            req,
            payload,
            Some(&|mime| mime == mime::APPLICATION_JSON),
            true,
        )
        .limit(PAYLOAD_LIMIT)
        .map(|res: Result<T, _>| match res {
            Ok(payload) => payload
                .validate()
                .map(|_| Json(payload))
                .map_err(AppError::from),
            Err(err) => Err(AppError::from(err)),
        })
        .boxed_local()
    }
}

fn is_application_json(req: &HttpRequest) -> bool {
    match req.mime_type() {
        Ok(Some(mime)) => {
            mime.type_() == mime::APPLICATION
                && mime.subtype() == mime::JSON
                && mime.suffix().is_none()
        }
        _ => false,
    }
}

/// Buffers a request body up to the JSON payload limit (413 beyond it).
pub async fn read_body(mut payload: web::Payload) -> AppResult<BytesMut> {
    let mut body = BytesMut::new();

    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|err| AppError::BadRequest(err.to_string()))?;

        if body.len() + chunk.len() > PAYLOAD_LIMIT {
            return Err(AppError::PayloadTooLarge());
        }

        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

/// Decodes and validates a raw body without looking at its content type.
pub fn parse<T>(body: &[u8]) -> AppResult<T>
where
    T: DeserializeOwned + Validate,
{
    let payload: T = serde_json::from_slice(body)?;

    payload.validate()?;

    Ok(payload)
}
