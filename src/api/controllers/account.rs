use std::sync::Arc;

use crate::api::dto::account::{AccountDTO, AccountPayloadDTO};
use crate::api::error::{ApiResult, method_not_allowed};
use crate::api::middlewares::validate::{Json, parse, read_body};
use crate::domain::error::AppError;
use crate::domain::models::account::Account;
use crate::domain::services::account::AccountService;

use actix_web::{
    HttpRequest, HttpResponse, delete, get,
    http::header,
    post, put,
    web::{self, Data as State, Path, Payload},
};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(list_accounts)
        .service(create_account)
        .service(read_account)
        .service(update_account)
        .service(delete_account)
        // Registered last so they only catch methods the handlers above do not serve.
        .route(
            "/accounts",
            web::route().to(|| method_not_allowed("GET, POST")),
        )
        .route(
            "/accounts/{id}",
            web::route().to(|| method_not_allowed("GET, PUT, DELETE")),
        );
}

#[utoipa::path(
    responses(
        (status = 200, body = Vec<AccountDTO>, description = "All accounts"),
        (status = 405, body = AppError, example = json!(AppError::example_405())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    tag = "Account",
)]
#[get("/accounts")]
pub async fn list_accounts(account_service: State<Arc<dyn AccountService>>) -> ApiResult {
    let accounts = account_service.list().await?;

    Ok(HttpResponse::Ok().json(
        accounts
            .into_iter()
            .map(AccountDTO::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    responses(
        (status = 201, body = AccountDTO, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 405, body = AppError, example = json!(AppError::example_405())),
        (status = 413, body = AppError, example = json!(AppError::example_413())),
        (status = 415, body = AppError, example = json!(AppError::example_415())),
        (status = 500, body = AppError, example = json!(AppError::example_500())),
        (status = 503, body = AppError, example = json!(AppError::example_503()))
    ),
    request_body = AccountPayloadDTO,
    tag = "Account",
)]
#[post("/accounts")]
pub async fn create_account(
    req: HttpRequest,
    payload: Json<AccountPayloadDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let today = chrono::Local::now().date_naive();

    let account = account_service
        .create(payload.into_inner().into_fields(today))
        .await?;

    let location = req.url_for("read_account", [account.id.to_string()])?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location.to_string()))
        .json(AccountDTO::from(account)))
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 405, body = AppError, example = json!(AppError::example_405())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[get("/accounts/{id}")]
pub async fn read_account(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let account = account_service.find(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}

/// The target must exist before the body is read: an unknown id is a 404
/// whatever the payload, oversized ones included.
#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO, description = "Account Updated"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 413, body = AppError, example = json!(AppError::example_413())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = AccountPayloadDTO,
    tag = "Account",
)]
#[put("/accounts/{id}")]
pub async fn update_account(
    id: Path<i64>,
    body: Payload,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let current = account_service.find(id.into_inner()).await?;

    let body = read_body(body).await?;
    let payload: AccountPayloadDTO = parse(&body)?;
    let fields = payload.into_fields(current.date_joined);

    let account = account_service
        .update(Account::with_fields(current.id, fields))
        .await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}

#[utoipa::path(
    responses(
        (status = 204, description = "Account Deleted"),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[delete("/accounts/{id}")]
pub async fn delete_account(
    id: Path<i64>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    account_service.delete(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
