use crate::api::dto::service::{HealthDTO, ServiceInfoDTO};
use crate::api::error::ApiResult;

use actix_web::{HttpResponse, get};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(index).service(health);
}

#[utoipa::path(
    responses((status = 200, body = ServiceInfoDTO, description = "Service metadata")),
    tag = "Service",
)]
#[get("/")]
pub async fn index() -> ApiResult {
    Ok(HttpResponse::Ok().json(ServiceInfoDTO {
        name: "Account REST API Service".to_string(),
        version: "1.0".to_string(),
    }))
}

#[utoipa::path(
    responses((status = 200, body = HealthDTO, description = "Service is up")),
    tag = "Service",
)]
#[get("/health")]
pub async fn health() -> ApiResult {
    Ok(HttpResponse::Ok().json(HealthDTO {
        status: "OK".to_string(),
    }))
}

#[cfg(test)]
mod tests {

    use actix_web::{
        App,
        http::StatusCode,
        test::{self, TestRequest},
    };
    use serde_json::{Value, json};
    use utoipa_actix_web::AppExt;

    use super::*;

    async fn fetch(uri: &str) -> (StatusCode, Value) {
        let app =
            test::init_service(App::new().into_utoipa_app().configure(routes).into_app()).await;

        let res = TestRequest::get().uri(uri).send_request(&app).await;

        let status = res.status();
        let body: Value = test::read_body_json(res).await;

        (status, body)
    }

    #[actix_web::test]
    async fn test_index() {
        let (status, body) = fetch("/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Account REST API Service");
    }

    #[actix_web::test]
    async fn test_health() {
        let (status, body) = fetch("/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "OK" }));
    }
}
