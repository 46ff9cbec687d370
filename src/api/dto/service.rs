use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfoDTO {
    #[schema(examples("Account REST API Service"))]
    pub name: String,
    #[schema(examples("1.0"))]
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthDTO {
    #[schema(examples("OK"))]
    pub status: String,
}
