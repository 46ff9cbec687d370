use utoipa_actix_web::service_config::ServiceConfig;

mod controllers;
mod dto;
pub mod error;
mod middlewares;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.configure(controllers::service::routes)
        .configure(controllers::account::routes);
}
