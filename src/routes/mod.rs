// Route exports
pub mod compatibility;

use actix_web::web;

pub use compatibility::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").configure(compatibility::configure));
}
