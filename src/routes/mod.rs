// Route exports
pub mod recommendations;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(recommendations::health_check))
        .service(web::scope("/api").configure(recommendations::configure));
}
