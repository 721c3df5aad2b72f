use actix_web::web;

pub mod health;
pub mod players;

/// Configure application routes for both the HttpServer and test apps.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Players routes: /api/players/**
    cfg.service(web::scope("/api/players").configure(players::configure_routes));
}
