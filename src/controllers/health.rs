use actix_web::{web, HttpResponse, Responder};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(root)));
}

/// Readiness probe — answers regardless of storage state
async fn root() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Notes backend is running successfully!"
    }))
}
