//! Notes REST API — create and list notes persisted in SQLite.

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::models::CreateNoteRequest;
use crate::AppState;

#[derive(Debug, Serialize)]
struct CreateNoteResponse {
    message: String,
    id: i64,
}

/// Persist a new note and return its assigned id
async fn create_note(
    data: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> impl Responder {
    let request = body.into_inner();

    match data.db.create_note(&request.subject, &request.description) {
        Ok(note) => HttpResponse::Ok().json(CreateNoteResponse {
            message: "Note saved successfully!".to_string(),
            id: note.id,
        }),
        Err(e) => {
            log::error!("Failed to save note: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {}", e)
            }))
        }
    }
}

/// List every stored note in insertion order
async fn list_notes(data: web::Data<AppState>) -> impl Responder {
    match data.db.list_notes() {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => {
            log::error!("Failed to list notes: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {}", e)
            }))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notes")
            .route("", web::post().to(create_note))
            .route("", web::get().to(list_notes)),
    );
}
