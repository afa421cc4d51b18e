use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;

use crate::db;

/// Health check endpoint
///
/// Reports `ok` when the database answers, `error` (with a 500) when it does not.
#[get("/health")]
pub async fn health(pool: web::Data<PgPool>) -> impl Responder {
    match db::check_connection(&pool).await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "timestamp": Utc::now()
        })),
        Err(e) => {
            log::error!("Health check failed: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "status": "error",
                "timestamp": Utc::now()
            }))
        }
    }
}
