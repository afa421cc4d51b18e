pub mod auth;
pub mod health;
pub mod tasks;

use actix_web::web;
use sqlx::PgPool;

use crate::{
    auth::{AuthMiddleware, TokenKeys},
    error::AppError,
};

/// Mounts the `/auth` and `/tasks` endpoints. Meant to be configured under `/api`.
///
/// Every `/tasks` route sits behind [`AuthMiddleware`]. Unparsable JSON bodies and
/// path ids are answered with a 400 in the same `{"message": ...}` shape as other errors.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid request body: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid path: {}", err)).into()
    }))
    .service(
        web::scope("/auth")
            .service(auth::register)
            .service(auth::login),
    )
    .service(
        web::scope("/tasks")
            .wrap(AuthMiddleware)
            .service(tasks::list_tasks)
            .service(tasks::create_task)
            .service(tasks::update_task)
            .service(tasks::delete_task),
    );
}

/// Registers shared state, the health probe and the `/api` routes on an app.
///
/// ```ignore
/// App::new().configure(routes::app_config(pool, keys))
/// ```
pub fn app_config(
    pool: web::Data<PgPool>,
    keys: web::Data<TokenKeys>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(pool)
            .app_data(keys)
            .service(health::health)
            .service(web::scope("/api").configure(config));
    }
}
