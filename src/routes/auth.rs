use crate::{
    auth::{hash_password, verify_password, AuthResponse, LoginRequest, RegisterRequest, TokenKeys},
    error::AppError,
    models::{user::normalize_username, Account},
};
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

const MISSING_CREDENTIALS: &str = "Username and password are required";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Register a new account
///
/// Stores the normalized username with a bcrypt digest of the password.
///
/// ## Responses:
/// - `201 Created`: `{"message": "User created"}`.
/// - `400 Bad Request`: blank username or empty password.
/// - `409 Conflict`: the normalized username is already taken.
/// - `500 Internal Server Error`: hashing or database failure.
#[post("/register")]
pub async fn register(
    pool: web::Data<PgPool>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data
        .validate()
        .map_err(|_| AppError::ValidationError(MISSING_CREDENTIALS.into()))?;

    let RegisterRequest { username, password } = register_data.into_inner();
    let username = normalize_username(&username);
    let password_hash = hash_password(password).await?;

    // The unique constraint on username decides duplicates, not a prior lookup.
    let inserted = sqlx::query("INSERT INTO users_app (username, password_hash) VALUES ($1, $2)")
        .bind(&username)
        .bind(&password_hash)
        .execute(&**pool)
        .await;

    match inserted {
        Ok(_) => {}
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            log::info!("Registration rejected, username {:?} already exists", username);
            return Err(AppError::Conflict("Username already exists".into()));
        }
        Err(e) => return Err(AppError::internal("Failed to register user", e)),
    }

    log::info!("Registered account {:?}", username);
    Ok(HttpResponse::Created().json(json!({ "message": "User created" })))
}

/// Login
///
/// Verifies the password against the stored digest and issues a session token.
/// Unknown usernames and wrong passwords get the same `401` answer.
///
/// ## Responses:
/// - `200 OK`: [`AuthResponse`] with the token and normalized username.
/// - `400 Bad Request`: blank username or empty password.
/// - `401 Unauthorized`: unknown username or wrong password.
/// - `500 Internal Server Error`: database or token failure.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    keys: web::Data<TokenKeys>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data
        .validate()
        .map_err(|_| AppError::ValidationError(MISSING_CREDENTIALS.into()))?;

    let LoginRequest { username, password } = login_data.into_inner();
    let username = normalize_username(&username);

    let account = sqlx::query_as::<_, Account>(
        "SELECT id, username, password_hash FROM users_app WHERE username = $1",
    )
    .bind(&username)
    .fetch_optional(&**pool)
    .await
    .map_err(|e| AppError::internal("Login failed", e))?;

    let Some(account) = account else {
        log::warn!("Login failed for unknown username {:?}", username);
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    };

    if !verify_password(password, account.password_hash.clone()).await? {
        log::warn!("Login failed for {:?}: wrong password", username);
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    let token = keys.issue(account.id, &account.username)?;
    log::info!("Account {} logged in", account.id);

    Ok(HttpResponse::Ok().json(AuthResponse {
        token,
        username: account.username,
    }))
}
