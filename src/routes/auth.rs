use actix_session::Session;
use actix_web::{get, http::header, post, web, HttpResponse};
use serde::Deserialize;
use tracing::info;

use crate::types::error::AppError;

const LOGIN_HTML: &str = include_str!("../../templates/login.html");

/// Session key holding the logged-in username.
pub const USER_KEY: &str = "user";

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
}

fn redirect_home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

#[get("/login/")]
pub async fn login_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(LOGIN_HTML)
}

#[post("/login/")]
pub async fn login(
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    session
        .insert(USER_KEY, form.username.clone())
        .map_err(|e| AppError::Internal(format!("failed to persist session: {e}")))?;
    info!(user = %form.username, "logged in");
    Ok(redirect_home())
}

#[get("/logout/")]
pub async fn logout(session: Session) -> HttpResponse {
    session.purge();
    redirect_home()
}
