use actix_web::{get, web, HttpResponse};
use tracing::warn;

use crate::config::EnvConfig;
use crate::patterns::list_patterns;
use crate::types::error::AppError;

const HOME_HTML: &str = include_str!("../../templates/home.html");
const CUSTOMIZER_HTML: &str = include_str!("../../templates/customizer.html");
const PRE_ORDER_HTML: &str = include_str!("../../templates/pre-order.html");
const ABOUT_HTML: &str = include_str!("../../templates/about.html");

/// Placeholder spliced with the JSON-encoded pattern list before the
/// customizer page is served.
const PATTERNS_SLOT: &str = "__PATTERNS_JSON__";

fn page(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

#[get("/")]
pub async fn home() -> HttpResponse {
    page(HOME_HTML.to_string())
}

pub async fn customizer(config: web::Data<EnvConfig>) -> Result<HttpResponse, AppError> {
    let patterns = match list_patterns(&config.pattern_dir()) {
        Ok(patterns) => patterns,
        Err(e) => {
            // The page still renders, just without pattern choices.
            warn!("failed to list patterns: {e}");
            Vec::new()
        }
    };
    let patterns_json =
        serde_json::to_string(&patterns).map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(page(CUSTOMIZER_HTML.replace(PATTERNS_SLOT, &patterns_json)))
}

#[get("/pre-order/")]
pub async fn pre_order() -> HttpResponse {
    page(PRE_ORDER_HTML.to_string())
}

#[get("/about/")]
pub async fn about() -> HttpResponse {
    page(ABOUT_HTML.to_string())
}
