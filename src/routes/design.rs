use actix_web::web;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::db::postgres_service::PostgresService;
use crate::types::design::{DBDesignCreate, RDesignSave, SaveDesignResponse};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

/// POST `/save-design/`. Any well-formed JSON body is acknowledged with the
/// success payload; bodies matching the design schema are also persisted.
/// Persistence failures (e.g. a field exceeding its column width) are logged
/// and do not break the acknowledgement.
pub async fn save_design(
    db: web::Data<Arc<PostgresService>>,
    body: web::Bytes,
) -> ApiResult<SaveDesignResponse> {
    let value: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("invalid JSON body: {e}")))?;

    match serde_json::from_value::<RDesignSave>(value) {
        Ok(design) => match db.create_design(DBDesignCreate::from(design)).await {
            Ok(id) => info!(id, "design saved"),
            Err(e) => warn!("failed to persist design: {e}"),
        },
        Err(e) => {
            debug!("save-design payload not persisted: {e}");
        }
    }

    Ok(ApiResponse::Ok(SaveDesignResponse::success()))
}

/// Everything except POST lands here.
pub async fn invalid_method() -> ApiResult<SaveDesignResponse> {
    Ok(ApiResponse::Ok(SaveDesignResponse::error(
        "Invalid request method",
    )))
}
