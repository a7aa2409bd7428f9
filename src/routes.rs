use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::io::AsyncWriteExt;
use tower_http::services::{ServeDir, ServeFile};
use tracing::error;

use crate::reporter::TranslationRecord;
use crate::state::AppState;
use crate::translate::{self, TranslationRequest};

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let static_dir = &state.settings.static_dir;

    Router::new()
        // Health check
        .route("/api/health", get(health_check))
        // Translation dispatch
        .route("/api/translate", post(translate_message))
        // Translation log endpoint the Result Reporter posts to
        .route("/api/translations", post(record_translation))
        // Static form assets
        .fallback_service(
            ServeDir::new(static_dir)
                .fallback(ServeFile::new(format!("{static_dir}/index.html"))),
        )
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Validate and dispatch one translation request.
///
/// An empty message is rejected before any provider client is touched.
/// Every dispatch failure collapses to the same generic message.
async fn translate_message(
    State(state): State<AppState>,
    Json(request): Json<TranslationRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if request.message.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "Please enter the message." })),
        ));
    }

    match translate::dispatch(&state, &request).await {
        Ok(translation) => Ok(Json(json!({ "translation": translation }))),
        Err(e) => {
            error!("translation failed: {}", e);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "Translation failed. Please try again." })),
            ))
        }
    }
}

/// Append one completed translation to the JSON-lines log.
async fn record_translation(
    State(state): State<AppState>,
    Json(record): Json<TranslationRecord>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let line = json!({
        "original_message": record.original_message,
        "translated_message": record.translated_message,
        "language": record.language,
        "model": record.model,
        "received_at": chrono::Utc::now().to_rfc3339(),
    });

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&state.settings.translations_log)
        .await
        .map_err(append_error)?;
    file.write_all(format!("{line}\n").as_bytes())
        .await
        .map_err(append_error)?;

    Ok(Json(json!({ "status": "ok" })))
}

fn append_error(e: std::io::Error) -> (StatusCode, Json<Value>) {
    error!("failed to append translation record: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "failed to store translation" })),
    )
}
