use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};
use reels_pipeline::{Reel, ReelError, ReelPipeline};
use serde::Serialize;
use serde_json::Value;

/// Successful generate-reels response
#[derive(Debug, Serialize)]
pub struct GenerateReelsResponse {
    pub reels: Vec<Reel>,
}

/// `POST /api/generate-reels` with `{ "topic": "..." }`
pub async fn generate_reels_handler(
    State(pipeline): State<Arc<ReelPipeline>>,
    body: Bytes,
) -> Result<Json<GenerateReelsResponse>, ReelError> {
    let topic = topic_from_body(&body)?;
    let reels = pipeline.generate_reels(&topic).await?;

    Ok(Json(GenerateReelsResponse { reels }))
}

/// Pull the topic out of a raw request body
///
/// A body that is not JSON is an internal error; a missing, null or
/// non-string topic is invalid input. Blank topics are rejected by the
/// pipeline itself.
fn topic_from_body(body: &[u8]) -> Result<String, ReelError> {
    let request: Value =
        serde_json::from_slice(body).map_err(|e| ReelError::Internal(format!("invalid request body: {e}")))?;

    request
        .get("topic")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ReelError::InvalidInput)
}
