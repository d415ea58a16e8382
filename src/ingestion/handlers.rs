use super::types::{validate_index, SubmitRequest, SubmitResponse, ValidationError};
use crate::cache::client::ResultCache;
use crate::channel::publisher::EventPublisher;
use crate::channel::types::WorkEvent;
use crate::log::store::ValueLog;
use crate::log::types::LoggedValue;
use crate::log::writer::{DispatchCounters, LogWriter};

use axum::http::StatusCode;
use axum::{Extension, Json};
use std::collections::HashMap;
use std::sync::Arc;

/// `POST /submit`
///
/// Validates the index, then dispatches the three best-effort operations:
/// placeholder write, log enqueue, work event publish. The request succeeds
/// once those are dispatched, regardless of their individual outcomes.
pub async fn handle_submit(
    Extension(cache): Extension<Arc<ResultCache>>,
    Extension(publisher): Extension<Arc<EventPublisher>>,
    Extension(log_writer): Extension<Arc<LogWriter>>,
    Json(req): Json<SubmitRequest>,
) -> (StatusCode, Json<SubmitResponse>) {
    let index = match validate_index(req.index) {
        Ok(index) => index,
        Err(err @ ValidationError::TooHigh) => {
            tracing::debug!("Rejecting index {}: {}", req.index, err);
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(SubmitResponse::rejected(err.to_string())),
            );
        }
        Err(err) => {
            tracing::debug!("Rejecting index {}: {}", req.index, err);
            return (
                StatusCode::BAD_REQUEST,
                Json(SubmitResponse::rejected(err.to_string())),
            );
        }
    };

    if let Err(err) = cache.set_placeholder(index).await {
        tracing::error!("Failed to write placeholder for {}: {}", index, err);
    }

    log_writer.submit(index);

    if let Err(err) = publisher.publish(&WorkEvent::new(index)).await {
        tracing::error!("Failed to publish work event for {}: {}", index, err);
    }

    (StatusCode::ACCEPTED, Json(SubmitResponse::accepted()))
}

/// `GET /values/current`
///
/// Full result cache snapshot: index string to either the placeholder sentinel
/// or the computed value string. Empty when the cache is unreachable.
pub async fn handle_values_current(
    Extension(cache): Extension<Arc<ResultCache>>,
) -> Json<HashMap<String, String>> {
    Json(cache.snapshot().await)
}

/// `GET /values/all`
///
/// Every submission ever logged, duplicates included, in storage order.
pub async fn handle_values_all(
    Extension(log): Extension<Arc<ValueLog>>,
) -> (StatusCode, Json<Vec<LoggedValue>>) {
    match log.list_all().await {
        Ok(rows) => (StatusCode::OK, Json(rows)),
        Err(err) => {
            tracing::error!("Failed to read the value log: {}", err);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(Vec::new()))
        }
    }
}

/// `GET /stats`
///
/// Log writer counters, so dropped or failed appends are observable.
pub async fn handle_stats(
    Extension(log_writer): Extension<Arc<LogWriter>>,
) -> Json<DispatchCounters> {
    Json(log_writer.counters())
}

/// `GET /` liveness probe.
pub async fn handle_health() -> &'static str {
    "Hi"
}
