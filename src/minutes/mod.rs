//! Minutes API: list, detail, business-card listing, ingestion save, and
//! delete, all scoped to the requesting user.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use log::{error, info, warn};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::session::CurrentUser;
use crate::shared::state::AppState;

pub mod repository;
pub mod service;
pub mod types;

use service::{MinutesError, MinutesService};
use types::{DeleteMinutesResponse, SaveMinutesRequest};

pub fn configure() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/meetings/me/minutes",
            get(list_my_minutes).post(save_minutes),
        )
        .route(
            "/meetings/me/minutes/bizcard/:bizcard_id",
            get(list_minutes_by_bizcard),
        )
        .route(
            "/meetings/me/minutes/:meeting_id",
            get(get_minutes_by_meeting).delete(delete_minutes_by_meeting),
        )
}

async fn list_my_minutes(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
) -> Response {
    let service = MinutesService::from_state(&state);
    match service.list_by_user(user_id).await {
        Ok(items) => Json(items).into_response(),
        Err(e) => error_response("list minutes", &e),
    }
}

/// Ingestion path: persists the minutes produced at end of recording.
async fn save_minutes(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Json(payload): Json<SaveMinutesRequest>,
) -> Response {
    let service = MinutesService::from_state(&state);
    match service
        .save_minutes(
            user_id,
            payload.meeting_id,
            payload.bizcard_id,
            payload.summary_text,
            payload.minutes_text,
        )
        .await
    {
        Ok(record) => {
            info!(
                "saved minutes {} for meeting {}",
                record.id, record.meeting_id
            );
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Err(e) => error_response("save minutes", &e),
    }
}

async fn get_minutes_by_meeting(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(meeting_id): Path<Uuid>,
) -> Response {
    let service = MinutesService::from_state(&state);
    match service.detail_by_meeting(user_id, meeting_id).await {
        Ok(detail) => Json(detail).into_response(),
        Err(e) => error_response("get minutes", &e),
    }
}

async fn list_minutes_by_bizcard(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(bizcard_id): Path<Uuid>,
) -> Response {
    let service = MinutesService::from_state(&state);
    match service.list_by_bizcard(user_id, bizcard_id).await {
        Ok(items) => Json(items).into_response(),
        Err(e) => error_response("list minutes by bizcard", &e),
    }
}

async fn delete_minutes_by_meeting(
    State(state): State<Arc<AppState>>,
    CurrentUser(user_id): CurrentUser,
    Path(meeting_id): Path<Uuid>,
) -> Response {
    let service = MinutesService::from_state(&state);
    match service.delete_by_meeting(user_id, meeting_id).await {
        Ok(()) => {
            info!("deleted minutes for meeting {meeting_id}");
            Json(DeleteMinutesResponse {
                success: true,
                meeting_id,
                deleted: true,
            })
            .into_response()
        }
        Err(e) => error_response("delete minutes", &e),
    }
}

fn error_response(op: &str, err: &MinutesError) -> Response {
    match err {
        MinutesError::Database(_) => error!("{op} failed: {err}"),
        _ => warn!("{op} rejected: {err}"),
    }
    (err.status(), Json(json!({ "error": err.to_string() }))).into_response()
}
