use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Redirect,
    Json,
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::candidate::RoleKey;
use crate::preview::CarouselSnapshot;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollRequest {
    pub scroll_top: f64,
}

fn not_mounted() -> AppError {
    AppError::NotFound("outreach preview is not mounted".to_string())
}

/// GET /api/v1/preview
pub async fn handle_get_preview(
    State(state): State<AppState>,
) -> Result<Json<CarouselSnapshot>, AppError> {
    let session = state.session();
    let preview = session.preview().ok_or_else(not_mounted)?;
    Ok(Json(preview.carousel().snapshot()))
}

/// POST /api/v1/preview/next
pub async fn handle_next(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let mut session = state.session();
    let preview = session.preview_mut().ok_or_else(not_mounted)?;
    preview.carousel_mut().next();
    debug!("Carousel moved to {}", preview.carousel().current_index());
    Ok(Redirect::to("/"))
}

/// POST /api/v1/preview/prev
pub async fn handle_prev(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let mut session = state.session();
    let preview = session.preview_mut().ok_or_else(not_mounted)?;
    preview.carousel_mut().prev();
    debug!("Carousel moved to {}", preview.carousel().current_index());
    Ok(Redirect::to("/"))
}

/// POST /api/v1/preview/jump/:role_key
/// A role key with no record leaves the carousel where it is.
pub async fn handle_jump(
    State(state): State<AppState>,
    Path(role_key): Path<String>,
) -> Result<Redirect, AppError> {
    let key: RoleKey = role_key.parse().map_err(AppError::Validation)?;
    let mut session = state.session();
    let preview = session.preview_mut().ok_or_else(not_mounted)?;
    if !preview.carousel_mut().jump_to(key) {
        warn!("No candidate for role key {key}; carousel unchanged");
    }
    Ok(Redirect::to("/"))
}

/// POST /api/v1/preview/chat
pub async fn handle_speak_to_cleo(State(state): State<AppState>) -> Result<Redirect, AppError> {
    let mut session = state.session();
    if session.preview().is_none() {
        return Err(not_mounted());
    }
    session.speak_to_cleo(state.store.as_ref());
    Ok(Redirect::to("/"))
}

/// POST /api/v1/scroll
pub async fn handle_scroll(
    State(state): State<AppState>,
    Json(req): Json<ScrollRequest>,
) -> StatusCode {
    state.session().scroll(req.scroll_top);
    StatusCode::NO_CONTENT
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::models::handoff::ChatHandoff;
    use crate::router::{Direction, Page};
    use crate::routes::test_support::{body_string, form_post, test_app};
    use crate::store::{read_json, CANDIDATE_DATA_KEY, EMAIL_DATA_KEY};

    use super::*;

    fn seed_roles(state: &AppState) {
        let email = json!({ "subject": "Hello", "body": "Hi" });
        state
            .store
            .set(
                EMAIL_DATA_KEY,
                json!({
                    "roleEmails": {
                        "breannaAchenbach": { "email": email },
                        "ozgurAcar": { "email": email }
                    }
                })
                .to_string(),
            )
            .unwrap();
        state
            .session()
            .navigate(Page::OutreachContract, Direction::Forward, state.store.as_ref());
    }

    #[tokio::test]
    async fn test_snapshot_requires_mounted_preview() {
        let (_state, app) = test_app();

        let response = app
            .oneshot(Request::get("/api/v1/preview").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_next_wraps_and_snapshot_reports_it() {
        let (state, app) = test_app();
        seed_roles(&state);

        for _ in 0..3 {
            let response = app
                .clone()
                .oneshot(form_post("/api/v1/preview/next", ""))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
        }

        let response = app
            .oneshot(Request::get("/api/v1/preview").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let snapshot: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(snapshot["currentIndex"], 1);
        assert_eq!(snapshot["length"], 2);
        assert_eq!(snapshot["current"]["roleKey"], "ozgurAcar");
    }

    #[tokio::test]
    async fn test_jump_to_missing_role_is_ignored() {
        let (state, app) = test_app();
        seed_roles(&state);

        let response = app
            .clone()
            .oneshot(form_post("/api/v1/preview/jump/carolAnneWeeks", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            state.session().preview().unwrap().carousel().current_index(),
            0
        );

        let response = app
            .oneshot(form_post("/api/v1/preview/jump/nobody", ""))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_speak_to_cleo_hands_off_current_candidate() {
        let (state, app) = test_app();
        seed_roles(&state);

        app.clone()
            .oneshot(form_post("/api/v1/preview/jump/ozgurAcar", ""))
            .await
            .unwrap();
        let response = app
            .oneshot(form_post("/api/v1/preview/chat", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        let handoff: ChatHandoff = read_json(state.store.as_ref(), CANDIDATE_DATA_KEY).unwrap();
        assert_eq!(handoff.name, "Ozgur Acar");
        assert_eq!(state.session().current_page(), Page::Chat);
    }

    #[tokio::test]
    async fn test_scroll_toggles_sticky_header() {
        let (state, app) = test_app();
        seed_roles(&state);

        let response = app
            .oneshot(
                Request::post("/api/v1/scroll")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"scrollTop":12.5}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(state.session().preview().unwrap().is_scrolled());
    }
}
