use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::router::{Direction, Page};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct NavigateForm {
    pub page: String,
    #[serde(default)]
    pub direction: Direction,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoSetupForm {
    pub user_name: String,
    pub user_email: String,
}

/// GET /
/// The first request of the process runs the URL bootstrap; every request
/// renders the current page.
pub async fn handle_index(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let mut session = state.session();
    session.bootstrap(&params, state.store.as_ref());
    Html(session.render(state.store.as_ref()))
}

/// POST /navigate
pub async fn handle_navigate(
    State(state): State<AppState>,
    Form(form): Form<NavigateForm>,
) -> Result<Redirect, AppError> {
    let page: Page = form.page.parse().map_err(AppError::Validation)?;
    state
        .session()
        .navigate(page, form.direction, state.store.as_ref());
    Ok(Redirect::to("/"))
}

/// POST /restart
pub async fn handle_restart(State(state): State<AppState>) -> Redirect {
    state.session().restart(state.store.as_ref());
    Redirect::to("/")
}

/// POST /demo-setup
pub async fn handle_demo_setup(
    State(state): State<AppState>,
    Form(form): Form<DemoSetupForm>,
) -> Result<Redirect, AppError> {
    let user_name = form.user_name.trim();
    let user_email = form.user_email.trim();
    if user_name.is_empty() {
        return Err(AppError::Validation("userName is required".to_string()));
    }
    if user_email.is_empty() {
        return Err(AppError::Validation("userEmail is required".to_string()));
    }

    let viewer = state
        .session()
        .submit_identity(user_name, user_email, state.store.as_ref());
    info!("Demo viewer set up: {} <{}>", viewer.user_name, viewer.user_email);
    Ok(Redirect::to("/"))
}
