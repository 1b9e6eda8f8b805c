use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/add", get(handlers::add_habit_form).post(handlers::add_habit))
        .route("/complete", post(handlers::complete))
        .with_state(state)
}
