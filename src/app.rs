use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/add", post(handlers::add_transaction))
        .route("/edit", get(handlers::edit_page).post(handlers::edit_transaction))
        .route("/delete", get(handlers::delete_page).post(handlers::delete_transaction))
        .route("/api/summary", get(handlers::get_summary))
        .route("/api/transactions", get(handlers::get_transactions))
        .route("/static/script.js", get(handlers::widget_script))
        .with_state(state)
}
