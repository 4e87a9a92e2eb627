pub mod books;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use catalog_core::QueryController;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<QueryController>,
    pub catalog_url: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(health::health_check))
        .route("/view", get(books::get_view))
        .route("/query", post(books::update_query))
        .route("/browse", post(books::browse))
        .route("/search", post(books::search))
        .route("/sort", post(books::change_sort))
        .route("/filter", post(books::change_filter))
        .route("/page/next", post(books::next_page))
        .route("/page/previous", post(books::previous_page))
        .route("/authors/select", post(books::select_author))
        .route("/bookshelves/select", post(books::select_bookshelf))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
