//! HTTP boundary: axum routing, bearer-token extraction and the
//! domain-error to response translation.

pub mod translator;

#[cfg(feature = "web-axum")]
mod auth;
#[cfg(feature = "web-axum")]
mod error;
#[cfg(feature = "web-axum")]
mod handlers;
#[cfg(feature = "web-axum")]
mod state;

#[cfg(feature = "web-axum")]
pub use error::ApiError;
#[cfg(feature = "web-axum")]
pub use state::AppState;

#[cfg(feature = "web-axum")]
pub fn build_router(state: std::sync::Arc<AppState>) -> axum::Router {
    use axum::routing::{delete, get, post};
    use tower_http::trace::TraceLayer;

    axum::Router::new()
        .route("/threads", post(handlers::post_thread))
        .route("/threads/{thread_id}", get(handlers::get_thread))
        .route("/threads/{thread_id}/comments", post(handlers::post_comment))
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(handlers::delete_comment),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
