use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{AppState, middleware::log_errors, routes};

// 登录流程相关的路由
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(routes::auth::index))
        .route(
            "/login",
            get(routes::auth::login_form).post(routes::auth::login),
        )
        .route("/main", get(routes::auth::main_page))
        .route("/logout", get(routes::auth::logout))
}

// 创建主路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .route("/ping", get(routes::health::ping))
        .layer(axum::middleware::from_fn(log_errors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
