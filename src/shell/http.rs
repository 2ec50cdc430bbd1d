use axum::{
    Router,
    routing::{MethodRouter, get},
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::modules::users::use_cases::create_user::inbound::http as create_http;
use crate::modules::users::use_cases::delete_user::inbound::http as delete_http;
use crate::modules::users::use_cases::get_user::inbound::http as get_http;
use crate::modules::users::use_cases::list_users::inbound::http as list_http;
use crate::shared::http::error::{handle_panic, not_found};
use crate::shell::state::AppState;

fn collection() -> MethodRouter<AppState> {
    get(list_http::handle)
        .post(create_http::handle)
        .head(not_found)
        .fallback(not_found)
}

fn member() -> MethodRouter<AppState> {
    get(get_http::handle)
        .delete(delete_http::handle)
        .head(not_found)
        .fallback(not_found)
}

/// Unknown paths and unsupported methods both answer 404. `get` would also
/// serve HEAD, so HEAD is routed to the fallback explicitly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users", collection())
        .route("/users/", collection())
        .route("/users/{id}", member())
        .fallback(not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}
