use axum::{Extension, Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::entertainers::use_cases::create_entertainer::inbound::http as create_http;
use crate::modules::entertainers::use_cases::delete_entertainer::inbound::http as delete_http;
use crate::modules::entertainers::use_cases::get_entertainer::inbound::http as get_http;
use crate::modules::entertainers::use_cases::list_entertainers::inbound::http as list_http;
use crate::modules::entertainers::use_cases::update_entertainer::inbound::http as update_http;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

pub const ENTERTAINERS_PATH: &str = "/api/entertainers";

pub fn router(state: AppState) -> Router {
    let schema = graphql::build_schema(state.clone());
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            ENTERTAINERS_PATH,
            get(list_http::handle).post(create_http::handle),
        )
        .route(
            "/api/entertainers/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
