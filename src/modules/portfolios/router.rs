use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::middleware::auth::authenticate;
use crate::middleware::role::require_ownership;
use crate::state::AppState;

use super::controller::{
    create_portfolio, delete_portfolio, get_portfolio_by_username, get_profile, list_portfolios,
    toggle_publish, update_portfolio,
};

/// `/api/portfolios`. The two read routes are public; everything keyed by
/// `{user_id}` goes through the ownership gate, and creation checks
/// ownership in the handler because the owner id arrives in the body. Layers
/// sit on the method routers so the public and protected halves of `/` can
/// coexist.
pub fn init_portfolios_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_portfolios))
        .route("/username/{username}", get(get_portfolio_by_username))
        .route(
            "/",
            post(create_portfolio)
                .route_layer(middleware::from_fn_with_state(state.clone(), authenticate)),
        )
        .route(
            "/{user_id}",
            put(update_portfolio)
                .delete(delete_portfolio)
                .route_layer(middleware::from_fn(require_ownership))
                .route_layer(middleware::from_fn_with_state(state.clone(), authenticate)),
        )
        .route(
            "/{user_id}/publish",
            put(toggle_publish)
                .route_layer(middleware::from_fn(require_ownership))
                .route_layer(middleware::from_fn_with_state(state.clone(), authenticate)),
        )
        .route(
            "/profile/{user_id}",
            get(get_profile)
                .route_layer(middleware::from_fn(require_ownership))
                .route_layer(middleware::from_fn_with_state(state, authenticate)),
        )
}
