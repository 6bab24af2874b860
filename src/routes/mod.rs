use axum::Router;

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod items;
pub mod users;
pub mod warehouses;

// Build the resource router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(users::router())
        .merge(warehouses::router())
        .merge(items::router())
}
