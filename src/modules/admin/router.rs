use axum::{
    Router,
    routing::{get, put},
};

use crate::modules::admin::controller::{get_admin_me, get_user, update_user_role};
use crate::state::AppState;

pub fn init_admin_router() -> Router<AppState> {
    Router::new().route("/me", get(get_admin_me))
}

pub fn init_super_admin_router() -> Router<AppState> {
    Router::new()
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/role", put(update_user_role))
}
