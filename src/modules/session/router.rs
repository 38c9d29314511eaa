use axum::{Router, routing::get};

use crate::modules::session::controller::get_me;
use crate::state::AppState;

pub fn init_session_router() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}
