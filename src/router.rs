use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::{metrics_app, metrics_middleware};
use crate::middleware::auth::require_auth;
use crate::middleware::cors::cors_middleware;
use crate::middleware::role::{require_admin, require_super_admin};
use crate::modules::admin::router::{init_admin_router, init_super_admin_router};
use crate::modules::health::router::init_health_router;
use crate::modules::session::router::init_session_router;
use crate::state::AppState;
use axum::{Router, middleware};
use metrics_exporter_prometheus::PrometheusHandle;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router. `/metrics` is mounted when a Prometheus
/// handle is given.
///
/// CORS wraps everything, including `/metrics` and the fallback, so
/// preflights are answered before any gate runs and rejections leave with
/// the same CORS headers as successes.
pub fn init_router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    let mut app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(init_health_router())
        .nest(
            "/api",
            Router::new()
                .nest(
                    "/auth",
                    init_session_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
                )
                .nest(
                    "/admin",
                    init_admin_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                )
                .nest(
                    "/super-admin",
                    init_super_admin_router().route_layer(middleware::from_fn_with_state(
                        state.clone(),
                        require_super_admin,
                    )),
                ),
        )
        .with_state(state.clone());

    if let Some(handle) = metrics {
        app = app.merge(metrics_app(handle));
    }

    app.layer(middleware::from_fn_with_state(state, cors_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
