use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::admin::model::{PrincipalResponse, RoleChangedResponse, UpdateRoleDto};
use crate::modules::session::model::MeResponse;
use serenity_core::{ErrorBody, HealthResponse};
use serenity_db::{Principal, Role};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health_check,
        crate::modules::session::controller::get_me,
        crate::modules::admin::controller::get_admin_me,
        crate::modules::admin::controller::get_user,
        crate::modules::admin::controller::update_user_role,
    ),
    components(
        schemas(
            Principal,
            Role,
            MeResponse,
            PrincipalResponse,
            RoleChangedResponse,
            UpdateRoleDto,
            HealthResponse,
            ErrorBody,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Session", description = "Identity attached by the auth gate"),
        (name = "Admin", description = "Admin-or-above endpoints"),
        (name = "Super Admin", description = "Super-admin-only endpoints")
    ),
    info(
        title = "Serenity Auth Gate",
        version = "0.1.0",
        description = "JWT bearer authentication, role gating and CORS negotiation for the Serenity API.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
