use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::contact::{dtos as contact_dtos, handlers as contact_handlers};
use crate::features::matches::models as matches_models;
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::search::{
    dtos as search_dtos, handlers as search_handlers, models as search_models,
};
use crate::shared::types::Meta;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Reports (public)
        reports_handlers::submit_report,
        // Search (public)
        search_handlers::search,
        // Contact (public)
        contact_handlers::get_contact,
        // Admin
        admin_handlers::login,
        admin_handlers::dashboard,
        admin_handlers::list_reports,
        admin_handlers::list_matches,
        admin_handlers::deactivate_report,
    ),
    components(
        schemas(
            // Shared types
            Meta,
            // Core enums
            reports_models::ReportType,
            matches_models::MatchRule,
            search_models::SearchStatus,
            // Reports
            reports_dtos::SubmitReportDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::FoundMatchDto,
            reports_dtos::SubmitReportResponseDto,
            // Search
            search_dtos::SearchRequestDto,
            search_dtos::MatchPairDto,
            search_dtos::SearchResponseDto,
            // Contact
            contact_dtos::ContactResponseDto,
            // Admin
            admin_dtos::AdminLoginDto,
            admin_dtos::AdminTokenDto,
            admin_dtos::AdminReportDto,
            admin_dtos::AdminMatchDto,
            admin_dtos::AdminDashboardDto,
        )
    ),
    tags(
        (name = "reports", description = "Lost and sighting report submission"),
        (name = "search", description = "Vehicle lookup by plate or chassis number"),
        (name = "contact", description = "Mediator contact details"),
        (name = "admin", description = "Mediator dashboard and moderation"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Arabity Wain API",
        version = "0.1.0",
        description = "Registry of lost and sighted vehicles",
    )
)]
pub struct ApiDoc;

/// Adds the admin bearer token scheme
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
            );
        }
    }
}

/// Overrides OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_public_and_admin_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/reports/{report_type}"));
        assert!(paths.contains_key("/api/search"));
        assert!(paths.contains_key("/api/contact"));
        assert!(paths.contains_key("/api/admin/reports/{id}/deactivate"));
    }

    #[test]
    fn test_swagger_info_modifier() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
    }
}
