//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together with
//! the schema wrappers from [`crate::inbound::http::schemas`], which describe
//! domain types without coupling them to utoipa.
//!
//! The document is served by Swagger UI in debug builds and exported via
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::about::Developer;
use crate::inbound::http::calories::AddCaloriesRequest;
use crate::inbound::http::schemas::{
    CalorieEntrySchema, ErrorCodeSchema, ErrorSchema, MealCategorySchema, MonthlyReportSchema,
    ReportItemSchema, UserSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calories API",
        description = "Users, daily calorie entries and monthly meal reports.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::get_user,
        crate::inbound::http::calories::add_calories,
        crate::inbound::http::calories::report,
        crate::inbound::http::about::about,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        ErrorSchema,
        ErrorCodeSchema,
        MealCategorySchema,
        CalorieEntrySchema,
        ReportItemSchema,
        MonthlyReportSchema,
        AddCaloriesRequest,
        Developer
    )),
    tags(
        (name = "users", description = "User lookup"),
        (name = "calories", description = "Calorie entries and monthly reports"),
        (name = "about", description = "Service information"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure and path registration.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";
    const USER_SCHEMA_NAME: &str = "crate.domain.User";
    const REPORT_SCHEMA_NAME: &str = "crate.domain.MonthlyReport";
    const ENTRY_SCHEMA_NAME: &str = "crate.domain.CalorieEntry";

    fn schema(name: &str) -> RefOr<Schema> {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        components
            .schemas
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("{name} schema should be registered"))
    }

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case(ERROR_SCHEMA_NAME, &["code", "message", "trace_id", "details"])]
    #[case(USER_SCHEMA_NAME, &["id", "first_name", "last_name", "birthday"])]
    #[case(REPORT_SCHEMA_NAME, &["breakfast", "lunch", "dinner", "other"])]
    #[case(
        ENTRY_SCHEMA_NAME,
        &["user_id", "year", "month", "day", "description", "category", "amount"]
    )]
    fn schemas_expose_wire_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let schema = schema(name);
        for field in fields {
            assert_object_schema_has_field(&schema, field);
        }
    }

    #[rstest]
    #[case("/users/{id}")]
    #[case("/addcalories")]
    #[case("/report")]
    #[case("/about")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn paths_are_registered(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(
            doc.paths.paths.contains_key(path),
            "path '{path}' should be documented"
        );
    }
}
