//! User lookup handler.
//!
//! ```text
//! GET /users/1
//! ```

use actix_web::{get, web};

use crate::domain::{Error, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, invalid_id_error};

/// Fetch a user by external identifier.
///
/// Integers that cannot name a user (zero, negatives, overflow) are reported
/// as not found; non-integers are rejected as invalid.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "External user identifier", example = 1)),
    responses(
        (status = 200, description = "User with formatted birthday", body = UserSchema),
        (status = 400, description = "Identifier is not an integer", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let raw = path.into_inner();
    let value: i64 = raw
        .parse()
        .map_err(|_| invalid_id_error(FieldName::new("id"), &raw))?;
    let id = UserId::new(value).map_err(|_| Error::not_found("User not found"))?;
    let user = state.users.get_user(id).await?;
    Ok(web::Json(user))
}

#[cfg(test)]
mod tests;
