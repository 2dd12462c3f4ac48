use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::middleware::TokenAuth;
use crate::api::response::{reply, Envelope};
use crate::api::state::AppState;
use crate::domain::user::{Email, User, UserFields, UserPatch};

type UserReply = (StatusCode, Json<Envelope<User>>);

/// Request body for creating or replacing a user
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    pub name: String,
    pub lastname: String,
    pub email: Email,
    pub age: i64,
    pub height: f64,
    pub active: bool,
}

impl UserRequest {
    /// Validates the payload into domain fields
    pub fn into_fields(self) -> Result<UserFields, ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::bad_request("name is required"));
        }
        if self.lastname.trim().is_empty() {
            return Err(ApiError::bad_request("lastname is required"));
        }

        Ok(UserFields {
            name: self.name,
            lastname: self.lastname,
            email: self.email.into_inner(),
            age: self.age,
            height: self.height,
            active: self.active,
        })
    }
}

/// Request body for a partial update
///
/// An empty `lastname` or a zero `age` counts as "not supplied", matching
/// what existing clients send for untouched fields.
#[derive(Debug, Default, Deserialize)]
pub struct PatchUserRequest {
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

impl PatchUserRequest {
    pub fn into_patch(self) -> UserPatch {
        UserPatch {
            lastname: self.lastname.filter(|l| !l.is_empty()),
            age: self.age.filter(|&a| a != 0),
        }
    }
}

fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse().map_err(|_| ApiError::bad_request("invalid ID"))
}

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::bad_request(rejection.body_text()))
}

/// List users
///
/// GET /users
pub async fn get_all(_auth: TokenAuth, State(state): State<AppState>) -> Result<Response, ApiError> {
    let users = state.service.get_all().await?;

    if users.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(reply(StatusCode::OK, users).into_response())
}

/// Get a user by ID
///
/// GET /users/:id
pub async fn get_by_id(
    _auth: TokenAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<UserReply, ApiError> {
    let user = state.service.get_by_id(parse_id(&id)?).await?;

    Ok(reply(StatusCode::OK, user))
}

/// Create a user
///
/// POST /users
pub async fn store(
    _auth: TokenAuth,
    State(state): State<AppState>,
    body: Result<Json<UserRequest>, JsonRejection>,
) -> Result<UserReply, ApiError> {
    let fields = json_body(body)?.into_fields()?;
    let user = state.service.store(fields).await?;

    Ok(reply(StatusCode::CREATED, user))
}

/// Replace a user
///
/// PUT /users/:id
pub async fn update(
    _auth: TokenAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UserRequest>, JsonRejection>,
) -> Result<UserReply, ApiError> {
    let id = parse_id(&id)?;
    let fields = json_body(body)?.into_fields()?;
    let user = state.service.update(id, fields).await?;

    Ok(reply(StatusCode::OK, user))
}

/// Patch a user's lastname and/or age
///
/// PATCH /users/:id
pub async fn patch(
    _auth: TokenAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PatchUserRequest>, JsonRejection>,
) -> Result<UserReply, ApiError> {
    let id = parse_id(&id)?;
    let patch = json_body(body)?.into_patch();
    let user = state.service.patch(id, patch).await?;

    Ok(reply(StatusCode::OK, user))
}

/// Delete a user
///
/// DELETE /users/:id
pub async fn delete(
    _auth: TokenAuth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(parse_id(&id)?).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str) -> Result<UserRequest, serde_json::Error> {
        serde_json::from_value(serde_json::json!({
            "name": "teste",
            "lastname": "teste",
            "email": email,
            "age": 100,
            "height": 1.8,
            "active": true
        }))
    }

    #[test]
    fn patch_request_treats_empty_and_zero_as_absent() {
        let patch = PatchUserRequest {
            lastname: Some(String::new()),
            age: Some(0),
        }
        .into_patch();

        assert!(patch.is_empty());
    }

    #[test]
    fn patch_request_keeps_supplied_values() {
        let patch = PatchUserRequest {
            lastname: Some("X".to_string()),
            age: Some(0),
        }
        .into_patch();

        assert_eq!(patch.lastname.as_deref(), Some("X"));
        assert_eq!(patch.age, None);
    }

    #[test]
    fn user_request_validation() {
        let fields = request("test@test.com").unwrap().into_fields().unwrap();
        assert_eq!(fields.email, "test@test.com");

        let mut blank = request("test@test.com").unwrap();
        blank.name = "  ".to_string();
        assert_eq!(blank.into_fields().unwrap_err().message, "name is required");
    }

    #[test]
    fn user_request_rejects_malformed_email() {
        let err = request("nope").unwrap_err();
        assert!(err.to_string().contains("invalid email"));
    }

    #[test]
    fn parse_id_rejects_non_numeric() {
        assert_eq!(parse_id("12").unwrap(), 12);
        assert_eq!(parse_id("abc").unwrap_err().message, "invalid ID");
        assert!(parse_id("-1").is_err());
    }
}
