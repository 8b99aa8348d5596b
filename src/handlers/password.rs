use axum::Json;

use crate::extractors::AppJson;
use crate::models::{
    PasswordCheckRequest, PasswordCheckResponse, UsernameCheckRequest, UsernameCheckResponse,
};
use crate::password::validate_password;
use crate::username::{USERNAME_RULE_MESSAGE, is_valid_username};

// Stateless; the signup form calls these as the user types
pub async fn password_check_handler(
    AppJson(payload): AppJson<PasswordCheckRequest>,
) -> Json<PasswordCheckResponse> {
    Json(validate_password(&payload.password).into())
}

pub async fn username_check_handler(
    AppJson(payload): AppJson<UsernameCheckRequest>,
) -> Json<UsernameCheckResponse> {
    let valid = is_valid_username(&payload.username);
    Json(UsernameCheckResponse {
        valid,
        message: (!valid).then(|| USERNAME_RULE_MESSAGE.to_string()),
    })
}
