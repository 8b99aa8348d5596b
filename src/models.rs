use serde::{Deserialize, Serialize};

use crate::password::PasswordValidation;

// POST /auth/forgot-password body
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct MessageResponse {
    pub message: String,
}

// POST /auth/password/validate body
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct PasswordCheckRequest {
    pub password: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct PasswordCheckResponse {
    #[serde(flatten)]
    pub rules: PasswordValidation,
    pub valid: bool,
}

impl From<PasswordValidation> for PasswordCheckResponse {
    fn from(rules: PasswordValidation) -> Self {
        Self {
            valid: rules.is_valid(),
            rules,
        }
    }
}

// POST /auth/username/validate body
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct UsernameCheckRequest {
    pub username: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UsernameCheckResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
