use sha2::{Digest, Sha256};

use crate::errors::AppError;

// Trim + lowercase so "A@X.com " and "a@x.com" share one limiter record
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    if email.is_empty() {
        return Err(AppError::BadRequest("Email is required".to_string()));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(AppError::BadRequest("Email must contain '@'".to_string()));
    };

    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    // domain needs a dot with something on both sides
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(AppError::BadRequest("Invalid email domain".to_string())),
    }
}

// log tag, raw emails never hit the logs
pub fn fingerprint(identifier: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(identifier.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..12].to_string()
}
