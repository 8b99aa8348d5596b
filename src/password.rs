use serde::Serialize;

// Characters that count as "special" for the strength check
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordValidation {
    pub has_min_length: bool,
    pub has_number: bool,
    pub has_special_char: bool,
    pub has_upper_case: bool,
    pub has_lower_case: bool,
}

impl PasswordValidation {
    pub fn is_valid(&self) -> bool {
        self.has_min_length
            && self.has_number
            && self.has_special_char
            && self.has_upper_case
            && self.has_lower_case
    }
}

pub fn validate_password(password: &str) -> PasswordValidation {
    PasswordValidation {
        // UTF-16 units, same length the signup form measures in the browser
        has_min_length: password.encode_utf16().count() >= MIN_PASSWORD_LENGTH,
        has_number: password.chars().any(|c| c.is_ascii_digit()),
        has_special_char: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
        has_upper_case: password.chars().any(|c| c.is_ascii_uppercase()),
        has_lower_case: password.chars().any(|c| c.is_ascii_lowercase()),
    }
}
