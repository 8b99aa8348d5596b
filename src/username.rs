pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 20;

pub const USERNAME_RULE_MESSAGE: &str =
    "Username must be 3-20 characters and can only contain letters, numbers, and underscores";

// ASCII letters, digits and '_' only, 3 to 20 of them
pub fn is_valid_username(username: &str) -> bool {
    (MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&username.len())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
