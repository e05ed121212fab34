/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.len() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate a bullet list: every entry non-empty, max 300 chars each.
pub fn validate_bullets(bullets: &[String]) -> Option<String> {
    for bullet in bullets {
        if bullet.trim().is_empty() {
            return Some("Bullets may not be empty".to_string());
        }
        if bullet.trim().len() > 300 {
            return Some("Bullets must be at most 300 characters".to_string());
        }
    }
    None
}
