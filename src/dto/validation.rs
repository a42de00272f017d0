//! Validation helpers for DTOs.

use validator::ValidationError;

const MAX_PLAYER_NAME_LENGTH: usize = 32;

/// Validates the shape of a player name: non-blank, no surrounding
/// whitespace, at most 32 characters.
///
/// Whether the name is on the roster is decided by the score service.
///
/// # Examples
///
/// ```ignore
/// validate_player_name("Aman")   // Ok
/// validate_player_name("")       // Err - empty
/// validate_player_name(" Aman ") // Err - padded
/// ```
pub fn validate_player_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("player_empty");
        err.message = Some("Player name must not be empty".into());
        return Err(err);
    }

    if name.trim() != name {
        let mut err = ValidationError::new("player_whitespace");
        err.message = Some("Player name must not start or end with whitespace".into());
        return Err(err);
    }

    let length = name.chars().count();
    if length > MAX_PLAYER_NAME_LENGTH {
        let mut err = ValidationError::new("player_length");
        err.message = Some(
            format!("Player name must be at most {MAX_PLAYER_NAME_LENGTH} characters (got {length})")
                .into(),
        );
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_roster_shaped_names() {
        assert!(validate_player_name("Aman").is_ok());
        assert!(validate_player_name("WVish").is_ok());
        // unknown but well formed; rejected later as not found
        assert!(validate_player_name("Zoe").is_ok());
    }

    #[test]
    fn rejects_blank_or_padded_names() {
        assert!(validate_player_name("").is_err());
        assert!(validate_player_name("   ").is_err());
        assert!(validate_player_name(" Aman").is_err());
        assert!(validate_player_name("Aman\n").is_err());
    }

    #[test]
    fn rejects_overlong_names() {
        assert!(validate_player_name(&"x".repeat(33)).is_err());
        assert!(validate_player_name(&"x".repeat(32)).is_ok());
    }
}
