//! Loader for the RON movement tuning file.

use ron::Options;
use std::fs;
use std::path::Path;

use super::validation::{ValidationError, validate_tuning};
use crate::movement::MovementTuning;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from RON text. `file` only labels errors.
pub fn parse_tuning(file: &str, contents: &str) -> Result<MovementTuning, ContentLoadError> {
    let tuning: MovementTuning = ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })?;

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        return Err(ContentLoadError {
            file: file.to_string(),
            message: invalid_message(&errors),
        });
    }

    Ok(tuning)
}

/// Load and validate the movement tuning file.
pub fn load_tuning(path: &Path) -> Result<MovementTuning, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&file_name, &contents)
}

fn invalid_message(errors: &[ValidationError]) -> String {
    let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
    format!("Invalid tuning: {}", details.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let tuning = parse_tuning(
            "inline",
            "(max_speed: 7.5, max_jumps: 3, abilities: (wave_dash: false))",
        )
        .unwrap();

        let defaults = MovementTuning::default();
        assert_eq!(tuning.max_speed, 7.5);
        assert_eq!(tuning.max_jumps, 3);
        assert!(!tuning.abilities.wave_dash);
        assert!(tuning.abilities.dash);
        assert_eq!(tuning.dash_speed, defaults.dash_speed);
    }

    #[test]
    fn test_empty_struct_is_default() {
        let tuning = parse_tuning("inline", "()").unwrap();
        assert_eq!(tuning, MovementTuning::default());
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = parse_tuning("movement.ron", "(max_speed: )").unwrap_err();
        assert_eq!(err.file, "movement.ron");
        assert!(err.message.starts_with("Parse error"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = parse_tuning("movement.ron", "(dash_duration: 0.0)").unwrap_err();
        assert!(err.message.contains("dash_duration"));
        assert!(err.to_string().starts_with("Failed to load movement.ron"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_tuning(Path::new("does/not/exist.ron")).unwrap_err();
        assert!(err.message.starts_with("IO error"));
    }

    #[test]
    fn test_shipped_tuning_file_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/movement.ron");
        let tuning = load_tuning(&path).unwrap();
        assert!(tuning.max_speed > 0.0);
    }
}
