// ABOUTME: Input forms for renaming the player and logging a drive
// ABOUTME: Each form buffers raw text in a validated field and commits into the model

use thiserror::Error;
use tracing::debug;

use longdrive_core::{MaxLength, ValidatedField, Validation, WhitespaceValidation};
use longdrive_storage::KeyValueStore;

use crate::{Attempt, GolfModel, ModelError};

/// Longest accepted player name, in characters
pub const MAX_NAME_CHARS: usize = 64;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Name cannot be empty")]
    InvalidName,

    #[error("Invalid distance: '{0}'. Enter the distance in meters, e.g. 250.5")]
    InvalidDistance(String),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Accepts text that parses as a finite, non-negative number
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistanceValidation;

impl DistanceValidation {
    fn parse(value: &str) -> Option<f64> {
        value
            .parse::<f64>()
            .ok()
            .filter(|distance| distance.is_finite() && *distance >= 0.0)
    }
}

impl Validation for DistanceValidation {
    type Value = String;

    fn validate(&self, value: &String) -> bool {
        Self::parse(value).is_some()
    }

    fn sanitize(&self, value: String) -> String {
        value
    }
}

/// Edits the player name
#[derive(Debug)]
pub struct UpdateNameForm {
    field: ValidatedField<String>,
    shake_count: u32,
}

impl Default for UpdateNameForm {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateNameForm {
    pub fn new() -> Self {
        Self {
            // Trim again after truncating, the cut can land right after a space
            field: ValidatedField::new(String::new())
                .with_rule(WhitespaceValidation::all())
                .with_rule(MaxLength::new(MAX_NAME_CHARS))
                .with_rule(WhitespaceValidation::all()),
            shake_count: 0,
        }
    }

    pub fn input(&self) -> &str {
        self.field.raw()
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.field.set_raw(input.into());
    }

    pub fn is_valid(&self) -> bool {
        self.field.is_valid()
    }

    /// Number of rejected saves; a view shakes the input once per increment
    pub fn shake_count(&self) -> u32 {
        self.shake_count
    }

    /// Cancelling is only allowed once the player has a name
    pub fn can_cancel<S: KeyValueStore>(&self, model: &GolfModel<S>) -> bool {
        !model.name().is_empty()
    }

    /// Store the sanitized name in the model and return it
    pub fn save<S: KeyValueStore>(&mut self, model: &GolfModel<S>) -> Result<String, FormError> {
        let name = match self.field.commit_if_valid() {
            Ok(name) => name,
            Err(_) => {
                self.shake_count = self.shake_count.wrapping_add(1);
                debug!(shake_count = self.shake_count, "Rejected player name");
                return Err(FormError::InvalidName);
            }
        };

        model.set_name(name.clone())?;
        debug!(name = %name, "Saved player name");
        Ok(name)
    }
}

/// Buffers the distance typed for a new attempt
#[derive(Debug)]
pub struct AttemptEntry {
    field: ValidatedField<String>,
}

impl Default for AttemptEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl AttemptEntry {
    pub fn new() -> Self {
        Self {
            field: ValidatedField::new(String::new())
                .with_rule(WhitespaceValidation::all())
                .with_rule(DistanceValidation),
        }
    }

    pub fn input(&self) -> &str {
        self.field.raw()
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.field.set_raw(input.into());
    }

    pub fn is_valid(&self) -> bool {
        self.field.is_valid()
    }

    /// Log the entered distance. Unparseable input leaves the buffer as typed.
    pub fn save<S: KeyValueStore>(&mut self, model: &GolfModel<S>) -> Result<Attempt, FormError> {
        let text = self
            .field
            .commit_if_valid()
            .map_err(|_| FormError::InvalidDistance(self.field.sanitized_value()))?;

        let distance = DistanceValidation::parse(&text)
            .ok_or_else(|| FormError::InvalidDistance(text.clone()))?;
        Ok(model.store_attempt(distance)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use longdrive_storage::MemoryStore;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("250", true)]
    #[case("250.5", true)]
    #[case("0", true)]
    #[case("1e2", true)]
    #[case("", false)]
    #[case("abc", false)]
    #[case("-3", false)]
    #[case("NaN", false)]
    #[case("inf", false)]
    #[case("250,5", false)]
    fn test_distance_validation(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(DistanceValidation.validate(&input.to_string()), valid);
    }

    #[test]
    fn test_name_form_saves_sanitized_name() {
        let model = GolfModel::new(MemoryStore::new());
        let mut form = UpdateNameForm::new();
        assert!(!form.can_cancel(&model));

        form.set_input("  Jane  ");
        assert!(form.is_valid());
        assert_eq!(form.save(&model).unwrap(), "Jane");

        assert_eq!(model.name(), "Jane");
        assert_eq!(form.input(), "");
        assert!(form.can_cancel(&model));
    }

    #[test]
    fn test_name_form_shakes_on_blank_name() {
        let model = GolfModel::new(MemoryStore::new());
        model.set_name("Jane").unwrap();
        let mut form = UpdateNameForm::new();

        form.set_input("    ");
        assert!(matches!(form.save(&model), Err(FormError::InvalidName)));
        assert!(matches!(form.save(&model), Err(FormError::InvalidName)));

        assert_eq!(form.shake_count(), 2);
        assert_eq!(form.input(), "    ");
        assert_eq!(model.name(), "Jane");
    }

    #[test]
    fn test_name_form_truncates_long_names() {
        let model = GolfModel::new(MemoryStore::new());
        let mut form = UpdateNameForm::new();

        form.set_input(format!(" {} ", "x".repeat(MAX_NAME_CHARS + 10)));
        let saved = form.save(&model).unwrap();

        assert_eq!(saved.chars().count(), MAX_NAME_CHARS);
    }

    #[test]
    fn test_name_form_truncation_never_ends_in_space() {
        let model = GolfModel::new(MemoryStore::new());
        let mut form = UpdateNameForm::new();

        // The cut at MAX_NAME_CHARS lands right after the space
        let input = format!("{} Smith", "a".repeat(MAX_NAME_CHARS - 1));
        form.set_input(input);
        let saved = form.save(&model).unwrap();

        assert_eq!(saved, saved.trim());
        assert_eq!(saved, "a".repeat(MAX_NAME_CHARS - 1));
        assert_eq!(model.name(), saved);
    }

    #[test]
    fn test_attempt_entry_logs_trimmed_distance() {
        let model = GolfModel::new(MemoryStore::new());
        let mut entry = AttemptEntry::new();

        entry.set_input(" 263.4\n");
        let attempt = entry.save(&model).unwrap();

        assert_eq!(attempt.value, 263.4);
        assert_eq!(model.latest_attempt(), Some(263.4));
        assert_eq!(entry.input(), "");
    }

    #[test]
    fn test_attempt_entry_keeps_unparseable_input() {
        let model = GolfModel::new(MemoryStore::new());
        let mut entry = AttemptEntry::new();

        entry.set_input(" far ");
        match entry.save(&model) {
            Err(FormError::InvalidDistance(text)) => assert_eq!(text, "far"),
            other => panic!("Expected InvalidDistance, got {:?}", other),
        }

        assert_eq!(entry.input(), " far ");
        assert_eq!(model.attempt_count(), 0);
    }
}
