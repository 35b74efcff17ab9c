// ABOUTME: Long drive log domain model built on validated fields and observable settings
// ABOUTME: Player name, attempt history, and the input forms that edit them

use thiserror::Error;

use longdrive_settings::SettingError;

pub mod attempt;
pub mod forms;
pub mod golf_model;

pub use attempt::{format_distance, Attempt};
pub use forms::{AttemptEntry, DistanceValidation, FormError, UpdateNameForm, MAX_NAME_CHARS};
pub use golf_model::{GolfModel, ATTEMPTS_KEY, NAME_KEY};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Invalid distance: {0}. Must be a finite, non-negative number of meters")]
    InvalidDistance(f64),

    #[error(transparent)]
    Setting(#[from] SettingError),
}
