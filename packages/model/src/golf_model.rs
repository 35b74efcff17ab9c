// ABOUTME: Golf model holding the player name and attempt history as observable settings
// ABOUTME: Every write goes through the model's change publisher

use chrono::{DateTime, Utc};
use tracing::info;

use longdrive_settings::{ChangePublisher, ObservableSetting, SettingsContainer, SubscriptionId};
use longdrive_storage::KeyValueStore;

use crate::{Attempt, ModelError};

/// Store key of the player name
pub const NAME_KEY: &str = "name";

/// Store key of the attempt history
pub const ATTEMPTS_KEY: &str = "latestAttempt";

pub struct GolfModel<S> {
    store: S,
    changes: ChangePublisher,
    name: ObservableSetting<String>,
    attempts: ObservableSetting<Vec<Attempt>>,
}

impl<S: KeyValueStore> SettingsContainer for GolfModel<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }

    fn object_will_change(&self) -> &ChangePublisher {
        &self.changes
    }
}

impl<S: KeyValueStore> GolfModel<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            changes: ChangePublisher::new(),
            name: ObservableSetting::new(NAME_KEY, String::new()),
            attempts: ObservableSetting::new(ATTEMPTS_KEY, Vec::new()),
        }
    }

    /// Register a callback fired on every write to the model
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        self.changes.subscribe(callback)
    }

    pub fn changes(&self) -> &ChangePublisher {
        &self.changes
    }

    /// Player name, empty until one is saved
    pub fn name(&self) -> String {
        self.name.get(self)
    }

    pub fn set_name(&self, name: impl Into<String>) -> Result<(), ModelError> {
        self.name.set(self, name.into())?;
        Ok(())
    }

    /// Log a drive at the current time
    pub fn store_attempt(&self, distance: f64) -> Result<Attempt, ModelError> {
        self.store_attempt_at(distance, Utc::now())
    }

    pub fn store_attempt_at(
        &self,
        distance: f64,
        date: DateTime<Utc>,
    ) -> Result<Attempt, ModelError> {
        // JSON has no NaN or infinity; one such value would make the whole history undecodable
        if !distance.is_finite() || distance < 0.0 {
            return Err(ModelError::InvalidDistance(distance));
        }

        let attempt = Attempt::new(date, distance);
        let mut attempts = self.attempts.get(self);
        attempts.push(attempt.clone());
        self.attempts.set(self, attempts)?;

        info!(distance, "Stored attempt");
        Ok(attempt)
    }

    /// Attempts in the order they were stored
    pub fn attempts(&self) -> Vec<Attempt> {
        self.attempts.get(self)
    }

    /// Attempts newest first
    pub fn history(&self) -> Vec<Attempt> {
        let mut attempts = self.attempts.get(self);
        attempts.sort_by(|a, b| b.date.cmp(&a.date));
        attempts
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.get(self).len()
    }

    /// Distance of the most recent attempt
    pub fn latest_attempt(&self) -> Option<f64> {
        self.attempts
            .get(self)
            .into_iter()
            .max_by(|a, b| a.date.cmp(&b.date))
            .map(|attempt| attempt.value)
    }

    /// Longest distance logged so far
    pub fn personal_best(&self) -> Option<f64> {
        self.attempts
            .get(self)
            .into_iter()
            .map(|attempt| attempt.value)
            .max_by(f64::total_cmp)
    }

    pub fn clear_attempts(&self) -> Result<(), ModelError> {
        self.attempts.remove(self)?;
        Ok(())
    }
}
