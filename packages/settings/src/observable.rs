// ABOUTME: Typed setting stored under one key of its container's key-value store
// ABOUTME: Reads fall back to a default, writes notify the container before syncing

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace, warn};

use longdrive_storage::{Codec, JsonCodec, KeyValueStore};

use crate::{ChangePublisher, SettingError, SettingKey};

/// An object that owns a store and the change channel its settings report to
pub trait SettingsContainer {
    type Store: KeyValueStore;

    fn store(&self) -> &Self::Store;

    fn object_will_change(&self) -> &ChangePublisher;
}

/// What [`ObservableSetting::set`] does when a value cannot be encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodeFailurePolicy {
    /// Refuse the write: nothing is stored and no notification is sent
    #[default]
    Reject,
    /// Store an empty payload (reads back as the default) and notify anyway
    Degrade,
}

/// A persisted value with a default, held as a field of a [`SettingsContainer`]
///
/// The setting itself only knows its key, default, codec and encode policy.
/// Storage and notification belong to the container, which is passed to
/// every read and write.
#[derive(Debug, Clone)]
pub struct ObservableSetting<V, C = JsonCodec> {
    key: SettingKey,
    default_value: V,
    codec: C,
    policy: EncodeFailurePolicy,
}

impl<V> ObservableSetting<V> {
    pub fn new(key: impl Into<SettingKey>, default_value: V) -> Self {
        Self::with_codec(key, default_value, JsonCodec)
    }
}

impl<V, C> ObservableSetting<V, C> {
    pub fn with_codec(key: impl Into<SettingKey>, default_value: V, codec: C) -> Self {
        Self {
            key: key.into(),
            default_value,
            codec,
            policy: EncodeFailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: EncodeFailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn key(&self) -> &SettingKey {
        &self.key
    }

    pub fn default_value(&self) -> &V {
        &self.default_value
    }

    pub fn policy(&self) -> EncodeFailurePolicy {
        self.policy
    }
}

impl<V, C> ObservableSetting<V, C>
where
    V: Serialize + DeserializeOwned + Clone,
    C: Codec,
{
    /// Current value, or the default when the entry is missing or undecodable
    pub fn get<T>(&self, container: &T) -> V
    where
        T: SettingsContainer + ?Sized,
    {
        let Some(bytes) = container.store().data(self.key.as_str()) else {
            trace!(key = %self.key, "Setting missing, using default");
            return self.default_value.clone();
        };

        match self.codec.decode(&bytes) {
            Ok(value) => {
                trace!(key = %self.key, "Setting read");
                value
            }
            Err(e) => {
                debug!(key = %self.key, error = %e, "Setting undecodable, using default");
                self.default_value.clone()
            }
        }
    }

    /// Write a value and notify the container
    ///
    /// The bytes land in the store and the notification is sent before the
    /// store is synchronized, so callbacks already read the new value. Every
    /// successful call notifies exactly once, even if the value is unchanged.
    pub fn set<T>(&self, container: &T, value: V) -> Result<(), SettingError>
    where
        T: SettingsContainer + ?Sized,
    {
        let bytes = match self.codec.encode(&value) {
            Ok(bytes) => bytes,
            Err(source) => match self.policy {
                EncodeFailurePolicy::Reject => {
                    warn!(key = %self.key, error = %source, "Rejected setting write");
                    return Err(SettingError::Encode {
                        key: self.key.clone(),
                        source,
                    });
                }
                EncodeFailurePolicy::Degrade => {
                    warn!(
                        key = %self.key,
                        error = %source,
                        "Storing empty payload for unencodable setting"
                    );
                    Vec::new()
                }
            },
        };

        container.store().set_data(self.key.as_str(), bytes);
        trace!(key = %self.key, "Setting written");
        container.object_will_change().send();

        self.synchronize(container)
    }

    /// Delete the stored value so reads return the default again
    pub fn remove<T>(&self, container: &T) -> Result<(), SettingError>
    where
        T: SettingsContainer + ?Sized,
    {
        container.store().remove(self.key.as_str());
        trace!(key = %self.key, "Setting removed");
        container.object_will_change().send();

        self.synchronize(container)
    }

    /// True when the store holds an entry for this key
    pub fn is_stored<T>(&self, container: &T) -> bool
    where
        T: SettingsContainer + ?Sized,
    {
        container.store().contains_key(self.key.as_str())
    }

    fn synchronize<T>(&self, container: &T) -> Result<(), SettingError>
    where
        T: SettingsContainer + ?Sized,
    {
        container
            .store()
            .synchronize()
            .map_err(|source| SettingError::Storage {
                key: self.key.clone(),
                source,
            })
    }
}
