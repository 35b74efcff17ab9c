// ABOUTME: Observable settings persisted in a key-value store
// ABOUTME: Typed values with defaults whose writes notify the owning container

use thiserror::Error;

use longdrive_storage::{CodecError, StorageError};

pub mod key;
pub mod observable;
pub mod publisher;

pub use key::SettingKey;
pub use observable::{EncodeFailurePolicy, ObservableSetting, SettingsContainer};
pub use publisher::{ChangePublisher, SubscriptionId};

#[derive(Debug, Error)]
pub enum SettingError {
    #[error("Failed to encode setting '{key}': {source}")]
    Encode {
        key: SettingKey,
        #[source]
        source: CodecError,
    },

    #[error("Failed to persist setting '{key}': {source}")]
    Storage {
        key: SettingKey,
        #[source]
        source: StorageError,
    },
}
