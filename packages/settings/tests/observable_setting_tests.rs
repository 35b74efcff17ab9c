// ABOUTME: Integration tests for observable settings over real and mocked stores
// ABOUTME: Covers persistence across reopen, write ordering and sync failures

use longdrive_settings::{ChangePublisher, ObservableSetting, SettingError, SettingsContainer};
use longdrive_storage::{FileStore, KeyValueStore, StorageError};
use mockall::{mock, Sequence};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

struct Player<S> {
    store: S,
    changes: ChangePublisher,
    name: ObservableSetting<String>,
}

impl<S: KeyValueStore> Player<S> {
    fn new(store: S) -> Self {
        Self {
            store,
            changes: ChangePublisher::new(),
            name: ObservableSetting::new("name", String::new()),
        }
    }
}

impl<S: KeyValueStore> SettingsContainer for Player<S> {
    type Store = S;

    fn store(&self) -> &S {
        &self.store
    }

    fn object_will_change(&self) -> &ChangePublisher {
        &self.changes
    }
}

mock! {
    pub Store {}

    impl KeyValueStore for Store {
        fn data(&self, key: &str) -> Option<Vec<u8>>;
        fn set_data(&self, key: &str, data: Vec<u8>);
        fn remove(&self, key: &str);
        fn contains_key(&self, key: &str) -> bool;
        fn synchronize(&self) -> Result<(), StorageError>;
    }
}

fn open_player(path: &Path) -> Player<FileStore> {
    Player::new(FileStore::open(path).unwrap())
}

#[test]
fn test_setting_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");

    let player = open_player(&path);
    assert_eq!(player.name.get(&player), "");
    player.name.set(&player, "Jane".to_string()).unwrap();
    assert!(!player.store.is_dirty());
    drop(player);

    let reopened = open_player(&path);
    assert_eq!(reopened.name.get(&reopened), "Jane");
}

#[test]
fn test_store_written_and_notified_before_synchronize() {
    let notified = Arc::new(AtomicU64::new(0));
    let mut seq = Sequence::new();
    let mut store = MockStore::new();

    store
        .expect_set_data()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|key, data| {
            assert_eq!(key, "name");
            assert_eq!(data, b"\"Jane\"".to_vec());
        });
    {
        let notified = Arc::clone(&notified);
        store
            .expect_synchronize()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move || {
                assert_eq!(notified.load(Ordering::SeqCst), 1);
                Ok(())
            });
    }

    let player = Player::new(store);
    {
        let notified = Arc::clone(&notified);
        player.changes.subscribe(move || {
            notified.fetch_add(1, Ordering::SeqCst);
        });
    }

    player.name.set(&player, "Jane".to_string()).unwrap();
    assert_eq!(notified.load(Ordering::SeqCst), 1);
}

#[test]
fn test_synchronize_failure_is_reported_after_notification() {
    let mut store = MockStore::new();
    store.expect_set_data().times(1).return_const(());
    store
        .expect_synchronize()
        .times(1)
        .returning(|| Err(StorageError::Io(std::io::Error::other("disk full"))));

    let player = Player::new(store);
    let err = player.name.set(&player, "Jane".to_string()).unwrap_err();

    match err {
        SettingError::Storage { key, source } => {
            assert_eq!(key.as_str(), "name");
            assert!(matches!(source, StorageError::Io(_)));
        }
        other => panic!("Expected Storage error, got {:?}", other),
    }
    assert_eq!(player.changes.send_count(), 1);
}

#[test]
fn test_unwritable_store_keeps_value_in_memory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    // A directory where the temporary file should be written
    fs::create_dir(dir.path().join("settings.json.tmp")).unwrap();

    let player = open_player(&path);
    let result = player.name.set(&player, "Jane".to_string());

    assert!(matches!(result, Err(SettingError::Storage { .. })));
    assert_eq!(player.name.get(&player), "Jane");
    assert!(player.store.is_dirty());
    assert_eq!(player.changes.send_count(), 1);
}
