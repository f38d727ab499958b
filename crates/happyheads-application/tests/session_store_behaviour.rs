//! Session store against real local storage and the simulated authenticator.

use std::sync::Arc;
use std::time::Duration;

use happyheads_application::SessionStore;
use happyheads_core::identity::{AccessDecision, Role, Route, SessionState};
use happyheads_infrastructure::{LocalStorage, LocalStorageIdentityRepository, SimulatedAuthenticator};
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

const KEY: &str = "happyheads_user";

fn storage(dir: &TempDir) -> LocalStorage {
    LocalStorage::new(dir.path().join("local_storage"))
}

fn store_with_delay(dir: &TempDir, delay_ms: u64) -> SessionStore {
    let repository = LocalStorageIdentityRepository::new(storage(dir), KEY);
    SessionStore::new(
        Arc::new(repository),
        Arc::new(SimulatedAuthenticator::from_millis(delay_ms)),
    )
}

async fn restored_store(dir: &TempDir) -> SessionStore {
    let store = store_with_delay(dir, 0);
    store.restore().await;
    store
}

#[tokio::test]
async fn test_admin_email_signs_in_as_administrator() {
    let dir = TempDir::new().unwrap();
    let store = restored_store(&dir).await;

    let identity = store
        .sign_in("admin@happyheads.com", "secret", CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(identity.id, "1");
    assert_eq!(identity.name, "admin");
    assert_eq!(identity.role, Role::Administrator);
    assert_eq!(store.authorize(Route::Admin), AccessDecision::Granted);
    assert!(storage(&dir).get_item(KEY).unwrap().is_some());
}

#[tokio::test]
async fn test_standard_user_is_redirected_from_admin() {
    let dir = TempDir::new().unwrap();
    let store = restored_store(&dir).await;

    let identity = store
        .sign_in("jane@example.com", "secret", CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(identity.name, "jane");
    assert_eq!(identity.role, Role::Standard);
    assert_eq!(store.authorize(Route::Journal), AccessDecision::Granted);
    assert_eq!(
        store.authorize(Route::Admin),
        AccessDecision::Redirect(Route::Dashboard)
    );
}

#[tokio::test]
async fn test_sign_out_clears_storage() {
    let dir = TempDir::new().unwrap();
    let store = restored_store(&dir).await;
    store
        .sign_in("jane@example.com", "secret", CancellationToken::new())
        .await
        .unwrap();

    store.sign_out().await;

    assert_eq!(store.current(), SessionState::Unauthenticated);
    assert!(storage(&dir).get_item(KEY).unwrap().is_none());
    assert_eq!(
        store.authorize(Route::Journal),
        AccessDecision::Redirect(Route::Auth)
    );

    // Signing out twice is harmless.
    store.sign_out().await;
    assert_eq!(store.current(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_restart_restores_identity() {
    let dir = TempDir::new().unwrap();
    let registered = {
        let store = restored_store(&dir).await;
        store
            .register("sam@example.com", "secret", "Sam Park", CancellationToken::new())
            .await
            .unwrap()
    };

    let restarted = store_with_delay(&dir, 0);
    assert!(restarted.is_loading());
    let state = restarted.restore().await;

    assert_eq!(state, SessionState::Authenticated(registered.clone()));
    assert_eq!(restarted.identity(), Some(registered));
}

#[tokio::test]
async fn test_restore_without_stored_identity() {
    let dir = TempDir::new().unwrap();
    let store = store_with_delay(&dir, 0);
    assert_eq!(store.authorize(Route::Dashboard), AccessDecision::Pending);

    assert_eq!(store.restore().await, SessionState::Unauthenticated);
    assert_eq!(
        store.authorize(Route::Dashboard),
        AccessDecision::Redirect(Route::Auth)
    );
}

#[tokio::test]
async fn test_restore_reads_legacy_blob() {
    let dir = TempDir::new().unwrap();
    storage(&dir)
        .set_item(
            KEY,
            r#"{"id":"1","email":"admin@happyheads.com","name":"admin","role":"admin"}"#,
        )
        .unwrap();

    let store = store_with_delay(&dir, 0);
    let state = store.restore().await;

    assert_eq!(state.role(), Some(Role::Administrator));
}

#[tokio::test]
async fn test_restore_discards_corrupt_blob() {
    let dir = TempDir::new().unwrap();
    storage(&dir).set_item(KEY, "{not json").unwrap();

    let store = store_with_delay(&dir, 0);

    assert_eq!(store.restore().await, SessionState::Unauthenticated);
    assert!(storage(&dir).get_item(KEY).unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_sign_in_leaves_no_trace() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(store_with_delay(&dir, 1000));
    store.restore().await;

    let cancel = CancellationToken::new();
    let task = {
        let store = store.clone();
        let cancel = cancel.clone();
        tokio::spawn(async move { store.sign_in("jane@example.com", "secret", cancel).await })
    };

    tokio::time::sleep(Duration::from_millis(200)).await;
    cancel.cancel();

    let err = task.await.unwrap().unwrap_err();
    assert!(err.is_cancelled());
    assert_eq!(store.current(), SessionState::Unauthenticated);
    assert!(storage(&dir).get_item(KEY).unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_newer_sign_in_supersedes_older() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(store_with_delay(&dir, 1000));
    store.restore().await;

    let first = {
        let store = store.clone();
        tokio::spawn(async move {
            store
                .sign_in("first@example.com", "secret", CancellationToken::new())
                .await
        })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;

    let second = store
        .sign_in("second@example.com", "secret", CancellationToken::new())
        .await
        .unwrap();

    assert!(first.await.unwrap().unwrap_err().is_cancelled());
    assert_eq!(store.identity(), Some(second.clone()));
    assert_eq!(second.email, "second@example.com");
}

#[tokio::test(start_paused = true)]
async fn test_sign_out_cancels_pending_sign_in() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(store_with_delay(&dir, 1000));
    store.restore().await;

    let pending = {
        let store = store.clone();
        tokio::spawn(async move {
            store
                .sign_in("jane@example.com", "secret", CancellationToken::new())
                .await
        })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;

    store.sign_out().await;

    assert!(pending.await.unwrap().unwrap_err().is_cancelled());
    assert_eq!(store.current(), SessionState::Unauthenticated);
    assert!(storage(&dir).get_item(KEY).unwrap().is_none());
}

#[tokio::test]
async fn test_subscribers_observe_each_transition() {
    let dir = TempDir::new().unwrap();
    let store = store_with_delay(&dir, 0);
    let mut updates = store.subscribe();
    assert!(updates.borrow().is_loading());

    store.restore().await;
    updates.changed().await.unwrap();
    assert_eq!(*updates.borrow_and_update(), SessionState::Unauthenticated);

    store
        .sign_in("jane@example.com", "secret", CancellationToken::new())
        .await
        .unwrap();
    updates.changed().await.unwrap();
    assert!(updates.borrow_and_update().is_authenticated());

    store.sign_out().await;
    updates.changed().await.unwrap();
    assert_eq!(*updates.borrow_and_update(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_require_gates_pages_on_sign_in() {
    let dir = TempDir::new().unwrap();
    let store = restored_store(&dir).await;

    let err = store.require(Route::MoodTracker).unwrap_err();
    assert!(err.is_access_denied());

    store
        .sign_in("jane@example.com", "secret", CancellationToken::new())
        .await
        .unwrap();
    store.require(Route::MoodTracker).unwrap();
    assert!(store.require(Route::Admin).unwrap_err().is_access_denied());
}
