use std::time::{Duration, Instant};

use simplr_core::models::session::BrowseSession;
use simplr_server::state::SessionStore;

const IDLE: Duration = Duration::from_secs(60);

#[tokio::test]
async fn idle_sessions_are_swept() {
    let store = SessionStore::new(IDLE);
    let id = store.insert(BrowseSession::new("oslab")).await;

    assert_eq!(store.expire_idle(Instant::now()).await, 0);
    assert!(store.contains(id).await);

    let later = Instant::now() + IDLE + Duration::from_secs(1);
    assert_eq!(store.expire_idle(later).await, 1);
    assert!(!store.contains(id).await);
}

#[tokio::test]
async fn session_with_report_in_flight_is_kept() {
    let store = SessionStore::new(IDLE);
    let id = store.insert(BrowseSession::new("oslab")).await;
    store.with(id, |slot| slot.generating = true).await.unwrap();

    let later = Instant::now() + IDLE * 10;
    assert_eq!(store.expire_idle(later).await, 0);
    assert!(store.contains(id).await);
}

#[tokio::test]
async fn use_refreshes_last_seen() {
    let store = SessionStore::new(IDLE);
    let id = store.insert(BrowseSession::new("oslab")).await;

    let first = store.with(id, |slot| slot.last_seen).await.unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;
    let second = store.with(id, |slot| slot.last_seen).await.unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn expired_session_is_gone_on_next_use_and_on_insert() {
    let store = SessionStore::new(Duration::ZERO);
    let stale = store.insert(BrowseSession::new("oslab")).await;
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert!(store.with(stale, |_| ()).await.is_none());
    assert!(!store.contains(stale).await);

    let old = store.insert(BrowseSession::new("oslab")).await;
    tokio::time::sleep(Duration::from_millis(20)).await;
    let fresh = store.insert(BrowseSession::new("javaPrograms")).await;

    assert!(!store.contains(old).await);
    assert!(store.contains(fresh).await);
}
