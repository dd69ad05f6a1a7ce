//! Integration tests for pocketfin-core services
//!
//! These tests exercise the full register/login/dashboard pipeline over
//! real stores: MemoryStore for tab simulation, JsonFileStore for disk
//! round-trips.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::TempDir;

use pocketfin_core::adapters::memory::MemoryStore;
use pocketfin_core::adapters::sha256::Sha256Hasher;
use pocketfin_core::config::Config;
use pocketfin_core::domain::result::Error;
use pocketfin_core::ports::storage::{dashboard_key, KeyValueStore, StoreScope, SESSION_KEY};
use pocketfin_core::services::report::{self, Filter};
use pocketfin_core::{
    PocketfinContext, RegisterRequest, Session, TransactionDraft, TransactionKind,
};

// ============================================================================
// Test Helpers
// ============================================================================

/// Create a context over a shared in-memory store
fn memory_context(store: Arc<MemoryStore>) -> PocketfinContext {
    PocketfinContext::with_store(Config::default(), store, Arc::new(Sha256Hasher))
}

fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        name: "Test User".to_string(),
        email: email.to_string(),
        password: "secret1".to_string(),
        confirm: "secret1".to_string(),
    }
}

fn draft(title: &str, cents: i64, date: &str, category: &str, kind: TransactionKind) -> TransactionDraft {
    TransactionDraft {
        title: title.to_string(),
        amount: Decimal::new(cents, 2),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        category: category.to_string(),
        kind,
    }
}

// ============================================================================
// Registration & Session Persistence
// ============================================================================

/// Registration transitions straight to an authenticated, durable session
#[tokio::test]
async fn test_register_then_restore_after_restart() {
    let store = Arc::new(MemoryStore::new());
    let ctx = memory_context(store.clone());

    let session = ctx
        .session_service
        .register(&register_request("a@x.com"))
        .await
        .unwrap();

    // Simulated restart in a new tab: durable entries survive
    let tab = Arc::new(store.new_tab().unwrap());
    let restarted = memory_context(tab);
    let restored = restarted.session_service.restore().unwrap();
    assert_eq!(restored, Some(session));
}

/// Emails differing only by case collide at registration
#[tokio::test]
async fn test_register_case_insensitive_email_collision() {
    let store = Arc::new(MemoryStore::new());
    let ctx = memory_context(store);

    ctx.session_service
        .register(&register_request("a@x.com"))
        .await
        .unwrap();
    let second = ctx
        .session_service
        .register(&register_request("A@X.COM"))
        .await;
    assert!(matches!(second, Err(Error::EmailTaken)));
}

/// remember=true survives a new tab; remember=false survives only the
/// same tab
#[tokio::test]
async fn test_remember_flag_controls_session_lifetime() {
    let store = Arc::new(MemoryStore::new());
    let ctx = memory_context(store.clone());
    ctx.session_service
        .register(&register_request("a@x.com"))
        .await
        .unwrap();

    // remember=true: visible from a fresh tab
    ctx.session_service
        .login("a@x.com", "secret1", true)
        .await
        .unwrap();
    let tab = Arc::new(store.new_tab().unwrap());
    assert!(memory_context(tab)
        .session_service
        .restore()
        .unwrap()
        .is_some());

    // remember=false: same-tab restore works, a new tab is Anonymous
    ctx.session_service
        .login("a@x.com", "secret1", false)
        .await
        .unwrap();
    assert!(ctx.session_service.restore().unwrap().is_some());

    let tab = Arc::new(store.new_tab().unwrap());
    assert!(memory_context(tab)
        .session_service
        .restore()
        .unwrap()
        .is_none());
}

/// The at-most-one-copy invariant holds at the raw key level
#[tokio::test]
async fn test_session_blob_never_duplicated_across_scopes() {
    let store = Arc::new(MemoryStore::new());
    let ctx = memory_context(store.clone());
    ctx.session_service
        .register(&register_request("a@x.com"))
        .await
        .unwrap();

    for remember in [true, false, true] {
        ctx.session_service
            .login("a@x.com", "secret1", remember)
            .await
            .unwrap();
        let durable = store.get(StoreScope::Durable, SESSION_KEY).unwrap();
        let session = store.get(StoreScope::Session, SESSION_KEY).unwrap();
        assert_eq!(
            durable.is_some() as u8 + session.is_some() as u8,
            1,
            "exactly one session copy after remember={}",
            remember
        );
    }

    ctx.session_service.logout().unwrap();
    assert!(store.get(StoreScope::Durable, SESSION_KEY).unwrap().is_none());
    assert!(store.get(StoreScope::Session, SESSION_KEY).unwrap().is_none());
}

/// Concurrent submissions serialize behind the in-flight guard: exactly
/// one of two identical registrations can win
#[tokio::test]
async fn test_double_submission_is_serialized() {
    let store = Arc::new(MemoryStore::new());
    let ctx = memory_context(store);

    let req = register_request("a@x.com");
    let (first, second) = tokio::join!(
        ctx.session_service.register(&req),
        ctx.session_service.register(&req),
    );

    let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    assert!(
        matches!(first, Err(Error::EmailTaken)) || matches!(second, Err(Error::EmailTaken))
    );
}

/// Login failures are distinct and do not create a session
#[tokio::test]
async fn test_login_failures_leave_anonymous() {
    let store = Arc::new(MemoryStore::new());
    let ctx = memory_context(store);
    ctx.session_service
        .register(&register_request("a@x.com"))
        .await
        .unwrap();
    ctx.session_service.logout().unwrap();

    assert!(matches!(
        ctx.session_service.login("b@x.com", "secret1", true).await,
        Err(Error::NoSuchAccount)
    ));
    assert!(matches!(
        ctx.session_service.login("a@x.com", "nope-nope", true).await,
        Err(Error::WrongPassword)
    ));
    assert!(ctx.session_service.restore().unwrap().is_none());
}

// ============================================================================
// Dashboard Partitioning & Seeding
// ============================================================================

/// A negative expense amount is stored absolute and its category joins
/// the filter vocabulary
#[tokio::test]
async fn test_add_transaction_scenario() {
    let store = Arc::new(MemoryStore::new());
    let ctx = memory_context(store);
    let session = ctx
        .session_service
        .register(&register_request("a@x.com"))
        .await
        .unwrap();

    ctx.dashboard_service
        .add(
            &session,
            &draft("Tea", -5000, "2024-01-05", "Food", TransactionKind::Expense),
        )
        .unwrap();

    let txs = ctx.dashboard_service.transactions(&session).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].amount, Decimal::new(5000, 2));

    let categories = report::available_categories(&txs);
    assert!(categories.contains(&"Food".to_string()));
}

/// Two registered users never observe each other's records
#[tokio::test]
async fn test_user_partitions_are_isolated() {
    let store = Arc::new(MemoryStore::new());
    let ctx = memory_context(store.clone());

    let ada = ctx
        .session_service
        .register(&register_request("ada@x.com"))
        .await
        .unwrap();
    let bob = ctx
        .session_service
        .register(&register_request("bob@x.com"))
        .await
        .unwrap();

    ctx.dashboard_service
        .add(
            &ada,
            &draft("Tea", 5000, "2024-01-05", "Food", TransactionKind::Expense),
        )
        .unwrap();

    assert!(ctx.dashboard_service.transactions(&bob).unwrap().is_empty());

    // Even a raw key probe only reaches the owner's partition
    assert!(store
        .get(StoreScope::Durable, &dashboard_key(&bob.id))
        .unwrap()
        .is_none());
    let ada_raw = store
        .get(StoreScope::Durable, &dashboard_key(&ada.id))
        .unwrap()
        .unwrap();
    assert!(ada_raw.contains("Tea"));
}

/// A fresh partition is seeded once, then left alone
#[tokio::test]
async fn test_first_login_seeding() {
    let store = Arc::new(MemoryStore::new());
    let ctx = memory_context(store);
    let session = ctx
        .session_service
        .register(&register_request("a@x.com"))
        .await
        .unwrap();

    let seeded = ctx.dashboard_service.ensure_seeded(&session).unwrap();
    assert!(!seeded.is_empty());

    let again = ctx.dashboard_service.ensure_seeded(&session).unwrap();
    assert_eq!(again.len(), seeded.len());
}

/// Deleting by id removes exactly one record and persists the rest;
/// deleting an absent id changes nothing
#[tokio::test]
async fn test_remove_transaction_persistence() {
    let store = Arc::new(MemoryStore::new());
    let ctx = memory_context(store.clone());
    let session = ctx
        .session_service
        .register(&register_request("a@x.com"))
        .await
        .unwrap();

    let tea = ctx
        .dashboard_service
        .add(
            &session,
            &draft("Tea", 5000, "2024-01-05", "Food", TransactionKind::Expense),
        )
        .unwrap();
    ctx.dashboard_service
        .add(
            &session,
            &draft("Coffee", 7000, "2024-01-06", "Food", TransactionKind::Expense),
        )
        .unwrap();

    assert!(ctx.dashboard_service.remove(&session, &tea.id).unwrap());
    assert!(!ctx.dashboard_service.remove(&session, &tea.id).unwrap());

    // The remainder survives a simulated restart
    let tab = Arc::new(store.new_tab().unwrap());
    let restarted = memory_context(tab);
    let session: Session = restarted.session_service.restore().unwrap().unwrap();
    let remaining = restarted.dashboard_service.transactions(&session).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].title, "Coffee");
}

// ============================================================================
// Aggregation Pipeline
// ============================================================================

/// End-to-end derivation: filters feed summaries and chart slices
#[tokio::test]
async fn test_filter_and_aggregate_pipeline() {
    let store = Arc::new(MemoryStore::new());
    let ctx = memory_context(store);
    let session = ctx
        .session_service
        .register(&register_request("a@x.com"))
        .await
        .unwrap();

    ctx.dashboard_service
        .add(
            &session,
            &draft("Salary", 100000, "2024-02-01", "Salary", TransactionKind::Income),
        )
        .unwrap();
    ctx.dashboard_service
        .add(
            &session,
            &draft("Rent", 25000, "2024-02-02", "Bills", TransactionKind::Expense),
        )
        .unwrap();
    ctx.dashboard_service
        .add(
            &session,
            &draft("Tea", 5000, "2024-01-05", "Food", TransactionKind::Expense),
        )
        .unwrap();

    let txs = ctx.dashboard_service.transactions(&session).unwrap();
    assert_eq!(report::available_months(&txs), vec!["2024-02", "2024-01"]);

    let feb = report::apply_filters(&txs, &Filter::all().with_month("2024-02"));
    let summary = report::summarize(&feb);
    assert_eq!(summary.spent_pct, 25);
    assert_eq!(summary.balance_pct, 75);

    let slices = report::chart_slices(&feb);
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].label, "expense:Bills");
    assert_eq!(slices[1].label, "income:Salary");

    let table = report::sort_for_table(&txs);
    assert_eq!(table[0].title, "Rent");
    assert_eq!(table[2].title, "Tea");
}

// ============================================================================
// Disk-Backed Store
// ============================================================================

/// The whole flow round-trips through JSON files across context re-open
#[tokio::test]
async fn test_json_file_store_full_flow() {
    let dir = TempDir::new().unwrap();

    let session = {
        let ctx = PocketfinContext::new(dir.path()).unwrap();
        let session = ctx
            .session_service
            .register(&register_request("a@x.com"))
            .await
            .unwrap();
        ctx.dashboard_service
            .add(
                &session,
                &draft("Tea", -5000, "2024-01-05", "Food", TransactionKind::Expense),
            )
            .unwrap();
        ctx.preference_service.set_dark_mode(true).unwrap();
        session
    };

    let ctx = PocketfinContext::new(dir.path()).unwrap();
    let restored = ctx.session_service.restore().unwrap().unwrap();
    assert_eq!(restored, session);

    let txs = ctx.dashboard_service.transactions(&restored).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].amount, Decimal::new(5000, 2));
    assert!(ctx.preference_service.dark_mode().unwrap());

    // Wrong password still fails after re-open (hash stability on disk)
    assert!(matches!(
        ctx.session_service.login("a@x.com", "secret2", true).await,
        Err(Error::WrongPassword)
    ));
    assert!(ctx
        .session_service
        .login("a@x.com", "secret1", true)
        .await
        .is_ok());
}

/// A corrupt dashboard blob degrades to an empty partition
#[tokio::test]
async fn test_corrupt_partition_degrades_to_empty() {
    let store = Arc::new(MemoryStore::new());
    let ctx = memory_context(store.clone());
    let session = ctx
        .session_service
        .register(&register_request("a@x.com"))
        .await
        .unwrap();

    store
        .put(
            StoreScope::Durable,
            &dashboard_key(&session.id),
            "[{\"id\":broken",
        )
        .unwrap();

    assert!(ctx.dashboard_service.transactions(&session).unwrap().is_empty());
}
