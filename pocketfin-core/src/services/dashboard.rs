//! Dashboard service - per-user transaction partitions
//!
//! Every operation is scoped by the caller's [`Session`]; the service
//! derives the storage key itself and never accepts a foreign user id.
//! Persistence is whole-collection overwrite, matching the blob
//! contract.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::adapters::seed::starter_transactions;
use crate::domain::result::{Error, Result};
use crate::domain::{Session, Transaction, TransactionKind};
use crate::ports::storage::{dashboard_key, KeyValueStore, StoreScope};

/// Raw add-transaction form fields
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub title: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
    pub kind: TransactionKind,
}

/// Transaction store scoped to the active session
pub struct DashboardService {
    store: Arc<dyn KeyValueStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the session owner's transactions, empty if none
    pub fn transactions(&self, session: &Session) -> Result<Vec<Transaction>> {
        match self.store.get(StoreScope::Durable, &dashboard_key(&session.id))? {
            // A malformed partition degrades to "no data" rather than failing
            Some(raw) => Ok(serde_json::from_str(&raw).unwrap_or_default()),
            None => Ok(Vec::new()),
        }
    }

    /// Append a transaction and persist the whole collection
    pub fn add(&self, session: &Session, draft: &TransactionDraft) -> Result<Transaction> {
        let title = draft.title.trim();
        let category = draft.category.trim();
        if title.is_empty() {
            return Err(Error::invalid_input("title is required"));
        }
        if category.is_empty() {
            return Err(Error::invalid_input("category is required"));
        }

        let tx = Transaction::new(title, draft.amount, draft.date, category, draft.kind);
        let mut txs = self.transactions(session)?;
        txs.push(tx.clone());
        self.save(session, &txs)?;
        Ok(tx)
    }

    /// Remove one transaction by id; absent ids are a no-op and nothing
    /// is rewritten
    pub fn remove(&self, session: &Session, id: &str) -> Result<bool> {
        let mut txs = self.transactions(session)?;
        let before = txs.len();
        txs.retain(|t| t.id != id);
        if txs.len() == before {
            return Ok(false);
        }
        self.save(session, &txs)?;
        Ok(true)
    }

    /// Materialize the starter set if the partition is empty, so a
    /// first login never shows a blank dashboard
    pub fn ensure_seeded(&self, session: &Session) -> Result<Vec<Transaction>> {
        let txs = self.transactions(session)?;
        if !txs.is_empty() {
            return Ok(txs);
        }
        let seeded = starter_transactions();
        self.save(session, &seeded)?;
        Ok(seeded)
    }

    fn save(&self, session: &Session, txs: &[Transaction]) -> Result<()> {
        let raw = serde_json::to_string(txs)?;
        self.store
            .put(StoreScope::Durable, &dashboard_key(&session.id), &raw)
    }
}
