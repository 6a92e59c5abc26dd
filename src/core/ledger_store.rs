use chrono::Utc;
use uuid::Uuid;

use crate::errors::{LedgerError, RejectReason};
use crate::ledger::{NewTransaction, Transaction, TransactionType};
use crate::storage::SnapshotStore;

/// Slot under which the full transaction list is persisted.
pub const SNAPSHOT_KEY: &str = "transactions";

/// Result of asking the store to record a transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added(Transaction),
    Rejected(RejectReason),
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }

    pub fn transaction(&self) -> Option<&Transaction> {
        match self {
            AddOutcome::Added(txn) => Some(txn),
            AddOutcome::Rejected(_) => None,
        }
    }
}

/// Describes what `initialize` found in the snapshot slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub restored: usize,
    pub warnings: Vec<String>,
}

/// Authoritative in-memory ledger mirrored to a durable snapshot slot.
pub struct LedgerStore {
    transactions: Vec<Transaction>,
    storage: Box<dyn SnapshotStore>,
    key: String,
    ready: bool,
    persistence_warning: Option<String>,
}

impl LedgerStore {
    /// Creates an empty store that will not write until `initialize` runs.
    pub fn new(storage: Box<dyn SnapshotStore>) -> Self {
        Self::with_key(storage, SNAPSHOT_KEY)
    }

    pub fn with_key(storage: Box<dyn SnapshotStore>, key: impl Into<String>) -> Self {
        Self {
            transactions: Vec::new(),
            storage,
            key: key.into(),
            ready: false,
            persistence_warning: None,
        }
    }

    /// Creates a store and immediately restores the persisted snapshot.
    pub fn open(storage: Box<dyn SnapshotStore>) -> Self {
        let mut store = Self::new(storage);
        store.initialize();
        store
    }

    /// Loads the snapshot, falling back to an empty ledger when it is missing
    /// or unreadable, and marks the store ready for persistence.
    pub fn initialize(&mut self) -> LoadReport {
        let mut report = LoadReport::default();
        self.transactions = match self.read_snapshot() {
            Ok(Some(transactions)) => transactions,
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "discarding unreadable snapshot");
                report
                    .warnings
                    .push(format!("snapshot `{}` could not be read: {}", self.key, err));
                Vec::new()
            }
        };
        report.restored = self.transactions.len();
        self.ready = true;
        tracing::info!(key = %self.key, restored = report.restored, "ledger initialized");
        report
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn add(
        &mut self,
        name: impl Into<String>,
        amount: f64,
        kind: TransactionType,
        category: impl Into<String>,
    ) -> AddOutcome {
        self.add_new(NewTransaction::new(name, amount, kind, category))
    }

    /// Records a validated transaction at the head of the ledger.
    pub fn add_new(&mut self, draft: NewTransaction) -> AddOutcome {
        match draft.into_transaction(Utc::now()) {
            Ok(txn) => {
                self.transactions.insert(0, txn.clone());
                self.persist();
                AddOutcome::Added(txn)
            }
            Err(reason) => {
                tracing::debug!(%reason, "transaction rejected");
                AddOutcome::Rejected(reason)
            }
        }
    }

    /// Removes the transaction identified by `id`; unknown ids are ignored.
    pub fn delete(&mut self, id: Uuid) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id == id)?;
        let removed = self.transactions.remove(index);
        self.persist();
        Some(removed)
    }

    /// Transactions newest-first.
    pub fn list(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Message from the most recent failed snapshot write, if it has not
    /// been superseded by a successful one.
    pub fn persistence_warning(&self) -> Option<&str> {
        self.persistence_warning.as_deref()
    }

    fn read_snapshot(&self) -> Result<Option<Vec<Transaction>>, LedgerError> {
        let Some(raw) = self.storage.read(&self.key)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn write_snapshot(&self) -> Result<(), LedgerError> {
        let json = serde_json::to_string(&self.transactions)?;
        self.storage.write(&self.key, &json)
    }

    fn persist(&mut self) {
        if !self.ready {
            tracing::debug!(key = %self.key, "snapshot write suppressed before initialize");
            return;
        }
        match self.write_snapshot() {
            Ok(()) => self.persistence_warning = None,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to persist ledger snapshot");
                self.persistence_warning = Some(err.to_string());
            }
        }
    }
}
