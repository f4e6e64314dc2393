//! The authoritative transaction collection and its derived snapshot.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{Config, InitialData};
use crate::domain::{Filter, Transaction, TransactionDraft, TransactionKind};
use crate::errors::{BudgetError, ValidationError};

use super::aggregate::{
    compute_totals, filter_transactions, group_by_category, group_by_month, sort_in_place,
    CategoryBreakdown, MonthlySeries, Totals,
};
use super::sample::SampleGenerator;

/// Everything a dashboard reads, derived in one pass from the collection and filter.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Snapshot {
    /// Filtered view, newest first.
    pub transactions: Vec<Transaction>,
    pub all_transactions: Vec<Transaction>,
    pub filter: Filter,
    pub totals: Totals,
    pub expenses_by_category: CategoryBreakdown,
    pub income_by_category: CategoryBreakdown,
    /// Computed over `all_transactions`; the filter does not apply.
    pub monthly: MonthlySeries,
}

impl Snapshot {
    pub fn derive(all: &[Transaction], filter: Filter) -> Self {
        let mut view = filter_transactions(all, filter);
        sort_in_place(&mut view);
        Self {
            totals: compute_totals(&view),
            expenses_by_category: group_by_category(&view, TransactionKind::Expense),
            income_by_category: group_by_category(&view, TransactionKind::Income),
            monthly: group_by_month(all),
            transactions: view,
            all_transactions: all.to_vec(),
            filter,
        }
    }

    pub fn to_json(&self) -> Result<String, BudgetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

type Observer = Arc<dyn Fn(&Snapshot) + Send + Sync>;

/// Owns the transactions and the active filter. Every intent recomputes the
/// snapshot before returning, so readers never see stale aggregates.
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    filter: Filter,
    snapshot: Arc<Snapshot>,
    sample: SampleGenerator,
    observers: Vec<Observer>,
}

impl TransactionStore {
    pub fn new(initial: Vec<Transaction>) -> Self {
        Self::with_generator(initial, SampleGenerator::default())
    }

    pub fn with_generator(mut initial: Vec<Transaction>, sample: SampleGenerator) -> Self {
        sort_in_place(&mut initial);
        let snapshot = Arc::new(Snapshot::derive(&initial, Filter::All));
        Self {
            transactions: initial,
            filter: Filter::All,
            snapshot,
            sample,
            observers: Vec::new(),
        }
    }

    /// Starts from freshly generated sample data.
    pub fn with_sample_data(sample: SampleGenerator) -> Self {
        let initial = sample.generate();
        Self::with_generator(initial, sample)
    }

    pub fn from_config(config: &Config) -> Self {
        let sample = config.sample_generator();
        match config.initial_data {
            InitialData::Sample => Self::with_sample_data(sample),
            InitialData::Empty => Self::with_generator(Vec::new(), sample),
        }
    }

    /// Validates and records a draft, returning the new transaction's id.
    pub fn add(&mut self, draft: TransactionDraft) -> Result<String, ValidationError> {
        let transaction = draft.into_transaction().map_err(|err| {
            warn!(error = %err, "rejected transaction draft");
            err
        })?;
        let id = transaction.id.clone();
        debug!(id = %id, kind = %transaction.kind, category = %transaction.category, "adding transaction");
        self.transactions.push(transaction);
        sort_in_place(&mut self.transactions);
        self.recompute();
        Ok(id)
    }

    /// Removes the transaction with `id`. Unknown ids are ignored; returns whether
    /// anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            debug!(id, "removed transaction");
            self.recompute();
        } else {
            debug!(id, "remove ignored, no such transaction");
        }
        removed
    }

    /// Swaps in a new version of an existing transaction (matched by id).
    pub fn replace(&mut self, transaction: Transaction) -> bool {
        let Some(slot) = self
            .transactions
            .iter_mut()
            .find(|txn| txn.id == transaction.id)
        else {
            debug!(id = %transaction.id, "replace ignored, no such transaction");
            return false;
        };
        *slot = transaction;
        sort_in_place(&mut self.transactions);
        self.recompute();
        true
    }

    /// Discards everything and loads fresh sample data.
    pub fn reset(&mut self) {
        self.transactions = self.sample.generate();
        info!(count = self.transactions.len(), "reset to sample data");
        self.recompute();
    }

    pub fn clear(&mut self) {
        info!(count = self.transactions.len(), "clearing all transactions");
        self.transactions.clear();
        self.recompute();
    }

    pub fn set_filter(&mut self, filter: Filter) {
        debug!(%filter, "filter changed");
        self.filter = filter;
        self.recompute();
    }

    /// Registers a callback that receives every snapshot published after an intent.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.observers.push(Arc::new(observer));
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Filtered view, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.snapshot.transactions
    }

    pub fn all_transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn totals(&self) -> Totals {
        self.snapshot.totals
    }

    pub fn expenses_by_category(&self) -> &CategoryBreakdown {
        &self.snapshot.expenses_by_category
    }

    pub fn income_by_category(&self) -> &CategoryBreakdown {
        &self.snapshot.income_by_category
    }

    pub fn monthly(&self) -> &MonthlySeries {
        &self.snapshot.monthly
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    fn recompute(&mut self) {
        let snapshot = Arc::new(Snapshot::derive(&self.transactions, self.filter));
        debug!(
            total = self.transactions.len(),
            visible = snapshot.transactions.len(),
            filter = %self.filter,
            "snapshot recomputed"
        );
        self.snapshot = snapshot;
        for observer in &self.observers {
            observer(self.snapshot.as_ref());
        }
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl fmt::Debug for TransactionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionStore")
            .field("transactions", &self.transactions.len())
            .field("filter", &self.filter)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Thread-safe handle: intents are serialised through a mutex and readers get
/// the last published snapshot as a whole. Observers run after the lock is
/// released, so they may read from or send intents to the same handle.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<TransactionStore>>,
    observers: Arc<Mutex<Vec<Observer>>>,
}

impl SharedStore {
    pub fn new(mut store: TransactionStore) -> Self {
        let observers = std::mem::take(&mut store.observers);
        Self {
            inner: Arc::new(Mutex::new(store)),
            observers: Arc::new(Mutex::new(observers)),
        }
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.lock().snapshot()
    }

    pub fn add(&self, draft: TransactionDraft) -> Result<String, ValidationError> {
        self.apply(|store| store.add(draft))
    }

    pub fn remove(&self, id: &str) -> bool {
        self.apply(|store| store.remove(id))
    }

    pub fn replace(&self, transaction: Transaction) -> bool {
        self.apply(|store| store.replace(transaction))
    }

    pub fn reset(&self) {
        self.apply(TransactionStore::reset);
    }

    pub fn clear(&self) {
        self.apply(TransactionStore::clear);
    }

    pub fn set_filter(&self, filter: Filter) {
        self.apply(|store| store.set_filter(filter));
    }

    pub fn subscribe<F>(&self, observer: F)
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        lock_or_recover(&self.observers).push(Arc::new(observer));
    }

    /// Runs one intent under the lock, then notifies observers with the
    /// snapshot it published once the lock is gone.
    fn apply<T>(&self, intent: impl FnOnce(&mut TransactionStore) -> T) -> T {
        let (result, published) = {
            let mut store = self.lock();
            let before = store.snapshot();
            let result = intent(&mut store);
            let after = store.snapshot();
            let published = (!Arc::ptr_eq(&before, &after)).then_some(after);
            (result, published)
        };
        if let Some(snapshot) = published {
            let observers = lock_or_recover(&self.observers).clone();
            for observer in observers {
                observer(snapshot.as_ref());
            }
        }
        result
    }

    fn lock(&self) -> MutexGuard<'_, TransactionStore> {
        lock_or_recover(&self.inner)
    }
}

// Observers never run under these locks, so a poisoned guard still holds
// consistent data.
fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
