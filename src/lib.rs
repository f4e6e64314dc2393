#![doc(test(attr(deny(warnings))))]

//! Budget Tracker keeps a personal list of incomes and expenses and derives the
//! totals, category breakdowns, and monthly trend series a dashboard renders.

pub mod config;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

pub use domain::{Filter, Transaction, TransactionDraft, TransactionKind};
pub use errors::{BudgetError, ValidationError};
pub use ledger::{SharedStore, Snapshot, TransactionStore};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Tracker tracing initialized.");
    });
}
