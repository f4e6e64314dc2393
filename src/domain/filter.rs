use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::transaction::{Transaction, TransactionKind};

/// Type-level view selector. Only restricts what the derived view shows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Income,
    Expense,
}

impl Filter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            Filter::All => true,
            Filter::Income => transaction.kind == TransactionKind::Income,
            Filter::Expense => transaction.kind == TransactionKind::Expense,
        }
    }
}

impl From<TransactionKind> for Filter {
    fn from(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => Filter::Income,
            TransactionKind::Expense => Filter::Expense,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Filter::All => "all",
            Filter::Income => "income",
            Filter::Expense => "expense",
        };
        f.write_str(label)
    }
}
