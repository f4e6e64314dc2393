use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::utils::new_id;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Direction of a money movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded income or expense. Never edited in place; edits swap in a new value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: new_id(),
            kind,
            category: category.into(),
            amount,
            description: String::new(),
            date,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// `YYYY-MM` bucket used by the monthly trend series.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

/// Amount as submitted by a form: already numeric, or text still to be parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    pub fn to_amount(&self) -> Result<f64, ValidationError> {
        let value = match self {
            AmountInput::Number(value) => *value,
            AmountInput::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ValidationError::InvalidAmount(raw.clone()))?,
        };
        if !value.is_finite() {
            return Err(ValidationError::InvalidAmount(value.to_string()));
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeAmount(value));
        }
        Ok(value)
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        AmountInput::Text(value)
    }
}

/// The add intent payload, mirroring what an entry form collects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDraft {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub amount: AmountInput,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: String,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: impl Into<AmountInput>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            category: category.into(),
            amount: amount.into(),
            description: None,
            date: date.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validates the draft and assigns a fresh identifier.
    pub fn into_transaction(self) -> Result<Transaction, ValidationError> {
        let amount = self.amount.to_amount()?;
        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(self.date.clone()))?;
        Ok(Transaction {
            id: new_id(),
            kind: self.kind,
            category: category.to_string(),
            amount,
            description: self.description.unwrap_or_default(),
            date,
        })
    }
}
