#![allow(dead_code)]

use budget_tracker::{
    ledger::{SampleGenerator, TransactionStore},
    TransactionDraft, TransactionKind,
};
use chrono::NaiveDate;

/// A store seeded with nothing and a reproducible sample generator.
pub fn empty_store() -> TransactionStore {
    budget_tracker::init();
    TransactionStore::with_generator(Vec::new(), fixed_generator())
}

pub fn fixed_generator() -> SampleGenerator {
    SampleGenerator::seeded(2024).with_reference_date(date(2024, 4, 15))
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

pub fn salary_draft() -> TransactionDraft {
    TransactionDraft::new(TransactionKind::Income, "salary", "3200", "2024-01-05")
}

pub fn food_draft() -> TransactionDraft {
    TransactionDraft::new(TransactionKind::Expense, "food", 100.0, "2024-01-06")
}
