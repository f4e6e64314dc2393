//! Pure aggregations over a transaction slice.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Filter, Transaction, TransactionKind};

/// Summed amount per category id for one transaction kind.
pub type CategoryBreakdown = BTreeMap<String, f64>;

/// Income and expense sums per `YYYY-MM` month key.
pub type MonthlySeries = BTreeMap<String, MonthlyTotals>;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

impl Totals {
    /// Share of income kept, clamped to `0..=100` for gauge widgets.
    pub fn savings_rate(&self) -> i64 {
        percentage(self.balance, self.income).clamp(0, 100)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MonthlyTotals {
    pub income: f64,
    pub expenses: f64,
}

impl MonthlyTotals {
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

/// One row of a ranked category chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    pub percentage: i64,
}

pub fn compute_totals(transactions: &[Transaction]) -> Totals {
    let (income, expenses) =
        transactions
            .iter()
            .fold((0.0, 0.0), |(income, expenses), txn| match txn.kind {
                TransactionKind::Income => (income + txn.amount, expenses),
                TransactionKind::Expense => (income, expenses + txn.amount),
            });
    Totals {
        income,
        expenses,
        balance: income - expenses,
    }
}

pub fn group_by_category(transactions: &[Transaction], kind: TransactionKind) -> CategoryBreakdown {
    let mut breakdown = CategoryBreakdown::new();
    for txn in transactions.iter().filter(|txn| txn.kind == kind) {
        *breakdown.entry(txn.category.clone()).or_insert(0.0) += txn.amount;
    }
    breakdown
}

pub fn group_by_month(transactions: &[Transaction]) -> MonthlySeries {
    let mut series = MonthlySeries::new();
    for txn in transactions {
        let bucket = series.entry(txn.month_key()).or_default();
        match txn.kind {
            TransactionKind::Income => bucket.income += txn.amount,
            TransactionKind::Expense => bucket.expenses += txn.amount,
        }
    }
    series
}

/// Newest first. `sort_by` is stable, so same-day entries keep their input order.
pub fn sort_by_date_descending(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sort_in_place(&mut sorted);
    sorted
}

pub(crate) fn sort_in_place(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}

pub fn filter_transactions(transactions: &[Transaction], filter: Filter) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|txn| filter.matches(txn))
        .cloned()
        .collect()
}

/// `value / total` as a rounded whole percentage; `0` when `total` is zero.
pub fn percentage(value: f64, total: f64) -> i64 {
    if total == 0.0 {
        return 0;
    }
    (value / total * 100.0).round() as i64
}

/// Largest categories first (ties by id), at most `limit` rows.
pub fn ranked_categories(breakdown: &CategoryBreakdown, limit: usize) -> Vec<CategoryShare> {
    let total: f64 = breakdown.values().sum();
    let mut rows: Vec<(&String, &f64)> = breakdown.iter().collect();
    rows.sort_by(|a, b| b.1.total_cmp(a.1).then_with(|| a.0.cmp(b.0)));
    rows.into_iter()
        .take(limit)
        .map(|(category, amount)| CategoryShare {
            category: category.clone(),
            amount: *amount,
            percentage: percentage(*amount, total),
        })
        .collect()
}

/// The latest `count` months in ascending key order.
pub fn recent_months(series: &MonthlySeries, count: usize) -> Vec<(String, MonthlyTotals)> {
    let skip = series.len().saturating_sub(count);
    series
        .iter()
        .skip(skip)
        .map(|(key, totals)| (key.clone(), *totals))
        .collect()
}
