//! Synthetic demo data: a few months of salary, freelance work and household spending.

use chrono::{Datelike, Duration, Local, Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Transaction, TransactionKind};

use super::aggregate::sort_in_place;

pub const DEFAULT_SAMPLE_MONTHS: u32 = 4;
/// Upper bound on generated history; larger requests are clamped.
pub const MAX_SAMPLE_MONTHS: u32 = 120;

const SALARY_BASE: f64 = 3200.0;
const SALARY_JITTER: u32 = 300;
const SALARY_DAY: u32 = 5;
const FREELANCE_BASE: f64 = 400.0;
const FREELANCE_JITTER: u32 = 600;
const FREELANCE_CHANCE: f64 = 0.5;
const EXPENSE_JITTER: u32 = 80;

const MONTHLY_EXPENSES: [(&str, f64); 6] = [
    ("housing", 950.0),
    ("food", 380.0),
    ("transport", 120.0),
    ("utilities", 95.0),
    ("entertainment", 60.0),
    ("shopping", 150.0),
];

/// Produces sample transactions for the current month and the ones before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleGenerator {
    pub months: u32,
    /// Fixed "today"; the local date is used when unset.
    pub reference_date: Option<NaiveDate>,
    /// Seed for reproducible output; entropy is used when unset.
    pub seed: Option<u64>,
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self {
            months: DEFAULT_SAMPLE_MONTHS,
            reference_date: None,
            seed: None,
        }
    }
}

impl SampleGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn generate(&self) -> Vec<Transaction> {
        let today = self
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive());
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        generate_with(today, self.months, &mut rng)
    }
}

/// Four months of sample data ending with the current month, newest first.
pub fn generate_sample_data() -> Vec<Transaction> {
    SampleGenerator::default().generate()
}

/// Builds `months` months (at most [`MAX_SAMPLE_MONTHS`]) of entries ending at
/// `today`'s month, sorted newest first.
pub fn generate_with<R: Rng>(
    today: NaiveDate,
    months: u32,
    rng: &mut R,
) -> Vec<Transaction> {
    let current_month = today - Duration::days(i64::from(today.day0()));
    let mut transactions = Vec::new();

    for offset in 0..months.min(MAX_SAMPLE_MONTHS) {
        let Some(month_start) = current_month.checked_sub_months(Months::new(offset)) else {
            break;
        };

        transactions.push(
            Transaction::new(
                TransactionKind::Income,
                "salary",
                SALARY_BASE + f64::from(rng.gen_range(0..SALARY_JITTER)),
                day_of(month_start, SALARY_DAY),
            )
            .with_description("Salaire"),
        );

        if rng.gen_bool(FREELANCE_CHANCE) {
            transactions.push(
                Transaction::new(
                    TransactionKind::Income,
                    "freelance",
                    FREELANCE_BASE + f64::from(rng.gen_range(0..FREELANCE_JITTER)),
                    day_of(month_start, rng.gen_range(10..=25)),
                )
                .with_description("Mission"),
            );
        }

        for (category, base) in MONTHLY_EXPENSES {
            transactions.push(Transaction::new(
                TransactionKind::Expense,
                category,
                base + f64::from(rng.gen_range(0..EXPENSE_JITTER)),
                day_of(month_start, rng.gen_range(1..=28)),
            ));
        }
    }

    sort_in_place(&mut transactions);
    transactions
}

// Days stay within 1..=28, so the result never leaves the month.
fn day_of(month_start: NaiveDate, day: u32) -> NaiveDate {
    month_start + Duration::days(i64::from(day.saturating_sub(1)))
}
