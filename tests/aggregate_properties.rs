mod common;

use budget_tracker::ledger::{
    compute_totals, generate_with, group_by_category, percentage, sort_by_date_descending,
};
use budget_tracker::{Transaction, TransactionKind};
use common::date;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Randomised collections with many same-day collisions.
fn random_collections() -> Vec<Vec<Transaction>> {
    let mut rng = StdRng::seed_from_u64(0xB0D6E7);
    (0..50)
        .map(|_| {
            let len = rng.gen_range(0..40);
            (0..len)
                .map(|_| {
                    let kind = if rng.gen_bool(0.4) {
                        TransactionKind::Income
                    } else {
                        TransactionKind::Expense
                    };
                    let category = ["food", "salary", "gift", "housing"][rng.gen_range(0..4)];
                    let amount = f64::from(rng.gen_range(0..5000)) / 4.0;
                    let day = date(2024, rng.gen_range(1..=3), rng.gen_range(1..=3));
                    Transaction::new(kind, category, amount, day)
                })
                .collect()
        })
        .collect()
}

#[test]
fn balance_always_equals_income_minus_expenses() {
    for items in random_collections() {
        let totals = compute_totals(&items);
        assert_eq!(totals.balance, totals.income - totals.expenses);
    }
}

#[test]
fn category_breakdowns_sum_to_totals() {
    for items in random_collections() {
        let totals = compute_totals(&items);
        let expenses: f64 = group_by_category(&items, TransactionKind::Expense).values().sum();
        let income: f64 = group_by_category(&items, TransactionKind::Income).values().sum();
        // Quarter units keep every partial sum exact in binary floating point.
        assert_eq!(expenses, totals.expenses);
        assert_eq!(income, totals.income);
    }
}

#[test]
fn sorting_is_idempotent_and_stable() {
    for items in random_collections() {
        let once = sort_by_date_descending(&items);
        assert_eq!(sort_by_date_descending(&once), once);

        for pair in once.windows(2) {
            assert!(pair[0].date >= pair[1].date);
            if pair[0].date == pair[1].date {
                let first = items.iter().position(|t| t.id == pair[0].id).unwrap();
                let second = items.iter().position(|t| t.id == pair[1].id).unwrap();
                assert!(first < second, "equal dates must keep input order");
            }
        }
    }
}

#[test]
fn boundary_values() {
    assert_eq!(percentage(123.0, 0.0), 0);
    assert_eq!(compute_totals(&[]).income, 0.0);
    assert_eq!(compute_totals(&[]).balance, 0.0);
    assert!(group_by_category(&[], TransactionKind::Income).is_empty());
}

#[test]
fn sample_data_respects_the_same_invariants() {
    let items = generate_with(date(2024, 6, 30), 4, &mut StdRng::seed_from_u64(1));
    let totals = compute_totals(&items);
    let expenses: f64 = group_by_category(&items, TransactionKind::Expense).values().sum();
    assert_eq!(expenses, totals.expenses);
    assert_eq!(sort_by_date_descending(&items), items);
}
