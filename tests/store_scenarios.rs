mod common;

use budget_tracker::{
    ledger::{compute_totals, group_by_month, Totals},
    Filter, TransactionDraft, TransactionKind, ValidationError,
};
use common::{date, empty_store, food_draft, salary_draft};

#[test]
fn adding_salary_sets_income_and_balance() {
    let mut store = empty_store();
    store.add(salary_draft()).unwrap();

    let totals = store.totals();
    assert_eq!(totals.income, 3200.0);
    assert_eq!(totals.expenses, 0.0);
    assert_eq!(totals.balance, 3200.0);
}

#[test]
fn later_expense_sorts_first_and_reduces_balance() {
    let mut store = empty_store();
    store.add(salary_draft()).unwrap();
    let food_id = store.add(food_draft()).unwrap();

    let totals = store.totals();
    assert_eq!(totals.expenses, 100.0);
    assert_eq!(totals.balance, 3100.0);
    assert_eq!(store.transactions().len(), 2);
    assert_eq!(store.transactions()[0].id, food_id);
    assert_eq!(store.transactions()[0].date, date(2024, 1, 6));
}

#[test]
fn income_filter_narrows_view_and_aggregates() {
    let mut store = empty_store();
    store.add(salary_draft()).unwrap();
    store.add(food_draft()).unwrap();

    store.set_filter(Filter::Income);

    assert_eq!(store.filter(), Filter::Income);
    assert_eq!(store.transactions().len(), 1);
    assert_eq!(store.all_transactions().len(), 2);
    assert_eq!(store.totals().income, 3200.0);
    assert_eq!(store.totals().expenses, 0.0);
    assert!(store.expenses_by_category().is_empty());
    assert_eq!(store.income_by_category().get("salary"), Some(&3200.0));
    // The trend series ignores the filter.
    assert_eq!(store.monthly()["2024-01"].expenses, 100.0);
}

#[test]
fn remove_known_and_unknown_ids() {
    let mut store = empty_store();
    store.add(salary_draft()).unwrap();
    let food_id = store.add(food_draft()).unwrap();

    assert!(store.remove(&food_id));
    assert_eq!(store.all_transactions().len(), 1);

    assert!(!store.remove("does-not-exist"));
    assert_eq!(store.all_transactions().len(), 1);
    assert_eq!(store.totals().expenses, 0.0);
}

#[test]
fn clear_empties_collection_and_aggregates() {
    let mut store = empty_store();
    store.add(salary_draft()).unwrap();
    store.add(food_draft()).unwrap();

    store.clear();

    assert_eq!(compute_totals(store.transactions()), Totals::default());
    assert!(group_by_month(store.all_transactions()).is_empty());
    assert!(store.monthly().is_empty());
    assert!(store.income_by_category().is_empty());
}

#[test]
fn filter_changes_never_touch_the_collection() {
    let mut store = empty_store();
    store.reset();
    let total = store.all_transactions().len();

    for filter in [Filter::Expense, Filter::Income, Filter::All, Filter::Expense] {
        store.set_filter(filter);
        assert_eq!(store.all_transactions().len(), total);
        assert!(store.transactions().iter().all(|t| filter.matches(t)));
    }
}

#[test]
fn reset_replaces_previous_state() {
    let mut store = empty_store();
    let salary_id = store.add(salary_draft()).unwrap();

    store.reset();

    assert!(store.transaction(&salary_id).is_none());
    let months: Vec<&String> = store.monthly().keys().collect();
    assert_eq!(months, vec!["2024-01", "2024-02", "2024-03", "2024-04"]);
}

#[test]
fn invalid_drafts_are_reported_and_not_inserted() {
    let mut store = empty_store();
    store.add(salary_draft()).unwrap();

    let cases = [
        (
            TransactionDraft::new(TransactionKind::Expense, "food", "twelve", "2024-01-06"),
            ValidationError::InvalidAmount("twelve".into()),
        ),
        (
            TransactionDraft::new(TransactionKind::Expense, "", 12.0, "2024-01-06"),
            ValidationError::MissingCategory,
        ),
        (
            TransactionDraft::new(TransactionKind::Expense, "food", 12.0, "06/01/2024"),
            ValidationError::InvalidDate("06/01/2024".into()),
        ),
    ];
    for (draft, expected) in cases {
        assert_eq!(store.add(draft).unwrap_err(), expected);
    }
    assert_eq!(store.all_transactions().len(), 1);
    assert_eq!(store.totals().balance, 3200.0);
}

#[test]
fn unknown_categories_are_accepted() {
    let mut store = empty_store();
    store
        .add(
            TransactionDraft::new(TransactionKind::Expense, "pets", 30.0, "2024-03-03")
                .with_description("Croquettes"),
        )
        .unwrap();
    assert_eq!(store.expenses_by_category().get("pets"), Some(&30.0));
    assert_eq!(store.transactions()[0].description, "Croquettes");
}
