//! Transaction state, aggregations, and demo data.

pub mod aggregate;
pub mod sample;
pub mod store;

pub use aggregate::{
    compute_totals, filter_transactions, group_by_category, group_by_month, percentage,
    ranked_categories, recent_months, sort_by_date_descending, CategoryBreakdown, CategoryShare,
    MonthlySeries, MonthlyTotals, Totals,
};
pub use sample::{
    generate_sample_data, generate_with, SampleGenerator, DEFAULT_SAMPLE_MONTHS, MAX_SAMPLE_MONTHS,
};
pub use store::{SharedStore, Snapshot, TransactionStore};
