pub mod category;
pub mod filter;
pub mod transaction;

pub use category::{
    categories_for, category_or_fallback, find_category, is_known_category, CategoryInfo,
    CategoryLabel, Displayable,
};
pub use filter::Filter;
pub use transaction::{AmountInput, Transaction, TransactionDraft, TransactionKind};
