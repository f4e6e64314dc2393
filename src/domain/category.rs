//! The income and expense category vocabularies.
//!
//! The vocabularies are advisory: transactions may carry any category id, and
//! unknown ids render through [`category_or_fallback`].

use serde::Serialize;

use crate::domain::transaction::TransactionKind;

/// Mark shown for categories outside the vocabulary.
pub const FALLBACK_MARK: &str = "○";

/// A known category id with its display label and chart glyph.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CategoryInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub mark: &'static str,
}

/// Presentation label for charts and legends.
pub trait Displayable {
    fn display_label(&self) -> String;
}

impl Displayable for CategoryInfo {
    fn display_label(&self) -> String {
        format!("{} {}", self.mark, self.label)
    }
}

const fn info(id: &'static str, label: &'static str, mark: &'static str) -> CategoryInfo {
    CategoryInfo { id, label, mark }
}

pub const INCOME_CATEGORIES: [CategoryInfo; 5] = [
    info("salary", "Salaire", "■"),
    info("freelance", "Freelance", "◆"),
    info("investment", "Placements", "▲"),
    info("gift", "Dons reçus", "●"),
    info("other_income", "Autres", "○"),
];

pub const EXPENSE_CATEGORIES: [CategoryInfo; 10] = [
    info("housing", "Logement", "■"),
    info("food", "Alimentation", "●"),
    info("transport", "Transport", "▶"),
    info("utilities", "Factures", "◇"),
    info("health", "Santé", "+"),
    info("entertainment", "Loisirs", "★"),
    info("shopping", "Achats", "◆"),
    info("education", "Formation", "▲"),
    info("savings", "Épargne", "◐"),
    info("other_expense", "Divers", "○"),
];

pub fn categories_for(kind: TransactionKind) -> &'static [CategoryInfo] {
    match kind {
        TransactionKind::Income => &INCOME_CATEGORIES,
        TransactionKind::Expense => &EXPENSE_CATEGORIES,
    }
}

pub fn find_category(kind: TransactionKind, id: &str) -> Option<&'static CategoryInfo> {
    categories_for(kind).iter().find(|category| category.id == id)
}

pub fn is_known_category(kind: TransactionKind, id: &str) -> bool {
    find_category(kind, id).is_some()
}

/// Display entry for a category, owned so unknown ids can label themselves.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryLabel {
    pub id: String,
    pub label: String,
    pub mark: String,
}

/// Known categories resolve to their vocabulary entry; anything else is shown
/// under its raw id with the fallback mark.
pub fn category_or_fallback(kind: TransactionKind, id: &str) -> CategoryLabel {
    match find_category(kind, id) {
        Some(category) => CategoryLabel {
            id: category.id.to_string(),
            label: category.label.to_string(),
            mark: category.mark.to_string(),
        },
        None => CategoryLabel {
            id: id.to_string(),
            label: id.to_string(),
            mark: FALLBACK_MARK.to_string(),
        },
    }
}
