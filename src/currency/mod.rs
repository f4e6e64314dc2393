//! Money and calendar-date formatting used by presentation layers.
//!
//! Nothing in here touches the store; every function is a pure mapping from a
//! value plus locale preferences to display text.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("EUR")
    }
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocaleConfig {
    pub language_tag: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub symbol_position: SymbolPosition,
    pub date_format: DateFormatStyle,
}

impl LocaleConfig {
    /// French conventions: `1 234,50 €`, `05 janv.`.
    pub fn french() -> Self {
        Self {
            language_tag: "fr-FR".into(),
            decimal_separator: ',',
            grouping_separator: '\u{202f}',
            symbol_position: SymbolPosition::Suffix,
            date_format: DateFormatStyle::Medium,
        }
    }

    /// US English conventions: `$1,234.50`, `05 Jan`.
    pub fn english() -> Self {
        Self {
            language_tag: "en-US".into(),
            decimal_separator: '.',
            grouping_separator: ',',
            symbol_position: SymbolPosition::Prefix,
            date_format: DateFormatStyle::Medium,
        }
    }

    /// Resolves a BCP 47 tag to a preset, falling back to French.
    pub fn for_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("en") {
            Self::english()
        } else {
            Self::french()
        }
    }

    /// Primary language subtag, lowercased (`fr` for `fr-FR`).
    pub fn language(&self) -> String {
        self.language_tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self::french()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormatOptions {
    pub currency_display: CurrencyDisplay,
    pub negative_style: NegativeStyle,
    pub screen_reader_mode: bool,
    /// Overrides the currency's minor units when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fraction_digits: Option<u8>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            currency_display: CurrencyDisplay::Symbol,
            negative_style: NegativeStyle::Sign,
            screen_reader_mode: false,
            max_fraction_digits: None,
        }
    }
}

impl FormatOptions {
    pub fn is_default(value: &FormatOptions) -> bool {
        value == &Self::default()
    }

    pub fn whole_units() -> Self {
        Self {
            max_fraction_digits: Some(0),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NegativeStyle {
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CurrencyDisplay {
    Symbol,
    Code,
    SymbolAndCode,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateFormatStyle {
    Short,
    Medium,
    Long,
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        "AUD" => "A$".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Rounds half away from zero before rendering, so `0.5` shows as `1`.
pub fn format_number(locale: &LocaleConfig, value: f64, precision: u8) -> String {
    let factor = 10f64.powi(precision as i32);
    let rounded = (value * factor).round() / factor;
    let mut body = format!("{:.*}", precision as usize, rounded);
    if locale.decimal_separator != '.' {
        if let Some(pos) = body.find('.') {
            body.replace_range(pos..=pos, &locale.decimal_separator.to_string());
        }
    }
    if let Some(pos) = body.find(locale.decimal_separator) {
        let mut int_part = body[..pos].to_string();
        insert_grouping(&mut int_part, locale.grouping_separator);
        body = format!("{}{}", int_part, &body[pos..]);
    } else {
        insert_grouping(&mut body, locale.grouping_separator);
    }
    body
}

fn insert_grouping(int_part: &mut String, separator: char) {
    let mut cleaned = int_part.replace(separator, "");
    if cleaned.starts_with('-') {
        let sign = cleaned.remove(0);
        let grouped = group_digits(&cleaned, separator);
        *int_part = format!("{}{}", sign, grouped);
    } else {
        *int_part = group_digits(&cleaned, separator);
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

pub fn format_currency_value(
    amount: f64,
    code: &CurrencyCode,
    locale: &LocaleConfig,
    options: &FormatOptions,
) -> String {
    let precision = options
        .max_fraction_digits
        .unwrap_or_else(|| minor_units_for(code.as_str()));
    let mut body = format_number(locale, amount.abs(), precision);
    let negative = amount < 0.0 && body.chars().any(|ch| ch.is_ascii_digit() && ch != '0');
    if negative {
        body = match options.negative_style {
            NegativeStyle::Sign => format!("-{}", body),
            NegativeStyle::Parentheses => format!("({})", body),
        };
    }
    let symbol = symbol_for(code.as_str());
    let formatted = match (options.currency_display, locale.symbol_position) {
        (CurrencyDisplay::Symbol, SymbolPosition::Prefix) => {
            if body.starts_with('(') {
                format!("{} {}", symbol, body)
            } else {
                format!("{}{}", symbol, body)
            }
        }
        (CurrencyDisplay::Symbol, SymbolPosition::Suffix) => format!("{}\u{a0}{}", body, symbol),
        (CurrencyDisplay::Code, SymbolPosition::Prefix) => format!("{} {}", code.as_str(), body),
        (CurrencyDisplay::Code, SymbolPosition::Suffix) => {
            format!("{}\u{a0}{}", body, code.as_str())
        }
        (CurrencyDisplay::SymbolAndCode, _) => {
            format!("{} {} ({})", symbol, body, code.as_str())
        }
    };
    if options.screen_reader_mode {
        if negative {
            format!(
                "minus {} {}",
                code.as_str(),
                formatted.replacen('-', "", 1).replace(['(', ')'], "")
            )
        } else {
            format!("{} {}", code.as_str(), formatted)
        }
    } else {
        formatted
    }
}

/// Dashboard display: euros, French grouping, whole units (`3 200 €`).
pub fn format_currency(amount: f64) -> String {
    format_currency_value(
        amount,
        &CurrencyCode::new("EUR"),
        &LocaleConfig::french(),
        &FormatOptions::whole_units(),
    )
}

pub fn format_date(locale: &LocaleConfig, date: NaiveDate) -> String {
    let language = locale.language();
    match locale.date_format {
        DateFormatStyle::Short => format_date_for_input(date),
        DateFormatStyle::Medium => {
            format!("{:02} {}", date.day(), month_abbreviation(date.month(), &language))
        }
        DateFormatStyle::Long => format!(
            "{:02} {} {}",
            date.day(),
            month_abbreviation(date.month(), &language),
            date.year()
        ),
    }
}

/// ISO form used by date inputs and by the serialized transaction contract.
pub fn format_date_for_input(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Upper-case three letter month label for chart axes (`JAN`, `FÉV`).
pub fn month_label(month: u32, language: &str) -> &'static str {
    const FR: [&str; 12] = [
        "JAN", "FÉV", "MAR", "AVR", "MAI", "JUN", "JUL", "AOÛ", "SEP", "OCT", "NOV", "DÉC",
    ];
    const EN: [&str; 12] = [
        "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
    ];
    let table = if language == "en" { &EN } else { &FR };
    month
        .checked_sub(1)
        .and_then(|idx| table.get(idx as usize))
        .copied()
        .unwrap_or("")
}

/// Label for a `YYYY-MM` month key, or an empty string when the key is malformed.
pub fn month_key_label(key: &str, language: &str) -> &'static str {
    key.get(5..7)
        .and_then(|mm| mm.parse::<u32>().ok())
        .map(|month| month_label(month, language))
        .unwrap_or("")
}

fn month_abbreviation(month: u32, language: &str) -> &'static str {
    const FR: [&str; 12] = [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ];
    const EN: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    let table = if language == "en" { &EN } else { &FR };
    month
        .checked_sub(1)
        .and_then(|idx| table.get(idx as usize))
        .copied()
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_locale_separator() {
        let locale = LocaleConfig::english();
        assert_eq!(format_number(&locale, 1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(&locale, 999.0, 0), "999");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        let locale = LocaleConfig::english();
        assert_eq!(format_number(&locale, 2.5, 0), "3");
    }

    #[test]
    fn negative_zero_after_rounding_has_no_sign() {
        let out = format_currency(-0.2);
        assert_eq!(out, "0\u{a0}€");
    }

    #[test]
    fn month_labels_cover_both_languages() {
        assert_eq!(month_label(2, "fr"), "FÉV");
        assert_eq!(month_label(2, "en"), "FEB");
        assert_eq!(month_label(13, "fr"), "");
        assert_eq!(month_key_label("2024-08", "fr"), "AOÛ");
        assert_eq!(month_key_label("garbage", "fr"), "");
    }

    #[test]
    fn language_is_derived_from_tag() {
        assert_eq!(LocaleConfig::for_tag("en-GB").language(), "en");
        assert_eq!(LocaleConfig::for_tag("fr-FR").language(), "fr");
        assert_eq!(LocaleConfig::for_tag("de-DE"), LocaleConfig::french());
    }
}
