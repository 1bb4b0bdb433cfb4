use bigdecimal::{BigDecimal, RoundingMode};
use serde::Serialize;

use business::domain::totals::model::ShoppingTotals;

use crate::labels::Locale;

/// How monetary amounts are rendered for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    /// Placed between the symbol and the digits.
    pub symbol_spacing: &'static str,
    pub decimal_separator: char,
    pub thousands_separator: char,
}

impl CurrencyFormat {
    pub const PT_BR: CurrencyFormat = CurrencyFormat {
        symbol: "R$",
        symbol_spacing: " ",
        decimal_separator: ',',
        thousands_separator: '.',
    };

    pub const EN_US: CurrencyFormat = CurrencyFormat {
        symbol: "$",
        symbol_spacing: "",
        decimal_separator: '.',
        thousands_separator: ',',
    };

    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::PtBr => Self::PT_BR,
            Locale::EnUs => Self::EN_US,
        }
    }

    /// Renders `amount` rounded half-up to cents, e.g. "R$ 1.234,56".
    pub fn format(&self, amount: &BigDecimal) -> String {
        let rounded = amount.with_scale_round(2, RoundingMode::HalfUp);
        let text = rounded.abs().to_string();
        let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(digit);
        }

        let sign = if rounded < BigDecimal::from(0) { "-" } else { "" };
        format!(
            "{sign}{}{}{grouped}{}{fraction}",
            self.symbol, self.symbol_spacing, self.decimal_separator
        )
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// Running totals rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedTotals {
    pub planned: String,
    pub purchased: String,
    pub remaining: String,
    /// "purchased/total" item counter, e.g. "3/10".
    pub progress: String,
}

pub fn format_totals(totals: &ShoppingTotals, currency: &CurrencyFormat) -> FormattedTotals {
    FormattedTotals {
        planned: currency.format(&totals.planned_total),
        purchased: currency.format(&totals.purchased_total),
        remaining: currency.format(&totals.remaining_total),
        progress: format!("{}/{}", totals.purchased_count, totals.item_count),
    }
}
