use bigdecimal::BigDecimal;
use num_traits::Zero;

/// Builds an exact monetary amount from an integer number of cents.
pub fn cents(value: i64) -> BigDecimal {
    BigDecimal::new(value.into(), 2)
}

/// Sums monetary amounts; an empty sequence sums to zero.
pub fn sum<'a>(amounts: impl IntoIterator<Item = &'a BigDecimal>) -> BigDecimal {
    amounts
        .into_iter()
        .fold(BigDecimal::zero(), |acc, amount| acc + amount)
}

/// Arithmetic mean of the amounts, zero when there are none.
pub fn mean(amounts: &[BigDecimal]) -> BigDecimal {
    if amounts.is_empty() {
        return BigDecimal::zero();
    }
    sum(amounts) / BigDecimal::from(amounts.len() as u64)
}
