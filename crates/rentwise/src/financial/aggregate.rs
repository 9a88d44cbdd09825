/// Fixed-shape record whose monetary fields can be collapsed into one figure.
pub trait CategoryFields {
    /// Field amounts in declaration order.
    fn amounts(&self) -> impl IntoIterator<Item = f64>;
}

/// Sums every field of a category record.
///
/// Negative amounts are summed as-is; callers own input hygiene.
pub fn sum_fields<R: CategoryFields>(record: &R) -> f64 {
    record
        .amounts()
        .into_iter()
        .fold(0.0, |total, amount| total + amount)
}
