/// Summary of one group's target values.
///
/// Values reaching a statistic have already passed `fit` validation, so none
/// of them is `NaN`. The slice may be reordered in place.
pub trait Statistic {
    /// Returns the summary of `values`, `NaN` for an empty group.
    fn estimate(values: &mut [f64]) -> f64;
}
