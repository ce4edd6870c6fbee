use crate::core::statistics::Statistic;

/// Sample median. With an even count it is the average of the two central
/// values.
#[derive(Debug, Clone, Copy)]
pub struct MedianStatistic;

impl Statistic for MedianStatistic {
    fn estimate(values: &mut [f64]) -> f64 {
        let n = values.len();
        if n == 0 {
            return f64::NAN;
        }
        values.sort_unstable_by(f64::total_cmp);
        if n % 2 == 1 {
            values[n / 2]
        } else {
            (values[n / 2 - 1] + values[n / 2]) / 2.0
        }
    }
}
