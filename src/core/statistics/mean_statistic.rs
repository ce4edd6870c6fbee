use crate::core::statistics::Statistic;

/// Arithmetic mean.
#[derive(Debug, Clone, Copy)]
pub struct MeanStatistic;

impl Statistic for MeanStatistic {
    fn estimate(values: &mut [f64]) -> f64 {
        if values.is_empty() {
            return f64::NAN;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn empty_is_nan() {
        assert!(MeanStatistic::estimate(&mut []).is_nan());
    }

    #[test]
    fn averages_values() {
        assert!(approx_eq(
            MeanStatistic::estimate(&mut [2.0, 4.0, 6.0]),
            4.0,
            EPS
        ));
    }

    #[test]
    fn negative_and_fractional_values() {
        assert!(approx_eq(
            MeanStatistic::estimate(&mut [-1.5, 0.5, 4.0]),
            1.0,
            EPS
        ));
    }

    #[test]
    fn opposite_infinities_have_no_mean() {
        assert!(MeanStatistic::estimate(&mut [f64::INFINITY, f64::NEG_INFINITY]).is_nan());
    }
}
