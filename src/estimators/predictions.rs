/// Ordered predictions, one per input observation.
///
/// `None` marks an observation whose group was not seen during fit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Predictions {
    values: Vec<Option<f64>>,
}

impl Predictions {
    pub fn new(values: Vec<Option<f64>>) -> Self {
        Self { values }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Option<f64>> {
        self.values.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.values.iter().copied()
    }

    pub fn as_slice(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn into_vec(self) -> Vec<Option<f64>> {
        self.values
    }

    /// Number of observations that fell into a missing group.
    pub fn missing_groups(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    /// Dense form with `NaN` standing in for missing groups.
    pub fn to_nan_filled(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.unwrap_or(f64::NAN)).collect()
    }
}

impl From<Vec<Option<f64>>> for Predictions {
    fn from(values: Vec<Option<f64>>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<Option<f64>> for Predictions {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Predictions {
    type Item = Option<f64>;
    type IntoIter = std::vec::IntoIter<Option<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Predictions {
    type Item = &'a Option<f64>;
    type IntoIter = std::slice::Iter<'a, Option<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_missing_entries() {
        let p = Predictions::new(vec![Some(1.0), None, Some(2.0), None]);
        assert_eq!(p.len(), 4);
        assert_eq!(p.missing_groups(), 2);
        assert_eq!(p.get(1), Some(None));
        assert_eq!(p.get(2), Some(Some(2.0)));
        assert_eq!(p.get(4), None);
    }

    #[test]
    fn empty_has_nothing_missing() {
        let p = Predictions::default();
        assert!(p.is_empty());
        assert_eq!(p.missing_groups(), 0);
        assert!(p.to_nan_filled().is_empty());
    }

    #[test]
    fn nan_filled_keeps_positions() {
        let p: Predictions = vec![None, Some(3.5)].into();
        let dense = p.to_nan_filled();
        assert!(dense[0].is_nan());
        assert_eq!(dense[1], 3.5);
    }

    #[test]
    fn iterates_by_value_and_reference() {
        let p: Predictions = [Some(1.0), None].into_iter().collect();
        let borrowed: Vec<_> = (&p).into_iter().copied().collect();
        assert_eq!(borrowed, p.iter().collect::<Vec<_>>());
        assert_eq!(p.clone().into_vec(), p.into_iter().collect::<Vec<_>>());
    }
}
