use crate::core::statistics::Statistic;
use std::collections::HashMap;
use std::hash::Hash;

/// Partitions `(key, value)` pairs by key and summarizes each partition with `S`.
///
/// The result holds exactly one entry per distinct key in `pairs`.
pub fn summarize_groups<'a, K, S>(pairs: impl IntoIterator<Item = (&'a K, f64)>) -> HashMap<K, f64>
where
    K: Eq + Hash + Clone + 'a,
    S: Statistic,
{
    let mut groups: HashMap<&K, Vec<f64>> = HashMap::new();
    for (key, value) in pairs {
        groups.entry(key).or_default().push(value);
    }
    groups
        .into_iter()
        .map(|(key, mut values)| (key.clone(), S::estimate(&mut values)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::statistics::{MeanStatistic, MedianStatistic};

    #[test]
    fn empty_input_gives_empty_map() {
        let pairs: Vec<(&&str, f64)> = Vec::new();
        let out = summarize_groups::<&str, MeanStatistic>(pairs);
        assert!(out.is_empty());
    }

    #[test]
    fn one_entry_per_distinct_key() {
        let keys = ["a", "b", "a", "c", "b", "a"];
        let values = [1.0, 10.0, 3.0, 5.0, 20.0, 8.0];
        let out = summarize_groups::<&str, MeanStatistic>(keys.iter().zip(values));
        assert_eq!(out.len(), 3);
        assert_eq!(out[&"a"], 4.0);
        assert_eq!(out[&"b"], 15.0);
        assert_eq!(out[&"c"], 5.0);
    }

    #[test]
    fn uses_the_requested_statistic() {
        let keys = [1u32, 1, 1, 1, 2];
        let values = [1.0, 2.0, 3.0, 10.0, 0.0];
        let out = summarize_groups::<u32, MedianStatistic>(keys.iter().zip(values));
        assert_eq!(out[&1], 2.5);
        assert_eq!(out[&2], 0.0);
    }
}
