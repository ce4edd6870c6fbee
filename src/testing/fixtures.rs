/// Three groups: `a` = [2, 4, 6], `b` = [1, 2, 3, 4], `c` = [10].
pub fn three_groups() -> (Vec<Option<&'static str>>, Vec<Option<f64>>) {
    let rows = [
        ("a", 2.0),
        ("b", 1.0),
        ("a", 4.0),
        ("b", 4.0),
        ("c", 10.0),
        ("b", 2.0),
        ("a", 6.0),
        ("b", 3.0),
    ];
    rows.iter().map(|&(k, v)| (Some(k), Some(v))).unzip()
}

/// Training data whose groups share nothing with [`three_groups`].
pub fn disjoint_groups() -> (Vec<Option<&'static str>>, Vec<Option<f64>>) {
    let rows = [("x", 1.0), ("y", 5.0), ("x", 3.0)];
    rows.iter().map(|&(k, v)| (Some(k), Some(v))).unzip()
}

/// Wraps plain keys as present observations.
pub fn observed<K: Clone>(keys: &[K]) -> Vec<Option<K>> {
    keys.iter().cloned().map(Some).collect()
}
