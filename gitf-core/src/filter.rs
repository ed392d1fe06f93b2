/// Fuzzy ranking seam. Given a non-empty query and the candidate labels,
/// return `(label index, score)` for every label that matches.
pub trait Ranker {
    fn rank(&self, query: &str, labels: &[&str]) -> Vec<(usize, i64)>;
}

/// Compute the filtered view for `query`.
///
/// An empty query keeps every label in its original order without consulting
/// the ranker. Otherwise matches are ordered best score first, ties broken by
/// original position.
pub fn filter_view(ranker: &dyn Ranker, query: &str, labels: &[&str]) -> Vec<(usize, i64)> {
    if query.is_empty() {
        return (0..labels.len()).map(|i| (i, 0)).collect();
    }
    let mut scored: Vec<(usize, i64)> = ranker
        .rank(query, labels)
        .into_iter()
        .filter(|(idx, _)| *idx < labels.len())
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    scored
}
