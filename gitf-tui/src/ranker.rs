use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use gitf_core::filter::Ranker;
use rayon::prelude::*;

/// Skim-style fuzzy ranking, scored in parallel across labels
#[derive(Default)]
pub struct SkimRanker {
    matcher: SkimMatcherV2,
}

impl Ranker for SkimRanker {
    fn rank(&self, query: &str, labels: &[&str]) -> Vec<(usize, i64)> {
        labels
            .par_iter()
            .enumerate()
            .filter_map(|(i, label)| self.matcher.fuzzy_match(label, query).map(|score| (i, score)))
            .collect()
    }
}
