use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Indices of `items` matching `query`, best match first.
///
/// An empty query keeps every item in its original order. Equal scores
/// keep their original relative order.
#[must_use]
pub fn rank(query: &str, items: &[String]) -> Vec<usize> {
    let query = query.trim();
    if query.is_empty() {
        return (0..items.len()).collect();
    }

    let matcher = SkimMatcherV2::default().smart_case();
    let mut scored: Vec<(i64, usize)> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| matcher.fuzzy_match(item, query).map(|score| (score, index)))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, index)| index).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::rank;

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let names = items(&["2_add_two.go", "1_two_sum.go"]);
        assert_eq!(rank("", &names), vec![0, 1]);
        assert_eq!(rank("   ", &names), vec![0, 1]);
    }

    #[test]
    fn non_matching_items_are_dropped() {
        let names = items(&["1_two_sum.go", "20_valid_parens.go", "206_reverse_list.go"]);
        assert_eq!(rank("reverse", &names), vec![2]);
    }

    #[test]
    fn fuzzy_subsequence_matches() {
        let names = items(&["1_two_sum.go", "20_valid_parens.go"]);
        assert_eq!(rank("tsm", &names), vec![0]);
    }

    #[test]
    fn nothing_matches() {
        let names = items(&["1_two_sum.go"]);
        assert!(rank("zzz", &names).is_empty());
    }
}
