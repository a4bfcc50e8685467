//! Latest-artifact selection over a prefix listing.

use crate::domain::artifact::{compare_recency, ArtifactCategory};
use crate::domain::error::TavaultError;
use crate::domain::query::ArtifactQuery;

/// Keys chosen from one listing: the latest signals object, and the latest
/// analysis object when any candidate exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedArtifacts {
    pub signals_key: String,
    pub analysis_key: Option<String>,
}

/// Pick the most recent key of `category` from the listing, or `None` when
/// no key qualifies. Order-independent: the listing carries no ordering
/// guarantee, so the maximum is taken over the whole candidate set.
pub fn latest_key<'a>(keys: &'a [String], category: ArtifactCategory) -> Option<&'a str> {
    keys.iter()
        .map(String::as_str)
        .filter(|key| category.matches(key))
        .max_by(|a, b| compare_recency(a, b))
}

/// Select the signals and analysis keys for `query` from the keys listed
/// under its storage prefix.
///
/// An empty listing and a listing with no signals candidate both fail; a
/// missing analysis candidate does not.
pub fn locate(query: &ArtifactQuery, keys: &[String]) -> Result<LocatedArtifacts, TavaultError> {
    if keys.is_empty() {
        return Err(TavaultError::NoData {
            symbol: query.symbol.clone(),
            date: query.date.clone(),
        });
    }

    let signals_key = latest_key(keys, ArtifactCategory::Signals)
        .ok_or_else(|| TavaultError::SignalsMissing {
            prefix: query.storage_prefix(),
        })?
        .to_string();

    let analysis_key = latest_key(keys, ArtifactCategory::Analysis).map(str::to_string);

    Ok(LocatedArtifacts {
        signals_key,
        analysis_key,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn query() -> ArtifactQuery {
        ArtifactQuery::new("ABC", "2024-05-01")
    }

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn picks_lexicographically_greatest_signals_key() {
        let listing = keys(&[
            "daily/2024-05-01/ABC/signals_0900.json",
            "daily/2024-05-01/ABC/signals_1500.json",
            "daily/2024-05-01/ABC/gemini_analysis_0900.json",
        ]);
        let located = locate(&query(), &listing).unwrap();
        assert_eq!(located.signals_key, "daily/2024-05-01/ABC/signals_1500.json");
        assert_eq!(
            located.analysis_key.as_deref(),
            Some("daily/2024-05-01/ABC/gemini_analysis_0900.json")
        );
    }

    #[test]
    fn empty_listing_is_no_data() {
        let err = locate(&query(), &[]).unwrap_err();
        assert!(matches!(err, TavaultError::NoData { .. }));
    }

    #[test]
    fn missing_signals_fails_even_with_analysis_present() {
        let listing = keys(&[
            "daily/2024-05-01/ABC/gemini_analysis_0900.json",
            "daily/2024-05-01/ABC/gemini_analysis_1500.json",
        ]);
        let err = locate(&query(), &listing).unwrap_err();
        assert!(matches!(err, TavaultError::SignalsMissing { .. }));
    }

    #[test]
    fn missing_analysis_is_soft() {
        let listing = keys(&["daily/2024-05-01/ABC/signals_0900.json"]);
        let located = locate(&query(), &listing).unwrap();
        assert_eq!(located.signals_key, "daily/2024-05-01/ABC/signals_0900.json");
        assert_eq!(located.analysis_key, None);
    }

    #[test]
    fn non_json_keys_are_never_candidates() {
        let listing = keys(&[
            "daily/2024-05-01/ABC/signals_0900.json",
            "daily/2024-05-01/ABC/signals_9999.tmp",
        ]);
        let located = locate(&query(), &listing).unwrap();
        assert_eq!(located.signals_key, "daily/2024-05-01/ABC/signals_0900.json");
    }

    proptest! {
        #[test]
        fn selection_is_order_independent(mut suffixes in proptest::collection::vec("[0-9]{4}", 1..8)) {
            suffixes.sort();
            suffixes.dedup();
            let listing: Vec<String> = suffixes
                .iter()
                .map(|s| format!("daily/2024-05-01/ABC/signals_{s}.json"))
                .collect();
            let expected = listing.last().unwrap().clone();

            let mut reversed = listing.clone();
            reversed.reverse();

            let forward = locate(&query(), &listing).unwrap();
            let backward = locate(&query(), &reversed).unwrap();
            prop_assert_eq!(&forward.signals_key, &expected);
            prop_assert_eq!(&backward.signals_key, &expected);
        }
    }
}
