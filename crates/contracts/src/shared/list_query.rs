//! Free-text search over record stores.
//!
//! Every management screen filters its store the same way: the lowercased
//! query must appear inside at least one of the record's searchable fields,
//! also lowercased. An empty query keeps everything. The result keeps the
//! store order.

/// Types that take part in the search box of a list screen.
pub trait Searchable {
    /// Fields the query is matched against, in display order.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match against any of [`Self::search_fields`].
    fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.search_fields()
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Returns the records matching `query`, preserving their order.
pub fn filter_records<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| item.matches_query(query))
        .collect()
}

/// Number of records matching `query`, for "Showing N of M" footers.
pub fn count_matching<T: Searchable>(items: &[T], query: &str) -> usize {
    items.iter().filter(|item| item.matches_query(query)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        name: &'static str,
        city: &'static str,
        note: &'static str,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.city]
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Riyadh Coffee House", city: "Riyadh", note: "cafe" },
            Row { name: "Al-Nakheel Restaurant", city: "Jeddah", note: "coffee" },
            Row { name: "Desert Gym", city: "Riyadh", note: "" },
        ]
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let rows = rows();
        let all = filter_records(&rows, "");
        assert_eq!(all.len(), rows.len());
        for (a, b) in all.iter().zip(rows.iter()) {
            assert_eq!(*a, b);
        }
    }

    #[test]
    fn match_is_case_insensitive_on_both_sides() {
        let rows = rows();
        let hits = filter_records(&rows, "COFFEE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Riyadh Coffee House");
    }

    #[test]
    fn only_designated_fields_are_searched() {
        // "coffee" appears in `note` of the second row, which is not searchable
        let rows = rows();
        assert!(filter_records(&rows, "coffee")
            .iter()
            .all(|r| r.name != "Al-Nakheel Restaurant"));
    }

    #[test]
    fn results_are_an_ordered_subset_and_all_match() {
        let rows = rows();
        for query in ["riyadh", "a", "gym", "zzz", " "] {
            let hits = filter_records(&rows, query);
            let needle = query.to_lowercase();
            for hit in &hits {
                assert!(hit
                    .search_fields()
                    .iter()
                    .any(|f| f.to_lowercase().contains(&needle)));
            }
            let positions: Vec<usize> = hits
                .iter()
                .map(|h| rows.iter().position(|r| r == *h).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(count_matching(&rows, query), hits.len());
        }
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let rows = rows();
        assert_eq!(filter_records(&rows, " ").len(), 3);
        assert!(filter_records(&rows, "  riyadh").is_empty());
    }
}
