use crate::models::book::BookRecord;
use crate::models::query::{FilterType, SortOrder};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use tracing::{debug, warn};

fn collate_titles(a: &str, b: &str) -> Ordering {
    let key_a = a.trim().to_lowercase();
    let key_b = b.trim().to_lowercase();
    key_a.cmp(&key_b).then_with(|| a.cmp(b))
}

/// Returns a sorted copy of `records`. Ties keep their incoming order.
pub fn sort_records(records: &[BookRecord], order: &SortOrder) -> Vec<BookRecord> {
    let mut sorted = records.to_vec();

    match order {
        SortOrder::AscendingPopular => {
            sorted.sort_by(|a, b| a.download_count.cmp(&b.download_count))
        }
        SortOrder::DescendingPopular => {
            sorted.sort_by(|a, b| b.download_count.cmp(&a.download_count))
        }
        SortOrder::Alphabetical => sorted.sort_by(|a, b| collate_titles(&a.title, &b.title)),
        SortOrder::ReverseAlphabetical => {
            sorted.sort_by(|a, b| collate_titles(&b.title, &a.title))
        }
        SortOrder::Unrecognized(raw) => {
            warn!("Unrecognized sort order '{}', leaving results as-is", raw);
        }
    }

    sorted
}

fn within_author_lifespan(book: &BookRecord, year: i32) -> bool {
    match book.author_lifespan() {
        (Some(born), Some(died)) => born <= year && year <= died,
        _ => false,
    }
}

/// Returns the records matching the filter. An empty value or
/// `FilterType::None` keeps everything.
pub fn filter_records(
    records: &[BookRecord],
    filter_type: FilterType,
    filter_value: &str,
) -> Vec<BookRecord> {
    if filter_type == FilterType::None || filter_value.is_empty() {
        return records.to_vec();
    }
    let value = filter_value;

    match filter_type {
        FilterType::None => records.to_vec(),
        FilterType::Language => records
            .iter()
            .filter(|book| book.languages.iter().any(|lang| lang == value))
            .cloned()
            .collect(),
        FilterType::Topic => records
            .iter()
            .filter(|book| book.subjects.iter().any(|subject| subject == value))
            .cloned()
            .collect(),
        FilterType::AuthorYear => match value.trim().parse::<i32>() {
            Ok(year) => records
                .iter()
                .filter(|book| within_author_lifespan(book, year))
                .cloned()
                .collect(),
            Err(_) => {
                debug!("Ignoring non-numeric author year '{}'", value);
                records.to_vec()
            }
        },
    }
}

pub fn available_languages(records: &[BookRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|book| book.languages.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::Person;
    use serde_json::json;

    fn book(id: u32, title: &str, downloads: u64) -> BookRecord {
        serde_json::from_value(json!({
            "id": id,
            "title": title,
            "languages": ["en"],
            "download_count": downloads
        }))
        .unwrap()
    }

    fn with_authors(mut record: BookRecord, authors: &[(Option<i32>, Option<i32>)]) -> BookRecord {
        record.authors = authors
            .iter()
            .enumerate()
            .map(|(i, (birth_year, death_year))| Person {
                name: format!("Author {}", i),
                birth_year: *birth_year,
                death_year: *death_year,
            })
            .collect();
        record
    }

    fn ids(records: &[BookRecord]) -> Vec<u32> {
        records.iter().map(|b| b.id).collect()
    }

    fn sample() -> Vec<BookRecord> {
        vec![
            book(1, "beta", 50),
            book(2, "Alpha", 10),
            book(3, "gamma", 50),
            book(4, "alpha", 10),
            book(5, "Delta", 99),
        ]
    }

    #[test]
    fn popularity_sorts_are_stable() {
        let records = sample();

        assert_eq!(
            ids(&sort_records(&records, &SortOrder::AscendingPopular)),
            vec![2, 4, 1, 3, 5]
        );
        assert_eq!(
            ids(&sort_records(&records, &SortOrder::DescendingPopular)),
            vec![5, 1, 3, 2, 4]
        );
    }

    #[test]
    fn alphabetical_ignores_case() {
        let records = sample();

        assert_eq!(
            ids(&sort_records(&records, &SortOrder::Alphabetical)),
            vec![2, 4, 1, 5, 3]
        );
        assert_eq!(
            ids(&sort_records(&records, &SortOrder::ReverseAlphabetical)),
            vec![3, 5, 1, 4, 2]
        );
    }

    #[test]
    fn sort_leaves_input_untouched() {
        let records = sample();
        let before = records.clone();

        for order in [
            SortOrder::AscendingPopular,
            SortOrder::DescendingPopular,
            SortOrder::Alphabetical,
            SortOrder::ReverseAlphabetical,
        ] {
            let _ = sort_records(&records, &order);
            assert_eq!(records, before);
        }
    }

    #[test]
    fn unknown_sort_order_is_identity() {
        let records = sample();
        let sorted = sort_records(&records, &SortOrder::Unrecognized("random".to_string()));
        assert_eq!(sorted, records);
    }

    #[test]
    fn absent_filter_is_identity() {
        let records = sample();

        assert_eq!(filter_records(&records, FilterType::None, "fr"), records);
        assert_eq!(filter_records(&records, FilterType::Language, ""), records);
    }

    #[test]
    fn blank_value_is_still_a_filter() {
        let records = sample();

        assert!(filter_records(&records, FilterType::Topic, "   ").is_empty());
        assert!(filter_records(&records, FilterType::Language, " ").is_empty());
    }

    #[test]
    fn sort_then_noop_filter_matches_sort() {
        let records = sample();
        let sorted = sort_records(&records, &SortOrder::Alphabetical);
        assert_eq!(filter_records(&sorted, FilterType::Topic, ""), sorted);
    }

    #[test]
    fn language_filter_matches_exact_code() {
        let mut record = book(10, "Les Misérables", 5);
        record.languages = vec!["en".to_string(), "fr".to_string()];
        let records = vec![record];

        assert_eq!(filter_records(&records, FilterType::Language, "fr").len(), 1);
        assert!(filter_records(&records, FilterType::Language, "de").is_empty());
        assert!(filter_records(&records, FilterType::Language, "f").is_empty());
        assert!(filter_records(&records, FilterType::Language, " fr ").is_empty());
    }

    #[test]
    fn topic_filter_matches_exact_subject() {
        let mut record = book(11, "Moby Dick", 5);
        record.subjects = vec!["Whaling -- Fiction".to_string()];
        let records = vec![record];

        assert_eq!(
            filter_records(&records, FilterType::Topic, "Whaling -- Fiction").len(),
            1
        );
        assert!(filter_records(&records, FilterType::Topic, "Whaling").is_empty());
    }

    #[test]
    fn author_year_uses_lifespan_bounds() {
        let records = vec![with_authors(book(1, "A", 1), &[(Some(1800), Some(1850))])];

        assert_eq!(filter_records(&records, FilterType::AuthorYear, "1825").len(), 1);
        assert_eq!(filter_records(&records, FilterType::AuthorYear, "1800").len(), 1);
        assert_eq!(filter_records(&records, FilterType::AuthorYear, "1850").len(), 1);
        assert!(filter_records(&records, FilterType::AuthorYear, "1900").is_empty());
        assert_eq!(filter_records(&records, FilterType::AuthorYear, " 1825 ").len(), 1);
    }

    #[test]
    fn author_year_spans_all_authors_and_skips_missing_years() {
        let records = vec![
            with_authors(
                book(1, "Joint work", 1),
                &[(Some(1700), None), (None, Some(1790)), (Some(1750), Some(1760))],
            ),
            with_authors(book(2, "Anonymous", 1), &[]),
            with_authors(book(3, "Unknown dates", 1), &[(None, None)]),
            with_authors(book(4, "Still living", 1), &[(Some(1960), None)]),
        ];

        assert_eq!(ids(&filter_records(&records, FilterType::AuthorYear, "1785")), vec![1]);
        assert!(filter_records(&records, FilterType::AuthorYear, "1990").is_empty());
    }

    #[test]
    fn non_numeric_author_year_is_ignored() {
        let records = vec![with_authors(book(1, "A", 1), &[(Some(1800), Some(1850))])];
        assert_eq!(
            filter_records(&records, FilterType::AuthorYear, "nineteenth"),
            records
        );
    }

    #[test]
    fn languages_are_sorted_and_unique() {
        let mut a = book(1, "A", 1);
        a.languages = vec!["fr".to_string(), "en".to_string()];
        let b = book(2, "B", 1);

        assert_eq!(available_languages(&[a, b]), vec!["en", "fr"]);
    }
}
