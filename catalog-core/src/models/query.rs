use crate::models::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    Title,
    Topic,
    Author,
    ReleaseDate,
    #[default]
    Default,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Title => "title",
            SearchType::Topic => "topic",
            SearchType::Author => "author",
            SearchType::ReleaseDate => "release_date",
            SearchType::Default => "default",
        }
    }

    /// Query parameter the catalog expects for this kind of search.
    pub fn query_param(&self) -> &'static str {
        match self {
            SearchType::Topic => "topic",
            _ => "search",
        }
    }
}

impl FromStr for SearchType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SearchType::Title),
            "topic" => Ok(SearchType::Topic),
            "author" => Ok(SearchType::Author),
            "release_date" => Ok(SearchType::ReleaseDate),
            "default" | "" => Ok(SearchType::Default),
            other => Err(CatalogError::InvalidArgument(format!(
                "unsupported search type '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering applied to a page of results. Values the transformer does not
/// know are kept verbatim so they can still be forwarded to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortOrder {
    AscendingPopular,
    #[default]
    DescendingPopular,
    Alphabetical,
    ReverseAlphabetical,
    Unrecognized(String),
}

impl SortOrder {
    pub fn as_str(&self) -> &str {
        match self {
            SortOrder::AscendingPopular => "ascending_popular",
            SortOrder::DescendingPopular => "descending_popular",
            SortOrder::Alphabetical => "alphabetical",
            SortOrder::ReverseAlphabetical => "reverse_alphabetical",
            SortOrder::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for SortOrder {
    fn from(s: &str) -> Self {
        match s {
            "ascending_popular" => SortOrder::AscendingPopular,
            "descending_popular" => SortOrder::DescendingPopular,
            "alphabetical" => SortOrder::Alphabetical,
            "reverse_alphabetical" => SortOrder::ReverseAlphabetical,
            other => SortOrder::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for SortOrder {
    fn from(s: String) -> Self {
        SortOrder::from(s.as_str())
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        order.as_str().to_string()
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    #[default]
    None,
    Language,
    Topic,
    AuthorYear,
}

impl FilterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::None => "none",
            FilterType::Language => "language",
            FilterType::Topic => "topic",
            FilterType::AuthorYear => "author_year",
        }
    }
}

impl FromStr for FilterType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(FilterType::None),
            "language" => Ok(FilterType::Language),
            "topic" => Ok(FilterType::Topic),
            "author_year" => Ok(FilterType::AuthorYear),
            other => Err(CatalogError::InvalidArgument(format!(
                "unsupported filter type '{}'",
                other
            ))),
        }
    }
}

/// UI-facing query state. `search_type` holds the raw selection and is only
/// validated when a search is issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryState {
    pub search_term: String,
    pub search_type: String,
    pub sort_order: SortOrder,
    pub filter_type: FilterType,
    pub filter_value: String,
    pub current_page: u32,
    pub loading: bool,
    pub error_message: Option<String>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            search_type: SearchType::Default.as_str().to_string(),
            sort_order: SortOrder::default(),
            filter_type: FilterType::None,
            filter_value: String::new(),
            current_page: 1,
            loading: false,
            error_message: None,
        }
    }
}

/// User intents the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    UpdateQuery { term: String, search_type: String },
    Browse(u32),
    Search(u32),
    ChangeSortOrder(SortOrder),
    ChangeFilter { filter_type: FilterType, value: String },
    NextPage,
    PreviousPage,
    SelectAuthor(String),
    SelectBookshelf(String),
}
