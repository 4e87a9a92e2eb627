use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Page size the catalog service uses for `/books` listings.
pub const CATALOG_PAGE_SIZE: u64 = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub death_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<Person>,
    #[serde(default)]
    pub translators: Vec<Person>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub bookshelves: Vec<String>,
    #[serde(default)]
    pub copyright: Option<bool>,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub download_count: u64,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub formats: BTreeMap<String, String>,
}

impl BookRecord {
    pub fn author_names(&self) -> Vec<&str> {
        self.authors.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.formats.get("image/jpeg").map(String::as_str)
    }

    /// Best format for reading in a browser: HTML first, then plain text.
    pub fn read_online(&self) -> Option<&str> {
        ["text/html", "text/plain; charset=utf-8", "text/plain"]
            .iter()
            .find_map(|mime| self.formats.get(*mime))
            .map(String::as_str)
    }

    /// Earliest birth year and latest death year across all authors.
    pub fn author_lifespan(&self) -> (Option<i32>, Option<i32>) {
        let born = self.authors.iter().filter_map(|a| a.birth_year).min();
        let died = self.authors.iter().filter_map(|a| a.death_year).max();
        (born, died)
    }
}

/// One page of `/books` results as returned by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<BookRecord>,
}

impl PageResult {
    pub fn empty() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            results: Vec::new(),
        }
    }

    pub fn total_pages(&self, page_size: u64) -> u64 {
        if page_size == 0 {
            return 0;
        }
        self.count.div_ceil(page_size)
    }
}

impl Default for PageResult {
    fn default() -> Self {
        Self::empty()
    }
}
