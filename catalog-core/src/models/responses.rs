use crate::models::book::BookRecord;
use serde::{Deserialize, Serialize};

/// Read-only snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    pub display_list: Vec<BookRecord>,
    pub current_page: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub loading: bool,
    pub error_message: Option<String>,
    pub status_message: Option<String>,
    pub available_languages: Vec<String>,
    pub count: u64,
    pub total_pages: u64,
}
