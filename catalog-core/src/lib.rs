//! Query, sort and filter core for browsing the Gutendex book catalog.
//!
//! - `services::catalog`: builds `/books` requests and decodes pages, falling
//!   back to an empty page when the catalog cannot be reached.
//! - `services::transform`: pure sort and filter over a page of records.
//! - `services::controller`: owns the session state and reacts to `Action`s.

pub mod models;
pub mod services;
pub mod utils;

pub use models::book::{BookRecord, PageResult, Person, CATALOG_PAGE_SIZE};
pub use models::error::{CatalogError, ControllerError};
pub use models::query::{Action, FilterType, QueryState, SearchType, SortOrder};
pub use models::responses::ViewModel;
pub use services::catalog::{CatalogClient, CatalogTransport, HttpTransport, Transport};
pub use services::controller::{QueryController, NO_RESULTS_MESSAGE};
pub use reqwest::Url;
pub use utils::config::CatalogConfig;
