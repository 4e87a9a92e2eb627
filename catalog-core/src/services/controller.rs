use crate::models::book::{BookRecord, PageResult, CATALOG_PAGE_SIZE};
use crate::models::error::ControllerError;
use crate::models::query::{Action, FilterType, QueryState, SearchType, SortOrder};
use crate::models::responses::ViewModel;
use crate::services::catalog::CatalogClient;
use crate::services::transform::{available_languages, filter_records, sort_records};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

pub const NO_RESULTS_MESSAGE: &str = "No results found";

#[derive(Debug, Default)]
struct Session {
    query: QueryState,
    page: PageResult,
    display: Vec<BookRecord>,
    status_message: Option<String>,
    latest_ticket: u64,
}

impl Session {
    fn rederive(&mut self) {
        let sorted = sort_records(&self.page.results, &self.query.sort_order);
        self.display = filter_records(&sorted, self.query.filter_type, &self.query.filter_value);

        self.status_message = if self.display.is_empty()
            && !self.query.search_term.trim().is_empty()
            && !self.query.loading
        {
            Some(NO_RESULTS_MESSAGE.to_string())
        } else {
            None
        };
    }

    fn view(&self) -> ViewModel {
        ViewModel {
            display_list: self.display.clone(),
            current_page: self.query.current_page,
            has_next: self.page.next.is_some(),
            has_previous: self.page.previous.is_some(),
            loading: self.query.loading,
            error_message: self.query.error_message.clone(),
            status_message: self.status_message.clone(),
            available_languages: available_languages(&self.page.results),
            count: self.page.count,
            total_pages: self.page.total_pages(CATALOG_PAGE_SIZE),
        }
    }
}

/// Owns the query state of one browsing session and turns actions into
/// catalog requests. The session lock is never held across a request, so
/// overlapping fetches are possible; only the most recently issued one is
/// allowed to land.
pub struct QueryController {
    client: CatalogClient,
    session: Mutex<Session>,
}

impl QueryController {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            session: Mutex::new(Session::default()),
        }
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn view(&self) -> ViewModel {
        self.session().view()
    }

    pub fn state(&self) -> QueryState {
        self.session().query.clone()
    }

    pub async fn dispatch(&self, action: Action) -> Result<ViewModel, ControllerError> {
        debug!("Dispatching {:?}", action);

        match action {
            Action::UpdateQuery { term, search_type } => {
                let mut session = self.session();
                session.query.search_term = term;
                session.query.search_type = search_type;
                session.query.error_message = None;
                Ok(session.view())
            }
            Action::Browse(page) => Ok(self.browse(page).await),
            Action::Search(page) => self.search(page).await,
            Action::ChangeSortOrder(order) => Ok(self.change_sort_order(order)),
            Action::ChangeFilter { filter_type, value } => {
                Ok(self.change_filter(filter_type, value))
            }
            Action::NextPage => self.turn_page(true).await,
            Action::PreviousPage => self.turn_page(false).await,
            Action::SelectAuthor(name) => self.select(name, SearchType::Author).await,
            Action::SelectBookshelf(name) => self.select(name, SearchType::Topic).await,
        }
    }

    /// Issues the next ticket. Issuing and publishing happen under one lock
    /// so the highest ticket handed out is always the one allowed to land.
    fn begin_fetch(&self) -> u64 {
        let mut session = self.session();
        session.latest_ticket += 1;
        session.query.loading = true;
        session.rederive();
        session.latest_ticket
    }

    fn complete_fetch(&self, ticket: u64, page_number: u32, page: PageResult) -> ViewModel {
        let mut session = self.session();

        if session.latest_ticket != ticket {
            debug!(
                "Discarding stale response for request {} (latest is {})",
                ticket, session.latest_ticket
            );
            return session.view();
        }

        info!(
            "Page {} loaded: {} books, {} total",
            page_number,
            page.results.len(),
            page.count
        );
        session.page = page;
        session.query.current_page = page_number;
        session.query.loading = false;
        session.query.error_message = None;
        session.rederive();
        session.view()
    }

    async fn browse(&self, page: u32) -> ViewModel {
        let page = page.max(1);
        let sort_order = self.session().query.sort_order.clone();

        let ticket = self.begin_fetch();
        let result = self.client.list_all(&sort_order, page).await;
        self.complete_fetch(ticket, page, result)
    }

    async fn search(&self, page: u32) -> Result<ViewModel, ControllerError> {
        let page = page.max(1);
        let query = self.session().query.clone();

        let search_type = match query.search_type.parse::<SearchType>() {
            Ok(search_type) => search_type,
            Err(e) => {
                warn!("Rejected search: {}", e);
                let mut session = self.session();
                session.query.error_message = Some(e.to_string());
                return Err(ControllerError::InvalidArgument(e.to_string()));
            }
        };

        let ticket = self.begin_fetch();
        let result = self
            .client
            .search_by(&query.search_term, search_type, &query.sort_order, page)
            .await;
        Ok(self.complete_fetch(ticket, page, result))
    }

    fn change_sort_order(&self, order: SortOrder) -> ViewModel {
        let mut session = self.session();
        session.query.sort_order = order;
        session.rederive();
        session.view()
    }

    fn change_filter(&self, filter_type: FilterType, value: String) -> ViewModel {
        let mut session = self.session();
        session.query.filter_type = filter_type;
        session.query.filter_value = value;
        session.rederive();
        session.view()
    }

    async fn turn_page(&self, forward: bool) -> Result<ViewModel, ControllerError> {
        let (target, searching) = {
            let session = self.session();
            let cursor = if forward {
                &session.page.next
            } else {
                &session.page.previous
            };

            if cursor.is_none() {
                debug!("No {} page to move to", if forward { "next" } else { "previous" });
                return Ok(session.view());
            }

            let current = session.query.current_page;
            let target = if forward {
                current.saturating_add(1)
            } else {
                current.saturating_sub(1).max(1)
            };
            (target, !session.query.search_term.is_empty())
        };

        if searching {
            self.search(target).await
        } else {
            Ok(self.browse(target).await)
        }
    }

    async fn select(
        &self,
        name: String,
        search_type: SearchType,
    ) -> Result<ViewModel, ControllerError> {
        info!("Selected {} '{}'", search_type, name);
        {
            let mut session = self.session();
            session.query.search_term = name;
            session.query.search_type = search_type.as_str().to_string();
        }
        self.search(1).await
    }
}
