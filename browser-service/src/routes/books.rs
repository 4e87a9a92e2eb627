use crate::models::responses::{
    ErrorResponse, FilterRequest, NameRequest, PageParams, QueryRequest, SortRequest,
};
use crate::routes::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use catalog_core::{Action, ControllerError, FilterType, SearchType, SortOrder, ViewModel};
use tracing::{info, warn};

type ActionResult = Result<Json<ViewModel>, (StatusCode, Json<ErrorResponse>)>;

fn bad_request(message: String) -> (StatusCode, Json<ErrorResponse>) {
    warn!("Rejected request: {}", message);
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
}

async fn run(state: &AppState, action: Action) -> ActionResult {
    match state.controller.dispatch(action).await {
        Ok(view) => Ok(Json(view)),
        Err(ControllerError::InvalidArgument(msg)) => Err(bad_request(msg)),
    }
}

pub async fn get_view(State(state): State<AppState>) -> Json<ViewModel> {
    Json(state.controller.view())
}

pub async fn update_query(
    State(state): State<AppState>,
    Json(body): Json<QueryRequest>,
) -> ActionResult {
    let search_type = body
        .search_type
        .unwrap_or_else(|| SearchType::Default.as_str().to_string());

    run(
        &state,
        Action::UpdateQuery {
            term: body.term,
            search_type,
        },
    )
    .await
}

pub async fn browse(
    Query(params): Query<PageParams>,
    State(state): State<AppState>,
) -> ActionResult {
    let page = params.page.unwrap_or(1);
    info!("Browse page {}", page);
    run(&state, Action::Browse(page)).await
}

pub async fn search(
    Query(params): Query<PageParams>,
    State(state): State<AppState>,
) -> ActionResult {
    let page = params.page.unwrap_or(1);
    info!("Search page {}", page);
    run(&state, Action::Search(page)).await
}

pub async fn change_sort(
    State(state): State<AppState>,
    Json(body): Json<SortRequest>,
) -> ActionResult {
    run(&state, Action::ChangeSortOrder(SortOrder::from(body.order))).await
}

pub async fn change_filter(
    State(state): State<AppState>,
    Json(body): Json<FilterRequest>,
) -> ActionResult {
    let filter_type: FilterType = body
        .filter_type
        .parse()
        .map_err(|e: catalog_core::CatalogError| bad_request(e.to_string()))?;

    run(
        &state,
        Action::ChangeFilter {
            filter_type,
            value: body.filter_value,
        },
    )
    .await
}

pub async fn next_page(State(state): State<AppState>) -> ActionResult {
    run(&state, Action::NextPage).await
}

pub async fn previous_page(State(state): State<AppState>) -> ActionResult {
    run(&state, Action::PreviousPage).await
}

pub async fn select_author(
    State(state): State<AppState>,
    Json(body): Json<NameRequest>,
) -> ActionResult {
    run(&state, Action::SelectAuthor(body.name)).await
}

pub async fn select_bookshelf(
    State(state): State<AppState>,
    Json(body): Json<NameRequest>,
) -> ActionResult {
    run(&state, Action::SelectBookshelf(body.name)).await
}
