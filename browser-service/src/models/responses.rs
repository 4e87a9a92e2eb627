use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
    pub catalog: String,
    pub timestamp: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub term: String,
    #[serde(default)]
    pub search_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SortRequest {
    pub order: String,
}

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub filter_type: String,
    #[serde(default)]
    pub filter_value: String,
}

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    pub name: String,
}
