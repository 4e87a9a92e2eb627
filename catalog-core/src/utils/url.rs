use crate::models::error::CatalogError;
use reqwest::Url;

/// Builds `{base}/books?{params}`, form-encoding every value.
pub fn books_url(base_url: &str, params: &[(&str, &str)]) -> Result<Url, CatalogError> {
    let raw = format!("{}/books", base_url.trim_end_matches('/'));
    let mut url = Url::parse(&raw).map_err(|e| {
        CatalogError::InvalidArgument(format!("bad catalog base url '{}': {}", base_url, e))
    })?;

    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params.iter().copied());
    }

    Ok(url)
}

/// Cursors must be absolute URLs; anything else means the page is malformed.
pub fn validate_cursor(cursor: Option<&str>) -> Result<(), CatalogError> {
    match cursor {
        Some(raw) => Url::parse(raw)
            .map(|_| ())
            .map_err(|_| CatalogError::InvalidCursor(raw.to_string())),
        None => Ok(()),
    }
}
