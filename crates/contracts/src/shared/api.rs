//! Envelope types of the Holidaze REST API
//!
//! Every successful response wraps its payload in `{ "data": ..., "meta": ... }`.
//! Failures carry `{ "errors": [{ "message": ... }], "status": ..., "statusCode": ... }`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

/// Pagination block returned by list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default)]
    pub is_first_page: bool,
    #[serde(default)]
    pub is_last_page: bool,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub previous_page: Option<u32>,
    #[serde(default)]
    pub next_page: Option<u32>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub total_count: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<ApiErrorItem>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorItem {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub path: Option<Vec<String>>,
}

impl ApiErrorBody {
    /// One-line message suitable for an error banner
    pub fn summary(&self) -> String {
        let messages: Vec<&str> = self
            .errors
            .iter()
            .map(|e| e.message.trim())
            .filter(|m| !m.is_empty())
            .collect();

        if !messages.is_empty() {
            return messages.join("; ");
        }

        match self.status.as_deref().map(str::trim) {
            Some(status) if !status.is_empty() => status.to_string(),
            _ => "Unknown error".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Query parameters accepted by list endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(rename = "sortOrder", skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(rename = "_owner", skip_serializing_if = "Option::is_none")]
    pub owner: Option<bool>,
    #[serde(rename = "_bookings", skip_serializing_if = "Option::is_none")]
    pub bookings: Option<bool>,
    #[serde(rename = "_venue", skip_serializing_if = "Option::is_none")]
    pub venue: Option<bool>,
}

impl ListQuery {
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn with_owner(mut self) -> Self {
        self.owner = Some(true);
        self
    }

    pub fn with_bookings(mut self) -> Self {
        self.bookings = Some(true);
        self
    }

    pub fn with_venue(mut self) -> Self {
        self.venue = Some(true);
        self
    }

    pub fn sorted_by(mut self, field: &str, order: SortOrder) -> Self {
        self.sort = Some(field.to_string());
        self.sort_order = Some(order);
        self
    }

    /// `?a=1&b=2`, or an empty string when no parameter is set
    pub fn to_query_string(&self) -> String {
        match serde_qs::to_string(self) {
            Ok(qs) if !qs.is_empty() => format!("?{}", qs),
            _ => String::new(),
        }
    }
}

/// What to do after one page of a paged listing has been fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageWalk {
    Next(u32),
    Done,
    /// The page cap was reached while the server still had more pages
    Truncated,
}

/// Decides whether a paged walk continues past `page`
pub fn next_page(page: u32, fetched: usize, meta: Option<&PageMeta>, max_pages: u32) -> PageWalk {
    let is_last = meta.map(|m| m.is_last_page).unwrap_or(true);
    if is_last || fetched == 0 {
        PageWalk::Done
    } else if page >= max_pages {
        PageWalk::Truncated
    } else {
        PageWalk::Next(page + 1)
    }
}
