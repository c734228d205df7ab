//! HTML fragment routes (HTMX partials).

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::components::sidebar;

/// Query for the sidebar fragment.
#[derive(Debug, Deserialize)]
pub struct SidebarQuery {
    /// The page's current route. Omitted when the client has no route.
    pub path: Option<String>,
}

/// Sidebar fragment for the given route.
///
/// Responds `200` with an empty body on the landing page.
#[instrument(skip_all)]
pub async fn sidebar_fragment(Query(query): Query<SidebarQuery>) -> Response {
    match sidebar(query.path.as_deref()) {
        Some(panel) => panel.into_response(),
        None => StatusCode::OK.into_response(),
    }
}
