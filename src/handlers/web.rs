// src/handlers/web.rs
use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::Html,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::content::COMPLAINTS;
use crate::services::report::ReportDraft;
use crate::templates::{self, awareness::AwarenessTab};
use crate::utils::validation::{is_complaint_id, normalize_search_query};
use crate::AppState;

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let html = state.pages.get_or_render("/", templates::home::render).await;
    Html(html.to_string())
}

pub async fn report_page() -> Html<String> {
    Html(templates::report::render(&ReportDraft::default(), &[]))
}

#[derive(Debug, Deserialize)]
pub struct TrackQuery {
    pub q: Option<String>,
}

pub async fn track(Query(query): Query<TrackQuery>) -> Html<String> {
    let search = query
        .q
        .as_deref()
        .map(normalize_search_query)
        .unwrap_or_default();

    // Captured for display only; the list below is never filtered.
    if !search.is_empty() {
        tracing::debug!(
            query = %search,
            well_formed = is_complaint_id(&search),
            "complaint search captured"
        );
    }

    Html(templates::track::render(COMPLAINTS, &search))
}

pub async fn water_quality(State(state): State<Arc<AppState>>) -> Html<String> {
    let html = state
        .pages
        .get_or_render("/water-quality", templates::water_quality::render)
        .await;
    Html(html.to_string())
}

#[derive(Debug, Deserialize)]
pub struct AwarenessQuery {
    pub tab: Option<String>,
}

pub async fn awareness(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AwarenessQuery>,
) -> Html<String> {
    let tab = AwarenessTab::from_query(query.tab.as_deref());
    let key = format!("/awareness?tab={}", tab.slug());
    let html = state
        .pages
        .get_or_render(&key, || templates::awareness::render(tab))
        .await;
    Html(html.to_string())
}

pub async fn not_found(uri: Uri) -> (StatusCode, Html<String>) {
    tracing::debug!(path = uri.path(), "no route");
    (
        StatusCode::NOT_FOUND,
        Html(templates::not_found::render(uri.path())),
    )
}
