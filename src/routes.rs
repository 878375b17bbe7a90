// src/routes.rs
use axum::{
    extract::{DefaultBodyLimit, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::content::NAV_ITEMS;
use crate::handlers::{report, web};
use crate::models::HealthCheckResponse;
use crate::AppState;

const MAX_FORM_BYTES: usize = 64 * 1024;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // ==================
        // PAGES
        // ==================
        .route("/", get(web::index))
        .route(
            "/report",
            get(web::report_page)
                .post(report::submit_report)
                .layer(DefaultBodyLimit::max(MAX_FORM_BYTES)),
        )
        .route("/track", get(web::track))
        .route("/water-quality", get(web::water_quality))
        .route("/awareness", get(web::awareness))
        // ==================
        // API
        // ==================
        .route("/api/health", get(health_check))
        // Static files
        .nest_service("/static", ServeDir::new(&state.config.static_dir))
        .fallback(web::not_found)
        .layer(axum::middleware::from_fn(
            crate::middleware::security::attack_prevention,
        ))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::security::security_headers,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        routes: NAV_ITEMS.iter().map(|item| item.path).collect(),
        cached_pages: state.pages.entry_count().await,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::report::{MISSING_INFO_TITLE, SUBMITTED_TITLE, VOICE_TITLE};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(Arc::new(AppState::new(Config::default())))
    }

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_page(uri: &str) -> (StatusCode, String) {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_report(body: &str) -> (StatusCode, String) {
        send(
            Request::builder()
                .method("POST")
                .uri("/report")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    #[tokio::test]
    async fn test_every_nav_route_renders_with_shell() {
        for item in NAV_ITEMS {
            let (status, html) = get_page(item.path).await;
            assert_eq!(status, StatusCode::OK, "{}", item.path);
            assert!(html.contains(r#"<header class="header">"#), "{}", item.path);
            assert!(html.contains(r#"<footer class="footer">"#), "{}", item.path);
            assert!(html.contains(r#"aria-current="page""#), "{}", item.path);
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (status, html) = get_page("/complaints/CU-2024-001").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("Page Not Found"));
    }

    #[tokio::test]
    async fn test_track_always_lists_three_complaints() {
        for uri in ["/track", "/track?q=CU-2024-002", "/track?q=zzz"] {
            let (status, html) = get_page(uri).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(html.matches("data-complaint-id=").count(), 3, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_track_echoes_search_text() {
        let (_, html) = get_page("/track?q=CU-2024-002").await;
        assert!(html.contains(r#"value="CU-2024-002""#));
    }

    #[tokio::test]
    async fn test_complete_report_succeeds_and_clears_form() {
        let (status, html) = post_report(
            "name=Asha&phone=9999999999&issueType=drainage&location=Market+Rd&description=Standing+water&photo=drain.jpg",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(SUBMITTED_TITLE));
        assert!(html.contains("toast-success"));
        assert!(!html.contains("Asha"));
        assert!(!html.contains("drain.jpg"));
        assert!(html.contains(r#"<option value="" selected disabled>"#));
    }

    #[tokio::test]
    async fn test_missing_field_keeps_entered_values() {
        let (status, html) = post_report(
            "name=&phone=9999999999&issueType=drainage&location=Market+Rd&description=x&photo=drain.jpg",
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(html.contains(MISSING_INFO_TITLE));
        assert!(html.contains("toast-error"));
        assert!(html.contains(r#"value="9999999999""#));
        assert!(html.contains(r#"value="Market Rd""#));
        assert!(html.contains(r#"<option value="drainage" selected>"#));
        assert!(html.contains(r#"name="photoName" value="drain.jpg""#));
    }

    #[tokio::test]
    async fn test_absent_issue_type_counts_as_missing() {
        let (status, _) = post_report(
            "name=Asha&phone=9999999999&location=Market+Rd&description=Standing+water",
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_voice_action_keeps_draft() {
        let (status, html) = post_report("name=Asha&description=Standing+water&action=voice").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(VOICE_TITLE));
        assert!(html.contains(r#"value="Asha""#));
        assert!(html.contains(">Standing water</textarea>"));
    }

    #[tokio::test]
    async fn test_awareness_tab_selection() {
        let (_, html) = get_page("/awareness?tab=bird-sanctuary").await;
        assert!(html.contains("Protecting Our Natural Heritage"));

        let (status, html) = get_page("/awareness?tab=unknown").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Waste Segregation"));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, body) = get_page("/api/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["routes"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_pages_carry_security_headers() {
        let response = app()
            .oneshot(Request::builder().uri("/water-quality").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }
}
