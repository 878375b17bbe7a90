// src/templates/track.rs
use super::icons::icon;
use super::{format_date, html_escape, render_page};
use crate::models::{Complaint, ComplaintStatus, Icon};

/// `search` is echoed back into the input only; the list is always the
/// full set passed in.
pub fn render(complaints: &[Complaint], search: &str) -> String {
    let arrow = format!("\n                {}\n                ", icon(Icon::ArrowRight, "muted"));
    let legend = ComplaintStatus::ALL
        .iter()
        .map(|status| {
            format!(
                r#"<span class="legend-item">{} <span>{}</span></span>"#,
                icon(status.icon(), &format!("text-{}", status.tone())),
                status.label()
            )
        })
        .collect::<Vec<_>>()
        .join(arrow.as_str());

    let cards = complaints
        .iter()
        .map(render_complaint)
        .collect::<Vec<_>>()
        .join("\n");

    let content = format!(
        r#"
    <div class="container container-wide page">
        <div class="page-heading page-heading-left">
            <h1>Track Complaints</h1>
            <p class="muted">Monitor the status of reported issues from submission to resolution</p>
        </div>

        <div class="card">
            <div class="card-header">
                <h2 class="card-title">Search by Complaint ID</h2>
                <p class="card-description">Enter your complaint ID (e.g., CU-2024-001) to track specific issue</p>
            </div>
            <div class="card-content">
                <form method="GET" action="/track" class="search-form">
                    <input type="text" name="q" placeholder="Enter Complaint ID" value="{search}" class="search-input">
                    <button type="submit" class="btn btn-primary">{search_icon} Search</button>
                </form>
            </div>
        </div>

        <div class="card">
            <div class="card-content status-legend">
                {legend}
            </div>
        </div>

        <div class="complaint-list">
            <h2>Recent Complaints</h2>
            {cards}
        </div>

        <div class="card card-muted">
            <div class="card-content">
                <p class="small muted">
                    <strong>Priority System:</strong> Areas with multiple complaints receive higher
                    priority. You'll receive SMS notifications at each status change. Estimated
                    resolution time varies based on issue complexity and current workload.
                </p>
            </div>
        </div>
    </div>
    "#,
        search = html_escape(search),
        search_icon = icon(Icon::Search, ""),
        legend = legend,
        cards = cards,
    );

    render_page("Track Complaints", "/track", &content, &[])
}

fn render_complaint(complaint: &Complaint) -> String {
    let status = complaint.status;
    let resolved_html = complaint
        .resolved
        .map(|date| {
            format!(
                r#"<p class="small text-success">Resolved: {}</p>"#,
                format_date(date)
            )
        })
        .unwrap_or_default();

    let timeline = (1..=3u8)
        .map(|stage| {
            let tone = match stage {
                1 => "info",
                2 => "warning",
                _ => "success",
            };
            let class = if status.stage_reached(stage) {
                format!("bg-{}", tone)
            } else {
                "bg-muted".to_string()
            };
            format!(r#"<div class="timeline-bar {}"></div>"#, class)
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    format!(
        r#"
        <div class="card complaint-card {border}" data-complaint-id="{id}" data-status="{wire_status}">
            <div class="complaint-body">
                <div class="complaint-info">
                    <div class="complaint-badges">
                        <span class="complaint-id">{id}</span>
                        <span class="badge badge-{tone}">{status_icon} {status_label}</span>
                        <span class="badge badge-outline">{priority} Priority</span>
                    </div>
                    <p class="small"><strong>Type:</strong> {kind}</p>
                    <p class="small"><strong>Location:</strong> {location}</p>
                    <p class="small muted">Submitted: {submitted}</p>
                    {resolved}
                </div>
                <div class="timeline">
                {timeline}
                </div>
            </div>
        </div>"#,
        border = complaint.priority.border_class(),
        id = complaint.id,
        wire_status = status.as_str(),
        tone = status.tone(),
        status_icon = icon(status.icon(), ""),
        status_label = status.label(),
        priority = complaint.priority.label(),
        kind = complaint.kind,
        location = complaint.location,
        submitted = format_date(complaint.submitted),
        resolved = resolved_html,
        timeline = timeline,
    )
}
