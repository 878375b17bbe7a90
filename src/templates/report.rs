// src/templates/report.rs
use super::icons::icon;
use super::{html_escape, render_page};
use crate::models::{Icon, IssueType};
use crate::services::notifier::Notification;
use crate::services::report::{DraftField, ReportDraft};

pub fn render(draft: &ReportDraft, toasts: &[Notification]) -> String {
    let issue_options = IssueType::ALL
        .iter()
        .map(|issue| {
            let selected = if draft.get(DraftField::IssueType) == issue.value() { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                issue.value(),
                selected,
                issue.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n                            ");

    let placeholder_selected = if draft.issue_type.is_empty() { " selected" } else { "" };

    let photo_html = match &draft.photo {
        Some(file) => format!(
            r#"<div class="upload-selected">
                            {}
                            <p class="upload-name">{}</p>
                            <p class="muted small">Click to change</p>
                            <input type="hidden" name="photoName" value="{}">
                        </div>"#,
            icon(Icon::Camera, "icon-lg text-primary"),
            html_escape(&file.name),
            html_escape(&file.name)
        ),
        None => format!(
            r#"<div class="upload-empty">
                            {}
                            <p class="muted">Click to upload or drag and drop</p>
                            <p class="muted small">PNG, JPG up to 10MB</p>
                        </div>"#,
            icon(Icon::Upload, "icon-lg")
        ),
    };

    let content = format!(
        r#"
    <div class="container container-narrow page">
        <div class="page-heading">
            <h1>Report an Issue</h1>
            <p class="muted">
                Help us maintain a clean and healthy community by reporting sanitation and environmental issues
            </p>
        </div>

        <div class="card card-raised">
            <div class="card-header">
                <h2 class="card-title">Issue Details</h2>
                <p class="card-description">Provide as much information as possible for faster resolution</p>
            </div>
            <div class="card-content">
                <form class="report-form" method="POST" action="/report" novalidate>
                    <button type="submit" name="action" value="submit" class="visually-hidden" tabindex="-1" aria-hidden="true"></button>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="name">Full Name *</label>
                            <input type="text" id="name" name="name" placeholder="Enter your name" value="{name}" required>
                        </div>
                        <div class="form-group">
                            <label for="phone">Phone Number *</label>
                            <input type="tel" id="phone" name="phone" placeholder="+91 XXXXX XXXXX" value="{phone}" required>
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="issueType">Issue Type *</label>
                        <select id="issueType" name="issueType" required>
                            <option value=""{placeholder_selected} disabled>Select issue type</option>
                            {issue_options}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="location">Location *</label>
                        <div class="input-with-button">
                            <input type="text" id="location" name="location" placeholder="Enter location or landmark" value="{location}" required>
                            <button type="button" class="btn btn-outline btn-icon" title="Use my location">{pin}</button>
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="description">Description *</label>
                        <div class="textarea-with-button">
                            <textarea id="description" name="description" placeholder="Describe the issue in detail..." rows="5" required>{description}</textarea>
                            <button type="submit" name="action" value="voice" class="btn btn-ghost btn-icon" title="Voice input" formnovalidate>{mic}</button>
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="image-upload">Upload Photo</label>
                        <label for="image-upload" class="upload-drop">
                            <input type="file" id="image-upload" name="photo" accept="image/*" class="visually-hidden">
                            {photo}
                        </label>
                    </div>

                    <button type="submit" name="action" value="submit" class="btn btn-primary btn-lg btn-full">{send} Submit Report</button>
                </form>
            </div>
        </div>

        <div class="card card-muted">
            <div class="card-content">
                <p class="small muted">
                    <strong>Note:</strong> You will receive SMS notifications at each stage:
                    submission confirmation, when officials review your complaint, and upon resolution.
                    High-priority zones with multiple complaints are addressed first.
                </p>
            </div>
        </div>
    </div>
    "#,
        name = html_escape(draft.get(DraftField::Name)),
        phone = html_escape(draft.get(DraftField::Phone)),
        placeholder_selected = placeholder_selected,
        issue_options = issue_options,
        location = html_escape(draft.get(DraftField::Location)),
        pin = icon(Icon::MapPin, ""),
        description = html_escape(draft.get(DraftField::Description)),
        mic = icon(Icon::Mic, ""),
        photo = photo_html,
        send = icon(Icon::Send, ""),
    );

    render_page("Report an Issue", "/report", &content, toasts)
}
