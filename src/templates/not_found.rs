// src/templates/not_found.rs
use super::{html_escape, render_page};

pub fn render(path: &str) -> String {
    let content = format!(
        r#"
    <div class="container container-narrow page error-container">
        <h1>Page Not Found</h1>
        <p class="muted">Nothing lives at <code>{}</code>.</p>
        <a href="/" class="btn btn-primary">Back to Home</a>
    </div>
    "#,
        html_escape(path)
    );

    render_page("Not Found", path, &content, &[])
}
