// src/templates/layout.rs
use super::html_escape;
use super::icons::icon;
use crate::content::{CONTACT_EMAIL, CONTACT_PHONE, NAV_ITEMS, SITE_NAME};
use crate::models::Icon;
use crate::services::notifier::{Notification, NotificationKind};

pub fn render_page(
    title: &str,
    active_path: &str,
    content: &str,
    toasts: &[Notification],
) -> String {
    let desktop_nav = NAV_ITEMS
        .iter()
        .map(|item| nav_link(item.path, item.name, item.path == active_path))
        .collect::<Vec<_>>()
        .join("\n                    ");

    let mobile_nav = NAV_ITEMS
        .iter()
        .map(|item| nav_link(item.path, item.name, item.path == active_path))
        .collect::<Vec<_>>()
        .join("\n                        ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - {site}</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
    <header class="header">
        <div class="container header-content">
            <a href="/" class="logo">{logo} <span class="logo-text">{site}</span></a>
            <nav class="nav nav-desktop">
                    {desktop_nav}
                    <a href="/report" class="btn btn-primary btn-sm">{alert} Report Now</a>
            </nav>
            <details class="nav-mobile">
                <summary aria-label="Menu">{menu}</summary>
                <nav class="nav-mobile-panel">
                        {mobile_nav}
                        <a href="/report" class="btn btn-primary">{alert} Report Now</a>
                </nav>
            </details>
        </div>
    </header>
    {toasts}
    <main class="main">
        {content}
    </main>
    {footer}
</body>
</html>"#,
        title = html_escape(title),
        site = SITE_NAME,
        logo = icon(Icon::Droplets, "text-primary"),
        alert = icon(Icon::AlertCircle, ""),
        menu = icon(Icon::Menu, ""),
        desktop_nav = desktop_nav,
        mobile_nav = mobile_nav,
        toasts = render_toasts(toasts),
        content = content,
        footer = render_footer(),
    )
}

pub fn nav_link(href: &str, text: &str, active: bool) -> String {
    if active {
        format!(
            r#"<a href="{}" class="nav-link active" aria-current="page">{}</a>"#,
            href, text
        )
    } else {
        format!(r#"<a href="{}" class="nav-link">{}</a>"#, href, text)
    }
}

fn render_toasts(toasts: &[Notification]) -> String {
    if toasts.is_empty() {
        return String::new();
    }

    let items = toasts
        .iter()
        .map(|toast| {
            let role = match toast.kind {
                NotificationKind::Error => "alert",
                _ => "status",
            };
            format!(
                r#"<div class="toast toast-{}" role="{}">
            <strong class="toast-title">{}</strong>
            <p class="toast-description">{}</p>
        </div>"#,
                toast.kind.as_str(),
                role,
                html_escape(&toast.title),
                html_escape(&toast.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<div class="toast-region" aria-live="polite">
        {}
    </div>"#,
        items
    )
}

fn render_footer() -> String {
    let quick_links = NAV_ITEMS
        .iter()
        .skip(1)
        .map(|item| format!(r#"<li><a href="{}">{}</a></li>"#, item.path, item.name))
        .collect::<Vec<_>>()
        .join("\n                    ");

    format!(
        r#"<footer class="footer">
        <div class="container footer-grid">
            <div>
                <div class="footer-brand">{logo} <span>{site}</span></div>
                <p class="muted">Building a cleaner, healthier community through technology and collective action.</p>
            </div>
            <div>
                <h3>Quick Links</h3>
                <ul class="footer-links">
                    {quick_links}
                </ul>
            </div>
            <div>
                <h3>Contact</h3>
                <ul class="footer-contact">
                    <li>{phone_icon} <span>{phone}</span></li>
                    <li>{mail_icon} <span>{email}</span></li>
                    <li>{pin_icon} <span>Uppalapadu, Guntur District<br>Andhra Pradesh, India</span></li>
                </ul>
            </div>
            <div>
                <h3>Languages</h3>
                <div class="language-toggle">
                    <button type="button" class="btn btn-primary btn-sm">English</button>
                    <button type="button" class="btn btn-outline btn-sm" lang="te">తెలుగు</button>
                </div>
            </div>
        </div>
        <div class="container footer-bottom">
            <p>© 2024 Clean Uppalapadu Initiative. All rights reserved.</p>
        </div>
    </footer>"#,
        logo = icon(Icon::Droplets, "text-primary"),
        site = SITE_NAME,
        quick_links = quick_links,
        phone_icon = icon(Icon::Phone, ""),
        phone = CONTACT_PHONE,
        mail_icon = icon(Icon::Mail, ""),
        email = CONTACT_EMAIL,
        pin_icon = icon(Icon::MapPin, ""),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_nav_link_is_marked() {
        let html = render_page("Track", "/track", "<p>body</p>", &[]);
        assert!(html.contains(r#"<a href="/track" class="nav-link active" aria-current="page">"#));
        assert!(html.contains(r#"<a href="/report" class="nav-link">Report Issue</a>"#));
        assert!(!html.contains("toast-region"));
    }

    #[test]
    fn test_toasts_are_escaped() {
        let toast = Notification {
            title: "<b>hi</b>".to_string(),
            description: "a & b".to_string(),
            kind: NotificationKind::Error,
        };
        let html = render_page("X", "/", "", &[toast]);
        assert!(html.contains(r#"class="toast toast-error" role="alert""#));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn test_footer_lists_contact_and_languages() {
        let html = render_page("X", "/", "", &[]);
        assert!(html.contains(CONTACT_EMAIL));
        assert!(html.contains("తెలుగు"));
        assert!(html.contains("© 2024 Clean Uppalapadu Initiative"));
    }
}
