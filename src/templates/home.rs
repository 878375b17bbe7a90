// src/templates/home.rs
use super::icons::icon;
use super::render_page;
use crate::content::{FEATURES, STATS};
use crate::models::{Feature, Icon, Stat};

pub fn render() -> String {
    let stats_html = STATS.iter().map(render_stat).collect::<Vec<_>>().join("\n");
    let features_html = FEATURES
        .iter()
        .map(render_feature)
        .collect::<Vec<_>>()
        .join("\n");

    let content = format!(
        r#"
    <section class="hero">
        <div class="container hero-inner">
            <h1 class="hero-title">Building a Cleaner, Healthier Uppalapadu</h1>
            <p class="hero-subtitle">
                Report sanitation issues, track water quality, and protect our environment and the
                precious Uppalapadu Bird Sanctuary together
            </p>
            <div class="hero-actions">
                <a href="/report" class="btn btn-light btn-lg">{alert} Report an Issue</a>
                <a href="/track" class="btn btn-ghost-light btn-lg">{eye} Track Complaints</a>
            </div>
        </div>
    </section>

    <section class="section section-muted">
        <div class="container stats-grid">
            {stats}
        </div>
    </section>

    <section class="section">
        <div class="container">
            <div class="section-heading">
                <h2>How It Works</h2>
                <p class="muted">
                    Our platform connects community members with local authorities for faster issue
                    resolution and environmental protection
                </p>
            </div>
            <div class="features-grid">
                {features}
            </div>
        </div>
    </section>

    <section class="section cta-section">
        <div class="container">
            <h2>Join Our Community Initiative</h2>
            <p>
                Together, we can create a cleaner environment, ensure safe water, and protect the
                Uppalapadu Bird Sanctuary for future generations
            </p>
            <a href="/report" class="btn btn-light btn-lg">Get Started Now</a>
        </div>
    </section>
    "#,
        alert = icon(Icon::AlertCircle, ""),
        eye = icon(Icon::Eye, ""),
        stats = stats_html,
        features = features_html,
    );

    render_page("Home", "/", &content, &[])
}

fn render_stat(stat: &Stat) -> String {
    format!(
        r#"<div class="card stat-card">
                {}
                <div class="stat-value">{}</div>
                <div class="stat-label">{}</div>
            </div>"#,
        icon(stat.icon, "icon-lg text-primary"),
        stat.value,
        stat.label
    )
}

fn render_feature(feature: &Feature) -> String {
    format!(
        r#"<div class="card feature-card">
                    {}
                    <h3>{}</h3>
                    <p class="muted">{}</p>
                </div>"#,
        icon(feature.icon, &format!("icon-xl {}", feature.accent.class())),
        feature.title,
        feature.description
    )
}
