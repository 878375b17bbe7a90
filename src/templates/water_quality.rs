// src/templates/water_quality.rs
use super::icons::icon;
use super::{format_date, render_page};
use crate::content::{WATER_FACTS, WATER_GUIDELINES, WATER_SOURCES};
use crate::models::{Icon, InfoCard, WaterSource};

pub fn render() -> String {
    let sources = WATER_SOURCES
        .iter()
        .map(render_source)
        .collect::<Vec<_>>()
        .join("\n");
    let guidelines = WATER_GUIDELINES
        .iter()
        .map(render_guideline)
        .collect::<Vec<_>>()
        .join("\n");
    let facts = WATER_FACTS
        .iter()
        .map(|fact| format!("<li>{}</li>", fact))
        .collect::<Vec<_>>()
        .join("\n                        ");

    let content = format!(
        r#"
    <div class="container container-wide page">
        <div class="page-heading">
            <div class="page-emblem">{droplets}</div>
            <h1>Water Quality Monitoring</h1>
            <p class="muted">Real-time water quality information and safety guidelines for our community</p>
        </div>

        <div class="alert alert-warning" role="note">
            {triangle}
            <div>
                <h2 class="alert-title">Seasonal Advisory</h2>
                <p>
                    During monsoon season, extra caution is advised. Boil all water before consumption
                    and avoid using stagnant water sources.
                </p>
            </div>
        </div>

        <section class="section-block">
            <h2>Water Sources Status</h2>
            <div class="grid-3">
                {sources}
            </div>
        </section>

        <section class="section-block">
            <h2>Water Safety Guidelines</h2>
            <div class="grid-2">
                {guidelines}
            </div>
        </section>

        <div class="card card-tinted">
            <div class="card-header card-header-icon">
                {info}
                <div>
                    <h2 class="card-title">Important Information</h2>
                    <ul class="info-list">
                        {facts}
                    </ul>
                </div>
            </div>
        </div>

        <div class="card card-muted">
            <div class="card-content">
                <p class="small muted center">
                    All water quality alerts and guidelines are available in Telugu (తెలుగు) and
                    English. Switch language using the footer options.
                </p>
            </div>
        </div>
    </div>
    "#,
        droplets = icon(Icon::Droplets, "icon-emblem"),
        triangle = icon(Icon::AlertTriangle, "icon-lg text-warning"),
        sources = sources,
        guidelines = guidelines,
        info = icon(Icon::Info, "icon-lg text-primary"),
        facts = facts,
    );

    render_page("Water Quality", "/water-quality", &content, &[])
}

fn render_source(source: &WaterSource) -> String {
    let tone = source.status.tone();
    format!(
        r#"<div class="card source-card border-{tone}">
                    <div class="card-header source-header">
                        <h3 class="card-title">{name}</h3>
                        {status_icon}
                    </div>
                    <div class="card-content">
                        <span class="badge badge-{tone}">{quality}</span>
                        <p class="small"><strong>pH Level:</strong> {ph}</p>
                        <p class="small muted">Last tested: {tested}</p>
                    </div>
                </div>"#,
        tone = tone,
        name = source.name,
        status_icon = icon(source.status.icon(), &format!("icon-lg text-{}", tone)),
        quality = source.quality,
        ph = source.ph,
        tested = format_date(source.last_tested),
    )
}

fn render_guideline(guideline: &InfoCard) -> String {
    format!(
        r#"<div class="card card-header-icon">
                    <div class="icon-box">{}</div>
                    <div>
                        <h3 class="card-title">{}</h3>
                        <p class="card-description">{}</p>
                    </div>
                </div>"#,
        icon(guideline.icon, "icon-lg text-primary"),
        guideline.title,
        guideline.description
    )
}
