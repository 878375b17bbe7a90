// src/templates/awareness.rs
use super::icons::icon;
use super::render_page;
use crate::content::{ECO_TOPICS, HEALTH_TIPS, PREVENTION_FACTS, SANCTUARY_FACTS, SANCTUARY_HELP};
use crate::models::{Icon, Topic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AwarenessTab {
    #[default]
    EcoPractices,
    BirdSanctuary,
    HealthHygiene,
}

impl AwarenessTab {
    pub const ALL: [AwarenessTab; 3] = [
        AwarenessTab::EcoPractices,
        AwarenessTab::BirdSanctuary,
        AwarenessTab::HealthHygiene,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            AwarenessTab::EcoPractices => "eco-practices",
            AwarenessTab::BirdSanctuary => "bird-sanctuary",
            AwarenessTab::HealthHygiene => "health-hygiene",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AwarenessTab::EcoPractices => "Eco Practices",
            AwarenessTab::BirdSanctuary => "Bird Sanctuary",
            AwarenessTab::HealthHygiene => "Health &amp; Hygiene",
        }
    }

    /// Unknown or missing slugs select the first tab.
    pub fn from_query(slug: Option<&str>) -> Self {
        slug.and_then(|s| Self::ALL.into_iter().find(|tab| tab.slug() == s))
            .unwrap_or_default()
    }
}

pub fn render(tab: AwarenessTab) -> String {
    let tab_list = AwarenessTab::ALL
        .iter()
        .map(|t| {
            let (class, selected) = if *t == tab {
                ("tab active", "true")
            } else {
                ("tab", "false")
            };
            format!(
                r#"<a href="/awareness?tab={}" class="{}" role="tab" aria-selected="{}">{}</a>"#,
                t.slug(),
                class,
                selected,
                t.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    let panel = match tab {
        AwarenessTab::EcoPractices => render_eco_practices(),
        AwarenessTab::BirdSanctuary => render_bird_sanctuary(),
        AwarenessTab::HealthHygiene => render_health_hygiene(),
    };

    let content = format!(
        r#"
    <div class="container container-wide page">
        <div class="page-heading">
            <div class="page-emblem">{leaf}</div>
            <h1>Environmental Awareness</h1>
            <p class="muted">Learn eco-friendly practices to build a sustainable and healthy community</p>
        </div>

        <div class="tabs">
            <nav class="tab-list" role="tablist">
                {tab_list}
            </nav>
            <div class="tab-panel" role="tabpanel" id="{slug}">
                {panel}
            </div>
        </div>

        <div class="card card-muted">
            <div class="card-content">
                <p class="small muted center">
                    <strong>భాషా మద్దతు (Language Support):</strong> All awareness materials are
                    available in Telugu and English. Access educational resources, videos, and guides
                    through our QR code system placed throughout the village.
                </p>
            </div>
        </div>
    </div>
    "#,
        leaf = icon(Icon::Leaf, "icon-emblem"),
        tab_list = tab_list,
        slug = tab.slug(),
        panel = panel,
    );

    render_page("Awareness", "/awareness", &content, &[])
}

fn render_eco_practices() -> String {
    let cards = ECO_TOPICS
        .iter()
        .map(render_topic)
        .collect::<Vec<_>>()
        .join("\n");
    format!(r#"<div class="grid-2">{}</div>"#, cards)
}

fn render_topic(topic: &Topic) -> String {
    let tips = topic
        .tips
        .iter()
        .map(|tip| format!("<li>{} <span>{}</span></li>", icon(Icon::Leaf, "text-success"), tip))
        .collect::<Vec<_>>()
        .join("\n                        ");

    format!(
        r#"
                <div class="card topic-card">
                    <div class="card-header card-header-icon">
                        <div class="icon-box">{}</div>
                        <div>
                            <h3 class="card-title">{}</h3>
                            <p class="card-description">{}</p>
                        </div>
                    </div>
                    <ul class="tip-list">
                        {}
                    </ul>
                </div>"#,
        icon(topic.icon, "icon-lg text-primary"),
        topic.title,
        topic.description,
        tips
    )
}

fn render_bird_sanctuary() -> String {
    let facts = SANCTUARY_FACTS
        .iter()
        .map(|fact| {
            format!(
                r#"<div class="sanctuary-fact">
                        <div class="icon-box">{}</div>
                        <h3>{}</h3>
                        <p class="small muted">{}</p>
                    </div>"#,
                icon(fact.icon, "icon-xl text-primary"),
                fact.title,
                fact.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n                    ");

    let help = SANCTUARY_HELP
        .iter()
        .map(|action| {
            format!(
                r#"<li class="help-item">
                        <div class="icon-box">{}</div>
                        <div><strong>{}</strong><span class="small muted">{}</span></div>
                    </li>"#,
                icon(action.icon, "text-primary"),
                action.title,
                action.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n                    ");

    format!(
        r#"
                <div class="card card-tinted">
                    <div class="card-header">
                        <h2 class="card-title">Protecting Our Natural Heritage</h2>
                        <p class="card-description">
                            The Uppalapadu Bird Sanctuary is a vital ecological treasure that requires our
                            collective protection
                        </p>
                    </div>
                    <div class="card-content grid-3">
                    {}
                    </div>
                </div>
                <div class="card">
                    <div class="card-header"><h2 class="card-title">How You Can Help</h2></div>
                    <ul class="card-content grid-2 help-list">
                    {}
                    </ul>
                </div>"#,
        facts, help
    )
}

fn render_health_hygiene() -> String {
    let tips = HEALTH_TIPS
        .iter()
        .map(|tip| format!(r#"<div class="health-tip"><span class="dot"></span><p class="small">{}</p></div>"#, tip))
        .collect::<Vec<_>>()
        .join("\n                    ");

    let prevention = PREVENTION_FACTS
        .iter()
        .map(|fact| {
            format!(
                r#"<div class="prevention-fact"><div class="stat-value">{}</div><div class="small muted">{}</div></div>"#,
                fact.value, fact.label
            )
        })
        .collect::<Vec<_>>()
        .join("\n                    ");

    format!(
        r#"
                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">Health &amp; Hygiene Practices</h2>
                        <p class="card-description">Essential practices to prevent waterborne and mosquito-borne diseases</p>
                    </div>
                    <div class="card-content grid-2">
                    {}
                    </div>
                </div>
                <div class="card card-warning">
                    <div class="card-header">
                        <h2 class="card-title">{} Disease Prevention</h2>
                    </div>
                    <div class="card-content">
                        <p class="small">
                            Stagnant water is the primary breeding ground for mosquitoes that cause malaria
                            and dengue. Report any stagnant drainage or water accumulation immediately.
                        </p>
                        <div class="grid-3">
                    {}
                        </div>
                    </div>
                </div>"#,
        tips,
        icon(Icon::AlertTriangle, "text-warning"),
        prevention
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_parsing_falls_back_to_eco_practices() {
        assert_eq!(AwarenessTab::from_query(None), AwarenessTab::EcoPractices);
        assert_eq!(AwarenessTab::from_query(Some("nope")), AwarenessTab::EcoPractices);
        assert_eq!(
            AwarenessTab::from_query(Some("health-hygiene")),
            AwarenessTab::HealthHygiene
        );
    }

    #[test]
    fn test_only_selected_panel_is_rendered() {
        let html = render(AwarenessTab::BirdSanctuary);
        assert!(html.contains(r#"class="tab active" role="tab" aria-selected="true">Bird Sanctuary"#));
        assert!(html.contains("Uppalapadu Bird Sanctuary"));
        assert!(html.contains("How You Can Help"));
        assert!(!html.contains("Waste Segregation"));
    }

    #[test]
    fn test_eco_tab_lists_every_tip() {
        let html = render(AwarenessTab::EcoPractices);
        for topic in ECO_TOPICS {
            for tip in topic.tips {
                assert!(html.contains(tip), "missing tip {}", tip);
            }
        }
    }

    #[test]
    fn test_health_tab_lists_prevention_facts() {
        let html = render(AwarenessTab::HealthHygiene);
        assert_eq!(html.matches("health-tip").count(), HEALTH_TIPS.len());
        assert!(html.contains("5 mins"));
        assert!(html.contains("Disease Prevention"));
    }
}
