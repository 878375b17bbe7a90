// src/templates/icons.rs
use crate::models::Icon;

pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::AlertCircle => "⚠️",
        Icon::AlertTriangle => "🔶",
        Icon::ArrowRight => "→",
        Icon::BarChart3 => "📊",
        Icon::Bell => "🔔",
        Icon::Bird => "🐦",
        Icon::Camera => "📷",
        Icon::CheckCircle2 => "✅",
        Icon::Clock => "🕒",
        Icon::Droplets => "💧",
        Icon::Eye => "👁️",
        Icon::FileText => "📄",
        Icon::Info => "ℹ️",
        Icon::Leaf => "🍃",
        Icon::Mail => "✉️",
        Icon::MapPin => "📍",
        Icon::Menu => "☰",
        Icon::Mic => "🎤",
        Icon::Phone => "📞",
        Icon::Recycle => "♻️",
        Icon::Search => "🔍",
        Icon::Send => "📨",
        Icon::ThermometerSun => "🌡️",
        Icon::Trash2 => "🗑️",
        Icon::TreePine => "🌲",
        Icon::Upload => "📤",
        Icon::Users => "👥",
        Icon::Wind => "🌬️",
    }
}

/// `<span>` wrapping the glyph, hidden from screen readers.
pub fn icon(icon: Icon, class: &str) -> String {
    format!(
        r#"<span class="icon {}" aria-hidden="true">{}</span>"#,
        class,
        glyph(icon)
    )
}
