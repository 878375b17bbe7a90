// src/models.rs
use serde::{Deserialize, Serialize};

pub const MAX_SEARCH_QUERY_LEN: usize = 100;

/// Pictograms used across the pages. Rendering goes through
/// `templates::icons::glyph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    AlertCircle,
    AlertTriangle,
    ArrowRight,
    BarChart3,
    Bell,
    Bird,
    Camera,
    CheckCircle2,
    Clock,
    Droplets,
    Eye,
    FileText,
    Info,
    Leaf,
    Mail,
    MapPin,
    Menu,
    Mic,
    Phone,
    Recycle,
    Search,
    Send,
    ThermometerSun,
    Trash2,
    TreePine,
    Upload,
    Users,
    Wind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
    Info,
    Success,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Primary => "text-primary",
            Accent::Secondary => "text-secondary",
            Accent::Info => "text-info",
            Accent::Success => "text-success",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub icon: Icon,
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Topic {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

/// Icon + title + description card; used for sanctuary facts,
/// help actions and water guidelines.
#[derive(Debug, Clone, Copy)]
pub struct InfoCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct PreventionFact {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintStatus {
    Submitted,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 3] = [
        ComplaintStatus::Submitted,
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComplaintStatus::Submitted => "submitted",
            ComplaintStatus::InProgress => "in-progress",
            ComplaintStatus::Resolved => "resolved",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComplaintStatus::Submitted => "Submitted",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::Resolved => "Resolved",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            ComplaintStatus::Submitted => Icon::Clock,
            ComplaintStatus::InProgress => Icon::AlertCircle,
            ComplaintStatus::Resolved => Icon::CheckCircle2,
        }
    }

    /// Colour token shared by the badge, legend and timeline.
    pub fn tone(self) -> &'static str {
        match self {
            ComplaintStatus::Submitted => "info",
            ComplaintStatus::InProgress => "warning",
            ComplaintStatus::Resolved => "success",
        }
    }

    /// Whether timeline stage `stage` (1..=3) is lit for this status.
    pub fn stage_reached(self, stage: u8) -> bool {
        match stage {
            1 => self == ComplaintStatus::Submitted,
            2 => matches!(self, ComplaintStatus::InProgress | ComplaintStatus::Resolved),
            3 => self == ComplaintStatus::Resolved,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn border_class(self) -> &'static str {
        match self {
            Priority::High => "border-destructive",
            Priority::Medium => "border-warning",
            Priority::Low => "border-muted",
        }
    }
}

/// Hard-coded complaint. Ids follow `CU-YYYY-NNN`.
#[derive(Debug, Clone, Copy)]
pub struct Complaint {
    pub id: &'static str,
    pub kind: &'static str,
    pub location: &'static str,
    pub status: ComplaintStatus,
    pub submitted: &'static str,
    pub resolved: Option<&'static str>,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterStatus {
    Safe,
    Warning,
}

impl WaterStatus {
    pub fn tone(self) -> &'static str {
        match self {
            WaterStatus::Safe => "success",
            WaterStatus::Warning => "warning",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            WaterStatus::Safe => Icon::CheckCircle2,
            WaterStatus::Warning => Icon::AlertTriangle,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WaterSource {
    pub name: &'static str,
    pub status: WaterStatus,
    pub ph: &'static str,
    pub last_tested: &'static str,
    pub quality: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Drainage,
    Waste,
    Plastic,
    Water,
    Mosquito,
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 6] = [
        IssueType::Drainage,
        IssueType::Waste,
        IssueType::Plastic,
        IssueType::Water,
        IssueType::Mosquito,
        IssueType::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            IssueType::Drainage => "drainage",
            IssueType::Waste => "waste",
            IssueType::Plastic => "plastic",
            IssueType::Water => "water",
            IssueType::Mosquito => "mosquito",
            IssueType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IssueType::Drainage => "Stagnant Drainage",
            IssueType::Waste => "Waste Management",
            IssueType::Plastic => "Plastic Pollution",
            IssueType::Water => "Water Quality",
            IssueType::Mosquito => "Mosquito Breeding",
            IssueType::Other => "Other",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub routes: Vec<&'static str>,
    pub cached_pages: u64,
}
