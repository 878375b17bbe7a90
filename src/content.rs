// src/content.rs
// Fixed page content. Loaded once as static data, never mutated.
use crate::models::{
    Accent, Complaint, ComplaintStatus, Feature, Icon, InfoCard, NavItem, PreventionFact,
    Priority, Stat, Topic, WaterSource, WaterStatus,
};

pub const SITE_NAME: &str = "Clean Uppalapadu";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", path: "/" },
    NavItem { name: "Report Issue", path: "/report" },
    NavItem { name: "Track Complaints", path: "/track" },
    NavItem { name: "Water Quality", path: "/water-quality" },
    NavItem { name: "Awareness", path: "/awareness" },
];

pub const CONTACT_PHONE: &str = "+91 XXX XXX XXXX";
pub const CONTACT_EMAIL: &str = "support@cleanuppalapadu.org";

// Home

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: Icon::AlertCircle,
        title: "Report Issues",
        description: "Upload photos, locations, and descriptions of sanitation problems with voice support",
        accent: Accent::Primary,
    },
    Feature {
        icon: Icon::Eye,
        title: "Track Progress",
        description: "Monitor your complaint status from submission to resolution in real-time",
        accent: Accent::Secondary,
    },
    Feature {
        icon: Icon::Droplets,
        title: "Water Quality Alerts",
        description: "Get instant notifications about water quality and safe usage guidelines",
        accent: Accent::Info,
    },
    Feature {
        icon: Icon::Leaf,
        title: "Eco-Friendly Practices",
        description: "Access bilingual guides on sustainable living and environmental protection",
        accent: Accent::Success,
    },
];

pub const STATS: &[Stat] = &[
    Stat { icon: Icon::FileText, value: "500+", label: "Issues Reported" },
    Stat { icon: Icon::BarChart3, value: "85%", label: "Resolution Rate" },
    Stat { icon: Icon::MapPin, value: "12", label: "Active Zones" },
    Stat { icon: Icon::Bell, value: "1000+", label: "Active Users" },
];

// Track complaints

pub const COMPLAINTS: &[Complaint] = &[
    Complaint {
        id: "CU-2024-001",
        kind: "Stagnant Drainage",
        location: "Near Main Market",
        status: ComplaintStatus::Resolved,
        submitted: "2024-01-10",
        resolved: Some("2024-01-15"),
        priority: Priority::High,
    },
    Complaint {
        id: "CU-2024-002",
        kind: "Waste Management",
        location: "Village Square",
        status: ComplaintStatus::InProgress,
        submitted: "2024-01-12",
        resolved: None,
        priority: Priority::Medium,
    },
    Complaint {
        id: "CU-2024-003",
        kind: "Plastic Pollution",
        location: "Near Bird Sanctuary",
        status: ComplaintStatus::Submitted,
        submitted: "2024-01-14",
        resolved: None,
        priority: Priority::High,
    },
];

// Water quality

pub const WATER_SOURCES: &[WaterSource] = &[
    WaterSource {
        name: "Main Village Well",
        status: WaterStatus::Safe,
        ph: "7.2",
        last_tested: "2024-01-14",
        quality: "Good",
    },
    WaterSource {
        name: "Community Pond",
        status: WaterStatus::Warning,
        ph: "6.8",
        last_tested: "2024-01-13",
        quality: "Needs Treatment",
    },
    WaterSource {
        name: "Bird Sanctuary Water",
        status: WaterStatus::Safe,
        ph: "7.5",
        last_tested: "2024-01-15",
        quality: "Excellent",
    },
];

pub const WATER_GUIDELINES: &[InfoCard] = &[
    InfoCard {
        icon: Icon::ThermometerSun,
        title: "Boil Water Before Drinking",
        description: "Always boil water for at least 5 minutes before consumption",
    },
    InfoCard {
        icon: Icon::Droplets,
        title: "Check Water Color",
        description: "Avoid using water that appears cloudy, discolored, or has unusual odor",
    },
    InfoCard {
        icon: Icon::AlertTriangle,
        title: "Regular Testing",
        description: "Report any changes in water quality immediately to authorities",
    },
    InfoCard {
        icon: Icon::CheckCircle2,
        title: "Storage Guidelines",
        description: "Store drinking water in clean, covered containers away from sunlight",
    },
];

pub const WATER_FACTS: &[&str] = &[
    "Water testing is conducted weekly by municipal health officials",
    "SMS alerts are sent immediately if any water source quality deteriorates",
    "Report any waterborne illness cases to help track potential contamination",
    "Avoid bathing or washing in stagnant water to prevent mosquito-borne diseases",
    "Use water purification tablets when boiling is not possible",
];

// Awareness

pub const ECO_TOPICS: &[Topic] = &[
    Topic {
        icon: Icon::Recycle,
        title: "Waste Segregation",
        description: "Separate wet and dry waste. Use separate bins for biodegradable and non-biodegradable items.",
        tips: &[
            "Green bin for organic/wet waste",
            "Blue bin for recyclable materials",
            "Red bin for hazardous waste",
        ],
    },
    Topic {
        icon: Icon::Droplets,
        title: "Water Conservation",
        description: "Save water to ensure availability for future generations and reduce contamination.",
        tips: &[
            "Fix leaking taps immediately",
            "Reuse water for gardening",
            "Harvest rainwater when possible",
        ],
    },
    Topic {
        icon: Icon::TreePine,
        title: "Tree Plantation",
        description: "Plant native trees to improve air quality and provide habitat for wildlife.",
        tips: &[
            "Choose indigenous species",
            "Plant during monsoon season",
            "Maintain planted saplings",
        ],
    },
    Topic {
        icon: Icon::Trash2,
        title: "Plastic Reduction",
        description: "Minimize plastic use to protect our environment and the Bird Sanctuary.",
        tips: &[
            "Use cloth bags for shopping",
            "Avoid single-use plastics",
            "Properly dispose plastic waste",
        ],
    },
];

pub const SANCTUARY_FACTS: &[InfoCard] = &[
    InfoCard {
        icon: Icon::Bird,
        title: "Uppalapadu Bird Sanctuary",
        description: "Home to thousands of migratory birds including pelicans, painted storks, and herons.",
    },
    InfoCard {
        icon: Icon::Wind,
        title: "Environmental Impact",
        description: "Our waste management directly affects the sanctuary's ecosystem and bird health.",
    },
    InfoCard {
        icon: Icon::Users,
        title: "Community Role",
        description: "Every resident's action contributes to protecting this precious natural heritage.",
    },
];

pub const SANCTUARY_HELP: &[InfoCard] = &[
    InfoCard {
        icon: Icon::Trash2,
        title: "Proper Waste Disposal",
        description: "Keep plastic and garbage away from sanctuary areas",
    },
    InfoCard {
        icon: Icon::Droplets,
        title: "Water Quality",
        description: "Prevent contamination of water bodies near sanctuary",
    },
    InfoCard {
        icon: Icon::Wind,
        title: "Minimize Disturbance",
        description: "Avoid loud noises and maintain peaceful environment",
    },
    InfoCard {
        icon: Icon::Users,
        title: "Spread Awareness",
        description: "Educate visitors and tourists about conservation",
    },
];

pub const HEALTH_TIPS: &[&str] = &[
    "Eliminate standing water to prevent mosquito breeding",
    "Maintain proper drainage around your home",
    "Use mosquito nets and repellents during peak seasons",
    "Ensure proper ventilation in living spaces",
    "Keep surroundings clean and free from garbage",
    "Wash hands regularly with soap and clean water",
];

pub const PREVENTION_FACTS: &[PreventionFact] = &[
    PreventionFact { value: "5 mins", label: "Boil water before drinking" },
    PreventionFact { value: "Daily", label: "Check for standing water" },
    PreventionFact { value: "Weekly", label: "Clean drainage systems" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::is_complaint_id;

    #[test]
    fn test_mock_complaint_ids_are_well_formed() {
        assert_eq!(COMPLAINTS.len(), 3);
        for complaint in COMPLAINTS {
            assert!(is_complaint_id(complaint.id), "bad id {}", complaint.id);
        }
    }

    #[test]
    fn test_only_resolved_complaints_carry_resolution_date() {
        for complaint in COMPLAINTS {
            assert_eq!(
                complaint.resolved.is_some(),
                complaint.status == ComplaintStatus::Resolved,
                "{}",
                complaint.id
            );
        }
    }

    #[test]
    fn test_nav_table_matches_route_table() {
        let paths: Vec<&str> = NAV_ITEMS.iter().map(|item| item.path).collect();
        assert_eq!(
            paths,
            vec!["/", "/report", "/track", "/water-quality", "/awareness"]
        );
    }

    #[test]
    fn test_every_topic_has_tips() {
        assert!(ECO_TOPICS.iter().all(|topic| topic.tips.len() == 3));
    }
}
