//! Conversion audit: a fixed checklist, scoring, and the business profile
//! that gates the results view.

pub mod profile;
pub mod score;
pub mod session;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuditError {
    #[error("No checklist item with id {0}")]
    UnknownItem(String),

    #[error("Category {0} has no items")]
    EmptyCategory(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown {field} option: {key}")]
    UnknownOption { field: &'static str, key: String },

    #[error("Results are only available after the checklist has been submitted")]
    InvalidTransition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditItem {
    pub id: String,
    pub category: String,
    pub item: String,
    pub priority: Priority,
    pub impact: String,
    pub checked: bool,
}

impl AuditItem {
    pub fn new(category: &str, item: &str, priority: Priority, impact: &str) -> Self {
        Self {
            id: format!("{}-{}", category, item),
            category: category.to_string(),
            item: item.to_string(),
            priority,
            impact: impact.to_string(),
            checked: false,
        }
    }
}

type ItemRow = (&'static str, Priority, &'static str);

const CHECKLIST: &[(&str, [ItemRow; 5])] = &[
    (
        "Landing Page",
        [
            ("Headline states the outcome, not the feature", Priority::High, "+10-30% conversion"),
            ("Single primary call to action above the fold", Priority::High, "+15-25% click-through"),
            ("Page loads in under 3 seconds on mobile", Priority::High, "-20% bounce rate"),
            ("Visuals show the product in use", Priority::Medium, "+5-10% engagement"),
            ("Copy addresses the top three objections", Priority::Medium, "+5-15% conversion"),
        ],
    ),
    (
        "Forms & Signup",
        [
            ("Signup asks for five fields or fewer", Priority::High, "+20-50% completion"),
            ("Inline validation with clear error messages", Priority::Medium, "+10-20% completion"),
            ("Social or SSO signup option", Priority::Medium, "+10-15% signups"),
            ("Progress indicator on multi-step forms", Priority::Low, "+5-10% completion"),
            ("Privacy note next to the email field", Priority::Low, "+3-5% trust"),
        ],
    ),
    (
        "Trust & Social Proof",
        [
            ("Customer logos near the primary call to action", Priority::High, "+10-15% conversion"),
            ("Testimonials with names and photos", Priority::Medium, "+5-15% trust"),
            ("Case study with concrete numbers", Priority::Medium, "+10% sales-qualified leads"),
            ("Security and compliance badges visible", Priority::Low, "+5% enterprise conversion"),
            ("Review site ratings linked", Priority::Low, "+3-8% trust"),
        ],
    ),
    (
        "Pricing",
        [
            ("Pricing page is public", Priority::High, "+10-20% qualified traffic"),
            ("Recommended plan is highlighted", Priority::Medium, "+10-15% plan uptake"),
            ("Annual discount shown next to monthly price", Priority::Medium, "+5-10% annual plans"),
            ("FAQ answers billing questions", Priority::Low, "-10% support tickets"),
            ("Free trial or money-back guarantee stated", Priority::High, "+15-30% trial starts"),
        ],
    ),
    (
        "Analytics & Tracking",
        [
            ("Conversion events tracked end to end", Priority::High, "Baseline for every test"),
            ("Funnel drop-off reviewed monthly", Priority::Medium, "+5-10% funnel efficiency"),
            ("UTM conventions documented", Priority::Low, "Cleaner attribution"),
            ("A/B testing process in place", Priority::Medium, "+10-25% over a year"),
            ("Session recordings on key pages", Priority::Low, "Faster UX fixes"),
        ],
    ),
];

/// The reference checklist: five categories of five items, all unchecked.
pub fn default_checklist() -> Vec<AuditItem> {
    CHECKLIST
        .iter()
        .flat_map(|(category, items)| {
            items
                .iter()
                .map(move |(item, priority, impact)| AuditItem::new(category, item, *priority, impact))
        })
        .collect()
}
