//! Fixed option tables behind the site's select boxes.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub key: &'static str,
    pub label: &'static str,
    /// Value reported downstream when it differs from the label.
    pub value: Option<&'static str>,
}

impl SelectOption {
    const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label, value: None }
    }

    const fn valued(key: &'static str, label: &'static str, value: &'static str) -> Self {
        Self { key, label, value: Some(value) }
    }

    pub fn resolved(&self) -> &'static str {
        self.value.unwrap_or(self.label)
    }
}

pub fn resolve(table: &[SelectOption], key: &str) -> Option<SelectOption> {
    table.iter().find(|option| option.key == key).copied()
}

pub const ROLES: &[SelectOption] = &[
    SelectOption::new("founder", "Founder / CEO"),
    SelectOption::new("cto", "CTO / Engineering Lead"),
    SelectOption::new("product", "Product Manager"),
    SelectOption::new("marketing", "Marketing Lead"),
    SelectOption::new("other", "Other"),
];

pub const COMPANY_SIZES: &[SelectOption] = &[
    SelectOption::valued("1-10", "1-10 employees", "startup"),
    SelectOption::valued("11-50", "11-50 employees", "small"),
    SelectOption::valued("51-200", "51-200 employees", "mid-market"),
    SelectOption::valued("201-1000", "201-1000 employees", "growth"),
    SelectOption::valued("1000+", "1000+ employees", "enterprise"),
];

pub const INDUSTRIES: &[SelectOption] = &[
    SelectOption::new("saas", "SaaS"),
    SelectOption::new("fintech", "Fintech"),
    SelectOption::new("healthtech", "Healthtech"),
    SelectOption::new("ecommerce", "E-commerce"),
    SelectOption::new("marketplace", "Marketplace"),
    SelectOption::new("edtech", "Edtech"),
    SelectOption::new("other", "Other"),
];

pub const PERSONAS: &[SelectOption] = &[
    SelectOption::new("all", "Everyone"),
    SelectOption::new("founder", "Founders"),
    SelectOption::new("cto", "CTOs & Tech Leads"),
    SelectOption::new("product", "Product Teams"),
];

pub const MONTHS: &[SelectOption] = &[
    SelectOption::new("all", "Any month"),
    SelectOption::new("1", "January"),
    SelectOption::new("2", "February"),
    SelectOption::new("3", "March"),
    SelectOption::new("4", "April"),
    SelectOption::new("5", "May"),
    SelectOption::new("6", "June"),
    SelectOption::new("7", "July"),
    SelectOption::new("8", "August"),
    SelectOption::new("9", "September"),
    SelectOption::new("10", "October"),
    SelectOption::new("11", "November"),
    SelectOption::new("12", "December"),
];

pub const LOCATIONS: &[SelectOption] = &[
    SelectOption::new("all", "All formats"),
    SelectOption::new("in-person", "In person"),
    SelectOption::new("hybrid", "Hybrid"),
    SelectOption::new("virtual", "Virtual"),
];

pub const TOPICS: &[SelectOption] = &[
    SelectOption::new("all", "All topics"),
    SelectOption::new("growth", "Growth"),
    SelectOption::new("analytics", "Analytics"),
    SelectOption::new("product", "Product"),
    SelectOption::new("engineering", "Engineering"),
    SelectOption::new("ai", "AI"),
];

pub const SERVICES: &[SelectOption] = &[
    SelectOption::new("conversion", "Conversion optimisation"),
    SelectOption::new("product", "Product design"),
    SelectOption::new("engineering", "Engineering"),
    SelectOption::new("analytics", "Analytics & tracking"),
    SelectOption::new("other", "Something else"),
];
