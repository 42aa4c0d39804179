use super::AuditError;
use crate::options::{self, SelectOption};

/// What the visitor typed and picked before asking for results.
/// Select fields hold option keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BusinessProfile {
    pub business_name: String,
    pub website_url: String,
    pub industry: String,
    pub company_size: String,
    pub role: String,
}

/// A profile whose selections all resolved against their option tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedProfile {
    pub business_name: String,
    pub website_url: String,
    pub industry: SelectOption,
    pub company_size: SelectOption,
    pub role: SelectOption,
}

impl BusinessProfile {
    pub fn validate(&self) -> Result<ResolvedProfile, AuditError> {
        let business_name = required("businessName", &self.business_name)?;
        let website_url = required("websiteUrl", &self.website_url)?;
        let industry = required("industry", &self.industry)?;
        let company_size = required("companySize", &self.company_size)?;
        let role = required("role", &self.role)?;

        Ok(ResolvedProfile {
            business_name: business_name.to_string(),
            website_url: website_url.to_string(),
            role: lookup("role", options::ROLES, role)?,
            company_size: lookup("companySize", options::COMPANY_SIZES, company_size)?,
            industry: lookup("industry", options::INDUSTRIES, industry)?,
        })
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, AuditError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AuditError::MissingField(field));
    }
    Ok(value)
}

fn lookup(field: &'static str, table: &[SelectOption], key: &str) -> Result<SelectOption, AuditError> {
    options::resolve(table, key).ok_or_else(|| AuditError::UnknownOption {
        field,
        key: key.to_string(),
    })
}

#[cfg(test)]
pub(crate) fn sample_profile() -> BusinessProfile {
    BusinessProfile {
        business_name: "Northwind Analytics".to_string(),
        website_url: "https://northwind.example".to_string(),
        industry: "saas".to_string(),
        company_size: "11-50".to_string(),
        role: "founder".to_string(),
    }
}
