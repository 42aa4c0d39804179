use super::profile::{BusinessProfile, ResolvedProfile};
use super::score::{Checklist, ScoreBand};
use super::{AuditError, AuditItem, Priority};
use serde_json::{json, Value};

pub const AUDIT_COMPLETED_EVENT: &str = "conversion_audit_completed";

/// Fire-and-forget product analytics.
pub trait Analytics {
    fn track(&self, event: &str, props: Value);
}

/// Writes tracked events to the browser console through `log`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogAnalytics;

impl Analytics for LogAnalytics {
    fn track(&self, event: &str, props: Value) {
        log::info!("track {} {}", event, props);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryScore {
    pub category: String,
    /// `None` when the category has no items.
    pub score: Option<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditReport {
    pub overall: u8,
    pub band: ScoreBand,
    pub categories: Vec<CategoryScore>,
    pub quick_wins: Vec<AuditItem>,
    pub growth_opportunities: Vec<AuditItem>,
    pub profile: ResolvedProfile,
}

impl AuditReport {
    pub fn build(checklist: &Checklist, profile: ResolvedProfile) -> Self {
        let categories = checklist
            .categories()
            .into_iter()
            .map(|category| CategoryScore {
                category: category.to_string(),
                score: checklist.category_score(category).ok(),
            })
            .collect();
        let unchecked = |priority| {
            checklist
                .priority_items(priority)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        };

        Self {
            overall: checklist.overall_score(),
            band: checklist.band(),
            categories,
            quick_wins: unchecked(Priority::High),
            growth_opportunities: unchecked(Priority::Medium),
            profile,
        }
    }

    fn analytics_props(&self) -> Value {
        json!({
            "industry": self.profile.industry.resolved(),
            "companySize": self.profile.company_size.resolved(),
            "role": self.profile.role.resolved(),
            "score": self.overall,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuditStage {
    Checklist,
    Results(AuditReport),
}

/// One visitor's pass through the audit. Nothing here outlives the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditSession {
    pub profile: BusinessProfile,
    checklist: Checklist,
    stage: AuditStage,
}

impl Default for AuditSession {
    fn default() -> Self {
        Self::new(Checklist::default())
    }
}

impl AuditSession {
    pub fn new(checklist: Checklist) -> Self {
        Self {
            profile: BusinessProfile::default(),
            checklist,
            stage: AuditStage::Checklist,
        }
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn stage(&self) -> &AuditStage {
        &self.stage
    }

    pub fn report(&self) -> Option<&AuditReport> {
        match &self.stage {
            AuditStage::Results(report) => Some(report),
            AuditStage::Checklist => None,
        }
    }

    /// Items can only be changed while the checklist is showing.
    pub fn toggle(&mut self, id: &str) -> Result<(), AuditError> {
        match self.stage {
            AuditStage::Checklist => self.checklist.toggle(id),
            AuditStage::Results(_) => Err(AuditError::InvalidTransition),
        }
    }

    /// Validates the profile, scores the checklist and switches to results.
    /// On any validation failure the session stays on the checklist and
    /// nothing is tracked.
    pub fn generate_results(&mut self, analytics: &dyn Analytics) -> Result<&AuditReport, AuditError> {
        if matches!(self.stage, AuditStage::Results(_)) {
            return Err(AuditError::InvalidTransition);
        }
        let profile = self.profile.validate().map_err(|err| {
            log::warn!("Audit results refused: {}", err);
            err
        })?;

        let report = AuditReport::build(&self.checklist, profile);
        log::info!(
            "Audit results for {}: {}% ({})",
            report.profile.business_name,
            report.overall,
            report.band
        );
        analytics.track(AUDIT_COMPLETED_EVENT, report.analytics_props());

        self.stage = AuditStage::Results(report);
        self.report().ok_or(AuditError::InvalidTransition)
    }

    /// Back to editing. Checked items and profile are kept.
    pub fn back_to_checklist(&mut self) {
        self.stage = AuditStage::Checklist;
    }
}
