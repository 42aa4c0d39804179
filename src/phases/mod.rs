//! The four-stage engagement cycle shown as a wheel on the services pages.

pub mod layout;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Collection,
    Analysis,
    Implementation,
    Followup,
}

impl Phase {
    /// Fixed cyclic order around the wheel, starting at the top.
    pub const ALL: [Phase; 4] = [
        Phase::Collection,
        Phase::Analysis,
        Phase::Implementation,
        Phase::Followup,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Phase::Collection => "collection",
            Phase::Analysis => "analysis",
            Phase::Implementation => "implementation",
            Phase::Followup => "followup",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::Collection => "Data Collection",
            Phase::Analysis => "Analysis",
            Phase::Implementation => "Implementation",
            Phase::Followup => "Follow-up",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Phase::Collection => "📥",
            Phase::Analysis => "🔍",
            Phase::Implementation => "🛠",
            Phase::Followup => "🔁",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Phase::Collection => "#3B82F6",
            Phase::Analysis => "#8B5CF6",
            Phase::Implementation => "#10B981",
            Phase::Followup => "#F59E0B",
        }
    }

    pub fn next(self) -> Phase {
        let index = Phase::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Phase::ALL[(index + 1) % Phase::ALL.len()]
    }

    pub fn details(self, plan: &ImplementationPlan) -> PhaseDetails {
        let (summary, items) = match self {
            Phase::Collection => ("Where the numbers come from", plan.data_sources.clone()),
            Phase::Analysis => ("What we look for", plan.focus_areas.clone()),
            Phase::Implementation => ("What ships", plan.steps.clone()),
            Phase::Followup => (
                "How we keep it working",
                vec![format!("Check-ins {}", plan.review_cadence)],
            ),
        };
        PhaseDetails {
            phase: self,
            title: self.name().to_string(),
            summary: summary.to_string(),
            items,
            duration: plan.durations.get(self).map(str::to_string),
        }
    }
}

/// Weeks (or any free-text duration) per phase.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PhaseDurations {
    pub collection: Option<String>,
    pub analysis: Option<String>,
    pub implementation: Option<String>,
    pub followup: Option<String>,
}

impl PhaseDurations {
    pub fn get(&self, phase: Phase) -> Option<&str> {
        match phase {
            Phase::Collection => self.collection.as_deref(),
            Phase::Analysis => self.analysis.as_deref(),
            Phase::Implementation => self.implementation.as_deref(),
            Phase::Followup => self.followup.as_deref(),
        }
    }
}

/// Engagement plan the wheel is drawn from.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationPlan {
    pub data_sources: Vec<String>,
    pub focus_areas: Vec<String>,
    pub steps: Vec<String>,
    pub review_cadence: String,
    #[serde(default)]
    pub durations: PhaseDurations,
}

impl ImplementationPlan {
    /// The plan shown on the conversion services page.
    pub fn conversion_default() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            data_sources: owned(&["Product analytics", "Session recordings", "Sales call notes"]),
            focus_areas: owned(&["Funnel drop-off", "Message clarity", "Form friction"]),
            steps: owned(&["Prioritised experiment backlog", "Page and form rebuilds", "Tracking fixes"]),
            review_cadence: "every two weeks".to_string(),
            durations: PhaseDurations {
                collection: Some("1 week".to_string()),
                analysis: Some("1 week".to_string()),
                implementation: Some("4-6 weeks".to_string()),
                followup: Some("ongoing".to_string()),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhaseDetails {
    pub phase: Phase,
    pub title: String,
    pub summary: String,
    pub items: Vec<String>,
    pub duration: Option<String>,
}

/// At most one active phase. Selecting the active phase clears it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhaseSelection(Option<Phase>);

impl PhaseSelection {
    pub fn active(self) -> Option<Phase> {
        self.0
    }

    pub fn is_active(self, phase: Phase) -> bool {
        self.0 == Some(phase)
    }

    pub fn toggle(self, phase: Phase) -> Self {
        if self.is_active(phase) {
            PhaseSelection(None)
        } else {
            PhaseSelection(Some(phase))
        }
    }
}
