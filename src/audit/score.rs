use super::{default_checklist, AuditError, AuditItem, Priority};
use std::fmt;

/// Qualitative reading of an overall score. Bands are inclusive on the low end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            40..=59 => ScoreBand::Fair,
            _ => ScoreBand::NeedsWork,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::NeedsWork => "Needs Work",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Integer percentage, rounded half up. `total` must be non-zero.
fn percent(checked: usize, total: usize) -> u8 {
    ((200 * checked + total) / (2 * total)) as u8
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checklist {
    items: Vec<AuditItem>,
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new(default_checklist())
    }
}

impl Checklist {
    pub fn new(items: Vec<AuditItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[AuditItem] {
        &self.items
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id && item.checked)
    }

    pub fn toggle(&mut self, id: &str) -> Result<(), AuditError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| AuditError::UnknownItem(id.to_string()))?;
        item.checked = !item.checked;
        Ok(())
    }

    /// Category names in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.category.as_str()) {
                categories.push(&item.category);
            }
        }
        categories
    }

    pub fn items_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a AuditItem> + 'a {
        self.items.iter().filter(move |item| item.category == category)
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked).count()
    }

    /// Share of all items checked. An empty checklist scores 0.
    pub fn overall_score(&self) -> u8 {
        if self.items.is_empty() {
            return 0;
        }
        percent(self.checked_count(), self.items.len())
    }

    pub fn category_score(&self, category: &str) -> Result<u8, AuditError> {
        let (total, checked) = self
            .items_in(category)
            .fold((0, 0), |(total, checked), item| {
                (total + 1, checked + usize::from(item.checked))
            });
        if total == 0 {
            return Err(AuditError::EmptyCategory(category.to_string()));
        }
        Ok(percent(checked, total))
    }

    /// Unchecked items of `priority`, in checklist order.
    pub fn priority_items(&self, priority: Priority) -> Vec<&AuditItem> {
        self.items
            .iter()
            .filter(|item| item.priority == priority && !item.checked)
            .collect()
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.overall_score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn check_first(checklist: &mut Checklist, n: usize) {
        let ids: Vec<String> = checklist.items().iter().take(n).map(|i| i.id.clone()).collect();
        for id in ids {
            checklist.toggle(&id).unwrap();
        }
    }

    #[test]
    fn overall_score_counts_checked_items() {
        let mut checklist = Checklist::default();
        assert_eq!(checklist.overall_score(), 0);

        check_first(&mut checklist, 13);
        assert_eq!(checklist.overall_score(), 52);

        let mut full = Checklist::default();
        check_first(&mut full, 25);
        assert_eq!(full.overall_score(), 100);
    }

    #[test]
    fn category_score_rounds() {
        let mut checklist = Checklist::new(vec![
            AuditItem::new("Copy", "one", Priority::High, ""),
            AuditItem::new("Copy", "two", Priority::Low, ""),
            AuditItem::new("Copy", "three", Priority::Low, ""),
            AuditItem::new("Forms", "four", Priority::Low, ""),
        ]);
        checklist.toggle("Copy-one").unwrap();
        assert_eq!(checklist.category_score("Copy"), Ok(33));

        checklist.toggle("Copy-two").unwrap();
        assert_eq!(checklist.category_score("Copy"), Ok(67));
        assert_eq!(checklist.category_score("Forms"), Ok(0));
    }

    #[test]
    fn half_rounds_up() {
        let mut checklist = Checklist::new(vec![
            AuditItem::new("A", "x", Priority::Low, ""),
            AuditItem::new("A", "y", Priority::Low, ""),
            AuditItem::new("A", "z", Priority::Low, ""),
            AuditItem::new("A", "w", Priority::Low, ""),
            AuditItem::new("A", "v", Priority::Low, ""),
            AuditItem::new("A", "u", Priority::Low, ""),
            AuditItem::new("A", "t", Priority::Low, ""),
            AuditItem::new("A", "s", Priority::Low, ""),
        ]);
        // 1/8 = 12.5%
        checklist.toggle("A-x").unwrap();
        assert_eq!(checklist.overall_score(), 13);
    }

    #[test]
    fn empty_category_is_an_error() {
        let checklist = Checklist::default();
        assert_eq!(
            checklist.category_score("Pricing Strategy"),
            Err(AuditError::EmptyCategory("Pricing Strategy".to_string()))
        );
    }

    #[test]
    fn toggle_twice_is_identity() {
        let original = Checklist::default();
        let mut checklist = original.clone();
        let id = original.items()[7].id.clone();

        checklist.toggle(&id).unwrap();
        assert!(checklist.is_checked(&id));
        assert_eq!(checklist.checked_count(), 1);

        checklist.toggle(&id).unwrap();
        assert_eq!(checklist, original);
    }

    #[test]
    fn toggle_unknown_id_fails_without_change() {
        let mut checklist = Checklist::default();
        let before = checklist.clone();
        assert_eq!(
            checklist.toggle("Nope-nothing"),
            Err(AuditError::UnknownItem("Nope-nothing".to_string()))
        );
        assert_eq!(checklist, before);
    }

    #[test]
    fn priority_items_keep_list_order_and_skip_checked() {
        let mut checklist = Checklist::default();
        let high: Vec<String> = checklist
            .priority_items(Priority::High)
            .iter()
            .map(|i| i.id.clone())
            .collect();
        assert!(high.len() > 2);

        checklist.toggle(&high[0]).unwrap();
        let remaining: Vec<String> = checklist
            .priority_items(Priority::High)
            .iter()
            .map(|i| i.id.clone())
            .collect();
        assert_eq!(remaining, high[1..].to_vec());

        let positions: Vec<usize> = remaining
            .iter()
            .map(|id| checklist.items().iter().position(|i| &i.id == id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn band_boundaries() {
        let cases = [
            (100, ScoreBand::Excellent),
            (80, ScoreBand::Excellent),
            (79, ScoreBand::Good),
            (60, ScoreBand::Good),
            (59, ScoreBand::Fair),
            (40, ScoreBand::Fair),
            (39, ScoreBand::NeedsWork),
            (0, ScoreBand::NeedsWork),
        ];
        for (score, band) in cases {
            assert_eq!(ScoreBand::from_score(score), band, "score {}", score);
        }
        assert_eq!(ScoreBand::NeedsWork.to_string(), "Needs Work");
    }

    #[test]
    fn categories_in_checklist_order() {
        let checklist = Checklist::default();
        assert_eq!(
            checklist.categories(),
            vec![
                "Landing Page",
                "Forms & Signup",
                "Trust & Social Proof",
                "Pricing",
                "Analytics & Tracking"
            ]
        );
    }
}
