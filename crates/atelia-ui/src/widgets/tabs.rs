/// Plan tabs with a fixed vocabulary; unknown plans fall back to the default
#[derive(Debug, Clone)]
pub struct PlanTabs {
    plans: &'static [&'static str],
    active: &'static str,
}

impl PlanTabs {
    /// Residential interiors: priced by area or by package
    pub fn residential() -> Self {
        Self::new(&["area", "package"])
    }

    /// Product visualization: studio or editorial shots
    pub fn product() -> Self {
        Self::new(&["studio", "editorial"])
    }

    /// The first plan is the fallback
    pub fn new(plans: &'static [&'static str]) -> Self {
        Self {
            plans,
            active: plans[0],
        }
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    /// Activate the plan named by a tab's `data-plan`
    pub fn select(&mut self, plan: &str) {
        self.active = self
            .plans
            .iter()
            .copied()
            .find(|p| *p == plan)
            .unwrap_or(self.plans[0]);
    }

    /// Whether the tab or panel tagged with `plan` is active
    pub fn is_active(&self, plan: &str) -> bool {
        self.active == plan
    }
}

/// Expand/collapse button controlling a details panel
#[derive(Debug, Clone, Default)]
pub struct DisclosureToggle {
    expanded: bool,
}

impl DisclosureToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn panel_hidden(&self) -> bool {
        !self.expanded
    }

    pub fn aria_label(&self) -> &'static str {
        if self.expanded {
            "Collapse details"
        } else {
            "Expand details"
        }
    }
}
