use std::io::{self, Write};

use psych_core::models::personality::{
    ClusterKey, ClusterSelector, GENERAL_FEATURES, clusters, key_differentials,
};
use psych_core::models::route::Route;

use crate::pages::{Flow, Page};
use crate::render::{Palette, rule};

#[derive(Debug, Default)]
pub struct PersonalityPage {
    selector: ClusterSelector,
}

impl PersonalityPage {
    pub fn new(initial: Option<ClusterKey>) -> Self {
        let mut selector = ClusterSelector::new();
        if let Some(key) = initial {
            selector.select(key);
        }
        Self { selector }
    }

    pub fn selector(&self) -> &ClusterSelector {
        &self.selector
    }
}

impl Page for PersonalityPage {
    fn render(&self, palette: &Palette, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", palette.heading(Route::Personality.heading()))?;
        writeln!(out, "{}", palette.accent("General Features"))?;
        for feature in GENERAL_FEATURES {
            writeln!(out, "  - {feature}")?;
        }
        rule(out)?;
        for cluster in clusters() {
            let marker = if self.selector.selected() == Some(cluster.key) { "-" } else { "+" };
            writeln!(out, "{marker} [{}] {}", cluster.key, palette.accent(&cluster.name))?;
            writeln!(out, "    {}", palette.muted(&cluster.description))?;
        }
        if let Some(cluster) = self.selector.expanded() {
            rule(out)?;
            for disorder in &cluster.disorders {
                writeln!(out, "{}", palette.heading(&disorder.name))?;
                writeln!(out, "  {}", disorder.key_features)?;
                for t in &disorder.traits {
                    writeln!(out, "    - {t}")?;
                }
            }
        }
        rule(out)?;
        writeln!(out, "{}", palette.accent("Key Differentials"))?;
        for d in key_differentials() {
            writeln!(out, "  {}: {}", d.comparison, d.distinction)?;
        }
        Ok(())
    }

    fn handle(&mut self, input: &str) -> Flow {
        if input == "q" {
            return Flow::Quit;
        }
        match input.parse::<ClusterKey>() {
            Ok(key) => {
                self.selector.select(key);
            }
            Err(e) => tracing::debug!(error = %e, "ignored input"),
        }
        Flow::Continue
    }

    fn help(&self) -> &'static str {
        "A, B or C expands a cluster (again to collapse), q leaves"
    }
}
