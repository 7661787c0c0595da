use std::io::{self, Write};

use psych_criteria::Criteria;
use psych_criteria::selection::SelectionState;

use crate::pages::{Flow, Page};
use crate::render::{Palette, checkbox, rule, write_verdict};

/// A symptom checklist with its live verdict.
pub struct ChecklistPage {
    criteria: Box<dyn Criteria>,
    selection: SelectionState,
}

impl ChecklistPage {
    pub fn new(criteria: Box<dyn Criteria>) -> Self {
        Self {
            criteria,
            selection: SelectionState::new(),
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Toggle by 1-based position in the catalog, or by symptom id. Ids
    /// outside the catalog are kept in the selection but never counted.
    pub fn toggle(&mut self, input: &str) {
        let id = match input.parse::<usize>() {
            Ok(n) => {
                let symptoms = self.criteria.symptoms();
                match n.checked_sub(1).and_then(|i| symptoms.get(i)) {
                    Some(symptom) => symptom.id.clone(),
                    None => {
                        tracing::debug!(position = n, "no symptom at position");
                        return;
                    }
                }
            }
            Err(_) => {
                if let Err(e) = self.criteria.find_symptom(input) {
                    tracing::warn!(error = %e, "toggling id outside the catalog");
                }
                input.to_string()
            }
        };
        let selected = self.selection.toggle(&id);
        tracing::debug!(criteria = self.criteria.id(), symptom = %id, selected, "symptom toggled");
    }
}

impl Page for ChecklistPage {
    fn render(&self, palette: &Palette, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", palette.heading(self.criteria.name()))?;
        let mut position = 0;
        for cluster in self.criteria.clusters() {
            let title = match cluster.minimum {
                Some(min) => format!("{} (need ≥{min})", cluster.name),
                None => cluster.name.clone(),
            };
            writeln!(out, "{}", palette.accent(&title))?;
            for symptom in &cluster.symptoms {
                position += 1;
                let checked = self.selection.contains(&symptom.id);
                writeln!(out, "  {} {position:>2}. {}", checkbox(checked), symptom.label)?;
                if let Some(description) = &symptom.description {
                    writeln!(out, "         {}", palette.muted(description))?;
                }
            }
        }
        rule(out)?;
        write_verdict(palette, &self.criteria.evaluate(&self.selection), out)
    }

    fn handle(&mut self, input: &str) -> Flow {
        match input {
            "q" => Flow::Quit,
            "c" => {
                self.selection.clear();
                tracing::debug!(criteria = self.criteria.id(), "selection cleared");
                Flow::Continue
            }
            "" => Flow::Continue,
            other => {
                self.toggle(other);
                Flow::Continue
            }
        }
    }

    fn help(&self) -> &'static str {
        "number or id toggles a symptom, c clears, q leaves"
    }
}
