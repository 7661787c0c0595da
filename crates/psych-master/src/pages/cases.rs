use std::io::{self, Write};

use psych_core::models::case::{CaseReveal, CaseSet};

use crate::pages::{Flow, Page};
use crate::render::{Palette, rule};

pub struct CasesPage {
    set: CaseSet,
    reveal: CaseReveal,
}

impl CasesPage {
    pub fn new(set: CaseSet) -> Self {
        Self {
            set,
            reveal: CaseReveal::for_set(set),
        }
    }

    pub fn reveal(&self) -> &CaseReveal {
        &self.reveal
    }
}

impl Page for CasesPage {
    fn render(&self, palette: &Palette, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", palette.heading(self.set.route().heading()))?;
        writeln!(out, "{}", palette.accent(self.set.title()))?;
        writeln!(out, "{}", palette.muted(self.set.description()))?;
        for (i, case) in self.set.cases().iter().enumerate() {
            rule(out)?;
            writeln!(out, "Case {}", i + 1)?;
            writeln!(out, "  Symptoms: {}", case.symptoms.join(", "))?;
            for detail in &case.details {
                writeln!(out, "  {}: {}", detail.label, detail.value)?;
            }
            if self.reveal.is_revealed(i) {
                writeln!(out, "  {}", palette.good(&case.classification))?;
                writeln!(out, "  {}", case.explanation)?;
            }
            writeln!(out, "  [{}] {}", i + 1, self.reveal.button_label(i))?;
        }
        rule(out)
    }

    fn handle(&mut self, input: &str) -> Flow {
        if input == "q" {
            return Flow::Quit;
        }
        match input.parse::<usize>() {
            Ok(n) if n >= 1 => {
                self.reveal.toggle(n - 1);
            }
            _ => tracing::debug!(input, "not a case number"),
        }
        Flow::Continue
    }

    fn help(&self) -> &'static str {
        "case number shows or hides its classification, q leaves"
    }
}
