use std::io::{self, Write};

use psych_core::models::glossary::{self, CATEGORIES, GlossaryTerm};
use psych_core::models::route::Route;

use crate::render::{Palette, rule};

pub fn write_glossary(
    palette: &Palette,
    terms: &[GlossaryTerm],
    query: &str,
    category: &str,
    out: &mut dyn Write,
) -> io::Result<()> {
    if !CATEGORIES.contains(&category) {
        tracing::warn!(category, "unknown glossary category");
    }
    let found = glossary::filter(terms, query, category);

    writeln!(out, "{}", palette.heading(Route::Glossary.heading()))?;
    writeln!(out, "{}", palette.muted(&format!("Categories: {}", CATEGORIES.join(", "))))?;
    rule(out)?;
    if found.is_empty() {
        writeln!(out, "No terms found matching your search.")?;
        return Ok(());
    }
    for term in &found {
        writeln!(out, "{}  {}", palette.accent(&term.term), palette.muted(&format!("[{}]", term.category)))?;
        writeln!(out, "  {}", term.definition)?;
    }
    rule(out)?;
    writeln!(out, "Showing {} of {} terms", found.len(), terms.len())
}
