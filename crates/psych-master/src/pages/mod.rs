//! Line-driven page sessions.
//!
//! Each interactive page keeps its own state and is discarded when the
//! session ends, so every visit starts fresh.

pub mod cases;
pub mod checklist;
pub mod glossary;
pub mod personality;
pub mod quiz;
pub mod settings;

use std::io::{self, BufRead, Write};

use psych_core::models::route::Route;

use crate::render::{Palette, rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub trait Page {
    fn render(&self, palette: &Palette, out: &mut dyn Write) -> io::Result<()>;

    /// React to one trimmed input line.
    fn handle(&mut self, input: &str) -> Flow;

    fn help(&self) -> &'static str;
}

/// Render, prompt, read a line, handle it; until the page quits or input
/// runs out.
pub fn run_page(
    page: &mut dyn Page,
    palette: &Palette,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> io::Result<()> {
    loop {
        page.render(palette, out)?;
        writeln!(out, "{}", palette.muted(page.help()))?;
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        if page.handle(line.trim()) == Flow::Quit {
            return Ok(());
        }
    }
}

/// The landing page: every route with its summary.
pub fn write_routes(palette: &Palette, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", palette.heading(Route::Home.heading()))?;
    writeln!(out, "{}", Route::Home.summary())?;
    rule(out)?;
    for route in Route::ALL.into_iter().skip(1) {
        writeln!(
            out,
            "{:<13} {} {}",
            route.path(),
            palette.accent(&format!("{:<12}", route.nav_label())),
            route.summary()
        )?;
    }
    Ok(())
}
