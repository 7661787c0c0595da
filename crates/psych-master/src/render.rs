use std::io::{self, Write};

use crossterm::style::{Color, Stylize, style};

use psych_criteria::scoring::{ClusterCount, Outcome, Verdict};
use psych_settings::Theme;

/// Terminal colours for the active theme. A plain palette passes text
/// through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    theme: Theme,
    styled: bool,
}

struct Colors {
    heading: Color,
    accent: Color,
    good: Color,
    bad: Color,
    muted: Color,
}

const LIGHT: Colors = Colors {
    heading: Color::DarkBlue,
    accent: Color::DarkCyan,
    good: Color::DarkGreen,
    bad: Color::DarkRed,
    muted: Color::DarkGrey,
};

const DARK: Colors = Colors {
    heading: Color::Cyan,
    accent: Color::Magenta,
    good: Color::Green,
    bad: Color::Yellow,
    muted: Color::Grey,
};

impl Palette {
    pub fn new(theme: Theme, styled: bool) -> Self {
        Self { theme, styled }
    }

    pub fn plain() -> Self {
        Self::new(Theme::default(), false)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    fn colors(&self) -> &'static Colors {
        match self.theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.styled {
            return text.to_string();
        }
        let styled = style(text).with(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }

    pub fn heading(&self, text: &str) -> String {
        self.paint(text, self.colors().heading, true)
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, self.colors().accent, false)
    }

    pub fn good(&self, text: &str) -> String {
        self.paint(text, self.colors().good, true)
    }

    pub fn bad(&self, text: &str) -> String {
        self.paint(text, self.colors().bad, true)
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, self.colors().muted, false)
    }
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// `Inattention: 3/9 (need ≥6)`
pub fn count_line(count: &ClusterCount) -> String {
    match count.minimum {
        Some(min) => format!("{}: {}/{} (need ≥{min})", count.name, count.selected, count.total),
        None => format!("{}: {}/{}", count.name, count.selected, count.total),
    }
}

pub fn write_verdict(palette: &Palette, verdict: &Verdict, out: &mut dyn Write) -> io::Result<()> {
    for count in &verdict.counts {
        let line = count_line(count);
        let line = match (count.minimum, count.is_met()) {
            (Some(_), true) => palette.good(&line),
            (Some(_), false) => palette.muted(&line),
            (None, _) => palette.accent(&line),
        };
        writeln!(out, "  {line}")?;
    }
    let message = match verdict.outcome {
        Outcome::Pending => palette.muted(&verdict.message),
        Outcome::Met { .. } => palette.good(&verdict.message),
        Outcome::NotMet { .. } => palette.bad(&verdict.message),
        Outcome::Predominant { .. } | Outcome::Mixed => palette.accent(&verdict.message),
    };
    writeln!(out, "Result: {message}")
}

pub fn rule(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(60))
}
