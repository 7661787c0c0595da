use std::io::{self, Write};

use psych_core::models::quiz::QuizNavigator;
use psych_core::models::route::Route;

use crate::pages::{Flow, Page};
use crate::render::{Palette, rule};

const LETTERS: [&str; 4] = ["a", "b", "c", "d"];

pub struct QuizPage<'a> {
    navigator: QuizNavigator<'a>,
}

impl<'a> QuizPage<'a> {
    pub fn new(navigator: QuizNavigator<'a>) -> Self {
        Self { navigator }
    }

    pub fn navigator(&self) -> &QuizNavigator<'a> {
        &self.navigator
    }
}

fn letter(index: usize) -> &'static str {
    LETTERS.get(index).copied().unwrap_or("?")
}

impl Page for QuizPage<'_> {
    fn render(&self, palette: &Palette, out: &mut dyn Write) -> io::Result<()> {
        let nav = &self.navigator;
        let question = nav.current();
        writeln!(out, "{}", palette.heading(Route::Assessment.heading()))?;
        writeln!(
            out,
            "Question {} of {}  {}",
            nav.current_index() + 1,
            nav.len(),
            palette.muted(&question.category)
        )?;
        writeln!(out, "{}", question.prompt)?;
        for (i, option) in question.options.iter().enumerate() {
            let line = format!("  {}) {option}", letter(i));
            let line = if !nav.is_revealed() {
                line
            } else if i == question.correct_index {
                palette.good(&line)
            } else if nav.selected_option() == Some(i) {
                palette.bad(&line)
            } else {
                palette.muted(&line)
            };
            writeln!(out, "{line}")?;
        }
        if let Some(correct) = nav.is_correct() {
            rule(out)?;
            if correct {
                writeln!(out, "{}", palette.good("Correct!"))?;
            } else {
                write!(out, "{}", palette.bad("Incorrect."))?;
                if let Some(answer) = question.correct_option() {
                    write!(out, " The answer is {}) {answer}", letter(question.correct_index))?;
                }
                writeln!(out)?;
            }
            writeln!(out, "Explanation: {}", question.explanation)?;
        }
        Ok(())
    }

    fn handle(&mut self, input: &str) -> Flow {
        match input {
            "q" => return Flow::Quit,
            "n" => self.navigator.next(),
            "p" => self.navigator.previous(),
            other => match LETTERS.iter().position(|l| other.eq_ignore_ascii_case(l)) {
                Some(index) => {
                    self.navigator.select_option(index);
                }
                None => tracing::debug!(input = other, "ignored input"),
            },
        }
        Flow::Continue
    }

    fn help(&self) -> &'static str {
        "a-d answers, n next, p previous, q leaves"
    }
}
