use std::io::{BufRead, Write};

use eyre::Result;

use psych_core::models::case::CaseSet;
use psych_core::models::glossary::{self, ALL};
use psych_core::models::personality::ClusterKey;
use psych_core::models::quiz::{QuizNavigator, questions};
use psych_core::models::route::Route;
use psych_criteria::require_criteria;
use psych_criteria::selection::SelectionState;
use psych_settings::{PreferenceStore, Theme, ThemeStore};

use crate::cli::{Command, ThemeAction};
use crate::pages::cases::CasesPage;
use crate::pages::checklist::ChecklistPage;
use crate::pages::glossary::write_glossary;
use crate::pages::personality::PersonalityPage;
use crate::pages::quiz::QuizPage;
use crate::pages::settings::write_theme;
use crate::pages::{run_page, write_routes};
use crate::render::{Palette, write_verdict};

/// Process-wide state: the theme and whether output is styled.
pub struct App<S> {
    themes: ThemeStore<S>,
    color: bool,
}

impl<S: PreferenceStore> App<S> {
    pub fn new(store: S, color: bool) -> Self {
        Self {
            themes: ThemeStore::load(store),
            color,
        }
    }

    pub fn theme(&self) -> Theme {
        self.themes.theme()
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.themes.theme(), self.color)
    }

    pub fn into_store(self) -> S {
        self.themes.into_store()
    }

    pub fn run(&mut self, command: Command, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(?command, "running command");
        let palette = self.palette();
        match command {
            Command::Routes => write_routes(&palette, out)?,
            Command::Open { page } => {
                let route: Route = page.parse()?;
                self.open(route, input, out)?;
            }
            Command::Evaluate { criteria, ids, json } => {
                let criteria = require_criteria(&criteria)?;
                let selection = ids
                    .iter()
                    .fold(SelectionState::new(), |selection, id| selection.toggled(id));
                let verdict = criteria.evaluate(&selection);
                if json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&verdict)?)?;
                } else {
                    writeln!(out, "{}", palette.heading(criteria.name()))?;
                    write_verdict(&palette, &verdict, out)?;
                }
            }
            Command::Checklist { criteria } => {
                let mut page = ChecklistPage::new(require_criteria(&criteria)?);
                run_page(&mut page, &palette, input, out)?;
            }
            Command::Cases { page } => {
                let set = CaseSet::try_from(page.parse::<Route>()?)?;
                run_page(&mut CasesPage::new(set), &palette, input, out)?;
            }
            Command::Personality { cluster } => {
                let initial = cluster.as_deref().map(str::parse::<ClusterKey>).transpose()?;
                run_page(&mut PersonalityPage::new(initial), &palette, input, out)?;
            }
            Command::Quiz => {
                let mut page = QuizPage::new(QuizNavigator::new(questions())?);
                run_page(&mut page, &palette, input, out)?;
            }
            Command::Glossary { query, category } => {
                write_glossary(&palette, glossary::terms(), &query, &category, out)?;
            }
            Command::Theme { action } => {
                if action == ThemeAction::Toggle {
                    self.themes.toggle();
                }
                write_theme(&self.palette(), self.themes.theme(), out)?;
            }
        }
        Ok(())
    }

    /// Visit a page from the navigation. Interactive pages start with fresh
    /// state on every visit.
    fn open(&mut self, route: Route, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(page = route.path(), "opening page");
        let command = if let Some(id) = route.criteria_id() {
            Command::Checklist {
                criteria: id.to_string(),
            }
        } else if route.case_set().is_some() {
            Command::Cases {
                page: route.path().to_string(),
            }
        } else {
            match route {
                Route::Personality => Command::Personality { cluster: None },
                Route::Assessment => Command::Quiz,
                Route::Glossary => Command::Glossary {
                    query: String::new(),
                    category: ALL.to_string(),
                },
                Route::Settings => Command::Theme {
                    action: ThemeAction::Show,
                },
                _ => Command::Routes,
            }
        };
        self.run(command, input, out)
    }
}
