use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "psych-master", author, version, about = "Educational reference for psychiatric diagnostic criteria", long_about = None)]
pub struct Cli {
    /// Settings file (defaults to $PSYCH_MASTER_SETTINGS, then the platform config dir)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Disable terminal colours
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List the pages in navigation order
    Routes,
    /// Open a page by path or name (e.g. /adhd, ptsd, glossary)
    Open {
        page: String,
    },
    /// Evaluate a symptom selection once and print the verdict
    Evaluate {
        /// Criteria set: adhd, ptsd or psychosis
        criteria: String,
        /// Symptom ids, toggled in order
        ids: Vec<String>,
        /// Print the verdict as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive symptom checklist
    Checklist {
        /// Criteria set: adhd, ptsd or psychosis
        criteria: String,
    },
    /// Reveal case classifications (mdd, bipolar, anxiety, sud)
    Cases {
        page: String,
    },
    /// Explore personality disorder clusters
    Personality {
        /// Cluster to expand first (A, B or C)
        cluster: Option<String>,
    },
    /// Case-based multiple-choice quiz
    Quiz,
    /// Search the glossary
    Glossary {
        /// Case-insensitive text to find in terms and definitions
        #[arg(long, short, default_value = "")]
        query: String,
        /// Category filter
        #[arg(long, short, default_value = psych_core::models::glossary::ALL)]
        category: String,
    },
    /// Show or toggle the colour theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Show,
    Toggle,
}
