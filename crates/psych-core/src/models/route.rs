use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::case::CaseSet;

/// A page in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Route {
    Home,
    Mdd,
    Bipolar,
    Psychosis,
    Anxiety,
    Ptsd,
    Adhd,
    Sud,
    Personality,
    Assessment,
    Glossary,
    Settings,
}

impl Route {
    /// Navigation order.
    pub const ALL: [Route; 12] = [
        Route::Home,
        Route::Mdd,
        Route::Bipolar,
        Route::Psychosis,
        Route::Anxiety,
        Route::Ptsd,
        Route::Adhd,
        Route::Sud,
        Route::Personality,
        Route::Assessment,
        Route::Glossary,
        Route::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Mdd => "/mdd",
            Self::Bipolar => "/bipolar",
            Self::Psychosis => "/psychosis",
            Self::Anxiety => "/anxiety",
            Self::Ptsd => "/ptsd",
            Self::Adhd => "/adhd",
            Self::Sud => "/sud",
            Self::Personality => "/personality",
            Self::Assessment => "/assessment",
            Self::Glossary => "/glossary",
            Self::Settings => "/settings",
        }
    }

    /// Short label shown in the navigation bar.
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Mdd => "MDD",
            Self::Bipolar => "Bipolar",
            Self::Psychosis => "Psychosis",
            Self::Anxiety => "Anxiety",
            Self::Ptsd => "PTSD",
            Self::Adhd => "ADHD",
            Self::Sud => "SUD",
            Self::Personality => "Personality",
            Self::Assessment => "Assessment",
            Self::Glossary => "Glossary",
            Self::Settings => "Settings",
        }
    }

    /// Page heading.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Home => "Psych Master",
            Self::Mdd => "Major Depressive Disorder (MDD)",
            Self::Bipolar => "Bipolar Disorder",
            Self::Psychosis => "Schizophrenia & Acute Psychosis",
            Self::Anxiety => "Anxiety Disorders",
            Self::Ptsd => "Post-Traumatic Stress Disorder",
            Self::Adhd => "Attention-Deficit/Hyperactivity Disorder",
            Self::Sud => "Substance Use Disorders",
            Self::Personality => "Personality Disorders",
            Self::Assessment => "Clinical Assessment",
            Self::Glossary => "Psychiatric Glossary",
            Self::Settings => "Settings",
        }
    }

    /// One-line summary used on the landing page.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Home => "Educational reference for psychiatric diagnostic criteria",
            Self::Mdd => "Learn about MDD symptom clusters, duration requirements, and red flags",
            Self::Bipolar => "Distinguish between Bipolar I & II, mania vs hypomania",
            Self::Psychosis => "Positive vs negative symptoms and acute psychosis management",
            Self::Anxiety => "GAD and Panic Disorder differentiation and assessment",
            Self::Ptsd => "Trauma response patterns and cluster mapping",
            Self::Adhd => "Inattention vs hyperactivity domains and screening",
            Self::Sud => "Alcohol and opioid withdrawal patterns and recognition",
            Self::Personality => "Cluster A/B/C overview and trait recognition",
            Self::Assessment => "Test your knowledge with clinical vignettes and case-based questions",
            Self::Glossary => "Searchable definitions of psychiatric terms",
            Self::Settings => "Choose your preferred color theme",
        }
    }

    /// Criteria set evaluated live on this page, if any.
    pub fn criteria_id(self) -> Option<&'static str> {
        match self {
            Self::Adhd => Some("adhd"),
            Self::Ptsd => Some("ptsd"),
            Self::Psychosis => Some("psychosis"),
            _ => None,
        }
    }

    /// Case studies revealed on this page, if any.
    pub fn case_set(self) -> Option<CaseSet> {
        match self {
            Self::Mdd => Some(CaseSet::Mdd),
            Self::Bipolar => Some(CaseSet::Bipolar),
            Self::Anxiety => Some(CaseSet::Anxiety),
            Self::Sud => Some(CaseSet::Sud),
            _ => None,
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nav_label())
    }
}

/// Accepts a path (`/adhd`) or a bare, case-insensitive page name (`ADHD`).
impl FromStr for Route {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(route) = Self::from_path(trimmed) {
            return Ok(route);
        }
        let name = trimmed.trim_start_matches('/');
        Self::ALL
            .into_iter()
            .find(|r| !name.is_empty() && r.nav_label().eq_ignore_ascii_case(name))
            .ok_or_else(|| CoreError::UnknownRoute(s.to_string()))
    }
}
