use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::route::Route;

/// Pages that teach by revealing the classification of pre-authored cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CaseSet {
    Mdd,
    Bipolar,
    Anxiety,
    Sud,
}

/// A labelled fact shown with a case (duration, vitals, onset...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CaseDetail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CaseStudy {
    pub id: String,
    pub symptoms: Vec<String>,
    pub details: Vec<CaseDetail>,
    /// Hidden until revealed.
    pub classification: String,
    pub explanation: String,
}

fn case_study(
    id: &str,
    symptoms: &[&str],
    details: &[(&str, &str)],
    classification: &str,
    explanation: &str,
) -> CaseStudy {
    CaseStudy {
        id: id.to_string(),
        symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        details: details
            .iter()
            .map(|(label, value)| CaseDetail {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect(),
        classification: classification.to_string(),
        explanation: explanation.to_string(),
    }
}

impl CaseSet {
    pub const ALL: [CaseSet; 4] = [CaseSet::Mdd, CaseSet::Bipolar, CaseSet::Anxiety, CaseSet::Sud];

    pub fn title(self) -> &'static str {
        match self {
            Self::Mdd => "Depression Severity Sorter",
            Self::Bipolar => "Mania vs Hypomania Builder",
            Self::Anxiety => "Anxiety Differentiator",
            Self::Sud => "Withdrawal Pattern Sorter",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Mdd => "Practice identifying severity levels based on symptom presentation",
            Self::Bipolar => "Practice distinguishing between manic and hypomanic episodes",
            Self::Anxiety => "Practice distinguishing GAD, panic disorder, and medical mimics",
            Self::Sud => "Practice distinguishing withdrawal syndromes",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Self::Mdd => Route::Mdd,
            Self::Bipolar => Route::Bipolar,
            Self::Anxiety => Route::Anxiety,
            Self::Sud => Route::Sud,
        }
    }

    pub fn cases(self) -> &'static [CaseStudy] {
        match self {
            Self::Mdd => mdd_cases(),
            Self::Bipolar => bipolar_cases(),
            Self::Anxiety => anxiety_cases(),
            Self::Sud => sud_cases(),
        }
    }
}

impl TryFrom<Route> for CaseSet {
    type Error = CoreError;

    fn try_from(route: Route) -> Result<Self, Self::Error> {
        route
            .case_set()
            .ok_or_else(|| CoreError::UnknownCaseSet(route.nav_label().to_string()))
    }
}

fn mdd_cases() -> &'static [CaseStudy] {
    static CASES: std::sync::LazyLock<Vec<CaseStudy>> = std::sync::LazyLock::new(|| {
        vec![
            case_study(
                "case1",
                &["Persistent sadness", "Anhedonia", "Fatigue", "Poor concentration", "Sleep disturbance"],
                &[
                    ("Duration", "3 weeks"),
                    ("Functional Impairment", "Unable to work, withdrawing from social activities"),
                ],
                "Moderate Major Depressive Episode",
                "Patient meets criteria with core symptoms (anhedonia, depressed mood) plus additional symptoms, with significant functional impairment over 2+ weeks.",
            ),
            case_study(
                "case2",
                &["Depressed mood", "Insomnia", "Fatigue", "Guilt", "Suicidal ideation"],
                &[
                    ("Duration", "6 weeks"),
                    ("Functional Impairment", "Severe - unable to care for self, requires hospitalization"),
                ],
                "Severe Major Depressive Episode with Suicidal Ideation",
                "RED FLAG: Suicidal ideation requires immediate safety assessment. Meets criteria for severe episode with high functional impairment.",
            ),
            case_study(
                "case3",
                &["Low mood", "Decreased appetite", "Psychomotor retardation", "Worthlessness", "Delusions of guilt"],
                &[
                    ("Duration", "8 weeks"),
                    ("Functional Impairment", "Complete inability to function"),
                ],
                "Severe Major Depressive Episode with Psychotic Features",
                "RED FLAG: Psychotic features (delusions) indicate severe depression requiring intensive treatment, often antipsychotic medication.",
            ),
            case_study(
                "case4",
                &["Mild sadness", "Occasional fatigue"],
                &[
                    ("Duration", "1 week"),
                    ("Functional Impairment", "Minimal - still working and socializing"),
                ],
                "Does Not Meet MDD Criteria",
                "Insufficient symptoms, insufficient duration, and minimal functional impairment. May represent adjustment reaction or normal mood variation.",
            ),
        ]
    });
    &CASES
}

fn bipolar_cases() -> &'static [CaseStudy] {
    static CASES: std::sync::LazyLock<Vec<CaseStudy>> = std::sync::LazyLock::new(|| {
        vec![
            case_study(
                "case1",
                &[
                    "Elevated mood",
                    "Decreased need for sleep (2-3 hours)",
                    "Racing thoughts",
                    "Increased goal-directed activity",
                    "Impulsive spending",
                ],
                &[
                    ("Duration", "8 days"),
                    ("Functional Impairment", "Severe - lost job, maxed out credit cards"),
                    ("Hospitalization", "No"),
                ],
                "Manic Episode - Bipolar I Disorder",
                "Duration ≥7 days with marked functional impairment and multiple manic symptoms meets criteria for manic episode, thus Bipolar I.",
            ),
            case_study(
                "case2",
                &[
                    "Irritable mood",
                    "Grandiosity",
                    "Pressured speech",
                    "Decreased sleep",
                    "Psychotic features (believes has special powers)",
                ],
                &[
                    ("Duration", "5 days"),
                    ("Functional Impairment", "Complete inability to function"),
                    ("Hospitalization", "Yes"),
                ],
                "Manic Episode with Psychotic Features - Bipolar I",
                "Psychotic features OR hospitalization automatically qualifies as mania regardless of duration, thus Bipolar I.",
            ),
            case_study(
                "case3",
                &[
                    "Elevated mood",
                    "Increased energy",
                    "More talkative",
                    "Decreased sleep (5 hours, feels rested)",
                ],
                &[
                    ("Duration", "5 days"),
                    ("Functional Impairment", "Mild - noticeable change but still functioning at work"),
                    ("Hospitalization", "No"),
                ],
                "Hypomanic Episode - Suggests Bipolar II",
                "Duration ≥4 days with noticeable change but WITHOUT marked impairment or psychosis indicates hypomania, suggesting Bipolar II (if prior depressive episodes).",
            ),
            case_study(
                "case4",
                &[
                    "Depressed mood",
                    "Anhedonia",
                    "Fatigue",
                    "Hopelessness",
                    "Prior hypomanic episode 2 years ago",
                ],
                &[
                    ("Duration", "Current episode: 4 weeks"),
                    ("Functional Impairment", "Moderate - struggling with work"),
                    ("Hospitalization", "No"),
                ],
                "Depressive Episode in Bipolar II Disorder",
                "Current major depressive episode + history of hypomania (without mania) = Bipolar II Disorder.",
            ),
        ]
    });
    &CASES
}

fn anxiety_cases() -> &'static [CaseStudy] {
    static CASES: std::sync::LazyLock<Vec<CaseStudy>> = std::sync::LazyLock::new(|| {
        vec![
            case_study(
                "case1",
                &["Restlessness", "Fatigue", "Difficulty concentrating", "Muscle tension", "Sleep disturbance"],
                &[
                    ("Presentation", "Excessive worry about multiple life circumstances"),
                    ("Onset", "Gradual over months"),
                    ("Duration", "8 months"),
                ],
                "Generalized Anxiety Disorder (GAD)",
                "Excessive worry for ≥6 months about multiple events, difficult to control, with ≥3 associated symptoms indicates GAD.",
            ),
            case_study(
                "case2",
                &[
                    "Palpitations",
                    "Sweating",
                    "Trembling",
                    "Shortness of breath",
                    "Chest pain",
                    "Nausea",
                    "Dizziness",
                    "Fear of dying",
                ],
                &[
                    ("Presentation", "Sudden onset of intense fear"),
                    ("Onset", "Abrupt, peaks within 10 minutes"),
                    ("Duration", "Episodes last 20-30 minutes, recurring for 2 months"),
                ],
                "Panic Disorder",
                "Recurrent unexpected panic attacks (abrupt surge of fear peaking within minutes) with ≥4 symptoms, plus persistent concern about attacks.",
            ),
            case_study(
                "case3",
                &["Chest pain radiating to left arm", "Diaphoresis", "Dyspnea", "Nausea"],
                &[
                    ("Presentation", "Sudden chest pain and shortness of breath"),
                    ("Onset", "Abrupt, during physical exertion"),
                    ("Duration", "First episode, resolved in ER"),
                ],
                "Rule out cardiac cause FIRST (medical mimic)",
                "First episode with classic cardiac symptoms during exertion requires cardiac workup before psychiatric diagnosis.",
            ),
            case_study(
                "case4",
                &["Nervousness", "Sleep difficulty", "Worry about performance"],
                &[
                    ("Presentation", "Worry about specific situation (upcoming presentation)"),
                    ("Onset", "2 weeks before event"),
                    ("Duration", "2 weeks"),
                ],
                "Adjustment Disorder or Normal Anxiety",
                "Worry tied to specific stressor, duration <6 months, does not meet GAD criteria. May be normal response or adjustment disorder.",
            ),
        ]
    });
    &CASES
}

fn sud_cases() -> &'static [CaseStudy] {
    static CASES: std::sync::LazyLock<Vec<CaseStudy>> = std::sync::LazyLock::new(|| {
        vec![
            case_study(
                "case1",
                &["Tremor", "Agitation", "Diaphoresis", "Anxiety", "Nausea"],
                &[
                    ("Substance", "Unknown"),
                    ("Vitals", "HR 110, BP 155/95, Temp 37.8°C"),
                    ("Timeline", "12 hours since last use"),
                ],
                "Alcohol Withdrawal - Early/Mild",
                "Tremor, autonomic hyperactivity (tachycardia, hypertension), and anxiety 6-24 hours after last drink indicate early alcohol withdrawal.",
            ),
            case_study(
                "case2",
                &["Confusion", "Disorientation", "Visual hallucinations", "Severe tremor", "Agitation"],
                &[
                    ("Substance", "Unknown"),
                    ("Vitals", "HR 130, BP 170/100, Temp 38.5°C"),
                    ("Timeline", "72 hours since last use"),
                ],
                "Alcohol Withdrawal - Delirium Tremens (DTs)",
                "RED FLAG: Delirium, hallucinations, severe autonomic instability 48-96 hours after cessation indicates DTs - medical emergency with mortality risk.",
            ),
            case_study(
                "case3",
                &[
                    "Lacrimation",
                    "Rhinorrhea",
                    "Yawning",
                    "Piloerection",
                    "Dilated pupils",
                    "Diarrhea",
                    "Muscle aches",
                ],
                &[
                    ("Substance", "Unknown"),
                    ("Vitals", "HR 95, BP 135/85, Temp 37.2°C"),
                    ("Timeline", "18 hours since last use"),
                ],
                "Opioid Withdrawal",
                "Flu-like symptoms (rhinorrhea, lacrimation, yawning), piloerection, GI hyperactivity, and mydriasis indicate opioid withdrawal. NOT life-threatening.",
            ),
            case_study(
                "case4",
                &["Seizure", "Post-ictal confusion"],
                &[
                    ("Substance", "Unknown"),
                    ("Vitals", "HR 115, BP 160/95, Temp 37.5°C"),
                    ("Timeline", "24-48 hours since last use"),
                ],
                "Alcohol Withdrawal Seizure",
                "RED FLAG: Withdrawal seizures typically occur 24-48 hours after last drink, often single generalized tonic-clonic seizure.",
            ),
        ]
    });
    &CASES
}

/// Which case on a page has its classification showing. One at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReveal {
    case_count: usize,
    selected: Option<usize>,
    shown: bool,
}

impl CaseReveal {
    pub fn new(case_count: usize) -> Self {
        Self {
            case_count,
            selected: None,
            shown: false,
        }
    }

    pub fn for_set(set: CaseSet) -> Self {
        Self::new(set.cases().len())
    }

    /// Press "Show/Hide Classification" on case `index`. The same case flips
    /// between shown and hidden; another case takes over and is shown.
    /// Returns whether `index` is revealed afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.case_count {
            tracing::debug!(index, case_count = self.case_count, "case index out of range");
            return false;
        }
        if self.selected == Some(index) {
            self.shown = !self.shown;
        } else {
            self.selected = Some(index);
            self.shown = true;
        }
        tracing::debug!(index, shown = self.shown, "case reveal toggled");
        self.shown
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.shown && self.selected == Some(index)
    }

    pub fn revealed_index(&self) -> Option<usize> {
        self.selected.filter(|_| self.shown)
    }

    pub fn button_label(&self, index: usize) -> &'static str {
        if self.is_revealed(index) {
            "Hide Classification"
        } else {
            "Show Classification"
        }
    }
}
