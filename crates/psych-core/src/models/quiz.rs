use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A case-based multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
    pub category: String,
}

impl Question {
    /// `None` when `correct_index` points past the options.
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}

fn question(
    id: u32,
    prompt: &str,
    options: [&str; 4],
    correct_index: usize,
    explanation: &str,
    category: &str,
) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_index,
        explanation: explanation.to_string(),
        category: category.to_string(),
    }
}

/// The built-in clinical vignettes, in presentation order.
pub fn questions() -> &'static [Question] {
    static QUESTIONS: std::sync::LazyLock<Vec<Question>> = std::sync::LazyLock::new(|| {
        vec![
            question(
                1,
                "A 28-year-old woman presents with 6 weeks of depressed mood, anhedonia, insomnia, and passive suicidal ideation. She reports a 2-week period 3 years ago when she felt \"on top of the world,\" needed only 3-4 hours of sleep, and spent her entire savings. What is the most likely diagnosis?",
                [
                    "Major Depressive Disorder",
                    "Bipolar I Disorder",
                    "Bipolar II Disorder",
                    "Adjustment Disorder with Depressed Mood",
                ],
                1,
                "History of a manic episode (elevated mood, decreased sleep, impulsive spending lasting ≥7 days OR causing marked impairment) establishes Bipolar I diagnosis, even in the context of current depression. One manic episode = Bipolar I.",
                "Bipolar Disorder",
            ),
            question(
                2,
                "A 45-year-old man with chronic alcohol use presents to the ED 48 hours after his last drink with confusion, visual hallucinations, tremor, tachycardia (HR 135), and hypertension (BP 175/100). What is the most likely diagnosis?",
                [
                    "Early alcohol withdrawal",
                    "Alcohol withdrawal seizure",
                    "Delirium tremens",
                    "Alcohol intoxication",
                ],
                2,
                "Delirium tremens (DTs) typically occurs 48-96 hours after last drink and presents with confusion/delirium, hallucinations, severe autonomic instability. This is a medical emergency with significant mortality risk if untreated.",
                "Substance Use Disorders",
            ),
            question(
                3,
                "A 22-year-old college student describes sudden episodes of intense fear that peak within minutes, accompanied by palpitations, sweating, trembling, shortness of breath, and fear of dying. Episodes occur unpredictably 2-3 times per week. Between episodes, she worries constantly about having another attack. What is the most likely diagnosis?",
                [
                    "Generalized Anxiety Disorder",
                    "Panic Disorder",
                    "Social Anxiety Disorder",
                    "Cardiac arrhythmia",
                ],
                1,
                "Recurrent unexpected panic attacks (abrupt surge of fear peaking within minutes with ≥4 symptoms) plus persistent concern about future attacks indicates Panic Disorder. The anticipatory anxiety between attacks is a key feature.",
                "Anxiety Disorders",
            ),
            question(
                4,
                "A 35-year-old combat veteran describes intrusive memories of a traumatic event, nightmares, avoidance of trauma reminders, hypervigilance, and exaggerated startle response for the past 8 months. What is the most likely diagnosis?",
                [
                    "Acute Stress Disorder",
                    "Post-Traumatic Stress Disorder",
                    "Adjustment Disorder",
                    "Generalized Anxiety Disorder",
                ],
                1,
                "Symptoms lasting >1 month following trauma exposure, including intrusion (memories, nightmares), avoidance, negative alterations, and increased arousal, meet criteria for PTSD. Duration >1 month rules out Acute Stress Disorder.",
                "PTSD",
            ),
            question(
                5,
                "A 30-year-old man presents with auditory hallucinations, paranoid delusions, and social/occupational decline for 8 months. He denies mood symptoms. What is the most likely diagnosis?",
                [
                    "Schizophrenia",
                    "Schizoaffective Disorder",
                    "Brief Psychotic Disorder",
                    "Bipolar Disorder with Psychotic Features",
                ],
                0,
                "Duration ≥6 months with hallucinations, delusions, and functional decline WITHOUT significant mood episodes indicates Schizophrenia. Absence of mood symptoms rules out schizoaffective and bipolar diagnoses.",
                "Schizophrenia & Psychosis",
            ),
            question(
                6,
                "An 8-year-old boy has difficulty paying attention in class, makes careless mistakes, loses school supplies, and is easily distracted. His teacher reports these problems have been present since kindergarten. He does not have hyperactivity or impulsivity. What is the most likely diagnosis?",
                [
                    "ADHD - Combined Presentation",
                    "ADHD - Predominantly Inattentive Presentation",
                    "ADHD - Predominantly Hyperactive-Impulsive Presentation",
                    "Anxiety Disorder",
                ],
                1,
                "Meets inattention criteria (≥6 symptoms for children) with childhood onset and no hyperactivity-impulsivity symptoms. This indicates ADHD Predominantly Inattentive Presentation, often underdiagnosed.",
                "ADHD",
            ),
            question(
                7,
                "A 25-year-old woman presents with unstable relationships, fear of abandonment, self-harm when distressed, chronic feelings of emptiness, and intense anger. Mood shifts occur within hours in response to interpersonal stressors. What is the most likely diagnosis?",
                [
                    "Bipolar Disorder",
                    "Major Depressive Disorder",
                    "Borderline Personality Disorder",
                    "Histrionic Personality Disorder",
                ],
                2,
                "Pattern of instability in relationships, self-image, and affects, with marked impulsivity and self-harm behavior indicates Borderline Personality Disorder. Mood shifts within HOURS (not days-weeks) distinguish from bipolar disorder.",
                "Personality Disorders",
            ),
            question(
                8,
                "A patient presents 18 hours after last heroin use with lacrimation, rhinorrhea, yawning, piloerection, dilated pupils, diarrhea, and muscle aches. Vital signs: HR 95, BP 135/85. What is the most appropriate characterization?",
                [
                    "Life-threatening withdrawal requiring immediate hospitalization",
                    "Opioid withdrawal - uncomfortable but not life-threatening",
                    "Alcohol withdrawal",
                    "Opioid intoxication",
                ],
                1,
                "Classic opioid withdrawal symptoms (flu-like symptoms, piloerection, mydriasis, GI hyperactivity). Unlike alcohol/benzodiazepine withdrawal, opioid withdrawal is NOT life-threatening, though very uncomfortable.",
                "Substance Use Disorders",
            ),
            question(
                9,
                "A 32-year-old man presents with depressed mood, anhedonia, insomnia, and poor concentration for 4 weeks. On further questioning, he reports a 5-day period last year of elevated mood, increased energy, and decreased need for sleep, but was still able to work and did not require hospitalization. What is the most likely diagnosis?",
                [
                    "Major Depressive Disorder",
                    "Bipolar I Disorder",
                    "Bipolar II Disorder",
                    "Cyclothymic Disorder",
                ],
                2,
                "Current major depressive episode plus history of hypomanic episode (≥4 days of elevated mood with NO marked impairment or hospitalization) indicates Bipolar II Disorder. No history of mania rules out Bipolar I.",
                "Bipolar Disorder",
            ),
            question(
                10,
                "A 40-year-old woman presents with depressed mood, anhedonia, psychomotor retardation, and delusions that she has committed unforgivable sins despite no evidence of wrongdoing. What is the most appropriate classification?",
                [
                    "Major Depressive Disorder - Mild",
                    "Major Depressive Disorder - Moderate",
                    "Major Depressive Disorder with Psychotic Features",
                    "Schizoaffective Disorder",
                ],
                2,
                "Delusions (fixed false beliefs) occurring during a major depressive episode indicate MDD with Psychotic Features. This is a severe form requiring different treatment approach (typically antipsychotic + antidepressant).",
                "Major Depressive Disorder",
            ),
        ]
    });
    &QUESTIONS
}

/// Position in the quiz plus the answer state of the current question.
///
/// Nothing carries over between questions: moving in either direction drops
/// the selection and hides the explanation. No score is kept.
#[derive(Debug, Clone)]
pub struct QuizNavigator<'a> {
    questions: &'a [Question],
    current_index: usize,
    selected_option: Option<usize>,
    revealed: bool,
}

impl<'a> QuizNavigator<'a> {
    pub fn new(questions: &'a [Question]) -> Result<Self, CoreError> {
        if questions.is_empty() {
            return Err(CoreError::EmptyQuiz);
        }
        if let Some(q) = questions.iter().find(|q| q.correct_option().is_none()) {
            return Err(CoreError::InvalidAnswer {
                id: q.id,
                correct_index: q.correct_index,
                options: q.options.len(),
            });
        }
        Ok(Self {
            questions,
            current_index: 0,
            selected_option: None,
            revealed: false,
        })
    }

    pub fn current(&self) -> &'a Question {
        &self.questions[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.selected_option
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Answer the current question. Options are inert once the answer is
    /// revealed, and indices past the last option are ignored. Returns
    /// whether the selection was accepted.
    pub fn select_option(&mut self, index: usize) -> bool {
        if self.revealed || index >= self.current().options.len() {
            tracing::debug!(index, revealed = self.revealed, "option ignored");
            return false;
        }
        self.selected_option = Some(index);
        self.revealed = true;
        true
    }

    /// `None` until an option is chosen.
    pub fn is_correct(&self) -> Option<bool> {
        self.selected_option
            .map(|selected| selected == self.current().correct_index)
    }

    pub fn next(&mut self) {
        self.current_index = (self.current_index + 1) % self.questions.len();
        self.reset();
    }

    pub fn previous(&mut self) {
        let n = self.questions.len();
        self.current_index = (self.current_index + n - 1) % n;
        self.reset();
    }

    fn reset(&mut self) {
        self.selected_option = None;
        self.revealed = false;
        tracing::debug!(index = self.current_index, "moved to question");
    }
}
