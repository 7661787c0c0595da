use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ClusterKey {
    A,
    B,
    C,
}

impl ClusterKey {
    pub const ALL: [ClusterKey; 3] = [ClusterKey::A, ClusterKey::B, ClusterKey::C];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }
}

impl fmt::Display for ClusterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClusterKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            _ => Err(CoreError::UnknownCluster(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Disorder {
    pub name: String,
    pub key_features: String,
    pub traits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersonalityCluster {
    pub key: ClusterKey,
    pub name: String,
    pub description: String,
    pub disorders: Vec<Disorder>,
}

/// A pair of look-alike conditions and what separates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Differential {
    pub comparison: String,
    pub distinction: String,
}

fn disorder(name: &str, key_features: &str, traits: &[&str]) -> Disorder {
    Disorder {
        name: name.to_string(),
        key_features: key_features.to_string(),
        traits: traits.iter().map(|t| t.to_string()).collect(),
    }
}

fn cluster(key: ClusterKey, name: &str, description: &str, disorders: Vec<Disorder>) -> PersonalityCluster {
    PersonalityCluster {
        key,
        name: name.to_string(),
        description: description.to_string(),
        disorders,
    }
}

pub fn clusters() -> &'static [PersonalityCluster] {
    static CLUSTERS: std::sync::LazyLock<Vec<PersonalityCluster>> = std::sync::LazyLock::new(|| {
        vec![
            cluster(
                ClusterKey::A,
                "Cluster A - \"Odd/Eccentric\"",
                "Characterized by odd, eccentric behavior and social detachment",
                vec![
                    disorder(
                        "Paranoid",
                        "Distrust and suspiciousness; interprets motives as malevolent",
                        &["Suspects exploitation", "Doubts loyalty", "Reluctant to confide", "Bears grudges", "Perceives attacks"],
                    ),
                    disorder(
                        "Schizoid",
                        "Detachment from social relationships; restricted emotional expression",
                        &[
                            "Chooses solitary activities",
                            "Little interest in sexual experiences",
                            "Few pleasurable activities",
                            "Lacks close friends",
                            "Indifferent to praise/criticism",
                            "Emotional coldness",
                        ],
                    ),
                    disorder(
                        "Schizotypal",
                        "Social/interpersonal deficits; cognitive/perceptual distortions; eccentric behavior",
                        &[
                            "Ideas of reference",
                            "Odd beliefs/magical thinking",
                            "Unusual perceptual experiences",
                            "Odd thinking/speech",
                            "Suspiciousness",
                            "Constricted affect",
                            "Odd behavior/appearance",
                        ],
                    ),
                ],
            ),
            cluster(
                ClusterKey::B,
                "Cluster B - \"Dramatic/Erratic\"",
                "Characterized by dramatic, emotional, or erratic behavior",
                vec![
                    disorder(
                        "Antisocial",
                        "Disregard for and violation of rights of others (age ≥18, evidence of conduct disorder before age 15)",
                        &[
                            "Failure to conform to social norms/laws",
                            "Deceitfulness",
                            "Impulsivity",
                            "Irritability/aggressiveness",
                            "Reckless disregard for safety",
                            "Irresponsibility",
                            "Lack of remorse",
                        ],
                    ),
                    disorder(
                        "Borderline",
                        "Instability in relationships, self-image, affects; marked impulsivity",
                        &[
                            "Frantic efforts to avoid abandonment",
                            "Unstable intense relationships",
                            "Identity disturbance",
                            "Impulsivity (spending, sex, substance, reckless driving)",
                            "Recurrent suicidal behavior/self-harm",
                            "Affective instability",
                            "Chronic emptiness",
                            "Inappropriate anger",
                            "Transient stress-related paranoia/dissociation",
                        ],
                    ),
                    disorder(
                        "Histrionic",
                        "Excessive emotionality and attention-seeking",
                        &[
                            "Uncomfortable when not center of attention",
                            "Seductive/provocative behavior",
                            "Shifting, shallow emotions",
                            "Uses physical appearance for attention",
                            "Impressionistic speech",
                            "Dramatic/theatrical",
                            "Suggestible",
                            "Considers relationships more intimate than they are",
                        ],
                    ),
                    disorder(
                        "Narcissistic",
                        "Grandiosity, need for admiration, lack of empathy",
                        &[
                            "Grandiose sense of self-importance",
                            "Preoccupied with fantasies of success/power",
                            "Believes special/unique",
                            "Requires excessive admiration",
                            "Sense of entitlement",
                            "Exploitative",
                            "Lacks empathy",
                            "Envious",
                            "Arrogant",
                        ],
                    ),
                ],
            ),
            cluster(
                ClusterKey::C,
                "Cluster C - \"Anxious/Fearful\"",
                "Characterized by anxious, fearful behavior",
                vec![
                    disorder(
                        "Avoidant",
                        "Social inhibition, feelings of inadequacy, hypersensitivity to negative evaluation",
                        &[
                            "Avoids occupational activities involving interpersonal contact",
                            "Unwilling to get involved unless certain of being liked",
                            "Restraint in intimate relationships",
                            "Preoccupied with criticism/rejection",
                            "Inhibited in new situations",
                            "Views self as inferior",
                            "Reluctant to take risks",
                        ],
                    ),
                    disorder(
                        "Dependent",
                        "Excessive need to be taken care of; submissive, clinging behavior",
                        &[
                            "Difficulty making decisions",
                            "Needs others to assume responsibility",
                            "Difficulty disagreeing",
                            "Difficulty initiating projects",
                            "Goes to excessive lengths for support",
                            "Uncomfortable when alone",
                            "Urgently seeks relationships when one ends",
                            "Preoccupied with fears of being left alone",
                        ],
                    ),
                    disorder(
                        "Obsessive-Compulsive (OCPD)",
                        "Preoccupation with orderliness, perfectionism, control (different from OCD)",
                        &[
                            "Preoccupied with details/rules/order",
                            "Perfectionism interferes with completion",
                            "Excessively devoted to work",
                            "Inflexible about morality/ethics",
                            "Unable to discard worthless objects",
                            "Reluctant to delegate",
                            "Miserly spending style",
                            "Rigid and stubborn",
                        ],
                    ),
                ],
            ),
        ]
    });
    &CLUSTERS
}

pub fn get_cluster(key: ClusterKey) -> &'static PersonalityCluster {
    // The catalog holds exactly one entry per key, in key order.
    &clusters()[key as usize]
}

pub fn key_differentials() -> &'static [Differential] {
    static DIFFERENTIALS: std::sync::LazyLock<Vec<Differential>> = std::sync::LazyLock::new(|| {
        [
            (
                "Borderline vs Bipolar",
                "Borderline: Mood shifts within hours in response to stressors | Bipolar: Mood episodes last days-weeks",
            ),
            (
                "OCPD vs OCD",
                "OCPD: Ego-syntonic perfectionism, rigidity | OCD: Ego-dystonic obsessions and compulsions",
            ),
            (
                "Schizotypal vs Schizophrenia",
                "Schizotypal: Odd beliefs, no frank psychosis | Schizophrenia: True hallucinations/delusions",
            ),
            (
                "Avoidant vs Social Anxiety",
                "Avoidant: Pervasive pattern affecting identity | Social Anxiety: Specific situational fear",
            ),
        ]
        .into_iter()
        .map(|(comparison, distinction)| Differential {
            comparison: comparison.to_string(),
            distinction: distinction.to_string(),
        })
        .collect()
    });
    &DIFFERENTIALS
}

pub const GENERAL_FEATURES: [&str; 7] = [
    "Enduring pattern of inner experience and behavior",
    "Deviates markedly from cultural expectations",
    "Pervasive and inflexible across situations",
    "Onset in adolescence or early adulthood",
    "Stable over time",
    "Leads to distress or impairment",
    "Not better explained by another mental disorder, substance, or medical condition",
];

/// Expanded cluster on the personality page. At most one is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClusterSelector {
    selected: Option<ClusterKey>,
}

impl ClusterSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choosing the open cluster again collapses it.
    pub fn select(&mut self, key: ClusterKey) -> Option<ClusterKey> {
        self.selected = if self.selected == Some(key) { None } else { Some(key) };
        self.selected
    }

    pub fn selected(&self) -> Option<ClusterKey> {
        self.selected
    }

    pub fn expanded(&self) -> Option<&'static PersonalityCluster> {
        self.selected.map(get_cluster)
    }
}
