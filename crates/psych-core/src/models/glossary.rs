use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Category filter value that matches every term.
pub const ALL: &str = "All";

/// Filter values in display order.
pub const CATEGORIES: [&str; 7] = [
    ALL,
    "General",
    "Mood",
    "Psychosis",
    "Anxiety",
    "Trauma",
    "Substance Use",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GlossaryTerm {
    pub term: String,
    pub definition: String,
    pub category: String,
}

impl GlossaryTerm {
    /// Case-insensitive substring match on the term or its definition.
    /// An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.term.to_lowercase().contains(&needle)
            || self.definition.to_lowercase().contains(&needle)
    }

    pub fn in_category(&self, category: &str) -> bool {
        category == ALL || self.category == category
    }
}

pub fn terms() -> &'static [GlossaryTerm] {
    static TERMS: std::sync::LazyLock<Vec<GlossaryTerm>> = std::sync::LazyLock::new(|| {
        [
            ("Affect", "Observable expression of emotion (e.g., facial expression, tone of voice)", "General"),
            ("Agoraphobia", "Fear of places or situations where escape might be difficult", "Anxiety"),
            ("Akathisia", "Restlessness and inability to sit still; common medication side effect", "General"),
            ("Alogia", "Poverty of speech; brief, concrete replies", "Psychosis"),
            ("Anhedonia", "Inability to experience pleasure from previously enjoyable activities", "Mood"),
            ("Avolition", "Decreased motivation and ability to initiate goal-directed activities", "Psychosis"),
            ("Catatonia", "Marked psychomotor disturbance (immobility, rigidity, or excessive activity)", "Psychosis"),
            ("Circumstantiality", "Excessive, unnecessary detail but eventually reaches the point", "Psychosis"),
            ("Compulsion", "Repetitive behavior performed to reduce anxiety from an obsession", "Anxiety"),
            ("Delusion", "Fixed false belief not consistent with cultural background", "Psychosis"),
            ("Depersonalization", "Feeling detached from oneself, as if observing from outside", "General"),
            ("Derealization", "Feeling that surroundings are unreal or dreamlike", "General"),
            ("Dysphoria", "Unpleasant or uncomfortable mood state", "Mood"),
            ("Dysthymia", "Persistent depressive disorder; chronic low-grade depression ≥2 years", "Mood"),
            ("Echolalia", "Repetition of others' words", "Psychosis"),
            ("Echopraxia", "Repetition of others' movements", "Psychosis"),
            ("Ego-dystonic", "Thoughts/behaviors inconsistent with self-image (experienced as distressing)", "General"),
            ("Ego-syntonic", "Thoughts/behaviors consistent with self-image (not experienced as problematic)", "General"),
            ("Euthymia", "Normal, non-depressed, reasonably positive mood", "Mood"),
            ("Flight of Ideas", "Rapid shift from one idea to another; thoughts loosely connected", "Mood"),
            ("Grandiosity", "Exaggerated sense of importance, power, knowledge, or identity", "Mood"),
            ("Hallucination", "Sensory perception without external stimulus (auditory, visual, tactile)", "Psychosis"),
            ("Hypervigilance", "Enhanced state of alertness and scanning for threats", "Trauma"),
            ("Hypomania", "Milder elevated mood ≥4 days without marked impairment", "Mood"),
            ("Illusion", "Misperception of real external stimulus", "Psychosis"),
            ("Labile", "Rapidly shifting emotions", "General"),
            ("Loose Associations", "Disorganized thinking with unclear connections between ideas", "Psychosis"),
            ("Mania", "Elevated mood ≥7 days with marked impairment or psychosis", "Mood"),
            ("Mood", "Sustained internal emotional state (what patient reports)", "General"),
            ("Neologism", "Made-up word with meaning only to the speaker", "Psychosis"),
            ("Obsession", "Recurrent, intrusive, unwanted thought causing anxiety", "Anxiety"),
            ("Paranoia", "Persistent suspicion and mistrust of others", "Psychosis"),
            ("Perseveration", "Persistent repetition of word, phrase, or action", "General"),
            ("Piloerection", "Goosebumps; classic sign of opioid withdrawal", "Substance Use"),
            ("Pressured Speech", "Rapid, increased, difficult-to-interrupt speech", "Mood"),
            ("Psychomotor Agitation", "Excessive motor activity associated with tension", "General"),
            ("Psychomotor Retardation", "Slowed movements, speech, and thinking", "Mood"),
            ("Rumination", "Repetitive, passive focus on negative thoughts", "Mood"),
            ("Sensorium", "State of awareness (orientation, attention, consciousness)", "General"),
            ("Suicidal Ideation", "Thoughts about death or suicide (passive vs active)", "General"),
            ("Tangentiality", "Veering off topic; never reaches the point", "Psychosis"),
            ("Thought Blocking", "Abrupt interruption in thought process", "Psychosis"),
            ("Thought Broadcasting", "Belief that thoughts are audible to others", "Psychosis"),
            ("Thought Insertion", "Belief that thoughts are placed in one's mind by external force", "Psychosis"),
            ("Thought Withdrawal", "Belief that thoughts are removed from one's mind", "Psychosis"),
            ("Word Salad", "Incoherent mix of words and phrases", "Psychosis"),
        ]
        .iter()
        .map(|(term, definition, category)| GlossaryTerm {
            term: term.to_string(),
            definition: definition.to_string(),
            category: category.to_string(),
        })
        .collect()
    });
    &TERMS
}

/// Terms in `category` (or any, for [`ALL`]) matching `query`, sorted by
/// term name.
pub fn filter<'a>(terms: &'a [GlossaryTerm], query: &str, category: &str) -> Vec<&'a GlossaryTerm> {
    let mut matching: Vec<&GlossaryTerm> = terms
        .iter()
        .filter(|t| t.in_category(category) && t.matches_query(query))
        .collect();
    matching.sort_by(|a, b| a.term.cmp(&b.term));
    tracing::debug!(query, category, matches = matching.len(), "glossary filtered");
    matching
}
