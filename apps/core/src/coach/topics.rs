//! Topic lookup over an ordered keyword table.
//!
//! Matching is plain substring containment over the case-folded input, so
//! lookup is case-insensitive and needs no tokenization. The table order is
//! the dispatch priority: the first topic with a hit wins, which is how
//! overlapping inputs ("tired but want to lose weight") resolve
//! deterministically.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Advice topics, listed in dispatch priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Losing weight / fat loss.
    WeightLoss,
    /// Building muscle, gaining weight, bulking.
    MuscleGain,
    /// Workout plans and routines.
    Workout,
    /// Diet, meals and nutrition.
    Nutrition,
    /// Stress, anxiety and mental health.
    MentalHealth,
    /// Sleep problems.
    Sleep,
    /// Pain, injuries and soreness.
    Injury,
}

impl Topic {
    /// Returns a human-readable label for the topic
    pub fn label(&self) -> &'static str {
        match self {
            Topic::WeightLoss => "weight_loss",
            Topic::MuscleGain => "muscle_gain",
            Topic::Workout => "workout",
            Topic::Nutrition => "nutrition",
            Topic::MentalHealth => "mental_health",
            Topic::Sleep => "sleep",
            Topic::Injury => "injury",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the dispatch table: a topic and the substrings that select it.
struct TopicRule {
    topic: Topic,
    keywords: &'static [&'static str],
}

/// The dispatch table. Order is priority; only the first hit is returned.
const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::WeightLoss,
        keywords: &["weight loss", "lose weight", "fat loss"],
    },
    TopicRule {
        topic: Topic::MuscleGain,
        keywords: &["muscle", "gain weight", "bulk"],
    },
    TopicRule {
        topic: Topic::Workout,
        keywords: &["workout", "exercise", "routine", "gym"],
    },
    TopicRule {
        topic: Topic::Nutrition,
        keywords: &["diet", "nutrition", "meal", "food", "eat"],
    },
    TopicRule {
        topic: Topic::MentalHealth,
        keywords: &["stress", "anxiety", "mental", "depression"],
    },
    TopicRule {
        topic: Topic::Sleep,
        keywords: &["sleep", "insomnia", "tired"],
    },
    TopicRule {
        topic: Topic::Injury,
        keywords: &["pain", "injury", "hurt", "sore"],
    },
];

/// Result of a successful topic lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicMatch {
    /// The winning topic
    pub topic: Topic,
    /// The keyword that selected it
    pub keyword: String,
}

/// First-match topic lookup over the dispatch table
pub struct TopicMatcher;

impl Default for TopicMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicMatcher {
    /// Create a new matcher over the built-in table
    pub fn new() -> Self {
        Self
    }

    /// Looks up the topic for a user input.
    ///
    /// The input is case-folded before matching. Returns `None` when no
    /// keyword of any topic occurs in the input.
    pub fn topic_for(&self, text: &str) -> Option<TopicMatch> {
        let folded = text.to_lowercase();
        for rule in TOPIC_RULES {
            for keyword in rule.keywords {
                if folded.contains(*keyword) {
                    return Some(TopicMatch {
                        topic: rule.topic,
                        keyword: (*keyword).to_string(),
                    });
                }
            }
        }
        None
    }
}
