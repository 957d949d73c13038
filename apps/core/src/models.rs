use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a single message within the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Strictly increasing identifier, unique within the conversation.
    pub id: u64,
    /// The text content of the message.
    pub text: String,
    /// Whether the message was sent by the user (`false` means coach reply).
    pub is_user: bool,
    /// UTC timestamp of when the message was created.
    pub timestamp: DateTime<Utc>,
}

/// Display unit for the weight field.
///
/// Display-only: the stored value is always interpreted as kilograms,
/// whichever unit is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

/// Display unit for the height field.
///
/// Display-only: the stored value is always interpreted as centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Ft,
}

/// Self-reported activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Returns the label shown in the activity selector.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (Little to no exercise)",
            ActivityLevel::Light => "Light (Exercise 1-3 days/week)",
            ActivityLevel::Moderate => "Moderate (Exercise 3-5 days/week)",
            ActivityLevel::Active => "Active (Exercise 6-7 days/week)",
            ActivityLevel::VeryActive => "Very Active (Intense exercise daily)",
        }
    }
}

/// The fixed set of selectable health goals.
pub const GOAL_OPTIONS: &[&str] = &[
    "Lose weight",
    "Build muscle",
    "Improve sleep",
    "Reduce stress",
    "Eat healthier",
    "Increase energy",
    "Improve fitness",
];

/// The user's self-reported health profile.
///
/// Numeric fields hold the raw form values as typed; parsing happens only
/// when the BMI is derived, so an empty or non-numeric entry renders as the
/// `--` placeholder instead of surfacing an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Body weight as entered, interpreted as kilograms.
    pub weight: String,
    /// Body height as entered, interpreted as centimeters.
    pub height: String,
    /// Average sleep per night in hours, as entered.
    pub sleep: String,
    /// Selected weight display unit. Never converts the stored value.
    #[serde(default)]
    pub weight_unit: WeightUnit,
    /// Selected height display unit. Never converts the stored value.
    #[serde(default)]
    pub height_unit: HeightUnit,
    /// Self-reported activity level, unset until chosen.
    #[serde(default)]
    pub activity_level: Option<ActivityLevel>,
    /// Currently selected health goals.
    #[serde(default)]
    pub goals: Vec<String>,
}

impl Default for HealthProfile {
    fn default() -> Self {
        Self {
            weight: "70".to_string(),
            height: "170".to_string(),
            sleep: "7".to_string(),
            weight_unit: WeightUnit::Kg,
            height_unit: HeightUnit::Cm,
            activity_level: None,
            goals: Vec::new(),
        }
    }
}

impl HealthProfile {
    /// Derives the BMI from the current weight and height, rounded to one
    /// decimal place.
    ///
    /// Returns `None` when either field is empty or non-numeric.
    pub fn bmi(&self) -> Option<f64> {
        let weight: f64 = self.weight.trim().parse().ok()?;
        let height: f64 = self.height.trim().parse().ok()?;
        let bmi = weight / (height / 100.0).powi(2);
        Some((bmi * 10.0).round() / 10.0)
    }

    /// The BMI as shown in the stats card: one decimal, or `--` when
    /// unavailable.
    pub fn bmi_display(&self) -> String {
        match self.bmi() {
            Some(bmi) => format!("{:.1}", bmi),
            None => "--".to_string(),
        }
    }

    /// Adds the goal if it is not selected, removes it if it is.
    pub fn toggle_goal(&mut self, goal: &str) {
        if let Some(pos) = self.goals.iter().position(|g| g == goal) {
            self.goals.remove(pos);
        } else {
            self.goals.push(goal.to_string());
        }
    }

    /// Applies a partial update, leaving unset fields untouched.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(weight) = update.weight {
            self.weight = weight;
        }
        if let Some(height) = update.height {
            self.height = height;
        }
        if let Some(sleep) = update.sleep {
            self.sleep = sleep;
        }
        if let Some(weight_unit) = update.weight_unit {
            self.weight_unit = weight_unit;
        }
        if let Some(height_unit) = update.height_unit {
            self.height_unit = height_unit;
        }
        if let Some(activity_level) = update.activity_level {
            self.activity_level = Some(activity_level);
        }
    }
}

/// A partial update to the health profile. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub weight: Option<String>,
    pub height: Option<String>,
    pub sleep: Option<String>,
    pub weight_unit: Option<WeightUnit>,
    pub height_unit: Option<HeightUnit>,
    pub activity_level: Option<ActivityLevel>,
}
