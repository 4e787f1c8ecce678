//! Activity profile and multiplier inference
//!
//! The energy model scales BMR by an activity multiplier. Patients carry
//! either a structured [`ActivityLevel`] or the free-text training answers
//! from the intake form; the heuristic here maps that text onto the same
//! multiplier scale.
//!
//! # Design Principles
//!
//! 1. **Isolated**: text interpretation never leaks into the energy formulas
//! 2. **Conservative**: unrecognized text maps to the lowest plausible tier
//! 3. **Bounded**: the final multiplier is clamped to [1.1, 2.2]

use serde::{Deserialize, Serialize};

/// Lower clamp for the inferred multiplier
pub const MIN_ACTIVITY_MULTIPLIER: f64 = 1.1;
/// Upper clamp for the inferred multiplier
pub const MAX_ACTIVITY_MULTIPLIER: f64 = 2.2;

/// Bonus added once for double sessions and once for a high-demand sport
const TRAINING_LOAD_BONUS: f64 = 0.05;

/// Structured activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for maintenance calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise or physical job",
        }
    }
}

/// Free-text training answers from the patient intake form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingProfile {
    /// Whether the patient currently trains at all
    pub trains: bool,
    /// Free text like "5 days a week" or "mon/wed/fri"
    pub training_days: Option<String>,
    /// Free text describing session times
    pub schedule: Option<String>,
    /// Sport or modality name
    pub sport: Option<String>,
}

/// How the patient's activity is described
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityProfile {
    /// Structured five-tier level, bypassing text inference
    Level(ActivityLevel),
    /// Free-text intake answers run through the inference heuristic
    Training(TrainingProfile),
}

impl Default for ActivityProfile {
    fn default() -> Self {
        ActivityProfile::Training(TrainingProfile::default())
    }
}

/// Map an activity profile onto the BMR multiplier scale
///
/// Structured levels use their fixed multiplier. Free-text profiles start at
/// the sedentary baseline when not training; otherwise the parsed weekly day
/// count picks the tier (unparseable text counts as zero days), with a 0.05
/// bonus each for double sessions and a high-demand sport. The result is
/// clamped to [1.1, 2.2].
pub fn infer_activity_multiplier(profile: &ActivityProfile) -> f64 {
    let raw = match profile {
        ActivityProfile::Level(level) => level.multiplier(),
        ActivityProfile::Training(training) => infer_from_training(training),
    };
    raw.clamp(MIN_ACTIVITY_MULTIPLIER, MAX_ACTIVITY_MULTIPLIER)
}

fn infer_from_training(training: &TrainingProfile) -> f64 {
    if !training.trains {
        return ActivityLevel::Sedentary.multiplier();
    }

    let days = training
        .training_days
        .as_deref()
        .and_then(parse_training_day_count)
        .unwrap_or(0);
    let tier = match days {
        0..=2 => ActivityLevel::LightlyActive,
        3..=4 => ActivityLevel::ModeratelyActive,
        5 => ActivityLevel::VeryActive,
        _ => ActivityLevel::ExtraActive,
    };

    let mut multiplier = tier.multiplier();
    if training
        .schedule
        .as_deref()
        .map(mentions_double_sessions)
        .unwrap_or(false)
    {
        multiplier += TRAINING_LOAD_BONUS;
    }
    if training
        .sport
        .as_deref()
        .map(is_high_demand_sport)
        .unwrap_or(false)
    {
        multiplier += TRAINING_LOAD_BONUS;
    }
    multiplier
}

/// Parse a training-days description into a weekly day count
///
/// A leading integer wins ("5 days a week"); otherwise distinct day-name
/// tokens are counted ("mon/wed/fri"); "daily" and "every day" mean seven.
/// `None` when the text describes no recognizable schedule. Counts are
/// capped at seven.
pub fn parse_training_day_count(text: &str) -> Option<u8> {
    let lower = text.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }
    if lower.contains("every day") || lower.contains("everyday") || lower.contains("daily") {
        return Some(7);
    }

    let leading_int = regex_lite::Regex::new(r"^(\d{1,2})").unwrap();
    if let Some(caps) = leading_int.captures(&lower) {
        let n: u8 = caps[1].parse().ok()?;
        return Some(n.min(7));
    }

    let mut seen = [false; 7];
    for token in lower.split(|c: char| !c.is_ascii_alphabetic()) {
        if token.is_empty() {
            continue;
        }
        if let Some(&(_, index)) = DAY_TOKENS.iter().find(|(name, _)| *name == token) {
            seen[index as usize] = true;
        }
    }
    let count = seen.iter().filter(|day| **day).count() as u8;
    (count > 0).then_some(count)
}

/// Whether a schedule description suggests more than one session per day
pub fn mentions_double_sessions(schedule: &str) -> bool {
    let lower = schedule.to_lowercase();
    DOUBLE_SESSION_HINTS.iter().any(|hint| lower.contains(hint))
}

/// Whether a sport warrants the extra load allowance on top of the tier
pub fn is_high_demand_sport(sport: &str) -> bool {
    let lower = sport.to_lowercase();
    if HIGH_DEMAND_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
        return true;
    }
    lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .any(|token| HIGH_DEMAND_WORDS.contains(&token))
}

/// Day-name tokens mapped to a weekday index, abbreviations included
const DAY_TOKENS: &[(&str, u8)] = &[
    ("monday", 0),
    ("mon", 0),
    ("tuesday", 1),
    ("tue", 1),
    ("tues", 1),
    ("wednesday", 2),
    ("wed", 2),
    ("thursday", 3),
    ("thu", 3),
    ("thur", 3),
    ("thurs", 3),
    ("friday", 4),
    ("fri", 4),
    ("saturday", 5),
    ("sat", 5),
    ("sunday", 6),
    ("sun", 6),
];

const DOUBLE_SESSION_HINTS: &[&str] = &[
    "twice a day",
    "twice daily",
    "two a day",
    "two-a-day",
    "2x/day",
    "2x day",
    "2 a day",
    "double session",
    "two sessions",
    "2 sessions",
    "am/pm",
    "am and pm",
    "morning and evening",
];

/// Single-word sports matched as whole tokens
const HIGH_DEMAND_WORDS: &[&str] = &[
    "crossfit",
    "hyrox",
    "triathlon",
    "ironman",
    "marathon",
    "ultramarathon",
    "swimming",
    "rowing",
    "cycling",
    "mma",
    "boxing",
    "judo",
    "wrestling",
    "rugby",
];

/// Multi-word or hyphenated sports matched as substrings
const HIGH_DEMAND_PHRASES: &[&str] = &["muay thai", "water polo", "jiu jitsu", "jiu-jitsu"];
