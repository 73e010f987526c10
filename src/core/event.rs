//! Domain types for ratings and tier grades.
//!
//! A rating is an integer on the 0-5 scale. Tier grades are the six letters
//! S through F; a graded submission is converted to a rating level before it
//! is recorded (S is worth 5, descending to D worth 1, with F worth 0).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The top of the rating scale. A rating of `r` carries `r` approval points
/// and `MAX_RATING - r` disapproval points.
pub const MAX_RATING: u8 = 5;

/// One of the six tier grades, in fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TierLabel {
    S,
    A,
    B,
    C,
    D,
    F,
}

impl TierLabel {
    /// All labels in display order.
    pub const ALL: [TierLabel; 6] = [
        TierLabel::S,
        TierLabel::A,
        TierLabel::B,
        TierLabel::C,
        TierLabel::D,
        TierLabel::F,
    ];

    /// Parse a grade string, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything that is not one of the six labels.
    pub fn parse(grade: &str) -> Option<Self> {
        match grade.trim().to_ascii_uppercase().as_str() {
            "S" => Some(Self::S),
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "D" => Some(Self::D),
            "F" => Some(Self::F),
            _ => None,
        }
    }

    /// The rating level this grade contributes when submitted.
    pub fn rating(self) -> u8 {
        match self {
            Self::S => 5,
            Self::A => 4,
            Self::B => 3,
            Self::C => 2,
            Self::D => 1,
            Self::F => 0,
        }
    }

    /// The label as a string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl std::fmt::Display for TierLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A venue's initial rating, seeded before any user events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineRating {
    /// The venue this baseline belongs to.
    pub venue: String,
    /// Initial rating level (1-5).
    pub rating: u8,
}

impl BaselineRating {
    /// Create a new baseline rating.
    pub fn new(venue: impl Into<String>, rating: u8) -> Self {
        Self {
            venue: venue.into(),
            rating,
        }
    }
}

/// A single user rating event.
///
/// `user` and `ts` are informational only; scoring depends on the venue and
/// rating level alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingEvent {
    /// The venue being rated.
    pub venue: String,
    /// Rating level (0-5).
    pub rating: u8,
    /// The submitting user, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// When the rating was recorded.
    pub ts: DateTime<Utc>,
}

impl RatingEvent {
    /// Create a new rating event with the current timestamp.
    pub fn new(venue: impl Into<String>, rating: u8) -> Self {
        Self {
            venue: venue.into(),
            rating,
            user: None,
            ts: Utc::now(),
        }
    }

    /// Attach the submitting user.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Create a rating event with a specific timestamp (for testing).
    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.ts = ts;
        self
    }
}

/// A graded submission from the outside world, not yet validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// The submitting user.
    pub user: String,
    /// The venue being graded.
    pub venue: String,
    /// The tier grade, as entered.
    pub grade: String,
}

impl Submission {
    /// Create a new submission.
    pub fn new(
        user: impl Into<String>,
        venue: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            venue: venue.into(),
            grade: grade.into(),
        }
    }
}
