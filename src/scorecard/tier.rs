// src/scorecard/tier.rs

/// Performance band derived from the overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    NeedsImprovement,
    Satisfactory,
    Good,
    VeryGood,
    Excellent,
}

impl Tier {
    /// Lower bounds are inclusive: exactly 90.0 is `Excellent`.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Tier::Excellent
        } else if percentage >= 80.0 {
            Tier::VeryGood
        } else if percentage >= 70.0 {
            Tier::Good
        } else if percentage >= 60.0 {
            Tier::Satisfactory
        } else {
            Tier::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::VeryGood => "Very Good",
            Tier::Good => "Good",
            Tier::Satisfactory => "Satisfactory",
            Tier::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Tier::Excellent => "#28a745",
            Tier::VeryGood => "#17a2b8",
            Tier::Good => "#ffc107",
            Tier::Satisfactory => "#fd7e14",
            Tier::NeedsImprovement => "#dc3545",
        }
    }
}
