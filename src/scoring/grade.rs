use serde::Serialize;
use std::fmt;

/// Letter tier for a post's total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Grade {
    // Declared worst to best so the derived ordering follows score
    F,
    D,
    C,
    B,
    A,
    S,
}

impl Grade {
    /// Best first, the order the dashboard lists them in.
    pub const ALL: [Grade; 6] = [Grade::S, Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// Grade for a total score. Bands are inclusive at the lower bound.
    pub fn from_score(total_score: f64) -> Grade {
        if total_score >= 120.0 {
            Grade::S
        } else if total_score >= 90.0 {
            Grade::A
        } else if total_score >= 70.0 {
            Grade::B
        } else if total_score >= 50.0 {
            Grade::C
        } else if total_score >= 30.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Grade::S => "Exceeded Target",
            Grade::A => "Met Target",
            Grade::B => "Near Target",
            Grade::C | Grade::D | Grade::F => "Below Target",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Human-readable score band, e.g. "90-119".
    pub fn band(&self) -> &'static str {
        match self {
            Grade::S => ">=120",
            Grade::A => "90-119",
            Grade::B => "70-89",
            Grade::C => "50-69",
            Grade::D => "30-49",
            Grade::F => "<30",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Grade {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(Grade::S),
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            other => anyhow::bail!("Unknown grade '{}': expected one of S, A, B, C, D, F", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::from_score(150.0), Grade::S);
        assert_eq!(Grade::from_score(120.0), Grade::S);
        assert_eq!(Grade::from_score(119.99), Grade::A);
        assert_eq!(Grade::from_score(90.0), Grade::A);
        assert_eq!(Grade::from_score(89.99), Grade::B);
        assert_eq!(Grade::from_score(70.0), Grade::B);
        assert_eq!(Grade::from_score(69.99), Grade::C);
        assert_eq!(Grade::from_score(50.0), Grade::C);
        assert_eq!(Grade::from_score(49.99), Grade::D);
        assert_eq!(Grade::from_score(30.0), Grade::D);
        assert_eq!(Grade::from_score(29.99), Grade::F);
        assert_eq!(Grade::from_score(0.0), Grade::F);
    }

    #[test]
    fn test_grade_monotonic_over_range() {
        // Walk [0, 150] in 0.25 steps; grade must never go down
        let mut previous = Grade::from_score(0.0);
        let mut step = 0;
        while step <= 600 {
            let score = step as f64 * 0.25;
            let grade = Grade::from_score(score);
            assert!(grade >= previous, "grade dropped at {}", score);
            previous = grade;
            step += 1;
        }
        assert_eq!(previous, Grade::S);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Grade::S.status(), "Exceeded Target");
        assert_eq!(Grade::A.status(), "Met Target");
        assert_eq!(Grade::B.status(), "Near Target");
        assert_eq!(Grade::C.status(), "Below Target");
        assert_eq!(Grade::D.status(), "Below Target");
        assert_eq!(Grade::F.status(), "Below Target");
    }

    #[test]
    fn test_bands() {
        assert_eq!(Grade::S.band(), ">=120");
        assert_eq!(Grade::A.band(), "90-119");
        assert_eq!(Grade::B.band(), "70-89");
        assert_eq!(Grade::C.band(), "50-69");
        assert_eq!(Grade::D.band(), "30-49");
        assert_eq!(Grade::F.band(), "<30");
    }

    #[test]
    fn test_grade_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Grade::S).unwrap(), "\"S\"");
        assert_eq!("b".parse::<Grade>().unwrap(), Grade::B);
        assert!("E".parse::<Grade>().is_err());
    }
}
