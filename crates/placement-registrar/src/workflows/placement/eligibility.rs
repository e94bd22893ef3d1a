use serde::{Deserialize, Serialize};

use super::applicant::Applicant;

/// How a CGPA equal to the requirement is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityBoundary {
    /// `cgpa >= requirement`
    #[default]
    Inclusive,
    /// `cgpa > requirement`
    Exclusive,
}

impl EligibilityBoundary {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "inclusive" | "gte" | ">=" => Some(Self::Inclusive),
            "exclusive" | "gt" | ">" => Some(Self::Exclusive),
            _ => None,
        }
    }

    pub fn admits(self, cgpa: f64, requirement: f64) -> bool {
        match self {
            Self::Inclusive => cgpa >= requirement,
            Self::Exclusive => cgpa > requirement,
        }
    }
}

/// Minimum CGPA a drive asks for. No range validation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Eligibility {
    requirement: f64,
}

impl Eligibility {
    pub fn new(requirement: f64) -> Self {
        Self { requirement }
    }

    pub fn requirement(&self) -> f64 {
        self.requirement
    }

    pub fn change_requirement(&mut self, requirement: f64) {
        self.requirement = requirement;
    }

    pub fn check(&self, applicant: &Applicant) -> bool {
        self.check_with(applicant, EligibilityBoundary::Inclusive)
    }

    pub fn check_with(&self, applicant: &Applicant, boundary: EligibilityBoundary) -> bool {
        boundary.admits(applicant.cgpa(), self.requirement)
    }
}
