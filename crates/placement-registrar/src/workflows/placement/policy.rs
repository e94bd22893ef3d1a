use serde::{Deserialize, Serialize};

use super::domain::{ApplicationStatus, RegistrarError};
use super::eligibility::EligibilityBoundary;

/// Which status changes `update_application_status` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Any status may follow any other.
    #[default]
    Permissive,
    /// `Selected` and `Rejected` are final; only re-setting the same status is accepted.
    Guarded,
}

impl TransitionPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "permissive" | "open" => Some(Self::Permissive),
            "guarded" | "strict" => Some(Self::Guarded),
            _ => None,
        }
    }

    pub fn validate(
        self,
        from: ApplicationStatus,
        to: ApplicationStatus,
    ) -> Result<(), RegistrarError> {
        match self {
            TransitionPolicy::Permissive => Ok(()),
            TransitionPolicy::Guarded if from.is_terminal() && from != to => {
                Err(RegistrarError::IllegalTransition { from, to })
            }
            TransitionPolicy::Guarded => Ok(()),
        }
    }
}

/// Rule dials applied by a registrar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlacementPolicy {
    pub eligibility_boundary: EligibilityBoundary,
    pub transitions: TransitionPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissive_policy_accepts_every_transition() {
        for from in ApplicationStatus::ordered() {
            for to in ApplicationStatus::ordered() {
                assert!(TransitionPolicy::Permissive.validate(from, to).is_ok());
            }
        }
    }

    #[test]
    fn guarded_policy_blocks_leaving_terminal_states() {
        let guarded = TransitionPolicy::Guarded;
        assert!(guarded
            .validate(ApplicationStatus::Applied, ApplicationStatus::Rejected)
            .is_ok());
        assert!(guarded
            .validate(ApplicationStatus::Selected, ApplicationStatus::Selected)
            .is_ok());
        assert_eq!(
            guarded.validate(ApplicationStatus::Rejected, ApplicationStatus::ShortListed),
            Err(RegistrarError::IllegalTransition {
                from: ApplicationStatus::Rejected,
                to: ApplicationStatus::ShortListed,
            })
        );
    }

    #[test]
    fn parse_recognises_policy_names() {
        assert_eq!(
            TransitionPolicy::parse("GUARDED"),
            Some(TransitionPolicy::Guarded)
        );
        assert_eq!(TransitionPolicy::parse("bogus"), None);
    }
}
