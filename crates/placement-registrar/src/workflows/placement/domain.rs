use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier issued to companies by the company sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompanyId(pub u64);

/// Identifier issued to drives by the drive sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DriveId(pub u64);

/// Roll number of a student. Always positive for a constructed [`Student`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(pub i64);

/// Registrar-scoped application number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationId(pub u64);

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for DriveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    name: String,
}

impl Student {
    /// Builds a student record.
    ///
    /// # Panics
    ///
    /// Panics when `id` is not positive. Callers holding unchecked input should
    /// use [`Student::try_new`].
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        assert!(id > 0, "student id must be positive");
        Self {
            id: StudentId(id),
            name: name.into(),
        }
    }

    pub fn try_new(id: i64, name: impl Into<String>) -> Result<Self, RegistrarError> {
        if id <= 0 {
            return Err(RegistrarError::InvalidArgument(format!(
                "student id must be positive, got {id}"
            )));
        }
        Ok(Self {
            id: StudentId(id),
            name: name.into(),
        })
    }

    pub fn id(&self) -> StudentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Academic standing handed over by the records office. Only `cgpa` gates placement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AcademicRecord {
    pub student_id: i64,
    pub cgpa: f64,
    #[serde(default)]
    pub semesters: BTreeMap<u8, f64>,
}

impl AcademicRecord {
    pub fn new(student_id: i64, cgpa: f64) -> Self {
        Self {
            student_id,
            cgpa,
            semesters: BTreeMap::new(),
        }
    }
}

/// Tier of a drive. Ordinals follow declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    Day,
    Dream,
    SuperDream,
    Marquee,
}

impl JobCategory {
    pub const fn ordered() -> [Self; 4] {
        [Self::Day, Self::Dream, Self::SuperDream, Self::Marquee]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Day => "Day Company",
            Self::Dream => "Dream",
            Self::SuperDream => "Super Dream",
            Self::Marquee => "Marquee",
        }
    }

    /// Tier for a package quoted in lakhs per annum.
    pub fn for_package_lpa(package_lpa: f64) -> Self {
        if package_lpa >= 20.0 {
            Self::Marquee
        } else if package_lpa >= 10.0 {
            Self::SuperDream
        } else {
            Self::Dream
        }
    }
}

impl fmt::Display for JobCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Selection pipeline stage of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    ShortListed,
    Cleared,
    Selected,
    Rejected,
}

impl ApplicationStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Applied,
            Self::ShortListed,
            Self::Cleared,
            Self::Selected,
            Self::Rejected,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::ShortListed => "Short Listed",
            Self::Cleared => "Cleared",
            Self::Selected => "Selected",
            Self::Rejected => "Rejected",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Selected | Self::Rejected)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Entity named in a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Company,
    Drive,
    Applicant,
    Application,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Company => "company",
            EntityKind::Drive => "drive",
            EntityKind::Applicant => "applicant",
            EntityKind::Application => "application",
        };
        f.write_str(label)
    }
}

/// Recoverable failures raised by registrar operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistrarError {
    #[error("{entity} {key} not found")]
    NotFound { entity: EntityKind, key: String },
    #[error("student {student_id} has already applied to drive {drive_id}")]
    DuplicateApplication {
        student_id: StudentId,
        drive_id: DriveId,
    },
    #[error(
        "student {student_id} is not eligible for drive {drive_id} (cgpa {cgpa:.2}, required {requirement:.2})"
    )]
    IneligibleApplicant {
        student_id: StudentId,
        drive_id: DriveId,
        cgpa: f64,
        requirement: f64,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("application status cannot move from {from} to {to}")]
    IllegalTransition {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },
}

impl RegistrarError {
    pub fn not_found(entity: EntityKind, key: impl fmt::Display) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
