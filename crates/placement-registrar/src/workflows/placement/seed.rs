//! JSON roster loader that hydrates a registrar before the workflow starts.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};

use super::applicant::Applicant;
use super::company::Company;
use super::domain::{
    AcademicRecord, ApplicationStatus, CompanyId, DriveId, EntityKind, JobCategory,
    RegistrarError, Student, StudentId,
};
use super::drive::Drive;
use super::policy::PlacementPolicy;
use super::registrar::PlacementRegistrar;

#[derive(Debug)]
pub enum SeedError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Registrar(RegistrarError),
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::Io(err) => write!(f, "failed to read placement seed: {}", err),
            SeedError::Json(err) => write!(f, "invalid placement seed JSON: {}", err),
            SeedError::Registrar(err) => {
                write!(f, "could not apply placement seed to registrar: {}", err)
            }
        }
    }
}

impl std::error::Error for SeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeedError::Io(err) => Some(err),
            SeedError::Json(err) => Some(err),
            SeedError::Registrar(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for SeedError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<RegistrarError> for SeedError {
    fn from(err: RegistrarError) -> Self {
        Self::Registrar(err)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlacementSeed {
    #[serde(default)]
    pub companies: Vec<CompanySeed>,
    #[serde(default)]
    pub applicants: Vec<ApplicantSeed>,
    #[serde(default)]
    pub applications: Vec<ApplicationSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompanySeed {
    pub name: String,
    #[serde(default)]
    pub drives: Vec<DriveSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriveSeed {
    pub role: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub min_cgpa: f64,
    pub ctc: u32,
    #[serde(default)]
    pub category: Option<JobCategory>,
    /// Used to derive the category when `category` is absent.
    #[serde(default)]
    pub package_lpa: Option<f64>,
}

impl DriveSeed {
    fn job_category(&self) -> JobCategory {
        match (self.category, self.package_lpa) {
            (Some(category), _) => category,
            (None, Some(lpa)) => JobCategory::for_package_lpa(lpa),
            (None, None) => JobCategory::Day,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicantSeed {
    pub id: i64,
    pub name: String,
    pub cgpa: f64,
    #[serde(default)]
    pub semesters: BTreeMap<u8, f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSeed {
    pub student_id: i64,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
}

/// Outcome of applying a seed: the hydrated registrar and the applications it declined.
#[derive(Debug)]
pub struct SeedImport {
    pub registrar: PlacementRegistrar,
    pub rejected: Vec<RegistrarError>,
}

pub struct PlacementSeedImporter;

impl PlacementSeedImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        policy: PlacementPolicy,
    ) -> Result<SeedImport, SeedError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, policy)
    }

    pub fn from_reader<R: Read>(reader: R, policy: PlacementPolicy) -> Result<SeedImport, SeedError> {
        let seed: PlacementSeed = serde_json::from_reader(reader)?;
        seed.into_registrar(policy)
    }
}

impl PlacementSeed {
    /// Builds a registrar, filing every seeded application through the normal workflow.
    ///
    /// Duplicate and ineligible applications are collected in
    /// [`SeedImport::rejected`]; unknown companies, roles or students abort the import.
    pub fn into_registrar(self, policy: PlacementPolicy) -> Result<SeedImport, SeedError> {
        let mut registrar = PlacementRegistrar::with_policy(policy);
        let mut drive_keys: BTreeMap<(String, String), (CompanyId, DriveId)> = BTreeMap::new();

        for company_seed in self.companies {
            let company = Company::new(company_seed.name.clone());
            let company_id = company.id();
            registrar.add_company(company);

            for drive_seed in company_seed.drives {
                let category = drive_seed.job_category();
                let drive = Drive::new(
                    drive_seed.start_date,
                    drive_seed.end_date,
                    drive_seed.role.clone(),
                    drive_seed.min_cgpa,
                    drive_seed.ctc,
                    category,
                );
                drive_keys
                    .entry((company_seed.name.clone(), drive_seed.role))
                    .or_insert((company_id, drive.id()));
                registrar.add_drive_to_company(company_id, drive)?;
            }
        }

        for applicant_seed in self.applicants {
            let student = Student::try_new(applicant_seed.id, applicant_seed.name)?;
            let record = AcademicRecord {
                student_id: applicant_seed.id,
                cgpa: applicant_seed.cgpa,
                semesters: applicant_seed.semesters,
            };
            registrar.register_applicant(Applicant::new(student, record));
        }

        let mut rejected = Vec::new();
        for application in self.applications {
            let key = (application.company.clone(), application.role.clone());
            let (company_id, drive_id) = drive_keys.get(&key).copied().ok_or_else(|| {
                RegistrarError::not_found(
                    EntityKind::Drive,
                    format!("'{}' at '{}'", application.role, application.company),
                )
            })?;
            let student_id = StudentId(application.student_id);

            match registrar.apply_for_drive(student_id, company_id, drive_id) {
                Ok(()) => {}
                Err(
                    err @ (RegistrarError::DuplicateApplication { .. }
                    | RegistrarError::IneligibleApplicant { .. }),
                ) => {
                    warn!(error = %err, "seeded application declined");
                    rejected.push(err);
                    continue;
                }
                Err(err) => return Err(err.into()),
            }

            if let Some(status) = application.status {
                registrar.update_application_status(student_id, drive_id, status)?;
            }
        }

        info!(
            companies = registrar.companies().len(),
            applicants = registrar.applicants().len(),
            applications = registrar.applications().len(),
            declined = rejected.len(),
            "placement seed loaded"
        );

        Ok(SeedImport {
            registrar,
            rejected,
        })
    }
}
