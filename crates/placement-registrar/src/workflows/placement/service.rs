use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::applicant::Applicant;
use super::company::Company;
use super::domain::{
    AcademicRecord, ApplicationStatus, CompanyId, DriveId, JobCategory, RegistrarError, Student,
    StudentId,
};
use super::drive::Drive;
use super::registrar::{OfferDetails, PlacementRegistrar};
use super::report::{CompanyReport, DriveReport, FullPlacementReport, StudentReport};

/// Payload for registering or renaming a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRegistration {
    pub name: String,
}

/// Payload describing a new drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveRegistration {
    pub role_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub min_cgpa: f64,
    pub ctc: u32,
    pub job_category: JobCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRegistration {
    pub student_id: i64,
    pub name: String,
    pub cgpa: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRequest {
    pub student_id: StudentId,
    pub company_id: CompanyId,
    pub drive_id: DriveId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub student_id: StudentId,
    pub drive_id: DriveId,
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyView {
    pub company_id: CompanyId,
    pub name: String,
    pub drives: usize,
}

impl From<&Company> for CompanyView {
    fn from(company: &Company) -> Self {
        Self {
            company_id: company.id(),
            name: company.name().to_string(),
            drives: company.drives().len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriveView {
    pub company_id: CompanyId,
    pub drive_id: DriveId,
    pub role_name: String,
    pub min_cgpa: f64,
    pub ctc: u32,
    pub job_category: JobCategory,
}

/// Registrar shared between request handlers behind one read/write lock.
///
/// Every mutation holds the write lock for its whole duration; reports take the read lock.
#[derive(Debug, Clone, Default)]
pub struct PlacementService {
    registrar: Arc<RwLock<PlacementRegistrar>>,
}

impl PlacementService {
    pub fn new(registrar: PlacementRegistrar) -> Self {
        Self {
            registrar: Arc::new(RwLock::new(registrar)),
        }
    }

    pub fn add_company(
        &self,
        registration: CompanyRegistration,
    ) -> Result<CompanyView, PlacementServiceError> {
        let company = Company::new(registration.name);
        let view = CompanyView::from(&company);
        self.write()?.add_company(company);
        Ok(view)
    }

    /// Renames a company, keeping its drives.
    pub fn rename_company(
        &self,
        company_id: CompanyId,
        registration: Option<CompanyRegistration>,
    ) -> Result<CompanyView, PlacementServiceError> {
        let registration = registration.ok_or_else(|| {
            RegistrarError::InvalidArgument("company payload must not be null".to_string())
        })?;

        let mut registrar = self.write()?;
        let mut updated = Company::with_id(company_id, registration.name);
        for drive in registrar.company_by_id(company_id)?.drives() {
            updated.add_drive(drive.clone());
        }
        let view = CompanyView::from(&updated);
        registrar.update_company(updated)?;
        Ok(view)
    }

    pub fn add_drive(
        &self,
        company_id: CompanyId,
        registration: DriveRegistration,
    ) -> Result<DriveView, PlacementServiceError> {
        let mut registrar = self.write()?;
        let drive = registrar.add_drive_with(company_id, || {
            Drive::new(
                registration.start_date,
                registration.end_date,
                registration.role_name,
                registration.min_cgpa,
                registration.ctc,
                registration.job_category,
            )
        })?;
        Ok(DriveView {
            company_id,
            drive_id: drive.id(),
            role_name: drive.role_name().to_string(),
            min_cgpa: drive.eligibility().requirement(),
            ctc: drive.ctc(),
            job_category: drive.job_category(),
        })
    }

    pub fn register_applicant(
        &self,
        registration: ApplicantRegistration,
    ) -> Result<StudentId, PlacementServiceError> {
        let student = Student::try_new(registration.student_id, registration.name)?;
        let record = AcademicRecord::new(registration.student_id, registration.cgpa);
        let student_id = student.id();
        self.write()?
            .register_applicant(Applicant::new(student, record));
        Ok(student_id)
    }

    pub fn apply(&self, request: ApplicationRequest) -> Result<(), PlacementServiceError> {
        self.write()?
            .apply_for_drive(request.student_id, request.company_id, request.drive_id)?;
        Ok(())
    }

    pub fn update_status(&self, request: StatusUpdateRequest) -> Result<(), PlacementServiceError> {
        self.write()?.update_application_status(
            request.student_id,
            request.drive_id,
            request.status,
        )?;
        Ok(())
    }

    pub fn offer_details(
        &self,
        company_id: CompanyId,
        drive_id: DriveId,
    ) -> Result<OfferDetails, PlacementServiceError> {
        Ok(self.read()?.offer_details(company_id, drive_id)?)
    }

    pub fn student_reports(&self) -> Result<Vec<StudentReport>, PlacementServiceError> {
        Ok(self.read()?.generate_report_by_student())
    }

    pub fn drive_reports(&self) -> Result<Vec<DriveReport>, PlacementServiceError> {
        Ok(self.read()?.generate_drive_reports())
    }

    pub fn company_reports(&self) -> Result<Vec<CompanyReport>, PlacementServiceError> {
        Ok(self.read()?.generate_company_reports())
    }

    pub fn latest_drive_report(&self) -> Result<Option<DriveReport>, PlacementServiceError> {
        Ok(self.read()?.generate_report_by_drive())
    }

    pub fn full_report(&self) -> Result<FullPlacementReport, PlacementServiceError> {
        Ok(self.read()?.generate_full_report())
    }

    /// Runs a read-only closure against the registrar under the read lock.
    pub fn inspect<T>(
        &self,
        f: impl FnOnce(&PlacementRegistrar) -> T,
    ) -> Result<T, PlacementServiceError> {
        Ok(f(&*self.read()?))
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, PlacementRegistrar>, PlacementServiceError> {
        self.registrar
            .read()
            .map_err(|_| PlacementServiceError::Unavailable)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, PlacementRegistrar>, PlacementServiceError> {
        self.registrar
            .write()
            .map_err(|_| PlacementServiceError::Unavailable)
    }
}

/// Error raised by the placement service.
#[derive(Debug, thiserror::Error)]
pub enum PlacementServiceError {
    #[error(transparent)]
    Registrar(#[from] RegistrarError),
    #[error("placement registrar unavailable: lock poisoned")]
    Unavailable,
}
