use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tracing::{debug, info, warn};

use super::applicant::Applicant;
use super::application::Application;
use super::company::Company;
use super::domain::{
    ApplicationId, ApplicationStatus, CompanyId, DriveId, EntityKind, JobCategory,
    RegistrarError, StudentId,
};
use super::drive::Drive;
use super::policy::PlacementPolicy;

/// Aggregate root of the placement process.
///
/// Owns the companies (and through them the drives), the canonical application list
/// and the applicant list. Companies and applicants are indexed by id; when the same id
/// is inserted twice the first entry keeps answering lookups.
#[derive(Debug, Default)]
pub struct PlacementRegistrar {
    companies: Vec<Company>,
    applications: Vec<Application>,
    applicants: Vec<Applicant>,
    company_index: HashMap<CompanyId, usize>,
    applicant_index: HashMap<StudentId, usize>,
    policy: PlacementPolicy,
}

/// Offer terms of a single drive as shown to a student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferDetails {
    pub company_id: CompanyId,
    pub company_name: String,
    pub drive_id: DriveId,
    pub role_name: String,
    pub ctc: u32,
    pub job_category: JobCategory,
    pub job_category_label: &'static str,
}

impl PlacementRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: PlacementPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> PlacementPolicy {
        self.policy
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    pub fn add_company(&mut self, company: Company) {
        info!(company_id = %company.id(), name = company.name(), "company registered");
        self.company_index
            .entry(company.id())
            .or_insert(self.companies.len());
        self.companies.push(company);
    }

    pub fn company_by_id(&self, id: CompanyId) -> Result<&Company, RegistrarError> {
        let position = self.company_position(id)?;
        Ok(&self.companies[position])
    }

    pub fn company_by_id_mut(&mut self, id: CompanyId) -> Result<&mut Company, RegistrarError> {
        let position = self.company_position(id)?;
        Ok(&mut self.companies[position])
    }

    /// Replaces the stored company carrying the same id.
    pub fn update_company(&mut self, updated: Company) -> Result<(), RegistrarError> {
        let position = self.company_position(updated.id())?;
        debug!(company_id = %updated.id(), "company replaced");
        self.companies[position] = updated;
        Ok(())
    }

    pub fn add_drive_to_company(
        &mut self,
        company_id: CompanyId,
        drive: Drive,
    ) -> Result<(), RegistrarError> {
        self.add_drive_with(company_id, || drive).map(|_| ())
    }

    /// Resolves the company, then builds and attaches the drive.
    ///
    /// `build` only runs for a known company, so a failed call never draws a drive id.
    pub fn add_drive_with(
        &mut self,
        company_id: CompanyId,
        build: impl FnOnce() -> Drive,
    ) -> Result<&Drive, RegistrarError> {
        let company = self.company_by_id_mut(company_id)?;
        let drive = build();
        info!(
            company_id = %company_id,
            drive_id = %drive.id(),
            role = drive.role_name(),
            "drive added"
        );
        company.add_drive(drive);
        let drives = company.drives();
        Ok(&drives[drives.len() - 1])
    }

    pub fn drive_by_id(
        &self,
        company_id: CompanyId,
        drive_id: DriveId,
    ) -> Result<&Drive, RegistrarError> {
        let (company, drive) = self.drive_position(company_id, drive_id)?;
        Ok(&self.companies[company].drives()[drive])
    }

    /// Every drive of every company, company-major.
    pub fn all_drives(&self) -> Vec<&Drive> {
        self.companies
            .iter()
            .flat_map(|company| company.drives().iter())
            .collect()
    }

    pub fn register_applicant(&mut self, applicant: Applicant) {
        debug!(student_id = %applicant.id(), "applicant registered");
        self.applicant_index
            .entry(applicant.id())
            .or_insert(self.applicants.len());
        self.applicants.push(applicant);
    }

    pub fn applicant_by_id(&self, student_id: StudentId) -> Result<&Applicant, RegistrarError> {
        let position = self.applicant_position(student_id)?;
        Ok(&self.applicants[position])
    }

    /// Files an application for `student_id` against a company's drive.
    ///
    /// Lookups run applicant, company, drive in that order; then duplicates are
    /// rejected before eligibility is checked.
    pub fn apply_for_drive(
        &mut self,
        student_id: StudentId,
        company_id: CompanyId,
        drive_id: DriveId,
    ) -> Result<(), RegistrarError> {
        let applicant_position = self.applicant_position(student_id)?;
        let (company_position, drive_position) = self.drive_position(company_id, drive_id)?;

        let applicant = &self.applicants[applicant_position];
        let drive = &self.companies[company_position].drives()[drive_position];

        if drive.has_applied(student_id) {
            warn!(%student_id, %drive_id, "duplicate application rejected");
            return Err(RegistrarError::DuplicateApplication {
                student_id,
                drive_id,
            });
        }

        if !drive
            .eligibility()
            .check_with(applicant, self.policy.eligibility_boundary)
        {
            warn!(%student_id, %drive_id, cgpa = applicant.cgpa(), "ineligible applicant rejected");
            return Err(RegistrarError::IneligibleApplicant {
                student_id,
                drive_id,
                cgpa: applicant.cgpa(),
                requirement: drive.eligibility().requirement(),
            });
        }

        let application_id = ApplicationId(self.applications.len() as u64 + 1);
        let application = Application::new(application_id, drive.id(), student_id);

        self.applications.push(application.clone());
        self.companies[company_position].drives_mut()[drive_position]
            .append_application(application);
        self.applicants[applicant_position].add_drive_applied_for(drive_id);

        info!(%student_id, %company_id, %drive_id, %application_id, "application accepted");
        Ok(())
    }

    /// Sets the status of the first application matching student and drive.
    pub fn update_application_status(
        &mut self,
        student_id: StudentId,
        drive_id: DriveId,
        status: ApplicationStatus,
    ) -> Result<(), RegistrarError> {
        let application = self
            .applications
            .iter_mut()
            .find(|application| {
                application.applicant() == student_id && application.drive_id() == drive_id
            })
            .ok_or_else(|| {
                RegistrarError::not_found(
                    EntityKind::Application,
                    format!("for student {student_id} on drive {drive_id}"),
                )
            })?;

        self.policy
            .transitions
            .validate(application.status(), status)?;

        let previous = application.status();
        application.set_status(status);
        let application_id = application.id();

        for drive in self
            .companies
            .iter_mut()
            .flat_map(|company| company.drives_mut().iter_mut())
            .filter(|drive| drive.id() == drive_id)
        {
            if let Some(cached) = drive.application_mut(application_id) {
                cached.set_status(status);
            }
        }

        info!(%student_id, %drive_id, from = %previous, to = %status, "application status updated");
        Ok(())
    }

    /// First application filed by `student_id` on `drive_id`.
    pub fn application_for(
        &self,
        student_id: StudentId,
        drive_id: DriveId,
    ) -> Result<&Application, RegistrarError> {
        self.applications
            .iter()
            .find(|application| {
                application.applicant() == student_id && application.drive_id() == drive_id
            })
            .ok_or_else(|| {
                RegistrarError::not_found(
                    EntityKind::Application,
                    format!("for student {student_id} on drive {drive_id}"),
                )
            })
    }

    /// Names of companies with at least one drive the student currently qualifies for.
    pub fn companies_applicable_for(
        &self,
        student_id: StudentId,
    ) -> Result<BTreeSet<String>, RegistrarError> {
        let applicant = self.applicant_by_id(student_id)?;
        let boundary = self.policy.eligibility_boundary;

        Ok(self
            .companies
            .iter()
            .filter(|company| {
                company
                    .drives()
                    .iter()
                    .any(|drive| drive.eligibility().check_with(applicant, boundary))
            })
            .map(|company| company.name().to_string())
            .collect())
    }

    pub fn offer_details(
        &self,
        company_id: CompanyId,
        drive_id: DriveId,
    ) -> Result<OfferDetails, RegistrarError> {
        let company = self.company_by_id(company_id)?;
        let drive = self.drive_by_id(company_id, drive_id)?;

        Ok(OfferDetails {
            company_id,
            company_name: company.name().to_string(),
            drive_id,
            role_name: drive.role_name().to_string(),
            ctc: drive.ctc(),
            job_category: drive.job_category(),
            job_category_label: drive.job_category().label(),
        })
    }

    /// Whether the student's application on the drive currently sits at `ShortListed`.
    pub fn shortlist_status(
        &self,
        student_id: StudentId,
        drive_id: DriveId,
    ) -> Result<bool, RegistrarError> {
        let application = self.application_for(student_id, drive_id)?;
        Ok(application.status() == ApplicationStatus::ShortListed)
    }

    fn company_position(&self, id: CompanyId) -> Result<usize, RegistrarError> {
        self.company_index
            .get(&id)
            .copied()
            .ok_or_else(|| RegistrarError::not_found(EntityKind::Company, id))
    }

    fn applicant_position(&self, id: StudentId) -> Result<usize, RegistrarError> {
        self.applicant_index
            .get(&id)
            .copied()
            .ok_or_else(|| RegistrarError::not_found(EntityKind::Applicant, id))
    }

    fn drive_position(
        &self,
        company_id: CompanyId,
        drive_id: DriveId,
    ) -> Result<(usize, usize), RegistrarError> {
        let company_position = self.company_position(company_id)?;
        let drive_position = self.companies[company_position]
            .drives()
            .iter()
            .position(|drive| drive.id() == drive_id)
            .ok_or_else(|| RegistrarError::not_found(EntityKind::Drive, drive_id))?;
        Ok((company_position, drive_position))
    }
}
