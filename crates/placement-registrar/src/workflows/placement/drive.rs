use chrono::NaiveDate;
use serde::Serialize;

use super::application::Application;
use super::domain::{
    ApplicationId, ApplicationStatus, DriveId, EntityKind, JobCategory, RegistrarError, StudentId,
};
use super::eligibility::Eligibility;
use super::ids::next_drive_id;

/// Recruitment campaign run by one company for one role.
///
/// `applications` mirrors the registrar's canonical records for this drive; the
/// registrar keeps the cached statuses in step with its own list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Drive {
    id: DriveId,
    start_date: NaiveDate,
    end_date: NaiveDate,
    role_name: String,
    eligibility: Eligibility,
    ctc: u32,
    job_category: JobCategory,
    applications: Vec<Application>,
}

impl Drive {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        role_name: impl Into<String>,
        min_cgpa: f64,
        ctc: u32,
        job_category: JobCategory,
    ) -> Self {
        Self {
            id: next_drive_id(),
            start_date,
            end_date,
            role_name: role_name.into(),
            eligibility: Eligibility::new(min_cgpa),
            ctc,
            job_category,
            applications: Vec::new(),
        }
    }

    /// Replaces the generator-issued id, e.g. when mirroring an external roster.
    pub fn with_id(mut self, id: DriveId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> DriveId {
        self.id
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn set_start_date(&mut self, start_date: NaiveDate) {
        self.start_date = start_date;
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn set_end_date(&mut self, end_date: NaiveDate) {
        self.end_date = end_date;
    }

    pub fn role_name(&self) -> &str {
        &self.role_name
    }

    pub fn set_role_name(&mut self, role_name: impl Into<String>) {
        self.role_name = role_name.into();
    }

    pub fn eligibility(&self) -> &Eligibility {
        &self.eligibility
    }

    pub fn eligibility_mut(&mut self) -> &mut Eligibility {
        &mut self.eligibility
    }

    pub fn set_eligibility(&mut self, eligibility: Eligibility) {
        self.eligibility = eligibility;
    }

    pub fn ctc(&self) -> u32 {
        self.ctc
    }

    pub fn set_ctc(&mut self, ctc: u32) {
        self.ctc = ctc;
    }

    pub fn job_category(&self) -> JobCategory {
        self.job_category
    }

    pub fn set_job_category(&mut self, job_category: JobCategory) {
        self.job_category = job_category;
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn append_application(&mut self, application: Application) {
        self.applications.push(application);
    }

    pub fn has_applied(&self, student_id: StudentId) -> bool {
        self.applications
            .iter()
            .any(|application| application.applicant() == student_id)
    }

    pub fn application_by_id(&self, id: ApplicationId) -> Result<&Application, RegistrarError> {
        self.applications
            .iter()
            .find(|application| application.id() == id)
            .ok_or_else(|| RegistrarError::not_found(EntityKind::Application, id))
    }

    pub(crate) fn application_mut(&mut self, id: ApplicationId) -> Option<&mut Application> {
        self.applications
            .iter_mut()
            .find(|application| application.id() == id)
    }

    pub fn selected_applications(&self) -> Vec<&Application> {
        self.applications_with_status(ApplicationStatus::Selected)
    }

    pub fn shortlisted_applications(&self) -> Vec<&Application> {
        self.applications_with_status(ApplicationStatus::ShortListed)
    }

    fn applications_with_status(&self, status: ApplicationStatus) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|application| application.status() == status)
            .collect()
    }
}
