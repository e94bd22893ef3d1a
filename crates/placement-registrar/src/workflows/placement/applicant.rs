use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::application::Application;
use super::domain::{AcademicRecord, ApplicationStatus, DriveId, Student, StudentId};
use super::registrar::PlacementRegistrar;

/// A student taking part in placements, with the academic snapshot taken at registration.
///
/// Later changes to the student's academic record do not reach this snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Applicant {
    student: Student,
    record: AcademicRecord,
    drives_applied_for: Vec<DriveId>,
}

impl Applicant {
    pub fn new(student: Student, record: AcademicRecord) -> Self {
        Self {
            student,
            record,
            drives_applied_for: Vec::new(),
        }
    }

    pub fn id(&self) -> StudentId {
        self.student.id()
    }

    pub fn name(&self) -> &str {
        self.student.name()
    }

    pub fn cgpa(&self) -> f64 {
        self.record.cgpa
    }

    pub fn student(&self) -> &Student {
        &self.student
    }

    pub fn record(&self) -> &AcademicRecord {
        &self.record
    }

    pub fn drives_applied_for(&self) -> &[DriveId] {
        &self.drives_applied_for
    }

    /// Records intent to apply. Duplicates are kept; the registrar decides
    /// whether an application is actually accepted.
    pub fn add_drive_applied_for(&mut self, drive_id: DriveId) {
        self.drives_applied_for.push(drive_id);
    }

    /// Distinct names of companies holding at least one application from this applicant.
    pub fn companies_applied_for(&self, registrar: &PlacementRegistrar) -> BTreeSet<String> {
        let mut company_by_drive: HashMap<DriveId, &str> = HashMap::new();
        for company in registrar.companies() {
            for drive in company.drives() {
                company_by_drive.entry(drive.id()).or_insert(company.name());
            }
        }

        registrar
            .applications()
            .iter()
            .filter(|application| application.applicant() == self.id())
            .filter_map(|application| company_by_drive.get(&application.drive_id()))
            .map(|name| name.to_string())
            .collect()
    }

    pub fn total_companies_applied_for(&self, registrar: &PlacementRegistrar) -> usize {
        self.companies_applied_for(registrar).len()
    }

    /// Selected applications of this applicant in registrar order.
    pub fn offers_received<'a>(&self, registrar: &'a PlacementRegistrar) -> Vec<&'a Application> {
        registrar
            .applications()
            .iter()
            .filter(|application| {
                application.applicant() == self.id()
                    && application.status() == ApplicationStatus::Selected
            })
            .collect()
    }
}
