use std::collections::BTreeMap;

use tracing::debug;

use super::super::applicant::Applicant;
use super::super::company::Company;
use super::super::domain::{ApplicationStatus, DriveId};
use super::super::drive::Drive;
use super::super::registrar::PlacementRegistrar;
use super::summary::{
    CompanyReport, DriveReport, EligibleRole, FullPlacementReport, StudentReport,
};

impl PlacementRegistrar {
    /// Report for the last drive visited, companies first then their drives.
    ///
    /// Kept for callers relying on the single-accumulator behaviour; use
    /// [`PlacementRegistrar::generate_drive_reports`] for one report per drive.
    pub fn generate_report_by_drive(&self) -> Option<DriveReport> {
        let mut report = None;
        for company in self.companies() {
            for drive in company.drives() {
                report = Some(drive_report(company, drive));
            }
        }
        report
    }

    pub fn generate_drive_reports(&self) -> Vec<DriveReport> {
        let reports: Vec<DriveReport> = self
            .companies()
            .iter()
            .flat_map(|company| {
                company
                    .drives()
                    .iter()
                    .map(move |drive| drive_report(company, drive))
            })
            .collect();
        debug!(drives = reports.len(), "drive reports generated");
        reports
    }

    /// Selected applications and their average CTC per company, in registration order.
    pub fn generate_company_reports(&self) -> Vec<CompanyReport> {
        let reports: Vec<CompanyReport> =
            self.companies().iter().map(company_report).collect();
        debug!(companies = reports.len(), "company reports generated");
        reports
    }

    /// One report per registered applicant, in registration order.
    pub fn generate_report_by_student(&self) -> Vec<StudentReport> {
        let reports: Vec<StudentReport> = self
            .applicants()
            .iter()
            .map(|applicant| self.student_report(applicant))
            .collect();
        debug!(students = reports.len(), "student reports generated");
        reports
    }

    pub fn generate_full_report(&self) -> FullPlacementReport {
        let all_offers_made: Vec<_> = self
            .applications()
            .iter()
            .filter(|application| application.status() == ApplicationStatus::Selected)
            .cloned()
            .collect();

        let mut drive_count_by_category = BTreeMap::new();
        for drive in self.all_drives() {
            *drive_count_by_category
                .entry(drive.job_category())
                .or_insert(0) += 1;
        }

        FullPlacementReport {
            total_companies: self.companies().len(),
            total_offers_made: all_offers_made.len(),
            all_offers_made,
            drive_count_by_category,
        }
    }

    fn student_report(&self, applicant: &Applicant) -> StudentReport {
        let boundary = self.policy().eligibility_boundary;
        let eligible_roles = self
            .companies()
            .iter()
            .flat_map(|company| {
                company
                    .drives()
                    .iter()
                    .filter(move |drive| drive.eligibility().check_with(applicant, boundary))
                    .map(move |drive| EligibleRole {
                        company_id: company.id(),
                        company_name: company.name().to_string(),
                        drive_id: drive.id(),
                        role_name: drive.role_name().to_string(),
                        ctc: drive.ctc(),
                        job_category: drive.job_category(),
                    })
            })
            .collect();

        let offers_received: Vec<_> = applicant
            .offers_received(self)
            .into_iter()
            .cloned()
            .collect();
        let final_offer = offers_received.first().cloned();
        let ctc_for_final_offer = final_offer
            .as_ref()
            .and_then(|offer| self.find_drive(offer.drive_id()))
            .map(Drive::ctc)
            .unwrap_or(0);

        StudentReport {
            student_id: applicant.id(),
            student_name: applicant.name().to_string(),
            cgpa: applicant.cgpa(),
            offers_received,
            eligible_roles,
            final_offer,
            ctc_for_final_offer,
        }
    }

    fn find_drive(&self, drive_id: DriveId) -> Option<&Drive> {
        self.all_drives()
            .into_iter()
            .find(|drive| drive.id() == drive_id)
    }
}

fn drive_report(company: &Company, drive: &Drive) -> DriveReport {
    DriveReport {
        company_id: company.id(),
        company_name: company.name().to_string(),
        drive_id: drive.id(),
        role_name: drive.role_name().to_string(),
        job_category: drive.job_category(),
        drive_ctc: drive.ctc(),
        selected_count: drive.selected_applications().len(),
    }
}

fn company_report(company: &Company) -> CompanyReport {
    let (selected_count, total_ctc) = company
        .drives()
        .iter()
        .map(|drive| (drive.selected_applications().len(), drive.ctc()))
        .fold((0usize, 0u64), |(count, total), (selected, ctc)| {
            (count + selected, total + selected as u64 * u64::from(ctc))
        });
    let average_ctc = if selected_count == 0 {
        0.0
    } else {
        total_ctc as f64 / selected_count as f64
    };

    CompanyReport {
        company_id: company.id(),
        company_name: company.name().to_string(),
        drives: company.drives().len(),
        selected_count,
        average_ctc,
    }
}
