use std::collections::BTreeMap;

use serde::Serialize;

use super::super::application::Application;
use super::super::domain::{CompanyId, DriveId, JobCategory, StudentId};
use super::views::{
    CategoryCountEntry, CompanyReportView, DriveReportView, FullReportView, StudentReportView,
};

/// Outcome of one drive: owning company, package and number of selections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriveReport {
    pub company_id: CompanyId,
    pub company_name: String,
    pub drive_id: DriveId,
    pub role_name: String,
    pub job_category: JobCategory,
    pub drive_ctc: u32,
    pub selected_count: usize,
}

impl DriveReport {
    pub fn to_view(&self) -> DriveReportView {
        DriveReportView {
            company_id: self.company_id,
            company_name: self.company_name.clone(),
            drive_id: self.drive_id,
            role_name: self.role_name.clone(),
            job_category: self.job_category,
            job_category_label: self.job_category.label(),
            drive_ctc: self.drive_ctc,
            selected_count: self.selected_count,
        }
    }
}

/// Selections made by one company across all of its drives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyReport {
    pub company_id: CompanyId,
    pub company_name: String,
    pub drives: usize,
    pub selected_count: usize,
    /// Mean CTC of the selected applications; 0 when nobody was selected.
    pub average_ctc: f64,
}

impl CompanyReport {
    pub fn to_view(&self) -> CompanyReportView {
        CompanyReportView {
            company_id: self.company_id,
            company_name: self.company_name.clone(),
            drives: self.drives,
            selected_count: self.selected_count,
            average_ctc: self.average_ctc,
            average_package_lpa: self.average_ctc / 100_000.0,
        }
    }
}

/// A drive the student's CGPA qualifies for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibleRole {
    pub company_id: CompanyId,
    pub company_name: String,
    pub drive_id: DriveId,
    pub role_name: String,
    pub ctc: u32,
    pub job_category: JobCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentReport {
    pub student_id: StudentId,
    pub student_name: String,
    pub cgpa: f64,
    pub offers_received: Vec<Application>,
    pub eligible_roles: Vec<EligibleRole>,
    /// First offer in registrar order, not the best paid one.
    pub final_offer: Option<Application>,
    pub ctc_for_final_offer: u32,
}

impl StudentReport {
    pub fn to_view(&self) -> StudentReportView {
        StudentReportView {
            student_id: self.student_id,
            student_name: self.student_name.clone(),
            cgpa: self.cgpa,
            eligible_roles: self.eligible_roles.len(),
            offers_received: self.offers_received.len(),
            final_offer_drive: self.final_offer.as_ref().map(Application::drive_id),
            ctc_for_final_offer: self.ctc_for_final_offer,
        }
    }
}

/// Process-wide totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullPlacementReport {
    pub total_companies: usize,
    pub all_offers_made: Vec<Application>,
    pub total_offers_made: usize,
    /// Number of drives per category. Published as `total_offers_by_category`
    /// for compatibility even though it does not count offers.
    #[serde(rename = "total_offers_by_category")]
    pub drive_count_by_category: BTreeMap<JobCategory, usize>,
}

impl FullPlacementReport {
    pub fn total_offers_by_category(&self, category: JobCategory) -> usize {
        self.drive_count_by_category
            .get(&category)
            .copied()
            .unwrap_or(0)
    }

    pub fn summary(&self) -> FullReportView {
        let total_offers_by_category = JobCategory::ordered()
            .into_iter()
            .filter_map(|category| {
                self.drive_count_by_category
                    .get(&category)
                    .map(|drives| CategoryCountEntry {
                        category,
                        category_label: category.label(),
                        drives: *drives,
                    })
            })
            .collect();

        FullReportView {
            total_companies: self.total_companies,
            total_offers_made: self.total_offers_made,
            total_offers_by_category,
        }
    }
}
