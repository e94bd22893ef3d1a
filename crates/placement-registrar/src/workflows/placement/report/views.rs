use serde::Serialize;

use super::super::domain::{CompanyId, DriveId, JobCategory, StudentId};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriveReportView {
    pub company_id: CompanyId,
    pub company_name: String,
    pub drive_id: DriveId,
    pub role_name: String,
    pub job_category: JobCategory,
    pub job_category_label: &'static str,
    pub drive_ctc: u32,
    pub selected_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyReportView {
    pub company_id: CompanyId,
    pub company_name: String,
    pub drives: usize,
    pub selected_count: usize,
    pub average_ctc: f64,
    pub average_package_lpa: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentReportView {
    pub student_id: StudentId,
    pub student_name: String,
    pub cgpa: f64,
    pub eligible_roles: usize,
    pub offers_received: usize,
    pub final_offer_drive: Option<DriveId>,
    pub ctc_for_final_offer: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCountEntry {
    pub category: JobCategory,
    pub category_label: &'static str,
    pub drives: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullReportView {
    pub total_companies: usize,
    pub total_offers_made: usize,
    pub total_offers_by_category: Vec<CategoryCountEntry>,
}
