use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::report::{CompanyReport, DriveReport, FullPlacementReport, StudentReport};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV export: {0}")]
    Io(#[from] std::io::Error),
}

const STUDENT_HEADER: [&str; 7] = [
    "student_id",
    "student_name",
    "cgpa",
    "eligible_roles",
    "offers_received",
    "final_offer_drive",
    "ctc_for_final_offer",
];
const DRIVE_HEADER: [&str; 6] = ["company", "drive_id", "role", "category", "ctc", "selected"];
const COMPANY_HEADER: [&str; 5] = ["company", "drives", "selected", "average_ctc", "average_lpa"];
const CATEGORY_HEADER: [&str; 2] = ["category", "drives"];

#[derive(Debug, Serialize)]
struct StudentRow<'a> {
    student_id: i64,
    student_name: &'a str,
    cgpa: String,
    eligible_roles: usize,
    offers_received: usize,
    final_offer_drive: Option<u64>,
    ctc_for_final_offer: u32,
}

#[derive(Debug, Serialize)]
struct DriveRow<'a> {
    company: &'a str,
    drive_id: u64,
    role: &'a str,
    category: &'static str,
    ctc: u32,
    selected: usize,
}

#[derive(Debug, Serialize)]
struct CompanyRow<'a> {
    company: &'a str,
    drives: usize,
    selected: usize,
    average_ctc: String,
    average_lpa: String,
}

#[derive(Debug, Serialize)]
struct CategoryRow {
    category: &'static str,
    drives: usize,
}

/// Serializes `rows`; with no rows the header is written on its own.
fn write_rows<W, R, I>(writer: W, header: &[&str], rows: I) -> Result<(), ExportError>
where
    W: Write,
    R: Serialize,
    I: IntoIterator<Item = R>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut written = 0usize;
    for row in rows {
        csv_writer.serialize(row)?;
        written += 1;
    }
    if written == 0 {
        csv_writer.write_record(header)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_student_reports<W: Write>(
    writer: W,
    reports: &[StudentReport],
) -> Result<(), ExportError> {
    let rows = reports.iter().map(|report| StudentRow {
        student_id: report.student_id.0,
        student_name: &report.student_name,
        cgpa: format!("{:.2}", report.cgpa),
        eligible_roles: report.eligible_roles.len(),
        offers_received: report.offers_received.len(),
        final_offer_drive: report.final_offer.as_ref().map(|offer| offer.drive_id().0),
        ctc_for_final_offer: report.ctc_for_final_offer,
    });
    write_rows(writer, &STUDENT_HEADER, rows)
}

pub fn write_drive_reports<W: Write>(
    writer: W,
    reports: &[DriveReport],
) -> Result<(), ExportError> {
    let rows = reports.iter().map(|report| DriveRow {
        company: &report.company_name,
        drive_id: report.drive_id.0,
        role: &report.role_name,
        category: report.job_category.label(),
        ctc: report.drive_ctc,
        selected: report.selected_count,
    });
    write_rows(writer, &DRIVE_HEADER, rows)
}

/// Selections and average package per company.
pub fn write_company_reports<W: Write>(
    writer: W,
    reports: &[CompanyReport],
) -> Result<(), ExportError> {
    let views: Vec<_> = reports.iter().map(CompanyReport::to_view).collect();
    let rows = views.iter().map(|view| CompanyRow {
        company: &view.company_name,
        drives: view.drives,
        selected: view.selected_count,
        average_ctc: format!("{:.2}", view.average_ctc),
        average_lpa: format!("{:.2}", view.average_package_lpa),
    });
    write_rows(writer, &COMPANY_HEADER, rows)
}

/// Drive counts per category, one row per category present in the report.
pub fn write_category_counts<W: Write>(
    writer: W,
    report: &FullPlacementReport,
) -> Result<(), ExportError> {
    let rows = report
        .summary()
        .total_offers_by_category
        .into_iter()
        .map(|entry| CategoryRow {
            category: entry.category_label,
            drives: entry.drives,
        });
    write_rows(writer, &CATEGORY_HEADER, rows)
}

pub fn create_file<P: AsRef<Path>>(path: P) -> Result<File, ExportError> {
    Ok(File::create(path)?)
}
