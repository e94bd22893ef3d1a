use crate::infra::load_registrar;
use clap::Args;
use placement_registrar::config::AppConfig;
use placement_registrar::error::AppError;
use placement_registrar::workflows::placement::export::{
    create_file, write_category_counts, write_company_reports, write_drive_reports,
    write_student_reports,
};
use placement_registrar::workflows::placement::{
    CompanyReport, DriveReport, FullPlacementReport, PlacementRegistrar, StudentReport,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReportKind {
    Students,
    Drives,
    Companies,
    Full,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// JSON roster describing companies, drives, applicants and applications
    #[arg(long)]
    pub(crate) seed: PathBuf,
    /// Also write the report rows to this CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Drives report only: show just the last drive visited
    #[arg(long)]
    pub(crate) latest: bool,
}

pub(crate) fn run_report(kind: ReportKind, args: ReportArgs) -> Result<(), AppError> {
    let policy = AppConfig::load()?.placement.policy;
    let registrar = load_registrar(Some(args.seed.as_path()), policy)?;

    match kind {
        ReportKind::Students => {
            let reports = registrar.generate_report_by_student();
            render_student_reports(&reports);
            if let Some(path) = args.csv {
                write_student_reports(create_file(&path)?, &reports)?;
                println!("\nWrote {} student rows to {}", reports.len(), path.display());
            }
        }
        ReportKind::Drives => {
            let reports = drive_reports(&registrar, args.latest);
            render_drive_reports(&reports);
            if let Some(path) = args.csv {
                write_drive_reports(create_file(&path)?, &reports)?;
                println!("\nWrote {} drive rows to {}", reports.len(), path.display());
            }
        }
        ReportKind::Companies => {
            let reports = registrar.generate_company_reports();
            render_company_reports(&reports);
            if let Some(path) = args.csv {
                write_company_reports(create_file(&path)?, &reports)?;
                println!("\nWrote {} company rows to {}", reports.len(), path.display());
            }
        }
        ReportKind::Full => {
            let report = registrar.generate_full_report();
            render_full_report(&report);
            if let Some(path) = args.csv {
                write_category_counts(create_file(&path)?, &report)?;
                println!("\nWrote category counts to {}", path.display());
            }
        }
    }

    Ok(())
}

pub(crate) fn drive_reports(registrar: &PlacementRegistrar, latest: bool) -> Vec<DriveReport> {
    if latest {
        registrar.generate_report_by_drive().into_iter().collect()
    } else {
        registrar.generate_drive_reports()
    }
}

pub(crate) fn render_student_reports(reports: &[StudentReport]) {
    println!("Student placement report ({} applicants)", reports.len());
    for report in reports {
        let view = report.to_view();
        println!(
            "- {} [{}] cgpa {:.2} | {} eligible roles | {} offers",
            view.student_name,
            view.student_id,
            view.cgpa,
            view.eligible_roles,
            view.offers_received
        );
        match view.final_offer_drive {
            Some(drive_id) => println!(
                "  Final offer: drive {} at CTC {}",
                drive_id, view.ctc_for_final_offer
            ),
            None => println!("  Final offer: none"),
        }
    }
}

pub(crate) fn render_drive_reports(reports: &[DriveReport]) {
    if reports.is_empty() {
        println!("No drives registered");
        return;
    }
    println!("Drive report ({} drives)", reports.len());
    for report in reports {
        let view = report.to_view();
        println!(
            "- {} / {} (drive {}) | {} | CTC {} | {} selected",
            view.company_name,
            view.role_name,
            view.drive_id,
            view.job_category_label,
            view.drive_ctc,
            view.selected_count
        );
    }
}

pub(crate) fn render_company_reports(reports: &[CompanyReport]) {
    if reports.is_empty() {
        println!("No companies registered");
        return;
    }
    println!("Company selections ({} companies)", reports.len());
    for report in reports {
        let view = report.to_view();
        println!(
            "- {} | {} drives | {} selected | avg CTC {:.0} ({:.2} LPA)",
            view.company_name,
            view.drives,
            view.selected_count,
            view.average_ctc,
            view.average_package_lpa
        );
    }
}

pub(crate) fn render_full_report(report: &FullPlacementReport) {
    let summary = report.summary();
    println!("Placement summary");
    println!("- Companies: {}", summary.total_companies);
    println!("- Offers made: {}", summary.total_offers_made);
    println!("Drives by category:");
    if summary.total_offers_by_category.is_empty() {
        println!("  (none)");
    }
    for entry in &summary.total_offers_by_category {
        println!("  - {}: {}", entry.category_label, entry.drives);
    }
}
