use crate::report::{
    render_company_reports, render_drive_reports, render_full_report, render_student_reports,
};
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use placement_registrar::error::AppError;
use placement_registrar::workflows::placement::{
    AcademicRecord, Applicant, ApplicationStatus, Company, CompanyId, Drive, DriveId,
    EligibilityBoundary, JobCategory, PlacementPolicy, PlacementRegistrar, RegistrarError,
    Student, StudentId, TransitionPolicy,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// First day of the placement season (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) season_start: Option<NaiveDate>,
    /// Require a CGPA strictly above each drive's cut-off.
    #[arg(long)]
    pub(crate) exclusive_boundary: bool,
    /// Refuse to move applications out of Selected or Rejected.
    #[arg(long)]
    pub(crate) guarded: bool,
}

struct SeasonDrive {
    company: CompanyId,
    drive: DriveId,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let season_start = args
        .season_start
        .unwrap_or_else(|| Local::now().date_naive());
    let policy = PlacementPolicy {
        eligibility_boundary: if args.exclusive_boundary {
            EligibilityBoundary::Exclusive
        } else {
            EligibilityBoundary::Inclusive
        },
        transitions: if args.guarded {
            TransitionPolicy::Guarded
        } else {
            TransitionPolicy::Permissive
        },
    };

    println!("Campus placement demo (season starting {season_start})");
    let mut registrar = PlacementRegistrar::with_policy(policy);

    let mut acme = Company::new("Acme Systems");
    let platform = add_drive(&mut acme, season_start, "Platform Engineer", 8.0, 1_400_000, 14.0);
    let support = add_drive(&mut acme, season_start, "Support Analyst", 6.0, 450_000, 4.5);
    registrar.add_company(acme);

    let mut orbit = Company::new("Orbit Labs");
    let research = add_drive(&mut orbit, season_start, "Research Scientist", 9.0, 2_600_000, 26.0);
    registrar.add_company(orbit);

    for (id, name, cgpa) in [
        (101, "Asha Rao", 9.4),
        (102, "Ravi Kumar", 7.2),
        (103, "Meera Iyer", 8.0),
    ] {
        registrar.register_applicant(Applicant::new(
            Student::new(id, name),
            AcademicRecord::new(id, cgpa),
        ));
    }

    println!("\nApplications");
    let attempts = [
        (101, &platform),
        (101, &research),
        (102, &platform),
        (102, &support),
        (103, &platform),
        (103, &platform),
    ];
    for (student, target) in attempts {
        match registrar.apply_for_drive(StudentId(student), target.company, target.drive) {
            Ok(()) => println!("- student {student} applied to drive {}", target.drive),
            Err(err @ RegistrarError::NotFound { .. }) => return Err(demo_failure(err)),
            Err(err) => println!("- declined: {err}"),
        }
    }

    println!("\nSelection rounds");
    let outcomes = [
        (101, research.drive, ApplicationStatus::Selected),
        (101, platform.drive, ApplicationStatus::Selected),
        (102, support.drive, ApplicationStatus::ShortListed),
        (102, support.drive, ApplicationStatus::Selected),
        (103, platform.drive, ApplicationStatus::Rejected),
        (103, platform.drive, ApplicationStatus::Cleared),
    ];
    for (student, drive, status) in outcomes {
        match registrar.update_application_status(StudentId(student), drive, status) {
            Ok(()) => println!("- student {student} on drive {drive} -> {status}"),
            Err(err) => println!("- refused: {err}"),
        }
    }

    println!();
    render_student_reports(&registrar.generate_report_by_student());
    println!();
    render_drive_reports(&registrar.generate_drive_reports());
    println!();
    render_company_reports(&registrar.generate_company_reports());
    println!();
    render_full_report(&registrar.generate_full_report());

    Ok(())
}

fn add_drive(
    company: &mut Company,
    season_start: NaiveDate,
    role: &str,
    min_cgpa: f64,
    ctc: u32,
    package_lpa: f64,
) -> SeasonDrive {
    let drive = Drive::new(
        season_start,
        season_start + Duration::days(7),
        role,
        min_cgpa,
        ctc,
        JobCategory::for_package_lpa(package_lpa),
    );
    let handle = SeasonDrive {
        company: company.id(),
        drive: drive.id(),
    };
    company.add_drive(drive);
    handle
}

fn demo_failure(err: RegistrarError) -> AppError {
    AppError::Placement(err.into())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date(" 2025-08-01 "),
            Ok(NaiveDate::from_ymd_opt(2025, 8, 1).expect("valid date"))
        );
        assert!(parse_date("01/08/2025").is_err());
    }

    #[test]
    fn demo_runs_with_guarded_transitions() {
        let args = DemoArgs {
            season_start: NaiveDate::from_ymd_opt(2025, 8, 1),
            exclusive_boundary: true,
            guarded: true,
        };
        assert!(run_demo(args).is_ok());
    }
}
