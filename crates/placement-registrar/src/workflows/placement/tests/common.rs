use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::placement::{
    AcademicRecord, Applicant, Company, CompanyId, Drive, DriveId, JobCategory,
    PlacementRegistrar, Student, StudentId,
};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn drive(role: &str, min_cgpa: f64, ctc: u32, category: JobCategory) -> Drive {
    Drive::new(
        date(2025, 8, 1),
        date(2025, 8, 15),
        role,
        min_cgpa,
        ctc,
        category,
    )
}

pub(super) fn applicant(id: i64, name: &str, cgpa: f64) -> Applicant {
    Applicant::new(Student::new(id, name), AcademicRecord::new(id, cgpa))
}

/// Ids handed out while building a [`campus`] registrar.
pub(super) struct Campus {
    pub registrar: PlacementRegistrar,
    pub acme: CompanyId,
    pub globex: CompanyId,
    pub acme_engineer: DriveId,
    pub acme_analyst: DriveId,
    pub globex_architect: DriveId,
    pub asha: StudentId,
    pub ravi: StudentId,
    pub meera: StudentId,
}

/// Two companies, three drives and three applicants with no applications yet.
pub(super) fn campus() -> Campus {
    let mut registrar = PlacementRegistrar::new();

    let mut acme = Company::new("Acme");
    let engineer = drive("Engineer", 8.0, 1_200_000, JobCategory::SuperDream);
    let analyst = drive("Analyst", 6.5, 600_000, JobCategory::Day);
    let acme_engineer = engineer.id();
    let acme_analyst = analyst.id();
    acme.add_drive(engineer);
    acme.add_drive(analyst);

    let mut globex = Company::new("Globex");
    let architect = drive("Architect", 9.0, 2_400_000, JobCategory::Marquee);
    let globex_architect = architect.id();
    globex.add_drive(architect);

    let acme_id = acme.id();
    let globex_id = globex.id();
    registrar.add_company(acme);
    registrar.add_company(globex);

    registrar.register_applicant(applicant(1, "Asha", 9.3));
    registrar.register_applicant(applicant(2, "Ravi", 7.1));
    registrar.register_applicant(applicant(3, "Meera", 8.0));

    Campus {
        registrar,
        acme: acme_id,
        globex: globex_id,
        acme_engineer,
        acme_analyst,
        globex_architect,
        asha: StudentId(1),
        ravi: StudentId(2),
        meera: StudentId(3),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
