use super::common::*;

use crate::workflows::placement::{
    ApplicationStatus, Company, JobCategory, PlacementRegistrar, StudentId,
};

#[test]
fn full_report_counts_drives_per_category() {
    let mut registrar = PlacementRegistrar::new();
    let mut acme = Company::new("Acme");
    let dream = drive("Developer", 7.0, 900_000, JobCategory::Dream);
    let day = drive("Support", 6.0, 400_000, JobCategory::Day);
    let (dream_id, day_id) = (dream.id(), day.id());
    acme.add_drive(dream);
    acme.add_drive(day);
    let acme_id = acme.id();
    registrar.add_company(acme);
    registrar.register_applicant(applicant(1, "Asha", 9.0));
    registrar.register_applicant(applicant(2, "Ravi", 7.5));

    for (student, drive_id) in [(StudentId(1), dream_id), (StudentId(2), day_id)] {
        registrar
            .apply_for_drive(student, acme_id, drive_id)
            .expect("eligible");
        registrar
            .update_application_status(student, drive_id, ApplicationStatus::Selected)
            .expect("selected");
    }

    let report = registrar.generate_full_report();

    assert_eq!(report.total_companies, 1);
    assert_eq!(report.total_offers_made, 2);
    assert_eq!(report.all_offers_made.len(), 2);
    assert_eq!(report.total_offers_by_category(JobCategory::Dream), 1);
    assert_eq!(report.total_offers_by_category(JobCategory::Day), 1);
    assert_eq!(report.total_offers_by_category(JobCategory::Marquee), 0);
}

#[test]
fn category_counts_ignore_selections() {
    let campus = campus();
    let report = campus.registrar.generate_full_report();

    assert_eq!(report.total_offers_made, 0);
    assert_eq!(report.total_offers_by_category(JobCategory::SuperDream), 1);
    assert_eq!(report.total_offers_by_category(JobCategory::Day), 1);
    assert_eq!(report.total_offers_by_category(JobCategory::Marquee), 1);

    let json = serde_json::to_value(&report).expect("serializes");
    assert!(json.get("total_offers_by_category").is_some());
    assert!(json.get("drive_count_by_category").is_none());

    let summary = report.summary();
    let labels: Vec<&str> = summary
        .total_offers_by_category
        .iter()
        .map(|entry| entry.category_label)
        .collect();
    assert_eq!(labels, vec!["Day Company", "Super Dream", "Marquee"]);
}

#[test]
fn student_without_offers_has_no_final_offer() {
    let mut campus = campus();
    campus
        .registrar
        .apply_for_drive(campus.ravi, campus.acme, campus.acme_analyst)
        .expect("eligible");
    campus
        .registrar
        .update_application_status(campus.ravi, campus.acme_analyst, ApplicationStatus::Rejected)
        .expect("rejected");

    let reports = campus.registrar.generate_report_by_student();
    let ravi = reports
        .iter()
        .find(|report| report.student_id == campus.ravi)
        .expect("ravi reported");

    assert!(ravi.offers_received.is_empty());
    assert!(ravi.final_offer.is_none());
    assert_eq!(ravi.ctc_for_final_offer, 0);
    assert_eq!(ravi.eligible_roles.len(), 1);
    assert_eq!(ravi.eligible_roles[0].role_name, "Analyst");
}

#[test]
fn final_offer_is_first_selection_in_registrar_order() {
    let mut campus = campus();
    for (company, drive) in [
        (campus.acme, campus.acme_analyst),
        (campus.globex, campus.globex_architect),
    ] {
        campus
            .registrar
            .apply_for_drive(campus.asha, company, drive)
            .expect("eligible");
        campus
            .registrar
            .update_application_status(campus.asha, drive, ApplicationStatus::Selected)
            .expect("selected");
    }

    let reports = campus.registrar.generate_report_by_student();
    assert_eq!(reports.len(), 3);
    let asha = &reports[0];

    assert_eq!(asha.student_name, "Asha");
    assert_eq!(asha.offers_received.len(), 2);
    let final_offer = asha.final_offer.as_ref().expect("final offer present");
    assert_eq!(final_offer.drive_id(), campus.acme_analyst);
    assert_eq!(asha.ctc_for_final_offer, 600_000);
    assert_eq!(asha.eligible_roles.len(), 3);

    let view = asha.to_view();
    assert_eq!(view.final_offer_drive, Some(campus.acme_analyst));
    assert_eq!(view.offers_received, 2);
}

#[test]
fn latest_drive_report_covers_only_the_last_drive() {
    let mut campus = campus();
    campus
        .registrar
        .apply_for_drive(campus.asha, campus.globex, campus.globex_architect)
        .expect("eligible");
    campus
        .registrar
        .update_application_status(
            campus.asha,
            campus.globex_architect,
            ApplicationStatus::Selected,
        )
        .expect("selected");

    let report = campus
        .registrar
        .generate_report_by_drive()
        .expect("drives registered");

    assert_eq!(report.company_name, "Globex");
    assert_eq!(report.drive_id, campus.globex_architect);
    assert_eq!(report.drive_ctc, 2_400_000);
    assert_eq!(report.selected_count, 1);
}

#[test]
fn drive_reports_cover_every_drive() {
    let mut campus = campus();
    campus
        .registrar
        .apply_for_drive(campus.meera, campus.acme, campus.acme_engineer)
        .expect("eligible");
    campus
        .registrar
        .update_application_status(
            campus.meera,
            campus.acme_engineer,
            ApplicationStatus::Selected,
        )
        .expect("selected");

    let reports = campus.registrar.generate_drive_reports();

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].company_name, "Acme");
    assert_eq!(reports[0].selected_count, 1);
    assert_eq!(reports[1].selected_count, 0);
    assert_eq!(reports[2].company_name, "Globex");
    assert_eq!(reports[0].to_view().job_category_label, "Super Dream");
}

#[test]
fn company_reports_average_zero_without_selections() {
    let campus = campus();

    let reports = campus.registrar.generate_company_reports();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].company_name, "Acme");
    assert_eq!(reports[0].drives, 2);
    assert_eq!(reports[1].drives, 1);
    for report in &reports {
        assert_eq!(report.selected_count, 0);
        assert_eq!(report.average_ctc, 0.0);
        assert_eq!(report.to_view().average_package_lpa, 0.0);
    }
}

#[test]
fn company_reports_average_selected_ctc() {
    let mut campus = campus();
    for (student, drive) in [
        (campus.asha, campus.acme_engineer),
        (campus.ravi, campus.acme_analyst),
        (campus.meera, campus.acme_analyst),
    ] {
        campus
            .registrar
            .apply_for_drive(student, campus.acme, drive)
            .expect("eligible");
    }
    for (student, drive, status) in [
        (campus.asha, campus.acme_engineer, ApplicationStatus::Selected),
        (campus.ravi, campus.acme_analyst, ApplicationStatus::Selected),
        (campus.meera, campus.acme_analyst, ApplicationStatus::Rejected),
    ] {
        campus
            .registrar
            .update_application_status(student, drive, status)
            .expect("status updated");
    }

    let reports = campus.registrar.generate_company_reports();

    let acme = &reports[0];
    assert_eq!(acme.company_id, campus.acme);
    assert_eq!(acme.selected_count, 2);
    assert_eq!(acme.average_ctc, 900_000.0);
    assert_eq!(acme.to_view().average_package_lpa, 9.0);

    let globex = &reports[1];
    assert_eq!(globex.company_id, campus.globex);
    assert_eq!(globex.selected_count, 0);
    assert_eq!(globex.average_ctc, 0.0);
}

#[test]
fn empty_registrar_produces_empty_reports() {
    let registrar = PlacementRegistrar::new();

    assert!(registrar.generate_report_by_drive().is_none());
    assert!(registrar.generate_drive_reports().is_empty());
    assert!(registrar.generate_report_by_student().is_empty());
    assert!(registrar.generate_company_reports().is_empty());

    let full = registrar.generate_full_report();
    assert_eq!(full.total_companies, 0);
    assert_eq!(full.total_offers_made, 0);
    assert!(full.summary().total_offers_by_category.is_empty());
}
