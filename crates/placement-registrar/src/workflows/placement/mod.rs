//! Campus placement registrar: companies run drives, students apply, and the
//! registrar tracks applications through to offers and reports.

pub mod applicant;
pub mod application;
pub mod company;
pub mod domain;
pub mod drive;
pub mod eligibility;
pub mod export;
mod ids;
pub mod policy;
pub mod registrar;
pub mod report;
pub mod router;
pub mod seed;
pub mod service;

#[cfg(test)]
mod tests;

pub use applicant::Applicant;
pub use application::Application;
pub use company::Company;
pub use domain::{
    AcademicRecord, ApplicationId, ApplicationStatus, CompanyId, DriveId, EntityKind,
    JobCategory, RegistrarError, Student, StudentId,
};
pub use drive::Drive;
pub use eligibility::{Eligibility, EligibilityBoundary};
pub use export::ExportError;
pub use policy::{PlacementPolicy, TransitionPolicy};
pub use registrar::{OfferDetails, PlacementRegistrar};
pub use report::{
    CompanyReport, DriveReport, EligibleRole, FullPlacementReport, StudentReport,
};
pub use router::placement_router;
pub use seed::{PlacementSeed, PlacementSeedImporter, SeedError, SeedImport};
pub use service::{
    ApplicantRegistration, ApplicationRequest, CompanyRegistration, DriveRegistration,
    PlacementService, PlacementServiceError, StatusUpdateRequest,
};
