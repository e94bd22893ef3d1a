mod generator;
mod summary;
pub mod views;

pub use summary::{
    CompanyReport, DriveReport, EligibleRole, FullPlacementReport, StudentReport,
};
