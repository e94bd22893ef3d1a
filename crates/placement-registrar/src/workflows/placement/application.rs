use serde::{Deserialize, Serialize};

use super::domain::{ApplicationId, ApplicationStatus, DriveId, StudentId};

/// One applicant's submission to one drive. Only `status` changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    id: ApplicationId,
    drive_id: DriveId,
    applicant: StudentId,
    status: ApplicationStatus,
}

impl Application {
    pub fn new(id: ApplicationId, drive_id: DriveId, applicant: StudentId) -> Self {
        Self {
            id,
            drive_id,
            applicant,
            status: ApplicationStatus::Applied,
        }
    }

    pub fn id(&self) -> ApplicationId {
        self.id
    }

    pub fn drive_id(&self) -> DriveId {
        self.drive_id
    }

    pub fn applicant(&self) -> StudentId {
        self.applicant
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: ApplicationStatus) {
        self.status = status;
    }

    pub fn with_status(mut self, status: ApplicationStatus) -> Self {
        self.status = status;
        self
    }
}
