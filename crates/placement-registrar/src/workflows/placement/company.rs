use serde::Serialize;

use super::domain::CompanyId;
use super::drive::Drive;
use super::ids::next_company_id;

/// Recruiter owning an ordered list of drives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Company {
    id: CompanyId,
    name: String,
    drives: Vec<Drive>,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(next_company_id(), name)
    }

    pub fn with_id(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            drives: Vec::new(),
        }
    }

    pub fn id(&self) -> CompanyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_drive(&mut self, drive: Drive) {
        self.drives.push(drive);
    }

    /// The live drive list, not a copy.
    pub fn drives(&self) -> &[Drive] {
        &self.drives
    }

    pub fn drives_mut(&mut self) -> &mut Vec<Drive> {
        &mut self.drives
    }
}
