use std::sync::atomic::{AtomicU64, Ordering};

use super::domain::{CompanyId, DriveId};

/// Monotonic counter seeded at zero; the first issued value is 1.
///
/// Values are unique for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: AtomicU64,
}

impl IdSequence {
    pub const fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    pub fn next_id(&self) -> u64 {
        self.last.fetch_add(1, Ordering::Relaxed) + 1
    }
}

static COMPANY_SEQUENCE: IdSequence = IdSequence::new();
static DRIVE_SEQUENCE: IdSequence = IdSequence::new();

pub(crate) fn next_company_id() -> CompanyId {
    CompanyId(COMPANY_SEQUENCE.next_id())
}

pub(crate) fn next_drive_id() -> DriveId {
    DriveId(DRIVE_SEQUENCE.next_id())
}
