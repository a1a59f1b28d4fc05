//! Version history rows.

/// One row of the version table: a migration version and whether it was
/// applied (`true`) or rolled back (`false`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionRecord {
    pub version_id: i64,
    pub is_applied: bool,
}

impl VersionRecord {
    pub fn new(version_id: i64, is_applied: bool) -> Self {
        Self {
            version_id,
            is_applied,
        }
    }
}

impl From<(i64, bool)> for VersionRecord {
    fn from((version_id, is_applied): (i64, bool)) -> Self {
        Self::new(version_id, is_applied)
    }
}
