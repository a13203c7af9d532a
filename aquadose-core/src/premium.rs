//! Timed premium unlock granted for watching a rewarded ad.
//!
//! The current time is always passed in, in milliseconds since the Unix
//! epoch, so nothing here reads a clock.

use crate::{
    error::AquadoseError,
    json_file::{read_json, write_json},
};
use aquadose_schemas::{
    calculation::UnlockRecord,
    file_formats::{PremiumFile, SCHEMA_VERSION},
};
use std::path::Path;
use tracing::info;

pub const DEFAULT_UNLOCK_HOURS: u32 = 24;

const MS_PER_HOUR: i64 = 60 * 60 * 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct PremiumTimer {
    duration_ms: i64,
    unlock: Option<UnlockRecord>,
}

impl Default for PremiumTimer {
    fn default() -> Self {
        Self::new(DEFAULT_UNLOCK_HOURS)
    }
}

impl PremiumTimer {
    pub fn new(unlock_hours: u32) -> Self {
        Self {
            duration_ms: i64::from(unlock_hours) * MS_PER_HOUR,
            unlock: None,
        }
    }

    /// Restores the last unlock from `path`, if one was ever saved.
    pub fn load(path: impl AsRef<Path>, unlock_hours: u32) -> Result<Self, AquadoseError> {
        let path = path.as_ref();
        let mut timer = Self::new(unlock_hours);
        if let Some(file) = read_json::<PremiumFile>(path)? {
            if file.schema_version != SCHEMA_VERSION {
                return Err(AquadoseError::SchemaVersion(
                    path.display().to_string(),
                    file.schema_version,
                ));
            }
            timer.unlock = file.unlock;
        }
        Ok(timer)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AquadoseError> {
        let file = PremiumFile {
            schema_version: SCHEMA_VERSION.to_string(),
            unlock: self.unlock,
        };
        write_json(path.as_ref(), &file)
    }

    pub fn last_unlock(&self) -> Option<UnlockRecord> {
        self.unlock
    }

    /// Starts a fresh unlock window at `now`, replacing any earlier one.
    pub fn unlock_premium(&mut self, now: i64) -> UnlockRecord {
        let record = UnlockRecord {
            unlocked_at: now,
            expires_at: now + self.duration_ms,
        };
        info!(unlocked_at = now, expires_at = record.expires_at, "premium unlocked");
        self.unlock = Some(record);
        record
    }

    /// True while less than the unlock duration has passed since the last unlock.
    pub fn is_premium_active(&self, now: i64) -> bool {
        self.unlock
            .is_some_and(|u| now - u.unlocked_at < self.duration_ms)
    }

    /// Milliseconds left in the current window; zero once it has lapsed.
    pub fn remaining_ms(&self, now: i64) -> i64 {
        self.unlock
            .map_or(0, |u| (u.unlocked_at + self.duration_ms - now).max(0))
    }
}
