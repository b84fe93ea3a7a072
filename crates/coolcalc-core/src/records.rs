use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculator::CalculationResult;
use crate::error::{CoolCalcError, Result};
use crate::i18n::Language;
use crate::room::RoomType;

pub const MAX_RECORDS: usize = 20;

/// Opaque record identifier. New ids are UUIDv4 strings; ids loaded from
/// storage are kept verbatim whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Saved snapshot of a confirmed calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    pub id: RecordId,
    pub room_name: String,
    pub area: f64,
    pub kw: f64,
    pub btu: f64,
    pub hp: f64,
    pub room_type: RoomType,
}

impl RoomRecord {
    pub fn from_result(result: &CalculationResult, room_name: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(),
            room_name: room_name.into(),
            area: result.area,
            kw: result.kilowatts,
            btu: result.btu_per_hour,
            hp: result.horsepower,
            room_type: result.room_type,
        }
    }
}

/// Ordered, capped list of saved records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<RoomRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps previously persisted records, dropping anything past the cap.
    pub fn from_records(mut records: Vec<RoomRecord>) -> Self {
        if records.len() > MAX_RECORDS {
            warn!(
                loaded = records.len(),
                limit = MAX_RECORDS,
                "Dropping records beyond the limit"
            );
            records.truncate(MAX_RECORDS);
        }
        Self { records }
    }

    pub fn records(&self) -> &[RoomRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<RoomRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.records.len() >= MAX_RECORDS
    }

    pub fn get(&self, id: &RecordId) -> Option<&RoomRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// Saves `result` as a new record named `"<prefix> <n>"`, where `n` is the
    /// list length after insertion. Names repeat once records have been
    /// deleted; that matches how the default names have always behaved.
    pub fn confirm(&mut self, result: &CalculationResult, language: Language) -> Result<&RoomRecord> {
        if self.is_full() {
            debug!(limit = MAX_RECORDS, "Ignoring confirmation at record limit");
            return Err(CoolCalcError::RecordLimitReached { limit: MAX_RECORDS });
        }

        let name = format!("{} {}", language.room_name_prefix(), self.records.len() + 1);
        let record = RoomRecord::from_result(result, name);
        info!(record_id = %record.id, room_name = %record.room_name, "Confirmed record");
        self.records.push(record);

        Ok(&self.records[self.records.len() - 1])
    }

    /// Returns false when no record matched.
    pub fn delete(&mut self, id: &RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| &record.id != id);
        let removed = self.records.len() != before;
        if removed {
            info!(record_id = %id, "Deleted record");
        }
        removed
    }

    /// Applies `new_name` trimmed. Blank names and unknown ids leave the list
    /// untouched and return false.
    pub fn rename(&mut self, id: &RecordId, new_name: &str) -> bool {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return false;
        }

        match self.records.iter_mut().find(|record| &record.id == id) {
            Some(record) => {
                record.room_name = trimmed.to_string();
                info!(record_id = %id, room_name = trimmed, "Renamed record");
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        info!(removed = self.records.len(), "Cleared all records");
        self.records.clear();
    }
}
