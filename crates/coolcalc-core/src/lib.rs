pub mod advisory;
pub mod app;
pub mod calculator;
pub mod config;
pub mod error;
pub mod export;
pub mod i18n;
pub mod records;
pub mod room;
pub mod rounding;
pub mod storage;
pub mod summary;

pub use calculator::{compute_capacity, CalculationResult, EnvironmentalFactors};
pub use error::{CoolCalcError, Result};
pub use i18n::Language;
pub use records::{RecordId, RecordStore, RoomRecord, MAX_RECORDS};
pub use room::RoomType;
pub use summary::{summarize, EfficiencyRating, Summary};
