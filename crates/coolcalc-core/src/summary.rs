use std::fmt;

use crate::records::RoomRecord;

pub const USAGE_HOURS_PER_DAY: f64 = 8.0;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const TARIFF_PER_KWH: f64 = 0.12;

/// Letter grade for the average installed load per square meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyRating {
    A,
    B,
    C,
    D,
}

impl EfficiencyRating {
    /// Bands are inclusive below and exclusive above: `[0,120)` is A,
    /// `[120,150)` B, `[150,180)` C, everything else D.
    pub fn from_watts_per_sqm(watts_per_sqm: f64) -> Self {
        if watts_per_sqm < 120.0 {
            EfficiencyRating::A
        } else if watts_per_sqm < 150.0 {
            EfficiencyRating::B
        } else if watts_per_sqm < 180.0 {
            EfficiencyRating::C
        } else {
            EfficiencyRating::D
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EfficiencyRating::A => "A",
            EfficiencyRating::B => "B",
            EfficiencyRating::C => "C",
            EfficiencyRating::D => "D",
        }
    }
}

impl fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_rooms: usize,
    pub total_area: f64,
    pub total_kw: f64,
    pub total_btu: f64,
    pub total_hp: f64,
    pub watts_per_sqm: f64,
    pub efficiency_rating: EfficiencyRating,
    pub estimated_monthly_cost: f64,
}

/// Aggregates saved records. An empty slice (or one with zero total area)
/// reports 0 W/m² rather than dividing by zero.
pub fn summarize(records: &[RoomRecord]) -> Summary {
    let total_area: f64 = records.iter().map(|record| record.area).sum();
    let total_kw: f64 = records.iter().map(|record| record.kw).sum();
    let total_btu: f64 = records.iter().map(|record| record.btu).sum();
    let total_hp: f64 = records.iter().map(|record| record.hp).sum();

    let watts_per_sqm = if total_area != 0.0 {
        total_kw * 1000.0 / total_area
    } else {
        0.0
    };

    Summary {
        total_rooms: records.len(),
        total_area,
        total_kw,
        total_btu,
        total_hp,
        watts_per_sqm,
        efficiency_rating: EfficiencyRating::from_watts_per_sqm(watts_per_sqm),
        estimated_monthly_cost: total_kw * USAGE_HOURS_PER_DAY * DAYS_PER_MONTH * TARIFF_PER_KWH,
    }
}
