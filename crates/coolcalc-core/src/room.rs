use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoolCalcError;

/// Room categories with a fixed design cooling load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Bedroom,
    LivingRoom,
    Kitchen,
    Office,
    ServerRoom,
    Gym,
}

impl RoomType {
    pub const ALL: [RoomType; 6] = [
        RoomType::Bedroom,
        RoomType::LivingRoom,
        RoomType::Kitchen,
        RoomType::Office,
        RoomType::ServerRoom,
        RoomType::Gym,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Bedroom => "bedroom",
            RoomType::LivingRoom => "living_room",
            RoomType::Kitchen => "kitchen",
            RoomType::Office => "office",
            RoomType::ServerRoom => "server_room",
            RoomType::Gym => "gym",
        }
    }

    /// Nominal ASHRAE design load in watts per square meter.
    pub fn base_load(&self) -> f64 {
        match self {
            RoomType::Bedroom => 100.0,
            RoomType::LivingRoom => 120.0,
            RoomType::Kitchen => 180.0,
            RoomType::Office => 140.0,
            RoomType::ServerRoom => 350.0,
            RoomType::Gym => 220.0,
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = CoolCalcError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "bedroom" => Ok(RoomType::Bedroom),
            "living_room" => Ok(RoomType::LivingRoom),
            "kitchen" => Ok(RoomType::Kitchen),
            "office" => Ok(RoomType::Office),
            "server_room" => Ok(RoomType::ServerRoom),
            "gym" => Ok(RoomType::Gym),
            _ => Err(CoolCalcError::UnknownCategory(value.to_string())),
        }
    }
}

/// The base-load reference table in display order.
pub fn reference_table() -> Vec<(RoomType, f64)> {
    RoomType::ALL
        .iter()
        .map(|room_type| (*room_type, room_type.base_load()))
        .collect()
}
