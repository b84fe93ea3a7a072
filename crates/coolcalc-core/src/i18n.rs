//! Display text for the languages the estimator ships with.
//!
//! Room labels end up in exported CSV and the name prefix ends up in saved
//! records, so both are part of the data contract and must stay stable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculator::Factor;
use crate::room::RoomType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Zh,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Zh];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Zh => "zh",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            "zh" => Some(Language::Zh),
            _ => None,
        }
    }

    pub fn room_label(&self, room_type: RoomType) -> &'static str {
        use RoomType::*;

        match (self, room_type) {
            (Language::En, Bedroom) => "Bedroom / Rest Area",
            (Language::En, LivingRoom) => "Living Room / Lounge",
            (Language::En, Kitchen) => "Kitchen / Dining",
            (Language::En, Office) => "Office / Workspace",
            (Language::En, ServerRoom) => "Server / Tech Room",
            (Language::En, Gym) => "Gym / Fitness Area",
            (Language::Fr, Bedroom) => "Chambre / Zone de repos",
            (Language::Fr, LivingRoom) => "Salon / Séjour",
            (Language::Fr, Kitchen) => "Cuisine / Salle à manger",
            (Language::Fr, Office) => "Bureau / Espace de travail",
            (Language::Fr, ServerRoom) => "Serveur / Local technique",
            (Language::Fr, Gym) => "Gymnase / Fitness",
            (Language::Zh, Bedroom) => "卧室 / 休息区",
            (Language::Zh, LivingRoom) => "客厅 / 起居室",
            (Language::Zh, Kitchen) => "厨房 / 餐厅",
            (Language::Zh, Office) => "办公室 / 工作区",
            (Language::Zh, ServerRoom) => "服务器 / 机房",
            (Language::Zh, Gym) => "健身房 / 健身区",
        }
    }

    /// First segment of the room label, used where space is tight.
    pub fn short_room_label(&self, room_type: RoomType) -> &'static str {
        let label = self.room_label(room_type);
        label.split(" / ").next().unwrap_or(label)
    }

    pub fn room_name_prefix(&self) -> &'static str {
        match self {
            Language::En => "Room",
            Language::Fr => "Pièce",
            Language::Zh => "房间",
        }
    }

    pub fn factor_label(&self, factor: Factor) -> &'static str {
        match (self, factor) {
            (Language::En, Factor::HighSunExposure) => {
                "High Sun Exposure (South-facing/Large windows)"
            }
            (Language::En, Factor::PoorInsulation) => "Poor Insulation (Old building/Thin walls)",
            (Language::En, Factor::ExtraOccupants) => "High Occupancy (>2 people regularly)",
            (Language::En, Factor::HighElectronicLoad) => {
                "Many Electronics/Appliances (Heat sources)"
            }
            (Language::Fr, Factor::HighSunExposure) => {
                "Exposition Solaire Élevée (Sud/Grandes fenêtres)"
            }
            (Language::Fr, Factor::PoorInsulation) => "Isolation Faible (Vieux bâtiment/Murs fins)",
            (Language::Fr, Factor::ExtraOccupants) => "Occupation Élevée (>2 personnes)",
            (Language::Fr, Factor::HighElectronicLoad) => {
                "Beaucoup d'Électronique (Sources de chaleur)"
            }
            (Language::Zh, Factor::HighSunExposure) => "日照强烈（朝南/大窗户）",
            (Language::Zh, Factor::PoorInsulation) => "隔热较差（老建筑/薄墙）",
            (Language::Zh, Factor::ExtraOccupants) => "人员较多（常驻超过2人）",
            (Language::Zh, Factor::HighElectronicLoad) => "电子设备较多（热源）",
        }
    }

    pub fn advisory_fallback(&self) -> &'static str {
        match self {
            Language::En => {
                "Unable to provide AI analysis at this time. Please use the standard calculations."
            }
            Language::Fr => {
                "Impossible de fournir l'analyse IA pour le moment. Veuillez utiliser les calculs standards."
            }
            Language::Zh => "暂时无法提供AI分析，请使用标准计算结果。",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Language::from_code(value).ok_or_else(|| format!("unknown language '{value}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_labels_every_room() {
        for language in Language::ALL {
            for room_type in RoomType::ALL {
                assert!(!language.room_label(room_type).is_empty());
            }
        }
    }

    #[test]
    fn short_label_drops_the_alternate_name() {
        assert_eq!(Language::En.short_room_label(RoomType::Kitchen), "Kitchen");
        assert_eq!(Language::Fr.short_room_label(RoomType::Gym), "Gymnase");
    }

    #[test]
    fn codes_parse_case_insensitively() {
        assert_eq!("FR".parse::<Language>(), Ok(Language::Fr));
        assert!("de".parse::<Language>().is_err());
    }
}
