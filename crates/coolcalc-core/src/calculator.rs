use crate::error::Result;
use crate::i18n::Language;
use crate::room::RoomType;
use crate::rounding::{round_half_up, to_fixed};

pub const BTU_PER_WATT: f64 = 3.412142;
/// Nominal sizing convention for split units, not a physical constant.
pub const BTU_PER_HP: f64 = 9000.0;
pub const TROPICAL_MULTIPLIER: f64 = 1.30;
const WATTS_PER_KILOWATT: f64 = 1000.0;

/// One of the optional environmental surcharges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Factor {
    HighSunExposure,
    PoorInsulation,
    ExtraOccupants,
    HighElectronicLoad,
}

impl Factor {
    pub const ALL: [Factor; 4] = [
        Factor::HighSunExposure,
        Factor::PoorInsulation,
        Factor::ExtraOccupants,
        Factor::HighElectronicLoad,
    ];

    /// Fractional surcharge added to the multiplier when the factor is set.
    pub fn surcharge(&self) -> f64 {
        match self {
            Factor::HighSunExposure => 0.10,
            Factor::PoorInsulation => 0.15,
            Factor::ExtraOccupants => 0.10,
            Factor::HighElectronicLoad => 0.10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvironmentalFactors {
    pub high_sun_exposure: bool,
    pub poor_insulation: bool,
    pub extra_occupants: bool,
    pub high_electronic_load: bool,
}

impl EnvironmentalFactors {
    pub fn all() -> Self {
        Self {
            high_sun_exposure: true,
            poor_insulation: true,
            extra_occupants: true,
            high_electronic_load: true,
        }
    }

    pub fn is_set(&self, factor: Factor) -> bool {
        match factor {
            Factor::HighSunExposure => self.high_sun_exposure,
            Factor::PoorInsulation => self.poor_insulation,
            Factor::ExtraOccupants => self.extra_occupants,
            Factor::HighElectronicLoad => self.high_electronic_load,
        }
    }

    pub fn with(mut self, factor: Factor) -> Self {
        self.set(factor, true);
        self
    }

    pub fn set(&mut self, factor: Factor, enabled: bool) {
        match factor {
            Factor::HighSunExposure => self.high_sun_exposure = enabled,
            Factor::PoorInsulation => self.poor_insulation = enabled,
            Factor::ExtraOccupants => self.extra_occupants = enabled,
            Factor::HighElectronicLoad => self.high_electronic_load = enabled,
        }
    }

    pub fn active(&self) -> impl Iterator<Item = Factor> + '_ {
        Factor::ALL
            .into_iter()
            .filter(move |factor| self.is_set(*factor))
    }

    /// `1 + Σ surcharge` over the set flags; 1.45 with everything set.
    pub fn additive_multiplier(&self) -> f64 {
        self.active()
            .fold(1.0, |multiplier, factor| multiplier + factor.surcharge())
    }
}

/// Outcome of one capacity calculation. Recomputed on every input change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    pub watts: f64,
    pub kilowatts: f64,
    pub btu_per_hour: f64,
    pub horsepower: f64,
    pub area: f64,
    pub room_type: RoomType,
    pub base_load: f64,
    pub additive_multiplier: f64,
    pub tropical: bool,
}

impl CalculationResult {
    /// Environmental surcharge as a whole percentage, e.g. 25 for sun + insulation.
    pub fn adjustment_percent(&self) -> i64 {
        round_half_up((self.additive_multiplier - 1.0) * 100.0) as i64
    }

    pub fn adjusted_watts_per_sqm(&self) -> f64 {
        self.base_load * self.additive_multiplier * tropical_multiplier(self.tropical)
    }
}

fn tropical_multiplier(tropical: bool) -> f64 {
    if tropical {
        TROPICAL_MULTIPLIER
    } else {
        1.0
    }
}

/// Cooling capacity for a room.
///
/// `area` is not validated: zero or negative areas flow straight through the
/// arithmetic. Callers round it to one decimal beforehand (see [`parse_area`]).
pub fn compute_capacity(
    area: f64,
    room_type: RoomType,
    factors: &EnvironmentalFactors,
    tropical: bool,
) -> CalculationResult {
    let base_load = room_type.base_load();
    let additive_multiplier = factors.additive_multiplier();
    let adjusted_watts_per_sqm = base_load * additive_multiplier * tropical_multiplier(tropical);

    let watts = area * adjusted_watts_per_sqm;
    let kilowatts = watts / WATTS_PER_KILOWATT;
    let btu_per_hour = watts * BTU_PER_WATT;
    let horsepower = btu_per_hour / BTU_PER_HP;

    CalculationResult {
        watts,
        kilowatts,
        btu_per_hour,
        horsepower,
        area,
        room_type,
        base_load,
        additive_multiplier,
        tropical,
    }
}

/// Same as [`compute_capacity`] but resolves the room type from its code first.
pub fn compute_capacity_for(
    area: f64,
    room_code: &str,
    factors: &EnvironmentalFactors,
    tropical: bool,
) -> Result<CalculationResult> {
    let room_type: RoomType = room_code.parse()?;
    Ok(compute_capacity(area, room_type, factors, tropical))
}

/// Lenient area parsing for user-typed text.
///
/// Takes the longest numeric prefix (`"12.5m2"` → 12.5). Unparseable text and
/// prefixes that parse to a non-finite value (`"1e400"`) give 0. The result
/// is rounded to one decimal on its exact binary value, so `"1.45"` gives 1.4.
pub fn parse_area(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let value = trimmed
        .char_indices()
        .map(|(idx, ch)| idx + ch.len_utf8())
        .rev()
        .find_map(|end| trimmed[..end].parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0);

    to_fixed(value, 1).parse().unwrap_or(0.0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitRecommendation {
    pub size: String,
    pub units: String,
    pub tip: String,
}

/// Suggests a commercially available unit size for a required horsepower.
pub fn recommend_unit(horsepower: f64, language: Language) -> UnitRecommendation {
    let (size, units, tip): (String, String, &str) = if horsepower <= 0.75 {
        (
            "0.75 HP / 9000 BTU".into(),
            pick(language, "1x Small Split Unit", "1 petit climatiseur split", "1台小型分体机").into(),
            pick(language, "Suitable for small bedroom", "Adapté à une petite chambre", "适合小卧室"),
        )
    } else if horsepower <= 1.0 {
        (
            "1 HP / 12000 BTU".into(),
            pick(language, "1x Standard Split Unit", "1 climatiseur split standard", "1台标准分体机").into(),
            pick(language, "Suitable for standard bedroom", "Adapté à une chambre standard", "适合标准卧室"),
        )
    } else if horsepower <= 1.5 {
        (
            "1.5 HP / 18000 BTU".into(),
            pick(language, "1x Medium Split Unit", "1 climatiseur split moyen", "1台中型分体机").into(),
            pick(
                language,
                "Suitable for living room or large bedroom",
                "Adapté à un salon ou une grande chambre",
                "适合客厅或大卧室",
            ),
        )
    } else if horsepower <= 2.0 {
        (
            "2 HP / 24000 BTU".into(),
            pick(language, "1x Large Split Unit", "1 grand climatiseur split", "1台大型分体机").into(),
            pick(language, "Suitable for large living room", "Adapté à un grand salon", "适合大客厅"),
        )
    } else if horsepower <= 3.0 {
        (
            "3 HP / 36000 BTU".into(),
            pick(
                language,
                "1x Floor Unit or 2x 1.5HP Splits",
                "1 armoire ou 2 splits de 1,5 HP",
                "1台柜机或2台1.5HP分体机",
            )
            .into(),
            pick(language, "Suitable for open spaces", "Adapté aux espaces ouverts", "适合开放式空间"),
        )
    } else if horsepower <= 5.0 {
        (
            "5 HP / 60000 BTU".into(),
            pick(
                language,
                "1x Large Floor Unit or Multi-Split",
                "1 grande armoire ou un multi-split",
                "1台大柜机或多联机",
            )
            .into(),
            pick(language, "Commercial-grade cooling", "Refroidissement de niveau commercial", "商业级别制冷"),
        )
    } else {
        let unit_count = (horsepower / 3.0).ceil() as u32;
        let size = format!(
            "{} HP / {} BTU",
            to_fixed(horsepower, 1),
            round_half_up(horsepower * 12000.0) as i64
        );
        let units = match language {
            Language::En => format!("Recommend {unit_count}x 3HP Units"),
            Language::Fr => format!("{unit_count} unités de 3 HP recommandées"),
            Language::Zh => format!("建议 {unit_count} 台3HP设备"),
        };
        let tip = pick(
            language,
            "Requires professional HVAC design",
            "Nécessite une étude CVC professionnelle",
            "需要专业HVAC设计",
        );
        (size, units, tip)
    };

    UnitRecommendation {
        size,
        units,
        tip: tip.to_string(),
    }
}

fn pick(language: Language, en: &'static str, fr: &'static str, zh: &'static str) -> &'static str {
    match language {
        Language::En => en,
        Language::Fr => fr,
        Language::Zh => zh,
    }
}
