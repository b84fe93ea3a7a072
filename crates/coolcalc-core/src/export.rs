use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

use crate::error::{CoolCalcError, Result};
use crate::records::RoomRecord;
use crate::room::RoomType;
use crate::rounding::{round_half_up, to_fixed};

const BOM: &str = "\u{feff}";

pub const CSV_HEADER: [&str; 6] = [
    "Room Name",
    "Type",
    "Area (m2)",
    "Capacity (kW)",
    "Capacity (BTU)",
    "Capacity (HP)",
];

/// Serializes records to BOM-prefixed CSV text.
///
/// `label` resolves the "Type" column at export time, so the column follows
/// whatever language is active now rather than when the record was saved.
/// Rows are newline separated with no trailing newline. kW and HP take two
/// decimals with exact ties rounded up (`2.625` → `2.63`). Fields containing a
/// comma, quote or newline are quoted; all others are written bare.
pub fn to_csv<F>(records: &[RoomRecord], label: F) -> Result<String>
where
    F: Fn(RoomType) -> String,
{
    if records.is_empty() {
        return Err(CoolCalcError::EmptyExport);
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([
            record.room_name.clone(),
            label(record.room_type),
            record.area.to_string(),
            to_fixed(record.kw, 2),
            format!("{}", round_half_up(record.btu) as i64),
            to_fixed(record.hp, 2),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| CoolCalcError::Io(err.into_error()))?;
    let body = String::from_utf8(bytes).map_err(|err| {
        CoolCalcError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })?;

    let body = body.strip_suffix('\n').unwrap_or(&body);

    Ok(format!("{BOM}{body}"))
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("CoolCal_Pro_Records_{}.csv", date.format("%Y-%m-%d"))
}
