use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, Table};
use coolcalc_core::calculator::CalculationResult;
use coolcalc_core::room::reference_table;
use coolcalc_core::rounding::{round_half_up, to_fixed};
use coolcalc_core::{Language, RoomRecord, Summary, MAX_RECORDS};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

fn align_numbers(table: &mut Table, from: usize) {
    let count = table.column_count();
    for index in from..count {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_result(result: &CalculationResult, language: Language) {
    let mut table = new_table(vec!["Room", "Area (m²)", "kW", "BTU/h", "HP"]);
    table.add_row(vec![
        language.room_label(result.room_type).to_string(),
        to_fixed(result.area, 1),
        to_fixed(result.kilowatts, 2),
        format!("{}", round_half_up(result.btu_per_hour) as i64),
        to_fixed(result.horsepower, 2),
    ]);
    align_numbers(&mut table, 1);
    println!("{table}");

    println!(
        "Base load {:.0} W/m², environmental adjustment +{}%{}, adjusted {:.1} W/m²",
        result.base_load,
        result.adjustment_percent(),
        if result.tropical { ", tropical +30%" } else { "" },
        result.adjusted_watts_per_sqm()
    );
}

pub fn print_records(records: &[RoomRecord], language: Language) {
    if records.is_empty() {
        println!("No saved records.");
        return;
    }

    let mut table = new_table(vec!["ID", "Name", "Type", "Area (m²)", "kW", "BTU/h", "HP"]);
    for record in records {
        table.add_row(vec![
            record.id.to_string(),
            record.room_name.clone(),
            language.short_room_label(record.room_type).to_string(),
            record.area.to_string(),
            to_fixed(record.kw, 2),
            format!("{}", round_half_up(record.btu) as i64),
            to_fixed(record.hp, 2),
        ]);
    }
    align_numbers(&mut table, 3);
    println!("{table}");

    let total_kw: f64 = records.iter().map(|record| record.kw).sum();
    println!(
        "{} / {MAX_RECORDS} records, {} kW total",
        records.len(),
        to_fixed(total_kw, 2)
    );
}

pub fn print_summary(summary: &Summary) {
    let mut table = new_table(vec!["Metric", "Value"]);
    table.add_row(vec!["Rooms".to_string(), summary.total_rooms.to_string()]);
    table.add_row(vec!["Total area (m²)".to_string(), to_fixed(summary.total_area, 0)]);
    table.add_row(vec!["Total kW".to_string(), to_fixed(summary.total_kw, 2)]);
    table.add_row(vec![
        "Total BTU/h".to_string(),
        format!("{}k", to_fixed(summary.total_btu / 1000.0, 0)),
    ]);
    table.add_row(vec!["Total HP".to_string(), to_fixed(summary.total_hp, 2)]);
    table.add_row(vec![
        "Efficiency".to_string(),
        format!(
            "{} ({} W/m²)",
            summary.efficiency_rating,
            to_fixed(summary.watts_per_sqm, 0)
        ),
    ]);
    table.add_row(vec![
        "Est. monthly cost".to_string(),
        format!("${}", to_fixed(summary.estimated_monthly_cost, 0)),
    ]);
    align_numbers(&mut table, 1);
    println!("{table}");
    println!("* Estimate based on 8 hours/day usage at $0.12/kWh.");
}

pub fn print_reference(language: Language) {
    let mut table = new_table(vec!["Room", "Base load (W/m²)"]);
    for (room_type, base_load) in reference_table() {
        table.add_row(vec![
            language.short_room_label(room_type).to_string(),
            format!("{base_load:.0}"),
        ]);
    }
    align_numbers(&mut table, 1);
    println!("{table}");
}
