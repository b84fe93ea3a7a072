use chrono::NaiveDate;
use coolcalc_core::calculator::compute_capacity;
use coolcalc_core::export::{export_filename, to_csv, CSV_HEADER};
use coolcalc_core::{
    CoolCalcError, EnvironmentalFactors, Language, RecordStore, RoomRecord, RoomType,
};

const HEADER_LINE: &str = "Room Name,Type,Area (m2),Capacity (kW),Capacity (BTU),Capacity (HP)";

fn english(room_type: RoomType) -> String {
    Language::En.room_label(room_type).to_string()
}

fn bedroom_records() -> Vec<RoomRecord> {
    let mut store = RecordStore::new();
    let result = compute_capacity(20.0, RoomType::Bedroom, &EnvironmentalFactors::default(), false);
    store.confirm(&result, Language::En).unwrap();
    store.into_records()
}

#[test]
fn single_record_export() {
    let csv = to_csv(&bedroom_records(), english).unwrap();

    assert!(csv.starts_with('\u{feff}'));
    let body = csv.trim_start_matches('\u{feff}');
    let lines: Vec<&str> = body.split('\n').collect();

    assert_eq!(lines, vec![HEADER_LINE, "Room 1,Bedroom / Rest Area,20,2.00,6824,0.76"]);
    assert!(!csv.ends_with('\n'));
    assert_eq!(CSV_HEADER.join(","), HEADER_LINE);
}

#[test]
fn rows_follow_list_order() {
    let mut store = RecordStore::new();
    let none = EnvironmentalFactors::default();
    store
        .confirm(&compute_capacity(12.5, RoomType::Office, &none, false), Language::En)
        .unwrap();
    store
        .confirm(&compute_capacity(30.0, RoomType::ServerRoom, &none, true), Language::En)
        .unwrap();

    let csv = to_csv(store.records(), english).unwrap();
    let lines: Vec<&str> = csv.trim_start_matches('\u{feff}').split('\n').collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "Room 1,Office / Workspace,12.5,1.75,5971,0.66");
    assert!(lines[2].starts_with("Room 2,Server / Tech Room,30,13.65,"));
}

#[test]
fn exact_ties_round_up() {
    let mut store = RecordStore::new();
    let result = compute_capacity(7.5, RoomType::ServerRoom, &EnvironmentalFactors::default(), false);
    assert_eq!(result.kilowatts, 2.625);
    store.confirm(&result, Language::En).unwrap();

    let csv = to_csv(store.records(), english).unwrap();

    assert!(csv.ends_with("Room 1,Server / Tech Room,7.5,2.63,8957,1.00"));
}

#[test]
fn type_column_uses_resolver_language() {
    let records = bedroom_records();

    let csv = to_csv(&records, |room_type| {
        Language::Fr.room_label(room_type).to_string()
    })
    .unwrap();

    assert!(csv.ends_with("Room 1,Chambre / Zone de repos,20,2.00,6824,0.76"));
}

#[test]
fn names_with_delimiters_are_quoted() {
    let mut records = bedroom_records();
    records[0].room_name = "Loft, \"upstairs\"".to_string();

    let csv = to_csv(&records, english).unwrap();

    assert!(csv.ends_with("\"Loft, \"\"upstairs\"\"\",Bedroom / Rest Area,20,2.00,6824,0.76"));
}

#[test]
fn empty_list_is_rejected() {
    let err = to_csv(&[], english).unwrap_err();
    assert!(matches!(err, CoolCalcError::EmptyExport));
}

#[test]
fn filename_embeds_iso_date() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
    assert_eq!(export_filename(date), "CoolCal_Pro_Records_2024-03-07.csv");
}
