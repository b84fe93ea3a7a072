use coolcalc_core::{summarize, EfficiencyRating, RecordId, RoomRecord, RoomType};

fn record(area: f64, kw: f64) -> RoomRecord {
    RoomRecord {
        id: RecordId::new(),
        room_name: "Room".to_string(),
        area,
        kw,
        btu: kw * 1000.0 * 3.412142,
        hp: kw * 1000.0 * 3.412142 / 9000.0,
        room_type: RoomType::Office,
    }
}

#[test]
fn totals_and_cost() {
    let records = vec![record(20.0, 2.0), record(30.0, 4.5)];
    let summary = summarize(&records);

    assert_eq!(summary.total_rooms, 2);
    assert_eq!(summary.total_area, 50.0);
    assert_eq!(summary.total_kw, 6.5);
    assert!((summary.total_btu - 6500.0 * 3.412142).abs() < 1e-6);
    assert!((summary.total_hp - 6500.0 * 3.412142 / 9000.0).abs() < 1e-9);
    assert!((summary.watts_per_sqm - 130.0).abs() < 1e-9);
    assert_eq!(summary.efficiency_rating, EfficiencyRating::B);
    assert!((summary.estimated_monthly_cost - 6.5 * 8.0 * 30.0 * 0.12).abs() < 1e-9);
}

#[test]
fn rating_bands_are_closed_below_open_above() {
    let cases = [
        (0.0, EfficiencyRating::A),
        (119.99, EfficiencyRating::A),
        (120.0, EfficiencyRating::B),
        (149.99, EfficiencyRating::B),
        (150.0, EfficiencyRating::C),
        (179.99, EfficiencyRating::C),
        (180.0, EfficiencyRating::D),
        (455.0, EfficiencyRating::D),
    ];

    for (watts_per_sqm, expected) in cases {
        assert_eq!(
            EfficiencyRating::from_watts_per_sqm(watts_per_sqm),
            expected,
            "{watts_per_sqm} W/m²"
        );
    }
}

#[test]
fn rating_uses_aggregate_not_average_of_rooms() {
    // 10 m² at 100 W/m² plus 10 m² at 200 W/m² averages 150 W/m² overall.
    let records = vec![record(10.0, 1.0), record(10.0, 2.0)];
    let summary = summarize(&records);

    assert!((summary.watts_per_sqm - 150.0).abs() < 1e-9);
    assert_eq!(summary.efficiency_rating, EfficiencyRating::C);
}

#[test]
fn empty_input_is_guarded() {
    let summary = summarize(&[]);

    assert_eq!(summary.total_rooms, 0);
    assert_eq!(summary.total_area, 0.0);
    assert_eq!(summary.watts_per_sqm, 0.0);
    assert!(summary.watts_per_sqm.is_finite());
    assert_eq!(summary.estimated_monthly_cost, 0.0);
}

#[test]
fn zero_area_records_do_not_divide_by_zero() {
    let summary = summarize(&[record(0.0, 0.0)]);

    assert_eq!(summary.total_rooms, 1);
    assert_eq!(summary.watts_per_sqm, 0.0);
}
