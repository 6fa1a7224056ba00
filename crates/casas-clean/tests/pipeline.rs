//! End-to-end tests for the dataset cleaning pipeline.

use casas_clean::clean_table;
use casas_ingest::RawTable;
use casas_model::{Location, RawValue};

fn raw_table(rows: &[[&str; 5]]) -> RawTable {
    let mut table = RawTable {
        superficie: Vec::new(),
        habitaciones: Vec::new(),
        antiguedad: Vec::new(),
        ubicacion: Vec::new(),
        precio: Vec::new(),
    };
    for row in rows {
        table.superficie.push(RawValue::from_cell(row[0]));
        table.habitaciones.push(RawValue::from_cell(row[1]));
        table.antiguedad.push(RawValue::from_cell(row[2]));
        table.ubicacion.push(RawValue::from_cell(row[3]));
        table.precio.push(RawValue::from_cell(row[4]));
    }
    table
}

/// Format a float the way the clean CSV writer does.
fn fmt(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[test]
fn missing_locations_filled_with_mode_of_known_rows() {
    // 100 rows: 60 urbano, 30 rural, 10 empty. The 10 empty rows must
    // take the mode of the 90 known rows.
    let mut rows: Vec<[String; 5]> = Vec::new();
    for i in 0..100 {
        let location = if i < 60 {
            "urbano"
        } else if i < 90 {
            "rural"
        } else {
            ""
        };
        rows.push([
            format!("{}", 50 + i % 40),
            format!("{}", 1 + i % 5),
            format!("{}", i % 30),
            location.to_string(),
            format!("{}", 100_000 + i * 500),
        ]);
    }
    let borrowed: Vec<[&str; 5]> = rows
        .iter()
        .map(|r| [r[0].as_str(), r[1].as_str(), r[2].as_str(), r[3].as_str(), r[4].as_str()])
        .collect();
    let outcome = clean_table(&raw_table(&borrowed));

    assert_eq!(outcome.records.len(), 100);
    let filled: Vec<_> = outcome.records[90..]
        .iter()
        .map(|record| record.ubicacion)
        .collect();
    assert!(filled.iter().all(|location| *location == Location::Urban));
}

#[test]
fn direct_rooms_value_is_not_imputed_and_surface_uses_its_group() {
    let outcome = clean_table(&raw_table(&[
        ["?", "dos", "5", "urbano", "150000"],
        ["60", "2", "3", "urbano", "140000"],
        ["70", "2", "4", "urbano", "150000"],
        ["100", "4", "10", "rural", "160000"],
    ]));

    let row = &outcome.records[0];
    // "dos" resolves directly; surface comes from the median surface
    // of rows sharing (urbano, 2 rooms): median of {60, 70} = 65.
    assert_eq!(row.habitaciones, 2);
    assert_eq!(row.superficie, 65.0);
    assert_eq!(row.ubicacion, Location::Urban);
}

#[test]
fn placeholder_price_rows_are_dropped_and_counted() {
    let outcome = clean_table(&raw_table(&[
        ["80", "3", "5", "urbano", "150000"],
        ["90", "4", "8", "urbano", "9999999"],
        ["70", "2", "3", "rural", "140000"],
    ]));

    assert_eq!(outcome.before_rows, 3);
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.problems.precio_outliers_marked, 1);
    assert!(
        outcome
            .records
            .iter()
            .all(|record| record.precio != 9_999_999.0)
    );
}

#[test]
fn output_satisfies_all_field_invariants() {
    let outcome = clean_table(&raw_table(&[
        ["80m2", "tres", "nueva", "Urbnaa", "150000"],
        ["-5", "12", "-30", "rurall", "140000"],
        ["?", "", "-500", "", "145000"],
        ["0", "dos", "abc", "xyz", "155000"],
        ["95", "5", "40", "urbano", "0"],
        ["110", "6", "15", "rural", "abc"],
    ]));

    for record in &outcome.records {
        assert!(record.superficie > 0.0);
        assert!((1..=10).contains(&record.habitaciones));
        assert!(record.antiguedad >= 0);
        assert!(record.precio > 0.0);
    }
    // Rows with unrecoverable price are gone.
    assert_eq!(outcome.records.len(), 4);
    // "-30" was repaired, "-500" and "abc" were not repairs.
    assert_eq!(outcome.problems.antiguedad_negative_fixed, 1);
    // "Urbnaa", "rurall" were typo fixes; "xyz" was not.
    assert_eq!(outcome.problems.ubicacion_fixed, 2);
    assert_eq!(outcome.problems.superficie_non_numeric, 1);
    assert_eq!(outcome.problems.habitaciones_out_of_range, 1);
}

#[test]
fn no_filtered_price_lies_outside_the_band_of_surviving_values() {
    let mut rows: Vec<[String; 5]> = (0..30)
        .map(|i| {
            [
                "80".to_string(),
                "3".to_string(),
                "5".to_string(),
                "urbano".to_string(),
                format!("{}", 120_000 + i * 1_000),
            ]
        })
        .collect();
    rows.push([
        "80".into(),
        "3".into(),
        "5".into(),
        "urbano".into(),
        "500000000".into(),
    ]);
    let borrowed: Vec<[&str; 5]> = rows
        .iter()
        .map(|r| [r[0].as_str(), r[1].as_str(), r[2].as_str(), r[3].as_str(), r[4].as_str()])
        .collect();
    let outcome = clean_table(&raw_table(&borrowed));

    assert_eq!(outcome.records.len(), 30);
    let mut prices: Vec<f64> = outcome.records.iter().map(|r| r.precio).collect();
    prices.sort_by(f64::total_cmp);
    let q1 = prices[(prices.len() - 1) / 4];
    let q3 = prices[3 * (prices.len() - 1) / 4];
    let iqr = q3 - q1;
    for price in &prices {
        assert!(*price >= q1 - 3.0 * iqr);
        assert!(*price <= q3 + 3.0 * iqr);
    }
}

#[test]
fn cleaning_is_idempotent_on_its_own_output() {
    let first = clean_table(&raw_table(&[
        ["80m2", "tres", "nueva", "urbnaa", "150000"],
        ["60", "2", "-10", "rural", "140000"],
        ["?", "dos", "5", "urbano", "145000"],
        ["90", "4", "20", "ubano", "155000"],
        ["75", "3", "12", "rural", "9999999"],
    ]));
    assert!(!first.records.is_empty());

    // Round-trip the clean output through its textual form, as if the
    // written CSV were fed back in.
    let rows: Vec<[String; 5]> = first
        .records
        .iter()
        .map(|record| {
            [
                fmt(record.superficie),
                record.habitaciones.to_string(),
                record.antiguedad.to_string(),
                record.ubicacion.as_str().to_string(),
                fmt(record.precio),
            ]
        })
        .collect();
    let borrowed: Vec<[&str; 5]> = rows
        .iter()
        .map(|r| [r[0].as_str(), r[1].as_str(), r[2].as_str(), r[3].as_str(), r[4].as_str()])
        .collect();
    let second = clean_table(&raw_table(&borrowed));

    assert_eq!(second.records, first.records);
    assert_eq!(second.problems.superficie_non_numeric, 0);
    assert_eq!(second.problems.habitaciones_out_of_range, 0);
    assert_eq!(second.problems.antiguedad_negative_fixed, 0);
    assert_eq!(second.problems.ubicacion_fixed, 0);
    assert_eq!(second.problems.precio_outliers_marked, 0);
}
