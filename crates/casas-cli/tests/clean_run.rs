//! End-to-end tests for the `clean` command.

use std::io::Write;
use std::path::PathBuf;

use casas_cli::cli::CleanArgs;
use casas_cli::commands::run_clean;
use casas_ingest::read_csv_table;

fn write_dirty_csv(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("casas_sucias.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "superficie,habitaciones,antiguedad,ubicacion,precio").unwrap();
    writeln!(file, "80m2,tres,nueva,urbnaa,150000").unwrap();
    writeln!(file, "?,dos,5,urbano,145000").unwrap();
    writeln!(file, "60,2,-10,rural,140000").unwrap();
    writeln!(file, "90,4,20,ubano,155000").unwrap();
    writeln!(file, "75,3,12,rural,9999999").unwrap();
    writeln!(file, "110,12,8,urbano,152000").unwrap();
    path
}

#[test]
fn clean_run_writes_dataset_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_dirty_csv(dir.path());
    let output = dir.path().join("data").join("casas_limpias.csv");
    let report = dir.path().join("outputs").join("cleaning_report.json");

    let args = CleanArgs {
        input: Some(input.clone()),
        output: output.clone(),
        report: report.clone(),
    };
    let result = run_clean(&args).unwrap();

    assert_eq!(result.input, input);
    assert_eq!(result.before_shape, (6, 5));
    // One row lost to the placeholder price.
    assert_eq!(result.after_shape, (5, 5));
    assert_eq!(result.problems.precio_outliers_marked, 1);
    assert_eq!(result.problems.antiguedad_negative_fixed, 1);
    assert_eq!(result.problems.habitaciones_out_of_range, 1);

    let clean = read_csv_table(&output).unwrap();
    assert_eq!(clean.rows.len(), 5);
    assert_eq!(
        clean.headers,
        vec!["superficie", "habitaciones", "antiguedad", "ubicacion", "precio"]
    );
    // Every location in the output is canonical.
    for row in &clean.rows {
        assert!(row[3] == "urbano" || row[3] == "rural");
    }

    let contents = std::fs::read_to_string(&report).unwrap();
    let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(json["exploration"]["shape"][0], 6);
    assert_eq!(json["after_shape"][0], 5);
    assert_eq!(json["problems_summary"]["precio_outliers_marked"], 1);
    assert!(json["examples_before"].as_array().unwrap().len() <= 5);
    assert!(json["examples_after"].as_array().unwrap().len() <= 5);
}

#[test]
fn missing_explicit_input_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let args = CleanArgs {
        input: Some(dir.path().join("no_such.csv")),
        output: dir.path().join("out.csv"),
        report: dir.path().join("report.json"),
    };
    let error = run_clean(&args).unwrap_err();
    assert!(error.to_string().contains("not found"));
}

#[test]
fn missing_required_column_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "superficie,precio").unwrap();
    writeln!(file, "80,100000").unwrap();

    let args = CleanArgs {
        input: Some(path),
        output: dir.path().join("out.csv"),
        report: dir.path().join("report.json"),
    };
    let error = run_clean(&args).unwrap_err();
    assert!(error.to_string().contains("habitaciones"));
}
