use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use fitplot::error::FitplotError;
use fitplot::reader::{read_curves, read_curves_from_path};
use fitplot::record::ParseError;

fn unique_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "fitplot_malformed_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

#[test]
fn short_line_aborts_with_its_line_number() {
    let input = "0\t0\t_\t1.0\t0.5\n0\t1\t_\t1.0\n";
    match read_curves(Cursor::new(input)) {
        Err(FitplotError::Parse(ParseError::TooFewFields { line, found })) => {
            assert_eq!(line, 2);
            assert_eq!(found, 4);
        }
        other => panic!("expected a field-count error, got {other:?}"),
    }
}

#[test]
fn non_numeric_fold_aborts() {
    let input = "fold\t0\t_\t1.0\t0.5\n";
    let err = read_curves(Cursor::new(input)).unwrap_err();
    assert!(matches!(
        err,
        FitplotError::Parse(ParseError::InvalidInteger { field: "fold", .. })
    ));
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn no_partial_result_after_a_bad_line() {
    // The first fold is complete, but the bad line still fails the whole read.
    let input = "0\t0\t_\t1.0\t0.5\n1\t0\t_\t1.0\t0.5\n1\t1\t_\tnan?\t0.5\n";
    assert!(read_curves(Cursor::new(input)).is_err());
}

#[test]
fn missing_file_names_the_path() {
    let path = unique_path("does_not_exist.tsv");
    let err = read_curves_from_path(&path).unwrap_err();
    assert!(matches!(err, FitplotError::Open { .. }));
    assert!(err.to_string().contains("does_not_exist.tsv"));
}

#[test]
fn reads_from_disk() {
    let path = unique_path("runs.tsv");
    fs::write(&path, "0\t0\t_\t5.0\t3.0\n0\t1\t_\t4.0\t1.0\n").unwrap();

    let curves = read_curves_from_path(&path).unwrap();
    assert_eq!(curves.len(), 1);
    assert_eq!(curves[0].points, vec![4.0, 2.0]);

    let _ = fs::remove_file(&path);
}
