use std::io::Cursor;

use fitplot::error::FitplotError;
use fitplot::reader::read_curves;

fn empty_generation(input: &str) -> (i64, usize) {
    match read_curves(Cursor::new(input.to_string())) {
        Err(FitplotError::EmptyGeneration { fold, generation }) => (fold, generation),
        other => panic!("expected an empty-generation error, got {other:?}"),
    }
}

#[test]
fn empty_input_has_nothing_to_render() {
    assert_eq!(empty_generation(""), (0, 0));
}

#[test]
fn first_fold_other_than_zero_flushes_an_empty_fold() {
    assert_eq!(empty_generation("3\t0\t_\t1.0\t0.5\n"), (0, 0));
}

#[test]
fn fold_starting_past_generation_zero() {
    let input = "0\t0\t_\t1.0\t0.5\n1\t4\t_\t1.0\t0.5\n";
    assert_eq!(empty_generation(input), (1, 0));
}
