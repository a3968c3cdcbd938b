use std::io::Cursor;

use fitplot::reader::read_curves;

#[test]
fn two_folds_render_two_lines() {
    let input = "0\t0\t_\t5.0\t3.0\n0\t0\t_\t5.0\t2.0\n0\t1\t_\t4.0\t1.0\n1\t0\t_\t9.0\t8.0\n";
    let curves = read_curves(Cursor::new(input)).unwrap();

    assert_eq!(curves.len(), 2);

    assert_eq!(curves[0].fold, 0);
    assert_eq!(curves[0].points, vec![3.0, 2.0]);
    assert!(!curves[0].trailing);

    assert_eq!(curves[1].fold, 1);
    assert_eq!(curves[1].points, vec![9.0]);
    assert!(curves[1].trailing);
}

#[test]
fn single_fold_is_best_plus_one_per_generation() {
    let best = [0.9, 0.4, 0.15, 0.0];
    let input: String = best
        .iter()
        .enumerate()
        .map(|(g, b)| format!("0\t{g}\tx\t2.0\t{b}\n"))
        .collect();

    let curves = read_curves(Cursor::new(input)).unwrap();
    assert_eq!(curves.len(), 1);
    let expected: Vec<f64> = best.iter().map(|b| 1.0 + b).collect();
    assert_eq!(curves[0].points, expected);
    assert!(curves[0].trailing, "the only fold is flushed at end of stream");
}

#[test]
fn repeated_generation_takes_the_minimum() {
    let input = "0\t0\t_\t1.0\t0.7\n0\t0\t_\t1.0\t0.2\n0\t0\t_\t1.0\t0.5\n";
    let curves = read_curves(Cursor::new(input)).unwrap();
    assert_eq!(curves[0].points, vec![1.2]);
}

#[test]
fn each_fold_restarts_at_generation_zero() {
    let input = "\
0\t0\t_\t1.0\t4.0
0\t1\t_\t1.0\t3.0
0\t2\t_\t1.0\t2.0
1\t0\t_\t1.0\t9.0
1\t1\t_\t1.0\t7.0
2\t0\t_\t1.0\t5.0
";
    let curves = read_curves(Cursor::new(input)).unwrap();
    let folds: Vec<i64> = curves.iter().map(|c| c.fold).collect();
    assert_eq!(folds, vec![0, 1, 2]);
    assert_eq!(curves[0].points, vec![5.0, 4.0, 3.0]);
    assert_eq!(curves[1].points, vec![10.0, 8.0]);
    assert_eq!(curves[2].points, vec![6.0]);

    let trailing: Vec<bool> = curves.iter().map(|c| c.trailing).collect();
    assert_eq!(trailing, vec![false, false, true]);
}

#[test]
fn average_fitness_is_summarised_not_plotted() {
    let input = "0\t0\t_\t4.0\t1.0\n0\t0\t_\t6.0\t3.0\n";
    let curves = read_curves(Cursor::new(input)).unwrap();
    assert_eq!(curves[0].points, vec![2.0]);
    assert_eq!(curves[0].average_means, vec![5.0]);
}
