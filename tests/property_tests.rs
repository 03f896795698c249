//! Randomized checks of the history invariants with seeded inputs.

use optimization_history::history::{aggregate, running_best};
use optimization_history::{Direction, Error, HistoryOptions, Study, Target, optimization_history};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_values(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.random_range(-100.0..100.0)).collect()
}

#[test]
fn running_best_is_cumulative_extremum() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let len = rng.random_range(0..40);
        let values = random_values(&mut rng, len);

        let min = running_best(&values, Direction::Minimize);
        let max = running_best(&values, Direction::Maximize);
        assert_eq!(min.len(), values.len());
        for i in 0..values.len() {
            let prefix = &values[..=i];
            let expected_min = prefix.iter().copied().fold(f64::INFINITY, f64::min);
            let expected_max = prefix.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            assert_eq!(min[i], expected_min);
            assert_eq!(max[i], expected_max);
        }
    }
}

#[test]
fn best_series_matches_running_best_of_values() {
    let mut rng = StdRng::seed_from_u64(11);
    for direction in [Direction::Minimize, Direction::Maximize] {
        let values = random_values(&mut rng, 25);
        let study = Study::new("random", direction);
        study.optimize(values.len(), |trial| {
            if trial.number() % 4 == 3 {
                return Err(Error::TargetEvaluation("skipped".into()));
            }
            Ok(values[trial.number() as usize])
        });

        let plot = study.optimization_history(&HistoryOptions::new()).unwrap();
        let shown = &plot.series[0];
        assert!(shown.x.iter().all(|n| n % 4 != 3));
        assert_eq!(plot.series[1].y, running_best(&shown.y, direction));
    }
}

#[test]
fn aggregate_mean_lies_within_contributions() {
    let mut rng = StdRng::seed_from_u64(23);
    let sequences: Vec<Vec<f64>> = (0..8)
        .map(|_| {
            let len = rng.random_range(1..20);
            random_values(&mut rng, len)
        })
        .collect();

    let longest = sequences.iter().map(Vec::len).max().unwrap();
    let points = aggregate(&sequences);
    assert_eq!(points.len(), longest);
    for point in &points {
        let contributed: Vec<f64> = sequences
            .iter()
            .filter_map(|s| s.get(point.position as usize).copied())
            .collect();
        assert_eq!(point.n_studies, contributed.len());
        let lo = contributed.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = contributed.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(point.mean >= lo - 1e-9 && point.mean <= hi + 1e-9);
        assert!(point.std >= 0.0);
    }
}

#[test]
fn custom_target_never_yields_best_or_band() {
    let mut rng = StdRng::seed_from_u64(5);
    let studies: Vec<Study> = (0..4)
        .map(|i| {
            let values = random_values(&mut rng, 6);
            let study = Study::new(format!("s{i}"), Direction::Minimize);
            study.optimize(values.len(), |trial| {
                Ok::<_, Error>(values[trial.number() as usize])
            });
            study
        })
        .collect();

    for error_bar in [false, true] {
        let options = HistoryOptions::new()
            .target(Target::custom(|t| t.value().unwrap_or_default() * 2.0))
            .target_name("Doubled")
            .error_bar(error_bar);
        let plot = optimization_history(&studies, &options).unwrap();

        let expected = if error_bar { 1 } else { studies.len() };
        assert_eq!(plot.series.len(), expected);
        assert!(plot.series.iter().all(|s| !s.is_band()));
        assert!(plot.series_named("Best Value").is_none());
    }
}

#[test]
fn identical_sequences_have_zero_spread() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..50 {
        let len = rng.random_range(1..30);
        let values = random_values(&mut rng, len);
        let copies = rng.random_range(2..12);
        let sequences = vec![values.clone(); copies];

        let points = aggregate(&sequences);
        assert_eq!(points.len(), values.len());
        for (point, value) in points.iter().zip(&values) {
            assert_eq!(point.mean, *value);
            assert_eq!(point.std, 0.0);
            assert_eq!(point.n_studies, copies);
        }
    }
}
