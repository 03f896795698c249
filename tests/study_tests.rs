use optimization_history::{AttrValue, Direction, Error, Study, TrialPruned, TrialState};

#[test]
fn trial_numbers_follow_creation_order() {
    let study = Study::new("numbers", Direction::Minimize);
    study.optimize(4, |trial| Ok::<_, Error>(trial.number() as f64));

    let numbers: Vec<u64> = study.trials().iter().map(|t| t.number()).collect();
    assert_eq!(numbers, vec![0, 1, 2, 3]);
}

#[test]
fn optimize_records_every_outcome() {
    let study = Study::new("outcomes", Direction::Maximize);
    study.optimize(3, |trial| match trial.number() {
        0 => Ok(1.5),
        1 => Err(Error::from(TrialPruned)),
        _ => Err(Error::TargetEvaluation("nope".into())),
    });

    let trials = study.trials();
    assert_eq!(trials[0].state(), TrialState::Complete);
    assert_eq!(trials[0].value(), Some(1.5));
    assert_eq!(trials[1].state(), TrialState::Pruned);
    assert_eq!(trials[1].value(), None);
    assert_eq!(trials[2].state(), TrialState::Failed);
    assert!(trials[2].fail_reason().unwrap().contains("nope"));
    assert_eq!(study.n_trials_with_state(TrialState::Complete), 1);
}

#[test]
fn bare_trial_pruned_error_prunes() {
    let study = Study::new("pruned", Direction::Minimize);
    study.optimize(1, |_| Err::<f64, _>(TrialPruned));
    assert_eq!(study.trials()[0].state(), TrialState::Pruned);
}

#[test]
fn ask_and_tell_out_of_order() {
    let study = Study::new("ask-tell", Direction::Minimize);
    let first = study.create_trial();
    let second = study.create_trial();
    let third = study.create_trial();

    study.complete_trial(third, 3.0).unwrap();
    study.fail_trial(second, "worker died");
    study.complete_trial(first, 1.0).unwrap();

    let trials = study.trials();
    let numbers: Vec<u64> = trials.iter().map(|t| t.number()).collect();
    assert_eq!(numbers, vec![0, 1, 2]);
    assert_eq!(trials[1].fail_reason(), Some("worker died"));
}

#[test]
fn dimension_mismatch_fails_trial() {
    let study =
        Study::multi_objective("mo", vec![Direction::Minimize, Direction::Minimize]).unwrap();

    let trial = study.create_trial();
    let err = study.complete_trial(trial, 1.0).unwrap_err();
    assert!(matches!(
        err,
        Error::ObjectiveDimensionMismatch {
            expected: 2,
            got: 1
        }
    ));
    assert_eq!(study.trials()[0].state(), TrialState::Failed);

    study.optimize_multi(2, |trial| {
        Ok::<_, Error>(if trial.number() == 1 {
            vec![1.0, 2.0, 3.0]
        } else {
            vec![1.0, 2.0]
        })
    });
    let trials = study.trials();
    assert_eq!(trials[1].state(), TrialState::Failed);
    assert_eq!(
        trials[1].fail_reason(),
        Some(
            Error::ObjectiveDimensionMismatch {
                expected: 2,
                got: 3
            }
            .to_string()
            .as_str()
        )
    );
    assert_eq!(trials[2].state(), TrialState::Complete);
    assert_eq!(trials[2].values(), &[1.0, 2.0]);
}

#[test]
fn single_objective_optimize_on_multi_objective_study_fails_trials() {
    let study =
        Study::multi_objective("mo", vec![Direction::Minimize, Direction::Maximize]).unwrap();
    study.optimize(2, |_| Ok::<_, Error>(1.0));
    assert_eq!(study.n_trials_with_state(TrialState::Failed), 2);
}

#[test]
fn multi_objective_values_have_no_single_value() {
    let study =
        Study::multi_objective("mo", vec![Direction::Minimize, Direction::Maximize]).unwrap();
    study.optimize_multi(1, |_| Ok::<_, Error>(vec![0.5, 0.25]));

    let trial = &study.trials()[0];
    assert_eq!(trial.values(), &[0.5, 0.25]);
    assert_eq!(trial.value(), None);
    assert_eq!(study.direction(), Direction::Minimize);
    assert_eq!(study.directions().len(), 2);
}

#[test]
fn empty_directions_are_rejected() {
    assert!(matches!(
        Study::multi_objective("none", Vec::new()),
        Err(Error::InvalidDirections)
    ));
}

#[test]
fn user_attrs_survive_completion() {
    let study = Study::new("attrs", Direction::Minimize);
    study.optimize(1, |trial| {
        trial.set_user_attr("epochs", 12_i64);
        trial.set_user_attr("optimizer", "adam");
        trial.set_user_attr("converged", true);
        Ok::<_, Error>(0.1)
    });

    let trial = &study.trials()[0];
    assert_eq!(trial.user_attr("epochs"), Some(&AttrValue::Int(12)));
    assert_eq!(trial.user_attr("epochs").and_then(AttrValue::as_f64), Some(12.0));
    assert_eq!(
        trial.user_attr("optimizer"),
        Some(&AttrValue::String("adam".into()))
    );
    assert_eq!(trial.user_attr("converged").and_then(AttrValue::as_f64), None);
    assert_eq!(trial.user_attrs().len(), 3);
}

#[test]
fn study_is_shareable_across_threads() {
    let study = Study::new("threads", Direction::Minimize);
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| study.optimize(5, |trial| Ok::<_, Error>(trial.number() as f64)));
        }
    });

    assert_eq!(study.n_trials(), 20);
    let numbers: Vec<u64> = study.trials().iter().map(|t| t.number()).collect();
    assert_eq!(numbers, (0..20).collect::<Vec<u64>>());
}
