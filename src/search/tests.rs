use itertools::{Itertools, iproduct};
use std::collections::HashSet;

use crate::expression::{BinaryOp, Expression};
use crate::generator::OperatorSet;
use crate::search::{
    Combination, CombinationSearch, Coverage, SearchConfig, SearchError, SearchReport,
};
use crate::utils::UtilsError;

fn default_search() -> CombinationSearch {
    match CombinationSearch::new(SearchConfig::default()) {
        Ok(search) => search,
        Err(e) => panic!("default configuration rejected: {}", e),
    }
}

#[test]
fn test_driver_enumerates_56_combinations() {
    let combinations = default_search().combinations();
    // multisets of size 3 over 6 faces: C(8, 3)
    assert_eq!(combinations.len(), 56);

    let unique: HashSet<Combination> = combinations.iter().copied().collect();
    assert_eq!(unique.len(), 56);

    for combination in &combinations {
        let dice = combination.dice();
        assert!(dice.windows(2).all(|w| w[0] <= w[1]));
        assert!(dice.iter().all(|&d| (1..=6).contains(&d)));
    }

    let mut sorted = combinations.clone();
    sorted.sort();
    assert_eq!(sorted, combinations);
    assert_eq!(combinations.first(), Some(&Combination::new([1, 1, 1])));
    assert_eq!(combinations.last(), Some(&Combination::new([6, 6, 6])));
}

#[test]
fn test_combinations_match_sorted_rolls() {
    for faces in 1..=6u32 {
        let expected: Vec<Combination> = iproduct!(1..=faces, 1..=faces, 1..=faces)
            .map(|(a, b, c)| Combination::new([a, b, c]))
            .sorted()
            .dedup()
            .collect();
        assert_eq!(Combination::all(faces), expected, "faces = {}", faces);
    }
}

#[test]
fn test_combination_sorts_dice() {
    let combination = Combination::new([5, 1, 3]);
    assert_eq!(combination.dice(), [1, 3, 5]);
    assert_eq!(combination.to_string(), "(1, 3, 5)");
}

#[test]
fn test_combination_from_slice() {
    assert_eq!(
        Combination::from_slice(&[3, 2, 1]),
        Ok(Combination::new([1, 2, 3]))
    );
    assert_eq!(
        Combination::from_slice(&[1, 2]),
        Err(SearchError::WrongDiceCount {
            expected: 3,
            actual: 2
        })
    );
}

#[test]
fn test_distinct_permutations() {
    assert_eq!(Combination::new([1, 2, 3]).permutations().len(), 6);
    assert_eq!(Combination::new([2, 1, 2]).permutations().len(), 3);
    assert_eq!(Combination::new([4, 4, 4]).permutations(), vec![vec![4, 4, 4]]);

    let perms = Combination::new([1, 1, 2]).permutations();
    let unique: HashSet<&Vec<u32>> = perms.iter().collect();
    assert_eq!(unique.len(), perms.len());
}

#[test]
fn test_one_two_three_covers_every_target() {
    let search = default_search();
    let coverage = search.coverage(&Combination::new([1, 2, 3]));
    assert!(coverage.is_winning(), "missing {:?}", coverage.missing());
    assert_eq!(coverage.found(), (1..=19).collect::<Vec<u32>>());
}

#[test]
fn test_witnesses_evaluate_to_their_target() {
    let search = default_search();
    let coverage = search.coverage(&Combination::new([1, 2, 3]));
    for (target, expr) in coverage.witnesses() {
        let value = expr.evaluate();
        assert!(
            matches!(value, Ok(v) if (v - f64::from(*target)).abs() < 1e-6),
            "{} = {:?}, expected {}",
            expr,
            value,
            target
        );
        let mut operands = expr.operands();
        operands.sort_unstable();
        assert_eq!(operands, vec![1, 2, 3]);
    }
}

#[test]
fn test_triple_ones_do_not_win() {
    let search = default_search();
    let coverage = search.coverage(&Combination::new([1, 1, 1]));
    assert!(!coverage.is_winning());
    assert!(coverage.missing().contains(&6));
    assert!(coverage.witness(3).is_some());
    assert!(coverage.summary().starts_with("(1, 1, 1): covers "));
}

#[test]
fn test_analyze_rejects_out_of_range_dice() {
    let search = default_search();
    let result = search.analyze(&Combination::new([1, 2, 7]));
    assert_eq!(
        result.err(),
        Some(SearchError::UtilsError(UtilsError::DieOutOfRange {
            value: 7,
            faces: 6
        }))
    );
}

#[test]
fn test_analyze_matches_coverage() {
    let search = default_search();
    let combination = Combination::new([2, 4, 6]);
    let analyzed = search.analyze(&combination).map(|c| c.found());
    assert_eq!(analyzed, Ok(search.coverage(&combination).found()));
}

#[test]
fn test_full_search_report() {
    let report = default_search().run();
    assert_eq!(report.coverages().len(), 56);

    let winners = report.winning_combinations();
    assert!(winners.contains(&Combination::new([1, 2, 3])));
    assert!(!winners.contains(&Combination::new([1, 1, 1])));

    let rendered = report.to_string();
    let mut lines = rendered.lines();
    assert_eq!(
        lines.next(),
        Some(format!("Total valid combinations: {}", winners.len()).as_str())
    );
    let listed: Vec<&str> = lines.collect();
    let expected: Vec<String> = winners.iter().map(|c| c.to_string()).collect();
    assert_eq!(listed, expected);
}

#[test]
fn test_search_is_deterministic() {
    let config = SearchConfig {
        faces: 3,
        ..SearchConfig::default()
    };
    let first = CombinationSearch::new(config.clone()).map(|s| s.run().render(true));
    let second = CombinationSearch::new(config).map(|s| s.run().render(true));
    assert!(first.is_ok());
    assert_eq!(first, second);
}

#[test]
fn test_render_with_expressions() {
    let mut coverage = Coverage::new(Combination::new([1, 2, 3]), 2);
    coverage.record(
        1,
        &Expression::Div(
            Box::new(Expression::Number(3)),
            Box::new(Expression::Add(
                Box::new(Expression::Number(1)),
                Box::new(Expression::Number(2)),
            )),
        ),
    );
    coverage.record(
        2,
        &Expression::Div(
            Box::new(Expression::Add(
                Box::new(Expression::Number(1)),
                Box::new(Expression::Number(3)),
            )),
            Box::new(Expression::Number(2)),
        ),
    );
    let report = SearchReport::new(vec![coverage]);
    assert_eq!(
        report.render(true),
        "Total valid combinations: 1\n(1, 2, 3)\n  1 = (3 / (1 + 2))\n  2 = ((1 + 3) / 2)"
    );
}

#[test]
fn test_record_keeps_simplest_witness() {
    let mut coverage = Coverage::new(Combination::new([1, 2, 3]), 19);
    let long = Expression::Square(Box::new(Expression::Sub(
        Box::new(Expression::Number(2)),
        Box::new(Expression::Number(1)),
    )));
    let short = Expression::Sub(
        Box::new(Expression::Number(3)),
        Box::new(Expression::Number(2)),
    );
    coverage.record(1, &long);
    coverage.record(1, &short);
    assert_eq!(coverage.witness(1), Some(&short));
    coverage.record(1, &long);
    assert_eq!(coverage.witness(1), Some(&short));

    // equal size: lexicographically smaller text wins
    let other = Expression::Div(
        Box::new(Expression::Number(2)),
        Box::new(Expression::Number(2)),
    );
    coverage.record(1, &other);
    assert_eq!(coverage.witness(1), Some(&other));
}

#[test]
fn test_config_validation() {
    assert!(SearchConfig::default().validate().is_ok());

    let config = SearchConfig {
        faces: 0,
        ..SearchConfig::default()
    };
    assert_eq!(config.validate(), Err(SearchError::NoFaces));

    let config = SearchConfig {
        target_max: 0,
        ..SearchConfig::default()
    };
    assert_eq!(config.validate(), Err(SearchError::EmptyTargetRange));

    let config = SearchConfig {
        square_depth: 9,
        ..SearchConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(SearchError::SquareDepthTooLarge { depth: 9, max: 4 })
    );

    for tolerance in [0.0, -1e-6, 0.5, f64::NAN] {
        let config = SearchConfig {
            tolerance,
            ..SearchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SearchError::InvalidTolerance(_))
        ));
    }

    let config = SearchConfig {
        operators: OperatorSet {
            binary: Vec::new(),
            ..OperatorSet::default()
        },
        ..SearchConfig::default()
    };
    assert_eq!(config.validate(), Err(SearchError::NoBinaryOperators));

    assert!(CombinationSearch::new(SearchConfig {
        faces: 0,
        ..SearchConfig::default()
    })
    .is_err());
}

#[test]
fn test_restricted_operators_shrink_coverage() {
    let config = SearchConfig {
        operators: OperatorSet {
            binary: vec![BinaryOp::Add],
            square: false,
            sqrt: false,
        },
        ..SearchConfig::default()
    };
    let search = CombinationSearch::new(config);
    assert!(search.is_ok());
    if let Ok(search) = search {
        let coverage = search.coverage(&Combination::new([1, 2, 3]));
        assert_eq!(coverage.found(), vec![6]);
        assert!(!coverage.is_winning());
    }
}
