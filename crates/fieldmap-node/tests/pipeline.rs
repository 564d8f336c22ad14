use std::io::{Cursor, Sink};
use std::thread;

use fieldmap_core::{FieldSpec, Obstacle, Point};
use fieldmap_node::params::TokenReader;
use fieldmap_node::{Bus, FieldCreator, FieldSolver, NodeConfig, Outcome};

fn run_pipeline(specs: &[FieldSpec]) -> Vec<Outcome> {
    let config = NodeConfig::default();
    let bus = Bus::new(config.queue_depth);
    let sub = bus.subscribe(&config.topic).unwrap();
    let solver = thread::spawn(move || {
        let mut outcomes = Vec::new();
        FieldSolver::new().spin(sub, |o| outcomes.push(o));
        outcomes
    });
    let creator = FieldCreator::new(bus.clone(), config.topic.clone());
    for spec in specs {
        creator.publish(spec).unwrap();
    }
    bus.close();
    solver.join().unwrap()
}

#[test]
fn reference_field_end_to_end() {
    let outcomes = run_pipeline(&[FieldSpec::new(3, 3, Point::new(0, 0), Point::new(2, 2))]);
    assert_eq!(outcomes.len(), 1);
    let Outcome::Solved(sol) = &outcomes[0] else {
        panic!("expected a solution, got {:?}", outcomes[0]);
    };
    assert_eq!(sol.path.len(), 7);
    assert_eq!(sol.cost, 4);
    assert_eq!(sol.rendered, vec!["S . . ", "* . . ", "* * F "]);
}

#[test]
fn each_message_is_solved_independently() {
    let specs = vec![
        FieldSpec::new(3, 3, Point::new(0, 0), Point::new(2, 0))
            .with_obstacle(Obstacle::new(1, 0, 1, 1)),
        FieldSpec::new(3, 3, Point::new(0, 0), Point::new(2, 0))
            .with_obstacle(Obstacle::new(1, 2, 1, 0)),
        FieldSpec::new(3, 3, Point::new(0, 0), Point::new(2, 2))
            .with_obstacle(Obstacle::new(0, 0, 0, 0)),
        FieldSpec::new(2, 1, Point::new(0, 0), Point::new(1, 0)),
    ];
    let outcomes = run_pipeline(&specs);
    assert_eq!(outcomes.len(), 4);
    assert!(matches!(&outcomes[0], Outcome::Solved(s) if s.cost == 6));
    assert_eq!(outcomes[1], Outcome::NoPath);
    assert_eq!(
        outcomes[2],
        Outcome::MissingMarker {
            start_found: false,
            finish_found: true,
        }
    );
    assert!(matches!(&outcomes[3], Outcome::Solved(s) if s.cost == 1));
}

#[test]
fn out_of_bounds_finish_is_missing_marker() {
    let outcomes = run_pipeline(&[FieldSpec::new(3, 3, Point::new(0, 0), Point::new(3, 3))]);
    assert_eq!(
        outcomes,
        vec![Outcome::MissingMarker {
            start_found: true,
            finish_found: false,
        }]
    );
    assert_eq!(outcomes[0].report_lines()[1], "Missing marker: F");
}

#[test]
fn concurrent_solvers_share_nothing() {
    let bus = Bus::new(4);
    let subs: Vec<_> = (0..3).map(|_| bus.subscribe("field_map").unwrap()).collect();
    let handles: Vec<_> = subs
        .into_iter()
        .map(|sub| {
            thread::spawn(move || {
                let mut costs = Vec::new();
                FieldSolver::new().spin(sub, |o| {
                    if let Outcome::Solved(s) = o {
                        costs.push(s.cost);
                    }
                });
                costs
            })
        })
        .collect();
    let creator = FieldCreator::new(bus.clone(), "field_map");
    creator
        .publish(&FieldSpec::new(3, 3, Point::new(0, 0), Point::new(2, 2)))
        .unwrap();
    creator
        .publish(&FieldSpec::new(1, 3, Point::new(0, 0), Point::new(0, 2)))
        .unwrap();
    bus.close();
    for h in handles {
        assert_eq!(h.join().unwrap(), vec![4, 2]);
    }
}

#[test]
fn interactive_parameters_drive_the_pipeline() {
    let input = "3 3\n0 0\n2 0\n1\n1 0 1 1\n";
    let spec = TokenReader::<_, Sink>::new(Cursor::new(input), None)
        .read_field_spec()
        .unwrap();
    let outcomes = run_pipeline(&[spec]);
    let Outcome::Solved(sol) = &outcomes[0] else {
        panic!("expected a solution, got {:?}", outcomes[0]);
    };
    assert_eq!(sol.rendered, vec!["S X F ", "* X * ", "* * * "]);
    assert_eq!(sol.report_lines().last().map(String::as_str), Some("M: 6"));
}
