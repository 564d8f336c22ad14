use fieldmap_core::{Cell, FieldSpec, Grid, Obstacle, Point, codec};
use fieldmap_paths::{
    FieldPather, Path, PathRange, SEARCH_ORDER, SolveError, manhattan, render, solve,
};
use proptest::prelude::*;

fn decoded(spec: &FieldSpec) -> Grid {
    codec::decode(&codec::encode(&spec.build())).unwrap()
}

fn arb_spec() -> impl Strategy<Value = FieldSpec> {
    (1i32..8, 1i32..8).prop_flat_map(|(w, h)| {
        let pt = move || (0..w, 0..h).prop_map(|(x, y)| Point::new(x, y));
        let obstacle = (pt(), pt()).prop_map(|(a, b)| Obstacle { a, b });
        (pt(), pt(), prop::collection::vec(obstacle, 0..4)).prop_map(
            move |(start, finish, obstacles)| FieldSpec {
                width: w,
                height: h,
                start,
                finish,
                obstacles,
            },
        )
    })
}

/// Move counts from `from` to every cell by repeated relaxation,
/// independent of any queue order. Unreachable cells stay `None`.
fn reference_distances(grid: &Grid, from: Point) -> Vec<Option<usize>> {
    let pather = FieldPather::new(grid);
    let w = grid.width() as usize;
    let idx = |p: Point| p.y as usize * w + p.x as usize;
    let mut dist = vec![usize::MAX; grid.bounds().len()];
    dist[idx(from)] = 0;
    let mut changed = true;
    while changed {
        changed = false;
        for p in grid.bounds() {
            let d = dist[idx(p)];
            if d == usize::MAX {
                continue;
            }
            for dir in SEARCH_ORDER {
                let n = p + dir.delta();
                if pather.is_legal(dir, n) && dist[idx(n)] > d + 1 {
                    dist[idx(n)] = d + 1;
                    changed = true;
                }
            }
        }
    }
    dist.into_iter().map(|d| (d != usize::MAX).then_some(d)).collect()
}

fn reference_distance(grid: &Grid, from: Point, to: Point) -> Option<usize> {
    let w = grid.width() as usize;
    reference_distances(grid, from)[to.y as usize * w + to.x as usize]
}

fn assert_moves_are_legal(grid: &Grid, path: &Path) -> Result<(), TestCaseError> {
    for pair in path.points().windows(2) {
        let step = pair[1] - pair[0];
        prop_assert_eq!(manhattan(pair[0], pair[1]), 1, "non-unit step {:?}", step);
        if step.x == 0 {
            prop_assert_ne!(grid.at(pair[1]), Some(Cell::Separator));
        }
        prop_assert_ne!(grid.at(pair[1]), Some(Cell::Blocked));
    }
    Ok(())
}

proptest! {
    #[test]
    fn found_paths_are_legal_and_shortest(spec in arb_spec()) {
        let grid = decoded(&spec);
        match solve(&grid) {
            Ok(sol) => {
                let start = grid.find_last(Cell::Start).unwrap();
                let finish = grid.find_last(Cell::Finish).unwrap();
                prop_assert_eq!(sol.path.start(), Some(start));
                prop_assert_eq!(sol.path.finish(), Some(finish));
                assert_moves_are_legal(&grid, &sol.path)?;
                prop_assert_eq!(
                    Some(sol.path.len() - 1),
                    reference_distance(&grid, start, finish)
                );
            }
            Err(SolveError::NoPath) => {
                let start = grid.find_last(Cell::Start).unwrap();
                let finish = grid.find_last(Cell::Finish).unwrap();
                prop_assert_eq!(reference_distance(&grid, start, finish), None);
            }
            Err(SolveError::MissingMarker { .. }) => {
                prop_assert!(
                    grid.find_last(Cell::Start).is_none()
                        || grid.find_last(Cell::Finish).is_none()
                );
            }
        }
    }

    #[test]
    fn open_fields_take_manhattan_moves(
        w in 1i32..10,
        h in 1i32..10,
        sx in 0i32..10,
        sy in 0i32..10,
        fx in 0i32..10,
        fy in 0i32..10,
    ) {
        let (start, finish) = (Point::new(sx % w, sy % h), Point::new(fx % w, fy % h));
        prop_assume!(start != finish);
        let grid = decoded(&FieldSpec::new(w, h, start, finish));
        let sol = solve(&grid).unwrap();
        let raw_start = Point::new(2 * start.x, start.y);
        let raw_finish = Point::new(2 * finish.x, finish.y);
        prop_assert_eq!(sol.path.len() as i32 - 1, manhattan(raw_start, raw_finish));
        // Every separator crossed sits between two real landings.
        prop_assert_eq!(sol.cost as i32, manhattan(start, finish));
    }

    #[test]
    fn render_is_idempotent(spec in arb_spec()) {
        let grid = decoded(&spec);
        let before = grid.clone();
        let path = solve(&grid).map(|s| s.path).unwrap_or_default();
        let first = render(&grid, &path);
        let second = render(&grid, &path);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&grid, &before);
        prop_assert_eq!(first.len(), grid.height() as usize);
    }

    #[test]
    fn search_visits_each_cell_once(spec in arb_spec(), extra in 0i32..8) {
        let mut grid = decoded(&spec);
        let from = Point::new(0, 0);
        prop_assume!(grid.at(from) != Some(Cell::Blocked));
        // A blocked goal inside the map is never reached, so the search
        // exhausts everything reachable from `from`.
        let goal = Point::new(grid.width() - 1, extra % grid.height());
        grid.set(goal, Cell::Blocked);

        let mut pr = PathRange::new(grid.bounds());
        let path = pr.bfs_path(&FieldPather::new(&grid), from, goal);
        prop_assert!(path.is_empty());
        let reachable = reference_distances(&grid, from)
            .into_iter()
            .filter(Option::is_some)
            .count();
        prop_assert_eq!(pr.visited_count(), reachable);
    }
}

#[test]
fn end_to_end_reference_run() {
    let spec = FieldSpec::new(3, 3, Point::new(0, 0), Point::new(2, 2));
    let payload = codec::encode(&spec.build());
    assert_eq!(payload, "S . . \n. . . \n. . F \n");
    let grid = codec::decode(&payload).unwrap();
    assert_eq!(grid.width(), 6);
    let sol = solve(&grid).unwrap();
    assert_eq!(sol.path.len(), 7);
    assert_eq!(fieldmap_paths::separator_count(&grid, &sol.path), 2);
    assert_eq!(sol.cost, 4);
}
