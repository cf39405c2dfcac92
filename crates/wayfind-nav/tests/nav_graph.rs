use wayfind_nav::{Cell, GridModel, NavGraph};

fn index(grid: &GridModel, x: i32, y: i32) -> usize {
    grid.cell_index(Cell::new(x, y)).expect("cell in bounds")
}

#[test]
fn open_grid_routes_have_manhattan_length() {
    let grid = GridModel::new(6, 6, 1.0);
    let graph = NavGraph::build(&grid);

    let cases = [
        (Cell::new(0, 0), Cell::new(5, 5)),
        (Cell::new(2, 1), Cell::new(2, 4)),
        (Cell::new(4, 0), Cell::new(0, 3)),
    ];
    for (start, goal) in cases {
        let path = graph.shortest_path(index(&grid, start.x, start.y), index(&grid, goal.x, goal.y));
        let manhattan = ((start.x - goal.x).abs() + (start.y - goal.y).abs()) as usize;
        assert_eq!(path.len(), manhattan + 1);
        assert_eq!(path.first().copied(), Some(start));
        assert_eq!(path.last().copied(), Some(goal));
    }
}

#[test]
fn blocked_cells_have_no_node_and_never_appear_in_routes() {
    let mut grid = GridModel::new(4, 4, 1.0);
    grid.set_blocked(1, 1, true);
    grid.set_blocked(2, 1, true);
    let graph = NavGraph::build(&grid);

    assert_eq!(graph.node_count(), 14);
    assert!(!graph.contains(index(&grid, 1, 1)));
    assert!(!graph.contains(index(&grid, 2, 1)));

    let path = graph.shortest_path(index(&grid, 0, 0), index(&grid, 3, 3));
    assert_eq!(path.len(), 7);
    assert!(!path.contains(&Cell::new(1, 1)));
    assert!(!path.contains(&Cell::new(2, 1)));
}

#[test]
fn neighbors_follow_probe_order() {
    let grid = GridModel::new(6, 6, 1.0);
    let graph = NavGraph::build(&grid);

    // Interior cell (2, 2): N, E, S, W.
    assert_eq!(
        graph.neighbors(index(&grid, 2, 2)),
        &[
            index(&grid, 2, 1),
            index(&grid, 3, 2),
            index(&grid, 2, 3),
            index(&grid, 1, 2),
        ]
    );

    // Corner cell (0, 0): only E and S exist.
    assert_eq!(
        graph.neighbors(index(&grid, 0, 0)),
        &[index(&grid, 1, 0), index(&grid, 0, 1)]
    );
}

#[test]
fn disconnected_regions_yield_an_empty_route() {
    let mut grid = GridModel::new(5, 5, 1.0);
    for y in 0..5 {
        grid.set_blocked(2, y, true);
    }
    let graph = NavGraph::build(&grid);

    let path = graph.shortest_path(index(&grid, 0, 2), index(&grid, 4, 2));
    assert!(path.is_empty());
}

#[test]
fn unregistered_endpoints_yield_an_empty_route() {
    let mut grid = GridModel::new(4, 4, 1.0);
    grid.set_blocked(3, 3, true);
    let graph = NavGraph::build(&grid);

    assert!(graph
        .shortest_path(index(&grid, 0, 0), index(&grid, 3, 3))
        .is_empty());
    assert!(graph
        .shortest_path(grid.cell_count() + 7, index(&grid, 0, 0))
        .is_empty());
}

#[test]
fn routes_around_a_wall_with_a_gap() {
    let mut grid = GridModel::new(5, 5, 1.0);
    for y in 0..5 {
        if y == 2 {
            continue;
        }
        grid.set_blocked(2, y, true);
    }
    let graph = NavGraph::build(&grid);

    let path = graph.shortest_path(index(&grid, 0, 0), index(&grid, 4, 4));
    assert!(!path.is_empty());
    assert!(path.contains(&Cell::new(2, 2)));
    assert_eq!(path.first().copied(), Some(Cell::new(0, 0)));
    assert_eq!(path.last().copied(), Some(Cell::new(4, 4)));
}

#[test]
fn identical_queries_return_identical_routes() {
    let mut grid = GridModel::new(10, 10, 1.0);
    for y in 0..10 {
        grid.set_blocked(5, y, true);
    }
    grid.set_blocked(5, 5, false);
    let graph = NavGraph::build(&grid);

    let a = graph.shortest_path(index(&grid, 1, 1), index(&grid, 8, 8));
    let b = graph.shortest_path(index(&grid, 1, 1), index(&grid, 8, 8));
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn rebuilding_after_grid_edits_picks_up_the_change() {
    let mut grid = GridModel::new(4, 4, 1.0);
    grid.set_blocked(1, 0, true);
    grid.set_blocked(1, 1, true);
    grid.set_blocked(1, 2, true);
    grid.set_blocked(1, 3, true);

    let walled = NavGraph::build(&grid);
    assert!(walled
        .shortest_path(index(&grid, 0, 0), index(&grid, 3, 0))
        .is_empty());

    // The built graph is a snapshot: opening the wall only helps a new build.
    grid.set_blocked(1, 2, false);
    assert!(walled
        .shortest_path(index(&grid, 0, 0), index(&grid, 3, 0))
        .is_empty());

    let reopened = NavGraph::build(&grid);
    assert!(!reopened
        .shortest_path(index(&grid, 0, 0), index(&grid, 3, 0))
        .is_empty());
}
