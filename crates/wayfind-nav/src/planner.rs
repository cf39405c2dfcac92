use crate::{Cell, GridModel, NavGraph, NavPath, Navigator, Vec2};

/// Translates world-space path requests into graph queries.
///
/// Owns the grid and the graph built from it at construction. Invalid
/// endpoints, disconnected regions, and degenerate same-cell requests all
/// resolve to an empty route, never an error.
#[derive(Debug, Clone)]
pub struct PathPlanner {
    grid: GridModel,
    graph: NavGraph,
    start: Option<Cell>,
    end: Option<Cell>,
}

impl PathPlanner {
    pub fn new(grid: GridModel) -> Self {
        let graph = NavGraph::build(&grid);
        Self {
            grid,
            graph,
            start: None,
            end: None,
        }
    }

    pub fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn graph(&self) -> &NavGraph {
        &self.graph
    }

    /// Store the start endpoint. Out-of-bounds or blocked positions are
    /// rejected as a no-op.
    pub fn set_start(&mut self, world: Vec2) {
        if let Some(cell) = self.accept(world) {
            self.start = Some(cell);
        }
    }

    /// Store the end endpoint. Same rejection rules as [`set_start`](Self::set_start).
    pub fn set_end(&mut self, world: Vec2) {
        if let Some(cell) = self.accept(world) {
            self.end = Some(cell);
        }
    }

    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    pub fn end(&self) -> Option<Cell> {
        self.end
    }

    /// Route between the stored endpoints, as world-space cell centers.
    ///
    /// Empty unless both endpoints are stored and fall in different cells.
    /// The route is computed on each call, not reactively in the setters.
    pub fn path(&self) -> Vec<Vec2> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start != end => self.route(start, end),
            _ => Vec::new(),
        }
    }

    /// Validate both endpoints, store them, and compute the route once.
    ///
    /// Either endpoint invalid means an empty result and the stored endpoints
    /// stay untouched.
    pub fn get_path(&mut self, world_start: Vec2, world_end: Vec2) -> Vec<Vec2> {
        let (Some(start), Some(end)) = (self.accept(world_start), self.accept(world_end)) else {
            return Vec::new();
        };
        self.start = Some(start);
        self.end = Some(end);
        if start == end {
            return Vec::new();
        }
        self.route(start, end)
    }

    fn accept(&self, world: Vec2) -> Option<Cell> {
        let cell = self.grid.world_to_cell(world)?;
        if self.grid.is_blocked(cell.x, cell.y) {
            return None;
        }
        Some(cell)
    }

    fn route(&self, start: Cell, end: Cell) -> Vec<Vec2> {
        let (Some(start_index), Some(end_index)) =
            (self.grid.cell_index(start), self.grid.cell_index(end))
        else {
            return Vec::new();
        };
        let cells = self.graph.shortest_path(start_index, end_index);
        if cells.len() < 2 {
            return Vec::new();
        }
        cells
            .into_iter()
            .map(|cell| self.grid.cell_center(cell))
            .collect()
    }
}

impl Navigator for PathPlanner {
    /// Same validation and conversion as [`get_path`](PathPlanner::get_path)
    /// without touching the stored endpoints.
    fn find_path(&self, start: Vec2, goal: Vec2) -> Option<NavPath> {
        let start = self.accept(start)?;
        let goal = self.accept(goal)?;
        if start == goal {
            return None;
        }
        let points = self.route(start, goal);
        if points.is_empty() {
            None
        } else {
            Some(NavPath::new(points))
        }
    }
}
