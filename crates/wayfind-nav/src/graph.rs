use core::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use crate::{Cell, GridModel};

#[derive(Debug)]
struct OpenNode {
    f: u32,
    g: u32,
    index: usize,
    tie: u64,
}

impl OpenNode {
    fn key(&self) -> (u32, u32, usize, u64) {
        (self.f, self.g, self.index, self.tie)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

#[derive(Debug, Clone)]
struct GraphNode {
    cell: Cell,
    neighbors: Vec<usize>,
}

/// Connectivity graph over the walkable cells of a [`GridModel`].
///
/// One node per walkable in-bounds cell, keyed by the grid's stable cell
/// index. Built once from the grid's obstacle set as of the build call and
/// immutable afterwards; changing obstacles requires building a new graph.
#[derive(Debug, Clone)]
pub struct NavGraph {
    capacity: usize,
    nodes: BTreeMap<usize, GraphNode>,
}

impl NavGraph {
    /// Snapshot `grid` into a connectivity graph.
    ///
    /// Registers a node for every walkable cell, then probes each node's four
    /// orthogonal neighbors. Running the same probe for both endpoints of an
    /// edge makes orthogonal connectivity bidirectional in effect.
    pub fn build(grid: &GridModel) -> Self {
        let mut nodes = BTreeMap::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.is_blocked(x, y) {
                    continue;
                }
                let cell = Cell::new(x, y);
                let Some(index) = grid.cell_index(cell) else {
                    continue;
                };
                nodes.insert(
                    index,
                    GraphNode {
                        cell,
                        neighbors: Vec::new(),
                    },
                );
            }
        }

        let registered: Vec<usize> = nodes.keys().copied().collect();
        for index in registered {
            let Some(cell) = nodes.get(&index).map(|node| node.cell) else {
                continue;
            };
            let mut neighbors = Vec::with_capacity(4);
            for candidate in orthogonal_neighbors(cell) {
                let Some(n_index) = grid.cell_index(candidate) else {
                    continue;
                };
                if !nodes.contains_key(&n_index) {
                    continue;
                }
                neighbors.push(n_index);
            }
            if let Some(node) = nodes.get_mut(&index) {
                node.neighbors = neighbors;
            }
        }

        Self {
            capacity: grid.cell_count(),
            nodes,
        }
    }

    /// Whether a node is registered for this cell index.
    pub fn contains(&self, index: usize) -> bool {
        self.nodes.contains_key(&index)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.nodes.get(&index).map(|node| node.cell)
    }

    /// Neighbor indices reachable from `index`, in fixed N, E, S, W probe
    /// order.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.nodes
            .get(&index)
            .map(|node| node.neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Lowest-cost route between two registered cell indices.
    ///
    /// Unit step cost with a Manhattan heuristic over the prebuilt adjacency.
    /// Empty when either endpoint is unregistered or the endpoints sit in
    /// disconnected regions. Tie-breaking is deterministic for a fixed graph
    /// and query.
    pub fn shortest_path(&self, start: usize, goal: usize) -> Vec<Cell> {
        let (Some(start_node), Some(goal_node)) = (self.nodes.get(&start), self.nodes.get(&goal))
        else {
            return Vec::new();
        };
        if start == goal {
            return vec![start_node.cell];
        }
        let goal_cell = goal_node.cell;

        let mut open = BinaryHeap::<OpenNode>::new();
        let mut tie: u64 = 0;
        let mut g_score = vec![u32::MAX; self.capacity];
        let mut came_from: Vec<Option<usize>> = vec![None; self.capacity];

        g_score[start] = 0;
        open.push(OpenNode {
            f: manhattan(start_node.cell, goal_cell),
            g: 0,
            index: start,
            tie,
        });
        tie += 1;

        while let Some(node) = open.pop() {
            if node.index == goal {
                return self.reconstruct(&came_from, goal);
            }

            if node.g != g_score[node.index] {
                // Stale heap entry.
                continue;
            }

            for &n_index in self.neighbors(node.index) {
                let tentative_g = node.g.saturating_add(1);
                if tentative_g >= g_score[n_index] {
                    continue;
                }
                let Some(n_cell) = self.cell(n_index) else {
                    continue;
                };

                came_from[n_index] = Some(node.index);
                g_score[n_index] = tentative_g;
                open.push(OpenNode {
                    f: tentative_g.saturating_add(manhattan(n_cell, goal_cell)),
                    g: tentative_g,
                    index: n_index,
                    tie,
                });
                tie += 1;
            }
        }

        Vec::new()
    }

    fn reconstruct(&self, came_from: &[Option<usize>], mut current: usize) -> Vec<Cell> {
        let mut indices = vec![current];
        while let Some(prev) = came_from[current] {
            current = prev;
            indices.push(current);
        }
        indices.reverse();
        indices.into_iter().filter_map(|i| self.cell(i)).collect()
    }
}

fn orthogonal_neighbors(cell: Cell) -> [Cell; 4] {
    // Fixed order for determinism: N, E, S, W.
    [
        Cell::new(cell.x, cell.y - 1),
        Cell::new(cell.x + 1, cell.y),
        Cell::new(cell.x, cell.y + 1),
        Cell::new(cell.x - 1, cell.y),
    ]
}

fn manhattan(a: Cell, b: Cell) -> u32 {
    ((a.x - b.x).abs() + (a.y - b.y).abs()) as u32
}
