//! Character-grid mazes.
//!
//! | Char | Meaning | Cost to enter |
//! |------|---------|---------------|
//! | `*`  | start   | 1             |
//! | `!`  | end     | 1             |
//! | `x`  | wall    | impassable    |
//! | `.`  | low     | 1             |
//! | `,`  | mid     | 2             |
//! | `#`  | high    | 3             |
//!
//! Nodes are named `(x,y)` with `x` the column and `y` the row. Neighbours
//! are generated in the fixed order up, down, left, right. The heuristic is
//! the Manhattan distance to the end cell, which is admissible because every
//! passable cell costs at least 1. The start node itself reports cost 0.

use std::fmt;
use std::rc::Rc;

use sextant_kernel::{Cost, Environment, StateNode};

use crate::error::EnvironmentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Start,
    End,
    Wall,
    Low,
    Mid,
    High,
}

impl Cell {
    fn parse(c: char) -> Option<Self> {
        match c {
            '*' => Some(Self::Start),
            '!' => Some(Self::End),
            'x' => Some(Self::Wall),
            '.' => Some(Self::Low),
            ',' => Some(Self::Mid),
            '#' => Some(Self::High),
            _ => None,
        }
    }

    /// Cost to step onto the cell; `None` for walls.
    const fn cost(self) -> Option<Cost> {
        match self {
            Self::Start | Self::End | Self::Low => Some(1),
            Self::Mid => Some(2),
            Self::High => Some(3),
            Self::Wall => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Point {
    x: usize,
    y: usize,
}

impl Point {
    #[allow(clippy::cast_possible_wrap)]
    fn manhattan(self, other: Self) -> Cost {
        (self.x.abs_diff(other.x) + self.y.abs_diff(other.y)) as Cost
    }
}

#[derive(Debug)]
struct GridData {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    end: Point,
}

impl GridData {
    fn cell(&self, p: Point) -> Cell {
        self.cells[p.y * self.width + p.x]
    }

    /// Passable in-bounds neighbours in up, down, left, right order.
    fn neighbours(&self, p: Point) -> impl Iterator<Item = (Point, Cost)> + '_ {
        let up = p.y.checked_sub(1).map(|y| Point { x: p.x, y });
        let down = (p.y + 1 < self.height).then_some(Point { x: p.x, y: p.y + 1 });
        let left = p.x.checked_sub(1).map(|x| Point { x, y: p.y });
        let right = (p.x + 1 < self.width).then_some(Point { x: p.x + 1, y: p.y });
        [up, down, left, right]
            .into_iter()
            .flatten()
            .filter_map(|q| self.cell(q).cost().map(|cost| (q, cost)))
    }
}

/// One cell reached along some path.
struct GridNode {
    data: Rc<GridData>,
    point: Point,
    name: String,
    cost: Cost,
}

impl GridNode {
    fn new(data: Rc<GridData>, point: Point, cost: Cost) -> Self {
        Self {
            name: format!("({},{})", point.x, point.y),
            data,
            point,
            cost,
        }
    }
}

impl fmt::Debug for GridNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridNode")
            .field("name", &self.name)
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}

impl StateNode for GridNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn cost(&self) -> Cost {
        self.cost
    }

    fn heuristic(&self) -> Cost {
        self.point.manhattan(self.data.end)
    }

    fn children(&self) -> Vec<Box<dyn StateNode>> {
        self.data
            .neighbours(self.point)
            .map(|(point, cost)| {
                Box::new(GridNode::new(Rc::clone(&self.data), point, cost)) as Box<dyn StateNode>
            })
            .collect()
    }
}

/// A validated grid maze.
#[derive(Debug)]
pub struct GridSpace {
    name: String,
    data: Rc<GridData>,
    start: Point,
    goal: String,
}

impl GridSpace {
    /// Parse a grid from its rows.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvironmentError`] if the grid is empty or ragged, holds
    /// an unknown character, or lacks exactly one start and one end cell.
    pub fn from_rows<S: AsRef<str>>(name: &str, rows: &[S]) -> Result<Self, EnvironmentError> {
        let Some(first) = rows.first() else {
            return Err(EnvironmentError::EmptyGrid {
                name: name.to_string(),
            });
        };
        let width = first.as_ref().chars().count();
        let mut cells = Vec::with_capacity(width * rows.len());
        let mut start = None;
        let mut end = None;

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(EnvironmentError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, c) in row.chars().enumerate() {
                let cell = Cell::parse(c).ok_or(EnvironmentError::InvalidCell { x, y, cell: c })?;
                match cell {
                    Cell::Start if start.is_some() => {
                        return Err(EnvironmentError::DuplicateStart { x, y })
                    }
                    Cell::Start => start = Some(Point { x, y }),
                    Cell::End if end.is_some() => {
                        return Err(EnvironmentError::DuplicateEnd { x, y })
                    }
                    Cell::End => end = Some(Point { x, y }),
                    _ => {}
                }
                cells.push(cell);
            }
        }

        let start = start.ok_or(EnvironmentError::MissingStart)?;
        let end = end.ok_or(EnvironmentError::MissingEnd)?;
        Ok(Self {
            name: name.to_string(),
            goal: format!("({},{})", end.x, end.y),
            data: Rc::new(GridData {
                width,
                height: rows.len(),
                cells,
                end,
            }),
            start,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.data.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.data.height
    }
}

impl Environment for GridSpace {
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&self) -> Box<dyn StateNode> {
        Box::new(GridNode::new(Rc::clone(&self.data), self.start, 0))
    }

    fn is_goal(&self, node: &dyn StateNode) -> bool {
        node.name() == self.goal
    }
}
