//! Integer line rasterization
//!
//! Bresenham's line algorithm using integer arithmetic only. Shallow lines
//! step along x, steep lines are handed to the transposed routine and step
//! along y. Endpoints are reordered so the stepping axis always increases.

/// Largest supported coordinate magnitude
///
/// Keeps `2 * dx`, `2 * dy` and the error term inside `i64`.
pub const MAX_COORDINATE: i64 = 1 << 59;

/// Grid cell coordinate
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// Rasterize the segment between two points
///
/// Returns every grid cell of the segment exactly once, both endpoints
/// included, ordered by increasing x for shallow lines and by increasing y
/// for steep ones. Consecutive cells are 8-connected.
///
/// The number of cells is always `max(|dx|, |dy|) + 1`.
///
/// Every coordinate must lie in `[-MAX_COORDINATE, MAX_COORDINATE]`;
/// outside that range the arithmetic may overflow.
pub fn rasterize_line(start: Point, end: Point) -> Vec<Point> {
    debug_assert!(
        [start.x, start.y, end.x, end.y]
            .iter()
            .all(|c| c.unsigned_abs() <= MAX_COORDINATE as u64),
        "coordinate out of range: {:?} -> {:?}",
        start,
        end
    );

    if (end.y - start.y).abs() < (end.x - start.x).abs() {
        if start.x > end.x {
            plot_line_low(end, start)
        } else {
            plot_line_low(start, end)
        }
    } else if start.y > end.y {
        plot_line_high(end, start)
    } else {
        plot_line_high(start, end)
    }
}

/// Shallow line (|dy| < |dx|), requires `p0.x <= p1.x`
fn plot_line_low(p0: Point, p1: Point) -> Vec<Point> {
    let dx = p1.x - p0.x;
    let mut dy = p1.y - p0.y;
    let mut y_step = 1;
    if dy < 0 {
        y_step = -1;
        dy = -dy;
    }

    let mut error = 2 * dy - dx;
    let mut y = p0.y;

    let mut cells = Vec::with_capacity(dx as usize + 1);
    for x in p0.x..=p1.x {
        cells.push(Point::new(x, y));
        if error > 0 {
            y += y_step;
            error += 2 * (dy - dx);
        } else {
            error += 2 * dy;
        }
    }

    cells
}

/// Steep line (|dy| >= |dx|), requires `p0.y <= p1.y`
///
/// Also covers vertical lines and the single point case.
fn plot_line_high(p0: Point, p1: Point) -> Vec<Point> {
    let mut dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    let mut x_step = 1;
    if dx < 0 {
        x_step = -1;
        dx = -dx;
    }

    let mut error = 2 * dx - dy;
    let mut x = p0.x;

    let mut cells = Vec::with_capacity(dy as usize + 1);
    for y in p0.y..=p1.y {
        cells.push(Point::new(x, y));
        if error > 0 {
            x += x_step;
            error += 2 * (dx - dy);
        } else {
            error += 2 * dx;
        }
    }

    cells
}
