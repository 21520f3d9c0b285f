//! Rasterizers
//!
//! Stateless integer algorithms. Every plotted point goes through
//! [`LogicalGrid::set_pixel`] with the caller's brush, so any shape can be
//! drawn thick or used as an eraser.
//!
//! Work is bounded by the grid, not by the coordinates: points further than
//! one brush away from the grid can never paint, so they are skipped
//! without being visited.

use super::brush::BrushSize;
use super::grid::LogicalGrid;

/// Anchor coordinates whose brush stamp can touch the grid
#[derive(Clone, Copy)]
struct Window {
    min_x: i128,
    max_x: i128,
    min_y: i128,
    max_y: i128,
}

impl Window {
    fn new(grid: &LogicalGrid, brush: BrushSize) -> Self {
        let reach = brush.get() as i128;
        Self {
            min_x: -reach,
            max_x: grid.width() as i128 - 1 + reach,
            min_y: -reach,
            max_y: grid.height() as i128 - 1 + reach,
        }
    }
}

fn plot(grid: &mut LogicalGrid, x: i128, y: i128, on: bool, brush: BrushSize) {
    // Points beyond i32 cannot be on the grid
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        grid.set_pixel(x, y, on, brush);
    }
}

/// Draw an 8-connected line with Bresenham's algorithm
///
/// Both endpoints are plotted; equal endpoints plot a single point.
pub fn draw_line(
    grid: &mut LogicalGrid,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    on: bool,
    brush: BrushSize,
) {
    let (p0, p1) = ((x0 as i64, y0 as i64), (x1 as i64, y1 as i64));
    line(grid, p0, p1, on, brush);
}

/// Bresenham line in closed form
///
/// Step `n` along the major axis moves the minor axis by
/// `floor((2 * minor * n + major) / (2 * major))`, which is exactly where
/// the incremental error loop lands. That lets the walk start and stop at
/// the edges of the brush window instead of at the endpoints.
fn line(grid: &mut LogicalGrid, p0: (i64, i64), p1: (i64, i64), on: bool, brush: BrushSize) {
    let (x0, y0) = (p0.0 as i128, p0.1 as i128);
    let (x1, y1) = (p1.0 as i128, p1.1 as i128);
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    if dx == 0 && dy == 0 {
        plot(grid, x0, y0, on, brush);
        return;
    }

    let window = Window::new(grid, brush);
    let x_major = dx >= dy;
    let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };
    let (start, step, lo, hi) = if x_major {
        (x0, sx, window.min_x, window.max_x)
    } else {
        (y0, sy, window.min_y, window.max_y)
    };

    // Steps whose major coordinate lies inside the window
    let (first, last) = if step > 0 {
        (lo - start, hi - start)
    } else {
        (start - hi, start - lo)
    };
    let first = first.max(0);
    let last = last.min(major);

    for n in first..=last {
        let m = (2 * minor * n + major) / (2 * major);
        let (x, y) = if x_major {
            (x0 + sx * n, y0 + sy * m)
        } else {
            (x0 + sx * m, y0 + sy * n)
        };
        plot(grid, x, y, on, brush);
    }
}

/// Draw a rectangle spanning (x, y) to (x + w, y + h)
///
/// Negative `w`/`h` are normalized, so drags in any direction work. The box
/// is closed: a zero width or height degenerates to a line or a point.
#[allow(clippy::too_many_arguments)]
pub fn draw_rectangle(
    grid: &mut LogicalGrid,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    on: bool,
    fill: bool,
    brush: BrushSize,
) {
    let (x, y) = (x as i64, y as i64);
    rectangle(grid, (x, y), (x + w as i64, y + h as i64), on, fill, brush);
}

/// Draw the closed rectangle with corners `p0` and `p1`, in any order
pub fn draw_rectangle_between(
    grid: &mut LogicalGrid,
    p0: (i32, i32),
    p1: (i32, i32),
    on: bool,
    fill: bool,
    brush: BrushSize,
) {
    let p0 = (p0.0 as i64, p0.1 as i64);
    let p1 = (p1.0 as i64, p1.1 as i64);
    rectangle(grid, p0, p1, on, fill, brush);
}

fn rectangle(
    grid: &mut LogicalGrid,
    p0: (i64, i64),
    p1: (i64, i64),
    on: bool,
    fill: bool,
    brush: BrushSize,
) {
    let x0 = p0.0.min(p1.0);
    let y0 = p0.1.min(p1.1);
    let x1 = p0.0.max(p1.0);
    let y1 = p0.1.max(p1.1);

    if fill {
        let window = Window::new(grid, brush);
        let (cx0, cx1) = ((x0 as i128).max(window.min_x), (x1 as i128).min(window.max_x));
        let (cy0, cy1) = ((y0 as i128).max(window.min_y), (y1 as i128).min(window.max_y));
        for py in cy0..=cy1 {
            for px in cx0..=cx1 {
                plot(grid, px, py, on, brush);
            }
        }
    } else {
        line(grid, (x0, y0), (x1, y0), on, brush);
        line(grid, (x0, y1), (x1, y1), on, brush);
        line(grid, (x0, y0), (x0, y1), on, brush);
        line(grid, (x1, y0), (x1, y1), on, brush);
    }
}

/// Draw the ellipse inscribed in the box with corners `p0` and `p1`
///
/// Uses the two-region midpoint algorithm. A box with zero width or zero
/// height draws nothing. Decision variables are `i128` so any `i32` box is
/// representable.
pub fn draw_ellipse(
    grid: &mut LogicalGrid,
    p0: (i32, i32),
    p1: (i32, i32),
    on: bool,
    brush: BrushSize,
) {
    let x0 = p0.0.min(p1.0) as i128;
    let y0 = p0.1.min(p1.1) as i128;
    let x1 = p0.0.max(p1.0) as i128;
    let y1 = p0.1.max(p1.1) as i128;
    if x0 == x1 || y0 == y1 {
        return;
    }

    let window = Window::new(grid, brush);
    if x1 < window.min_x || x0 > window.max_x || y1 < window.min_y || y0 > window.max_y {
        return;
    }

    let xc = (x0 + x1) / 2;
    let yc = (y0 + y1) / 2;
    let a = (x1 - x0) / 2;
    let b = (y1 - y0) / 2;

    let a2 = a * a;
    let b2 = b * b;
    let two_a2 = 2 * a2;
    let two_b2 = 2 * b2;

    // x only grows; past this both columns xc +- x have left the window
    let x_limit = (xc - window.min_x).max(window.max_x - xc);

    let plot4 = |grid: &mut LogicalGrid, x: i128, y: i128| {
        plot(grid, xc + x, yc + y, on, brush);
        plot(grid, xc - x, yc + y, on, brush);
        plot(grid, xc + x, yc - y, on, brush);
        plot(grid, xc - x, yc - y, on, brush);
    };

    // Region 1: slope shallower than -1
    let mut x = 0i128;
    let mut y = b;
    let mut p = b2 - a2 * b + a2 / 4;
    while two_b2 * x < two_a2 * y {
        if x > x_limit {
            return;
        }
        plot4(grid, x, y);
        x += 1;
        if p < 0 {
            p += two_b2 * x + b2;
        } else {
            y -= 1;
            p += two_b2 * x + b2 - two_a2 * y;
        }
    }

    // Region 2: slope steeper than -1
    p = b2 * (x * x + x) + a2 * (y * y - y) - a2 * b2;
    while y >= 0 {
        if x > x_limit {
            return;
        }
        plot4(grid, x, y);
        y -= 1;
        if p > 0 {
            p -= two_a2 * y + a2;
        } else {
            x += 1;
            p += two_b2 * x - two_a2 * y + a2;
        }
    }
}
