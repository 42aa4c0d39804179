use std::f64::consts::PI;
use thiserror::Error;

/// How far inside the phase ring the connector arrows sit.
pub const ARROW_INSET: f64 = 20.0;
pub const WHEEL_CENTER: Point = Point { x: 150.0, y: 150.0 };
pub const WHEEL_RADIUS: f64 = 120.0;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    #[error("A phase wheel needs at least one phase")]
    NoPhases,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn on_circle(center: Point, radius: f64, angle: f64) -> Self {
        Self {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        }
    }
}

fn angle_step(count: usize) -> Result<f64, LayoutError> {
    if count == 0 {
        return Err(LayoutError::NoPhases);
    }
    Ok(2.0 * PI / count as f64)
}

/// Node centres, first at twelve o'clock, then clockwise in screen
/// coordinates (y grows downward).
pub fn phase_positions(count: usize, center: Point, radius: f64) -> Result<Vec<Point>, LayoutError> {
    let step = angle_step(count)?;
    Ok((0..count)
        .map(|i| Point::on_circle(center, radius, i as f64 * step - PI / 2.0))
        .collect())
}

/// Arrow anchors halfway between neighbouring nodes, pulled in by
/// `ARROW_INSET` so arrowheads clear the node circles.
pub fn arrow_anchors(count: usize, center: Point, radius: f64) -> Result<Vec<Point>, LayoutError> {
    let step = angle_step(count)?;
    Ok((0..count)
        .map(|i| {
            let angle = i as f64 * step - PI / 2.0 + step / 2.0;
            Point::on_circle(center, radius - ARROW_INSET, angle)
        })
        .collect())
}

/// Arrow `i` runs from anchor `i` to anchor `(i + 1) % count`.
pub fn arrow_segments(count: usize, center: Point, radius: f64) -> Result<Vec<(Point, Point)>, LayoutError> {
    let anchors = arrow_anchors(count, center, radius)?;
    Ok((0..count)
        .map(|i| (anchors[i], anchors[(i + 1) % count]))
        .collect())
}
