//! Arc reconstruction from endpoints, radius, and winding direction
//!
//! An R-format arc only gives the two endpoints and a radius. Two circles of
//! that radius pass through both points; the winding direction picks the one
//! whose center lies to the right of the chord for G2 and to the left for G3,
//! which always yields the minor arc.

use gcodesketch_core::constants::MIN_CHORD_LENGTH;
use gcodesketch_core::{ArcError, Point3D};
use glam::DVec2;
use serde::Serialize;
use std::f64::consts::TAU;
use tracing::trace;

/// A solved arc and its sampled polyline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcPath {
    /// Circle center (Z equals the arc plane)
    pub center: Point3D,
    /// Circle radius
    pub radius: f64,
    /// Angle of the start point around the center, radians
    pub start_angle: f64,
    /// Angle of the end point, unwrapped so the sweep follows the winding
    pub end_angle: f64,
    /// Winding direction
    pub clockwise: bool,
    /// `segments + 1` samples, first is the start point, last is the end point
    pub points: Vec<Point3D>,
}

impl ArcPath {
    /// Signed sweep in radians (negative for clockwise arcs)
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Consume the arc and keep only its samples
    pub fn into_points(self) -> Vec<Point3D> {
        self.points
    }
}

fn xy(point: &Point3D) -> DVec2 {
    DVec2::new(point.x, point.y)
}

/// Reconstruct the arc from `start` to `end` and sample it
///
/// `segments` is the number of straight spans in the returned polyline
/// (values below 1 are treated as 1). The endpoints of the polyline are
/// exactly `start` and `end`.
pub fn solve_arc(
    start: Point3D,
    end: Point3D,
    radius: f64,
    clockwise: bool,
    segments: usize,
) -> Result<ArcPath, ArcError> {
    let half_chord_3d = start.distance_to(&end) / 2.0;
    if !radius.is_finite() || radius <= 0.0 || radius < half_chord_3d {
        return Err(ArcError::RadiusTooSmall {
            radius,
            min_radius: half_chord_3d,
        });
    }

    if start.z != end.z {
        return Err(ArcError::NonPlanarArc {
            start_z: start.z,
            end_z: end.z,
        });
    }

    let (p0, p1) = (xy(&start), xy(&end));
    let chord = p1 - p0;
    let chord_len = chord.length();
    if chord_len < MIN_CHORD_LENGTH {
        return Err(ArcError::DegenerateChord);
    }

    let half_chord = chord_len / 2.0;
    if radius <= half_chord {
        return Err(ArcError::RadiusTooSmall {
            radius,
            min_radius: half_chord,
        });
    }

    let height = (radius * radius - half_chord * half_chord).max(0.0).sqrt();
    let normal = (chord / chord_len).perp();
    let mid = (p0 + p1) / 2.0;
    let center = if clockwise {
        mid - normal * height
    } else {
        mid + normal * height
    };

    let start_angle = (p0 - center).to_angle();
    let mut end_angle = (p1 - center).to_angle();
    if clockwise && end_angle > start_angle {
        end_angle -= TAU;
    } else if !clockwise && end_angle < start_angle {
        end_angle += TAU;
    }

    let segments = segments.max(1);
    let z = start.z;
    let mut points = Vec::with_capacity(segments + 1);
    points.push(start);
    for i in 1..segments {
        let t = i as f64 / segments as f64;
        let angle = start_angle + (end_angle - start_angle) * t;
        let sample = center + DVec2::from_angle(angle) * radius;
        points.push(Point3D::new(sample.x, sample.y, z));
    }
    points.push(end);

    trace!(
        "Arc: from=({:.3},{:.3}) to=({:.3},{:.3}) center=({:.3},{:.3}) r={:.4} cw={} sweep={:.4}",
        start.x,
        start.y,
        end.x,
        end.y,
        center.x,
        center.y,
        radius,
        clockwise,
        end_angle - start_angle
    );

    Ok(ArcPath {
        center: Point3D::new(center.x, center.y, z),
        radius,
        start_angle,
        end_angle,
        clockwise,
        points,
    })
}

/// Radius hint for a pending arc target
///
/// `min` is half the XY chord, an exclusive bound: a circle of exactly that
/// radius is a half turn with no minor arc, and [`solve_arc`] rejects it.
/// `max` is twice that, a convenience bound for input widgets rather than a
/// geometric limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadiusRange {
    pub min: f64,
    pub max: f64,
}

impl RadiusRange {
    /// True when `radius` lies inside the hinted range (`min` excluded)
    pub fn contains(&self, radius: f64) -> bool {
        radius > self.min && radius <= self.max
    }
}

impl std::fmt::Display for RadiusRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "R range: {:.2} - {:.2}", self.min, self.max)
    }
}

/// Compute the radius hint for an arc from `from` to `to`
pub fn radius_range(from: &Point3D, to: &Point3D) -> RadiusRange {
    let half_chord = from.xy_distance_to(to) / 2.0;
    RadiusRange {
        min: half_chord,
        max: half_chord * 2.0,
    }
}
