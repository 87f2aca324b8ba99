// MIT/Apache2 License

use lyon_geom::{point, Angle, Arc, Point, Vector};
use lyon_path::{iterator::PathIterator, Path, PathEvent};
use std::cmp;
use tinyvec::TinyVec;

/// Tolerance used when flattening curved segments into line segments.
const FLATTEN_TOLERANCE: f32 = 1.0;

/// The vertices of the arrow-shaped clip polygon for the given pixel bounds, in drawing order.
///
/// The inset `ds` is an eighth of the width; the shape is closed by the caller.
#[inline]
pub fn arrow_points(width: i32, height: i32) -> TinyVec<[(i32, i32); 8]> {
    let ds = width >> 3;
    let half_w = width >> 1;
    let half_h = height >> 1;

    [
        (ds, ds),
        (half_w, 0),
        (width - ds, ds),
        (half_w + ds, half_h),
        (width, height),
        (0, height),
        (half_w - ds, half_h),
    ]
    .iter()
    .copied()
    .collect()
}

/// Build a closed polygon path through the given pixel vertices.
#[inline]
pub fn polygon_path(points: &[(i32, i32)]) -> Path {
    let mut builder = Path::builder();
    let mut iter = points.iter().copied();
    if let Some((x, y)) = iter.next() {
        builder.begin(point(x as f32, y as f32));
        for (x, y) in iter {
            builder.line_to(point(x as f32, y as f32));
        }
        builder.close();
    }
    builder.build()
}

/// The center and radius of the circular clip for the given pixel bounds.
///
/// The diameter is three quarters of the shorter side, truncated; the center is the midpoint of the bounds.
#[inline]
pub fn circle_geometry(width: i32, height: i32) -> (Point<f32>, i32) {
    let size = (cmp::min(width, height) as f32 * 0.75) as i32;
    let center = point((width >> 1) as f32, (height >> 1) as f32);
    (center, size >> 1)
}

/// Build a closed circular path with clockwise winding.
///
/// A positive sweep runs clockwise in y-down pixel space.
#[inline]
pub fn circle_path(center: Point<f32>, radius: f32) -> Path {
    let arc = Arc {
        center,
        radii: Vector::new(radius, radius),
        start_angle: Angle { radians: 0.0 },
        sweep_angle: Angle {
            radians: std::f32::consts::PI * 2.0,
        },
        x_rotation: Angle { radians: 0.0 },
    };

    let mut builder = Path::builder();
    let mut iter = arc.flattened(FLATTEN_TOLERANCE);
    if let Some(first) = iter.next() {
        builder.begin(first);
        for pt in iter {
            builder.line_to(pt);
        }
        builder.close();
    }
    builder.build()
}

/// Flatten a path into the vertices of its outline.
///
/// Closing segments contribute no extra vertex, so a closed polygon comes back as exactly its corners.
#[inline]
pub fn path_points(path: &Path) -> Vec<Point<f32>> {
    path.iter()
        .flattened(FLATTEN_TOLERANCE)
        .filter_map(|pe| match pe {
            PathEvent::Begin { at } => Some(at),
            PathEvent::Line { to, .. } => Some(to),
            PathEvent::End { .. } => None,
            _ => unreachable!(),
        })
        .collect()
}
