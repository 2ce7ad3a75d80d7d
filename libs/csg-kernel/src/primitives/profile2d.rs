//! # 2D Profile Primitives
//!
//! Generates counter-clockwise outlines for rectangles and circles.
//! Profiles feed extrusion; on their own they tessellate through the mesh
//! converter's thin-extrusion fallback.

use crate::error::KernelError;
use crate::geometry::Profile;
use glam::DVec2;
use std::f64::consts::PI;

/// Creates a rectangle outline in the XY plane.
///
/// # Example
///
/// ```rust
/// use csg_kernel::primitives::rectangle;
/// use glam::DVec2;
///
/// let profile = rectangle(DVec2::new(4.0, 2.0), true).unwrap();
/// assert_eq!(profile.points().len(), 4);
/// ```
pub fn rectangle(size: DVec2, center: bool) -> Result<Profile, KernelError> {
    if size.x <= 0.0 || size.y <= 0.0 {
        return Err(KernelError::degenerate(format!(
            "rectangle size must be positive: {:?}",
            size
        )));
    }

    let (min, max) = if center {
        let half = size / 2.0;
        (-half, half)
    } else {
        (DVec2::ZERO, size)
    };

    Ok(Profile::new(vec![
        DVec2::new(min.x, min.y),
        DVec2::new(max.x, min.y),
        DVec2::new(max.x, max.y),
        DVec2::new(min.x, max.y),
    ]))
}

/// Creates a circle outline in the XY plane.
pub fn circle(radius: f64, segments: u32) -> Result<Profile, KernelError> {
    if radius <= 0.0 {
        return Err(KernelError::degenerate(format!(
            "circle radius must be positive: {radius}"
        )));
    }
    if segments < 3 {
        return Err(KernelError::degenerate(format!(
            "circle segments must be at least 3: {segments}"
        )));
    }

    let points = (0..segments)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            DVec2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect();

    Ok(Profile::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_corner_at_origin() {
        let profile = rectangle(DVec2::new(4.0, 2.0), false).unwrap();
        assert_eq!(profile.points()[0], DVec2::ZERO);
        assert_eq!(profile.points()[2], DVec2::new(4.0, 2.0));
    }

    #[test]
    fn rectangle_winding_is_counter_clockwise() {
        let profile = rectangle(DVec2::new(2.0, 2.0), true).unwrap();
        let points = profile.points();
        // Shoelace area is positive for counter-clockwise outlines.
        let area: f64 = points
            .iter()
            .zip(points.iter().cycle().skip(1))
            .map(|(a, b)| a.x * b.y - b.x * a.y)
            .take(points.len())
            .sum();
        assert!(area > 0.0);
    }

    #[test]
    fn circle_point_count() {
        let profile = circle(5.0, 12).unwrap();
        assert_eq!(profile.points().len(), 12);
    }

    #[test]
    fn degenerate_profiles_rejected() {
        assert!(rectangle(DVec2::new(0.0, 1.0), false).is_err());
        assert!(circle(-1.0, 12).is_err());
        assert!(circle(1.0, 2).is_err());
    }
}
