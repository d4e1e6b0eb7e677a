// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Projection of chromaticity points into a triangular gamut.

use crate::error::ColorError;
use crate::types::{Gamut, XyPoint};

impl Gamut {
    /// Returns `true` if `point` lies inside the triangle or on its boundary.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::DegenerateGamut`] if the primaries are collinear.
    pub fn contains(&self, point: XyPoint) -> Result<bool, ColorError> {
        self.validate()?;
        Ok(inside(self, point))
    }

    /// Returns the point of the gamut closest to `point`.
    ///
    /// See [`closest_in_gamut`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::DegenerateGamut`] if the primaries are collinear.
    pub fn closest_point(&self, point: XyPoint) -> Result<XyPoint, ColorError> {
        closest_in_gamut(point, self)
    }
}

/// Returns the point inside `gamut` closest to `point`.
///
/// Points inside the triangle, boundary included, are returned unchanged.
/// Otherwise the point is projected onto each edge (clamped to the segment)
/// and the nearest projection wins. Equal distances resolve in edge order
/// red-green, green-blue, blue-red.
///
/// # Errors
///
/// Returns [`ColorError::DegenerateGamut`] if the primaries are collinear;
/// no point is produced in that case.
///
/// # Examples
///
/// ```
/// use huelight_lib::color::closest_in_gamut;
/// use huelight_lib::types::{Gamut, XyPoint};
///
/// let inside = XyPoint::new(0.3, 0.3);
/// assert_eq!(closest_in_gamut(inside, &Gamut::DEFAULT).unwrap(), inside);
///
/// let below = XyPoint::new(0.5, -0.5);
/// let clamped = closest_in_gamut(below, &Gamut::DEFAULT).unwrap();
/// assert_eq!(clamped, XyPoint::new(0.5, 0.0001));
/// ```
pub fn closest_in_gamut(point: XyPoint, gamut: &Gamut) -> Result<XyPoint, ColorError> {
    gamut.validate()?;

    if inside(gamut, point) {
        return Ok(point);
    }

    let edges = [
        (gamut.red, gamut.green),
        (gamut.green, gamut.blue),
        (gamut.blue, gamut.red),
    ];

    let mut best = closest_on_segment(edges[0].0, edges[0].1, point);
    let mut best_distance = point.distance(best);
    for (a, b) in &edges[1..] {
        let candidate = closest_on_segment(*a, *b, point);
        let distance = point.distance(candidate);
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }

    tracing::trace!(from = %point, to = %best, "Clamped chromaticity into gamut");
    Ok(best)
}

// Barycentric test; the caller has checked that the gamut is not degenerate.
fn inside(gamut: &Gamut, point: XyPoint) -> bool {
    let v1 = sub(gamut.green, gamut.red);
    let v2 = sub(gamut.blue, gamut.red);
    let v = cross(v1, v2);
    let q = sub(point, gamut.red);
    let s = cross(q, v2) / v;
    let t = cross(v1, q) / v;
    s >= 0.0 && t >= 0.0 && s + t <= 1.0
}

fn closest_on_segment(a: XyPoint, b: XyPoint, p: XyPoint) -> XyPoint {
    let ap = sub(p, a);
    let ab = sub(b, a);
    let t = (dot(ap, ab) / dot(ab, ab)).clamp(0.0, 1.0);
    XyPoint::new(a.x + t * ab.x, a.y + t * ab.y)
}

fn sub(a: XyPoint, b: XyPoint) -> XyPoint {
    XyPoint::new(a.x - b.x, a.y - b.y)
}

fn dot(a: XyPoint, b: XyPoint) -> f64 {
    a.x * b.x + a.y * b.y
}

fn cross(a: XyPoint, b: XyPoint) -> f64 {
    a.x * b.y - a.y * b.x
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Gamut {
        Gamut::new(
            XyPoint::new(0.0, 0.0),
            XyPoint::new(1.0, 0.0),
            XyPoint::new(0.0, 1.0),
        )
    }

    #[test]
    fn interior_point_is_returned_bit_identical() {
        let p = XyPoint::new(0.123_456_789, 0.234_567_891);
        let q = closest_in_gamut(p, &Gamut::DEFAULT).unwrap();
        assert_eq!(q.x.to_bits(), p.x.to_bits());
        assert_eq!(q.y.to_bits(), p.y.to_bits());
    }

    #[test]
    fn vertices_and_edges_are_inside() {
        let gamut = unit_triangle();
        for p in [
            XyPoint::new(0.0, 0.0),
            XyPoint::new(1.0, 0.0),
            XyPoint::new(0.0, 1.0),
            XyPoint::new(0.5, 0.5),
            XyPoint::new(0.5, 0.0),
        ] {
            assert!(gamut.contains(p).unwrap(), "{p} should be inside");
            assert_eq!(closest_in_gamut(p, &gamut).unwrap(), p);
        }
    }

    #[test]
    fn perpendicular_from_red_green_midpoint_lands_on_midpoint() {
        let gamut = unit_triangle();
        let far = XyPoint::new(0.5, -10.0);
        assert!(!gamut.contains(far).unwrap());
        assert_eq!(
            closest_in_gamut(far, &gamut).unwrap(),
            XyPoint::new(0.5, 0.0)
        );
    }

    #[test]
    fn point_beyond_vertex_snaps_to_vertex() {
        let gamut = unit_triangle();
        let p = XyPoint::new(2.0, -1.0);
        assert_eq!(closest_in_gamut(p, &gamut).unwrap(), XyPoint::new(1.0, 0.0));
    }

    #[test]
    fn hypotenuse_projection() {
        let gamut = unit_triangle();
        let p = XyPoint::new(1.0, 1.0);
        let q = closest_in_gamut(p, &gamut).unwrap();
        assert!((q.x - 0.5).abs() < 1e-12);
        assert!((q.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn origin_snaps_to_blue_corner() {
        let q = closest_in_gamut(XyPoint::ORIGIN, &Gamut::DEFAULT).unwrap();
        assert_eq!(q.x, 0.0);
        assert!((q.y - 0.0001).abs() < 1e-15);
    }

    #[test]
    fn clamp_is_idempotent() {
        let points = [
            XyPoint::new(0.9, 0.9),
            XyPoint::new(-0.3, 0.4),
            XyPoint::new(0.7006, 0.2993),
            XyPoint::new(0.05, 0.02),
            XyPoint::new(0.4, 0.4),
        ];
        for gamut in [Gamut::DEFAULT, Gamut::HUE_A, Gamut::HUE_B, Gamut::HUE_C] {
            for p in points {
                let once = closest_in_gamut(p, &gamut).unwrap();
                let twice = closest_in_gamut(once, &gamut).unwrap();
                assert!(
                    once.distance(twice) < 1e-12,
                    "{p} -> {once} -> {twice}"
                );
            }
        }
    }

    #[test]
    fn degenerate_gamut_is_an_error() {
        let gamut = Gamut::new(
            XyPoint::new(0.1, 0.1),
            XyPoint::new(0.3, 0.3),
            XyPoint::new(0.6, 0.6),
        );
        let result = closest_in_gamut(XyPoint::new(0.2, 0.5), &gamut);
        assert!(matches!(result, Err(ColorError::DegenerateGamut { .. })));
        assert!(gamut.contains(XyPoint::new(0.2, 0.5)).is_err());
    }

    #[test]
    fn coincident_primaries_are_an_error() {
        let p = XyPoint::new(0.3, 0.3);
        let gamut = Gamut::new(p, p, XyPoint::new(0.1, 0.2));
        assert!(gamut.closest_point(p).is_err());
    }
}
