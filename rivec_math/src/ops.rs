use crate::vec2::{v2, Vector2};

pub fn dot(a: Vector2, b: Vector2) -> f32 {
    a.x * b.x + a.y * b.y
}

/// The z component of the 3-D cross product, `a.x * b.y - a.y * b.x`.
///
/// Positive when `b` lies counter-clockwise of `a`.
pub fn cross(a: Vector2, b: Vector2) -> f32 {
    a.x * b.y - a.y * b.x
}

pub fn distance(a: Vector2, b: Vector2) -> f32 {
    (a - b).magnitude()
}

/// Unsigned angle between `a` and `b` in radians, within `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos` so rounding on nearly
/// parallel vectors cannot produce NaN. A zero-length operand still does.
pub fn angle(a: Vector2, b: Vector2) -> f32 {
    let cosine = dot(a, b) / (a.magnitude() * b.magnitude());
    cosine.clamp(-1.0, 1.0).acos()
}

/// Angle from `from` to `to` in degrees, positive when the rotation is
/// counter-clockwise.
///
/// Parallel and anti-parallel vectors have a zero cross product and report
/// `0` or `180` respectively.
pub fn signed_angle(from: Vector2, to: Vector2) -> f32 {
    let unsigned = angle(from, to).to_degrees();
    if cross(from, to) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}

/// Exact field-wise equality.
pub fn equals(a: Vector2, b: Vector2) -> bool {
    a.x == b.x && a.y == b.y
}

/// Interpolates from `a` to `b`; `t` outside `[0, 1]` extrapolates past the
/// ends of the segment.
pub fn lerp_unclamped(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    a + (b - a) * t
}

/// Component-wise maximum.
pub fn max(a: Vector2, b: Vector2) -> Vector2 {
    v2(a.x.max(b.x), a.y.max(b.y))
}

/// Component-wise minimum.
pub fn min(a: Vector2, b: Vector2) -> Vector2 {
    v2(a.x.min(b.x), a.y.min(b.y))
}

/// Mirrors `v` about the line whose normal is `normal`.
///
/// `normal` need not be unit length. A zero normal divides by zero.
pub fn reflect(v: Vector2, normal: Vector2) -> Vector2 {
    v - normal * (2.0 * dot(v, normal) / dot(normal, normal))
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    fn g(v: Vector2) -> glam::Vec2 {
        glam::Vec2::new(v.x, v.y)
    }

    #[test]
    fn ops_dot() {
        assert_eq!(400.0, dot(v2(10.0, 10.0), v2(20.0, 20.0)));
        assert_eq!(23.0, dot(v2(2.0, 3.0), v2(4.0, 5.0)));
        assert_eq!(g(v2(2.0, 3.0)).dot(g(v2(4.0, 5.0))), dot(v2(2.0, 3.0), v2(4.0, 5.0)));
    }

    #[test]
    fn ops_dot_and_distance_are_symmetric() {
        let pairs = [
            (v2(10.0, 10.0), v2(5.0, 5.0)),
            (v2(-3.5, 2.0), v2(8.0, -1.25)),
            (v2(0.0, 0.0), v2(1e4, -1e-3)),
        ];

        for (a, b) in pairs {
            assert_eq!(dot(a, b), dot(b, a));
            assert_eq!(distance(a, b), distance(b, a));
        }
    }

    #[test]
    fn ops_cross() {
        assert_eq!(650.0, cross(v2(35.0, 10.0), v2(5.0, 20.0)));
        assert_eq!(-650.0, cross(v2(5.0, 20.0), v2(35.0, 10.0)));
        assert_eq!(g(v2(2.0, 7.0)).perp_dot(g(v2(-3.0, 1.0))), cross(v2(2.0, 7.0), v2(-3.0, 1.0)));
    }

    #[test]
    fn ops_distance() {
        assert_relative_eq!(f32::sqrt(50.0), distance(v2(10.0, 10.0), v2(5.0, 5.0)));
        assert_eq!(5.0, distance(v2(0.0, 0.0), v2(3.0, 4.0)));
        assert_eq!(g(v2(1.0, 9.0)).distance(g(v2(4.0, 5.0))), distance(v2(1.0, 9.0), v2(4.0, 5.0)));
    }

    #[test]
    fn ops_angle() {
        assert_relative_eq!(
            0.677_224_75,
            angle(v2(10.0, 10.0), v2(221.0, 24.0)),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            std::f32::consts::FRAC_PI_2,
            angle(Vector2::RIGHT, Vector2::UP)
        );
    }

    #[test]
    fn ops_angle_bounds() {
        assert_eq!(0.0, angle(v2(1.0, 0.0), v2(4.0, 0.0)));
        assert_relative_eq!(std::f32::consts::PI, angle(v2(1.0, 0.0), v2(-4.0, 0.0)));
    }

    #[test]
    fn ops_angle_clamps_cosine_for_parallel_vectors() {
        for v in [v2(0.1, 0.7), v2(3.3, -1.7), v2(1e-3, 9e-3), v2(123.4, 567.8)] {
            let a = angle(v, v * 3.0);
            assert!(!a.is_nan(), "angle of {v} with itself was NaN");
            assert_relative_eq!(0.0, a, epsilon = 1e-3);
        }
    }

    #[test]
    fn ops_angle_of_zero_vector_is_nan() {
        assert!(angle(Vector2::ZERO, v2(1.0, 2.0)).is_nan());
    }

    #[test]
    fn ops_signed_angle() {
        assert_relative_eq!(
            60.018_36,
            signed_angle(v2(35.0, 10.0), v2(5.0, 20.0)),
            epsilon = 1e-4
        );
        assert_relative_eq!(
            -60.018_36,
            signed_angle(v2(5.0, 20.0), v2(35.0, 10.0)),
            epsilon = 1e-4
        );
    }

    #[test]
    fn ops_signed_angle_matches_glam() {
        let a = v2(3.0, -2.0);
        let b = v2(-1.0, -4.0);

        assert_relative_eq!(
            g(a).angle_between(g(b)).to_degrees(),
            signed_angle(a, b),
            epsilon = 1e-2
        );
    }

    #[test]
    fn ops_signed_angle_zero_cross() {
        assert_eq!(0.0, signed_angle(v2(1.0, 0.0), v2(3.0, 0.0)));
        assert_relative_eq!(180.0, signed_angle(v2(2.0, 0.0), v2(-4.0, 0.0)));
    }

    #[test]
    fn ops_equals_is_exact() {
        assert!(equals(v2(10.0, 10.0), v2(10.0, 10.0)));
        assert!(!equals(v2(10.0, 10.0), v2(10.0, 10.000001)));
        assert!(!equals(v2(f32::NAN, 0.0), v2(f32::NAN, 0.0)));
    }

    #[test]
    fn ops_lerp_unclamped() {
        let a = v2(10.0, 10.0);
        let b = v2(20.0, 20.0);

        assert_eq!(v2(15.0, 15.0), lerp_unclamped(a, b, 0.5));
        assert_eq!(a, lerp_unclamped(a, b, 0.0));
        assert_eq!(b, lerp_unclamped(a, b, 1.0));
        assert_eq!(g(a).lerp(g(b), 0.25), g(lerp_unclamped(a, b, 0.25)));
    }

    #[test]
    fn ops_lerp_unclamped_extrapolates() {
        let a = v2(10.0, 10.0);
        let b = v2(20.0, 20.0);

        assert_eq!(v2(30.0, 30.0), lerp_unclamped(a, b, 2.0));
        assert_eq!(v2(0.0, 0.0), lerp_unclamped(a, b, -1.0));
    }

    #[test]
    fn ops_max_min_are_component_wise() {
        assert_eq!(v2(10.0, 10.0), max(v2(10.0, 10.0), v2(5.0, 5.0)));
        assert_eq!(v2(10.0, 10.0), min(v2(10.0, 10.0), v2(15.0, 15.0)));

        // Neither operand wins outright.
        let a = v2(1.0, 100.0);
        let b = v2(50.0, 2.0);
        assert_eq!(v2(50.0, 100.0), max(a, b));
        assert_eq!(v2(1.0, 2.0), min(a, b));
        assert_eq!(g(a).max(g(b)), g(max(a, b)));
        assert_eq!(g(a).min(g(b)), g(min(a, b)));
    }

    #[test]
    fn ops_reflect() {
        assert_eq!(v2(-10.0, 10.0), reflect(v2(10.0, 10.0), v2(1.0, 0.0)));
        assert_eq!(v2(3.0, 4.0), reflect(v2(3.0, -4.0), Vector2::UP));
    }

    #[test]
    fn ops_reflect_non_unit_normal() {
        assert_eq!(v2(-10.0, 10.0), reflect(v2(10.0, 10.0), v2(4.0, 0.0)));
    }

    #[test]
    fn ops_reflect_zero_normal_is_nan() {
        let r = reflect(v2(10.0, 10.0), Vector2::ZERO);

        assert!(r.x.is_nan());
        assert!(r.y.is_nan());
    }
}
