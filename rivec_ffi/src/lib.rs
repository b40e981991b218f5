//! C ABI over `rivec_math`.
//!
//! A vector crosses the boundary as an opaque handle (`*mut Vector2`) created
//! by `rivec_vector2_new`, an operation returning a vector, or one of the
//! constant constructors. Each handle must be passed to `rivec_vector2_free`
//! exactly once and not used afterwards.
//!
//! Passing null for a vector argument is a usage error: nothing is computed,
//! the error is recorded for [`rivec_last_error_message`], and the entry point
//! returns its fallback (`NaN`, `false`, a null handle, or nothing). Numeric
//! degeneracy such as normalizing a zero vector is not an error and comes back
//! as NaN or infinite components.
//!
//! Every other pointer argument must be null or a live handle; the entry
//! points are `unsafe` for that reason.

#![allow(clippy::missing_safety_doc)]

use std::ptr;

use rivec_math::{self as math, Vector2};

pub use error::{
    last_error_message, rivec_clear_last_error, rivec_last_error_message, BoundaryError,
    BoundaryResult,
};
pub use handle::OwnedVector2;
use handle::{into_handle, release, report, Signature};

mod error;
mod handle;

fn into_raw(v: Vector2) -> *mut Vector2 {
    into_handle(v).as_ptr()
}

// ----- Lifecycle -----

/// Allocates a vector. Never fails; NaN and infinite components are accepted.
#[no_mangle]
pub extern "C" fn rivec_vector2_new(x: f32, y: f32) -> *mut Vector2 {
    into_raw(Vector2::new(x, y))
}

/// Releases a handle. Null is ignored.
#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_free(v: *mut Vector2) {
    release(v)
}

/// Overwrites both components of `v` in place.
#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_set(v: *mut Vector2, x: f32, y: f32) {
    const SIG: Signature = Signature::new("set", "v: Vector2, x: f32, y: f32");
    let v = v.as_mut();
    report((), || {
        SIG.present(v)?.set(x, y);
        Ok(())
    })
}

#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_get_x(v: *const Vector2) -> f32 {
    const SIG: Signature = Signature::new("get_x", "v: Vector2");
    let v = v.as_ref();
    report(f32::NAN, || Ok(SIG.require(v)?.x))
}

#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_get_y(v: *const Vector2) -> f32 {
    const SIG: Signature = Signature::new("get_y", "v: Vector2");
    let v = v.as_ref();
    report(f32::NAN, || Ok(SIG.require(v)?.y))
}

/// Writes `[x, y]` to `out`. Returns `false`, leaving `out` untouched, when
/// either pointer is null.
#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_to_array(v: *const Vector2, out: *mut [f32; 2]) -> bool {
    const SIG: Signature = Signature::new("to_array", "v: Vector2, out: [f32; 2]");
    let v = v.as_ref();
    let out = out.as_mut();
    report(false, || {
        let v = SIG.require(v)?;
        let out = SIG.present(out)?;
        *out = v.to_array();
        Ok(true)
    })
}

// ----- Constants -----

#[no_mangle]
pub extern "C" fn rivec_vector2_zero() -> *mut Vector2 {
    into_raw(Vector2::ZERO)
}

#[no_mangle]
pub extern "C" fn rivec_vector2_one() -> *mut Vector2 {
    into_raw(Vector2::ONE)
}

#[no_mangle]
pub extern "C" fn rivec_vector2_up() -> *mut Vector2 {
    into_raw(Vector2::UP)
}

#[no_mangle]
pub extern "C" fn rivec_vector2_down() -> *mut Vector2 {
    into_raw(Vector2::DOWN)
}

#[no_mangle]
pub extern "C" fn rivec_vector2_left() -> *mut Vector2 {
    into_raw(Vector2::LEFT)
}

#[no_mangle]
pub extern "C" fn rivec_vector2_right() -> *mut Vector2 {
    into_raw(Vector2::RIGHT)
}

// ----- Magnitude -----

#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_sqr_magnitude(v: *const Vector2) -> f32 {
    const SIG: Signature = Signature::new("sqr_magnitude", "v: Vector2");
    let v = v.as_ref();
    report(f32::NAN, || Ok(SIG.require(v)?.sqr_magnitude()))
}

#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_magnitude(v: *const Vector2) -> f32 {
    const SIG: Signature = Signature::new("magnitude", "v: Vector2");
    let v = v.as_ref();
    report(f32::NAN, || Ok(SIG.require(v)?.magnitude()))
}

#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_normalized(v: *const Vector2) -> *mut Vector2 {
    const SIG: Signature = Signature::new("normalized", "v: Vector2");
    let v = v.as_ref();
    report(ptr::null_mut(), || Ok(into_raw(SIG.require(v)?.normalized())))
}

#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_clamp_magnitude(
    v: *const Vector2,
    max_length: f32,
) -> *mut Vector2 {
    const SIG: Signature = Signature::new("clamp_magnitude", "v: Vector2, max_length: f32");
    let v = v.as_ref();
    report(ptr::null_mut(), || {
        Ok(into_raw(SIG.require(v)?.clamp_magnitude(max_length)))
    })
}

// ----- Pairwise -----

#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_dot(a: *const Vector2, b: *const Vector2) -> f32 {
    const SIG: Signature = Signature::new("dot", "a: Vector2, b: Vector2");
    let (a, b) = (a.as_ref(), b.as_ref());
    report(f32::NAN, || Ok(math::dot(SIG.require(a)?, SIG.require(b)?)))
}

/// Unsigned angle in radians.
#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_angle(a: *const Vector2, b: *const Vector2) -> f32 {
    const SIG: Signature = Signature::new("angle", "a: Vector2, b: Vector2");
    let (a, b) = (a.as_ref(), b.as_ref());
    report(f32::NAN, || Ok(math::angle(SIG.require(a)?, SIG.require(b)?)))
}

/// Signed angle in degrees, positive counter-clockwise.
#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_signed_angle(
    from: *const Vector2,
    to: *const Vector2,
) -> f32 {
    const SIG: Signature = Signature::new("signed_angle", "from: Vector2, to: Vector2");
    let (from, to) = (from.as_ref(), to.as_ref());
    report(f32::NAN, || {
        Ok(math::signed_angle(SIG.require(from)?, SIG.require(to)?))
    })
}

#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_distance(a: *const Vector2, b: *const Vector2) -> f32 {
    const SIG: Signature = Signature::new("distance", "a: Vector2, b: Vector2");
    let (a, b) = (a.as_ref(), b.as_ref());
    report(f32::NAN, || Ok(math::distance(SIG.require(a)?, SIG.require(b)?)))
}

#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_equals(a: *const Vector2, b: *const Vector2) -> bool {
    const SIG: Signature = Signature::new("equals", "a: Vector2, b: Vector2");
    let (a, b) = (a.as_ref(), b.as_ref());
    report(false, || Ok(math::equals(SIG.require(a)?, SIG.require(b)?)))
}

#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_max(a: *const Vector2, b: *const Vector2) -> *mut Vector2 {
    const SIG: Signature = Signature::new("max", "a: Vector2, b: Vector2");
    let (a, b) = (a.as_ref(), b.as_ref());
    report(ptr::null_mut(), || {
        Ok(into_raw(math::max(SIG.require(a)?, SIG.require(b)?)))
    })
}

#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_min(a: *const Vector2, b: *const Vector2) -> *mut Vector2 {
    const SIG: Signature = Signature::new("min", "a: Vector2, b: Vector2");
    let (a, b) = (a.as_ref(), b.as_ref());
    report(ptr::null_mut(), || {
        Ok(into_raw(math::min(SIG.require(a)?, SIG.require(b)?)))
    })
}

#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_lerp_unclamped(
    a: *const Vector2,
    b: *const Vector2,
    t: f32,
) -> *mut Vector2 {
    const SIG: Signature = Signature::new("lerp_unclamped", "a: Vector2, b: Vector2, t: f32");
    let (a, b) = (a.as_ref(), b.as_ref());
    report(ptr::null_mut(), || {
        Ok(into_raw(math::lerp_unclamped(
            SIG.require(a)?,
            SIG.require(b)?,
            t,
        )))
    })
}

#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_reflect(
    v: *const Vector2,
    normal: *const Vector2,
) -> *mut Vector2 {
    const SIG: Signature = Signature::new("reflect", "v: Vector2, normal: Vector2");
    let (v, normal) = (v.as_ref(), normal.as_ref());
    report(ptr::null_mut(), || {
        Ok(into_raw(math::reflect(SIG.require(v)?, SIG.require(normal)?)))
    })
}

#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_perpendicular(v: *const Vector2) -> *mut Vector2 {
    const SIG: Signature = Signature::new("perpendicular", "v: Vector2");
    let v = v.as_ref();
    report(ptr::null_mut(), || Ok(into_raw(SIG.require(v)?.perpendicular())))
}

#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_scale(v: *const Vector2, factor: f32) -> *mut Vector2 {
    const SIG: Signature = Signature::new("scale", "v: Vector2, factor: f32");
    let v = v.as_ref();
    report(ptr::null_mut(), || Ok(into_raw(SIG.require(v)?.scale(factor))))
}

// ----- Motion -----

#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_move_towards(
    current: *const Vector2,
    target: *const Vector2,
    max_delta: f32,
) -> *mut Vector2 {
    const SIG: Signature = Signature::new(
        "move_towards",
        "current: Vector2, target: Vector2, max_delta: f32",
    );
    let (current, target) = (current.as_ref(), target.as_ref());
    report(ptr::null_mut(), || {
        Ok(into_raw(math::move_towards(
            SIG.require(current)?,
            SIG.require(target)?,
            max_delta,
        )))
    })
}

const SMOOTH_DAMP: Signature = Signature::new(
    "smooth_damp",
    "current: Vector2, target: Vector2, velocity: Vector2, smooth_time: f32, max_speed: f32, delta_time: f32",
);

/// New position after one smoothing step.
#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_smooth_damp(
    current: *const Vector2,
    target: *const Vector2,
    velocity: *const Vector2,
    smooth_time: f32,
    max_speed: f32,
    delta_time: f32,
) -> *mut Vector2 {
    let (current, target, velocity) = (current.as_ref(), target.as_ref(), velocity.as_ref());
    report(ptr::null_mut(), || {
        Ok(into_raw(math::smooth_damp(
            SMOOTH_DAMP.require(current)?,
            SMOOTH_DAMP.require(target)?,
            SMOOTH_DAMP.require(velocity)?,
            smooth_time,
            max_speed,
            delta_time,
        )))
    })
}

/// Velocity after the same step `rivec_vector2_smooth_damp` takes, for callers
/// that carry it into the next frame.
#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_smooth_damp_velocity(
    current: *const Vector2,
    target: *const Vector2,
    velocity: *const Vector2,
    smooth_time: f32,
    max_speed: f32,
    delta_time: f32,
) -> *mut Vector2 {
    let (current, target, velocity) = (current.as_ref(), target.as_ref(), velocity.as_ref());
    report(ptr::null_mut(), || {
        let step = math::smooth_damp_step(
            SMOOTH_DAMP.require(current)?,
            SMOOTH_DAMP.require(target)?,
            SMOOTH_DAMP.require(velocity)?,
            smooth_time,
            max_speed,
            delta_time,
        );
        Ok(into_raw(step.velocity))
    })
}

// ----- Arithmetic -----

/// Returns a new handle holding `-v`.
#[no_mangle]
pub unsafe extern "C" fn rivec_vector2_neg(v: *const Vector2) -> *mut Vector2 {
    const SIG: Signature = Signature::new("neg", "v: Vector2");
    let v = v.as_ref();
    report(ptr::null_mut(), || Ok(into_raw(-SIG.require(v)?)))
}

macro_rules! vector_op {
    ($($name:ident => $op:literal, |$l:ident, $r:ident| $body:expr;)*) => {$(
        #[no_mangle]
        pub unsafe extern "C" fn $name(a: *const Vector2, b: *const Vector2) -> *mut Vector2 {
            const SIG: Signature = Signature::new($op, "a: Vector2, b: Vector2");
            let (a, b) = (a.as_ref(), b.as_ref());
            report(ptr::null_mut(), || {
                let ($l, $r) = (SIG.require(a)?, SIG.require(b)?);
                Ok(into_raw($body))
            })
        }
    )*};
}

macro_rules! scalar_op {
    ($($name:ident => $op:literal, |$l:ident, $s:ident| $body:expr;)*) => {$(
        #[no_mangle]
        pub unsafe extern "C" fn $name(a: *const Vector2, s: f32) -> *mut Vector2 {
            const SIG: Signature = Signature::new($op, "a: Vector2, s: f32");
            let a = a.as_ref();
            report(ptr::null_mut(), || {
                let ($l, $s) = (SIG.require(a)?, s);
                Ok(into_raw($body))
            })
        }
    )*};
}

// The `*_assign` entry points mutate `target` in place, for callers that
// relied on the operators changing their left operand.

macro_rules! vector_assign_op {
    ($($name:ident => $op:literal, |$t:ident, $r:ident| $body:expr;)*) => {$(
        #[no_mangle]
        pub unsafe extern "C" fn $name(target: *mut Vector2, rhs: *const Vector2) {
            const SIG: Signature = Signature::new($op, "target: Vector2, rhs: Vector2");
            let (target, rhs) = (target.as_mut(), rhs.as_ref());
            report((), || {
                let ($t, $r) = (SIG.present(target)?, SIG.require(rhs)?);
                $body;
                Ok(())
            })
        }
    )*};
}

macro_rules! scalar_assign_op {
    ($($name:ident => $op:literal, |$t:ident, $s:ident| $body:expr;)*) => {$(
        #[no_mangle]
        pub unsafe extern "C" fn $name(target: *mut Vector2, s: f32) {
            const SIG: Signature = Signature::new($op, "target: Vector2, s: f32");
            let target = target.as_mut();
            report((), || {
                let ($t, $s) = (SIG.present(target)?, s);
                $body;
                Ok(())
            })
        }
    )*};
}

vector_op! {
    rivec_vector2_add => "add", |l, r| l + r;
    rivec_vector2_sub => "sub", |l, r| l - r;
    rivec_vector2_mul => "mul", |l, r| l * r;
    rivec_vector2_div => "div", |l, r| l / r;
}

scalar_op! {
    rivec_vector2_add_scalar => "add_scalar", |l, s| l + s;
    rivec_vector2_sub_scalar => "sub_scalar", |l, s| l - s;
    rivec_vector2_mul_scalar => "mul_scalar", |l, s| l * s;
    rivec_vector2_div_scalar => "div_scalar", |l, s| l / s;
}

vector_assign_op! {
    rivec_vector2_add_assign => "add_assign", |t, r| *t += r;
    rivec_vector2_sub_assign => "sub_assign", |t, r| *t -= r;
    rivec_vector2_mul_assign => "mul_assign", |t, r| *t *= r;
    rivec_vector2_div_assign => "div_assign", |t, r| *t /= r;
}

scalar_assign_op! {
    rivec_vector2_add_scalar_assign => "add_scalar_assign", |t, s| *t += s;
    rivec_vector2_sub_scalar_assign => "sub_scalar_assign", |t, s| *t -= s;
    rivec_vector2_mul_scalar_assign => "mul_scalar_assign", |t, s| *t *= s;
    rivec_vector2_div_scalar_assign => "div_scalar_assign", |t, s| *t /= s;
}

// ----- Comparisons -----

macro_rules! sum_comparison {
    ($($name:ident => $method:ident;)*) => {$(
        #[no_mangle]
        pub unsafe extern "C" fn $name(v: *const Vector2, s: f32) -> bool {
            const SIG: Signature = Signature::new(stringify!($method), "v: Vector2, s: f32");
            let v = v.as_ref();
            report(false, || Ok(SIG.require(v)?.$method(s)))
        }
    )*};
}

macro_rules! vector_comparison {
    ($($name:ident => $method:ident;)*) => {$(
        #[no_mangle]
        pub unsafe extern "C" fn $name(v: *const Vector2, other: *const Vector2) -> bool {
            const SIG: Signature = Signature::new(stringify!($method), "v: Vector2, other: Vector2");
            let (v, other) = (v.as_ref(), other.as_ref());
            report(false, || Ok(SIG.require(v)?.$method(SIG.require(other)?)))
        }
    )*};
}

sum_comparison! {
    rivec_vector2_sum_exceeds => sum_exceeds;
    rivec_vector2_sum_below => sum_below;
    rivec_vector2_sum_at_least => sum_at_least;
    rivec_vector2_sum_at_most => sum_at_most;
    rivec_vector2_sum_equals => sum_equals;
    rivec_vector2_sum_differs => sum_differs;
    rivec_vector2_contains_component => contains_component;
}

vector_comparison! {
    rivec_vector2_all_components_greater => all_components_greater;
    rivec_vector2_all_components_less => all_components_less;
    rivec_vector2_all_components_greater_or_equal => all_components_greater_or_equal;
    rivec_vector2_all_components_less_or_equal => all_components_less_or_equal;
    rivec_vector2_both_components_differ => both_components_differ;
}
