use crate::{ops::dot, vec2::Vector2};

/// Smallest smoothing time accepted by [`smooth_damp_step`].
pub const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Position and velocity after one [`smooth_damp_step`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Damped {
    pub position: Vector2,
    pub velocity: Vector2,
}

/// Moves `current` a distance of at most `max_delta` along the line to
/// `target`.
///
/// Returns `target` once it is within reach. A negative `max_delta` is not
/// special-cased and moves `current` away from `target`.
pub fn move_towards(current: Vector2, target: Vector2, max_delta: f32) -> Vector2 {
    let delta = target - current;
    if delta.magnitude() <= max_delta {
        return target;
    }

    current + delta.normalized() * max_delta
}

/// Critically damped approach of `current` to `target`.
///
/// Only the new position is returned; use [`smooth_damp_step`] to carry the
/// velocity into the next call.
pub fn smooth_damp(
    current: Vector2,
    target: Vector2,
    velocity: Vector2,
    smooth_time: f32,
    max_speed: f32,
    delta_time: f32,
) -> Vector2 {
    smooth_damp_step(current, target, velocity, smooth_time, max_speed, delta_time).position
}

/// One step of a critically damped spring.
///
/// `smooth_time` is roughly the time to reach the target and is floored at
/// [`MIN_SMOOTH_TIME`]. The exponential decay is approximated by
/// `1 / (1 + x + 0.48x² + 0.235x³)`; the step never overshoots `target`.
pub fn smooth_damp_step(
    current: Vector2,
    target: Vector2,
    velocity: Vector2,
    smooth_time: f32,
    max_speed: f32,
    delta_time: f32,
) -> Damped {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;

    let x = omega * delta_time;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let max_change = max_speed * smooth_time;
    let change = (current - target).clamp_magnitude(max_change);
    let clamped_target = current - change;

    let temp = (velocity + change * omega) * delta_time;
    let mut velocity = (velocity - temp * omega) * exp;
    let mut position = clamped_target + (change + temp) * exp;

    if dot(target - current, position - target) > 0.0 {
        position = target;
        velocity = (position - target) / delta_time;
    }

    Damped { position, velocity }
}
