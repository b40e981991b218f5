use std::process::ExitCode;

use rivec_ffi::{
    last_error_message, rivec_vector2_move_towards, rivec_vector2_smooth_damp, OwnedVector2,
};
use rivec_math::{distance, move_towards, signed_angle, smooth_damp_step, v2, Vector2};

const FRAME: f32 = 1.0 / 60.0;

/// A follower chasing a fixed target, once with a spring and once at
/// constant speed.
fn chase(target: Vector2) {
    let mut spring = Vector2::ZERO;
    let mut velocity = Vector2::ZERO;
    let mut linear = Vector2::ZERO;

    for frame in 0..=90 {
        if frame % 15 == 0 {
            println!(
                "frame {frame:>2}: spring {spring:.3} ({:.3} left), linear {linear:.3} ({:.3} left)",
                distance(spring, target),
                distance(linear, target),
            );
        }

        let step = smooth_damp_step(spring, target, velocity, 0.4, 20.0, FRAME);
        spring = step.position;
        velocity = step.velocity;
        linear = move_towards(linear, target, 8.0 * FRAME);
    }

    println!(
        "heading from start to target: {:.2}°",
        signed_angle(Vector2::RIGHT, target)
    );
}

/// The same motion through the C ABI, holding every handle in a scope guard.
fn chase_through_boundary(target: Vector2) -> Result<(), String> {
    let current = OwnedVector2::new(0.0, 0.0);
    let goal = OwnedVector2::new(target.x, target.y);
    let velocity = OwnedVector2::new(0.0, 0.0);

    let step = |handle: *mut Vector2| {
        // SAFETY: every handle an entry point returns is fresh and unowned.
        unsafe { OwnedVector2::from_raw(handle) }.ok_or_else(|| {
            last_error_message().unwrap_or_else(|| "unknown boundary error".to_owned())
        })
    };

    // SAFETY: all arguments are live handles owned by this scope.
    let damped = step(unsafe {
        rivec_vector2_smooth_damp(
            current.as_ptr(),
            goal.as_ptr(),
            velocity.as_ptr(),
            0.4,
            20.0,
            FRAME,
        )
    })?;
    let moved = step(unsafe { rivec_vector2_move_towards(current.as_ptr(), goal.as_ptr(), 1.0) })?;

    println!("boundary: first spring step {}, first linear step {}", damped.get(), moved.get());

    // A missing argument comes back as an error, not a number.
    let missing = step(unsafe { rivec_vector2_move_towards(current.as_ptr(), std::ptr::null(), 1.0) });
    if let Err(err) = missing {
        println!("boundary: {err}");
    }

    Ok(())
}

fn main() -> ExitCode {
    let target = v2(6.0, 3.0);
    chase(target);

    match chase_through_boundary(target) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Follow exited with error: {err}");
            ExitCode::FAILURE
        }
    }
}
