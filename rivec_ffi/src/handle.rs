use std::ptr::NonNull;

use rivec_math::Vector2;

use crate::{
    error::{set_last_error, BoundaryError, BoundaryResult},
    rivec_vector2_free,
};

/// Name and parameter list of an entry point, quoted when an argument is
/// missing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Signature {
    operation: &'static str,
    parameters: &'static str,
}

impl Signature {
    pub(crate) const fn new(operation: &'static str, parameters: &'static str) -> Self {
        Self {
            operation,
            parameters,
        }
    }

    fn missing(&self) -> BoundaryError {
        BoundaryError::MissingArgument {
            operation: self.operation,
            parameters: self.parameters,
        }
    }

    /// Unwraps a pointer argument that was converted with `as_ref`/`as_mut`.
    pub(crate) fn present<T>(&self, arg: Option<T>) -> BoundaryResult<T> {
        arg.ok_or_else(|| self.missing())
    }

    pub(crate) fn require(&self, arg: Option<&Vector2>) -> BoundaryResult<Vector2> {
        self.present(arg).copied()
    }
}

/// Runs `f`; a boundary error is recorded and replaced by `fallback`.
pub(crate) fn report<T>(fallback: T, f: impl FnOnce() -> BoundaryResult<T>) -> T {
    f().unwrap_or_else(|err| {
        set_last_error(&err);
        fallback
    })
}

/// Moves `v` to the heap and hands ownership to the caller.
pub(crate) fn into_handle(v: Vector2) -> NonNull<Vector2> {
    let handle = NonNull::from(Box::leak(Box::new(v)));
    log::trace!("allocated vector {v} at {:p}", handle.as_ptr());
    handle
}

/// Reclaims a handle produced by [`into_handle`].
///
/// # Safety
/// `handle` must be null or a live handle that is never used again.
pub(crate) unsafe fn release(handle: *mut Vector2) {
    if handle.is_null() {
        return;
    }

    log::trace!("releasing vector at {handle:p}");
    drop(Box::from_raw(handle));
}

/// Sole owner of one boundary handle, released exactly once on drop.
///
/// Lets Rust code hold handles the same way a foreign caller must: acquire,
/// pass `as_ptr()` into entry points, release when the scope ends.
#[derive(Debug)]
pub struct OwnedVector2 {
    handle: NonNull<Vector2>,
}

impl OwnedVector2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            handle: into_handle(Vector2::new(x, y)),
        }
    }

    /// Takes ownership of a handle returned by an entry point. Null (a failed
    /// call) yields `None`.
    ///
    /// # Safety
    /// `handle` must be null or a live handle not owned by anything else.
    pub unsafe fn from_raw(handle: *mut Vector2) -> Option<Self> {
        NonNull::new(handle).map(|handle| Self { handle })
    }

    pub fn as_ptr(&self) -> *const Vector2 {
        self.handle.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut Vector2 {
        self.handle.as_ptr()
    }

    pub fn get(&self) -> Vector2 {
        // SAFETY: the handle is live for as long as `self` is.
        unsafe { *self.handle.as_ptr() }
    }

    /// Gives up ownership without releasing the handle.
    pub fn into_raw(self) -> *mut Vector2 {
        let handle = self.handle.as_ptr();
        std::mem::forget(self);
        handle
    }
}

impl Drop for OwnedVector2 {
    fn drop(&mut self) {
        // SAFETY: `self` is the only owner and is going away.
        unsafe { rivec_vector2_free(self.handle.as_ptr()) }
    }
}
