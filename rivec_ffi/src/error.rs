use std::{cell::RefCell, ffi::CString, os::raw::c_char, ptr};

pub type BoundaryResult<T = ()> = Result<T, BoundaryError>;

/// Caller mistakes detected at the boundary before any computation runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundaryError {
    #[error("missing argument to `{operation}`: expected ({parameters})")]
    MissingArgument {
        operation: &'static str,
        parameters: &'static str,
    },
}

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

pub(crate) fn set_last_error(err: &BoundaryError) {
    log::warn!("{err}");

    // The message is built from static identifiers and never contains a NUL.
    let message = CString::new(err.to_string()).unwrap_or_default();
    LAST_ERROR.with(|slot| *slot.borrow_mut() = Some(message));
}

/// Returns the message of the last boundary error raised on this thread, or
/// null when there is none.
///
/// Successful calls leave the slot untouched. The pointer stays valid until
/// the next boundary error or [`rivec_clear_last_error`] on the same thread.
#[no_mangle]
pub extern "C" fn rivec_last_error_message() -> *const c_char {
    LAST_ERROR.with(|slot| match slot.borrow().as_ref() {
        Some(message) => message.as_ptr(),
        None => ptr::null(),
    })
}

#[no_mangle]
pub extern "C" fn rivec_clear_last_error() {
    LAST_ERROR.with(|slot| *slot.borrow_mut() = None);
}

/// The last boundary error message on this thread, for Rust callers.
pub fn last_error_message() -> Option<String> {
    LAST_ERROR.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|message| message.to_string_lossy().into_owned())
    })
}
