//! Syscall retry and error translation.
//!
//! Every raw call the gateway makes goes through [`wrap_syscall`], which
//! applies the crate's uniform discipline:
//!
//! - `EINTR` retries the call with identical arguments, no backoff. The
//!   kernel defines the interrupted result as "no work was done; retry
//!   verbatim", so the loop makes forward progress by construction.
//! - `EBADF` and `EFAULT` mean the *caller* is broken (use-after-close,
//!   invalid pointer) and further syscalls may corrupt kernel-side state;
//!   the wrapper asserts instead of returning.
//! - Any other errno becomes a recoverable [`OsError`].

use crate::error::{OsError, Result};

use std::io;

/// Syscall return types that signal failure with `-1`.
pub trait IsMinusOne: Copy {
    fn is_minus_one(self) -> bool;
}

impl IsMinusOne for i32 {
    fn is_minus_one(self) -> bool {
        self == -1
    }
}

impl IsMinusOne for isize {
    fn is_minus_one(self) -> bool {
        self == -1
    }
}

/// Returns `true` for errnos that indicate a caller bug.
///
/// `EBADF` means a descriptor was used after close; `EFAULT` means a bad
/// pointer crossed into the kernel. Neither is an environmental condition
/// a caller could meaningfully handle.
pub fn is_blacklisted_errno(code: i32) -> bool {
    matches!(code, libc::EBADF | libc::EFAULT)
}

/// Reads the calling thread's errno.
fn errno() -> i32 {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// Invokes a raw syscall with uniform retry and error translation.
///
/// `call` is re-invoked until it returns something other than `-1` with
/// `EINTR`. On any other failure the current errno is classified:
/// blacklisted errnos abort, everything else is returned as an
/// [`OsError`] tagged with `operation`.
///
/// # Panics
///
/// Panics when the failing errno is `EBADF` or `EFAULT`.
pub fn wrap_syscall<T, F>(operation: &'static str, mut call: F) -> Result<T>
where
    T: IsMinusOne,
    F: FnMut() -> T,
{
    loop {
        let res = call();

        if !res.is_minus_one() {
            return Ok(res);
        }

        let code = errno();
        if code == libc::EINTR {
            continue;
        }

        let err = OsError::new(operation, code);
        assert!(
            !is_blacklisted_errno(code),
            "blacklisted errno in {}: {}",
            operation,
            err
        );

        return Err(err);
    }
}
