use std::fmt;
use std::io;

/// A failed syscall, as surfaced by the gateway.
///
/// An `OsError` carries everything a caller needs for diagnostics:
/// the numeric errno, the operation that produced it, and (via
/// [`Display`](fmt::Display)) the kernel's textual description of the code.
///
/// Only *recoverable* failures become `OsError`s. Errnos that indicate a
/// caller bug rather than an environmental condition (`EBADF`, `EFAULT`)
/// never reach this type; the gateway aborts on them instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsError {
    /// Name of the failing operation, e.g. `"epoll_wait"`.
    operation: &'static str,

    /// Raw errno value reported by the kernel.
    errno: i32,
}

impl OsError {
    pub(crate) fn new(operation: &'static str, errno: i32) -> Self {
        Self { operation, errno }
    }

    /// Returns the raw errno value.
    pub fn errno(&self) -> i32 {
        self.errno
    }

    /// Returns the name of the operation that failed.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Returns the kernel's textual description of the errno.
    pub fn message(&self) -> String {
        io::Error::from_raw_os_error(self.errno).to_string()
    }

    /// Returns `true` if the failure was `EAGAIN`/`EWOULDBLOCK`.
    ///
    /// Non-blocking descriptors report this when no data (or counter
    /// value, or timer expiration) is currently available.
    pub fn is_would_block(&self) -> bool {
        self.errno == libc::EAGAIN || self.errno == libc::EWOULDBLOCK
    }
}

impl fmt::Display for OsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed: {} (errno {})",
            self.operation,
            self.message(),
            self.errno
        )
    }
}

impl std::error::Error for OsError {}

impl From<OsError> for io::Error {
    fn from(err: OsError) -> Self {
        io::Error::from_raw_os_error(err.errno)
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, OsError>;
