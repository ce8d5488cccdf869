//! 64-bit kernel event counter.
//!
//! An eventfd is a kernel object holding a 64-bit accumulator. Writes add
//! to it, reads drain it, and a non-zero counter makes the descriptor
//! readable — which makes it a natural wake-up signal to register with an
//! [`Epoll`](crate::Epoll) instance.

use crate::error::Result;
use crate::syscall::wrap_syscall;

use bitflags::bitflags;
use log::debug;
use std::mem;
use std::os::fd::{AsRawFd, RawFd};

bitflags! {
    /// Flags accepted by [`EventFd::new`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EventFdFlags: i32 {
        /// Close the descriptor on `exec`.
        const CLOEXEC = libc::EFD_CLOEXEC;
        /// Reads fail with `EAGAIN` instead of blocking when the counter
        /// is zero.
        const NONBLOCK = libc::EFD_NONBLOCK;
    }
}

/// An owned eventfd descriptor.
///
/// The descriptor is closed when the `EventFd` is dropped.
pub struct EventFd {
    fd: RawFd,
}

impl EventFd {
    /// Creates an eventfd with the given initial counter value and flags.
    pub fn new(initval: u32, flags: EventFdFlags) -> Result<Self> {
        let fd = wrap_syscall("eventfd", || unsafe {
            libc::eventfd(initval, flags.bits())
        })?;
        debug!("created eventfd (fd {fd}, initval {initval})");

        Ok(Self { fd })
    }

    /// Adds `value` to the counter.
    ///
    /// Blocks (or fails with `EAGAIN` when non-blocking) if the addition
    /// would overflow the kernel's `u64::MAX - 1` ceiling.
    pub fn write(&self, value: u64) -> Result<()> {
        let buf = value.to_ne_bytes();

        wrap_syscall("eventfd_write", || unsafe {
            libc::write(self.fd, buf.as_ptr().cast(), buf.len())
        })?;

        Ok(())
    }

    /// Drains the counter and returns the accumulated value.
    ///
    /// Blocks until the counter is non-zero; with
    /// [`EventFdFlags::NONBLOCK`] a zero counter fails with `EAGAIN`
    /// instead.
    pub fn read(&self) -> Result<u64> {
        let mut buf = [0u8; mem::size_of::<u64>()];

        wrap_syscall("eventfd_read", || unsafe {
            libc::read(self.fd, buf.as_mut_ptr().cast(), buf.len())
        })?;

        Ok(u64::from_ne_bytes(buf))
    }
}

impl AsRawFd for EventFd {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

impl Drop for EventFd {
    fn drop(&mut self) {
        debug!("closing eventfd (fd {})", self.fd);
        unsafe {
            libc::close(self.fd);
        }
    }
}
