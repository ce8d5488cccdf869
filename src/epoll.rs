//! Polling instance: registration and readiness waiting.
//!
//! An [`Epoll`] owns one kernel epoll instance and exposes the operations
//! the kernel defines for it:
//!
//! - register / modify / remove descriptor interest,
//! - block waiting for readiness events.
//!
//! The instance holds a reusable event buffer so repeated waits do not
//! allocate. Waiting therefore takes `&mut self`; everything else is
//! `&self`.

use crate::error::Result;
use crate::event::Event;
use crate::interest::EventSet;
use crate::syscall::wrap_syscall;

use libc::{EPOLL_CTL_ADD, EPOLL_CTL_DEL, EPOLL_CTL_MOD, epoll_event};
use log::{debug, trace};
use std::os::fd::{AsRawFd, RawFd};
use std::time::Duration;

/// Number of kernel events a single wait can drain.
const EVENT_BUFFER_SIZE: usize = 64;

/// An owned epoll instance.
///
/// The underlying descriptor is created by [`new`](Self::new) and closed
/// when the `Epoll` is dropped. Registrations live in the kernel, not in
/// this struct; dropping the instance discards them along with it.
#[derive(Debug)]
pub struct Epoll {
    /// Epoll file descriptor.
    fd: RawFd,

    /// Reusable buffer for raw kernel events.
    events: Vec<epoll_event>,
}

impl Epoll {
    /// Creates a new epoll instance.
    ///
    /// `size_hint` is the legacy sizing hint of `epoll_create(2)`; modern
    /// kernels ignore the value but still reject anything non-positive.
    pub fn new(size_hint: i32) -> Result<Self> {
        let fd = wrap_syscall("epoll_create", || unsafe { libc::epoll_create(size_hint) })?;
        debug!("created epoll instance (fd {fd})");

        Ok(Self {
            fd,
            events: Vec::with_capacity(EVENT_BUFFER_SIZE),
        })
    }

    /// Registers a file descriptor with the instance.
    ///
    /// The `events` mask is typically produced by
    /// [`Interest::to_epoll_events`](crate::Interest::to_epoll_events),
    /// optionally extended with [`EventSet::ET`] for edge-triggered
    /// delivery. Registering an already registered descriptor fails with
    /// `EEXIST`.
    pub fn register(&self, fd: RawFd, events: EventSet) -> Result<()> {
        trace!("epoll fd {}: add fd {} events {:?}", self.fd, fd, events);
        self.ctl("epoll_ctl_add", EPOLL_CTL_ADD, fd, Some(events))
    }

    /// Updates the interest mask of an already registered descriptor.
    ///
    /// Fails with `ENOENT` if the descriptor was never added.
    pub fn reregister(&self, fd: RawFd, events: EventSet) -> Result<()> {
        trace!("epoll fd {}: mod fd {} events {:?}", self.fd, fd, events);
        self.ctl("epoll_ctl_mod", EPOLL_CTL_MOD, fd, Some(events))
    }

    /// Removes a file descriptor from the instance.
    ///
    /// Fails with `ENOENT` if the descriptor was never added.
    pub fn deregister(&self, fd: RawFd) -> Result<()> {
        trace!("epoll fd {}: del fd {}", self.fd, fd);
        self.ctl("epoll_ctl_del", EPOLL_CTL_DEL, fd, None)
    }

    /// Issues one `epoll_ctl(2)` call.
    ///
    /// The interest record stores the target descriptor in its data field,
    /// so readiness events come back correlated by fd.
    fn ctl(&self, operation: &'static str, op: i32, fd: RawFd, events: Option<EventSet>) -> Result<()> {
        let mut record = epoll_event {
            events: events.map(|set| set.bits()).unwrap_or(0),
            u64: fd as u64,
        };

        wrap_syscall(operation, || unsafe {
            libc::epoll_ctl(self.fd, op, fd, &mut record)
        })?;

        Ok(())
    }

    /// Blocks until at least one registered descriptor is ready, or the
    /// timeout expires.
    ///
    /// `events` is cleared and refilled with the ready entries; the return
    /// value is their count. At most `EVENT_BUFFER_SIZE` entries are
    /// drained per call.
    ///
    /// The timeout has millisecond resolution: `None` blocks indefinitely,
    /// `Some(Duration::ZERO)` polls without blocking. A signal arriving
    /// mid-wait restarts the wait with the same timeout rather than
    /// returning early.
    pub fn wait(&mut self, events: &mut Vec<Event>, timeout: Option<Duration>) -> Result<usize> {
        let timeout_ms = timeout.map(|t| t.as_millis() as i32).unwrap_or(-1);

        unsafe {
            self.events.set_len(self.events.capacity());
        }

        let n = wrap_syscall("epoll_wait", || unsafe {
            libc::epoll_wait(
                self.fd,
                self.events.as_mut_ptr(),
                self.events.capacity() as i32,
                timeout_ms,
            )
        })? as usize;

        unsafe {
            self.events.set_len(n);
        }

        trace!("epoll fd {}: {} ready", self.fd, n);

        events.clear();
        for ev in &self.events {
            events.push(Event {
                fd: ev.u64 as RawFd,
                set: EventSet::from_bits_truncate(ev.events),
            });
        }

        Ok(n)
    }
}

impl AsRawFd for Epoll {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

impl Drop for Epoll {
    /// Closes the epoll descriptor.
    ///
    /// Close errors are ignored; the descriptor is gone either way.
    fn drop(&mut self) {
        debug!("closing epoll instance (fd {})", self.fd);
        unsafe {
            libc::close(self.fd);
        }
    }
}
