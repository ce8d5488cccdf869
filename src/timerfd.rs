//! Kernel timer that becomes readable on expiration.
//!
//! A timerfd delivers deadlines through the readiness machinery: arm it,
//! register it with an [`Epoll`](crate::Epoll) instance for read interest,
//! and the descriptor becomes readable when the deadline elapses. Reading
//! it drains the number of expirations since the last read.

use crate::error::Result;
use crate::syscall::wrap_syscall;

use bitflags::bitflags;
use log::debug;
use std::mem;
use std::os::fd::{AsRawFd, RawFd};
use std::time::Duration;

bitflags! {
    /// Flags accepted by [`TimerFd::new`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TimerFdFlags: i32 {
        /// Close the descriptor on `exec`.
        const CLOEXEC = libc::TFD_CLOEXEC;
        /// Reads fail with `EAGAIN` instead of blocking when no
        /// expiration has occurred.
        const NONBLOCK = libc::TFD_NONBLOCK;
    }
}

bitflags! {
    /// Flags accepted by [`TimerFd::set_time`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SetTimeFlags: i32 {
        /// Interpret the initial expiration as an absolute time on the
        /// timer's clock rather than as a relative delay.
        const ABSTIME = libc::TFD_TIMER_ABSTIME;
    }
}

/// The kernel clock a timer measures against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// A clock that cannot be set and is unaffected by wall-clock jumps.
    Monotonic,
    /// The system-wide wall clock.
    Realtime,
}

impl Clock {
    fn to_clockid(self) -> libc::clockid_t {
        match self {
            Clock::Monotonic => libc::CLOCK_MONOTONIC,
            Clock::Realtime => libc::CLOCK_REALTIME,
        }
    }
}

/// A timer expiration schedule.
///
/// `initial` is the first expiration; `interval` re-arms the timer
/// periodically after that. A zero `initial` disarms the timer, and a
/// zero `interval` makes it one-shot — the kernel's `itimerspec`
/// semantics, unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSpec {
    /// Delay (or absolute time, with [`SetTimeFlags::ABSTIME`]) of the
    /// first expiration.
    pub initial: Duration,

    /// Period between subsequent expirations.
    pub interval: Duration,
}

impl TimerSpec {
    /// A one-shot expiration after `delay`.
    pub fn oneshot(delay: Duration) -> Self {
        Self {
            initial: delay,
            interval: Duration::ZERO,
        }
    }

    /// A periodic schedule: first expiration after `initial`, then every
    /// `interval`.
    pub fn periodic(initial: Duration, interval: Duration) -> Self {
        Self { initial, interval }
    }

    /// The disarmed schedule.
    pub fn disarmed() -> Self {
        Self {
            initial: Duration::ZERO,
            interval: Duration::ZERO,
        }
    }

    fn to_itimerspec(self) -> libc::itimerspec {
        libc::itimerspec {
            it_value: duration_to_timespec(self.initial),
            it_interval: duration_to_timespec(self.interval),
        }
    }

    fn from_itimerspec(spec: libc::itimerspec) -> Self {
        Self {
            initial: timespec_to_duration(spec.it_value),
            interval: timespec_to_duration(spec.it_interval),
        }
    }
}

fn duration_to_timespec(d: Duration) -> libc::timespec {
    libc::timespec {
        tv_sec: d.as_secs() as libc::time_t,
        tv_nsec: d.subsec_nanos() as libc::c_long,
    }
}

fn timespec_to_duration(ts: libc::timespec) -> Duration {
    Duration::new(ts.tv_sec as u64, ts.tv_nsec as u32)
}

/// An owned timerfd descriptor.
///
/// The descriptor is closed when the `TimerFd` is dropped.
pub struct TimerFd {
    fd: RawFd,
}

impl TimerFd {
    /// Creates a timer measuring against the given clock.
    pub fn new(clock: Clock, flags: TimerFdFlags) -> Result<Self> {
        let fd = wrap_syscall("timerfd_create", || unsafe {
            libc::timerfd_create(clock.to_clockid(), flags.bits())
        })?;
        debug!("created timerfd (fd {fd}, clock {clock:?})");

        Ok(Self { fd })
    }

    /// Arms (or disarms) the timer and returns the previous schedule.
    ///
    /// The previous schedule's `initial` field reports the time that was
    /// left until the next expiration. Callers that do not need it can
    /// discard the return value.
    pub fn set_time(&self, flags: SetTimeFlags, spec: TimerSpec) -> Result<TimerSpec> {
        let new = spec.to_itimerspec();
        let mut old: libc::itimerspec = unsafe { mem::zeroed() };

        wrap_syscall("timerfd_settime", || unsafe {
            libc::timerfd_settime(self.fd, flags.bits(), &new, &mut old)
        })?;

        Ok(TimerSpec::from_itimerspec(old))
    }

    /// Disarms the timer and returns the schedule it was running.
    pub fn disarm(&self) -> Result<TimerSpec> {
        self.set_time(SetTimeFlags::empty(), TimerSpec::disarmed())
    }

    /// Drains and returns the number of expirations since the last read.
    ///
    /// Blocks until at least one expiration has occurred; with
    /// [`TimerFdFlags::NONBLOCK`] it fails with `EAGAIN` instead.
    pub fn read(&self) -> Result<u64> {
        let mut buf = [0u8; mem::size_of::<u64>()];

        wrap_syscall("timerfd_read", || unsafe {
            libc::read(self.fd, buf.as_mut_ptr().cast(), buf.len())
        })?;

        Ok(u64::from_ne_bytes(buf))
    }
}

impl AsRawFd for TimerFd {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

impl Drop for TimerFd {
    fn drop(&mut self) {
        debug!("closing timerfd (fd {})", self.fd);
        unsafe {
            libc::close(self.fd);
        }
    }
}
