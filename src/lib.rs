//! # Pollgate
//!
//! **Pollgate** is a thin, safe gateway over the Linux event-notification
//! primitives: `epoll`, `eventfd`, and `timerfd`.
//!
//! It does not provide an event loop, callback dispatch, or any I/O
//! abstraction. It provides exactly one layer: typed entry points over the
//! raw syscalls, with two guarantees applied uniformly:
//!
//! - **EINTR is absorbed.** Every operation retries the underlying syscall
//!   verbatim when a signal interrupts it; callers never observe `EINTR`.
//! - **Errors are typed.** Every other failure surfaces as an [`OsError`]
//!   carrying the errno, its human-readable message, and the name of the
//!   failing operation. Errnos that indicate a caller bug (`EBADF`,
//!   `EFAULT`) abort instead of returning.
//!
//! All descriptor wrappers ([`Epoll`], [`EventFd`], [`TimerFd`]) own their
//! file descriptor and close it on drop.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pollgate::{Epoll, EventFd, EventFdFlags, Interest};
//! use std::os::fd::AsRawFd;
//! use std::time::Duration;
//!
//! let mut epoll = Epoll::new(128)?;
//! let counter = EventFd::new(0, EventFdFlags::CLOEXEC | EventFdFlags::NONBLOCK)?;
//!
//! epoll.register(counter.as_raw_fd(), Interest::Read.to_epoll_events())?;
//! counter.write(1)?;
//!
//! let mut events = Vec::new();
//! epoll.wait(&mut events, Some(Duration::from_millis(100)))?;
//! assert!(events[0].is_readable());
//! ```
//!
//! ## Modules
//!
//! - [`epoll`] — Polling instance: registration and readiness waiting
//! - [`eventfd`] — 64-bit kernel event counter
//! - [`timerfd`] — Kernel timer that becomes readable on expiration
//! - [`syscall`] — The retry/translation wrapper everything above is built on

#![cfg(target_os = "linux")]

mod error;
mod event;
mod interest;

pub mod epoll;
pub mod eventfd;
pub mod syscall;
pub mod timerfd;

pub use epoll::Epoll;
pub use error::{OsError, Result};
pub use event::Event;
pub use eventfd::{EventFd, EventFdFlags};
pub use interest::{EventSet, Interest};
pub use timerfd::{Clock, SetTimeFlags, TimerFd, TimerFdFlags, TimerSpec};
