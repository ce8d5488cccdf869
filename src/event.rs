use crate::interest::EventSet;

use std::os::fd::RawFd;

/// A readiness event reported by [`Epoll::wait`](crate::Epoll::wait).
///
/// An `Event` correlates a registered file descriptor with the set of
/// conditions the kernel signaled for it during one wait cycle.
#[derive(Debug, Clone, Copy)]
pub struct Event {
    /// The descriptor the event refers to.
    pub fd: RawFd,

    /// The signaled conditions.
    pub set: EventSet,
}

impl Event {
    /// Returns `true` if the descriptor should be read.
    ///
    /// Error and hangup conditions count as readable: a reader blocked on
    /// a dead descriptor must wake up and observe the failure from the
    /// read itself.
    pub fn is_readable(&self) -> bool {
        self.set
            .intersects(EventSet::IN | EventSet::ERR | EventSet::HUP)
    }

    /// Returns `true` if writing will not block.
    pub fn is_writable(&self) -> bool {
        self.set.contains(EventSet::OUT)
    }

    /// Returns `true` if an error condition was signaled.
    pub fn is_error(&self) -> bool {
        self.set.contains(EventSet::ERR)
    }

    /// Returns `true` if the descriptor or its peer hung up.
    pub fn is_hangup(&self) -> bool {
        self.set.intersects(EventSet::HUP | EventSet::RDHUP)
    }
}
