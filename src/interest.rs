use bitflags::bitflags;

bitflags! {
    /// Kernel readiness bits, as reported by and requested from epoll.
    ///
    /// The values are the raw `EPOLL*` constants, so an `EventSet` can be
    /// passed to `epoll_ctl` and read back from `epoll_wait` without
    /// translation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EventSet: u32 {
        /// Data is available to read.
        const IN = libc::EPOLLIN as u32;
        /// Writing will not block.
        const OUT = libc::EPOLLOUT as u32;
        /// An error condition is pending on the descriptor.
        const ERR = libc::EPOLLERR as u32;
        /// The descriptor was hung up.
        const HUP = libc::EPOLLHUP as u32;
        /// The peer closed or shut down its end of the connection.
        const RDHUP = libc::EPOLLRDHUP as u32;
        /// Edge-triggered delivery: notify on transitions only.
        const ET = libc::EPOLLET as u32;
    }
}

/// The readiness classes a caller wants reported for a descriptor.
///
/// `Interest` is the logical view; [`to_epoll_events`](Interest::to_epoll_events)
/// produces the kernel bitmask. Error and peer-hangup delivery cannot be
/// opted out of: a caller watching only for reads must still learn that
/// the connection broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interest {
    /// Read readiness only.
    Read,
    /// Write readiness only.
    Write,
    /// Both read and write readiness.
    All,
    /// No I/O readiness; errors and hangups are still reported.
    None,
}

impl Interest {
    /// Maps the interest to its epoll bitmask.
    ///
    /// Every variant's mask includes [`EventSet::ERR`] and
    /// [`EventSet::RDHUP`] so a closed or broken peer is always observable.
    pub fn to_epoll_events(self) -> EventSet {
        let base = EventSet::ERR | EventSet::RDHUP;

        match self {
            Interest::Read => EventSet::IN | base,
            Interest::Write => EventSet::OUT | base,
            Interest::All => EventSet::IN | EventSet::OUT | base,
            Interest::None => base,
        }
    }
}
