use pollgate::{EventSet, Interest};

const UNMASKABLE: EventSet = EventSet::ERR.union(EventSet::RDHUP);

#[test]
fn test_every_interest_includes_error_and_hangup() {
    for interest in [Interest::Read, Interest::Write, Interest::All, Interest::None] {
        let mask = interest.to_epoll_events();
        assert!(
            mask.contains(UNMASKABLE),
            "{:?} must always carry ERR and RDHUP, got {:?}",
            interest,
            mask
        );
    }
}

#[test]
fn test_read_and_write_are_disjoint_apart_from_unmaskable_bits() {
    let read = Interest::Read.to_epoll_events();
    let write = Interest::Write.to_epoll_events();

    assert_eq!(
        read & write,
        UNMASKABLE,
        "Read and write masks may only share the ERR/RDHUP bits"
    );
}

#[test]
fn test_all_is_the_union_of_read_and_write() {
    let read = Interest::Read.to_epoll_events();
    let write = Interest::Write.to_epoll_events();
    let all = Interest::All.to_epoll_events();

    assert_eq!(all, read | write);
}

#[test]
fn test_none_is_exactly_the_unmaskable_bits() {
    assert_eq!(Interest::None.to_epoll_events(), UNMASKABLE);
}

#[test]
fn test_masks_carry_the_raw_kernel_bits() {
    assert_eq!(EventSet::IN.bits(), libc::EPOLLIN as u32);
    assert_eq!(EventSet::OUT.bits(), libc::EPOLLOUT as u32);
    assert_eq!(EventSet::ERR.bits(), libc::EPOLLERR as u32);
    assert_eq!(EventSet::RDHUP.bits(), libc::EPOLLRDHUP as u32);
    assert_eq!(EventSet::ET.bits(), libc::EPOLLET as u32);
}
