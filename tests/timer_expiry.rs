use pollgate::{Clock, Epoll, EventSet, Interest, SetTimeFlags, TimerFd, TimerFdFlags, TimerSpec};

use std::os::fd::AsRawFd;
use std::time::{Duration, Instant};

#[test]
fn test_oneshot_timer_fires_once_after_its_delay() {
    let mut epoll = Epoll::new(8).unwrap();
    let timer = TimerFd::new(
        Clock::Monotonic,
        TimerFdFlags::CLOEXEC | TimerFdFlags::NONBLOCK,
    )
    .unwrap();

    epoll
        .register(
            timer.as_raw_fd(),
            Interest::Read.to_epoll_events() | EventSet::ET,
        )
        .unwrap();

    // Not armed yet, so nothing can be ready.
    let mut events = Vec::new();
    let n = epoll.wait(&mut events, Some(Duration::ZERO)).unwrap();
    assert_eq!(n, 0, "An unarmed timer must not report readable");

    timer
        .set_time(
            SetTimeFlags::empty(),
            TimerSpec::oneshot(Duration::from_millis(10)),
        )
        .unwrap();

    let start = Instant::now();
    let n = epoll
        .wait(&mut events, Some(Duration::from_millis(100)))
        .unwrap();
    let elapsed = start.elapsed();

    assert_eq!(n, 1, "Exactly one descriptor should be ready");
    assert_eq!(events[0].fd, timer.as_raw_fd());
    assert!(events[0].is_readable());
    assert!(
        elapsed >= Duration::from_millis(10),
        "The timer must not fire before its deadline, fired after {:?}",
        elapsed
    );

    assert_eq!(
        timer.read().unwrap(),
        1,
        "A one-shot timer reports a single expiration"
    );
}

#[test]
fn test_set_time_returns_the_previous_schedule() {
    let timer = TimerFd::new(
        Clock::Monotonic,
        TimerFdFlags::CLOEXEC | TimerFdFlags::NONBLOCK,
    )
    .unwrap();

    let previous = timer
        .set_time(
            SetTimeFlags::empty(),
            TimerSpec::periodic(Duration::from_secs(5), Duration::from_secs(1)),
        )
        .unwrap();
    assert_eq!(
        previous,
        TimerSpec::disarmed(),
        "A fresh timer starts disarmed"
    );

    let previous = timer.disarm().unwrap();
    assert_eq!(
        previous.interval,
        Duration::from_secs(1),
        "Disarming reports the schedule that was running"
    );
    assert!(
        previous.initial > Duration::ZERO && previous.initial <= Duration::from_secs(5),
        "The previous initial reports the time left until expiration"
    );
}

#[test]
fn test_reading_an_unexpired_timer_would_block() {
    let timer = TimerFd::new(
        Clock::Monotonic,
        TimerFdFlags::CLOEXEC | TimerFdFlags::NONBLOCK,
    )
    .unwrap();

    timer
        .set_time(
            SetTimeFlags::empty(),
            TimerSpec::oneshot(Duration::from_secs(60)),
        )
        .unwrap();

    let err = timer.read().unwrap_err();
    assert!(err.is_would_block());
    assert_eq!(err.operation(), "timerfd_read");
}
