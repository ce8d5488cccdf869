use pollgate::syscall::{is_blacklisted_errno, wrap_syscall};

/// Sets the calling thread's errno, simulating a failed syscall.
fn set_errno(code: i32) {
    unsafe {
        *libc::__errno_location() = code;
    }
}

#[test]
fn test_success_passes_through_without_retry() {
    let mut calls = 0;
    let res = wrap_syscall("fake_op", || -> i32 {
        calls += 1;
        42
    })
    .unwrap();

    assert_eq!(res, 42);
    assert_eq!(calls, 1, "A successful call must not be repeated");
}

#[test]
fn test_eintr_retries_until_success() {
    let mut calls = 0;
    let res = wrap_syscall("fake_op", || -> i32 {
        calls += 1;
        if calls <= 3 {
            set_errno(libc::EINTR);
            -1
        } else {
            7
        }
    })
    .unwrap();

    assert_eq!(res, 7, "The success value must be returned unchanged");
    assert_eq!(
        calls, 4,
        "Three EINTRs followed by success must mean exactly four invocations"
    );
}

#[test]
fn test_recoverable_errno_surfaces_as_os_error() {
    let err = wrap_syscall("fake_op", || -> i32 {
        set_errno(libc::EPERM);
        -1
    })
    .unwrap_err();

    assert_eq!(err.errno(), libc::EPERM);
    assert_eq!(err.operation(), "fake_op");
    assert!(
        err.message().contains("not permitted"),
        "Message should carry the strerror text, got: {}",
        err.message()
    );
}

#[test]
fn test_would_block_is_recoverable_and_classified() {
    let err = wrap_syscall("fake_op", || -> i32 {
        set_errno(libc::EAGAIN);
        -1
    })
    .unwrap_err();

    assert!(err.is_would_block());
}

#[test]
#[should_panic(expected = "blacklisted errno")]
fn test_bad_descriptor_aborts() {
    let _ = wrap_syscall("fake_op", || -> i32 {
        set_errno(libc::EBADF);
        -1
    });
}

#[test]
#[should_panic(expected = "blacklisted errno")]
fn test_bad_address_aborts() {
    let _ = wrap_syscall("fake_op", || -> i32 {
        set_errno(libc::EFAULT);
        -1
    });
}

#[test]
fn test_blacklist_covers_exactly_ebadf_and_efault() {
    assert!(is_blacklisted_errno(libc::EBADF));
    assert!(is_blacklisted_errno(libc::EFAULT));

    assert!(!is_blacklisted_errno(libc::EINTR));
    assert!(!is_blacklisted_errno(libc::EAGAIN));
    assert!(!is_blacklisted_errno(libc::EPERM));
    assert!(!is_blacklisted_errno(0));
}
