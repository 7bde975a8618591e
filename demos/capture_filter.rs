//! Selective interception with a payload-type filter.
//!
//! The filter lists the payload types that become failures; anything else
//! keeps unwinding through the boundary as if it were not there.

use std::panic::{catch_unwind, panic_any, AssertUnwindSafe};

use outcome_rail::capture::{capture_with, PanicFilter};

#[derive(Debug)]
struct Overflow(u64);

#[derive(Debug)]
struct Timeout {
    after_ms: u64,
}

fn add_quota(used: u64, extra: u64) -> u64 {
    match used.checked_add(extra) {
        Some(total) if total <= 10_000 => total,
        Some(total) => panic_any(Overflow(total)),
        None => panic_any(Overflow(u64::MAX)),
    }
}

fn main() {
    // The default hook would interleave panic reports with the demo output.
    std::panic::set_hook(Box::new(|_| {}));

    let filter = PanicFilter::only::<Overflow>();

    // 1. Clean call: the filter is never consulted
    println!("1. Clean call:");
    let outcome = capture_with(&filter, || add_quota(4_000, 1_000));
    println!("   quota now {:?}", outcome.into_success());

    // 2. Listed payload: intercepted as a failure
    println!("2. Listed payload:");
    let outcome = capture_with(&filter, || add_quota(9_000, 2_000));
    if let Some(failure) = outcome.into_failure() {
        let overflow = failure.downcast_ref::<Overflow>().unwrap();
        println!("   quota overflow at {}", overflow.0);
    }

    // 3. Unlisted payload: keeps unwinding past the boundary
    println!("3. Unlisted payload:");
    let escaped = catch_unwind(AssertUnwindSafe(|| {
        capture_with(&filter, || -> u64 { panic_any(Timeout { after_ms: 250 }) })
    }));
    match escaped {
        Ok(_) => println!("   unexpected: boundary intercepted a Timeout"),
        Err(payload) => {
            let timeout = payload.downcast_ref::<Timeout>().unwrap();
            println!("   timeout passed through after {}ms", timeout.after_ms);
        }
    }

    // 4. Widening the filter
    println!("4. Widening the filter:");
    let wider = filter.or::<Timeout>();
    let outcome = capture_with(&wider, || -> u64 { panic_any(Timeout { after_ms: 250 }) });
    println!("   timeout intercepted: {}", outcome.is_failure());
}
