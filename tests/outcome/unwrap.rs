use outcome_rail::{Outcome, UnwrapError};

#[test]
fn try_unwrap_returns_value_without_consuming_anything_else() {
    let o: Outcome<i32, &str> = Outcome::success(42);
    assert_eq!(o.try_unwrap().unwrap(), 42);
}

#[test]
fn try_unwrap_carries_the_failure_payload_in_the_error() {
    let o: Outcome<i32, &str> = Outcome::failure("nope");
    let err = o.try_unwrap().unwrap_err();

    assert_eq!(err.message(), "called `Outcome::try_unwrap()` on a `Failure` value");
    assert_eq!(err.payload(), &"nope");
    assert_eq!(err.into_payload(), "nope");
}

#[test]
fn try_unwrap_failure_carries_the_success_payload_in_the_error() {
    let o: Outcome<i32, &str> = Outcome::success(7);
    let err = o.try_unwrap_failure().unwrap_err();

    assert_eq!(err.payload(), &7);

    let o: Outcome<i32, &str> = Outcome::failure("x");
    assert_eq!(o.try_unwrap_failure().unwrap(), "x");
}

#[test]
fn unwrap_error_display_shows_message_and_payload_debug() {
    let err = Outcome::<i32, &str>::failure("bad port")
        .try_unwrap()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "called `Outcome::try_unwrap()` on a `Failure` value: \"bad port\""
    );
}

#[test]
fn unwrap_error_round_trips_through_clone_and_eq() {
    let err: UnwrapError<&str> = Outcome::<i32, &str>::failure("x").try_unwrap().unwrap_err();
    assert_eq!(err.clone(), err);
}

#[cfg(feature = "std")]
#[test]
fn unwrap_error_is_a_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}

    let err = Outcome::<i32, &str>::failure("x").try_unwrap().unwrap_err();
    assert_error(&err);
}

// The panicking accessors promise the same rendering as UnwrapError's Display.
#[cfg(feature = "std")]
#[test]
fn unwrap_panic_message_matches_unwrap_error_rendering() {
    let caught = std::panic::catch_unwind(|| {
        let _ = Outcome::<i32, &str>::failure("boom").unwrap();
    })
    .unwrap_err();

    let message = caught.downcast_ref::<String>().cloned().unwrap_or_default();
    assert_eq!(
        message,
        "called `Outcome::unwrap()` on a `Failure` value: \"boom\""
    );
}
