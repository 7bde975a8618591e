use std::panic::panic_any;

use outcome_rail::capture::{capture, CapturedPanic};

fn failure_of<T: 'static>(f: impl FnOnce() -> T) -> CapturedPanic {
    capture(f).into_failure().expect("callable should panic")
}

#[test]
fn message_reads_static_str_payloads() {
    let failure = failure_of(|| -> u32 { panic!("plain literal") });
    assert_eq!(failure.message(), Some("plain literal"));
}

#[test]
fn message_reads_formatted_string_payloads() {
    let port = 8000;
    let failure = failure_of(|| -> u32 { panic!("port {} taken", port) });
    assert_eq!(failure.message(), Some("port 8000 taken"));
}

#[test]
fn message_is_none_for_typed_payloads() {
    #[derive(Debug)]
    struct Opaque;

    let failure = failure_of(|| -> u32 { panic_any(Opaque) });
    assert_eq!(failure.message(), None);
}

#[test]
fn is_and_downcast_ref_see_the_concrete_payload_type() {
    #[derive(Debug, PartialEq)]
    struct Overflow(u32);

    let failure = failure_of(|| -> u32 { panic_any(Overflow(3)) });

    assert!(failure.is::<Overflow>());
    assert!(!failure.is::<String>());
    assert_eq!(failure.downcast_ref::<Overflow>(), Some(&Overflow(3)));
    assert_eq!(failure.downcast_ref::<String>(), None);
}

#[test]
fn downcast_recovers_the_payload_by_value() {
    #[derive(Debug, PartialEq)]
    struct Overflow(u32);

    let failure = failure_of(|| -> u32 { panic_any(Overflow(9)) });
    let recovered = failure.downcast::<Overflow>().unwrap();
    assert_eq!(recovered, Overflow(9));
}

#[test]
fn downcast_hands_back_the_capture_on_type_mismatch() {
    let failure = failure_of(|| -> u32 { panic!("still here") });

    let failure = match failure.downcast::<u32>() {
        Ok(_) => panic!("string payload must not downcast to u32"),
        Err(failure) => failure,
    };
    assert_eq!(failure.message(), Some("still here"));
}

#[test]
fn into_payload_returns_the_verbatim_panic_payload() {
    let failure = failure_of(|| -> u32 { panic!("verbatim") });

    let payload = failure.into_payload();
    assert_eq!(payload.downcast_ref::<&'static str>(), Some(&"verbatim"));
}

#[test]
fn display_renders_the_message_when_present() {
    let failure = failure_of(|| -> u32 { panic!("bad flag") });
    assert_eq!(failure.to_string(), "panicked: bad flag");

    let failure = failure_of(|| -> u32 { panic_any(17u8) });
    assert_eq!(failure.to_string(), "panicked with a non-string payload");
}

#[test]
fn debug_includes_the_message_without_dumping_the_payload() {
    let failure = failure_of(|| -> u32 { panic!("shown") });
    let rendered = format!("{:?}", failure);

    assert!(rendered.contains("CapturedPanic"));
    assert!(rendered.contains("shown"));
}

#[test]
fn captured_panic_is_a_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}

    let failure = failure_of(|| -> u32 { panic!("e") });
    assert_error(&failure);
}
