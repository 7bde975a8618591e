use outcome_rail::capture::{capture, lift};

pub mod panic;

#[test]
fn capture_returns_success_for_a_clean_run() {
    let outcome = capture(|| "8000".parse::<u16>().unwrap());
    assert_eq!(outcome.unwrap(), 8000);
}

#[test]
fn capture_intercepts_a_panic_as_failure() {
    let outcome = capture(|| -> u16 { panic!("bad port") });

    assert!(outcome.is_failure());
    assert_eq!(outcome.into_failure().unwrap().message(), Some("bad port"));
}

#[test]
fn capture_runs_the_callable_exactly_once() {
    let mut runs = 0;
    let outcome = capture(|| {
        runs += 1;
        runs
    });

    assert_eq!(outcome.unwrap(), 1);
    assert_eq!(runs, 1);
}

#[test]
fn side_effects_before_the_panic_stand() {
    let mut progress = Vec::new();
    let outcome = capture(|| {
        progress.push("step one");
        panic!("step two broke");
    });

    assert!(outcome.is_failure());
    assert_eq!(progress, vec!["step one"]);
}

#[test]
fn capture_preserves_the_returned_value_untouched() {
    let outcome = capture(|| vec![1, 2, 3]);
    assert_eq!(outcome.unwrap(), vec![1, 2, 3]);
}

#[test]
fn captured_outcomes_chain_like_any_other() {
    let port = capture(|| "8000".parse::<u16>().unwrap())
        .map(|port| port + 1)
        .unwrap_or(0);
    assert_eq!(port, 8001);

    let fallback = capture(|| "no".parse::<u16>().unwrap())
        .map(|port| port + 1)
        .unwrap_or(0);
    assert_eq!(fallback, 0);
}

#[test]
fn lift_wraps_a_function_into_an_outcome_returning_one() {
    fn parse_port(raw: &str) -> u16 {
        raw.parse().unwrap()
    }

    let safe_parse = lift(parse_port);

    assert_eq!(safe_parse("8000").unwrap(), 8000);
    assert!(safe_parse("not a port").is_failure());
}

#[test]
fn lifted_functions_hold_no_state_between_calls() {
    let safe_parse = lift(|raw: &str| raw.parse::<u16>().unwrap());

    assert!(safe_parse("bad").is_failure());
    assert_eq!(safe_parse("1").unwrap(), 1);
    assert_eq!(safe_parse("2").unwrap(), 2);
}

#[test]
fn lifted_functions_pass_their_argument_through_unchanged() {
    let doubled = lift(|x: i32| x * 2);
    assert_eq!(doubled(21).unwrap(), 42);
}
