use outcome_rail::Outcome;

pub mod iter;
pub mod unwrap;

#[test]
fn success_and_failure_helpers_behave_as_expected() {
    let success = Outcome::<i32, &str>::success(5);
    assert!(success.is_success());
    assert!(!success.is_failure());
    assert_eq!(success.into_success(), Some(5));

    let failure = Outcome::<i32, &str>::failure("missing");
    assert!(failure.is_failure());
    assert!(!failure.is_success());
    assert_eq!(failure.into_failure(), Some("missing"));
}

#[test]
fn map_and_and_then_chain_success_values() {
    let result = Outcome::<i32, &str>::success(4)
        .map(|x| x * 2)
        .and_then(|x| {
            if x == 8 {
                Outcome::success(x + 1)
            } else {
                Outcome::failure("unexpected")
            }
        });

    assert_eq!(result.into_success(), Some(9));
}

#[test]
fn first_failure_short_circuits_the_rest_of_the_chain() {
    let mut calls = 0;
    let result = Outcome::<i32, &str>::success(1)
        .and_then(|_| Outcome::<i32, &str>::failure("step two broke"))
        .and_then(|x| {
            calls += 1;
            Outcome::success(x + 1)
        })
        .map(|x| {
            calls += 1;
            x * 10
        });

    assert_eq!(result.into_failure(), Some("step two broke"));
    assert_eq!(calls, 0);
}

#[test]
fn or_else_recovers_only_the_failure_branch() {
    let recovered: Outcome<i32, &str> =
        Outcome::<i32, &str>::failure("miss").or_else(|_| Outcome::success(0));
    assert_eq!(recovered.into_success(), Some(0));

    let untouched: Outcome<i32, &str> =
        Outcome::<i32, &str>::success(42).or_else(|_| Outcome::failure("unused"));
    assert_eq!(untouched.into_success(), Some(42));
}

#[test]
fn variants_pattern_match_exhaustively() {
    let outcome = Outcome::<i32, String>::success(3);

    let doubled = match outcome {
        Outcome::Success(value) => value * 2,
        Outcome::Failure(_) => 0,
    };
    assert_eq!(doubled, 6);
}

#[test]
fn equality_and_ordering_follow_the_derives() {
    let a = Outcome::<i32, &str>::success(1);
    let b = Outcome::<i32, &str>::success(1);
    let c = Outcome::<i32, &str>::failure("x");

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.clone().min(c.clone()) == a);
}
