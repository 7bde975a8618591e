use outcome_rail::Outcome;

#[test]
fn iter_success_yields_single_value_and_len_updates() {
    let o: Outcome<i32, &str> = Outcome::success(7);
    let mut iter = o.iter();

    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(&7));
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
}

#[test]
fn iter_failure_has_zero_len_and_is_empty() {
    let o: Outcome<i32, &str> = Outcome::failure("error");
    let mut iter = o.iter();

    assert_eq!(iter.len(), 0);
    assert_eq!(iter.size_hint(), (0, Some(0)));
    assert_eq!(iter.next(), None);
}

#[test]
fn into_iterator_yields_value_only_for_success() {
    let success: Outcome<i32, &str> = Outcome::success(5);
    let values: Vec<_> = success.into_iter().collect();
    assert_eq!(values, vec![5]);

    let failure: Outcome<i32, &str> = Outcome::failure("err");
    let values: Vec<_> = failure.into_iter().collect();
    assert!(values.is_empty());
}

#[test]
fn into_iterator_len_reflects_remaining_items() {
    let success: Outcome<i32, &str> = Outcome::success(5);
    let mut iter = success.into_iter();

    assert_eq!(iter.len(), 1);
    assert_eq!(iter.next(), Some(5));
    assert_eq!(iter.len(), 0);
}

#[test]
fn into_iterator_for_ref_outcome_borrows_the_value() {
    let o: Outcome<i32, &str> = Outcome::success(10);
    let collected: Vec<_> = (&o).into_iter().collect();
    assert_eq!(collected, vec![&10]);

    let mut total = 0;
    for value in &o {
        total += *value;
    }
    assert_eq!(total, 10);
}

#[test]
fn iterators_stay_fused_after_exhaustion() {
    let o: Outcome<i32, &str> = Outcome::success(1);
    let mut iter = o.into_iter();

    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn success_values_collect_through_iterator_adapters() {
    let outcomes = [
        Outcome::<i32, &str>::success(1),
        Outcome::failure("skip"),
        Outcome::success(3),
    ];

    let total: i32 = outcomes.into_iter().flatten().sum();
    assert_eq!(total, 4);
}
