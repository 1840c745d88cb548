use std::collections::HashMap;

use chain_rail::{Call, Chainable, OptionalChain};

#[test]
fn optional_chain_absent_skips_transforms() {
    let mut calls = 0;
    let result = OptionalChain::<i32>::none().apply(|x| {
        calls += 1;
        x + 3
    });

    assert_eq!(calls, 0);
    assert!(result.is_absent());
    assert_eq!(result.unwrap(Some(9)), Some(9));
}

#[test]
fn optional_chain_absent_skips_apply_with() {
    let mut calls = 0;
    let result = OptionalChain::<i64>::none().apply_with(Call::new().arg(1_i64), |args| {
        calls += 1;
        args[0] + args[1]
    });

    assert_eq!(calls, 0);
    assert_eq!(result, OptionalChain::none());
}

#[test]
fn optional_chain_present_applies_transforms() {
    let result = OptionalChain::some(3).apply(|x| x + 2).apply(|x| x * 10);

    assert!(result.is_present());
    assert_eq!(result.value(), Some(&50));
    assert_eq!(result.unwrap(Some(0)), Some(50));
}

#[test]
fn optional_chain_stays_absent_once_absent() {
    let settings: HashMap<&str, &str> = HashMap::from([("port", "8080")]);

    let lookup = |key: &str| {
        OptionalChain::from(settings.get(key).copied())
            .apply(|raw: &str| raw.parse::<u16>().ok())
            .apply(|port| port.map(u32::from))
    };

    assert_eq!(lookup("port").unwrap(None), Some(Some(8080)));
    assert_eq!(lookup("host").unwrap(None), None);
}

#[test]
fn optional_chain_unwrap_defaults() {
    assert_eq!(OptionalChain::<i32>::none().unwrap(None), None);
    assert_eq!(OptionalChain::<i32>::none().unwrap_or(4), 4);
    assert_eq!(OptionalChain::some(1).unwrap_or(4), 1);
    assert_eq!(OptionalChain::new(Some(1)).unwrap(Some(4)), Some(1));
}

#[test]
fn optional_chain_shr_is_apply() {
    let absent = OptionalChain::<i32>::none() >> (|x: i32| x + 3);
    let present = OptionalChain::some(3) >> (|x: i32| x + 3);

    assert_eq!(absent, OptionalChain::none());
    assert_eq!(present, OptionalChain::some(6));
}

#[test]
fn optional_chain_display() {
    assert_eq!(OptionalChain::some(3).to_string(), "OptionalChain(3)");
    assert_eq!(OptionalChain::<i32>::none().to_string(), "OptionalChain(None)");
    assert_eq!(OptionalChain::<i32>::default(), OptionalChain::none());
}

#[test]
fn optional_chain_equality_is_variant_sensitive() {
    assert_eq!(OptionalChain::some(1), OptionalChain::new(Some(1)));
    assert!(OptionalChain::some(1) != Chainable::new(1));
    assert!(OptionalChain::some(1) != Chainable::new(Some(1)));
}
