use chain_rail::{Call, Chain, Chainable, OptionalChain, ResultChain, SequenceChain, Variant};

fn normalize<C: Chain<Item = i64>>(chain: C) -> C {
    chain.then(|x| x.abs()).then(|x| x.min(100))
}

fn scale<C: Chain<Item = i64>>(chain: C, factor: i64) -> C {
    chain.then_with(Call::new().kwarg("factor", factor), |args| {
        args[0] * args.named("factor").copied().unwrap_or(1)
    })
}

#[test]
fn chain_generic_code_runs_on_every_variant() {
    assert_eq!(normalize(Chainable::new(-250)), Chainable::new(100));
    assert_eq!(normalize(OptionalChain::some(-7)), OptionalChain::some(7));
    assert_eq!(normalize(OptionalChain::none()), OptionalChain::none());
    assert_eq!(
        normalize(SequenceChain::new(vec![-3, 7, 400])),
        SequenceChain::new(vec![3, 7, 100])
    );
    assert_eq!(normalize(ResultChain::new(-42)), ResultChain::new(42));
}

#[test]
fn chain_then_with_injects_value() {
    assert_eq!(scale(Chainable::new(4), 3).unwrap(), 12);
    assert_eq!(scale(SequenceChain::new(vec![1, 2]), 10).unwrap(), vec![10, 20]);
    assert_eq!(scale(OptionalChain::none(), 10).unwrap(None), None);
    assert_eq!(scale(ResultChain::new(5), 2).unwrap().unwrap(), 10);
}

#[test]
fn chain_keeps_variant_semantics_in_error_state() {
    let failed = ResultChain::new(9_i64).apply(|x| if x > 5 { Err("too large") } else { Ok(x) });
    let after = normalize(failed);

    assert!(after.in_error_state());
    assert_eq!(after.checkpoint(), Some(&9));
}

#[test]
fn chain_reports_variant() {
    assert_eq!(Chainable::new(1_i64).variant(), Variant::Chainable);
    assert_eq!(OptionalChain::<i64>::none().variant(), Variant::OptionalChain);
    assert_eq!(SequenceChain::<i64>::default().variant(), Variant::SequenceChain);
    assert_eq!(<ResultChain<i64> as Chain>::VARIANT, Variant::ResultChain);
}

#[test]
fn variant_display_matches_container_rendering() {
    assert_eq!(Variant::Chainable.to_string(), "Chainable");
    assert_eq!(Variant::SequenceChain.name(), "SequenceChain");
    assert!(Chainable::new(1).to_string().starts_with(Variant::Chainable.name()));
    assert!(ResultChain::new(1).to_string().starts_with(Variant::ResultChain.name()));
}
