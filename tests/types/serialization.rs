use chain_rail::{Call, Chainable, InjectionLocus, OptionalChain, SequenceChain};

#[test]
fn containers_serialize_transparently() {
    assert_eq!(serde_json::to_string(&Chainable::new(3)).unwrap(), "3");
    assert_eq!(serde_json::to_string(&OptionalChain::some("x")).unwrap(), "\"x\"");
    assert_eq!(serde_json::to_string(&OptionalChain::<i32>::none()).unwrap(), "null");
    assert_eq!(serde_json::to_string(&SequenceChain::new(vec![1, 2])).unwrap(), "[1,2]");
}

#[test]
fn containers_deserialize_from_plain_values() {
    let sequence: SequenceChain<u8> = serde_json::from_str("[4, 5, 6]").unwrap();
    assert_eq!(sequence.apply(|x| x * 2).unwrap(), vec![8, 10, 12]);

    let optional: OptionalChain<u8> = serde_json::from_str("null").unwrap();
    assert!(optional.is_absent());
}

#[test]
fn call_description_survives_serialization() {
    let call = Call::new().arg(1).kwarg("divide_by", 2).inject_as("value");

    let json = serde_json::to_string(&call).unwrap();
    let restored: Call<i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, call);
    assert_eq!(restored.locus(), &InjectionLocus::NamedSlot("value".into()));
}
