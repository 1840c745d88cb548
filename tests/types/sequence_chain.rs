use chain_rail::{Arguments, Call, Chainable, EmptyReductionError, SequenceChain};
use proptest::prelude::*;

fn elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-10_000..10_000_i32, 0..100)
}

fn is_subsequence(sub: &[i32], of: &[i32]) -> bool {
    let mut rest = of.iter();
    sub.iter().all(|item| rest.any(|candidate| candidate == item))
}

proptest! {
    #[test]
    fn sequence_chain_apply_preserves_length_and_order(input in elements()) {
        let mapped = SequenceChain::new(input.clone()).apply(|x| x * 3 - 1).unwrap();

        prop_assert_eq!(mapped.len(), input.len());
        prop_assert_eq!(mapped, input.iter().map(|x| x * 3 - 1).collect::<Vec<_>>());
    }

    #[test]
    fn sequence_chain_filter_is_order_preserving_subsequence(input in elements(), divisor in 1..10_i32) {
        let kept = SequenceChain::new(input.clone()).filter(|x| x % divisor != 0).unwrap();

        prop_assert!(kept.len() <= input.len());
        prop_assert!(is_subsequence(&kept, &input));
        prop_assert!(kept.iter().all(|x| x % divisor != 0));
    }

    #[test]
    fn sequence_chain_reduce_matches_left_fold(input in elements(), initial in -10_000..10_000_i32) {
        let subtract = |acc: i64, x: i64| acc - x;
        let widened: Vec<i64> = input.iter().map(|&x| i64::from(x)).collect();

        let expected = widened.iter().fold(i64::from(initial), |acc, x| subtract(acc, *x));
        let reduced = SequenceChain::new(widened.clone()).reduce(subtract, Some(i64::from(initial))).unwrap();
        prop_assert_eq!(reduced.unwrap(), expected);

        let folded = SequenceChain::new(widened).fold(i64::from(initial), subtract);
        prop_assert_eq!(folded.unwrap(), expected);
    }

    #[test]
    fn sequence_chain_reduce_without_initial_matches_fold_from_head(input in prop::collection::vec(-10_000..10_000_i64, 1..100)) {
        let expected = input[1..].iter().fold(input[0], |acc, x| acc - x);
        let reduced = SequenceChain::new(input).reduce(|acc, x| acc - x, None).unwrap();

        prop_assert_eq!(reduced.unwrap(), expected);
    }
}

#[test]
fn sequence_chain_apply_visits_elements_left_to_right() {
    let mut seen = Vec::new();
    let _ = SequenceChain::new(vec!["a", "b", "c"]).apply(|item| seen.push(item));

    assert_eq!(seen, vec!["a", "b", "c"]);
}

#[test]
fn sequence_chain_filter_even_numbers() {
    let evens = SequenceChain::new(vec![1, 2, 3, 4]).filter(|x| x % 2 == 0);
    assert_eq!(evens.unwrap(), vec![2, 4]);
}

#[test]
fn sequence_chain_filter_with_named_injection() {
    fn no_remainder(args: Arguments<i32>) -> bool {
        match (args.named("value"), args.named("divide_by")) {
            (Some(value), Some(divide_by)) => value % divide_by == 0,
            _ => false,
        }
    }

    let multiples = SequenceChain::new(vec![1_i32, 2, 3, 4, 5, 6])
        .filter_with(Call::new().kwarg("divide_by", 3).inject_as("value"), no_remainder);

    assert_eq!(multiples.unwrap(), vec![3, 6]);
}

#[test]
fn sequence_chain_apply_with_reuses_call_per_element() {
    fn make_exciting(args: Arguments<String>) -> String {
        let marks = args.named("marks").cloned().unwrap_or_default();
        format!("{}{}", args[0], marks)
    }

    let excited = SequenceChain::new(vec![String::from("hi"), String::from("yo")])
        .apply_with(Call::new().kwarg("marks", String::from("!!")), make_exciting);

    assert_eq!(excited.to_string(), "SequenceChain(hi!!, yo!!)");
}

#[test]
fn sequence_chain_reduce_without_initial() {
    let sum = SequenceChain::new(vec![1, 2]).reduce(|a, b| a + b, None);
    assert_eq!(sum, Ok(Chainable::new(3)));
}

#[test]
fn sequence_chain_reduce_single_element_skips_combiner() {
    let mut calls = 0;
    let reduced = SequenceChain::new(vec![42]).reduce(
        |a, b| {
            calls += 1;
            a + b
        },
        None,
    );

    assert_eq!(reduced.unwrap().unwrap(), 42);
    assert_eq!(calls, 0);
}

#[test]
fn sequence_chain_reduce_empty() {
    let empty = SequenceChain::<i32>::new(vec![]);
    assert_eq!(empty.clone().reduce(|a, b| a + b, None), Err(EmptyReductionError));
    assert_eq!(empty.reduce(|a, b| a + b, Some(5)).unwrap().unwrap(), 5);
}

#[test]
fn sequence_chain_fold_changes_type() {
    let joined = SequenceChain::new(vec![1, 2, 3]).fold(String::new(), |mut acc, x| {
        if !acc.is_empty() {
            acc.push('-');
        }
        acc.push_str(&x.to_string());
        acc
    });

    assert_eq!(joined, Chainable::new(String::from("1-2-3")));
}

#[test]
fn sequence_chain_materializes_lazy_sources() {
    let mut produced = 0;
    let chain: SequenceChain<u32> = (1..=4)
        .map(|x| {
            produced += 1;
            x * x
        })
        .collect();

    assert_eq!(produced, 4);
    assert_eq!(chain.len(), 4);
    assert_eq!((&chain).into_iter().sum::<u32>(), 30);
    assert_eq!(chain.into_iter().last(), Some(16));
}

#[test]
fn sequence_chain_shr_and_display() {
    let chain = SequenceChain::new(vec![1, 2, 3]) >> (|x: i32| x + 1);

    assert_eq!(chain.to_string(), "SequenceChain(2, 3, 4)");
    assert_eq!(SequenceChain::<i32>::default().to_string(), "SequenceChain()");
    assert!(SequenceChain::<i32>::default().is_empty());
}

#[test]
fn sequence_chain_equality_is_variant_sensitive() {
    assert_eq!(SequenceChain::from(vec![1, 2]), SequenceChain::new(vec![1, 2]));
    assert!(SequenceChain::new(vec![1, 2]) != Chainable::new(vec![1, 2]));
}
