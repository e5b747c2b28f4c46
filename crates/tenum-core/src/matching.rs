//! # Sequence Matching Policies
//!
//! The two ways a query sequence can match the values declared on a
//! multi-value instance. Both use [`Value::same_as`] per element and both
//! require equal length; neither does subset or superset matching.

use crate::value::Value;

/// Position-by-position equality.
pub fn sequence_matches(declared: &[Value], query: &[Value]) -> bool {
    declared.len() == query.len() && declared.iter().zip(query).all(|(d, q)| d.same_as(q))
}

/// Order-insensitive equality that respects multiplicity.
///
/// Each query element claims one unclaimed equal declared element. Since
/// `same_as` is an equivalence relation, greedy claiming finds a full pairing
/// whenever one exists.
pub fn multiset_matches(declared: &[Value], query: &[Value]) -> bool {
    if declared.len() != query.len() {
        return false;
    }
    let mut claimed = vec![false; declared.len()];
    query.iter().all(|q| {
        let free = declared
            .iter()
            .enumerate()
            .position(|(i, d)| !claimed[i] && d.same_as(q));
        match free {
            Some(i) => {
                claimed[i] = true;
                true
            }
            None => false,
        }
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-5i64..5).prop_map(Value::Int),
            (-5i32..5).prop_map(|n| Value::Float(f64::from(n) / 2.0)),
            "[a-c]{0,2}".prop_map(Value::Text),
        ]
    }

    fn shuffled_pair() -> impl Strategy<Value = (Vec<Value>, Vec<Value>)> {
        prop::collection::vec(leaf(), 0..8)
            .prop_flat_map(|values| (Just(values.clone()), Just(values).prop_shuffle()))
    }

    proptest! {
        /// Any permutation of the declared values is a multiset match.
        #[test]
        fn multiset_order_invariant((declared, shuffled) in shuffled_pair()) {
            prop_assert!(multiset_matches(&declared, &shuffled));
            prop_assert!(multiset_matches(&shuffled, &declared));
        }

        /// Positional match implies multiset match.
        #[test]
        fn sequence_implies_multiset(a in prop::collection::vec(leaf(), 0..6),
                                     b in prop::collection::vec(leaf(), 0..6)) {
            if sequence_matches(&a, &b) {
                prop_assert!(multiset_matches(&a, &b));
            }
        }

        /// Dropping any element breaks the match.
        #[test]
        fn multiset_rejects_missing_element((declared, shuffled) in shuffled_pair(), cut in any::<prop::sample::Index>()) {
            prop_assume!(!shuffled.is_empty());
            let mut shorter = shuffled;
            shorter.remove(cut.index(shorter.len()));
            prop_assert!(!multiset_matches(&declared, &shorter));
        }
    }
}
