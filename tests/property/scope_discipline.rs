//! Property-based tests for stack discipline guarantees

use proptest::prelude::*;
use proptest::sample::Index;
use scoped_context::{ContextError, ContextManager, ContextOptions, RunError};
use std::collections::HashSet;

/// Entering any sequence of values and leaving with matching ids pops them in
/// reverse order.
#[test]
fn test_lifo_discipline_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&prop::collection::vec(any::<u32>(), 1..24), |values| {
            let manager = ContextManager::new();
            let ids: Vec<_> = values.iter().map(|v| manager.enter(*v).unwrap()).collect();

            for (value, id) in values.iter().zip(ids.iter()).rev() {
                prop_assert_eq!(manager.get().unwrap(), *value);
                prop_assert_eq!(manager.leave(*id).unwrap(), *value);
            }
            prop_assert!(!manager.has());

            Ok(())
        })
        .unwrap();
}

/// Leaving with any id other than the top one fails without changing the stack.
#[test]
fn test_out_of_order_leave_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(prop::collection::vec(any::<u8>(), 2..16), any::<Index>()),
            |(values, pick)| {
                let manager = ContextManager::new();
                let ids: Vec<_> = values.iter().map(|v| manager.enter(*v).unwrap()).collect();
                let top = *ids.last().unwrap();
                let stale = ids[pick.index(ids.len() - 1)];

                let err = manager.leave(stale).unwrap_err();
                prop_assert_eq!(
                    err,
                    ContextError::ScopeMismatch {
                        context: "context".to_string(),
                        expected: top,
                        found: stale,
                    }
                );
                prop_assert_eq!(manager.depth(), values.len());
                prop_assert_eq!(manager.id().unwrap(), top);

                Ok(())
            },
        )
        .unwrap();
}

proptest! {
    /// `try_run_with` leaves the depth unchanged whether the body succeeds or fails.
    #[test]
    fn balanced_round_trip(prefix in 0usize..6, value in any::<i64>(), fail in any::<bool>()) {
        let manager = ContextManager::new();
        for level in 0..prefix {
            manager.enter(level as i64).unwrap();
        }

        let outcome = manager.try_run_with(value, |v| {
            if fail { Err("body failed") } else { Ok(v) }
        });

        match outcome {
            Ok((restored, result)) => {
                prop_assert!(!fail);
                prop_assert_eq!(restored, value);
                prop_assert_eq!(result, value);
            }
            Err(RunError::Body(_)) => prop_assert!(fail),
            Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
        }
        prop_assert_eq!(manager.depth(), prefix);
    }

    /// A second enter fails exactly when nesting is disallowed.
    #[test]
    fn nesting_policy(
        allows_nesting in any::<bool>(),
        first in any::<u16>(),
        second in any::<u16>(),
    ) {
        let manager =
            ContextManager::create(ContextOptions::default().allows_nesting(allows_nesting));
        manager.enter(first).unwrap();

        let entered = manager.enter(second);
        if allows_nesting {
            prop_assert!(entered.is_ok());
            prop_assert_eq!(manager.get().unwrap(), second);
        } else {
            let is_violation = matches!(entered, Err(ContextError::NestingViolation { .. }));
            prop_assert!(is_violation);
            prop_assert_eq!(manager.get().unwrap(), first);
        }
    }

    /// Ids are never repeated over any sequence of enter/leave operations.
    #[test]
    fn ids_never_repeat(ops in prop::collection::vec(any::<bool>(), 1..64)) {
        let manager = ContextManager::new();
        let mut active = Vec::new();
        let mut seen = HashSet::new();

        for push in ops {
            if push || active.is_empty() {
                let id = manager.enter(()).unwrap();
                prop_assert!(seen.insert(id));
                active.push(id);
            } else if let Some(id) = active.pop() {
                manager.leave(id).unwrap();
            }
        }
        prop_assert_eq!(manager.depth(), active.len());
    }
}
