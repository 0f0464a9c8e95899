//! Property-based invariant tests for role assignment and navigation.
//!
//! These tests verify:
//!
//! 1. Exactly one `Active` slide, at the active index
//! 2. At most one slide per neighbour role
//! 3. `compute_role` is deterministic
//! 4. Looping assignments are rotation-invariant
//! 5. Navigation never leaves the valid index range
//! 6. Observers are notified once per state-changing call

use std::cell::RefCell;
use std::rc::Rc;

use carousel3d_core::{Carousel, Role, RoleAssignment, compute_role};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

/// A slide count and an in-range active index.
fn state_strategy() -> impl Strategy<Value = (usize, usize)> {
    (1usize..40).prop_flat_map(|n| (Just(n), 0..n))
}

#[derive(Debug, Clone)]
enum Op {
    Next,
    Prev,
    GoTo(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Prev),
        (0usize..50).prop_map(Op::GoTo),
    ]
}

// ═══════════════════════════════════════════════════════════════════════
// 1–2. Role multiplicity
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn exactly_one_active_at_active_index(
        (n, active) in state_strategy(),
        looping in any::<bool>(),
    ) {
        let roles = RoleAssignment::compute(active, n, looping);
        let actives: Vec<_> = roles.iter().filter(|(_, r)| *r == Role::Active).collect();
        prop_assert_eq!(actives.len(), 1);
        prop_assert_eq!(actives[0].0, active);
    }

    #[test]
    fn neighbour_roles_are_unique(
        (n, active) in state_strategy(),
        looping in any::<bool>(),
    ) {
        let roles = RoleAssignment::compute(active, n, looping);
        for role in [Role::AdjacentLeft, Role::AdjacentRight, Role::BackLeft, Role::BackRight] {
            let count = roles.iter().filter(|(_, r)| *r == role).count();
            prop_assert!(count <= 1, "{role:?} appears {count} times (n={n}, active={active})");
        }
    }

    #[test]
    fn at_most_five_visible(
        (n, active) in state_strategy(),
        looping in any::<bool>(),
    ) {
        let roles = RoleAssignment::compute(active, n, looping);
        prop_assert!(roles.visible_count() <= 5);
        if looping && n >= 5 {
            prop_assert_eq!(roles.visible_count(), 5);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3–4. Purity and symmetry
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn compute_role_is_deterministic(
        (n, active) in state_strategy(),
        index in 0usize..40,
        looping in any::<bool>(),
    ) {
        prop_assert_eq!(
            compute_role(index, active, n, looping),
            compute_role(index, active, n, looping)
        );
    }

    #[test]
    fn looping_roles_depend_only_on_offset(
        (n, active) in state_strategy(),
        shift in 0usize..40,
    ) {
        let shifted_active = (active + shift) % n;
        for index in 0..n {
            let shifted_index = (index + shift) % n;
            prop_assert_eq!(
                compute_role(index, active, n, true),
                compute_role(shifted_index, shifted_active, n, true)
            );
        }
    }

    #[test]
    fn looping_with_five_or_more_fills_every_slot(
        n in 5usize..40,
        active in 0usize..40,
    ) {
        let active = active % n;
        let roles = RoleAssignment::compute(active, n, true);
        for role in [Role::AdjacentLeft, Role::AdjacentRight, Role::BackLeft, Role::BackRight] {
            prop_assert!(roles.index_of(role).is_some(), "{role:?} missing (n={n})");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5–6. Navigation bounds and notification counts
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn navigation_stays_in_range(
        n in 1usize..20,
        looping in any::<bool>(),
        ops in proptest::collection::vec(op_strategy(), 0..100),
    ) {
        let mut carousel = Carousel::new(n, looping).unwrap();
        for op in &ops {
            match op {
                Op::Next => { carousel.next(); }
                Op::Prev => { carousel.prev(); }
                Op::GoTo(i) => { let _ = carousel.go_to(*i); }
            }
            prop_assert!(carousel.active_index() < n);
            prop_assert_eq!(
                carousel.roles(),
                &RoleAssignment::compute(carousel.active_index(), n, looping)
            );
        }
    }

    #[test]
    fn one_notification_per_successful_call(
        n in 1usize..20,
        looping in any::<bool>(),
        ops in proptest::collection::vec(op_strategy(), 0..100),
    ) {
        let mut carousel = Carousel::new(n, looping).unwrap();
        let hits = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&hits);
        carousel.on_active_changed(move |_| *sink.borrow_mut() += 1);

        let mut expected = 0usize;
        for op in &ops {
            let changed = match op {
                Op::Next => carousel.next(),
                Op::Prev => carousel.prev(),
                Op::GoTo(i) => carousel.go_to(*i).is_ok(),
            };
            if changed {
                expected += 1;
            }
        }
        prop_assert_eq!(*hits.borrow(), expected);
    }

    #[test]
    fn rejected_go_to_leaves_state(
        (n, active) in state_strategy(),
        offset in 0usize..100,
    ) {
        let mut carousel = Carousel::new(n, true).unwrap().starting_at(active).unwrap();
        prop_assert!(carousel.go_to(n + offset).is_err());
        prop_assert_eq!(carousel.active_index(), active);
    }
}
