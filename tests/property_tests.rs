//! Property tests for role dealing, the deck, and full random games.

mod common;

use common::*;
use hidden_council::rules::{assign_roles, fascist_count, role_distribution};
use hidden_council::{GameRng, Policy, PolicyDeck, Role};
use proptest::prelude::*;

fn sorted(mut roles: Vec<Role>) -> Vec<Role> {
    roles.sort_by_key(|role| match role {
        Role::Liberal => 0,
        Role::Fascist => 1,
        Role::Hitler => 2,
    });
    roles
}

fn policy() -> impl Strategy<Value = Policy> {
    prop_oneof![Just(Policy::Liberal), Just(Policy::Fascist)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any seed deals a permutation of the fixed multiset for the table size.
    #[test]
    fn prop_roles_are_a_permutation(count in 5usize..=10, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let roles = assign_roles(count, &mut rng).unwrap();

        prop_assert_eq!(roles.len(), count);
        prop_assert_eq!(roles.iter().filter(|&&r| r == Role::Hitler).count(), 1);
        prop_assert_eq!(
            roles.iter().filter(|&&r| r == Role::Fascist).count(),
            fascist_count(count).unwrap()
        );
        prop_assert_eq!(sorted(roles), sorted(role_distribution(count).unwrap()));
    }

    /// Out-of-range tables never get roles.
    #[test]
    fn prop_bad_table_sizes_rejected(count in prop_oneof![0usize..5, 11usize..40], seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        prop_assert!(assign_roles(count, &mut rng).is_none());
    }

    /// Draws either succeed with exactly `n` cards or fail without touching the deck.
    #[test]
    fn prop_draw_conserves_cards(
        draw_pile in prop::collection::vec(policy(), 0..8),
        discard_pile in prop::collection::vec(policy(), 0..8),
        n in 1usize..5,
        seed in any::<u64>(),
    ) {
        let mut rng = GameRng::new(seed);
        let mut deck = PolicyDeck::from_piles(draw_pile, discard_pile);
        let before = deck.clone();
        let total = deck.len();

        match deck.draw(n, &mut rng) {
            Ok(hand) => {
                prop_assert_eq!(hand.len(), n);
                prop_assert_eq!(deck.len() + hand.len(), total);
            }
            Err(_) => {
                prop_assert!(total < n);
                prop_assert_eq!(deck, before);
            }
        }
    }

    /// Random legal play keeps all 17 cards accounted for and always ends.
    #[test]
    fn prop_random_games_conserve_cards(count in 5usize..=10, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed ^ 0x5eed);
        let mut session = started(count, seed);

        let mut steps = 0;
        while random_step(&mut session, &mut rng) {
            prop_assert_eq!(total_cards(&session), 17);
            prop_assert!(session.liberal_policies() < 5);
            prop_assert!(session.fascist_policies() < 6);
            steps += 1;
            prop_assert!(steps < 1_000);
        }
        prop_assert!(session.winner().is_some());
        prop_assert_eq!(total_cards(&session), 17);
    }
}
