//! Property-based tests for shuffling, pricing, and pile conservation.

use proptest::prelude::*;

use doggo_engine::core::{shuffle, Action, ConstantSource, GameRng, PlayerId, RandomSource, SessionConfig, SessionId};
use doggo_engine::rules::{hosting_cost, slot_subsidy, store_acquisition_cost};
use doggo_engine::session::GameSession;
use doggo_engine::DishKind;

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0usize..4).prop_map(|i| Action::BuyDish { dish: DishKind::ALL[i] }),
        (0usize..6).prop_map(|discard_index| Action::RemoveDish { discard_index }),
        (0usize..5).prop_map(|slot_index| Action::BuyStore { slot_index }),
        (0usize..9).prop_map(|owned_index| Action::BuildStore { owned_index }),
        (0usize..5).prop_map(|slot_index| Action::HostVisitor { slot_index }),
    ]
}

fn started(players: usize, seed: u64) -> GameSession {
    let mut session = GameSession::with_rng(
        SessionId::new("prop"),
        players,
        SessionConfig::default(),
        GameRng::new(seed),
    );
    for i in 0..players {
        session
            .add_player(PlayerId::new(format!("p{i}")), format!("P{i}"), None)
            .unwrap();
    }
    session.start_game().unwrap();
    session
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Shuffling never adds, drops, or duplicates elements.
    #[test]
    fn prop_shuffle_is_permutation(mut items in prop::collection::vec(any::<u16>(), 0..64), seed in any::<u64>()) {
        let mut expected = items.clone();
        shuffle(&mut items, &mut GameRng::new(seed));

        expected.sort_unstable();
        items.sort_unstable();
        prop_assert_eq!(items, expected);
    }

    /// A constant source always rolls the same die face.
    #[test]
    fn prop_constant_source_pins_dice(n in 0usize..100) {
        let mut source = ConstantSource(n);
        let first = source.roll_die();
        prop_assert!((1..=6).contains(&first));
        for _ in 0..10 {
            prop_assert_eq!(source.roll_die(), first);
        }
    }

    /// Hosting slot k costs exactly what it escrows onto cheaper slots.
    #[test]
    fn prop_hosting_cost_is_triangular(k in 0usize..1000) {
        prop_assert_eq!(hosting_cost(k), (k * (k + 1) / 2) as i64);
        prop_assert_eq!(hosting_cost(k), (0..k).map(slot_subsidy).sum::<i64>());
    }

    /// Store prices never decrease as a player owns more stores.
    #[test]
    fn prop_store_cost_is_monotonic(owned in 0usize..64) {
        prop_assert!(store_acquisition_cost(owned + 1) > store_acquisition_cost(owned));
    }

    /// Over any action sequence: rejected actions change nothing, the
    /// visitor pool is conserved, the store market only shrinks, and each
    /// player's dish piles reconcile with purchases and removals.
    #[test]
    fn prop_random_play_conserves_piles(
        players in 2usize..=4,
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 1..120),
    ) {
        let mut session = started(players, seed);
        let starting_dishes = SessionConfig::default().starting_dishes.len();
        let mut bought = vec![0usize; players];
        let mut removed = vec![0usize; players];
        let mut market_stores = session.market().stores.total_cards();

        for action in actions {
            let player = session.current_player_id().cloned().unwrap();
            let position = session.turn_order().iter().position(|p| *p == player).unwrap();
            let before = session.view();

            match session.apply(&player, action) {
                Ok(()) => match action {
                    Action::BuyDish { .. } => bought[position] += 1,
                    Action::RemoveDish { .. } => removed[position] += 1,
                    _ => {}
                },
                Err(_) => {
                    prop_assert_eq!(session.view(), before);
                }
            }

            prop_assert_eq!(session.market().visitors.total_cards(), 6);
            prop_assert_eq!(session.market().visitors.escrow().len(), 4);

            let stores_now = session.market().stores.total_cards();
            prop_assert!(stores_now <= market_stores);
            market_stores = stores_now;

            for (i, id) in session.turn_order().iter().enumerate() {
                let account = session.player(id).unwrap();
                prop_assert_eq!(account.dishes().len(), starting_dishes + bought[i]);
                prop_assert_eq!(
                    account.dish_draw_pile().len() + account.dish_discard_pile().len(),
                    starting_dishes - removed[i]
                );
                prop_assert!(account.stores().len() <= 8);
                prop_assert_eq!(
                    account.stores_built(),
                    account.stores().iter().filter(|s| s.is_built()).count()
                );
            }

            if session.status() != doggo_engine::GameStatus::Active {
                break;
            }
        }
    }
}
