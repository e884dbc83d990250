use kitchen::api::Event;
use kitchen::collections::Shared;
use kitchen::delivery::{
    generate_target_score, is_recipe_matching, Delivery, DeliveryDomain, DeliveryError, OrderId,
    RecipeKey, RecipeKind, ScoreSettings,
};
use kitchen::holding::{Holding, ObjectKey};
use kitchen::timing::{GameMode, Timing};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::testing::{at, KitchenTestScenario, CHEF};

mod testing;

const BUN: ObjectKey = ObjectKey(1);
const TOMATO: ObjectKey = ObjectKey(2);
const LETTUCE: ObjectKey = ObjectKey(3);

fn recipe(id: usize, ingredients: Vec<ObjectKey>, points: u32) -> Shared<RecipeKind> {
    Shared::new(RecipeKind {
        id: RecipeKey(id),
        name: format!("recipe-{}", id),
        ingredients,
        points,
    })
}

fn domain_with_orders(recipes: &[Shared<RecipeKind>]) -> DeliveryDomain {
    let mut domain = DeliveryDomain::default();
    for kind in recipes {
        let id = domain.orders_id.introduce().one(OrderId);
        let spawn = domain.spawn_order(id, kind).unwrap();
        spawn();
    }
    domain
}

#[test]
fn test_matching_ignores_ingredient_order() {
    assert!(is_recipe_matching(&[BUN, LETTUCE], &[LETTUCE, BUN]));
    assert!(!is_recipe_matching(&[BUN, LETTUCE], &[BUN]));
    assert!(!is_recipe_matching(&[BUN], &[BUN, LETTUCE]));
    assert!(!is_recipe_matching(&[BUN, LETTUCE], &[BUN, TOMATO]));
}

#[test]
fn test_plate_matches_second_pending_recipe() {
    let mut domain = domain_with_orders(&[
        recipe(1, vec![BUN, TOMATO], 10),
        recipe(2, vec![BUN, LETTUCE], 10),
    ]);

    let index = domain.find_matching_order(&[BUN, LETTUCE]).unwrap();
    assert_eq!(index, 1);
    let complete = domain.complete_order(index).unwrap();
    let events = complete();

    assert_eq!(
        events,
        vec![Delivery::OrderCompleted {
            order: OrderId(2),
            recipe: RecipeKey(2),
        }]
    );
    assert_eq!(domain.orders.len(), 1);
    assert_eq!(domain.orders[0].kind.id, RecipeKey(1));
    assert_eq!(domain.successful, 1);
}

#[test]
fn test_plate_without_match_leaves_orders_unchanged() {
    let domain = domain_with_orders(&[recipe(1, vec![BUN, LETTUCE], 10)]);

    assert_eq!(domain.find_matching_order(&[BUN]), None);
    assert_eq!(domain.orders.len(), 1);
}

#[test]
fn test_first_of_identical_orders_is_matched() {
    let burger = recipe(1, vec![BUN, TOMATO], 10);
    let domain = domain_with_orders(&[burger.clone(), burger]);

    assert_eq!(domain.find_matching_order(&[TOMATO, BUN]), Some(0));
}

#[test]
fn test_game_is_won_exactly_once() {
    let mut domain = DeliveryDomain::default();
    domain.set_target_score(100);
    domain.score = 95;

    let add_score = domain.add_score(10).unwrap();
    assert_eq!(
        add_score(),
        vec![
            Delivery::ScoreChanged { score: 105 },
            Delivery::GameWon {
                score: 105,
                target: 100
            },
        ]
    );
    assert!(domain.won);

    let add_score = domain.add_score(10).unwrap();
    assert_eq!(add_score(), vec![Delivery::ScoreChanged { score: 115 }]);
}

#[test]
fn test_score_without_target_never_wins() {
    let mut domain = DeliveryDomain::default();
    let add_score = domain.add_score(1000).unwrap();
    assert_eq!(add_score(), vec![Delivery::ScoreChanged { score: 1000 }]);
    assert!(!domain.won);
}

#[test]
fn test_orders_spawn_until_capacity_while_playing() {
    let mut random = StdRng::seed_from_u64(1);
    let mut domain = DeliveryDomain::default();
    domain.load_catalog(vec![recipe(1, vec![BUN], 5)], 2, 4.0);

    assert_eq!(domain.update(3.0, true, &mut random), vec![]);
    assert_eq!(
        domain.update(1.0, true, &mut random),
        vec![Delivery::OrderSpawned {
            order: OrderId(1),
            recipe: RecipeKey(1),
        }]
    );
    for _ in 0..10 {
        domain.update(4.0, true, &mut random);
    }
    assert_eq!(domain.orders.len(), 2);
}

#[test]
fn test_orders_do_not_spawn_outside_of_play() {
    let mut random = StdRng::seed_from_u64(1);
    let mut domain = DeliveryDomain::default();
    domain.load_catalog(vec![recipe(1, vec![BUN], 5)], 4, 4.0);

    for _ in 0..10 {
        assert_eq!(domain.update(4.0, false, &mut random), vec![]);
    }
    assert!(domain.orders.is_empty());
}

#[test]
fn test_full_queue_rejects_order() {
    let kind = recipe(1, vec![BUN], 5);
    let mut domain = domain_with_orders(&[kind.clone(), kind.clone(), kind.clone(), kind.clone()]);

    let result = domain.spawn_order(OrderId(5), &kind);

    assert_eq!(
        result.err(),
        Some(DeliveryError::OrdersQueueIsFull { capacity: 4 })
    );
}

#[test]
fn test_target_score_generation() {
    let settings = ScoreSettings::default();
    let mut random = StdRng::seed_from_u64(3);

    let empty = generate_target_score(50, 0, &settings, &mut random);
    assert!((68..=92).contains(&empty), "target {}", empty);
    for _ in 0..100 {
        let target = generate_target_score(20, 36, &settings, &mut random);
        assert!((96..=149).contains(&target), "target {}", target);
    }
}

#[test]
fn test_target_score_with_degenerate_or_reversed_bounds() {
    let mut random = StdRng::seed_from_u64(8);
    let fixed = ScoreSettings {
        factor: [1.0, 1.0],
        increment: [20, 20],
        ..ScoreSettings::default()
    };
    let reversed = ScoreSettings {
        factor: [1.2, 0.8],
        increment: [30, 10],
        ..ScoreSettings::default()
    };

    assert_eq!(generate_target_score(50, 0, &fixed, &mut random), 80);
    assert_eq!(generate_target_score(0, 10, &fixed, &mut random), 50);
    for _ in 0..50 {
        let target = generate_target_score(20, 36, &reversed, &mut random);
        assert!((96..=149).contains(&target), "target {}", target);
    }
}

#[test]
fn test_chef_delivers_matching_plate() {
    KitchenTestScenario::new()
        .given_counter("delivery", "window", at(1, 1))
        .given_chef([3.0, 3.0])
        .given_playing()
        .given_order("Salad")
        .given_order("Burger")
        .given_plate(CHEF, &["meat-cooked", "bread"], "plate")
        .when_chef_interacts_with("window")
        .then_events_should_match(|given, events| {
            assert_eq!(
                events[0],
                Event::Delivery(vec![Delivery::OrderCompleted {
                    order: OrderId(2),
                    recipe: given.recipe("Burger"),
                }])
            );
            match &events[1] {
                Event::Timing(timing) => match timing.as_slice() {
                    [Timing::TimeAdded { seconds }] => assert!((2.0..5.0).contains(seconds)),
                    other => panic!("unexpected timing {:?}", other),
                },
                other => panic!("unexpected event {:?}", other),
            }
            assert_eq!(
                events[2],
                Event::Delivery(vec![Delivery::DeliverySucceeded {
                    recipe: given.recipe("Burger"),
                }])
            );
            assert_eq!(
                events[3],
                Event::Holding(vec![Holding::ItemDestroyed {
                    item: given.item("plate"),
                    holder: given.holder(CHEF),
                }])
            );
        })
        .then_holder_should_contain(CHEF, None)
        .then_check(|game| {
            assert_eq!(game.delivery.orders.len(), 1);
            assert_eq!(game.delivery.successful, 1);
            assert!(game.timing.playing_timer > 120.0);
        });
}

#[test]
fn test_chef_delivers_wrong_plate() {
    KitchenTestScenario::new()
        .given_counter("delivery", "window", at(1, 1))
        .given_chef([3.0, 3.0])
        .given_playing()
        .given_order("Burger")
        .given_plate(CHEF, &["bread"], "plate")
        .when_chef_interacts_with("window")
        .then_events_should_be(|given| {
            vec![
                Event::Delivery(vec![Delivery::DeliveryFailed]),
                Event::Holding(vec![Holding::ItemDestroyed {
                    item: given.item("plate"),
                    holder: given.holder(CHEF),
                }]),
            ]
        })
        .then_holder_should_contain(CHEF, None)
        .then_check(|game| {
            assert_eq!(game.delivery.orders.len(), 1);
            assert_eq!(game.delivery.successful, 0);
        });
}

#[test]
fn test_delivery_window_ignores_ingredients() {
    KitchenTestScenario::new()
        .given_counter("delivery", "window", at(1, 1))
        .given_chef([3.0, 3.0])
        .given_playing()
        .given_order("Burger")
        .given_item(CHEF, "bread", "bread")
        .when_chef_interacts_with("window")
        .then_nothing_should_happen()
        .then_holder_should_contain(CHEF, Some("bread"));
}

#[test]
fn test_reaching_target_score_wins_and_pauses() {
    KitchenTestScenario::with_mode(GameMode::Challenging)
        .given_counter("delivery", "window", at(1, 1))
        .given_chef([3.0, 3.0])
        .given_playing()
        .given_target_score(100, 95)
        .given_order("Burger")
        .given_plate(CHEF, &["bread", "meat-cooked"], "plate")
        .when_chef_interacts_with("window")
        .then_events_should_match(|_, events| {
            assert_eq!(
                events[2],
                Event::Delivery(vec![
                    Delivery::ScoreChanged { score: 105 },
                    Delivery::GameWon {
                        score: 105,
                        target: 100
                    },
                ])
            );
            assert_eq!(events[3], Event::Timing(vec![Timing::Paused]));
        })
        .then_check(|game| {
            assert!(game.delivery.won);
            assert!(game.timing.paused);
        });
}
