//! Property tests for the 2023 solvers

use aoc_2023::year_2023::{day_1, day_2, day_3, day_4};
use aoc_solver::{AocParser, Solver};
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;

type CardLists = Vec<(std::collections::BTreeSet<u32>, std::collections::BTreeSet<u32>)>;

fn card_input(cards: &CardLists) -> String {
    let join = |set: &std::collections::BTreeSet<u32>| {
        set.iter().map(u32::to_string).collect::<Vec<_>>().join(" ")
    };
    cards
        .iter()
        .enumerate()
        .map(|(idx, (winning, owned))| {
            format!("Card {}: {} | {}\n", idx + 1, join(winning), join(owned))
        })
        .collect()
}

fn card_lists() -> impl Strategy<Value = CardLists> {
    vec((btree_set(1u32..30, 0..6), btree_set(1u32..30, 0..10)), 1..25)
}

fn solve_both<S: Solver>(input: &str) -> (String, String) {
    let mut shared = S::parse(input).unwrap();
    let first = S::solve_part(&mut shared, 1).unwrap();
    let second = S::solve_part(&mut shared, 2).unwrap();
    (first, second)
}

proptest! {
    #[test]
    fn prop_cascade_never_loses_cards(cards in card_lists()) {
        let input = card_input(&cards);
        let shared = day_4::Solver::parse(&input).unwrap();
        let mut propagated = shared.cards().to_vec();
        day_4::propagate_copies(&mut propagated).unwrap();

        for (idx, card) in propagated.iter().enumerate() {
            prop_assert!(card.copies >= 1);
            // A card can at most double what all earlier cards hold.
            prop_assert!(card.copies <= 1u64 << idx);
        }
        let total: u64 = propagated.iter().map(|card| card.copies).sum();
        prop_assert!(total >= cards.len() as u64);
    }

    #[test]
    fn prop_no_matches_means_no_copies(cards in card_lists()) {
        let disjoint: CardLists = cards
            .into_iter()
            .map(|(winning, owned)| {
                let owned = owned.difference(&winning).copied().collect();
                (winning, owned)
            })
            .collect();
        let input = card_input(&disjoint);
        let (score, total) = solve_both::<day_4::Solver>(&input);
        prop_assert_eq!(score, "0");
        prop_assert_eq!(total, disjoint.len().to_string());
    }

    #[test]
    fn prop_answers_are_deterministic(cards in card_lists()) {
        let input = card_input(&cards);
        prop_assert_eq!(
            solve_both::<day_4::Solver>(&input),
            solve_both::<day_4::Solver>(&input)
        );
    }

    #[test]
    fn prop_digit_calibration_uses_outer_digits(line in "[a-z]{0,4}[0-9][a-z0-9]{0,12}") {
        let digits: Vec<u32> = line.chars().filter_map(|c| c.to_digit(10)).collect();
        let expected = digits[0] * 10 + digits[digits.len() - 1];
        prop_assert_eq!(
            day_1::calibration_value(&line, day_1::NumeralMode::Digits),
            Some(expected)
        );
    }

    #[test]
    fn prop_game_possible_iff_minimum_bag_fits(
        rounds in vec((0u32..20, 0u32..20, 0u32..20), 1..5)
    ) {
        let text = rounds
            .iter()
            .map(|(r, g, b)| format!("{} red, {} green, {} blue", r, g, b))
            .collect::<Vec<_>>()
            .join("; ");
        let game: day_2::Game = format!("Game 1: {}", text).parse().unwrap();
        prop_assert_eq!(game.is_possible(&day_2::BAG), game.minimum_bag().fits_within(&day_2::BAG));
    }

    #[test]
    fn prop_schematic_without_symbols_sums_to_zero(rows in vec("[0-9.]{1,9}", 1..8)) {
        let schematic = day_3::Schematic::scan(&rows.join("\n")).unwrap();
        prop_assert_eq!(schematic.part_number_sum(), 0);
        prop_assert_eq!(schematic.gear_ratio_sum(), 0);
    }
}
