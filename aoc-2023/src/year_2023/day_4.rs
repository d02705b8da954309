//! Day 4: Scratchcards
//!
//! Part 2 hands out copies: a card with `m` matches adds its own copy count
//! to each of the next `m` cards. Copy counts only ever flow forward, so by
//! the time a card is reached its count is final and one left-to-right pass
//! settles every card.

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::LazyLock;

use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["2023", "sets"])]
pub struct Solver;

static CARD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Card\s+(\d+)\s*:([^|]*)\|(.*)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    pub number: u32,
    pub winning: BTreeSet<u32>,
    pub owned: BTreeSet<u32>,
}

impl CardContent {
    /// Number of owned numbers that are also winning numbers
    pub fn matches(&self) -> usize {
        self.winning.intersection(&self.owned).count()
    }

    /// 0 without matches, otherwise doubling from 1 for every match after the first
    ///
    /// `None` when the score does not fit in a `u64`.
    pub fn score(&self) -> Option<u64> {
        match self.matches() {
            0 => Some(0),
            m => u32::try_from(m - 1)
                .ok()
                .and_then(|shift| 1u64.checked_shl(shift)),
        }
    }
}

fn parse_numbers(list: &str) -> anyhow::Result<BTreeSet<u32>> {
    list.split_whitespace()
        .map(|token| {
            token
                .parse()
                .with_context(|| format!("bad card number {:?}", token))
        })
        .collect()
}

impl FromStr for CardContent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = CARD_REGEX
            .captures(s)
            .ok_or_else(|| anyhow!("expected `Card <id>: <numbers> | <numbers>`"))?;
        Ok(CardContent {
            number: captures[1]
                .parse()
                .with_context(|| format!("bad card id {:?}", &captures[1]))?,
            winning: parse_numbers(&captures[2])?,
            owned: parse_numbers(&captures[3])?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub content: CardContent,
    pub copies: u64,
}

impl From<CardContent> for Card {
    fn from(content: CardContent) -> Self {
        Card { content, copies: 1 }
    }
}

/// Forward pass handing each card's copies to the cards its matches win
///
/// Wins that would run past the last card are dropped. Fails when a copy
/// count overflows; the cards are left partly propagated in that case.
pub fn propagate_copies(cards: &mut [Card]) -> anyhow::Result<()> {
    for idx in 0..cards.len() {
        let copies = cards[idx].copies;
        let end = (idx + 1 + cards[idx].content.matches()).min(cards.len());
        for won in &mut cards[idx + 1..end] {
            won.copies = won.copies.checked_add(copies).ok_or_else(|| {
                anyhow!("copies of card {} overflow", won.content.number)
            })?;
        }
    }
    Ok(())
}

/// Propagate a copy of `cards` and sum the copy counts
fn total_copies(cards: &[Card]) -> anyhow::Result<(Vec<Card>, u64)> {
    let mut propagated = cards.to_vec();
    propagate_copies(&mut propagated)?;
    let total = propagated
        .iter()
        .try_fold(0u64, |acc, card| acc.checked_add(card.copies))
        .ok_or_else(|| anyhow!("total number of cards overflows"))?;
    Ok((propagated, total))
}

#[derive(Debug, Clone)]
pub struct SharedData {
    cards: Vec<Card>,
    total_copies: Option<u64>,
}

impl SharedData {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut cards: Vec<Card> = Vec::new();
        for (line_idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let content = parse_card(line, cards.len() + 1)
                .map_err(|e| ParseError::at_line(line_idx + 1, format!("{:#}", e)))?;
            cards.push(content.into());
        }
        Ok(SharedData {
            cards,
            total_copies: None,
        })
    }
}

/// Cards are addressed by position, so numbering must run 1, 2, 3, ... without gaps
fn parse_card(line: &str, expected_number: usize) -> anyhow::Result<CardContent> {
    let content: CardContent = line.parse()?;
    if content.number as usize != expected_number {
        bail!(
            "expected card {} but found card {}",
            expected_number,
            content.number
        );
    }
    Ok(content)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .cards
            .iter()
            .try_fold(0u64, |acc, card| {
                let score = card
                    .content
                    .score()
                    .ok_or_else(|| anyhow!("score of card {} overflows", card.content.number))?;
                acc.checked_add(score)
                    .ok_or_else(|| anyhow!("score sum overflows at card {}", card.content.number))
            })
            .map(|score| score.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if let Some(total) = shared.total_copies {
            return Ok(total.to_string());
        }
        let (propagated, total) =
            total_copies(&shared.cards).map_err(|e| SolveError::SolveFailed(e.into()))?;
        shared.cards = propagated;
        shared.total_copies = Some(total);
        Ok(total.to_string())
    }
}
