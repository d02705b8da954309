//! Day 2: Cube Conundrum

use std::str::FromStr;
use std::sync::LazyLock;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["2023", "parsing"])]
pub struct Solver;

static GAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Game\s+(\d+)\s*:(.*)$").unwrap());
static CUBES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(red|green|blue)$").unwrap());

/// The bag every round of a possible game must fit in
pub const BAG: CubeColors = CubeColors {
    red: 12,
    green: 13,
    blue: 14,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CubeColors {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl CubeColors {
    pub fn fits_within(&self, limit: &CubeColors) -> bool {
        self.red <= limit.red && self.green <= limit.green && self.blue <= limit.blue
    }

    /// Per-color maximum of both
    pub fn max(self, other: CubeColors) -> CubeColors {
        CubeColors {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    pub fn power(&self) -> u64 {
        u64::from(self.red) * u64::from(self.green) * u64::from(self.blue)
    }
}

/// One handful of cubes; colors that were not shown count as 0
///
/// A color named twice keeps its first count.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub colors: CubeColors,
}

impl FromStr for Round {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut colors = CubeColors::default();
        let mut seen = [false; 3];
        for token in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let captures = CUBES_REGEX
                .captures(token)
                .ok_or_else(|| anyhow!("expected `<count> <color>`, got {:?}", token))?;
            let count: u32 = captures[1]
                .parse()
                .with_context(|| format!("bad cube count {:?}", &captures[1]))?;
            let (slot, taken) = match &captures[2] {
                "red" => (&mut colors.red, &mut seen[0]),
                "green" => (&mut colors.green, &mut seen[1]),
                _ => (&mut colors.blue, &mut seen[2]),
            };
            if !*taken {
                *slot = count;
                *taken = true;
            }
        }
        Ok(Round { colors })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub rounds: Vec<Round>,
}

impl Game {
    pub fn is_possible(&self, bag: &CubeColors) -> bool {
        self.rounds.iter().all(|round| round.colors.fits_within(bag))
    }

    /// Smallest bag that makes every round of this game possible
    pub fn minimum_bag(&self) -> CubeColors {
        self.rounds
            .iter()
            .fold(CubeColors::default(), |acc, round| acc.max(round.colors))
    }

    pub fn power(&self) -> u64 {
        self.minimum_bag().power()
    }
}

impl FromStr for Game {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = GAME_REGEX
            .captures(s)
            .ok_or_else(|| anyhow!("expected `Game <id>: <rounds>`"))?;
        let id = captures[1]
            .parse()
            .with_context(|| format!("bad game id {:?}", &captures[1]))?;
        let rounds = captures[2]
            .split(';')
            .filter(|round| !round.trim().is_empty())
            .map(Round::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Game { id, rounds })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                line.trim()
                    .parse::<Game>()
                    .map_err(|e| ParseError::at_line(line_idx + 1, format!("{:#}", e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let id_sum: u64 = shared
            .iter()
            .filter(|game| game.is_possible(&BAG))
            .map(|game| u64::from(game.id))
            .sum();
        Ok(id_sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(Game::power).sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn test_round_defaults_missing_colors() {
        let round: Round = "3 blue, 4 red".parse().unwrap();
        assert_eq!(
            round.colors,
            CubeColors {
                red: 4,
                green: 0,
                blue: 3
            }
        );
    }

    #[test]
    fn test_repeated_color_keeps_first_count() {
        let round: Round = "3 red, 2 blue, 40 red".parse().unwrap();
        assert_eq!(
            round.colors,
            CubeColors {
                red: 3,
                green: 0,
                blue: 2
            }
        );

        let game: Game = "Game 3: 3 red, 40 red".parse().unwrap();
        assert!(game.is_possible(&BAG));
    }

    #[test]
    fn test_game_validity_and_power() {
        let game: Game = "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue".parse().unwrap();
        assert_eq!(game.id, 1);
        assert_eq!(game.rounds.len(), 2);
        assert!(game.is_possible(&BAG));
        assert_eq!(game.power(), 48);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let at_limit: Game = "Game 7: 12 red, 13 green, 14 blue".parse().unwrap();
        assert!(at_limit.is_possible(&BAG));

        let over: Game = "Game 8: 12 red, 14 green".parse().unwrap();
        assert!(!over.is_possible(&BAG));
    }

    #[test]
    fn test_missing_color_gives_zero_power() {
        let game: Game = "Game 9: 3 red; 4 blue".parse().unwrap();
        assert_eq!(
            game.minimum_bag(),
            CubeColors {
                red: 3,
                green: 0,
                blue: 4
            }
        );
        assert_eq!(game.power(), 0);
    }

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared.len(), 5);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "8");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2286");
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let err = Solver::parse("Game 1: 3 blue\nGame two: 1 red\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);

        let err = Solver::parse("Game 1: 3 purple\n").unwrap_err();
        assert!(err.to_string().contains("purple"), "{}", err);
    }
}
