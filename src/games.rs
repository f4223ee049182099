// 🎲 Mini Games - guessing game, rock-paper-scissors, dice, coins
// GuessingGame is the only stateful piece: it owns its secret and attempt
// counter, and concurrent callers must hold a lock around `guess`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidChoice { choice: String },
    /// Dice with fewer than 1 side
    BadSides,
    /// Zero dice rolled or zero coins flipped
    BadCount,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidChoice { choice } => {
                write!(f, "'{}' is not rock, paper or scissors", choice)
            }
            GameError::BadSides => write!(f, "A dice must have more than 0 sides"),
            GameError::BadCount => write!(f, "Count must be at least 1"),
        }
    }
}

impl std::error::Error for GameError {}

// ============================================================================
// NUMBER GUESSING GAME
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Guessed the secret; game resets with a fresh secret
    Correct { number: u32, total_attempts: u32 },
    TooLow { attempts: u32 },
    TooHigh { attempts: u32 },
}

/// Guess-the-number game over 1..=10. Owns the secret and attempt counter;
/// a correct guess reports total attempts and restarts the round.
#[derive(Debug)]
pub struct GuessingGame {
    secret: u32,
    attempts: u32,
}

impl GuessingGame {
    pub fn new() -> Self {
        GuessingGame {
            secret: rand::thread_rng().gen_range(1..=10),
            attempts: 0,
        }
    }

    #[cfg(test)]
    fn with_secret(secret: u32) -> Self {
        GuessingGame { secret, attempts: 0 }
    }

    pub fn guess(&mut self, number: u32) -> GuessOutcome {
        self.attempts += 1;

        if number == self.secret {
            let total = self.attempts;
            self.secret = rand::thread_rng().gen_range(1..=10);
            self.attempts = 0;
            GuessOutcome::Correct {
                number,
                total_attempts: total,
            }
        } else if number < self.secret {
            GuessOutcome::TooLow {
                attempts: self.attempts,
            }
        } else {
            GuessOutcome::TooHigh {
                attempts: self.attempts,
            }
        }
    }
}

impl Default for GuessingGame {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ROCK PAPER SCISSORS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpsRound {
    pub your_choice: String,
    pub computer_choice: String,
    pub message: String,
}

const RPS_OPTIONS: &[&str] = &["rock", "paper", "scissors"];

fn beats(a: &str, b: &str) -> bool {
    matches!(
        (a, b),
        ("rock", "scissors") | ("paper", "rock") | ("scissors", "paper")
    )
}

/// Play one round against a random computer choice
pub fn rock_paper_scissors(choice: &str) -> Result<RpsRound, GameError> {
    let player = choice.to_lowercase();
    if !RPS_OPTIONS.contains(&player.as_str()) {
        return Err(GameError::InvalidChoice {
            choice: choice.to_string(),
        });
    }

    let computer = RPS_OPTIONS[rand::thread_rng().gen_range(0..RPS_OPTIONS.len())];

    let message = if player == computer {
        format!("It was a draw... The computer chose {}.", computer)
    } else if beats(&player, computer) {
        format!("You won! The computer chose {}.", computer)
    } else {
        format!("You lost :( The computer chose {}.", computer)
    };

    Ok(RpsRound {
        your_choice: player,
        computer_choice: computer.to_string(),
        message,
    })
}

// ============================================================================
// DICE AND COINS
// ============================================================================

/// Roll `count` dice with `sides` sides each
pub fn roll_dice(sides: u32, count: u32) -> Result<Vec<u32>, GameError> {
    if sides < 1 {
        return Err(GameError::BadSides);
    }
    if count < 1 {
        return Err(GameError::BadCount);
    }

    let mut rng = rand::thread_rng();
    Ok((0..count).map(|_| rng.gen_range(1..=sides)).collect())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinFace {
    Heads,
    Tails,
}

impl fmt::Display for CoinFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoinFace::Heads => write!(f, "Heads"),
            CoinFace::Tails => write!(f, "Tails"),
        }
    }
}

/// Flip `count` fair coins
pub fn flip_coins(count: u32) -> Result<Vec<CoinFace>, GameError> {
    if count < 1 {
        return Err(GameError::BadCount);
    }

    let mut rng = rand::thread_rng();
    Ok((0..count)
        .map(|_| {
            if rng.gen_range(0..2) == 0 {
                CoinFace::Heads
            } else {
                CoinFace::Tails
            }
        })
        .collect())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_too_low_and_high() {
        let mut game = GuessingGame::with_secret(5);

        match game.guess(3) {
            GuessOutcome::TooLow { attempts } => assert_eq!(attempts, 1),
            other => panic!("expected TooLow, got {:?}", other),
        }
        match game.guess(9) {
            GuessOutcome::TooHigh { attempts } => assert_eq!(attempts, 2),
            other => panic!("expected TooHigh, got {:?}", other),
        }
    }

    #[test]
    fn test_correct_guess_resets() {
        let mut game = GuessingGame::with_secret(7);
        game.guess(1);
        game.guess(2);

        match game.guess(7) {
            GuessOutcome::Correct {
                number,
                total_attempts,
            } => {
                assert_eq!(number, 7);
                assert_eq!(total_attempts, 3);
            }
            other => panic!("expected Correct, got {:?}", other),
        }

        // Counter restarted for the next round
        assert_eq!(game.attempts, 0);
        assert!((1..=10).contains(&game.secret));
    }

    #[test]
    fn test_rps_valid_round() {
        let round = rock_paper_scissors("Rock").unwrap();
        assert_eq!(round.your_choice, "rock");
        assert!(RPS_OPTIONS.contains(&round.computer_choice.as_str()));
        assert!(!round.message.is_empty());
    }

    #[test]
    fn test_rps_invalid_choice() {
        let err = rock_paper_scissors("lizard").unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidChoice {
                choice: "lizard".to_string(),
            }
        );
    }

    #[test]
    fn test_rps_beats_table() {
        assert!(beats("rock", "scissors"));
        assert!(beats("paper", "rock"));
        assert!(beats("scissors", "paper"));
        assert!(!beats("rock", "paper"));
        assert!(!beats("rock", "rock"));
    }

    #[test]
    fn test_roll_dice_bounds() {
        let rolls = roll_dice(6, 100).unwrap();
        assert_eq!(rolls.len(), 100);
        assert!(rolls.iter().all(|&r| (1..=6).contains(&r)));
    }

    #[test]
    fn test_roll_dice_one_sided() {
        // A one-sided die always lands on 1
        assert_eq!(roll_dice(1, 5).unwrap(), vec![1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_roll_dice_errors() {
        assert_eq!(roll_dice(0, 1).unwrap_err(), GameError::BadSides);
        assert_eq!(roll_dice(6, 0).unwrap_err(), GameError::BadCount);
    }

    #[test]
    fn test_flip_coins() {
        let flips = flip_coins(50).unwrap();
        assert_eq!(flips.len(), 50);
        assert_eq!(flip_coins(0).unwrap_err(), GameError::BadCount);
    }

    #[test]
    fn test_coin_face_display() {
        assert_eq!(CoinFace::Heads.to_string(), "Heads");
        assert_eq!(CoinFace::Tails.to_string(), "Tails");
    }
}
