// Utility Toolkit - Core Library
// Exposes all modules for use in the CLI, API server, and tests

pub mod checksum;
pub mod units;
pub mod temperature;
pub mod patterns;
pub mod password;
pub mod text;
pub mod numbers;
pub mod dates;
pub mod generator;
pub mod colors;
pub mod games;

// Re-export commonly used types
pub use units::ConversionError;
pub use temperature::{Comparison, TempUnit};
pub use password::{PasswordStrength, PasswordValidationResult};
pub use text::TextCounts;
pub use dates::{DateError, TodayFormats};
pub use generator::GeneratorError;
pub use colors::ColorList;
pub use games::{CoinFace, GameError, GuessOutcome, GuessingGame, RpsRound};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
