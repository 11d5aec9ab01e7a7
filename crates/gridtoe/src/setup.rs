//! Game construction parameters and their validation.
//!
//! Raw `size` and `mode` strings arrive from a query string, CLI flags or a
//! config file. They are checked once here; an engine is only ever built
//! from a valid [`GameSetup`].

use super::types::{BoardSize, MAX_SIZE, MIN_SIZE};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Who plays the O side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum GameMode {
    /// Two humans alternate on the same board (mode `1`).
    #[strum(to_string = "player vs player")]
    PlayerVsPlayer,
    /// A human plays X against a random-move AI playing O (mode `2`).
    #[strum(to_string = "player vs AI")]
    PlayerVsAi,
}

impl GameMode {
    /// Numeric code used by the query-string interface.
    pub fn code(self) -> u8 {
        match self {
            GameMode::PlayerVsPlayer => 1,
            GameMode::PlayerVsAi => 2,
        }
    }
}

impl TryFrom<u8> for GameMode {
    type Error = SetupError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(GameMode::PlayerVsPlayer),
            2 => Ok(GameMode::PlayerVsAi),
            other => Err(SetupError::InvalidGameMode(other.to_string())),
        }
    }
}

impl FromStr for GameMode {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .map_err(|_| SetupError::InvalidGameMode(s.to_string()))
            .and_then(GameMode::try_from)
    }
}

impl FromStr for BoardSize {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(BoardSize::new)
            .ok_or_else(|| SetupError::InvalidBoardSize(s.to_string()))
    }
}

/// Error raised while validating construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    /// Board size is not an integer in range.
    #[display("Invalid board size {:?}: enter a value between {} and {}", _0, MIN_SIZE, MAX_SIZE)]
    InvalidBoardSize(#[error(not(source))] String),

    /// Game mode is not 1 or 2.
    #[display("Invalid game mode {:?}: enter 1 (player vs player) or 2 (player vs AI)", _0)]
    InvalidGameMode(#[error(not(source))] String),

    /// A required parameter was not supplied.
    #[display("Missing parameter {:?}", _0)]
    MissingParameter(#[error(not(source))] &'static str),
}

/// Validated construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GameSetup {
    /// Board edge length.
    size: BoardSize,
    /// Game mode.
    mode: GameMode,
}

impl GameSetup {
    /// Creates a setup from already-validated parts.
    pub fn new(size: BoardSize, mode: GameMode) -> Self {
        Self { size, mode }
    }

    /// Validates raw `size` and `mode` strings.
    #[instrument]
    pub fn parse(size: &str, mode: &str) -> Result<Self, SetupError> {
        let size = size.parse::<BoardSize>()?;
        let mode = mode.parse::<GameMode>()?;
        debug!(%size, %mode, "Setup validated");
        Ok(Self { size, mode })
    }

    /// Validates a query string such as `?size=5&mode=2`.
    ///
    /// Unknown keys are ignored. When a key repeats, the first value wins.
    #[instrument]
    pub fn from_query(query: &str) -> Result<Self, SetupError> {
        let params = parse_query(query);
        let size = lookup(&params, "size")?;
        let mode = lookup(&params, "mode")?;
        Self::parse(size, mode).inspect_err(|e| warn!(error = %e, "Rejected setup"))
    }
}

fn lookup<'a>(params: &[(&str, &'a str)], key: &'static str) -> Result<&'a str, SetupError> {
    params
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .ok_or(SetupError::MissingParameter(key))
}

/// Splits `a=1&b=2` into key/value pairs. A key with no `=` maps to `""`.
fn parse_query(query: &str) -> Vec<(&str, &str)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .collect()
}
