/*! Game center stub. Every game is announced as coming soon. */

use super::AppEffect;
use crate::types::{DesktopError, DesktopResult};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

const GAMES: [(&str, &str, &str); 3] = [
  ("tic-tac-toe", "🎯 Tic Tac Toe", "Classic 3x3 grid game"),
  ("memory", "🧠 Memory Game", "Match the pairs"),
  ("snake", "🐍 Snake", "Classic snake game"),
];

/// A game tile in the game center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameInfo {
  pub id: String,
  pub name: String,
  pub description: String,
}

pub(crate) fn catalog() -> Vec<GameInfo> {
  GAMES
    .iter()
    .map(|(id, name, description)| GameInfo {
      id: (*id).to_owned(),
      name: (*name).to_owned(),
      description: (*description).to_owned(),
    })
    .collect()
}

/// Game center actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "action", rename_all = "snake_case")]
#[ts(export)]
pub enum GameInput {
  Play { game: String },
}

pub(crate) fn apply(input: GameInput) -> DesktopResult<Vec<AppEffect>> {
  let GameInput::Play { game } = input;
  if !GAMES.iter().any(|(id, _, _)| *id == game) {
    return Err(DesktopError::invalid_input(
      "games",
      format!("unknown game '{game}'"),
    ));
  }
  Ok(vec![AppEffect::notify("Games", format!("{game} coming soon!"))])
}
