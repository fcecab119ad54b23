//! JSON request/response types for driving the engine from outside
//!
//! ```json
//! {
//!   "board": ["...............", "..."],
//!   "mover": "black",
//!   "difficulty": "medium",
//!   "forbiddenRulesEnabled": true
//! }
//! ```
//!
//! Rows use `.` for empty, `X` for Black and `O` for White (see
//! [`Board::from_rows`]). The response carries the chosen cell and score:
//!
//! ```json
//! { "move": { "row": 7, "col": 8 }, "score": 120, "searchType": "alphaBeta" }
//! ```

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Stone};
use crate::engine::{AiPlayer, MoveResult, SearchType};
use crate::error::EngineError;
use crate::search::{Difficulty, SearchConfig};

/// One move request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineRequest {
    pub board: Vec<String>,
    pub mover: Stone,
    pub difficulty: Difficulty,
    pub forbidden_rules_enabled: bool,
}

impl EngineRequest {
    pub fn from_json(text: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn config(&self) -> SearchConfig {
        SearchConfig::new(self.difficulty, self.forbidden_rules_enabled)
    }
}

/// Engine answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineResponse {
    #[serde(rename = "move")]
    pub mv: Pos,
    pub score: i32,
    pub search_type: SearchType,
}

impl From<MoveResult> for EngineResponse {
    fn from(result: MoveResult) -> Self {
        Self {
            mv: result.best_move,
            score: result.score,
            search_type: result.search_type,
        }
    }
}

impl EngineResponse {
    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Parse the board, run `player` and wrap its answer.
pub fn handle_request(
    player: &mut impl AiPlayer,
    request: &EngineRequest,
) -> Result<EngineResponse, EngineError> {
    if request.mover == Stone::Empty {
        return Err(EngineError::InvalidMover);
    }
    let board = Board::from_rows(&request.board)?;
    let result = player.best_move(&board, request.mover, &request.config());
    Ok(result.into())
}
