//! The interactive game session: piece selection and the press/release
//! protocol.
//!
//! The input collaborator translates pointer coordinates into squares before
//! calling in; the renderer reads the held piece and the highlighted move
//! set back out. No pixel concern lives here.

use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{BoardLocation, Color, Piece};
use crate::game::game_controller::{apply_move, is_checkmate, GameStatus};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::{ChessMove, LegalMoveSet};

/// The piece currently picked up, remembered with its origin square so a
/// cancelled selection can fall back home.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeldPiece {
    pub piece: Piece,
    pub origin: BoardLocation,
}

/// What a release event amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Nothing was held, or the piece was dropped back on its origin.
    Cancelled,
    /// No legal move matches the release square; the piece returns home.
    /// This is the normal "invalid move attempted" outcome, not an error.
    Reverted,
    /// The matching move was applied; carries the resulting status.
    Applied(GameStatus),
}

/// A full game: the position, the half-move state machine, and the
/// transient selection state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    status: GameStatus,
    held: Option<HeldPiece>,
    highlighted: Option<LegalMoveSet>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game from the standard starting position.
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            status: GameStatus::ToMove(Color::White),
            held: None,
            highlighted: None,
        }
    }

    pub fn from_placement(text: &str, turn: Color) -> Result<Self, EngineError> {
        let mut board = Board::from_placement(text)?;
        board.set_turn(turn);
        Ok(Self {
            board,
            status: GameStatus::ToMove(turn),
            held: None,
            highlighted: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn held(&self) -> Option<&HeldPiece> {
        self.held.as_ref()
    }

    /// The move set retained for the held piece, for highlighting.
    pub fn highlighted(&self) -> Option<&LegalMoveSet> {
        self.highlighted.as_ref()
    }

    /// Pick up the piece on `at` when it belongs to the side to move.
    ///
    /// Returns the freshly computed legal move set, or `None` when there is
    /// nothing selectable on that square.
    pub fn select(&mut self, at: BoardLocation) -> Result<Option<&LegalMoveSet>, EngineError> {
        self.drop_selection();

        let GameStatus::ToMove(turn) = self.status else {
            return Ok(None);
        };
        let Ok(Some(piece)) = self.board.get(at) else {
            return Ok(None);
        };
        if piece.color != turn {
            return Ok(None);
        }

        let moves = legal_moves(&self.board, at)?;
        self.held = Some(HeldPiece { piece, origin: at });
        self.highlighted = Some(moves);
        Ok(self.highlighted.as_ref())
    }

    /// Drop the held piece on `at`, applying the matching retained move if
    /// one exists. The selection is always discarded.
    pub fn release(&mut self, at: BoardLocation) -> Result<ReleaseOutcome, EngineError> {
        let Some(held) = self.held.take() else {
            self.highlighted = None;
            return Ok(ReleaseOutcome::Cancelled);
        };
        let highlighted = self.highlighted.take();

        if held.origin == at {
            return Ok(ReleaseOutcome::Cancelled);
        }
        let Some(mv) = highlighted
            .as_ref()
            .and_then(|set| set.find_by_destination(at))
            .copied()
        else {
            return Ok(ReleaseOutcome::Reverted);
        };

        Ok(ReleaseOutcome::Applied(self.play(&mv)?))
    }

    /// Apply `mv` and run the post-move checkmate probe. Any retained
    /// selection is invalidated by the mutation.
    pub fn play(&mut self, mv: &ChessMove) -> Result<GameStatus, EngineError> {
        self.drop_selection();
        apply_move(&mut self.board, mv);

        let next = self.board.turn();
        self.status = if is_checkmate(&self.board, next)? {
            GameStatus::Checkmated(next)
        } else {
            GameStatus::ToMove(next)
        };
        Ok(self.status)
    }

    fn drop_selection(&mut self) {
        self.held = None;
        self.highlighted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{Game, GameStatus, ReleaseOutcome};
    use crate::game_state::chess_types::Color;

    #[test]
    fn only_the_side_to_move_can_be_selected() {
        let mut game = Game::new();

        assert!(game.select((4, 4)).expect("select should succeed").is_none());
        assert!(game.select((4, 1)).expect("select should succeed").is_none());

        let set = game
            .select((4, 6))
            .expect("select should succeed")
            .expect("the e2 pawn should be selectable");
        assert_eq!(set.len(), 2);
        assert!(game.held().is_some());
    }

    #[test]
    fn releasing_on_the_origin_cancels() {
        let mut game = Game::new();
        game.select((4, 6)).expect("select should succeed");

        let outcome = game.release((4, 6)).expect("release should succeed");
        assert_eq!(outcome, ReleaseOutcome::Cancelled);
        assert!(game.held().is_none());
        assert!(game.highlighted().is_none());
        assert_eq!(game.status(), GameStatus::ToMove(Color::White));
    }

    #[test]
    fn releasing_on_a_non_destination_reverts() {
        let mut game = Game::new();
        game.select((4, 6)).expect("select should succeed");

        let outcome = game.release((0, 0)).expect("release should succeed");
        assert_eq!(outcome, ReleaseOutcome::Reverted);
        assert!(game.held().is_none());
        assert_eq!(game.board().placement(), crate::game_state::chess_rules::STARTING_PLACEMENT);
    }

    #[test]
    fn releasing_on_a_destination_applies_the_move() {
        let mut game = Game::new();
        game.select((4, 6)).expect("select should succeed");

        let outcome = game.release((4, 4)).expect("release should succeed");
        assert_eq!(outcome, ReleaseOutcome::Applied(GameStatus::ToMove(Color::Black)));
        assert_eq!(game.board().just_double_stepped(), Some((4, 4)));
        assert!(game.highlighted().is_none());
    }

    #[test]
    fn releasing_with_nothing_held_is_a_cancel() {
        let mut game = Game::new();
        assert_eq!(
            game.release((4, 4)).expect("release should succeed"),
            ReleaseOutcome::Cancelled
        );
    }

    #[test]
    fn en_passant_expires_after_one_half_move() {
        let mut game = Game::new();
        let script = [
            ((4, 6), (4, 4)), // e2 e4
            ((0, 1), (0, 2)), // a7 a6
            ((4, 4), (4, 3)), // e4 e5
            ((3, 1), (3, 3)), // d7 d5, double push
        ];
        for (from, to) in script {
            game.select(from).expect("select should succeed");
            game.release(to).expect("release should succeed");
        }

        // The e5 pawn may capture d5 en passant right now.
        let set = game
            .select((4, 3))
            .expect("select should succeed")
            .expect("the e5 pawn should be selectable");
        assert!(set.find_by_destination((3, 2)).is_some());
        game.release((4, 3)).expect("release should succeed");

        // White plays something else; one half-move later the chance is gone.
        game.select((6, 6)).expect("select should succeed");
        game.release((6, 5)).expect("release should succeed");
        game.select((0, 2)).expect("select should succeed");
        game.release((0, 3)).expect("release should succeed");

        let set = game
            .select((4, 3))
            .expect("select should succeed")
            .expect("the e5 pawn should be selectable");
        assert!(set.find_by_destination((3, 2)).is_none());
    }

    #[test]
    fn the_fastest_mate_ends_the_game() {
        let mut game = Game::new();
        let script = [
            ((5, 6), (5, 5)), // f2 f3
            ((4, 1), (4, 3)), // e7 e5
            ((6, 6), (6, 4)), // g2 g4
            ((3, 0), (7, 4)), // d8 h4, mate
        ];

        let mut last = GameStatus::ToMove(Color::White);
        for (from, to) in script {
            game.select(from)
                .expect("select should succeed")
                .expect("the scripted piece should be selectable");
            match game.release(to).expect("release should succeed") {
                ReleaseOutcome::Applied(status) => last = status,
                other => panic!("scripted move was rejected: {other:?}"),
            }
        }

        assert_eq!(last, GameStatus::Checkmated(Color::White));
        assert_eq!(game.status(), GameStatus::Checkmated(Color::White));

        // A finished game offers no further selections.
        assert!(game.select((4, 0)).expect("select should succeed").is_none());
    }
}
