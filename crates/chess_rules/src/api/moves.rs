//! Legal-move listing and move application

use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Move, Position, Role};
use tracing::debug;

use super::game::{from_shakmaty, piece_color, piece_type, role, ChessGame};
use crate::error::{RulesError, RulesResult};
use crate::types::{MoveRecord, MoveRequest};

impl ChessGame {
    pub(super) fn collect_legal_moves(&self) -> Vec<MoveRecord> {
        let mover = piece_color(self.position.turn());
        self.position
            .legal_moves()
            .iter()
            .filter_map(|m| {
                // Castling comes out as the king's destination (e1g1), not king-takes-rook
                let UciMove::Normal { from, to, promotion } = m.to_uci(CastlingMode::Standard)
                else {
                    return None;
                };
                Some(MoveRecord {
                    from: from_shakmaty(from),
                    to: from_shakmaty(to),
                    mover,
                    piece: piece_type(m.role()),
                    promotion: promotion.map(piece_type),
                    captured: m.capture().map(piece_type),
                })
            })
            .collect()
    }

    /// Find the shakmaty move matching a request; promotions default to a queen
    fn find_legal(&self, request: MoveRequest) -> Option<Move> {
        let wanted_promotion = request.promotion.map(role).unwrap_or(Role::Queen);
        self.position
            .legal_moves()
            .iter()
            .find(|m| {
                let UciMove::Normal { from, to, promotion } = m.to_uci(CastlingMode::Standard)
                else {
                    return false;
                };
                from_shakmaty(from) == request.from
                    && from_shakmaty(to) == request.to
                    && promotion.is_none_or(|p| p == wanted_promotion)
            })
            .cloned()
    }

    pub(super) fn play_request(&mut self, request: MoveRequest) -> RulesResult<Option<MoveRecord>> {
        let Some(legal) = self.find_legal(request) else {
            debug!("[RULES] Illegal move {}-{}", request.from, request.to);
            return Ok(None);
        };

        let mover = piece_color(self.position.turn());
        let record = MoveRecord {
            from: request.from,
            to: request.to,
            mover,
            piece: piece_type(legal.role()),
            promotion: legal.promotion().map(piece_type),
            captured: legal.capture().map(piece_type),
        };

        let next = self
            .position
            .clone()
            .play(legal)
            .map_err(|e| RulesError::MoveRejected {
                from: request.from.to_string(),
                to: request.to.to_string(),
                message: format!("{e}"),
            })?;
        self.position = next;
        self.record_position();

        debug!("[RULES] {} played {}", mover, record);
        Ok(Some(record))
    }
}
