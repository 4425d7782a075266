//! The board engine: legality, move generation and move application.
//!
//! Every operation is expressed as four lookups, one per [`Axis`]: the line
//! through the move square is packed into a canonical row for each color,
//! the [`CaptureTable`] is consulted, and (for moves) the resulting rows are
//! spread back onto the board.

use crate::axis::Axis;
use crate::bitboard::Bitboard;
use crate::capture_table::{self, CaptureTable};
use crate::error::{BoardError, ParseBoardError};
use crate::{utils, Color, Square, SquareSet, SquareState, NUM_SPACES};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// Starting bitboard for Black: D5 and E4.
const BLACK_START: u64 = 0x0000_0008_1000_0000;

/// Starting bitboard for White: D4 and E5.
const WHITE_START: u64 = 0x0000_0010_0800_0000;

/// For each square, every square reachable from it along the eight
/// directions, not including the square itself.
const ALL_DIRECTIONS: [u64; NUM_SPACES] = all_directions_table();

const fn all_directions_table() -> [u64; NUM_SPACES] {
    const DIRECTIONS: [(i8, i8); 8] = [
        (1, 0),
        (-1, 0),
        (0, 1),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];

    let mut table = [0u64; NUM_SPACES];
    let mut index = 0;
    while index < NUM_SPACES {
        let col = (index % 8) as i8;
        let row = (index / 8) as i8;
        let mut direction = 0;
        while direction < DIRECTIONS.len() {
            let (dc, dr) = DIRECTIONS[direction];
            let mut c = col + dc;
            let mut r = row + dr;
            while c >= 0 && c < 8 && r >= 0 && r < 8 {
                table[index] |= 1 << (r * 8 + c) as u32;
                c += dc;
                r += dr;
            }
            direction += 1;
        }
        index += 1;
    }
    table
}

/// An immutable Othello position: one bitboard per color.
///
/// Legal moves are memoized per color on first request. The memo belongs to
/// this instance only; clones carry a copy of whatever was computed so far.
#[derive(Clone)]
pub struct Board {
    black: Bitboard,
    white: Bitboard,
    legal_moves: [OnceLock<Bitboard>; 2],
}

impl Board {
    /// Caller guarantees the masks are disjoint.
    fn from_masks(black: Bitboard, white: Bitboard) -> Self {
        Self {
            black,
            white,
            legal_moves: [OnceLock::new(), OnceLock::new()],
        }
    }

    fn from_players(color: Color, player: Bitboard, opponent: Bitboard) -> Self {
        match color {
            Color::Black => Self::from_masks(player, opponent),
            Color::White => Self::from_masks(opponent, player),
        }
    }

    /// The standard four-disc starting position.
    pub fn initial() -> Self {
        Self::from_masks(Bitboard::new(BLACK_START), Bitboard::new(WHITE_START))
    }

    /// Build a board from one bitboard per color.
    pub fn from_bitboards(black: Bitboard, white: Bitboard) -> Result<Self, BoardError> {
        let overlap = black & white;
        if !overlap.is_empty() {
            return Err(BoardError::OverlappingDiscs {
                overlap: overlap.into(),
            });
        }
        Ok(Self::from_masks(black, white))
    }

    /// Build a board from a complete assignment of a state to each square.
    /// Every square must appear exactly once.
    pub fn from_squares<I>(squares: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (Square, SquareState)>,
    {
        let mut seen = Bitboard::EMPTY;
        let mut black = Bitboard::EMPTY;
        let mut white = Bitboard::EMPTY;

        for (square, state) in squares {
            let bit = square.bitboard();
            if !(seen & bit).is_empty() {
                return Err(BoardError::DuplicateSquare { square });
            }
            seen |= bit;
            match state {
                SquareState::Black => black |= bit,
                SquareState::White => white |= bit,
                SquareState::Empty => {}
            }
        }

        if let Some(square) = SquareSet::from(!seen).next() {
            return Err(BoardError::MissingSquare { square });
        }
        Ok(Self::from_masks(black, white))
    }

    /// The discs of one color.
    #[inline]
    pub fn bitboard(&self, color: Color) -> Bitboard {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// The discs of `color` and of its opponent.
    #[inline]
    fn players(&self, color: Color) -> (Bitboard, Bitboard) {
        match color {
            Color::Black => (self.black, self.white),
            Color::White => (self.white, self.black),
        }
    }

    /// Get a mask indicating where the empty squares are.
    #[inline]
    pub fn empties(&self) -> Bitboard {
        !(self.black | self.white)
    }

    pub fn square_state(&self, square: Square) -> SquareState {
        let bit = square.bitboard();
        if !(self.black & bit).is_empty() {
            SquareState::Black
        } else if !(self.white & bit).is_empty() {
            SquareState::White
        } else {
            SquareState::Empty
        }
    }

    #[inline]
    pub fn count(&self, color: Color) -> u8 {
        self.bitboard(color).count_occupied()
    }

    #[inline]
    pub fn count_empty(&self) -> u8 {
        self.empties().count_occupied()
    }

    /// Score a board as: # discs of `color` - # discs of the opponent.
    #[inline]
    pub fn count_difference(&self, color: Color) -> i8 {
        self.count(color) as i8 - self.count(!color) as i8
    }

    /// Whether `color` may play at `square`.
    /// Fails if the square is already occupied.
    pub fn is_legal(&self, square: Square, color: Color) -> Result<bool, BoardError> {
        if !(self.empties() & square.bitboard()).is_empty() {
            Ok(match self.legal_moves[color.index()].get() {
                Some(&legal) => !(legal & square.bitboard()).is_empty(),
                None => self.captures_any(capture_table::init(), square, color),
            })
        } else {
            Err(BoardError::OccupiedSquare { square })
        }
    }

    /// Whether placing a disc at the empty `square` captures along any axis.
    fn captures_any(&self, table: &CaptureTable, square: Square, color: Color) -> bool {
        let (player, opponent) = self.players(color);
        Axis::ALL.iter().any(|&axis| {
            let player_row = axis.extract(player, square);
            let opponent_row = axis.extract(opponent, square);
            table.get(player_row, opponent_row, axis.position(square)) != player_row
        })
    }

    /// The empty squares next to at least one opponent disc.
    /// Always a superset of [`Board::legal_moves`].
    #[inline]
    pub fn likely_moves(&self, color: Color) -> SquareSet {
        (self.bitboard(!color).neighbors() & self.empties()).into()
    }

    /// The squares where `color` may play, in ascending index order.
    /// Computed once per board and color.
    pub fn legal_moves(&self, color: Color) -> SquareSet {
        let legal = self.legal_moves[color.index()].get_or_init(|| {
            let table = capture_table::init();
            self.likely_moves(color)
                .filter(|&square| self.captures_any(table, square, color))
                .fold(Bitboard::EMPTY, |legal, square| legal | square.bitboard())
        });
        SquareSet::from(*legal)
    }

    #[inline]
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        !self.legal_moves(color).is_empty()
    }

    /// Neither color can move.
    pub fn is_game_over(&self) -> bool {
        !self.has_any_legal_move(Color::Black) && !self.has_any_legal_move(Color::White)
    }

    /// Play `color` at `square`, returning the resulting board.
    /// Fails if the square is occupied or the move captures nothing.
    pub fn make_move(&self, square: Square, color: Color) -> Result<Board, BoardError> {
        if (self.empties() & square.bitboard()).is_empty() {
            return Err(BoardError::OccupiedSquare { square });
        }
        if !self.legal_moves(color).contains(square) {
            return Err(BoardError::IllegalMove { square, color });
        }
        Ok(self.make_move_unchecked(square, color))
    }

    /// Play `color` at `square` without checking legality.
    /// Results in inconsistent state if the move is not legal.
    pub fn make_move_unchecked(&self, square: Square, color: Color) -> Board {
        let table = capture_table::init();
        let (player, opponent) = self.players(color);

        // Squares off every line through the move keep their discs; the rest
        // are rebuilt axis by axis.
        let unmodified = !Bitboard::new(ALL_DIRECTIONS[usize::from(square.index())]);
        let mut new_player = player & unmodified;
        let mut new_opponent = opponent & unmodified;

        for axis in Axis::ALL {
            let player_row = axis.extract(player, square);
            let opponent_row = axis.extract(opponent, square);
            let player_row = table.get(player_row, opponent_row, axis.position(square));
            let opponent_row = opponent_row & !player_row;
            new_player |= axis.insert(player_row, square);
            new_opponent |= axis.insert(opponent_row, square);
        }

        debug_assert!((new_player & new_opponent).is_empty());
        Self::from_players(color, new_player, new_opponent)
    }

    /// The opponent discs that playing `color` at `square` would flip.
    pub fn flips(&self, square: Square, color: Color) -> Result<SquareSet, BoardError> {
        let after = self.make_move(square, color)?;
        Ok((self.bitboard(!color) & !after.bitboard(!color)).into())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.black == other.black && self.white == other.white
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.black.hash(state);
        self.white.hash(state);
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("black", &format_args!("{:#018x}", u64::from(self.black)))
            .field("white", &format_args!("{:#018x}", u64::from(self.white)))
            .finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            Square::all().map(|square| self.square_state(square).symbol()),
            f,
        )
    }
}

/// Read a board from 64 cells in A1..H8 order, ignoring whitespace.
/// `X`, `B` or `*` is black; `O` or `W` is white; `-` or `.` is empty.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength { found: cells.len() });
        }

        let mut black = Bitboard::EMPTY;
        let mut white = Bitboard::EMPTY;
        for (index, &cell) in cells.iter().enumerate() {
            let bit = Bitboard::from_index(index as u8);
            match cell.to_ascii_uppercase() {
                'X' | 'B' | '*' => black |= bit,
                'O' | 'W' => white |= bit,
                '-' | '.' => {}
                found => return Err(ParseBoardError::UnexpectedChar { found }),
            }
        }

        Ok(Self::from_masks(black, white))
    }
}
