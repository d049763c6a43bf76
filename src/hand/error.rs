use std::fmt;

use crate::model::{Tile, TileKind};

// 牌表記のパースエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    InvalidChar { suit: &'static str, ch: char }, // 牌種に存在しない数字,または数字以外
    TooManyCopies(TileKind),                       // 同種5枚目
    UnknownSuit(String),                           // man, pin, sou, honors 以外
    InvalidWind(String),
    InvalidTileValue(String),
    InvalidTileId(usize), // 136枚表記の範囲外
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar { suit, ch } => write!(f, "invalid char in {}: '{}'", suit, ch),
            Self::TooManyCopies(k) => write!(f, "more than 4 copies of {}", k),
            Self::UnknownSuit(s) => write!(f, "unknown suit: {}", s),
            Self::InvalidWind(s) => write!(f, "invalid wind: {}", s),
            Self::InvalidTileValue(s) => write!(f, "invalid tile value: {}", s),
            Self::InvalidTileId(id) => write!(f, "invalid tile id: {}", id),
        }
    }
}

impl std::error::Error for ParseError {}

// 手牌評価の入力エラー
// 和了形でない手牌はエラーではなく,ScoreResult.is_winning_shape = false となる
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    Parse(ParseError),
    InvalidWinningTile(TileKind), // 和了牌が手牌に含まれていない
    InvalidHandSize(usize),       // 14枚ではない
    DuplicateTile(Tile),          // 同じ物理牌(牌種とcopy)が複数ある
}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {}", e),
            Self::InvalidWinningTile(k) => write!(f, "winning tile {} is not in hand", k),
            Self::InvalidHandSize(n) => write!(f, "hand must have 14 tiles: {}", n),
            Self::DuplicateTile(t) => write!(f, "tile {:?} is used twice", t),
        }
    }
}

impl std::error::Error for HandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for HandError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}
