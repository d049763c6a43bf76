#![warn(rust_2018_idioms)]
// 構造的な意味合いや一貫性を保つために以下の警告は無効化
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::needless_range_loop)]

pub mod app;
pub mod hand;
pub mod model;
pub mod util;

pub use hand::{evaluate, evaluate_hand, HandError, ParseError, YakuId};
pub use model::{HandRequest, PinfuResponse, ScoreResult};
