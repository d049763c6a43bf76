// 手牌評価のデータモデル
mod define;
mod hand;
mod meld;
mod request;
mod tile;
mod win_context;
mod wind;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use define::*;
pub use hand::*;
pub use meld::*;
pub use request::*;
pub use tile::*;
pub use win_context::*;
pub use wind::*;
