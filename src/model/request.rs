use super::*;
use crate::hand::{HandError, ParseError};

// 和了牌の数字部分 数値と文字列("9")のどちらも受け付ける
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TileValue {
    Number(u64),
    Text(String),
}

impl TileValue {
    pub fn as_tnum(&self) -> Option<Tnum> {
        match self {
            TileValue::Number(n) => Some(*n as Tnum),
            TileValue::Text(s) => {
                let mut chars = s.trim().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_digit(10).map(|d| d as Tnum),
                    _ => None,
                }
            }
        }
    }
}

impl Default for TileValue {
    fn default() -> Self {
        TileValue::Number(0)
    }
}

impl fmt::Display for TileValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileValue::Number(n) => write!(f, "{}", n),
            TileValue::Text(s) => write!(f, "{}", s),
        }
    }
}

// 風の指定 "E", "south", 1~4, 27~30 のいずれか
// 変換はparse_requestで行い,不正な値はParseError::InvalidWindとなる
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum WindValue {
    Number(u64),
    Text(String),
}

impl WindValue {
    pub fn as_wind(&self) -> Option<Wind> {
        match self {
            WindValue::Number(n) => Wind::from_number(*n),
            WindValue::Text(s) => Wind::from_name(s.trim()),
        }
    }
}

impl Default for WindValue {
    fn default() -> Self {
        Wind::default().into()
    }
}

impl From<Wind> for WindValue {
    fn from(w: Wind) -> Self {
        WindValue::Text(w.to_string())
    }
}

impl fmt::Display for WindValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindValue::Number(n) => write!(f, "{}", n),
            WindValue::Text(s) => write!(f, "{}", s),
        }
    }
}

// 手牌評価リクエスト
// man, pin, sou, honorsには和了牌を含めた14枚を記述する
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HandRequest {
    #[serde(default)]
    pub man: String,
    #[serde(default)]
    pub pin: String,
    #[serde(default)]
    pub sou: String,
    #[serde(default)]
    pub honors: String,
    #[serde(alias = "playerWind")]
    pub player_wind: WindValue,
    #[serde(alias = "roundWind")]
    pub round_wind: WindValue,
    #[serde(alias = "winTileType")]
    pub win_tile_type: String, // man | pin | sou | honors
    #[serde(alias = "winTileValue")]
    pub win_tile_value: TileValue,
}

impl HandRequest {
    // 136枚表記の牌番号(0~135)から生成
    // hand: 和了牌を除く13枚, win_id: 和了牌
    pub fn from_tile_ids(
        hand: &[usize],
        win_id: usize,
        player_wind: Wind,
        round_wind: Wind,
    ) -> Result<Self, HandError> {
        let mut req = Self {
            player_wind: player_wind.into(),
            round_wind: round_wind.into(),
            ..Default::default()
        };

        for &id in hand.iter().chain(std::iter::once(&win_id)) {
            let k = kind_from_tile_id(id)?;
            let digit = char::from_digit(k.1 as u32, 10).ok_or(ParseError::InvalidTileId(id))?;
            req.suit_string_mut(k.0).push(digit);
        }

        let wk = kind_from_tile_id(win_id)?;
        req.win_tile_type = SUIT_NAMES[wk.0].to_string();
        req.win_tile_value = TileValue::Number(wk.1 as u64);

        Ok(req)
    }

    fn suit_string_mut(&mut self, ti: Type) -> &mut String {
        match ti {
            TM => &mut self.man,
            TP => &mut self.pin,
            TS => &mut self.sou,
            _ => &mut self.honors,
        }
    }
}

pub const SUIT_NAMES: [&str; TYPE] = ["man", "pin", "sou", "honors"];

pub fn type_from_suit_name(name: &str) -> Option<Type> {
    SUIT_NAMES.iter().position(|&s| s == name)
}

// 牌番号 / 4 が牌種の通し番号
pub fn kind_from_tile_id(id: usize) -> Result<TileKind, HandError> {
    TileKind::from_index(id / TILE).ok_or_else(|| ParseError::InvalidTileId(id).into())
}

#[test]
fn test_request_from_json() {
    let json = r#"{
        "man": "234", "pin": "456", "sou": "78955", "honors": "",
        "player_wind": 27, "round_wind": "E",
        "win_tile_type": "sou", "win_tile_value": "9"
    }"#;
    let req: HandRequest = serde_json::from_str(json).unwrap();
    assert_eq!("78955", req.sou);
    assert_eq!(Some(Wind::East), req.player_wind.as_wind());
    assert_eq!(Some(9), req.win_tile_value.as_tnum());

    let camel = r#"{"man":"234","playerWind":"S","roundWind":"E","winTileType":"man","winTileValue":2}"#;
    let req: HandRequest = serde_json::from_str(camel).unwrap();
    assert_eq!("", req.pin);
    assert_eq!(Some(Wind::South), req.player_wind.as_wind());

    // 風の値の検証はparse_requestで行う
    let bad = r#"{"man":"234","playerWind":"X","roundWind":5,"winTileType":"man","winTileValue":2}"#;
    let req: HandRequest = serde_json::from_str(bad).unwrap();
    assert_eq!(WindValue::Text("X".to_string()), req.player_wind);
    assert_eq!(None, req.player_wind.as_wind());
    assert_eq!(None, req.round_wind.as_wind());
    assert_eq!(Some(2), req.win_tile_value.as_tnum());
}

#[test]
fn test_request_from_tile_ids() {
    // m1 m1 m4 m5 m6 m7 m8 m9 p7 p8 p9 s2 s3 + s4
    let hand = [0, 1, 12, 16, 20, 24, 28, 32, 60, 64, 68, 76, 80];
    let req = HandRequest::from_tile_ids(&hand, 84, Wind::South, Wind::East).unwrap();
    assert_eq!("11456789", req.man);
    assert_eq!("789", req.pin);
    assert_eq!("234", req.sou);
    assert_eq!("", req.honors);
    assert_eq!("sou", req.win_tile_type);
    assert_eq!(TileValue::Number(4), req.win_tile_value);

    let req = HandRequest::from_tile_ids(&hand[..12], 135, Wind::South, Wind::East).unwrap();
    assert_eq!("7", req.honors);
    assert_eq!("honors", req.win_tile_type);

    assert_eq!(
        Err(HandError::Parse(ParseError::InvalidTileId(136))),
        HandRequest::from_tile_ids(&hand, 136, Wind::East, Wind::East)
    );
}
