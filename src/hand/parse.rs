use super::error::{HandError, ParseError};
use crate::model::*;
use crate::util::common::inc_tile;

// 牌種ごとの数字列 ("234", "55"など) を牌種のリストに変換
// 数牌は1~9, 字牌は1~7 (東南西北白發中) のみ有効. 赤5(0)は扱わない
pub fn parse_suit(ti: Type, exp: &str) -> Result<Vec<TileKind>, ParseError> {
    let suit = SUIT_NAMES[ti];
    let mut kinds = vec![];
    for ch in exp.chars() {
        let k = ch
            .to_digit(10)
            .and_then(|n| TileKind::new(ti, n as Tnum))
            .ok_or(ParseError::InvalidChar { suit, ch })?;
        kinds.push(k);
    }
    Ok(kinds)
}

// 4種類の牌表記を14枚の牌に変換
pub fn parse_tiles(man: &str, pin: &str, sou: &str, honors: &str) -> Result<Vec<Tile>, HandError> {
    let mut kinds = vec![];
    for (ti, exp) in [man, pin, sou, honors].into_iter().enumerate() {
        kinds.append(&mut parse_suit(ti, exp)?);
    }

    let mut tt = TileTable::default();
    let mut tiles = vec![];
    for k in kinds {
        if tt[k.0][k.1] == TILE {
            return Err(ParseError::TooManyCopies(k).into());
        }
        tiles.push(Tile::new(k, tt[k.0][k.1]));
        inc_tile(&mut tt, k);
    }

    if tiles.len() != HAND {
        return Err(HandError::InvalidHandSize(tiles.len()));
    }

    Ok(tiles)
}

// 和了牌の種別と数字から手牌中の牌を特定
// 同種の牌が複数ある場合は最後の牌 (和了牌は手牌の末尾に追加される)
pub fn resolve_winning_tile(
    tiles: &[Tile],
    suit: &str,
    value: &TileValue,
) -> Result<Tile, HandError> {
    let ti = type_from_suit_name(suit)
        .ok_or_else(|| ParseError::UnknownSuit(suit.to_string()))?;
    let k = value
        .as_tnum()
        .and_then(|ni| TileKind::new(ti, ni))
        .ok_or_else(|| ParseError::InvalidTileValue(format!("{}{}", suit, value)))?;

    tiles
        .iter()
        .rev()
        .find(|t| t.kind == k)
        .copied()
        .ok_or(HandError::InvalidWinningTile(k))
}

pub fn parse_wind(value: &WindValue) -> Result<Wind, ParseError> {
    value
        .as_wind()
        .ok_or_else(|| ParseError::InvalidWind(value.to_string()))
}

// リクエストを検証済みの手牌に変換
pub fn parse_request(req: &HandRequest) -> Result<Hand, HandError> {
    let tiles = parse_tiles(&req.man, &req.pin, &req.sou, &req.honors)?;
    let wt = resolve_winning_tile(&tiles, &req.win_tile_type, &req.win_tile_value)?;
    let seat_wind = parse_wind(&req.player_wind)?;
    let round_wind = parse_wind(&req.round_wind)?;
    Hand::new(tiles, wt, seat_wind, round_wind)
}

#[test]
fn test_parse_tiles() {
    let tiles = parse_tiles("234", "456", "78999", "111").unwrap();
    assert_eq!(14, tiles.len());
    assert_eq!(TileKind(TM, 2), tiles[0].kind);
    assert_eq!(TileKind(TZ, WE), tiles[13].kind);
    assert_eq!(2, tiles[10].copy); // s9の3枚目

    assert_eq!(
        Err(HandError::Parse(ParseError::InvalidChar { suit: "man", ch: '0' })),
        parse_tiles("0234", "456", "7899", "11")
    );
    assert_eq!(
        Err(HandError::Parse(ParseError::InvalidChar { suit: "honors", ch: '9' })),
        parse_tiles("234", "456", "789", "11199")
    );
    assert_eq!(
        Err(HandError::Parse(ParseError::InvalidChar { suit: "pin", ch: 'x' })),
        parse_tiles("234", "4x6", "789", "11")
    );
    assert_eq!(
        Err(HandError::Parse(ParseError::TooManyCopies(TileKind(TS, 9)))),
        parse_tiles("234", "456", "99999", "11")
    );
    assert_eq!(
        Err(HandError::InvalidHandSize(13)),
        parse_tiles("234", "456", "78999", "11")
    );
    assert_eq!(
        Err(HandError::InvalidHandSize(15)),
        parse_tiles("234", "456", "78999", "1111")
    );
}

#[test]
fn test_resolve_winning_tile() {
    let tiles = parse_tiles("234", "456", "78999", "111").unwrap();
    let wt = resolve_winning_tile(&tiles, "sou", &TileValue::Number(9)).unwrap();
    assert_eq!(TileKind(TS, 9), wt.kind);
    assert_eq!(2, wt.copy);

    let wt = resolve_winning_tile(&tiles, "honors", &TileValue::Text("1".to_string())).unwrap();
    assert_eq!(TileKind(TZ, WE), wt.kind);

    assert_eq!(
        Err(HandError::InvalidWinningTile(TileKind(TM, 9))),
        resolve_winning_tile(&tiles, "man", &TileValue::Number(9))
    );
    assert_eq!(
        Err(HandError::Parse(ParseError::UnknownSuit("bamboo".to_string()))),
        resolve_winning_tile(&tiles, "bamboo", &TileValue::Number(1))
    );
    assert!(matches!(
        resolve_winning_tile(&tiles, "honors", &TileValue::Number(8)),
        Err(HandError::Parse(ParseError::InvalidTileValue(_)))
    ));
    assert!(matches!(
        resolve_winning_tile(&tiles, "man", &TileValue::Text("10".to_string())),
        Err(HandError::Parse(ParseError::InvalidTileValue(_)))
    ));
}

#[test]
fn test_parse_request_wind() {
    let mut req = HandRequest {
        man: "234567".to_string(),
        pin: "456".to_string(),
        sou: "78999".to_string(),
        player_wind: WindValue::Number(28),
        round_wind: WindValue::Text("east".to_string()),
        win_tile_type: "sou".to_string(),
        win_tile_value: TileValue::Number(9),
        ..Default::default()
    };
    let hand = parse_request(&req).unwrap();
    assert_eq!(Wind::South, hand.seat_wind());
    assert_eq!(Wind::East, hand.round_wind());

    req.player_wind = WindValue::Text("X".to_string());
    assert_eq!(
        Err(HandError::Parse(ParseError::InvalidWind("X".to_string()))),
        parse_request(&req)
    );
    req.player_wind = Wind::West.into();
    req.round_wind = WindValue::Number(5);
    assert_eq!(
        Err(HandError::Parse(ParseError::InvalidWind("5".to_string()))),
        parse_request(&req)
    );
}
