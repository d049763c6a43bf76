use serde::Serialize;

use super::decompose::is_winning_shape;
use super::error::HandError;
use super::evaluate::evaluate;
use crate::model::*;
use crate::util::common::{count_tiles, dec_tile, inc_tile};

// [和了牌判定]
// 13枚の手牌に対して和了形となる牌種のリストを返却
// 聴牌していない場合は空のリストを返却
// 手牌で4枚使い切っている牌種は和了牌にならない
pub fn calc_winning_kinds(hand: &TileTable) -> Vec<TileKind> {
    if count_tiles(hand) != HAND - 1 {
        return vec![];
    }

    let mut tt = *hand;
    let mut res = vec![];
    for k in TileKind::all() {
        if tt[k.0][k.1] >= TILE {
            continue;
        }
        inc_tile(&mut tt, k);
        if is_winning_shape(&tt) {
            res.push(k);
        }
        dec_tile(&mut tt, k);
    }
    res
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinningTile {
    pub tile: TileKind,      // 和了牌
    pub result: ScoreResult, // その牌で和了した場合の評価
}

// 13枚の手牌の和了牌それぞれについて評価を返却
pub fn evaluate_waits(
    tiles: &[Tile],
    seat_wind: Wind,
    round_wind: Wind,
) -> Result<Vec<WinningTile>, HandError> {
    if tiles.len() != HAND - 1 {
        return Err(HandError::InvalidHandSize(tiles.len()));
    }

    let mut tt = TileTable::default();
    for t in tiles {
        inc_tile(&mut tt, t.kind);
    }

    let mut res = vec![];
    for k in calc_winning_kinds(&tt) {
        // 手牌で使われていないcopyを和了牌とする
        let wt = match (0..TILE).map(|c| Tile::new(k, c)).find(|t| !tiles.contains(t)) {
            Some(t) => t,
            None => continue,
        };
        let mut tiles14 = tiles.to_vec();
        tiles14.push(wt);
        let hand = Hand::new(tiles14, wt, seat_wind, round_wind)?;
        res.push(WinningTile {
            tile: k,
            result: evaluate(&hand),
        });
    }
    Ok(res)
}

#[cfg(test)]
fn tiles(exp: &str) -> Vec<Tile> {
    let kinds = crate::util::common::kinds_from_string(exp).unwrap();
    crate::util::common::tiles_from_kinds(&kinds).unwrap()
}

#[test]
fn test_calc_winning_kinds() {
    use crate::util::common::{kinds_from_string, kinds_to_tile_table};
    let tt = |exp: &str| kinds_to_tile_table(&kinds_from_string(exp).unwrap());
    // 両面
    assert_eq!(
        vec![TileKind(TS, 4), TileKind(TS, 7)],
        calc_winning_kinds(&tt("m234p45688s234s56"))
    );
    // 九蓮宝燈形
    assert_eq!(9, calc_winning_kinds(&tt("m1112345678999")).len());
    // 4枚使いの牌は待ちにならない
    assert_eq!(
        vec![TileKind(TM, 3)],
        calc_winning_kinds(&tt("m1111222p456s789"))
    );
    // 14枚は対象外
    assert!(calc_winning_kinds(&tt("m234p45688s234567")).is_empty());
}

#[test]
fn test_evaluate_waits() {
    // s4-s7の両面待ち
    let res = evaluate_waits(&tiles("m234p45688s234s56"), Wind::South, Wind::East).unwrap();
    assert_eq!(2, res.len());
    for w in &res {
        assert!(w.result.is_pinfu());
        assert_eq!(1000, w.result.cost);
    }

    // 嵌張待ち
    let res = evaluate_waits(&tiles("m234p45688s234s46"), Wind::East, Wind::East).unwrap();
    assert_eq!(1, res.len());
    assert_eq!(TileKind(TS, 5), res[0].tile);
    assert!(res[0].result.is_winning_shape);
    assert!(!res[0].result.is_pinfu());

    // copy番号が連番でない手牌
    let mut ts = tiles("m234p45688s234s56");
    ts[0] = Tile::new(TileKind(TM, 2), 3);
    let res = evaluate_waits(&ts, Wind::South, Wind::East).unwrap();
    assert_eq!(2, res.len());

    assert_eq!(
        Err(HandError::InvalidHandSize(14)),
        evaluate_waits(&tiles("m234p45688s234567"), Wind::East, Wind::East)
    );
}
