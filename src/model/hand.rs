use super::*;
use crate::hand::{HandError, ParseError};

// 和了時の手牌 (14枚, 和了牌を含む) と場の情報
// 生成時に枚数,牌の重複,和了牌を検証する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    tiles: Vec<Tile>,
    counts: TileTable,
    winning_tile: Tile,
    seat_wind: Wind,
    round_wind: Wind,
}

impl Hand {
    pub fn new(
        tiles: Vec<Tile>,
        winning_tile: Tile,
        seat_wind: Wind,
        round_wind: Wind,
    ) -> Result<Self, HandError> {
        if tiles.len() != HAND {
            return Err(HandError::InvalidHandSize(tiles.len()));
        }

        let mut counts = TileTable::default();
        let mut used = [[false; TILE]; KIND];
        for t in &tiles {
            let k = t.kind;
            counts[k.0][k.1] += 1;
            if counts[k.0][k.1] > TILE {
                return Err(ParseError::TooManyCopies(k).into());
            }
            // 同じ物理牌を2回使うことはできない
            let u = &mut used[k.index()][t.copy];
            if *u {
                return Err(HandError::DuplicateTile(*t));
            }
            *u = true;
        }

        if !tiles.contains(&winning_tile) {
            return Err(HandError::InvalidWinningTile(winning_tile.kind));
        }

        Ok(Self {
            tiles,
            counts,
            winning_tile,
            seat_wind,
            round_wind,
        })
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    pub fn counts(&self) -> &TileTable {
        &self.counts
    }

    #[inline]
    pub fn winning_tile(&self) -> Tile {
        self.winning_tile
    }

    #[inline]
    pub fn seat_wind(&self) -> Wind {
        self.seat_wind
    }

    #[inline]
    pub fn round_wind(&self) -> Wind {
        self.round_wind
    }

    // 親番 (自風が東)
    #[inline]
    pub fn is_dealer(&self) -> bool {
        self.seat_wind == Wind::East
    }

    // 役牌 (三元牌, 自風, 場風)
    pub fn is_valued(&self, k: TileKind) -> bool {
        if k.is_wind() {
            k == self.seat_wind.tile_kind() || k == self.round_wind.tile_kind()
        } else {
            k.is_doragon()
        }
    }
}

#[cfg(test)]
fn tiles_of(kinds: &[TileKind]) -> Vec<Tile> {
    let mut tt = TileTable::default();
    kinds
        .iter()
        .map(|&k| {
            let t = Tile::new(k, tt[k.0][k.1]);
            tt[k.0][k.1] += 1;
            t
        })
        .collect()
}

#[test]
fn test_hand_validation() {
    let mut kinds = vec![];
    for ni in 1..=9 {
        kinds.push(TileKind(TM, ni));
    }
    kinds.extend([TileKind(TP, 1); 3]);
    kinds.extend([TileKind(TZ, WE); 2]);
    let tiles = tiles_of(&kinds);
    let wt = tiles[13];

    let hand = Hand::new(tiles.clone(), wt, Wind::East, Wind::South).unwrap();
    assert!(hand.is_dealer());
    assert!(hand.is_valued(TileKind(TZ, WE)));
    assert!(hand.is_valued(TileKind(TZ, WS)));
    assert!(hand.is_valued(TileKind(TZ, DG)));
    assert!(!hand.is_valued(TileKind(TZ, WN)));
    assert!(!hand.is_valued(TileKind(TM, 1)));

    let missing = Tile::new(TileKind(TS, 1), 0);
    assert_eq!(
        Err(HandError::InvalidWinningTile(TileKind(TS, 1))),
        Hand::new(tiles.clone(), missing, Wind::East, Wind::East)
    );
    assert_eq!(
        Err(HandError::InvalidHandSize(13)),
        Hand::new(tiles[..13].to_vec(), wt, Wind::East, Wind::East)
    );

    let mut dup = tiles.clone();
    dup[1] = dup[0];
    assert_eq!(
        Err(HandError::DuplicateTile(Tile::new(TileKind(TM, 1), 0))),
        Hand::new(dup, wt, Wind::East, Wind::East)
    );

    let mut five: Vec<Tile> = (0..5)
        .map(|c| Tile::new(TileKind(TP, 1), c % TILE))
        .collect();
    five.extend(tiles[..9].iter().copied());
    assert_eq!(
        Err(HandError::Parse(ParseError::TooManyCopies(TileKind(TP, 1)))),
        Hand::new(five, wt, Wind::East, Wind::East)
    );
}
