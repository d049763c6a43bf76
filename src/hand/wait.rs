use serde::Serialize;

use crate::model::*;

// 待ちの形
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WaitShape {
    Open,    // 両面
    Edge,    // 辺張
    Closed,  // 嵌張
    Pair,    // 単騎
    Triplet, // 双碰
}

// 分解において和了牌が取りうる待ちの形の一覧 (重複なし)
// 和了牌を含む面子や雀頭が複数ある場合,それぞれの解釈を返す
pub fn wait_shapes(partition: &Partition, winning: Tile) -> Vec<WaitShape> {
    let wk = winning.kind;
    let mut res = vec![];
    if partition.pair == wk {
        res.push(WaitShape::Pair);
    }
    for m in &partition.melds {
        if !m.contains(wk) {
            continue;
        }
        let w = match m.meld_type {
            MeldType::Triplet => WaitShape::Triplet,
            MeldType::Sequence => sequence_wait(m.tile, wk),
        };
        if !res.contains(&w) {
            res.push(w);
        }
    }
    assert!(!res.is_empty(), "winning tile {} is not in partition", wk);
    res
}

// 順子(先頭の牌start)を和了牌で完成させた場合の待ち
pub fn sequence_wait(start: TileKind, winning: TileKind) -> WaitShape {
    assert!(start.0 == winning.0 && start.1 <= winning.1 && winning.1 <= start.1 + 2);
    // 和了牌以外の2枚が1,9牌を含む塔子の場合は辺張 (12 + 3, 89 + 7)
    let end = TileKind(start.0, start.1 + 2);
    match winning.1 - start.1 {
        1 => WaitShape::Closed,
        2 if start.is_terminal() => WaitShape::Edge,
        0 if end.is_terminal() => WaitShape::Edge,
        _ => WaitShape::Open,
    }
}

#[test]
fn test_sequence_wait() {
    use WaitShape::*;
    let k = |n| TileKind(TP, n);
    assert_eq!(Open, sequence_wait(k(2), k(2)));
    assert_eq!(Open, sequence_wait(k(2), k(4)));
    assert_eq!(Closed, sequence_wait(k(2), k(3)));
    assert_eq!(Edge, sequence_wait(k(1), k(3)));
    assert_eq!(Open, sequence_wait(k(1), k(1)));
    assert_eq!(Edge, sequence_wait(k(7), k(7)));
    assert_eq!(Open, sequence_wait(k(7), k(9)));
    assert_eq!(Closed, sequence_wait(k(7), k(8)));
}

#[test]
fn test_wait_shapes() {
    use WaitShape::*;
    let p = Partition::new(
        vec![
            Meld::sequence(TileKind(TM, 2)),
            Meld::sequence(TileKind(TM, 3)),
            Meld::triplet(TileKind(TS, 9)),
            Meld::sequence(TileKind(TP, 1)),
        ],
        TileKind(TZ, WN),
    );
    let t = |k| Tile::new(k, 0);
    // m3は 234の嵌張 と 345の両面 の2通り
    assert_eq!(vec![Closed, Open], wait_shapes(&p, t(TileKind(TM, 3))));
    assert_eq!(vec![Triplet], wait_shapes(&p, t(TileKind(TS, 9))));
    assert_eq!(vec![Pair], wait_shapes(&p, t(TileKind(TZ, WN))));
    assert_eq!(vec![Edge], wait_shapes(&p, t(TileKind(TP, 3))));
    assert_eq!(vec![Open], wait_shapes(&p, t(TileKind(TM, 2))));
}
