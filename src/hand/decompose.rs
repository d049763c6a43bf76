use crate::model::*;
use crate::util::common::{count_tiles, dec_tile, inc_tile};

// 分解数の上限 上限に達した場合は探索を打ち切る
pub const MAX_PARTITIONS: usize = 64;

// 手牌を4面子1雀頭に分解可能なすべての組み合わせを返却
// 和了形でない場合は空のリストを返却
pub fn decompose(hand: &Hand) -> Vec<Partition> {
    decompose_table(hand.counts())
}

pub fn is_winning_shape(tt: &TileTable) -> bool {
    !decompose_table(tt).is_empty()
}

pub fn decompose_table(tt: &TileTable) -> Vec<Partition> {
    if count_tiles(tt) != HAND {
        return vec![];
    }

    let (res, truncated) = collect_partitions(tt, MAX_PARTITIONS);
    if truncated {
        log::warn!("partition search stopped at {} results", res.len());
    }
    for p in &res {
        assert_eq!(*tt, p.tile_table(), "partition does not match hand: {}", p);
    }

    res
}

// 分解をlimit件まで収集 limitを超える分解があった場合は2番目の値がtrue
fn collect_partitions(tt: &TileTable, limit: usize) -> (Vec<Partition>, bool) {
    let mut work = *tt;
    let mut melds = vec![];
    let mut res = vec![];
    let mut truncated = false;
    search(&mut work, &mut melds, None, limit, &mut res, &mut truncated);
    (res, truncated)
}

// 最も小さい牌種から順に面子または雀頭として取り除いていく
// 同じ牌種に対しては 順子 → 刻子(残り3枚) → 雀頭(残り2枚) の順に試すため,
// 同じ分解が重複して見つかることはない
fn search(
    tt: &mut TileTable,
    melds: &mut Vec<Meld>,
    pair: Option<TileKind>,
    limit: usize,
    res: &mut Vec<Partition>,
    truncated: &mut bool,
) {
    if *truncated {
        return;
    }

    let k = match lowest_kind(tt) {
        Some(k) => k,
        None => {
            if let Some(p) = pair {
                if melds.len() == SET {
                    if res.len() < limit {
                        res.push(Partition::new(melds.clone(), p));
                    } else {
                        *truncated = true;
                    }
                }
            }
            return;
        }
    };
    let n = tt[k.0][k.1];

    if melds.len() < SET {
        // 順子
        if let Some((k1, k2)) = k.next().and_then(|k1| Some((k1, k1.next()?))) {
            if tt[k1.0][k1.1] > 0 && tt[k2.0][k2.1] > 0 {
                for t in [k, k1, k2] {
                    dec_tile(tt, t);
                }
                melds.push(Meld::sequence(k));
                search(tt, melds, pair, limit, res, truncated);
                melds.pop();
                for t in [k, k1, k2] {
                    inc_tile(tt, t);
                }
            }
        }

        // 刻子
        if n == 3 {
            tt[k.0][k.1] = 0;
            melds.push(Meld::triplet(k));
            search(tt, melds, pair, limit, res, truncated);
            melds.pop();
            tt[k.0][k.1] = 3;
        }
    }

    // 雀頭
    if n == 2 && pair.is_none() {
        tt[k.0][k.1] = 0;
        search(tt, melds, Some(k), limit, res, truncated);
        tt[k.0][k.1] = 2;
    }
}

fn lowest_kind(tt: &TileTable) -> Option<TileKind> {
    TileKind::all().find(|k| tt[k.0][k.1] > 0)
}

#[cfg(test)]
fn table(exp: &str) -> TileTable {
    let kinds = crate::util::common::kinds_from_string(exp).unwrap();
    crate::util::common::kinds_to_tile_table(&kinds)
}

#[cfg(test)]
fn sorted(p: &Partition) -> Vec<Meld> {
    let mut ms = p.melds.clone();
    ms.sort();
    ms
}

#[test]
fn test_decompose_single() {
    let res = decompose_table(&table("m234p456s789s234z33"));
    assert_eq!(1, res.len());
    assert_eq!(4, res[0].count_sequences());
    assert_eq!(TileKind(TZ, WW), res[0].pair);
}

#[test]
fn test_decompose_sanrenkou() {
    // 三連刻: 刻子3つ と 順子3つ の2通り
    let res = decompose_table(&table("m111222333p456s55"));
    assert_eq!(2, res.len());
    let triplets: Vec<usize> = res.iter().map(|p| p.count_triplets()).collect();
    assert!(triplets.contains(&0));
    assert!(triplets.contains(&3));
    for p in &res {
        assert_eq!(TileKind(TS, 5), p.pair);
    }
}

#[test]
fn test_decompose_pair_ambiguity() {
    // 雀頭の位置が異なる分解
    let res = decompose_table(&table("m11223344556677"));
    let pairs: Vec<TileKind> = res.iter().map(|p| p.pair).collect();
    assert!(pairs.contains(&TileKind(TM, 1)));
    assert!(pairs.contains(&TileKind(TM, 4)));
    assert!(pairs.contains(&TileKind(TM, 7)));
    for i in 0..res.len() {
        for j in i + 1..res.len() {
            assert!(
                sorted(&res[i]) != sorted(&res[j]) || res[i].pair != res[j].pair,
                "duplicated partition: {}",
                res[i]
            );
        }
    }
}

#[test]
fn test_collect_partitions_limit() {
    let tt = table("m111222333p456s55");
    // ちょうど上限件数の場合は打ち切りではない
    let (res, truncated) = collect_partitions(&tt, 2);
    assert_eq!(2, res.len());
    assert!(!truncated);

    let (res, truncated) = collect_partitions(&tt, 1);
    assert_eq!(1, res.len());
    assert!(truncated);

    let (res, truncated) = collect_partitions(&table("m1357p2468s13579z1"), 1);
    assert!(res.is_empty());
    assert!(!truncated);
}

#[test]
fn test_decompose_not_win() {
    assert!(decompose_table(&table("m1357p2468s13579z1")).is_empty());
    assert!(decompose_table(&table("m123p456s789z12344")).is_empty());
    // 七対子形は4面子1雀頭ではない
    assert!(decompose_table(&table("m1199p1199s1199z11")).is_empty());
    // 13枚
    assert!(decompose_table(&table("m123p456s789z1122")).is_empty());
    assert!(!is_winning_shape(&table("m123p456s789z11")));
    assert!(is_winning_shape(&table("m123p456s789z11222")));
}

#[test]
fn test_decompose_random() {
    use rand::prelude::*;

    let mut rng: rand::rngs::StdRng = rand::SeedableRng::seed_from_u64(42);
    let kinds: Vec<TileKind> = TileKind::all().collect();
    let mut n_checked = 0;
    while n_checked < 500 {
        let mut tt = TileTable::default();
        let mut melds = vec![];
        for _ in 0..SET {
            let k = *kinds.choose(&mut rng).unwrap();
            let m = if k.is_suit() && k.1 <= 7 && rng.gen_bool(0.7) {
                Meld::sequence(k)
            } else {
                Meld::triplet(k)
            };
            for t in m.kinds() {
                inc_tile(&mut tt, t);
            }
            melds.push(m);
        }
        let pair = *kinds.choose(&mut rng).unwrap();
        tt[pair.0][pair.1] += 2;
        if tt.iter().any(|tr| tr.iter().any(|&n| n > TILE)) {
            continue;
        }

        let expected = Partition::new(melds, pair);
        let res = decompose_table(&tt);
        assert!(
            res.iter()
                .any(|p| p.pair == expected.pair && sorted(p) == sorted(&expected)),
            "{} not found in {:?}",
            expected,
            res
        );
        for p in &res {
            assert_eq!(tt, p.tile_table());
        }
        n_checked += 1;
    }
}
