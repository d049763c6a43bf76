use std::collections::BTreeSet;

use super::yaku::YakuId;
use crate::model::Cost;

// 役ごとの和了点 (役, 親番, 点数)
// 表に無い組み合わせは0点
static COST_TABLE: &[(YakuId, bool, Cost)] = &[
    (YakuId::Pinfu, true, 1500),  // 親
    (YakuId::Pinfu, false, 1000), // 子
];

pub fn get_cost(yaku: YakuId, is_dealer: bool) -> Cost {
    COST_TABLE
        .iter()
        .find(|&&(y, d, _)| y == yaku && d == is_dealer)
        .map_or(0, |&(_, _, c)| c)
}

// 成立した役の和了点の合計
pub fn score(yaku: &BTreeSet<YakuId>, is_dealer: bool) -> Cost {
    yaku.iter().map(|&y| get_cost(y, is_dealer)).sum()
}

#[test]
fn test_score() {
    let pinfu = BTreeSet::from([YakuId::Pinfu]);
    assert_eq!(1500, score(&pinfu, true));
    assert_eq!(1000, score(&pinfu, false));
    assert_eq!(0, score(&BTreeSet::new(), true));
    assert_eq!(0, score(&BTreeSet::new(), false));
}

#[test]
fn test_cost_table_complete() {
    // すべての役に親番・子の両方の点数が定義されている
    for y in super::yaku::YAKU_LIST {
        for is_dealer in [true, false] {
            let n = COST_TABLE
                .iter()
                .filter(|&&(y2, d, _)| y2 == y.id && d == is_dealer)
                .count();
            assert_eq!(1, n, "{} dealer={}", y.id, is_dealer);
        }
    }
}
