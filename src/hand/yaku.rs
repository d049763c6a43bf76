use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::wait::{wait_shapes, WaitShape};
use crate::model::*;

// 役の識別子 役を追加する場合はこことYAKU_LISTに追加する
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum YakuId {
    Pinfu, // 平和
}

impl YakuId {
    pub fn name(self) -> &'static str {
        match self {
            YakuId::Pinfu => "Pinfu",
        }
    }
}

impl fmt::Display for YakuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// 1つの分解と待ちの解釈に対する役判定の入力
#[derive(Debug)]
pub struct YakuContext<'a> {
    hand: &'a Hand,
    partition: &'a Partition,
    wait: WaitShape,
}

impl<'a> YakuContext<'a> {
    pub fn new(hand: &'a Hand, partition: &'a Partition, wait: WaitShape) -> Self {
        Self {
            hand,
            partition,
            wait,
        }
    }
}

pub struct YakuDefine {
    pub id: YakuId,
    pub func: fn(&YakuContext<'_>) -> bool,
}

impl fmt::Debug for YakuDefine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.id)
    }
}

macro_rules! yaku {
    ($id: expr, $f: expr) => {
        YakuDefine { id: $id, func: $f }
    };
}

pub static YAKU_LIST: &[YakuDefine] = &[yaku!(YakuId::Pinfu, is_pinfu)];

// 分解1つに対する役判定の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YakuResult {
    pub id: YakuId,
    pub satisfied: bool,
}

// 分解に対してYAKU_LISTの各役の成否を返却
// 待ちの解釈が複数ある場合はいずれかで成立すれば成立
pub fn evaluate_partition(hand: &Hand, partition: &Partition) -> Vec<YakuResult> {
    let waits = wait_shapes(partition, hand.winning_tile());
    YAKU_LIST
        .iter()
        .map(|y| YakuResult {
            id: y.id,
            satisfied: waits
                .iter()
                .any(|&w| (y.func)(&YakuContext::new(hand, partition, w))),
        })
        .collect()
}

// 成立した役の一覧を返却
// 分解が空(和了形ではない)の場合はNone
// 複数の分解がある場合,いずれかの分解で成立した役は成立とみなす
pub fn evaluate_yaku(hand: &Hand, partitions: &[Partition]) -> Option<BTreeSet<YakuId>> {
    if partitions.is_empty() {
        return None;
    }

    let mut res = BTreeSet::new();
    for p in partitions {
        for r in evaluate_partition(hand, p) {
            if r.satisfied {
                res.insert(r.id);
            }
        }
    }
    Some(res)
}

// 平和
fn is_pinfu(ctx: &YakuContext<'_>) -> bool {
    if ctx.partition.count_sequences() != SET {
        return false;
    }

    // 役牌の雀頭 (連風牌を含む)
    if ctx.hand.is_valued(ctx.partition.pair) {
        return false;
    }

    ctx.wait == WaitShape::Open
}

#[cfg(test)]
fn hand_of(exp: &str, seat: Wind, round: Wind) -> Hand {
    // 表記の最後の牌が和了牌
    let kinds = crate::util::common::kinds_from_string(exp).unwrap();
    let tiles = crate::util::common::tiles_from_kinds(&kinds).unwrap();
    let wt = tiles[tiles.len() - 1];
    Hand::new(tiles, wt, seat, round).unwrap()
}

#[cfg(test)]
fn yaku_of(hand: &Hand) -> Option<BTreeSet<YakuId>> {
    evaluate_yaku(hand, &super::decompose::decompose(hand))
}

#[test]
fn test_pinfu() {
    let hand = hand_of("m234p45688s23456s7", Wind::South, Wind::East);
    assert_eq!(Some(BTreeSet::from([YakuId::Pinfu])), yaku_of(&hand));
}

#[test]
fn test_pinfu_valued_pair() {
    use Wind::*;
    // 三元牌
    let hand = hand_of("m234p456s23456z55s7", South, East);
    assert_eq!(Some(BTreeSet::new()), yaku_of(&hand));
    // 自風
    let hand = hand_of("m234p456s23456z22s7", South, East);
    assert_eq!(Some(BTreeSet::new()), yaku_of(&hand));
    // 場風
    let hand = hand_of("m234p456s23456z11s7", South, East);
    assert_eq!(Some(BTreeSet::new()), yaku_of(&hand));
    // 客風
    let hand = hand_of("m234p456s23456z44s7", South, East);
    assert_eq!(Some(BTreeSet::from([YakuId::Pinfu])), yaku_of(&hand));
    // 連風牌 (自風と場風が同じ)
    let hand = hand_of("m234p456s23456z11s7", East, East);
    assert_eq!(Some(BTreeSet::new()), yaku_of(&hand));
    assert_eq!(0, super::score::score(&BTreeSet::new(), hand.is_dealer()));
    assert_eq!(0, super::evaluate::evaluate(&hand).cost);
}

#[test]
fn test_pinfu_wait() {
    // 嵌張
    let hand = hand_of("m234p45688s24567s3", Wind::South, Wind::East);
    assert_eq!(Some(BTreeSet::new()), yaku_of(&hand));
    // 辺張
    let hand = hand_of("m234p45688s12567s3", Wind::South, Wind::East);
    assert_eq!(Some(BTreeSet::new()), yaku_of(&hand));
    // 単騎
    let hand = hand_of("m234p4568s234567p8", Wind::South, Wind::East);
    assert_eq!(Some(BTreeSet::new()), yaku_of(&hand));
}

#[test]
fn test_pinfu_wait_ambiguity() {
    // s3は 234の嵌張 にも 345の両面 にも解釈できる
    let hand = hand_of("m234p45688s23445s3", Wind::South, Wind::East);
    assert_eq!(Some(BTreeSet::from([YakuId::Pinfu])), yaku_of(&hand));
    // s3は 123の辺張 にも 345の両面 にも解釈できる
    let hand = hand_of("m234p45688s12345s3", Wind::South, Wind::East);
    assert_eq!(Some(BTreeSet::from([YakuId::Pinfu])), yaku_of(&hand));
}

#[test]
fn test_pinfu_triplet() {
    // 刻子を含む
    let hand = hand_of("m222p45688s23445s3", Wind::South, Wind::East);
    assert_eq!(Some(BTreeSet::new()), yaku_of(&hand));
}

#[test]
fn test_pinfu_partition_ambiguity() {
    // m111222333: 刻子3つでは平和にならないが,順子3つの分解で平和
    let hand = hand_of("m11222333p456s55m1", Wind::South, Wind::East);
    let ps = super::decompose::decompose(&hand);
    assert_eq!(2, ps.len());
    let results: Vec<bool> = ps
        .iter()
        .map(|p| evaluate_partition(&hand, p)[0].satisfied)
        .collect();
    assert!(results.contains(&true));
    assert!(results.contains(&false));
    assert_eq!(Some(BTreeSet::from([YakuId::Pinfu])), yaku_of(&hand));
}

#[test]
fn test_not_winning() {
    let hand = hand_of("m1357p2468s13579z1", Wind::East, Wind::East);
    assert_eq!(None, yaku_of(&hand));
}
