use std::collections::BTreeSet;

use super::*;
use crate::hand::YakuId;

// 手牌評価の結果
// 和了形であっても役が無い場合はyaku: {}, cost: 0 となる
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub is_winning_shape: bool,    // 4面子1雀頭の和了形かどうか
    pub yaku: BTreeSet<YakuId>,    // 成立した役
    pub cost: Cost,                // 和了点
    pub is_dealer: bool,           // 親番
    pub partitions: Vec<Partition>, // 和了形の分解の一覧
}

impl ScoreResult {
    pub fn not_winning(is_dealer: bool) -> Self {
        Self {
            is_winning_shape: false,
            yaku: BTreeSet::new(),
            cost: 0,
            is_dealer,
            partitions: vec![],
        }
    }

    #[inline]
    pub fn is_pinfu(&self) -> bool {
        self.yaku.contains(&YakuId::Pinfu)
    }
}

// 既存の呼び出し元向けのレスポンス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PinfuResponse {
    #[serde(rename = "isPinfu")]
    pub is_pinfu: bool,
    pub cost: Cost,
}

impl From<&ScoreResult> for PinfuResponse {
    fn from(res: &ScoreResult) -> Self {
        Self {
            is_pinfu: res.is_pinfu(),
            cost: res.cost,
        }
    }
}

#[test]
fn test_pinfu_response_json() {
    let mut res = ScoreResult::not_winning(false);
    let json = serde_json::to_string(&PinfuResponse::from(&res)).unwrap();
    assert_eq!(r#"{"isPinfu":false,"cost":0}"#, json);

    res.is_winning_shape = true;
    res.yaku.insert(YakuId::Pinfu);
    res.cost = 1000;
    let json = serde_json::to_string(&PinfuResponse::from(&res)).unwrap();
    assert_eq!(r#"{"isPinfu":true,"cost":1000}"#, json);
}
