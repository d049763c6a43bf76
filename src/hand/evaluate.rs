use super::decompose::decompose;
use super::error::HandError;
use super::parse::parse_request;
use super::score::score;
use super::yaku::evaluate_yaku;
use crate::model::*;
use crate::util::common::vec_to_string;

// リクエストの手牌を評価
// 入力が不正な場合のみErrを返却. 和了形でない手牌はOk(is_winning_shape: false)
pub fn evaluate_hand(req: &HandRequest) -> Result<ScoreResult, HandError> {
    let hand = parse_request(req)?;
    Ok(evaluate(&hand))
}

// 検証済みの手牌を評価
// 副作用のない純粋な関数なので,複数のスレッドから同時に呼び出してよい
pub fn evaluate(hand: &Hand) -> ScoreResult {
    let is_dealer = hand.is_dealer();
    let partitions = decompose(hand);
    let yaku = match evaluate_yaku(hand, &partitions) {
        Some(yaku) => yaku,
        None => {
            log::debug!("not winning shape: {}", vec_to_string(hand.tiles()));
            return ScoreResult::not_winning(is_dealer);
        }
    };

    let cost = score(&yaku, is_dealer);
    log::debug!(
        "partitions: {}, yaku: {:?}, cost: {}",
        vec_to_string(&partitions),
        yaku,
        cost
    );

    ScoreResult {
        is_winning_shape: true,
        yaku,
        cost,
        is_dealer,
        partitions,
    }
}

#[cfg(test)]
fn request(man: &str, pin: &str, sou: &str, honors: &str, wt: (&str, u64)) -> HandRequest {
    HandRequest {
        man: man.to_string(),
        pin: pin.to_string(),
        sou: sou.to_string(),
        honors: honors.to_string(),
        player_wind: Wind::South.into(),
        round_wind: Wind::East.into(),
        win_tile_type: wt.0.to_string(),
        win_tile_value: TileValue::Number(wt.1),
    }
}

#[test]
fn test_evaluate_dealer_pinfu() {
    // 789 + 99 (単騎と両面の両方の解釈)
    let mut req = request("234567", "456", "78999", "", ("sou", 9));
    req.player_wind = Wind::East.into();
    let res = evaluate_hand(&req).unwrap();
    assert!(res.is_winning_shape);
    assert!(res.is_dealer);
    assert!(res.is_pinfu());
    assert_eq!(1500, res.cost);
    assert_eq!(
        PinfuResponse {
            is_pinfu: true,
            cost: 1500
        },
        PinfuResponse::from(&res)
    );
}

#[test]
fn test_evaluate_non_dealer_pinfu() {
    let res = evaluate_hand(&request("234567", "456", "78999", "", ("sou", 9))).unwrap();
    assert!(!res.is_dealer);
    assert!(res.is_pinfu());
    assert_eq!(1000, res.cost);
}

#[test]
fn test_evaluate_no_yaku() {
    // 三元牌の雀頭
    let res = evaluate_hand(&request("234567", "456", "789", "77", ("sou", 9))).unwrap();
    assert!(res.is_winning_shape);
    assert!(res.yaku.is_empty());
    assert_eq!(0, res.cost);

    // 嵌張
    let res = evaluate_hand(&request("234567", "456", "78944", "", ("sou", 8))).unwrap();
    assert!(res.is_winning_shape);
    assert!(!res.is_pinfu());
    assert_eq!(0, res.cost);

    // 刻子
    let res = evaluate_hand(&request("222567", "456", "78944", "", ("sou", 7))).unwrap();
    assert!(res.is_winning_shape);
    assert!(!res.is_pinfu());
    assert_eq!(0, res.cost);
}

#[test]
fn test_evaluate_not_winning() {
    let res = evaluate_hand(&request("1357", "2468", "13579", "1", ("man", 1))).unwrap();
    assert!(!res.is_winning_shape);
    assert!(res.partitions.is_empty());
    assert_eq!(0, res.cost);
    assert_eq!(
        PinfuResponse {
            is_pinfu: false,
            cost: 0
        },
        PinfuResponse::from(&res)
    );
}

#[test]
fn test_evaluate_errors() {
    use super::error::ParseError;

    assert!(matches!(
        evaluate_hand(&request("0234567", "456", "7899", "", ("sou", 9))),
        Err(HandError::Parse(ParseError::InvalidChar { .. }))
    ));
    assert!(matches!(
        evaluate_hand(&request("234567", "456", "789", "88", ("sou", 9))),
        Err(HandError::Parse(ParseError::InvalidChar { .. }))
    ));
    assert!(matches!(
        evaluate_hand(&request("234567", "44444", "789", "", ("sou", 9))),
        Err(HandError::Parse(ParseError::TooManyCopies(_)))
    ));
    assert_eq!(
        Err(HandError::InvalidWinningTile(TileKind(TP, 1))),
        evaluate_hand(&request("234567", "456", "78999", "", ("pin", 1)))
    );
    assert_eq!(
        Err(HandError::InvalidHandSize(13)),
        evaluate_hand(&request("234567", "456", "7899", "", ("sou", 9)))
    );
}

#[test]
fn test_evaluate_idempotent() {
    let req = request("111222333", "456", "55", "", ("man", 1));
    let res = evaluate_hand(&req).unwrap();
    assert_eq!(2, res.partitions.len());
    assert!(res.is_pinfu());
    for _ in 0..10 {
        assert_eq!(res, evaluate_hand(&req).unwrap());
    }
}

#[test]
fn test_evaluate_parallel() {
    let reqs = vec![
        request("234567", "456", "78999", "", ("sou", 9)),
        request("234567", "456", "789", "77", ("sou", 9)),
        request("1357", "2468", "13579", "1", ("man", 1)),
    ];
    let expected: Vec<ScoreResult> = reqs.iter().map(|r| evaluate_hand(r).unwrap()).collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let req = &reqs[i % reqs.len()];
                s.spawn(move || evaluate_hand(req).unwrap())
            })
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(expected[i % reqs.len()], h.join().unwrap());
        }
    });
}
