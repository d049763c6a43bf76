// 手牌の和了形の分解,役判定,点数計算を行うモジュール
mod decompose;
mod error;
mod evaluate;
mod parse;
mod score;
mod wait;
mod win;
mod yaku;

pub use self::{
    decompose::{decompose, decompose_table, is_winning_shape, MAX_PARTITIONS},
    error::{HandError, ParseError},
    evaluate::{evaluate, evaluate_hand},
    parse::{parse_request, parse_suit, parse_tiles, parse_wind, resolve_winning_tile},
    score::{get_cost, score},
    wait::{sequence_wait, wait_shapes, WaitShape},
    win::{calc_winning_kinds, evaluate_waits, WinningTile},
    yaku::{
        evaluate_partition, evaluate_yaku, YakuContext, YakuDefine, YakuId, YakuResult,
        YAKU_LIST,
    },
};
