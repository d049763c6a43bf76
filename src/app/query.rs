use std::io::{self, BufRead, Write};

use serde_json::json;

use crate::hand::evaluate_hand;
use crate::model::*;
use crate::util::misc::Res;

// 1行1リクエストのJSONを読み込んで評価結果を1行ずつ出力
#[derive(Debug)]
pub struct QueryApp {
    full: bool, // trueの場合はScoreResultをそのまま出力
}

impl QueryApp {
    pub fn new(full: bool) -> Self {
        Self { full }
    }

    pub fn run(&self) -> Res {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.process(stdin.lock(), stdout.lock())
    }

    pub fn process<R: BufRead, W: Write>(&self, reader: R, mut writer: W) -> Res {
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let out = self.process_line(&line);
            writeln!(writer, "{}", out)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn process_line(&self, line: &str) -> serde_json::Value {
        let req: HandRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                log::warn!("invalid request: {}", e);
                return json!({ "error": e.to_string() });
            }
        };

        match evaluate_hand(&req) {
            Ok(res) => {
                let v = if self.full {
                    serde_json::to_value(&res)
                } else {
                    serde_json::to_value(PinfuResponse::from(&res))
                };
                v.unwrap_or_else(|e| json!({ "error": e.to_string() }))
            }
            Err(e) => {
                log::warn!("invalid hand: {}", e);
                json!({ "error": e.to_string() })
            }
        }
    }
}

#[cfg(test)]
fn query(full: bool, input: &str) -> Vec<serde_json::Value> {
    let mut out = vec![];
    QueryApp::new(full).process(input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn test_query() {
    let input = r#"
{"man": "234567", "pin": "456", "sou": "78999", "playerWind": "E", "roundWind": "E", "winTileType": "sou", "winTileValue": 9}
{"man": "234567", "pin": "456", "sou": "78999", "playerWind": "S", "roundWind": "E", "winTileType": "sou", "winTileValue": "9"}
{"man": "234567", "pin": "456", "sou": "789", "honors": "77", "playerWind": "S", "roundWind": "E", "winTileType": "sou", "winTileValue": 9}
{"man": "1357", "pin": "2468", "sou": "13579", "honors": "1", "playerWind": "S", "roundWind": "E", "winTileType": "man", "winTileValue": 1}
"#;
    let res = query(false, input);
    assert_eq!(4, res.len());
    assert_eq!(json!({"isPinfu": true, "cost": 1500}), res[0]);
    assert_eq!(json!({"isPinfu": true, "cost": 1000}), res[1]);
    assert_eq!(json!({"isPinfu": false, "cost": 0}), res[2]);
    assert_eq!(json!({"isPinfu": false, "cost": 0}), res[3]);
}

#[test]
fn test_query_full() {
    let input = r#"{"man": "234567", "pin": "456", "sou": "78999", "playerWind": "E", "roundWind": "E", "winTileType": "sou", "winTileValue": 9}"#;
    let res = query(true, input);
    assert_eq!(1, res.len());
    assert_eq!(json!(true), res[0]["is_winning_shape"]);
    assert_eq!(json!(true), res[0]["is_dealer"]);
    assert_eq!(json!(1500), res[0]["cost"]);
    assert_eq!(json!(["Pinfu"]), res[0]["yaku"]);
}

#[test]
fn test_query_error() {
    let input = r#"
not json
{"man": "234567", "pin": "44444", "sou": "789", "playerWind": "E", "roundWind": "E", "winTileType": "sou", "winTileValue": 9}
{"man": "234567", "pin": "456", "sou": "78999", "playerWind": "E", "roundWind": "E", "winTileType": "bamboo", "winTileValue": 9}
{"man": "234567", "pin": "456", "sou": "78999", "playerWind": "X", "roundWind": "E", "winTileType": "sou", "winTileValue": 9}
"#;
    let res = query(false, input);
    assert_eq!(4, res.len());
    for r in &res {
        assert!(r["error"].is_string(), "{}", r);
    }
    assert_eq!(json!("parse error: invalid wind: X"), res[3]["error"]);
}
