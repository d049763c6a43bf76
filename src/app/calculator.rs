use std::fs::File;
use std::io::{self, BufRead};

use crate::hand::{evaluate, evaluate_partition, evaluate_waits, HandError};
use crate::model::*;
use crate::util::common::{kinds_from_string, tiles_from_kinds, vec_to_string};
use crate::util::misc::Res;

#[derive(Debug)]
pub struct CalculatorApp {
    exp: Option<String>,
    file_path: Option<String>,
    detail: bool,
}

impl CalculatorApp {
    pub fn new(exp: Option<String>, file_path: Option<String>, detail: bool) -> Self {
        Self {
            exp,
            file_path,
            detail,
        }
    }

    pub fn run(&self) -> Res {
        match (&self.exp, &self.file_path) {
            (Some(exp), None) => {
                self.process_expression(exp)?;
            }
            (None, Some(file_path)) => self.run_from_file(file_path)?,
            _ => Err("either EXPRESSION or -f FILE is required")?,
        }
        Ok(())
    }

    fn run_from_file(&self, file_path: &str) -> Res {
        let file = File::open(file_path)?;
        let lines = io::BufReader::new(file).lines();
        let (mut n_ok, mut n_error, mut n_skip) = (0, 0, 0);
        for exp in lines.map_while(Result::ok) {
            let e = exp.replace(' ', "");
            if e.is_empty() || e.starts_with('#') {
                // 空行とコメント行はスキップ
                println!("> {}", exp);
            } else {
                match self.process_expression(&exp) {
                    Ok(Verify::Ok) => n_ok += 1,
                    Ok(Verify::Error) => n_error += 1,
                    Ok(Verify::Skip) => n_skip += 1,
                    Err(e) => {
                        log::error!("{}", e);
                        n_error += 1;
                    }
                }
            }
            println!();
        }
        log::info!("verify ok: {}, error: {}, skip: {}", n_ok, n_error, n_skip);
        Ok(())
    }

    fn process_expression(&self, exp: &str) -> Res<Verify> {
        let mut calculator = Calculator::new(self.detail);
        calculator.parse(exp)?;
        calculator.run()
    }
}

#[derive(Debug, PartialEq)]
enum Verify {
    Ok,
    Error,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Expected {
    Cost(Cost),
    NotWin, // 和了形ではない
}

#[derive(Debug)]
struct Calculator {
    detail: bool,
    tiles: Vec<Tile>, // 最後の牌が和了牌
    round_wind: Wind,
    seat_wind: Wind,
    expected: Option<Expected>,
}

impl Calculator {
    fn new(detail: bool) -> Self {
        Self {
            detail,
            tiles: vec![],
            round_wind: Wind::East,
            seat_wind: Wind::East,
            expected: None,
        }
    }

    // HAND/WINDS/VERIFY
    // 例: m234p456s55789/ES/1000
    fn parse(&mut self, input: &str) -> Res {
        println!("> {}", input);

        let input = input.replace(' ', "");
        let input = input.split('#').next().unwrap_or(""); // コメント削除
        let exps: Vec<&str> = input.split('/').collect();
        let len = exps.len();
        if len > 0 {
            self.parse_hand(exps[0])?;
        }
        if len > 1 {
            self.parse_winds(exps[1])?;
        }
        if len > 2 {
            self.parse_verify(exps[2])?;
        }

        if self.detail {
            println!("{:?}", self);
        }

        Ok(())
    }

    fn parse_hand(&mut self, input: &str) -> Res {
        let kinds = kinds_from_string(input)?;
        self.tiles = match tiles_from_kinds(&kinds) {
            Some(tiles) => tiles,
            None => Err(format!("more than 4 copies of a tile: {}", input))?,
        };
        Ok(())
    }

    fn parse_winds(&mut self, input: &str) -> Res {
        let chars: Vec<char> = input.chars().collect();
        if chars.len() != 2 {
            Err(format!("winds len is not 2: {}", input))?;
        }
        let wind = |c: char| Wind::from_char(c).ok_or(format!("invalid wind symbol: {}", c));
        self.round_wind = wind(chars[0])?;
        self.seat_wind = wind(chars[1])?;
        Ok(())
    }

    fn parse_verify(&mut self, input: &str) -> Res {
        self.expected = Some(match input {
            "-" => Expected::NotWin,
            _ => Expected::Cost(input.parse::<Cost>()?),
        });
        Ok(())
    }

    fn run(&self) -> Res<Verify> {
        match self.tiles.len() {
            HAND => self.run_win(),
            n if n == HAND - 1 => self.run_waits(),
            n => Err(HandError::InvalidHandSize(n))?,
        }
    }

    fn run_win(&self) -> Res<Verify> {
        let wt = self.tiles[self.tiles.len() - 1];
        let hand = Hand::new(self.tiles.clone(), wt, self.seat_wind, self.round_wind)?;
        let res = evaluate(&hand);

        if self.detail {
            for p in &res.partitions {
                println!("{} {:?}", p, evaluate_partition(&hand, p));
            }
        }

        if !res.is_winning_shape {
            println!("not win hand");
        } else {
            println!(
                "yaku: {}, cost: {}",
                vec_to_string(&res.yaku.iter().collect::<Vec<_>>()),
                res.cost
            );
        }

        let verify = match self.expected {
            Some(Expected::NotWin) => {
                if res.is_winning_shape {
                    Verify::Error
                } else {
                    Verify::Ok
                }
            }
            Some(Expected::Cost(c)) => {
                if res.is_winning_shape && res.cost == c {
                    Verify::Ok
                } else {
                    Verify::Error
                }
            }
            None => Verify::Skip,
        };
        println!("verify: {:?}", verify);
        Ok(verify)
    }

    // 13枚の場合は和了牌ごとの評価を表示
    fn run_waits(&self) -> Res<Verify> {
        let waits = evaluate_waits(&self.tiles, self.seat_wind, self.round_wind)?;
        if waits.is_empty() {
            println!("not tenpai");
        }
        for w in &waits {
            println!(
                "wait: {}, yaku: {}, cost: {}",
                w.tile,
                vec_to_string(&w.result.yaku.iter().collect::<Vec<_>>()),
                w.result.cost
            );
        }
        Ok(Verify::Skip)
    }
}

#[test]
fn test_calculator() {
    let file = File::open("tests/pinfu_hands.txt").unwrap();
    let lines = io::BufReader::new(file).lines();
    let mut n_verified = 0;
    for exp in lines.map_while(Result::ok) {
        let e = exp.replace(' ', "");
        if e.is_empty() || e.starts_with('#') {
            // 空行とコメント行はスキップ
            println!("> {}", exp);
        } else {
            let mut calculator = Calculator::new(false);
            calculator.parse(&e).unwrap();
            let verify = calculator.run().unwrap();
            assert_ne!(Verify::Error, verify, "{}", exp);
            if verify == Verify::Ok {
                n_verified += 1;
            }
        }
    }
    assert!(n_verified > 0);
}

#[test]
fn test_calculator_parse_error() {
    let mut calculator = Calculator::new(false);
    assert!(calculator.parse("m234p456s789s99999/EE").is_err());
    let mut calculator = Calculator::new(false);
    assert!(calculator.parse("m234p456s78999z1/EX").is_err());
    let mut calculator = Calculator::new(false);
    assert!(calculator.parse("m234p456s78999z1/EE/abc").is_err());

    let mut calculator = Calculator::new(false);
    calculator.parse("m234p456s789z11/EE").unwrap();
    assert!(calculator.run().is_err()); // 11枚
}
