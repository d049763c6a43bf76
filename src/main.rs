#![warn(rust_2018_idioms)]

use clap::{Parser, Subcommand};

use pinfu_calc::app;

#[derive(Debug, Parser)]
#[command(name = "pinfu_calc", version, about = "平和判定と和了点計算")]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Calculator (手牌表記の計算モード)
    Calc {
        /// 手牌表記 (例: m234p456s55789/EE/1500)
        #[arg(conflicts_with = "file", required_unless_present = "file")]
        expression: Option<String>,
        /// 1行1表記のファイルを読み込む
        #[arg(short, long)]
        file: Option<String>,
        /// 分解と役判定の詳細を表示
        #[arg(short, long)]
        detail: bool,
    },
    /// Query (標準入力のJSON行を評価するモード)
    Query {
        /// 評価結果をすべて出力
        #[arg(long)]
        full: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let res = match cli.mode {
        Mode::Calc {
            expression,
            file,
            detail,
        } => app::CalculatorApp::new(expression, file, detail).run(),
        Mode::Query { full } => app::QueryApp::new(full).run(),
    };

    if let Err(e) = res {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
