// mainから直接呼び出すアプリケーションの動作モード(calc, query)のモジュール

mod calculator;
mod query;

pub use calculator::CalculatorApp;
pub use query::QueryApp;
