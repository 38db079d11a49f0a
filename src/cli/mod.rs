//! 命令行界面模块
//!
//! 交互式控制台的命令处理、补全和结果打印

mod commands;
mod completer;
mod printer;

pub use commands::{CommandResult, Console};
pub use completer::GraphCompleter;
pub use printer::{PrintMode, Printer};
