//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 控制台命令列表
const COMMANDS: &[&str] = &[
    // 顶点与边
    "addv", "rmv", "connect", "disconnect",
    // 基本查询
    "vertices", "adjacent", "degree", "any", "stats", "order", "size",
    // 结构查询
    "regular", "complete", "connected", "tree", "closure",
    // 其他
    "help", "quit", "exit",
];

/// MeshGraph CLI 补全器
#[derive(Default)]
pub struct GraphCompleter;

impl GraphCompleter {
    pub fn new() -> Self {
        Self
    }
}

impl Completer for GraphCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];

        // 只补全第一个单词（命令名）
        if line_to_cursor.contains(' ') {
            return Ok((pos, vec![]));
        }

        let completions: Vec<Pair> = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line_to_cursor))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();

        Ok((0, completions))
    }
}

impl Hinter for GraphCompleter {
    type Hint = String;
}

impl Highlighter for GraphCompleter {}

impl Validator for GraphCompleter {}

impl Helper for GraphCompleter {}
