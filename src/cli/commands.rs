//! 控制台命令处理
//!
//! 解析并执行交互式命令，操作一个以字符串为顶点标识的图

use std::time::Instant;

use crate::cli::printer::{PrintMode, Printer};
use crate::error::Result;
use crate::graph::Graph;

/// 控制台命令执行结果
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 交互式控制台
pub struct Console {
    graph: Graph<String>,
    printer: Printer,
}

impl Console {
    pub fn new(mode: PrintMode) -> Self {
        Self {
            graph: Graph::new(),
            printer: Printer::new(mode),
        }
    }

    /// 当前图的只读引用
    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    /// 解析并执行一条命令
    pub fn execute(&mut self, input: &str) -> CommandResult {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((&cmd, args)) = parts.split_first() else {
            return CommandResult::Continue;
        };

        let started = Instant::now();
        match cmd.to_lowercase().as_str() {
            "quit" | "exit" | "q" => CommandResult::Exit,

            "help" | "h" | "?" => CommandResult::Message(Printer::print_help()),

            "addv" => match args {
                [v] => self.mutate(|g| g.add_vertex(v.to_string()), format!("顶点已添加: {}", v)),
                _ => usage("addv <顶点>"),
            },

            "rmv" => match args {
                [v] => self.mutate(|g| g.remove_vertex(&v.to_string()), format!("顶点已删除: {}", v)),
                _ => usage("rmv <顶点>"),
            },

            "connect" => match args {
                [v1, v2] => self.mutate(
                    |g| g.connect(&v1.to_string(), &v2.to_string()),
                    format!("已连接: {} -- {}", v1, v2),
                ),
                _ => usage("connect <顶点1> <顶点2>"),
            },

            "disconnect" => match args {
                [v1, v2] => self.mutate(
                    |g| g.disconnect(&v1.to_string(), &v2.to_string()),
                    format!("已断开: {} -- {}", v1, v2),
                ),
                _ => usage("disconnect <顶点1> <顶点2>"),
            },

            "vertices" => {
                let rows: Vec<Vec<String>> =
                    self.graph.vertices().into_iter().map(|v| vec![v]).collect();
                CommandResult::Message(self.printer.print_result(
                    &["顶点".to_string()],
                    &rows,
                    elapsed_ms(started),
                ))
            }

            "adjacent" => match args {
                [v] => match self.graph.adjacent(&v.to_string()) {
                    Ok(adj) => {
                        let rows: Vec<Vec<String>> = adj.into_iter().map(|v| vec![v]).collect();
                        CommandResult::Message(self.printer.print_result(
                            &["邻接顶点".to_string()],
                            &rows,
                            elapsed_ms(started),
                        ))
                    }
                    Err(e) => CommandResult::Error(e.to_string()),
                },
                _ => usage("adjacent <顶点>"),
            },

            "degree" => match args {
                [v] => match self.graph.degree(&v.to_string()) {
                    Ok(degree) => CommandResult::Message(self.printer.print_result(
                        &["顶点".to_string(), "度数".to_string()],
                        &[vec![v.to_string(), degree.to_string()]],
                        elapsed_ms(started),
                    )),
                    Err(e) => CommandResult::Error(e.to_string()),
                },
                _ => usage("degree <顶点>"),
            },

            "any" => match self.graph.any_vertex() {
                Ok(v) => CommandResult::Message(v.clone()),
                Err(e) => CommandResult::Error(e.to_string()),
            },

            "stats" | "order" | "size" | "info" => CommandResult::Message(
                self.printer.print_stats(self.graph.order(), self.graph.size()),
            ),

            "regular" => self.query_bool("is_regular", self.graph.is_regular(), started),

            "complete" => self.query_bool("is_complete", Ok(self.graph.is_complete()), started),

            "connected" => self.query_bool("is_connected", self.graph.is_connected(), started),

            "tree" => self.query_bool("is_tree", self.graph.is_tree(), started),

            "closure" => match args {
                [v] => match self.graph.transitive_closure(&v.to_string()) {
                    Ok(closure) => {
                        let rows: Vec<Vec<String>> =
                            closure.into_iter().map(|v| vec![v]).collect();
                        CommandResult::Message(self.printer.print_result(
                            &["可达顶点".to_string()],
                            &rows,
                            elapsed_ms(started),
                        ))
                    }
                    Err(e) => CommandResult::Error(e.to_string()),
                },
                _ => usage("closure <顶点>"),
            },

            _ => CommandResult::Error(format!("未知命令: {}。输入 help 查看帮助。", cmd)),
        }
    }

    /// 执行一个修改操作并统一转换结果
    fn mutate<F>(&mut self, op: F, message: String) -> CommandResult
    where
        F: FnOnce(&mut Graph<String>) -> Result<()>,
    {
        match op(&mut self.graph) {
            Ok(()) => CommandResult::Message(message),
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }

    /// 打印布尔查询结果
    fn query_bool(&self, name: &str, result: Result<bool>, started: Instant) -> CommandResult {
        match result {
            Ok(value) => CommandResult::Message(self.printer.print_result(
                &["查询".to_string(), "结果".to_string()],
                &[vec![name.to_string(), value.to_string()]],
                elapsed_ms(started),
            )),
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }
}

fn usage(text: &str) -> CommandResult {
    CommandResult::Error(format!("用法: {}", text))
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
