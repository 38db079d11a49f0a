//! MeshGraph CLI 工具
//!
//! 交互式命令行界面

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use meshgraph::cli::{CommandResult, Console, GraphCompleter, PrintMode};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "meshgraph-cli")]
#[command(about = "MeshGraph 命令行工具")]
struct Args {
    /// 执行单个命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 以 JSON 格式输出查询结果
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mode = if args.json {
        PrintMode::Json
    } else {
        PrintMode::Table
    };
    let mut console = Console::new(mode);

    // 单个命令模式
    if let Some(command) = args.execute {
        match console.execute(&command) {
            CommandResult::Message(msg) => println!("{}", msg),
            CommandResult::Error(msg) => {
                eprintln!("{}", format!("错误: {}", msg).red());
                std::process::exit(1);
            }
            _ => {}
        }
        return Ok(());
    }

    // 交互模式
    println!("MeshGraph CLI - 内存无向图分析工具 v{}", meshgraph::VERSION);
    println!("===========================================");
    println!("输入 'help' 查看命令列表，'quit' 退出\n");

    let mut rl: Editor<GraphCompleter, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(GraphCompleter::new()));

    loop {
        match rl.readline("meshgraph> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match console.execute(line) {
                    CommandResult::Continue => {}
                    CommandResult::Exit => break,
                    CommandResult::Message(msg) => println!("{}", msg),
                    CommandResult::Error(msg) => {
                        println!("{}", format!("错误: {}", msg).red())
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("读取输入失败: {}", e);
                break;
            }
        }
    }

    println!("再见！");
    Ok(())
}
