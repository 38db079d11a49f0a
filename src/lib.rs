//! MeshGraph - 内存无向图分析库
//!
//! 基于邻接集合的无向图实现，支持：
//! - 顶点与边的增删改查
//! - 结构查询（正则图、完全图、连通性、树判定）
//! - 基于深度优先遍历的传递闭包

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::Graph;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
