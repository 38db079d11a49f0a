//! 图核心模块
//!
//! 定义无向图的核心数据结构与基本操作

mod graph;

pub use graph::Graph;
