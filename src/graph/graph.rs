//! 无向图数据结构
//!
//! 基于邻接集合的内存无向图，顶点标识由调用方提供

use crate::error::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use rand::Rng;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// 无向图
///
/// 每条无向边在两个端点的邻接集合中各存一份；自环只在该顶点的
/// 邻接集合中存一份。不变式：
/// - 对称性：`u` 在 `v` 的邻接集合中当且仅当 `v` 在 `u` 的邻接集合中
/// - 引用完整性：邻接集合中的每个顶点都是图的顶点
/// - 操作失败时不产生部分修改
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// 顶点 -> 邻接集合
    vertices: IndexMap<V, IndexSet<V>>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            vertices: IndexMap::new(),
        }
    }
}

impl<V> Graph<V>
where
    V: Hash + Eq + Clone + Debug,
{
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点（初始邻接集合为空）
    ///
    /// 顶点已存在时返回 `VertexAlreadyExists`，不会清空其既有的边
    pub fn add_vertex(&mut self, v: V) -> Result<()> {
        if self.vertices.contains_key(&v) {
            return Err(Error::VertexAlreadyExists(format!("{:?}", v)));
        }

        debug!("添加顶点: {:?}", v);
        self.vertices.insert(v, IndexSet::new());
        Ok(())
    }

    /// 删除顶点，并断开其所有的边
    pub fn remove_vertex(&mut self, v: &V) -> Result<()> {
        let neighbors = self
            .vertices
            .get(v)
            .cloned()
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", v)))?;

        for v2 in &neighbors {
            self.disconnect(v, v2)?;
        }

        debug!("删除顶点: {:?}", v);
        self.vertices.shift_remove(v);
        Ok(())
    }

    /// 判断顶点是否存在
    pub fn contains(&self, v: &V) -> bool {
        self.vertices.contains_key(v)
    }

    // ==================== 边操作 ====================

    /// 连接两个顶点
    ///
    /// 边已存在时为幂等操作；自环只存一份。
    /// 任一端点不存在时返回 `VertexNotFound`，且图不被修改
    pub fn connect(&mut self, v1: &V, v2: &V) -> Result<()> {
        // 先验证两个端点都存在，保证失败时无部分修改
        if !self.vertices.contains_key(v1) {
            return Err(Error::VertexNotFound(format!("{:?}", v1)));
        }
        if !self.vertices.contains_key(v2) {
            return Err(Error::VertexNotFound(format!("{:?}", v2)));
        }

        debug!("连接: {:?} -- {:?}", v1, v2);
        if let Some(adj) = self.vertices.get_mut(v1) {
            adj.insert(v2.clone());
        }
        if v1 != v2 {
            if let Some(adj) = self.vertices.get_mut(v2) {
                adj.insert(v1.clone());
            }
        }
        Ok(())
    }

    /// 断开两个顶点
    ///
    /// 端点不存在时返回 `VertexNotFound`，边不存在时返回 `EdgeNotFound`
    pub fn disconnect(&mut self, v1: &V, v2: &V) -> Result<()> {
        if !self.vertices.contains_key(v1) {
            return Err(Error::VertexNotFound(format!("{:?}", v1)));
        }
        if !self.vertices.contains_key(v2) {
            return Err(Error::VertexNotFound(format!("{:?}", v2)));
        }

        let has_edge = self
            .vertices
            .get(v1)
            .map(|adj| adj.contains(v2))
            .unwrap_or(false);
        if !has_edge {
            return Err(Error::EdgeNotFound(format!("{:?} -- {:?}", v1, v2)));
        }

        debug!("断开: {:?} -- {:?}", v1, v2);
        if let Some(adj) = self.vertices.get_mut(v1) {
            adj.shift_remove(v2);
        }
        if v1 != v2 {
            if let Some(adj) = self.vertices.get_mut(v2) {
                adj.shift_remove(v1);
            }
        }
        Ok(())
    }

    // ==================== 基本查询 ====================

    /// 顶点数
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// 边数（自环算一条边）
    pub fn size(&self) -> usize {
        let mut total = 0;
        let mut loops = 0;
        for (v, adj) in &self.vertices {
            total += adj.len();
            if adj.contains(v) {
                loops += 1;
            }
        }
        // 普通边在度数和中贡献 2，自环贡献 1
        (total + loops) / 2
    }

    /// 所有顶点的快照集合
    pub fn vertices(&self) -> IndexSet<V> {
        self.vertices.keys().cloned().collect()
    }

    /// 从当前顶点集中均匀随机返回一个顶点
    pub fn any_vertex(&self) -> Result<&V> {
        if self.vertices.is_empty() {
            return Err(Error::EmptyGraph);
        }

        let idx = rand::thread_rng().gen_range(0..self.vertices.len());
        self.vertices
            .get_index(idx)
            .map(|(v, _)| v)
            .ok_or(Error::EmptyGraph)
    }

    /// 顶点的邻接集合快照
    pub fn adjacent(&self, v: &V) -> Result<IndexSet<V>> {
        self.vertices
            .get(v)
            .cloned()
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", v)))
    }

    /// 顶点的度数
    pub fn degree(&self, v: &V) -> Result<usize> {
        self.vertices
            .get(v)
            .map(|adj| adj.len())
            .ok_or_else(|| Error::VertexNotFound(format!("{:?}", v)))
    }

    // ==================== 内部访问 ====================

    /// 邻接集合的只读引用（遍历算法使用，避免快照拷贝）
    pub(crate) fn adjacency(&self, v: &V) -> Option<&IndexSet<V>> {
        self.vertices.get(v)
    }

    /// 遍历所有顶点及其邻接集合
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&V, &IndexSet<V>)> {
        self.vertices.iter()
    }
}
