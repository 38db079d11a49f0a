//! 结构分析查询
//!
//! 正则图、完全图、连通性、树判定与传递闭包。
//! 遍历全部使用显式栈而非递归，深链图上不会栈溢出

use crate::error::Result;
use crate::graph::Graph;
use indexmap::IndexSet;
use std::fmt::Debug;
use std::hash::Hash;

impl<V> Graph<V>
where
    V: Hash + Eq + Clone + Debug,
{
    /// 判断是否为正则图（所有顶点度数相同）
    ///
    /// 空图上传播 `EmptyGraph`
    pub fn is_regular(&self) -> Result<bool> {
        let reference = self.degree(self.any_vertex()?)?;
        Ok(self.iter().all(|(_, adj)| adj.len() == reference))
    }

    /// 判断是否为完全图（每对不同顶点之间都有边）
    ///
    /// 空图和单顶点图上为真（对零个/零度顶点的检查自动成立）
    pub fn is_complete(&self) -> bool {
        if self.order() == 0 {
            return true;
        }

        let target = self.order() - 1;
        self.iter().all(|(_, adj)| adj.len() == target)
    }

    /// 判断是否连通（任意顶点的传递闭包等于顶点集）
    ///
    /// 空图上传播 `EmptyGraph`
    pub fn is_connected(&self) -> Result<bool> {
        let start = self.any_vertex()?.clone();
        let closure = self.transitive_closure(&start)?;
        Ok(closure == self.vertices())
    }

    /// 判断是否为树（连通且无环）
    ///
    /// 空图上传播 `EmptyGraph`
    pub fn is_tree(&self) -> Result<bool> {
        let start = self.any_vertex()?.clone();
        Ok(self.is_connected()? && !self.has_cycle_from(&start))
    }

    /// 从 `v` 出发可达的所有顶点（包含 `v` 自身）
    ///
    /// 访问集合在整个遍历期间持续累积，有环图上也能终止
    pub fn transitive_closure(&self, v: &V) -> Result<IndexSet<V>> {
        // 起点必须存在
        self.degree(v)?;

        let mut visited: IndexSet<V> = IndexSet::new();
        let mut stack = vec![v.clone()];

        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            for neighbor in self.adjacency(&current).into_iter().flatten() {
                if !visited.contains(neighbor) {
                    stack.push(neighbor.clone());
                }
            }
        }

        Ok(visited)
    }

    /// 检测从 `start` 出发是否能到达某个环
    ///
    /// 深度优先遍历，记录每个顶点的直接前驱：回到前驱的边不算环，
    /// 到达其他已访问顶点即为环。自环在前驱判断之前单独检测
    fn has_cycle_from(&self, start: &V) -> bool {
        let mut visited: IndexSet<V> = IndexSet::new();
        let mut stack: Vec<(V, Option<V>)> = vec![(start.clone(), None)];

        while let Some((current, predecessor)) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            for neighbor in self.adjacency(&current).into_iter().flatten() {
                if neighbor == &current {
                    // 自环
                    return true;
                }
                if Some(neighbor) == predecessor.as_ref() {
                    continue;
                }
                if visited.contains(neighbor) {
                    return true;
                }
                stack.push((neighbor.clone(), Some(current.clone())));
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn graph_with(vertices: &[u32], edges: &[(u32, u32)]) -> Graph<u32> {
        let mut g = Graph::new();
        for &v in vertices {
            g.add_vertex(v).unwrap();
        }
        for &(a, b) in edges {
            g.connect(&a, &b).unwrap();
        }
        g
    }

    #[test]
    fn test_path_is_tree() {
        // 1 -- 2 -- 3
        let g = graph_with(&[1, 2, 3], &[(1, 2), (2, 3)]);

        assert!(g.is_tree().unwrap());
        assert!(g.is_connected().unwrap());
        assert_eq!(g.degree(&2).unwrap(), 2);
    }

    #[test]
    fn test_triangle_is_not_tree() {
        let g = graph_with(&[1, 2, 3], &[(1, 2), (2, 3), (1, 3)]);

        assert!(!g.is_tree().unwrap());
        assert!(g.is_connected().unwrap());
    }

    #[test]
    fn test_disconnected() {
        let g = graph_with(&[1, 2], &[]);

        assert!(!g.is_connected().unwrap());
        assert!(!g.is_tree().unwrap());

        let closure = g.transitive_closure(&1).unwrap();
        assert_eq!(closure.len(), 1);
        assert!(closure.contains(&1));
    }

    #[test]
    fn test_self_loop_is_cycle() {
        let g = graph_with(&[1], &[(1, 1)]);

        assert_eq!(g.degree(&1).unwrap(), 1);
        assert!(g.is_connected().unwrap());
        assert!(!g.is_tree().unwrap());
    }

    #[test]
    fn test_complete_and_regular() {
        let g = graph_with(&[1, 2, 3], &[(1, 2), (2, 3), (1, 3)]);

        assert!(g.is_complete());
        assert!(g.is_regular().unwrap());
        assert_eq!(g.degree(&1).unwrap(), 2);
    }

    #[test]
    fn test_complete_vacuous_cases() {
        let empty: Graph<u32> = Graph::new();
        assert!(empty.is_complete());

        let single = graph_with(&[1], &[]);
        assert!(single.is_complete());

        let pair = graph_with(&[1, 2], &[]);
        assert!(!pair.is_complete());
    }

    #[test]
    fn test_regular_but_not_complete() {
        // 四顶点环：度数均为 2，但 4-1=3
        let g = graph_with(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4), (4, 1)]);

        assert!(g.is_regular().unwrap());
        assert!(!g.is_complete());
    }

    #[test]
    fn test_not_regular() {
        let g = graph_with(&[1, 2, 3], &[(1, 2), (2, 3)]);
        assert!(!g.is_regular().unwrap());
    }

    #[test]
    fn test_empty_graph_errors() {
        let g: Graph<u32> = Graph::new();

        assert!(matches!(g.is_regular(), Err(Error::EmptyGraph)));
        assert!(matches!(g.is_connected(), Err(Error::EmptyGraph)));
        assert!(matches!(g.is_tree(), Err(Error::EmptyGraph)));
    }

    #[test]
    fn test_closure_reflexive() {
        let g = graph_with(&[1, 2, 3], &[(1, 2)]);

        for v in g.vertices() {
            assert!(g.transitive_closure(&v).unwrap().contains(&v));
        }
    }

    #[test]
    fn test_closure_on_cycle_terminates() {
        let g = graph_with(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 1), (3, 4)]);

        let closure = g.transitive_closure(&1).unwrap();
        assert_eq!(closure, g.vertices());
    }

    #[test]
    fn test_closure_missing_vertex() {
        let g = graph_with(&[1], &[]);
        assert!(matches!(
            g.transitive_closure(&99),
            Err(Error::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_tree_edge_count_formula() {
        // 树当且仅当连通且恰有 n-1 条边
        let tree = graph_with(&[1, 2, 3, 4], &[(1, 2), (1, 3), (3, 4)]);
        assert!(tree.is_tree().unwrap());
        assert_eq!(tree.size(), tree.order() - 1);

        let cyclic = graph_with(&[1, 2, 3, 4], &[(1, 2), (1, 3), (3, 4), (2, 4)]);
        assert!(!cyclic.is_tree().unwrap());
        assert_eq!(cyclic.size(), cyclic.order());
    }

    #[test]
    fn test_cycle_via_shared_neighbor() {
        // 两条路径汇聚到同一顶点：1-2-4, 1-3-4
        let g = graph_with(&[1, 2, 3, 4], &[(1, 2), (1, 3), (2, 4), (3, 4)]);

        assert!(g.is_connected().unwrap());
        assert!(!g.is_tree().unwrap());
    }

    #[test]
    fn test_deep_chain_no_overflow() {
        // 长链上显式栈遍历不会递归溢出
        let n = 100_000u32;
        let mut g = Graph::new();
        for v in 0..n {
            g.add_vertex(v).unwrap();
        }
        for v in 0..n - 1 {
            g.connect(&v, &(v + 1)).unwrap();
        }

        assert!(g.is_tree().unwrap());
        assert_eq!(g.transitive_closure(&0).unwrap().len(), n as usize);
    }
}
