//! 结果打印器
//!
//! 提供表格和 JSON 格式的结果输出

use prettytable::{format, row, Cell, Row, Table};
use serde::Serialize;
use serde_json::{Map, Value};

/// 图统计信息（JSON 输出用）
#[derive(Serialize)]
struct GraphStats {
    vertex_count: usize,
    edge_count: usize,
}

/// 打印模式
#[derive(Clone, Copy, PartialEq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// JSON 模式
    Json,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印查询结果
    pub fn print_result(
        &self,
        columns: &[String],
        rows: &[Vec<String>],
        execution_time_ms: u64,
    ) -> String {
        if self.mode == PrintMode::Json {
            return self.format_json(columns, rows);
        }

        if columns.is_empty() || rows.is_empty() {
            return format!("Empty set ({} ms)\n", execution_time_ms);
        }

        format!(
            "{}\n{} row(s) in set ({} ms)\n",
            self.format_table(columns, rows),
            rows.len(),
            execution_time_ms
        )
    }

    /// 表格格式
    fn format_table(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();

        // 设置表格格式
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        // 添加表头
        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        // 添加数据行
        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// JSON 格式（每行一个对象，列名作为键）
    fn format_json(&self, columns: &[String], rows: &[Vec<String>]) -> String {
        let objects: Vec<Value> = rows
            .iter()
            .map(|row_data| {
                let mut object = Map::new();
                for (i, col) in columns.iter().enumerate() {
                    let value = row_data.get(i).map(|s| s.as_str()).unwrap_or("");
                    object.insert(col.clone(), Value::String(value.to_string()));
                }
                Value::Object(object)
            })
            .collect();

        Value::Array(objects).to_string()
    }

    /// 打印统计信息
    pub fn print_stats(&self, order: usize, size: usize) -> String {
        if self.mode == PrintMode::Json {
            let stats = GraphStats {
                vertex_count: order,
                edge_count: size,
            };
            return serde_json::to_string(&stats).unwrap_or_default();
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", order.to_string()]);
        table.add_row(row!["Edge Count", size.to_string()]);
        table.to_string()
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
╔═══════════════════════════════════════════════════════════════╗
║                    MeshGraph CLI 命令帮助                     ║
╠═══════════════════════════════════════════════════════════════╣
║ 顶点与边:                                                     ║
║   addv <v>                 添加顶点                           ║
║   rmv <v>                  删除顶点及其所有边                 ║
║   connect <v1> <v2>        连接两个顶点（可自环）             ║
║   disconnect <v1> <v2>     断开两个顶点                       ║
╠═══════════════════════════════════════════════════════════════╣
║ 基本查询:                                                     ║
║   vertices                 列出所有顶点                       ║
║   adjacent <v>             列出顶点的邻接集合                 ║
║   degree <v>               顶点的度数                         ║
║   any                      随机返回一个顶点                   ║
║   stats, order, size       图统计信息                         ║
╠═══════════════════════════════════════════════════════════════╣
║ 结构查询:                                                     ║
║   regular                  是否为正则图                       ║
║   complete                 是否为完全图                       ║
║   connected                是否连通                           ║
║   tree                     是否为树                           ║
║   closure <v>              顶点的传递闭包                     ║
╠═══════════════════════════════════════════════════════════════╣
║ 其他:                                                         ║
║   help, h, ?               显示帮助                           ║
║   quit, exit, q            退出程序                           ║
╚═══════════════════════════════════════════════════════════════╝
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_output() {
        let printer = Printer::new(PrintMode::Table);
        let output = printer.print_result(
            &["顶点".to_string()],
            &[vec!["a".to_string()], vec!["b".to_string()]],
            0,
        );

        assert!(output.contains("a"));
        assert!(output.contains("2 row(s)"));
    }

    #[test]
    fn test_empty_set() {
        let printer = Printer::new(PrintMode::Table);
        let output = printer.print_result(&["顶点".to_string()], &[], 1);
        assert!(output.starts_with("Empty set"));
    }

    #[test]
    fn test_json_output() {
        let printer = Printer::new(PrintMode::Json);
        let output = printer.print_result(
            &["顶点".to_string()],
            &[vec!["a".to_string()], vec!["b".to_string()]],
            0,
        );

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["顶点"], "a");
    }

    #[test]
    fn test_json_empty() {
        let printer = Printer::new(PrintMode::Json);
        let output = printer.print_result(&["顶点".to_string()], &[], 0);
        assert_eq!(output, "[]");
    }
}
