use crate::kdtree::{Point, Rectangle, SearchStats};
use colored::*;
use serde_json::json;

/// 查询结果的输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// 范围查询结果
    pub fn format_range(&self, query: &Rectangle, points: &[Point]) -> String {
        match self.format {
            OutputFormat::Json => json!({
                "query": query,
                "count": points.len(),
                "points": points,
            })
            .to_string(),
            OutputFormat::Text => {
                if points.is_empty() {
                    return format!("{} in {}", "(no points)".yellow(), query);
                }
                let mut result = format!(
                    "{} point(s) in {}\n",
                    points.len().to_string().cyan(),
                    query
                );
                for (i, point) in points.iter().enumerate() {
                    result.push_str(&format!("{}) {}\n", (i + 1).to_string().blue(), point));
                }
                result.trim_end().to_string()
            }
        }
    }

    /// 最近邻查询结果
    pub fn format_nearest(&self, target: &Point, nearest: Option<Point>, stats: &SearchStats) -> String {
        match self.format {
            OutputFormat::Json => json!({
                "target": target,
                "nearest": nearest,
                "distance": nearest.map(|p| p.distance_to(target)),
                "stats": stats,
            })
            .to_string(),
            OutputFormat::Text => match nearest {
                Some(p) => format!(
                    "{} (distance {:.6}, visited {}, pruned {})",
                    p.to_string().green(),
                    p.distance_to(target),
                    stats.visited,
                    stats.pruned
                ),
                None => "(empty tree)".red().to_string(),
            },
        }
    }

    /// 树的统计信息
    pub fn format_stats(&self, size: usize, height: usize) -> String {
        match self.format {
            OutputFormat::Json => json!({ "size": size, "height": height }).to_string(),
            OutputFormat::Text => format!(
                "size:   {}\nheight: {}",
                size.to_string().cyan(),
                height.to_string().cyan()
            ),
        }
    }

    pub fn format_error(&self, err: &str) -> String {
        match self.format {
            OutputFormat::Json => json!({ "error": err }).to_string(),
            OutputFormat::Text => format!("(error) {}", err.red()),
        }
    }
}
