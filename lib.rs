//! # kdtree2d
//!
//! 单位正方形 [0,1]×[0,1] 内二维点集的 2d-tree 实现。
//!
//! - 插入 / 成员查询：沿交替的竖直/水平分割线下降
//! - 范围查询：返回落在轴对齐矩形内（含边界）的所有点
//! - 最近邻查询：按“同侧优先”的顺序遍历并用子树矩形剪枝
//!
//! `PointSet` 是基于有序集合的暴力实现，用作对照。
//!
//! ```rust
//! use kdtree2d::{KdTree, Point, Rectangle};
//!
//! let mut tree = KdTree::new();
//! tree.insert(Point::new(0.5, 0.5));
//! tree.insert(Point::new(0.25, 0.25));
//!
//! let hits: Vec<Point> = tree.range(&Rectangle::new(0.0, 0.0, 0.3, 0.3)).collect();
//! assert_eq!(hits, vec![Point::new(0.25, 0.25)]);
//! assert_eq!(tree.nearest(&Point::new(0.9, 0.9)), Some(Point::new(0.5, 0.5)));
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod kdtree;
pub mod output;
pub mod point_set;

// 重新导出主要的公共接口
pub use crate::config::KdTreeConfig;
pub use error::{KdTreeError, Result};
pub use kdtree::{KdTree, Point, Rectangle, SearchStats, Separator};
pub use point_set::PointSet;
