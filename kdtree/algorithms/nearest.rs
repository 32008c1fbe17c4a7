//! 最近邻查询
//!
//! 从根节点的点作为初始候选开始深度优先遍历：
//!
//! 1. 若节点区域到查询点的距离不小于当前最优距离，跳过整棵子树
//! 2. 否则用节点的点挑战当前最优
//! 3. 先访问与查询点同侧的子节点，再访问另一侧
//!
//! 同侧优先能尽早收紧最优距离，使另一侧在多数情况下被第 1 步剪掉。
//! 剪枝判断在节点出栈时进行，使用的总是当时最新的最优距离。

use super::super::kdtree::KdTree;
use super::super::point::Point;
use serde::Serialize;
use tracing::trace;

/// 一次最近邻查询的遍历统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// 实际检查过的节点数
    pub visited: usize,
    /// 因区域距离不够近而整棵跳过的子树数
    pub pruned: usize,
}

impl KdTree {
    /// 距 target 最近的点；空树返回 `None`
    ///
    /// 多个点距离相同时返回遍历中先遇到的那个。
    pub fn nearest(&self, target: &Point) -> Option<Point> {
        self.nearest_with_stats(target).0
    }

    /// 同 [`KdTree::nearest`]，并返回遍历统计
    pub fn nearest_with_stats(&self, target: &Point) -> (Option<Point>, SearchStats) {
        let mut stats = SearchStats::default();
        let Some(root) = self.root() else {
            return (None, stats);
        };

        let mut best = self.node(root).point;
        let mut best_dist = best.distance_squared_to(target);
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.rect.distance_squared_to(target) >= best_dist {
                stats.pruned += 1;
                continue;
            }
            stats.visited += 1;

            let dist = node.point.distance_squared_to(target);
            if dist < best_dist {
                best = node.point;
                best_dist = dist;
            }

            let (near, far) = if node.is_right_of_or_above(target) {
                (node.left, node.right)
            } else {
                (node.right, node.left)
            };
            // 后进先出：远侧先入栈
            stack.extend(far);
            stack.extend(near);
        }

        trace!(
            %target,
            nearest = %best,
            visited = stats.visited,
            pruned = stats.pruned,
            "nearest neighbour search finished"
        );
        (Some(best), stats)
    }
}
