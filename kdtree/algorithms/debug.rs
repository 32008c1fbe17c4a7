use super::super::kdtree::KdTree;
use super::super::node::{NodeId, Separator};
use super::super::point::Point;
use super::super::rectangle::Rectangle;
use crate::error::{KdTreeError, Result};
use std::fmt::Write;

/// 每个节点允许的坐标区间：下界闭合，上界开放
#[derive(Debug, Clone, Copy)]
struct Bounds {
    lo: [f64; 2],
    hi: [f64; 2],
}

/// 2d-tree 调试功能实现
impl KdTree {
    /// 树高（空树为 0，只有根时为 1）
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root().map(|id| (id, 1)).into_iter().collect();

        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(id);
            stack.extend(node.left.map(|child| (child, depth + 1)));
            stack.extend(node.right.map(|child| (child, depth + 1)));
        }
        height
    }

    /// 检查结构不变量
    ///
    /// - 根节点竖直分割，区域为单位正方形
    /// - 子节点分割方向与父节点相反
    /// - 子节点区域等于父节点区域在父节点的点处切开的对应一半
    /// - 左/下子树的点在分割轴上严格小于分割值，右/上子树的点不小于分割值
    /// - 从根可达的节点数等于 `len()`
    pub fn check_invariants(&self) -> Result<()> {
        let Some(root) = self.root() else {
            return Ok(());
        };

        let root_node = self.node(root);
        if root_node.separator != Separator::Vertical {
            return Err(KdTreeError::Invariant("root separator is not vertical".to_string()));
        }
        if root_node.rect != self.root_rect() {
            return Err(KdTreeError::Invariant(format!(
                "root rectangle is {}, expected the unit square",
                root_node.rect
            )));
        }

        let unbounded = Bounds {
            lo: [f64::NEG_INFINITY; 2],
            hi: [f64::INFINITY; 2],
        };
        let mut reachable = 0;
        let mut stack = vec![(root, unbounded)];

        while let Some((id, bounds)) = stack.pop() {
            reachable += 1;
            let node = self.node(id);

            for (axis, c) in [node.point.x(), node.point.y()].into_iter().enumerate() {
                if c < bounds.lo[axis] || c >= bounds.hi[axis] {
                    return Err(KdTreeError::Invariant(format!(
                        "point {} lies on the wrong side of an ancestor split",
                        node.point
                    )));
                }
            }

            let axis = node.separator.axis();
            let split = node.split_value();

            if let Some(left) = node.left {
                let child = self.node(left);
                check_child(node.separator, child.separator, &node.left_rect(), &child.rect, &child.point)?;
                let mut child_bounds = bounds;
                child_bounds.hi[axis] = child_bounds.hi[axis].min(split);
                stack.push((left, child_bounds));
            }
            if let Some(right) = node.right {
                let child = self.node(right);
                check_child(node.separator, child.separator, &node.right_rect(), &child.rect, &child.point)?;
                let mut child_bounds = bounds;
                child_bounds.lo[axis] = child_bounds.lo[axis].max(split);
                stack.push((right, child_bounds));
            }
        }

        if reachable != self.len() {
            return Err(KdTreeError::Invariant(format!(
                "{} nodes reachable from the root, but the tree holds {}",
                reachable,
                self.len()
            )));
        }
        Ok(())
    }

    /// 以缩进文本形式输出树结构，最多展开到 max_depth 层
    pub fn dump_structure(&self, max_depth: usize) -> String {
        let mut out = String::new();
        let Some(root) = self.root() else {
            out.push_str("Empty tree\n");
            return out;
        };

        // (节点, 深度, 标签)
        let mut stack = vec![(root, 0usize, "root")];
        while let Some((id, depth, label)) = stack.pop() {
            let node = self.node(id);
            let indent = "  ".repeat(depth);
            let _ = writeln!(
                out,
                "{}{} {} {} rect={}",
                indent, label, node.point, node.separator, node.rect
            );
            if depth + 1 >= max_depth {
                if node.left.is_some() || node.right.is_some() {
                    let _ = writeln!(out, "{}  ...", indent);
                }
                continue;
            }
            if let Some(right) = node.right {
                stack.push((right, depth + 1, "R"));
            }
            if let Some(left) = node.left {
                stack.push((left, depth + 1, "L"));
            }
        }
        out
    }
}

fn check_child(
    parent_separator: Separator,
    child_separator: Separator,
    expected_rect: &Rectangle,
    child_rect: &Rectangle,
    child_point: &Point,
) -> Result<()> {
    if child_separator != parent_separator.opposite() {
        return Err(KdTreeError::Invariant(format!(
            "node {} does not alternate separator",
            child_point
        )));
    }
    if child_rect != expected_rect {
        return Err(KdTreeError::Invariant(format!(
            "node {} has rectangle {}, expected {}",
            child_point, child_rect, expected_rect
        )));
    }
    Ok(())
}
