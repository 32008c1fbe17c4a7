use super::super::kdtree::KdTree;
use super::super::node::{Node, Separator};
use super::super::point::Point;
use tracing::debug;

/// 插入与成员查询
impl KdTree {
    /// 插入点，已存在时不做任何修改
    ///
    /// # 返回值
    /// - `true` - 新插入
    /// - `false` - 点已存在
    pub fn insert(&mut self, point: Point) -> bool {
        // 空树：新点成为根，竖直分割，区域为单位正方形
        let Some(mut current) = self.root() else {
            self.push_node(Node::new(point, Separator::Vertical, self.root_rect()));
            return true;
        };

        // 下降到第一个空缺的子节点位置
        loop {
            let node = self.node(current);
            if node.point == point {
                debug!(%point, "duplicate point ignored");
                return false;
            }
            match node.child_toward(&point) {
                Some(next) => current = next,
                None => break,
            }
        }

        let parent = self.node(current);
        let goes_left = parent.is_right_of_or_above(&point);
        let separator = parent.separator.opposite();
        let rect = if goes_left {
            parent.left_rect()
        } else {
            parent.right_rect()
        };

        let id = self.push_node(Node::new(point, separator, rect));
        let parent = self.node_mut(current);
        if goes_left {
            parent.left = Some(id);
        } else {
            parent.right = Some(id);
        }
        true
    }

    /// 判断树中是否存在与 point 相等的点
    pub fn contains(&self, point: &Point) -> bool {
        let mut current = self.root();
        while let Some(id) = current {
            let node = self.node(id);
            if node.point == *point {
                return true;
            }
            current = node.child_toward(point);
        }
        false
    }
}
