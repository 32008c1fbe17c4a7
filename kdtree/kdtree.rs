use super::node::{Node, NodeId};
use super::point::Point;
use super::rectangle::Rectangle;

const ROOT: NodeId = NodeId(0);

/// 2d-tree 主结构
///
/// 节点按插入顺序存放在数组中，父子关系用下标表示；第一个节点就是根。
/// 节点创建后只会被挂上子节点，不会移动或删除。
#[derive(Debug, Clone, Default)]
pub struct KdTree {
    nodes: Vec<Node>,
}

impl KdTree {
    /// 创建空树
    pub fn new() -> Self {
        KdTree { nodes: Vec::new() }
    }

    /// 检查树是否为空
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 已存储的不同点的数量
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// 根节点负责的区域，总是单位正方形
    pub fn root_rect(&self) -> Rectangle {
        Rectangle::unit()
    }

    /// 按插入顺序遍历所有点
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.nodes.iter().map(|node| &node.point)
    }

    /// 内部方法：根节点下标
    pub(crate) fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(ROOT)
        }
    }

    /// 内部方法：按下标取节点
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// 内部方法：按下标取节点（可变）
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// 内部方法：追加节点并返回其下标
    pub(crate) fn push_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
}

impl FromIterator<Point> for KdTree {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut tree = KdTree::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Point> for KdTree {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for point in iter {
            self.insert(point);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kdtree_creation() {
        let tree = KdTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.root().is_none());
        assert_eq!(tree.root_rect(), Rectangle::unit());
    }

    #[test]
    fn test_kdtree_from_iter() {
        let points = vec![
            Point::new(0.5, 0.5),
            Point::new(0.25, 0.25),
            Point::new(0.5, 0.5),
            Point::new(0.75, 0.25),
        ];
        let tree: KdTree = points.into_iter().collect();

        assert_eq!(tree.len(), 3);
        let stored: Vec<Point> = tree.iter().copied().collect();
        assert_eq!(
            stored,
            vec![Point::new(0.5, 0.5), Point::new(0.25, 0.25), Point::new(0.75, 0.25)]
        );
    }
}
