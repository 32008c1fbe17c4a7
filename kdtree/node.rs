use super::point::Point;
use super::rectangle::Rectangle;
use derive_more::Display;
use serde::Serialize;

/// 节点的分割方向
///
/// 根节点总是 `Vertical`（按 x 分割），子节点方向与父节点相反。
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Separator {
    /// 竖直分割线，比较 x 坐标
    #[display(fmt = "vertical")]
    Vertical,
    /// 水平分割线，比较 y 坐标
    #[display(fmt = "horizontal")]
    Horizontal,
}

impl Separator {
    /// 子节点使用的分割方向
    pub fn opposite(self) -> Self {
        match self {
            Separator::Vertical => Separator::Horizontal,
            Separator::Horizontal => Separator::Vertical,
        }
    }

    /// 比较所用的坐标轴：0 为 x，1 为 y
    pub fn axis(self) -> usize {
        match self {
            Separator::Vertical => 0,
            Separator::Horizontal => 1,
        }
    }

    /// 点在本分割方向上的坐标
    pub fn coord(self, p: &Point) -> f64 {
        match self {
            Separator::Vertical => p.x(),
            Separator::Horizontal => p.y(),
        }
    }
}

/// 节点在树内部数组中的下标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// 2d-tree 节点，每个节点恰好存储一个点
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) point: Point,
    pub(crate) separator: Separator,
    /// 本节点（及其子树）负责的区域
    pub(crate) rect: Rectangle,
    /// 左/下子节点
    pub(crate) left: Option<NodeId>,
    /// 右/上子节点
    pub(crate) right: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(point: Point, separator: Separator, rect: Rectangle) -> Self {
        Node {
            point,
            separator,
            rect,
            left: None,
            right: None,
        }
    }

    /// 分割线所在的坐标值
    pub(crate) fn split_value(&self) -> f64 {
        self.separator.coord(&self.point)
    }

    /// 本节点是否严格位于 p 的右侧/上方
    ///
    /// 坐标相等时返回 false，相等的点总是进入右/上子树。
    pub(crate) fn is_right_of_or_above(&self, p: &Point) -> bool {
        self.split_value() > self.separator.coord(p)
    }

    /// p 所在一侧的子节点
    pub(crate) fn child_toward(&self, p: &Point) -> Option<NodeId> {
        if self.is_right_of_or_above(p) {
            self.left
        } else {
            self.right
        }
    }

    /// 左/下子节点的区域
    pub(crate) fn left_rect(&self) -> Rectangle {
        self.rect.split_low(self.separator.axis(), self.split_value())
    }

    /// 右/上子节点的区域
    pub(crate) fn right_rect(&self) -> Rectangle {
        self.rect.split_high(self.separator.axis(), self.split_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_alternates() {
        assert_eq!(Separator::Vertical.opposite(), Separator::Horizontal);
        assert_eq!(Separator::Horizontal.opposite(), Separator::Vertical);
        assert_eq!(Separator::Vertical.axis(), 0);
        assert_eq!(Separator::Horizontal.axis(), 1);
        assert_eq!(Separator::Vertical.to_string(), "vertical");

        let p = Point::new(0.2, 0.7);
        assert_eq!(Separator::Vertical.coord(&p), 0.2);
        assert_eq!(Separator::Horizontal.coord(&p), 0.7);
    }

    #[test]
    fn test_node_tie_break_routes_right() {
        let node = Node::new(Point::new(0.5, 0.5), Separator::Vertical, Rectangle::unit());

        assert!(node.is_right_of_or_above(&Point::new(0.4, 0.9)));
        // x 相等：不算“在右侧”，进入右子树
        assert!(!node.is_right_of_or_above(&Point::new(0.5, 0.1)));
        assert!(!node.is_right_of_or_above(&Point::new(0.6, 0.1)));
    }

    #[test]
    fn test_node_child_rects() {
        let node = Node::new(Point::new(0.3, 0.6), Separator::Horizontal, Rectangle::new(0.0, 0.0, 0.5, 1.0));

        assert_eq!(node.left_rect(), Rectangle::new(0.0, 0.0, 0.5, 0.6));
        assert_eq!(node.right_rect(), Rectangle::new(0.0, 0.6, 0.5, 1.0));
    }
}
