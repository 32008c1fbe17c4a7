use super::super::kdtree::KdTree;
use super::super::node::NodeId;
use super::super::point::Point;
use super::super::rectangle::Rectangle;
use std::iter::FusedIterator;

/// 范围查询的惰性迭代器
///
/// 只能遍历一次；结果顺序取决于树的形状，不作保证。
#[derive(Debug, Clone)]
pub struct Range<'a> {
    tree: &'a KdTree,
    query: Rectangle,
    stack: Vec<NodeId>,
}

impl Iterator for Range<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while let Some(id) = self.stack.pop() {
            let node = self.tree.node(id);
            let axis = node.separator.axis();
            let split = node.split_value();

            // 只有查询矩形整体落在分割线另一侧时才跳过子树。
            // 先压右再压左，出栈顺序为先左后右。
            if split <= self.query.max_coord(axis) {
                self.stack.extend(node.right);
            }
            if split >= self.query.min_coord(axis) {
                self.stack.extend(node.left);
            }

            if self.query.contains(&node.point) {
                return Some(node.point);
            }
        }
        None
    }
}

impl FusedIterator for Range<'_> {}

/// 范围查询
impl KdTree {
    /// 返回落在 query 内（含边界）的所有点
    pub fn range(&self, query: &Rectangle) -> Range<'_> {
        Range {
            tree: self,
            query: *query,
            stack: self.root().into_iter().collect(),
        }
    }

    /// 统计落在 query 内的点数
    pub fn range_count(&self, query: &Rectangle) -> usize {
        self.range(query).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point_set::PointSet;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sample_tree() -> KdTree {
        let mut tree = KdTree::new();
        tree.insert(Point::new(0.5, 0.5));
        tree.insert(Point::new(0.25, 0.25));
        tree.insert(Point::new(0.75, 0.25));
        tree.insert(Point::new(0.25, 0.75));
        tree
    }

    fn sorted(mut points: Vec<Point>) -> Vec<Point> {
        points.sort();
        points
    }

    #[test]
    fn test_range_lower_half() {
        let tree = sample_tree();
        assert_eq!(tree.len(), 4);

        let results = sorted(tree.range(&Rectangle::new(0.0, 0.0, 1.0, 0.5)).collect());
        // (0.5, 0.5) 的 y 恰好在上边界上
        assert_eq!(
            results,
            vec![Point::new(0.25, 0.25), Point::new(0.5, 0.5), Point::new(0.75, 0.25)]
        );

        let results = sorted(tree.range(&Rectangle::new(0.0, 0.0, 1.0, 0.4)).collect());
        assert_eq!(results, vec![Point::new(0.25, 0.25), Point::new(0.75, 0.25)]);
    }

    #[test]
    fn test_range_empty_tree() {
        let tree = KdTree::new();
        assert_eq!(tree.range(&Rectangle::unit()).count(), 0);
    }

    #[test]
    fn test_range_whole_square_and_miss() {
        let tree = sample_tree();
        assert_eq!(tree.range_count(&Rectangle::unit()), 4);
        assert_eq!(tree.range_count(&Rectangle::new(0.8, 0.8, 0.9, 0.9)), 0);
    }

    #[test]
    fn test_range_degenerate_rect_on_split_line() {
        let mut tree = KdTree::new();
        tree.insert(Point::new(0.5, 0.5));
        tree.insert(Point::new(0.5, 0.2));
        tree.insert(Point::new(0.5, 0.9));
        tree.insert(Point::new(0.4, 0.2));

        // 宽度为 0 的矩形正好落在根节点的分割线上
        let results = sorted(tree.range(&Rectangle::new(0.5, 0.0, 0.5, 1.0)).collect());
        assert_eq!(
            results,
            vec![Point::new(0.5, 0.2), Point::new(0.5, 0.5), Point::new(0.5, 0.9)]
        );
    }

    #[test]
    fn test_range_iterator_is_fused() {
        let tree = sample_tree();
        let mut iter = tree.range(&Rectangle::new(0.0, 0.0, 0.3, 0.3));
        assert_eq!(iter.next(), Some(Point::new(0.25, 0.25)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_range_rect_reaching_outside_unit_square() {
        let mut rng = StdRng::seed_from_u64(271);
        let mut tree = KdTree::new();
        let mut brute = PointSet::new();
        for _ in 0..500 {
            let p = Point::new(rng.gen_range(0.0..=1.0), rng.gen_range(0.0..=1.0));
            tree.insert(p);
            brute.insert(p);
        }
        for corner in [(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)] {
            let p = Point::new(corner.0, corner.1);
            tree.insert(p);
            brute.insert(p);
        }

        for _ in 0..1000 {
            let (a, b) = (rng.gen_range(-3.0..4.0), rng.gen_range(-3.0..4.0));
            let (c, d) = (rng.gen_range(-3.0..4.0), rng.gen_range(-3.0..4.0));
            let query = Rectangle::new(f64::min(a, b), f64::min(c, d), f64::max(a, b), f64::max(c, d));

            let expected = sorted(brute.range(&query));
            let actual = sorted(tree.range(&query).collect());
            assert_eq!(actual, expected, "query {}", query);
        }

        assert_eq!(tree.range_count(&Rectangle::new(-2.0, -2.0, 3.0, 3.0)), tree.len());
        assert_eq!(tree.range_count(&Rectangle::new(1.5, -1.0, 2.5, 2.0)), 0);
        assert_eq!(tree.range_count(&Rectangle::new(1.0, 1.0, 2.0, 2.0)), 1);
    }

    #[test]
    fn test_range_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut tree = KdTree::new();
        let mut brute = PointSet::new();

        for _ in 0..2000 {
            let p = Point::new(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
            tree.insert(p);
            brute.insert(p);
        }
        // 网格点制造相等坐标
        for i in 0..=10 {
            let p = Point::new(i as f64 / 10.0, 0.5);
            tree.insert(p);
            brute.insert(p);
        }

        for _ in 0..200 {
            let (a, b) = (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
            let (c, d) = (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
            let query = Rectangle::new(f64::min(a, b), f64::min(c, d), f64::max(a, b), f64::max(c, d));

            let expected = sorted(brute.range(&query));
            let actual = sorted(tree.range(&query).collect());
            assert_eq!(actual, expected, "query {}", query);
        }

        let band = Rectangle::new(0.2, 0.5, 0.7, 0.5);
        assert_eq!(
            sorted(tree.range(&band).collect()),
            sorted(brute.range(&band))
        );
    }
}
