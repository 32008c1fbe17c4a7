//! 暴力实现的点集
//!
//! 基于 `BTreeSet` 的有序集合，提供与 [`KdTree`](crate::KdTree) 相同的操作，
//! 用作正确性对照。

use crate::kdtree::{Point, Rectangle};
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: BTreeSet<Point>,
}

/// x 在 [x_min, x_max] 内的所有点在有序集合中对应的区间
fn x_band(x_min: f64, x_max: f64) -> RangeInclusive<Point> {
    Point::bound(x_min, f64::NEG_INFINITY)..=Point::bound(x_max, f64::INFINITY)
}

impl PointSet {
    pub fn new() -> Self {
        PointSet {
            points: BTreeSet::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// 插入点，返回是否为新点
    pub fn insert(&mut self, point: Point) -> bool {
        self.points.insert(point)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    /// 按点的自然顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.iter()
    }

    /// 落在 query 内（含边界）的所有点，按点的自然顺序返回
    pub fn range(&self, query: &Rectangle) -> Vec<Point> {
        // 有序集合已按 x 截取，只需再过滤 y
        self.points
            .range(x_band(query.xmin(), query.xmax()))
            .filter(|p| query.contains(p))
            .copied()
            .collect()
    }

    /// 距 target 最近的点；空集返回 `None`
    ///
    /// 先用 target 在有序集合中的前驱/后继得到一个上界 d，
    /// 再只扫描 x 在 [target.x - d, target.x + d] 内的点。
    pub fn nearest(&self, target: &Point) -> Option<Point> {
        let prev = self.points.range(..=*target).next_back();
        let next = self.points.range(*target..).next();

        let mut best = match (prev, next) {
            (Some(a), Some(b)) => {
                if b.distance_squared_to(target) < a.distance_squared_to(target) {
                    *b
                } else {
                    *a
                }
            }
            (Some(p), None) | (None, Some(p)) => *p,
            (None, None) => return None,
        };
        let mut best_dist = best.distance_squared_to(target);
        let d = best_dist.sqrt();

        for candidate in self.points.range(x_band(target.x() - d, target.x() + d)) {
            let dist = candidate.distance_squared_to(target);
            if dist < best_dist {
                best = *candidate;
                best_dist = dist;
            }
        }
        Some(best)
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        PointSet {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> PointSet {
        [(0.5, 0.5), (0.25, 0.25), (0.75, 0.25), (0.25, 0.75)]
            .into_iter()
            .map(|(x, y)| Point::new(x, y))
            .collect()
    }

    #[test]
    fn test_point_set_basic() {
        let mut set = PointSet::new();
        assert!(set.is_empty());
        assert!(set.insert(Point::new(0.5, 0.5)));
        assert!(!set.insert(Point::new(0.5, 0.5)));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Point::new(0.5, 0.5)));
        assert!(!set.contains(&Point::new(0.5, 0.6)));
    }

    #[test]
    fn test_point_set_range() {
        let set = sample_set();
        assert_eq!(
            set.range(&Rectangle::new(0.0, 0.0, 1.0, 0.4)),
            vec![Point::new(0.25, 0.25), Point::new(0.75, 0.25)]
        );
        assert_eq!(set.range(&Rectangle::new(0.25, 0.0, 0.25, 1.0)).len(), 2);
        assert!(PointSet::new().range(&Rectangle::unit()).is_empty());
    }

    #[test]
    fn test_point_set_nearest() {
        let set = sample_set();
        assert_eq!(set.nearest(&Point::new(0.9, 0.9)), Some(Point::new(0.5, 0.5)));
        assert_eq!(set.nearest(&Point::new(0.3, 0.8)), Some(Point::new(0.25, 0.75)));
        assert_eq!(PointSet::new().nearest(&Point::new(0.5, 0.5)), None);
    }

    #[test]
    fn test_point_set_nearest_outside_x_order() {
        // 按 x 排序的前驱/后继都很远，真正最近的点 x 稍大但 y 相近
        let set: PointSet = [(0.5, 0.0), (0.5, 1.0), (0.52, 0.5)]
            .into_iter()
            .map(|(x, y)| Point::new(x, y))
            .collect();
        assert_eq!(set.nearest(&Point::new(0.5, 0.5)), Some(Point::new(0.52, 0.5)));
    }
}
