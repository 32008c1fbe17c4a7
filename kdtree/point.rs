use crate::error::{KdTreeError, Result};
use derive_more::Display;
use serde::Serialize;
use std::cmp::Ordering;

/// 平面上的点（不可变值类型）
///
/// 排序规则：先比较 x，再比较 y。坐标必须是有限值，
/// 因此比较结果总是确定的，`-0.0` 与 `0.0` 视为相等。
#[derive(Debug, Display, Clone, Copy, Serialize)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// 创建新的点，坐标非有限值时 panic
    pub fn new(x: f64, y: f64) -> Self {
        assert!(x.is_finite() && y.is_finite(), "Point coordinates must be finite");
        Point { x, y }
    }

    /// 创建新的点，坐标非有限值时返回错误
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(KdTreeError::InvalidArgument(format!(
                "point coordinates must be finite, got ({}, {})",
                x, y
            )));
        }
        Ok(Point { x, y })
    }

    /// 有序集合范围查询用的哨兵点，允许无穷坐标
    pub(crate) fn bound(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// 欧氏距离
    pub fn distance_to(&self, other: &Point) -> f64 {
        self.distance_squared_to(other).sqrt()
    }

    /// 欧氏距离的平方
    pub fn distance_squared_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

fn cmp_coord(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_coord(self.x, other.x).then_with(|| cmp_coord(self.y, other.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_ordering() {
        let a = Point::new(0.1, 0.9);
        let b = Point::new(0.2, 0.0);
        let c = Point::new(0.2, 0.5);

        assert!(a < b);
        assert!(b < c);
        assert_eq!(b.cmp(&b), Ordering::Equal);
        assert_eq!(Point::new(0.0, 0.5), Point::new(-0.0, 0.5));
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.3, 0.4);
        assert!((a.distance_to(&b) - 0.5).abs() < 1e-12);
        assert!((a.distance_squared_to(&b) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_point_try_new_rejects_nan() {
        assert!(Point::try_new(f64::NAN, 0.0).is_err());
        assert!(Point::try_new(0.0, f64::INFINITY).is_err());
        assert_eq!(Point::try_new(0.25, 0.75).unwrap(), Point::new(0.25, 0.75));
    }

    #[test]
    #[should_panic(expected = "finite")]
    fn test_point_new_panics_on_nan() {
        Point::new(f64::NAN, 0.5);
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(0.5, 0.25).to_string(), "(0.5, 0.25)");
    }
}
