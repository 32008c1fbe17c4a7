use super::point::Point;
use crate::error::{KdTreeError, Result};
use serde::Serialize;
use std::fmt;

/// 轴对齐矩形 [xmin, xmax] × [ymin, ymax]，边界闭合
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rectangle {
    min: [f64; 2], // [x_min, y_min]
    max: [f64; 2], // [x_max, y_max]
}

impl Rectangle {
    /// 创建新的矩形
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        assert!(
            [x_min, y_min, x_max, y_max].iter().all(|v| v.is_finite()),
            "Rectangle bounds must be finite"
        );
        assert!(x_min <= x_max && y_min <= y_max, "Invalid rectangle bounds");
        Rectangle {
            min: [x_min, y_min],
            max: [x_max, y_max],
        }
    }

    /// 创建新的矩形，边界非法时返回错误
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        if ![x_min, y_min, x_max, y_max].iter().all(|v| v.is_finite()) {
            return Err(KdTreeError::InvalidArgument(
                "rectangle bounds must be finite".to_string(),
            ));
        }
        if x_min > x_max || y_min > y_max {
            return Err(KdTreeError::InvalidArgument(format!(
                "invalid rectangle bounds: [{}, {}] x [{}, {}]",
                x_min, x_max, y_min, y_max
            )));
        }
        Ok(Rectangle {
            min: [x_min, y_min],
            max: [x_max, y_max],
        })
    }

    /// 单位正方形 [0,1] × [0,1]，即根节点负责的区域
    pub fn unit() -> Self {
        Rectangle {
            min: [0.0, 0.0],
            max: [1.0, 1.0],
        }
    }

    pub fn xmin(&self) -> f64 {
        self.min[0]
    }

    pub fn ymin(&self) -> f64 {
        self.min[1]
    }

    pub fn xmax(&self) -> f64 {
        self.max[0]
    }

    pub fn ymax(&self) -> f64 {
        self.max[1]
    }

    /// 指定轴上的下界
    pub fn min_coord(&self, axis: usize) -> f64 {
        self.min[axis]
    }

    /// 指定轴上的上界
    pub fn max_coord(&self, axis: usize) -> f64 {
        self.max[axis]
    }

    pub fn width(&self) -> f64 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f64 {
        self.max[1] - self.min[1]
    }

    /// 判断点是否在矩形内（含边界）
    pub fn contains(&self, p: &Point) -> bool {
        self.min[0] <= p.x() && p.x() <= self.max[0] && self.min[1] <= p.y() && p.y() <= self.max[1]
    }

    /// 点到矩形的欧氏距离，点在矩形内或边界上时为 0
    pub fn distance_to(&self, p: &Point) -> f64 {
        self.distance_squared_to(p).sqrt()
    }

    /// 点到矩形距离的平方
    pub fn distance_squared_to(&self, p: &Point) -> f64 {
        let dx = gap(p.x(), self.min[0], self.max[0]);
        let dy = gap(p.y(), self.min[1], self.max[1]);
        dx * dx + dy * dy
    }

    /// 沿 axis 在 value 处切开，保留较小一侧（上界替换为 value）
    ///
    /// 不做合法性检查：单位正方形之外的点会得到上下界颠倒的矩形。
    pub(crate) fn split_low(&self, axis: usize, value: f64) -> Rectangle {
        let mut rect = *self;
        rect.max[axis] = value;
        rect
    }

    /// 沿 axis 在 value 处切开，保留较大一侧（下界替换为 value）
    pub(crate) fn split_high(&self, axis: usize, value: f64) -> Rectangle {
        let mut rect = *self;
        rect.min[axis] = value;
        rect
    }
}

/// 坐标 c 到闭区间 [lo, hi] 的距离
fn gap(c: f64, lo: f64, hi: f64) -> f64 {
    if c < lo {
        lo - c
    } else if c > hi {
        c - hi
    } else {
        0.0
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.min[0], self.max[0], self.min[1], self.max[1]
        )
    }
}
