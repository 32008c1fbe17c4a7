//! 点数据文件解析
//!
//! 文件格式：每行一个点，`x y` 两个以空白分隔的浮点数；
//! 空行和以 `#` 开头的注释行被忽略。

use crate::error::{KdTreeError, Result};
use crate::kdtree::{Point, Rectangle};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// 从任意 `BufRead` 解析点列表
pub fn parse_points<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut points = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = content.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(KdTreeError::Parse {
                line: line_no,
                message: format!("expected 2 coordinates, found {}", tokens.len()),
            });
        }

        let x = parse_coord(tokens[0], line_no)?;
        let y = parse_coord(tokens[1], line_no)?;
        let point = Point::try_new(x, y).map_err(|e| KdTreeError::Parse {
            line: line_no,
            message: e.to_string(),
        })?;
        points.push(point);
    }

    debug!(count = points.len(), "parsed points");
    Ok(points)
}

/// 从字符串解析点列表
pub fn parse_str(input: &str) -> Result<Vec<Point>> {
    parse_points(input.as_bytes())
}

/// 从文件加载点列表
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let points = parse_points(BufReader::new(file))?;
    info!(path = %path.display(), count = points.len(), "loaded points");
    Ok(points)
}

/// 检查所有点都在单位正方形内
///
/// 树本身不校验定义域，这里供调用方在加载时按需拒绝越界数据。
pub fn check_domain(points: &[Point]) -> Result<()> {
    let domain = Rectangle::unit();
    match points.iter().find(|p| !domain.contains(p)) {
        Some(p) => Err(KdTreeError::InvalidArgument(format!(
            "point {} lies outside the unit square",
            p
        ))),
        None => Ok(()),
    }
}

fn parse_coord(token: &str, line: usize) -> Result<f64> {
    token.parse::<f64>().map_err(|e| KdTreeError::Parse {
        line,
        message: format!("invalid coordinate '{}': {}", token, e),
    })
}
