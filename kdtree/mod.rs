pub mod algorithms;
#[allow(clippy::module_inception)]
pub mod kdtree;
pub mod node;
pub mod point;
pub mod rectangle;

// 重新导出主要类型
pub use algorithms::nearest::SearchStats;
pub use algorithms::search::Range;
pub use kdtree::KdTree;
pub use node::Separator;
pub use point::Point;
pub use rectangle::Rectangle;
