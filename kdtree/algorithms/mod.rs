// 2d-tree 算法模块
//
// 按功能拆分：
// - insert: 插入与成员查询
// - search: 范围查询
// - nearest: 最近邻查询
// - debug: 树高、结构不变量检查与结构打印

pub mod debug;
pub mod insert;
pub mod nearest;
pub mod search;
