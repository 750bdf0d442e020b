/// 定位算法模块
///
/// 该模块提供基于接入点信号强度的平面定位：
/// - RSSI 与距离的相互换算（固定的对数距离路径损耗模型）
/// - 两圆交点计算（含不相交时的半径调整）
/// - 两两交点聚类平均的位置估计

pub mod access_point;
pub mod geometry;
pub mod location_algorithms;
pub mod results;
pub mod rssi_model;

pub use access_point::*;
pub use geometry::*;
pub use location_algorithms::*;
pub use results::*;
pub use rssi_model::*;
