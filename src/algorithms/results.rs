/// 定位结果数据结构
///
/// 包含定位输出坐标以及得出该坐标的方式

use std::fmt;

/// 得出定位结果所用的方法
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationMethod {
    /// 只有一个接入点，直接返回其位置
    SingleAccessPoint,
    /// 两个接入点，返回信号较强者的位置
    StrongestAccessPoint,
    /// 三个及以上接入点，两两求圆交点后聚类平均
    PairwiseIntersection,
}

impl LocationMethod {
    pub fn name(&self) -> &'static str {
        match self {
            LocationMethod::SingleAccessPoint => "single_access_point",
            LocationMethod::StrongestAccessPoint => "strongest_access_point",
            LocationMethod::PairwiseIntersection => "pairwise_intersection",
        }
    }
}

impl fmt::Display for LocationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 定位结果
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationResult {
    /// X 坐标
    pub x: i32,
    /// Y 坐标
    pub y: i32,
    /// 使用的方法
    pub method: LocationMethod,
    /// 参与定位的接入点数量
    pub access_point_count: usize,
    /// 参与平均的接入点对数量（含初始对）
    pub contributing_pairs: usize,
    /// 因圆心重合被跳过的接入点对数量
    pub skipped_pairs: usize,
}

impl LocationResult {
    /// 由单个接入点位置直接得出的结果
    pub fn from_access_point(x: i32, y: i32, method: LocationMethod, access_point_count: usize) -> Self {
        LocationResult {
            x,
            y,
            method,
            access_point_count,
            contributing_pairs: 0,
            skipped_pairs: 0,
        }
    }

    /// 获取 2D 坐标
    pub fn xy(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// 获取详细描述
    pub fn detailed_description(&self) -> String {
        format!(
            "位置: ({}, {}), 方法: {}, 接入点数: {}, 有效交点对: {}, 跳过: {}",
            self.x,
            self.y,
            self.method,
            self.access_point_count,
            self.contributing_pairs,
            self.skipped_pairs
        )
    }
}

impl fmt::Display for LocationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subscriber coordinates x:{} y:{}", self.x, self.y)
    }
}
