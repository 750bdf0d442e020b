/// 定位算法实现
///
/// 按接入点数量分三种情况：
/// - 无接入点：数据不足
/// - 一到两个接入点：返回最近（信号最强）接入点的位置
/// - 三个及以上：两两求距离圆交点，选出聚集的一组交点取平均

use crate::algorithms::{AccessPointData, LocationMethod, LocationResult, Point, circle_intersection};
use crate::error::{LocateError, LocateResult};
use std::mem;
use tracing::{debug, trace, warn};

// ============================================================================
// 交点聚类
// ============================================================================

/// 两个候选点及其累计位移
///
/// 每个接入点对给出两个交点，分别匹配到距离较近的候选点上，
/// 匹配偏差累加到对应的位移向量
#[derive(Clone, Debug)]
struct IntersectionClusters {
    p1: Point,
    p2: Point,
    p1d: Point,
    p2d: Point,
    /// 参与平均的接入点对数量，初始对计 1 但不贡献位移
    count: usize,
}

impl IntersectionClusters {
    fn seed(p1: Point, p2: Point) -> Self {
        IntersectionClusters {
            p1,
            p2,
            p1d: Point::default(),
            p2d: Point::default(),
            count: 1,
        }
    }

    /// 合并一个接入点对的两个交点
    fn vote(&mut self, mut p3: Point, mut p4: Point) {
        // 让 p1 成为离新交点更近的候选点
        let p1_nearest = self.p1.distance_to(&p3).min(self.p1.distance_to(&p4));
        let p2_nearest = self.p2.distance_to(&p3).min(self.p2.distance_to(&p4));
        if p1_nearest > p2_nearest {
            mem::swap(&mut self.p1, &mut self.p2);
            mem::swap(&mut self.p1d, &mut self.p2d);
        }
        // 让 p3 成为离 p1 更近的交点
        if self.p1.distance_to(&p3) > self.p1.distance_to(&p4) {
            mem::swap(&mut p3, &mut p4);
        }

        self.p1d += p3 - self.p1;
        self.p2d += p4 - self.p2;
        self.count += 1;
    }

    /// 选出交点密集的一侧并给出平均位置
    fn resolve(mut self) -> Point {
        // 比较累计位移的原始长度，未按 count 归一化；两侧共用同一个 count
        if self.p1d.magnitude() > self.p2d.magnitude() {
            mem::swap(&mut self.p1, &mut self.p2);
            mem::swap(&mut self.p1d, &mut self.p2d);
        }
        debug!(
            anchor = %self.p1,
            drift = self.p1d.magnitude(),
            rejected_drift = self.p2d.magnitude(),
            pairs = self.count,
            "选定密集交点簇"
        );
        self.p1 + self.p1d / self.count as f64
    }
}

// ============================================================================
// 定位算法集合
// ============================================================================

/// 定位算法集合
pub struct LocationAlgorithm;

impl LocationAlgorithm {
    /// 根据接入点测量估计用户位置
    ///
    /// # 参数
    /// - `access_points`: 接入点测量列表，顺序影响交点对的处理顺序
    ///
    /// # 返回
    /// - 定位结果，或 [`LocateError::InsufficientData`] 如果列表为空
    pub fn locate(access_points: &[AccessPointData]) -> LocateResult<LocationResult> {
        let count = access_points.len();
        match access_points {
            [] => Err(LocateError::InsufficientData),
            [only] => {
                debug!(x = only.x, y = only.y, "仅一个接入点，返回其位置");
                Ok(LocationResult::from_access_point(
                    only.x,
                    only.y,
                    LocationMethod::SingleAccessPoint,
                    count,
                ))
            }
            [first, second] => {
                // 信号相同时取第一个
                let closest = if second.rssi > first.rssi { second } else { first };
                debug!(x = closest.x, y = closest.y, rssi = closest.rssi, "两个接入点，返回信号较强者");
                Ok(LocationResult::from_access_point(
                    closest.x,
                    closest.y,
                    LocationMethod::StrongestAccessPoint,
                    count,
                ))
            }
            _ => Ok(Self::_pairwise_intersection_impl(access_points)),
        }
    }

    // ========================================================================
    // 私有实现函数
    // ========================================================================

    fn _pairwise_intersection_impl(access_points: &[AccessPointData]) -> LocationResult {
        let circles: Vec<(Point, f64)> = access_points
            .iter()
            .map(|ap| (ap.to_point(), ap.distance_to_subscriber()))
            .collect();

        let mut clusters: Option<IntersectionClusters> = None;
        let mut skipped_pairs = 0;

        for i1 in 0..circles.len() - 1 {
            let (c1, r1) = circles[i1];
            for i2 in (i1 + 1)..circles.len() {
                let (c2, r2) = circles[i2];
                let (p3, p4) = match circle_intersection(c1, r1, c2, r2) {
                    Ok(points) => points,
                    Err(err) => {
                        trace!(i1, i2, %err, "跳过接入点对");
                        skipped_pairs += 1;
                        continue;
                    }
                };
                trace!(i1, i2, p3 = %p3, p4 = %p4, "接入点对交点");

                match clusters.as_mut() {
                    Some(clusters) => clusters.vote(p3, p4),
                    None => clusters = Some(IntersectionClusters::seed(p3, p4)),
                }
            }
        }

        let (x, y, contributing_pairs) = match clusters {
            Some(clusters) => {
                let pairs = clusters.count;
                let position = clusters.resolve();
                if !position.is_finite() {
                    // 非有限值按 `as i32` 饱和转换，结果不可信
                    warn!(%position, pairs, "交点平均位置不是有限值");
                }
                let (x, y) = position.round();
                (x, y, pairs)
            }
            None => {
                // 所有接入点位置和信号完全相同
                let first = &access_points[0];
                (first.x, first.y, 0)
            }
        };

        debug!(x, y, contributing_pairs, skipped_pairs, "交点聚类定位完成");

        LocationResult {
            x,
            y,
            method: LocationMethod::PairwiseIntersection,
            access_point_count: access_points.len(),
            contributing_pairs,
            skipped_pairs,
        }
    }
}

/// 估计用户坐标
pub fn estimate_position(access_points: &[AccessPointData]) -> LocateResult<(i32, i32)> {
    LocationAlgorithm::locate(access_points).map(|result| result.xy())
}
