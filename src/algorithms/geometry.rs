/// 平面几何：浮点坐标点与两圆交点

use crate::error::{LocateError, LocateResult};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Sub};

/// 不相交时调整半径的阻尼系数（经验值）
pub const RADIUS_DAMPING: f64 = 0.6;

/// 平面上的浮点坐标点，也用作位移向量
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// 计算与另一点的欧几里得距离
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// 向量长度（到原点的距离）
    pub fn magnitude(&self) -> f64 {
        self.distance_to(&Point::default())
    }

    /// 两个分量均为有限值
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// 四舍五入到整数坐标（加 0.5 后向零截断）
    pub fn round(&self) -> (i32, i32) {
        ((self.x + 0.5) as i32, (self.y + 0.5) as i32)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// 计算两圆交点
///
/// 沿圆心连线做余弦定理分解。估计距离带噪声，圆经常不相交：
/// - 相离时两圆半径各增加 `0.6 × (d - (r1 + r2))`
/// - 内含时大圆缩小、小圆增大，各调整 `0.6 × (|r1 - r2| - d)`
///
/// 调整后按正常流程求交点。圆心重合时交点无定义，返回
/// [`LocateError::DegenerateCircles`]。
///
/// # 返回
/// - 两个交点（两圆相切时两点重合）
pub fn circle_intersection(
    c1: Point,
    mut r1: f64,
    c2: Point,
    mut r2: f64,
) -> LocateResult<(Point, Point)> {
    let dx = c2.x - c1.x;
    let dy = c2.y - c1.y;
    let d = (dx * dx + dy * dy).sqrt();

    if d > r1 + r2 {
        // 相离：两圆同时扩大，留少量重叠
        let delta = (d - (r1 + r2)) * RADIUS_DAMPING;
        r1 += delta;
        r2 += delta;
    }
    if d < (r1 - r2).abs() {
        // 内含：向相切方向收拢
        let delta = ((r1 - r2).abs() - d) * RADIUS_DAMPING;
        if r1 > r2 {
            r1 -= delta;
            r2 += delta;
        } else {
            r1 += delta;
            r2 -= delta;
        }
    }
    if d == 0.0 {
        return Err(LocateError::DegenerateCircles);
    }

    let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let xm = c1.x + a * dx / d;
    let ym = c1.y + a * dy / d;

    Ok((
        Point::new(xm + h * dy / d, ym - h * dx / d),
        Point::new(xm - h * dy / d, ym + h * dx / d),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(p: Point, x: f64, y: f64) {
        assert!((p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9, "{} != ({}, {})", p, x, y);
    }

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance_to(&p2), 5.0);
        assert_eq!(p2.magnitude(), 5.0);
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(-3.5, 1e300).is_finite());
        assert!(!Point::new(f64::NAN, 0.0).is_finite());
        assert!(!Point::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_point_round() {
        assert_eq!(Point::new(3.49, 3.5).round(), (3, 4));
        assert_eq!(Point::new(0.2, 10.7).round(), (0, 11));
        // 负数区间同样加 0.5 后向零截断
        assert_eq!(Point::new(-2.3, -0.7).round(), (-1, 0));
    }

    #[test]
    fn test_intersection_symmetric() {
        let (p1, p2) = circle_intersection(Point::new(0.0, 0.0), 6.0, Point::new(10.0, 0.0), 8.0).unwrap();
        assert_close(p1, 3.6, -4.8);
        assert_close(p2, 3.6, 4.8);
    }

    #[test]
    fn test_intersection_tangent() {
        let (p1, p2) = circle_intersection(Point::new(0.0, 0.0), 5.0, Point::new(10.0, 0.0), 5.0).unwrap();
        assert_close(p1, 5.0, 0.0);
        assert_close(p2, 5.0, 0.0);
    }

    #[test]
    fn test_intersection_far_apart_circles_are_inflated() {
        // 半径各增加 0.6 * 8 = 4.8
        let (p1, p2) = circle_intersection(Point::new(0.0, 0.0), 1.0, Point::new(10.0, 0.0), 1.0).unwrap();
        let h = (5.8_f64 * 5.8 - 25.0).sqrt();
        assert_close(p1, 5.0, -h);
        assert_close(p2, 5.0, h);
    }

    #[test]
    fn test_intersection_nested_circles_are_pulled_together() {
        // 半径分别调整为 5.8 与 6.2
        let (p1, p2) = circle_intersection(Point::new(0.0, 0.0), 10.0, Point::new(1.0, 0.0), 2.0).unwrap();
        let h = (5.8_f64 * 5.8 - 1.9 * 1.9).sqrt();
        assert!((p1.x + 1.9).abs() < 1e-9 && (p1.y + h).abs() < 1e-9);
        assert!((p2.x + 1.9).abs() < 1e-9 && (p2.y - h).abs() < 1e-9);
    }

    #[test]
    fn test_intersection_deeply_nested_never_nan() {
        let (p1, p2) = circle_intersection(Point::new(0.0, 0.0), 100.0, Point::new(0.5, 0.0), 1.0).unwrap();
        assert!(p1.x.is_finite() && p1.y.is_finite());
        assert!(p2.x.is_finite() && p2.y.is_finite());
    }

    #[test]
    fn test_intersection_coincident_circles() {
        let c = Point::new(4.0, -2.0);
        assert_eq!(circle_intersection(c, 3.0, c, 3.0), Err(LocateError::DegenerateCircles));
    }

    #[test]
    fn test_intersection_concentric_circles() {
        let c = Point::new(1.0, 1.0);
        assert_eq!(circle_intersection(c, 3.0, c, 7.0), Err(LocateError::DegenerateCircles));
    }
}
