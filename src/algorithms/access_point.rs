/// 接入点测量数据定义

use crate::algorithms::geometry::Point;
use crate::algorithms::rssi_model::RSSIModel;
use crate::error::InputError;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// 单个接入点的测量：整数坐标与信号强度
///
/// JSON 格式: `{"x": int, "y": int, "rssi": int}`
///
/// 字段名不区分大小写，缺省字段或 `null` 值取 0，未知字段忽略
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessPointData {
    /// X 坐标
    pub x: i32,
    /// Y 坐标
    pub y: i32,
    /// 接收信号强度
    pub rssi: i32,
}

impl AccessPointData {
    /// 创建新的测量
    pub fn new(x: i32, y: i32, rssi: i32) -> Self {
        AccessPointData { x, y, rssi }
    }

    /// 从 JSON 数组解析测量列表
    ///
    /// 顶层 `null` 视为空列表，数组中的 `null` 元素视为全零测量
    pub fn parse_list(json: &str) -> Result<Vec<AccessPointData>, InputError> {
        let list: Option<Vec<Option<AccessPointData>>> = serde_json::from_str(json)?;
        Ok(list
            .unwrap_or_default()
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect())
    }

    /// 获取整数坐标
    pub fn coordinates(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// 接入点位置的浮点表示
    pub fn to_point(&self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }

    /// 根据 RSSI 估计到用户的距离
    pub fn distance_to_subscriber(&self) -> f64 {
        RSSIModel::rssi_to_distance(self.rssi)
    }
}

// ============================================================================
// JSON 解码
// ============================================================================

struct AccessPointVisitor;

impl<'de> Visitor<'de> for AccessPointVisitor {
    type Value = AccessPointData;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(r#"an object {"x": int, "y": int, "rssi": int}"#)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut ap = AccessPointData::default();
        while let Some(key) = map.next_key::<String>()? {
            let slot = if key.eq_ignore_ascii_case("x") {
                &mut ap.x
            } else if key.eq_ignore_ascii_case("y") {
                &mut ap.y
            } else if key.eq_ignore_ascii_case("rssi") {
                &mut ap.rssi
            } else {
                map.next_value::<IgnoredAny>()?;
                continue;
            };
            // 重复字段以最后一次出现为准，null 保留原值
            if let Some(value) = map.next_value::<Option<i32>>()? {
                *slot = value;
            }
        }
        Ok(ap)
    }
}

impl<'de> Deserialize<'de> for AccessPointData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(AccessPointVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_point_creation() {
        let ap = AccessPointData::new(10, -4, -60);
        assert_eq!(ap, AccessPointData { x: 10, y: -4, rssi: -60 });
        assert_eq!(ap.coordinates(), (10, -4));
        assert_eq!(ap.to_point(), Point::new(10.0, -4.0));
    }

    #[test]
    fn test_parse_list() {
        let aps = AccessPointData::parse_list(
            r#"[{"x": 0,"y": 0,"rssi": -50}, {"x": 10,"y": 10,"rssi": -60}]"#,
        )
        .unwrap();
        assert_eq!(aps, vec![AccessPointData::new(0, 0, -50), AccessPointData::new(10, 10, -60)]);
        assert!(AccessPointData::parse_list("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_list_missing_fields_default_to_zero() {
        let aps = AccessPointData::parse_list(r#"[{"x": 7, "rssi": -70, "ssid": "lab"}]"#).unwrap();
        assert_eq!(aps, vec![AccessPointData::new(7, 0, -70)]);
    }

    #[test]
    fn test_parse_list_keys_ignore_case() {
        let aps = AccessPointData::parse_list(
            r#"[{"X": 5, "Y": 6, "Rssi": -40}, {"x": 1, "y": 2, "RSSI": -55}, {"rSsI": -70, "Y": 3}]"#,
        )
        .unwrap();
        assert_eq!(
            aps,
            vec![
                AccessPointData::new(5, 6, -40),
                AccessPointData::new(1, 2, -55),
                AccessPointData::new(0, 3, -70),
            ]
        );
    }

    #[test]
    fn test_parse_list_repeated_key_last_wins() {
        let aps = AccessPointData::parse_list(r#"[{"x": 1, "X": 9, "y": 2, "rssi": -50}]"#).unwrap();
        assert_eq!(aps, vec![AccessPointData::new(9, 2, -50)]);
    }

    #[test]
    fn test_parse_list_null_values() {
        assert!(AccessPointData::parse_list("null").unwrap().is_empty());
        let aps = AccessPointData::parse_list(r#"[null, {"x": null, "y": 4, "rssi": -60}]"#).unwrap();
        assert_eq!(aps, vec![AccessPointData::default(), AccessPointData::new(0, 4, -60)]);
    }

    #[test]
    fn test_parse_list_rejects_bad_input() {
        assert!(AccessPointData::parse_list("not json").is_err());
        assert!(AccessPointData::parse_list(r#"[{"x": 0.5, "y": 0, "rssi": -50}]"#).is_err());
        assert!(AccessPointData::parse_list(r#"[{"X": "5", "y": 0, "rssi": -50}]"#).is_err());
        assert!(AccessPointData::parse_list(r#"[[0, 0, -50]]"#).is_err());
        assert!(AccessPointData::parse_list(r#"{"x": 0, "y": 0, "rssi": -50}"#).is_err());
    }

    #[test]
    fn test_distance_to_subscriber() {
        let near = AccessPointData::new(0, 0, -50);
        let far = AccessPointData::new(0, 0, -80);
        assert!(near.distance_to_subscriber() < far.distance_to_subscriber());
    }
}
