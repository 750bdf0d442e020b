/// RSSI 到距离转换模型
///
/// 固定参数的对数距离路径损耗模型：
///
/// ```text
/// RSSI(d) = K - 20*log10(F) - N*log10(d)
/// ```
///
/// 参数是针对部署环境标定的常量，不提供运行时调整

use std::fmt;

/// 载波频率 F（MHz）
pub const CARRIER_FREQUENCY: f64 = 2400.0;

/// 路径损耗指数 N
pub const PATH_LOSS_EXPONENT: f64 = 27.0;

/// 标定偏移 K
pub const CALIBRATION_OFFSET: f64 = 28.0;

/// 参考单位距离，小于该距离按单位距离计算 RSSI
pub const REFERENCE_DISTANCE: f64 = 1.0;

/// 对数距离路径损耗模型
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RSSIModel;

impl RSSIModel {
    /// 频率相关的损耗项 20*log10(F)
    fn frequency_loss() -> f64 {
        20.0 * CARRIER_FREQUENCY.log10()
    }

    /// 根据 RSSI 计算距离
    ///
    /// 反解模型: d = 10^((K - RSSI - 20*log10(F)) / N)
    ///
    /// 对任意 RSSI 都有定义，结果恒为正数
    pub fn rssi_to_distance(rssi: i32) -> f64 {
        let exponent = (CALIBRATION_OFFSET - rssi as f64 - Self::frequency_loss()) / PATH_LOSS_EXPONENT;
        10_f64.powf(exponent)
    }

    /// 根据距离计算 RSSI（用于合成测试数据）
    ///
    /// 距离先截断到不小于参考单位距离，损耗值向零取整后取负
    pub fn distance_to_rssi(distance: f64) -> i32 {
        let distance = distance.max(REFERENCE_DISTANCE);
        let loss = Self::frequency_loss() + PATH_LOSS_EXPONENT * distance.log10() - CALIBRATION_OFFSET;
        -(loss as i32)
    }

    /// 获取模型描述
    pub fn description(&self) -> String {
        format!(
            "RSSI模型 [log_distance] - F={:.0} MHz, N={:.1}, K={:.1}",
            CARRIER_FREQUENCY, PATH_LOSS_EXPONENT, CALIBRATION_OFFSET
        )
    }
}

impl fmt::Display for RSSIModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// 估计接入点到用户的距离
pub fn estimate_distance(rssi: i32) -> f64 {
    RSSIModel::rssi_to_distance(rssi)
}

/// 由真实距离推算 RSSI
pub fn calculate_rssi(distance: f64) -> i32 {
    RSSIModel::distance_to_rssi(distance)
}
