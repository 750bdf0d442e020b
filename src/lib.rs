//! 基于接入点信号强度的平面定位
//!
//! 将 RSSI 换算为距离，再把各接入点的距离圆两两求交，
//! 从交点中选出聚集的一组取平均，得到用户坐标。

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod error;

pub use algorithms::{AccessPointData, LocationAlgorithm, LocationMethod, LocationResult, estimate_distance, estimate_position};
pub use error::{CliError, InputError, LocateError, LocateResult};
