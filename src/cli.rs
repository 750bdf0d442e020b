/// 命令行前端
///
/// 读取 JSON 格式的接入点测量，调用定位算法并生成输出文本

use crate::algorithms::{AccessPointData, LocationAlgorithm, LocationResult, RSSIModel};
use crate::error::{CliError, InputError};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// 路径最后一段（同时兼容 `/` 与 `\` 分隔符）
static EXECUTABLE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^/\\]*$").expect("executable name pattern is valid"));

/// 从程序路径中提取可执行文件名
pub fn executable_name(path: &str) -> &str {
    EXECUTABLE_NAME.find(path).map_or(path, |m| m.as_str())
}

/// 使用说明
pub fn usage(executable: &str) -> String {
    format!(
        "Accepts single argument - json array of {{\"x\": int, \"y\": int, \"rssi\": int}}\n\
         Usage: {} \"[{{\\\"x\\\": 0,\\\"y\\\": 0,\\\"rssi\\\": -50}}, {{\\\"x\\\": 10,\\\"y\\\": 10,\\\"rssi\\\": -60}}, {{\\\"x\\\": 30,\\\"y\\\": 40,\\\"rssi\\\": -80}}]\"",
        executable
    )
}

/// 解析命令行参数中的测量列表
pub fn read_measurements(argument: Option<&str>) -> Result<Vec<AccessPointData>, InputError> {
    let json = argument.ok_or(InputError::MissingArgument)?;
    AccessPointData::parse_list(json)
}

/// 解析参数并计算定位结果
pub fn run(argument: Option<&str>) -> Result<LocationResult, CliError> {
    let access_points = read_measurements(argument)?;
    debug!(count = access_points.len(), model = %RSSIModel, "已读取接入点测量");
    Ok(LocationAlgorithm::locate(&access_points)?)
}

/// 错误输出文本
///
/// 输入错误附带使用说明，定位失败只给出提示
pub fn error_message(err: &CliError, executable: &str) -> String {
    match err {
        CliError::Input(err) => format!("Error: {}\n{}", err, usage(executable)),
        CliError::Locate(_) => "Error while calculating subscriber position".to_string(),
    }
}
