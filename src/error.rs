/// 定位错误类型

use thiserror::Error;

/// 定位核心的结果类型
pub type LocateResult<T> = Result<T, LocateError>;

/// 定位核心可能产生的错误
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateError {
    /// 没有任何接入点测量，无法给出坐标
    #[error("insufficient data: at least one access point measurement is required")]
    InsufficientData,

    /// 两个距离圆同心（含完全重合），交点不唯一
    ///
    /// 只在圆交点计算内部出现，位置估计会跳过该接入点对
    #[error("degenerate circles: centers coincide, intersection is undefined")]
    DegenerateCircles,
}

/// 命令行输入解析错误
#[derive(Error, Debug)]
pub enum InputError {
    /// 缺少测量数据参数
    #[error("Argument required")]
    MissingArgument,

    /// 测量数据不是合法的 JSON 数组
    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// 命令行运行错误
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Locate(#[from] LocateError),
}
