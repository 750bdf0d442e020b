use clap::Parser;

/// Estimate a subscriber position from access point signal strengths
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// JSON array of {"x": int, "y": int, "rssi": int}
    #[arg(value_name = "MEASUREMENTS")]
    pub measurements: Option<String>,

    /// Extra arguments after the measurements are ignored
    #[arg(hide = true, trailing_var_arg = true)]
    pub ignored: Vec<String>,

    /// Verbose logging (DEBUG level)
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}
