use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "phishguard-server",
    version,
    about = "Phishing URL verdict service"
)]
pub(crate) struct Args {
    /// Optional TOML config; flags below override its values.
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
    #[arg(long)]
    pub(crate) listen_addr: Option<String>,
    #[arg(long)]
    pub(crate) model_path: Option<PathBuf>,
    #[arg(long)]
    pub(crate) log_dir: Option<PathBuf>,
    #[arg(long, default_value_t = false)]
    pub(crate) log_to_stderr: bool,
}
