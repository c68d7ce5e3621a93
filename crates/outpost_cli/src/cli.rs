use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "outpost",
    version,
    about = "Serves filesystem and shell tools on a remote SSH host over stdio"
)]
pub struct Cli {
    /// Remote target as host:path, e.g. myserver:/home/user/project
    pub target: String,
}
