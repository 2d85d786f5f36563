use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wishz", version)]
#[command(about = "Birthday greeting scheduler for the command line", long_about = None)]
pub struct Cli {
    /// Path to the birthday record file
    #[arg(short, long, default_value = "birthday.txt")]
    pub file: PathBuf,

    /// External program used to dispatch greeting messages
    #[arg(long, default_value = "whatsend")]
    pub dispatch_command: String,
}
