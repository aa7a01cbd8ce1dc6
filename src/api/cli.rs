use clap::Parser;

pub struct Cli;

impl Cli {
    pub fn run(&self) -> CliProgram {
        CliProgram::parse()
    }
}

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliProgram {
    #[arg(
        long,
        help = "Print what would be replaced without writing the catalog (default: false)",
        default_value_t = false
    )]
    pub dry_run: bool,

    #[arg(short, long, help = "Log every replaced link")]
    pub verbose: bool,

    #[arg(
        long,
        short,
        value_name = "FILE_PATH",
        help = "Custom path to config file"
    )]
    pub config: Option<String>,
}
