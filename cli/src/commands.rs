use clap::{ArgAction, CommandFactory, Parser};

pub const SEED_ENV: &str = "IPFUSCATOR_SEED";

const EXAMPLES: &str = "\
Examples:
  ipfuscator -l
  ipfuscator 127.0.0.1
  ipfuscator -m \"Rand*\" 127.0.0.1
  ipfuscator -m \"*Padding\" 127.0.0.1
  ipfuscator -m \"HexWithPadding\" 127.0.0.1";

#[derive(Parser, Debug)]
#[command(name = "ipfuscator")]
#[command(about = "Generate alternative IPv4 address representations.")]
#[command(after_help = EXAMPLES)]
#[command(disable_help_flag = true)]
pub struct CommandLine {
    /// IPv4 address (or IPv4-mapped IPv6 address) to obfuscate
    pub addr: Option<String>,

    /// Glob selecting the conversion methods to run
    #[arg(short, long, value_name = "METHOD", default_value = "*")]
    pub method: String,

    /// Display the list of available conversion methods
    #[arg(short, long)]
    pub list: bool,

    /// Fix the random seed used by the padding and random-base methods
    #[arg(short, long, env = SEED_ENV)]
    pub seed: Option<u64>,

    /// Do not print the banner
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase diagnostic output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print help
    #[arg(short, long)]
    pub help: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}
