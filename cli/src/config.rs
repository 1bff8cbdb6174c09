use crate::commands::CommandLine;

pub struct Config {
    /// Address literal as given on the command line.
    pub addr: Option<String>,
    /// Glob matched against variant ids.
    pub method: String,
    pub list: bool,
    pub help: bool,
    /// Fixes the global entropy seed when present.
    pub seed: Option<u64>,
    pub quiet: bool,
    pub verbose: u8,
}

impl From<CommandLine> for Config {
    fn from(commands: CommandLine) -> Self {
        Self {
            addr: commands.addr,
            method: commands.method,
            list: commands.list,
            help: commands.help,
            seed: commands.seed,
            quiet: commands.quiet,
            verbose: commands.verbose,
        }
    }
}
