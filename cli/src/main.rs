mod commands;
mod form_file;
mod terminal;

use commands::{CommandLine, Commands, check, submit};
use fieldguard_common::config::{Config, GateConfig};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        quiet: commands.quiet,
        gate: GateConfig::default(),
    };

    match commands.command {
        Commands::Check { kind, value, required } => {
            check::check(kind.into(), &value, required, &cfg).map(|_| ())
        }
        Commands::Submit { form, action } => submit::submit(&form, action, &cfg),
    }
}
