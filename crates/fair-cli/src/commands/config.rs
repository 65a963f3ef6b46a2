//! `fair config`: print the effective configuration.

use clap::Args;

use super::ConfigSource;
use crate::CliError;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub source: ConfigSource,
}

pub fn handle_config(args: ConfigArgs) -> Result<(), CliError> {
    let config = args.source.load()?;
    print!("{}", config.to_toml()?);
    Ok(())
}
