use std::time::Duration;

use mrsort_sat::{config::Config, types::err::ConfigError};

use crate::args::ModelArgs;

/// A config from the arguments shared by subcommands, with a time limit if one was given.
pub fn config_from_args(
    args: &ModelArgs,
    time_limit: Option<Duration>,
) -> Result<Config, ConfigError> {
    let mut the_config = Config::default();

    the_config.max_mark.set(args.max_mark)?;
    the_config.max_subjects.set(args.max_subjects)?;
    the_config.structural_weight.set(args.structural_weight)?;
    the_config.dataset_weight.set(args.dataset_weight)?;

    if let Some(limit) = time_limit {
        the_config.time_limit.set(limit)?;
    }

    the_config.validate()?;
    Ok(the_config)
}
