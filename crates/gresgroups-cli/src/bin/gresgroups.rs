use clap::{CommandFactory, FromArgMatches};

use gresgroups_cli::cli::{RootOptions, SubCommand};
use gresgroups_cli::commands::{
    command_config, command_modify, command_submit, make_global_settings,
};
use gresgroups_cli::setup::setup_logging;

fn main() {
    let matches = RootOptions::command().get_matches();
    let top_opts = match RootOptions::from_arg_matches(&matches) {
        Ok(opts) => opts,
        Err(error) => error.exit(),
    };

    setup_logging(top_opts.common.debug);

    let gsettings = make_global_settings(top_opts.common);

    let result = match top_opts.subcmd {
        SubCommand::Config => command_config(&gsettings),
        SubCommand::Submit(opts) => command_submit(&gsettings, opts),
        SubCommand::Modify(opts) => command_modify(&gsettings, opts),
    };

    if let Err(e) = result {
        gsettings.printer().print_error(e);
        std::process::exit(1);
    }
}
