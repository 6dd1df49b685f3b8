use std::path::PathBuf;

use clap::Parser;

use gresgroups::config::DEFAULT_CONFIG_FILE;

use crate::output::outputs::Outputs;

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum ColorPolicy {
    /// Use colors if the stdout is detected to be a terminal.
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

// Common CLI options
#[derive(Parser)]
pub struct CommonOpts {
    /// Path to the gres groups configuration
    #[arg(
        long,
        value_hint = clap::ValueHint::FilePath,
        global = true,
        env = "GRES_GROUPS_CONF",
        default_value = DEFAULT_CONFIG_FILE,
        help_heading("GLOBAL OPTIONS")
    )]
    pub config: PathBuf,

    /// Sets console color policy
    #[arg(
        long,
        default_value_t = ColorPolicy::Auto,
        value_enum,
        global = true,
        help_heading("GLOBAL OPTIONS"),
        hide_short_help(true)
    )]
    pub colors: ColorPolicy,

    /// Enables more detailed log output
    #[arg(long, global = true, help_heading("GLOBAL OPTIONS"))]
    pub debug: bool,

    /// How should the output of the command be formatted
    #[arg(
        long,
        env = "GRES_GROUPS_OUTPUT_MODE",
        default_value = "cli",
        value_enum,
        global = true,
        help_heading("GLOBAL OPTIONS")
    )]
    pub output_mode: Outputs,
}

#[derive(Parser)]
#[command(author, about, version)]
#[command(disable_help_subcommand(true))]
pub struct RootOptions {
    #[command(flatten)]
    pub common: CommonOpts,

    #[command(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Parser)]
pub enum SubCommand {
    /// Display the resolved gres groups configuration
    Config,
    /// Validate and expand resource requests of a new job
    Submit(TresOpts),
    /// Check whether resource requests of a running job may be changed
    Modify(TresOpts),
}

#[derive(Parser, Default)]
pub struct TresOpts {
    /// Read the job descriptor from a JSON file ("-" for stdin).
    /// Options below override the values from the file.
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub job: Option<PathBuf>,

    /// Resources requested for the whole job
    #[arg(long)]
    pub tres_per_job: Option<String>,

    /// Resources requested for each node
    #[arg(long)]
    pub tres_per_node: Option<String>,

    /// Resources requested for each task
    #[arg(long)]
    pub tres_per_task: Option<String>,

    /// Resources requested for each socket
    #[arg(long)]
    pub tres_per_socket: Option<String>,
}
