use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use cli_table::ColorChoice;

use gresgroups::alias::{AliasTable, SharedAliasTable};
use gresgroups::filter::{GresGroupsFilter, JobDescriptor, TresDimension};

use crate::cli::{ColorPolicy, CommonOpts, TresOpts};
use crate::output::cli::CliOutput;
use crate::output::json::JsonOutput;
use crate::output::outputs::{Output, Outputs};

pub struct GlobalSettings {
    config_path: PathBuf,
    printer: Box<dyn Output>,
}

impl GlobalSettings {
    pub fn new(config_path: PathBuf, printer: Box<dyn Output>) -> Self {
        GlobalSettings {
            config_path,
            printer,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn printer(&self) -> &dyn Output {
        self.printer.as_ref()
    }
}

pub fn make_global_settings(opts: CommonOpts) -> GlobalSettings {
    let color_choice = match opts.colors {
        ColorPolicy::Always => ColorChoice::AlwaysAnsi,
        ColorPolicy::Auto => {
            if std::io::IsTerminal::is_terminal(&std::io::stdout()) {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
        ColorPolicy::Never => ColorChoice::Never,
    };

    // Setup colored
    match color_choice {
        ColorChoice::Always | ColorChoice::AlwaysAnsi => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        _ => {}
    }

    let printer: Box<dyn Output> = match opts.output_mode {
        Outputs::Cli => Box::new(CliOutput::new(color_choice)),
        Outputs::Json => Box::new(JsonOutput),
    };

    GlobalSettings::new(opts.config, printer)
}

fn load_table(gsettings: &GlobalSettings) -> anyhow::Result<AliasTable> {
    Ok(AliasTable::from_config_file(gsettings.config_path())?)
}

fn read_job(path: &Path) -> anyhow::Result<JobDescriptor> {
    let content = if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Cannot read job descriptor from stdin")?;
        content
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read job descriptor {}", path.display()))?
    };
    serde_json::from_str(&content).context("Invalid job descriptor")
}

/// Builds the job descriptor from an optional file and command line overrides.
pub fn job_from_opts(opts: TresOpts) -> anyhow::Result<JobDescriptor> {
    let TresOpts {
        job,
        tres_per_job,
        tres_per_node,
        tres_per_task,
        tres_per_socket,
    } = opts;

    let mut descriptor = match job {
        Some(path) => read_job(&path)?,
        None => JobDescriptor::default(),
    };
    for (dimension, value) in [
        (TresDimension::PerJob, tres_per_job),
        (TresDimension::PerNode, tres_per_node),
        (TresDimension::PerTask, tres_per_task),
        (TresDimension::PerSocket, tres_per_socket),
    ] {
        if value.is_some() {
            *descriptor.slot_mut(dimension) = value;
        }
    }
    Ok(descriptor)
}

pub fn command_config(gsettings: &GlobalSettings) -> anyhow::Result<()> {
    let table = load_table(gsettings)?;
    gsettings.printer().print_alias_table(&table);
    Ok(())
}

pub fn command_submit(gsettings: &GlobalSettings, opts: TresOpts) -> anyhow::Result<()> {
    let filter = GresGroupsFilter::new(SharedAliasTable::new(load_table(gsettings)?));
    let original = job_from_opts(opts)?;
    let mut job = original.clone();
    filter.job_submit(&mut job)?;
    gsettings.printer().print_job_submitted(&original, &job);
    Ok(())
}

pub fn command_modify(gsettings: &GlobalSettings, opts: TresOpts) -> anyhow::Result<()> {
    let filter = GresGroupsFilter::new(SharedAliasTable::new(load_table(gsettings)?));
    let job = job_from_opts(opts)?;
    filter.job_modify(&job)?;
    gsettings.printer().print_job_modify_allowed(&job);
    Ok(())
}
