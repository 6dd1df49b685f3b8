use gresgroups::alias::AliasTable;
use gresgroups::filter::JobDescriptor;

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum Outputs {
    Cli,
    Json,
}

pub trait Output {
    fn print_alias_table(&self, table: &AliasTable);

    /// Prints the job after a successful submission.
    fn print_job_submitted(&self, original: &JobDescriptor, job: &JobDescriptor);
    fn print_job_modify_allowed(&self, job: &JobDescriptor);

    fn print_error(&self, error: anyhow::Error);
}
