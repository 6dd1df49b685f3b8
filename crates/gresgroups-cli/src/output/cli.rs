use cli_table::format::{Justify, Separator};
use cli_table::{Cell, CellStruct, ColorChoice, Style, Table, TableStruct, print_stdout};
use colored::Colorize;

use gresgroups::alias::AliasTable;
use gresgroups::filter::{JobDescriptor, TresDimension};

use crate::output::error_kind;
use crate::output::outputs::Output;

pub struct CliOutput {
    color_policy: ColorChoice,
}

impl CliOutput {
    pub fn new(color_policy: ColorChoice) -> CliOutput {
        CliOutput { color_policy }
    }

    fn print_horizontal_table(&self, rows: Vec<Vec<CellStruct>>, header: Vec<CellStruct>) {
        let table = rows
            .table()
            .separator(
                Separator::builder()
                    .title(Some(Default::default()))
                    .column(Some(Default::default()))
                    .build(),
            )
            .title(header);
        self.print_table(table);
    }

    fn print_table(&self, table: TableStruct) {
        let table = table.color_choice(self.color_policy);
        if let Err(e) = print_stdout(table) {
            log::error!("Cannot print table to stdout: {e:?}");
        }
    }
}

pub(crate) fn alias_table_rows(table: &AliasTable) -> Vec<Vec<String>> {
    table
        .resources()
        .map(|alias| {
            vec![
                alias.resource.to_string(),
                alias.family.to_string(),
                alias.group.to_string(),
                alias.group_family.to_string(),
            ]
        })
        .collect()
}

/// One row per dimension that is present in either of the jobs.
pub(crate) fn job_rows(original: &JobDescriptor, job: &JobDescriptor) -> Vec<Vec<String>> {
    TresDimension::ALL
        .iter()
        .filter_map(|&dimension| {
            let before = original.slot(dimension);
            let after = job.slot(dimension);
            if before.is_none() && after.is_none() {
                return None;
            }
            Some(vec![
                dimension.to_string(),
                before.unwrap_or_default().to_string(),
                after.unwrap_or_default().to_string(),
            ])
        })
        .collect()
}

fn into_cells(rows: Vec<Vec<String>>) -> Vec<Vec<CellStruct>> {
    rows.into_iter()
        .map(|row| row.into_iter().map(|value| value.cell()).collect())
        .collect()
}

impl Output for CliOutput {
    fn print_alias_table(&self, table: &AliasTable) {
        if table.is_empty() {
            println!("No grouped resources are configured");
            return;
        }
        let header = vec![
            "Resource".cell().bold(true),
            "Family".cell().bold(true),
            "Group".cell().bold(true),
            "Group family".cell().bold(true),
        ];
        self.print_horizontal_table(into_cells(alias_table_rows(table)), header);
    }

    fn print_job_submitted(&self, original: &JobDescriptor, job: &JobDescriptor) {
        let rows = job_rows(original, job);
        if rows.is_empty() {
            println!("Job does not request any resources");
            return;
        }
        let header = vec![
            "Dimension".cell().bold(true),
            "Requested".cell().bold(true),
            "Normalized".cell().bold(true).justify(Justify::Left),
        ];
        self.print_horizontal_table(into_cells(rows), header);
    }

    fn print_job_modify_allowed(&self, job: &JobDescriptor) {
        let dimensions = TresDimension::ALL
            .iter()
            .filter(|&&dimension| job.slot(dimension).is_some())
            .count();
        println!(
            "Modification of {dimensions} resource dimension(s) is {}",
            "allowed".green()
        );
    }

    fn print_error(&self, error: anyhow::Error) {
        match error_kind(&error) {
            Some(kind) => eprintln!("{} {error}", format!("error ({kind}):").red().bold()),
            None => eprintln!("{error:?}"),
        }
    }
}
