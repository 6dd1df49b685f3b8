use serde_json::{Value, json};

use gresgroups::alias::AliasTable;
use gresgroups::filter::JobDescriptor;

use crate::output::error_kind;
use crate::output::outputs::Output;

#[derive(Default)]
pub struct JsonOutput;

impl JsonOutput {
    fn print(&self, data: Value) {
        println!(
            "{}",
            serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string())
        );
    }
}

pub(crate) fn format_alias_table(table: &AliasTable) -> Value {
    table
        .resources()
        .map(|alias| {
            json!({
                "resource": alias.resource,
                "family": alias.family,
                "group": alias.group,
                "group_family": alias.group_family,
            })
        })
        .collect()
}

pub(crate) fn format_error(error: &anyhow::Error) -> Value {
    json!({
        "error": error.to_string(),
        "kind": error_kind(error),
    })
}

impl Output for JsonOutput {
    fn print_alias_table(&self, table: &AliasTable) {
        self.print(format_alias_table(table));
    }

    fn print_job_submitted(&self, original: &JobDescriptor, job: &JobDescriptor) {
        self.print(json!({
            "job": job,
            "updated": original != job,
        }));
    }

    fn print_job_modify_allowed(&self, job: &JobDescriptor) {
        self.print(json!({
            "job": job,
            "allowed": true,
        }));
    }

    fn print_error(&self, error: anyhow::Error) {
        self.print(format_error(&error));
    }
}

#[cfg(test)]
mod tests {
    use super::{format_alias_table, format_error};
    use gresgroups::TresError;
    use gresgroups::alias::AliasTable;
    use serde_json::json;

    #[test]
    fn test_format_alias_table() {
        let table = AliasTable::build([("gpu:a10", "gg:g3")]).unwrap();
        assert_eq!(
            format_alias_table(&table),
            json!([{
                "resource": "gpu:a10",
                "family": "gpu",
                "group": "gg:g3",
                "group_family": "gg",
            }])
        );
    }

    #[test]
    fn test_format_error() {
        let error = anyhow::Error::from(TresError::UntypedGroup("gg".into()));
        assert_eq!(
            format_error(&error),
            json!({
                "error": "Can't have un-typed gres group gg",
                "kind": "untyped-group",
            })
        );
        assert_eq!(
            format_error(&anyhow::anyhow!("Cannot read job")),
            json!({"error": "Cannot read job", "kind": null})
        );
    }
}
