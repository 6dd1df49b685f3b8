use crate::internal::alias::{AliasTable, SharedAliasTable};
use crate::internal::filter::{GresGroupsFilter, JobDescriptor, TresDimension};

pub fn create_table(entries: &[(&str, &str)]) -> AliasTable {
    AliasTable::build(entries.iter().copied()).unwrap()
}

/// `gpu:a10` and `gpu:l4` share group `gg:g3`, `gpu:a100` is alone in `gg:g5`.
pub fn example_table() -> AliasTable {
    create_table(&[
        ("gpu:a10", "gg:g3"),
        ("gpu:l4", "gg:g3"),
        ("gpu:a100", "gg:g5"),
    ])
}

pub fn create_filter(table: AliasTable) -> GresGroupsFilter {
    GresGroupsFilter::new(SharedAliasTable::new(table))
}

pub fn job_per_node(value: &str) -> JobDescriptor {
    JobDescriptor::default().with_slot(TresDimension::PerNode, value)
}

pub fn submit_per_node(filter: &GresGroupsFilter, value: &str) -> crate::Result<String> {
    let mut job = job_per_node(value);
    filter.job_submit(&mut job)?;
    Ok(job.tres_per_node.unwrap_or_default())
}
