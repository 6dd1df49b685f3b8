use crate::internal::alias::{AliasTable, SharedAliasTable};
use crate::internal::common::error::TresError;
use crate::internal::filter::descriptor::{JobDescriptor, TresDimension};
use crate::internal::tres::{
    parse_tres, propagate_tres, serialize_tres, tres_names, validate_tres,
};

/// Validates and expands the request of a single dimension.
///
/// Returns `Ok(None)` when the request does not mention any grouped resource,
/// so there is nothing to rewrite.
pub fn normalize_tres(table: &AliasTable, input: &str) -> crate::Result<Option<String>> {
    let mut list = parse_tres(input)?;
    validate_tres(table, &list)?;
    if !propagate_tres(table, &mut list)? {
        return Ok(None);
    }
    serialize_tres(&list).map(Some)
}

/// Running jobs may not change any governed resource, regardless of the count.
pub fn check_modification(
    table: &AliasTable,
    dimension: TresDimension,
    input: &str,
) -> crate::Result<()> {
    for name in tres_names(input) {
        if let Some(tier) = table.tier_of(name) {
            log::info!("gres_groups: modify: {dimension}: update {name} ({tier:?}) not allowed");
            return Err(TresError::AccessDenied {
                dimension,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Entry point used by the scheduler for job submissions and modifications.
#[derive(Clone, Debug)]
pub struct GresGroupsFilter {
    table: SharedAliasTable,
}

impl GresGroupsFilter {
    pub fn new(table: SharedAliasTable) -> Self {
        Self { table }
    }

    #[inline]
    pub fn table(&self) -> &SharedAliasTable {
        &self.table
    }

    /// Normalizes a single dimension against the current alias table.
    pub fn normalize(&self, input: &str) -> crate::Result<Option<String>> {
        normalize_tres(&self.table.snapshot(), input)
    }

    /// Rewrites every present resource dimension of a submitted job.
    ///
    /// The first failing dimension rejects the whole submission. Dimensions that were
    /// already rewritten before the failure keep their new value.
    pub fn job_submit(&self, job: &mut JobDescriptor) -> crate::Result<()> {
        let table = self.table.snapshot();
        for dimension in TresDimension::ALL {
            let slot = job.slot_mut(dimension);
            let Some(current) = slot.as_deref().filter(|value| !value.is_empty()) else {
                log::trace!("gres_groups: {dimension}: NULL");
                continue;
            };
            log::debug!("gres_groups: {dimension}: {current}");

            match normalize_tres(&table, current) {
                Ok(Some(updated)) if updated != current => {
                    log::debug!("gres_groups: updating gres \"{current}\" -> \"{updated}\"");
                    *slot = Some(updated);
                }
                Ok(_) => {}
                Err(error) => {
                    log::info!("gres_groups: {dimension}: {error}");
                    return Err(error);
                }
            }
        }
        Ok(())
    }

    /// Checks a modification request of an already submitted job.
    pub fn job_modify(&self, job: &JobDescriptor) -> crate::Result<()> {
        let table = self.table.snapshot();
        for dimension in TresDimension::ALL {
            let Some(current) = job.slot(dimension) else {
                log::trace!("gres_groups: modify: {dimension}: NULL");
                continue;
            };
            log::debug!("gres_groups: modify: {dimension}: {current}");
            check_modification(&table, dimension, current)?;
        }
        Ok(())
    }
}
