use crate::internal::alias::AliasTable;
use crate::internal::common::error::TresError;
use crate::internal::tres::TresList;

/// Adds the count of `source` (if requested) to `target`, creating `target` when missing.
/// The target takes over the explicit flag of the source.
fn accumulate(list: &mut TresList, source: &str, target: &str) -> crate::Result<bool> {
    let Some((count, explicit)) = list.find(source).map(|entry| (entry.count, entry.explicit))
    else {
        return Ok(false);
    };
    let entry = list.find_or_insert(target);
    entry.count = entry
        .count
        .checked_add(count)
        .ok_or_else(|| TresError::InvalidCount(target.to_string()))?;
    entry.explicit = explicit;
    Ok(true)
}

/// Expands a validated request so that every tier the scheduler needs carries a count.
///
/// Groups are propagated into their family first (`gg:g3:n` -> `gpu += n`),
/// then concrete resources into their group (`gpu:a10:n` -> `gg:g3 += n`).
/// Entries are only added or increased, never removed.
/// Returns `false` when the request does not touch any governed name.
pub fn propagate_tres(table: &AliasTable, list: &mut TresList) -> crate::Result<bool> {
    let mut updated = false;
    for (group, family) in table.groups() {
        updated |= accumulate(list, group, family)?;
    }
    for (group_family, family) in table.group_families() {
        updated |= accumulate(list, group_family, family)?;
    }
    for alias in table.resources() {
        updated |= accumulate(list, alias.resource, alias.group)?;
    }
    Ok(updated)
}
