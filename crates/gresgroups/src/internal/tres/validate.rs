use crate::internal::alias::AliasTable;
use crate::internal::common::Set;
use crate::internal::common::error::TresError;
use crate::internal::tres::TresList;

type Check = fn(&AliasTable, &TresList) -> crate::Result<()>;

/// Checks are run in this order and the first failure is reported.
const CHECKS: [Check; 4] = [
    check_duplicates,
    check_untyped_resources,
    check_untyped_groups,
    check_conflicting_aliases,
];

/// Checks a parsed request against the alias table without modifying it.
pub fn validate_tres(table: &AliasTable, list: &TresList) -> crate::Result<()> {
    CHECKS.iter().try_for_each(|check| check(table, list))
}

/// Slurm silently takes the last value of a repeated name, we reject it instead.
fn check_duplicates(_table: &AliasTable, list: &TresList) -> crate::Result<()> {
    let mut repeated = Set::default();
    let mut seen = Set::default();
    for entry in list {
        if !seen.insert(entry.name.as_str()) {
            repeated.insert(entry.name.as_str());
        }
    }
    // Report the first name (in request order) that has a duplicate
    match list.iter().find(|entry| repeated.contains(entry.name.as_str())) {
        Some(entry) => Err(TresError::DuplicateResource(entry.name.clone())),
        None => Ok(()),
    }
}

/// `gpu:2` is ambiguous when `gpu` has grouped types.
fn check_untyped_resources(table: &AliasTable, list: &TresList) -> crate::Result<()> {
    for (family, example) in table.families() {
        if list.contains(family) {
            let group = table.group_of(example).unwrap_or_default();
            return Err(TresError::UntypedResource {
                family: family.to_string(),
                example: example.to_string(),
                group: group.to_string(),
            });
        }
    }
    Ok(())
}

fn check_untyped_groups(table: &AliasTable, list: &TresList) -> crate::Result<()> {
    for (group_family, _) in table.group_families() {
        if list.contains(group_family) {
            return Err(TresError::UntypedGroup(group_family.to_string()));
        }
    }
    Ok(())
}

/// A resource cannot be requested together with its own group or group family.
fn check_conflicting_aliases(table: &AliasTable, list: &TresList) -> crate::Result<()> {
    for alias in table.resources() {
        if !list.contains(alias.resource) {
            continue;
        }
        let conflict = if list.contains(alias.group) {
            Some(alias.group)
        } else if list.contains(alias.group_family) {
            Some(alias.group_family)
        } else {
            None
        };
        if let Some(conflict) = conflict {
            return Err(TresError::ConflictingAlias {
                resource: alias.resource.to_string(),
                alias: conflict.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::tests::utils::{create_table, example_table};
    use crate::internal::tres::{TresEntry, parse_tres};

    fn check(table: &AliasTable, input: &str) -> crate::Result<()> {
        validate_tres(table, &parse_tres(input).unwrap())
    }

    #[test]
    fn test_valid_requests() {
        let table = example_table();
        check(&table, "").unwrap();
        check(&table, "gpu:a10:2").unwrap();
        check(&table, "gg:g3:3").unwrap();
        check(&table, "gpu:a10,gpu:a100:2").unwrap();
        check(&table, "gg:g3,gg:g5:2").unwrap();
        check(&table, "license:matlab:1,mem").unwrap();
    }

    #[test]
    fn test_duplicate() {
        let table = example_table();
        assert_eq!(
            check(&table, "gpu:a10,gpu:a10:2"),
            Err(TresError::DuplicateResource("gpu:a10".into()))
        );
        assert_eq!(
            check(&table, "license:x,mem:3,license:x:2,mem:1"),
            Err(TresError::DuplicateResource("license:x".into()))
        );
    }

    #[test]
    fn test_duplicate_wins_over_later_checks() {
        let table = example_table();
        assert_eq!(
            check(&table, "gpu,gpu"),
            Err(TresError::DuplicateResource("gpu".into()))
        );
    }

    #[test]
    fn test_untyped_resource() {
        let table = example_table();
        assert_eq!(
            check(&table, "gpu:2"),
            Err(TresError::UntypedResource {
                family: "gpu".into(),
                example: "gpu:a10".into(),
                group: "gg:g3".into(),
            })
        );
    }

    #[test]
    fn test_untyped_resource_follows_configuration_order() {
        let table = create_table(&[("mig:1g", "mg:small"), ("gpu:a10", "gg:g3")]);
        assert!(matches!(
            check(&table, "gpu,mig"),
            Err(TresError::UntypedResource { family, .. }) if family == "mig"
        ));
    }

    #[test]
    fn test_untyped_group() {
        let table = example_table();
        assert_eq!(
            check(&table, "gg:4"),
            Err(TresError::UntypedGroup("gg".into()))
        );
        assert_eq!(
            check(&table, "gpu:a10,gg"),
            Err(TresError::UntypedGroup("gg".into()))
        );
    }

    #[test]
    fn test_conflicting_group() {
        let table = example_table();
        assert_eq!(
            check(&table, "gpu:a10:2,gg:g3:1"),
            Err(TresError::ConflictingAlias {
                resource: "gpu:a10".into(),
                alias: "gg:g3".into(),
            })
        );
    }

    #[test]
    fn test_resource_with_other_group_is_allowed() {
        let table = example_table();
        check(&table, "gpu:a10:2,gg:g5:1").unwrap();
    }

    #[test]
    fn test_conflicting_group_family() {
        let table = create_table(&[("gpu:a10", "gg:g3")]);
        // Untyped group is rejected first
        assert_eq!(
            check(&table, "gpu:a10,gg"),
            Err(TresError::UntypedGroup("gg".into()))
        );
    }

    #[test]
    fn test_conflicting_group_family_only() {
        let list: TresList = [TresEntry::new("gpu:a10", 1), TresEntry::new("gg", 1)]
            .into_iter()
            .collect();
        let table = create_table(&[("gpu:a10", "gg:g3")]);
        assert_eq!(
            check_conflicting_aliases(&table, &list),
            Err(TresError::ConflictingAlias {
                resource: "gpu:a10".into(),
                alias: "gg".into(),
            })
        );
    }
}
