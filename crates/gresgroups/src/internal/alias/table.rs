use std::path::Path;

use crate::internal::common::error::ConfigError;
use crate::internal::common::ids::{FamilyId, GresId, GroupFamilyId, GroupId};
use crate::internal::common::index::{IndexVec, NameIndex};
use crate::internal::config::GresGroupsConfig;

/// Strips the type suffix from a resource or group key (`gpu:a10` -> `gpu`).
/// The key is cut at the first colon.
pub(crate) fn type_stripped(key: &str) -> &str {
    key.split_once(':').map(|(name, _)| name).unwrap_or(key)
}

#[derive(Debug, Clone)]
struct GresItem {
    key: String,
    family: FamilyId,
    group: GroupId,
}

#[derive(Debug, Clone, Copy)]
struct GroupItem {
    family: FamilyId,
    group_family: GroupFamilyId,
}

/// One configured concrete resource with all of its aliases resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceAlias<'a> {
    pub resource: &'a str,
    pub family: &'a str,
    pub group: &'a str,
    pub group_family: &'a str,
}

/// Tier of a name governed by the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasTier {
    Resource,
    Group,
    Family,
    GroupFamily,
}

/// Immutable mapping between concrete resources (`gpu:a10`), their families (`gpu`),
/// groups (`gg:g3`) and group families (`gg`).
///
/// All iteration methods follow the order in which the names first appeared
/// in the configuration.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    gres: IndexVec<GresId, GresItem>,
    gres_ids: NameIndex<GresId>,
    families: NameIndex<FamilyId>,
    groups: NameIndex<GroupId>,
    group_items: IndexVec<GroupId, GroupItem>,
    group_families: NameIndex<GroupFamilyId>,
    group_family_names: IndexVec<GroupFamilyId, FamilyId>,
    resources_of_family: IndexVec<FamilyId, Vec<GresId>>,
    groups_of_group_family: IndexVec<GroupFamilyId, Vec<GroupId>>,
}

impl AliasTable {
    /// Builds the table from ordered `(resource, group)` pairs.
    pub fn build<R: AsRef<str>, G: AsRef<str>>(
        entries: impl IntoIterator<Item = (R, G)>,
    ) -> Result<AliasTable, ConfigError> {
        let mut table = AliasTable::default();
        for (resource, group) in entries {
            table.add_entry(resource.as_ref(), group.as_ref())?;
        }

        log::info!(
            "gres_groups: found {} GRES in {} groups ({} group types)",
            table.gres.len(),
            table.group_families.len(),
            table.groups.len()
        );
        if log::log_enabled!(log::Level::Debug) {
            for alias in table.resources() {
                log::debug!(
                    "gres_groups: gres: {}, name: {}, group: {}, group_name: {}",
                    alias.resource,
                    alias.family,
                    alias.group,
                    alias.group_family
                );
            }
        }
        Ok(table)
    }

    pub fn from_config(config: &GresGroupsConfig) -> Result<AliasTable, ConfigError> {
        Self::build(config.entries()?)
    }

    pub fn from_config_file(path: &Path) -> Result<AliasTable, ConfigError> {
        Self::from_config(&GresGroupsConfig::load(path)?)
    }

    fn add_entry(&mut self, resource: &str, group: &str) -> Result<(), ConfigError> {
        if resource.is_empty() || group.is_empty() {
            return Err(ConfigError::EmptyKey);
        }
        let (gres_id, new_gres) = self.gres_ids.get_or_allocate(resource);
        if !new_gres {
            return Err(ConfigError::DuplicateGres(resource.to_string()));
        }

        let (family, new_family) = self.families.get_or_allocate(type_stripped(resource));
        if new_family {
            self.resources_of_family.push(Vec::new());
        }
        self.resources_of_family[family].push(gres_id);

        let (group_family, new_group_family) =
            self.group_families.get_or_allocate(type_stripped(group));
        if new_group_family {
            self.group_family_names.push(family);
            self.groups_of_group_family.push(Vec::new());
        } else {
            // The last configured entry decides the family of a group family
            self.group_family_names[group_family] = family;
        }

        let (group_id, new_group) = self.groups.get_or_allocate(group);
        if new_group {
            self.group_items.push(GroupItem {
                family,
                group_family,
            });
            self.groups_of_group_family[group_family].push(group_id);
        } else {
            let first = self.group_items[group_id].family;
            if first != family {
                return Err(ConfigError::MixedGroup {
                    group: group.to_string(),
                    first: self.families.name(first).to_string(),
                    second: self.families.name(family).to_string(),
                });
            }
        }

        self.gres.push(GresItem {
            key: resource.to_string(),
            family,
            group: group_id,
        });
        Ok(())
    }

    #[inline]
    pub fn resource_count(&self) -> usize {
        self.gres.len()
    }

    #[inline]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gres.is_empty()
    }

    #[inline]
    pub fn is_concrete_resource(&self, name: &str) -> bool {
        self.gres_ids.contains(name)
    }

    pub fn family_of(&self, resource: &str) -> Option<&str> {
        self.gres_ids
            .get(resource)
            .map(|id| self.families.name(self.gres[id].family))
    }

    pub fn group_of(&self, resource: &str) -> Option<&str> {
        self.gres_ids
            .get(resource)
            .map(|id| self.groups.name(self.gres[id].group))
    }

    pub fn group_family_of(&self, group: &str) -> Option<&str> {
        self.groups
            .get(group)
            .map(|id| self.group_families.name(self.group_items[id].group_family))
    }

    pub fn family_name_of_group(&self, group: &str) -> Option<&str> {
        self.groups
            .get(group)
            .map(|id| self.families.name(self.group_items[id].family))
    }

    pub fn family_name_of_group_family(&self, group_family: &str) -> Option<&str> {
        self.group_families
            .get(group_family)
            .map(|id| self.families.name(self.group_family_names[id]))
    }

    /// Concrete resources of the family, in configuration order.
    pub fn resources_of_family(&self, family: &str) -> impl Iterator<Item = &str> {
        self.families
            .get(family)
            .map(|id| self.resources_of_family[id].as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&id| self.gres[id].key.as_str())
    }

    /// Groups of the group family, in configuration order.
    pub fn groups_of_group_family(&self, group_family: &str) -> impl Iterator<Item = &str> {
        self.group_families
            .get(group_family)
            .map(|id| self.groups_of_group_family[id].as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&id| self.groups.name(id))
    }

    /// Returns the highest tier under which the name is governed by the table.
    pub fn tier_of(&self, name: &str) -> Option<AliasTier> {
        if self.gres_ids.contains(name) {
            Some(AliasTier::Resource)
        } else if self.groups.contains(name) {
            Some(AliasTier::Group)
        } else if self.families.contains(name) {
            Some(AliasTier::Family)
        } else if self.group_families.contains(name) {
            Some(AliasTier::GroupFamily)
        } else {
            None
        }
    }

    pub fn resources(&self) -> impl Iterator<Item = ResourceAlias<'_>> {
        self.gres.iter().map(|item| {
            let group = self.group_items[item.group];
            ResourceAlias {
                resource: &item.key,
                family: self.families.name(item.family),
                group: self.groups.name(item.group),
                group_family: self.group_families.name(group.group_family),
            }
        })
    }

    /// Pairs of `(family, first resource of the family)`.
    pub fn families(&self) -> impl Iterator<Item = (&str, &str)> {
        self.families.iter().map(|(id, name)| {
            let first = self.resources_of_family[id][0];
            (name, self.gres[first].key.as_str())
        })
    }

    /// Pairs of `(group, family)`.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &str)> {
        self.groups.iter().map(|(id, name)| {
            (name, self.families.name(self.group_items[id].family))
        })
    }

    /// Pairs of `(group family, family)`.
    pub fn group_families(&self) -> impl Iterator<Item = (&str, &str)> {
        self.group_families
            .iter()
            .map(|(id, name)| (name, self.families.name(self.group_family_names[id])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::tests::utils::{create_table, example_table};

    #[test]
    fn test_type_stripped() {
        assert_eq!(type_stripped("gpu:a10"), "gpu");
        assert_eq!(type_stripped("gpu:a10:x"), "gpu");
        assert_eq!(type_stripped("gpu"), "gpu");
        assert_eq!(type_stripped("gg:"), "gg");
    }

    #[test]
    fn test_lookups() {
        let table = example_table();
        assert!(table.is_concrete_resource("gpu:a10"));
        assert!(!table.is_concrete_resource("gpu"));
        assert!(!table.is_concrete_resource("gg:g3"));

        assert_eq!(table.family_of("gpu:a10"), Some("gpu"));
        assert_eq!(table.group_of("gpu:a10"), Some("gg:g3"));
        assert_eq!(table.group_of("gpu:a100"), Some("gg:g5"));
        assert_eq!(table.group_family_of("gg:g3"), Some("gg"));
        assert_eq!(table.family_name_of_group("gg:g3"), Some("gpu"));
        assert_eq!(table.family_name_of_group_family("gg"), Some("gpu"));
        assert_eq!(table.family_of("gpu"), None);
        assert_eq!(table.group_family_of("gpu:a10"), None);
    }

    #[test]
    fn test_tiers() {
        let table = example_table();
        assert_eq!(table.tier_of("gpu:a10"), Some(AliasTier::Resource));
        assert_eq!(table.tier_of("gg:g3"), Some(AliasTier::Group));
        assert_eq!(table.tier_of("gpu"), Some(AliasTier::Family));
        assert_eq!(table.tier_of("gg"), Some(AliasTier::GroupFamily));
        assert_eq!(table.tier_of("license:matlab"), None);
    }

    #[test]
    fn test_configuration_order_is_kept() {
        let table = create_table(&[
            ("mig:1g", "mg:small"),
            ("gpu:a10", "gg:g3"),
            ("mig:2g", "mg:small"),
            ("gpu:l4", "gg:g3"),
        ]);
        assert_eq!(
            table.groups().collect::<Vec<_>>(),
            vec![("mg:small", "mig"), ("gg:g3", "gpu")]
        );
        assert_eq!(
            table.families().collect::<Vec<_>>(),
            vec![("mig", "mig:1g"), ("gpu", "gpu:a10")]
        );
        assert_eq!(
            table.resources_of_family("mig").collect::<Vec<_>>(),
            vec!["mig:1g", "mig:2g"]
        );
        assert_eq!(
            table.groups_of_group_family("gg").collect::<Vec<_>>(),
            vec!["gg:g3"]
        );
        assert_eq!(table.resources_of_family("license").count(), 0);
        assert_eq!(table.resource_count(), 4);
        assert_eq!(table.group_count(), 2);
    }

    #[test]
    fn test_group_family_uses_last_family() {
        let table = create_table(&[("gpu:a10", "xg:g1"), ("mig:1g", "xg:m1")]);
        assert_eq!(table.family_name_of_group("xg:g1"), Some("gpu"));
        assert_eq!(table.family_name_of_group("xg:m1"), Some("mig"));
        assert_eq!(table.family_name_of_group_family("xg"), Some("mig"));
    }

    #[test]
    fn test_mixed_group_is_fatal() {
        let result = AliasTable::build([("gpu:a10", "gg:g3"), ("mig:1g", "gg:g3")]);
        match result {
            Err(ConfigError::MixedGroup {
                group,
                first,
                second,
            }) => {
                assert_eq!(group, "gg:g3");
                assert_eq!(first, "gpu");
                assert_eq!(second, "mig");
            }
            r => panic!("Unexpected result {r:?}"),
        }
    }

    #[test]
    fn test_duplicate_resource_is_fatal() {
        let result = AliasTable::build([("gpu:a10", "gg:g3"), ("gpu:a10", "gg:g4")]);
        assert!(matches!(result, Err(ConfigError::DuplicateGres(name)) if name == "gpu:a10"));
    }

    #[test]
    fn test_empty_key_is_fatal() {
        assert!(matches!(
            AliasTable::build([("", "gg:g3")]),
            Err(ConfigError::EmptyKey)
        ));
        assert!(matches!(
            AliasTable::build([("gpu:a10", "")]),
            Err(ConfigError::EmptyKey)
        ));
    }

    #[test]
    fn test_empty_table() {
        let table = AliasTable::build(Vec::<(&str, &str)>::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.tier_of("gpu"), None);
    }
}
