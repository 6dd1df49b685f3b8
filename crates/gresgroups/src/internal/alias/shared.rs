use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::internal::alias::AliasTable;
use crate::internal::common::error::ConfigError;

/// Handle to the alias table that is currently in effect.
///
/// Requests take a [`snapshot`](SharedAliasTable::snapshot) and use it until they finish,
/// so replacing the table never changes the rules in the middle of a request.
/// The previous table is dropped when the last snapshot of it goes away.
#[derive(Clone, Debug)]
pub struct SharedAliasTable {
    current: Arc<RwLock<Arc<AliasTable>>>,
}

impl SharedAliasTable {
    pub fn new(table: AliasTable) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(table))),
        }
    }

    pub fn from_config_file(path: &Path) -> Result<Self, ConfigError> {
        AliasTable::from_config_file(path).map(Self::new)
    }

    #[inline]
    pub fn snapshot(&self) -> Arc<AliasTable> {
        self.current.read().clone()
    }

    /// Swaps in a new table and returns the previous one.
    pub fn replace(&self, table: AliasTable) -> Arc<AliasTable> {
        log::info!(
            "gres_groups: replacing alias table ({} GRES in {} group types)",
            table.resource_count(),
            table.group_count()
        );
        std::mem::replace(&mut *self.current.write(), Arc::new(table))
    }

    /// Rebuilds the table from a configuration file.
    /// When loading fails, the current table stays in effect.
    pub fn reload_from(&self, path: &Path) -> Result<(), ConfigError> {
        let table = AliasTable::from_config_file(path)?;
        self.replace(table);
        Ok(())
    }
}
