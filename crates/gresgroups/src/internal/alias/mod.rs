pub(crate) mod shared;
pub(crate) mod table;

pub use shared::SharedAliasTable;
pub use table::{AliasTable, AliasTier, ResourceAlias};
