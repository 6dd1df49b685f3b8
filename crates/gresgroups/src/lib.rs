pub(crate) mod internal;

pub use crate::internal::common::error::{ConfigError, ErrorKind, TresError};

pub type TresCount = u64;

pub type Error = TresError;
pub type Result<T> = std::result::Result<T, Error>;

pub mod alias {
    pub use crate::internal::alias::{AliasTable, AliasTier, ResourceAlias, SharedAliasTable};
}

pub mod config {
    pub use crate::internal::config::{DEFAULT_CONFIG_FILE, GresGroupsConfig, GresLine};
}

pub mod tres {
    pub use crate::internal::tres::{
        MAX_TRES_LENGTH, TresEntry, TresList, parse_tres, propagate_tres, serialize_tres,
        tres_names, validate_tres,
    };
}

pub mod filter {
    pub use crate::internal::filter::{
        GresGroupsFilter, JobDescriptor, TresDimension, check_modification, normalize_tres,
    };
}
