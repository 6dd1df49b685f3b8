pub(crate) mod descriptor;
pub(crate) mod processor;

pub use descriptor::{JobDescriptor, TresDimension};
pub use processor::{GresGroupsFilter, check_modification, normalize_tres};
