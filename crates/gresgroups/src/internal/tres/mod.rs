pub(crate) mod codec;
pub(crate) mod entry;
pub(crate) mod propagate;
pub(crate) mod validate;

pub use codec::{MAX_TRES_LENGTH, parse_tres, serialize_tres, tres_names};
pub use entry::{TresEntry, TresList};
pub use propagate::propagate_tres;
pub use validate::validate_tres;
