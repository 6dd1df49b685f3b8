pub mod cli;
pub mod json;
pub mod outputs;

use gresgroups::{ConfigError, ErrorKind, TresError};

/// Finds the machine readable kind of an error produced by the library, if there is one.
pub(crate) fn error_kind(error: &anyhow::Error) -> Option<ErrorKind> {
    if let Some(error) = error.downcast_ref::<TresError>() {
        Some(error.kind())
    } else {
        error.downcast_ref::<ConfigError>().map(|error| error.kind())
    }
}
