use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::internal::filter::descriptor::TresDimension;

/// Reasons for rejecting a single resource request.
///
/// The `Display` output is meant to be shown to the submitting user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TresError {
    #[error("GRES {0} appears more than once")]
    DuplicateResource(String),
    #[error(
        "Can't have un-typed {family} (either specify type, e.g. {example}, or group e.g. {group})"
    )]
    UntypedResource {
        family: String,
        example: String,
        group: String,
    },
    #[error("Can't have un-typed gres group {0}")]
    UntypedGroup(String),
    #[error("Can't have both {resource} and {alias}")]
    ConflictingAlias { resource: String, alias: String },
    #[error("Can't set updated gres properly ({length} bytes, at most {limit} are allowed)")]
    UnsupportedResourceSet { length: usize, limit: usize },
    #[error("{dimension}: update of {name} is not allowed")]
    AccessDenied {
        dimension: TresDimension,
        name: String,
    },
    #[error("Count of {0} is out of range")]
    InvalidCount(String),
}

impl TresError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TresError::DuplicateResource(_) => ErrorKind::DuplicateResource,
            TresError::UntypedResource { .. } => ErrorKind::UntypedResource,
            TresError::UntypedGroup(_) => ErrorKind::UntypedGroup,
            TresError::ConflictingAlias { .. } => ErrorKind::ConflictingAlias,
            TresError::UnsupportedResourceSet { .. } => ErrorKind::UnsupportedResourceSet,
            TresError::AccessDenied { .. } => ErrorKind::AccessDenied,
            TresError::InvalidCount(_) => ErrorKind::InvalidCount,
        }
    }
}

/// Machine readable classification of [`TresError`] and [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    DuplicateResource,
    UntypedResource,
    UntypedGroup,
    ConflictingAlias,
    UnsupportedResourceSet,
    AccessDenied,
    InvalidCount,
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DuplicateResource => "duplicate-resource",
            ErrorKind::UntypedResource => "untyped-resource",
            ErrorKind::UntypedGroup => "untyped-group",
            ErrorKind::ConflictingAlias => "conflicting-alias",
            ErrorKind::UnsupportedResourceSet => "unsupported-resource-set",
            ErrorKind::AccessDenied => "access-denied",
            ErrorKind::InvalidCount => "invalid-count",
            ErrorKind::Config => "config",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors found while loading the gres groups configuration.
/// All of them are fatal, a partially loaded table is never used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Gres \"{0}\" without a group")]
    GresWithoutGroup(String),
    #[error("Gres \"{0}\" is configured more than once")]
    DuplicateGres(String),
    #[error("Empty gres or group name in configuration")]
    EmptyKey,
    #[error("Gres group must have the same gres: {group} has {first} and {second}")]
    MixedGroup {
        group: String,
        first: String,
        second: String,
    },
}

impl ConfigError {
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            TresError::DuplicateResource("gpu".into()).kind(),
            ErrorKind::DuplicateResource
        );
        assert_eq!(
            TresError::AccessDenied {
                dimension: TresDimension::PerTask,
                name: "gg:g3".into()
            }
            .kind()
            .as_str(),
            "access-denied"
        );
        assert_eq!(ConfigError::EmptyKey.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_user_messages() {
        insta::assert_snapshot!(
            TresError::UntypedResource {
                family: "gpu".into(),
                example: "gpu:a10".into(),
                group: "gg:g3".into(),
            }
            .to_string(),
            @"Can't have un-typed gpu (either specify type, e.g. gpu:a10, or group e.g. gg:g3)"
        );
        insta::assert_snapshot!(
            TresError::AccessDenied {
                dimension: TresDimension::PerNode,
                name: "gpu:a10".into(),
            }
            .to_string(),
            @"tres_per_node: update of gpu:a10 is not allowed"
        );
        insta::assert_snapshot!(
            ConfigError::MixedGroup {
                group: "gg:g3".into(),
                first: "gpu".into(),
                second: "mig".into(),
            }
            .to_string(),
            @"Gres group must have the same gres: gg:g3 has gpu and mig"
        );
    }
}
