use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Resource request slots of a job, processed independently of each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TresDimension {
    PerJob,
    PerNode,
    PerTask,
    PerSocket,
}

impl TresDimension {
    pub const ALL: [TresDimension; 4] = [
        TresDimension::PerJob,
        TresDimension::PerNode,
        TresDimension::PerTask,
        TresDimension::PerSocket,
    ];

    pub fn field_name(&self) -> &'static str {
        match self {
            TresDimension::PerJob => "tres_per_job",
            TresDimension::PerNode => "tres_per_node",
            TresDimension::PerTask => "tres_per_task",
            TresDimension::PerSocket => "tres_per_socket",
        }
    }
}

impl Display for TresDimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// The part of a job submission that carries resource requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tres_per_job: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tres_per_node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tres_per_task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tres_per_socket: Option<String>,
}

impl JobDescriptor {
    pub fn slot(&self, dimension: TresDimension) -> Option<&str> {
        match dimension {
            TresDimension::PerJob => self.tres_per_job.as_deref(),
            TresDimension::PerNode => self.tres_per_node.as_deref(),
            TresDimension::PerTask => self.tres_per_task.as_deref(),
            TresDimension::PerSocket => self.tres_per_socket.as_deref(),
        }
    }

    pub fn slot_mut(&mut self, dimension: TresDimension) -> &mut Option<String> {
        match dimension {
            TresDimension::PerJob => &mut self.tres_per_job,
            TresDimension::PerNode => &mut self.tres_per_node,
            TresDimension::PerTask => &mut self.tres_per_task,
            TresDimension::PerSocket => &mut self.tres_per_socket,
        }
    }

    pub fn with_slot(mut self, dimension: TresDimension, value: impl Into<String>) -> Self {
        *self.slot_mut(dimension) = Some(value.into());
        self
    }
}
