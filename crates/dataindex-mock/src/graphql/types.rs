use async_graphql::{Enum, InputObject, SimpleObject};
use chrono::{DateTime, Utc};

// ============================================================================
// PROCESS INSTANCE TYPES
// ============================================================================

/// Lifecycle state of a process instance.
#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ProcessInstanceState {
    Pending,
    Active,
    Completed,
    Aborted,
    Suspended,
    Error,
}

/// A single execution of a business-process definition.
#[derive(SimpleObject, Clone, Debug)]
pub struct ProcessInstance {
    pub id: String,
    pub process_id: String,
    pub process_name: Option<String>,
    pub parent_process_instance_id: Option<String>,
    pub root_process_instance_id: Option<String>,
    pub root_process_id: Option<String>,
    pub roles: Vec<String>,
    pub state: ProcessInstanceState,
    pub endpoint: Option<String>,
    /// Node traversals recorded for this instance, most recent first.
    pub nodes: Vec<NodeInstance>,
    /// Serialized process variables (JSON payload as an opaque string).
    pub variables: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// One traversal of a node (task, gateway, event) within a process instance.
#[derive(SimpleObject, Clone, Debug)]
pub struct NodeInstance {
    pub id: String,
    pub name: String,
    /// Workflow-engine node class (StartNode, WorkItemNode, Join, ...).
    #[graphql(name = "type")]
    pub node_type: String,
    pub definition_id: String,
    pub enter: String,
    /// Null while the node is still active.
    pub exit: Option<String>,
}

/// Filter for the ProcessInstances query. Only `parentProcessInstanceId`
/// is applied; the remaining fields are accepted for schema compatibility
/// with the console but not consulted.
#[derive(InputObject, Clone, Debug, Default)]
pub struct ProcessInstanceFilter {
    pub state: Option<Vec<ProcessInstanceState>>,
    pub id: Option<Vec<String>>,
    pub process_id: Option<Vec<String>>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    pub parent_process_instance_id: Option<String>,
}

// ============================================================================
// USER TASK TYPES
// ============================================================================

/// A unit of work requiring human action, with ownership metadata.
#[derive(SimpleObject, Clone, Debug)]
pub struct UserTaskInstance {
    pub id: String,
    pub description: Option<String>,
    pub name: Option<String>,
    pub priority: Option<String>,
    pub process_instance_id: String,
    pub process_id: String,
    pub root_process_instance_id: Option<String>,
    pub root_process_id: Option<String>,
    /// Free-form task lifecycle phase (Ready, Reserved, Completed, ...).
    pub state: String,
    pub actual_owner: Option<String>,
    pub admin_groups: Option<Vec<String>>,
    pub admin_users: Option<Vec<String>>,
    pub completed: Option<DateTime<Utc>>,
    pub started: DateTime<Utc>,
    pub excluded_users: Option<Vec<String>>,
    pub potential_groups: Option<Vec<String>>,
    pub potential_users: Option<Vec<String>>,
    /// Serialized task input payload (opaque string).
    pub inputs: Option<String>,
    /// Serialized task output payload (opaque string).
    pub outputs: Option<String>,
    pub reference_name: Option<String>,
}

/// Filter for the UserTaskInstances query. Accepted but not applied; the
/// mock carries no user task fixtures.
#[derive(InputObject, Clone, Debug, Default)]
pub struct UserTaskInstanceFilter {
    pub state: Option<Vec<String>>,
    pub id: Option<Vec<String>>,
    pub process_instance_id: Option<Vec<String>>,
    pub actual_owner: Option<Vec<String>>,
    pub potential_users: Option<Vec<String>>,
    pub potential_groups: Option<Vec<String>>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}
