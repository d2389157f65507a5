use serde::{Deserialize, Serialize};

/// An event category defined by Mayan EDMS, referenced by its opaque id
/// (e.g. `workflow_instance.created`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventType {
    pub id: String,
    pub label: String,
    pub name: String,
}

/// Fires a workflow transition when the associated event occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowTemplateTransitionTrigger {
    pub id: i64,
    pub event_type: EventType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTriggerRequest {
    pub event_type_id: String,
}

impl CreateTriggerRequest {
    pub fn new(event_type_id: &str) -> Self {
        Self {
            event_type_id: event_type_id.to_string(),
        }
    }
}
