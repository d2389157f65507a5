use super::TriggerId;
use serde::{Deserialize, Serialize};

/// Attributes of a trigger resource as the host tracks them.
///
/// `id` holds the composite identity (`workflow_template-transition-trigger`)
/// and is empty while the resource is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerData {
    #[serde(default)]
    pub id: String,
    pub workflow_template: i64,
    /// Composite `workflow_template_id-transition_id`
    pub transition: String,
    pub event_type_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type_label: Option<String>,
}

impl TriggerData {
    pub fn new(workflow_template: i64, transition: &str, event_type_id: &str) -> Self {
        Self {
            id: String::new(),
            workflow_template,
            transition: transition.to_string(),
            event_type_id: event_type_id.to_string(),
            event_type_label: None,
        }
    }

    /// A fresh record that only knows its identity, as handed over on import.
    pub fn imported(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    pub fn is_present(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn set_id(&mut self, id: TriggerId) {
        self.id = id.to_string();
    }

    pub fn clear_id(&mut self) {
        self.id.clear();
    }
}
