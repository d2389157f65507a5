#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    Int,
    String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    pub description: &'static str,
    pub r#type: AttributeType,
    pub required: bool,
    /// Changing the value replaces the remote object instead of updating it.
    pub force_new: bool,
    pub computed: bool,
}

impl Attribute {
    pub fn required(name: &'static str, r#type: AttributeType, description: &'static str) -> Self {
        Self {
            name,
            description,
            r#type,
            required: true,
            force_new: false,
            computed: false,
        }
    }

    pub fn computed(name: &'static str, r#type: AttributeType, description: &'static str) -> Self {
        Self {
            name,
            description,
            r#type,
            required: false,
            force_new: false,
            computed: true,
        }
    }

    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// A resource whose every input forces replacement has nothing to update.
    pub fn is_immutable(&self) -> bool {
        self.attributes
            .iter()
            .filter(|a| !a.computed)
            .all(|a| a.force_new)
    }
}

pub fn trigger_schema() -> Schema {
    Schema::new()
        .with_attribute(
            Attribute::required(
                "workflow_template",
                AttributeType::Int,
                "ID of the workflow template.",
            )
            .force_new(),
        )
        .with_attribute(
            Attribute::required(
                "transition",
                AttributeType::String,
                "ID of the workflow template transition (composite ID format: workflow_template_id-transition_id).",
            )
            .force_new(),
        )
        .with_attribute(
            Attribute::required(
                "event_type_id",
                AttributeType::String,
                "Event type that triggers this transition (e.g., workflow_instance.created, tag.attach).",
            )
            .force_new(),
        )
        .with_attribute(Attribute::computed(
            "event_type_label",
            AttributeType::String,
            "Human-readable label for the event type.",
        ))
}
