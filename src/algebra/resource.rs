use super::TriggerApi;
use crate::domain::{
    trigger_schema, Error, Schema, TransitionId, TriggerData, TriggerId, Unit,
    WorkflowTemplateTransitionTrigger,
};
use async_trait::async_trait;

/// Lifecycle entry points a host drives for a managed resource.
///
/// Every input attribute forces replacement, so there is no update.
#[async_trait]
pub trait ResourceLifecycle: Send + Sync {
    type State: Send;

    fn schema(&self) -> Schema;

    /// Creates the remote object, assigns the identity and refreshes `state`.
    async fn create(&self, state: &mut Self::State) -> Result<Unit, Error>;

    /// Refreshes `state` from the remote object. `state` is untouched on error.
    async fn read(&self, state: &mut Self::State) -> Result<Unit, Error>;

    /// Destroys the remote object and clears the identity of `state`.
    async fn delete(&self, state: &mut Self::State) -> Result<Unit, Error>;

    /// Builds a fully populated state from a bare identity.
    async fn import(&self, id: &str) -> Result<Self::State, Error>;
}

#[derive(Debug, Clone)]
pub struct TriggerResource<C> {
    client: C,
}

impl<C: TriggerApi> TriggerResource<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

fn trigger_to_data(
    id: TriggerId,
    trigger: WorkflowTemplateTransitionTrigger,
    state: &mut TriggerData,
) {
    let id = TriggerId::new(id.workflow_template(), id.transition(), trigger.id);

    state.set_id(id);
    state.workflow_template = id.workflow_template();
    state.transition = id.transition_id().to_string();
    state.event_type_id = trigger.event_type.id;
    state.event_type_label = Some(trigger.event_type.label);
}

#[async_trait]
impl<C: TriggerApi> ResourceLifecycle for TriggerResource<C> {
    type State = TriggerData;

    fn schema(&self) -> Schema {
        trigger_schema()
    }

    #[tracing::instrument(
        name = "Create trigger",
        skip(self, state),
        fields(workflow_template = state.workflow_template, transition = %state.transition)
    )]
    async fn create(&self, state: &mut TriggerData) -> Result<Unit, Error> {
        // Only the transition part is used, the template comes from its own attribute
        let transition: TransitionId = state.transition.parse()?;

        let trigger = self
            .client
            .create(
                state.workflow_template,
                transition.transition(),
                &state.event_type_id,
            )
            .await?;

        let id = TriggerId::new(state.workflow_template, transition.transition(), trigger.id);
        tracing::info!("Created trigger {}", id);
        state.set_id(id);

        self.read(state).await
    }

    #[tracing::instrument(name = "Read trigger", skip(self, state), fields(id = %state.id))]
    async fn read(&self, state: &mut TriggerData) -> Result<Unit, Error> {
        let id: TriggerId = state.id.parse()?;

        let trigger = self
            .client
            .fetch(id.workflow_template(), id.transition(), id.trigger())
            .await?;

        trigger_to_data(id, trigger, state);

        Ok(())
    }

    #[tracing::instrument(name = "Delete trigger", skip(self, state), fields(id = %state.id))]
    async fn delete(&self, state: &mut TriggerData) -> Result<Unit, Error> {
        let id: TriggerId = state.id.parse()?;

        self.client
            .delete(id.workflow_template(), id.transition(), id.trigger())
            .await?;

        tracing::info!("Deleted trigger {}", id);
        state.clear_id();

        Ok(())
    }

    #[tracing::instrument(name = "Import trigger", skip(self))]
    async fn import(&self, id: &str) -> Result<TriggerData, Error> {
        let mut state = TriggerData::imported(id);

        self.read(&mut state).await?;

        Ok(state)
    }
}
