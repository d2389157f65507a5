use super::MayanClient;
use crate::domain::{CreateTriggerRequest, RemoteError, Unit, WorkflowTemplateTransitionTrigger};
use async_trait::async_trait;
use reqwest::Method;

/// Remote operations on the triggers of a workflow template transition.
#[async_trait]
pub trait TriggerApi: Send + Sync {
    async fn fetch(
        &self,
        workflow_template: i64,
        transition: i64,
        trigger: i64,
    ) -> Result<WorkflowTemplateTransitionTrigger, RemoteError>;

    /// Returns the trigger with its server-assigned id.
    async fn create(
        &self,
        workflow_template: i64,
        transition: i64,
        event_type_id: &str,
    ) -> Result<WorkflowTemplateTransitionTrigger, RemoteError>;

    async fn delete(
        &self,
        workflow_template: i64,
        transition: i64,
        trigger: i64,
    ) -> Result<Unit, RemoteError>;
}

pub fn triggers_path(workflow_template: i64, transition: i64) -> String {
    format!("workflow_templates/{workflow_template}/transitions/{transition}/triggers/")
}

pub fn trigger_path(workflow_template: i64, transition: i64, trigger: i64) -> String {
    format!("{}{trigger}/", triggers_path(workflow_template, transition))
}

#[async_trait]
impl TriggerApi for MayanClient {
    async fn fetch(
        &self,
        workflow_template: i64,
        transition: i64,
        trigger: i64,
    ) -> Result<WorkflowTemplateTransitionTrigger, RemoteError> {
        self.perform_json::<Unit, _>(
            &trigger_path(workflow_template, transition, trigger),
            Method::GET,
            None,
        )
        .await
    }

    async fn create(
        &self,
        workflow_template: i64,
        transition: i64,
        event_type_id: &str,
    ) -> Result<WorkflowTemplateTransitionTrigger, RemoteError> {
        let request = CreateTriggerRequest::new(event_type_id);

        self.perform_json(
            &triggers_path(workflow_template, transition),
            Method::POST,
            Some(&request),
        )
        .await
    }

    async fn delete(
        &self,
        workflow_template: i64,
        transition: i64,
        trigger: i64,
    ) -> Result<Unit, RemoteError> {
        self.perform_request::<Unit>(
            &trigger_path(workflow_template, transition, trigger),
            Method::DELETE,
            None,
        )
        .await?;

        Ok(())
    }
}
