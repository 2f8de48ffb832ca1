//! GraphQL schema for the mock data index.
//!
//! Query resolvers read the process-wide fixture dataset and never fail.
//! The subscription operations exist so console clients can connect and
//! subscribe, but nothing is ever published on them.

use async_graphql::{EmptyMutation, Object, Schema, Subscription};
use futures::stream::{self, Stream};

use super::types::*;
use crate::fixtures;

pub type AppSchema = Schema<QueryRoot, EmptyMutation, SubscriptionRoot>;

pub fn build_schema() -> AppSchema {
    Schema::build(QueryRoot, EmptyMutation, SubscriptionRoot).finish()
}

// ============================================================================
// QUERY ROOT
// ============================================================================

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Full fixture collection, unfiltered, in fixed insertion order.
    #[graphql(name = "AllProcessInstances")]
    async fn all_process_instances(&self) -> Vec<ProcessInstance> {
        fixtures::process_instances().to_vec()
    }

    /// Instances whose `parentProcessInstanceId` matches the filter value,
    /// null included. The filter argument is mandatory; a request omitting
    /// it is rejected during validation instead of reaching this resolver.
    #[graphql(name = "ProcessInstances")]
    async fn process_instances(&self, filter: ProcessInstanceFilter) -> Vec<ProcessInstance> {
        tracing::debug!(
            parent_process_instance_id = ?filter.parent_process_instance_id,
            "resolving ProcessInstances"
        );
        fixtures::process_instances()
            .iter()
            .filter(|p| fixtures::parent_matches(p, filter.parent_process_instance_id.as_deref()))
            .cloned()
            .collect()
    }

    /// Declared for console compatibility; the mock carries no user task
    /// fixtures, so this always resolves to an empty collection.
    #[graphql(name = "UserTaskInstances")]
    async fn user_task_instances(
        &self,
        #[graphql(name = "filter")] _filter: Option<UserTaskInstanceFilter>,
    ) -> Vec<UserTaskInstance> {
        Vec::new()
    }
}

// ============================================================================
// SUBSCRIPTION ROOT
// ============================================================================

/// Push-update surface of the data index. The mock dataset never changes,
/// so every stream stays pending for the life of the connection.
pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    #[graphql(name = "ProcessInstanceAdded")]
    async fn process_instance_added(&self) -> impl Stream<Item = ProcessInstance> {
        stream::pending()
    }

    #[graphql(name = "ProcessInstanceUpdated")]
    async fn process_instance_updated(&self) -> impl Stream<Item = ProcessInstance> {
        stream::pending()
    }

    #[graphql(name = "UserTaskInstanceAdded")]
    async fn user_task_instance_added(&self) -> impl Stream<Item = UserTaskInstance> {
        stream::pending()
    }

    #[graphql(name = "UserTaskInstanceUpdated")]
    async fn user_task_instance_updated(&self) -> impl Stream<Item = UserTaskInstance> {
        stream::pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::{Request, Variables};
    use serde_json::json;

    const FILTERED_QUERY: &str =
        "query($f: ProcessInstanceFilter!) { ProcessInstances(filter: $f) { id } }";

    async fn filtered_ids(parent: serde_json::Value) -> Vec<String> {
        let schema = build_schema();
        let request = Request::new(FILTERED_QUERY).variables(Variables::from_json(json!({
            "f": { "parentProcessInstanceId": parent }
        })));
        let resp = schema.execute(request).await;
        assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);
        let data = resp.data.into_json().unwrap();
        data["ProcessInstances"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_all_process_instances_returns_six_in_order() {
        let schema = build_schema();
        for _ in 0..2 {
            let resp = schema.execute("{ AllProcessInstances { id state } }").await;
            assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);
            let data = resp.data.into_json().unwrap();
            let instances = data["AllProcessInstances"].as_array().unwrap();
            assert_eq!(instances.len(), 6);
            assert_eq!(
                instances[0]["id"].as_str().unwrap(),
                "e1308c27-dab7-4680-b98b-c99e5eb0d70c"
            );
            assert_eq!(
                instances[5]["id"].as_str().unwrap(),
                "9020cf58-8f7b-4d91-ba6c-17513beed764"
            );
            let states = [
                "PENDING", "ACTIVE", "COMPLETED", "ABORTED", "SUSPENDED", "ERROR",
            ];
            for inst in instances {
                assert!(states.contains(&inst["state"].as_str().unwrap()));
            }
        }
    }

    #[tokio::test]
    async fn test_filter_by_completed_parent() {
        let ids = filtered_ids(json!("3619de44-13be-4225-bd22-725a9a8ccb2a")).await;
        assert_eq!(
            ids,
            vec![
                "e1308c27-dab7-4680-b98b-c99e5eb0d70c",
                "d7b911f8-2eaa-4adb-b392-089e2a40ae03",
            ]
        );
    }

    #[tokio::test]
    async fn test_filter_by_active_parent() {
        let ids = filtered_ids(json!("f0df27b1-85f9-442b-8720-aa2d6fdb0877")).await;
        assert_eq!(
            ids,
            vec![
                "70a4ead8-0597-403c-b361-361100b5614b",
                "9020cf58-8f7b-4d91-ba6c-17513beed764",
            ]
        );
    }

    #[tokio::test]
    async fn test_null_parent_matches_root_instances() {
        let ids = filtered_ids(json!(null)).await;
        assert_eq!(
            ids,
            vec![
                "3619de44-13be-4225-bd22-725a9a8ccb2a",
                "f0df27b1-85f9-442b-8720-aa2d6fdb0877",
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_parent_matches_nothing() {
        let ids = filtered_ids(json!("nonexistent-id")).await;
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_missing_filter_is_rejected() {
        let schema = build_schema();
        let resp = schema.execute("{ ProcessInstances { id } }").await;
        assert!(!resp.errors.is_empty());
    }

    #[tokio::test]
    async fn test_user_task_instances_is_empty() {
        let schema = build_schema();
        let resp = schema
            .execute("{ UserTaskInstances(filter: { limit: 10 }) { id } }")
            .await;
        assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);
        let data = resp.data.into_json().unwrap();
        assert_eq!(data["UserTaskInstances"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_open_node_serializes_null_exit() {
        let schema = build_schema();
        let request = Request::new(
            "query($f: ProcessInstanceFilter!) { ProcessInstances(filter: $f) { nodes { id exit } } }",
        )
        .variables(Variables::from_json(json!({
            "f": { "parentProcessInstanceId": null }
        })));
        let resp = schema.execute(request).await;
        assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);
        let data = resp.data.into_json().unwrap();
        let open: Vec<&serde_json::Value> = data["ProcessInstances"]
            .as_array()
            .unwrap()
            .iter()
            .flat_map(|p| p["nodes"].as_array().unwrap())
            .filter(|n| n["exit"].is_null())
            .collect();
        assert_eq!(open.len(), 1);
        assert_eq!(
            open[0]["id"].as_str().unwrap(),
            "ebee96bb-ec8c-4e12-bb04-015ada9684f6"
        );
    }
}
