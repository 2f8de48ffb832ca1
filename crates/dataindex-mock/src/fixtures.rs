//! Immutable fixture dataset backing the mock data index.
//!
//! Built once at first access and shared by reference across requests.
//! Nothing mutates these records at runtime; every query reads the same
//! six process instances in the same insertion order.

use once_cell::sync::Lazy;

use crate::graphql::types::{NodeInstance, ProcessInstance, ProcessInstanceState};

static PROCESS_INSTANCES: Lazy<Vec<ProcessInstance>> = Lazy::new(build_dataset);

/// The full fixture collection, in fixed insertion order.
pub fn process_instances() -> &'static [ProcessInstance] {
    &PROCESS_INSTANCES
}

/// Null-aware parent match: both null is a match, one null is not,
/// otherwise plain string equality.
pub fn parent_matches(instance: &ProcessInstance, wanted: Option<&str>) -> bool {
    match (instance.parent_process_instance_id.as_deref(), wanted) {
        (None, None) => true,
        (Some(have), Some(want)) => have == want,
        _ => false,
    }
}

fn instance(
    id: &str,
    process_id: &str,
    parent: Option<&str>,
    process_name: &str,
    state: ProcessInstanceState,
    variables: &str,
    nodes: Vec<NodeInstance>,
) -> ProcessInstance {
    ProcessInstance {
        id: id.to_string(),
        process_id: process_id.to_string(),
        process_name: Some(process_name.to_string()),
        parent_process_instance_id: parent.map(str::to_string),
        root_process_instance_id: None,
        root_process_id: None,
        roles: Vec::new(),
        state,
        endpoint: None,
        nodes,
        variables: Some(variables.to_string()),
        start: None,
        end: None,
    }
}

fn node(
    name: &str,
    node_type: &str,
    definition_id: &str,
    id: &str,
    enter: &str,
    exit: Option<&str>,
) -> NodeInstance {
    NodeInstance {
        id: id.to_string(),
        name: name.to_string(),
        node_type: node_type.to_string(),
        definition_id: definition_id.to_string(),
        enter: enter.to_string(),
        exit: exit.map(str::to_string),
    }
}

fn build_dataset() -> Vec<ProcessInstance> {
    vec![
        instance(
            "e1308c27-dab7-4680-b98b-c99e5eb0d70c",
            "hotelBooking",
            Some("3619de44-13be-4225-bd22-725a9a8ccb2a"),
            "HotelBooking",
            ProcessInstanceState::Completed,
            r#"{"trip":{"begin":"2019-09-30T22:00:00Z[UTC]","city":"Brisbane","country":"India","end":"2019-10-25T22:00:00Z[UTC]","visaRequired":false},"hotel":{"address":{"city":"Brisbane","country":"India","street":"street","zipCode":"12345"},"bookingNumber":"XX-012345","name":"Perfect hotel","phone":"09876543"},"traveller":{"address":{"city":"Bangalore","country":"India","street":"test","zipCode":"560093"},"email":"ajaganat@redhat.com","firstName":"Ajay","lastName":"Jaganathan","nationality":"Polish"}}"#,
            vec![
                node(
                    "End Event 1",
                    "EndEventNode",
                    "EndEvent_1",
                    "6dac63bc-3fae-466f-b58a-b85af189d9ad",
                    "2019-10-16T04:44:32.932Z",
                    Some("2019-10-16T04:44:32.932Z"),
                ),
                node(
                    "Book hotel",
                    "WorkItemNode",
                    "ServiceTask_1",
                    "03125a62-655d-4640-98a2-82b5172f7544",
                    "2019-10-16T04:44:32.929Z",
                    Some("2019-10-16T04:44:32.932Z"),
                ),
                node(
                    "StartProcess",
                    "StartNode",
                    "StartEvent_1",
                    "98a41db9-e1b5-4333-a15f-22e6e0a6297f",
                    "2019-10-16T04:44:32.928Z",
                    Some("2019-10-16T04:44:32.929Z"),
                ),
            ],
        ),
        instance(
            "d7b911f8-2eaa-4adb-b392-089e2a40ae03",
            "flightBooking",
            Some("3619de44-13be-4225-bd22-725a9a8ccb2a"),
            "FlightBooking",
            ProcessInstanceState::Completed,
            r#"{"flight":{"arrival":"2019-10-25T22:00:00Z[UTC]","departure":"2019-09-30T22:00:00Z[UTC]","flightNumber":"MX555"},"trip":{"begin":"2019-09-30T22:00:00Z[UTC]","city":"Brisbane","country":"India","end":"2019-10-25T22:00:00Z[UTC]","visaRequired":false},"traveller":{"address":{"city":"Bangalore","country":"India","street":"test","zipCode":"560093"},"email":"ajaganat@redhat.com","firstName":"Ajay","lastName":"Jaganathan","nationality":"Polish"}}"#,
            vec![
                node(
                    "End Event 1",
                    "EndEventNode",
                    "EndEvent_1",
                    "59fe733c-4eff-4b97-8d80-4e7609a3feaf",
                    "2019-10-16T04:44:32.938Z",
                    Some("2019-10-16T04:44:32.938Z"),
                ),
                node(
                    "Book flight",
                    "WorkItemNode",
                    "ServiceTask_1",
                    "28b1ca3d-5134-49c5-be48-8002f65b8dae",
                    "2019-10-16T04:44:32.938Z",
                    Some("2019-10-16T04:44:32.938Z"),
                ),
                node(
                    "StartProcess",
                    "StartNode",
                    "StartEvent_1",
                    "efd5216f-bf3a-4a6f-92a6-679cde23948d",
                    "2019-10-16T04:44:32.938Z",
                    Some("2019-10-16T04:44:32.938Z"),
                ),
            ],
        ),
        instance(
            "3619de44-13be-4225-bd22-725a9a8ccb2a",
            "travels",
            None,
            "travels",
            ProcessInstanceState::Completed,
            r#"{"flight":{"arrival":"2019-10-25T22:00:00Z[UTC]","departure":"2019-09-30T22:00:00Z[UTC]","flightNumber":"MX555"},"trip":{"begin":"2019-09-30T22:00:00Z[UTC]","city":"Brisbane","country":"India","end":"2019-10-25T22:00:00Z[UTC]","visaRequired":false},"hotel":{"address":{"city":"Brisbane","country":"India","street":"street","zipCode":"12345"},"bookingNumber":"XX-012345","name":"Perfect hotel","phone":"09876543"},"traveller":{"address":{"city":"Bangalore","country":"India","street":"test","zipCode":"560093"},"email":"ajaganat@redhat.com","firstName":"Ajay","lastName":"Jaganathan","nationality":"Polish"}}"#,
            vec![
                node(
                    "End Event 1",
                    "EndEventNode",
                    "EndEvent_1",
                    "f6b400d4-2795-4f1c-a0a1-5e931475bd63",
                    "2019-10-16T04:56:42.927Z",
                    Some("2019-10-16T04:56:42.927Z"),
                ),
                node(
                    "Confirm travel",
                    "HumanTaskNode",
                    "UserTask_2",
                    "2826eed2-8156-455e-a319-a5060a2a792c",
                    "2019-10-16T04:44:32.941Z",
                    Some("2019-10-16T04:56:42.927Z"),
                ),
                node(
                    "Book Hotel",
                    "SubProcessNode",
                    "CallActivity_1",
                    "eb6941da-ccb1-450c-b6ac-c06113db44dd",
                    "2019-10-16T04:44:32.927Z",
                    Some("2019-10-16T04:44:32.937Z"),
                ),
                node(
                    "Join",
                    "Join",
                    "ParallelGateway_2",
                    "902556e9-3914-4dcb-94d3-daef64d1274c",
                    "2019-10-16T04:44:32.94Z",
                    Some("2019-10-16T04:44:32.941Z"),
                ),
                node(
                    "Book Flight",
                    "SubProcessNode",
                    "CallActivity_2",
                    "15df98c6-7d20-475f-a74a-460d4f3c52bb",
                    "2019-10-16T04:44:32.937Z",
                    Some("2019-10-16T04:44:32.94Z"),
                ),
                node(
                    "Book",
                    "Split",
                    "ParallelGateway_1",
                    "b0c975c1-ae37-4fd0-a9e8-0e4516dab5ba",
                    "2019-10-16T04:44:32.926Z",
                    Some("2019-10-16T04:44:32.937Z"),
                ),
                node(
                    "Join",
                    "Join",
                    "ExclusiveGateway_2",
                    "0bce313d-e674-4c5b-ac53-a43d80ff4b33",
                    "2019-10-16T04:44:32.926Z",
                    Some("2019-10-16T04:44:32.926Z"),
                ),
                node(
                    "is visa required",
                    "Split",
                    "ExclusiveGateway_1",
                    "a8dce6f6-cd1e-4455-ab56-33ace8f0364a",
                    "2019-10-16T04:44:32.925Z",
                    Some("2019-10-16T04:44:32.926Z"),
                ),
                node(
                    "Visa check",
                    "RuleSetNode",
                    "BusinessRuleTask_1",
                    "1f9f3b3c-bd2a-49b3-bd8b-826c7d1913a9",
                    "2019-10-16T04:44:32.873Z",
                    Some("2019-10-16T04:44:32.925Z"),
                ),
                node(
                    "StartProcess",
                    "StartNode",
                    "StartEvent_1",
                    "17e3c74c-88e9-4e4d-82b5-2e9d3f38aadb",
                    "2019-10-16T04:44:32.871Z",
                    Some("2019-10-16T04:44:32.873Z"),
                ),
            ],
        ),
        instance(
            "f0df27b1-85f9-442b-8720-aa2d6fdb0877",
            "travels",
            None,
            "travels",
            ProcessInstanceState::Active,
            r#"{"flight":{"arrival":"2019-10-30T22:00:00Z[UTC]","departure":"2019-09-30T22:00:00Z[UTC]","flightNumber":"MX555"},"hotel":{"address":{"city":"Bangalore","country":"India","street":"street","zipCode":"12345"},"bookingNumber":"XX-012345","name":"Perfect hotel","phone":"09876543"},"trip":{"begin":"2019-09-30T22:00:00Z[UTC]","city":"Bangalore","country":"India","end":"2019-10-30T22:00:00Z[UTC]","visaRequired":false},"traveller":{"address":{"city":"Bangalore","country":"Poland","street":"Bangalore","zipCode":"560093"},"email":"ajaganat@redhat.com","firstName":"Ajay","lastName":"Jaganathan","nationality":"Polish"}}"#,
            vec![
                node(
                    "Book Flight",
                    "SubProcessNode",
                    "CallActivity_2",
                    "fec270e7-afc1-4612-bbdf-43e4d79d1612",
                    "2019-10-16T04:57:04.375Z",
                    Some("2019-10-16T04:57:04.378Z"),
                ),
                // Still active: the confirm step is waiting on a human.
                node(
                    "Confirm travel",
                    "HumanTaskNode",
                    "UserTask_2",
                    "ebee96bb-ec8c-4e12-bb04-015ada9684f6",
                    "2019-10-16T04:57:04.382Z",
                    None,
                ),
                node(
                    "Join",
                    "Join",
                    "ParallelGateway_2",
                    "73d98813-4bb9-4b18-b76d-2974f8e1de0c",
                    "2019-10-16T04:57:04.381Z",
                    Some("2019-10-16T04:57:04.381Z"),
                ),
                node(
                    "Book Hotel",
                    "SubProcessNode",
                    "CallActivity_1",
                    "04e1c3dc-c37c-4fc0-b253-dea189e62357",
                    "2019-10-16T04:57:04.378Z",
                    Some("2019-10-16T04:57:04.381Z"),
                ),
                node(
                    "Book",
                    "Split",
                    "ParallelGateway_1",
                    "c6beb2de-107d-47cd-997c-d484aa3aadaa",
                    "2019-10-16T04:57:04.375Z",
                    Some("2019-10-16T04:57:04.378Z"),
                ),
                node(
                    "Join",
                    "Join",
                    "ExclusiveGateway_2",
                    "a1516462-3e70-45ee-80d4-069ea363dccc",
                    "2019-10-16T04:57:04.375Z",
                    Some("2019-10-16T04:57:04.375Z"),
                ),
                node(
                    "is visa required",
                    "Split",
                    "ExclusiveGateway_1",
                    "f44296c1-4eca-4195-b9aa-5d7e027e34e4",
                    "2019-10-16T04:57:04.375Z",
                    Some("2019-10-16T04:57:04.375Z"),
                ),
                node(
                    "Visa check",
                    "RuleSetNode",
                    "BusinessRuleTask_1",
                    "112504e6-8642-4e54-9aa5-46b9d156bc9a",
                    "2019-10-16T04:57:04.367Z",
                    Some("2019-10-16T04:57:04.375Z"),
                ),
                node(
                    "StartProcess",
                    "StartNode",
                    "StartEvent_1",
                    "e1814458-aca4-45b4-bd8a-4c3a71de71b3",
                    "2019-10-16T04:57:04.367Z",
                    Some("2019-10-16T04:57:04.367Z"),
                ),
            ],
        ),
        instance(
            "70a4ead8-0597-403c-b361-361100b5614b",
            "flightBooking",
            Some("f0df27b1-85f9-442b-8720-aa2d6fdb0877"),
            "FlightBooking",
            ProcessInstanceState::Completed,
            r#"{"flight":{"arrival":"2019-10-30T22:00:00Z[UTC]","departure":"2019-09-30T22:00:00Z[UTC]","flightNumber":"MX555"},"trip":{"begin":"2019-09-30T22:00:00Z[UTC]","city":"Bangalore","country":"India","end":"2019-10-30T22:00:00Z[UTC]","visaRequired":false},"traveller":{"address":{"city":"Bangalore","country":"Poland","street":"Bangalore","zipCode":"560093"},"email":"ajaganat@redhat.com","firstName":"Ajay","lastName":"Jaganathan","nationality":"Polish"}}"#,
            vec![
                node(
                    "End Event 1",
                    "EndEventNode",
                    "EndEvent_1",
                    "354b5354-a6bf-44e2-9395-9c628523cac8",
                    "2019-10-16T04:57:04.376Z",
                    Some("2019-10-16T04:57:04.376Z"),
                ),
                node(
                    "Book flight",
                    "WorkItemNode",
                    "ServiceTask_1",
                    "a6e1b4c8-85b6-4ace-acab-6ab21be8ad0d",
                    "2019-10-16T04:57:04.376Z",
                    Some("2019-10-16T04:57:04.376Z"),
                ),
                node(
                    "StartProcess",
                    "StartNode",
                    "StartEvent_1",
                    "718da164-24e6-426a-a8be-ad3b60a8b658",
                    "2019-10-16T04:57:04.376Z",
                    Some("2019-10-16T04:57:04.376Z"),
                ),
            ],
        ),
        instance(
            "9020cf58-8f7b-4d91-ba6c-17513beed764",
            "hotelBooking",
            Some("f0df27b1-85f9-442b-8720-aa2d6fdb0877"),
            "HotelBooking",
            ProcessInstanceState::Completed,
            r#"{"trip":{"begin":"2019-09-30T22:00:00Z[UTC]","city":"Bangalore","country":"India","end":"2019-10-30T22:00:00Z[UTC]","visaRequired":false},"hotel":{"address":{"city":"Bangalore","country":"India","street":"street","zipCode":"12345"},"bookingNumber":"XX-012345","name":"Perfect hotel","phone":"09876543"},"traveller":{"address":{"city":"Bangalore","country":"Poland","street":"Bangalore","zipCode":"560093"},"email":"ajaganat@redhat.com","firstName":"Ajay","lastName":"Jaganathan","nationality":"Polish"}}"#,
            vec![
                node(
                    "End Event 1",
                    "EndEventNode",
                    "EndEvent_1",
                    "6846df98-3484-4f02-a48d-a5e599fa5532",
                    "2019-10-16T04:57:04.38Z",
                    Some("2019-10-16T04:57:04.38Z"),
                ),
                node(
                    "Book hotel",
                    "WorkItemNode",
                    "ServiceTask_1",
                    "93083686-38c8-4e77-b05a-d00e6a196a1d",
                    "2019-10-16T04:57:04.379Z",
                    Some("2019-10-16T04:57:04.38Z"),
                ),
                node(
                    "StartProcess",
                    "StartNode",
                    "StartEvent_1",
                    "dd64920c-71ef-4070-b0fb-a861846a1d0e",
                    "2019-10-16T04:57:04.379Z",
                    Some("2019-10-16T04:57:04.379Z"),
                ),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_order_is_fixed() {
        let ids: Vec<&str> = process_instances().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "e1308c27-dab7-4680-b98b-c99e5eb0d70c",
                "d7b911f8-2eaa-4adb-b392-089e2a40ae03",
                "3619de44-13be-4225-bd22-725a9a8ccb2a",
                "f0df27b1-85f9-442b-8720-aa2d6fdb0877",
                "70a4ead8-0597-403c-b361-361100b5614b",
                "9020cf58-8f7b-4d91-ba6c-17513beed764",
            ]
        );
    }

    #[test]
    fn test_every_instance_carries_nodes() {
        for p in process_instances() {
            assert!(!p.nodes.is_empty(), "instance {} has no nodes", p.id);
        }
    }

    #[test]
    fn test_only_the_active_confirm_step_is_open() {
        let open: Vec<&NodeInstance> = process_instances()
            .iter()
            .flat_map(|p| p.nodes.iter())
            .filter(|n| n.exit.is_none())
            .collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].id, "ebee96bb-ec8c-4e12-bb04-015ada9684f6");
        assert_eq!(open[0].node_type, "HumanTaskNode");
    }

    #[test]
    fn test_parent_matches_three_way() {
        let root = &process_instances()[2];
        let child = &process_instances()[0];

        assert!(parent_matches(root, None));
        assert!(!parent_matches(root, Some("3619de44-13be-4225-bd22-725a9a8ccb2a")));
        assert!(parent_matches(child, Some("3619de44-13be-4225-bd22-725a9a8ccb2a")));
        assert!(!parent_matches(child, None));
        assert!(!parent_matches(child, Some("nonexistent-id")));
    }
}
