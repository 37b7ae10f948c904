use cascade_core::{AttributeValue, Mutation, OwnerKind, Record, RelationshipDescriptor};
use cascade_engine::{find_children, resolve_relationship, CascadeError, CascadeExecutor, CascadeOutcome};
use cascade_test_utils::{identity, InMemoryRecordService};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use uuid::Uuid;

fn parent_id() -> Uuid {
    Uuid::parse_str("aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa").unwrap()
}

fn child(type_name: &str, fk: &str) -> Record {
    Record::new(type_name, Uuid::new_v4()).with_attribute(fk, AttributeValue::Id(parent_id()))
}

fn assign_to_team() -> Mutation {
    Mutation::AssignOwner {
        owner_id: Uuid::parse_str("bbbbbbbb-bbbb-bbbb-bbbb-bbbbbbbbbbbb").unwrap(),
        owner_kind: OwnerKind::Team,
    }
}

#[tokio::test]
async fn resolver_returns_first_schema_name_match() {
    let service = InMemoryRecordService::new()
        .with_relationship("account", "account_tasks", "task", "regardingobjectid")
        .with_relationship("account", "account_notes", "annotation", "objectid");

    let descriptor = resolve_relationship(&service, "account", "account_notes")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        descriptor,
        RelationshipDescriptor {
            child_type_name: "annotation".to_string(),
            child_foreign_key_attribute: "objectid".to_string(),
        }
    );
}

#[tokio::test]
async fn resolver_is_case_sensitive_and_returns_none_on_miss() {
    let service = InMemoryRecordService::new().with_relationship(
        "account",
        "account_tasks",
        "task",
        "regardingobjectid",
    );

    assert!(resolve_relationship(&service, "account", "Account_Tasks")
        .await
        .unwrap()
        .is_none());
    assert!(resolve_relationship(&service, "account", "no_such_rel")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn locator_returns_empty_set_when_nothing_matches() {
    let service = InMemoryRecordService::new();
    let descriptor = RelationshipDescriptor {
        child_type_name: "task".to_string(),
        child_foreign_key_attribute: "regardingobjectid".to_string(),
    };

    let children = find_children(&service, &descriptor, parent_id()).await.unwrap();
    assert!(children.is_empty());
}

#[tokio::test]
async fn locator_wraps_query_faults_with_filter_context() {
    let service = InMemoryRecordService::new().fail_on("query_by_filter", "server unavailable");
    let descriptor = RelationshipDescriptor {
        child_type_name: "task".to_string(),
        child_foreign_key_attribute: "regardingobjectid".to_string(),
    };

    let err = find_children(&service, &descriptor, parent_id()).await.unwrap_err();
    match err {
        CascadeError::ChildQueryFailed {
            child_type,
            attribute,
            parent_id: pid,
            source,
        } => {
            assert_eq!(child_type, "task");
            assert_eq!(attribute, "regardingobjectid");
            assert_eq!(pid, parent_id());
            assert!(source.to_string().contains("server unavailable"));
        }
        other => panic!("expected ChildQueryFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn cascade_mutates_resolved_children_and_skips_unknown_names() {
    let child_a = child("task", "regardingobjectid");
    let child_b = child("task", "regardingobjectid");
    let service = Arc::new(
        InMemoryRecordService::new()
            .with_relationship("account", "rel_a", "task", "regardingobjectid")
            .with_record(child_a.clone())
            .with_record(child_b.clone()),
    );
    let executor = CascadeExecutor::new(service.clone());
    let parent = identity("account", parent_id());

    let outcome = executor
        .cascade(&parent, "rel_a;rel_b", &assign_to_team())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        CascadeOutcome {
            relationships_resolved: 1,
            relationships_skipped: 1,
            children_mutated: 2,
        }
    );
    let mutated: Vec<Uuid> = service
        .applied_mutations()
        .iter()
        .map(|(target, _)| target.id())
        .collect();
    assert_eq!(mutated.len(), 2);
    assert!(mutated.contains(&child_a.id));
    assert!(mutated.contains(&child_b.id));
}

#[tokio::test]
async fn single_name_behaves_like_one_element_list() {
    let seeded = || {
        Arc::new(
            InMemoryRecordService::new()
                .with_relationship("account", "rel_a", "task", "regardingobjectid")
                .with_record(
                    Record::new("task", Uuid::parse_str("cccccccc-cccc-cccc-cccc-cccccccccccc").unwrap())
                        .with_attribute("regardingobjectid", AttributeValue::Id(parent_id())),
                ),
        )
    };
    let parent = identity("account", parent_id());

    let plain = seeded();
    let outcome_plain = CascadeExecutor::new(plain.clone())
        .cascade(&parent, "rel_a", &assign_to_team())
        .await
        .unwrap();

    let listed = seeded();
    let outcome_listed = CascadeExecutor::new(listed.clone())
        .cascade(&parent, "rel_a;missing", &assign_to_team())
        .await
        .unwrap();

    assert_eq!(outcome_plain.children_mutated, outcome_listed.children_mutated);
    assert_eq!(plain.applied_mutations(), listed.applied_mutations());
}

// Some historical variants of this tool resolved metadata from the whole
// unsplit relationship string on every loop iteration, so a list of N names
// cascaded the first relationship N times. The executor resolves the current
// element instead; this test pins that behavior.
#[tokio::test]
async fn multi_name_list_resolves_each_element_independently() {
    let task = child("task", "regardingobjectid");
    let note = child("annotation", "objectid");
    let service = Arc::new(
        InMemoryRecordService::new()
            .with_relationship("account", "rel_a", "task", "regardingobjectid")
            .with_relationship("account", "rel_b", "annotation", "objectid")
            .with_record(task.clone())
            .with_record(note.clone()),
    );
    let executor = CascadeExecutor::new(service.clone());
    let parent = identity("account", parent_id());

    let outcome = executor
        .cascade(&parent, "rel_a;rel_b", &assign_to_team())
        .await
        .unwrap();

    assert_eq!(outcome.relationships_resolved, 2);
    let mutated: Vec<(String, Uuid)> = service
        .applied_mutations()
        .iter()
        .map(|(target, _)| (target.type_name().to_string(), target.id()))
        .collect();
    assert_eq!(
        mutated,
        vec![
            ("task".to_string(), task.id),
            ("annotation".to_string(), note.id),
        ]
    );
}

#[tokio::test]
async fn cascade_with_no_resolvable_relationships_is_a_noop() {
    let service = Arc::new(InMemoryRecordService::new());
    let executor = CascadeExecutor::new(service.clone());
    let parent = identity("account", parent_id());

    let outcome = executor
        .cascade(&parent, "ghost_a;ghost_b", &assign_to_team())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        CascadeOutcome {
            relationships_resolved: 0,
            relationships_skipped: 2,
            children_mutated: 0,
        }
    );
    assert!(service.applied_mutations().is_empty());
}

#[tokio::test]
async fn cascade_fails_fast_on_mutation_fault() {
    let service = Arc::new(
        InMemoryRecordService::new()
            .with_relationship("account", "rel_a", "task", "regardingobjectid")
            .with_record(child("task", "regardingobjectid"))
            .with_record(child("task", "regardingobjectid"))
            .fail_on("apply_mutation", "access denied"),
    );
    let executor = CascadeExecutor::new(service.clone());
    let parent = identity("account", parent_id());

    let err = executor
        .cascade(&parent, "rel_a", &assign_to_team())
        .await
        .unwrap_err();

    match err {
        CascadeError::MutationFailed { child, source } => {
            assert_eq!(child.type_name(), "task");
            assert!(source.to_string().contains("access denied"));
        }
        other => panic!("expected MutationFailed, got {other:?}"),
    }
    assert!(service.applied_mutations().is_empty(), "fail-fast: nothing recorded");
}

#[tokio::test]
async fn cascade_is_idempotent_over_repeat_invocations() {
    let task = child("task", "regardingobjectid");
    let service = Arc::new(
        InMemoryRecordService::new()
            .with_relationship("account", "rel_a", "task", "regardingobjectid")
            .with_record(task.clone()),
    );
    let executor = CascadeExecutor::new(service.clone());
    let parent = identity("account", parent_id());
    let mutation = Mutation::SetLifecycleState { state: 1, status: 2 };

    executor.cascade(&parent, "rel_a", &mutation).await.unwrap();
    executor.cascade(&parent, "rel_a", &mutation).await.unwrap();

    let log = service.applied_mutations();
    assert_eq!(log.len(), 2);
    assert!(log.iter().all(|(target, m)| target.id() == task.id && *m == mutation));
    let stored = service.stored_record("task", task.id).unwrap();
    assert_eq!(stored.attribute("statecode"), Some(&AttributeValue::OptionSet(1)));
    assert_eq!(stored.attribute("statuscode"), Some(&AttributeValue::OptionSet(2)));
}
