use crate::internal::common::error::{ErrorKind, TresError};
use crate::internal::filter::{JobDescriptor, TresDimension};
use crate::internal::tests::utils::{create_filter, example_table, job_per_node};

#[test]
fn test_modify_concrete_resource_denied_for_any_count() {
    let filter = create_filter(example_table());
    for request in ["gpu:a10", "gpu:a10:0", "gpu:a10:1", "gpu:a10:16"] {
        let error = filter.job_modify(&job_per_node(request)).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::AccessDenied);
    }
}

#[test]
fn test_modify_every_tier_denied() {
    let filter = create_filter(example_table());
    for name in ["gpu:a100", "gg:g5", "gpu", "gg"] {
        assert_eq!(
            filter.job_modify(&job_per_node(&format!("{name}:2"))),
            Err(TresError::AccessDenied {
                dimension: TresDimension::PerNode,
                name: name.to_string(),
            })
        );
    }
}

#[test]
fn test_modify_unrelated_allowed() {
    let filter = create_filter(example_table());
    let job = JobDescriptor::default()
        .with_slot(TresDimension::PerJob, "license:matlab:2")
        .with_slot(TresDimension::PerSocket, "mem");
    filter.job_modify(&job).unwrap();
    filter.job_modify(&JobDescriptor::default()).unwrap();
}

#[test]
fn test_modify_reports_first_dimension() {
    let filter = create_filter(example_table());
    let job = JobDescriptor::default()
        .with_slot(TresDimension::PerTask, "license:x,gg:g3")
        .with_slot(TresDimension::PerSocket, "gpu:a10");
    let error = filter.job_modify(&job).unwrap_err();
    insta::assert_snapshot!(error.to_string(), @"tres_per_task: update of gg:g3 is not allowed");
}

#[test]
fn test_modify_governed_with_oversized_count_denied() {
    let filter = create_filter(example_table());
    assert_eq!(
        filter.job_modify(&job_per_node("gpu:a10:99999999999999999999999")),
        Err(TresError::AccessDenied {
            dimension: TresDimension::PerNode,
            name: "gpu:a10".to_string(),
        })
    );
}

#[test]
fn test_modify_unrelated_with_oversized_count_allowed() {
    let filter = create_filter(example_table());
    filter
        .job_modify(&job_per_node("license:x:99999999999999999999999"))
        .unwrap();
}
