//! Error taxonomy tests: stable codes and entry-point validation.

use bmssp_core::{
    BmsspBuilder, BmsspError, BmsspErrorCode, Graph, GraphError, GraphErrorCode,
};
use rstest::rstest;

#[rstest]
#[case(
    GraphError::NegativeWeight { tail: 0, target: 1, weight: -1.0 },
    GraphErrorCode::NegativeWeight,
)]
#[case(
    GraphError::NonFiniteWeight { tail: 2, target: 0 },
    GraphErrorCode::NonFiniteWeight,
)]
fn returns_expected_graph_code(#[case] error: GraphError, #[case] expected: GraphErrorCode) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
}

#[rstest]
#[case(
    BmsspError::InvalidBaseCapacity { got: 0 },
    BmsspErrorCode::InvalidBaseCapacity,
)]
#[case(BmsspError::EmptyGraph, BmsspErrorCode::EmptyGraph)]
#[case(
    BmsspError::UnknownSource { vertex: 9, vertex_count: 3 },
    BmsspErrorCode::UnknownSource,
)]
fn returns_expected_bmssp_code(#[case] error: BmsspError, #[case] expected: BmsspErrorCode) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
}

#[test]
fn empty_graph_is_rejected_before_solving() {
    let solver = BmsspBuilder::new().build().expect("default builder is valid");
    let err = solver
        .run(&Graph::new(), 0)
        .expect_err("empty graph must fail");
    assert!(matches!(err, BmsspError::EmptyGraph));
}

#[test]
fn out_of_range_source_is_rejected_before_solving() {
    let solver = BmsspBuilder::new().build().expect("default builder is valid");
    let graph = Graph::with_vertices(3);
    let err = solver.run(&graph, 3).expect_err("source must be rejected");
    assert!(matches!(
        err,
        BmsspError::UnknownSource {
            vertex: 3,
            vertex_count: 3
        }
    ));
}

#[test]
fn vertex_fields_are_plain_data_not_error_chains() {
    use std::error::Error;

    let graph_err = GraphError::NegativeWeight {
        tail: 0,
        target: 1,
        weight: -1.0,
    };
    assert!(graph_err.source().is_none());
    assert_eq!(
        graph_err.to_string(),
        "edge (0, 1) has negative weight -1"
    );

    let run_err = BmsspError::UnknownSource {
        vertex: 4,
        vertex_count: 2,
    };
    assert!(run_err.source().is_none());
    assert_eq!(
        run_err.to_string(),
        "source vertex 4 is outside the graph (vertex count 2)"
    );
}

#[test]
fn zero_capacity_override_is_rejected_at_build_time() {
    let err = BmsspBuilder::new()
        .with_base_capacity(0)
        .build()
        .expect_err("zero capacity must be rejected");
    assert!(matches!(err, BmsspError::InvalidBaseCapacity { got: 0 }));
}

#[rstest]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
fn non_finite_weights_are_rejected_at_construction(#[case] weight: f64) {
    let mut graph = Graph::new();
    let err = graph
        .add_edge(0, 1, weight)
        .expect_err("non-finite weight must be rejected");
    assert_eq!(err.code(), GraphErrorCode::NonFiniteWeight);
}

#[test]
fn error_codes_are_stable_strings() {
    assert_eq!(
        GraphErrorCode::NegativeWeight.as_str(),
        "GRAPH_NEGATIVE_WEIGHT"
    );
    assert_eq!(
        GraphErrorCode::NonFiniteWeight.as_str(),
        "GRAPH_NON_FINITE_WEIGHT"
    );
    assert_eq!(
        BmsspErrorCode::InvalidBaseCapacity.as_str(),
        "BMSSP_INVALID_BASE_CAPACITY"
    );
    assert_eq!(BmsspErrorCode::EmptyGraph.as_str(), "BMSSP_EMPTY_GRAPH");
    assert_eq!(
        BmsspErrorCode::UnknownSource.as_str(),
        "BMSSP_UNKNOWN_SOURCE"
    );
}
