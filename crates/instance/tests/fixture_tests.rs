//! Conversion of a complete WfCommons instance file.

use wfgraph_instance::{Recipe, WorkflowInstance};

fn fixture() -> WorkflowInstance {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/montage-small.json");
    WorkflowInstance::from_path(path).expect("fixture should load")
}

#[test]
fn fixture_converts_to_expected_graph() {
    let instance = fixture();
    assert_eq!(instance.recipe(), Some(Recipe::Montage));

    let graph = instance.build_graph().expect("fixture should convert");
    assert_eq!(graph.task_count(), 6);
    assert_eq!(graph.task_name(2), Some("mDiffFit_00000003"));

    let forward: Vec<(usize, Vec<usize>)> = graph
        .forward_graph()
        .iter()
        .map(|(id, children)| (id, children.to_vec()))
        .collect();
    assert_eq!(
        forward,
        vec![
            (0, vec![2]),
            (1, vec![2]),
            (2, vec![3]),
            (3, vec![4]),
            (4, vec![5]),
            (5, vec![]),
        ]
    );

    assert_eq!(graph.cost().as_slice(), &[1.5, 2.0, 0.5, 0.25, 1.0, 4.0]);

    let weights: Vec<((usize, usize), u64)> = graph.edge_weights().iter().collect();
    assert_eq!(
        weights,
        vec![
            ((0, 2), 1200),
            ((0, 5), 1000),
            ((1, 2), 1200),
            ((1, 5), 1000),
            ((2, 3), 50),
            ((3, 4), 80),
            ((4, 5), 60),
        ]
    );
}

#[test]
fn fixture_external_inputs_are_excluded() {
    let graph = fixture().build_graph().expect("fixture should convert");

    // region header, atlas tiles and pimages.tbl are produced by no task
    assert_eq!(graph.edge_weights().incoming_bytes(0), 0);
    assert_eq!(graph.edge_weights().incoming_bytes(4), 80);
}

#[test]
fn fixture_validation_reports_mosaic_shortcuts() {
    let report = fixture()
        .build_graph()
        .expect("fixture should convert")
        .validate();

    assert!(report.is_acyclic());
    let undeclared: Vec<(usize, usize)> = report
        .undeclared_data_edges
        .iter()
        .map(|edge| (edge.producer, edge.consumer))
        .collect();
    assert_eq!(undeclared, vec![(0, 5), (1, 5)]);
}
