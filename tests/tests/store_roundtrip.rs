//! Survey store round-trip against a real SQLite file.

use skymap_common::survey::{Node, TargetObservation};
use skymap_core::store::SurveyStore;

#[tokio::test]
async fn insert_and_report_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = SurveyStore::open(&dir.path().join("survey.db"))
        .await
        .unwrap();

    let node = Node {
        id: "node-7".to_string(),
        lat: 48.8566,
        lon: 2.3522,
    };
    store.insert_node(&node).await.unwrap();

    let targets = [
        TargetObservation {
            mac: "de:ad:be:ef:00:01".to_string(),
            rssi: -55,
            freq: 2412,
            timestamp: 1_700_000_100,
        },
        TargetObservation {
            mac: "de:ad:be:ef:00:02".to_string(),
            rssi: -71,
            freq: 5180,
            timestamp: 1_700_000_200,
        },
    ];
    for target in &targets {
        store.insert_target(&node.id, target).await.unwrap();
    }

    let reports = store.nodes_with_targets().await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].node, node);
    assert_eq!(reports[0].targets, targets);
}
