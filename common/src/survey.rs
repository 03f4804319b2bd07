//! # Survey Store Models
//!
//! Persisted rows of the survey database: a `Node` is a sensor position, a
//! `TargetObservation` is one MAC sighting attributed to a node.
//!
//! Every target row references an existing node (declared in the schema; not
//! re-checked at the application layer).

/// A survey node: a known sensor location.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
}

/// One detected MAC address with signal data, belonging to a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetObservation {
    pub mac: String,
    /// Signal strength in dBm.
    pub rssi: i64,
    /// Frequency in MHz.
    pub freq: i64,
    /// Unix timestamp of the sighting.
    pub timestamp: i64,
}

/// A node joined with every target observed from it.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeReport {
    pub node: Node,
    pub targets: Vec<TargetObservation>,
}
