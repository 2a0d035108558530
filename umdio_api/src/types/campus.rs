use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Building {
    #[serde(alias = "id")]
    pub building_id: String,
    pub name: Option<String>,
    /// Short campus code, e.g. `"IRB"`.
    pub code: Option<String>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
}

/// A shuttle route. The detail endpoint also fills in stops, directions,
/// and drawing paths.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BusRoute {
    pub route_id: String,
    pub title: Option<String>,
    pub stops: Option<Value>,
    pub directions: Option<Value>,
    pub paths: Option<Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BusStop {
    pub stop_id: String,
    pub title: Option<String>,
    pub lat: Option<f64>,
    pub long: Option<f64>,
}
