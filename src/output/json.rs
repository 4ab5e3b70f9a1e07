//! JSON output for network and subnet records.

use crate::error::CalcError;
use crate::models::ChildSubnet;
use crate::processing::{NetworkReport, SplitStrategy};
use serde::Serialize;
use serde_json::json;
use std::error::Error;

/// Everything one invocation produced, serialised as a single document.
#[derive(Serialize, Debug)]
pub struct JsonDocument<'a> {
    pub network: &'a NetworkReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<JsonSplit<'a>>,
}

#[derive(Serialize, Debug)]
pub struct JsonSplit<'a> {
    pub strategy: String,
    pub total: usize,
    pub subnets: &'a [ChildSubnet],
}

impl<'a> JsonSplit<'a> {
    pub fn new(strategy: SplitStrategy, total: usize, subnets: &'a [ChildSubnet]) -> JsonSplit<'a> {
        JsonSplit {
            strategy: strategy.to_string(),
            total,
            subnets,
        }
    }
}

pub fn render_json(doc: &JsonDocument) -> Result<String, Box<dyn Error>> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Error as `{"error": {"kind": ..., "message": ...}}`.
pub fn render_error_json(err: &CalcError) -> String {
    json!({
        "error": {
            "kind": err.kind(),
            "message": err.to_string(),
        }
    })
    .to_string()
}
