//! JSON manifest parsing (`dub.json`)

use crate::{Error, Result, Value};

/// Parse a `dub.json` document into a manifest value tree.
pub fn parse(content: &str) -> Result<Value> {
    let json: serde_json::Value = serde_json::from_str(content).map_err(|e| Error::Parse {
        format: "JSON".into(),
        message: e.to_string(),
    })?;
    Value::try_from(json)
}
