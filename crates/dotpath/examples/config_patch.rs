//! Applies a list of `path=value` overrides to a JSON document without
//! touching the original, then prints both.
#![allow(missing_docs)]

use dotpath::{PathOptions, Value};

const DOCUMENT: &str = r#"{
    "server": { "host": "localhost", "ports": [8080, 8081] },
    "features": { "beta": false }
}"#;

const OVERRIDES: &[(&str, &str)] = &[
    ("server.ports.-1", "9090"),
    ("features.beta", "true"),
    ("logging.level", "\"debug\""),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let original: Value = serde_json::from_str(DOCUMENT)?;
    let options = PathOptions::default();

    let mut patched = original.clone();
    for (path, raw) in OVERRIDES {
        let value: Value = serde_json::from_str(raw)?;
        patched = options.set(&patched, *path, value)?;
    }

    let bumped = options.update(&patched, "server.ports.0", |port| {
        Value::from(port.as_f64().unwrap_or_default() + 1.0)
    })?;

    println!("original: {original}");
    println!("patched:  {bumped}");
    Ok(())
}
