#![no_main]
use arbitrary::Arbitrary;
use dotpath::{PathOptions, Value};
use libfuzzer_sys::fuzz_target;
use serde_json::Map;

#[derive(Debug)]
struct ArbitraryJson(serde_json::Value);

impl<'a> Arbitrary<'a> for ArbitraryJson {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(21)?;
        let value = match node_type {
            0 => serde_json::Value::Null,
            1 => serde_json::Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                serde_json::Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3..=6 => serde_json::Value::Number(u.arbitrary::<i8>()?.into()),
            7..=10 => serde_json::Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryJson> = u.arbitrary()?;
                serde_json::Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryJson)> = u.arbitrary()?;
                serde_json::Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryJson(value))
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    root: ArbitraryJson,
    leaf: ArbitraryJson,
    path: String,
    slash_separated: bool,
    include_non_enumerable: bool,
}

fn set_get(input: Input) {
    let Ok(root) = serde_json::from_value::<Value>(input.root.0) else {
        return;
    };
    let Ok(leaf) = serde_json::from_value::<Value>(input.leaf.0) else {
        return;
    };
    let options = PathOptions::default()
        .with_separator(if input.slash_separated { "/" } else { "." })
        .include_non_enumerable(input.include_non_enumerable);

    let before = root.to_string();
    let Ok(updated) = options.set(&root, input.path.as_str(), leaf.clone()) else {
        assert!(root.is_nil());
        return;
    };
    assert_eq!(root.to_string(), before, "input was mutated");

    // Writes never see non-enumerable properties, so neither does the read
    // that checks them.
    let read = options
        .clone()
        .include_non_enumerable(false)
        .get(&updated, input.path.as_str())
        .expect("set never returns a nil root");
    assert!(
        read.is_some_and(|v| v.same_value_zero(&leaf)),
        "value written at {:?} did not read back",
        input.path
    );

    // Reads with hidden properties visible must not panic either.
    let _ = options.get(&root, input.path.as_str());
    let _ = options.update(&root, input.path.as_str(), |v| v);
}

fuzz_target!(|input: Input| set_get(input));
