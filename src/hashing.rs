//! Canonicalización JSON y hash de definición.
//!
//! El hash de definición de un task se calcula sobre el JSON canónico de su
//! lista ordenada de identificadores: claves de objeto en orden
//! lexicográfico, arrays en su orden original. Mismo task => mismo hex.

use serde_json::Value;

/// Serializa un `Value` en forma canónica (determinista).
pub fn to_canonical_json(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => serde_json::to_string(s).unwrap(),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(to_canonical_json).collect();
            format!("[{}]", inner.join(","))
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let inner: Vec<String> = entries.into_iter()
                                            .map(|(k, v)| format!("{}:{}", serde_json::to_string(k).unwrap(), to_canonical_json(v)))
                                            .collect();
            format!("{{{}}}", inner.join(","))
        }
    }
}

/// Hashea un string y devuelve hex (blake3).
pub fn hash_str(input: &str) -> String {
    blake3::hash(input.as_bytes()).to_hex().to_string()
}

/// Hash de una lista ordenada de identificadores de step.
pub fn hash_identifiers(ids: &[&str]) -> String {
    let ids_json = serde_json::json!(ids);
    hash_str(&to_canonical_json(&ids_json))
}
