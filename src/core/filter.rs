use crate::domain::model::{LottieDocument, RemovalReport, TransformResult, NAME_KEY};
use crate::utils::error::{EtlError, Result};
use serde_json::Value;

/// Drops every top-level layer whose `nm` equals `layer_name`.
///
/// Kept layers stay in their original order and are moved over unchanged. A
/// missing `layers` key comes back as an empty array. Entries that are not
/// JSON objects are rejected rather than skipped.
pub fn remove_named_layers(mut document: LottieDocument, layer_name: &str) -> Result<TransformResult> {
    let layers = document.take_layers()?;
    let initial_count = layers.len();

    let mut kept = Vec::with_capacity(initial_count);
    for (index, layer) in layers.into_iter().enumerate() {
        let Value::Object(fields) = &layer else {
            return Err(EtlError::InvalidDocument {
                message: format!("layers[{}] is not an object", index),
            });
        };

        // A non-string `nm` can never equal the target name.
        if fields.get(NAME_KEY).and_then(Value::as_str) == Some(layer_name) {
            tracing::debug!(index, "Dropping layer '{}'", layer_name);
            continue;
        }
        kept.push(layer);
    }

    let final_count = kept.len();
    document.set_layers(kept);

    Ok(TransformResult {
        document,
        report: RemovalReport {
            layer_name: layer_name.to_string(),
            initial_count,
            final_count,
        },
    })
}
