use std::collections::BTreeMap;

use crate::types::{DetectionResult, FaceProperty};

/// Presentation form of a detection: `Maybe` is shown as `No`.
pub fn present(result: DetectionResult) -> DetectionResult {
    match result {
        DetectionResult::Maybe => DetectionResult::No,
        other => other,
    }
}

pub fn present_attributes(
    attributes: &BTreeMap<FaceProperty, DetectionResult>,
) -> BTreeMap<FaceProperty, DetectionResult> {
    attributes
        .iter()
        .map(|(&property, &result)| (property, present(result)))
        .collect()
}
