use std::fs::File;
use std::path::Path;

use failure::ResultExt;
use serde::de::DeserializeOwned;

use crate::errors::*;

pub type IntentName = String;
pub type EntityName = String;

pub fn clamp_confidence(confidence: f32) -> f32 {
    if confidence.is_nan() {
        return 0.0;
    }
    confidence.max(0.0).min(1.0)
}

pub fn harmonic_mean(a: f32, b: f32) -> f32 {
    if a + b == 0.0 {
        0.0
    } else {
        2.0 * a * b / (a + b)
    }
}

pub fn mean<I: IntoIterator<Item = f32>>(values: I) -> f32 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f32
    }
}

/// Deserializes the json file at `path`, or returns `None` when the file does not exist.
pub fn load_optional_json<T, P>(path: P) -> Result<Option<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    let file = File::open(path).with_context(|_| {
        SnipsNluPlaygroundError::ModelLoad(path.to_string_lossy().to_string())
    })?;
    let value = serde_json::from_reader(file)
        .with_context(|_| format!("Invalid json file {:?}", path))?;
    Ok(Some(value))
}
