//! Minimal GeoJSON codec for block outlines in and footprints out.
//!
//! Only what the generator needs: the exterior ring of each `Polygon` feature
//! on input, closed `Polygon` features with flat properties on output.
//! GeoJSON positions are `[lon, lat]`; the core works in `(lat, lon)`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use blockgen::{Footprint, Point};
use serde::Deserialize;
use serde_json::{json, Map, Value};

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

/// One input outline ready for the core.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockFeature {
    /// Feature id, else `properties.name`, else its position in the file.
    pub label: String,
    pub ring: Vec<Point>,
}

pub fn read_blocks(path: &Path) -> Result<Vec<BlockFeature>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_blocks(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Exterior rings of all `Polygon` features; other geometries are skipped with a warning.
pub fn parse_blocks(text: &str) -> Result<Vec<BlockFeature>> {
    let fc: FeatureCollection = serde_json::from_str(text)?;
    let mut out = Vec::with_capacity(fc.features.len());
    for (index, feature) in fc.features.into_iter().enumerate() {
        let label = feature_label(&feature, index);
        let Some(geometry) = feature.geometry else {
            tracing::warn!(feature = %label, "feature has no geometry; skipped");
            continue;
        };
        if geometry.kind != "Polygon" {
            tracing::warn!(feature = %label, kind = %geometry.kind, "not a Polygon; skipped");
            continue;
        }
        let rings: Vec<Vec<Vec<f64>>> = serde_json::from_value(geometry.coordinates)
            .with_context(|| format!("polygon coordinates of feature {label}"))?;
        let Some(exterior) = rings.into_iter().next() else {
            tracing::warn!(feature = %label, "polygon without rings; skipped");
            continue;
        };
        let ring = exterior
            .iter()
            .map(|pos| match pos.as_slice() {
                [lon, lat, ..] => Ok(Point::new(*lat, *lon)),
                _ => anyhow::bail!("feature {label}: position needs [lon, lat]"),
            })
            .collect::<Result<Vec<_>>>()?;
        out.push(BlockFeature { label, ring });
    }
    Ok(out)
}

fn feature_label(feature: &Feature, index: usize) -> String {
    let from_id = feature.id.as_ref().and_then(|id| match id {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    });
    let from_name = || {
        feature
            .properties
            .as_ref()
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str)
            .map(str::to_string)
    };
    from_id
        .or_else(from_name)
        .unwrap_or_else(|| index.to_string())
}

/// Metadata attached to every generated footprint.
#[derive(Clone, Debug)]
pub struct FootprintMeta<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub source_feature: &'a str,
    pub generated_at: u64,
}

/// One footprint as a GeoJSON `Polygon` feature with a closed ring.
pub fn footprint_feature(fp: &Footprint, meta: &FootprintMeta<'_>) -> Value {
    let ring: Vec<[f64; 2]> = fp.closed_ring().iter().map(|p| [p.lon, p.lat]).collect();
    json!({
        "type": "Feature",
        "id": meta.id,
        "geometry": {
            "type": "Polygon",
            "coordinates": [ring],
        },
        "properties": {
            "id": meta.id,
            "name": meta.name,
            "source_feature": meta.source_feature,
            "generated_at": meta.generated_at,
        },
    })
}

pub fn write_collection(path: &Path, features: Vec<Value>) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let doc = json!({
        "type": "FeatureCollection",
        "features": features,
    });
    fs::write(path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
