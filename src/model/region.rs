//! Post content regions (text, image, embed).

use std::collections::HashMap;

use heck::ToLowerCamelCase;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::entities::Asset;
use super::raw::{RawAsset, RawRegion};

/// Region kind. Kinds this crate does not know keep the server's string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionKind {
    Text,
    Image,
    Embed,
    Other(String),
}

impl RegionKind {
    fn parse(kind: &str) -> Self {
        match kind {
            "text" => RegionKind::Text,
            "image" => RegionKind::Image,
            "embed" => RegionKind::Embed,
            other => RegionKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RegionKind::Text => "text",
            RegionKind::Image => "image",
            RegionKind::Embed => "embed",
            RegionKind::Other(kind) => kind,
        }
    }
}

impl Serialize for RegionKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionLinks {
    pub assets: String,
}

/// A normalized region. `id` is `{postId}-{index}` so order survives merges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<RegionKind>,
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<RegionLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset: Option<Asset>,
}

/// Assets delivered with a post, indexed for region lookups.
#[derive(Debug, Default)]
pub struct AssetIndex<'a> {
    by_id: HashMap<&'a str, &'a RawAsset>,
}

impl<'a> AssetIndex<'a> {
    pub fn new(assets: Option<&'a [RawAsset]>) -> Self {
        let by_id = assets
            .unwrap_or_default()
            .iter()
            .filter_map(|asset| asset.id.as_deref().map(|id| (id, asset)))
            .collect();
        Self { by_id }
    }

    fn resolve(&self, id: &str) -> Option<Asset> {
        self.by_id.get(id).and_then(|raw| Asset::from_raw(raw))
    }
}

/// Normalize one region list of a post.
///
/// Returns `None` when the source list is absent so a sparse response
/// never replaces regions fetched earlier.
pub fn parse_regions(
    owner_id: &str,
    regions: Option<&[RawRegion]>,
    assets: &AssetIndex<'_>,
) -> Option<Vec<Region>> {
    let regions = regions?;
    Some(
        regions
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let kind = raw.kind.as_deref().map(RegionKind::parse);
                let asset_id = raw.links.as_ref().and_then(|links| links.assets.clone());
                let asset = match (&kind, asset_id.as_deref()) {
                    (Some(RegionKind::Image), Some(id)) => assets.resolve(id),
                    _ => None,
                };
                Region {
                    id: format!("{}-{}", owner_id, index),
                    kind,
                    data: raw.data.clone().map(camelize_keys).unwrap_or(Value::Null),
                    links: asset_id.map(|assets| RegionLinks { assets }),
                    asset,
                }
            })
            .collect(),
    )
}

/// Recursively rewrite object keys to lowerCamelCase.
pub fn camelize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (key.to_lower_camel_case(), camelize_keys(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(camelize_keys).collect()),
        other => other,
    }
}
