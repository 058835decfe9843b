use crate::{
    consts::{ERROR_FIELD, ERROR_FIELD_LENGTH},
    Result,
};

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use geo::Polygon;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize)]
struct Feature<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: Map<String, Value>,
    geometry: Geometry<'a>,
}

#[derive(Serialize)]
struct Geometry<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(serialize_with = "serialize_rings")]
    coordinates: &'a Polygon,
}

fn serialize_rings<S: serde::Serializer>(
    polygon: &&Polygon,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let rings: Vec<Vec<[f64; 2]>> = std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(|ring| ring.coords().map(|c| [c.x, c.y]).collect())
        .collect();
    rings.serialize(serializer)
}

/// Polygon layer written as a GeoJSON FeatureCollection.
///
/// Features are streamed as they are added, [`EnvelopeLayer::finish`] closes
/// the collection.
pub struct EnvelopeLayer<W: Write> {
    writer: W,
    fields: Vec<String>,
    count: usize,
}

impl EnvelopeLayer<BufWriter<File>> {
    /// Truncates `path` if it already exists
    pub fn create(
        path: &Path,
        name: &str,
        fields: Vec<String>,
        epsg: u16,
    ) -> Result<EnvelopeLayer<BufWriter<File>>> {
        let writer = BufWriter::new(File::create(path)?);
        EnvelopeLayer::new(writer, name, fields, epsg)
    }
}

impl<W: Write> EnvelopeLayer<W> {
    /// `fields` are the cloned input fields, the error field is added after them
    pub fn new(mut writer: W, name: &str, fields: Vec<String>, epsg: u16) -> Result<Self> {
        let crs = serde_json::json!({
            "type": "name",
            "properties": { "name": format!("urn:ogc:def:crs:EPSG::{epsg}") }
        });

        write!(
            writer,
            "{{\"type\":\"FeatureCollection\",\"name\":{},\"crs\":{},\"features\":[",
            serde_json::to_string(name)?,
            crs
        )?;

        Ok(EnvelopeLayer {
            writer,
            fields,
            count: 0,
        })
    }

    /// `attributes` must line up with the layer fields
    pub fn insert(
        &mut self,
        attributes: &[Option<String>],
        error: Option<&str>,
        geometry: &Polygon,
    ) -> Result<()> {
        let mut properties = Map::with_capacity(self.fields.len() + 1);
        for (name, value) in self.fields.iter().zip(attributes) {
            properties.insert(
                name.clone(),
                value.clone().map(Value::String).unwrap_or(Value::Null),
            );
        }
        properties.insert(
            ERROR_FIELD.to_string(),
            error
                .map(|e| Value::String(truncate_chars(e, ERROR_FIELD_LENGTH)))
                .unwrap_or(Value::Null),
        );

        let feature = Feature {
            kind: "Feature",
            properties,
            geometry: Geometry {
                kind: "Polygon",
                coordinates: geometry,
            },
        };

        if self.count > 0 {
            self.writer.write_all(b",")?;
        }
        self.writer.write_all(b"\n")?;
        serde_json::to_writer(&mut self.writer, &feature)?;

        self.count += 1;
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        log::debug!("Closing envelope layer after {} features", self.count);
        self.writer.write_all(b"\n]}\n")?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
