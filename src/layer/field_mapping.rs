use crate::{consts::ERROR_FIELD, parameters::FieldParameters, Error, Result};

use std::collections::HashMap;

// never copied over to the envelope layer
const SKIP_FIELDS: [&str; 3] = ["objectid", "shape", ERROR_FIELD];

/// Column positions of the fields a point record is built from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMapping {
    pub scale: usize,
    pub size: usize,
    pub x: usize,
    pub y: usize,
    /// columns cloned onto the envelope layer, in input order
    pub passthrough: Vec<(usize, String)>,
}

impl FieldMapping {
    pub fn new<'a>(
        headers: impl IntoIterator<Item = &'a str>,
        fields: &FieldParameters,
    ) -> Result<FieldMapping> {
        let headers: Vec<&str> = headers.into_iter().collect();

        // first occurrence wins if a name repeats with different case
        let mut lookup: HashMap<String, usize> = HashMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            lookup.entry(name.trim().to_lowercase()).or_insert(i);
        }

        let index = |name: &str| {
            lookup
                .get(&name.trim().to_lowercase())
                .copied()
                .ok_or_else(|| Error::MissingField(name.to_string()))
        };

        let scale = index(&fields.scale)?;
        let size = index(&fields.size)?;
        let x = index(&fields.x)?;
        let y = index(&fields.y)?;

        let passthrough = headers
            .iter()
            .enumerate()
            .filter(|(i, name)| {
                *i != x && *i != y && !SKIP_FIELDS.contains(&name.trim().to_lowercase().as_str())
            })
            .map(|(i, name)| (i, name.trim().to_string()))
            .collect();

        Ok(FieldMapping {
            scale,
            size,
            x,
            y,
            passthrough,
        })
    }

    pub fn passthrough_names(&self) -> impl Iterator<Item = &str> {
        self.passthrough.iter().map(|(_, name)| name.as_str())
    }
}
