use super::prepare_layers::{prepare_layers, PreparedLayers};
use crate::{
    consts::BATCH_SIZE,
    footprint::{into_parts, FootprintCalculator},
    layer::{EnvelopeLayer, PointLayer},
    parameters::{FieldParameters, FileParameters, FootprintParameters},
    Result,
};

use std::io::{Read, Write};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub footprints: usize,
    pub errors: usize,
}

/// Writes one envelope feature per photo centroid in the input layer
pub fn generate_indices(
    files: &FileParameters,
    fields: &FieldParameters,
    params: &FootprintParameters,
) -> Result<RunSummary> {
    let calculator = FootprintCalculator::new(params.clone())?;

    let PreparedLayers {
        mut input,
        mut output,
        output_path,
    } = prepare_layers(files, fields, params)?;

    let summary = write_envelopes(&calculator, &mut input, &mut output)?;
    output.finish()?;

    log::info!(
        "Created {} tile envelopes out of {} photo centroids in {}",
        summary.footprints,
        summary.records,
        output_path.display()
    );
    if summary.errors > 0 {
        log::warn!(
            "{} records could not be turned into a tile envelope, see the error field",
            summary.errors
        );
    }

    Ok(summary)
}

/// The record loop. Validation errors are stored with the record,
/// only io and csv problems stop it.
pub fn write_envelopes<R: Read, W: Write>(
    calculator: &FootprintCalculator,
    input: &mut PointLayer<R>,
    output: &mut EnvelopeLayer<W>,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for record in input.records() {
        let record = record?;
        summary.records += 1;

        let outcome = record.location.clone().and_then(|location| {
            calculator.compute_footprint(location, record.scale.as_ref(), record.size.as_deref())
        });

        match &outcome {
            Ok(_) => summary.footprints += 1,
            Err(e) => {
                summary.errors += 1;
                log::debug!("record {} has an invalid {}: {e}", summary.records, e.field());
            }
        }

        let (error, geometry) = into_parts(&outcome);
        output.insert(&record.attributes, error.as_deref(), &geometry)?;

        if summary.records % BATCH_SIZE == 0 {
            log::info!("created {} polygons", summary.records);
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TARGET_EPSG;

    use serde_json::Value;

    #[test]
    fn one_feature_per_record() -> Result<()> {
        let csv = "\
x,y,Scale,FrameFormat,Filename
450000,4500000,24000,9x9,a.tif
450000,4500000,,9x9,b.tif
450000,4500000,24000,bad,c.tif
0,0,24000,9x9,d.tif
450000,,24000,9x9,e.tif
oops,4500000,24000,9x9,f.tif
";
        let calculator = FootprintCalculator::new(FootprintParameters::default())?;
        let mut input =
            PointLayer::from_reader(csv.as_bytes(), &FieldParameters::default(), TARGET_EPSG)?;
        let fields = input.mapping().passthrough_names().map(str::to_string).collect();
        let mut output = EnvelopeLayer::new(Vec::new(), "test", fields, TARGET_EPSG)?;

        let summary = write_envelopes(&calculator, &mut input, &mut output)?;
        assert_eq!(
            summary,
            RunSummary {
                records: 6,
                footprints: 1,
                errors: 5
            }
        );

        let json: Value = serde_json::from_slice(&output.finish()?)?;
        let errors: Vec<Option<&str>> = json["features"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["properties"]["error"].as_str())
            .collect();

        assert_eq!(
            errors,
            vec![
                None,
                Some("scale: None"),
                Some("size: bad"),
                Some("centroid: 0.0,0.0"),
                Some("centroid: 450000.0,None"),
                Some("centroid: oops,4500000.0")
            ]
        );

        // rejected records keep the placeholder, never null coordinates
        for feature in &json["features"].as_array().unwrap()[1..] {
            assert_eq!(
                feature["geometry"]["coordinates"],
                serde_json::json!([[[0.0, 0.0]]])
            );
        }

        assert_eq!(json["features"][3]["properties"]["Filename"], "d.tif");
        Ok(())
    }
}
