use crate::{
    consts::OUTPUT_SUFFIX,
    layer::{EnvelopeLayer, PointLayer},
    parameters::{FieldParameters, FileParameters, FootprintParameters},
    Error, Result,
};

use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

pub struct PreparedLayers {
    pub input: PointLayer<File>,
    pub output: EnvelopeLayer<BufWriter<File>>,
    pub output_path: PathBuf,
}

/// `<dir>/<stem>_tilenvelope.geojson` next to the input
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.geojson"))
}

/// Checks the input point layer and creates (or truncates) the envelope layer
/// with the input's fields cloned onto it.
///
/// Nothing is written if the input is unusable.
pub fn prepare_layers(
    files: &FileParameters,
    fields: &FieldParameters,
    params: &FootprintParameters,
) -> Result<PreparedLayers> {
    let input_path = &files.input;

    if !input_path.exists() {
        return Err(Error::MissingInput(input_path.clone()));
    }

    let is_csv = input_path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if !input_path.is_file() || !is_csv {
        return Err(Error::UnsupportedInput(input_path.clone()));
    }

    let def = crs_definitions::from_code(params.source_epsg)
        .ok_or(Error::UnknownCrs(params.source_epsg))?;
    log::debug!("Input CRS: {}", def.wkt);

    let input = PointLayer::open(input_path, fields, params.source_epsg)?;

    let output_path = files
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(input_path));

    if output_path.exists() {
        log::info!("truncating {}", output_path.display());
    } else {
        log::info!("creating {}", output_path.display());
    }

    let name = output_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let cloned_fields = input
        .mapping()
        .passthrough_names()
        .map(str::to_string)
        .collect();

    let output = EnvelopeLayer::create(&output_path, &name, cloned_fields, params.target_epsg)?;

    Ok(PreparedLayers {
        input,
        output,
        output_path,
    })
}
