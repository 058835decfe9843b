use crate::{
    consts::TARGET_EPSG,
    parameters::{FieldParameters, FileParameters, FootprintParameters},
};

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Build tile envelope polygons from a point layer of aerial photo centroids
#[derive(Parser, Clone, Debug)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log every rejected record, RUST_LOG takes precedence
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Create a polygon per photo covering its ground footprint
    GenerateIndices(GenerateIndices),
}

#[derive(clap::Args, Clone, Debug)]
pub struct GenerateIndices {
    /// Point layer as a csv file with a header row
    pub file: PathBuf,

    /// Output location, defaults to <file stem>_tilenvelope.geojson next to the input
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// The scale at which the image was taken
    #[arg(long, default_value = "Scale")]
    pub scale: String,

    /// The size of the image in inches, e.g. 9x9
    #[arg(long, default_value = "FrameFormat")]
    pub size: String,

    /// Field holding the x coordinate of the centroid
    #[arg(long, default_value = "x")]
    pub x_field: String,

    /// Field holding the y coordinate of the centroid
    #[arg(long, default_value = "y")]
    pub y_field: String,

    /// EPSG code of the input coordinates, reprojected to NAD83 / UTM 12N if different
    #[arg(long = "input-sr", default_value_t = TARGET_EPSG)]
    pub input_sr: u16,
}

impl Args {
    /// Default log filter when RUST_LOG is not set
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

impl GenerateIndices {
    pub fn file_parameters(&self) -> FileParameters {
        FileParameters {
            input: self.file.clone(),
            output: self.output.clone(),
        }
    }

    pub fn field_parameters(&self) -> FieldParameters {
        FieldParameters {
            scale: self.scale.clone(),
            size: self.size.clone(),
            x: self.x_field.clone(),
            y: self.y_field.clone(),
        }
    }

    pub fn footprint_parameters(&self) -> FootprintParameters {
        FootprintParameters::default().with_source_epsg(self.input_sr)
    }
}
