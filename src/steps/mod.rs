pub mod generate_indices;
pub mod prepare_layers;

pub use self::generate_indices::{generate_indices, write_envelopes, RunSummary};
pub use self::prepare_layers::{default_output_path, prepare_layers, PreparedLayers};
