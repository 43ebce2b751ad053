pub mod batch;
pub mod image_loader;
pub mod palette_extractor;
pub mod pipeline;

pub use batch::{collect_inputs, output_path_for, run_batch, BatchReport};
pub use palette_extractor::{extract_palette, format_palette, load_palette};
pub use pipeline::Pearlerizer;
