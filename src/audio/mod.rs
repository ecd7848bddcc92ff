pub mod file;
pub mod validation;

pub use file::{mime_type_for_name, AudioFile, WavInfo};
pub use validation::AcceptRule;
