//! Export functionality for model documents

mod bbmodel;

use crate::Result;
use crate::document::Document;
use std::path::Path;

pub use bbmodel::{model_name_from_path, to_json_string, write_bbmodel};

/// File extension of the target format
pub const EXTENSION: &str = "bbmodel";

/// Extension trait for writing documents to disk
pub trait DocumentExport {
    /// Write the document as a `.bbmodel` file
    fn write_bbmodel<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl DocumentExport for Document {
    fn write_bbmodel<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_bbmodel(self, path.as_ref())
    }
}
