//! Transcript engine: HTML discovery, decoding, text extraction and
//! batch conversion to plain-text files.
mod batch;
mod decode;
mod discover;
mod entities;
mod extract;
mod normalize;
mod persist;
mod types;

pub use batch::{convert_file, run_batch, BatchOptions};
pub use decode::{decode_document, DecodedDocument};
pub use discover::find_html_files;
pub use entities::unescape_entities;
pub use extract::{default_extractor, DomExtractor, ExtractError, Extractor, TagStripExtractor};
pub use normalize::normalize_plain_text;
pub use persist::{ensure_output_dir, write_text_file, PersistError};
pub use types::{
    BatchError, BatchReport, ConversionOutcome, FailureKind, FailureNote, FileOutcome,
};
