//! Discovery, fault-isolated loading, and aggregation of quiz corpora.

pub mod aggregate;
pub mod discover;
pub mod load;

pub use aggregate::aggregate;
pub use discover::{discover, Discovery, FileFilter};
pub use load::{load_corpus, load_document, CorpusLoad, CountMismatch, LoadedDocument};
