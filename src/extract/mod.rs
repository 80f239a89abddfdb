//! Regex extractors turning raw repository text into structured findings.
//!
//! Each extractor applies one fixed pattern to one file's text and yields
//! zero-or-one structured result (a list, in the properties case). The
//! patterns are regex-driven structural parsing of heterogeneous formats
//! (annotated Java source, YAML, `.properties`); they are deliberately not
//! real parsers, and the matching semantics - including their false
//! positives and negatives - are part of the scanner's contract.
//!
//! Absence of a match is always a silent, non-error outcome. The extractors
//! never fail on well-formed UTF-8 input; decoding problems are caught
//! earlier, at the host boundary.
//!
//! # Extractors
//!
//! - [`FeignExtractor`] - interpolated base-URL literals in Feign client source
//! - [`PropertiesExtractor`] - `name = http(s)://...` lines in properties files
//! - [`BootstrapExtractor`] - the multi-line integrations block in bootstrap files

mod bootstrap;
mod feign;
mod properties;

pub use bootstrap::BootstrapExtractor;
pub use feign::FeignExtractor;
pub use properties::PropertiesExtractor;
