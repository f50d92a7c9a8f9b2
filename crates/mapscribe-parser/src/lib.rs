//! Reading captured mind-map pages.
//!
//! This crate turns a serialized page capture into the raw geometry the
//! outline builder works from:
//!
//! 1. **Markup** ([`markup`]): a forgiving tokenizer and element tree over
//!    HTML with inline SVG, with tag/class selection and re-serialization.
//! 2. **Values** ([`values`]): parsers for transforms, lengths, styles and
//!    path data.
//! 3. **Extraction** ([`extract()`]): node records and link endpoints found
//!    through configurable [`Selectors`].

pub mod markup;
pub mod values;

mod extract;

pub use extract::{Extraction, Selectors, extract, root_label};
