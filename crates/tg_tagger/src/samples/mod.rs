//! Sample consumers built on the public API: a JSON encoder/decoder
//! and a logging field extractor.

mod json;
mod logger;
