//! Scalar data model for the Tally report engine
//!
//! This crate defines the fixed scalar contract shared by the data source
//! readers and the aggregation layer:
//! - The `DataTypeCode` enumeration tagging every scalar kind
//! - The `ScalarValue` union pairing each tag with its native payload
//! - Supporting payload types for time spans and spatial data

pub mod data_type;
pub mod value;

pub use data_type::*;
pub use value::*;
