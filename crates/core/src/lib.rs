//! Core for the dynacsv project.
//!
//! Everything in here is independent of the AWS SDK: the item-source
//! capability and its paginated fetcher, the projection of row mappings onto
//! a fixed header, CSV emission, and the append-only output file helper.

pub mod export;
pub mod output;
pub mod source;
