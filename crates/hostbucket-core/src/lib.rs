pub mod config;
pub mod logging;

pub mod aggregate;
pub mod bucket;
pub mod fetch;
pub mod lookup;
pub mod normalize;
pub mod parse;
pub mod pipeline;
pub mod sources;
pub mod writer;
