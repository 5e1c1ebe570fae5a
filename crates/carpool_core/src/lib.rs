pub mod averages;
pub mod error;
pub mod grid;
pub mod grouping;
pub mod pipeline;
pub mod spatial;
pub mod stats;
pub mod transport;
