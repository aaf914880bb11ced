//! Analysis of painted heat fields

/// Summary statistics of cell values
pub mod statistics;
