//! Neutral-nemo prepares NEMO ocean model output for the computation of
//! neutral density surfaces. It binds the equations of state NEMO uses (the
//! simplified law, and the TEOS-10 and EOS-80 polynomials) into the pair of
//! functions a surface solver iterates on, density and its partial
//! derivatives in salinity and temperature. It also turns the staggered
//! C-grid metrics of a rectilinear or tripolar model domain into the graph
//! of adjacent water columns, with the distances between them and the
//! widths of the faces they share.

pub mod column;
pub mod config;
pub mod eos;
pub mod error;
pub mod field;
pub mod graph;
pub mod grid;
pub mod index_space;
pub mod loader;
