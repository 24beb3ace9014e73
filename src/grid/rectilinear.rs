use serde::{Deserialize, Serialize};
use crate::error::Error;
use crate::graph::GridGraph;
use crate::index_space::Axis;
use super::{FaceList, GridBuilder, HGridData};




/**
 * A logically rectangular grid, optionally periodic in either direction.
 *
 * Neighbors in i are separated by `e1u` and share a face of width `e2u`;
 * neighbors in j are separated by `e2v` and share a face of width `e1v`.
 * The metric of an edge is taken at the U or V point on the upper side of
 * its first column, so a wrap edge from the last column or row uses the
 * metric stored there.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rectilinear {
    pub iperio: bool,
    pub jperio: bool,
}

impl Default for Rectilinear {
    fn default() -> Self {
        Self { iperio: true, jperio: false }
    }
}

impl GridBuilder for Rectilinear {
    fn build(&self, hgrid: &HGridData) -> Result<GridGraph, Error> {
        let mut faces = FaceList::new(hgrid.index_space());
        faces.connect_axis(hgrid, Axis::I, self.iperio);
        faces.connect_axis(hgrid, Axis::J, self.jperio);
        Ok(faces.finish())
    }
}
