//! Conversion of a staggered C-grid into the graph of adjacent water columns
//! used by neutral surface solvers. Every column is a node; two columns that
//! share a U or V face are joined by an edge carrying the distance between
//! their T points and the width of the face.

pub mod rectilinear;
pub mod tripolar;

use std::convert::TryFrom;
use std::str::FromStr;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use crate::error::Error;
use crate::field::Field2d;
use crate::graph::GridGraph;
use crate::index_space::{Axis, IndexSpace};

pub use rectilinear::Rectilinear;
pub use tripolar::{FoldPivot, Tripolar};




/**
 * The horizontal C-grid metrics, in meters. `e1*` are widths in the i
 * direction and `e2*` widths in the j direction, taken at U and V points.
 * All four arrays share one `(ny, nx)` shape.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHGridData")]
pub struct HGridData {
    e1u: Field2d,
    e1v: Field2d,
    e2u: Field2d,
    e2v: Field2d,
}

#[derive(Deserialize)]
struct RawHGridData {
    e1u: Field2d,
    e1v: Field2d,
    e2u: Field2d,
    e2v: Field2d,
}

impl TryFrom<RawHGridData> for HGridData {
    type Error = Error;

    fn try_from(raw: RawHGridData) -> Result<Self, Self::Error> {
        Self::new(raw.e1u, raw.e1v, raw.e2u, raw.e2v)
    }
}




// ============================================================================
impl HGridData {

    pub fn new(e1u: Field2d, e1v: Field2d, e2u: Field2d, e2v: Field2d) -> Result<Self, Error> {
        let shape = e1u.dim();

        for (name, field) in [("e1v", &e1v), ("e2u", &e2u), ("e2v", &e2v)].iter() {
            if field.dim() != shape {
                return Err(Error::configuration(format!(
                    "{} has shape {:?} but e1u has shape {:?}", name, field.dim(), shape)))
            }
        }
        if shape.0 == 0 || shape.1 == 0 {
            return Err(Error::configuration(format!("empty horizontal grid {:?}", shape)))
        }
        Ok(Self { e1u, e1v, e2u, e2v })
    }

    /**
     * A grid of square cells with the given width everywhere.
     */
    pub fn uniform(shape: (usize, usize), width: f64) -> Result<Self, Error> {
        let field = Field2d::uniform(shape, width);
        Self::new(field.clone(), field.clone(), field.clone(), field)
    }

    pub fn shape(&self) -> (usize, usize) {
        self.e1u.dim()
    }

    pub fn e1u(&self) -> &Field2d {
        &self.e1u
    }

    pub fn e1v(&self) -> &Field2d {
        &self.e1v
    }

    pub fn e2u(&self) -> &Field2d {
        &self.e2u
    }

    pub fn e2v(&self) -> &Field2d {
        &self.e2v
    }

    pub fn index_space(&self) -> IndexSpace {
        IndexSpace::from_shape(self.shape())
    }

    /**
     * Return `(dist, distperp)` for the face on the upper side of `index`
     * along `axis`: the U face for `Axis::I`, the V face for `Axis::J`.
     */
    pub fn face(&self, index: (usize, usize), axis: Axis) -> (f64, f64) {
        match axis {
            Axis::I => (self.e1u.get(index), self.e2u.get(index)),
            Axis::J => (self.e2v.get(index), self.e1v.get(index)),
        }
    }
}




/// A strategy for turning C-grid metrics into a grid graph. Implementations
/// differ only in how the domain edges are stitched together.
///
pub trait GridBuilder {
    fn build(&self, hgrid: &HGridData) -> Result<GridGraph, Error>;
}




/**
 * Selector for a grid builder, as it appears in configuration.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GridKind {
    Rectilinear(Rectilinear),
    Tripolar(Tripolar),
}




// ============================================================================
impl GridKind {

    pub fn builder(&self) -> &dyn GridBuilder {
        match self {
            GridKind::Rectilinear(builder) => builder,
            GridKind::Tripolar(builder) => builder,
        }
    }

    pub fn build(&self, hgrid: &HGridData) -> Result<GridGraph, Error> {
        info!("building {:?} grid graph for shape {:?}", self, hgrid.shape());
        self.builder().build(hgrid)
    }
}

impl Default for GridKind {
    fn default() -> Self {
        GridKind::Rectilinear(Rectilinear::default())
    }
}

impl FromStr for GridKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rectilinear" => Ok(GridKind::Rectilinear(Rectilinear::default())),
            "tripolar" | "orca" => Ok(GridKind::Tripolar(Tripolar::default())),
            _ => Err(Error::configuration(format!("unknown grid type: {}", s))),
        }
    }
}




/**
 * Build the graph of a rectilinear NEMO grid with the given periodicity.
 * Global ORCA configurations are periodic in i and not in j.
 */
pub fn build_nemo_hgrid(hgrid: &HGridData, iperio: bool, jperio: bool) -> Result<GridGraph, Error> {
    Rectilinear { iperio, jperio }.build(hgrid)
}

/**
 * Build a grid graph with the builder named by `grid_type`, using that
 * builder's default topology.
 */
pub fn build_grid(hgrid: &HGridData, grid_type: &str) -> Result<GridGraph, Error> {
    grid_type.parse::<GridKind>()?.build(hgrid)
}




/**
 * Accumulates the faces of a grid into a graph. Faces whose distance or
 * width is not a finite positive number are dropped and counted.
 */
pub(crate) struct FaceList {
    space: IndexSpace,
    graph: GridGraph,
    skipped: usize,
}




// ============================================================================
impl FaceList {

    pub(crate) fn new(space: IndexSpace) -> Self {
        let graph = GridGraph::new(space.len());
        Self { space, graph, skipped: 0 }
    }

    pub(crate) fn connect(&mut self, from: (usize, usize), to: (usize, usize), (dist, distperp): (f64, f64)) {
        let valid = |x: f64| x.is_finite() && x > 0.0;

        if valid(dist) && valid(distperp) {
            let a = self.space.row_major_offset(from);
            let b = self.space.row_major_offset(to);
            self.graph.insert(a, b, dist, distperp)
        } else {
            self.skipped += 1
        }
    }

    /**
     * Join every column to its forward neighbor along `axis`, wrapping around
     * the domain when `periodic` is set.
     */
    pub(crate) fn connect_axis(&mut self, hgrid: &HGridData, axis: Axis, periodic: bool) {
        let space = self.space.clone();

        for index in space.iter() {
            if let Some(next) = space.next_along(index, axis, periodic) {
                self.connect(index, next, hgrid.face(index, axis))
            }
        }
    }

    pub(crate) fn finish(self) -> GridGraph {
        debug!(
            "grid graph has {} nodes and {} edges ({} degenerate faces skipped)",
            self.graph.num_nodes(),
            self.graph.len(),
            self.skipped);
        self.graph
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::{build_grid, build_nemo_hgrid, GridKind, HGridData, Rectilinear};
    use crate::error::Error;
    use crate::field::Field2d;

    #[test]
    fn metric_shapes_must_agree() {
        let a = Field2d::uniform((3, 3), 1.0);
        let b = Field2d::uniform((3, 4), 1.0);
        assert!(matches!(
            HGridData::new(a.clone(), a.clone(), b, a),
            Err(Error::ConfigurationError(_))));
    }

    #[test]
    fn decoded_grids_with_mismatched_metrics_are_rejected() {
        #[derive(serde::Serialize)]
        struct Stored {
            e1u: Field2d,
            e1v: Field2d,
            e2u: Field2d,
            e2v: Field2d,
        }
        let a = Field2d::uniform((3, 3), 1.0);
        let b = Field2d::uniform((2, 2), 1.0);
        let stored = Stored { e1u: a.clone(), e1v: a.clone(), e2u: b, e2v: a };

        let mut buffer = Vec::new();
        ciborium::ser::into_writer(&stored, &mut buffer).unwrap();
        assert!(ciborium::de::from_reader::<HGridData, _>(buffer.as_slice()).is_err());

        let buffer = rmp_serde::encode::to_vec_named(&stored).unwrap();
        assert!(rmp_serde::decode::from_read::<_, HGridData>(buffer.as_slice()).is_err());
    }

    #[test]
    fn decoded_grids_build_like_constructed_ones() {
        let hgrid = HGridData::new(
            Field2d::uniform((3, 4), 10.0),
            Field2d::uniform((3, 4), 20.0),
            Field2d::uniform((3, 4), 30.0),
            Field2d::uniform((3, 4), 40.0)).unwrap();
        let mut buffer = Vec::new();
        ciborium::ser::into_writer(&hgrid, &mut buffer).unwrap();
        let decoded: HGridData = ciborium::de::from_reader(buffer.as_slice()).unwrap();

        assert_eq!(decoded.e2u().get((0, 0)), 30.0);
        assert_eq!(GridKind::default().build(&decoded).unwrap(), build_nemo_hgrid(&hgrid, true, false).unwrap());
    }

    #[test]
    fn empty_grids_are_rejected() {
        assert!(HGridData::uniform((0, 4), 1.0).is_err());
    }

    #[test]
    fn grid_kind_parses_selectors() {
        assert_eq!("rectilinear".parse::<GridKind>().unwrap(), GridKind::Rectilinear(Rectilinear { iperio: true, jperio: false }));
        assert!(matches!("tripolar".parse::<GridKind>().unwrap(), GridKind::Tripolar(_)));
        assert!(matches!("icosahedral".parse::<GridKind>(), Err(Error::ConfigurationError(_))));
    }

    #[test]
    fn unknown_grid_type_fails_loudly() {
        let hgrid = HGridData::uniform((3, 3), 1.0).unwrap();
        assert!(build_grid(&hgrid, "curvilinear").is_err());
        assert_eq!(build_grid(&hgrid, "rectilinear").unwrap(), build_nemo_hgrid(&hgrid, true, false).unwrap());
    }

    #[test]
    fn grid_kind_reads_tagged_configuration() {
        #[derive(serde::Serialize)]
        struct Tagged {
            r#type: &'static str,
            jperio: bool,
        }
        let mut buffer = Vec::new();
        ciborium::ser::into_writer(&Tagged { r#type: "rectilinear", jperio: true }, &mut buffer).unwrap();
        let kind: GridKind = ciborium::de::from_reader(buffer.as_slice()).unwrap();
        assert_eq!(kind, GridKind::Rectilinear(Rectilinear { iperio: true, jperio: true }));
    }
}
