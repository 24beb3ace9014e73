use serde::{Deserialize, Serialize};
use crate::error::Error;
use crate::graph::GridGraph;
use crate::index_space::Axis;
use super::{FaceList, GridBuilder, HGridData};




/**
 * The point type on which the north fold of a tripolar grid pivots.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoldPivot {
    T,
    F,
}




/**
 * A tripolar (ORCA) grid: periodic in i, closed in the south, and folded
 * onto itself along the northern boundary. The arrays must not carry the
 * duplicated halo columns of NEMO output.
 *
 * With an F-point pivot the fold runs along the V faces of the last row, so
 * column `i` of that row faces column `nx - 1 - i` across it. With a T-point
 * pivot the last row lies on the fold itself, and its column `i` faces
 * column `(nx - i) % nx` of the row below.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tripolar {
    pub pivot: FoldPivot,
}

impl Default for Tripolar {
    fn default() -> Self {
        Self { pivot: FoldPivot::F }
    }
}

impl GridBuilder for Tripolar {
    fn build(&self, hgrid: &HGridData) -> Result<GridGraph, Error> {
        let (ny, nx) = hgrid.shape();
        let mut faces = FaceList::new(hgrid.index_space());

        faces.connect_axis(hgrid, Axis::I, true);
        faces.connect_axis(hgrid, Axis::J, false);

        match self.pivot {
            FoldPivot::F => {
                for i in 0..nx / 2 {
                    let from = (ny - 1, i);
                    let to = (ny - 1, nx - 1 - i);
                    faces.connect(from, to, hgrid.face(from, Axis::J))
                }
            }
            FoldPivot::T => {
                if ny < 2 {
                    return Err(Error::configuration("a T-point fold needs at least two rows"))
                }
                for i in 0..nx {
                    let m = (nx - i) % nx;
                    if m != i {
                        let mirror = (ny - 2, m);
                        faces.connect((ny - 1, i), mirror, hgrid.face(mirror, Axis::J))
                    }
                }
            }
        }
        Ok(faces.finish())
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::{FoldPivot, Tripolar};
    use crate::field::Field2d;
    use crate::grid::{build_nemo_hgrid, GridBuilder, HGridData};

    #[test]
    fn interior_matches_the_zonally_periodic_rectilinear_grid() {
        let hgrid = HGridData::uniform((4, 6), 1.0).unwrap();
        let tripolar = Tripolar { pivot: FoldPivot::F }.build(&hgrid).unwrap();
        let rectilinear = build_nemo_hgrid(&hgrid, true, false).unwrap();

        let (a, b) = rectilinear.edges();
        assert_eq!(&tripolar.edges().0[..a.len()], a);
        assert_eq!(&tripolar.edges().1[..b.len()], b);
        assert_eq!(tripolar.len(), rectilinear.len() + 3);
    }

    #[test]
    fn f_pivot_folds_the_last_row_onto_itself() {
        let hgrid = HGridData::uniform((3, 6), 1.0).unwrap();
        let graph = Tripolar { pivot: FoldPivot::F }.build(&hgrid).unwrap();
        let top = 2 * 6;
        assert!(graph.contains(top, top + 5));
        assert!(graph.contains(top + 1, top + 4));
        assert!(graph.contains(top + 2, top + 3));
        assert!(graph.degrees().values().all(|&d| d <= 4));
    }

    #[test]
    fn f_pivot_skips_the_self_facing_column_of_an_odd_row() {
        let hgrid = HGridData::uniform((2, 5), 1.0).unwrap();
        let graph = Tripolar { pivot: FoldPivot::F }.build(&hgrid).unwrap();
        assert_eq!(graph.len(), 5 * 2 + 5 + 2);
    }

    #[test]
    fn t_pivot_faces_the_mirrored_row_below() {
        let hgrid = HGridData::uniform((3, 4), 1.0).unwrap();
        let graph = Tripolar { pivot: FoldPivot::T }.build(&hgrid).unwrap();
        let (top, below) = (2 * 4, 4);

        assert!(graph.contains(top + 1, below + 3));
        assert!(graph.contains(top + 3, below + 1));
        assert_eq!(graph.len(), 4 * 3 + 4 * 2 + 2);
    }

    #[test]
    fn t_pivot_needs_two_rows() {
        let hgrid = HGridData::uniform((1, 4), 1.0).unwrap();
        assert!(Tripolar { pivot: FoldPivot::T }.build(&hgrid).is_err());
    }

    #[test]
    fn fold_edges_carry_the_northern_face_metrics() {
        let e2v = Field2d::from_function((2, 6), |j, i| (10 * j + i) as f64 + 1.0);
        let e1v = Field2d::uniform((2, 6), 7.0);
        let one = Field2d::uniform((2, 6), 1.0);
        let hgrid = HGridData::new(one.clone(), e1v, one, e2v).unwrap();
        let graph = Tripolar::default().build(&hgrid).unwrap();

        let k = graph.position(7, 10).unwrap();
        assert_eq!((graph.dist()[k], graph.distperp()[k]), (12.0, 7.0));
    }

    #[test]
    fn t_fold_edges_carry_the_mirror_face_metrics() {
        let e2v = Field2d::from_function((3, 6), |j, i| (10 * j + i) as f64 + 1.0);
        let e1v = Field2d::from_function((3, 6), |_, i| 100.0 + i as f64);
        let one = Field2d::uniform((3, 6), 1.0);
        let hgrid = HGridData::new(one.clone(), e1v, one, e2v).unwrap();
        let graph = Tripolar { pivot: FoldPivot::T }.build(&hgrid).unwrap();

        let k = graph.position(2 * 6 + 1, 6 + 5).unwrap();
        assert_eq!((graph.dist()[k], graph.distperp()[k]), (16.0, 105.0));

        let k = graph.position(2 * 6 + 4, 6 + 2).unwrap();
        assert_eq!((graph.dist()[k], graph.distperp()[k]), (13.0, 102.0));
    }
}
