//! Readers that pick the NEMO variables needed for neutral surface work out
//! of a dataset and rename them to canonical names and dimensions. Each
//! loader returns a field set with one entry per canonical name; a variable
//! that cannot be found is an error entry rather than a failure of the load.

pub mod dataset;

use std::collections::BTreeMap;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use crate::error::Error;
use crate::grid::HGridData;

pub use dataset::{Dataset, Format, Mask, Variable};




/**
 * Canonical name of the vertical dimension of T-point variables.
 */
pub const VERT_DIM: &str = "z_t";

/**
 * Canonical names of the horizontal dimensions.
 */
pub const I_DIM: &str = "x";
pub const J_DIM: &str = "y";




/**
 * Canonical variables keyed by name. An entry that failed to load carries
 * the reason.
 */
pub type FieldSet = BTreeMap<String, Result<Variable, Error>>;




/**
 * Variable and dimension names of the horizontal grid metrics in the mesh
 * file.
 */
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HGridNames {
    pub e1u: String,
    pub e2u: String,
    pub e1v: String,
    pub e2v: String,
    pub i_dim: String,
    pub j_dim: String,
}

impl Default for HGridNames {
    fn default() -> Self {
        Self {
            e1u: "e1u".into(),
            e2u: "e2u".into(),
            e1v: "e1v".into(),
            e2v: "e2v".into(),
            i_dim: "x".into(),
            j_dim: "y".into(),
        }
    }
}




/**
 * Variable and dimension names of the vertical grid and masks.
 */
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZGridNames {
    pub deptht: String,
    pub tmask3d: String,
    pub tmask2d: String,
    pub vert_dim: String,
    pub i_dim: String,
    pub j_dim: String,
}

impl Default for ZGridNames {
    fn default() -> Self {
        Self {
            deptht: "gdept_0".into(),
            tmask3d: "tmask".into(),
            tmask2d: "tmaskutil".into(),
            vert_dim: "nav_lev".into(),
            i_dim: "x".into(),
            j_dim: "y".into(),
        }
    }
}




/**
 * Variable and dimension names of the tracer output.
 */
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TsNames {
    pub to: String,
    pub so: String,
    pub vert_dim: String,
    pub i_dim: String,
    pub j_dim: String,
}

impl Default for TsNames {
    fn default() -> Self {
        Self {
            to: "to".into(),
            so: "so".into(),
            vert_dim: "deptht".into(),
            i_dim: "x".into(),
            j_dim: "y".into(),
        }
    }
}




/**
 * Vertical grid: depth of T points (positive down, meters) and the 3D and
 * surface land/sea masks.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZGridData {
    pub deptht: Variable,
    pub tmask3d: Mask,
    pub tmask2d: Mask,
}




/**
 * Conservative (or potential) temperature and absolute (or practical)
 * salinity, with land points set to NaN.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TsData {
    pub to: Variable,
    pub so: Variable,
}




// ============================================================================
fn rename_dims(dataset: &mut Dataset, renames: &[(&str, &str)]) {
    for (from, to) in renames {
        dataset.rename_dim(from, to)
    }
}

fn pick(dataset: &Dataset, canonical: &str, name: &str, squeeze: bool) -> Result<Variable, Error> {
    match dataset.get(name) {
        Ok(var) if squeeze => Ok(var.clone().squeeze()),
        Ok(var) => Ok(var.clone()),
        Err(e) => {
            warn!("{} ({}) not loaded: {}", canonical, name, e);
            Err(e)
        }
    }
}

fn take(fields: &mut FieldSet, name: &str) -> Result<Variable, Error> {
    fields
        .remove(name)
        .unwrap_or_else(|| Err(Error::missing_field(name, "field set")))
}




/**
 * Load the horizontal grid metrics `e1u`, `e2u`, `e1v` and `e2v`.
 */
pub fn load_hgriddata(mut dataset: Dataset, names: &HGridNames) -> FieldSet {
    info!("loading horizontal grid from {}", dataset.source());
    rename_dims(&mut dataset, &[(names.i_dim.as_str(), I_DIM), (names.j_dim.as_str(), J_DIM)]);

    [("e1u", &names.e1u), ("e2u", &names.e2u), ("e1v", &names.e1v), ("e2v", &names.e2v)]
        .iter()
        .map(|(canonical, name)| (canonical.to_string(), pick(&dataset, canonical, name, true)))
        .collect()
}




/**
 * Load the T-point depths and the land/sea masks. Masks come back as 0/1
 * variables.
 */
pub fn load_zgriddata(mut dataset: Dataset, names: &ZGridNames) -> FieldSet {
    info!("loading vertical grid from {}", dataset.source());
    rename_dims(&mut dataset, &[
        (names.i_dim.as_str(), I_DIM),
        (names.j_dim.as_str(), J_DIM),
        (names.vert_dim.as_str(), VERT_DIM),
    ]);

    let mut fields = FieldSet::new();
    fields.insert("deptht".into(), pick(&dataset, "deptht", &names.deptht, true));

    for (canonical, name) in [("tmask3d", &names.tmask3d), ("tmask2d", &names.tmask2d)].iter() {
        let mask = pick(&dataset, canonical, name, true).map(|v| Mask::from_variable(v).to_variable());
        fields.insert(canonical.to_string(), mask);
    }
    fields
}




/**
 * Load temperature and salinity, setting every point that `tmask3d` marks
 * as land to NaN. Leading dimensions (time) are kept.
 */
pub fn load_tsdata(mut dataset: Dataset, tmask3d: &Mask, names: &TsNames) -> FieldSet {
    info!("loading tracers from {}", dataset.source());
    rename_dims(&mut dataset, &[
        (names.i_dim.as_str(), I_DIM),
        (names.j_dim.as_str(), J_DIM),
        (names.vert_dim.as_str(), VERT_DIM),
    ]);

    [("to", &names.to), ("so", &names.so)]
        .iter()
        .map(|(canonical, name)| {
            let var = pick(&dataset, canonical, name, false).and_then(|mut var| {
                var.mask_where(tmask3d)?;
                Ok(var)
            });
            (canonical.to_string(), var)
        })
        .collect()
}




// ============================================================================
impl HGridData {

    /**
     * Assemble the horizontal grid from a loaded field set.
     */
    pub fn from_fields(mut fields: FieldSet) -> Result<Self, Error> {
        let e1u = take(&mut fields, "e1u")?.into_field2d()?;
        let e1v = take(&mut fields, "e1v")?.into_field2d()?;
        let e2u = take(&mut fields, "e2u")?.into_field2d()?;
        let e2v = take(&mut fields, "e2v")?.into_field2d()?;
        Self::new(e1u, e1v, e2u, e2v)
    }
}




// ============================================================================
impl ZGridData {

    pub fn from_fields(mut fields: FieldSet) -> Result<Self, Error> {
        let deptht = take(&mut fields, "deptht")?;
        let tmask3d = Mask::from_variable(take(&mut fields, "tmask3d")?);
        let tmask2d = Mask::from_variable(take(&mut fields, "tmask2d")?);

        if deptht.shape != tmask3d.shape {
            return Err(Error::configuration(format!(
                "deptht has shape {:?} but tmask3d has shape {:?}", deptht.shape, tmask3d.shape)))
        }
        Ok(Self { deptht, tmask3d, tmask2d })
    }

    /**
     * Return the number of levels.
     */
    pub fn num_levels(&self) -> usize {
        self.deptht.dim_size(VERT_DIM).unwrap_or(0)
    }
}




// ============================================================================
impl TsData {

    pub fn from_fields(mut fields: FieldSet) -> Result<Self, Error> {
        let to = take(&mut fields, "to")?;
        let so = take(&mut fields, "so")?;

        if to.shape != so.shape {
            return Err(Error::configuration(format!(
                "to has shape {:?} but so has shape {:?}", to.shape, so.shape)))
        }
        Ok(Self { to, so })
    }
}
