use serde::{Deserialize, Serialize};
use crate::eos::EquationOfState;
use crate::error::Error;
use crate::loader::{TsData, Variable, ZGridData, VERT_DIM};




/**
 * A single water column: salinity, temperature and depth (positive down) at
 * each model level, shallowest first. Land levels hold NaN in `s` and `t`.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cast {
    pub s: Vec<f64>,
    pub t: Vec<f64>,
    pub z: Vec<f64>,
}




// ============================================================================
impl Cast {

    pub fn new(s: Vec<f64>, t: Vec<f64>, z: Vec<f64>) -> Result<Self, Error> {
        if s.len() != t.len() || s.len() != z.len() {
            return Err(Error::configuration(format!(
                "cast arrays have lengths {}, {} and {}", s.len(), t.len(), z.len())))
        }
        Ok(Self { s, t, z })
    }

    /**
     * Pull the column at `(j, i)` and time index `time` out of the loaded
     * tracers. Tracers without a time dimension only accept `time == 0`.
     */
    pub fn extract(ts: &TsData, zgrid: &ZGridData, time: usize, j: usize, i: usize) -> Result<Self, Error> {
        let nz = zgrid.num_levels();

        let (s, t) = match ts.so.ndim() {
            4 if time < ts.so.shape[0] => (
                level_values(&ts.so, nz, |k| vec![time, k, j, i])?,
                level_values(&ts.to, nz, |k| vec![time, k, j, i])?),
            3 if time == 0 => (
                level_values(&ts.so, nz, |k| vec![k, j, i])?,
                level_values(&ts.to, nz, |k| vec![k, j, i])?),
            _ => return Err(Error::configuration(format!(
                "no time index {} in tracers of shape {:?}", time, ts.so.shape))),
        };
        let z = level_values(&zgrid.deptht, nz, |k| vec![k, j, i])?;

        Self::new(s, t, z)
    }

    pub fn len(&self) -> usize {
        self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /**
     * Return the indexes of the levels where salinity, temperature and depth
     * are all defined.
     */
    pub fn valid_levels(&self) -> Vec<usize> {
        (0..self.len())
            .filter(|&k| self.s[k].is_finite() && self.t[k].is_finite() && self.z[k].is_finite())
            .collect()
    }

    /**
     * Linearly interpolate salinity and temperature to depth `z`. Returns
     * `None` when `z` is above the shallowest or below the deepest valid
     * level.
     */
    pub fn interpolate(&self, z: f64) -> Option<(f64, f64)> {
        let levels = self.valid_levels();
        let (&top, &bottom) = (levels.first()?, levels.last()?);

        if !(z >= self.z[top] && z <= self.z[bottom]) {
            return None
        }
        if levels.len() == 1 {
            return Some((self.s[top], self.t[top]))
        }
        levels.windows(2).find_map(|w| {
            let (k0, k1) = (w[0], w[1]);

            if z >= self.z[k0] && z <= self.z[k1] {
                let dz = self.z[k1] - self.z[k0];
                let f = if dz > 0.0 { (z - self.z[k0]) / dz } else { 0.0 };
                Some((
                    self.s[k0] + f * (self.s[k1] - self.s[k0]),
                    self.t[k0] + f * (self.t[k1] - self.t[k0])))
            } else {
                None
            }
        })
    }

    /**
     * In-situ density at each level.
     */
    pub fn in_situ_density<E: EquationOfState + ?Sized>(&self, eos: &E) -> Vec<f64> {
        self.levels().map(|(s, t, z)| eos.density(s, t, z)).collect()
    }

    /**
     * Density of each level's water brought to the reference depth `p_ref`.
     */
    pub fn potential_density<E: EquationOfState + ?Sized>(&self, eos: &E, p_ref: f64) -> Vec<f64> {
        self.levels().map(|(s, t, _)| eos.density(s, t, p_ref)).collect()
    }

    fn levels(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        (0..self.len()).map(move |k| (self.s[k], self.t[k], self.z[k]))
    }
}




fn level_values<F>(var: &Variable, nz: usize, index: F) -> Result<Vec<f64>, Error>
where
    F: Fn(usize) -> Vec<usize>
{
    let probe = index(0);

    if probe.len() != var.ndim() || probe.iter().zip(&var.shape).any(|(k, n)| k >= n) {
        return Err(Error::configuration(format!(
            "column index {:?} does not fit variable of shape {:?}", probe, var.shape)))
    }
    if var.dim_size(VERT_DIM) != Some(nz) {
        return Err(Error::configuration(format!(
            "variable with dimensions {:?} does not have {} levels", var.dims, nz)))
    }
    Ok((0..nz).map(|k| var.get(&index(k))).collect())
}




/**
 * Return the density label of the potential density surface passing through
 * the cast at depth `z_pin`: the water found there, referenced to `p_ref`.
 */
pub fn potential_density_label<E>(cast: &Cast, eos: &E, z_pin: f64, p_ref: f64) -> Result<f64, Error>
where
    E: EquationOfState + ?Sized
{
    let (s, t) = cast
        .interpolate(z_pin)
        .ok_or(Error::DomainError { quantity: "pin depth", value: z_pin })?;
    Ok(eos.density(s, t, p_ref))
}
