use crate::error::Error;




/// Polynomial coefficients indexed as `table[zh][zt][zs]`: the outer array
/// holds one triangle per power of the scaled depth, each row of a triangle
/// one power of the scaled temperature, and each row the coefficients of
/// ascending powers of the scaled salinity.
pub type Table = [&'static [&'static [f64]]; 4];




/**
 * A Boussinesq seawater equation of state fitted as a polynomial in scaled
 * variables, in the form used by NEMO. Salinity enters through
 * `zs = sqrt(|S + rdelta_s| * r1_s0)`, temperature through `zt = T * r1_t0`
 * and depth through `zh = Z * r1_z0`. In-situ density is the S/T-dependent
 * polynomial plus a reference profile that depends on depth alone.
 */
#[derive(Debug)]
pub struct Polynomial {
    pub rdelta_s: f64,
    pub r1_s0: f64,
    pub r1_t0: f64,
    pub r1_z0: f64,
    pub density: Table,
    pub density_t: Table,
    pub density_s: Table,
    pub reference: [f64; 6],
}




// ============================================================================
impl Polynomial {

    #[inline]
    fn scaled(&self, s: f64, t: f64, z: f64) -> (f64, f64, f64) {
        let zs = ((s + self.rdelta_s).abs() * self.r1_s0).sqrt();
        let zt = t * self.r1_t0;
        let zh = z * self.r1_z0;
        (zs, zt, zh)
    }

    /**
     * The S/T-dependent part of density, `((zn3 zh + zn2) zh + zn1) zh + zn0`.
     */
    #[inline]
    pub fn perturbation(&self, s: f64, t: f64, z: f64) -> f64 {
        let (zs, zt, zh) = self.scaled(s, t, z);
        evaluate(&self.density, zs, zt, zh)
    }

    /**
     * The depth-only reference profile `r0(z)`, zero at the surface.
     */
    #[inline]
    pub fn reference_profile(&self, z: f64) -> f64 {
        let zh = z * self.r1_z0;
        horner(&self.reference, zh) * zh
    }

    #[inline]
    pub fn density(&self, s: f64, t: f64, z: f64) -> f64 {
        self.perturbation(s, t, z) + self.reference_profile(z)
    }

    /**
     * Return `(d_rho/d_S, d_rho/d_T)`. The salinity derivative is divided by
     * `zs`, so it is non-finite at `S == -rdelta_s`.
     */
    #[inline]
    pub fn raw_partials(&self, s: f64, t: f64, z: f64) -> (f64, f64) {
        let (zs, zt, zh) = self.scaled(s, t, z);
        self.partials_scaled(zs, zt, zh)
    }

    #[inline]
    pub fn density_partials(&self, s: f64, t: f64, z: f64) -> Result<(f64, f64), Error> {
        let (zs, zt, zh) = self.scaled(s, t, z);

        if zs == 0.0 {
            Err(Error::DomainError { quantity: "salinity", value: s })
        } else {
            Ok(self.partials_scaled(zs, zt, zh))
        }
    }

    #[inline]
    fn partials_scaled(&self, zs: f64, zt: f64, zh: f64) -> (f64, f64) {
        let beta = evaluate(&self.density_s, zs, zt, zh) / zs;
        let alpha = evaluate(&self.density_t, zs, zt, zh);
        (beta, alpha)
    }
}




// ============================================================================
#[inline]
fn horner(c: &[f64], x: f64) -> f64 {
    c.iter().rev().fold(0.0, |acc, &a| acc * x + a)
}

#[inline]
fn nested(rows: &[&[f64]], zs: f64, zt: f64) -> f64 {
    rows.iter().rev().fold(0.0, |acc, row| acc * zt + horner(row, zs))
}

#[inline]
fn evaluate(table: &Table, zs: f64, zt: f64, zh: f64) -> f64 {
    table.iter().rev().fold(0.0, |acc, rows| acc * zh + nested(rows, zs, zt))
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::{evaluate, horner, Table};

    #[test]
    fn horner_evaluates_ascending_coefficients() {
        assert_eq!(horner(&[1.0, 2.0, 3.0], 2.0), 1.0 + 2.0 * 2.0 + 3.0 * 4.0);
        assert_eq!(horner(&[], 2.0), 0.0);
    }

    #[test]
    fn nesting_order_is_depth_then_temperature_then_salinity() {
        // rho = 1 + 2 zs + 3 zt + 4 zh + 5 zs zh
        const TABLE: Table = [
            &[&[1.0, 2.0], &[3.0]],
            &[&[4.0, 5.0]],
            &[],
            &[],
        ];
        let (zs, zt, zh) = (0.5, 0.25, 2.0);
        let expected = 1.0 + 2.0 * zs + 3.0 * zt + 4.0 * zh + 5.0 * zs * zh;
        assert_eq!(evaluate(&TABLE, zs, zt, zh), expected);
    }
}
