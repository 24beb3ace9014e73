use serde::{Deserialize, Serialize};

/// Reference density of the simplified law (kg/m^3).
pub const RHO_0: f64 = 1026.0;

/// Reference temperature (degC).
pub const T_0: f64 = 10.0;

/// Reference salinity (g/kg).
pub const S_0: f64 = 35.0;




/**
 * The simplified equation of state of NEMO: a second order expansion about
 * (S0, T0) with cabbeling, plus a linear thermobaric correction in depth.
 * Coefficients default to the values of the NEMO release and each may be
 * overridden individually.
 */
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Simplified {
    /// Linear thermal expansion coefficient
    pub a0: f64,
    /// Linear haline expansion coefficient
    pub b0: f64,
    /// Cabbeling coefficient in T * S
    pub nu: f64,
    /// Cabbeling coefficient in T^2
    pub lambda1: f64,
    /// Cabbeling coefficient in S^2
    pub lambda2: f64,
    /// Thermobaric coefficient in T
    pub mu1: f64,
    /// Thermobaric coefficient in S
    pub mu2: f64,
}

impl Default for Simplified {
    fn default() -> Self {
        Self {
            a0: 1.6550e-1,
            b0: 7.6550e-1,
            nu: 2.4341e-3,
            lambda1: 5.9520e-2,
            lambda2: 7.4914e-4,
            mu1: 1.4970e-4,
            mu2: 1.1090e-5,
        }
    }
}




// ============================================================================
impl Simplified {

    #[inline]
    pub fn density(&self, s: f64, t: f64, z: f64) -> f64 {
        let dt = t - T_0;
        let ds = s - S_0;

        RHO_0
            - self.a0 * (1.0 + 0.5 * self.lambda1 * dt) * dt
            + self.b0 * (1.0 - 0.5 * self.lambda2 * ds) * ds
            - self.nu * dt * ds
            - (self.a0 * self.mu1 * dt + self.b0 * self.mu2 * ds) * z
    }

    #[inline]
    pub fn partials(&self, s: f64, t: f64, z: f64) -> (f64, f64) {
        let dt = t - T_0;
        let ds = s - S_0;

        let rho_s = self.b0 * (1.0 - self.lambda2 * ds) - self.nu * dt - self.b0 * self.mu2 * z;
        let rho_t = -self.a0 * (1.0 + self.lambda1 * dt) - self.nu * ds - self.a0 * self.mu1 * z;
        (rho_s, rho_t)
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::{Simplified, RHO_0};

    #[test]
    fn reference_state_has_reference_density() {
        assert_eq!(Simplified::default().density(35.0, 10.0, 0.0), RHO_0);
        assert_eq!(Simplified::default().density(35.0, 10.0, 4000.0), RHO_0);
    }

    #[test]
    fn partials_at_the_reference_state_are_the_linear_coefficients() {
        let law = Simplified::default();
        assert_eq!(law.partials(35.0, 10.0, 0.0), (law.b0, -law.a0));
    }

    #[test]
    fn deep_point_matches_hand_evaluation() {
        let law = Simplified::default();
        let (dt, ds, z) = (2.0 - 10.0, 30.0 - 35.0, 3000.0);
        let expected = 1026.0
            - 0.1655 * (1.0 + 0.5 * 5.952e-2 * dt) * dt
            + 0.7655 * (1.0 - 0.5 * 7.4914e-4 * ds) * ds
            - 2.4341e-3 * dt * ds
            - (0.1655 * 1.497e-4 * dt + 0.7655 * 1.109e-5 * ds) * z;
        assert!((law.density(30.0, 2.0, 3000.0) - expected).abs() < 1e-10);
    }

    #[test]
    fn thermobaric_terms_scale_with_depth() {
        let law = Simplified { mu1: 0.0, mu2: 0.0, ..Simplified::default() };
        assert_eq!(law.density(30.0, 2.0, 0.0), law.density(30.0, 2.0, 5000.0));
    }

    #[test]
    fn omitted_fields_take_default_values() {
        #[derive(serde::Serialize)]
        struct Override {
            nu: f64,
        }
        let mut buffer = Vec::new();
        ciborium::ser::into_writer(&Override { nu: 0.0 }, &mut buffer).unwrap();
        let law: Simplified = ciborium::de::from_reader(buffer.as_slice()).unwrap();
        assert_eq!(law.nu, 0.0);
        assert_eq!(law.a0, Simplified::default().a0);
        assert_eq!(law.mu2, Simplified::default().mu2);
    }
}
