//! Seawater equations of state. Each law evaluates in-situ density and its
//! partial derivatives with respect to salinity and temperature at a point
//! (S, T, Z), with Z the depth in meters, positive downward. The salinity and
//! temperature conventions are those of the selected law: the `Teos10`
//! polynomial takes absolute salinity and conservative temperature, the
//! `Eos80` polynomial practical salinity and potential temperature. Nothing
//! here can check that the caller has matched them.

pub mod coefficients;
pub mod factory;
pub mod polynomial;
pub mod simplified;

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::Error;

pub use polynomial::Polynomial;
pub use simplified::Simplified;




/**
 * Identifier for one of the supported equations of state
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Simplified,
    Teos10,
    Eos80,
}




// ============================================================================
impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Simplified => "simplified",
            Variant::Teos10 => "teos10",
            Variant::Eos80 => "eos80",
        }
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simplified" | "seos" => Ok(Variant::Simplified),
            "teos10" => Ok(Variant::Teos10),
            "eos80" => Ok(Variant::Eos80),
            _ => Err(Error::UnsupportedVariant(s.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(fmt, "{}", self.name())
    }
}




/// The two-function contract shared by every equation of state: density,
/// and its partial derivatives `(d_rho/d_S, d_rho/d_T)` at the same point.
///
pub trait EquationOfState {
    /// In-situ density in kg/m^3.
    fn density(&self, s: f64, t: f64, z: f64) -> f64;

    /// Partial derivatives of `density` with respect to salinity and
    /// temperature, in that order. Fails with `Error::DomainError` where the
    /// law is singular.
    fn density_partials(&self, s: f64, t: f64, z: f64) -> Result<(f64, f64), Error>;
}




/**
 * An equation of state with its parameters bound. This is a small `Copy`
 * value: the polynomial tables are statics and only the simplified law
 * carries its own coefficients.
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Eos {
    Simplified(Simplified),
    Teos10,
    Eos80,
}




// ============================================================================
impl Eos {

    /**
     * Bind a variant to its parameters. The coefficient overrides are only
     * meaningful for the simplified law and are ignored otherwise.
     */
    pub fn new(variant: Variant, params: Option<Simplified>) -> Self {
        match variant {
            Variant::Simplified => Eos::Simplified(params.unwrap_or_default()),
            Variant::Teos10 => Eos::Teos10,
            Variant::Eos80 => Eos::Eos80,
        }
    }

    pub fn from_name(name: &str, params: Option<Simplified>) -> Result<Self, Error> {
        Ok(Self::new(name.parse()?, params))
    }

    pub fn variant(&self) -> Variant {
        match self {
            Eos::Simplified(_) => Variant::Simplified,
            Eos::Teos10 => Variant::Teos10,
            Eos::Eos80 => Variant::Eos80,
        }
    }

    /**
     * Return the polynomial table backing this law, if it is one of the
     * polynomial variants.
     */
    pub fn polynomial(&self) -> Option<&'static Polynomial> {
        match self {
            Eos::Simplified(_) => None,
            Eos::Teos10 => Some(&coefficients::TEOS10),
            Eos::Eos80 => Some(&coefficients::EOS80),
        }
    }

    /**
     * Partial derivatives without the pole check. At `S == -rdeltaS` the
     * salinity derivative of a polynomial law comes back non-finite.
     */
    #[inline]
    pub fn raw_partials(&self, s: f64, t: f64, z: f64) -> (f64, f64) {
        match self {
            Eos::Simplified(law) => law.partials(s, t, z),
            Eos::Teos10 => coefficients::TEOS10.raw_partials(s, t, z),
            Eos::Eos80 => coefficients::EOS80.raw_partials(s, t, z),
        }
    }
}

impl EquationOfState for Eos {

    #[inline]
    fn density(&self, s: f64, t: f64, z: f64) -> f64 {
        match self {
            Eos::Simplified(law) => law.density(s, t, z),
            Eos::Teos10 => coefficients::TEOS10.density(s, t, z),
            Eos::Eos80 => coefficients::EOS80.density(s, t, z),
        }
    }

    #[inline]
    fn density_partials(&self, s: f64, t: f64, z: f64) -> Result<(f64, f64), Error> {
        match self {
            Eos::Simplified(law) => Ok(law.partials(s, t, z)),
            Eos::Teos10 => coefficients::TEOS10.density_partials(s, t, z),
            Eos::Eos80 => coefficients::EOS80.density_partials(s, t, z),
        }
    }
}




/**
 * Evaluate in-situ density for the given variant. `params` is read only by
 * the simplified law.
 */
pub fn density(s: f64, t: f64, z: f64, variant: Variant, params: &Simplified) -> f64 {
    Eos::new(variant, Some(*params)).density(s, t, z)
}

/**
 * Evaluate `(d_rho/d_S, d_rho/d_T)` for the given variant.
 */
pub fn density_partials(s: f64, t: f64, z: f64, variant: Variant, params: &Simplified) -> Result<(f64, f64), Error> {
    Eos::new(variant, Some(*params)).density_partials(s, t, z)
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::{density, density_partials, Eos, EquationOfState, Simplified, Variant};
    use crate::error::Error;

    const VARIANTS: [Variant; 3] = [Variant::Simplified, Variant::Teos10, Variant::Eos80];

    fn central_difference(eos: &Eos, s: f64, t: f64, z: f64) -> (f64, f64) {
        let h = 1e-4;
        let ds = (eos.density(s + h, t, z) - eos.density(s - h, t, z)) / (2.0 * h);
        let dt = (eos.density(s, t + h, z) - eos.density(s, t - h, z)) / (2.0 * h);
        (ds, dt)
    }

    #[test]
    fn variant_names_parse() {
        assert_eq!("teos10".parse::<Variant>().unwrap(), Variant::Teos10);
        assert_eq!("EOS80".parse::<Variant>().unwrap(), Variant::Eos80);
        assert_eq!("simplified".parse::<Variant>().unwrap(), Variant::Simplified);
        assert_eq!(Variant::Teos10.to_string(), "teos10");
    }

    #[test]
    fn unknown_variant_is_rejected() {
        match "gsw".parse::<Variant>() {
            Err(Error::UnsupportedVariant(name)) => assert_eq!(name, "gsw"),
            _ => panic!("expected an unsupported variant"),
        }
        assert!(Eos::from_name("jmd95", None).is_err());
    }

    #[test]
    fn partials_agree_with_finite_differences() {
        let points = [(35.0, 10.0, 0.0), (30.0, 2.0, 3000.0), (34.5, 25.0, 150.0), (20.0, -1.5, 50.0)];

        for variant in VARIANTS.iter() {
            let eos = Eos::new(*variant, None);
            for &(s, t, z) in points.iter() {
                let (beta, alpha) = eos.density_partials(s, t, z).unwrap();
                let (fd_beta, fd_alpha) = central_difference(&eos, s, t, z);
                assert!(eos.density(s, t, z).is_finite());
                assert!((beta - fd_beta).abs() <= 1e-6 * beta.abs(), "{} beta at {:?}", variant, (s, t, z));
                assert!((alpha - fd_alpha).abs() <= 1e-6 * alpha.abs(), "{} alpha at {:?}", variant, (s, t, z));
            }
        }
    }

    #[test]
    fn dense_water_is_saltier_and_colder() {
        for variant in VARIANTS.iter() {
            let (beta, alpha) = density_partials(35.0, 10.0, 0.0, *variant, &Simplified::default()).unwrap();
            assert!(beta > 0.0);
            assert!(alpha < 0.0);
        }
    }

    #[test]
    fn free_functions_match_the_bound_law() {
        let params = Simplified { a0: 0.2, ..Simplified::default() };
        let eos = Eos::new(Variant::Simplified, Some(params));
        assert_eq!(density(34.0, 4.0, 800.0, Variant::Simplified, &params), eos.density(34.0, 4.0, 800.0));
        assert_eq!(density(34.0, 4.0, 800.0, Variant::Teos10, &params), Eos::Teos10.density(34.0, 4.0, 800.0));
    }

    #[test]
    fn overrides_are_ignored_by_polynomial_laws() {
        let params = Simplified { b0: 0.0, ..Simplified::default() };
        assert_eq!(Eos::new(Variant::Eos80, Some(params)), Eos::Eos80);
    }
}
