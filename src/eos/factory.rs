use log::debug;
use rayon::prelude::*;
use crate::error::Error;
use super::{Eos, EquationOfState, Simplified, Variant};




/**
 * A bound equation of state exposed through the pair of functions an
 * iterative surface solver consumes: `eos(S, T, Z)` and `eos_s_t(S, T, Z)`.
 * The pair is immutable and holds no state beyond its coefficients; it may
 * be copied into worker threads freely.
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EosPair {
    law: Eos,
}




/**
 * Bind a variant name and optional coefficient overrides into an `EosPair`.
 * Nothing is evaluated here.
 */
pub fn make_eos_pair(name: &str, overrides: Option<Simplified>) -> Result<EosPair, Error> {
    let variant: Variant = name.parse()?;
    debug!("binding {} equation of state", variant);
    Ok(EosPair::new(Eos::new(variant, overrides)))
}




// ============================================================================
impl EosPair {

    pub fn new(law: Eos) -> Self {
        Self { law }
    }

    pub fn law(&self) -> &Eos {
        &self.law
    }

    pub fn variant(&self) -> Variant {
        self.law.variant()
    }

    #[inline]
    pub fn eos(&self, s: f64, t: f64, z: f64) -> f64 {
        self.law.density(s, t, z)
    }

    #[inline]
    pub fn eos_s_t(&self, s: f64, t: f64, z: f64) -> Result<(f64, f64), Error> {
        self.law.density_partials(s, t, z)
    }

    /**
     * Return the raw scalar callables, unadapted. The derivative function
     * performs no domain check: at the salinity pole of a polynomial law its
     * first component is non-finite.
     */
    pub fn into_fns(self) -> (
        impl Fn(f64, f64, f64) -> f64 + Copy + Send + Sync,
        impl Fn(f64, f64, f64) -> (f64, f64) + Copy + Send + Sync)
    {
        let law = self.law;
        (move |s, t, z| law.density(s, t, z), move |s, t, z| law.raw_partials(s, t, z))
    }

    /**
     * Return both functions run through the vectorizing adapter.
     */
    pub fn vectorized(self) -> (
        Vectorized<impl Fn(f64, f64, f64) -> f64 + Copy + Send + Sync>,
        Vectorized<impl Fn(f64, f64, f64) -> (f64, f64) + Copy + Send + Sync>)
    {
        let (eos, eos_s_t) = self.into_fns();
        (make_eos(eos), make_eos_s_t(eos_s_t))
    }
}

impl EquationOfState for EosPair {
    fn density(&self, s: f64, t: f64, z: f64) -> f64 {
        self.eos(s, t, z)
    }

    fn density_partials(&self, s: f64, t: f64, z: f64) -> Result<(f64, f64), Error> {
        self.eos_s_t(s, t, z)
    }
}




/**
 * A scalar function of (S, T, Z) lifted to operate element-wise on slices.
 * Salinity and temperature must have equal lengths; depth is either the
 * same length or a single value broadcast to every element. Elements are
 * evaluated in parallel on the rayon thread pool. NaN inputs (masked
 * points) yield NaN outputs.
 */
#[derive(Clone, Copy)]
pub struct Vectorized<F> {
    function: F,
}

pub fn make_eos<F>(function: F) -> Vectorized<F>
where
    F: Fn(f64, f64, f64) -> f64 + Sync
{
    Vectorized { function }
}

pub fn make_eos_s_t<F>(function: F) -> Vectorized<F>
where
    F: Fn(f64, f64, f64) -> (f64, f64) + Sync
{
    Vectorized { function }
}




// ============================================================================
impl<F> Vectorized<F> {

    /**
     * Evaluate the underlying scalar function at a single point.
     */
    pub fn scalar<R>(&self, s: f64, t: f64, z: f64) -> R
    where
        F: Fn(f64, f64, f64) -> R
    {
        (self.function)(s, t, z)
    }

    pub fn apply<R>(&self, s: &[f64], t: &[f64], z: &[f64]) -> Result<Vec<R>, Error>
    where
        F: Fn(f64, f64, f64) -> R + Sync,
        R: Send
    {
        if s.len() != t.len() {
            return Err(Error::configuration(format!(
                "salinity and temperature lengths differ: {} and {}", s.len(), t.len())))
        }
        if z.len() != 1 && z.len() != s.len() {
            return Err(Error::configuration(format!(
                "depth has length {}, expected 1 or {}", z.len(), s.len())))
        }
        let f = &self.function;
        let broadcast = z.len() == 1;

        Ok(s.par_iter()
            .zip(t.par_iter())
            .enumerate()
            .map(|(k, (&s, &t))| f(s, t, if broadcast { z[0] } else { z[k] }))
            .collect())
    }
}
