//! Orthonormalized radial basis functions over a finite cutoff.
//!
//! The primitive functions are sine-based polynomials of `pi*r/rc` that vanish at the cutoff;
//! a one-pass recursion with precomputed coefficient tables turns them into an orthonormal set
//! with respect to the `r^2 dr` measure on `[0, rc]`. The tables depend only on the maximum
//! order, so they are computed once per basis and reused for every distance evaluation.

use crate::math::constants::DISTANCE_THRESHOLD;
use crate::math::spherical::sinc;
use std::f64::consts::PI;

/// An orthonormalized radial basis over the interval `[0, cutoff]`.
///
/// Holds the orthonormalization coefficient tables `e[n]` and `d[n]` satisfying
/// `d[0] = 1` and `d[n] = 1 - e[n]/d[n-1]`, with all `d[n]` strictly positive. Evaluation
/// runs the recursion `g_0 = f_0`, `g_n = (f_n + sqrt(e_n/d_{n-1}) g_{n-1}) / sqrt(d_n)`
/// over the primitive functions `f_n`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialBasis {
    cutoff: f64,
    nmax: usize,
    e: Vec<f64>,
    d: Vec<f64>,
}

impl RadialBasis {
    /// Builds the basis for the given cutoff radius and maximum order.
    pub fn new(cutoff: f64, nmax: usize) -> Self {
        let mut e = vec![0.0; nmax + 1];
        let mut d = vec![1.0; nmax + 1];
        for n in 1..=nmax {
            let nf = n as f64;
            e[n] = (nf * (nf + 2.0)).powi(2) / (4.0 * (nf + 1.0).powi(4) + 1.0);
            d[n] = 1.0 - e[n] / d[n - 1];
            debug_assert!(
                d[n] > 0.0,
                "orthonormalization table lost positivity at order {n}"
            );
        }
        Self { cutoff, nmax, e, d }
    }

    /// Returns the cutoff radius.
    #[inline]
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Returns the number of basis functions, `nmax + 1`.
    #[inline]
    pub fn order_count(&self) -> usize {
        self.nmax + 1
    }

    /// Evaluates all basis functions at distance `r`.
    ///
    /// # Examples
    ///
    /// ```
    /// use qboost::descriptor::RadialBasis;
    ///
    /// let basis = RadialBasis::new(3.0, 4);
    /// let values = basis.evaluate(1.1);
    /// assert_eq!(values.len(), 5);
    /// assert!(values.iter().all(|g| g.is_finite()));
    /// ```
    pub fn evaluate(&self, r: f64) -> Vec<f64> {
        let mut values = vec![0.0; self.order_count()];
        self.evaluate_into(r, &mut values);
        values
    }

    /// Evaluates all basis functions at distance `r` into a caller-provided buffer,
    /// avoiding allocation in hot loops.
    ///
    /// Distances beyond the cutoff yield the zero vector (a hard truncation, no smoothing).
    /// At `r = 0` the closed-form limit of the lowest primitive replaces the 0/0 form.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != nmax + 1`.
    pub fn evaluate_into(&self, r: f64, values: &mut [f64]) {
        assert_eq!(values.len(), self.nmax + 1, "radial buffer length mismatch");
        values.fill(0.0);
        if r > self.cutoff {
            return;
        }

        let rc = self.cutoff;
        let pir_rc = PI * r / rc;
        let mut prefix = PI * (2.0 / rc).sqrt() / rc;

        values[0] = if r < DISTANCE_THRESHOLD {
            prefix * 4.0 / 5.0f64.sqrt()
        } else {
            (2.0 / (5.0 * rc)).sqrt() * (2.0 * pir_rc.sin() + (2.0 * pir_rc).sin()) / r
        };

        for n in 1..=self.nmax {
            prefix = -prefix;
            let nf = n as f64;
            let f_n = prefix * (nf + 1.0) * (nf + 2.0)
                / ((nf + 1.0).powi(2) + (nf + 2.0).powi(2)).sqrt()
                * (sinc(pir_rc * (nf + 1.0)) + sinc(pir_rc * (nf + 2.0)));
            values[n] = (f_n + (self.e[n] / self.d[n - 1]).sqrt() * values[n - 1])
                / self.d[n].sqrt();
        }
    }
}
