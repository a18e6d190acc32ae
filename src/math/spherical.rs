use super::constants::DISTANCE_THRESHOLD;
use ndarray::Array2;
use num_complex::Complex64;
use std::f64::consts::PI;

/// The unnormalized sinc function with the removable singularity filled in.
///
/// Returns exactly `1.0` at `x == 0` rather than evaluating `sin(x)/x` naively.
#[inline]
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 { 1.0 } else { x.sin() / x }
}

/// Converts a Cartesian displacement vector to spherical coordinates `(r, theta, phi)`.
///
/// The polar angle `theta` is measured from the +z axis and `phi` is the azimuth in the
/// x-y plane. A zero-length vector has no defined direction; by convention it maps to
/// `theta = 0`, which cannot occur for distinct atom pairs but is handled defensively.
#[inline]
pub fn cartesian_to_spherical(v: [f64; 3]) -> (f64, f64, f64) {
    let r = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    let theta = if r < DISTANCE_THRESHOLD {
        0.0
    } else {
        // clamp guards against |z/r| creeping past 1 through rounding
        (v[2] / r).clamp(-1.0, 1.0).acos()
    };
    let phi = v[1].atan2(v[0]);
    (r, theta, phi)
}

/// Evaluates the full complex spherical-harmonic table `Y_l^m(theta, phi)` for all degrees
/// `l = 0..=lmax` and orders `m = -l..=l`.
///
/// The returned array has shape `(lmax + 1, 2*lmax + 1)`; entry `(l, lmax + m)` holds
/// `Y_l^m`, and entries with `|m| > l` are zero. The implementation runs the fully
/// normalized associated-Legendre recurrences (Condon-Shortley phase included) so the
/// normalization factors never pass through large factorials, and recovers negative orders
/// from the conjugate symmetry `Y_l^{-m} = (-1)^m conj(Y_l^m)`.
pub fn spherical_harmonics(lmax: usize, theta: f64, phi: f64) -> Array2<Complex64> {
    let x = theta.cos();
    let s = theta.sin();

    // legendre[(l, m)] holds the normalized P_l^m(cos theta) for m <= l
    let mut legendre = Array2::<f64>::zeros((lmax + 1, lmax + 1));
    legendre[(0, 0)] = (1.0 / (4.0 * PI)).sqrt();
    for m in 1..=lmax {
        let mf = m as f64;
        legendre[(m, m)] =
            -((2.0 * mf + 1.0) / (2.0 * mf)).sqrt() * s * legendre[(m - 1, m - 1)];
    }
    for m in 0..lmax {
        let mf = m as f64;
        legendre[(m + 1, m)] = (2.0 * mf + 3.0).sqrt() * x * legendre[(m, m)];
    }
    for m in 0..=lmax {
        let mf = m as f64;
        for l in (m + 2)..=lmax {
            let lf = l as f64;
            let a = ((4.0 * lf * lf - 1.0) / (lf * lf - mf * mf)).sqrt();
            let b = (((lf - 1.0) * (lf - 1.0) - mf * mf)
                / (4.0 * (lf - 1.0) * (lf - 1.0) - 1.0))
                .sqrt();
            legendre[(l, m)] = a * (x * legendre[(l - 1, m)] - b * legendre[(l - 2, m)]);
        }
    }

    let mut table = Array2::<Complex64>::zeros((lmax + 1, 2 * lmax + 1));
    for l in 0..=lmax {
        for m in 0..=l {
            let value = legendre[(l, m)] * Complex64::from_polar(1.0, m as f64 * phi);
            table[(l, lmax + m)] = value;
            if m > 0 {
                let sign = if m % 2 == 0 { 1.0 } else { -1.0 };
                table[(l, lmax - m)] = sign * value.conj();
            }
        }
    }
    table
}
