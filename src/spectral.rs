//! De-aliasing policy and the spectral-space helpers derived from it.
//!
//! The nonlinear terms of the solver are evaluated pseudo-spectrally, so
//! every configuration carries a truncation wavenumber `k_max` above which
//! modes are discarded. Two truncation rules are supported and exactly one
//! is active per configuration.

use {
    crate::config::SimulationConfig,
    core::f64::consts::PI,
    ndarray::{Array3, Axis},
    rayon::prelude::*,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Truncation rule used to derive the de-aliasing cutoff from the grid
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DealiasRule {
    /// Classical truncation retaining the lowest 2/3 of wavenumbers,
    /// alias-free for quadratic nonlinearities.
    TwoThirds,
    /// Sharper 15/32 cutoff retaining more resolved wavenumbers at the cost
    /// of incomplete alias removal.
    FifteenThirtySeconds,
}

impl DealiasRule {
    pub fn cutoff(self, n: usize) -> f64 {
        dealias_cutoff(n, self)
    }
}

impl fmt::Display for DealiasRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DealiasRule::TwoThirds => write!(f, "2/3"),
            DealiasRule::FifteenThirtySeconds => write!(f, "15/32"),
        }
    }
}

/// Computes the de-aliasing cutoff wavenumber for an axis of `n` modes.
pub fn dealias_cutoff(n: usize, rule: DealiasRule) -> f64 {
    match rule {
        DealiasRule::TwoThirds => 2.0 / 3.0 * (n as f64) / 2.0,
        DealiasRule::FifteenThirtySeconds => 15.0 / 32.0 * (n as f64),
    }
}

/// Wavenumber magnitudes along one axis in FFT storage order for a periodic
/// domain of the given extent: mode `k` and mode `n - k` carry the same
/// magnitude `2*pi*k/length`.
pub fn wavenumbers(n: usize, length: f64) -> Vec<f64> {
    let scale = 2.0 * PI / length;
    let mut rk = vec![0.0; n];
    if n < 2 {
        return rk;
    }
    for k in 1..n / 2 {
        rk[k] = scale * k as f64;
        rk[n - k] = scale * k as f64;
    }
    rk[n / 2] = scale * (n / 2) as f64;
    rk
}

/// Builds the de-aliasing filter for the real-to-complex spectral layout
/// `(nx, ny, nz2)`: 1.0 where the wavenumber magnitude is retained, 0.0
/// where it is truncated. The solver multiplies transformed fields by this
/// after every nonlinear product.
pub fn dealias_filter(config: &SimulationConfig) -> Array3<f64> {
    let rkx = wavenumbers(config.nx, config.lx);
    let rky = wavenumbers(config.ny, config.ly);
    // Last axis holds only the non-negative modes 0..=nz/2.
    let scale_z = 2.0 * PI / config.lz;
    let rkmaxsq = config.k_max * config.k_max;

    let ny = config.ny;
    let nz2 = config.nz2;

    let mut filt = Array3::<f64>::zeros((config.nx, ny, nz2));
    filt.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(kx, mut plane)| {
            let rkxsq = rkx[kx] * rkx[kx];
            for ky in 0..ny {
                let rkysq = rky[ky] * rky[ky];
                for kz in 0..nz2 {
                    let rkz = scale_z * kz as f64;
                    if rkxsq + rkysq + rkz * rkz <= rkmaxsq {
                        plane[[ky, kz]] = 1.0;
                    }
                }
            }
        });

    filt
}
