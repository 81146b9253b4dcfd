//! Resolution of primitive parameters into the full configuration record
//! consumed by the solver and I/O modules.

use {
    crate::{
        constants::MAX_THREADS_PER_BLOCK,
        error::ConfigurationError,
        parameters::Parameters,
        regime::Regime,
        spectral::{dealias_cutoff, DealiasRule},
    },
    serde::Serialize,
    std::str::FromStr,
};

/// Fully-derived, immutable simulation configuration. Constructed once at
/// startup through [`SimulationConfig::resolve`] and passed by reference to
/// every consumer; the derived fields (`nz2`, `nn`, `dx`, `k_max`) are
/// always recomputed from the primitives, never read from input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationConfig {
    /// Grid resolution per axis
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
    /// Last-dimension size of the real-to-complex transform: NZ/2 + 1
    pub nz2: usize,
    /// Total physical-space point count: NX*NY*NZ
    pub nn: usize,
    /// Physical domain extents
    pub lx: f64,
    pub ly: f64,
    pub lz: f64,
    /// Uniform grid spacing: LX/NX
    pub dx: f64,
    /// Integration timestep
    pub dt: f64,
    /// Total timestep count for the run
    pub nt: usize,
    /// Steps between data snapshots
    pub n_save: usize,
    /// Reynolds number
    pub re: f64,
    /// Schmidt number
    pub sc: f64,
    /// Active de-aliasing truncation rule
    pub dealias: DealiasRule,
    /// De-aliasing cutoff wavenumber derived from NX and the active rule
    pub k_max: f64,
    /// Thread-block tile dimensions for kernel launch grids
    pub tx: usize,
    pub ty: usize,
    pub tz: usize,
}

/// Derives the spectral-space dimensions from the grid resolution:
/// `NZ2 = NZ/2 + 1` and `NN = NX*NY*NZ`. The real-to-complex transform
/// assumes an even last dimension, so an odd NZ is rejected.
pub fn derive_grid(nx: usize, ny: usize, nz: usize) -> Result<(usize, usize), ConfigurationError> {
    for &(axis, n) in &[("NX", nx), ("NY", ny), ("NZ", nz)] {
        if !n.is_power_of_two() {
            return Err(ConfigurationError::InvalidGrid {
                reason: format!("{} = {} must be a positive power of two", axis, n),
            });
        }
    }
    if nz % 2 != 0 {
        return Err(ConfigurationError::InvalidGrid {
            reason: format!("NZ = {} must be even for the real-to-complex transform", nz),
        });
    }
    let nn = nx
        .checked_mul(ny)
        .and_then(|nxy| nxy.checked_mul(nz))
        .ok_or_else(|| ConfigurationError::InvalidGrid {
            reason: format!("{}x{}x{} overflows the point count", nx, ny, nz),
        })?;
    Ok((nz / 2 + 1, nn))
}

impl SimulationConfig {
    /// Validates a primitive parameter set and recomputes every derived
    /// quantity. Either the whole record is produced or the first violated
    /// invariant is reported; no partially resolved configuration escapes.
    pub fn resolve(parameters: &Parameters) -> Result<Self, ConfigurationError> {
        let grid = &parameters.grid;
        let numerical = &parameters.numerical;
        let physical = &parameters.physical;
        let tiling = &parameters.tiling;

        let (nz2, nn) = derive_grid(grid.nx, grid.ny, grid.nz)?;

        for &(name, l) in &[("LX", grid.lx), ("LY", grid.ly), ("LZ", grid.lz)] {
            if l <= 0.0 {
                return Err(ConfigurationError::InvalidTuning {
                    reason: format!("{} = {} must be positive", name, l),
                });
            }
        }
        if numerical.dt <= 0.0 {
            return Err(ConfigurationError::InvalidTuning {
                reason: format!("dt = {} must be positive", numerical.dt),
            });
        }
        if numerical.nt == 0 {
            return Err(ConfigurationError::InvalidTuning {
                reason: "nt must be at least one step".to_string(),
            });
        }
        if numerical.n_save == 0 {
            return Err(ConfigurationError::InvalidTuning {
                reason: "n_save must be at least one step".to_string(),
            });
        }
        if physical.re <= 0.0 {
            return Err(ConfigurationError::InvalidTuning {
                reason: format!("Re = {} must be positive", physical.re),
            });
        }
        if physical.sc <= 0.0 {
            return Err(ConfigurationError::InvalidTuning {
                reason: format!("Sc = {} must be positive", physical.sc),
            });
        }
        if tiling.tx == 0 || tiling.ty == 0 || tiling.tz == 0 {
            return Err(ConfigurationError::InvalidTuning {
                reason: format!(
                    "tile {}x{}x{} must be positive in every dimension",
                    tiling.tx, tiling.ty, tiling.tz
                ),
            });
        }
        let threads = tiling.tx * tiling.ty * tiling.tz;
        if threads > MAX_THREADS_PER_BLOCK {
            return Err(ConfigurationError::InvalidTuning {
                reason: format!(
                    "tile {}x{}x{} requests {} threads per block, device limit is {}",
                    tiling.tx, tiling.ty, tiling.tz, threads, MAX_THREADS_PER_BLOCK
                ),
            });
        }

        Ok(SimulationConfig {
            nx: grid.nx,
            ny: grid.ny,
            nz: grid.nz,
            nz2,
            nn,
            lx: grid.lx,
            ly: grid.ly,
            lz: grid.lz,
            dx: grid.lx / grid.nx as f64,
            dt: numerical.dt,
            nt: numerical.nt,
            n_save: numerical.n_save,
            re: physical.re,
            sc: physical.sc,
            dealias: numerical.dealias,
            k_max: dealias_cutoff(grid.nx, numerical.dealias),
            tx: tiling.tx,
            ty: tiling.ty,
            tz: tiling.tz,
        })
    }
}

/// Resolves a regime selector into its full configuration.
pub fn resolve_config(regime: &str) -> Result<SimulationConfig, ConfigurationError> {
    let regime = Regime::from_str(regime)?;
    SimulationConfig::resolve(&regime.parameters())
}
