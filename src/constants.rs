use core::f64::consts::PI;

/// Hard CUDA limit on TX*TY*TZ for a kernel launch.
pub const MAX_THREADS_PER_BLOCK: usize = 1024;

/// Thread-block tile edge used by every built-in regime.
pub const TILE_EDGE: usize = 8;

/// Periodic domain extent per axis.
pub const DOMAIN_EXTENT: f64 = 2.0 * PI;

/// Schmidt number shared by all built-in regimes.
pub const SCHMIDT: f64 = 0.7;
