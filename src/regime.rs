//! Named parameter sets. Each regime is a complete, self-consistent set of
//! primitives selected as a unit; the solver never sees a partially applied
//! one.

use {
    crate::{
        error::ConfigurationError,
        parameters::{Grid, Numerical, Parameters, Physical, Tiling},
        spectral::DealiasRule,
    },
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    /// 256^3 development run at Re = 100.
    Test256,
    /// 512^3 production run at Re = 400.
    R4,
    /// 1024^3 mixing-layer production run at Re = 1600.
    R6,
    /// 256^3 Taylor-Green vortex at Re = 1600.
    TaylorGreen,
}

impl Regime {
    pub const ALL: [Regime; 4] = [Regime::Test256, Regime::R4, Regime::R6, Regime::TaylorGreen];

    pub fn name(self) -> &'static str {
        match self {
            Regime::Test256 => "test",
            Regime::R4 => "r4",
            Regime::R6 => "r6",
            Regime::TaylorGreen => "taylor-green",
        }
    }

    /// The primitive parameter set for this regime.
    pub fn parameters(self) -> Parameters {
        match self {
            Regime::Test256 => Parameters::default(),
            Regime::R4 => Parameters {
                grid: Grid {
                    nx: 512,
                    ny: 512,
                    nz: 512,
                    ..Grid::default()
                },
                numerical: Numerical {
                    dt: 0.000_471_765_3,
                    nt: 4940,
                    n_save: 260,
                    dealias: DealiasRule::TwoThirds,
                },
                physical: Physical {
                    re: 400.0,
                    ..Physical::default()
                },
                tiling: Tiling::default(),
            },
            Regime::R6 => Parameters {
                grid: Grid {
                    nx: 1024,
                    ny: 1024,
                    nz: 1024,
                    ..Grid::default()
                },
                numerical: Numerical {
                    dt: 0.000_292_448_3,
                    nt: 520,
                    n_save: 130,
                    dealias: DealiasRule::FifteenThirtySeconds,
                },
                physical: Physical {
                    re: 1600.0,
                    ..Physical::default()
                },
                tiling: Tiling::default(),
            },
            Regime::TaylorGreen => Parameters {
                grid: Grid::default(),
                numerical: Numerical {
                    dt: 0.005,
                    nt: 2000,
                    n_save: 40,
                    dealias: DealiasRule::TwoThirds,
                },
                physical: Physical {
                    re: 1600.0,
                    ..Physical::default()
                },
                tiling: Tiling::default(),
            },
        }
    }
}

impl FromStr for Regime {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "test" | "test256" => Ok(Regime::Test256),
            "r4" => Ok(Regime::R4),
            "r6" => Ok(Regime::R6),
            "taylor-green" | "taylorgreen" => Ok(Regime::TaylorGreen),
            _ => Err(ConfigurationError::UnknownRegime {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_round_trip() {
        for regime in &Regime::ALL {
            assert_eq!(*regime, regime.name().parse().unwrap());
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(Regime::R6, "R6".parse().unwrap());
        assert_eq!(Regime::TaylorGreen, "Taylor-Green".parse().unwrap());
    }

    #[test]
    fn unknown_selector_is_rejected() {
        assert_eq!(
            "r5".parse::<Regime>(),
            Err(ConfigurationError::UnknownRegime {
                name: "r5".to_string()
            })
        );
    }

    #[test]
    fn r4_parameters() {
        let parameters = Regime::R4.parameters();
        assert_eq!(parameters.grid.nx, 512);
        assert_eq!(parameters.numerical.nt, 4940);
        assert_eq!(parameters.numerical.dealias, DealiasRule::TwoThirds);
        assert_eq!(parameters.physical.re, 400.0);
        assert_eq!(parameters.physical.sc, 0.7);
    }

    #[test]
    fn taylor_green_reuses_the_default_grid() {
        let parameters = Regime::TaylorGreen.parameters();
        assert_eq!(parameters.grid, Grid::default());
        assert_eq!(parameters.numerical.dt, 0.005);
        assert_eq!(parameters.physical.re, 1600.0);
    }
}
