use {
    crate::{
        constants::{DOMAIN_EXTENT, SCHMIDT, TILE_EDGE},
        spectral::DealiasRule,
    },
    anyhow::Context,
    serde::{Deserialize, Serialize},
    std::{fs::File, path::Path},
};

/// Primitive simulation parameters. Only non-derived quantities appear here;
/// everything computable from these (NZ2, NN, dx, k_max) lives on the
/// resolved [`SimulationConfig`](crate::config::SimulationConfig) so the two
/// can never drift apart.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Parameters {
    pub grid: Grid,
    pub numerical: Numerical,
    pub physical: Physical,
    pub tiling: Tiling,
}

impl Parameters {
    /// Reads a parameter set from a YAML file. The result still has to go
    /// through [`SimulationConfig::resolve`](crate::config::SimulationConfig::resolve).
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open parameters file {:?}", path))?;
        serde_yaml::from_reader(file)
            .with_context(|| format!("failed to parse parameters from {:?}", path))
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Grid {
    /// Grid resolution in x
    pub nx: usize,
    /// Grid resolution in y
    pub ny: usize,
    /// Grid resolution in z
    pub nz: usize,
    /// Physical domain extent in x
    pub lx: f64,
    /// Physical domain extent in y
    pub ly: f64,
    /// Physical domain extent in z
    pub lz: f64,
}

impl Default for Grid {
    fn default() -> Self {
        Grid {
            nx: 256,
            ny: 256,
            nz: 256,
            lx: DOMAIN_EXTENT,
            ly: DOMAIN_EXTENT,
            lz: DOMAIN_EXTENT,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Numerical {
    /// Integration timestep
    pub dt: f64,
    /// Total number of timesteps to take in the simulation
    pub nt: usize,
    /// Number of steps to take between saving data
    pub n_save: usize,
    /// Active de-aliasing truncation rule
    pub dealias: DealiasRule,
}

impl Default for Numerical {
    fn default() -> Self {
        Numerical {
            dt: 0.000_817_653,
            nt: 3000,
            n_save: 20,
            dealias: DealiasRule::FifteenThirtySeconds,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Physical {
    /// Reynolds number
    pub re: f64,
    /// Schmidt number for the passive scalar
    pub sc: f64,
}

impl Default for Physical {
    fn default() -> Self {
        Physical {
            re: 100.0,
            sc: SCHMIDT,
        }
    }
}

/// Thread-block tile shape consumed by the solver's kernel-launch logic.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Tiling {
    pub tx: usize,
    pub ty: usize,
    pub tz: usize,
}

impl Default for Tiling {
    fn default() -> Self {
        Tiling {
            tx: TILE_EDGE,
            ty: TILE_EDGE,
            tz: TILE_EDGE,
        }
    }
}

#[cfg(test)]
mod test {
    use {super::*, crate::regime::Regime, std::fs::File, std::io::Write, tempdir::TempDir};

    #[test]
    fn defaults() {
        assert_eq!(
            Parameters::default(),
            serde_yaml::from_reader::<_, Parameters>(
                File::open("src/testdata/defaults.yaml").unwrap()
            )
            .unwrap()
        );
    }

    #[test]
    fn from_file_round_trips() {
        let dir = TempDir::new("parameters").unwrap();
        let path = dir.path().join("r4.yaml");

        let written = Regime::R4.parameters();
        let mut f = File::create(&path).unwrap();
        f.write_all(serde_yaml::to_string(&written).unwrap().as_bytes())
            .unwrap();

        assert_eq!(written, Parameters::from_file(&path).unwrap());
    }

    #[test]
    fn from_file_rejects_missing_path() {
        assert!(Parameters::from_file("src/testdata/no_such_file.yaml").is_err());
    }
}
