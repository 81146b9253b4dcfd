use {
    crate::{
        config::{resolve_config, SimulationConfig},
        error::ConfigurationError,
        regime::Regime,
        spectral::DealiasRule,
    },
    approx::assert_abs_diff_eq,
    lazy_static::lazy_static,
};

lazy_static! {
    static ref R6: SimulationConfig = resolve_config("r6").unwrap();
}

#[test]
fn r6_matches_the_production_run() {
    assert_eq!(R6.nx, 1024);
    assert_eq!(R6.ny, 1024);
    assert_eq!(R6.nz, 1024);
    assert_eq!(R6.nz2, 513);
    assert_eq!(R6.nn, 1 << 30);
    assert_eq!(R6.re, 1600.0);
    assert_eq!(R6.sc, 0.7);
    assert_eq!(R6.dt, 0.000_292_448_3);
    assert_eq!(R6.nt, 520);
    assert_eq!(R6.n_save, 130);
    assert_eq!(R6.dealias, DealiasRule::FifteenThirtySeconds);
    assert_eq!(R6.k_max, 480.0);
    assert_eq!((R6.tx, R6.ty, R6.tz), (8, 8, 8));
    assert_abs_diff_eq!(R6.dx, R6.lx / 1024.0, epsilon = 1.0E-18);
}

#[test]
fn resolution_is_bit_identical() {
    let again = resolve_config("r6").unwrap();
    assert_eq!(*R6, again);
    assert_eq!(R6.dt.to_bits(), again.dt.to_bits());
    assert_eq!(R6.dx.to_bits(), again.dx.to_bits());
    assert_eq!(R6.k_max.to_bits(), again.k_max.to_bits());
}

#[test]
fn every_builtin_regime_resolves() {
    for regime in &Regime::ALL {
        let config = resolve_config(regime.name()).unwrap();
        assert_eq!(config.nx * config.ny * config.nz, config.nn);
        assert_eq!(config.nz / 2 + 1, config.nz2);
        assert!(config.k_max > 0.0);
    }
}

#[test]
fn unknown_regime_is_rejected() {
    assert!(matches!(
        resolve_config("unknown"),
        Err(ConfigurationError::UnknownRegime { .. })
    ));
}

#[test]
fn unknown_regime_report() {
    let err = resolve_config("r5").unwrap_err();
    insta::assert_debug_snapshot!(err, @r###"
    UnknownRegime {
        name: "r5",
    }
    "###);
    insta::assert_display_snapshot!(err, @r###"unknown regime "r5""###);
}

#[test]
fn resolved_config_exports_as_yaml() {
    let yaml = serde_yaml::to_string(&*R6).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(value["nx"].as_u64(), Some(1024));
    assert_eq!(value["nz2"].as_u64(), Some(513));
    assert_eq!(value["nt"].as_u64(), Some(520));
    assert_eq!(value["dealias"].as_str(), Some("fifteen-thirty-seconds"));
}
