//! Loading stencils from configuration and driving node maths through the public API.

use approx::assert_relative_eq;
use lbm_node::{
    compute_density, compute_velocity, equilibrium, lattice_weights, D2Q9Distribution,
    LatticeDescriptor, LbmError, Macroscopic, StencilKind, Weight, D2Q9, D3Q19,
};

#[test]
fn test_descriptor_json_round_trip() {
    for kind in StencilKind::ALL {
        let json = kind.descriptor().to_json().unwrap();
        let back = LatticeDescriptor::from_json(&json).unwrap();
        assert_eq!(back, kind.descriptor());
    }
}

#[test]
fn test_descriptor_from_handwritten_json() {
    let json = r#"{
        "name": "D1Q3",
        "dimension": 1,
        "directions": [[0], [1], [-1]],
        "weights": [
            { "num": 2, "den": 3 },
            { "num": 1, "den": 6 },
            { "num": 1, "den": 6 }
        ]
    }"#;
    let d = LatticeDescriptor::from_json(json).unwrap();
    assert_eq!(d, StencilKind::D1Q3.descriptor());
    assert_eq!(d.opposite_of(1), Some(2));
}

#[test]
fn test_descriptor_rejections() {
    let skewed = r#"{
        "name": "skewed",
        "dimension": 1,
        "directions": [[0], [1], [-1]],
        "weights": [
            { "num": 1, "den": 2 },
            { "num": 1, "den": 6 },
            { "num": 1, "den": 6 }
        ]
    }"#;
    match LatticeDescriptor::from_json(skewed) {
        Err(LbmError::InvalidStencil(msg)) => assert!(msg.contains("not 1"), "{}", msg),
        other => panic!("expected InvalidStencil, got {:?}", other),
    }

    let no_rest = r#"{
        "name": "no-rest",
        "dimension": 1,
        "directions": [[1], [-1]],
        "weights": [{ "num": 1, "den": 2 }, { "num": 1, "den": 2 }]
    }"#;
    assert!(matches!(
        LatticeDescriptor::from_json(no_rest),
        Err(LbmError::InvalidStencil(_))
    ));

    assert!(matches!(
        LatticeDescriptor::from_json("{ \"name\": 3 }"),
        Err(LbmError::Json(_))
    ));
}

#[test]
fn test_stencil_kind_in_solver_config() {
    #[derive(serde::Deserialize)]
    struct SolverConfig {
        stencil: StencilKind,
        tau: f64,
    }

    let cfg: SolverConfig = serde_json::from_str(r#"{ "stencil": "d3q19", "tau": 0.8 }"#).unwrap();
    assert_eq!(cfg.stencil, StencilKind::D3Q19);
    assert_eq!(cfg.stencil.to_string(), "D3Q19");
    assert_eq!(cfg.stencil.size(), 19);
    assert_eq!(cfg.tau, 0.8);
}

#[test]
fn test_descriptor_weights_match_compile_time_tables() {
    let d = StencilKind::D3Q19.descriptor();
    let f = lbm_node::D3Q19Distribution::<f64>::new();
    let w = lattice_weights(D3Q19, &f);
    for (rational, value) in d.weights.iter().zip(w) {
        assert_eq!(rational.to_f64(), value);
    }
    assert_eq!(d.weights[0], Weight::new(1, 3));
}

#[test]
fn test_reference_node_f64() {
    let f = D2Q9Distribution::<f64>::from_array([
        1.0 / 3.0,
        1.0 / 2.0,
        3.0 / 5.0,
        2.0 / 3.0,
        5.0 / 7.0,
        3.0 / 4.0,
        7.0 / 9.0,
        4.0 / 5.0,
        9.0 / 11.0,
    ]);
    let tol = 10.0 * f64::EPSILON;

    let m = Macroscopic::from_distribution(D2Q9, &f);
    assert_relative_eq!(m.density, 5.9602453102453108, epsilon = tol);
    assert_relative_eq!(m.momentum[0], -0.17626262626262612, epsilon = tol);
    assert_relative_eq!(m.momentum[1], -0.2046897546897548, epsilon = tol);
    assert_relative_eq!(m.velocity[0], -0.029573048941398609, epsilon = tol);
    assert_relative_eq!(m.velocity[1], -0.034342505053928767, epsilon = tol);

    let json = serde_json::to_string(&m).unwrap();
    let back: Macroscopic<f64, 2> = serde_json::from_str(&json).unwrap();
    assert_relative_eq!(back.density, m.density, epsilon = tol);
    assert_relative_eq!(back.velocity[1], m.velocity[1], epsilon = tol);
}

#[test]
fn test_relaxation_towards_equilibrium_conserves_mass() {
    let mut f: D2Q9Distribution<f64> = equilibrium(D2Q9, 1.0, [0.05, 0.0]);
    f[1] += 0.01;
    f[3] -= 0.01;
    let rho = compute_density(D2Q9, &f);
    let u = compute_velocity(rho, lbm_node::compute_momentum(D2Q9, &f));

    let feq: D2Q9Distribution<f64> = equilibrium(D2Q9, rho, u);
    let relaxed = f - (f - feq) * (1.0 / 0.8);
    assert_relative_eq!(compute_density(D2Q9, &relaxed), rho, epsilon = 1e-14);
}
