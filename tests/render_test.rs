//! Integration tests for figure rendering: PNG output, base64 wrapping, and
//! the JSON request entry point. Rendering runs at a reduced canvas size to
//! keep the tests quick; the full-resolution default is covered once through
//! `run_request`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use statviz::{run_request, Error, HypothesisTest, PlotStyle, TailType};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn small_style() -> PlotStyle {
    PlotStyle::with_size(900, 600)
}

fn assert_is_png(bytes: &[u8]) {
    assert!(bytes.len() > PNG_SIGNATURE.len());
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);
}

#[test]
fn test_render_produces_png_for_each_distribution_family() {
    let tests = [
        // normal
        HypothesisTest::OneSampleZ {
            n: 25,
            sigma: 10.0,
            x_bar: 52.0,
            mu: 50.0,
        },
        // Student's t
        HypothesisTest::OneSampleT {
            n: 16,
            s: 4.0,
            x_bar: 105.0,
            mu: 100.0,
        },
        // chi-square
        HypothesisTest::ChiSquareGof {
            observed: vec![10.0, 20.0, 30.0],
            expected: vec![20.0, 20.0, 20.0],
        },
    ];
    for test in tests {
        let encoded = test
            .render(0.05, TailType::TwoSided, &small_style())
            .unwrap();
        let bytes = BASE64.decode(encoded).unwrap();
        assert_is_png(&bytes);
    }
}

#[test]
fn test_render_handles_every_tail_direction() {
    let test = HypothesisTest::OneSampleZ {
        n: 25,
        sigma: 10.0,
        x_bar: 48.0,
        mu: 50.0,
    };
    for tail in [TailType::Left, TailType::Right, TailType::TwoSided] {
        let encoded = test.render(0.05, tail, &small_style()).unwrap();
        assert!(!encoded.is_empty());
    }
}

#[test]
fn test_render_clamps_off_screen_statistic() {
    // statistic = 50, far outside the [-4, 4] display window
    let test = HypothesisTest::OneSampleZ {
        n: 100,
        sigma: 10.0,
        x_bar: 150.0,
        mu: 100.0,
    };
    let encoded = test.render(0.05, TailType::Right, &small_style()).unwrap();
    let bytes = BASE64.decode(encoded).unwrap();
    assert_is_png(&bytes);
}

#[test]
fn test_render_chi_square_with_divergent_density() {
    // df = 1: density diverges at 0 and must be clipped for display
    let test = HypothesisTest::ChiSquareIndependence {
        observed: vec![vec![10.0, 20.0], vec![20.0, 10.0]],
    };
    let encoded = test.render(0.05, TailType::Right, &small_style()).unwrap();
    let bytes = BASE64.decode(encoded).unwrap();
    assert_is_png(&bytes);
}

#[test]
fn test_render_tiny_alpha() {
    let test = HypothesisTest::OneSampleT {
        n: 30,
        s: 2.0,
        x_bar: 10.1,
        mu: 10.0,
    };
    let encoded = test.render(0.001, TailType::TwoSided, &small_style()).unwrap();
    assert!(!encoded.is_empty());
}

#[test]
fn test_run_request_end_to_end() {
    let body = r#"{
        "test": "one_sample_z_test",
        "n": 25, "sigma": 10.0, "x_bar": 52.0, "mu": 50.0,
        "alpha": 0.05, "tail_type": 3
    }"#;
    let encoded = run_request(body).unwrap();
    // base64 of a PNG always starts with this prefix
    assert!(encoded.starts_with("iVBOR"));
    let bytes = BASE64.decode(encoded).unwrap();
    assert_is_png(&bytes);
}

#[test]
fn test_run_request_chi_square_without_tail_type() {
    let body = r#"{
        "test": "chi_square_gof_test",
        "observed": [10.0, 20.0, 30.0], "expected": [20.0, 20.0, 20.0],
        "alpha": 0.05
    }"#;
    assert!(run_request(body).unwrap().starts_with("iVBOR"));
}

#[test]
fn test_run_request_surfaces_validation_errors() {
    let body = r#"{
        "test": "one_sample_t_test",
        "n": 1, "s": 4.0, "x_bar": 105.0, "mu": 100.0,
        "alpha": 0.05, "tail_type": 2
    }"#;
    assert!(matches!(
        run_request(body),
        Err(Error::InvalidParameter { name: "n", .. })
    ));

    let body = r#"{
        "test": "one_sample_z_test",
        "n": 25, "sigma": 10.0, "x_bar": 52.0, "mu": 50.0,
        "alpha": 1.5, "tail_type": 2
    }"#;
    assert!(matches!(
        run_request(body),
        Err(Error::InvalidParameter { name: "alpha", .. })
    ));
}

#[test]
fn test_run_request_rejects_missing_parameters() {
    let body = r#"{"test": "one_sample_z_test", "alpha": 0.05}"#;
    assert!(matches!(run_request(body), Err(Error::InvalidValue(_))));
}
