// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-photoacoustic project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

//! # Tests for the damped sinusoid generator
//!
//! Covers output length, the undamped special case (zero first sample and
//! periodicity), parameter validation and the reference transient used for
//! end-to-end checks.

use super::generator::{generate, GenerationParams, MAX_SAMPLE_COUNT};
use super::metrics::{compute_average_energy, compute_peak_amplitude};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // BASIC FUNCTIONALITY TESTS
    // ========================================

    #[test]
    fn test_length_matches_sample_count() {
        for n in [1usize, 2, 17, 100, 4096] {
            let signal = generate(n, 1e-6, 5e5, 2e6, 1.0).unwrap();
            assert_eq!(signal.len(), n, "wrong length for n={}", n);
        }
    }

    #[test]
    fn test_sample_formula() {
        let params = GenerationParams {
            sample_count: 8,
            sampling_interval: 1e-4,
            decay_rate: 250.0,
            frequency: 1250.0,
            amplitude: 0.7,
        };
        let signal = params.generate().unwrap();

        for (i, &value) in signal.iter().enumerate() {
            let t = i as f64 * 1e-4;
            let expected =
                0.7 * (-250.0 * t).exp() * (2.0 * std::f64::consts::PI * 1250.0 * t).sin();
            assert!((value - expected).abs() < 1e-12);
        }
    }

    // ========================================
    // UNDAMPED SIGNAL
    // ========================================

    #[test]
    fn test_undamped_first_sample_is_zero() {
        let signal = generate(50, 1e-5, 0.0, 1000.0, 3.0).unwrap();
        assert_eq!(signal.samples()[0], 0.0);
    }

    #[test]
    fn test_undamped_signal_is_periodic() {
        // f = 1 kHz sampled every 10 µs gives a period of 100 samples
        let period = 100;
        let signal = generate(4 * period, 1e-5, 0.0, 1000.0, 2.0).unwrap();
        let samples = signal.samples();

        for i in 0..(samples.len() - period) {
            assert!(
                (samples[i] - samples[i + period]).abs() < 1e-9,
                "sample {} differs from sample {}",
                i,
                i + period
            );
        }
    }

    #[test]
    fn test_undamped_peak_reaches_amplitude() {
        // a quarter period lands exactly on the crest
        let signal = generate(100, 1e-5, 0.0, 1000.0, 2.0).unwrap();
        let peak = compute_peak_amplitude(&signal).unwrap();
        assert!((peak - 2.0).abs() < 1e-9);
    }

    // ========================================
    // PARAMETER VALIDATION
    // ========================================

    #[test]
    fn test_zero_sample_count_is_rejected() {
        let err = generate(0, 1e-6, 0.0, 1.0, 1.0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_non_positive_sampling_interval_is_rejected() {
        for dt in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            let err = generate(10, dt, 0.0, 1.0, 1.0).unwrap_err();
            assert!(err.is_invalid_argument(), "dt={} should be rejected", dt);
        }
    }

    #[test]
    fn test_oversized_sample_count_is_rejected() {
        for n in [MAX_SAMPLE_COUNT + 1, usize::MAX] {
            let err = generate(n, 1e-6, 0.0, 1.0, 1.0).unwrap_err();
            assert!(err.is_invalid_argument(), "n={} should be rejected", n);
        }
    }

    #[test]
    fn test_non_finite_shape_parameters_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(generate(10, 1e-6, bad, 1.0, 1.0)
                .unwrap_err()
                .is_invalid_argument());
            assert!(generate(10, 1e-6, 0.0, bad, 1.0)
                .unwrap_err()
                .is_invalid_argument());
            assert!(generate(10, 1e-6, 0.0, 1.0, bad)
                .unwrap_err()
                .is_invalid_argument());
        }
    }

    // ========================================
    // REFERENCE TRANSIENT
    // ========================================

    #[test]
    fn test_reference_transient() {
        let decayed = generate(100, 1e-6, 5e5, 2e6, 1.0).unwrap();
        let undamped = generate(100, 1e-6, 0.0, 2e6, 1.0).unwrap();

        assert_eq!(decayed.len(), 100);
        assert_eq!(decayed.samples()[0], 0.0);
        assert!(compute_peak_amplitude(&decayed).unwrap() <= 1.0);
        assert!(
            compute_average_energy(&decayed).unwrap() < compute_average_energy(&undamped).unwrap()
        );
    }

    #[test]
    fn test_decay_reduces_energy() {
        let decayed = generate(500, 1e-7, 2e5, 1e5, 1.0).unwrap();
        let undamped = generate(500, 1e-7, 0.0, 1e5, 1.0).unwrap();
        assert!(
            compute_average_energy(&decayed).unwrap() < compute_average_energy(&undamped).unwrap()
        );
    }
}
