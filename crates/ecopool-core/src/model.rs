//! Resource/payoff model
//!
//! Pure functions over the economic parameters. Everything here is
//! deterministic: the session actor owns the state, this module only
//! computes.

use crate::config::EconParams;

/// Outcome of applying one update tick to the resource pool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Extraction actually applied (0 when the pending one overdraws)
    pub applied: f64,
    /// Resource stock after growth and extraction
    pub resource: f64,
    /// The pending extraction exceeded the grown stock and was replaced by 0
    pub forced_zero: bool,
}

/// `benefit(e) = a·e − (b/2)·e²`
pub fn benefit(p: &EconParams, extraction: f64) -> f64 {
    p.a * extraction - (p.b / 2.0) * extraction.powi(2)
}

/// `cost(e, R) = e·(c0 − c1·R)`, never negative
pub fn cost(p: &EconParams, extraction: f64, resource: f64) -> f64 {
    (extraction * (p.c0 - p.c1 * resource)).max(0.0)
}

/// `payoff(e, R) = benefit(e) − cost(e, R)`
pub fn payoff(p: &EconParams, extraction: f64, resource: f64) -> f64 {
    benefit(p, extraction) - cost(p, extraction, resource)
}

/// Advance the resource pool by one tick.
///
/// The stock first grows, then the pending extraction is taken out. An
/// extraction larger than the grown stock cannot overdraw the pool: it is
/// replaced by a zero extraction and the stock keeps the grown value.
pub fn advance_resource(resource: f64, growth: f64, pending: f64) -> TickOutcome {
    let grown = resource + growth;
    if pending > grown {
        TickOutcome {
            applied: 0.0,
            resource: grown,
            forced_zero: true,
        }
    } else {
        TickOutcome {
            applied: pending,
            resource: grown - pending,
            forced_zero: false,
        }
    }
}

/// Infinite-horizon continuation term of the part payoff.
///
/// Present value, discounted back to the part start, of extracting at the
/// current rate from the current stock forever:
/// `exp(−r·t) · payoff(e, R) / r`.
///
/// Only defined for a positive discount rate; with `r ≤ 0` the perpetuity
/// diverges and the term is 0.
pub fn infinite_horizon_payoff(p: &EconParams, elapsed: f64, resource: f64, extraction: f64) -> f64 {
    if p.r <= 0.0 {
        return 0.0;
    }
    (-p.r * elapsed).exp() * payoff(p, extraction, resource) / p.r
}

/// Instantaneous payoff discounted back to the part start: `exp(−r·t)·p`
pub fn discounted(p: &EconParams, elapsed: f64, instant_payoff: f64) -> f64 {
    (-p.r * elapsed).exp() * instant_payoff
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> EconParams {
        EconParams::default()
    }

    #[test]
    fn test_cost_clamped_at_zero() {
        let p = params();
        // c0 − c1·R < 0 once the stock is large enough
        let resource = p.c0 / p.c1 + 10.0;
        for e in [0.0, 1.0, 5.0, 20.0] {
            assert!(cost(&p, e, resource) >= 0.0);
        }
        assert_eq!(cost(&p, 10.0, resource), 0.0);
    }

    #[test]
    fn test_payoff_is_benefit_minus_cost() {
        let p = params();
        for (e, r) in [(0.0, 0.0), (3.0, 50.0), (10.0, 100.0), (20.0, 5.0)] {
            assert_eq!(payoff(&p, e, r), benefit(&p, e) - cost(&p, e, r));
        }
    }

    #[test]
    fn test_tick_normal_extraction() {
        // R=100, growth=5, e=10: grown to 105, extraction applies, R''=95
        let out = advance_resource(100.0, 5.0, 10.0);
        assert_eq!(out.applied, 10.0);
        assert_eq!(out.resource, 95.0);
        assert!(!out.forced_zero);
    }

    #[test]
    fn test_tick_overdraw_forces_zero() {
        // R=5, growth=2, e=20: 20 > 7, extraction forced to 0, stock stays 7
        let out = advance_resource(5.0, 2.0, 20.0);
        assert_eq!(out.applied, 0.0);
        assert_eq!(out.resource, 7.0);
        assert!(out.forced_zero);
    }

    #[test]
    fn test_tick_exact_drain_is_not_overdraw() {
        let out = advance_resource(5.0, 2.0, 7.0);
        assert_eq!(out.applied, 7.0);
        assert_eq!(out.resource, 0.0);
        assert!(!out.forced_zero);
    }

    #[test]
    fn test_discounting() {
        let p = params();
        let d = discounted(&p, 10.0, 4.0);
        assert!((d - (-p.r * 10.0f64).exp() * 4.0).abs() < 1e-12);
        // no elapsed time, no discount
        assert_eq!(discounted(&p, 0.0, 4.0), 4.0);
    }

    #[test]
    fn test_infinite_horizon_finite_without_discounting() {
        let mut p = params();
        p.r = 0.0;
        let v = infinite_horizon_payoff(&p, 5.0, 100.0, 10.0);
        assert!(v.is_finite());
        assert_eq!(v, 0.0);
        p.r = -0.05;
        assert_eq!(infinite_horizon_payoff(&p, 5.0, 100.0, 10.0), 0.0);
    }

    #[test]
    fn test_infinite_horizon_at_origin() {
        let p = params();
        let v = infinite_horizon_payoff(&p, 0.0, 100.0, 10.0);
        assert!((v - payoff(&p, 10.0, 100.0) / p.r).abs() < 1e-12);
    }
}
