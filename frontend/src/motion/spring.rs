//! Damped spring model.
//!
//! A mass on a spring released from 0 towards a target of 1 with no
//! initial velocity. The closed-form position is used both to find when
//! the motion comes to rest and to bake the curve into a CSS `linear()`
//! easing, which lets the browser replay spring motion with an ordinary
//! transition.

use super::css_number;
use crate::config::{SPRING_REST_DELTA, SPRING_SAMPLE_HZ};

/// Upper bound on the settle search for critically and over-damped springs.
const MAX_SETTLE_SECS: f64 = 10.0;

/// Step used by the settle search when no closed-form bound exists.
const SETTLE_SEARCH_STEP_SECS: f64 = 0.001;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Undamped angular frequency, rad/s.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Below 1 the spring oscillates around its target.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Normalised position at `t` seconds, 0 at rest start and 1 at target.
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            1.0 - decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else if zeta == 1.0 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Time after which the spring stays within `SPRING_REST_DELTA` of its target.
    pub fn settle_time(&self) -> f64 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if zeta < 1.0 {
            // |1 - x(t)| <= amplitude * e^(-zeta*w0*t)
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let amplitude = (1.0 + (zeta * w0 / wd).powi(2)).sqrt();
            return ((amplitude / SPRING_REST_DELTA).ln() / (zeta * w0)).min(MAX_SETTLE_SECS);
        }

        // Non-oscillating: the first time inside the band is final.
        let mut t = 0.0;
        while t < MAX_SETTLE_SECS {
            if (1.0 - self.position(t)).abs() < SPRING_REST_DELTA {
                return t;
            }
            t += SETTLE_SEARCH_STEP_SECS;
        }
        MAX_SETTLE_SECS
    }

    /// Positions sampled at `SPRING_SAMPLE_HZ` over the settle time. The
    /// last sample is pinned to the target.
    pub fn samples(&self) -> Vec<f64> {
        let duration = self.settle_time();
        let steps = (duration * SPRING_SAMPLE_HZ).ceil().max(1.0) as usize;
        let mut points: Vec<f64> = (0..=steps)
            .map(|i| self.position(duration * i as f64 / steps as f64))
            .collect();
        if let Some(last) = points.last_mut() {
            *last = 1.0;
        }
        points
    }

    /// CSS `linear()` timing function tracing the spring curve.
    pub fn css_easing(&self) -> String {
        let stops: Vec<String> = self.samples().into_iter().map(css_number).collect();
        format!("linear({})", stops.join(", "))
    }
}
