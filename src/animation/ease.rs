use std::f64::consts::PI;

/// Easing functions used to map normalized animation progress.
///
/// Most curves are pinned to `0` below the unit interval and `1` above it. The
/// round-trip curves ([`Ease::ThereAndBack`], [`Ease::ThereAndBackWithPause`],
/// [`Ease::Wiggle`]) return to `0` and are pinned to `0` on both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Logistic S-curve with inflection 10.
    Smooth,
    /// First half of [`Ease::Smooth`], stretched.
    RushInto,
    /// Second half of [`Ease::Smooth`], stretched.
    RushFrom,
    /// Quarter-circle ease-out.
    SlowInto,
    /// Two consecutive smooth steps.
    DoubleSmooth,
    /// Smooth out to `1` and back to `0`.
    ThereAndBack,
    /// Smooth out, hold for a third of the interval, smooth back.
    ThereAndBackWithPause,
    /// Oscillation that starts and ends at `0`.
    Wiggle,
    /// Linear over the first 80%, then held.
    Lingering,
    /// Exponential approach with half-life 0.1.
    ExponentialDecay,
    /// Sine ease-in.
    InSine,
    /// Sine ease-out.
    OutSine,
    /// Sine ease-in/out.
    InOutSine,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quartic ease-out.
    OutQuart,
    /// Quartic ease-in/out.
    InOutQuart,
    /// Quintic ease-in.
    InQuint,
    /// Quintic ease-out.
    OutQuint,
    /// Quintic ease-in/out.
    InOutQuint,
    /// Exponential ease-in.
    InExpo,
    /// Exponential ease-out.
    OutExpo,
    /// Exponential ease-in/out.
    InOutExpo,
    /// Circular ease-in.
    InCirc,
    /// Circular ease-out.
    OutCirc,
    /// Circular ease-in/out.
    InOutCirc,
    /// Back ease-in (undershoots below 0).
    InBack,
    /// Back ease-out (overshoots above 1).
    OutBack,
    /// Back ease-in/out.
    InOutBack,
    /// Elastic ease-in.
    InElastic,
    /// Elastic ease-out.
    OutElastic,
    /// Elastic ease-in/out.
    InOutElastic,
    /// Bounce ease-in.
    InBounce,
    /// Bounce ease-out.
    OutBounce,
    /// Bounce ease-in/out.
    InOutBounce,
}

impl Ease {
    /// Apply this easing function to normalized progress `t`.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::ThereAndBack | Self::ThereAndBackWithPause | Self::Wiggle => {
                if (0.0..=1.0).contains(&t) {
                    self.eval_unit(t)
                } else {
                    0.0
                }
            }
            _ => {
                if t < 0.0 {
                    0.0
                } else if t > 1.0 {
                    1.0
                } else {
                    self.eval_unit(t)
                }
            }
        }
    }

    /// Return `true` for curves that end where they started.
    pub fn is_round_trip(self) -> bool {
        matches!(
            self,
            Self::ThereAndBack | Self::ThereAndBackWithPause | Self::Wiggle
        )
    }

    fn eval_unit(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Smooth => smooth(t),
            Self::RushInto => 2.0 * smooth(t / 2.0),
            Self::RushFrom => 2.0 * smooth(t / 2.0 + 0.5) - 1.0,
            Self::SlowInto => (1.0 - (1.0 - t) * (1.0 - t)).sqrt(),
            Self::DoubleSmooth => {
                if t < 0.5 {
                    0.5 * smooth(2.0 * t)
                } else {
                    0.5 * (1.0 + smooth(2.0 * t - 1.0))
                }
            }
            Self::ThereAndBack => there_and_back(t),
            Self::ThereAndBackWithPause => {
                const PAUSE: f64 = 1.0 / 3.0;
                let a = 1.0 / PAUSE;
                if t < 0.5 - PAUSE / 2.0 {
                    smooth(a * t)
                } else if t < 0.5 + PAUSE / 2.0 {
                    1.0
                } else {
                    smooth(a - a * t)
                }
            }
            Self::Wiggle => there_and_back(t) * (2.0 * PI * t).sin(),
            Self::Lingering => (t / 0.8).min(1.0),
            Self::ExponentialDecay => 1.0 - (-t / 0.1).exp(),
            Self::InSine => 1.0 - ((t * PI) / 2.0).cos(),
            Self::OutSine => ((t * PI) / 2.0).sin(),
            Self::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
            Self::InQuint => t.powi(5),
            Self::OutQuint => 1.0 - (1.0 - t).powi(5),
            Self::InOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(5) / 2.0)
                }
            }
            Self::InExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * t - 10.0)
                }
            }
            Self::OutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::InOutExpo => {
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::InCirc => 1.0 - (1.0 - t * t).sqrt(),
            Self::OutCirc => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Self::InOutCirc => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }
            Self::InBack => {
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                C3 * t * t * t - C1 * t * t
            }
            Self::OutBack => {
                const C1: f64 = 1.70158;
                const C3: f64 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
            Self::InOutBack => {
                const C2: f64 = 1.70158 * 1.525;
                if t < 0.5 {
                    ((2.0 * t).powi(2) * ((C2 + 1.0) * 2.0 * t - C2)) / 2.0
                } else {
                    ((2.0 * t - 2.0).powi(2) * ((C2 + 1.0) * (t * 2.0 - 2.0) + C2) + 2.0) / 2.0
                }
            }
            Self::InElastic => {
                let c4 = (2.0 * PI) / 3.0;
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    -(2f64.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * c4).sin()
                }
            }
            Self::OutElastic => {
                let c4 = (2.0 * PI) / 3.0;
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
                }
            }
            Self::InOutElastic => {
                let c5 = (2.0 * PI) / 4.5;
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    -(2f64.powf(20.0 * t - 10.0) * ((20.0 * t - 11.125) * c5).sin()) / 2.0
                } else {
                    (2f64.powf(-20.0 * t + 10.0) * ((20.0 * t - 11.125) * c5).sin()) / 2.0 + 1.0
                }
            }
            Self::InBounce => 1.0 - out_bounce(1.0 - t),
            Self::OutBounce => out_bounce(t),
            Self::InOutBounce => {
                if t < 0.5 {
                    (1.0 - out_bounce(1.0 - 2.0 * t)) / 2.0
                } else {
                    (1.0 + out_bounce(2.0 * t - 1.0)) / 2.0
                }
            }
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn smooth(t: f64) -> f64 {
    const INFLECTION: f64 = 10.0;
    let t = t.clamp(0.0, 1.0);
    let error = sigmoid(-INFLECTION / 2.0);
    ((sigmoid(INFLECTION * (t - 0.5)) - error) / (1.0 - 2.0 * error)).clamp(0.0, 1.0)
}

fn there_and_back(t: f64) -> f64 {
    let folded = if t < 0.5 { 2.0 * t } else { 2.0 * (1.0 - t) };
    smooth(folded)
}

fn out_bounce(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
