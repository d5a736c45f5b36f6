//! Satisfaction functions: mapping scalar measurements to [0,1] scores.
//!
//! A satisfaction function expresses how desirable a measured value is —
//! projected screen area, viewing angle, distance — as a score in [0,1]
//! over a closed domain. Besides scoring, every function can be sampled in
//! inverse: drawing domain values with probability density proportional to
//! satisfaction, which biases candidate generation toward regions a human
//! would prefer.
//!
//! Two kinds exist: a piecewise-linear spline over explicit control points,
//! and a Gaussian expressed as a spline with specially generated control
//! points. Sharing the spline machinery keeps evaluation and sampling
//! uniform across kinds.

use rand::{Rng, RngCore};

/// Piecewise-linear interpolation through ordered control points.
///
/// Queries before the first control point (or with a single point) return
/// the first y, queries past the last return the last y. Otherwise the first
/// control point whose x exceeds the query is found and the result
/// interpolated between it and its predecessor.
///
/// `control_x` must be non-empty and sorted ascending; `control_y` must be
/// at least as long.
pub fn linear_spline(x: f64, control_x: &[f64], control_y: &[f64]) -> f64 {
    // off the beginning
    if control_x.len() == 1 || x < control_x[0] {
        return control_y[0];
    }

    for i in 1..control_x.len() {
        if x < control_x[i] {
            let alpha = (control_x[i] - x) / (control_x[i] - control_x[i - 1]);
            return control_y[i] * (1.0 - alpha) + control_y[i - 1] * alpha;
        }
    }

    // off the end
    control_y[control_x.len() - 1]
}

/// A scalar-measurement-to-desirability mapping over a closed domain.
pub trait SatFunction {
    /// Closed input domain `[x0, x1]`.
    fn domain(&self) -> (f64, f64);

    /// Score for a measured value, in [0,1].
    fn compute_satisfaction(&self, value: f64) -> f64;

    /// Rebuilds the cumulative distribution from the current control points.
    ///
    /// Idempotent. Constructors call this once; callers that mutate control
    /// points afterwards are responsible for calling it again.
    fn rebuild_cdf(&mut self);

    /// Draws a domain value with probability density proportional to
    /// satisfaction.
    ///
    /// The generator is caller-supplied, so sampling is deterministic under
    /// a seeded source.
    fn generate_random_x(&self, rng: &mut dyn RngCore) -> f64;
}

/// Satisfaction function defined by a linear spline.
///
/// Control points are public so a host can reshape the function in place;
/// after any mutation [`SatFunction::rebuild_cdf`] must be called before
/// sampling again.
#[derive(Clone, Debug)]
pub struct LinearSplineSat {
    /// Spline control points, x values (ascending).
    pub sat_x: Vec<f64>,
    /// Spline control points, y values in [0,1].
    pub sat_y: Vec<f64>,
    /// Cumulative distribution, x values (copy of `sat_x`).
    pub cumulative_x: Vec<f64>,
    /// Cumulative distribution, running trapezoid-rule areas. Unnormalized:
    /// the last entry is the total mass, not 1.
    pub cumulative_y: Vec<f64>,
    domain: (f64, f64),
}

impl LinearSplineSat {
    /// Builds a spline from explicit control points.
    ///
    /// The domain is `[xs[0], xs[last]]`; `xs` must be non-empty and sorted.
    pub fn from_points(xs: &[f64], ys: &[f64]) -> Self {
        let mut f = Self {
            sat_x: xs.to_vec(),
            sat_y: ys.to_vec(),
            cumulative_x: Vec::new(),
            cumulative_y: Vec::new(),
            domain: (xs[0], xs[xs.len() - 1]),
        };
        f.rebuild_cdf();
        f
    }

    /// Builds a near-trapezoidal spline around a desired value.
    ///
    /// Satisfaction ramps from 0 at the range edges through a narrow 0.05 /
    /// 0.8 shoulder to a plateau of 1.0 at `desired_value`. With `increasing`
    /// the plateau extends to `max_range`; otherwise the ramp decays
    /// symmetrically on the far side. `deviation` is the half-width of the
    /// near-1 region as a fraction of the range. Transition points are offset
    /// by `range * 0.001` to keep x coordinates distinct.
    ///
    /// Degenerate ranges (desired value at or beyond an extreme) collapse
    /// segments instead of failing.
    pub fn desired(
        min_range: f64,
        max_range: f64,
        desired_value: f64,
        deviation: f64,
        increasing: bool,
    ) -> Self {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        let range = (max_range - min_range).abs();
        let epsilon = range * 0.001;

        if desired_value - (range * deviation + epsilon) > min_range {
            xs.push(min_range);
            ys.push(0.0);
            xs.push(desired_value - (range * deviation + epsilon));
            ys.push(0.05);
            xs.push(desired_value - range * deviation);
            ys.push(0.8);
        } else if desired_value > min_range {
            xs.push(min_range);
            ys.push(0.8);
        }

        if desired_value < max_range {
            xs.push(desired_value);
            ys.push(1.0);
            if increasing {
                xs.push(max_range);
                ys.push(1.0);
            } else if desired_value + range * deviation + epsilon < max_range {
                xs.push(desired_value + range * deviation);
                ys.push(0.8);
                xs.push(desired_value + range * deviation + epsilon);
                ys.push(0.05);
                xs.push(max_range);
                ys.push(0.0);
            } else {
                xs.push(max_range);
                ys.push(0.8);
            }
        } else {
            xs.push(max_range);
            ys.push(1.0);
        }

        Self::from_points(&xs, &ys)
    }

    /// Total mass of the unnormalized cumulative distribution.
    pub fn total_mass(&self) -> f64 {
        self.cumulative_y.last().copied().unwrap_or(0.0)
    }
}

impl SatFunction for LinearSplineSat {
    fn domain(&self) -> (f64, f64) {
        self.domain
    }

    fn compute_satisfaction(&self, value: f64) -> f64 {
        linear_spline(value, &self.sat_x, &self.sat_y)
    }

    fn rebuild_cdf(&mut self) {
        self.cumulative_x = self.sat_x.clone();
        self.cumulative_y.clear();
        self.cumulative_y.push(0.0);

        for i in 1..self.sat_x.len() {
            let width = (self.sat_x[i] - self.sat_x[i - 1]).abs();
            let height = self.sat_y[i] + self.sat_y[i - 1];
            let area = width * height * 0.5;
            let prev = self.cumulative_y[i - 1];
            self.cumulative_y.push(prev + area);
        }
    }

    fn generate_random_x(&self, rng: &mut dyn RngCore) -> f64 {
        let y_point = rng.random_range(0.0..=self.total_mass());

        // invert the CDF with the same spline evaluator, axes swapped:
        // the cumulative values act as x, the original domain as y
        linear_spline(y_point, &self.cumulative_y, &self.cumulative_x)
    }
}

/// Gaussian satisfaction function, approximated by a linear spline.
///
/// Built by sampling the true Gaussian at 10 evenly spaced points across the
/// domain and inserting one exact `(u, 1.0)` point between the two samples
/// bracketing the mean. Evaluation and sampling then go through the spline,
/// keeping them uniform with every other satisfaction function; this is an
/// approximation of the Gaussian, not an exact evaluator.
#[derive(Clone, Debug)]
pub struct GaussianSat {
    /// Value at which satisfaction peaks at 1.0.
    pub u: f64,
    /// Standard deviation.
    pub sigma: f64,
    spline: LinearSplineSat,
}

impl GaussianSat {
    pub fn new(u: f64, sigma: f64, domain: (f64, f64)) -> Self {
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        let increment = (domain.1 - domain.0) / 9.0;

        for i in 0..10 {
            let x = domain.0 + i as f64 * increment;
            xs.push(x);
            ys.push(gaussian_clamped(x, u, sigma, domain));
            if x < u && x + increment > u {
                // the mean falls between this sample and the next
                xs.push(u);
                ys.push(1.0);
            }
        }

        let spline = LinearSplineSat::from_points(&xs, &ys);
        Self { u, sigma, spline }
    }

    /// Exact Gaussian value, with the input clamped to the domain.
    pub fn gaussian(&self, value: f64) -> f64 {
        gaussian_clamped(value, self.u, self.sigma, self.spline.domain())
    }

    /// The underlying spline approximation.
    pub fn spline(&self) -> &LinearSplineSat {
        &self.spline
    }
}

impl SatFunction for GaussianSat {
    fn domain(&self) -> (f64, f64) {
        self.spline.domain()
    }

    fn compute_satisfaction(&self, value: f64) -> f64 {
        self.spline.compute_satisfaction(value)
    }

    fn rebuild_cdf(&mut self) {
        self.spline.rebuild_cdf();
    }

    fn generate_random_x(&self, rng: &mut dyn RngCore) -> f64 {
        self.spline.generate_random_x(rng)
    }
}

fn gaussian_clamped(value: f64, u: f64, sigma: f64, domain: (f64, f64)) -> f64 {
    // restrict the input to the domain; plain comparisons so an inverted
    // domain degrades instead of panicking
    let mut v = value;
    if v > domain.1 {
        v = domain.1;
    }
    if v < domain.0 {
        v = domain.0;
    }
    (-0.5 * (v - u).powi(2) / (sigma * sigma)).exp()
}
