//! Discount-rate curve keyed by maturity in years.
//!
//! `RateCurve` holds annually compounded rates at a set of tenors, sorted
//! ascending. Lookups between knots interpolate linearly; lookups past
//! either end are handled by the requested [`ExtrapolationMethod`] and
//! reported through [`RateSource`] so callers can surface them.

use std::fmt;

use coupon_math::extrapolation::{ExtrapolationMethod, ShortEndRate};
use coupon_math::interpolation::{Interpolator, LinearInterpolator};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Minimum number of knots needed for a lookup.
const MIN_POINTS: usize = 2;

/// A single quoted point on a rate curve.
///
/// A missing rate is kept as `None` so raw market tables with gaps can be
/// fed in directly; such points are dropped when the curve is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Maturity in years.
    pub years: f64,
    /// Annually compounded rate, or `None` if not quoted.
    #[serde(default)]
    pub rate: Option<f64>,
}

impl CurvePoint {
    /// Creates a quoted point.
    #[must_use]
    pub fn new(years: f64, rate: f64) -> Self {
        Self {
            years,
            rate: Some(rate),
        }
    }

    /// Creates a point with no quote.
    #[must_use]
    pub fn missing(years: f64) -> Self {
        Self { years, rate: None }
    }
}

/// Which end of the curve an extrapolated rate was anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveEnd {
    /// Before the shortest tenor.
    Short,
    /// Beyond the longest tenor.
    Long,
}

impl fmt::Display for CurveEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveEnd::Short => write!(f, "short end"),
            CurveEnd::Long => write!(f, "long end"),
        }
    }
}

/// How a looked-up rate was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RateSource {
    /// Inside the quoted range (including exactly on a knot).
    Interpolated,
    /// Outside the quoted range.
    Extrapolated {
        /// Tenor of the knot the value was anchored to.
        boundary: f64,
        /// Which end of the curve the query fell past.
        end: CurveEnd,
    },
}

/// Result of a curve lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveRate {
    /// Tenor queried, in years.
    pub tenor: f64,
    /// Annually compounded rate at that tenor.
    pub rate: f64,
    /// How the rate was obtained.
    pub source: RateSource,
}

impl CurveRate {
    /// Returns true if the rate came from outside the quoted range.
    #[must_use]
    pub fn is_extrapolated(&self) -> bool {
        matches!(self.source, RateSource::Extrapolated { .. })
    }
}

/// A discount-rate term structure.
///
/// # Example
///
/// ```rust
/// use coupon_curves::RateCurve;
///
/// // Unsorted input with a gap at 7y
/// let curve = RateCurve::from_optional([
///     (10.0, Some(0.025)),
///     (1.0, Some(0.010)),
///     (7.0, None),
///     (5.0, Some(0.020)),
/// ])
/// .unwrap();
///
/// assert_eq!(curve.tenors(), vec![1.0, 5.0, 10.0]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<CurvePoint>", into = "Vec<CurvePoint>")]
pub struct RateCurve {
    /// Valid knots sorted by tenor.
    points: Vec<(f64, f64)>,
    /// Present once there are enough knots to interpolate.
    interpolator: Option<LinearInterpolator>,
}

impl RateCurve {
    /// Builds a curve from fully quoted `(years, rate)` pairs.
    ///
    /// `NaN` rates are treated as missing and dropped.
    pub fn from_points<I>(points: I) -> CurveResult<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::from_optional(points.into_iter().map(|(t, r)| (t, Some(r))))
    }

    /// Builds a curve from `(years, rate)` pairs where the rate may be
    /// missing.
    ///
    /// Missing rates (`None` or `NaN`) are dropped before validation. The
    /// remaining points are sorted by tenor. Fewer than two valid points is
    /// accepted here; lookups on such a curve fail with
    /// [`CurveError::InsufficientPoints`].
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidTenor`] for a negative or non-finite tenor
    /// - [`CurveError::InvalidRate`] for an infinite rate or one at or below -100%
    /// - [`CurveError::DuplicateTenor`] if a tenor appears twice
    pub fn from_optional<I>(points: I) -> CurveResult<Self>
    where
        I: IntoIterator<Item = (f64, Option<f64>)>,
    {
        let mut dropped = 0usize;
        let mut valid = Vec::new();

        for (tenor, rate) in points {
            let Some(rate) = rate.filter(|r| !r.is_nan()) else {
                dropped += 1;
                continue;
            };
            if !tenor.is_finite() || tenor < 0.0 {
                return Err(CurveError::InvalidTenor { tenor });
            }
            if rate.is_infinite() || rate <= -1.0 {
                return Err(CurveError::InvalidRate { tenor, rate });
            }
            valid.push((tenor, rate));
        }

        valid.sort_by(|a, b| a.0.total_cmp(&b.0));

        if let Some(pair) = valid.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(CurveError::DuplicateTenor { tenor: pair[0].0 });
        }

        if dropped > 0 {
            debug!("Dropped {} curve points with missing rates", dropped);
        }

        let interpolator = if valid.len() >= MIN_POINTS {
            let (xs, ys): (Vec<f64>, Vec<f64>) = valid.iter().copied().unzip();
            Some(LinearInterpolator::new(xs, ys)?)
        } else {
            None
        };

        debug!(
            "Built rate curve with {} points ({} dropped)",
            valid.len(),
            dropped
        );

        Ok(Self {
            points: valid,
            interpolator,
        })
    }

    /// Returns the number of valid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the curve has no valid points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns true if the curve has enough points for lookups.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.interpolator.is_some()
    }

    /// Returns the valid `(years, rate)` points in tenor order.
    #[must_use]
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Returns the tenors in ascending order.
    #[must_use]
    pub fn tenors(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.0).collect()
    }

    /// Returns the rates in tenor order.
    #[must_use]
    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.1).collect()
    }

    /// Returns the shortest tenor.
    #[must_use]
    pub fn min_tenor(&self) -> Option<f64> {
        self.points.first().map(|p| p.0)
    }

    /// Returns the longest tenor.
    #[must_use]
    pub fn max_tenor(&self) -> Option<f64> {
        self.points.last().map(|p| p.0)
    }

    /// Looks up the rate at `t` years, extrapolating flat past either end.
    pub fn rate(&self, t: f64) -> CurveResult<CurveRate> {
        self.rate_with(t, ExtrapolationMethod::Flat)
    }

    /// Looks up the rate at `t` years with the given extrapolation method.
    ///
    /// Tenors before the first knot take the shortest quoted rate.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InsufficientPoints`] if the curve has fewer than two points
    /// - [`CurveError::InvalidTenor`] if `t` is not finite
    /// - [`CurveError::TenorOutOfRange`] if `t` is outside the curve and
    ///   `method` is [`ExtrapolationMethod::None`]
    pub fn rate_with(&self, t: f64, method: ExtrapolationMethod) -> CurveResult<CurveRate> {
        self.rate_with_short_end(t, method, ShortEndRate::Nearest)
    }

    /// Looks up the rate at `t` years, choosing which quoted rate anchors
    /// tenors before the first knot.
    ///
    /// With [`ShortEndRate::LongestRate`] a short query is anchored to the
    /// last knot but still reported as [`CurveEnd::Short`].
    ///
    /// # Errors
    ///
    /// As for [`RateCurve::rate_with`].
    pub fn rate_with_short_end(
        &self,
        t: f64,
        method: ExtrapolationMethod,
        short_end: ShortEndRate,
    ) -> CurveResult<CurveRate> {
        let interp = self
            .interpolator
            .as_ref()
            .ok_or_else(|| CurveError::insufficient_points(MIN_POINTS, self.points.len()))?;

        if !t.is_finite() {
            return Err(CurveError::InvalidTenor { tenor: t });
        }

        if interp.in_range(t) {
            return Ok(CurveRate {
                tenor: t,
                rate: interp.interpolate(t)?,
                source: RateSource::Interpolated,
            });
        }

        let extrapolator = method.extrapolator().ok_or_else(|| {
            CurveError::tenor_out_of_range(t, interp.min_x(), interp.max_x())
        })?;

        let (end, (boundary, value)) = if t > interp.max_x() {
            (CurveEnd::Long, interp.last())
        } else {
            let anchor = match short_end {
                ShortEndRate::Nearest => interp.first(),
                ShortEndRate::LongestRate => interp.last(),
            };
            (CurveEnd::Short, anchor)
        };

        Ok(CurveRate {
            tenor: t,
            rate: extrapolator.extrapolate(t, boundary, value),
            source: RateSource::Extrapolated { boundary, end },
        })
    }
}

impl PartialEq for RateCurve {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
    }
}

impl TryFrom<Vec<CurvePoint>> for RateCurve {
    type Error = CurveError;

    fn try_from(points: Vec<CurvePoint>) -> CurveResult<Self> {
        Self::from_optional(points.into_iter().map(|p| (p.years, p.rate)))
    }
}

impl From<RateCurve> for Vec<CurvePoint> {
    fn from(curve: RateCurve) -> Self {
        curve
            .points
            .into_iter()
            .map(|(years, rate)| CurvePoint::new(years, rate))
            .collect()
    }
}
