use super::Error;

/// Working interval of the bisection search.
///
/// Endpoints keep the caller's orientation, so `a > b` is allowed. Only the
/// residual sign at `a` is tracked; the sign at `b` is its opposite by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    a: f64,
    b: f64,
    sign_a: Sign,
}

impl Bracket {
    /// Creates a bracket from endpoint residuals.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoSignChange` if `fa` and `fb` have the same sign.
    pub(super) fn new(a: f64, b: f64, fa: f64, fb: f64) -> Result<Self, Error> {
        let sign_a = Sign::of(fa);
        if sign_a == Sign::of(fb) {
            return Err(Error::NoSignChange { a, b, fa, fb });
        }

        Ok(Self { a, b, sign_a })
    }

    /// Returns the bracket bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.a + self.b)
    }

    /// Returns half the bracket width, the error bound on the midpoint.
    pub(super) fn half_width(&self) -> f64 {
        0.5 * (self.b - self.a).abs()
    }

    /// Replaces the endpoint whose residual has the same sign as `fx`.
    ///
    /// When `fx` and `f(a)` differ in sign the root lies in `[a, x]` and `b`
    /// moves; otherwise it lies in `[x, b]` and `a` moves.
    pub(super) fn shrink(&mut self, x: f64, fx: f64) {
        let sign = Sign::of(fx);
        if sign == self.sign_a {
            self.a = x;
        } else {
            self.b = x;
        }
    }
}

/// The sign of a residual for bracket logic.
///
/// Comparing signs instead of testing `fa * fb < 0` keeps tiny residuals from
/// underflowing to a zero product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Positive,
    Negative,
}

impl Sign {
    fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}
