/// A real-valued function of one real variable.
///
/// Bisection only needs to evaluate the function, so the trait is a single
/// infallible call. The function must be continuous on the interval being
/// searched; solvers do not check this.
///
/// Anything implementing `Fn(f64) -> f64` implements `Function`: closures,
/// fn items, and references to those. Types that implement `Function`
/// directly are passed by value.
///
/// # Example
///
/// ```rust
/// use bisect_core::Function;
///
/// struct Shifted(f64);
///
/// impl Function for Shifted {
///     fn eval(&self, x: f64) -> f64 {
///         x - self.0
///     }
/// }
///
/// assert_eq!(Shifted(2.0).eval(5.0), 3.0);
/// assert_eq!((|x: f64| x * x).eval(3.0), 9.0);
/// ```
pub trait Function {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
