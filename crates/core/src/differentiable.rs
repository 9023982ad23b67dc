/// A scalar function of one variable together with its first derivative.
///
/// Iterative solvers such as Newton's method and gradient descent need both
/// `f(x)` and `f'(x)` at every step. Implement this trait on a dedicated type,
/// or pass a `(f, df)` tuple of closures, which implements it directly.
pub trait Differentiable {
    /// Returns `f(x)`.
    fn value(&self, x: f64) -> f64;

    /// Returns `f'(x)`.
    fn derivative(&self, x: f64) -> f64;
}

impl<F, DF> Differentiable for (F, DF)
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    fn value(&self, x: f64) -> f64 {
        (self.0)(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (self.1)(x)
    }
}

impl<T: Differentiable + ?Sized> Differentiable for &T {
    fn value(&self, x: f64) -> f64 {
        (**self).value(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }
}
