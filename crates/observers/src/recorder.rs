use std::marker::PhantomData;

use numkit_core::Observer;

/// Records a copy of every event it observes.
///
/// Pass `&mut recorder` to a solver to keep ownership of the history.
#[derive(Debug, Clone)]
pub struct Recorder<E, A = numkit_solvers::Action> {
    events: Vec<E>,
    _action: PhantomData<fn() -> A>,
}

impl<E, A> Default for Recorder<E, A> {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            _action: PhantomData,
        }
    }
}

impl<E, A> Recorder<E, A> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in emission order.
    #[must_use]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Consumes the recorder and returns its events.
    #[must_use]
    pub fn into_events(self) -> Vec<E> {
        self.events
    }
}

impl<E: Clone, A> Observer<E, A> for Recorder<E, A> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events.push(event.clone());
        None
    }
}

impl<E: Clone, A> Observer<E, A> for &mut Recorder<E, A> {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use numkit_solvers::{gradient_descent, newton};

    use crate::traits::IterationEvent;

    #[test]
    fn records_newton_trace() {
        let parabola = (|x: f64| x * x - 4.0, |x: f64| 2.0 * x);
        let mut recorder: Recorder<newton::Event> = Recorder::new();

        let solution = newton::solve(&parabola, 1.0, &newton::Config::default(), &mut recorder)
            .expect("should solve");

        let events = recorder.events();
        assert_eq!(events.len(), solution.iters + 1);
        assert_relative_eq!(events[0].x(), 1.0);
        assert_relative_eq!(events[1].x(), 2.5, epsilon = 1e-12);
        assert_eq!(events.last().map(IterationEvent::iter), Some(solution.iters));
    }

    #[test]
    fn recorded_gradient_steps_shrink() {
        let parabola = (|x: f64| x * x, |x: f64| 2.0 * x);
        let config = gradient_descent::Config::new(50, 0.1, 1e-3).expect("valid config");
        let mut recorder: Recorder<gradient_descent::Event> = Recorder::new();

        gradient_descent::minimize(&parabola, -1.0, &config, &mut recorder).expect("should solve");

        let events = recorder.into_events();
        assert!(
            events
                .windows(2)
                .all(|pair| pair[1].x.abs() < pair[0].x.abs())
        );
    }
}
