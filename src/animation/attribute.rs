use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::animation::ease::Ease;
use crate::animation::value::{Additive, AttrValue, Lerp};
use crate::foundation::core::{Point, Time, progress};
use crate::foundation::error::{VectorError, VectorResult};

type TimeFn<T> = Rc<dyn Fn(Time) -> T>;

/// Interval an editing operation is active on.
///
/// Both endpoints are included by default. With `hold`, times after `end` keep the
/// value the edit produced at `end` instead of falling back to the previous function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    /// First instant of the interval.
    pub start: Time,
    /// Last instant of the interval.
    pub end: Time,
    /// Whether `start` itself is inside the interval.
    pub left_closed: bool,
    /// Whether `end` itself is inside the interval.
    pub right_closed: bool,
    /// Keep the end-of-interval value after `end`.
    pub hold: bool,
}

impl Span {
    /// Closed interval `[start, end]` without hold.
    pub fn new(start: Time, end: Time) -> Self {
        Self {
            start,
            end,
            left_closed: true,
            right_closed: true,
            hold: false,
        }
    }

    /// Keep the value reached at `end` afterwards.
    pub fn hold(mut self) -> Self {
        self.hold = true;
        self
    }

    /// Exclude `start` from the interval.
    pub fn open_start(mut self) -> Self {
        self.left_closed = false;
        self
    }

    /// Exclude `end` from the interval.
    pub fn open_end(mut self) -> Self {
        self.right_closed = false;
        self
    }

    fn covers(&self, t: Time) -> bool {
        if t < self.start || t > self.end {
            return false;
        }
        !((!self.left_closed && t == self.start) || (!self.right_closed && t == self.end))
    }
}

struct Layers<T> {
    func: TimeFn<T>,
    last_change: Time,
    bound: Option<Attribute<T>>,
}

/// A value that is a total function of time.
///
/// Edits never overwrite values: each one wraps the previous function and consults it
/// outside its own interval, so the value at any past instant stays reconstructible.
///
/// `Attribute` is a shared handle. Cloning it yields a second handle to the same
/// layered function; edits made through either handle are seen by both.
pub struct Attribute<T> {
    inner: Rc<RefCell<Layers<T>>>,
}

impl<T> Clone for Attribute<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: AttrValue> fmt::Debug for Attribute<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layers = self.inner.borrow();
        f.debug_struct("Attribute")
            .field("last_change", &layers.last_change)
            .field("bound", &layers.bound.is_some())
            .finish_non_exhaustive()
    }
}

impl<T: AttrValue> Attribute<T> {
    /// Create an attribute holding `value` from `creation` onward.
    ///
    /// Before `creation` it reports `value.zero_like()`.
    pub fn new(creation: Time, value: T) -> Self {
        let zero = value.zero_like();
        Self::from_parts(
            Rc::new(move |t| {
                if t < creation {
                    zero.clone()
                } else {
                    value.clone()
                }
            }),
            creation,
        )
    }

    /// Attribute driven entirely by `f`, constant after `last_change`.
    pub fn from_fn(last_change: Time, f: impl Fn(Time) -> T + 'static) -> Self {
        Self::from_parts(Rc::new(f), last_change)
    }

    /// New attribute that is a live alias of `other`.
    pub fn alias_of(other: &Attribute<T>) -> Self {
        let target = other.clone();
        let alias = Self::from_parts(Rc::new(move |t| target.evaluate(t)), Time::NEG_INFINITY);
        alias.inner.borrow_mut().bound = Some(other.clone());
        alias
    }

    fn from_parts(func: TimeFn<T>, last_change: Time) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Layers {
                func,
                last_change,
                bound: None,
            })),
        }
    }

    /// Value at `time`.
    pub fn evaluate(&self, time: Time) -> T {
        let func = Rc::clone(&self.inner.borrow().func);
        func(time)
    }

    /// Shorthand for [`Attribute::evaluate`].
    pub fn at(&self, time: Time) -> T {
        self.evaluate(time)
    }

    /// The instant after which this attribute is guaranteed constant.
    ///
    /// For a bound attribute this also follows the target's current `last_change`.
    pub fn last_change(&self) -> Time {
        let layers = self.inner.borrow();
        match &layers.bound {
            Some(target) => layers.last_change.max(target.last_change()),
            None => layers.last_change,
        }
    }

    /// Independent copy of the current layered function.
    ///
    /// Edits made to `self` afterwards are not seen by the snapshot, and vice versa.
    pub fn snapshot(&self) -> Attribute<T> {
        Self::from_parts(self.current(), self.last_change())
    }

    /// Return `true` when both handles refer to the same attribute.
    pub fn same_entity(&self, other: &Attribute<T>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn current(&self) -> TimeFn<T> {
        Rc::clone(&self.inner.borrow().func)
    }

    fn install(&self, func: TimeFn<T>, changed_until: Time) {
        let mut layers = self.inner.borrow_mut();
        layers.func = func;
        layers.last_change = layers.last_change.max(changed_until);
    }

    fn layer(&self, span: Span, rule: impl Fn(Time, &TimeFn<T>) -> T + 'static) {
        let old = self.current();
        let func: TimeFn<T> = Rc::new(move |t| {
            let pick = |t: Time| {
                if span.covers(t) {
                    rule(t, &old)
                } else {
                    old(t)
                }
            };
            if t < span.start {
                old(t)
            } else if t > span.end {
                if span.hold { pick(span.end) } else { old(t) }
            } else {
                pick(t)
            }
        });
        self.install(func, span.end);
    }

    /// Replace the value by `g(t)` on `span`.
    pub fn set(&self, span: Span, g: impl Fn(Time) -> T + 'static) {
        self.layer(span, move |t, _old| g(t));
    }

    /// Hold `value` from `start` onward (inclusive).
    pub fn set_from(&self, start: Time, value: T) {
        self.set_from_with(start, move |_| value.clone());
    }

    /// Hold `value` from just after `start` onward; `start` keeps the previous value.
    pub fn set_from_open(&self, start: Time, value: T) {
        let old = self.current();
        let func: TimeFn<T> = Rc::new(move |t| if t <= start { old(t) } else { value.clone() });
        self.install(func, start);
    }

    /// Follow the live function `g` from `start` onward.
    pub fn set_from_with(&self, start: Time, g: impl Fn(Time) -> T + 'static) {
        let old = self.current();
        let func: TimeFn<T> = Rc::new(move |t| if t < start { old(t) } else { g(t) });
        self.install(func, start);
    }

    /// Override exactly one instant.
    pub fn set_at(&self, time: Time, value: T) {
        let old = self.current();
        let func: TimeFn<T> = Rc::new(move |t| if t == time { value.clone() } else { old(t) });
        self.install(func, time);
    }

    /// Make this attribute a live alias of `other`.
    ///
    /// Later edits to `other` are visible through `self`, and `self.last_change()`
    /// follows `other.last_change()`. Edits applied to `self` after binding layer on top
    /// of the alias as usual. Binding an attribute to itself is rejected; longer alias
    /// cycles are not detected.
    pub fn bind_to(&self, other: &Attribute<T>) -> VectorResult<()> {
        if self.same_entity(other) {
            return Err(VectorError::config("cannot bind an attribute to itself"));
        }
        let target = other.clone();
        let mut layers = self.inner.borrow_mut();
        layers.func = Rc::new(move |t| target.evaluate(t));
        layers.last_change = Time::NEG_INFINITY;
        layers.bound = Some(other.clone());
        Ok(())
    }
}

impl<T: Additive> Attribute<T> {
    /// Add `g(t)` to the previous value on `span`.
    pub fn add(&self, span: Span, g: impl Fn(Time) -> T + 'static) {
        self.layer(span, move |t, old| old(t).add(&g(t)));
    }

    /// Add a constant `delta` from `start` onward.
    ///
    /// `last_change`, when given, extends the settling time for deltas that keep
    /// changing after `start`.
    pub fn add_from(&self, start: Time, delta: T, last_change: Option<Time>) {
        self.add_from_with(start, move |_| delta.clone(), last_change);
    }

    /// Add the live function `g` from `start` onward.
    pub fn add_from_with(
        &self,
        start: Time,
        g: impl Fn(Time) -> T + 'static,
        last_change: Option<Time>,
    ) {
        let old = self.current();
        let func: TimeFn<T> = Rc::new(move |t| if t < start { old(t) } else { old(t).add(&g(t)) });
        self.install(func, start.max(last_change.unwrap_or(start)));
    }

    /// Add `delta` to the value at exactly one instant.
    pub fn add_at(&self, time: Time, delta: T) {
        let value = self.evaluate(time).add(&delta);
        self.set_at(time, value);
    }
}

impl<T: Lerp> Attribute<T> {
    /// Ease from the value at `start` to `target` over `[start, end]`.
    pub fn move_to(&self, start: Time, end: Time, target: T, hold: bool, ease: Ease) {
        let from = self.evaluate(start);
        let mut span = Span::new(start, end);
        span.hold = hold;
        self.set(span, move |t| {
            T::lerp(&from, &target, ease.apply(progress(t, start, end)))
        });
    }

    /// Fresh attribute easing from `self` at `start` to `other` at `end`.
    ///
    /// The result is a pure function of the two endpoint values; later edits to either
    /// input do not affect it.
    pub fn interpolate(
        &self,
        other: &Attribute<T>,
        start: Time,
        end: Time,
        ease: Ease,
    ) -> VectorResult<Attribute<T>> {
        let from = self.evaluate(start);
        let to = other.evaluate(end);
        T::check_compatible(&from, &to)?;
        Ok(Attribute::from_fn(end, move |t| {
            T::lerp(&from, &to, ease.apply(progress(t, start, end)))
        }))
    }
}

impl Attribute<f64> {
    /// Value at `time` rounded to the nearest integer.
    pub fn evaluate_rounded(&self, time: Time) -> i64 {
        self.evaluate(time).round() as i64
    }
}

impl Attribute<Point> {
    /// Rotate around `pivot` by `degrees` over `[start, end]`.
    ///
    /// Radius and angle are recomputed from the underlying function at every sampled
    /// time, so the rotation composes with motion that is still in progress. Directions
    /// are as seen on screen (y axis pointing down).
    pub fn rotate_around(
        &self,
        start: Time,
        end: Time,
        pivot: Point,
        degrees: f64,
        clockwise: bool,
        hold: bool,
    ) {
        let old = self.current();
        let sign = if clockwise { 1.0 } else { -1.0 };
        let mut span = Span::new(start, end);
        span.hold = hold;
        self.set(span, move |t| {
            let rel = old(t) - pivot;
            let radius = rel.hypot();
            let phi = rel.y.atan2(rel.x) + sign * degrees.to_radians() * progress(t, start, end);
            Point::new(pivot.x + radius * phi.cos(), pivot.y + radius * phi.sin())
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/attribute.rs"]
mod tests;
