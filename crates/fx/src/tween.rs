use std::time::Duration;

use css::format_px;
use dom::{Document, Id};

use crate::easing::{EasingFn, sine_in_out};

#[derive(Debug, Clone, Copy)]
struct Run {
    from: f32,
    to: f32,
    elapsed: Duration,
}

/// Interpolates a px style property of one element.
///
/// Starting a tween while one is running retargets it from wherever the
/// caller says the property currently is; nothing is queued.
#[derive(Debug, Clone)]
pub struct Tween {
    property: String,
    duration: Duration,
    easing: EasingFn,
    run: Option<Run>,
}

impl Tween {
    pub fn new(property: &str, duration: Duration) -> Self {
        Self {
            property: property.to_ascii_lowercase(),
            duration,
            easing: sine_in_out,
            run: None,
        }
    }

    /// Set the easing function (builder).
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Where the running tween is heading.
    pub fn target(&self) -> Option<f32> {
        self.run.map(|r| r.to)
    }

    /// Starts (or retargets) toward `to`. A zero duration applies `to`
    /// immediately. Restarting toward the current target is a no-op.
    pub fn start(&mut self, doc: &mut Document, id: Id, from: f32, to: f32) {
        if self.target() == Some(to) {
            return;
        }
        if self.duration.is_zero() || from == to {
            self.run = None;
            self.write(doc, id, to);
            return;
        }
        log::trace!(
            target: "fx.tween",
            "{} of {}: {from} -> {to} over {:?}",
            self.property,
            id.0,
            self.duration
        );
        self.run = Some(Run {
            from,
            to,
            elapsed: Duration::ZERO,
        });
    }

    /// Advances by `dt` and writes the interpolated value. Returns whether
    /// the tween is still running afterwards.
    pub fn tick(&mut self, doc: &mut Document, id: Id, dt: Duration) -> bool {
        let Some(mut run) = self.run else {
            return false;
        };
        run.elapsed = run.elapsed.saturating_add(dt);

        if run.elapsed >= self.duration {
            self.run = None;
            self.write(doc, id, run.to);
            return false;
        }

        let t = (run.elapsed.as_secs_f64() / self.duration.as_secs_f64()) as f32;
        let value = run.from + (run.to - run.from) * (self.easing)(t);
        self.write(doc, id, value);
        self.run = Some(run);
        true
    }

    /// Drops a running tween without touching the element.
    pub fn cancel(&mut self) {
        self.run = None;
    }

    fn write(&self, doc: &mut Document, id: Id, value: f32) {
        if let Some(el) = doc.element_mut(id) {
            el.set_style(&self.property, &format_px(value));
        }
    }
}
