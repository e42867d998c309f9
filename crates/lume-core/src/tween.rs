//! Minimal tween/timeline engine behind the menu transitions.
//!
//! Each [`Tween`] interpolates one target's offset/opacity pair over a delay
//! plus duration with an easing curve. The [`Timeline`] advances all active
//! tweens per frame and reports lifecycle events so the frontend can gate
//! pointer interactivity without the core touching any platform API.

use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TweenError {
    #[error("tween duration must be positive (got {0})")]
    NonPositiveDuration(f32),
}

/// Easing curves. The exponent is the polynomial degree: `PowerIn(2)` is a
/// quadratic ease-in, `PowerOut(4)` a quartic ease-out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    PowerIn(u8),
    PowerOut(u8),
}

impl Ease {
    /// Map linear progress `t` in [0, 1] to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::PowerIn(n) => t.powi(n as i32),
            Ease::PowerOut(n) => 1.0 - (1.0 - t).powi(n as i32),
        }
    }
}

/// An animated element. Items carry their list index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    MenuPanel,
    Logo,
    MenuItem(usize),
}

/// The animated property pair. `offset_y` is interpreted by the frontend:
/// percent of the element's own height for the menu panel, pixels otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sample {
    pub offset_y: f32,
    pub opacity: f32,
}

impl Sample {
    pub fn lerp(self, other: Sample, t: f32) -> Sample {
        Sample {
            offset_y: self.offset_y + (other.offset_y - self.offset_y) * t,
            opacity: self.opacity + (other.opacity - self.opacity) * t,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub target: Target,
    pub from: Sample,
    pub to: Sample,
    pub delay: f32,
    pub duration: f32,
    pub ease: Ease,
}

/// Lifecycle notifications emitted by [`Timeline::tick`]. `Started` fires on
/// the first frame a tween crosses its delay, `Completed` when it finishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenEvent {
    Started(Target),
    Completed(Target),
}

/// Per-item delays for a batch of `n` simultaneously triggered tweens.
/// A negative step staggers in reverse: later items lead.
pub fn stagger(n: usize, step: f32, base: f32) -> Vec<f32> {
    (0..n)
        .map(|i| {
            if step >= 0.0 {
                base + step * i as f32
            } else {
                base + (-step) * (n - 1 - i) as f32
            }
        })
        .collect()
}

struct ActiveTween {
    tween: Tween,
    elapsed: f32,
    started: bool,
}

impl ActiveTween {
    fn sample(&self) -> Sample {
        let local = self.elapsed - self.tween.delay;
        if local <= 0.0 {
            return self.tween.from;
        }
        let t = self.tween.ease.apply(local / self.tween.duration);
        self.tween.from.lerp(self.tween.to, t)
    }

    fn finished(&self) -> bool {
        self.elapsed >= self.tween.delay + self.tween.duration
    }
}

/// Active tween set with last-writer-wins retrigger semantics: playing a new
/// tween for a target replaces the in-flight one, continuing from its current
/// interpolated value so motion never jumps.
#[derive(Default)]
pub struct Timeline {
    active: Vec<ActiveTween>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Current interpolated value for a target, if it is animating.
    pub fn current(&self, target: Target) -> Option<Sample> {
        self.active
            .iter()
            .find(|a| a.tween.target == target)
            .map(|a| a.sample())
    }

    /// Start a batch of tweens. Any in-flight tween on the same target is
    /// preempted and the replacement starts from its current value.
    pub fn play<I>(&mut self, tweens: I) -> Result<(), TweenError>
    where
        I: IntoIterator<Item = Tween>,
    {
        let mut batch: SmallVec<[Tween; 8]> = SmallVec::new();
        for tween in tweens {
            if tween.duration <= 0.0 {
                return Err(TweenError::NonPositiveDuration(tween.duration));
            }
            batch.push(tween);
        }
        for mut tween in batch {
            if let Some(i) = self
                .active
                .iter()
                .position(|a| a.tween.target == tween.target)
            {
                tween.from = self.active[i].sample();
                self.active.swap_remove(i);
            }
            self.active.push(ActiveTween {
                tween,
                elapsed: 0.0,
                started: false,
            });
        }
        Ok(())
    }

    /// Advance all tweens by `dt` seconds. Pushes one `(target, sample)` pair
    /// per tween past its delay and any lifecycle events fired this frame.
    /// Finished tweens emit their rest value and are dropped.
    pub fn tick(
        &mut self,
        dt: f32,
        samples: &mut Vec<(Target, Sample)>,
        events: &mut Vec<TweenEvent>,
    ) {
        for a in &mut self.active {
            a.elapsed += dt;
            if !a.started && a.elapsed > a.tween.delay {
                a.started = true;
                events.push(TweenEvent::Started(a.tween.target));
            }
            if a.started {
                samples.push((a.tween.target, a.sample()));
                if a.finished() {
                    events.push(TweenEvent::Completed(a.tween.target));
                }
            }
        }
        self.active.retain(|a| !a.finished());
    }
}
