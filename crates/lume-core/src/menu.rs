//! Menu open/close state machine and the tween batches it emits.

use crate::constants::{
    MENU_ITEM_CLOSE_SECS, MENU_ITEM_CLOSE_STAGGER, MENU_ITEM_OPEN_DELAY, MENU_ITEM_OPEN_SECS,
    MENU_ITEM_OPEN_STAGGER, MENU_ITEM_REST_OFFSET_Y, MENU_LOGO_DIM_OPACITY, MENU_LOGO_OFFSET_Y,
    MENU_LOGO_SECS, MENU_PANEL_CLOSE_SECS, MENU_PANEL_HIDDEN_Y_PERCENT, MENU_PANEL_OPEN_SECS,
};
use crate::tween::{stagger, Ease, Sample, Target, Tween};
use smallvec::SmallVec;

pub type TweenBatch = SmallVec<[Tween; 8]>;

// Easing per element, quartic for the panel, cubic for logo/items entering,
// quadratic for items leaving.
const PANEL_OPEN_EASE: Ease = Ease::PowerOut(4);
const PANEL_CLOSE_EASE: Ease = Ease::PowerIn(4);
const LOGO_EASE: Ease = Ease::PowerOut(3);
const ITEM_OPEN_EASE: Ease = Ease::PowerOut(3);
const ITEM_CLOSE_EASE: Ease = Ease::PowerIn(2);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Two-state toggle driving the menu panel, logo, and item animations.
///
/// The state itself is never animated; it selects which tween batch runs.
/// A retrigger mid-transition simply emits the opposite batch, and the
/// timeline's preemption keeps motion continuous.
pub struct MenuController {
    state: MenuState,
    item_count: usize,
}

impl MenuController {
    pub fn new(item_count: usize) -> Self {
        Self {
            state: MenuState::Closed,
            item_count,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Flip the state and return the tween batch for the new direction.
    pub fn toggle(&mut self) -> TweenBatch {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        log::debug!("[menu] {:?}", self.state);
        match self.state {
            MenuState::Open => self.open_batch(),
            MenuState::Closed => self.close_batch(),
        }
    }

    /// Rest values while closed; also the page's initial pose.
    pub fn closed_panel_rest() -> Sample {
        Sample {
            offset_y: MENU_PANEL_HIDDEN_Y_PERCENT,
            opacity: 0.0,
        }
    }

    fn open_batch(&self) -> TweenBatch {
        let mut batch = TweenBatch::new();
        batch.push(Tween {
            target: Target::MenuPanel,
            from: Self::closed_panel_rest(),
            to: Sample {
                offset_y: 0.0,
                opacity: 1.0,
            },
            delay: 0.0,
            duration: MENU_PANEL_OPEN_SECS,
            ease: PANEL_OPEN_EASE,
        });
        batch.push(Tween {
            target: Target::Logo,
            from: Sample {
                offset_y: 0.0,
                opacity: 1.0,
            },
            to: Sample {
                offset_y: MENU_LOGO_OFFSET_Y,
                opacity: MENU_LOGO_DIM_OPACITY,
            },
            delay: 0.0,
            duration: MENU_LOGO_SECS,
            ease: LOGO_EASE,
        });
        let delays = stagger(self.item_count, MENU_ITEM_OPEN_STAGGER, MENU_ITEM_OPEN_DELAY);
        for (i, delay) in delays.into_iter().enumerate() {
            batch.push(Tween {
                target: Target::MenuItem(i),
                from: Sample {
                    offset_y: MENU_ITEM_REST_OFFSET_Y,
                    opacity: 0.0,
                },
                to: Sample {
                    offset_y: 0.0,
                    opacity: 1.0,
                },
                delay,
                duration: MENU_ITEM_OPEN_SECS,
                ease: ITEM_OPEN_EASE,
            });
        }
        batch
    }

    fn close_batch(&self) -> TweenBatch {
        let mut batch = TweenBatch::new();
        // Reverse stagger: the last item leads the exit.
        let delays = stagger(self.item_count, -MENU_ITEM_CLOSE_STAGGER, 0.0);
        for (i, delay) in delays.into_iter().enumerate() {
            batch.push(Tween {
                target: Target::MenuItem(i),
                from: Sample {
                    offset_y: 0.0,
                    opacity: 1.0,
                },
                to: Sample {
                    offset_y: MENU_ITEM_REST_OFFSET_Y,
                    opacity: 0.0,
                },
                delay,
                duration: MENU_ITEM_CLOSE_SECS,
                ease: ITEM_CLOSE_EASE,
            });
        }
        batch.push(Tween {
            target: Target::MenuPanel,
            from: Sample {
                offset_y: 0.0,
                opacity: 1.0,
            },
            to: Self::closed_panel_rest(),
            delay: 0.0,
            duration: MENU_PANEL_CLOSE_SECS,
            ease: PANEL_CLOSE_EASE,
        });
        batch.push(Tween {
            target: Target::Logo,
            from: Sample {
                offset_y: MENU_LOGO_OFFSET_Y,
                opacity: MENU_LOGO_DIM_OPACITY,
            },
            to: Sample {
                offset_y: 0.0,
                opacity: 1.0,
            },
            delay: 0.0,
            duration: MENU_LOGO_SECS,
            ease: LOGO_EASE,
        });
        batch
    }
}
