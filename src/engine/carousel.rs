//! Circular item navigation shared by every testimonial/project carousel.
//!
//! The controller is a plain state machine over explicit millisecond
//! timestamps. It owns at most one navigation timer (auto-advance or the
//! post-interaction cooldown) and one settle deadline for the running slide
//! transition. Hosts ask [`CarouselController::next_deadline`] when to wake
//! up and call [`CarouselController::advance_to`] at that time; nothing here
//! touches the DOM or a real clock.

use std::collections::HashSet;

use crate::config::{
    CAROUSEL_AUTO_ADVANCE_MS, CAROUSEL_COOLDOWN_MS, CAROUSEL_SWIPE_THRESHOLD_PX,
    CAROUSEL_TRANSITION_MS,
};

pub type Millis = u64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub auto_advance_ms: Millis,
    pub cooldown_ms: Millis,
    pub transition_ms: Millis,
    pub swipe_threshold_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: CAROUSEL_AUTO_ADVANCE_MS,
            cooldown_ms: CAROUSEL_COOLDOWN_MS,
            transition_ms: CAROUSEL_TRANSITION_MS,
            swipe_threshold_px: CAROUSEL_SWIPE_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    AutoPlaying,
    Paused,
    Transitioning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    AutoAdvance,
    Cooldown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Deadline {
    kind: TimerKind,
    at: Millis,
}

/// Outcome of a finished touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Prev,
    Tap,
}

/// Classifies a horizontal gesture. The threshold itself is still a tap.
pub fn classify_swipe(start_x: f64, end_x: f64, threshold: f64) -> Swipe {
    let distance = start_x - end_x;
    if distance > threshold {
        Swipe::Next
    } else if distance < -threshold {
        Swipe::Prev
    } else {
        Swipe::Tap
    }
}

/// 1-based position of the item after `index` in a circular list of `len`.
pub fn next_ordinal(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some((index + 1) % len + 1)
}

#[derive(Debug, Clone, Default, PartialEq)]
struct SwipeTracker {
    start_x: Option<f64>,
    end_x: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselController {
    config: CarouselConfig,
    keys: Vec<String>,
    index: usize,
    direction: Direction,
    auto_playing: bool,
    hovering: bool,
    settle_at: Option<Millis>,
    timer: Option<Deadline>,
    expanded: HashSet<String>,
    swipe: SwipeTracker,
}

impl CarouselController {
    /// `keys` are the stable identities of the items, in display order.
    /// Timer intervals are at least 1 ms so every fired deadline moves time forward.
    pub fn new(keys: Vec<String>, config: CarouselConfig, now: Millis) -> Self {
        let config = CarouselConfig {
            auto_advance_ms: config.auto_advance_ms.max(1),
            cooldown_ms: config.cooldown_ms.max(1),
            ..config
        };
        let mut controller = Self {
            config,
            keys,
            index: 0,
            direction: Direction::Forward,
            auto_playing: true,
            hovering: false,
            settle_at: None,
            timer: None,
            expanded: HashSet::new(),
            swipe: SwipeTracker::default(),
        };
        controller.schedule_auto_advance(now);
        controller
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Navigation needs at least two items.
    pub fn can_navigate(&self) -> bool {
        self.keys.len() > 1
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_key(&self) -> Option<&str> {
        self.keys.get(self.index).map(String::as_str)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    pub fn phase(&self) -> CarouselPhase {
        if self.settle_at.is_some() {
            CarouselPhase::Transitioning
        } else if self.auto_playing && !self.hovering {
            CarouselPhase::AutoPlaying
        } else {
            CarouselPhase::Paused
        }
    }

    pub fn pending_timer(&self) -> Option<(TimerKind, Millis)> {
        self.timer.map(|d| (d.kind, d.at))
    }

    /// Earliest moment something is due, if anything is scheduled.
    pub fn next_deadline(&self) -> Option<Millis> {
        match (self.timer.map(|d| d.at), self.settle_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn next_ordinal(&self) -> Option<usize> {
        next_ordinal(self.index, self.keys.len())
    }

    /// Manual step forward. Returns false when navigation is disabled.
    pub fn next(&mut self, now: Millis) -> bool {
        self.manual_step(Direction::Forward, now)
    }

    pub fn prev(&mut self, now: Millis) -> bool {
        self.manual_step(Direction::Backward, now)
    }

    /// Keyboard navigation. Returns true when the key was handled.
    pub fn key(&mut self, key: &str, now: Millis) -> bool {
        match key {
            "ArrowRight" => self.next(now),
            "ArrowLeft" => self.prev(now),
            _ => false,
        }
    }

    pub fn hover_enter(&mut self) {
        self.hovering = true;
        if matches!(self.timer, Some(Deadline { kind: TimerKind::AutoAdvance, .. })) {
            self.timer = None;
        }
        log::debug!("carousel paused by hover");
    }

    pub fn hover_leave(&mut self, now: Millis) {
        self.hovering = false;
        if self.auto_playing && self.timer.is_none() {
            self.schedule_auto_advance(now);
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.swipe = SwipeTracker { start_x: Some(x), end_x: None };
        self.auto_playing = false;
        // touch_end always reschedules
        self.timer = None;
    }

    pub fn touch_move(&mut self, x: f64) {
        if self.swipe.start_x.is_some() {
            self.swipe.end_x = Some(x);
        }
    }

    /// Finishes a gesture. A tap or an incomplete gesture does not navigate,
    /// but auto-play still resumes after the cooldown.
    pub fn touch_end(&mut self, now: Millis) -> Swipe {
        let swipe = std::mem::take(&mut self.swipe);
        let outcome = match (swipe.start_x, swipe.end_x) {
            (Some(start), Some(end)) => classify_swipe(start, end, self.config.swipe_threshold_px),
            _ => Swipe::Tap,
        };
        match outcome {
            Swipe::Next => {
                self.manual_step(Direction::Forward, now);
            }
            Swipe::Prev => {
                self.manual_step(Direction::Backward, now);
            }
            Swipe::Tap => self.schedule_cooldown(now),
        }
        outcome
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    /// Flips the read-more state of one item. Expanding holds auto-play so
    /// the text does not slide away while being read.
    pub fn toggle_expanded(&mut self, key: &str, now: Millis) -> bool {
        if self.expanded.remove(key) {
            if !self.auto_playing {
                self.schedule_cooldown(now);
            }
            false
        } else {
            self.expanded.insert(key.to_string());
            self.auto_playing = false;
            self.timer = None;
            true
        }
    }

    /// Processes everything due at or before `now`, in order.
    /// Returns true if the visible state changed.
    pub fn advance_to(&mut self, now: Millis) -> bool {
        let mut changed = false;
        while let Some(at) = self.next_deadline().filter(|&at| at <= now) {
            if self.settle_at == Some(at) {
                self.settle_at = None;
                changed = true;
                continue;
            }
            let Some(deadline) = self.timer.take() else {
                break;
            };
            match deadline.kind {
                TimerKind::AutoAdvance => {
                    if self.auto_playing && !self.hovering && self.can_navigate() {
                        self.step(Direction::Forward, deadline.at);
                        self.schedule_auto_advance(deadline.at);
                        changed = true;
                    }
                }
                TimerKind::Cooldown => {
                    log::debug!("carousel cooldown elapsed, resuming auto-play");
                    self.auto_playing = true;
                    if !self.hovering {
                        self.schedule_auto_advance(deadline.at);
                    }
                    changed = true;
                }
            }
        }
        changed
    }

    fn manual_step(&mut self, direction: Direction, now: Millis) -> bool {
        if !self.can_navigate() {
            return false;
        }
        self.step(direction, now);
        self.auto_playing = false;
        self.schedule_cooldown(now);
        true
    }

    fn step(&mut self, direction: Direction, now: Millis) {
        let len = self.keys.len();
        self.direction = direction;
        self.index = match direction {
            Direction::Forward => (self.index + 1) % len,
            Direction::Backward => (self.index + len - 1) % len,
        };
        self.expanded.clear();
        self.settle_at = Some(now + self.config.transition_ms);
        log::debug!("carousel moved {:?} to {}", direction, self.index);
    }

    fn schedule_auto_advance(&mut self, from: Millis) {
        self.timer = if self.can_navigate() {
            Some(Deadline { kind: TimerKind::AutoAdvance, at: from + self.config.auto_advance_ms })
        } else {
            None
        };
    }

    fn schedule_cooldown(&mut self, from: Millis) {
        self.timer = if self.can_navigate() {
            Some(Deadline { kind: TimerKind::Cooldown, at: from + self.config.cooldown_ms })
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Millis = 4000;
    const COOLDOWN: Millis = 2000;

    fn keys(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("rec-{}", i)).collect()
    }

    fn carousel(n: usize) -> CarouselController {
        CarouselController::new(keys(n), CarouselConfig::default(), 0)
    }

    #[test]
    fn starts_auto_playing_at_zero() {
        let c = carousel(6);
        assert_eq!(c.index(), 0);
        assert_eq!(c.phase(), CarouselPhase::AutoPlaying);
        assert_eq!(c.pending_timer(), Some((TimerKind::AutoAdvance, T)));
    }

    #[test]
    fn six_nexts_is_a_full_cycle() {
        let mut c = carousel(6);
        for i in 1..=6 {
            assert!(c.next(i * 10));
        }
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn index_stays_in_range_for_mixed_sequences() {
        for n in 1..8 {
            let mut c = carousel(n);
            let mut now = 0;
            for step in 0..200u64 {
                now += 7;
                if (step * 31 + n as u64) % 3 == 0 {
                    c.prev(now);
                } else {
                    c.next(now);
                }
                assert!(c.index() < n);
            }
        }
    }

    #[test]
    fn prev_wraps_from_zero() {
        let mut c = carousel(5);
        assert!(c.prev(0));
        assert_eq!(c.index(), 4);
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn single_item_is_inert() {
        let mut c = carousel(1);
        assert!(!c.next(10));
        assert!(!c.prev(20));
        assert_eq!(c.index(), 0);
        assert_eq!(c.next_deadline(), None);
        assert!(!c.advance_to(100_000));
    }

    #[test]
    fn empty_list_is_inert() {
        let mut c = carousel(0);
        assert!(!c.next(0));
        assert_eq!(c.current_key(), None);
        assert_eq!(c.next_ordinal(), None);
        assert_eq!(c.touch_end(5), Swipe::Tap);
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn swipe_threshold_is_exclusive() {
        assert_eq!(classify_swipe(200.0, 150.0, 50.0), Swipe::Tap);
        assert_eq!(classify_swipe(200.0, 149.0, 50.0), Swipe::Next);
        assert_eq!(classify_swipe(150.0, 200.0, 50.0), Swipe::Tap);
        assert_eq!(classify_swipe(150.0, 201.0, 50.0), Swipe::Prev);
    }

    #[test]
    fn swipe_past_threshold_steps_once() {
        let mut c = carousel(4);
        c.touch_start(300.0);
        assert_eq!(c.phase(), CarouselPhase::Paused);
        c.touch_move(260.0);
        c.touch_move(240.0);
        assert_eq!(c.touch_end(100), Swipe::Next);
        assert_eq!(c.index(), 1);

        c.touch_start(300.0);
        c.touch_move(250.0);
        assert_eq!(c.touch_end(200), Swipe::Tap);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn touch_without_move_is_a_tap() {
        let mut c = carousel(4);
        c.touch_start(300.0);
        assert_eq!(c.touch_end(50), Swipe::Tap);
        assert_eq!(c.index(), 0);
        assert_eq!(c.pending_timer(), Some((TimerKind::Cooldown, 50 + COOLDOWN)));
    }

    #[test]
    fn auto_advance_fires_on_interval() {
        let mut c = carousel(3);
        assert!(!c.advance_to(T - 1));
        assert_eq!(c.index(), 0);

        assert!(c.advance_to(T));
        assert_eq!(c.index(), 1);
        assert_eq!(c.phase(), CarouselPhase::Transitioning);

        c.advance_to(T + 500);
        assert_eq!(c.phase(), CarouselPhase::AutoPlaying);

        c.advance_to(2 * T);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn late_wakeup_catches_up_in_order() {
        let mut c = carousel(3);
        c.advance_to(3 * T + 600);
        assert_eq!(c.index(), 0);
        assert_eq!(c.phase(), CarouselPhase::AutoPlaying);
    }

    #[test]
    fn manual_next_resets_the_timer() {
        let config = CarouselConfig { cooldown_ms: 3000, ..CarouselConfig::default() };
        let mut c = CarouselController::new(keys(6), config, 0);
        let manual_at = T / 2;
        assert!(c.next(manual_at));
        assert_eq!(c.index(), 1);
        assert_eq!(c.phase(), CarouselPhase::Transitioning);
        assert_eq!(c.pending_timer(), Some((TimerKind::Cooldown, manual_at + 3000)));

        // the auto-advance originally due at T must not fire
        c.advance_to(T);
        assert_eq!(c.index(), 1);
        assert_eq!(c.phase(), CarouselPhase::Paused);

        c.advance_to(manual_at + 3000);
        assert_eq!(c.phase(), CarouselPhase::AutoPlaying);
        assert_eq!(c.index(), 1);

        let (kind, at) = c.pending_timer().unwrap();
        assert_eq!(kind, TimerKind::AutoAdvance);
        assert!(at >= manual_at + 3000);

        c.advance_to(at - 1);
        assert_eq!(c.index(), 1);
        c.advance_to(at);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn rapid_manual_input_keeps_one_timer() {
        let mut c = carousel(6);
        c.next(100);
        c.next(150);
        c.prev(160);
        assert_eq!(c.index(), 1);
        assert_eq!(c.pending_timer(), Some((TimerKind::Cooldown, 160 + COOLDOWN)));
        c.advance_to(100 + COOLDOWN);
        assert!(!c.is_auto_playing());
    }

    #[test]
    fn hover_suspends_auto_advance() {
        let mut c = carousel(4);
        c.hover_enter();
        assert_eq!(c.phase(), CarouselPhase::Paused);
        assert_eq!(c.next_deadline(), None);
        c.advance_to(10 * T);
        assert_eq!(c.index(), 0);

        c.hover_leave(10 * T);
        assert_eq!(c.pending_timer(), Some((TimerKind::AutoAdvance, 11 * T)));
        c.advance_to(11 * T);
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn cooldown_during_hover_waits_for_leave() {
        let mut c = carousel(4);
        c.hover_enter();
        c.next(0);
        c.advance_to(COOLDOWN);
        assert!(c.is_auto_playing());
        assert_eq!(c.phase(), CarouselPhase::Paused);
        assert_eq!(c.next_deadline(), None);

        c.hover_leave(5000);
        assert_eq!(c.pending_timer(), Some((TimerKind::AutoAdvance, 5000 + T)));
    }

    #[test]
    fn expansion_resets_after_navigating_away_and_back() {
        let mut c = carousel(3);
        let key = c.current_key().unwrap().to_string();
        assert!(c.toggle_expanded(&key, 0));
        assert!(c.is_expanded(&key));

        c.next(10);
        c.prev(20);
        assert_eq!(c.index(), 0);
        assert!(!c.is_expanded(&key));
    }

    #[test]
    fn expanding_holds_auto_play_until_collapsed() {
        let mut c = carousel(3);
        c.toggle_expanded("rec-0", 1000);
        assert_eq!(c.next_deadline(), None);
        c.advance_to(10 * T);
        assert_eq!(c.index(), 0);

        assert!(!c.toggle_expanded("rec-0", 50_000));
        assert_eq!(c.pending_timer(), Some((TimerKind::Cooldown, 50_000 + COOLDOWN)));
    }

    #[test]
    fn toggling_does_not_navigate() {
        let mut c = carousel(3);
        c.toggle_expanded("rec-2", 0);
        c.toggle_expanded("rec-1", 0);
        assert_eq!(c.index(), 0);
        assert!(c.is_expanded("rec-2"));
        assert!(c.is_expanded("rec-1"));
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut c = carousel(3);
        assert!(c.key("ArrowLeft", 0));
        assert_eq!(c.index(), 2);
        assert!(c.key("ArrowRight", 10));
        assert_eq!(c.index(), 0);
        assert!(!c.key("Enter", 20));
    }

    #[test]
    fn next_ordinal_is_one_based_and_wraps() {
        assert_eq!(next_ordinal(0, 3), Some(2));
        assert_eq!(next_ordinal(1, 3), Some(3));
        assert_eq!(next_ordinal(2, 3), Some(1));
        assert_eq!(next_ordinal(0, 1), Some(1));
        assert_eq!(next_ordinal(0, 0), None);
    }

    #[test]
    fn zero_intervals_still_terminate() {
        let config = CarouselConfig {
            auto_advance_ms: 0,
            cooldown_ms: 0,
            transition_ms: 0,
            ..CarouselConfig::default()
        };
        let mut c = CarouselController::new(keys(3), config, 0);
        assert!(c.advance_to(10));
        assert_eq!(c.index(), 10 % 3);
        assert_eq!(c.pending_timer(), Some((TimerKind::AutoAdvance, 11)));

        c.next(20);
        assert_eq!(c.pending_timer(), Some((TimerKind::Cooldown, 21)));
        assert!(c.advance_to(25));
        assert!(c.is_auto_playing());
    }

    #[test]
    fn pending_cooldown_does_not_fire_during_a_touch() {
        let mut c = carousel(4);
        c.next(0);
        assert_eq!(c.pending_timer(), Some((TimerKind::Cooldown, COOLDOWN)));

        c.touch_start(300.0);
        assert_eq!(c.next_deadline(), Some(CarouselConfig::default().transition_ms));
        assert!(c.advance_to(COOLDOWN + T));
        assert_eq!(c.index(), 1);
        assert!(!c.is_auto_playing());

        c.touch_move(290.0);
        assert_eq!(c.touch_end(COOLDOWN + T + 10), Swipe::Tap);
        assert_eq!(c.pending_timer(), Some((TimerKind::Cooldown, COOLDOWN + T + 10 + COOLDOWN)));
    }
}
