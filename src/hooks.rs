//! Yew bindings for the interaction engine.
//!
//! Every hook here owns its browser resources (listeners, observers,
//! animation frames, timeouts) inside an effect and releases them in the
//! effect destructor, so unmounting a component cleans up synchronously.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, Event, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config::{MOBILE_BREAKPOINT_PX, REDUCED_MOTION_QUERY};
use crate::engine::{
    is_scrolled_past, now_ms, BrowserViewport, CarouselConfig, CarouselController, FrameGate,
    IntersectionSample, Millis, ParallaxConfig, ParallaxOffsetComputer, RevealConfig,
    RevealTracker, RevealUpdate, ViewportContext,
};

/// Reads the reduced-motion media query right now. Missing APIs count as "no preference".
pub fn prefers_reduced_motion_now() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

fn viewport_width_now() -> f64 {
    BrowserViewport::current()
        .map(|v| v.viewport_width())
        .unwrap_or(0.0)
}

/// Window listener for scroll-like events that runs `work` at most once per
/// animation frame. `work` also runs once when attached. Dropping the value
/// removes the listeners and cancels a pending frame.
struct FrameScheduledListener {
    window: Window,
    events: &'static [&'static str],
    on_event: Closure<dyn Fn()>,
    pending: Rc<Cell<Option<i32>>>,
    _on_frame: Rc<Closure<dyn FnMut(f64)>>,
}

impl FrameScheduledListener {
    fn attach(window: Window, events: &'static [&'static str], work: Rc<dyn Fn()>) -> Self {
        let gate = Rc::new(RefCell::new(FrameGate::default()));
        let pending = Rc::new(Cell::new(None));
        let initial = work.clone();

        let on_frame = {
            let gate = gate.clone();
            let pending = pending.clone();
            let work = work.clone();
            Rc::new(Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
                gate.borrow_mut().complete();
                pending.set(None);
                work();
            }))
        };

        let on_event = {
            let window = window.clone();
            let pending = pending.clone();
            let on_frame = on_frame.clone();
            Closure::<dyn Fn()>::new(move || {
                if !gate.borrow_mut().request() {
                    return;
                }
                match window.request_animation_frame((*on_frame).as_ref().unchecked_ref()) {
                    Ok(id) => pending.set(Some(id)),
                    Err(_) => {
                        // No frame scheduling, run inline instead of going stale
                        gate.borrow_mut().complete();
                        work();
                    }
                }
            })
        };

        for event in events {
            if let Err(err) = window.add_event_listener_with_callback(event, on_event.as_ref().unchecked_ref()) {
                log::warn!("Failed to listen for {}: {:?}", event, err);
            }
        }

        initial();

        Self { window, events, on_event, pending, _on_frame: on_frame }
    }
}

impl Drop for FrameScheduledListener {
    fn drop(&mut self) {
        for event in self.events {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.on_event.as_ref().unchecked_ref());
        }
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

/// A `requestAnimationFrame` loop that calls `tick` with the frame timestamp.
struct AnimationLoop {
    window: Window,
    handle: Rc<Cell<Option<i32>>>,
    frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl AnimationLoop {
    fn start(window: Window, mut tick: impl FnMut(f64) + 'static) -> Self {
        let handle = Rc::new(Cell::new(None));
        let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let closure = {
            let window = window.clone();
            let handle = handle.clone();
            let frame = frame.clone();
            Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
                tick(timestamp);
                if let Some(next) = frame.borrow().as_ref() {
                    handle.set(window.request_animation_frame(next.as_ref().unchecked_ref()).ok());
                }
            })
        };
        handle.set(window.request_animation_frame(closure.as_ref().unchecked_ref()).ok());
        *frame.borrow_mut() = Some(closure);

        Self { window, handle, frame }
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.handle.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Break the closure's reference to itself
        self.frame.borrow_mut().take();
    }
}

#[hook]
pub fn use_prefers_reduced_motion() -> bool {
    let reduced = use_state_eq(prefers_reduced_motion_now);

    {
        let reduced = reduced.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window()
                    .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
                {
                    Some(mql) => {
                        let on_change = {
                            let mql = mql.clone();
                            Closure::<dyn Fn()>::new(move || reduced.set(mql.matches()))
                        };
                        let _ = mql.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
                        Box::new(move || {
                            let _ = mql.remove_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
                        })
                    }
                    None => Box::new(|| ()),
                };
                move || destructor()
            },
            (),
        );
    }

    *reduced
}

pub struct RevealHandle {
    pub node: NodeRef,
    pub visible: bool,
    pub animates: bool,
    pub delay_ms: u32,
}

/// One-shot entrance reveal for the element behind the returned `NodeRef`.
#[hook]
pub fn use_reveal(config: RevealConfig) -> RevealHandle {
    let reduced = use_prefers_reduced_motion();
    let node = use_node_ref();
    let visible = use_state_eq(|| reduced);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |(config, reduced)| {
                let mut tracker = RevealTracker::new(*config, *reduced);
                let destructor: Box<dyn FnOnce()> = if !tracker.is_observing() {
                    visible.set(tracker.is_visible());
                    Box::new(|| ())
                } else if let Some(element) = node.cast::<Element>() {
                    observe_once(element, tracker, visible)
                } else {
                    tracker.observer_unavailable();
                    visible.set(true);
                    Box::new(|| ())
                };
                move || destructor()
            },
            (config, reduced),
        );
    }

    let tracker = RevealTracker::new(config, reduced);
    RevealHandle {
        node,
        visible: *visible,
        animates: tracker.animates(),
        delay_ms: tracker.transition_delay_ms(),
    }
}

fn observe_once(element: Element, mut tracker: RevealTracker, visible: UseStateHandle<bool>) -> Box<dyn FnOnce()> {
    // Already on screen at mount: reveal without waiting for the first observer callback.
    if let Some(viewport) = BrowserViewport::current() {
        if tracker.observe_in(&viewport, &element) == RevealUpdate::Revealed {
            visible.set(true);
            return Box::new(|| ());
        }
    }

    let threshold = tracker.threshold();
    let tracker = Rc::new(RefCell::new(tracker));

    let callback = {
        let visible = visible.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let update = tracker.borrow_mut().observe(IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                    if update == RevealUpdate::Revealed {
                        observer.unobserve(&entry.target());
                        observer.disconnect();
                        visible.set(true);
                        break;
                    }
                }
            },
        )
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Box::new(move || {
                observer.disconnect();
                drop(callback);
            })
        }
        Err(err) => {
            log::warn!("IntersectionObserver unavailable ({:?}), showing content", err);
            visible.set(true);
            Box::new(|| ())
        }
    }
}

/// Parallax offset for the element behind the returned `NodeRef`.
#[hook]
pub fn use_parallax(config: ParallaxConfig) -> (NodeRef, f64) {
    let node = use_node_ref();
    let offset = use_state_eq(|| 0.0);

    {
        let node = node.clone();
        let offset = offset.clone();
        use_effect_with_deps(
            move |config| {
                let listener = BrowserViewport::current().and_then(|viewport| {
                    let window = web_sys::window()?;
                    let computer = RefCell::new(ParallaxOffsetComputer::new(*config));
                    let work: Rc<dyn Fn()> = Rc::new(move || {
                        if let Some(element) = node.cast::<Element>() {
                            let value = computer.borrow_mut().recompute(&viewport, &element);
                            offset.set(value);
                        }
                    });
                    Some(FrameScheduledListener::attach(window, &["scroll", "resize"], work))
                });
                move || drop(listener)
            },
            config,
        );
    }

    (node, *offset)
}

/// Current scroll position, refreshed at most once per animation frame.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state_eq(|| 0.0);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let reader = window.clone();
                    let work: Rc<dyn Fn()> = Rc::new(move || scroll_y.set(reader.scroll_y().unwrap_or(0.0)));
                    FrameScheduledListener::attach(window, &["scroll"], work)
                });
                move || drop(listener)
            },
            (),
        );
    }

    *scroll_y
}

#[hook]
pub fn use_scrolled_past(threshold: f64) -> bool {
    let scroll_y = use_scroll_y();
    is_scrolled_past(scroll_y, threshold)
}

/// Milliseconds since mount, advanced every animation frame while `enabled`.
#[hook]
pub fn use_animation_elapsed(enabled: bool) -> f64 {
    let elapsed = use_state_eq(|| 0.0);

    {
        let elapsed = elapsed.clone();
        use_effect_with_deps(
            move |enabled| {
                let animation = web_sys::window().filter(|_| *enabled).map(|window| {
                    let started = Cell::new(None::<f64>);
                    AnimationLoop::start(window, move |timestamp| {
                        let start = started.get().unwrap_or(timestamp);
                        started.set(Some(start));
                        elapsed.set(timestamp - start);
                    })
                });
                move || drop(animation)
            },
            enabled,
        );
    }

    *elapsed
}

#[hook]
pub fn use_is_mobile() -> bool {
    let width = use_state_eq(viewport_width_now);

    {
        let width = width.clone();
        use_event_with_window("resize", move |_: Event| width.set(viewport_width_now()));
    }

    *width < MOBILE_BREAKPOINT_PX
}

/// Sets `overflow: hidden` on the body while `locked`, and always clears it on unmount.
#[hook]
pub fn use_body_scroll_lock(locked: bool) {
    use_effect_with_deps(
        move |locked| {
            set_body_overflow(if *locked { "hidden" } else { "" });
            || set_body_overflow("")
        },
        locked,
    );
}

fn set_body_overflow(value: &str) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        if let Err(err) = body.style().set_property("overflow", value) {
            log::warn!("Could not update body overflow: {:?}", err);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CarouselAction {
    Next(Millis),
    Prev(Millis),
    Key(String, Millis),
    HoverEnter,
    HoverLeave(Millis),
    TouchStart(f64),
    TouchMove(f64),
    TouchEnd(Millis),
    ToggleExpanded(String, Millis),
    /// A scheduled deadline came due.
    Wake(Millis),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselModel {
    pub controller: CarouselController,
}

impl Reducible for CarouselModel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut controller = self.controller.clone();
        match action {
            CarouselAction::Next(now) => {
                controller.next(now);
            }
            CarouselAction::Prev(now) => {
                controller.prev(now);
            }
            CarouselAction::Key(key, now) => {
                controller.key(&key, now);
            }
            CarouselAction::HoverEnter => controller.hover_enter(),
            CarouselAction::HoverLeave(now) => controller.hover_leave(now),
            CarouselAction::TouchStart(x) => controller.touch_start(x),
            CarouselAction::TouchMove(x) => controller.touch_move(x),
            CarouselAction::TouchEnd(now) => {
                controller.touch_end(now);
            }
            CarouselAction::ToggleExpanded(key, now) => {
                controller.toggle_expanded(&key, now);
            }
            CarouselAction::Wake(now) => {
                controller.advance_to(now);
            }
        }
        Rc::new(Self { controller })
    }
}

#[derive(Clone)]
pub struct UseCarouselHandle {
    state: UseReducerHandle<CarouselModel>,
}

impl UseCarouselHandle {
    pub fn controller(&self) -> &CarouselController {
        &self.state.controller
    }

    pub fn dispatch(&self, action: CarouselAction) {
        self.state.dispatch(action);
    }

    pub fn next(&self) {
        self.dispatch(CarouselAction::Next(now_ms()));
    }

    pub fn prev(&self) {
        self.dispatch(CarouselAction::Prev(now_ms()));
    }
}

/// Carousel over items identified by `keys`. The single pending deadline is
/// backed by one `Timeout`, replaced whenever the deadline moves and dropped
/// on unmount.
#[hook]
pub fn use_carousel(keys: Vec<String>, config: CarouselConfig) -> UseCarouselHandle {
    let state = use_reducer_eq(move || CarouselModel {
        controller: CarouselController::new(keys, config, now_ms()),
    });

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |deadline: &Option<Millis>| {
                let timeout = deadline.map(|at| {
                    let delay = at.saturating_sub(now_ms()).min(u32::MAX as Millis) as u32;
                    Timeout::new(delay, move || {
                        dispatcher.dispatch(CarouselAction::Wake(now_ms().max(at)));
                    })
                });
                move || drop(timeout)
            },
            state.controller.next_deadline(),
        );
    }

    UseCarouselHandle { state }
}
