// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Start-up and the frame loop.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{OnceCell, RefCell};

use spiral_backend_web::{
    ConsoleSink, DomPresenter, DomVisibilityObserver, PointerListener, Presenter as _, RafLoop,
    measure, restore_native_cursor, touch_capabilities,
};
use spiral_core::card::{CardAction, CardState};
use spiral_core::config::MotionConfig;
use spiral_core::node::NodeStore;
use spiral_core::pointer::PointerMode;
use spiral_core::time::{Duration, HostTime};
use spiral_core::timing::{FrameClock, FrameTick};
use spiral_core::trace::{
    CardToggleEvent, FrameSummaryBuilder, FrameTickEvent, MeasurementEvent, PhaseKind,
    PointerModeEvent, SectionRevealEvent, Tracer,
};
use spiral_core::visibility::VisibilityObserver as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{EventTarget, HtmlElement};

use crate::motion::{CardSlots, Motion};
use crate::page::{Page, PageDom};
use crate::{home, internship};

struct App {
    store: NodeStore,
    presenter: DomPresenter,
    observer: DomVisibilityObserver,
    motion: Motion,
    clock: FrameClock,
    cards: Vec<CardSlots<HtmlElement>>,
    sink: ConsoleSink,
    frame_index: u64,
    /// Set by a resize; expanded cards re-read their content height.
    remeasure: bool,
}

impl App {
    /// Writes every node's starting state before the first paint.
    fn prime(&mut self, now: HostTime) {
        self.motion.animate(&mut self.store, now, Duration::ZERO);
        let changes = self.store.evaluate();
        self.presenter.apply(&self.store, &changes);
    }

    /// Runs one frame. Returns `true` to keep the loop running.
    fn frame(&mut self, tick: FrameTick) -> bool {
        let dt = self.clock.advance(&tick);
        let now = tick.now;
        self.frame_index = tick.frame_index;
        let tick_event = FrameTickEvent::from(&tick);
        Tracer::new(&mut self.sink).frame_tick(&tick_event);
        let mut summary = FrameSummaryBuilder::new(&tick_event, dt);

        summary.phase_begin(PhaseKind::Sync, spiral_backend_web::now());
        for index in self.motion.sync(&self.observer, now) {
            let Some(section) = self.motion.section(index) else {
                continue;
            };
            Tracer::new(&mut self.sink).section_reveal(&SectionRevealEvent {
                frame_index: tick.frame_index,
                section: section.name(),
                items: section.item_count(),
                on_load: section.watch().is_none(),
                at: now,
            });
        }
        summary.phase_end(PhaseKind::Sync, spiral_backend_web::now());

        summary.phase_begin(PhaseKind::Animate, spiral_backend_web::now());
        let animating = self.motion.animate(&mut self.store, now, dt);
        summary.phase_end(PhaseKind::Animate, spiral_backend_web::now());

        summary.phase_begin(PhaseKind::Evaluate, spiral_backend_web::now());
        let changes = self.store.evaluate();
        summary.phase_end(PhaseKind::Evaluate, spiral_backend_web::now());

        summary.phase_begin(PhaseKind::Present, spiral_backend_web::now());
        self.presenter.apply(&self.store, &changes);
        summary.phase_end(PhaseKind::Present, spiral_backend_web::now());

        // Content mounted by this frame's present now has a layout height.
        let measured = self.measure(now);

        let animating = animating || measured;
        summary.set_updates(changes.update_count());
        summary.set_animating(animating);
        Tracer::new(&mut self.sink).frame_summary(&summary.finish());
        animating
    }

    /// Hands content heights to cards waiting for one, and to every expanded
    /// card after a resize. Returns `true` if any card was measured.
    fn measure(&mut self, now: HostTime) -> bool {
        let remeasure = core::mem::take(&mut self.remeasure);
        let mut measured = false;
        for (index, slots) in self.cards.iter().enumerate() {
            let Some(id) = self.motion.card_id(index) else {
                continue;
            };
            let wanted = self.motion.needs_measurement(id)
                || (remeasure && self.motion.card_state(id) == CardState::Expanded);
            if !wanted {
                continue;
            }
            let height = measure::content_height(&slots.content);
            self.motion.provide_measurement(id, height, now);
            Tracer::new(&mut self.sink).measurement(&MeasurementEvent {
                frame_index: self.frame_index,
                card: id,
                height,
            });
            measured = true;
        }
        measured
    }

    fn card_action(&mut self, index: usize, action: CardAction) {
        let Some(id) = self.motion.card_id(index) else {
            return;
        };
        let now = spiral_backend_web::now();
        if !self.motion.card_action(id, action, now) {
            return;
        }
        let state = self.motion.card_state(id);
        if let Some(slots) = self.cards.get(index) {
            let _ = home::set_expanded(&slots.expand, state == CardState::Expanded);
        }
        Tracer::new(&mut self.sink).card_toggle(&CardToggleEvent {
            frame_index: self.frame_index,
            card: id,
            state,
            at: now,
        });
    }
}

/// Adds a listener that lives as long as the page.
fn on(target: &EventTarget, event: &str, handler: impl FnMut() + 'static) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Builds the page named by `<body data-page>` and starts its motion.
pub(crate) fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let doc = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let config = MotionConfig::SITE;
    let page = Page::from_attr(body.get_attribute(Page::ATTRIBUTE).as_deref());
    let caps = touch_capabilities(&window);
    let cursor = page == Page::Home && PointerMode::for_capabilities(caps) == PointerMode::Follow;
    let reduced_motion = measure::prefers_reduced_motion(&window);

    let PageDom { scene, scroll } = match page {
        Page::Home => home::build(&doc, &body, &config, cursor)?,
        Page::Internship => internship::build(&doc, &body, &config)?,
    };
    let cards = scene.cards.clone();

    // Watches that latch while the loop is idle restart it.
    let raf_slot: Rc<OnceCell<RafLoop>> = Rc::new(OnceCell::new());
    let waker = {
        let slot = Rc::clone(&raf_slot);
        move || {
            if let Some(raf) = slot.get() {
                raf.start();
            }
        }
    };
    let mut observer = DomVisibilityObserver::with_waker(waker);
    let mut store = NodeStore::new();
    let mut presenter = DomPresenter::new();
    let motion = Motion::build(
        scene,
        &mut store,
        &config,
        caps,
        reduced_motion,
        |el, options| observer.observe(Some(el.clone().into()), options),
        |node, el| presenter.bind(node, el),
    );

    let mut sink = ConsoleSink;
    Tracer::new(&mut sink).pointer_mode(&PointerModeEvent {
        capabilities: caps,
        mode: motion.pointer_mode(),
    });
    if motion.pointer_mode() == PointerMode::Native {
        restore_native_cursor(&window);
    }

    let app = Rc::new(RefCell::new(App {
        store,
        presenter,
        observer,
        motion,
        clock: FrameClock::new(config.max_frame_delta),
        cards: cards.clone(),
        sink,
        frame_index: 0,
        remeasure: false,
    }));
    app.borrow_mut().prime(spiral_backend_web::now());

    let raf = {
        let app = Rc::clone(&app);
        RafLoop::new(move |tick| app.borrow_mut().frame(tick))
    };
    let _ = raf_slot.set(raf.clone());

    for (index, slots) in cards.iter().enumerate() {
        for (trigger, action) in [
            (&slots.expand, CardAction::Expand),
            (&slots.collapse, CardAction::Collapse),
        ] {
            let app = Rc::clone(&app);
            let raf = raf.clone();
            on(trigger, "click", move || {
                app.borrow_mut().card_action(index, action);
                raf.start();
            })?;
        }
    }

    if let Some((indicator, target)) = scroll {
        on(&indicator, "click", move || {
            measure::scroll_into_view_smooth(&target);
        })?;
    }

    if cursor {
        let app = Rc::clone(&app);
        let raf = raf.clone();
        let listener = PointerListener::attach(&window, move |sample| {
            app.borrow_mut().motion.on_pointer_move(
                sample.position,
                sample.over_interactive,
                spiral_backend_web::now(),
            );
            raf.start();
        })?;
        core::mem::forget(listener);
    }

    {
        let app = Rc::clone(&app);
        let raf = raf.clone();
        on(&window, "resize", move || {
            app.borrow_mut().remeasure = true;
            raf.start();
        })?;
    }

    raf.start();

    // Keep the loop alive; there is no teardown on the web.
    core::mem::forget(raf);

    Ok(())
}
