// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `IntersectionObserver`-backed visibility signals.
//!
//! Each watch owns one native `IntersectionObserver` configured with the
//! watch's threshold and root margin. The first entry that intersects at or
//! above the threshold sets the watch's latch and disconnects the observer,
//! so a latched element is never measured again.
//!
//! A latch usually lands while the page is idle, so the observer can carry a
//! waker that restarts the frame loop.
//!
//! Callbacks can still be queued when a watch is released. Every callback
//! checks a shared `live` flag first, and released closures are retired
//! rather than dropped so a late callback never reaches a freed closure.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

use js_sys::Array;
use spiral_core::visibility::{ObserveOptions, VisibilityObserver, WatchId};
use wasm_bindgen::{JsCast as _, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type EntryClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;
type Waker = Rc<dyn Fn()>;

struct Watch {
    latched: Rc<Cell<bool>>,
    live: Rc<Cell<bool>>,
    native: Option<(IntersectionObserver, EntryClosure)>,
}

/// A [`VisibilityObserver`] over native `IntersectionObserver`s.
pub struct DomVisibilityObserver {
    watches: Vec<Option<Watch>>,
    generation: Vec<u32>,
    free_list: Vec<u32>,
    retired: Vec<EntryClosure>,
    waker: Option<Waker>,
}

impl core::fmt::Debug for DomVisibilityObserver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomVisibilityObserver")
            .field("watches", &self.watches.iter().flatten().count())
            .field("retired", &self.retired.len())
            .finish_non_exhaustive()
    }
}

impl Default for DomVisibilityObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl DomVisibilityObserver {
    /// Creates an observer with no watches.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            watches: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            retired: Vec::new(),
            waker: None,
        }
    }

    /// Creates an observer that calls `waker` whenever a watch latches.
    #[must_use]
    pub fn with_waker(waker: impl Fn() + 'static) -> Self {
        let mut observer = Self::new();
        observer.waker = Some(Rc::new(waker));
        observer
    }

    fn watch(&self, id: WatchId) -> Option<&Watch> {
        let idx = id.index() as usize;
        if self.generation.get(idx) != Some(&id.generation()) {
            return None;
        }
        self.watches.get(idx)?.as_ref()
    }

    fn insert(&mut self, watch: Watch) -> WatchId {
        if let Some(idx) = self.free_list.pop() {
            self.watches[idx as usize] = Some(watch);
            WatchId::from_raw(idx, self.generation[idx as usize])
        } else {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "a page holds a handful of watches"
            )]
            let idx = self.watches.len() as u32;
            self.watches.push(Some(watch));
            self.generation.push(0);
            WatchId::from_raw(idx, 0)
        }
    }
}

/// Formats a root margin for `IntersectionObserverInit.rootMargin`.
#[must_use]
pub fn root_margin_css(margin: f64) -> String {
    format!("{margin}px")
}

fn connect(
    element: &Element,
    options: ObserveOptions,
    latched: &Rc<Cell<bool>>,
    live: &Rc<Cell<bool>>,
    waker: Option<Waker>,
) -> Option<(IntersectionObserver, EntryClosure)> {
    let threshold = options.threshold;
    let latched = Rc::clone(latched);
    let live = Rc::clone(live);
    let closure = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        if !live.get() || latched.get() {
            return;
        }
        let hit = entries.iter().any(|entry| {
            entry
                .dyn_into::<IntersectionObserverEntry>()
                .is_ok_and(|e| e.is_intersecting() && e.intersection_ratio() >= threshold)
        });
        if hit {
            latched.set(true);
            observer.disconnect();
            if let Some(wake) = &waker {
                wake();
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from(threshold));
    init.set_root_margin(&root_margin_css(options.root_margin));
    let native =
        IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init).ok()?;
    native.observe(element);
    Some((native, closure))
}

impl VisibilityObserver for DomVisibilityObserver {
    type Target = Element;

    /// Starts watching `target`. A missing target, or a browser without
    /// `IntersectionObserver`, yields a watch that never latches.
    fn observe(&mut self, target: Option<Element>, options: ObserveOptions) -> WatchId {
        let latched = Rc::new(Cell::new(false));
        let live = Rc::new(Cell::new(true));
        let waker = self.waker.clone();
        let native = target.and_then(|el| connect(&el, options, &latched, &live, waker));
        self.insert(Watch {
            latched,
            live,
            native,
        })
    }

    fn has_entered_viewport(&self, id: WatchId) -> bool {
        self.watch(id).is_some_and(|w| w.latched.get())
    }

    fn unobserve(&mut self, id: WatchId) {
        if self.watch(id).is_none() {
            return;
        }
        let idx = id.index() as usize;
        if let Some(watch) = self.watches[idx].take() {
            watch.live.set(false);
            if let Some((native, closure)) = watch.native {
                native.disconnect();
                self.retired.push(closure);
            }
        }
        self.generation[idx] = self.generation[idx].wrapping_add(1);
        self.free_list.push(id.index());
    }
}

impl Drop for DomVisibilityObserver {
    fn drop(&mut self) {
        for watch in self.watches.iter().flatten() {
            watch.live.set(false);
            if let Some((native, _)) = &watch.native {
                native.disconnect();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margins() {
        assert_eq!(root_margin_css(0.0), "0px");
        assert_eq!(root_margin_css(50.0), "50px");
        assert_eq!(root_margin_css(-12.5), "-12.5px");
    }
}
