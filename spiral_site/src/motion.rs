// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page's motion state, independent of the DOM.
//!
//! A [`Scene`] lists the elements a page animates, grouped by section and
//! card. [`Motion::build`] turns it into nodes in a [`NodeStore`], visibility
//! watches and [`RevealSection`]s. Each frame, [`Motion::animate`] samples
//! every reveal, card and cursor indicator into the store.
//!
//! Elements are generic so the whole pipeline runs in native tests.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use spiral_core::card::{CardAction, CardDeck, CardId, CardState, ExpansionTiming};
use spiral_core::config::MotionConfig;
use spiral_core::node::{NodeId, NodeStore};
use spiral_core::pointer::{PointerCapabilities, PointerFollower, PointerMode};
use spiral_core::section::{RevealSection, SectionComposer, SectionIndex};
use spiral_core::sequencer::{Keyframes, presets};
use spiral_core::time::{Duration, HostTime};
use spiral_core::visibility::{ObserveOptions, VisibilityObserver, WatchId};

use crate::plan::{SectionPlan, Trigger};

/// The elements animated by one section.
#[derive(Debug)]
pub(crate) struct SectionSlots<E> {
    pub(crate) plan: SectionPlan,
    /// Observed for [`Trigger::Viewport`] plans.
    pub(crate) root: Option<E>,
    pub(crate) header: Option<E>,
    pub(crate) container: Option<E>,
    pub(crate) items: Vec<E>,
    /// One per entry in the plan's `extras`, in order.
    pub(crate) extras: Vec<E>,
    /// Hidden until the section reveals; see `mount_on_reveal`.
    pub(crate) mount: Option<E>,
}

impl<E> SectionSlots<E> {
    pub(crate) fn new(plan: SectionPlan, root: Option<E>) -> Self {
        Self {
            plan,
            root,
            header: None,
            container: None,
            items: Vec::new(),
            extras: Vec::new(),
            mount: None,
        }
    }
}

/// The elements of one expandable card.
#[derive(Clone, Debug)]
pub(crate) struct CardSlots<E> {
    pub(crate) content: E,
    pub(crate) expand: E,
    pub(crate) collapse: E,
}

/// Everything a page animates.
#[derive(Debug)]
pub(crate) struct Scene<E> {
    pub(crate) sections: Vec<SectionSlots<E>>,
    pub(crate) cards: Vec<CardSlots<E>>,
    /// The scroll indicator's arrow.
    pub(crate) bob: Option<E>,
    /// Dot and ring; only bound in [`PointerMode::Follow`].
    pub(crate) cursor: Option<[E; 2]>,
}

impl<E> Default for Scene<E> {
    fn default() -> Self {
        Self {
            sections: Vec::new(),
            cards: Vec::new(),
            bob: None,
            cursor: None,
        }
    }
}

#[derive(Debug, Default)]
struct SectionNodes {
    header: Option<NodeId>,
    container: Option<NodeId>,
    items: Vec<NodeId>,
    extras: Vec<NodeId>,
    mount: Option<NodeId>,
}

#[derive(Clone, Copy, Debug)]
struct CardNodes {
    id: CardId,
    content: NodeId,
    expand: NodeId,
    collapse: NodeId,
}

/// Reveals, cards and the cursor for one page.
#[derive(Debug)]
pub(crate) struct Motion {
    composer: SectionComposer,
    sections: Vec<SectionNodes>,
    deck: CardDeck,
    cards: Vec<CardNodes>,
    bob: Option<(NodeId, Keyframes<3>)>,
    follower: PointerFollower,
    cursor: Option<[NodeId; 2]>,
}

impl Motion {
    /// Creates nodes for every element in `scene`.
    ///
    /// `observe` registers a section root with the visibility observer and
    /// `bind` attaches a created node to its element. With `reduced_motion`
    /// every reveal jumps to its target and the scroll indicator holds
    /// still.
    pub(crate) fn build<E>(
        scene: Scene<E>,
        store: &mut NodeStore,
        config: &MotionConfig,
        caps: PointerCapabilities,
        reduced_motion: bool,
        mut observe: impl FnMut(&E, ObserveOptions) -> WatchId,
        mut bind: impl FnMut(NodeId, E),
    ) -> Self {
        let mut node = |el: E, store: &mut NodeStore| {
            let id = store.create_node();
            bind(id, el);
            id
        };

        let mut composer = SectionComposer::new();
        let mut sections = Vec::with_capacity(scene.sections.len());
        for slots in scene.sections {
            let plan = if reduced_motion {
                slots.plan.without_motion()
            } else {
                slots.plan
            };
            let watch = match (plan.trigger, slots.root.as_ref()) {
                (Trigger::Viewport(options), Some(root)) => Some(observe(root, options)),
                _ => None,
            };
            let mut section = match watch {
                Some(watch) => RevealSection::new(plan.name, watch),
                None => RevealSection::on_load(plan.name),
            };

            let mut nodes = SectionNodes::default();
            if let (Some(variants), Some(el)) = (plan.header, slots.header) {
                section = section.with_header(variants);
                nodes.header = Some(node(el, store));
            }
            if let Some(items) = plan.items {
                section = section.with_items(items.container, items.item, slots.items.len());
                nodes.container = slots.container.map(|el| node(el, store));
                nodes.items = slots.items.into_iter().map(|el| node(el, store)).collect();
            }
            for (variants, el) in plan.extras.iter().zip(slots.extras) {
                section = section.with_extra(*variants);
                nodes.extras.push(node(el, store));
            }
            if plan.mount_on_reveal {
                nodes.mount = slots.mount.map(|el| node(el, store));
            }

            composer.push(section);
            sections.push(nodes);
        }

        let mut deck = CardDeck::new();
        let cards = scene
            .cards
            .into_iter()
            .map(|slots| CardNodes {
                id: deck.push(ExpansionTiming::SERVICE_CARD),
                content: node(slots.content, store),
                expand: node(slots.expand, store),
                collapse: node(slots.collapse, store),
            })
            .collect();

        let bob = if reduced_motion {
            None
        } else {
            scene.bob.map(|el| (node(el, store), presets::SCROLL_BOB))
        };

        let follower = PointerFollower::new(config, caps);
        let cursor = match (follower.mode(), scene.cursor) {
            (PointerMode::Follow, Some([dot, ring])) => {
                Some([node(dot, store), node(ring, store)])
            }
            _ => None,
        };

        Self {
            composer,
            sections,
            deck,
            cards,
            bob,
            follower,
            cursor,
        }
    }

    /// Reveals every section whose signal is set, returning those revealed
    /// by this call.
    pub(crate) fn sync<O: VisibilityObserver + ?Sized>(
        &mut self,
        observer: &O,
        now: HostTime,
    ) -> Vec<SectionIndex> {
        self.composer.sync(observer, now)
    }

    pub(crate) fn section(&self, index: SectionIndex) -> Option<&RevealSection> {
        self.composer.get(index)
    }

    /// Samples everything into `store`. Returns `true` while anything is
    /// still moving.
    pub(crate) fn animate(&mut self, store: &mut NodeStore, now: HostTime, dt: Duration) -> bool {
        for (section, nodes) in self.composer.iter().zip(&self.sections) {
            if let (Some(node), Some(state)) = (nodes.header, section.header_state(now)) {
                store.apply_visual(node, state);
            }
            if let (Some(node), Some(state)) = (nodes.container, section.container_state(now)) {
                store.apply_visual(node, state);
            }
            for (i, &node) in nodes.items.iter().enumerate() {
                if let Some(state) = section.item_state(i, now) {
                    store.apply_visual(node, state);
                }
            }
            for (i, &node) in nodes.extras.iter().enumerate() {
                if let Some(state) = section.extra_state(i, now) {
                    store.apply_visual(node, state);
                }
            }
            if let Some(node) = nodes.mount {
                store.set_hidden(node, !section.is_revealed());
            }
        }
        let mut animating = !self.composer.is_settled(now);

        for nodes in &self.cards {
            let Some(card) = self.deck.get(nodes.id) else {
                continue;
            };
            store.apply_content(nodes.content, card.content_style(now));
            let controls = card.controls();
            store.set_hidden(nodes.expand, !controls.expand_visible);
            store.set_hidden(nodes.collapse, !controls.collapse_visible);
            animating |= card.is_animating(now);
        }

        if let Some((node, track)) = &self.bob {
            let y = track.sample(HostTime::ZERO, now);
            store.set_offset(*node, Vec2::new(0.0, y));
            animating = true;
        }

        if let Some(nodes) = self.cursor {
            let moving = self.follower.tick(dt);
            if let Some(frames) = self.follower.indicators(now) {
                for (node, frame) in nodes.into_iter().zip(frames) {
                    store.set_offset(node, frame.position.to_vec2());
                    store.set_scale(node, frame.scale);
                }
            }
            animating |= moving || self.follower.is_scaling(now);
        }

        animating
    }

    /// Returns the id of the `index`th card in scene order.
    pub(crate) fn card_id(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).map(|nodes| nodes.id)
    }

    /// Applies a user action to a card. Returns `true` if its state changed.
    pub(crate) fn card_action(&mut self, id: CardId, action: CardAction, now: HostTime) -> bool {
        self.deck.apply(id, action, now)
    }

    pub(crate) fn card_state(&self, id: CardId) -> CardState {
        self.deck.state(id)
    }

    /// Returns `true` if the card waits for its content height.
    pub(crate) fn needs_measurement(&self, id: CardId) -> bool {
        self.deck.get(id).is_some_and(|card| card.needs_measurement())
    }

    pub(crate) fn provide_measurement(&mut self, id: CardId, height: f64, now: HostTime) {
        if let Some(card) = self.deck.get_mut(id) {
            card.provide_measurement(height, now);
        }
    }

    pub(crate) fn pointer_mode(&self) -> PointerMode {
        self.follower.mode()
    }

    pub(crate) fn on_pointer_move(&mut self, position: Point, over_interactive: bool, now: HostTime) {
        self.follower
            .on_pointer_move(position, over_interactive, now);
    }

    /// Releases every visibility watch.
    pub(crate) fn release<O: VisibilityObserver + ?Sized>(&self, observer: &mut O) {
        self.composer.release(observer);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Rect;
    use spiral_core::card::ContentHeight;
    use spiral_core::visibility::ViewportWatcher;

    use super::*;
    use crate::plan;

    const CONFIG: MotionConfig = MotionConfig::SITE;
    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);
    const MOUSE: PointerCapabilities = PointerCapabilities::detected(false);

    fn ms(ms: u64) -> HostTime {
        HostTime(ms * 1000)
    }

    /// Elements are named by string; section roots carry their layout box.
    #[derive(Debug)]
    enum El {
        Root(Rect),
        Part(&'static str),
    }

    struct Harness {
        store: NodeStore,
        watcher: ViewportWatcher<Rect>,
        bound: Vec<(NodeId, &'static str)>,
        motion: Motion,
    }

    impl Harness {
        fn new(scene: Scene<El>, caps: PointerCapabilities, reduced: bool) -> Self {
            let mut store = NodeStore::new();
            let mut watcher = ViewportWatcher::new();
            let mut bound = Vec::new();
            let motion = Motion::build(
                scene,
                &mut store,
                &CONFIG,
                caps,
                reduced,
                |el, options| match el {
                    El::Root(rect) => watcher.observe(Some(*rect), options),
                    El::Part(_) => watcher.observe(None, options),
                },
                |node, el| {
                    if let El::Part(name) = el {
                        bound.push((node, name));
                    }
                },
            );
            Self {
                store,
                watcher,
                bound,
                motion,
            }
        }

        fn node(&self, name: &str) -> NodeId {
            self.bound
                .iter()
                .find(|(_, n)| *n == name)
                .map(|(id, _)| *id)
                .unwrap()
        }

        /// One frame scrolled by `scroll` px; returns revealed section names.
        fn frame(&mut self, scroll: f64, now: HostTime) -> Vec<&'static str> {
            self.watcher
                .layout_pass(VIEWPORT, |rect| Some(*rect - Vec2::new(0.0, scroll)));
            let revealed = self
                .motion
                .sync(&self.watcher, now)
                .into_iter()
                .filter_map(|i| self.motion.section(i).map(RevealSection::name))
                .collect();
            self.motion
                .animate(&mut self.store, now, Duration::from_millis(16));
            revealed
        }
    }

    fn hero_scene() -> SectionSlots<El> {
        let mut hero = SectionSlots::new(plan::home::hero(), None);
        hero.container = Some(El::Part("buttons"));
        hero.items = vec![El::Part("cta-0"), El::Part("cta-1"), El::Part("cta-2")];
        hero.extras = vec![El::Part("hero-card"), El::Part("scroll")];
        hero
    }

    fn services_scene(top: f64) -> SectionSlots<El> {
        let mut services = SectionSlots::new(
            plan::home::services(&CONFIG),
            Some(El::Root(Rect::new(0.0, top, 1280.0, top + 1200.0))),
        );
        services.header = Some(El::Part("services-header"));
        services.container = Some(El::Part("services-list"));
        services.items = (0..4).map(|_| El::Part("service")).collect();
        services
    }

    fn one_card() -> CardSlots<El> {
        CardSlots {
            content: El::Part("content"),
            expand: El::Part("expand"),
            collapse: El::Part("collapse"),
        }
    }

    #[test]
    fn hero_rises_on_load() {
        let mut h = Harness::new(
            Scene {
                sections: vec![hero_scene()],
                ..Scene::default()
            },
            MOUSE,
            false,
        );
        assert_eq!(h.frame(0.0, ms(0)), ["hero"]);
        let card = h.node("hero-card");
        assert!(h.store.opacity(card) < 1e-9, "starts transparent");
        assert_eq!(h.store.offset(card), Vec2::new(0.0, 20.0));

        // The row's last button waits 300 ms + 2 * 100 ms.
        h.frame(0.0, ms(450));
        assert!(h.store.opacity(h.node("cta-0")) > 0.0, "first button is moving");
        assert!(h.store.opacity(h.node("cta-2")) < 1e-9, "last button still waits");

        h.frame(0.0, ms(1400));
        assert!((h.store.opacity(card) - 1.0).abs() < 1e-9, "card settled");
        assert!((h.store.opacity(h.node("scroll")) - 1.0).abs() < 1e-9, "indicator in");
    }

    #[test]
    fn scroll_reveals_services_once() {
        let mut h = Harness::new(
            Scene {
                sections: vec![services_scene(1000.0)],
                ..Scene::default()
            },
            MOUSE,
            false,
        );
        assert!(h.frame(0.0, ms(0)).is_empty(), "below the fold");
        assert!(h.store.opacity(h.node("services-header")) < 1e-9, "header hidden");

        // Scrolled 400: top at 600, 200 of 1200 px visible.
        assert_eq!(h.frame(400.0, ms(100)), ["services"]);
        assert!(h.frame(0.0, ms(200)).is_empty(), "scrolling back does not re-trigger");

        h.frame(0.0, ms(2000));
        assert!(
            (h.store.opacity(h.node("services-header")) - 1.0).abs() < 1e-9,
            "stays revealed after scrolling away"
        );
        assert!(!h.motion.animate(&mut h.store, ms(2000), Duration::ZERO), "settled");
    }

    #[test]
    fn reduced_motion_reveals_in_one_frame() {
        let mut h = Harness::new(
            Scene {
                sections: vec![hero_scene()],
                bob: Some(El::Part("arrow")),
                ..Scene::default()
            },
            MOUSE,
            true,
        );
        h.frame(0.0, ms(0));
        assert!((h.store.opacity(h.node("cta-2")) - 1.0).abs() < 1e-9, "no stagger");
        assert!(
            h.bound.iter().all(|(_, n)| *n != "arrow"),
            "the indicator arrow stays still"
        );
    }

    #[test]
    fn card_measures_then_expands_then_collapses() {
        let mut h = Harness::new(
            Scene {
                cards: vec![one_card()],
                ..Scene::default()
            },
            MOUSE,
            false,
        );
        h.frame(0.0, ms(0));
        let content = h.node("content");
        assert!(h.store.hidden(content), "collapsed content is unmounted");
        assert!(h.store.hidden(h.node("collapse")), "one trigger at a time");
        assert!(!h.store.hidden(h.node("expand")), "expand trigger shown");

        let id = h.motion.card_id(0).unwrap();
        assert!(h.motion.card_action(id, CardAction::Expand, ms(100)));
        h.frame(0.0, ms(100));
        assert!(!h.store.hidden(content), "mounted for measurement");
        assert_eq!(h.store.extent(content).height, ContentHeight::Px(0.0));
        assert!(h.motion.needs_measurement(id));

        h.motion.provide_measurement(id, 320.0, ms(116));
        h.frame(0.0, ms(116));
        assert!(!h.motion.needs_measurement(id));
        h.frame(0.0, ms(700));
        assert_eq!(h.store.extent(content).height, ContentHeight::Auto);
        assert!(h.store.hidden(h.node("expand")), "expand trigger hidden");

        assert!(h.motion.card_action(id, CardAction::Collapse, ms(800)));
        assert_eq!(h.motion.card_state(id), CardState::Collapsed);
        h.frame(0.0, ms(1400));
        assert!(h.store.hidden(content), "unmounted after the exit");
    }

    #[test]
    fn touch_devices_get_no_cursor() {
        let cursor = || Some([El::Part("dot"), El::Part("ring")]);
        let touch = Harness::new(
            Scene {
                cursor: cursor(),
                ..Scene::default()
            },
            PointerCapabilities::detected(true),
            false,
        );
        assert_eq!(touch.motion.pointer_mode(), PointerMode::Native);
        assert!(touch.bound.is_empty(), "indicators never bound");

        let mut mouse = Harness::new(
            Scene {
                cursor: cursor(),
                ..Scene::default()
            },
            MOUSE,
            false,
        );
        mouse
            .motion
            .on_pointer_move(Point::new(200.0, 100.0), false, ms(0));
        for i in 0..120 {
            mouse.frame(0.0, ms(i * 16));
        }
        let dot = mouse.store.offset(mouse.node("dot"));
        assert!((dot - Vec2::new(196.0, 96.0)).hypot() < 0.5, "dot trails to {dot:?}");
    }

    #[test]
    fn footer_mounts_when_reached() {
        let mut footer = SectionSlots::new(
            plan::home::footer(&CONFIG),
            Some(El::Root(Rect::new(0.0, 870.0, 1280.0, 1170.0))),
        );
        footer.mount = Some(El::Part("footer-body"));
        let mut h = Harness::new(
            Scene {
                sections: vec![footer],
                ..Scene::default()
            },
            MOUSE,
            false,
        );
        assert!(h.frame(0.0, ms(0)).is_empty(), "20 px beyond the 50 px margin");
        assert!(h.store.hidden(h.node("footer-body")));
        // A 30 px scroll brings the top to 840, inside the margin.
        assert_eq!(h.frame(30.0, ms(16)), ["footer"]);
        assert!(!h.store.hidden(h.node("footer-body")), "mounted");
    }

    #[test]
    fn release_unobserves_every_root() {
        let mut h = Harness::new(
            Scene {
                sections: vec![services_scene(1000.0), hero_scene()],
                ..Scene::default()
            },
            MOUSE,
            false,
        );
        assert_eq!(h.watcher.watching_count(), 1);
        h.motion.release(&mut h.watcher);
        assert_eq!(h.watcher.watching_count(), 0);
    }
}
