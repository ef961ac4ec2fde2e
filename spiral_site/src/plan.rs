// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal plans for every section of both pages.
//!
//! A [`SectionPlan`] says when a section reveals and which variants its
//! parts use. The DOM builders pair each plan with the elements it animates.

use alloc::vec::Vec;

use spiral_core::config::MotionConfig;
use spiral_core::sequencer::{Variants, presets};
use spiral_core::time::Duration;
use spiral_core::visibility::ObserveOptions;

/// What starts a section's reveal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Trigger {
    /// The first frame after the page is built.
    Load,
    /// The section's root element entering the viewport.
    Viewport(ObserveOptions),
}

/// Variants of a section's staggered list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ItemsPlan {
    pub(crate) container: Variants,
    pub(crate) item: Variants,
}

/// How one section reveals.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SectionPlan {
    pub(crate) name: &'static str,
    pub(crate) trigger: Trigger,
    pub(crate) header: Option<Variants>,
    pub(crate) items: Option<ItemsPlan>,
    pub(crate) extras: Vec<Variants>,
    /// Keep the section's content out of the document until it reveals.
    pub(crate) mount_on_reveal: bool,
}

impl SectionPlan {
    const fn new(name: &'static str, trigger: Trigger) -> Self {
        Self {
            name,
            trigger,
            header: None,
            items: None,
            extras: Vec::new(),
            mount_on_reveal: false,
        }
    }

    fn with_header(mut self, variants: Variants) -> Self {
        self.header = Some(variants);
        self
    }

    fn with_items(mut self, container: Variants, item: Variants) -> Self {
        self.items = Some(ItemsPlan { container, item });
        self
    }

    fn with_extra(mut self, variants: Variants) -> Self {
        self.extras.push(variants);
        self
    }

    /// The same plan with every transition made instant.
    pub(crate) fn without_motion(self) -> Self {
        Self {
            header: self.header.map(Variants::without_motion),
            items: self.items.map(|items| ItemsPlan {
                container: items.container.without_motion(),
                item: items.item.without_motion(),
            }),
            extras: self.extras.into_iter().map(Variants::without_motion).collect(),
            ..self
        }
    }
}

const HEADER: Duration = Duration::from_millis(400);
const HERO: Duration = Duration::from_millis(600);

/// Home page sections, in document order.
pub(crate) mod home {
    use super::*;

    /// The hero card, its button row and the scroll indicator, on load.
    pub(crate) fn hero() -> SectionPlan {
        SectionPlan::new("hero", Trigger::Load)
            .with_items(presets::button_group(), presets::button())
            .with_extra(presets::hero_card())
            .with_extra(presets::scroll_indicator())
    }

    /// The services heading and the four service cards.
    pub(crate) fn services(config: &MotionConfig) -> SectionPlan {
        SectionPlan::new("services", Trigger::Viewport(config.section))
            .with_header(presets::section_header(HEADER))
            .with_items(presets::stagger_container(), presets::scroll_reveal())
    }

    /// The case-studies heading and grid.
    pub(crate) fn case_studies(config: &MotionConfig) -> SectionPlan {
        SectionPlan::new("case-studies", Trigger::Viewport(config.section))
            .with_header(presets::section_header(HEADER))
            .with_items(presets::stagger_container(), presets::scroll_reveal())
    }

    /// The contact block.
    pub(crate) fn contact(config: &MotionConfig) -> SectionPlan {
        SectionPlan::new("contact", Trigger::Viewport(config.section))
            .with_extra(presets::section_header(HERO))
    }

    /// The footer, mounted once the region around it is reached.
    pub(crate) fn footer(config: &MotionConfig) -> SectionPlan {
        SectionPlan {
            mount_on_reveal: true,
            ..SectionPlan::new("footer", Trigger::Viewport(config.lazy))
        }
    }
}

/// Internship page sections, in document order.
pub(crate) mod internship {
    use super::*;

    /// The hero card.
    pub(crate) fn hero(config: &MotionConfig) -> SectionPlan {
        SectionPlan::new("internship-hero", Trigger::Viewport(config.section))
            .with_extra(presets::section_header(HERO))
    }

    /// The program heading, the benefit grid 0.1 s apart and the topics
    /// panel 0.3 s in.
    pub(crate) fn program(config: &MotionConfig) -> SectionPlan {
        SectionPlan::new("program", Trigger::Viewport(config.section))
            .with_header(presets::section_header(HEADER))
            .with_items(
                presets::grid(Duration::from_millis(100)),
                presets::scroll_reveal(),
            )
            .with_extra(presets::delayed_block(HEADER, Duration::from_millis(300)))
    }

    /// The "why join" panel.
    pub(crate) fn why(config: &MotionConfig) -> SectionPlan {
        SectionPlan::new("why-join", Trigger::Viewport(config.section))
            .with_extra(presets::section_header(HEADER))
    }

    /// The application call to action.
    pub(crate) fn apply(config: &MotionConfig) -> SectionPlan {
        SectionPlan::new("apply", Trigger::Viewport(config.section))
            .with_extra(presets::section_header(HEADER))
    }
}

#[cfg(test)]
mod tests {
    use spiral_core::sequencer::Transition;

    use super::*;

    const CONFIG: MotionConfig = MotionConfig::SITE;

    #[test]
    fn hero_reveals_on_load_everything_else_on_scroll() {
        assert_eq!(home::hero().trigger, Trigger::Load);
        for plan in [
            home::services(&CONFIG),
            home::case_studies(&CONFIG),
            home::contact(&CONFIG),
            internship::hero(&CONFIG),
            internship::program(&CONFIG),
            internship::why(&CONFIG),
            internship::apply(&CONFIG),
        ] {
            assert_eq!(
                plan.trigger,
                Trigger::Viewport(ObserveOptions::SECTION),
                "{} uses the section threshold",
                plan.name
            );
        }
    }

    #[test]
    fn footer_is_lazy() {
        let footer = home::footer(&CONFIG);
        assert_eq!(footer.trigger, Trigger::Viewport(ObserveOptions::LAZY));
        assert!(footer.mount_on_reveal, "footer content waits for its reveal");
    }

    #[test]
    fn benefit_grid_steps_by_a_tenth_of_a_second() {
        let program = internship::program(&CONFIG);
        let items = program.items.unwrap();
        assert_eq!(items.container.transition.child_offset(5), Duration::from_millis(500));
        assert_eq!(program.extras[0].transition.delay, Duration::from_millis(300));
    }

    #[test]
    fn reduced_motion_keeps_states_and_drops_timing() {
        let plan = home::hero().without_motion();
        let items = plan.items.unwrap();
        assert_eq!(items.item.transition, Transition::INSTANT);
        assert_eq!(items.item.hidden, presets::button().hidden);
        assert!(
            plan.extras.iter().all(|v| v.transition == Transition::INSTANT),
            "extras jump"
        );
    }
}
