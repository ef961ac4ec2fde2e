// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Home page copy.

/// A call-to-action link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cta {
    /// Link text.
    pub label: &'static str,
    /// Link target.
    pub href: &'static str,
    /// Whether this is the filled primary button.
    pub primary: bool,
}

/// Heading and intro line of a content section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionIntro {
    /// Decorative emoji above the heading, if any.
    pub icon: Option<&'static str>,
    /// Small uppercase heading.
    pub heading: &'static str,
    /// Intro line.
    pub intro: &'static str,
}

/// Short brand name shown in page headers.
pub const BRAND: &str = "SPIRAL LAB";

/// Label of the header link to the internship page.
pub const INTERNSHIP_LINK: &str = "Join Our Internship";

/// Text of the skip link.
pub const SKIP_LINK: &str = "Skip to main content";

/// Hero headline.
pub const HERO_HEADLINE: &str = "We architect AI systems for organizations building the future.";

/// Hero body line.
pub const HERO_BODY: &str = "Autonomous agents. Neural networks. Production-grade intelligence.";

/// Hero calls to action, in order.
pub const HERO_CTAS: [Cta; 3] = [
    Cta {
        label: "Explore Capabilities",
        href: "#services",
        primary: true,
    },
    Cta {
        label: "View Case Studies",
        href: "#case-studies",
        primary: false,
    },
    Cta {
        label: "Discuss Your Project",
        href: "#contact",
        primary: false,
    },
];

/// Scroll indicator text.
pub const SCROLL_LABEL: &str = "Scroll Down";

/// Scroll indicator accessible name.
pub const SCROLL_ARIA_LABEL: &str = "Scroll to services section";

/// Services section heading.
pub const SERVICES_INTRO: SectionIntro = SectionIntro {
    icon: None,
    heading: BRAND,
    intro: "We engineer AI infrastructure across four specialized domains:",
};

/// Case-studies section heading.
pub const CASE_STUDIES_INTRO: SectionIntro = SectionIntro {
    icon: Some("\u{1f300}"),
    heading: BRAND,
    intro: "Here are some AI systems we've built:",
};

/// Contact section heading.
pub const CONTACT_HEADLINE: &str = "Let's Build Something Great Together";

/// Contact section body.
pub const CONTACT_BODY: &str = "Ready to transform your organization with AI? We'd love to hear about your project and explore how we can help.";

/// Subject line of the "Schedule a Call" link.
pub const SCHEDULE_SUBJECT: &str = "Schedule a Call";

/// Contact section icon.
pub const CONTACT_ICON: &str = "\u{1f4ac}";

/// Label of the primary contact email link.
pub const CONTACT_START_LABEL: &str = "Start a Conversation";

/// Labels on an expandable service card.
pub mod card {
    /// Expand button text.
    pub const EXPAND: &str = "Expand Details";
    /// Collapse button text.
    pub const COLLAPSE: &str = "Collapse \u{2191}";
    /// Collapse button accessible name.
    pub const COLLAPSE_ARIA_LABEL: &str = "Collapse details";
    /// Headings of the expanded sections.
    pub const CAPABILITIES: &str = "Capabilities";
    /// See [`CAPABILITIES`].
    pub const METRICS: &str = "Performance Metrics";
    /// See [`CAPABILITIES`].
    pub const TECH_STACK: &str = "Technology Stack";
    /// Calls to action at the bottom of the expanded content.
    pub const CTAS: [super::Cta; 2] = [
        super::Cta {
            label: "Request Consultation",
            href: "#contact",
            primary: true,
        },
        super::Cta {
            label: "View Case Studies",
            href: "#case-studies",
            primary: false,
        },
    ];
}

/// Case-study card labels.
pub mod case_study {
    /// Heading above the impact list.
    pub const IMPACT: &str = "Impact:";
    /// Heading above the stack line.
    pub const STACK: &str = "Stack:";
    /// Label of the card link.
    pub const VIEW_DETAILS: &str = "View Details";
}

/// Footer tagline.
pub const FOOTER_TAGLINE: &str = "Architecting AI systems for organizations building the future.";

/// Footer column headings.
pub const FOOTER_QUICK_LINKS: &str = "Quick Links";

/// See [`FOOTER_QUICK_LINKS`].
pub const FOOTER_CONTACT: &str = "Get in Touch";

/// Footer quick links, excluding the internship link.
pub const FOOTER_LINKS: [Cta; 3] = [
    Cta {
        label: "Services",
        href: "#services",
        primary: false,
    },
    Cta {
        label: "Case Studies",
        href: "#case-studies",
        primary: false,
    },
    Cta {
        label: "Contact",
        href: "#contact",
        primary: false,
    },
];

/// Footer link to the internship page.
pub const FOOTER_INTERNSHIP_LINK: &str = "Join Our Internship Program";

/// Copyright line.
pub const COPYRIGHT: &str = "\u{a9} 2026 Spiral Lab. All rights reserved.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchors;

    fn targets_known_anchor(href: &str) -> bool {
        href.strip_prefix('#').is_some_and(|id| anchors::ALL.contains(&id))
    }

    #[test]
    fn hero_ctas_target_sections() {
        assert!(HERO_CTAS.iter().all(|c| targets_known_anchor(c.href)), "hero links");
        assert_eq!(HERO_CTAS.iter().filter(|c| c.primary).count(), 1);
    }

    #[test]
    fn card_and_footer_links_target_sections() {
        assert!(card::CTAS.iter().all(|c| targets_known_anchor(c.href)), "card links");
        assert!(FOOTER_LINKS.iter().all(|c| targets_known_anchor(c.href)), "footer links");
    }
}
