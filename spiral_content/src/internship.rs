// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Internship page copy.

use crate::home::Cta;

/// One card in the program overview grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Benefit {
    /// Decorative emoji.
    pub icon: &'static str,
    /// Card heading.
    pub title: &'static str,
    /// Card body.
    pub description: &'static str,
}

/// A column of the "Topics Covered" panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopicGroup {
    /// Column heading.
    pub heading: &'static str,
    /// Topics, one per line.
    pub topics: &'static [&'static str],
}

/// One entry of the "Why Join Us" panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reason {
    /// Entry heading.
    pub title: &'static str,
    /// Entry body.
    pub body: &'static str,
}

/// Header back link text.
pub const BACK_LINK: &str = "\u{2190} SPIRAL LAB";

/// Hero heading.
pub const HERO_HEADING: &str = "AI INTERNSHIP PROGRAM";

/// Hero headline.
pub const HERO_HEADLINE: &str = "Free AI Training & Internship Opportunities";

/// Hero body.
pub const HERO_BODY: &str = "We're committed to empowering the next generation of AI engineers in Pakistan. Our program offers free, industry-led training in cutting-edge AI technologies, hands-on experience, and pathways to career opportunities.";

/// Hero calls to action.
pub const HERO_CTAS: [Cta; 2] = [
    Cta {
        label: "Apply Now",
        href: "#apply",
        primary: true,
    },
    Cta {
        label: "Learn More",
        href: "#program",
        primary: false,
    },
];

/// Program overview heading.
pub const PROGRAM_HEADING: &str = "PROGRAM OVERVIEW";

/// Program overview icon.
pub const PROGRAM_ICON: &str = "\u{1f393}";

/// Program overview intro.
pub const PROGRAM_INTRO: &str = "Our internship program is designed to bridge the gap between academic learning and real-world AI development. We provide comprehensive training, mentorship from industry experts, and opportunities to work on actual production systems.";

/// The program overview grid.
pub const BENEFITS: [Benefit; 6] = [
    Benefit {
        icon: "\u{1f680}",
        title: "Industry-Led Training",
        description: "Learn from experienced AI engineers working on real-world production systems. Get hands-on experience with the latest tools and frameworks.",
    },
    Benefit {
        icon: "\u{1f4a1}",
        title: "Cutting-Edge Technologies",
        description: "Master modern AI technologies including LLMs, transformers, neural networks, RAG systems, and production ML pipelines.",
    },
    Benefit {
        icon: "\u{1f3af}",
        title: "Real Project Experience",
        description: "Work on actual client projects and contribute to production systems. Build a portfolio that stands out to employers.",
    },
    Benefit {
        icon: "\u{1f91d}",
        title: "Mentorship & Guidance",
        description: "Receive one-on-one mentorship from senior engineers. Get career guidance and technical support throughout your journey.",
    },
    Benefit {
        icon: "\u{1f31f}",
        title: "Career Opportunities",
        description: "High-performing interns are considered for full-time positions at Spiral Lab or receive referrals to our partner companies.",
    },
    Benefit {
        icon: "\u{1f1f5}\u{1f1f0}",
        title: "Community Impact",
        description: "Join a growing community of AI practitioners in Pakistan. Help build the local AI ecosystem and give back to future learners.",
    },
];

/// "Topics Covered" panel heading.
pub const TOPICS_HEADING: &str = "Topics Covered";

/// "Topics Covered" panel columns.
pub const TOPICS: [TopicGroup; 2] = [
    TopicGroup {
        heading: "AI & Machine Learning",
        topics: &[
            "Large Language Models (LLMs)",
            "Transformers & Neural Networks",
            "Natural Language Processing",
            "RAG (Retrieval Augmented Generation)",
            "Fine-tuning & Model Training",
            "Prompt Engineering",
        ],
    },
    TopicGroup {
        heading: "Engineering & Production",
        topics: &[
            "Python & Django Development",
            "API Design & Development",
            "Database Design & Optimization",
            "Cloud Infrastructure (AWS)",
            "CI/CD & Deployment",
            "Production ML Systems",
        ],
    },
];

/// "Why Join Us" heading.
pub const WHY_HEADING: &str = "WHY JOIN US";

/// "Why Join Us" icon.
pub const WHY_ICON: &str = "\u{2728}";

/// "Why Join Us" entries.
pub const REASONS: [Reason; 4] = [
    Reason {
        title: "100% Free Training",
        body: "No tuition fees, no hidden costs. We believe in making quality AI education accessible to everyone in Pakistan. Our program is completely free as part of our commitment to giving back to the community.",
    },
    Reason {
        title: "Always-On Internship Batches",
        body: "We run internship batches continuously throughout the year. No need to wait for specific enrollment periods. Apply when you're ready and start learning.",
    },
    Reason {
        title: "Career Support & Opportunities",
        body: "Top performers are offered full-time positions at Spiral Lab. We also help place interns at partner companies and provide career guidance, interview preparation, and networking opportunities.",
    },
    Reason {
        title: "Giving Back to Pakistan",
        body: "This program is our way of contributing to Pakistan's tech ecosystem. We're building a community of skilled AI engineers who can compete globally and contribute locally.",
    },
];

/// Apply section icon.
pub const APPLY_ICON: &str = "\u{1f680}";

/// Apply section headline.
pub const APPLY_HEADLINE: &str = "Ready to Start Your AI Journey?";

/// Apply section body.
pub const APPLY_BODY: &str = "Join our next batch and learn from industry experts. Whether you're a student, fresh graduate, or career switcher, we'll help you build the skills needed to succeed in AI.";

/// Subject line of the application email.
pub const APPLY_SUBJECT: &str = "AI Internship Application";

/// Label of the application email link.
pub const APPLY_EMAIL_LABEL: &str = "Apply via Email";

/// Label of the link back to the home page's contact section.
pub const CONTACT_LINK_LABEL: &str = "Contact Us";

/// Lead-in of the questions line.
pub const QUESTIONS: &str = "Questions? Reach out to us at";

/// Footer line.
pub const FOOTER: &str = "\u{a9} 2026 Spiral Lab. Building the future of AI, one engineer at a time.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_benefits_with_distinct_titles() {
        for (i, b) in BENEFITS.iter().enumerate() {
            assert!(
                BENEFITS[i + 1..].iter().all(|o| o.title != b.title),
                "duplicate benefit {}",
                b.title
            );
        }
    }

    #[test]
    fn topic_columns_are_balanced() {
        assert_eq!(TOPICS[0].topics.len(), TOPICS[1].topics.len());
    }
}
