// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Case-study descriptors.

/// One impact line on a case-study card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Impact {
    /// Emphasised lead word.
    pub metric: &'static str,
    /// The rest of the line.
    pub description: &'static str,
}

/// A case-study card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    /// Stable identifier, unique across case studies.
    pub id: &'static str,
    /// Display number, e.g. `01`.
    pub number: &'static str,
    /// Card heading.
    pub title: &'static str,
    /// Body text.
    pub description: &'static str,
    /// Impact lines.
    pub impact: &'static [Impact],
    /// Technology tags, joined with bullets when rendered.
    pub tech_stack: &'static [&'static str],
    /// Target of the "View Details" link.
    pub link: &'static str,
}

impl CaseStudy {
    /// Separator used when rendering the stack as one line.
    pub const STACK_SEPARATOR: &'static str = " \u{2022} ";

    /// Returns the stack as one bullet-separated line.
    #[must_use]
    pub fn stack_line(&self) -> alloc::string::String {
        self.tech_stack.join(Self::STACK_SEPARATOR)
    }
}

/// The case studies, in display order.
pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        id: "wellbeing-wizard",
        number: "01",
        title: "Wellbeing Wizard",
        description: "An innovative AI-powered platform focused on wellbeing education that combines cutting-edge artificial intelligence with personalized learning pathways. The system uses machine learning to adapt content and recommendations based on user behavior and preferences.",
        impact: &[
            Impact {
                metric: "AI-Powered",
                description: "Personalized learning with NLP",
            },
            Impact {
                metric: "Adaptive",
                description: "ML-driven recommendations",
            },
            Impact {
                metric: "Engaging",
                description: "Intelligent user experience",
            },
        ],
        tech_stack: &[
            "AI",
            "Machine Learning",
            "NLP",
            "Neural Networks",
            "Next.js",
            "React",
            "Node.js",
            "PostgreSQL",
            "TensorFlow",
        ],
        link: "#",
    },
    CaseStudy {
        id: "uk-public-affairs-platform",
        number: "02",
        title: "UK Public Affairs AI Platform",
        description: "Built a comprehensive AI-powered platform for public affairs agencies in the UK, automating critical workflows including intelligent bill tracking, AI bill assistant for legislative Q&A, stakeholder mapping and monitoring, automated research on monitoring items, and strategic intelligence gathering.",
        impact: &[
            Impact {
                metric: "AI-Powered",
                description: "Intelligent bill tracking & analysis",
            },
            Impact {
                metric: "Automated",
                description: "Stakeholder mapping & monitoring",
            },
            Impact {
                metric: "NLP-Driven",
                description: "Legislative Q&A assistant",
            },
        ],
        tech_stack: &[
            "AI",
            "NLP",
            "Python",
            "Django",
            "Machine Learning",
            "Natural Language Processing",
            "PostgreSQL",
            "AWS",
            "RAG",
        ],
        link: "#",
    },
    CaseStudy {
        id: "lynx-flow-health",
        number: "03",
        title: "Lynx Flow Health",
        description: "Healthcare platform designed to streamline patient management through intelligent AI automation. Features include predictive care recommendations, automated appointment scheduling, NLP-powered patient intake, and real-time health monitoring with anomaly detection.",
        impact: &[
            Impact {
                metric: "AI-Driven",
                description: "Predictive care & monitoring",
            },
            Impact {
                metric: "Automated",
                description: "NLP-powered workflows",
            },
            Impact {
                metric: "HIPAA",
                description: "Secure & compliant platform",
            },
        ],
        tech_stack: &[
            "Healthcare AI",
            "NLP",
            "Predictive Analytics",
            "Anomaly Detection",
            "HIPAA Compliance",
            "React",
            "Node.js",
            "PostgreSQL",
            "AWS",
        ],
        link: "#",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, c) in CASE_STUDIES.iter().enumerate() {
            assert!(
                CASE_STUDIES[i + 1..].iter().all(|o| o.id != c.id),
                "duplicate case study id {}",
                c.id
            );
        }
    }

    #[test]
    fn every_card_has_three_impacts() {
        for c in CASE_STUDIES {
            assert_eq!(c.impact.len(), 3, "{} impact lines", c.id);
        }
    }

    #[test]
    fn stack_joins_with_bullets() {
        let line = CASE_STUDIES[0].stack_line();
        assert!(line.starts_with("AI \u{2022} Machine Learning \u{2022} NLP"), "{line}");
        assert!(line.ends_with("TensorFlow"), "{line}");
    }
}
