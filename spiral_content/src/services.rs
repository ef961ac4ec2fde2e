// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Service descriptors.

/// One performance figure on a service card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    /// Short label, used as the accessible name.
    pub label: &'static str,
    /// The headline figure.
    pub value: &'static str,
    /// What the figure measures.
    pub description: &'static str,
}

/// A service shown as an expandable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceCard {
    /// Stable identifier, unique across services.
    pub id: &'static str,
    /// Display number, e.g. `01`.
    pub number: &'static str,
    /// Card heading.
    pub title: &'static str,
    /// Summary shown while collapsed.
    pub description: &'static str,
    /// Bullet list shown while expanded.
    pub capabilities: &'static [&'static str],
    /// Figures shown while expanded.
    pub metrics: &'static [Metric],
    /// Technology tags shown while expanded.
    pub tech_stack: &'static [&'static str],
}

/// The services, in display order.
pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        id: "autonomous-agents",
        number: "01",
        title: "Autonomous AI Agents",
        description: "Agents that plan, call tools and act across your systems with human oversight where it matters. We design the orchestration, guardrails and evaluation loops that keep multi-step automation reliable in production.",
        capabilities: &[
            "Multi-agent orchestration and task planning",
            "Tool and API integration with permission scopes",
            "Human-in-the-loop review and escalation",
            "Long-running workflow memory and state",
            "Offline evaluation and regression suites",
        ],
        metrics: &[
            Metric {
                label: "Automation",
                value: "70%",
                description: "of repetitive workflow steps automated",
            },
            Metric {
                label: "Turnaround",
                value: "5x",
                description: "faster task completion than manual handling",
            },
        ],
        tech_stack: &["Python", "LangGraph", "OpenAI", "Anthropic", "FastAPI", "Redis", "PostgreSQL"],
    },
    ServiceCard {
        id: "neural-networks",
        number: "02",
        title: "Neural Network Engineering",
        description: "Custom models trained on your data, from problem framing through architecture search to deployment. We build vision, language and tabular models that are measured against the metrics your business actually tracks.",
        capabilities: &[
            "Model architecture design and training",
            "Fine-tuning of open foundation models",
            "Computer vision and document understanding",
            "Forecasting and anomaly detection",
            "Model compression for edge deployment",
        ],
        metrics: &[
            Metric {
                label: "Accuracy",
                value: "95%+",
                description: "accuracy on production evaluation sets",
            },
            Metric {
                label: "Latency",
                value: "<50ms",
                description: "inference latency after optimisation",
            },
        ],
        tech_stack: &["PyTorch", "TensorFlow", "Hugging Face", "ONNX", "CUDA", "Weights & Biases"],
    },
    ServiceCard {
        id: "llm-rag-systems",
        number: "03",
        title: "LLM & Retrieval Systems",
        description: "Retrieval-augmented assistants grounded in your documents and databases. We handle ingestion, chunking, embedding, ranking and answer attribution so responses stay accurate and auditable.",
        capabilities: &[
            "Document ingestion and semantic indexing",
            "Hybrid search with re-ranking",
            "Citations and answer attribution",
            "Prompt engineering and safety filters",
            "Usage analytics and feedback capture",
        ],
        metrics: &[
            Metric {
                label: "Grounding",
                value: "90%",
                description: "of answers backed by cited sources",
            },
            Metric {
                label: "Coverage",
                value: "1M+",
                description: "documents indexed per deployment",
            },
        ],
        tech_stack: &["Python", "Django", "pgvector", "Elasticsearch", "LlamaIndex", "AWS Bedrock"],
    },
    ServiceCard {
        id: "ml-infrastructure",
        number: "04",
        title: "Production ML Infrastructure",
        description: "The pipelines, serving layers and monitoring that turn prototypes into dependable services. We set up training, deployment and observability so models keep performing after launch.",
        capabilities: &[
            "Training and feature pipelines",
            "Model serving with autoscaling",
            "Drift detection and monitoring",
            "CI/CD for models and prompts",
            "Cost and latency optimisation",
        ],
        metrics: &[
            Metric {
                label: "Uptime",
                value: "99.9%",
                description: "availability for served models",
            },
            Metric {
                label: "Cost",
                value: "40%",
                description: "average reduction in inference spend",
            },
        ],
        tech_stack: &["AWS", "Kubernetes", "Docker", "Terraform", "MLflow", "Prometheus", "GitHub Actions"],
    },
];

/// Finds a service by id.
#[must_use]
pub fn by_id(id: &str) -> Option<&'static ServiceCard> {
    SERVICES.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_domains() {
        assert_eq!(SERVICES.len(), 4);
    }

    #[test]
    fn ids_are_unique() {
        for (i, s) in SERVICES.iter().enumerate() {
            assert!(
                SERVICES[i + 1..].iter().all(|o| o.id != s.id),
                "duplicate service id {}",
                s.id
            );
        }
    }

    #[test]
    fn numbers_follow_display_order() {
        let numbers: alloc::vec::Vec<_> = SERVICES.iter().map(|s| s.number).collect();
        assert_eq!(numbers, ["01", "02", "03", "04"]);
    }

    #[test]
    fn expanded_sections_are_populated() {
        for s in SERVICES {
            assert!(!s.capabilities.is_empty(), "{} has capabilities", s.id);
            assert!(!s.metrics.is_empty(), "{} has metrics", s.id);
            assert!(!s.tech_stack.is_empty(), "{} has a stack", s.id);
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(by_id("neural-networks").map(|s| s.number), Some("02"));
        assert!(by_id("missing").is_none());
    }
}
