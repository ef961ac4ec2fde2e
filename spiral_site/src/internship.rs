// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The internship page.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use spiral_content::internship as copy;
use spiral_content::{CONTACT, anchors};
use spiral_core::config::MotionConfig;
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use crate::dom::{append, decoration, el, eyebrow, link, list, text};
use crate::motion::{Scene, SectionSlots};
use crate::page::PageDom;
use crate::plan;

/// Builds the internship page into `body`.
pub(crate) fn build(
    doc: &Document,
    body: &HtmlElement,
    config: &MotionConfig,
) -> Result<PageDom, JsValue> {
    let mut scene = Scene::default();
    let main = el(doc, "main", "")?;
    append(
        &main,
        &[
            &hero(doc, config, &mut scene)?,
            &program(doc, config, &mut scene)?,
            &why(doc, config, &mut scene)?,
            &apply(doc, config, &mut scene)?,
        ],
    )?;

    let footer = el(doc, "footer", "site-footer compact")?;
    footer.append_child(&text(doc, "p", "copyright", copy::FOOTER)?)?;
    append(body, &[&main, &footer])?;

    Ok(PageDom {
        scene,
        scroll: None,
    })
}

fn hero(
    doc: &Document,
    config: &MotionConfig,
    scene: &mut Scene<HtmlElement>,
) -> Result<HtmlElement, JsValue> {
    let section = el(doc, "section", "hero")?;

    let header = el(doc, "header", "page-header")?;
    header.append_child(&link(doc, "back-link", anchors::HOME_PAGE, copy::BACK_LINK)?)?;

    let card = el(doc, "div", "hero-card")?;
    let ctas = el(doc, "div", "hero-ctas")?;
    for cta in &copy::HERO_CTAS {
        let class = if cta.primary {
            "cta cta-primary"
        } else {
            "cta cta-secondary"
        };
        ctas.append_child(&link(doc, class, cta.href, cta.label)?)?;
    }
    append(
        &card,
        &[
            &eyebrow(doc, None, copy::HERO_HEADING)?,
            &text(doc, "h2", "hero-headline", copy::HERO_HEADLINE)?,
            &text(doc, "p", "hero-body", copy::HERO_BODY)?,
            &ctas,
        ],
    )?;
    append(&section, &[&header, &card])?;

    let mut slots = SectionSlots::new(plan::internship::hero(config), Some(section.clone()));
    slots.extras = vec![card];
    scene.sections.push(slots);
    Ok(section)
}

fn program(
    doc: &Document,
    config: &MotionConfig,
    scene: &mut Scene<HtmlElement>,
) -> Result<HtmlElement, JsValue> {
    let section = el(doc, "section", "section")?;
    section.set_id(anchors::PROGRAM);

    let header = el(doc, "div", "section-header")?;
    append(
        &header,
        &[
            &eyebrow(doc, Some(copy::PROGRAM_ICON), copy::PROGRAM_HEADING)?,
            &text(doc, "p", "section-intro", copy::PROGRAM_INTRO)?,
        ],
    )?;

    let grid = el(doc, "div", "benefit-grid")?;
    let mut items = Vec::with_capacity(copy::BENEFITS.len());
    for benefit in &copy::BENEFITS {
        let card = el(doc, "div", "benefit-card")?;
        append(
            &card,
            &[
                &decoration(doc, "span", "icon", benefit.icon)?,
                &text(doc, "h3", "", benefit.title)?,
                &text(doc, "p", "", benefit.description)?,
            ],
        )?;
        grid.append_child(&card)?;
        items.push(card);
    }

    let topics = el(doc, "div", "topics-card")?;
    let columns = el(doc, "div", "topic-columns")?;
    for group in &copy::TOPICS {
        let column = el(doc, "div", "")?;
        append(
            &column,
            &[
                &text(doc, "h4", "detail-heading", group.heading)?,
                &list(doc, "topics", "\u{2192}", group.topics)?,
            ],
        )?;
        columns.append_child(&column)?;
    }
    append(
        &topics,
        &[&text(doc, "h3", "", copy::TOPICS_HEADING)?, &columns],
    )?;

    append(&section, &[&header, &grid, &topics])?;

    let mut slots = SectionSlots::new(plan::internship::program(config), Some(section.clone()));
    slots.header = Some(header);
    slots.container = Some(grid);
    slots.items = items;
    slots.extras = vec![topics];
    scene.sections.push(slots);
    Ok(section)
}

fn why(
    doc: &Document,
    config: &MotionConfig,
    scene: &mut Scene<HtmlElement>,
) -> Result<HtmlElement, JsValue> {
    let section = el(doc, "section", "section")?;
    let panel = el(doc, "div", "why-card")?;
    panel.append_child(&eyebrow(doc, Some(copy::WHY_ICON), copy::WHY_HEADING)?)?;
    for (i, reason) in copy::REASONS.iter().enumerate() {
        if i > 0 {
            panel.append_child(&decoration(doc, "div", "divider", "")?)?;
        }
        let block = el(doc, "div", "reason")?;
        append(
            &block,
            &[&text(doc, "h3", "", reason.title)?, &text(doc, "p", "", reason.body)?],
        )?;
        panel.append_child(&block)?;
    }
    section.append_child(&panel)?;

    let mut slots = SectionSlots::new(plan::internship::why(config), Some(section.clone()));
    slots.extras = vec![panel];
    scene.sections.push(slots);
    Ok(section)
}

fn apply(
    doc: &Document,
    config: &MotionConfig,
    scene: &mut Scene<HtmlElement>,
) -> Result<HtmlElement, JsValue> {
    let section = el(doc, "section", "section")?;
    section.set_id(anchors::APPLY);

    let card = el(doc, "div", "apply-card")?;
    let ctas = el(doc, "div", "contact-ctas")?;
    let email = link(
        doc,
        "cta cta-primary",
        &CONTACT.mailto_with_subject(copy::APPLY_SUBJECT),
        copy::APPLY_EMAIL_LABEL,
    )?;
    email.append_child(&decoration(doc, "span", "", " \u{2192}")?)?;
    append(
        &ctas,
        &[
            &email,
            &link(
                doc,
                "cta cta-outline",
                &format!("{}#{}", anchors::HOME_PAGE, anchors::CONTACT),
                copy::CONTACT_LINK_LABEL,
            )?,
        ],
    )?;

    let questions = text(doc, "p", "questions", copy::QUESTIONS)?;
    questions.append_child(&doc.create_text_node(" "))?;
    questions.append_child(&link(doc, "", &CONTACT.mailto(), CONTACT.email)?)?;

    append(
        &card,
        &[
            &decoration(doc, "span", "icon", copy::APPLY_ICON)?,
            &text(doc, "h2", "contact-headline", copy::APPLY_HEADLINE)?,
            &text(doc, "p", "contact-body", copy::APPLY_BODY)?,
            &ctas,
            &questions,
        ],
    )?;
    section.append_child(&card)?;

    let mut slots = SectionSlots::new(plan::internship::apply(config), Some(section.clone()));
    slots.extras = vec![card];
    scene.sections.push(slots);
    Ok(section)
}
