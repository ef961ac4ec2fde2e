// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The home page.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use spiral_content::home::{self as copy, Cta, SectionIntro};
use spiral_content::{CASE_STUDIES, CONTACT, CaseStudy, SERVICES, ServiceCard, anchors};
use spiral_core::config::MotionConfig;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

use crate::dom::{append, button, decoration, el, external_link, eyebrow, link, list, text};
use crate::motion::{CardSlots, Scene, SectionSlots};
use crate::page::PageDom;
use crate::plan;

const ARROW_SVG: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 5v14M5 12l7 7 7-7"/></svg>"#;

/// Builds the home page into `body`.
///
/// The cursor indicators are created only when `cursor` is set.
pub(crate) fn build(
    doc: &Document,
    body: &HtmlElement,
    config: &MotionConfig,
    cursor: bool,
) -> Result<PageDom, JsValue> {
    let mut scene = Scene::default();

    body.append_child(&link(
        doc,
        "skip-link",
        &anchors::fragment(anchors::MAIN_CONTENT),
        copy::SKIP_LINK,
    )?)?;
    if cursor {
        let dot = decoration(doc, "div", "cursor-dot", "")?;
        let ring = decoration(doc, "div", "cursor-ring", "")?;
        append(body, &[&dot, &ring])?;
        scene.cursor = Some([dot, ring]);
    }

    let main = el(doc, "main", "")?;
    main.set_id(anchors::MAIN_CONTENT);
    let (hero, indicator) = hero(doc, &mut scene)?;
    let services = services(doc, config, &mut scene)?;
    append(
        &main,
        &[
            &hero,
            &services,
            &case_studies(doc, config, &mut scene)?,
            &contact(doc, config, &mut scene)?,
        ],
    )?;
    append(body, &[&main, &footer(doc, config, &mut scene)?])?;

    Ok(PageDom {
        scene,
        scroll: Some((indicator, services)),
    })
}

fn cta(doc: &Document, cta: &Cta) -> Result<HtmlElement, JsValue> {
    let class = if cta.primary {
        "cta cta-primary"
    } else {
        "cta cta-secondary"
    };
    link(doc, class, cta.href, cta.label)
}

/// The header block of a section: eyebrow heading and intro line.
pub(crate) fn intro(doc: &Document, intro: &SectionIntro) -> Result<HtmlElement, JsValue> {
    let header = el(doc, "div", "section-header")?;
    append(
        &header,
        &[
            &eyebrow(doc, intro.icon, intro.heading)?,
            &text(doc, "p", "section-intro", intro.intro)?,
        ],
    )?;
    Ok(header)
}

/// Returns the hero section and its scroll indicator.
fn hero(
    doc: &Document,
    scene: &mut Scene<HtmlElement>,
) -> Result<(HtmlElement, HtmlElement), JsValue> {
    let section = el(doc, "section", "hero")?;

    let header = el(doc, "header", "page-header")?;
    append(
        &header,
        &[
            &text(doc, "span", "footer-brand", copy::BRAND)?,
            &link(
                doc,
                "back-link",
                anchors::INTERNSHIP_PAGE,
                copy::INTERNSHIP_LINK,
            )?,
        ],
    )?;

    let card = el(doc, "div", "hero-card")?;
    let buttons = el(doc, "div", "hero-ctas")?;
    let mut items = Vec::with_capacity(copy::HERO_CTAS.len());
    for c in &copy::HERO_CTAS {
        let a = cta(doc, c)?;
        buttons.append_child(&a)?;
        items.push(a);
    }
    append(
        &card,
        &[
            &text(doc, "h1", "hero-headline", copy::HERO_HEADLINE)?,
            &text(doc, "p", "hero-body", copy::HERO_BODY)?,
            &buttons,
        ],
    )?;

    let indicator = button(doc, "scroll-indicator", "")?;
    indicator.set_attribute("aria-label", copy::SCROLL_ARIA_LABEL)?;
    let arrow = el(doc, "span", "scroll-arrow")?;
    arrow.set_attribute("aria-hidden", "true")?;
    arrow.set_inner_html(ARROW_SVG);
    append(
        &indicator,
        &[&text(doc, "span", "scroll-label", copy::SCROLL_LABEL)?, &arrow],
    )?;
    append(&section, &[&header, &card, &indicator])?;

    let mut slots = SectionSlots::new(plan::home::hero(), None);
    slots.container = Some(buttons);
    slots.items = items;
    slots.extras = vec![card, indicator.clone()];
    scene.sections.push(slots);
    scene.bob = Some(arrow);
    Ok((section, indicator))
}

fn services(
    doc: &Document,
    config: &MotionConfig,
    scene: &mut Scene<HtmlElement>,
) -> Result<HtmlElement, JsValue> {
    let section = el(doc, "section", "section")?;
    section.set_id(anchors::SERVICES);
    let header = intro(doc, &copy::SERVICES_INTRO)?;
    let list = el(doc, "div", "service-list")?;
    let mut items = Vec::with_capacity(SERVICES.len());
    for service in SERVICES {
        let (card, slots) = service_card(doc, service)?;
        list.append_child(&card)?;
        items.push(card);
        scene.cards.push(slots);
    }
    append(&section, &[&header, &list])?;

    let mut slots = SectionSlots::new(plan::home::services(config), Some(section.clone()));
    slots.header = Some(header);
    slots.container = Some(list);
    slots.items = items;
    scene.sections.push(slots);
    Ok(section)
}

fn service_card(
    doc: &Document,
    service: &ServiceCard,
) -> Result<(HtmlElement, CardSlots<HtmlElement>), JsValue> {
    let card = el(doc, "article", "service-card")?;

    let head = el(doc, "div", "card-head")?;
    let title = el(doc, "div", "card-title")?;
    append(
        &title,
        &[
            &text(doc, "span", "card-number", service.number)?,
            &text(doc, "h3", "", service.title)?,
        ],
    )?;
    let collapse = button(doc, "card-collapse", copy::card::COLLAPSE)?;
    collapse.set_attribute("aria-label", copy::card::COLLAPSE_ARIA_LABEL)?;
    append(&head, &[&title, &collapse])?;

    let details_id = format!("{}-details", service.id);
    let expand = button(doc, "card-expand", copy::card::EXPAND)?;
    expand.set_attribute("aria-expanded", "false")?;
    expand.set_attribute("aria-controls", &details_id)?;

    let content = el(doc, "div", "card-details")?;
    content.set_id(&details_id);
    content.append_child(&service_details(doc, service)?)?;

    append(
        &card,
        &[
            &head,
            &decoration(doc, "div", "card-rule", "")?,
            &text(doc, "p", "card-description", service.description)?,
            &expand,
            &content,
        ],
    )?;
    Ok((
        card,
        CardSlots {
            content,
            expand,
            collapse,
        },
    ))
}

fn service_details(doc: &Document, service: &ServiceCard) -> Result<HtmlElement, JsValue> {
    let inner = el(doc, "div", "card-details-inner")?;

    let metrics = el(doc, "div", "metrics")?;
    for metric in service.metrics {
        let cell = el(doc, "div", "metric")?;
        append(
            &cell,
            &[
                &text(doc, "div", "metric-value", metric.value)?,
                &text(doc, "div", "metric-label", metric.label)?,
                &text(doc, "div", "metric-description", metric.description)?,
            ],
        )?;
        metrics.append_child(&cell)?;
    }

    let stack = el(doc, "ul", "tags")?;
    for tech in service.tech_stack {
        stack.append_child(&text(doc, "li", "tag", tech)?)?;
    }

    let ctas = el(doc, "div", "card-ctas")?;
    for c in &copy::card::CTAS {
        ctas.append_child(&cta(doc, c)?)?;
    }

    append(
        &inner,
        &[
            &text(doc, "h4", "detail-heading", copy::card::CAPABILITIES)?,
            &list(doc, "capabilities", "\u{2192}", service.capabilities)?,
            &text(doc, "h4", "detail-heading", copy::card::METRICS)?,
            &metrics,
            &text(doc, "h4", "detail-heading", copy::card::TECH_STACK)?,
            &stack,
            &ctas,
        ],
    )?;
    Ok(inner)
}

fn case_studies(
    doc: &Document,
    config: &MotionConfig,
    scene: &mut Scene<HtmlElement>,
) -> Result<HtmlElement, JsValue> {
    let section = el(doc, "section", "section")?;
    section.set_id(anchors::CASE_STUDIES);
    let header = intro(doc, &copy::CASE_STUDIES_INTRO)?;
    let grid = el(doc, "div", "case-study-grid")?;
    let mut items = Vec::with_capacity(CASE_STUDIES.len());
    for study in CASE_STUDIES {
        let card = case_study_card(doc, study)?;
        grid.append_child(&card)?;
        items.push(card);
    }
    append(&section, &[&header, &grid])?;

    let mut slots = SectionSlots::new(plan::home::case_studies(config), Some(section.clone()));
    slots.header = Some(header);
    slots.container = Some(grid);
    slots.items = items;
    scene.sections.push(slots);
    Ok(section)
}

fn case_study_card(doc: &Document, study: &CaseStudy) -> Result<HtmlElement, JsValue> {
    let card = el(doc, "article", "case-study-card")?;

    let head = el(doc, "div", "card-title")?;
    append(
        &head,
        &[
            &text(doc, "span", "card-number", &format!("[{}]", study.number))?,
            &text(doc, "h3", "", study.title)?,
        ],
    )?;

    let impact = el(doc, "ul", "impact")?;
    for item in study.impact {
        let li = el(doc, "li", "")?;
        let line = el(doc, "span", "")?;
        append(&line, &[&text(doc, "strong", "", item.metric)?])?;
        line.append_child(&doc.create_text_node(&format!(" {}", item.description)))?;
        append(&li, &[&decoration(doc, "span", "marker", "\u{2022}")?, &line])?;
        impact.append_child(&li)?;
    }

    let details = link(doc, "details-link", study.link, copy::case_study::VIEW_DETAILS)?;
    details.append_child(&decoration(doc, "span", "", " \u{2192}")?)?;

    append(
        &card,
        &[
            &head,
            &text(doc, "p", "card-description", study.description)?,
            &text(doc, "h4", "detail-heading", copy::case_study::IMPACT)?,
            &impact,
            &text(doc, "h4", "detail-heading", copy::case_study::STACK)?,
            &text(doc, "p", "stack-line", &study.stack_line())?,
            &details,
        ],
    )?;
    Ok(card)
}

fn contact(
    doc: &Document,
    config: &MotionConfig,
    scene: &mut Scene<HtmlElement>,
) -> Result<HtmlElement, JsValue> {
    let section = el(doc, "section", "section")?;
    section.set_id(anchors::CONTACT);

    let block = el(doc, "div", "contact-card")?;
    let ctas = el(doc, "div", "contact-ctas")?;
    append(
        &ctas,
        &[
            &link(doc, "cta cta-primary", &CONTACT.mailto(), copy::CONTACT_START_LABEL)?,
            &link(
                doc,
                "cta cta-secondary",
                &CONTACT.mailto_with_subject(copy::SCHEDULE_SUBJECT),
                copy::SCHEDULE_SUBJECT,
            )?,
        ],
    )?;
    append(
        &block,
        &[
            &decoration(doc, "span", "icon", copy::CONTACT_ICON)?,
            &text(doc, "h2", "contact-headline", copy::CONTACT_HEADLINE)?,
            &text(doc, "p", "contact-body", copy::CONTACT_BODY)?,
            &ctas,
            &contact_details(doc)?,
            &social_links(doc)?,
        ],
    )?;
    section.append_child(&block)?;

    let mut slots = SectionSlots::new(plan::home::contact(config), Some(section.clone()));
    slots.extras = vec![block];
    scene.sections.push(slots);
    Ok(section)
}

fn contact_details(doc: &Document) -> Result<HtmlElement, JsValue> {
    let ul = el(doc, "ul", "contact-details")?;
    for item in [
        link(doc, "", &CONTACT.mailto(), CONTACT.email)?,
        link(doc, "", &CONTACT.tel(), CONTACT.phone)?,
        text(doc, "span", "", CONTACT.location)?,
    ] {
        let li = el(doc, "li", "")?;
        li.append_child(&item)?;
        ul.append_child(&li)?;
    }
    Ok(ul)
}

fn social_links(doc: &Document) -> Result<HtmlElement, JsValue> {
    let nav = el(doc, "nav", "social-links")?;
    nav.set_attribute("aria-label", "Social media")?;
    for social in CONTACT.social_links {
        let a = external_link(doc, "social-link", social.url, social.platform)?;
        a.set_attribute("aria-label", social.aria_label)?;
        nav.append_child(&a)?;
    }
    Ok(nav)
}

/// The footer root stays in the document as the lazy watch's target; its
/// body is mounted on reveal.
fn footer(
    doc: &Document,
    config: &MotionConfig,
    scene: &mut Scene<HtmlElement>,
) -> Result<HtmlElement, JsValue> {
    let footer = el(doc, "footer", "site-footer")?;
    let body = el(doc, "div", "footer-body")?;

    let brand = el(doc, "div", "")?;
    append(
        &brand,
        &[
            &text(doc, "h3", "footer-brand", copy::BRAND)?,
            &text(doc, "p", "footer-tagline", copy::FOOTER_TAGLINE)?,
        ],
    )?;

    let quick = el(doc, "div", "")?;
    let links = el(doc, "ul", "footer-links")?;
    for c in &copy::FOOTER_LINKS {
        let li = el(doc, "li", "")?;
        li.append_child(&link(doc, "", c.href, c.label)?)?;
        links.append_child(&li)?;
    }
    let internship = link(
        doc,
        "footer-internship",
        anchors::INTERNSHIP_PAGE,
        copy::FOOTER_INTERNSHIP_LINK,
    )?;
    internship.append_child(&decoration(doc, "span", "", " \u{2192}")?)?;
    let li = el(doc, "li", "")?;
    li.append_child(&internship)?;
    links.append_child(&li)?;
    append(
        &quick,
        &[&text(doc, "h4", "footer-heading", copy::FOOTER_QUICK_LINKS)?, &links],
    )?;

    let reach = el(doc, "div", "")?;
    append(
        &reach,
        &[
            &text(doc, "h4", "footer-heading", copy::FOOTER_CONTACT)?,
            &contact_details(doc)?,
        ],
    )?;

    let columns = el(doc, "div", "footer-columns")?;
    append(&columns, &[&brand, &quick, &reach])?;
    let bottom = el(doc, "div", "footer-bottom")?;
    append(
        &bottom,
        &[&social_links(doc)?, &text(doc, "p", "copyright", copy::COPYRIGHT)?],
    )?;
    append(&body, &[&columns, &bottom])?;
    footer.append_child(&body)?;

    let mut slots = SectionSlots::new(plan::home::footer(config), Some(footer.clone()));
    slots.mount = Some(body);
    scene.sections.push(slots);
    Ok(footer)
}

/// Sets `aria-expanded` on a card's expand trigger.
pub(crate) fn set_expanded(trigger: &Element, expanded: bool) -> Result<(), JsValue> {
    trigger.set_attribute("aria-expanded", if expanded { "true" } else { "false" })
}
