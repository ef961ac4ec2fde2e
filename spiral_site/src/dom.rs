// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element construction helpers.

use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// Creates a `<tag class="class">`.
pub(crate) fn el(doc: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let el: HtmlElement = doc.create_element(tag)?.unchecked_into();
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

/// Creates an element holding `text`.
pub(crate) fn text(
    doc: &Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<HtmlElement, JsValue> {
    let el = el(doc, tag, class)?;
    el.set_text_content(Some(text));
    Ok(el)
}

/// Creates an `<a>` to `href`.
pub(crate) fn link(
    doc: &Document,
    class: &str,
    href: &str,
    label: &str,
) -> Result<HtmlElement, JsValue> {
    let a = text(doc, "a", class, label)?;
    a.set_attribute("href", href)?;
    Ok(a)
}

/// Like [`link`], opening in a new tab.
pub(crate) fn external_link(
    doc: &Document,
    class: &str,
    href: &str,
    label: &str,
) -> Result<HtmlElement, JsValue> {
    let a = link(doc, class, href, label)?;
    a.set_attribute("target", "_blank")?;
    a.set_attribute("rel", "noopener noreferrer")?;
    Ok(a)
}

/// Creates an element hidden from assistive technology (icons, rules,
/// arrows).
pub(crate) fn decoration(
    doc: &Document,
    tag: &str,
    class: &str,
    content: &str,
) -> Result<HtmlElement, JsValue> {
    let el = text(doc, tag, class, content)?;
    el.set_attribute("aria-hidden", "true")?;
    Ok(el)
}

/// Creates a `<button type="button">`.
pub(crate) fn button(doc: &Document, class: &str, label: &str) -> Result<HtmlElement, JsValue> {
    let b = text(doc, "button", class, label)?;
    b.set_attribute("type", "button")?;
    Ok(b)
}

/// Appends `children` to `parent` in order.
pub(crate) fn append(parent: &Element, children: &[&HtmlElement]) -> Result<(), JsValue> {
    for child in children {
        parent.append_child(child)?;
    }
    Ok(())
}

/// The short accent rule under section headings.
pub(crate) fn rule(doc: &Document) -> Result<HtmlElement, JsValue> {
    decoration(doc, "div", "rule", "")
}

/// An `<h2>` eyebrow heading with an optional icon and the accent rule.
pub(crate) fn eyebrow(
    doc: &Document,
    icon: Option<&str>,
    heading: &str,
) -> Result<HtmlElement, JsValue> {
    let group = el(doc, "div", "eyebrow")?;
    if let Some(icon) = icon {
        group.append_child(&decoration(doc, "span", "icon", icon)?)?;
    }
    append(&group, &[&text(doc, "h2", "eyebrow-heading", heading)?, &rule(doc)?])?;
    Ok(group)
}

/// A `<ul>` with one `<li>` per entry, each led by a decorative marker.
pub(crate) fn list(
    doc: &Document,
    class: &str,
    marker: &str,
    entries: &[&str],
) -> Result<HtmlElement, JsValue> {
    let ul = el(doc, "ul", class)?;
    for entry in entries {
        let li = el(doc, "li", "")?;
        append(
            &li,
            &[&decoration(doc, "span", "marker", marker)?, &text(doc, "span", "", entry)?],
        )?;
        ul.append_child(&li)?;
    }
    Ok(ul)
}
