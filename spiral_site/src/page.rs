// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page selection.

use web_sys::HtmlElement;

use crate::motion::Scene;

/// The pages the site serves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Page {
    /// `index.html`: hero, services, case studies, contact, footer.
    #[default]
    Home,
    /// `internship.html`: the internship program.
    Internship,
}

impl Page {
    /// Attribute on `<body>` naming the page.
    pub(crate) const ATTRIBUTE: &'static str = "data-page";

    /// Picks the page from the body attribute. Missing or unknown values
    /// select [`Page::Home`].
    pub(crate) fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("internship") => Self::Internship,
            _ => Self::Home,
        }
    }
}

/// A page's elements, once built.
#[derive(Debug)]
pub(crate) struct PageDom {
    pub(crate) scene: Scene<HtmlElement>,
    /// The scroll indicator and the element it scrolls to.
    pub(crate) scroll: Option<(HtmlElement, HtmlElement)>,
}
