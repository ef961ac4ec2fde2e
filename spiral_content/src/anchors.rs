// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element ids used as in-page navigation targets.

/// The services section on the home page.
pub const SERVICES: &str = "services";
/// The case-studies section on the home page.
pub const CASE_STUDIES: &str = "case-studies";
/// The contact section on the home page.
pub const CONTACT: &str = "contact";
/// The main landmark, target of the skip link.
pub const MAIN_CONTENT: &str = "main-content";
/// The program overview on the internship page.
pub const PROGRAM: &str = "program";
/// The application section on the internship page.
pub const APPLY: &str = "apply";

/// Every anchor, in page order.
pub const ALL: [&str; 6] = [MAIN_CONTENT, SERVICES, CASE_STUDIES, CONTACT, PROGRAM, APPLY];

/// The secondary route.
pub const INTERNSHIP_PAGE: &str = "internship.html";
/// The home route.
pub const HOME_PAGE: &str = "index.html";

/// Formats `id` as a fragment link, e.g. `#services`.
#[must_use]
pub fn fragment(id: &str) -> alloc::string::String {
    alloc::format!("#{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            assert!(!ALL[i + 1..].contains(a), "duplicate anchor {a}");
        }
    }

    #[test]
    fn fragments() {
        assert_eq!(fragment(SERVICES), "#services");
        assert_eq!(fragment(CASE_STUDIES), "#case-studies");
    }
}
