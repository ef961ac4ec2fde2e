// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact details.

use alloc::format;
use alloc::string::String;

/// A link to an external profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    /// Platform name, also the link text.
    pub platform: &'static str,
    /// Absolute profile URL.
    pub url: &'static str,
    /// Accessible name of the link.
    pub aria_label: &'static str,
}

/// How to reach the company.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    /// Contact address.
    pub email: &'static str,
    /// Phone number in international format.
    pub phone: &'static str,
    /// City and country.
    pub location: &'static str,
    /// External profiles.
    pub social_links: &'static [SocialLink],
}

impl ContactInfo {
    /// Returns a `mailto:` link to [`email`](Self::email).
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Returns a `mailto:` link with a prefilled subject line.
    ///
    /// Spaces in `subject` are percent-encoded; nothing else is.
    #[must_use]
    pub fn mailto_with_subject(&self, subject: &str) -> String {
        format!("mailto:{}?subject={}", self.email, subject.replace(' ', "%20"))
    }

    /// Returns a `tel:` link to [`phone`](Self::phone).
    #[must_use]
    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

/// The company's contact details.
pub const CONTACT: ContactInfo = ContactInfo {
    email: "jawwad@spirallab.co",
    phone: "+92-304-548-0586",
    location: "Lahore, Punjab, Pakistan",
    social_links: &[
        SocialLink {
            platform: "LinkedIn",
            url: "https://www.linkedin.com/company/spiral-lab1/",
            aria_label: "Visit Spiral Lab on LinkedIn",
        },
        SocialLink {
            platform: "Twitter",
            url: "https://x.com/spirallab1",
            aria_label: "Follow Spiral Lab on Twitter",
        },
        SocialLink {
            platform: "Facebook",
            url: "https://www.facebook.com/profile.php?id=61579846557371",
            aria_label: "Follow Spiral Lab on Facebook",
        },
        SocialLink {
            platform: "Instagram",
            url: "https://www.instagram.com/spirallab.official/",
            aria_label: "Follow Spiral Lab on Instagram",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links() {
        assert_eq!(CONTACT.mailto(), "mailto:jawwad@spirallab.co");
        assert_eq!(
            CONTACT.mailto_with_subject("Schedule a Call"),
            "mailto:jawwad@spirallab.co?subject=Schedule%20a%20Call"
        );
        assert_eq!(CONTACT.tel(), "tel:+92-304-548-0586");
    }

    #[test]
    fn social_links_are_absolute_and_labelled() {
        for link in CONTACT.social_links {
            assert!(link.url.starts_with("https://"), "{} url", link.platform);
            assert!(link.aria_label.contains(link.platform), "{} label", link.platform);
        }
    }
}
