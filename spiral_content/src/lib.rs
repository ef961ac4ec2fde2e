// Copyright 2026 the Spiral Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static content for the Spiral Lab site.
//!
//! The records in this crate are immutable and `'static`. The site renders
//! them as they are; nothing here is validated or transformed at run time.
//!
//! - [`services`]: the four service descriptors shown as expandable cards.
//! - [`case_studies`]: the case-study cards.
//! - [`contact`]: contact details and social links.
//! - [`home`] and [`internship`]: page copy.
//! - [`anchors`]: in-page navigation targets.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod anchors;
pub mod case_studies;
pub mod contact;
pub mod home;
pub mod internship;
pub mod services;

pub use case_studies::{CASE_STUDIES, CaseStudy, Impact};
pub use contact::{CONTACT, ContactInfo, SocialLink};
pub use services::{Metric, SERVICES, ServiceCard};
