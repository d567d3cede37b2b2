//! Page sections, top to bottom.

mod footer;
mod intro;
mod lessons;

pub(crate) use footer::Footer;
pub(crate) use intro::{Hero, Highlights, QuickStart};
pub(crate) use lessons::{FeaturedSection, ModuleSection};
