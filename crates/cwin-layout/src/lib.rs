#![forbid(unsafe_code)]

//! Candidate bar geometry for cwin.
//!
//! # Role in cwin
//! `cwin-layout` owns the numbers: where each candidate cell sits, which
//! cell a touch lands in, and how many candidates the floating window takes
//! before the bar resumes. It measures through `cwin-text` and never draws.
//!
//! # This crate provides
//! - [`CandidatePage`]: the visible slice of an engine snapshot.
//! - [`layout`]: page → [`CandidateLayout`] (cells + content size).
//! - [`HitTester`] / [`CandidateLayout::hit_test`]: point → [`CellTarget`].
//! - [`calc_start_num`] and [`BarPager`] for pagination.

pub mod bar;
pub mod cell;
pub mod hit;
pub mod page;
pub mod pagination;

pub use bar::{CandidateLayout, layout};
pub use cell::{CellGeometry, CellTarget, PAGE_DOWN_ARROW, PAGE_UP_ARROW};
pub use hit::{DEFAULT_VERTICAL_INSET, HitResult, HitTester};
pub use page::CandidatePage;
pub use pagination::{BarPager, calc_start_num};
