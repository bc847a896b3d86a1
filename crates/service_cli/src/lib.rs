//! gyesan - command-line front end for the household calculators
//!
//! Parses arguments, loads `gyesan.toml`, runs one calculator from
//! `calc_models` and renders the result as a boxed table or JSON.
//!
//! # Commands
//!
//! - `gyesan bmi --height 170 --weight 65`
//! - `gyesan mortgage --principal 300,000,000 --rate 3.5 --years 30`
//! - `gyesan income-tax 50,000,000`
//! - `gyesan transfer --amount 1000 --bank kakao --compare`
//! - `gyesan time-diff --from 서울 --to London`
//! - `gyesan convert 33 평 m2`
//!
//! # Architecture
//!
//! The service layer on top of `calc_core` (primitives and math) and
//! `calc_models` (the calculators). [`commands::run`] builds a
//! [`output::Report`]; the binary only prints it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, Result};
