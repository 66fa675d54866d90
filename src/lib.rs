// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Argument Vector Demo
//!
//! This crate backs `cfgecho`, a deliberately small utility that reports
//! which config file was named on the command line. It exists to show how a
//! process receives and inspects its argument vector, and to give build and
//! run scripts something trivial to compile and execute.
//!
//! # Quick Start
//!
//! ```
//! use cfgecho::Invocation;
//!
//! let invocation = Invocation::from_args(["cfgecho", "config.yaml"]);
//! assert_eq!(
//!     "The config file passed is: config.yaml",
//!     invocation.to_string(),
//! );
//! ```
//!
//! The binary feeds [std::env::args_os] to [Invocation::from_args] and
//! prints the result. That is the whole program.

use std::ffi::OsStr;
use std::fmt;

/// The interpretation of a process argument vector.
///
/// The vector's first element is the program's own invocation path and
/// carries no meaning here. When exactly one user argument follows it, that
/// argument is the config file path, taken verbatim. Every other shape,
/// zero user arguments as well as two or more, is
/// [Default](Invocation::Default).
#[derive(Clone, Debug, PartialEq)]
pub enum Invocation {
    /// Exactly one user argument: the config file path, uninterpreted.
    /// It is never opened, read, or validated, and option-looking strings
    /// such as `--help` are config file paths like any other.
    ConfigFile(String),

    /// Any other argument count.
    Default,
}

impl Invocation {
    /// Classifies an argument vector.
    ///
    /// Accepts anything that iterates over string-like items, which
    /// includes [std::env::args_os] and plain string arrays. Non-UTF-8
    /// bytes in the config argument are replaced with the Unicode
    /// replacement character (�).
    ///
    /// The count check is exact: a vector carrying two or more user
    /// arguments falls through to [Default](Invocation::Default), the same
    /// as a vector carrying none. So does an empty vector with no program
    /// path at all.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        let mut args = args.into_iter();
        let _program = args.next();

        match (args.next(), args.next()) {
            (Some(config), None) => {
                Self::ConfigFile(config.as_ref().to_string_lossy().into_owned())
            }
            _ => Self::Default,
        }
    }

    /// Returns the config file path, if one was passed.
    pub fn config_file(&self) -> Option<&str> {
        match self {
            Self::ConfigFile(path) => Some(path),
            Self::Default => None,
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConfigFile(path) => write!(f, "The config file passed is: {path}"),
            // "Refering" [sic]
            Self::Default => write!(
                f,
                "Refering to a default case because there were no arguments passed!"
            ),
        }
    }
}
