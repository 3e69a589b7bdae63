//! Typed report options
//!
//! Option values arrive as strings from the command line and from
//! `.pkg-size-report.toml`; parsing them here means the report builder only
//! ever sees valid values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

fn invalid_option<T: fmt::Display>(option: &str, value: &str, valid: &[T]) -> ReportError {
    ReportError::InvalidOption {
        option: option.to_string(),
        value: value.to_string(),
        valid_values: valid.iter().map(ToString::to_string).collect(),
    }
}

/// What to do with files whose size did not change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnchangedFilesMode {
    /// List them in the main table
    Show,
    /// Leave them out of the report (their sizes still count in totals)
    Hide,
    /// List them in a collapsible "Unchanged files" table
    #[default]
    Collapse,
}

impl UnchangedFilesMode {
    /// All modes, in documentation order
    pub const ALL: [Self; 3] = [Self::Show, Self::Hide, Self::Collapse];

    /// Name as written in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Hide => "hide",
            Self::Collapse => "collapse",
        }
    }
}

impl fmt::Display for UnchangedFilesMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnchangedFilesMode {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| invalid_option("unchanged-files", s, &Self::ALL))
    }
}

/// Column the file rows are ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    /// Size in the base snapshot
    BaseSize,
    /// Size in the head snapshot
    HeadSize,
    /// Head size minus base size
    #[default]
    Delta,
    /// File path only
    Path,
}

impl SortField {
    /// All fields, in documentation order
    pub const ALL: [Self; 4] = [Self::BaseSize, Self::HeadSize, Self::Delta, Self::Path];

    /// Name as written in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BaseSize => "base-size",
            Self::HeadSize => "head-size",
            Self::Delta => "delta",
            Self::Path => "path",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ReportError;

    /// Accepts kebab-case names plus the camelCase spellings `baseSize` and
    /// `headSize` used by existing workflow configurations
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "baseSize" => Ok(Self::BaseSize),
            "headSize" => Ok(Self::HeadSize),
            _ => Self::ALL
                .into_iter()
                .find(|field| field.as_str() == s)
                .ok_or_else(|| invalid_option("sort-by", s, &Self::ALL)),
        }
    }
}

/// Direction of the file ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Exact reverse of descending order, ties included
    Asc,
    /// Largest first, ties broken by ascending path
    #[default]
    Desc,
}

impl SortOrder {
    /// All orders
    pub const ALL: [Self; 2] = [Self::Asc, Self::Desc];

    /// Name as written in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| invalid_option("sort-order", s, &Self::ALL))
    }
}
