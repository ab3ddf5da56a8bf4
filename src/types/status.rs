// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Framework point status codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Status of a framework point, mapped from the protocol's `curStatus` tag.
///
/// The protocol reports status as one of exactly five strings. The match is
/// case-sensitive and anything outside the set is an error, never a default.
///
/// # Examples
///
/// ```
/// use haymap_lib::types::Status;
///
/// assert_eq!("fault".parse::<Status>().unwrap(), Status::Fault);
/// assert_eq!("unknown".parse::<Status>().unwrap(), Status::Null);
/// assert!("OK".parse::<Status>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// The point is healthy.
    Ok,
    /// The point is in fault.
    Fault,
    /// Communication with the point is down.
    Down,
    /// The point is disabled.
    Disabled,
    /// Status is unknown; the framework's null status.
    Null,
}

impl Status {
    /// Returns the framework-side status name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Fault => "fault",
            Self::Down => "down",
            Self::Disabled => "disabled",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(Self::Ok),
            "fault" => Ok(Self::Fault),
            "down" => Ok(Self::Down),
            "disabled" => Ok(Self::Disabled),
            "unknown" => Ok(Self::Null),
            _ => Err(ConvertError::UnrecognizedStatus(s.to_string())),
        }
    }
}
