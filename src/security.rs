// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Permission flags and the history-backed permission lookup.
//!
//! Most components expose their permission set directly. History
//! configurations are the exception: their effective permissions live on the
//! underlying history record, reached through a scoped connection to the
//! history database. The connection is an RAII guard, so it is released on
//! every exit path, error paths included. That lookup is also the one place
//! in this library that can block or fail on an external resource.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::component::Context;
use crate::error::HistoryError;

bitflags! {
    /// Permission flags for a component, split by privilege level.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Permissions: u8 {
        /// Operator-level read.
        const OPERATOR_READ = 1 << 0;
        /// Operator-level write.
        const OPERATOR_WRITE = 1 << 1;
        /// Operator-level invoke.
        const OPERATOR_INVOKE = 1 << 2;
        /// Admin-level read.
        const ADMIN_READ = 1 << 3;
        /// Admin-level write.
        const ADMIN_WRITE = 1 << 4;
        /// Admin-level invoke.
        const ADMIN_INVOKE = 1 << 5;

        /// All operator-level flags.
        const OPERATOR = Self::OPERATOR_READ.bits()
            | Self::OPERATOR_WRITE.bits()
            | Self::OPERATOR_INVOKE.bits();

        /// All admin-level flags.
        const ADMIN = Self::ADMIN_READ.bits()
            | Self::ADMIN_WRITE.bits()
            | Self::ADMIN_INVOKE.bits();

        /// Every flag.
        const ALL = Self::OPERATOR.bits() | Self::ADMIN.bits();
    }
}

/// Identifier of a history within the history space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryId(String);

impl HistoryId {
    /// Creates a history identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HistoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A history record resolved from the history database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    permissions: Permissions,
}

impl HistoryRecord {
    /// Creates a record carrying the given permission set.
    #[must_use]
    pub const fn new(permissions: Permissions) -> Self {
        Self { permissions }
    }

    /// The permission set effective for the given context.
    #[must_use]
    pub fn permissions(&self, _cx: &Context) -> Permissions {
        self.permissions
    }
}

/// An open, connection-scoped view into the history space.
///
/// Dropping the connection releases it; callers hold it only for the
/// duration of a lookup.
pub trait HistoryConnection {
    /// Resolves an identifier to its history record, if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Query`] when the lookup fails inside the
    /// database.
    fn find(&self, id: &HistoryId) -> Result<Option<HistoryRecord>, HistoryError>;
}

/// The history database collaborator.
pub trait HistoryDatabase {
    /// Opens a scoped connection.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Unavailable`] when the database cannot be
    /// reached. This is the only suspend/failure point in the library that
    /// callers may want to wrap with a timeout or retry.
    fn connect(&self, cx: &Context) -> Result<Box<dyn HistoryConnection + '_>, HistoryError>;
}

/// A component whose permissions can be checked.
pub trait Secured {
    /// The permission set read directly off the component.
    fn permissions(&self, cx: &Context) -> Permissions;

    /// The backing history identifier, for history-configuration objects.
    ///
    /// When this returns `Some`, permissions are resolved through the
    /// history database instead of [`Self::permissions`].
    fn history_id(&self) -> Option<&HistoryId> {
        None
    }
}

/// Resolves the effective permission set for a component.
///
/// History configurations go through the history database: the identifier is
/// resolved to a record and permissions are read off it, defaulting to the
/// empty set when no record exists. Every other component answers directly.
///
/// # Errors
///
/// Database errors propagate unchanged; there is no recovery strategy at
/// this layer.
pub fn resolve_permissions(
    subject: &dyn Secured,
    cx: &Context,
    db: &dyn HistoryDatabase,
) -> Result<Permissions, HistoryError> {
    if let Some(id) = subject.history_id() {
        // The connection guard drops on every exit path, including `?`.
        let conn = db.connect(cx)?;
        let perms = match conn.find(id)? {
            Some(record) => record.permissions(cx),
            None => Permissions::empty(),
        };
        tracing::debug!(history = %id, permissions = ?perms, "Resolved history-backed permissions");
        return Ok(perms);
    }
    Ok(subject.permissions(cx))
}

/// Checks whether the component may be read in this context.
///
/// Satisfied by either the operator-level or admin-level read flag.
///
/// # Errors
///
/// Propagates history database errors unchanged.
pub fn can_read(
    subject: &dyn Secured,
    cx: &Context,
    db: &dyn HistoryDatabase,
) -> Result<bool, HistoryError> {
    Ok(resolve_permissions(subject, cx, db)?
        .intersects(Permissions::OPERATOR_READ | Permissions::ADMIN_READ))
}

/// Checks whether the component may be written in this context.
///
/// # Errors
///
/// Propagates history database errors unchanged.
pub fn can_write(
    subject: &dyn Secured,
    cx: &Context,
    db: &dyn HistoryDatabase,
) -> Result<bool, HistoryError> {
    Ok(resolve_permissions(subject, cx, db)?
        .intersects(Permissions::OPERATOR_WRITE | Permissions::ADMIN_WRITE))
}

/// Checks whether the component's actions may be invoked in this context.
///
/// # Errors
///
/// Propagates history database errors unchanged.
pub fn can_invoke(
    subject: &dyn Secured,
    cx: &Context,
    db: &dyn HistoryDatabase,
) -> Result<bool, HistoryError> {
    Ok(resolve_permissions(subject, cx, db)?
        .intersects(Permissions::OPERATOR_INVOKE | Permissions::ADMIN_INVOKE))
}
