// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Enum tag translation between the two naming schemes.
//!
//! Framework enum tags are not always legal protocol identifiers (and vice
//! versa), so the station supplies a codec that rewrites tags on the way out
//! and back in. Conversion functions take the codec as a collaborator; the
//! [`Identity`] codec passes tags through untouched.

/// Translates enum tags between framework and protocol naming.
///
/// Implementations must be inverse pairs: `decode(encode(tag)) == tag` for
/// every tag the station declares.
pub trait EnumTagCodec {
    /// Rewrites a framework tag for protocol emission.
    fn encode(&self, tag: &str) -> String;

    /// Rewrites a protocol-side tag back to the framework form.
    fn decode(&self, tag: &str) -> String;
}

/// The identity codec: tags pass through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl EnumTagCodec for Identity {
    fn encode(&self, tag: &str) -> String {
        tag.to_string()
    }

    fn decode(&self, tag: &str) -> String {
        tag.to_string()
    }
}
