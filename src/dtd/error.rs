// Copyright 2026 The sgml5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

/// Errors raised while constructing or loading a DTD.
///
/// These are the synchronous, construction-time failures; grammar
/// violations found during parsing are reported through the sink's
/// non-fatal `parse_error` callback instead and never surface here.
#[derive(Debug, Error)]
pub enum DtdError {
    #[error("DTD name must be non-empty")]
    InvalidName,

    #[error("unsupported DTD table version {0}")]
    Version(u8),

    #[error("invalid content-model node code {0:#x}")]
    InvalidContentModel(u8),

    #[error("malformed DTD table: {0}")]
    Malformed(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
