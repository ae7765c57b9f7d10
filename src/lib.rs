// Copyright 2026 The sgml5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! SGML DTD modelling and a DTD-driven, lenient tag-inference parser.
//!
//! The crate has two halves: the [`dtd`] module models an SGML document
//! type definition (elements, content-model grammars, attribute
//! declarations, entities), and the [`parser`] module consumes a stream
//! of lexical events from an external tokenizer, using the DTD's
//! grammar to decide legal tag nesting and to synthesize omitted start
//! and end tags.

pub use crate::dtd::{ContentModel, Dtd, DtdError, DtdRegistry, Element, ElementKind};
pub use crate::interface::{ParseSink, Token, TokenSink};
pub use crate::parser::{Parser, ParserOpts};

mod macros;

mod util {
    pub mod str;
}

pub mod dtd;
pub mod interface;
pub mod parser;

/// Re-export the tendril crate.
pub use tendril;
