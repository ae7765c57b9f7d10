// Copyright 2026 The sgml5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The contracts at the crate's two seams: the token stream fed in by
//! an external tokenizer ([`Token`], [`TokenSink`]) and the structural
//! events the parser produces for its consumer ([`ParseSink`]).

use std::borrow::Cow;

use tendril::StrTendril;

use crate::dtd::ElementId;

pub use self::TagKind::{EndTag, StartTag};
pub use self::Token::{CharacterTokens, CommentToken, DeclarationToken, EOFToken, TagToken};

/// A tag attribute as delivered by the tokenizer: a raw name and its
/// (already entity-decoded) value.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Attribute {
    pub name: String,
    pub value: StrTendril,
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum TagKind {
    StartTag,
    EndTag,
}

/// A tag token.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Tag {
    pub kind: TagKind,
    pub name: String,
    pub self_closing: bool,
    pub attrs: Vec<Attribute>,
}

impl Tag {
    /// A start tag synthesized by the parser when the grammar implies
    /// an omitted tag. Carries no attributes.
    pub fn implied(name: &str) -> Tag {
        Tag {
            kind: StartTag,
            name: name.to_owned(),
            self_closing: false,
            attrs: vec![],
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<StrTendril> {
        self.attrs
            .iter()
            .find(|attribute| attribute.name.eq_ignore_ascii_case(name))
            .map(|attribute| attribute.value.clone())
    }
}

/// A lexical event from the external tokenizer.
///
/// Source positions are carried out-of-band as the line number passed
/// to [`TokenSink::process_token`].
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Token {
    TagToken(Tag),
    CommentToken(StrTendril),
    CharacterTokens(StrTendril),
    /// A markup declaration (`<!...>`), passed through undigested.
    DeclarationToken(StrTendril),
    EOFToken,
}

/// Types which can receive tokens from the tokenizer.
pub trait TokenSink {
    /// Process a token.
    fn process_token(&self, token: Token, line_number: u64);

    /// Signal that tokenization reached the end of the input.
    fn end(&self) {}
}

/// Consumer of the parser's structural events.
///
/// The parser resolves raw tags against the DTD before forwarding
/// them, so every callback carries the [`ElementId`] of the resolved
/// element. `implied` marks tags the source never contained: start or
/// end tags inserted because the grammar made them inferable.
pub trait ParseSink {
    /// A start tag was opened. Implied start tags carry an empty
    /// attribute list.
    fn start_tag(&self, elem: ElementId, tag: &Tag, implied: bool);

    /// An open element was closed, explicitly or by inference.
    fn end_tag(&self, elem: ElementId, implied: bool);

    /// An element with EMPTY declared content (or a self-closed tag);
    /// it is never pushed on the open-element stack.
    fn empty_tag(&self, elem: ElementId, tag: &Tag);

    /// Character data.
    fn text(&self, text: &StrTendril);

    fn comment(&self, _text: &StrTendril) {}

    fn declaration(&self, _text: &StrTendril) {}

    /// A non-fatal grammar violation. Parsing always continues.
    fn parse_error(&self, _msg: Cow<'static, str>) {}

    /// Called whenever the tokenizer reports a new line number.
    fn set_current_line(&self, _line: u64) {}
}
