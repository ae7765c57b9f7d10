// Copyright 2026 The sgml5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! SGML content-model grammars.
//!
//! A content model is the grammar fragment that says which child
//! elements an element may contain and in what arrangement. The parser
//! only ever asks two questions of it: "which element must come first"
//! ([`ContentModel::first`]) and "may this element open the model"
//! ([`ContentModel::accepts`]); both are pure and side-effect-free.

use std::fmt;

use crate::dtd::{Dtd, DtdError, ElementId};

/// Repetition operator on a sub-model.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Occurrence {
    /// `*` - zero or more.
    ZeroOrMore,
    /// `+` - one or more.
    OneOrMore,
    /// `?` - zero or one.
    Optional,
}

impl Occurrence {
    pub fn as_char(self) -> char {
        match self {
            Occurrence::ZeroOrMore => '*',
            Occurrence::OneOrMore => '+',
            Occurrence::Optional => '?',
        }
    }
}

/// Binary combinator joining two sub-models.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Combinator {
    /// `,` - both, in order.
    Sequence,
    /// `|` - exactly one.
    Choice,
    /// `&` - both, in any order.
    All,
}

impl Combinator {
    pub fn as_char(self) -> char {
        match self {
            Combinator::Sequence => ',',
            Combinator::Choice => '|',
            Combinator::All => '&',
        }
    }
}

/// A content-model grammar node.
///
/// N-ary groups are encoded as right-leaning `Group` chains, so
/// `(a,b,c)` is `Group(Sequence, a, Group(Sequence, b, c))`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ContentModel {
    /// A reference to a single element.
    Leaf(ElementId),
    /// A repetition of a sub-model.
    Repeat(Occurrence, Box<ContentModel>),
    /// Two sub-models joined by a combinator.
    Group(Combinator, Box<ContentModel>, Box<ContentModel>),
}

impl ContentModel {
    pub fn leaf(elem: ElementId) -> ContentModel {
        ContentModel::Leaf(elem)
    }

    pub fn repeat(occurrence: Occurrence, content: ContentModel) -> ContentModel {
        ContentModel::Repeat(occurrence, Box::new(content))
    }

    pub fn group(combinator: Combinator, left: ContentModel, right: ContentModel) -> ContentModel {
        ContentModel::Group(combinator, Box::new(left), Box::new(right))
    }

    /// Build a right-leaning chain out of two or more operands.
    ///
    /// Used by the binary table reader and the built-in DTD tables,
    /// where groups arrive as flat operand lists.
    pub fn chain(
        combinator: Combinator,
        operands: Vec<ContentModel>,
    ) -> Result<ContentModel, DtdError> {
        let mut iter = operands.into_iter().rev();
        let last = iter
            .next()
            .ok_or(DtdError::Malformed("empty content-model group"))?;
        Ok(iter.fold(last, |acc, m| ContentModel::group(combinator, m, acc)))
    }

    /// The unique element that must appear first in any string derived
    /// from this model, or `None` when several first elements are
    /// possible or the model can match empty.
    ///
    /// A sequence with a nullable left operand answers `None` without
    /// examining the right operand; callers rely on that answer, so it
    /// is deliberately not refined here.
    pub fn first(&self) -> Option<ElementId> {
        match *self {
            ContentModel::Leaf(elem) => Some(elem),
            ContentModel::Repeat(Occurrence::OneOrMore, ref content) => content.first(),
            ContentModel::Repeat(_, _) => None,
            ContentModel::Group(Combinator::Sequence, ref left, _) => left.first(),
            ContentModel::Group(_, ref left, ref right) => {
                // Only a degenerate alternation where both branches
                // start with the same element has a unique first.
                let first = left.first();
                if first == right.first() {
                    first
                } else {
                    None
                }
            },
        }
    }

    /// Membership in the set of legal opening elements: may a string
    /// derived from this model start with `elem`?
    pub fn accepts(&self, elem: ElementId) -> bool {
        match *self {
            ContentModel::Leaf(e) => e == elem,
            ContentModel::Repeat(_, ref content) => content.accepts(elem),
            ContentModel::Group(Combinator::Sequence, ref left, ref right) => {
                left.accepts(elem) || (left.empty() && right.accepts(elem))
            },
            // For an and-group either operand may come first, so the
            // opening set is the same as an alternation's.
            ContentModel::Group(_, ref left, ref right) => {
                left.accepts(elem) || right.accepts(elem)
            },
        }
    }

    /// Can this model match the empty string?
    pub fn empty(&self) -> bool {
        match *self {
            ContentModel::Leaf(_) => false,
            ContentModel::Repeat(Occurrence::OneOrMore, ref content) => content.empty(),
            ContentModel::Repeat(_, _) => true,
            ContentModel::Group(Combinator::Sequence, ref left, ref right) => {
                left.empty() && right.empty()
            },
            ContentModel::Group(_, ref left, ref right) => left.empty() || right.empty(),
        }
    }

    /// Append every leaf element, in left-to-right recursive order.
    pub fn elements(&self, out: &mut Vec<ElementId>) {
        match *self {
            ContentModel::Leaf(elem) => out.push(elem),
            ContentModel::Repeat(_, ref content) => content.elements(out),
            ContentModel::Group(_, ref left, ref right) => {
                left.elements(out);
                right.elements(out);
            },
        }
    }

    /// Render the canonical SGML form of this model, resolving element
    /// names through `dtd`. Same-combinator chains flatten to `a,b,c`;
    /// repetitions and groups of a different combinator are
    /// parenthesized where they appear as operands.
    pub fn render(&self, dtd: &Dtd) -> String {
        let mut out = String::new();
        self.render_into(dtd, &mut out, None);
        out
    }

    /// `Display` adapter over [`ContentModel::render`].
    pub fn display<'a>(&'a self, dtd: &'a Dtd) -> DisplayModel<'a> {
        DisplayModel { model: self, dtd }
    }

    fn render_into(&self, dtd: &Dtd, out: &mut String, enclosing: Option<Combinator>) {
        match *self {
            ContentModel::Leaf(elem) => {
                out.push_str(&dtd.element_name(elem));
            },
            ContentModel::Repeat(occurrence, ref content) => {
                let parenthesize = enclosing.is_some();
                if parenthesize {
                    out.push('(');
                }
                match **content {
                    ContentModel::Leaf(_) => content.render_into(dtd, out, None),
                    _ => {
                        out.push('(');
                        content.render_into(dtd, out, None);
                        out.push(')');
                    },
                }
                out.push(occurrence.as_char());
                if parenthesize {
                    out.push(')');
                }
            },
            ContentModel::Group(combinator, ref left, ref right) => {
                let parenthesize = match enclosing {
                    Some(c) => c != combinator,
                    None => false,
                };
                if parenthesize {
                    out.push('(');
                }
                left.render_into(dtd, out, Some(combinator));
                out.push(combinator.as_char());
                // A right operand with the same combinator continues
                // the chain in place of a nested group.
                right.render_into(dtd, out, Some(combinator));
                if parenthesize {
                    out.push(')');
                }
            },
        }
    }
}

pub struct DisplayModel<'a> {
    model: &'a ContentModel,
    dtd: &'a Dtd,
}

impl fmt::Display for DisplayModel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.model.render(self.dtd))
    }
}

#[cfg(test)]
mod test {
    use super::{Combinator, ContentModel, Occurrence};

    fn seq(left: ContentModel, right: ContentModel) -> ContentModel {
        ContentModel::group(Combinator::Sequence, left, right)
    }

    #[test]
    fn leaf_first_is_itself() {
        let m = ContentModel::leaf(3);
        assert_eq!(m.first(), Some(3));
        assert!(!m.empty());
        assert!(m.accepts(3));
        assert!(!m.accepts(4));
    }

    #[test]
    fn star_is_nullable() {
        let m = ContentModel::repeat(Occurrence::ZeroOrMore, ContentModel::leaf(1));
        assert!(m.empty());
        assert_eq!(m.first(), None);
        assert!(m.accepts(1));
    }

    #[test]
    fn plus_is_not_nullable() {
        let m = ContentModel::repeat(Occurrence::OneOrMore, ContentModel::leaf(1));
        assert!(!m.empty());
        assert_eq!(m.first(), Some(1));
    }

    #[test]
    fn sequence_skips_nullable_left() {
        // (a? , b) accepts both a and b, but its unique first is None
        // because the nullable left operand is not looked past.
        let m = seq(
            ContentModel::repeat(Occurrence::Optional, ContentModel::leaf(1)),
            ContentModel::leaf(2),
        );
        assert_eq!(m.first(), None);
        assert!(m.accepts(1));
        assert!(m.accepts(2));
        assert!(!m.empty());
    }

    #[test]
    fn alternation_first_agrees_only_when_degenerate() {
        let m = ContentModel::group(
            Combinator::Choice,
            ContentModel::leaf(1),
            ContentModel::leaf(2),
        );
        assert_eq!(m.first(), None);
        let degenerate = ContentModel::group(
            Combinator::Choice,
            ContentModel::leaf(1),
            ContentModel::leaf(1),
        );
        assert_eq!(degenerate.first(), Some(1));
    }

    #[test]
    fn and_group_opens_with_either_side() {
        let m = ContentModel::group(
            Combinator::All,
            ContentModel::leaf(1),
            ContentModel::leaf(2),
        );
        assert!(m.accepts(1));
        assert!(m.accepts(2));
        assert!(!m.empty());
    }

    #[test]
    fn elements_in_declaration_order() {
        let m = seq(
            ContentModel::leaf(1),
            seq(ContentModel::leaf(2), ContentModel::leaf(3)),
        );
        let mut out = vec![];
        m.elements(&mut out);
        assert_eq!(out, [1, 2, 3]);
    }

    #[test]
    fn chain_builds_right_leaning_groups() {
        let m = ContentModel::chain(
            Combinator::Sequence,
            vec![
                ContentModel::leaf(1),
                ContentModel::leaf(2),
                ContentModel::leaf(3),
            ],
        )
        .unwrap();
        assert_eq!(
            m,
            seq(
                ContentModel::leaf(1),
                seq(ContentModel::leaf(2), ContentModel::leaf(3)),
            )
        );
        assert!(ContentModel::chain(Combinator::Choice, vec![]).is_err());
    }
}
