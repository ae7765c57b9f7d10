// Copyright 2026 The sgml5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Attribute declarations.
//!
//! Declarations are owned by their element as a `Vec` in declaration
//! order; nothing is shared between elements.

/// The declared type of an attribute value.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AttrKind {
    Cdata,
    Entity,
    Entities,
    Id,
    Idref,
    Idrefs,
    Name,
    Names,
    Nmtoken,
    Nmtokens,
    Notation,
    Number,
    Numbers,
    Nutoken,
    Nutokens,
}

impl AttrKind {
    pub(crate) fn from_code(code: u8) -> Option<AttrKind> {
        Some(match code {
            1 => AttrKind::Cdata,
            2 => AttrKind::Entity,
            3 => AttrKind::Entities,
            4 => AttrKind::Id,
            5 => AttrKind::Idref,
            6 => AttrKind::Idrefs,
            7 => AttrKind::Name,
            8 => AttrKind::Names,
            9 => AttrKind::Nmtoken,
            10 => AttrKind::Nmtokens,
            11 => AttrKind::Notation,
            12 => AttrKind::Number,
            13 => AttrKind::Numbers,
            14 => AttrKind::Nutoken,
            15 => AttrKind::Nutokens,
            _ => return None,
        })
    }
}

/// Presence requirements for an attribute.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum AttrModifier {
    /// `#REQUIRED`
    Required,
    /// `#IMPLIED`
    Implied,
    /// `#FIXED` - must equal the declared default.
    Fixed,
    /// `#CURRENT`
    Current,
    /// `#CONREF`
    Conref,
}

impl AttrModifier {
    pub(crate) fn from_code(code: u8) -> Option<AttrModifier> {
        Some(match code {
            1 => AttrModifier::Required,
            2 => AttrModifier::Implied,
            3 => AttrModifier::Fixed,
            4 => AttrModifier::Current,
            5 => AttrModifier::Conref,
            _ => return None,
        })
    }
}

/// One declared attribute of an element.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AttributeDecl {
    pub name: String,
    pub kind: AttrKind,
    pub modifier: AttrModifier,
    /// Default value literal, when declared.
    pub value: Option<String>,
    /// Ordered enumeration of the allowed value literals, when the
    /// declaration restricts the value to a closed set.
    pub values: Option<Vec<String>>,
}

impl AttributeDecl {
    /// `values` is the pipe-delimited enumeration string from the DTD
    /// source, `"a|b|c"`. An empty string declares an empty (never
    /// satisfiable) enumeration; `None` declares no enumeration.
    pub fn new(
        name: &str,
        kind: AttrKind,
        modifier: AttrModifier,
        value: Option<&str>,
        values: Option<&str>,
    ) -> AttributeDecl {
        AttributeDecl {
            name: name.to_owned(),
            kind,
            modifier,
            value: value.map(str::to_owned),
            values: values.map(split_values),
        }
    }

    /// Does the enumeration (if any) allow this literal?
    pub fn allows(&self, literal: &str) -> bool {
        match self.values {
            Some(ref values) => values.iter().any(|v| v == literal),
            None => true,
        }
    }
}

fn split_values(values: &str) -> Vec<String> {
    if values.is_empty() {
        return vec![];
    }
    values.split('|').map(|v| v.trim().to_owned()).collect()
}

#[cfg(test)]
mod test {
    use super::{AttrKind, AttrModifier, AttributeDecl};

    #[test]
    fn splits_pipe_delimited_values() {
        let decl = AttributeDecl::new(
            "align",
            AttrKind::Nmtoken,
            AttrModifier::Implied,
            None,
            Some("left|center|right"),
        );
        assert_eq!(
            decl.values.as_deref(),
            Some(&["left".to_owned(), "center".into(), "right".into()][..])
        );
        assert!(decl.allows("center"));
        assert!(!decl.allows("justify"));
    }

    #[test]
    fn empty_and_absent_enumerations_differ() {
        let empty = AttributeDecl::new("a", AttrKind::Cdata, AttrModifier::Implied, None, Some(""));
        assert_eq!(empty.values.as_deref(), Some(&[][..]));
        assert!(!empty.allows("x"));

        let open = AttributeDecl::new("a", AttrKind::Cdata, AttrModifier::Implied, None, None);
        assert_eq!(open.values, None);
        assert!(open.allows("x"));
    }
}
