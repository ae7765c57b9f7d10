// Copyright 2026 The sgml5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Element symbols of a DTD.

use std::rc::Rc;

use crate::dtd::attribute::AttributeDecl;
use crate::dtd::content_model::ContentModel;

/// Index of an element in its DTD's table. Dense, assigned at
/// creation, stable for the DTD's lifetime. Index 0 is `#PCDATA`.
pub type ElementId = usize;

/// The declared content class of an element.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ElementKind {
    /// Auto-created placeholder for a name the DTD never declared.
    Unknown,
    Any,
    Cdata,
    Empty,
    Rcdata,
    /// Content constrained by a [`ContentModel`].
    Model,
    /// An arbitrary user code carried through unchanged.
    Other(u32),
}

/// A growable bit-set over element indices.
///
/// Bit `i` set in an element's exclusion set forbids element `i`
/// anywhere below it; in the inclusion set it permits element `i`
/// regardless of the content model.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementSet {
    bits: Vec<u64>,
}

impl ElementSet {
    pub fn new() -> ElementSet {
        ElementSet::default()
    }

    pub fn insert(&mut self, index: ElementId) {
        let word = index / 64;
        if word >= self.bits.len() {
            self.bits.resize(word + 1, 0);
        }
        self.bits[word] |= 1 << (index % 64);
    }

    pub fn contains(&self, index: ElementId) -> bool {
        match self.bits.get(index / 64) {
            Some(word) => word & (1 << (index % 64)) != 0,
            None => false,
        }
    }
}

impl FromIterator<ElementId> for ElementSet {
    fn from_iter<I: IntoIterator<Item = ElementId>>(iter: I) -> ElementSet {
        let mut set = ElementSet::new();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

/// A named grammar symbol of a DTD.
///
/// Elements are created and updated only through the owning [`Dtd`]'s
/// definition operations; the name is uppercased there for canonical
/// lookup.
///
/// [`Dtd`]: crate::dtd::Dtd
#[derive(Clone, Debug)]
pub struct Element {
    pub index: ElementId,
    pub name: String,
    pub kind: ElementKind,
    pub omit_start: bool,
    pub omit_end: bool,
    /// None when the kind carries no model (EMPTY, CDATA, ...).
    pub content: Option<Rc<ContentModel>>,
    pub attributes: Vec<AttributeDecl>,
    pub exclusions: Option<ElementSet>,
    pub inclusions: Option<ElementSet>,
    /// Opaque user payload.
    pub data: Option<String>,
}

impl Element {
    pub(crate) fn unknown(index: ElementId, name: String) -> Element {
        Element {
            index,
            name,
            kind: ElementKind::Unknown,
            omit_start: false,
            omit_end: false,
            content: None,
            attributes: vec![],
            exclusions: None,
            inclusions: None,
            data: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.kind == ElementKind::Empty
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDecl> {
        self.attributes
            .iter()
            .find(|decl| decl.name.eq_ignore_ascii_case(name))
    }

    /// The first declared attribute whose enumeration contains the
    /// given literal.
    pub fn attribute_by_value(&self, literal: &str) -> Option<&AttributeDecl> {
        self.attributes
            .iter()
            .find(|decl| decl.values.is_some() && decl.allows(literal))
    }
}

#[cfg(test)]
mod test {
    use super::{Element, ElementKind, ElementSet};

    #[test]
    fn set_growth_and_membership() {
        let mut set = ElementSet::new();
        assert!(!set.contains(0));
        set.insert(3);
        set.insert(130);
        assert!(set.contains(3));
        assert!(set.contains(130));
        assert!(!set.contains(64));
        assert!(!set.contains(1000));
    }

    #[test]
    fn is_empty_tracks_kind() {
        let mut e = Element::unknown(1, "BR".into());
        assert!(!e.is_empty());
        e.kind = ElementKind::Empty;
        assert!(e.is_empty());
    }
}
