// Copyright 2026 The sgml5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The DTD aggregate: element, entity and attribute tables plus the
//! definition and lookup operations the parser drives.

use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use log::debug;

pub use self::attribute::{AttrKind, AttrModifier, AttributeDecl};
pub use self::content_model::{Combinator, ContentModel, Occurrence};
pub use self::element::{Element, ElementId, ElementKind, ElementSet};
pub use self::entity::Entity;
pub use self::error::DtdError;
pub use self::reader::FILE_VERSION;
pub use self::registry::DtdRegistry;

pub mod attribute;
pub mod content_model;
mod data;
pub mod element;
pub mod entity;
mod error;
mod reader;
pub mod registry;

/// Index of the `#PCDATA` pseudo-element, reserved at table slot 0.
pub const PCDATA: ElementId = 0;

/// An SGML document type definition.
///
/// Tables live behind `RefCell` so lookups that auto-vivify (an
/// unknown tag name creates an UNKNOWN element rather than failing)
/// work through `&self`, and a parser can share the DTD via `Rc`.
/// Single-threaded by construction; content-model queries themselves
/// are pure.
pub struct Dtd {
    pub name: String,
    elements: RefCell<Vec<Element>>,
    element_names: RefCell<HashMap<String, ElementId>>,
    entities: RefCell<HashMap<String, Entity>>,
    // Character code key for single-character general entities.
    entity_codes: RefCell<HashMap<u32, String>>,
}

impl Dtd {
    /// A DTD holding only the bootstrap tables: the `#RE`/`#RS`/
    /// `#SPACE` entities, the 14-symbol element set (placing `#PCDATA`
    /// at index 0) and the EMPTY `unknown` element.
    pub fn new(name: &str) -> Dtd {
        let dtd = Dtd {
            name: name.to_owned(),
            elements: RefCell::new(vec![]),
            element_names: RefCell::new(HashMap::new()),
            entities: RefCell::new(HashMap::new()),
            entity_codes: RefCell::new(HashMap::new()),
        };
        for elem in data::BOOTSTRAP_ELEMENTS {
            dtd.element_named(elem);
        }
        dtd.def_entity("#RE", entity::GENERAL, '\r');
        dtd.def_entity("#RS", entity::GENERAL, '\n');
        dtd.def_entity("#SPACE", entity::GENERAL, ' ');
        dtd.define_element("unknown", ElementKind::Empty, false, true, None, None, None, vec![]);
        dtd
    }

    /// [`Dtd::new`] plus the built-in named character entities
    /// (`amp`, `lt`, `nbsp`, the Latin-1 set). This is what the
    /// registry caches for a name it has never seen.
    pub fn bootstrap(name: &str) -> Dtd {
        let dtd = Dtd::new(name);
        for (name, c) in data::NAMED_ENTITIES.entries() {
            dtd.define_entity(name, entity::GENERAL | entity::class::CDATA, &c.to_string());
        }
        dtd
    }

    //§ element lookup

    pub fn element_count(&self) -> usize {
        self.elements.borrow().len()
    }

    /// Direct table access; an out-of-range index answers `None`,
    /// never panics.
    pub fn element(&self, index: ElementId) -> Option<Ref<'_, Element>> {
        Ref::filter_map(self.elements.borrow(), |elements| elements.get(index)).ok()
    }

    /// Canonical (uppercased) name of an element.
    pub fn element_name(&self, index: ElementId) -> String {
        match self.element(index) {
            Some(elem) => elem.name.clone(),
            None => format!("#{index}"),
        }
    }

    /// Probe the name table without creating anything.
    pub fn find_element(&self, name: &str) -> Option<ElementId> {
        self.element_names
            .borrow()
            .get(&name.to_ascii_uppercase())
            .copied()
    }

    /// Look up an element by name, auto-creating an UNKNOWN element
    /// for a name the DTD never declared. Idempotent: a second call
    /// with the same name returns the same index.
    pub fn element_named(&self, name: &str) -> ElementId {
        let canonical = name.to_ascii_uppercase();
        if let Some(&index) = self.element_names.borrow().get(&canonical) {
            return index;
        }
        let mut elements = self.elements.borrow_mut();
        let index = elements.len();
        debug!("auto-creating UNKNOWN element {canonical} at index {index}");
        elements.push(Element::unknown(index, canonical.clone()));
        self.element_names.borrow_mut().insert(canonical, index);
        index
    }

    /// The element's content model, shared without holding a table
    /// borrow.
    pub fn content_model(&self, index: ElementId) -> Option<Rc<ContentModel>> {
        self.element(index).and_then(|elem| elem.content.clone())
    }

    //§ element definition

    /// Resolve exclusion/inclusion name lists to bit-sets (auto-
    /// creating referenced elements as needed) and define the element.
    #[allow(clippy::too_many_arguments)]
    pub fn def_element(
        &self,
        name: &str,
        kind: ElementKind,
        omit_start: bool,
        omit_end: bool,
        content: Option<ContentModel>,
        exclusions: &[&str],
        inclusions: &[&str],
        attributes: Vec<AttributeDecl>,
    ) -> ElementId {
        let exclusions = self.resolve_set(exclusions);
        let inclusions = self.resolve_set(inclusions);
        self.define_element(
            name,
            kind,
            omit_start,
            omit_end,
            content.map(Rc::new),
            exclusions,
            inclusions,
            attributes,
        )
    }

    fn resolve_set(&self, names: &[&str]) -> Option<ElementSet> {
        if names.is_empty() {
            return None;
        }
        Some(names.iter().map(|name| self.element_named(name)).collect())
    }

    /// Define or redefine an element. Redefinition updates the
    /// existing table entry in place and keeps its index, so element
    /// identity is stable across redefinition.
    #[allow(clippy::too_many_arguments)]
    pub fn define_element(
        &self,
        name: &str,
        kind: ElementKind,
        omit_start: bool,
        omit_end: bool,
        content: Option<Rc<ContentModel>>,
        exclusions: Option<ElementSet>,
        inclusions: Option<ElementSet>,
        attributes: Vec<AttributeDecl>,
    ) -> ElementId {
        let index = self.element_named(name);
        let mut elements = self.elements.borrow_mut();
        let elem = &mut elements[index];
        if elem.kind != ElementKind::Unknown {
            debug!("redefining element {} in place", elem.name);
        }
        elem.kind = kind;
        elem.omit_start = omit_start;
        elem.omit_end = omit_end;
        elem.content = content;
        elem.exclusions = exclusions;
        elem.inclusions = inclusions;
        elem.attributes = attributes;
        index
    }

    /// Build the head of an attribute declaration list, splitting a
    /// pipe-delimited enumeration string, and prepend it to `next`.
    pub fn def_attribute_list(
        name: &str,
        kind: AttrKind,
        modifier: AttrModifier,
        value: Option<&str>,
        values: Option<&str>,
        next: Vec<AttributeDecl>,
    ) -> Vec<AttributeDecl> {
        let mut list = vec![AttributeDecl::new(name, kind, modifier, value, values)];
        list.extend(next);
        list
    }

    /// Replace the named element's attribute list, auto-creating the
    /// element if unknown.
    pub fn define_attributes(&self, element_name: &str, attributes: Vec<AttributeDecl>) {
        let index = self.element_named(element_name);
        self.elements.borrow_mut()[index].attributes = attributes;
    }

    //§ entities

    /// Register a single-character entity.
    pub fn def_entity(&self, name: &str, ty: u32, ch: char) {
        self.define_entity(name, ty, &ch.to_string());
    }

    /// Register or update an entity by name. On an existing name only
    /// the type bits change; the replacement text set at first
    /// definition is never overwritten. This mirrors the reference
    /// tables' observable behavior and is relied upon downstream.
    pub fn define_entity(&self, name: &str, ty: u32, data: &str) {
        let mut entities = self.entities.borrow_mut();
        if let Some(existing) = entities.get_mut(name) {
            debug!("entity {name} redefined: type bits updated, data kept");
            existing.update_type(ty);
            return;
        }
        let entity = Entity::new(name, ty, data);
        if entity.is_general() {
            let mut chars = data.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                self.entity_codes.borrow_mut().insert(c as u32, name.to_owned());
            }
        }
        entities.insert(name.to_owned(), entity);
    }

    pub fn entity(&self, name: &str) -> Option<Ref<'_, Entity>> {
        Ref::filter_map(self.entities.borrow(), |entities| entities.get(name)).ok()
    }

    /// Entity lookup by character code, for single-character general
    /// entities.
    pub fn entity_for_code(&self, code: u32) -> Option<Ref<'_, Entity>> {
        let name = self.entity_codes.borrow().get(&code).cloned()?;
        Ref::filter_map(self.entities.borrow(), |entities| entities.get(&name)).ok()
    }

    /// Resolve a reference of the form `"amp"` or `"#38"` to its
    /// replacement text.
    pub fn entity_text(&self, reference: &str) -> Option<String> {
        if let Some(digits) = reference.strip_prefix('#') {
            if let Ok(code) = digits.parse::<u32>() {
                return self.entity_for_code(code).map(|e| e.as_str().to_owned());
            }
        }
        self.entity(reference).map(|e| e.as_str().to_owned())
    }
}

impl fmt::Debug for Dtd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dtd")
            .field("name", &self.name)
            .field("elements", &self.element_count())
            .field("entities", &self.entities.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::{entity, ContentModel, Dtd, ElementKind, PCDATA};

    #[test]
    fn bootstrap_places_pcdata_first() {
        let dtd = Dtd::new("test");
        assert_eq!(dtd.find_element("#pcdata"), Some(PCDATA));
        assert_eq!(dtd.element(PCDATA).unwrap().name, "#PCDATA");
        assert!(dtd.find_element("html").is_some());
        assert!(dtd.entity("#SPACE").is_some());
        assert_eq!(dtd.entity("#SPACE").unwrap().as_str(), " ");
    }

    #[test]
    fn out_of_range_index_is_none() {
        let dtd = Dtd::new("test");
        assert!(dtd.element(10_000).is_none());
    }

    #[test]
    fn names_are_canonicalized_uppercase() {
        let dtd = Dtd::new("test");
        let id = dtd.element_named("Table");
        assert_eq!(dtd.find_element("TABLE"), Some(id));
        assert_eq!(dtd.element(id).unwrap().name, "TABLE");
    }

    #[test]
    fn redefinition_keeps_index() {
        let dtd = Dtd::new("test");
        let id = dtd.element_named("p");
        let redefined = dtd.def_element(
            "p",
            ElementKind::Model,
            false,
            true,
            Some(ContentModel::leaf(PCDATA)),
            &[],
            &[],
            vec![],
        );
        assert_eq!(id, redefined);
        assert_eq!(dtd.element(id).unwrap().kind, ElementKind::Model);
    }

    #[test]
    fn single_char_general_entities_get_code_keys() {
        let dtd = Dtd::bootstrap("test");
        assert_eq!(dtd.entity_for_code('&' as u32).unwrap().name, "amp");
        assert_eq!(dtd.entity_text("#38").as_deref(), Some("&"));
        assert_eq!(dtd.entity_text("nbsp").as_deref(), Some("\u{a0}"));
        assert_eq!(dtd.entity_text("nosuch"), None);
    }

    #[test]
    fn entity_code_key_requires_general_bit() {
        let dtd = Dtd::new("test");
        dtd.define_entity("pct", entity::PARAMETER | entity::class::CDATA, "%");
        assert!(dtd.entity_for_code('%' as u32).is_none());
    }
}
