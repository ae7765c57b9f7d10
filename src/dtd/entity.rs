// Copyright 2026 The sgml5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Entity table entries.

/// Entity class codes, stored in the low bits of an entity's type.
pub mod class {
    pub const CDATA: u32 = 1;
    pub const SDATA: u32 = 2;
    pub const PI: u32 = 3;
    pub const STARTTAG: u32 = 4;
    pub const ENDTAG: u32 = 5;
    pub const MS: u32 = 6;
    pub const MD: u32 = 7;
    pub const SYSTEM: u32 = 8;
}

/// A general entity appears in document content.
pub const GENERAL: u32 = 1 << 16;
/// A parameter entity appears in DTD declarations.
pub const PARAMETER: u32 = 1 << 17;

/// A named (or character-code-keyed) replacement text.
///
/// The `type` is a raw bitmask: a class code from [`class`] in the low
/// bits, OR'd with [`GENERAL`] and/or [`PARAMETER`]. Note the
/// asymmetry, kept from the reference tables: [`Entity::kind`] masks
/// the GENERAL/PARAMETER bits off, while [`Entity::is_general`] and
/// [`Entity::is_parameter`] read them from the raw value.
#[derive(Clone, Debug)]
pub struct Entity {
    pub name: String,
    ty: u32,
    data: String,
}

impl Entity {
    pub fn new(name: &str, ty: u32, data: &str) -> Entity {
        Entity {
            name: name.to_owned(),
            ty,
            data: data.to_owned(),
        }
    }

    /// The class sub-bits of the type, with the GENERAL and PARAMETER
    /// flags masked off.
    pub fn kind(&self) -> u32 {
        self.ty & !(GENERAL | PARAMETER)
    }

    /// The raw type bitmask as stored.
    pub fn raw_type(&self) -> u32 {
        self.ty
    }

    pub fn is_general(&self) -> bool {
        self.ty & GENERAL != 0
    }

    pub fn is_parameter(&self) -> bool {
        self.ty & PARAMETER != 0
    }

    /// The decoded replacement text.
    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Redefinition updates the type bits and nothing else; the
    /// replacement text set at first definition survives. Downstream
    /// callers depend on this, so it is an observable contract.
    pub(crate) fn update_type(&mut self, ty: u32) {
        self.ty = ty;
    }
}

#[cfg(test)]
mod test {
    use super::{class, Entity, GENERAL, PARAMETER};

    #[test]
    fn kind_masks_general_and_parameter() {
        let e = Entity::new("amp", GENERAL | class::CDATA, "&");
        assert_eq!(e.kind(), class::CDATA);
        assert_eq!(e.raw_type(), GENERAL | class::CDATA);
        assert!(e.is_general());
        assert!(!e.is_parameter());
    }

    #[test]
    fn parameter_bit() {
        let e = Entity::new("pcent", PARAMETER | class::CDATA, "x");
        assert!(e.is_parameter());
        assert!(!e.is_general());
    }
}
