// Copyright 2026 The sgml5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Loading a DTD from a precomputed binary snapshot.
//!
//! The layout is crate-private and version-tagged: a version byte, a
//! string pool, entity records, then element records whose content
//! models are stored as prefix-form expressions. All integers are
//! big-endian. Errors are reported eagerly; a partially-read snapshot
//! leaves whatever it already defined in place.

use std::io::Read;
use std::rc::Rc;

use log::debug;

use crate::dtd::attribute::{AttrKind, AttrModifier, AttributeDecl};
use crate::dtd::content_model::{Combinator, ContentModel, Occurrence};
use crate::dtd::element::{ElementKind, ElementSet};
use crate::dtd::{Dtd, DtdError};

/// Snapshot format version this reader understands.
pub const FILE_VERSION: u8 = 1;

const FLAG_OMIT_START: u8 = 1 << 0;
const FLAG_OMIT_END: u8 = 1 << 1;
const FLAG_CONTENT: u8 = 1 << 2;
const FLAG_EXCLUSIONS: u8 = 1 << 3;
const FLAG_INCLUSIONS: u8 = 1 << 4;

impl Dtd {
    /// Populate this DTD from a binary snapshot.
    pub fn read(&self, input: &mut dyn Read) -> Result<(), DtdError> {
        let mut reader = SnapshotReader::new(input);
        let version = reader.u8()?;
        if version != FILE_VERSION {
            return Err(DtdError::Version(version));
        }
        reader.read_pool()?;

        let entities = reader.u16()?;
        for _ in 0..entities {
            let name = reader.pooled_name()?;
            let ty = reader.u32()?;
            let data = reader.string()?;
            self.define_entity(&name, ty, &data);
        }

        let elements = reader.u16()?;
        for _ in 0..elements {
            self.read_element(&mut reader)?;
        }
        debug!(
            "loaded DTD snapshot: {} entities, {} elements",
            entities, elements
        );
        Ok(())
    }

    fn read_element(&self, reader: &mut SnapshotReader<'_>) -> Result<(), DtdError> {
        let name = reader.pooled_name()?;
        let kind = reader.element_kind()?;
        let flags = reader.u8()?;

        let exclusions = if flags & FLAG_EXCLUSIONS != 0 {
            Some(self.read_element_set(reader)?)
        } else {
            None
        };
        let inclusions = if flags & FLAG_INCLUSIONS != 0 {
            Some(self.read_element_set(reader)?)
        } else {
            None
        };
        let content = if flags & FLAG_CONTENT != 0 {
            Some(Rc::new(self.read_model(reader)?))
        } else {
            None
        };

        let attr_count = reader.u16()?;
        let mut attributes = Vec::with_capacity(attr_count as usize);
        for _ in 0..attr_count {
            attributes.push(reader.attribute()?);
        }

        self.define_element(
            &name,
            kind,
            flags & FLAG_OMIT_START != 0,
            flags & FLAG_OMIT_END != 0,
            content,
            exclusions,
            inclusions,
            attributes,
        );
        Ok(())
    }

    fn read_element_set(&self, reader: &mut SnapshotReader<'_>) -> Result<ElementSet, DtdError> {
        let count = reader.u16()?;
        let mut set = ElementSet::new();
        for _ in 0..count {
            let name = reader.pooled_name()?;
            set.insert(self.element_named(&name));
        }
        Ok(set)
    }

    /// Prefix-form content-model expression.
    fn read_model(&self, reader: &mut SnapshotReader<'_>) -> Result<ContentModel, DtdError> {
        let code = reader.u8()?;
        match code {
            0 => {
                let name = reader.pooled_name()?;
                Ok(ContentModel::leaf(self.element_named(&name)))
            },
            b'*' | b'+' | b'?' => {
                let occurrence = match code {
                    b'*' => Occurrence::ZeroOrMore,
                    b'+' => Occurrence::OneOrMore,
                    _ => Occurrence::Optional,
                };
                Ok(ContentModel::repeat(occurrence, self.read_model(reader)?))
            },
            b',' | b'|' | b'&' => {
                let combinator = match code {
                    b',' => Combinator::Sequence,
                    b'|' => Combinator::Choice,
                    _ => Combinator::All,
                };
                let count = reader.u16()?;
                let mut operands = Vec::with_capacity(count as usize);
                for _ in 0..count {
                    operands.push(self.read_model(reader)?);
                }
                ContentModel::chain(combinator, operands)
            },
            other => Err(DtdError::InvalidContentModel(other)),
        }
    }
}

struct SnapshotReader<'a> {
    input: &'a mut dyn Read,
    pool: Vec<String>,
}

impl<'a> SnapshotReader<'a> {
    fn new(input: &'a mut dyn Read) -> SnapshotReader<'a> {
        SnapshotReader { input, pool: vec![] }
    }

    fn u8(&mut self) -> Result<u8, DtdError> {
        let mut buf = [0u8; 1];
        self.input.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    fn u16(&mut self) -> Result<u16, DtdError> {
        let mut buf = [0u8; 2];
        self.input.read_exact(&mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    fn u32(&mut self) -> Result<u32, DtdError> {
        let mut buf = [0u8; 4];
        self.input.read_exact(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }

    fn string(&mut self) -> Result<String, DtdError> {
        let len = self.u16()? as usize;
        let mut buf = vec![0u8; len];
        self.input.read_exact(&mut buf)?;
        String::from_utf8(buf).map_err(|_| DtdError::Malformed("string is not UTF-8"))
    }

    fn read_pool(&mut self) -> Result<(), DtdError> {
        let count = self.u16()?;
        self.pool = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let s = self.string()?;
            self.pool.push(s);
        }
        Ok(())
    }

    fn pooled_name(&mut self) -> Result<String, DtdError> {
        let index = self.u16()? as usize;
        self.pool
            .get(index)
            .cloned()
            .ok_or(DtdError::Malformed("name index out of range"))
    }

    fn element_kind(&mut self) -> Result<ElementKind, DtdError> {
        Ok(match self.u8()? {
            0 => ElementKind::Unknown,
            1 => ElementKind::Any,
            2 => ElementKind::Cdata,
            3 => ElementKind::Empty,
            4 => ElementKind::Rcdata,
            5 => ElementKind::Model,
            6 => ElementKind::Other(self.u32()?),
            _ => return Err(DtdError::Malformed("unknown element kind code")),
        })
    }

    fn attribute(&mut self) -> Result<AttributeDecl, DtdError> {
        let name = self.pooled_name()?;
        let kind = AttrKind::from_code(self.u8()?)
            .ok_or(DtdError::Malformed("unknown attribute type code"))?;
        let modifier = AttrModifier::from_code(self.u8()?)
            .ok_or(DtdError::Malformed("unknown attribute modifier code"))?;
        let value = if self.u8()? != 0 {
            Some(self.string()?)
        } else {
            None
        };
        let values = if self.u8()? != 0 {
            let count = self.u16()?;
            let mut literals = Vec::with_capacity(count as usize);
            for _ in 0..count {
                literals.push(self.string()?);
            }
            Some(literals)
        } else {
            None
        };
        let mut decl = AttributeDecl::new(&name, kind, modifier, value.as_deref(), None);
        decl.values = values;
        Ok(decl)
    }
}
