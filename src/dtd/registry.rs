// Copyright 2026 The sgml5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sharing DTD instances by name.
//!
//! The reference design keeps a process-wide mutable map; here the
//! cache is an explicit registry object the caller owns and passes to
//! parser construction. It is deliberately `!Sync` (`RefCell`), so
//! concurrent population is a compile error rather than a data race.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use crate::dtd::{Dtd, DtdError};

#[derive(Default)]
pub struct DtdRegistry {
    dtds: RefCell<HashMap<String, Rc<Dtd>>>,
}

impl DtdRegistry {
    pub fn new() -> DtdRegistry {
        DtdRegistry::default()
    }

    /// The DTD registered under `name`, creating and caching a
    /// bootstrap instance on first access. Names are case-sensitive
    /// and not normalized; an empty name is invalid.
    pub fn get(&self, name: &str) -> Result<Rc<Dtd>, DtdError> {
        if name.is_empty() {
            return Err(DtdError::InvalidName);
        }
        let mut dtds = self.dtds.borrow_mut();
        if let Some(dtd) = dtds.get(name) {
            return Ok(dtd.clone());
        }
        debug!("creating default DTD {name}");
        let dtd = Rc::new(Dtd::bootstrap(name));
        dtds.insert(name.to_owned(), dtd.clone());
        Ok(dtd)
    }

    /// Seed the cache. The first definition of a name wins; a second
    /// `put` under the same name is ignored and the incumbent
    /// returned.
    pub fn put(&self, name: &str, dtd: Rc<Dtd>) -> Result<Rc<Dtd>, DtdError> {
        if name.is_empty() {
            return Err(DtdError::InvalidName);
        }
        let mut dtds = self.dtds.borrow_mut();
        if let Some(existing) = dtds.get(name) {
            debug!("DTD {name} already registered, keeping first definition");
            return Ok(existing.clone());
        }
        dtds.insert(name.to_owned(), dtd.clone());
        Ok(dtd)
    }
}

#[cfg(test)]
mod test {
    use std::rc::Rc;

    use super::DtdRegistry;
    use crate::dtd::{Dtd, DtdError};

    #[test]
    fn get_caches_one_instance_per_name() {
        let registry = DtdRegistry::new();
        let a = registry.get("html32").unwrap();
        let b = registry.get("html32").unwrap();
        assert!(Rc::ptr_eq(&a, &b));
        // Case-sensitive: a differently-cased name is a different DTD.
        let c = registry.get("HTML32").unwrap();
        assert!(!Rc::ptr_eq(&a, &c));
    }

    #[test]
    fn first_put_wins() {
        let registry = DtdRegistry::new();
        let first = registry.put("html", Rc::new(Dtd::new("html"))).unwrap();
        let second = registry.put("html", Rc::new(Dtd::new("html"))).unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert!(Rc::ptr_eq(&first, &registry.get("html").unwrap()));
    }

    #[test]
    fn empty_name_is_invalid() {
        let registry = DtdRegistry::new();
        assert!(matches!(registry.get(""), Err(DtdError::InvalidName)));
        assert!(matches!(
            registry.put("", Rc::new(Dtd::new("x"))),
            Err(DtdError::InvalidName)
        ));
    }
}
