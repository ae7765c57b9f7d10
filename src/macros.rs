// Copyright 2026 The sgml5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

macro_rules! unwrap_or_return {
    ($opt:expr) => {
        match $opt {
            None => return,
            Some(x) => x,
        }
    };
    ($opt:expr, $retval:expr) => {
        match $opt {
            None => return $retval,
            Some(x) => x,
        }
    };
}

pub(crate) use unwrap_or_return;
