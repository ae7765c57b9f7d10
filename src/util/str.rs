// Copyright 2026 The sgml5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

pub fn to_escaped_string<T: fmt::Debug>(x: &T) -> String {
    // FIXME: don't allocate twice
    format!("{x:?}").chars().flat_map(|c| c.escape_default()).collect()
}

/// ASCII whitespace, as the tag-inference rules treat it specially.
pub fn is_ascii_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\r' | '\n' | '\x0C' | ' ')
}

#[cfg(test)]
mod test {
    use super::is_ascii_whitespace;

    #[test]
    fn whitespace_set() {
        assert!(is_ascii_whitespace(' '));
        assert!(is_ascii_whitespace('\n'));
        assert!(!is_ascii_whitespace('\u{a0}'));
        assert!(!is_ascii_whitespace('x'));
    }
}
