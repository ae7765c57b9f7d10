// Copyright 2026 The sgml5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Static seed data for default DTD instances.

/// The bootstrap element set every DTD starts from, in index order.
/// `#pcdata` must come first so character data gets index 0.
pub(crate) static BOOTSTRAP_ELEMENTS: &[&str] = &[
    "#pcdata", "html", "meta", "base", "isindex", "head", "body", "applet", "param", "p", "title",
    "style", "link", "script",
];

/// Named character entities of the core and Latin-1 set, as registered
/// into default DTD instances (all as GENERAL CDATA entities).
pub(crate) static NAMED_ENTITIES: phf::Map<&'static str, char> = phf::phf_map! {
    "quot" => '"',
    "amp" => '&',
    "lt" => '<',
    "gt" => '>',
    "nbsp" => '\u{a0}',
    "iexcl" => '\u{a1}',
    "cent" => '\u{a2}',
    "pound" => '\u{a3}',
    "curren" => '\u{a4}',
    "yen" => '\u{a5}',
    "brvbar" => '\u{a6}',
    "sect" => '\u{a7}',
    "uml" => '\u{a8}',
    "copy" => '\u{a9}',
    "ordf" => '\u{aa}',
    "laquo" => '\u{ab}',
    "not" => '\u{ac}',
    "shy" => '\u{ad}',
    "reg" => '\u{ae}',
    "macr" => '\u{af}',
    "deg" => '\u{b0}',
    "plusmn" => '\u{b1}',
    "sup2" => '\u{b2}',
    "sup3" => '\u{b3}',
    "acute" => '\u{b4}',
    "micro" => '\u{b5}',
    "para" => '\u{b6}',
    "middot" => '\u{b7}',
    "cedil" => '\u{b8}',
    "sup1" => '\u{b9}',
    "ordm" => '\u{ba}',
    "raquo" => '\u{bb}',
    "frac14" => '\u{bc}',
    "frac12" => '\u{bd}',
    "frac34" => '\u{be}',
    "iquest" => '\u{bf}',
    "Agrave" => '\u{c0}',
    "Aacute" => '\u{c1}',
    "Acirc" => '\u{c2}',
    "Atilde" => '\u{c3}',
    "Auml" => '\u{c4}',
    "Aring" => '\u{c5}',
    "AElig" => '\u{c6}',
    "Ccedil" => '\u{c7}',
    "Egrave" => '\u{c8}',
    "Eacute" => '\u{c9}',
    "Ecirc" => '\u{ca}',
    "Euml" => '\u{cb}',
    "Igrave" => '\u{cc}',
    "Iacute" => '\u{cd}',
    "Icirc" => '\u{ce}',
    "Iuml" => '\u{cf}',
    "ETH" => '\u{d0}',
    "Ntilde" => '\u{d1}',
    "Ograve" => '\u{d2}',
    "Oacute" => '\u{d3}',
    "Ocirc" => '\u{d4}',
    "Otilde" => '\u{d5}',
    "Ouml" => '\u{d6}',
    "times" => '\u{d7}',
    "Oslash" => '\u{d8}',
    "Ugrave" => '\u{d9}',
    "Uacute" => '\u{da}',
    "Ucirc" => '\u{db}',
    "Uuml" => '\u{dc}',
    "Yacute" => '\u{dd}',
    "THORN" => '\u{de}',
    "szlig" => '\u{df}',
    "agrave" => '\u{e0}',
    "aacute" => '\u{e1}',
    "acirc" => '\u{e2}',
    "atilde" => '\u{e3}',
    "auml" => '\u{e4}',
    "aring" => '\u{e5}',
    "aelig" => '\u{e6}',
    "ccedil" => '\u{e7}',
    "egrave" => '\u{e8}',
    "eacute" => '\u{e9}',
    "ecirc" => '\u{ea}',
    "euml" => '\u{eb}',
    "igrave" => '\u{ec}',
    "iacute" => '\u{ed}',
    "icirc" => '\u{ee}',
    "iuml" => '\u{ef}',
    "eth" => '\u{f0}',
    "ntilde" => '\u{f1}',
    "ograve" => '\u{f2}',
    "oacute" => '\u{f3}',
    "ocirc" => '\u{f4}',
    "otilde" => '\u{f5}',
    "ouml" => '\u{f6}',
    "divide" => '\u{f7}',
    "oslash" => '\u{f8}',
    "ugrave" => '\u{f9}',
    "uacute" => '\u{fa}',
    "ucirc" => '\u{fb}',
    "uuml" => '\u{fc}',
    "yacute" => '\u{fd}',
    "thorn" => '\u{fe}',
    "yuml" => '\u{ff}',
};
