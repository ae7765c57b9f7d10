// Copyright 2026 The sgml5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use sgml5ever::dtd::{Combinator, ContentModel, Dtd, Occurrence};

fn dtd_with(names: &[&str]) -> (Dtd, Vec<usize>) {
    let dtd = Dtd::new("test");
    let ids = names.iter().map(|n| dtd.element_named(n)).collect();
    (dtd, ids)
}

#[test]
fn sequence_of_leaves_is_not_nullable() {
    let (_dtd, ids) = dtd_with(&["h1", "h2"]);
    let m = ContentModel::group(
        Combinator::Sequence,
        ContentModel::leaf(ids[0]),
        ContentModel::leaf(ids[1]),
    );
    assert!(!m.empty());
    assert_eq!(m.first(), Some(ids[0]));
}

#[test]
fn star_matches_empty_input() {
    let (_dtd, ids) = dtd_with(&["li"]);
    let m = ContentModel::repeat(Occurrence::ZeroOrMore, ContentModel::leaf(ids[0]));
    assert!(m.empty());
    assert_eq!(m.first(), None);
    assert!(m.accepts(ids[0]));
}

#[test]
fn elements_enumerates_leaves_in_order() {
    let (_dtd, ids) = dtd_with(&["dt", "dd", "li"]);
    let m = ContentModel::group(
        Combinator::Sequence,
        ContentModel::leaf(ids[0]),
        ContentModel::group(
            Combinator::Sequence,
            ContentModel::leaf(ids[1]),
            ContentModel::leaf(ids[2]),
        ),
    );
    let mut out = vec![];
    m.elements(&mut out);
    assert_eq!(out, ids);
}

#[test]
fn renders_flattened_sequence() {
    let (dtd, ids) = dtd_with(&["dt", "dd", "li"]);
    let m = ContentModel::chain(
        Combinator::Sequence,
        ids.iter().map(|&id| ContentModel::leaf(id)).collect(),
    )
    .unwrap();
    assert_eq!(m.render(&dtd), "DT,DD,LI");
}

#[test]
fn renders_mixed_combinators_with_parens() {
    let (dtd, ids) = dtd_with(&["a", "b", "c"]);
    // a , (b | c)
    let m = ContentModel::group(
        Combinator::Sequence,
        ContentModel::leaf(ids[0]),
        ContentModel::group(
            Combinator::Choice,
            ContentModel::leaf(ids[1]),
            ContentModel::leaf(ids[2]),
        ),
    );
    assert_eq!(m.render(&dtd), "A,(B|C)");
}

#[test]
fn renders_repetitions() {
    let (dtd, ids) = dtd_with(&["li", "p"]);
    let starred = ContentModel::repeat(Occurrence::ZeroOrMore, ContentModel::leaf(ids[0]));
    assert_eq!(starred.render(&dtd), "LI*");

    // A repetition operand inside a group is parenthesized.
    let m = ContentModel::group(
        Combinator::Sequence,
        ContentModel::repeat(Occurrence::ZeroOrMore, ContentModel::leaf(ids[0])),
        ContentModel::leaf(ids[1]),
    );
    assert_eq!(m.render(&dtd), "(LI*),P");

    // A non-leaf repetition body is parenthesized.
    let grouped = ContentModel::repeat(
        Occurrence::OneOrMore,
        ContentModel::group(
            Combinator::Choice,
            ContentModel::leaf(ids[0]),
            ContentModel::leaf(ids[1]),
        ),
    );
    assert_eq!(grouped.render(&dtd), "(LI|P)+");
    assert_eq!(format!("{}", grouped.display(&dtd)), "(LI|P)+");
}

#[test]
fn sequence_with_nullable_left_has_no_unique_first() {
    let (_dtd, ids) = dtd_with(&["head", "body"]);
    // (head? , body): first() deliberately answers None rather than
    // looking past the nullable left operand.
    let m = ContentModel::group(
        Combinator::Sequence,
        ContentModel::repeat(Occurrence::Optional, ContentModel::leaf(ids[0])),
        ContentModel::leaf(ids[1]),
    );
    assert_eq!(m.first(), None);
    assert!(m.accepts(ids[0]));
    assert!(m.accepts(ids[1]));
}
