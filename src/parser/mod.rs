// Copyright 2026 The sgml5ever Project Developers. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The DTD-driven parser state machine.
//!
//! The parser sits between an external tokenizer (it implements
//! [`TokenSink`]) and a caller-supplied [`ParseSink`]. On every start
//! tag it asks the DTD's grammar whether the tag legally continues the
//! innermost open element; when it doesn't, recovery first tries to
//! imply omitted start tags, then implicitly closes ancestors whose
//! end tag is omissible. Malformed markup is reported through the
//! sink's non-fatal error callback and forwarded anyway; parsing never
//! aborts the stream.

use std::borrow::Cow::{self, Borrowed};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, log_enabled, Level};
use tendril::StrTendril;

use crate::dtd::{ContentModel, Dtd, ElementId, ElementKind, ElementSet, PCDATA};
use crate::interface::{EndTag, ParseSink, StartTag, Tag, Token, TokenSink};
use crate::macros::unwrap_or_return;
use crate::util::str::{is_ascii_whitespace, to_escaped_string};

/// How many start tags one token may imply before recovery falls back
/// to closing ancestors. Keeps a cyclic grammar from recursing
/// forever.
const MAX_IMPLIED: usize = 8;

/// Parser options, with an impl for `Default`.
#[derive(Copy, Clone)]
pub struct ParserOpts {
    /// Report errors with the offending names interpolated, at some
    /// allocation cost? Default: false
    pub exact_errors: bool,
}

impl Default for ParserOpts {
    fn default() -> ParserOpts {
        ParserOpts {
            exact_errors: false,
        }
    }
}

/// Snapshot of the element fields nesting decisions consult, taken
/// when the element is pushed so grammar checks never hold a borrow of
/// the DTD's tables.
struct OpenElem {
    id: ElementId,
    kind: ElementKind,
    omit_end: bool,
    content: Option<Rc<ContentModel>>,
    exclusions: Option<ElementSet>,
    inclusions: Option<ElementSet>,
}

/// The tag-nesting state machine.
pub struct Parser<Sink> {
    /// Options controlling the behavior of the parser.
    opts: ParserOpts,

    /// The grammar driving nesting decisions.
    dtd: Rc<Dtd>,

    /// Consumer of structural events.
    pub sink: Sink,

    /// Stack of open elements, most recently opened at the end.
    open_elems: RefCell<Vec<OpenElem>>,

    /// Track current line.
    current_line: Cell<u64>,
}

impl<Sink> Parser<Sink>
where
    Sink: ParseSink,
{
    /// Create a parser which resolves tags against `dtd` and sends
    /// structural events to `sink`. The parser is also a
    /// [`TokenSink`].
    pub fn new(dtd: Rc<Dtd>, sink: Sink, opts: ParserOpts) -> Parser<Sink> {
        Parser {
            opts,
            dtd,
            sink,
            open_elems: Default::default(),
            current_line: Cell::new(1),
        }
    }

    pub fn dtd(&self) -> &Rc<Dtd> {
        &self.dtd
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.open_elems.borrow().len()
    }

    fn debug_step(&self, token: &Token) {
        if log_enabled!(Level::Debug) {
            debug!("processing {} at depth {}", to_escaped_string(token), self.depth());
        }
    }

    fn handle_start_tag(&self, tag: Tag) {
        let id = self.dtd.element_named(&tag.name);
        let canonical = self.dtd.element_name(id);
        self.build_context(id, &canonical);

        let is_empty = self.dtd.element(id).map_or(false, |elem| elem.is_empty());
        if is_empty || tag.self_closing {
            self.sink.empty_tag(id, &tag);
            return;
        }
        self.push(id);
        self.sink.start_tag(id, &tag, false);
    }

    fn handle_end_tag(&self, tag: Tag) {
        let id = self.dtd.element_named(&tag.name);
        let position = self.open_elems.borrow().iter().rposition(|e| e.id == id);
        let position = match position {
            Some(position) => position,
            None => {
                self.sink.parse_error(if self.opts.exact_errors {
                    Cow::from(format!("unexpected end tag </{}>", tag.name))
                } else {
                    Borrowed("unexpected end tag")
                });
                return;
            },
        };

        // Close everything above the matched element. Elements whose
        // end tag is not omissible are closed anyway, with an error.
        loop {
            let (top_id, top_omissible, depth) = {
                let stack = self.open_elems.borrow();
                let top = stack.last().expect("matched position below stack top");
                (top.id, top.omit_end, stack.len())
            };
            if depth - 1 == position {
                break;
            }
            if !top_omissible {
                self.sink.parse_error(if self.opts.exact_errors {
                    Cow::from(format!(
                        "missing end tag </{}>",
                        self.dtd.element_name(top_id)
                    ))
                } else {
                    Borrowed("missing end tag")
                });
            }
            self.open_elems.borrow_mut().pop();
            self.sink.end_tag(top_id, true);
        }

        self.open_elems.borrow_mut().pop();
        self.sink.end_tag(id, false);
    }

    fn handle_text(&self, text: StrTendril) {
        if text.is_empty() {
            return;
        }
        // Whitespace between tags is forwarded without consulting the
        // grammar; only real character data is checked as #PCDATA.
        if !text.chars().all(is_ascii_whitespace) {
            self.build_context(PCDATA, "#PCDATA");
        }
        self.sink.text(&text);
    }

    /// Make the current context legal for `id`, or report why it
    /// can't be. On return the token is forwarded regardless.
    fn build_context(&self, id: ElementId, name: &str) {
        if self.excluded(id) {
            self.sink.parse_error(if self.opts.exact_errors {
                Cow::from(format!("<{name}> excluded by an enclosing element"))
            } else {
                Borrowed("element excluded here")
            });
            return;
        }

        let mut implied = 0;
        loop {
            let accepted = {
                let stack = self.open_elems.borrow();
                match stack.last() {
                    None => true,
                    Some(top) => self.entry_accepts(top, id),
                }
            };
            if accepted || self.included(id) {
                return;
            }

            if implied < MAX_IMPLIED {
                if let Some(f) = self.implied_start_candidate(id) {
                    implied += 1;
                    let fname = self.dtd.element_name(f);
                    debug!("implying start tag <{fname}>");
                    self.push(f);
                    self.sink.start_tag(f, &Tag::implied(&fname), true);
                    continue;
                }
            }

            let closable = {
                let stack = self.open_elems.borrow();
                match stack.last() {
                    Some(top) if top.omit_end => Some(top.id),
                    _ => None,
                }
            };
            match closable {
                Some(top_id) => {
                    debug!("implicitly closing <{}>", self.dtd.element_name(top_id));
                    self.open_elems.borrow_mut().pop();
                    self.sink.end_tag(top_id, true);
                },
                None => {
                    self.sink.parse_error(if self.opts.exact_errors {
                        Cow::from(format!(
                            "<{name}> not allowed in <{}>",
                            self.current_name()
                        ))
                    } else {
                        Borrowed("tag not allowed here")
                    });
                    return;
                },
            }
        }
    }

    fn entry_accepts(&self, top: &OpenElem, id: ElementId) -> bool {
        match top.kind {
            ElementKind::Any => true,
            // Unknown elements accept anything, keeping unrecognized
            // markup flowing instead of cascading errors.
            ElementKind::Unknown => true,
            ElementKind::Model => match top.content {
                Some(ref model) => model.accepts(id),
                None => false,
            },
            // Declared character data content: text fits, elements
            // don't.
            ElementKind::Cdata | ElementKind::Rcdata => id == PCDATA,
            _ => false,
        }
    }

    /// An element the grammar lets us open implicitly on the way to
    /// `id`: the unique first of the top model, if its start tag is
    /// omissible and its own content can (transitively) lead to `id`.
    fn implied_start_candidate(&self, id: ElementId) -> Option<ElementId> {
        let first = {
            let stack = self.open_elems.borrow();
            let top = stack.last()?;
            if top.kind != ElementKind::Model {
                return None;
            }
            top.content.as_ref()?.first()?
        };
        if first == id {
            return None;
        }
        let model = {
            let elem = self.dtd.element(first)?;
            if !elem.omit_start {
                return None;
            }
            elem.content.clone()?
        };
        if self.leads_to(&model, id, MAX_IMPLIED) {
            Some(first)
        } else {
            None
        }
    }

    fn leads_to(&self, model: &ContentModel, id: ElementId, depth: usize) -> bool {
        if model.accepts(id) {
            return true;
        }
        if depth == 0 {
            return false;
        }
        let first = unwrap_or_return!(model.first(), false);
        let next = {
            let elem = unwrap_or_return!(self.dtd.element(first), false);
            if !elem.omit_start {
                return false;
            }
            unwrap_or_return!(elem.content.clone(), false)
        };
        self.leads_to(&next, id, depth - 1)
    }

    fn excluded(&self, id: ElementId) -> bool {
        self.open_elems.borrow().iter().any(|entry| {
            entry
                .exclusions
                .as_ref()
                .is_some_and(|set| set.contains(id))
        })
    }

    fn included(&self, id: ElementId) -> bool {
        self.open_elems.borrow().iter().any(|entry| {
            entry
                .inclusions
                .as_ref()
                .is_some_and(|set| set.contains(id))
        })
    }

    fn push(&self, id: ElementId) {
        let entry = {
            let elem = self.dtd.element(id).expect("pushing undefined element");
            OpenElem {
                id,
                kind: elem.kind,
                omit_end: elem.omit_end,
                content: elem.content.clone(),
                exclusions: elem.exclusions.clone(),
                inclusions: elem.inclusions.clone(),
            }
        };
        self.open_elems.borrow_mut().push(entry);
    }

    fn current_name(&self) -> String {
        match self.open_elems.borrow().last() {
            Some(top) => self.dtd.element_name(top.id),
            None => "#DOCUMENT".to_owned(),
        }
    }

    fn close_all(&self) {
        for entry in self.open_elems.borrow_mut().drain(..).rev() {
            self.sink.end_tag(entry.id, true);
        }
    }
}

impl<Sink> TokenSink for Parser<Sink>
where
    Sink: ParseSink,
{
    fn process_token(&self, token: Token, line_number: u64) {
        if line_number != self.current_line.get() {
            self.current_line.set(line_number);
            self.sink.set_current_line(line_number);
        }
        self.debug_step(&token);
        match token {
            Token::TagToken(tag) => match tag.kind {
                StartTag => self.handle_start_tag(tag),
                EndTag => self.handle_end_tag(tag),
            },
            Token::CharacterTokens(text) => self.handle_text(text),
            Token::CommentToken(text) => self.sink.comment(&text),
            Token::DeclarationToken(text) => self.sink.declaration(&text),
            Token::EOFToken => self.close_all(),
        }
    }

    fn end(&self) {
        self.close_all();
    }
}
