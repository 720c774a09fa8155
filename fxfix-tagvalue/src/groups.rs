/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 5/8/26
******************************************************************************/

//! Repeating-group parsing.
//!
//! [`GroupParser`] folds the flat decorated field sequence into a tree of
//! group instances in one left-to-right pass, driven by an explicit stack of
//! open group frames rather than call-stack recursion, so scope-closing
//! behavior stays auditable.
//!
//! Rules:
//! - A registered count tag opens a frame expecting its declared number of
//!   entries; a declared count of 0 yields an empty instance and consumes
//!   nothing.
//! - The first member tag after the count opens the first entry and becomes
//!   the entry leader — canonically the schema's delimiter tag, but count
//!   tags like NoMDEntries serve both snapshot-style and incremental-style
//!   groups whose entries lead with different tags. A new entry starts when
//!   the leader recurs, or when any tag already seen in the current entry
//!   recurs.
//! - A member tag that is a nested count tag opens a child frame fully
//!   contained in the current entry.
//! - A frame closes when a tag arrives that it cannot consume; the tag is
//!   retried one scope up, down to the top level. The innermost
//!   still-incomplete frame claims ambiguous tags; a frame whose declared
//!   count is satisfied yields entry-starting tags to an enclosing frame
//!   that can consume them.
//! - Entries beyond the declared count are captured, not dropped; the
//!   mismatch is flagged. A field that interrupts an incomplete group is
//!   reattached to the enclosing scope and flagged.

use fxfix_core::field::Field;
use fxfix_core::message::{GroupEntry, GroupInstance, MessageNode, ParseFlag};
use fxfix_dictionary::groups::{GroupRegistry, GroupSchema};
use std::collections::HashSet;

/// One-pass, stack-based repeating-group parser.
#[derive(Debug, Clone, Copy)]
pub struct GroupParser<'r> {
    registry: &'r GroupRegistry,
}

/// A group currently being captured.
struct OpenFrame<'r> {
    schema: &'r GroupSchema,
    count_field: Field,
    declared: usize,
    entries: Vec<GroupEntry>,
    current: Option<GroupEntry>,
    /// The tag that led the first entry. Canonically the schema delimiter,
    /// but incremental-style groups lead with another member tag.
    leader: Option<u32>,
    /// Tags already seen in the current entry; a repeat marks an entry
    /// boundary.
    seen: HashSet<u32>,
}

impl<'r> OpenFrame<'r> {
    fn new(schema: &'r GroupSchema, count_field: Field, declared: usize) -> Self {
        Self {
            schema,
            count_field,
            declared,
            entries: Vec::new(),
            current: None,
            leader: None,
            seen: HashSet::new(),
        }
    }

    /// Entries captured so far, the open one included.
    fn produced(&self) -> usize {
        self.entries.len() + usize::from(self.current.is_some())
    }

    fn is_complete(&self) -> bool {
        self.declared > 0 && self.produced() >= self.declared
    }

    fn can_consume(&self, tag: u32) -> bool {
        self.schema.contains(tag)
    }

    /// Returns true if consuming this tag would start a new entry: the
    /// entry-leading tag recurs, or any tag already seen in the current
    /// entry recurs.
    fn starts_new_entry(&self, tag: u32) -> bool {
        self.current.is_some() && (self.leader == Some(tag) || self.seen.contains(&tag))
    }

    fn flush_entry(&mut self) {
        if let Some(entry) = self.current.take() {
            self.entries.push(entry);
        }
        self.seen.clear();
    }

    fn open_entry(&mut self) {
        self.flush_entry();
        self.current = Some(GroupEntry::new(self.entries.len() + 1));
    }

    fn push_field(&mut self, field: Field) {
        if self.current.is_none() {
            self.open_entry();
            self.leader.get_or_insert(field.tag);
        }
        self.seen.insert(field.tag);
        if let Some(entry) = self.current.as_mut() {
            entry.nodes.push(MessageNode::Field(field));
        }
    }

    fn push_group(&mut self, group: GroupInstance) {
        if self.current.is_none() {
            self.open_entry();
        }
        if let Some(entry) = self.current.as_mut() {
            entry.nodes.push(MessageNode::Group(group));
        }
    }

    fn close(mut self, flags: &mut Vec<ParseFlag>) -> GroupInstance {
        self.flush_entry();
        let actual = self.entries.len();
        if self.declared != actual {
            tracing::warn!(
                count_tag = self.schema.count_tag,
                declared = self.declared,
                actual,
                "group '{}' declared {} entries but found {}",
                self.schema.name,
                self.declared,
                actual
            );
            flags.push(ParseFlag::GroupCountMismatch {
                count_tag: self.schema.count_tag,
                declared: self.declared,
                actual,
            });
        }
        GroupInstance {
            name: self.schema.name.clone(),
            count_field: self.count_field,
            entries: self.entries,
        }
    }
}

impl<'r> GroupParser<'r> {
    /// Creates a parser over the given schema registry.
    #[must_use]
    pub const fn new(registry: &'r GroupRegistry) -> Self {
        Self { registry }
    }

    /// Folds the flat field sequence into a tree of top-level nodes.
    ///
    /// Never fails: schema-imperfect input degrades into best-effort
    /// structure with flags recorded in `flags`.
    #[must_use]
    pub fn parse(&self, fields: Vec<Field>, flags: &mut Vec<ParseFlag>) -> Vec<MessageNode> {
        let mut nodes: Vec<MessageNode> = Vec::new();
        let mut stack: Vec<OpenFrame<'r>> = Vec::new();
        let mut input = fields.into_iter();
        let mut pending: Option<Field> = None;

        while let Some(field) = pending.take().or_else(|| input.next()) {
            let tag = field.tag;

            if !stack.is_empty() {
                let (consumable, yields) = {
                    let top = stack.last().expect("stack is non-empty");
                    let consumable = top.can_consume(tag);
                    let yields = consumable
                        && top.starts_new_entry(tag)
                        && top.is_complete()
                        && stack[..stack.len() - 1].iter().any(|f| f.can_consume(tag));
                    (consumable, yields)
                };

                if consumable && !yields {
                    self.consume(&mut stack, &mut nodes, field);
                    continue;
                }

                // The top frame gives the field up: close it and retry the
                // same field one scope up.
                let interrupter = if consumable {
                    None
                } else {
                    Some((tag, field.position))
                };
                close_top(&mut stack, &mut nodes, flags, interrupter);
                pending = Some(field);
                continue;
            }

            // Top level.
            if let Some(schema) = self.registry.get(tag) {
                open_group(&mut stack, &mut nodes, schema, field);
            } else {
                nodes.push(MessageNode::Field(field));
            }
        }

        while !stack.is_empty() {
            close_top(&mut stack, &mut nodes, flags, None);
        }

        nodes
    }

    /// Consumes one field into the top frame.
    fn consume(&self, stack: &mut Vec<OpenFrame<'r>>, nodes: &mut Vec<MessageNode>, field: Field) {
        let tag = field.tag;
        let nested: Option<&'r GroupSchema> = stack.last().and_then(|top| {
            let schema: &'r GroupSchema = top.schema;
            schema.nested_schema(tag)
        });

        if let Some(child) = nested {
            if let Some(top) = stack.last_mut() {
                if top.current.is_none() {
                    top.open_entry();
                }
                top.seen.insert(tag);
            }
            open_group(stack, nodes, child, field);
            return;
        }

        let top = stack.last_mut().expect("stack is non-empty");
        if top.starts_new_entry(tag) {
            top.open_entry();
        }
        top.push_field(field);
    }
}

/// Opens a group frame, or attaches an empty instance for a zero or
/// non-numeric count.
fn open_group<'r>(
    stack: &mut Vec<OpenFrame<'r>>,
    nodes: &mut Vec<MessageNode>,
    schema: &'r GroupSchema,
    count_field: Field,
) {
    let declared = count_field.as_count();
    if declared.is_none() {
        tracing::warn!(
            count_tag = count_field.tag,
            value = %count_field.raw_value,
            "non-numeric group count, treating group as empty"
        );
    }
    match declared.unwrap_or(0) {
        0 => {
            let instance = GroupInstance::new(schema.name.clone(), count_field);
            attach_group(stack, nodes, instance);
        }
        declared => stack.push(OpenFrame::new(schema, count_field, declared)),
    }
}

/// Closes the top frame and attaches its instance to the enclosing scope.
///
/// `interrupter` names the field that forced the close without being
/// consumable; interrupting an incomplete group is flagged for
/// observability.
fn close_top(
    stack: &mut Vec<OpenFrame<'_>>,
    nodes: &mut Vec<MessageNode>,
    flags: &mut Vec<ParseFlag>,
    interrupter: Option<(u32, usize)>,
) {
    let Some(frame) = stack.pop() else {
        return;
    };
    if let Some((tag, position)) = interrupter {
        if frame.declared > 0 && frame.produced() < frame.declared {
            tracing::warn!(
                tag,
                position,
                count_tag = frame.schema.count_tag,
                "field interrupts incomplete group, reattaching to enclosing scope"
            );
            flags.push(ParseFlag::ReattachedField { tag, position });
        }
    }
    let instance = frame.close(flags);
    attach_group(stack, nodes, instance);
}

fn attach_group(
    stack: &mut Vec<OpenFrame<'_>>,
    nodes: &mut Vec<MessageNode>,
    instance: GroupInstance,
) {
    if let Some(parent) = stack.last_mut() {
        parent.push_group(instance);
    } else {
        nodes.push(MessageNode::Group(instance));
    }
}
