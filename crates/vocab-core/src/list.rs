//! Non-functional property values: an ordered list of cells.
//!
//! Every member stores its own position and the identity of the list that
//! owns it. Navigation (`next`/`prev`, cursors) always goes back through the
//! list by position rather than following a stored pointer. After any
//! structural change other than a tail append, previously obtained cursors
//! and indices may designate a different member or fall out of range; they
//! never dangle.

use std::{
    cmp::Ordering,
    ops::Deref,
    slice,
    sync::{
        atomic::{self, AtomicU64},
        Arc,
    },
};

use serde_json::{Map, Value};

use crate::{
    cell::{concrete_of, namespace_alias, reference_of, scalar_of, CellValue, ValueCell},
    context::{AliasContext, ContextUris},
    error::VocabError,
    iri::Iri,
    property::Property,
    resolve::resolve,
    traits::{ScalarCodec, VocabValue},
};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a list, used by members and cursors to find their way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(u64);

impl ListId {
    fn next() -> Self {
        ListId(NEXT_LIST_ID.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

/// One element of a [`ValueList`].
#[derive(Debug, Clone)]
pub struct Member {
    index: usize,
    parent: Option<ListId>,
    cell: ValueCell,
}

impl Member {
    /// Position of the member in its list at the time of the last
    /// structural change.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the member was detached from its list by `set_*` or `remove`.
    pub fn is_orphaned(&self) -> bool {
        self.parent.is_none()
    }

    pub fn cell(&self) -> &ValueCell {
        &self.cell
    }

    pub fn into_cell(self) -> ValueCell {
        self.cell
    }

    pub fn cursor(&self) -> Option<Cursor> {
        self.parent.map(|list| Cursor {
            list,
            index: self.index,
        })
    }

    /// The member currently following this one in `list`.
    pub fn next<'a>(&self, list: &'a ValueList) -> Option<&'a Member> {
        self.cursor()?.next(list).and_then(|cursor| list.resolve(cursor))
    }

    /// The member currently preceding this one in `list`.
    pub fn prev<'a>(&self, list: &'a ValueList) -> Option<&'a Member> {
        self.cursor()?.prev(list).and_then(|cursor| list.resolve(cursor))
    }
}

impl Deref for Member {
    type Target = ValueCell;

    fn deref(&self) -> &ValueCell {
        &self.cell
    }
}

/// Position-based handle into a [`ValueList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    list: ListId,
    index: usize,
}

impl Cursor {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self, list: &ValueList) -> Option<Cursor> {
        let index = self.index.checked_add(1)?;
        self.moved_to(index, list)
    }

    pub fn prev(self, list: &ValueList) -> Option<Cursor> {
        let index = self.index.checked_sub(1)?;
        self.moved_to(index, list)
    }

    fn moved_to(self, index: usize, list: &ValueList) -> Option<Cursor> {
        (self.list == list.id && index < list.len()).then_some(Cursor {
            list: self.list,
            index,
        })
    }
}

/// The values of a non-functional property.
#[derive(Debug)]
pub struct ValueList {
    id: ListId,
    property: Arc<Property>,
    alias: String,
    members: Vec<Member>,
    present: bool,
}

impl ValueList {
    pub fn new(property: Arc<Property>) -> Self {
        Self {
            id: ListId::next(),
            property,
            alias: String::new(),
            members: Vec::new(),
            present: false,
        }
    }

    /// Decodes a raw value: each element of an array in order, or a single
    /// bare value as a one-element list. An absent value gives an empty list.
    pub fn decode(raw: Option<&Value>, property: &Arc<Property>, aliases: &AliasContext) -> Result<Self, VocabError> {
        let mut list = Self::new(Arc::clone(property));
        list.alias = namespace_alias(property, aliases);
        list.present = raw.is_some();

        match raw {
            None => {}
            Some(Value::Array(items)) => {
                for item in items {
                    let value = resolve(item, property, aliases)?;
                    list.attach(list.members.len(), value);
                }
            }
            Some(raw) => {
                let value = resolve(raw, property, aliases)?;
                list.attach(0, value);
            }
        }

        Ok(list)
    }

    pub fn decode_from(
        document: &Map<String, Value>,
        property: &Arc<Property>,
        aliases: &AliasContext,
    ) -> Result<Self, VocabError> {
        Self::decode(document.get(&property.lookup_key(aliases)), property, aliases)
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    /// Name of the property, prefixed with the alias in effect at decode time.
    pub fn name(&self) -> String {
        if self.alias.is_empty() {
            self.property.name().to_owned()
        } else {
            format!("{}:{}", self.alias, self.property.name())
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the property was given in the decoded document or has been
    /// written to since. A present empty list encodes as `[]`; an absent one
    /// is omitted from its enclosing object.
    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn get(&self, index: usize) -> Option<&Member> {
        self.members.get(index)
    }

    pub fn at(&self, index: usize) -> Result<&Member, VocabError> {
        self.members.get(index).ok_or(VocabError::IndexOutOfRange {
            index,
            len: self.members.len(),
        })
    }

    /// Mutable access to the concrete value at `index`, if it is a `T`.
    pub fn get_mut<T: VocabValue>(&mut self, index: usize) -> Option<&mut T> {
        self.members.get_mut(index)?.cell.get_mut::<T>()
    }

    pub fn iter(&self) -> slice::Iter<'_, Member> {
        self.members.iter()
    }

    /// Cursor on the first member, `None` when the list is empty.
    pub fn begin(&self) -> Option<Cursor> {
        (!self.members.is_empty()).then_some(Cursor {
            list: self.id,
            index: 0,
        })
    }

    /// Past-the-end bound of a forward traversal; never resolves.
    pub fn end(&self) -> Cursor {
        Cursor {
            list: self.id,
            index: self.members.len(),
        }
    }

    /// The member a cursor designates now.
    pub fn resolve(&self, cursor: Cursor) -> Option<&Member> {
        if cursor.list != self.id {
            return None;
        }
        self.members.get(cursor.index)
    }

    pub fn append_concrete<T: VocabValue>(&mut self, value: T) -> Result<(), VocabError> {
        let value = concrete_of(&self.property, value)?;
        self.attach(self.members.len(), value);
        Ok(())
    }

    pub fn append_scalar<C: ScalarCodec>(&mut self, value: C::Value) -> Result<(), VocabError> {
        let value = scalar_of::<C>(&self.property, value)?;
        self.attach(self.members.len(), value);
        Ok(())
    }

    pub fn append_reference(&mut self, iri: Iri) -> Result<(), VocabError> {
        let value = reference_of(&self.property, iri)?;
        self.attach(self.members.len(), value);
        Ok(())
    }

    /// Inserts at the head. Every existing member moves up by one.
    pub fn prepend_concrete<T: VocabValue>(&mut self, value: T) -> Result<(), VocabError> {
        let value = concrete_of(&self.property, value)?;
        self.attach(0, value);
        Ok(())
    }

    pub fn prepend_scalar<C: ScalarCodec>(&mut self, value: C::Value) -> Result<(), VocabError> {
        let value = scalar_of::<C>(&self.property, value)?;
        self.attach(0, value);
        Ok(())
    }

    pub fn prepend_reference(&mut self, iri: Iri) -> Result<(), VocabError> {
        let value = reference_of(&self.property, iri)?;
        self.attach(0, value);
        Ok(())
    }

    /// Inserts before `index`; `index == len()` appends.
    pub fn insert_concrete<T: VocabValue>(&mut self, index: usize, value: T) -> Result<(), VocabError> {
        self.check_insert(index)?;
        let value = concrete_of(&self.property, value)?;
        self.attach(index, value);
        Ok(())
    }

    pub fn insert_scalar<C: ScalarCodec>(&mut self, index: usize, value: C::Value) -> Result<(), VocabError> {
        self.check_insert(index)?;
        let value = scalar_of::<C>(&self.property, value)?;
        self.attach(index, value);
        Ok(())
    }

    pub fn insert_reference(&mut self, index: usize, iri: Iri) -> Result<(), VocabError> {
        self.check_insert(index)?;
        let value = reference_of(&self.property, iri)?;
        self.attach(index, value);
        Ok(())
    }

    /// Replaces the member at `index` and returns the detached previous one.
    pub fn set_concrete<T: VocabValue>(&mut self, index: usize, value: T) -> Result<Member, VocabError> {
        self.check_index(index)?;
        let value = concrete_of(&self.property, value)?;
        Ok(self.replace(index, value))
    }

    pub fn set_scalar<C: ScalarCodec>(&mut self, index: usize, value: C::Value) -> Result<Member, VocabError> {
        self.check_index(index)?;
        let value = scalar_of::<C>(&self.property, value)?;
        Ok(self.replace(index, value))
    }

    pub fn set_reference(&mut self, index: usize, iri: Iri) -> Result<Member, VocabError> {
        self.check_index(index)?;
        let value = reference_of(&self.property, iri)?;
        Ok(self.replace(index, value))
    }

    /// Removes and returns the member at `index`, detached from the list.
    /// Members after it move down by one.
    pub fn remove(&mut self, index: usize) -> Result<Member, VocabError> {
        self.check_index(index)?;
        let mut removed = self.members.remove(index);
        removed.parent = None;
        self.renumber(index);
        Ok(removed)
    }

    /// Exchanges the values at `i` and `j`; each member keeps reporting its
    /// actual position.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), VocabError> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.members.swap(i, j);
        self.members[i].index = i;
        self.members[j].index = j;
        Ok(())
    }

    /// Whether the member at `i` orders before the member at `j`.
    pub fn less(&self, i: usize, j: usize) -> Result<bool, VocabError> {
        let a = self.at(i)?;
        let b = self.at(j)?;
        Ok(a.cell.compare(&b.cell) == Ordering::Less)
    }

    /// Sorts members into canonical order. Equal members keep their
    /// relative order.
    pub fn sort_canonical(&mut self) {
        self.members.sort_by(|a, b| a.cell.compare(&b.cell));
        self.renumber(0);
    }

    /// Encodes every member in order. A one-element list of a property that
    /// collapses singletons encodes as the bare element.
    pub fn encode(&self) -> Result<Value, VocabError> {
        let mut items = Vec::with_capacity(self.members.len());
        for member in &self.members {
            if let Some(value) = member.cell.encode()? {
                items.push(value);
            }
        }

        if self.property.collapses_singleton() && items.len() == 1 {
            if let Some(single) = items.pop() {
                return Ok(single);
            }
        }
        Ok(Value::Array(items))
    }

    /// Lexicographic order over members; a proper prefix orders first.
    pub fn compare(&self, other: &ValueList) -> Ordering {
        for (a, b) in self.members.iter().zip(other.members.iter()) {
            match a.cell.compare(&b.cell) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        self.members.len().cmp(&other.members.len())
    }

    pub fn context_uris(&self) -> ContextUris {
        let mut uris = ContextUris::new();
        if let Some(namespace) = self.property.namespace() {
            uris.insert(namespace, self.alias.clone());
        }
        for member in &self.members {
            uris.merge(member.cell.context_uris());
        }
        uris
    }

    fn check_index(&self, index: usize) -> Result<(), VocabError> {
        if index < self.members.len() {
            Ok(())
        } else {
            Err(VocabError::IndexOutOfRange {
                index,
                len: self.members.len(),
            })
        }
    }

    fn check_insert(&self, index: usize) -> Result<(), VocabError> {
        if index <= self.members.len() {
            Ok(())
        } else {
            Err(VocabError::IndexOutOfRange {
                index,
                len: self.members.len(),
            })
        }
    }

    fn new_member(&self, index: usize, value: CellValue) -> Member {
        Member {
            index,
            parent: Some(self.id),
            cell: ValueCell::from_value(Arc::clone(&self.property), self.alias.clone(), value),
        }
    }

    // `index` must be at most `len()`.
    fn attach(&mut self, index: usize, value: CellValue) {
        self.present = true;
        let member = self.new_member(index, value);
        self.members.insert(index, member);
        self.renumber(index + 1);
    }

    // `index` must be in range.
    fn replace(&mut self, index: usize, value: CellValue) -> Member {
        self.present = true;
        let member = self.new_member(index, value);
        let mut old = std::mem::replace(&mut self.members[index], member);
        old.parent = None;
        old
    }

    fn renumber(&mut self, from: usize) {
        for (index, member) in self.members.iter_mut().enumerate().skip(from) {
            member.index = index;
        }
    }
}

impl Clone for ValueList {
    /// The copy is a distinct list: its members point back to it, not to
    /// the original.
    fn clone(&self) -> Self {
        let id = ListId::next();
        let members = self
            .members
            .iter()
            .map(|member| Member {
                index: member.index,
                parent: Some(id),
                cell: member.cell.clone(),
            })
            .collect();

        Self {
            id,
            property: Arc::clone(&self.property),
            alias: self.alias.clone(),
            members,
            present: self.present,
        }
    }
}

impl<'a> IntoIterator for &'a ValueList {
    type Item = &'a Member;
    type IntoIter = slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{kind::Kind, scalar::XsdString};

    const AS: &str = "https://www.w3.org/ns/activitystreams";

    #[derive(Debug, Clone, PartialEq)]
    struct Label(String);

    impl VocabValue for Label {
        const TYPE_NAME: &'static str = "Label";

        fn decode(raw: &Map<String, Value>, _: &AliasContext) -> Result<Self, VocabError> {
            raw.get("label")
                .and_then(Value::as_str)
                .map(|s| Self(s.to_owned()))
                .ok_or_else(|| VocabError::decode(Self::TYPE_NAME, "missing label"))
        }

        fn encode(&self) -> Result<Value, VocabError> {
            Ok(json!({ "label": self.0 }))
        }

        fn compare(&self, other: &Self) -> Ordering {
            self.0.cmp(&other.0)
        }
    }

    fn property(collapse: bool) -> Arc<Property> {
        Property::builder("label")
            .namespace(AS)
            .non_functional()
            .object::<Label>()
            .scalar::<XsdString>()
            .reference(true)
            .string_precedence(crate::property::StringPrecedence::ReferenceFirst)
            .collapse_singleton(collapse)
            .build()
    }

    fn label(list: &ValueList, index: usize) -> &str {
        &list.at(index).unwrap().get::<Label>().unwrap().0
    }

    fn labels(list: &ValueList) -> Vec<String> {
        list.iter()
            .map(|m| m.get::<Label>().map(|l| l.0.clone()).unwrap_or_default())
            .collect()
    }

    fn assert_contiguous(list: &ValueList) {
        for (position, member) in list.iter().enumerate() {
            assert_eq!(member.index(), position);
            assert!(!member.is_orphaned());
        }
    }

    fn abc() -> ValueList {
        let mut list = ValueList::new(property(false));
        for name in ["a", "b", "c"] {
            list.append_concrete(Label(name.to_owned())).unwrap();
        }
        list
    }

    #[test]
    fn test_append_assigns_tail_index() {
        let list = abc();
        assert_eq!(list.len(), 3);
        assert_eq!(labels(&list), ["a", "b", "c"]);
        assert_contiguous(&list);
    }

    #[test]
    fn test_prepend_and_remove_renumber() {
        let mut list = abc();

        list.prepend_concrete(Label("d".to_owned())).unwrap();
        assert_eq!(labels(&list), ["d", "a", "b", "c"]);
        assert_contiguous(&list);

        let removed = list.remove(1).unwrap();
        assert_eq!(removed.get::<Label>(), Some(&Label("a".to_owned())));
        assert!(removed.is_orphaned());
        assert_eq!(labels(&list), ["d", "b", "c"]);
        assert_contiguous(&list);
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut list = abc();
        list.insert_reference(1, Iri::parse("https://example.org/x").unwrap()).unwrap();
        assert!(list.at(1).unwrap().is_reference());
        assert_eq!(label(&list, 2), "b");
        assert_contiguous(&list);

        list.insert_concrete(list.len(), Label("tail".to_owned())).unwrap();
        assert_eq!(label(&list, 4), "tail");
    }

    #[test]
    fn test_set_replaces_in_place_and_detaches_old_member() {
        let mut list = abc();
        let old = list.set_scalar::<XsdString>(1, "plain".to_owned()).unwrap();

        assert!(old.is_orphaned());
        assert_eq!(old.next(&list).map(|m| m.index()), None);
        assert_eq!(list.len(), 3);
        assert_eq!(list.at(1).unwrap().scalar::<XsdString>(), Some(&"plain".to_owned()));
        assert_contiguous(&list);
    }

    #[test]
    fn test_out_of_range_leaves_list_unchanged() {
        let mut list = abc();
        let out_of_range = VocabError::IndexOutOfRange { index: 3, len: 3 };

        assert_eq!(list.at(3).err(), Some(out_of_range.clone()));
        assert_eq!(list.remove(3).err(), Some(out_of_range.clone()));
        assert_eq!(list.set_concrete(3, Label("x".to_owned())).err(), Some(out_of_range.clone()));
        assert_eq!(list.swap(0, 3), Err(out_of_range.clone()));
        assert_eq!(list.less(3, 0), Err(out_of_range));
        assert_eq!(
            list.insert_concrete(4, Label("x".to_owned())),
            Err(VocabError::IndexOutOfRange { index: 4, len: 3 })
        );
        assert_eq!(labels(&list), ["a", "b", "c"]);
    }

    #[test]
    fn test_foreign_kind_is_rejected() {
        let mut list = abc();
        let strict = Property::builder("label").non_functional().reference(false).build();
        let mut strict_list = ValueList::new(strict);

        assert!(strict_list
            .append_reference(Iri::parse("https://example.org/").unwrap())
            .is_err());
        assert!(strict_list.append_concrete(Label("x".to_owned())).is_err());
        assert!(strict_list.is_empty());

        assert!(list.prepend_reference(Iri::parse("https://example.org/").unwrap()).is_ok());
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_swap_keeps_indices_consistent() {
        let mut list = abc();
        list.swap(0, 2).unwrap();
        assert_eq!(labels(&list), ["c", "b", "a"]);
        assert_contiguous(&list);
    }

    #[test]
    fn test_sort_canonical() {
        let mut list = ValueList::new(property(false));
        list.append_concrete(Label("b".to_owned())).unwrap();
        list.append_scalar::<XsdString>("text".to_owned()).unwrap();
        list.append_concrete(Label("a".to_owned())).unwrap();
        list.append_reference(Iri::parse("https://example.org/").unwrap()).unwrap();

        assert!(list.less(2, 0).unwrap());
        assert!(!list.less(0, 2).unwrap());

        list.sort_canonical();
        let kinds: Vec<_> = list.iter().map(|m| m.kind().unwrap()).collect();
        assert_eq!(
            kinds,
            [
                Kind::Reference,
                Kind::Concrete { rank: 0, name: "Label" },
                Kind::Concrete { rank: 0, name: "Label" },
                Kind::Concrete { rank: 1, name: "xsd:string" },
            ]
        );
        assert_eq!(label(&list, 1), "a");
        assert_eq!(label(&list, 2), "b");
        assert_contiguous(&list);
    }

    #[test]
    fn test_cursor_survives_tail_append() {
        let mut list = abc();
        let begin = list.begin().unwrap();

        list.append_concrete(Label("tail".to_owned())).unwrap();

        assert_eq!(list.resolve(begin).unwrap().index(), 0);
        let mut cursor = begin;
        let mut visited = vec![label(&list, cursor.index()).to_owned()];
        while let Some(next) = cursor.next(&list) {
            visited.push(label(&list, next.index()).to_owned());
            cursor = next;
        }
        assert_eq!(visited, ["a", "b", "c", "tail"]);
        assert_eq!(cursor.next(&list), None);
        assert!(list.resolve(list.end()).is_none());
    }

    #[test]
    fn test_stale_cursor_sees_current_contents() {
        let mut list = abc();
        let second = list.begin().unwrap().next(&list).unwrap();
        assert_eq!(label(&list, second.index()), "b");

        list.prepend_concrete(Label("new".to_owned())).unwrap();
        assert_eq!(list.resolve(second).unwrap().get::<Label>(), Some(&Label("a".to_owned())));

        list.remove(0).unwrap();
        list.remove(0).unwrap();
        list.remove(0).unwrap();
        assert!(list.resolve(second).is_none());
        assert_eq!(second.next(&list), None);
    }

    #[test]
    fn test_member_navigation() {
        let list = abc();
        let first = list.at(0).unwrap();
        let second = first.next(&list).unwrap();
        assert_eq!(second.get::<Label>(), Some(&Label("b".to_owned())));
        assert_eq!(second.prev(&list).unwrap().index(), 0);
        assert!(first.prev(&list).is_none());
        assert!(list.at(2).unwrap().next(&list).is_none());

        let other = abc();
        assert!(first.next(&other).is_none());
        assert!(other.resolve(list.begin().unwrap()).is_none());
    }

    #[test]
    fn test_clone_is_a_distinct_list() {
        let list = abc();
        let copy = list.clone();
        assert_ne!(list.id(), copy.id());
        assert!(copy.resolve(copy.begin().unwrap()).is_some());
        assert!(copy.at(0).unwrap().next(&copy).is_some());
        assert!(copy.at(0).unwrap().next(&list).is_none());
    }

    #[test]
    fn test_decode_array_and_bare_value() {
        let property = property(false);
        let aliases = AliasContext::new();

        let raw = json!([{"label": "x"}, "https://example.org/x", "free text", 7]);
        let list = ValueList::decode(Some(&raw), &property, &aliases).unwrap();
        assert_eq!(list.len(), 4);
        assert!(list.at(0).unwrap().is::<Label>());
        assert!(list.at(1).unwrap().is_reference());
        assert!(list.at(2).unwrap().scalar::<XsdString>().is_some());
        assert!(list.at(3).unwrap().is_opaque());
        assert_contiguous(&list);
        assert_eq!(list.encode().unwrap(), raw);

        let bare = json!({"label": "only"});
        let list = ValueList::decode(Some(&bare), &property, &aliases).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.encode().unwrap(), json!([bare]));

        let empty = ValueList::decode(None, &property, &aliases).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.encode().unwrap(), json!([]));
    }

    #[test]
    fn test_decode_fails_on_invalid_element() {
        let property = Property::builder("label")
            .non_functional()
            .object::<Label>()
            .opaque(false)
            .build();
        let raw = json!([{"label": "x"}, {"nothing": "here"}]);
        assert_eq!(
            ValueList::decode(Some(&raw), &property, &AliasContext::new()).err(),
            Some(VocabError::UnrecognizedShape {
                property: "label".to_owned()
            })
        );
    }

    #[test]
    fn test_presence_tracks_decode_and_writes() {
        let property = property(false);
        let aliases = AliasContext::new();

        let absent = ValueList::decode(None, &property, &aliases).unwrap();
        assert!(!absent.is_present());

        let empty = ValueList::decode(Some(&json!([])), &property, &aliases).unwrap();
        assert!(empty.is_present());
        assert!(empty.is_empty());
        assert!(empty.clone().is_present());

        let mut written = ValueList::new(property);
        assert!(!written.is_present());
        written.append_concrete(Label("x".to_owned())).unwrap();
        written.remove(0).unwrap();
        assert!(written.is_present());
        assert_eq!(written.encode().unwrap(), json!([]));
    }

    #[test]
    fn test_singleton_collapse() {
        let mut collapsing = ValueList::new(property(true));
        collapsing.append_concrete(Label("one".to_owned())).unwrap();
        assert_eq!(collapsing.encode().unwrap(), json!({"label": "one"}));

        collapsing.append_concrete(Label("two".to_owned())).unwrap();
        assert_eq!(
            collapsing.encode().unwrap(),
            json!([{"label": "one"}, {"label": "two"}])
        );

        let mut wrapping = ValueList::new(property(false));
        wrapping.append_concrete(Label("one".to_owned())).unwrap();
        assert_eq!(wrapping.encode().unwrap(), json!([{"label": "one"}]));
    }

    #[test]
    fn test_compare_is_lexicographic() {
        let short = {
            let mut list = ValueList::new(property(false));
            list.append_concrete(Label("a".to_owned())).unwrap();
            list
        };
        let long = abc();
        let mut bigger = abc();
        bigger.set_concrete(0, Label("z".to_owned())).unwrap();

        assert_eq!(short.compare(&long), Ordering::Less);
        assert_eq!(long.compare(&short), Ordering::Greater);
        assert_eq!(long.compare(&bigger), Ordering::Less);
        assert_eq!(long.compare(&long.clone()), Ordering::Equal);
    }

    #[test]
    fn test_get_mut_and_context() {
        let aliases = AliasContext::new().with_alias(AS, "as");
        let raw = json!({"as:label": [{"label": "x"}]});
        let mut list = ValueList::decode_from(raw.as_object().unwrap(), &property(false), &aliases).unwrap();

        list.get_mut::<Label>(0).unwrap().0 = "y".to_owned();
        assert_eq!(label(&list, 0), "y");
        assert!(list.get_mut::<Label>(5).is_none());
        assert_eq!(list.name(), "as:label");
        assert_eq!(list.context_uris().get(AS), Some("as"));
    }
}
