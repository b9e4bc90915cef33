use alloc::string::ToString;
use alloc::vec::Vec;

use tg_reflect::Tagged;
use tg_reflect::info::{FieldInfo, Schema};

use crate::{Direction, Field, Parent, Tag, TagError, Tagger};

// -----------------------------------------------------------------------------
// Dispatch

/// The tags active for one traversal.
pub(crate) struct Dispatch<'t, D: ?Sized, A> {
    /// Active tags, in registration order.
    tags: Vec<&'t Tag<D, A>>,
    /// Tag applied to fields without annotation.
    empty: Option<&'t Tag<D, A>>,
}

impl<'t, D: ?Sized, A> Dispatch<'t, D, A> {
    /// Resolves the active tags from the allow-list `names`.
    pub fn new(tagger: &'t Tagger<D, A>, names: &[&str]) -> Result<Self, TagError> {
        if tagger.is_empty() {
            return Err(TagError::NoTags);
        }
        if let Some(unknown) = names.iter().find(|name| !tagger.contains(name)) {
            return Err(TagError::UnknownTag(unknown.to_string()));
        }

        let tags = tagger
            .iter()
            .filter(|tag| names.is_empty() || names.iter().any(|name| *name == tag.name()))
            .collect();

        Ok(Self { tags, empty: None })
    }

    /// Checks the root schema and resolves the empty-field tag.
    ///
    /// An empty name means no empty-field tag.
    pub fn prepare(mut self, schema: &Schema, empty_tag: Option<&str>) -> Result<Self, TagError> {
        check_fields(schema)?;

        if let Some(name) = empty_tag.filter(|name| !name.is_empty()) {
            match self.tags.iter().find(|tag| tag.name() == name) {
                Some(tag) => self.empty = Some(*tag),
                None => return Err(TagError::UnknownEmptyFieldTag(name.to_string())),
            }
        }
        Ok(self)
    }

    /// The tags handling `field`, in dispatch order.
    fn handlers_for(&self, field: &FieldInfo) -> Vec<&'t Tag<D, A>> {
        let annotation = field.annotation();
        if annotation.is_empty()
            && let Some(empty) = self.empty
        {
            return alloc::vec![empty];
        }
        self.tags
            .iter()
            .filter(|tag| annotation.contains(tag.name()))
            .copied()
            .collect()
    }

    /// Resolves the handlers of every field before any of them runs.
    fn resolve(&self, schema: &Schema) -> Vec<Vec<&'t Tag<D, A>>> {
        schema.fields().iter().map(|field| self.handlers_for(field)).collect()
    }

    pub fn walk_in(
        &self,
        data: &D,
        target: &mut dyn Tagged,
        parent: Option<&Parent<'_>>,
    ) -> Result<(), TagError> {
        let schema = target.reflect_schema();
        check_fields(schema)?;

        for field in schema.fields() {
            if field.is_pointer() && field.is_struct() {
                target.reflect_materialize(field.index());
            }
        }

        let handlers = self.resolve(schema);

        for (info, tags) in schema.fields().iter().zip(handlers) {
            let mut field = Field::new_mut(&mut *target, info, parent);

            for tag in tags {
                let Some(handler) = tag.get_in_handler() else {
                    return Err(missing_handler(tag, Direction::In));
                };
                field.tag_mut().bind(tag.name(), tag.tag_symbols());
                log::trace!("In `{}` on {}::{}", tag.name(), schema.name(), info.name());
                handler.handle(data, &mut field)?;
            }

            let tag = field.into_tag();

            if info.is_struct()
                && let Some(nested) = target.reflect_nested_mut(info.index())
            {
                log::trace!("In descending into {}::{}", schema.name(), info.name());
                let link = Parent::new(schema, info, tag, None, parent);
                self.walk_in(data, nested, Some(&link))?;
            }
        }

        Ok(())
    }

    pub fn walk_out(
        &self,
        mut acc: A,
        source: &dyn Tagged,
        parent: Option<&Parent<'_>>,
    ) -> Result<A, TagError> {
        let schema = source.reflect_schema();
        check_fields(schema)?;

        let handlers = self.resolve(schema);

        for (info, tags) in schema.fields().iter().zip(handlers) {
            let mut field = Field::new_ref(source, info, parent);

            for tag in tags {
                let Some(handler) = tag.get_out_handler() else {
                    return Err(missing_handler(tag, Direction::Out));
                };
                field.tag_mut().bind(tag.name(), tag.tag_symbols());
                log::trace!("Out `{}` on {}::{}", tag.name(), schema.name(), info.name());
                acc = handler.handle(acc, &mut field)?;
            }

            let tag = field.into_tag();

            // A null pointer has nothing to project.
            if info.is_struct()
                && let Some(nested) = source.reflect_nested(info.index())
            {
                log::trace!("Out descending into {}::{}", schema.name(), info.name());
                let link = Parent::new(schema, info, tag, Some(source), parent);
                acc = self.walk_out(acc, nested, Some(&link))?;
            }
        }

        Ok(acc)
    }
}

#[inline]
fn check_fields(schema: &Schema) -> Result<(), TagError> {
    if schema.field_len() == 0 {
        Err(TagError::NoFields(schema.path()))
    } else {
        Ok(())
    }
}

fn missing_handler<D: ?Sized, A>(tag: &Tag<D, A>, direction: Direction) -> TagError {
    TagError::MissingHandler {
        tag: tag.name().to_string(),
        direction,
    }
}
