//! Book container seam.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::api::SourceError;

/// One resource of a book, in reading order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// Stable id within the book
    pub id: String,
    /// Size in bytes as declared by the container
    pub declared_size: usize,
}

impl ResourceDescriptor {
    pub fn new(id: impl Into<String>, declared_size: usize) -> Self {
        Self {
            id: id.into(),
            declared_size,
        }
    }
}

/// Ordered resource list of an open book
///
/// The list must stay stable for the lifetime of a reading session.
pub trait ResourceProvider {
    /// Resources in reading order
    fn resources(&self) -> &[ResourceDescriptor];

    /// Raw markup bytes of the resource at `index`
    fn read(&self, index: usize) -> Result<Cow<'_, [u8]>, SourceError>;

    /// Index of the resource with the given id
    fn index_of(&self, id: &str) -> Option<usize> {
        self.resources()
            .iter()
            .position(|descriptor| descriptor.id == id)
    }

    /// Number of resources
    fn resource_count(&self) -> usize {
        self.resources().len()
    }
}

/// Book held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryBook {
    descriptors: Vec<ResourceDescriptor>,
    contents: Vec<Vec<u8>>,
}

impl InMemoryBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resource whose declared size is its byte length
    pub fn push(&mut self, id: impl Into<String>, content: impl Into<Vec<u8>>) {
        let content = content.into();
        let size = content.len();
        self.push_with_size(id, content, size);
    }

    /// Append a resource with an explicit declared size
    pub fn push_with_size(
        &mut self,
        id: impl Into<String>,
        content: impl Into<Vec<u8>>,
        declared_size: usize,
    ) {
        self.descriptors
            .push(ResourceDescriptor::new(id, declared_size));
        self.contents.push(content.into());
    }

    /// Builder-style [`Self::push`]
    pub fn with_resource(mut self, id: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.push(id, content);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl ResourceProvider for InMemoryBook {
    fn resources(&self) -> &[ResourceDescriptor] {
        &self.descriptors
    }

    fn read(&self, index: usize) -> Result<Cow<'_, [u8]>, SourceError> {
        self.contents
            .get(index)
            .map(|content| Cow::Borrowed(content.as_slice()))
            .ok_or_else(|| format!("resource index {index} out of range").into())
    }
}
