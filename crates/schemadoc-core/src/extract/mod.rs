//! Extraction engine: JSON-Schema document -> canonical field tree
//!
//! Extraction is a pure read of the input document. Recursion is bounded by
//! [`ExtractOptions::max_depth`](crate::ExtractOptions); `$ref` pointers are
//! not followed, so self-referential schemas are truncated at the depth bound
//! instead of being expanded forever.
//!
//! Copyright (c) 2025 Schemadoc Team
//! Licensed under the Apache-2.0 license

pub mod classify;
pub mod constraints;
pub mod document;
pub mod examples;
pub mod field;
pub mod nullable;
pub mod object;
pub mod union;

pub use classify::{classify, variant_type_name};
pub use constraints::extract_constraints;
pub use document::{extract_model, root_shape, RootShape, ROOT_FIELD_NAME};
pub use examples::extract_examples;
pub use field::{extract_array_item, extract_field, ITEM_FIELD_NAME, VALUE_FIELD_NAME};
pub use nullable::{unwrap_nullable, Unwrapped};
pub use object::extract_object_fields;
pub use union::{resolve_union, UnionResolution, DISCRIMINATOR_CANDIDATES};
