//! # Values and Geometry Handles
//!
//! The worker's argument and result model. Requests carry plain values
//! (numbers, booleans, text, lists); kernel results stay inside the worker as
//! opaque [`GeomHandle`]s that callers thread through chained operations
//! without ever copying or re-serializing the geometry itself.

use csg_kernel::Geometry;
use csg_mesh::MeshBuffer;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// An opaque, shareable reference to a kernel result.
///
/// Handles compare by identity, not by geometric content: two handles are
/// equal exactly when they refer to the same stored result. The geometry
/// never crosses the channel boundary; only the handle does.
#[derive(Debug, Clone)]
pub struct GeomHandle {
    id: u64,
    geometry: Arc<Geometry>,
}

impl GeomHandle {
    /// Wraps a kernel result in a fresh handle.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            id: NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed),
            geometry: Arc::new(geometry),
        }
    }

    /// Returns the process-unique handle id.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the referenced geometry.
    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }
}

impl PartialEq for GeomHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// A request input or operation result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Value>),
    Geometry(GeomHandle),
    Mesh(MeshBuffer),
}

/// Named inputs of one operation call.
///
/// An ordered map so that rendering and hashing see fields in a stable order
/// regardless of insertion order.
pub type Inputs = BTreeMap<String, Value>;

/// Renders inputs as `{field: value, ...}` for error messages.
///
/// Stack traces do not survive the channel boundary, so failed responses must
/// carry the field names and values themselves.
pub fn describe_inputs(inputs: &Inputs) -> String {
    let fields: Vec<String> = inputs
        .iter()
        .map(|(name, value)| format!("{name}: {}", describe_value(value)))
        .collect();
    format!("{{{}}}", fields.join(", "))
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Text(t) => format!("{t:?}"),
        Value::List(items) => {
            let rendered: Vec<String> = items.iter().map(describe_value).collect();
            format!("[{}]", rendered.join(", "))
        }
        Value::Geometry(handle) => format!("geometry#{}", handle.id()),
        Value::Mesh(buffer) => format!("mesh[{} triangles]", buffer.triangle_count()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csg_kernel::primitives::cube;

    #[test]
    fn handles_compare_by_identity() {
        let solid = Geometry::Solid(cube(1.0, false).unwrap());
        let a = GeomHandle::new(solid.clone());
        let b = GeomHandle::new(solid);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn handle_ids_are_unique() {
        let a = GeomHandle::new(Geometry::Empty);
        let b = GeomHandle::new(Geometry::Empty);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn inputs_render_with_field_names_and_values() {
        let mut inputs = Inputs::new();
        inputs.insert("size".into(), Value::Number(10.0));
        inputs.insert("center".into(), Value::Bool(true));
        let rendered = describe_inputs(&inputs);
        assert_eq!(rendered, "{center: true, size: 10}");
    }

    #[test]
    fn geometry_values_render_as_handles() {
        let handle = GeomHandle::new(Geometry::Empty);
        let expected = format!("geometry#{}", handle.id());
        let mut inputs = Inputs::new();
        inputs.insert("mesh".into(), Value::Geometry(handle));
        assert!(describe_inputs(&inputs).contains(&expected));
    }

    #[test]
    fn lists_render_recursively() {
        let mut inputs = Inputs::new();
        inputs.insert(
            "offset".into(),
            Value::List(vec![Value::Number(1.0), Value::Number(2.0)]),
        );
        assert_eq!(describe_inputs(&inputs), "{offset: [1, 2]}");
    }
}
