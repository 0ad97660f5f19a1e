//! JSON Schema inference from example documents.
//!
//! [`ShapeInferrer`] walks a document once, records the shape of every value it sees and merges
//! shapes that share a position (all elements of an array, the same key across objects). The
//! merged shapes are then rendered as a JSON Schema:
//!
//! - objects list every observed key under `properties`; `required` keeps the keys present in
//!   every merged object
//! - arrays describe all their elements with one merged `items` schema
//! - integral numbers are `integer`, `integer` merged with `number` is `number`
//! - mixed primitive types render as `{"type": [..]}`, anything richer as `{"anyOf": [..]}`

use crate::error::Result;
use serde_json::{json, Map, Number, Value};
use std::collections::HashMap;

/// Produces a JSON Schema describing a parsed document.
pub trait SchemaInferrer: Send + Sync {
    fn infer(&self, document: &Value) -> Result<Value>;
}

/// Built-in inferrer following the genson merge rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeInferrer;

impl SchemaInferrer for ShapeInferrer {
    fn infer(&self, document: &Value) -> Result<Value> {
        let mut shapes = ShapeSet::default();
        shapes.add(Shape::observe(document));
        Ok(shapes.to_schema())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

#[derive(Debug, Clone)]
enum Shape {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    /// `None` until at least one element has been observed.
    Array(Option<Box<ShapeSet>>),
    Object(ObjectShape),
}

// Depth is unbounded, so recursion grows the stack on demand.
const RED_ZONE: usize = 64 * 1024;
const STACK_SEGMENT: usize = 1024 * 1024;

impl Shape {
    fn observe(value: &Value) -> Self {
        stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || Self::observe_inner(value))
    }

    fn observe_inner(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if is_integral(n) => Self::Integer,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(items) => {
                let mut merged: Option<Box<ShapeSet>> = None;
                for item in items {
                    merged.get_or_insert_with(Default::default).add(Self::observe(item));
                }
                Self::Array(merged)
            }
            Value::Object(map) => Self::Object(ObjectShape::observe(map)),
        }
    }

    fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Boolean => Kind::Boolean,
            Self::Integer => Kind::Integer,
            Self::Number => Kind::Number,
            Self::String => Kind::String,
            Self::Array(_) => Kind::Array,
            Self::Object(_) => Kind::Object,
        }
    }

    /// Merge a shape of the same kind into this one.
    fn absorb(&mut self, other: Shape) {
        stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || self.absorb_inner(other))
    }

    fn absorb_inner(&mut self, other: Shape) {
        match (self, other) {
            (Self::Array(items), Self::Array(Some(other_items))) => match items {
                Some(items) => items.merge(*other_items),
                None => *items = Some(other_items),
            },
            (Self::Object(object), Self::Object(other_object)) => object.merge(other_object),
            _ => {}
        }
    }

    fn to_schema(&self) -> Value {
        stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || self.to_schema_inner())
    }

    fn to_schema_inner(&self) -> Value {
        let mut schema = Map::new();
        schema.insert("type".to_string(), json!(self.kind().name()));
        match self {
            Self::Array(Some(items)) => {
                schema.insert("items".to_string(), items.to_schema());
            }
            Self::Object(object) if !object.properties.is_empty() => {
                let properties: Map<String, Value> = object
                    .properties
                    .iter()
                    .map(|(key, shapes)| (key.clone(), shapes.to_schema()))
                    .collect();
                schema.insert("properties".to_string(), Value::Object(properties));
                if !object.required.is_empty() {
                    schema.insert("required".to_string(), json!(object.required));
                }
            }
            _ => {}
        }
        Value::Object(schema)
    }
}

fn is_integral(n: &Number) -> bool {
    n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0)
}

#[derive(Debug, Clone, Default)]
struct ObjectShape {
    properties: Vec<(String, ShapeSet)>,
    index: HashMap<String, usize>,
    required: Vec<String>,
}

impl ObjectShape {
    fn observe(map: &Map<String, Value>) -> Self {
        let mut object = Self::default();
        for (key, value) in map {
            let mut shapes = ShapeSet::default();
            shapes.add(Shape::observe(value));
            object.index.insert(key.clone(), object.properties.len());
            object.properties.push((key.clone(), shapes));
            object.required.push(key.clone());
        }
        object
    }

    fn merge(&mut self, other: ObjectShape) {
        let other_keys = other.index;
        self.required.retain(|key| other_keys.contains_key(key));
        for (key, shapes) in other.properties {
            match self.index.get(&key).copied() {
                Some(slot) => self.properties[slot].1.merge(shapes),
                None => {
                    self.index.insert(key.clone(), self.properties.len());
                    self.properties.push((key, shapes));
                }
            }
        }
    }
}

/// Shapes observed at one position, at most one per kind, in first-seen order.
#[derive(Debug, Clone, Default)]
struct ShapeSet {
    shapes: Vec<Shape>,
}

impl ShapeSet {
    fn position(&self, kind: Kind) -> Option<usize> {
        self.shapes.iter().position(|shape| shape.kind() == kind)
    }

    fn add(&mut self, shape: Shape) {
        match shape.kind() {
            Kind::Integer if self.position(Kind::Number).is_some() => {}
            Kind::Number => match self.position(Kind::Integer) {
                Some(slot) => self.shapes[slot] = Shape::Number,
                None if self.position(Kind::Number).is_some() => {}
                None => self.shapes.push(shape),
            },
            kind => match self.position(kind) {
                Some(slot) => self.shapes[slot].absorb(shape),
                None => self.shapes.push(shape),
            },
        }
    }

    fn merge(&mut self, other: ShapeSet) {
        for shape in other.shapes {
            self.add(shape);
        }
    }

    fn to_schema(&self) -> Value {
        if let [single] = self.shapes.as_slice() {
            return single.to_schema();
        }
        let schemas: Vec<Value> = self.shapes.iter().map(Shape::to_schema).collect();
        let all_bare = schemas
            .iter()
            .all(|schema| schema.as_object().is_some_and(|map| map.len() == 1));
        if all_bare {
            let types: Vec<&str> = self.shapes.iter().map(|s| s.kind().name()).collect();
            json!({ "type": types })
        } else {
            json!({ "anyOf": schemas })
        }
    }
}
