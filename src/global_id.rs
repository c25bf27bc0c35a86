//! Relay global object identifiers.
//!
//! A global id is the base64 encoding of `"<Type>:<primary key>"`, e.g.
//! `QWN0b3I6Nw==` for actor 7. Clients may also pass a bare decimal primary
//! key wherever an actor reference is expected.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NodeKind {
    Actor,
    Movie,
}

impl NodeKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Actor => "Actor",
            NodeKind::Movie => "Movie",
        }
    }

    fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "Actor" => Some(NodeKind::Actor),
            "Movie" => Some(NodeKind::Movie),
            _ => None,
        }
    }
}

pub fn encode(kind: NodeKind, id: i32) -> String {
    STANDARD.encode(format!("{}:{}", kind.type_name(), id))
}

pub fn decode(global_id: &str) -> Option<(NodeKind, i32)> {
    let bytes = STANDARD.decode(global_id).ok()?;
    let raw = String::from_utf8(bytes).ok()?;
    let (type_name, id) = raw.split_once(':')?;
    let kind = NodeKind::from_type_name(type_name)?;
    let id = id.parse::<i32>().ok()?;
    Some((kind, id))
}

/// Resolve a client-supplied identifier to a primary key of `kind`.
///
/// Accepts either a decimal primary key or a global id of the same kind.
pub fn parse_key(raw: &str, kind: NodeKind) -> Option<i32> {
    if let Ok(id) = raw.trim().parse::<i32>() {
        return Some(id);
    }

    match decode(raw) {
        Some((decoded_kind, id)) if decoded_kind == kind => Some(id),
        _ => None,
    }
}
