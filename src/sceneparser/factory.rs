use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use lazy_static::lazy_static;
use crate::sceneparser::error::ErrorCode;
use crate::sceneparser::value::ValueKind;

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum ContainerKind {
    Camera,
    AmbientLight,
    PointLight,
    DirectionalLight,
    Material,
    Polymesh,
    /// Top level scene document. Its entries are handled by `Trunk`, so it
    /// has no rows in the child table.
    Scene
}

impl Display for ContainerKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContainerKind::Camera           => "camera",
            ContainerKind::AmbientLight     => "ambient_light",
            ContainerKind::PointLight       => "point_light",
            ContainerKind::DirectionalLight => "directional_light",
            ContainerKind::Material         => "material",
            ContainerKind::Polymesh         => "polymesh",
            ContainerKind::Scene            => "scene"
        };

        write!(f, "{}", s)
    }
}

/// What to build for a key before recursing into its value.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum NodeKind {
    Leaf(ValueKind),
    Container(ContainerKind)
}

use ContainerKind::*;
use ValueKind::*;

const CHILDREN: &[(ContainerKind, &str, NodeKind)] = &[
    (Camera,           "position",     NodeKind::Leaf(Vec3)),
    (Camera,           "viewdir",      NodeKind::Leaf(Vec3)),
    (Camera,           "updir",        NodeKind::Leaf(Vec3)),
    (Camera,           "aspectratio",  NodeKind::Leaf(Float)),

    (AmbientLight,     "color",        NodeKind::Leaf(Vec3)),

    (PointLight,       "position",     NodeKind::Leaf(Vec3)),
    (PointLight,       "color",        NodeKind::Leaf(Vec3)),

    (DirectionalLight, "direction",    NodeKind::Leaf(Vec3)),
    (DirectionalLight, "color",        NodeKind::Leaf(Vec3)),

    (Material,         "emissive",     NodeKind::Leaf(Vec3)),
    (Material,         "ambient",      NodeKind::Leaf(Vec3)),
    (Material,         "specular",     NodeKind::Leaf(Vec3)),
    (Material,         "reflective",   NodeKind::Leaf(Vec3)),
    (Material,         "diffuse",      NodeKind::Leaf(Vec3)),
    (Material,         "transmissive", NodeKind::Leaf(Vec3)),
    (Material,         "shininess",    NodeKind::Leaf(Float)),
    (Material,         "index",        NodeKind::Leaf(Float)),
    (Material,         "name",         NodeKind::Leaf(QuotedString)),

    (Polymesh,         "material",     NodeKind::Container(Material)),
    (Polymesh,         "translate",    NodeKind::Leaf(Vec3)),
    (Polymesh,         "scale",        NodeKind::Leaf(Vec3)),
    // (angle, x, y, z)
    (Polymesh,         "rotate",       NodeKind::Leaf(Vec4)),
    (Polymesh,         "transform",    NodeKind::Leaf(Mat4)),
    (Polymesh,         "objfile",      NodeKind::Leaf(QuotedString))
];

lazy_static! {
    static ref FACTORY: HashMap<ContainerKind, HashMap<&'static str, NodeKind>> = {
        let mut m: HashMap<ContainerKind, HashMap<&'static str, NodeKind>> = HashMap::new();

        for &(c, key, n) in CHILDREN {
            m.entry(c).or_default().insert(key, n);
        }

        m
    };
}

/// Node kind to instantiate for `key` inside a `kind` container.
pub fn make_child(kind: ContainerKind, key: &str) -> Result<NodeKind, ErrorCode> {
    FACTORY
        .get(&kind)
        .and_then(|children| children.get(key))
        .copied()
        .ok_or_else(|| ErrorCode::UnknownKey { container_kind: kind, key: key.to_owned() })
}

/// Every legal key of `kind`, in declaration order.
pub fn keys(kind: ContainerKind) -> impl Iterator<Item = &'static str> {
    CHILDREN
        .iter()
        .filter(move |&&(c, _, _)| c == kind)
        .map(|&(_, key, _)| key)
}
