use std::fmt::{self, Display, Formatter};
use crate::core::dotscene::{Float, Vector3f, Vector4f, Matrix4f};
use crate::sceneparser::error::Result;
use crate::sceneparser::factory::ContainerKind;
use crate::sceneparser::node::Tree;
use crate::sceneparser::stream::Stream;

macro_rules! entity {
    ($(#[$m:meta])* $name:ident, $kind:expr) => {
        $(#[$m])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            tree: Tree
        }

        impl $name {
            pub const KIND: ContainerKind = $kind;

            pub fn parse(s: &mut Stream) -> Result<Self> {
                Tree::parse(s, $kind).map(|tree| Self { tree })
            }

            pub fn parse_str(text: &str) -> Result<Self> {
                Self::parse(&mut Stream::new(text))
            }

            pub fn tree(&self) -> &Tree {
                &self.tree
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.tree)
            }
        }
    }
}

macro_rules! get {
    ($x:ident, $key:expr, $as:ident, $t:ty) => {
        pub fn $x(&self) -> Option<$t> {
            self.tree.value($key).and_then(|v| v.$as())
        }
    }
}

entity!(Camera, ContainerKind::Camera);
entity!(AmbientLight, ContainerKind::AmbientLight);
entity!(PointLight, ContainerKind::PointLight);
entity!(DirectionalLight, ContainerKind::DirectionalLight);
entity!(Material, ContainerKind::Material);
entity!(
    /// A triangle mesh loaded from `objfile`. The path is kept verbatim;
    /// resolving and reading it is up to the caller.
    Polymesh, ContainerKind::Polymesh
);

impl Camera {
    get!(position,    "position",    as_vec3,  Vector3f);
    get!(viewdir,     "viewdir",     as_vec3,  Vector3f);
    get!(updir,       "updir",       as_vec3,  Vector3f);
    get!(aspectratio, "aspectratio", as_float, Float);
}

impl AmbientLight {
    get!(color, "color", as_vec3, Vector3f);
}

impl PointLight {
    get!(position, "position", as_vec3, Vector3f);
    get!(color,    "color",    as_vec3, Vector3f);
}

impl DirectionalLight {
    get!(direction, "direction", as_vec3, Vector3f);
    get!(color,     "color",     as_vec3, Vector3f);
}

impl Material {
    get!(emissive,     "emissive",     as_vec3,  Vector3f);
    get!(ambient,      "ambient",      as_vec3,  Vector3f);
    get!(specular,     "specular",     as_vec3,  Vector3f);
    get!(reflective,   "reflective",   as_vec3,  Vector3f);
    get!(diffuse,      "diffuse",      as_vec3,  Vector3f);
    get!(transmissive, "transmissive", as_vec3,  Vector3f);
    get!(shininess,    "shininess",    as_float, Float);
    get!(index,        "index",        as_float, Float);
    get!(name,         "name",         as_str,   &str);
}

impl Polymesh {
    get!(translate, "translate", as_vec3, Vector3f);
    get!(scale,     "scale",     as_vec3, Vector3f);
    get!(rotate,    "rotate",    as_vec4, Vector4f);
    get!(transform, "transform", as_mat4, Matrix4f);
    get!(objfile,   "objfile",   as_str,  &str);

    pub fn material(&self) -> Option<Material> {
        self.tree.subtree("material").map(|tree| Material { tree })
    }
}
