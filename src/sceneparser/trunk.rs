use std::fmt::{self, Display, Formatter};
use log::debug;
use crate::sceneparser::entities::{AmbientLight, Camera, DirectionalLight, PointLight, Polymesh};
use crate::sceneparser::error::{Error, ErrorCode, Result};
use crate::sceneparser::factory::ContainerKind;
use crate::sceneparser::node::read_key;
use crate::sceneparser::stream::Stream;

/// Whole scene document. Unlike a generic container, every key except
/// `camera` may repeat, and repeated entries are kept in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trunk {
    pub camera             : Option<Camera>,
    pub ambient_lights     : Vec<AmbientLight>,
    pub point_lights       : Vec<PointLight>,
    pub directional_lights : Vec<DirectionalLight>,
    pub objects            : Vec<Polymesh>
}

impl Trunk {
    pub fn parse(s: &mut Stream) -> Result<Trunk> {
        let mut trunk = Trunk::default();

        s.expect('{')?;

        loop {
            if s.eat('}') {
                break;
            }

            let location = s.location();
            let key = read_key(s)?;
            s.expect('=')?;

            match key {
                "camera"            => {
                    if trunk.camera.is_some() {
                        return Err(Error::new(location, ErrorCode::DuplicateCamera));
                    }
                    trunk.camera = Some(Camera::parse(s)?);
                }
                "ambient_light"     => trunk.ambient_lights.push(AmbientLight::parse(s)?),
                "point_light"       => trunk.point_lights.push(PointLight::parse(s)?),
                "directional_light" => trunk.directional_lights.push(DirectionalLight::parse(s)?),
                "polymesh"          => trunk.objects.push(Polymesh::parse(s)?),
                _                   => {
                    return Err(Error::new(location, ErrorCode::UnknownKey {
                        container_kind: ContainerKind::Scene,
                        key: key.to_owned()
                    }));
                }
            }
            debug!("Parsed {} entry at {}", key, location);

            s.expect(';')?;
        }

        debug!(
            "Scene has {} ambient, {} point and {} directional lights and {} objects",
            trunk.ambient_lights.len(), trunk.point_lights.len(),
            trunk.directional_lights.len(), trunk.objects.len());

        Ok(trunk)
    }

    pub fn parse_str(text: &str) -> Result<Trunk> {
        Trunk::parse(&mut Stream::new(text))
    }

    /// Number of top level entries.
    pub fn len(&self) -> usize {
        self.camera.iter().count()
            + self.ambient_lights.len()
            + self.point_lights.len()
            + self.directional_lights.len()
            + self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Display for Trunk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;

        if let Some(ref c) = self.camera {
            writeln!(f, "    camera = {};", c)?;
        }
        for l in self.ambient_lights.iter() {
            writeln!(f, "    ambient_light = {};", l)?;
        }
        for l in self.point_lights.iter() {
            writeln!(f, "    point_light = {};", l)?;
        }
        for l in self.directional_lights.iter() {
            writeln!(f, "    directional_light = {};", l)?;
        }
        for o in self.objects.iter() {
            writeln!(f, "    polymesh = {};", o)?;
        }

        write!(f, "}}")
    }
}
