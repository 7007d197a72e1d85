#[cfg(test)]
mod roundtrip {
    use dotscene::core::dotscene::{Matrix4f, Vector3f};
    use dotscene::sceneparser::entities::{Camera, Polymesh};
    use dotscene::sceneparser::factory::ContainerKind;
    use dotscene::sceneparser::node::Tree;
    use dotscene::sceneparser::trunk::Trunk;

    const SCENE: &str = r#"{
        camera = { position = (0.5, -1.25, 10); viewdir = (0, 0, -1); updir = (0, 1, 0); aspectratio = 1.7777778; };
        ambient_light = { color = (0.1, 0.1, 0.1); };
        directional_light = { direction = (0, -1, 0); color = (1, 1, 0.9); };
        point_light = { position = (0, 5, 0); color = (1, 1, 1); };
        point_light = { color = (0.2, 0.2, 1); position = (3, 1, 0); };
        polymesh = {
            objfile = "box.obj";
            material = {
                emissive = (0, 0, 0); ambient = (0.1, 0.1, 0.1); specular = (1, 1, 1);
                reflective = (0.3, 0.3, 0.3); diffuse = (0.7, 0.2, 0.2); transmissive = (0, 0, 0);
                shininess = 64; index = 1.5; name = "red plastic";
            };
            translate = (1, 0, 0);
            scale = (0.5, 0.5, 0.5);
            rotate = (30, 0, 1, 0);
            transform = ((1, 0, 0, 2), (0, 1, 0, 0), (0, 0, 1, 0), (0, 0, 0, 1));
        };
        polymesh = { objfile = "floor.obj"; };
    }"#;

    #[test]
    fn scene_reparses_equal() {
        let t = Trunk::parse_str(SCENE).unwrap();
        let printed = t.to_string();
        let again = Trunk::parse_str(&printed).unwrap();

        assert_eq!(again, t);
        assert_eq!(again.to_string(), printed);
    }

    #[test]
    fn nested_values_survive() {
        let t = Trunk::parse_str(SCENE).unwrap();
        let again = Trunk::parse_str(&t.to_string()).unwrap();

        let mesh = &again.objects[0];
        let m = mesh.material().unwrap();
        assert_eq!(m.name(), Some("red plastic"));
        assert_eq!(m.shininess(), Some(64.0));

        let mut expected = Matrix4f::identity();
        expected[(0, 3)] = 2.0;
        assert_eq!(mesh.transform(), Some(expected));
    }

    #[test]
    fn each_entity_reparses_equal() {
        let t = Trunk::parse_str(SCENE).unwrap();

        let camera = t.camera.unwrap();
        assert_eq!(Camera::parse_str(&camera.to_string()).unwrap(), camera);
        assert_eq!(camera.position(), Some(Vector3f::new(0.5, -1.25, 10.0)));

        for o in t.objects.iter() {
            assert_eq!(&Polymesh::parse_str(&o.to_string()).unwrap(), o);
        }

        for l in t.point_lights.iter() {
            let tree = Tree::parse_str(&l.to_string(), ContainerKind::PointLight).unwrap();
            assert_eq!(&tree, l.tree());
        }
    }

    #[test]
    fn built_scene_reparses_equal() {
        let mut t = Trunk::default();
        t.camera = Some(Camera::parse_str("{ aspectratio = 0.75; }").unwrap());
        t.objects.push(Polymesh::parse_str("{ objfile = \"a.obj\"; }").unwrap());
        t.objects.push(Polymesh::parse_str("{ objfile = \"b.obj\"; }").unwrap());

        let again = Trunk::parse_str(&t.to_string()).unwrap();

        assert_eq!(again, t);
        assert_eq!(again.objects[1].objfile(), Some("b.obj"));
    }
}
