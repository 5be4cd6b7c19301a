use approx::assert_relative_eq;
use inertial3d::alignment::{InertiaAligner, RigidTransform};
use inertial3d::exporter::{ExporterConfig, ExporterEvent, RegistrationExporter};
use inertial3d::mass_properties::UniformDensity;
use inertial3d::math::{Point, Rotation, Vector};
use inertial3d::shape::{Cuboid, TriMesh};
use inertial3d::transformation::{LoaderTransform, MeshLoader, ObjLoader};

#[test]
fn aligned_mesh_is_exported_in_file_coordinates() {
    let root = std::env::temp_dir().join("inertial3d-export-round-trip");
    let out_dir = root.join("out");
    std::fs::create_dir_all(&out_dir).unwrap();

    let path = root.join("box.obj");
    let mut obj = String::from("# box\n");
    let mesh = Cuboid::new(Vector::new(1.0, 2.0, 3.0)).to_trimesh();
    for v in mesh.vertices() {
        obj += &format!("v {} {} {}\n", v.x, v.y, v.z);
    }
    obj += "\ng box\n";
    for t in mesh.indices() {
        obj += &format!("f {} {} {}\n", t[0] + 1, t[1] + 1, t[2] + 1);
    }
    std::fs::write(&path, obj).unwrap();

    let pretransform = LoaderTransform::new(
        Vector::repeat(2.0),
        Vector::new(0.0, 0.0, 90.0),
        Vector::new(1.0, 0.0, 0.0),
    );
    let source = ObjLoader::new(&path)
        .with_transform(pretransform)
        .load()
        .unwrap();

    let motion = RigidTransform::new(
        Rotation::from_scaled_axis(Vector::new(0.1, -0.2, 0.3)),
        Vector::new(0.5, 0.5, -1.0),
        Point::new(1.0, 0.0, 0.0),
    );
    let target = TriMesh::new(
        motion.transform_points(source.mesh.vertices()),
        source.mesh.indices().to_vec(),
    )
    .unwrap();

    let result = InertiaAligner::<UniformDensity>::default()
        .align_meshes(&source.mesh, &target)
        .unwrap();
    assert_eq!(result.verify(target.vertices(), 1.0e-8), Ok(true));

    let config = ExporterConfig {
        out_dir: out_dir.clone(),
        apply_inverse_transform: true,
        ..ExporterConfig::default()
    };
    let mut exporter = RegistrationExporter::from_loaded_meshes(config, [&source]);
    let written = exporter
        .handle_event(ExporterEvent::KeyPressed('e'), &result.points)
        .unwrap()
        .unwrap();
    assert_eq!(written, vec![out_dir.join("box.obj")]);

    let replicated = std::fs::read_to_string(&written[0]).unwrap();
    assert!(replicated.starts_with("# box\nv "));
    assert!(replicated.contains("\ng box\nf 5 6 1\n"));

    // Reading the export back with the same pre-transform gives the aligned mesh.
    let exported = ObjLoader::new(&written[0])
        .with_transform(pretransform)
        .load()
        .unwrap();
    assert_eq!(exported.mesh.indices(), target.indices());
    for (pt, expected) in exported.mesh.vertices().iter().zip(target.vertices()) {
        assert_relative_eq!(*pt, *expected, epsilon = 1.0e-3);
    }
}
