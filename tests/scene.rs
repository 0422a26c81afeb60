use std::sync::{mpsc, Arc};
use std::thread;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use photon_intersect::config::SceneConfig;
use photon_intersect::{Face, Geometry, MaterialId, Mesh, MeshError, Ray, Scene, Shape, Sphere, Triangle, Vec3};

fn assert_vec_eq(expected: Vec3<f64>, actual: Vec3<f64>) {
    assert_abs_diff_eq!(expected.x, actual.x, epsilon = 1e-9);
    assert_abs_diff_eq!(expected.y, actual.y, epsilon = 1e-9);
    assert_abs_diff_eq!(expected.z, actual.z, epsilon = 1e-9);
}

fn corner() -> Triangle {
    Triangle::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        MaterialId(0),
    )
}

#[test]
fn sphere_head_on() {
    let sphere = Sphere::new(Vec3::new(0.0, 0.0, 0.0), 1.0, MaterialId(0));
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

    let hit = sphere.intersect(&ray, 0.0, 1e6).unwrap();

    assert_relative_eq!(4.0, hit.t);
    assert_vec_eq(Vec3::new(0.0, 0.0, 1.0), hit.position);
    assert_vec_eq(Vec3::new(0.0, 0.0, 1.0), hit.normal);
}

#[test]
fn sphere_hit_from_center_line_at_any_distance() {
    let center = Vec3::new(1.0, -2.0, 3.0);
    let radius = 2.5;
    let sphere = Sphere::new(center, radius, MaterialId(0));

    for &distance in &[3.0, 10.0, 1000.0] {
        let origin = center + Vec3::new(0.6, 0.0, 0.8).scale(distance);
        let ray = Ray::new(origin, (center - origin).unit());

        let hit = sphere.intersect(&ray, 0.0, 1e6).unwrap();
        assert_abs_diff_eq!(distance - radius, hit.t, epsilon = 1e-9);
    }
}

#[test]
fn triangle_interior_hit() {
    let triangle = corner();
    let ray = Ray::new(Vec3::new(0.2, 0.2, 1.0), Vec3::new(0.0, 0.0, -1.0));

    let hit = triangle.intersect(&ray, 0.0, 100.0).unwrap();

    assert_relative_eq!(1.0, hit.t, epsilon = 1e-12);
    assert_vec_eq(Vec3::new(0.2, 0.2, 0.0), hit.position);
    assert_eq!(triangle.face_normal(), hit.normal);
}

#[test]
fn triangle_beyond_hypotenuse_misses() {
    let ray = Ray::new(Vec3::new(0.6, 0.6, 1.0), Vec3::new(0.0, 0.0, -1.0));
    assert!(corner().intersect(&ray, 0.0, 100.0).is_none());
}

#[test]
fn queries_are_repeatable() {
    let shapes: Vec<Shape> = vec![
        Sphere::new(Vec3::new(0.0, 0.0, 0.0), 1.0, MaterialId(0)).into(),
        corner().into(),
    ];
    let ray = Ray::new(Vec3::new(0.1, 0.2, 4.0), Vec3::new(0.01, 0.0, -1.0));

    for shape in &shapes {
        let first = shape.intersect(&ray, 0.0, 100.0);
        assert!(first.is_some());
        assert_eq!(first, shape.intersect(&ray, 0.0, 100.0));
    }
}

#[test]
fn scene_from_json_config() {
    let config: SceneConfig = serde_json::from_str(
        r#"{
            "shapes": [
                { "type": "plane", "point": { "x": 0, "y": 0, "z": -1 }, "normal": { "x": 0, "y": 0, "z": 2 }, "material": 1 },
                { "type": "sphere", "center": { "x": 0, "y": 0, "z": 0 }, "radius": 0.5, "material": 2 },
                {
                    "type": "triangle",
                    "vertices": [
                        { "x": 2, "y": 0, "z": 0 },
                        { "x": 3, "y": 0, "z": 0 },
                        { "x": 2, "y": 1, "z": 0 }
                    ]
                }
            ]
        }"#,
    )
    .unwrap();

    let scene = Scene::from_config(config);
    assert_eq!(3, scene.len());

    let down = |x: f64, y: f64| Ray::new(Vec3::new(x, y, 5.0), Vec3::new(0.0, 0.0, -1.0));

    let hit = scene.closest_intersection(&down(0.0, 0.0), 0.0, 100.0).unwrap();
    assert_eq!(MaterialId(2), hit.material);
    assert_relative_eq!(4.5, hit.t);

    let hit = scene.closest_intersection(&down(2.2, 0.2), 0.0, 100.0).unwrap();
    assert_eq!(MaterialId::default(), hit.material);

    let hit = scene.closest_intersection(&down(-4.0, 4.0), 0.0, 100.0).unwrap();
    assert_eq!(MaterialId(1), hit.material);
    assert_vec_eq(Vec3::new(0.0, 0.0, 1.0), hit.normal);
}

#[test]
fn unknown_shape_type_is_rejected() {
    let result = serde_json::from_str::<SceneConfig>(r#"{ "shapes": [ { "type": "torus" } ] }"#);
    assert!(result.is_err());
}

#[test]
fn scene_is_queried_from_many_threads() {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mesh = Mesh::new(
            vec![
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(-1.0, 1.0, 0.0),
            ],
            vec![Face::new(0, 1, 2), Face::new(0, 2, 3)],
        );
        tx.send(Ok::<_, MeshError>(mesh)).unwrap();
    });

    let mut scene = Scene::new();
    assert_eq!(2, scene.receive_mesh(&rx, MaterialId(8), true).unwrap());

    let scene = Arc::new(scene);
    let workers: Vec<_> = (0..4)
        .map(|i| {
            let scene = Arc::clone(&scene);
            thread::spawn(move || {
                let ray = Ray::new(Vec3::new(-0.5 + 0.25 * i as f64, 0.3, 2.0), Vec3::new(0.0, 0.0, -1.0));
                scene.closest_intersection(&ray, 0.0, 10.0)
            })
        })
        .collect();

    for worker in workers {
        let hit = worker.join().unwrap().unwrap();
        assert_eq!(MaterialId(8), hit.material);
        assert_relative_eq!(2.0, hit.t, epsilon = 1e-12);
        // A flat quad smooths to its own face normal.
        assert_vec_eq(Vec3::new(0.0, 0.0, 1.0), hit.normal);
    }
}
