// Validates the orb shader with naga and checks the uniform layout it expects.

use orb_core::{FrameParameters, OrbConfig, OrbUniforms, ORB_WGSL};

#[test]
fn orb_shader_parses_and_validates() {
    let module = naga::front::wgsl::parse_str(ORB_WGSL).expect("wgsl parse");
    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator.validate(&module).expect("wgsl validate");

    let names: Vec<&str> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_main"));
}

#[test]
fn uniform_block_layout() {
    assert_eq!(std::mem::size_of::<OrbUniforms>(), 144);
    assert_eq!(std::mem::size_of::<OrbUniforms>() % 16, 0);
}

#[test]
fn uniforms_carry_frame_parameters() {
    let config = OrbConfig::default();
    let camera = config.camera(16.0 / 9.0);
    let frame = FrameParameters {
        time: 3.25,
        pointer_dir: glam::Vec2::new(0.2, -0.4),
        pointer_strength: 0.6,
        offset: glam::Vec2::ZERO,
    };
    let u = OrbUniforms::new(&frame, &camera);
    assert_eq!(u.time, 3.25);
    assert_eq!(u.pointer, [0.2, -0.4]);
    assert_eq!(u.pointer_strength, 0.6);

    // Camera sits at z = 4 looking down -z
    let origin = glam::Mat4::from_cols_array_2d(&u.model_view).transform_point3(glam::Vec3::ZERO);
    assert!((origin.z - -4.0).abs() < 1e-5);

    let bytes: &[u8] = bytemuck::bytes_of(&u);
    assert_eq!(bytes.len(), 144);
}

#[test]
fn offset_translates_model_view() {
    let camera = OrbConfig::default().camera(1.0);
    let frame = FrameParameters {
        offset: glam::Vec2::new(-0.03, 0.01),
        ..FrameParameters::default()
    };
    let u = OrbUniforms::new(&frame, &camera);
    let origin = glam::Mat4::from_cols_array_2d(&u.model_view).transform_point3(glam::Vec3::ZERO);
    assert!((origin.x - -0.03).abs() < 1e-6);
    assert!((origin.y - 0.01).abs() < 1e-6);
}
