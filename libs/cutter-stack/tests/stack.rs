use cutter_mesh::{validate_mesh, CutterParameters, Profile, RadialArray, RadialAxis};
use cutter_stack::{
    ArrayModifierSpec, BevelSettings, BooleanOperation, CutterPlacement, CutterSettings,
    CutterStack, Modifier, StackError,
};
use glam::{DMat4, DQuat, DVec3};

fn radial_wave() -> CutterParameters {
    CutterParameters::new(Profile::Wave)
        .with_frame(true)
        .with_frame_curved(true)
        .with_radial(true)
        .with_radial_array(RadialArray::default().with_axis(RadialAxis::Z).with_steps(6))
}

#[test]
fn regenerates_many_cutters_in_stack_order() {
    let mut stack = CutterStack::new();
    for i in 0..12 {
        let profile = [Profile::Rectangle, Profile::Ellipse, Profile::Wave][i % 3];
        let params = CutterParameters::new(profile)
            .with_resolution(8 + i as u32)
            .with_frame(i % 2 == 0);
        let name = stack.next_name();
        stack
            .add(CutterSettings::new(name).with_parameters(params))
            .unwrap();
    }

    let result = stack.regenerate(&DMat4::IDENTITY).unwrap();
    assert_eq!(result.cutters.len(), 12);
    for (i, output) in result.cutters.iter().enumerate() {
        assert_eq!(output.name, format!("Cutter_{}", i + 1));
        let report = validate_mesh(&output.mesh);
        assert!(report.is_solid(), "{}: {}", output.name, report);
        assert!(output.mesh.faces().iter().all(|f| f.is_smooth()));
    }
    assert_eq!(result.target_modifiers.len(), 13);
}

#[test]
fn radial_framed_wave_cutter_through_the_stack() {
    let mut stack = CutterStack::new();
    stack
        .add(CutterSettings::new("Cutter_1").with_parameters(radial_wave()))
        .unwrap();

    let result = stack.regenerate(&DMat4::IDENTITY).unwrap();
    let mesh = &result.cutters[0].mesh;
    // 6 copies of two rails, each 5 path points × 12 section points
    assert_eq!(mesh.vertex_count(), 6 * 2 * 5 * 12);
    assert!(validate_mesh(mesh).is_solid());
}

#[test]
fn arrays_and_bevel_reach_the_cutter_plan() {
    let mut cutter = CutterSettings::new("Cutter_1")
        .with_bevel(BevelSettings::cutter().with_width(0.01).with_segments(4));
    cutter.arrays[1] = ArrayModifierSpec::new("Array_2", 5, DVec3::new(0.0, 0.0, 0.5));

    let mut stack = CutterStack::new();
    stack.add(cutter).unwrap();
    let result = stack.regenerate(&DMat4::IDENTITY).unwrap();
    let plan = result.cutters[0].modifiers.modifiers();

    assert_eq!(plan.len(), 3);
    assert!(matches!(&plan[0], Modifier::Bevel { segments: 4, harden_normals: false, .. }));
    assert!(matches!(&plan[2], Modifier::Array { count: 5, .. }));
}

#[test]
fn target_plan_follows_operations_and_visibility() {
    let mut stack = CutterStack::new();
    stack
        .add(CutterSettings::new("Cutter_1").with_operation(BooleanOperation::Union))
        .unwrap();
    let mut hidden = CutterSettings::new("Cutter_2");
    hidden.show_effect = false;
    stack.add(hidden).unwrap();

    let plan = stack.regenerate(&DMat4::IDENTITY).unwrap().target_modifiers;
    assert!(matches!(
        plan.get("Cutter_1"),
        Some(Modifier::Boolean { operation: BooleanOperation::Union, show_viewport: true, .. })
    ));
    assert!(matches!(
        plan.get("Cutter_2"),
        Some(Modifier::Boolean { show_viewport: false, .. })
    ));
    assert_eq!(plan.modifiers().last().map(Modifier::name), Some("Bevel"));
}

#[test]
fn cutter_follows_rotated_target() {
    let mut stack = CutterStack::new();
    stack
        .add(CutterSettings::new("Cutter_1").with_placement(CutterPlacement {
            position: DVec3::X,
            ..CutterPlacement::default()
        }))
        .unwrap();

    let target = DMat4::from_rotation_translation(
        DQuat::from_rotation_y(std::f64::consts::PI),
        DVec3::new(0.0, 1.0, 0.0),
    );
    let world = stack.regenerate(&target).unwrap().cutters[0].world_transform;
    assert!(world
        .transform_point3(DVec3::ZERO)
        .abs_diff_eq(DVec3::new(-1.0, 1.0, 0.0), 1e-9));
}

#[test]
fn invalid_cutter_fails_the_batch() {
    let mut stack = CutterStack::new();
    stack
        .add(CutterSettings::new("Cutter_1").with_parameters(radial_wave()))
        .unwrap();
    stack
        .add(
            CutterSettings::new("Broken")
                .with_parameters(CutterParameters::default().with_size(DVec3::new(1.0, -1.0, 1.0))),
        )
        .unwrap();

    let err = stack.regenerate(&DMat4::IDENTITY).unwrap_err();
    assert!(matches!(err, StackError::Generation { ref name, .. } if name == "Broken"));
}
