use fluent_structures::beam::stage::Completed;
use fluent_structures::*;
use model_engine::{EngineError, MockEngine, NativeBeam, NativeObject};

// ── Helpers ─────────────────────────────────────────────────────────────────

const PROFILE: &str = "D567";
const MATERIAL: &str = "C355";

fn start() -> Point {
    Point::new(1.0, 2.0, 3.0)
}

fn end() -> Point {
    Point::new(4.0, 5.0, 6.0)
}

fn required_beam() -> BeamBuilder<Completed> {
    Beam::builder()
        .start_point(start())
        .end_point(end())
        .profile(PROFILE)
        .material(MATERIAL)
}

fn sample_position() -> Position {
    Position {
        depth: DepthEnum::Middle,
        depth_offset: 12.0,
        rotation: RotationEnum::Top,
        rotation_offset: 23.0,
        plane: PlaneEnum::Right,
        plane_offset: 34.0,
    }
}

fn sample_deforming() -> DeformingData {
    DeformingData {
        shortening: 14.0,
        cambering: 3.5,
        angle: 45.0,
        angle2: 90.0,
    }
}

// ── Staged flow ─────────────────────────────────────────────────────────────

#[test]
fn required_properties_round_trip() {
    let beam = required_beam().build();

    assert_eq!(beam.start_point(), start());
    assert_eq!(beam.end_point(), end());
    assert_eq!(beam.profile(), PROFILE);
    assert_eq!(beam.material(), MATERIAL);
    assert_eq!(beam.beam_type(), BeamType::Beam);
}

#[test]
fn all_optional_properties_round_trip() {
    let position = sample_position();
    let identifier = Identifier::new(1234567);
    let beam = required_beam()
        .class("654321")
        .name("Beam name")
        .part_numbering("part", 101)
        .assembly_numbering("assembly", 909)
        .depth_position(position.depth, position.depth_offset)
        .plane_position(position.plane, position.plane_offset)
        .rotation_position(position.rotation, position.rotation_offset)
        .cast_unit_type(CastUnitType::CastInPlace)
        .finish("Painting")
        .identifier(identifier)
        .deforming_data(sample_deforming())
        .pour_phase(4567)
        .start_point_offset(Offset::new(67.0, 73.0, 81.0))
        .end_point_offset(Offset::new(93.0, 97.0, 103.0))
        .build();

    assert_eq!(beam.class(), "654321");
    assert_eq!(beam.name(), "Beam name");
    assert_eq!(beam.part_prefix(), "part");
    assert_eq!(beam.part_start_number(), 101);
    assert_eq!(beam.assembly_prefix(), "assembly");
    assert_eq!(beam.assembly_start_number(), 909);
    assert_eq!(beam.depth_position(), DepthEnum::Middle);
    assert_eq!(beam.depth_offset(), 12.0);
    assert_eq!(beam.plane_position(), PlaneEnum::Right);
    assert_eq!(beam.plane_offset(), 34.0);
    assert_eq!(beam.rotation_position(), RotationEnum::Top);
    assert_eq!(beam.rotation_offset(), 23.0);
    assert_eq!(beam.position(), position);
    assert_eq!(beam.cast_unit_type(), CastUnitType::CastInPlace);
    assert_eq!(beam.finish(), "Painting");
    assert_eq!(beam.identifier(), identifier);
    assert_eq!(beam.deforming_data(), sample_deforming());
    assert_eq!(beam.pour_phase(), 4567);
    assert_eq!(beam.start_point_offset(), Offset::new(67.0, 73.0, 81.0));
    assert_eq!(beam.end_point_offset(), Offset::new(93.0, 97.0, 103.0));
}

#[test]
fn position_setter_matches_individual_setters() {
    let p = sample_position();
    let whole = required_beam().position(p).build();
    let parts = required_beam()
        .plane_position(p.plane, p.plane_offset)
        .depth_position(p.depth, p.depth_offset)
        .rotation_position(p.rotation, p.rotation_offset)
        .build();
    assert_eq!(whole, parts);
}

#[test]
fn start_and_end_point_shortcut_matches_two_steps() {
    let combined = Beam::builder()
        .start_and_end_point(start(), end())
        .profile(PROFILE)
        .material(MATERIAL)
        .name("same")
        .build();
    let stepwise = required_beam().name("same").build();
    assert_eq!(combined, stepwise);
}

#[test]
fn omitted_optionals_keep_native_defaults() {
    let beam = required_beam().build();
    let native = NativeBeam::default();

    assert_eq!(beam.name(), native.name);
    assert_eq!(beam.class(), native.class);
    assert_eq!(beam.position(), native.position);
    assert_eq!(beam.part_start_number(), 1);
    assert_eq!(beam.cast_unit_type(), CastUnitType::Precast);
    assert!(!beam.identifier().is_valid());
}

#[test]
fn optional_setters_last_write_wins() {
    let beam = required_beam()
        .name("first")
        .pour_phase(1)
        .name("second")
        .pour_phase(2)
        .build();
    assert_eq!(beam.name(), "second");
    assert_eq!(beam.pour_phase(), 2);
}

#[test]
fn builder_of_type_sets_native_kind() {
    let column = Beam::builder_of_type(BeamType::Column)
        .start_and_end_point(Point::ORIGIN, Point::new(0.0, 0.0, 3000.0))
        .profile("HEB300")
        .material("S355")
        .build();
    assert_eq!(column.beam_type(), BeamType::Column);
    assert_eq!(column.as_native().beam_type, BeamType::Column);
}

// ── Default factory ─────────────────────────────────────────────────────────

#[test]
fn default_beam_properties_are_set() {
    let beam = Beam::default_builder().build();

    assert_eq!(beam.start_point(), Point::ORIGIN);
    assert_eq!(beam.end_point(), Point::new(6000.0, 0.0, 0.0));
    assert!(!beam.profile().is_empty());
    assert!(!beam.material().is_empty());
    assert!(!beam.class().is_empty());
}

#[test]
fn default_builder_accepts_optionals_like_staged_flow() {
    let beam = Beam::default_builder().name("defaulted").class("7").build();
    assert_eq!(beam.name(), "defaulted");
    assert_eq!(beam.class(), "7");
    assert_eq!(beam.profile(), "D500");
}

#[test]
fn defaults_from_json_fill_missing_fields() {
    let defaults = BeamDefaults::from_json(r#"{ "profile": "HEA200" }"#).unwrap();
    assert_eq!(defaults.profile, "HEA200");
    assert_eq!(defaults.material, "C245");

    let beam = Beam::builder_from_defaults(&defaults).build();
    assert_eq!(beam.profile(), "HEA200");
    assert_eq!(beam.class(), "0");
}

#[test]
fn malformed_defaults_are_rejected() {
    let err = BeamDefaults::from_json("{ not json").unwrap_err();
    assert!(matches!(err, BuildError::InvalidDefaults(_)));
}

// ── Rebuild and forwarding ──────────────────────────────────────────────────

#[test]
fn rebuild_copies_without_touching_original() {
    let original = required_beam().name("original").build();
    let changed = original.rebuild().name("changed").build();

    assert_eq!(original.name(), "original");
    assert_eq!(changed.name(), "changed");
    assert_eq!(changed.profile(), original.profile());
}

#[test]
fn insert_assigns_identifier_and_delete_clears_it() {
    let mut engine = MockEngine::new();
    let mut beam = required_beam().build();

    assert!(beam.insert(&mut engine));
    assert!(beam.identifier().is_valid());
    assert!(engine.contains(beam.identifier()));

    assert!(beam.delete(&mut engine));
    assert!(!beam.identifier().is_valid());
    assert_eq!(engine.object_count(), 0);
}

#[test]
fn insert_twice_is_refused() {
    let mut engine = MockEngine::new();
    let mut beam = required_beam().build();
    assert!(beam.insert(&mut engine));
    assert!(!beam.insert(&mut engine));
    assert_eq!(engine.object_count(), 1);
}

#[test]
fn insert_when_disconnected_passes_false_through() {
    let mut engine = MockEngine::new();
    engine.set_connected(false);
    let mut beam = required_beam().build();
    assert!(!beam.insert(&mut engine));
    assert!(!beam.identifier().is_valid());
}

#[test]
fn rebuilt_beam_modifies_inserted_object() {
    let mut engine = MockEngine::new();
    let mut beam = required_beam().name("v1").build();
    assert!(beam.insert(&mut engine));

    let updated = beam.rebuild().name("v2").build();
    assert!(updated.modify(&mut engine));

    match engine.select(beam.identifier()) {
        Some(NativeObject::Beam(stored)) => assert_eq!(stored.name, "v2"),
        other => panic!("expected stored beam, got {:?}", other),
    }
}

#[test]
fn get_assembly_has_beam_as_main_part() {
    let mut engine = MockEngine::new();
    let mut beam = required_beam().build();
    assert!(beam.insert(&mut engine));

    let assembly = beam.get_assembly(&engine).unwrap();
    assert_eq!(assembly.main_part, Some(beam.identifier()));
    assert!(assembly.secondaries.is_empty());
}

#[test]
fn get_assembly_of_uninserted_beam_fails() {
    let engine = MockEngine::new();
    let beam = required_beam().build();
    assert!(matches!(
        beam.get_assembly(&engine),
        Err(EngineError::ObjectNotFound { .. })
    ));
}

#[test]
fn partial_builder_can_be_inspected() {
    let builder = Beam::builder()
        .start_point(Point::new(1.0, 2.0, 3.0))
        .end_point(Point::new(4.0, 5.0, 6.0));
    assert_eq!(builder.peek().start_point(), Point::new(1.0, 2.0, 3.0));
    assert_eq!(builder.peek().end_point(), Point::new(4.0, 5.0, 6.0));
    assert_eq!(builder.peek().profile(), "");
}
