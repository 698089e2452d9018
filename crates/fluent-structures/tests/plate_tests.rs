use fluent_structures::plate::stage::Completed;
use fluent_structures::*;
use model_engine::{EngineError, MockEngine};

fn outline() -> Vec<ContourPoint> {
    vec![
        ContourPoint::from(Point::planar(0.0, 0.0)),
        ContourPoint::new(
            Point::planar(1000.0, 0.0),
            Chamfer::new(ChamferKind::Line, 50.0, 50.0),
        ),
        ContourPoint::from(Point::planar(1000.0, 500.0)),
        ContourPoint::from(Point::planar(0.0, 500.0)),
    ]
}

fn required_plate() -> PlateBuilder<Completed> {
    Plate::builder()
        .points(outline())
        .profile("PL20")
        .material("S355")
}

#[test]
fn required_properties_round_trip() {
    let plate = required_plate().build();
    assert_eq!(plate.points(), outline());
    assert_eq!(plate.contour(), Contour::new(outline()));
    assert_eq!(plate.profile(), "PL20");
    assert_eq!(plate.material(), "S355");
}

#[test]
fn optional_properties_round_trip() {
    let plate = required_plate()
        .name("Base plate")
        .class("3")
        .assembly_numbering("A", 10)
        .part_numbering("p", 20)
        .depth_position(DepthEnum::Front, 15.0)
        .build();

    assert_eq!(plate.name(), "Base plate");
    assert_eq!(plate.class(), "3");
    assert_eq!(plate.assembly_prefix(), "A");
    assert_eq!(plate.assembly_start_number(), 10);
    assert_eq!(plate.part_prefix(), "p");
    assert_eq!(plate.part_start_number(), 20);
    assert_eq!(plate.depth_position(), DepthEnum::Front);
    assert_eq!(plate.depth_offset(), 15.0);
}

#[test]
fn outline_input_shapes_are_equivalent() {
    let from_contour = Plate::builder()
        .contour(Contour::new(outline()))
        .profile("PL20")
        .material("S355")
        .build();
    let from_slice = Plate::builder()
        .points_slice(&outline())
        .profile("PL20")
        .material("S355")
        .build();
    let values: Vec<Value> = outline().into_iter().map(Value::from).collect();
    let from_values = Plate::builder()
        .points_from_values(&values)
        .unwrap()
        .profile("PL20")
        .material("S355")
        .build();

    assert_eq!(from_contour, required_plate().build());
    assert_eq!(from_slice, from_contour);
    assert_eq!(from_values, from_contour);
}

#[test]
fn plain_points_become_unchamfered_corners() {
    let plate = Plate::builder()
        .points([Point::planar(0.0, 0.0), Point::planar(10.0, 0.0), Point::planar(10.0, 10.0)])
        .profile("PL10")
        .material("S235")
        .build();
    assert!(plate
        .points()
        .iter()
        .all(|cp| cp.chamfer.kind == ChamferKind::None));
    assert_eq!(plate.points()[2].point, Point::planar(10.0, 10.0));
}

#[test]
fn untyped_outline_rejects_bare_points() {
    let values = vec![
        Value::from(ContourPoint::default()),
        Value::from(Point::planar(1.0, 1.0)),
    ];
    let err = Plate::builder().points_from_values(&values).unwrap_err();
    assert!(matches!(
        err,
        BuildError::ContractViolation {
            index: 1,
            expected: "ContourPoint",
            actual: "Point"
        }
    ));
}

#[test]
fn insert_creates_single_part_assembly() {
    let mut engine = MockEngine::new();
    let mut plate = required_plate().build();
    assert!(plate.insert(&mut engine));

    let assembly = plate.get_assembly(&engine).unwrap();
    assert_eq!(assembly.main_part, Some(plate.identifier()));
}

#[test]
fn delete_of_uninserted_plate_returns_false() {
    let mut engine = MockEngine::new();
    let mut plate = required_plate().build();
    assert!(!plate.delete(&mut engine));
}

#[test]
fn get_assembly_when_disconnected_propagates_error() {
    let mut engine = MockEngine::new();
    let mut plate = required_plate().build();
    assert!(plate.insert(&mut engine));
    engine.set_connected(false);
    assert_eq!(plate.get_assembly(&engine), Err(EngineError::NotConnected));
}

#[test]
fn rebuild_then_modify_updates_stored_plate() {
    let mut engine = MockEngine::new();
    let mut plate = required_plate().build();
    assert!(plate.insert(&mut engine));

    let renamed = plate.rebuild().name("renamed").build();
    assert!(renamed.modify(&mut engine));
    assert_eq!(renamed.identifier(), plate.identifier());
}
