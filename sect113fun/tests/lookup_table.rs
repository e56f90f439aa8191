#![cfg(feature = "alloc")]
use sect113fun::{Curve, Error, FieldElement, Point};

fn fe(hex: &str) -> FieldElement {
    hex.parse().unwrap()
}

fn known_points(curve: &Curve) -> Vec<Point<'_>> {
    [
        (
            "01a57a6a7b26ca5ef52fcdb8164797",
            "00b3adc94ed1fe674c06e695baba1d",
        ),
        (
            "009d73616f35f4ab1407d73562c10f",
            "00a52830277958ee84d1315ed31886",
        ),
        (
            "00689918dbec7e5a0dd6dfc0aa55c7",
            "0095e9a9ec9b297bd4bf36e059184f",
        ),
        (
            "000000000000000000000000000001",
            "01ffffffffffffffffffffffffffff",
        ),
    ]
    .iter()
    .map(|(x, y)| curve.create_point(fe(x), fe(y), false))
    .collect()
}

#[test]
fn end_to_end_sect113r2() {
    let curve = Curve::sect113r2().unwrap();
    assert_eq!(curve.m(), 113);
    assert_eq!(curve.k1(), 9);
    assert!(curve.is_trinomial());

    let points = known_points(&curve);
    let table = curve.create_lookup_table(&points, 0, 4).unwrap();
    assert_eq!(table.len(), 4);

    assert_eq!(table.lookup(2), table.lookup_var(2).unwrap());
    assert_eq!(table.lookup(2), points[2]);

    let read_back = (0..4).map(|i| table.lookup(i)).collect::<Vec<_>>();
    assert_eq!(read_back, points);
}

#[test]
fn looked_up_points_are_normalized_and_uncompressed() {
    let curve = Curve::sect113r2().unwrap();
    let points = known_points(&curve)
        .into_iter()
        .map(|p| curve.create_point(*p.raw_x().unwrap(), *p.raw_y().unwrap(), true))
        .collect::<Vec<_>>();
    let table = curve.create_lookup_table(&points, 0, points.len()).unwrap();
    for i in 0..table.len() {
        let p = table.lookup(i);
        assert!(p.is_normalized());
        assert!(!p.is_compressed());
        assert_eq!(p.zs(), &[FieldElement::ONE]);
        assert!(core::ptr::eq(p.curve(), &curve));
    }
}

#[test]
fn size_matches_requested_count() {
    let curve = Curve::sect113r2().unwrap();
    let points = known_points(&curve);
    for offset in 0..=points.len() {
        for len in 0..=(points.len() - offset) {
            let table = curve.create_lookup_table(&points, offset, len).unwrap();
            assert_eq!(table.len(), len);
            for i in 0..len {
                assert_eq!(table.lookup(i), points[offset + i]);
                assert_eq!(table.lookup_var(i).unwrap(), points[offset + i]);
            }
            assert_eq!(
                table.lookup_var(len),
                Err(Error::IndexOutOfRange { index: len, len })
            );
        }
    }
}

#[test]
fn unsupported_coordinate_system_leaves_curve_usable() {
    use sect113fun::CoordinateSystem;
    let curve = Curve::sect113r2().unwrap();
    let x = FieldElement::ONE;
    let y = FieldElement::ZERO;

    assert_eq!(
        curve.create_point_in(CoordinateSystem::Jacobian, x, y, &[FieldElement::ONE], false),
        Err(Error::UnsupportedCoordinateSystem(CoordinateSystem::Jacobian))
    );
    assert_eq!(
        curve.configure(CoordinateSystem::Affine).unwrap_err(),
        Error::UnsupportedCoordinateSystem(CoordinateSystem::Affine)
    );

    let point = curve
        .create_point_in(
            CoordinateSystem::LambdaProjective,
            x,
            y,
            &[FieldElement::ONE],
            false,
        )
        .unwrap();
    assert_eq!(point, curve.create_point(x, y, false));
    let table = curve.create_lookup_table(&[point], 0, 1).unwrap();
    assert_eq!(table.lookup(0), point);
}

#[test]
fn random_tables() {
    let curve = Curve::sect113r2().unwrap();
    let mut rng = rand::thread_rng();
    let points = (0..16)
        .map(|_| {
            curve.create_point(
                FieldElement::random(&mut rng),
                FieldElement::random(&mut rng),
                false,
            )
        })
        .collect::<Vec<_>>();
    let table = curve.create_lookup_table(&points, 0, 16).unwrap();
    for (i, point) in points.iter().enumerate() {
        assert_eq!(&table.lookup(i), point);
    }
}
