#[cfg(test)]
mod _tests_group_closure {
    use super::super::group_closure::GroupClosure;
    use super::super::symmetry_operations::{is_same_matrix, OperationKind, SymmetryOperation};
    use super::super::symmetry_point_groups::standard_generators;
    use crate::errors::PointGroupError;
    use nalgebra::{Matrix3, Vector3};
    use std::cmp::Ordering;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn c4_generators() -> Vec<SymmetryOperation> {
        vec![
            SymmetryOperation::identity(),
            SymmetryOperation::rotation(4, 1, Vector3::z()).unwrap(),
        ]
    }

    fn assert_closed(operations: &[SymmetryOperation]) {
        for a in operations {
            for b in operations {
                let product = a.matrix() * b.matrix();
                assert!(
                    operations.iter().any(|op| is_same_matrix(op.matrix(), &product)),
                    "{} * {} is missing",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_validation_rejects_open_set() {
        init_logger();
        let result = GroupClosure::new(c4_generators(), false).close();
        assert!(matches!(result, Err(PointGroupError::GroupNotClosed { .. })));
    }

    #[test]
    fn test_self_extension_completes_group() {
        init_logger();
        let operations = GroupClosure::new(c4_generators(), true).close().unwrap();
        assert_eq!(operations.len(), 4);
        assert_closed(&operations);
    }

    #[test]
    fn test_closed_set_validates_unchanged() {
        init_logger();
        let operations = vec![
            SymmetryOperation::identity(),
            SymmetryOperation::rotation(2, 1, Vector3::z()).unwrap(),
            SymmetryOperation::reflection(Vector3::y()).unwrap(),
            SymmetryOperation::reflection(Vector3::x()).unwrap(),
        ];
        let closed = GroupClosure::new(operations, false).close().unwrap();
        assert_eq!(closed.len(), 4);
        assert_closed(&closed);
    }

    #[test]
    fn test_missing_identity() {
        let generators = vec![SymmetryOperation::rotation(2, 1, Vector3::z()).unwrap()];
        let result = GroupClosure::new(generators, true).close();
        assert!(matches!(result, Err(PointGroupError::MissingIdentity)));
    }

    #[test]
    fn test_duplicate_generators_are_dropped() {
        init_logger();
        let generators = vec![
            SymmetryOperation::identity(),
            SymmetryOperation::rotation(2, 1, Vector3::z()).unwrap(),
            SymmetryOperation::identity(),
            SymmetryOperation::rotation(2, 1, -Vector3::z()).unwrap(),
        ];
        let closure = GroupClosure::new(generators, false);
        assert_eq!(closure.operations().len(), 2);
    }

    #[test]
    fn test_inverses_are_linked_and_symmetric() {
        init_logger();
        let operations = GroupClosure::new(standard_generators("D_4h").unwrap(), true)
            .close()
            .unwrap();
        assert_eq!(operations.len(), 16);

        for (index, op) in operations.iter().enumerate() {
            let inverse = op.inverse_index().expect("every inverse is linked");
            assert_eq!(operations[inverse].inverse_index(), Some(index));
            let product = op.matrix() * operations[inverse].matrix();
            assert!(is_same_matrix(&product, &Matrix3::identity()));
        }
    }

    #[test]
    fn test_output_is_in_canonical_order() {
        let operations = GroupClosure::new(standard_generators("D_3d").unwrap(), true)
            .close()
            .unwrap();
        assert_eq!(operations[0].kind(), OperationKind::Identity);
        for pair in operations.windows(2) {
            assert_ne!(pair[0].canonical_cmp(&pair[1]), Ordering::Greater);
        }
        assert_eq!(
            operations.last().map(SymmetryOperation::kind),
            Some(OperationKind::Reflection)
        );
    }

    #[test]
    fn test_generator_order_does_not_matter() {
        let forward = GroupClosure::new(standard_generators("C_6v").unwrap(), true)
            .close()
            .unwrap();
        let mut reversed_generators = standard_generators("C_6v").unwrap();
        reversed_generators.reverse();
        let reversed = GroupClosure::new(reversed_generators, true).close().unwrap();

        assert_eq!(forward, reversed);
        let forward_inverses: Vec<_> = forward.iter().map(SymmetryOperation::inverse_index).collect();
        let reversed_inverses: Vec<_> = reversed.iter().map(SymmetryOperation::inverse_index).collect();
        assert_eq!(forward_inverses, reversed_inverses);
    }

    #[test]
    fn test_element_for() {
        let mut validating = GroupClosure::new(c4_generators(), false);
        let c4 = SymmetryOperation::rotation(4, 1, Vector3::z()).unwrap();
        assert_eq!(validating.element_for(c4).unwrap(), 1);

        let c2 = SymmetryOperation::rotation(2, 1, Vector3::z()).unwrap();
        assert!(matches!(
            validating.element_for(c2.clone()),
            Err(PointGroupError::OperationNotFound { .. })
        ));

        let mut extending = GroupClosure::new(c4_generators(), true);
        assert_eq!(extending.element_for(c2.clone()).unwrap(), 2);
        assert_eq!(extending.element_for(c2).unwrap(), 2);
        assert_eq!(extending.operations().len(), 3);
    }

    #[test]
    fn test_lookup_or_insert_matrix() {
        let c2 = SymmetryOperation::rotation(2, 1, Vector3::z()).unwrap();

        let mut validating = GroupClosure::new(c4_generators(), false);
        assert!(matches!(
            validating.lookup_or_insert_matrix(*c2.matrix()),
            Err(PointGroupError::GroupNotClosed { .. })
        ));
        assert_eq!(validating.index_of_matrix(&Matrix3::identity()), Some(0));

        let mut extending = GroupClosure::new(c4_generators(), true);
        let index = extending.lookup_or_insert_matrix(*c2.matrix()).unwrap();
        assert_eq!(extending.operations()[index], c2);

        let scaled = Matrix3::identity() * 3.0;
        assert!(matches!(
            extending.lookup_or_insert_matrix(scaled),
            Err(PointGroupError::InvalidOperation { .. })
        ));
    }

    #[test]
    fn test_self_extension_respects_max_order() {
        init_logger();
        // C_6v has 12 operations
        let result = GroupClosure::new(standard_generators("C_6v").unwrap(), true)
            .with_max_order(8)
            .close();
        assert!(matches!(result, Err(PointGroupError::GroupTooLarge { limit: 8 })));

        let operations = GroupClosure::new(standard_generators("C_6v").unwrap(), true)
            .with_max_order(12)
            .close()
            .unwrap();
        assert_eq!(operations.len(), 12);
    }

    #[test]
    fn test_conflicting_inverse_is_rejected() {
        let mut closure = GroupClosure::new(
            vec![
                SymmetryOperation::identity(),
                SymmetryOperation::rotation(2, 1, Vector3::z()).unwrap(),
                SymmetryOperation::rotation(2, 1, Vector3::x()).unwrap(),
            ],
            false,
        );
        closure.link_inverses(1, 1).unwrap();
        // Linking the same pair again is fine
        closure.link_inverses(1, 1).unwrap();
        assert!(matches!(
            closure.link_inverses(1, 2),
            Err(PointGroupError::NonUniqueInverse { .. })
        ));
        assert!(matches!(
            closure.link_inverses(2, 1),
            Err(PointGroupError::NonUniqueInverse { .. })
        ));
    }

    #[test]
    fn test_generator_slots_are_cleared() {
        let closed = GroupClosure::new(standard_generators("C_2h").unwrap(), true)
            .close()
            .unwrap();
        assert!(closed.iter().all(|op| op.inverse_index().is_some()));

        let closure = GroupClosure::new(closed.into_iter().rev(), false);
        assert!(closure
            .operations()
            .iter()
            .all(|op| op.inverse_index().is_none() && op.name().is_empty()));
    }
}
