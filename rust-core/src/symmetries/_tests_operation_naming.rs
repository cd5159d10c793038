#[cfg(test)]
mod _tests_operation_naming {
    use super::super::conjugacy_classes::compute_classes;
    use super::super::group_closure::GroupClosure;
    use super::super::operation_naming::{is_dihedral, name_operations};
    use super::super::point_groups::PointGroup;
    use super::super::symmetry_operations::{OperationKind, SymmetryOperation};
    use super::super::symmetry_point_groups::standard_generators;
    use crate::symmetries::conjugacy_classes::class_lookup;

    fn names(group: &str) -> Vec<String> {
        let group = PointGroup::from_generators((), standard_generators(group).unwrap()).unwrap();
        group.iter().map(|op| op.name().to_string()).collect()
    }

    fn assert_names(group: &str, expected: &[&str]) {
        assert_eq!(names(group), expected, "names of {}", group);
    }

    #[test]
    fn test_c2v_names() {
        assert_names("C_2v", &["E", "C_2", "sigma_v(xz)", "sigma_v(yz)"]);
    }

    #[test]
    fn test_single_axis_powers() {
        assert_names("C_4", &["E", "C_4", "C_4^3", "C_2"]);
        assert_names("S_4", &["E", "C_2", "S_4", "S_4^3"]);
        assert_names("S_6", &["E", "C_3", "C_3^2", "i", "S_6", "S_6^5"]);
        assert_names("C_2h", &["E", "C_2", "i", "sigma_h(xy)"]);
        assert_names("C_3h", &["E", "C_3", "C_3^2", "S_3", "S_3^5", "sigma_h(xy)"]);
    }

    #[test]
    fn test_vertical_plane_primes() {
        assert_names("C_3v", &["E", "C_3", "C_3^2", "sigma_v(xz)", "sigma_v'", "sigma_v''"]);
        assert_names(
            "C_4v",
            &["E", "C_4", "C_4^3", "C_2", "sigma_v(xz)", "sigma_v'", "sigma_v''", "sigma_v(yz)"],
        );
    }

    #[test]
    fn test_dihedral_axis_labels() {
        // The (y) rotation label is reserved for the (0, 1, 1) diagonal, so the
        // y axis itself is primed
        assert_names("D_2", &["E", "C_2(z)", "C_2'", "C_2(x)"]);
        assert_names(
            "D_2h",
            &["E", "C_2(z)", "C_2'", "C_2(x)", "i", "sigma_h(xy)", "sigma_v(xz)", "sigma_v(yz)"],
        );
        assert_names(
            "D_3h",
            &[
                "E", "C_3", "C_3^2", "C_2", "C_2'", "C_2(x)", "S_3", "S_3^5",
                "sigma_h(xy)", "sigma_v(xz)", "sigma_v'", "sigma_v''",
            ],
        );
    }

    #[test]
    fn test_dihedral_planes() {
        assert_names(
            "D_2d",
            &["E", "C_2(z)", "C_2'", "C_2(x)", "S_4", "S_4^3", "sigma_d", "sigma_d'"],
        );
        assert_names(
            "D_3d",
            &[
                "E", "C_3", "C_3^2", "C_2", "C_2'", "C_2(x)", "i", "S_6", "S_6^5",
                "sigma_d", "sigma_d'", "sigma_d(yz)",
            ],
        );
        assert_names(
            "D_4h",
            &[
                "E", "C_4", "C_4^3", "C_2(z)", "C_2'", "C_2''", "C_2'''", "C_2(x)", "i",
                "S_4", "S_4^3", "sigma_h(xy)", "sigma_v(xz)", "sigma_d'", "sigma_d''",
                "sigma_v(yz)",
            ],
        );
    }

    #[test]
    fn test_d6h_planes_follow_c2_classes() {
        // sigma_v contains the C2' class through x, sigma_d the C2'' class through y
        let reflections: Vec<String> = names("D_6h").split_off(17);
        assert_eq!(
            reflections,
            [
                "sigma_h(xy)", "sigma_v(xz)", "sigma_d'", "sigma_d''", "sigma_v'", "sigma_v''",
                "sigma_d(yz)",
            ]
        );
        let reflections: Vec<String> = names("D_4h").split_off(11);
        assert_eq!(
            reflections,
            ["sigma_h(xy)", "sigma_v(xz)", "sigma_d'", "sigma_d''", "sigma_v(yz)"]
        );
    }

    #[test]
    fn test_tetrahedral_names() {
        assert_names(
            "T_d",
            &[
                "E", "C_3", "C_3'", "C_3''", "C_3'''", "C_3^2", "C_3'^2", "C_3''^2", "C_3'''^2",
                "C_2(z)", "C_2'", "C_2(x)", "S_4(z)", "S_4(y)", "S_4(x)", "S_4(z)^3",
                "S_4(y)^3", "S_4(x)^3", "sigma_d", "sigma_d'", "sigma_d''", "sigma_d'''",
                "sigma_d''''", "sigma_d'''''",
            ],
        );
        let th = names("T_h");
        assert_eq!(&th[12..21], &["i", "S_6", "S_6'", "S_6''", "S_6'''", "S_6^5", "S_6'^5", "S_6''^5", "S_6'''^5"]);
        assert_eq!(&th[21..], &["sigma_v(xy)", "sigma_v(xz)", "sigma_v(yz)"]);
    }

    #[test]
    fn test_octahedral_coordinate_planes_are_horizontal() {
        let group = PointGroup::from_generators((), standard_generators("O_h").unwrap()).unwrap();
        let horizontal: Vec<&str> = group
            .reflections()
            .filter(|op| op.is_principal_reflection())
            .map(SymmetryOperation::name)
            .collect();
        assert_eq!(horizontal, ["sigma_h(xy)", "sigma_h(xz)", "sigma_h(yz)"]);

        // All three share a class
        let sigma_xy = group.reflections().next().unwrap();
        let class = group.class_of(sigma_xy).unwrap();
        let mut members: Vec<&str> = group.class_members(class).map(SymmetryOperation::name).collect();
        members.sort_unstable();
        assert_eq!(members, ["sigma_h(xy)", "sigma_h(xz)", "sigma_h(yz)"]);

        let rotations: Vec<&str> = group.rotations().map(SymmetryOperation::name).collect();
        assert_eq!(&rotations[..3], &["C_4(z)", "C_4'", "C_4(x)"]);
        assert!(rotations.contains(&"C_2(y)"));
    }

    #[test]
    fn test_every_operation_named() {
        for name in ["C_5v", "D_6d", "T", "O", "I_h"] {
            let group = PointGroup::from_generators((), standard_generators(name).unwrap()).unwrap();
            assert!(group.iter().all(|op| !op.name().is_empty()), "{}", name);
            assert_eq!(group.identity().name(), "E");
        }
    }

    #[test]
    fn test_name_operations_flags_principal_reflection() {
        let mut operations = GroupClosure::new(standard_generators("C_3h").unwrap(), true)
            .close()
            .unwrap();
        let classes = compute_classes(&operations).unwrap();
        name_operations(&mut operations, &classes);

        let flagged: Vec<&SymmetryOperation> = operations
            .iter()
            .filter(|op| op.is_principal_reflection())
            .collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].kind(), OperationKind::Reflection);
        assert_eq!(flagged[0].name(), "sigma_h(xy)");
    }

    #[test]
    fn test_is_dihedral() {
        let mut operations = GroupClosure::new(standard_generators("D_2d").unwrap(), true)
            .close()
            .unwrap();
        let classes = compute_classes(&operations).unwrap();
        name_operations(&mut operations, &classes);
        let class_of = class_lookup(&classes, operations.len());

        let reflections: Vec<usize> = operations
            .iter()
            .enumerate()
            .filter(|(_, op)| op.kind() == OperationKind::Reflection)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(reflections.len(), 2);
        assert!(reflections.iter().all(|&r| is_dihedral(&operations, r, &class_of)));

        let mut c2v = GroupClosure::new(standard_generators("C_2v").unwrap(), true)
            .close()
            .unwrap();
        let classes = compute_classes(&c2v).unwrap();
        name_operations(&mut c2v, &classes);
        let class_of = class_lookup(&classes, c2v.len());
        assert!(!is_dihedral(&c2v, 2, &class_of));
        assert!(!is_dihedral(&c2v, 3, &class_of));
    }
}
