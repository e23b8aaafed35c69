mod utils;

#[cfg(test)]
mod tests {
    use crate::utils::{create_test_man, create_test_woman};
    use famille::{Family, FamilyRole, parse_family};

    fn create_test_family() -> Family {
        Family {
            pere: Some(create_test_man(3, "Pierre", "Dupont", Some(45)).with_conjoint(4)),
            mere: Some(create_test_woman(4, "Claire", "Martin", Some(43)).with_conjoint(3)),
            enfants: vec![
                create_test_woman(7, "Emma", "Dupont", Some(12)),
                create_test_man(6, "Hugo", "Dupont", None),
                create_test_woman(8, "Lina", "Dupont", Some(24)).with_conjoint(30),
            ],
            grand_pere_paternel: Some(create_test_man(1, "Jean", "Dupont", Some(70)).with_conjoint(2)),
            grand_mere_paternelle: Some(
                create_test_woman(2, "Odette", "Dupont", Some(68)).with_conjoint(1),
            ),
            grand_pere_maternel: None,
            grand_mere_maternelle: Some(create_test_woman(11, "Rose", "Martin", Some(72))),
        }
    }

    #[test]
    fn test_family_title() {
        assert_eq!(create_test_family().title(), "Famille de Pierre Dupont");
        assert_eq!(Family::default().title(), "Famille de");
    }

    #[test]
    fn test_title_follows_father_name() {
        let mut family = create_test_family();
        family.pere = family.pere.map(|mut pere| {
            pere.first_name = "Jean-Pierre".to_string();
            pere
        });

        assert_eq!(family.title(), "Famille de Jean-Pierre Dupont");
    }

    #[test]
    fn test_slot_order() {
        let roles: Vec<FamilyRole> = create_test_family()
            .slots()
            .into_iter()
            .map(|slot| slot.role)
            .collect();

        assert_eq!(
            roles,
            vec![
                FamilyRole::PaternalGrandfather,
                FamilyRole::PaternalGrandmother,
                FamilyRole::MaternalGrandfather,
                FamilyRole::MaternalGrandmother,
                FamilyRole::Father,
                FamilyRole::Mother,
                FamilyRole::Child,
                FamilyRole::Child,
                FamilyRole::Child,
            ]
        );
    }

    #[test]
    fn test_children_oldest_first() {
        let ids: Vec<i64> = create_test_family()
            .children()
            .into_iter()
            .filter_map(|slot| slot.person.map(|p| p.id))
            .collect();

        // Unknown age goes last
        assert_eq!(ids, vec![8, 7, 6]);
    }

    #[test]
    fn test_navigation_targets() {
        let targets: Vec<(FamilyRole, Option<i64>)> = create_test_family()
            .navigation_targets()
            .into_iter()
            .map(|(slot, target)| (slot.role, target))
            .collect();

        assert_eq!(
            targets,
            vec![
                (FamilyRole::PaternalGrandfather, Some(1)),
                (FamilyRole::PaternalGrandmother, Some(1)),
                (FamilyRole::MaternalGrandfather, None),
                (FamilyRole::MaternalGrandmother, None),
                (FamilyRole::Father, None),
                (FamilyRole::Mother, None),
                (FamilyRole::Child, Some(30)),
                (FamilyRole::Child, None),
                (FamilyRole::Child, None),
            ]
        );
    }

    #[test]
    fn test_parse_family_payload() {
        let json = r#"{
            "pere": {"id": 3, "first_name": "Pierre", "last_name": "Dupont", "gender": "Homme"},
            "mere": {"id": 4, "first_name": "Claire", "last_name": "Martin", "gender": "Femme", "conjointId": 3},
            "enfants": [
                {"id": 6, "first_name": "Hugo", "last_name": "Dupont", "gender": "Homme", "age": 15}
            ],
            "grand_pere_paternel": null
        }"#;

        let family = parse_family(json).unwrap();

        assert_eq!(family.title(), "Famille de Pierre Dupont");
        assert_eq!(family.enfants.len(), 1);
        assert!(family.grand_mere_maternelle.is_none());
        assert_eq!(family.mere.unwrap().conjoint_id, Some(3));
    }

    #[test]
    fn test_slot_serializes_with_role_label() {
        let parents = create_test_family().parents();
        let value = serde_json::to_value(&parents[0]).unwrap();

        assert_eq!(value["role"], "Père");
        assert_eq!(value["personne"]["id"], 3);
        assert_eq!(value["personne"]["conjointId"], 4);
    }
}
